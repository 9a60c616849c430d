// Logging module - HTTP exchange debugging
pub mod request_logger;

pub use request_logger::{log_request, log_response, MAX_LOGGED_BODY_CHARS};

/// Safely truncate a string to a maximum number of characters
pub fn safe_truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        // Reserve space for "..." suffix
        let trunc_chars = max_chars.saturating_sub(3);
        format!("{}...", s.chars().take(trunc_chars).collect::<String>())
    }
}

/// Pretty-print a JSON body, falling back to the raw text
pub fn pretty_body(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| serde_json::to_string_pretty(&value).ok())
        .unwrap_or_else(|| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_truncate_short_string_untouched() {
        assert_eq!(safe_truncate("hello", 10), "hello");
    }

    #[test]
    fn test_safe_truncate_counts_chars_not_bytes() {
        let arabic = "مرحبا بك في الجامعة";
        let truncated = safe_truncate(arabic, 8);
        assert_eq!(truncated.chars().count(), 8);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn test_safe_truncate_tiny_limit() {
        assert_eq!(safe_truncate("abcdef", 2), "...");
    }

    #[test]
    fn test_pretty_body_formats_json() {
        let pretty = pretty_body(r#"{"response":"hi"}"#);
        assert!(pretty.contains("\n"));
        assert!(pretty.contains("\"response\": \"hi\""));
    }

    #[test]
    fn test_pretty_body_keeps_plain_text() {
        assert_eq!(pretty_body("Bad Gateway"), "Bad Gateway");
    }
}
