use colored::Colorize;
use serde::Serialize;

use crate::{pretty_body, safe_truncate};

/// Bodies longer than this are truncated in console dumps
pub const MAX_LOGGED_BODY_CHARS: usize = 5000;

/// Log HTTP request details for debugging (console output)
pub fn log_request<T: Serialize>(method: &str, url: &str, body: Option<&T>, verbose: bool) {
    log::debug!("{} {}", method, url);

    if !verbose {
        return;
    }

    eprintln!("\n{}", "═".repeat(80).bright_cyan());
    eprintln!("{}", "🔍 HTTP REQUEST DEBUG".bright_cyan().bold());
    eprintln!("{}", "═".repeat(80).bright_cyan());

    eprintln!("{}: {}", "Method".bright_yellow(), method);

    eprintln!("{}: {}", "URL".bright_yellow(), url);
    if let Ok(parsed) = reqwest::Url::parse(url) {
        eprintln!("{}: {}", "Host".bright_yellow(), parsed.host_str().unwrap_or("unknown"));
        eprintln!("{}: {}", "Port".bright_yellow(), port_label(&parsed));
        eprintln!("{}: {}", "Scheme".bright_yellow(), parsed.scheme());
    }

    if let Some(body) = body {
        eprintln!("\n{}", "Headers:".bright_yellow());
        eprintln!("  Content-Type: application/json");

        eprintln!("\n{}", "Request Body:".bright_yellow());
        match serde_json::to_string_pretty(body) {
            Ok(json) => print_truncated(&json),
            Err(e) => eprintln!("{}", format!("Error serializing request: {}", e).red()),
        }
    }

    eprintln!("{}", "═".repeat(80).bright_cyan());
    eprintln!();
}

/// Log HTTP response details for debugging (console output)
pub fn log_response(
    status: &reqwest::StatusCode,
    headers: &reqwest::header::HeaderMap,
    body: &str,
    verbose: bool,
) {
    log::debug!("response {} ({} bytes)", status.as_u16(), body.len());

    if !verbose {
        return;
    }

    eprintln!("\n{}", "═".repeat(80).bright_green());
    eprintln!("{}", "📥 HTTP RESPONSE DEBUG".bright_green().bold());
    eprintln!("{}", "═".repeat(80).bright_green());

    eprintln!("{}: {} {}",
        "Status".bright_yellow(),
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown")
    );

    eprintln!("\n{}", "Headers:".bright_yellow());
    for (name, value) in headers.iter() {
        if let Ok(val_str) = value.to_str() {
            eprintln!("  {}: {}", name.as_str().bright_white(), val_str);
        }
    }

    eprintln!("\n{}", "Response Body:".bright_yellow());
    print_truncated(&pretty_body(body));

    eprintln!("{}", "═".repeat(80).bright_green());
    eprintln!();
}

/// Explicit port, or the scheme's default marked as such
fn port_label(url: &reqwest::Url) -> String {
    match (url.port(), url.port_or_known_default()) {
        (Some(port), _) => port.to_string(),
        (None, Some(port)) => format!("{} (default)", port),
        (None, None) => "unknown".to_string(),
    }
}

fn print_truncated(text: &str) {
    if text.chars().count() > MAX_LOGGED_BODY_CHARS {
        eprintln!("{}", safe_truncate(text, MAX_LOGGED_BODY_CHARS));
        eprintln!("\n{}", format!("... (truncated, total {} bytes)", text.len()).bright_black());
    } else {
        eprintln!("{}", text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> reqwest::Url {
        reqwest::Url::parse(s).unwrap()
    }

    #[test]
    fn test_port_label() {
        assert_eq!(port_label(&url("http://127.0.0.1:5000/api/chat")), "5000");
        assert_eq!(port_label(&url("https://omarmubaidin.pythonanywhere.com")), "443 (default)");
        assert_eq!(port_label(&url("http://localhost/health")), "80 (default)");
    }
}
