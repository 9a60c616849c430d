use std::time::Duration;

/// Deployment the client talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Production,
    Local,
}

impl Environment {
    /// Parse environment from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Some(Self::Production),
            "local" | "dev" | "development" => Some(Self::Local),
            _ => None,
        }
    }

    /// Get string representation
    pub fn as_str(&self) -> &str {
        match self {
            Self::Production => "production",
            Self::Local => "local",
        }
    }

    /// Release builds talk to production, debug builds to a local backend
    pub fn for_build() -> Self {
        if cfg!(debug_assertions) {
            Self::Local
        } else {
            Self::Production
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            Self::Production => PRODUCTION_API_URL,
            Self::Local => LOCAL_API_URL,
        }
    }
}

/// Hosted backend
pub const PRODUCTION_API_URL: &str = "https://omarmubaidin.pythonanywhere.com";

/// Backend development server
pub const LOCAL_API_URL: &str = "http://127.0.0.1:5000";

pub const HEALTH_PATH: &str = "/health";
pub const CHAT_PATH: &str = "/api/chat";

/// Upper bound on every request; hitting it is a transport failure
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Normalize a base URL: drop trailing slashes and a pasted endpoint path
pub fn normalize_base_url(url: &str) -> String {
    let mut base = url.trim().trim_end_matches('/');
    for endpoint in [CHAT_PATH, HEALTH_PATH] {
        if let Some(stripped) = base.strip_suffix(endpoint) {
            base = stripped.trim_end_matches('/');
        }
    }
    base.to_string()
}
