use thiserror::Error;

/// Failure of a single backend call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status
    #[error("server responded with status {status}")]
    Status {
        status: u16,
        /// Application error payload (`{"error": ...}`), when the body carried one
        error: Option<String>,
    },
    /// No response was received: connect, DNS, timeout or body read failure
    #[error("transport failure: {0}")]
    Transport(String),
    /// A 2xx response whose body is not the expected JSON
    #[error("malformed response body: {0}")]
    Decode(String),
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if err.is_builder() {
            ApiError::ClientBuild(err.to_string())
        } else {
            // Connect, timeout, request and body errors all mean no usable response
            ApiError::Transport(err.to_string())
        }
    }
}
