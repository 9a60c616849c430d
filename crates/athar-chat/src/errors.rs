use athar_api::ApiError;
use thiserror::Error;

pub const VALIDATION_TEXT: &str =
    "I couldn't understand your request. Please try rephrasing your question.";
pub const SERVER_TEXT: &str = "I encountered an internal error. Please try again in a moment.";
pub const TRANSPORT_TEXT: &str =
    "I can't reach the server right now. Please check your internet connection and try again.";
pub const UNKNOWN_TEXT: &str =
    "I'm sorry, I'm having trouble connecting to the server right now. Please try again later.";

/// How a failed exchange is reported to the user
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExchangeError {
    /// HTTP 400
    #[error("request rejected as invalid")]
    Validation,
    /// HTTP 500
    #[error("internal server error")]
    Server,
    /// Any other non-2xx status carrying an `error` payload
    #[error("backend error: {0}")]
    Application(String),
    /// No response at all
    #[error("server unreachable")]
    Transport,
    #[error("unexpected failure")]
    Unknown,
}

impl ExchangeError {
    /// Classify a backend failure. Status checks come before the payload check.
    pub fn classify(err: &ApiError) -> Self {
        match err {
            ApiError::Status { status: 400, .. } => Self::Validation,
            ApiError::Status { status: 500, .. } => Self::Server,
            ApiError::Status { error: Some(message), .. } => Self::Application(message.clone()),
            ApiError::Transport(_) => Self::Transport,
            ApiError::Status { error: None, .. }
            | ApiError::Decode(_)
            | ApiError::ClientBuild(_) => Self::Unknown,
        }
    }

    /// Text of the bot message that reports this failure
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation => VALIDATION_TEXT.to_string(),
            Self::Server => SERVER_TEXT.to_string(),
            Self::Application(message) => format!("Error: {}", message),
            Self::Transport => TRANSPORT_TEXT.to_string(),
            Self::Unknown => UNKNOWN_TEXT.to_string(),
        }
    }

    /// Only a missing response says anything about connectivity
    pub fn clears_connectivity(&self) -> bool {
        matches!(self, Self::Transport)
    }
}
