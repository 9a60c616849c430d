use async_trait::async_trait;

use athar_types::{ChatReply, ChatRequest};

use crate::error::ApiError;

pub mod http;

/// Backend trait - the controller's only view of the chatbot server
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// One idempotent health probe; any 2xx is healthy
    async fn health(&self) -> Result<(), ApiError>;

    /// Send one user message with its conversation context
    async fn chat(&self, request: &ChatRequest) -> Result<ChatReply, ApiError>;
}
