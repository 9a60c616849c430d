//! # athar-api
//!
//! HTTP access to the Athar university-information backend.
//!
//! - **`ChatBackend` trait**: the seam the chat controller talks through
//! - **`HttpChatBackend`**: reqwest implementation with a fixed request timeout
//! - **Environment selection**: production vs. local base URL, with overrides
//!
//! ## Example
//!
//! ```rust,no_run
//! use athar_api::{ChatBackend, Environment, HttpChatBackend};
//! use athar_types::ChatRequest;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = HttpChatBackend::new(Environment::Local.default_base_url())?;
//!     backend.health().await?;
//!
//!     let reply = backend
//!         .chat(&ChatRequest {
//!             message: "who teaches CS101".to_string(),
//!             current_professor: None,
//!         })
//!         .await?;
//!     println!("{}", reply.response);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;

pub use client::{http::HttpChatBackend, ChatBackend};
pub use config::{
    normalize_base_url, Environment, CHAT_PATH, HEALTH_PATH, LOCAL_API_URL, PRODUCTION_API_URL,
    REQUEST_TIMEOUT,
};
pub use error::ApiError;
