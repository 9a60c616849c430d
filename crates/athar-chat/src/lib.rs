//! Chat session management for Athar Assistant
//!
//! This crate owns the message log, the single in-flight exchange guard,
//! connectivity tracking and the classification of failed exchanges into
//! user-facing bot messages.

pub mod controller;
pub mod errors;
pub mod session;

// Re-export commonly used types
pub use controller::{ChatController, SubmitOutcome};
pub use errors::ExchangeError;
pub use session::{ChatSession, ExchangeOutcome, ExchangeState, IgnoreReason};
