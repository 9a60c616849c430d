//! Terminal front end for Athar Assistant

pub mod app;
pub mod cli;
pub mod config;
pub mod render;

pub use cli::Cli;
pub use config::ClientConfig;
