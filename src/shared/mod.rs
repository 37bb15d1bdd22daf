//! Cross-cutting error types, the crate-wide `Result` alias, and file-safety checks.

pub mod error;
pub mod security;

/// Result with `anyhow::Error`, used across the application and adapter layers.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
