//! Error types for the command-line layer. Generation itself never fails.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ForgeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("prompt error: {0}")]
    Prompt(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A convenience Result alias that defaults to [`ForgeError`].
pub type Result<T> = std::result::Result<T, ForgeError>;
