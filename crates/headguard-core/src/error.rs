//! Error types for HeadGuard

use thiserror::Error;

/// HeadGuard error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Guard name '{guard}' exceeds max permissible length {limit}")]
    GuardTooLong { guard: String, limit: usize },

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

/// Result type alias for HeadGuard
pub type Result<T> = std::result::Result<T, Error>;
