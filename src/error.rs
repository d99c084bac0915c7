//! Error types for the dictionary library

use thiserror::Error;

/// Custom error type for dictionary operations
#[derive(Error, Debug)]
pub enum DictError {
    /// Displays as the underlying I/O message
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Unknown dictionary type: {0}")]
    UnknownDictionaryType(String),
}

/// Result type alias for dictionary operations
pub type Result<T> = std::result::Result<T, DictError>;
