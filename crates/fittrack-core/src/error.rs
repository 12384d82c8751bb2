//! Error types for Fittrack core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-friendly messages.

use thiserror::Error;

/// Result type alias for Fittrack operations.
pub type Result<T> = std::result::Result<T, FittrackError>;

/// Core error type for Fittrack operations.
#[derive(Debug, Error)]
pub enum FittrackError {
    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input or configuration
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic error (fallback)
    #[error("{0}")]
    Other(String),
}

impl From<std::io::Error> for FittrackError {
    fn from(err: std::io::Error) -> Self {
        FittrackError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for FittrackError {
    fn from(err: serde_json::Error) -> Self {
        FittrackError::Storage(err.to_string())
    }
}
