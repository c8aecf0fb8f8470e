//! Error types for the Trail Forward core.

use thiserror::Error;

/// Errors that can occur in core operations.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Event not found: {0}")]
    NotFound(i64),

    #[error("No images found in the gallery")]
    ImagesNotFound,

    #[error("Gallery could not be read: {0}")]
    ImagesUnreadable(String),

    #[error("Invalid event date '{0}'")]
    InvalidDate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
