//! Core error types
//!
//! Hydration-time parse failures are deliberately *not* represented
//! here: the history store recovers from them locally by starting
//! empty. Errors surface only when a mutation cannot be persisted.

use thiserror::Error;

/// Core errors shared across the workspace
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error from a storage backend
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Storage backend error
    #[error("storage error: {0}")]
    Storage(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is an I/O error.
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io(_))
    }

    /// Check if this is a serialization error.
    pub fn is_serialization(&self) -> bool {
        matches!(self, Error::Serialization(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
