//! Unified error types for the session core.
//!
//! This module provides a clean error type that wraps internal errors
//! and presents a consistent interface to users.

use thiserror::Error;

/// All session-core errors.
///
/// This is the canonical error type for all facade operations.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Storage backend error
    #[error("storage error: {0}")]
    Storage(String),
}

/// Result type for session-core operations.
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

// Convert from internal core errors
impl From<devroad_core::Error> for Error {
    fn from(e: devroad_core::Error) -> Self {
        use devroad_core::Error as CoreError;
        match e {
            CoreError::Io(io_err) => Error::Io(io_err),
            CoreError::Serialization(msg) => Error::Serialization(msg),
            CoreError::Storage(msg) => Error::Storage(msg),
        }
    }
}

// Convert from serde_json errors
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
