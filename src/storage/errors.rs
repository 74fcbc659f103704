//! Storage error types

use thiserror::Error;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors raised by the storage file accessor
#[derive(Debug, Error)]
pub enum StorageError {
    /// File missing, unreadable, or not well-formed JSON.
    /// Fatal to the current operation; nothing is recovered.
    #[error("storage file '{path}' is missing or corrupt: {reason}")]
    Corrupt {
        /// Path of the offending file
        path: String,
        /// What went wrong while reading or parsing
        reason: String,
    },

    /// The document could not be written back
    #[error("failed to write storage file '{path}': {source}")]
    WriteFailed {
        /// Path of the offending file
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl StorageError {
    /// Corruption error for the file at `path`
    pub fn corrupt(path: &std::path::Path, reason: impl Into<String>) -> Self {
        StorageError::Corrupt {
            path: path.display().to_string(),
            reason: reason.into(),
        }
    }

    /// Write failure for the file at `path`
    pub fn write_failed(path: &std::path::Path, source: std::io::Error) -> Self {
        StorageError::WriteFailed {
            path: path.display().to_string(),
            source,
        }
    }
}
