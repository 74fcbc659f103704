//! Catalog error types

use thiserror::Error;

use crate::storage::StorageError;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors surfaced by catalog operations
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Input rejected before storage is touched (id < 1, empty fields)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Id-based lookup found no record. User-facing, not a crash; the
    /// store is never mutated on this path.
    #[error("book with id {0} not found")]
    BookNotFound(u64),

    /// Status text outside the known label set
    #[error("unknown status '{0}'")]
    InvalidStatus(String),

    /// Storage accessor failure
    #[error(transparent)]
    Storage(#[from] StorageError),
}
