//! CLI-specific error types

use thiserror::Error;

use crate::catalog::CatalogError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors surfaced by the CLI layer
#[derive(Debug, Error)]
pub enum CliError {
    /// stdin/stdout failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A prompted value could not be parsed as a number
    #[error("не удалось разобрать число: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    /// Catalog operation failure
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
