//! CLI-specific error types.
//!
//! Every subsystem failure surfaces here as one user-facing message; the
//! entry point prints it to stderr and exits non-zero.

use thiserror::Error;

use crate::database::DatabaseError;
use crate::query::QueryError;
use crate::searcher::SearcherError;
use crate::writer::WriterError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file problem
    #[error("configuration error: {0}")]
    Config(String),

    /// No dataset path from flags or config
    #[error("no dataset path: pass --data or set data_path in the config file")]
    MissingDataPath,

    /// Dataset could not be loaded
    #[error(transparent)]
    Database(#[from] DatabaseError),

    /// Query parameters could not be normalized
    #[error(transparent)]
    Query(#[from] QueryError),

    /// Filter tokens could not be parsed
    #[error(transparent)]
    Searcher(#[from] SearcherError),

    /// Results could not be rendered
    #[error(transparent)]
    Writer(#[from] WriterError),
}
