//! Database error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;

/// Errors raised while loading a close-approach dataset.
///
/// All variants are terminal for the current run; nothing is retried.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Source file cannot be read
    #[error("cannot read data source {path}: {source}")]
    SourceUnavailable { path: PathBuf, source: io::Error },

    /// Source has no header row
    #[error("data source {path} is empty")]
    EmptySource { path: PathBuf },

    /// Header lacks a required column
    #[error("data source is missing required column '{0}'")]
    MissingColumn(String),

    /// Data row has fewer cells than the header
    #[error("row {line}: expected {expected} cells, found {found}")]
    ShortRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// Numeric cell cannot be coerced
    #[error("row {line}, column '{column}': '{value}' is not a number")]
    InvalidNumber {
        line: usize,
        column: String,
        value: String,
    },

    /// Date cell cannot be coerced
    #[error("row {line}, column '{column}': '{value}' is not a YYYY-MM-DD date")]
    InvalidDate {
        line: usize,
        column: String,
        value: String,
    },
}
