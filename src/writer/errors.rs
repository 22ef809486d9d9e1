//! Writer error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for writer operations
pub type WriterResult<T> = Result<T, WriterError>;

/// Errors raised while rendering results.
#[derive(Debug, Error)]
pub enum WriterError {
    /// Console write failed
    #[error("cannot write results to the console: {0}")]
    Console(#[from] io::Error),

    /// Output file write failed
    #[error("cannot write results to {path}: {source}")]
    File { path: PathBuf, source: io::Error },
}
