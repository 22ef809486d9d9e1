//! Searcher error types.
//!
//! The only caller-reported failures during resolution are bad filter
//! tokens; every "no data found" condition is success with an empty
//! result.

use thiserror::Error;

/// Result type for searcher operations
pub type SearcherResult<T> = Result<T, SearcherError>;

/// Errors raised while parsing filter tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearcherError {
    /// Token does not have the field:operator:value shape
    #[error("malformed filter '{0}': expected field:operator:value")]
    MalformedToken(String),

    /// Token names a field outside the fixed filter table
    #[error("unknown filter field in '{0}'")]
    UnknownField(String),

    /// Token names an unsupported comparison operator
    #[error("unknown filter operator in '{0}'")]
    UnknownOperator(String),

    /// Numeric field given a non-numeric value
    #[error("filter '{token}': '{value}' is not a number")]
    InvalidValue { token: String, value: String },
}
