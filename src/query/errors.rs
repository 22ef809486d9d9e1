//! Query construction error types.

use thiserror::Error;

/// Result type for query construction
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors raised while normalizing raw query parameters.
///
/// Callers must supply exactly one date form: an exact date, or a start and
/// end pair. Anything else is a caller error, terminal for the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Both an exact date and a range were supplied
    #[error("conflicting date predicates: give an exact date or a date range, not both")]
    ConflictingDates,

    /// No date form was supplied
    #[error("missing date predicate: give an exact date or a start and end date")]
    MissingDatePredicate,

    /// Only one end of a range was supplied
    #[error("incomplete date range: both a start and an end date are required")]
    IncompleteRange,
}
