//! Normalization of raw query parameters.

use chrono::NaiveDate;

use super::errors::{QueryError, QueryResult};
use super::selector::{DatePredicate, Selector, TargetKind};

/// Result cap applied when the caller does not specify one.
pub const DEFAULT_RESULT_COUNT: usize = 10;

/// Raw, already-tokenized query parameters.
///
/// Dates arrive typed; there is no query language to parse. Exactly one
/// date form must be present, checked by [`QueryParams::build`].
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    /// Exact approach date.
    pub date: Option<NaiveDate>,
    /// Range start, paired with `end_date`.
    pub start_date: Option<NaiveDate>,
    /// Range end, paired with `start_date`.
    pub end_date: Option<NaiveDate>,
    /// Result cap; defaults to [`DEFAULT_RESULT_COUNT`].
    pub count: Option<usize>,
    /// Raw filter tokens in `field:operator:value` form.
    pub filters: Vec<String>,
    /// Entity shape to render.
    pub target: TargetKind,
}

impl QueryParams {
    /// Normalizes the parameters into an immutable [`Selector`].
    ///
    /// Supplying both date forms or neither is rejected here. Whether a
    /// range runs backwards is not checked; the searcher resolves an
    /// inverted range to an empty result.
    pub fn build(self) -> QueryResult<Selector> {
        let date_predicate = match (self.date, self.start_date, self.end_date) {
            (Some(_), Some(_), _) | (Some(_), _, Some(_)) => {
                return Err(QueryError::ConflictingDates)
            }
            (Some(date), None, None) => DatePredicate::Exact(date),
            (None, Some(start), Some(end)) => DatePredicate::Range { start, end },
            (None, None, None) => return Err(QueryError::MissingDatePredicate),
            (None, _, _) => return Err(QueryError::IncompleteRange),
        };

        Ok(Selector::new(
            date_predicate,
            self.count.unwrap_or(DEFAULT_RESULT_COUNT),
            self.filters,
            self.target,
        ))
    }
}
