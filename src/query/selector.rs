//! Canonical query representation.

use chrono::NaiveDate;

/// The date predicate of a query, exhaustively matched by the searcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePredicate {
    /// Match bodies approaching on exactly this date.
    Exact(NaiveDate),
    /// Match bodies approaching on any date in `[start, end]`, both ends
    /// inclusive. `start > end` is legal and resolves to nothing.
    Range { start: NaiveDate, end: NaiveDate },
}

/// Which entity shape a query renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetKind {
    #[default]
    Body,
    ApproachEvent,
}

/// Canonical, immutable form of a query after normalization.
///
/// Built only by [`QueryParams::build`](super::QueryParams::build); fields
/// are read-only from here on.
#[derive(Debug, Clone, PartialEq)]
pub struct Selector {
    date_predicate: DatePredicate,
    max_results: usize,
    filter_tokens: Vec<String>,
    target_kind: TargetKind,
}

impl Selector {
    pub(crate) fn new(
        date_predicate: DatePredicate,
        max_results: usize,
        filter_tokens: Vec<String>,
        target_kind: TargetKind,
    ) -> Self {
        Self {
            date_predicate,
            max_results,
            filter_tokens,
            target_kind,
        }
    }

    pub fn date_predicate(&self) -> DatePredicate {
        self.date_predicate
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// Raw filter tokens in input order; parsed by the filter engine.
    pub fn filter_tokens(&self) -> &[String] {
        &self.filter_tokens
    }

    pub fn target_kind(&self) -> TargetKind {
        self.target_kind
    }
}
