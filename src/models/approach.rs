//! Close-approach event records.

use std::fmt;

use chrono::NaiveDate;

/// One dated close approach, owned by exactly one [`Body`](super::Body).
///
/// Events are created during load, one per source row, and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ApproachEvent {
    /// Name of the owning body (back-reference, not ownership).
    pub body_name: String,
    /// Calendar date of closest approach.
    pub date: NaiveDate,
    /// Miss distance at closest approach, in kilometers.
    pub miss_distance_km: f64,
}

impl ApproachEvent {
    /// Creates an event for the named body.
    pub fn new(body_name: impl Into<String>, date: NaiveDate, miss_distance_km: f64) -> Self {
        Self {
            body_name: body_name.into(),
            date,
            miss_distance_km,
        }
    }
}

impl fmt::Display for ApproachEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} approached within {} km on {}",
            self.body_name, self.miss_distance_km, self.date
        )
    }
}
