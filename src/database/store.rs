//! In-memory indices over loaded close-approach records.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use crate::models::{ApproachEvent, Body, BodyFields};

/// The two lookup structures used for query resolution.
///
/// - date index: approach date -> body names, in load order (duplicates
///   possible when a body approaches twice on one date)
/// - available set: body name -> the unique owned [`Body`] instance
///
/// The store is built once by the loader and then consumed destructively by
/// the searcher: [`IndexStore::take_available`] removes a body for good, so
/// each body is returned at most once for the lifetime of the store. Clone
/// the store if repeatable queries are needed.
#[derive(Debug, Clone, Default)]
pub struct IndexStore {
    by_date: BTreeMap<NaiveDate, Vec<String>>,
    available: HashMap<String, Body>,
    event_count: usize,
}

impl IndexStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one source row: indexes the event date and either registers a
    /// new body or appends the event to the first-seen instance.
    pub fn ingest(&mut self, fields: BodyFields, event: ApproachEvent) {
        self.by_date
            .entry(event.date)
            .or_default()
            .push(event.body_name.clone());

        let body = self
            .available
            .entry(fields.name.clone())
            .or_insert_with(|| Body::new(fields));
        body.record_approach(event);

        self.event_count += 1;
    }

    /// Body names indexed under the given date, in load order. A missing
    /// date key yields an empty slice, never an error.
    pub fn names_on(&self, date: NaiveDate) -> Vec<String> {
        self.by_date.get(&date).cloned().unwrap_or_default()
    }

    /// Body names indexed under `[start, end]` inclusive, ascending by date
    /// and in load order within a date. An inverted range yields no names.
    pub fn names_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<String> {
        if start > end {
            return Vec::new();
        }
        self.by_date
            .range(start..=end)
            .flat_map(|(_, names)| names.iter().cloned())
            .collect()
    }

    /// Removes and returns the named body from the available set.
    ///
    /// This is the mutating seam behind the one-shot result contract: once
    /// taken, a body can never be returned by a later resolution against
    /// this store.
    pub fn take_available(&mut self, name: &str) -> Option<Body> {
        self.available.remove(name)
    }

    /// Whether the named body is still available.
    pub fn is_available(&self, name: &str) -> bool {
        self.available.contains_key(name)
    }

    /// Number of bodies still available.
    pub fn available_count(&self) -> usize {
        self.available.len()
    }

    /// Number of approach events ingested.
    pub fn event_count(&self) -> usize {
        self.event_count
    }

    /// Earliest and latest indexed approach dates, if any rows were loaded.
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.by_date.keys().next()?;
        let last = self.by_date.keys().next_back()?;
        Some((*first, *last))
    }
}
