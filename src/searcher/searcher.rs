//! Selector resolution against the index store.

use chrono::NaiveDate;

use crate::database::IndexStore;
use crate::models::Body;
use crate::query::{DatePredicate, Selector};

use super::errors::SearcherResult;
use super::filters::FilterSet;

/// Resolves selectors against a mutable index store.
///
/// Resolution flow, in order:
///
/// 1. parse filter tokens (the only step that can fail, done before the
///    store is touched)
/// 2. date resolution: take matching bodies out of the available set
/// 3. body-scoped filter pass, then event-scoped filter pass
/// 4. truncate to the selector's result cap
///
/// Resolution consumes the store: a body returned once has left the
/// available set and will never be returned again, even by a later
/// overlapping query. That is the one-row-per-physical-body contract, not a
/// bug; clone or rebuild the store for repeatable queries.
#[derive(Debug)]
pub struct Searcher<'a> {
    store: &'a mut IndexStore,
}

impl<'a> Searcher<'a> {
    /// Wraps a mutable handle to the store.
    pub fn new(store: &'a mut IndexStore) -> Self {
        Self { store }
    }

    /// Resolves one selector, consuming every matched body from the store.
    ///
    /// Empty results at any stage are success; the only errors are bad
    /// filter tokens.
    pub fn resolve_once(&mut self, selector: &Selector) -> SearcherResult<Vec<Body>> {
        let filters = FilterSet::parse(selector.filter_tokens())?;

        let matched = match selector.date_predicate() {
            DatePredicate::Exact(date) => self.consume_on(date),
            DatePredicate::Range { start, end } => self.consume_between(start, end),
        };

        let mut results = filters.apply_event_pass(filters.apply_body_pass(matched));
        results.truncate(selector.max_results());
        Ok(results)
    }

    /// Takes every still-available body listed under the date. Duplicate
    /// date entries for one body collapse to a single result.
    fn consume_on(&mut self, date: NaiveDate) -> Vec<Body> {
        let names = self.store.names_on(date);
        self.consume_names(names)
    }

    /// Takes every still-available body approaching within `[start, end]`,
    /// ascending by date. An inverted range yields nothing.
    fn consume_between(&mut self, start: NaiveDate, end: NaiveDate) -> Vec<Body> {
        if start > end {
            return Vec::new();
        }
        let names = self.store.names_between(start, end);
        self.consume_names(names)
    }

    fn consume_names(&mut self, names: Vec<String>) -> Vec<Body> {
        names
            .into_iter()
            .filter_map(|name| self.store.take_available(&name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ApproachEvent, BodyFields};
    use crate::query::QueryParams;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn ingest(store: &mut IndexStore, name: &str, day: &str, miss_km: f64) {
        let fields = BodyFields {
            id: format!("id-{}", name),
            name: name.to_string(),
            hazardous: false,
            diameter_min_km: 0.5,
        };
        store.ingest(fields, ApproachEvent::new(name, date(day), miss_km));
    }

    fn exact(day: &str) -> Selector {
        QueryParams {
            date: Some(date(day)),
            ..Default::default()
        }
        .build()
        .unwrap()
    }

    #[test]
    fn test_exact_date_consumes_each_body_once() {
        let mut store = IndexStore::new();
        ingest(&mut store, "Eros", "2023-01-01", 100.0);
        ingest(&mut store, "Eros", "2023-01-01", 200.0);
        ingest(&mut store, "Apophis", "2023-01-01", 300.0);

        let results = Searcher::new(&mut store).resolve_once(&exact("2023-01-01")).unwrap();
        let names: Vec<_> = results.iter().map(|b| b.name()).collect();
        assert_eq!(names, vec!["Eros", "Apophis"]);
    }

    #[test]
    fn test_missing_date_is_empty_success() {
        let mut store = IndexStore::new();
        ingest(&mut store, "Eros", "2023-01-01", 100.0);

        let results = Searcher::new(&mut store).resolve_once(&exact("2024-06-06")).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_bad_filter_leaves_store_untouched() {
        let mut store = IndexStore::new();
        ingest(&mut store, "Eros", "2023-01-01", 100.0);

        let selector = QueryParams {
            date: Some(date("2023-01-01")),
            filters: vec!["distance>1000".to_string()],
            ..Default::default()
        }
        .build()
        .unwrap();

        assert!(Searcher::new(&mut store).resolve_once(&selector).is_err());
        // The failed resolution must not have consumed anything.
        assert!(store.is_available("Eros"));
    }
}
