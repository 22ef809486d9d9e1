//! Typed field filters over resolved bodies.
//!
//! Raw tokens have the literal form `field:operator:value`. The field table
//! is fixed: `diameter` -> minimum estimated diameter, `distance` -> miss
//! distance, `is_hazardous` -> hazard flag. Unknown fields are an error,
//! never silently ignored.
//!
//! Filters are partitioned by the entity shape they inspect: `distance` is
//! event-scoped, the rest are body-scoped. The searcher runs the two groups
//! as distinct passes, each a stable retain over the result list.

use std::cmp::Ordering;

use crate::models::Body;
use crate::query::TargetKind;

use super::errors::{SearcherError, SearcherResult};

/// Filterable fields, mapped from token names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    /// `diameter` -> minimum estimated diameter, km
    Diameter,
    /// `distance` -> miss distance, km
    Distance,
    /// `is_hazardous` -> hazard flag
    Hazardous,
}

impl FilterField {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "diameter" => Some(Self::Diameter),
            "distance" => Some(Self::Distance),
            "is_hazardous" => Some(Self::Hazardous),
            _ => None,
        }
    }

    /// The entity shape this field belongs to. `distance` describes an
    /// approach event; everything else describes the body itself.
    pub fn applies_to(&self) -> TargetKind {
        match self {
            Self::Distance => TargetKind::ApproachEvent,
            Self::Diameter | Self::Hazardous => TargetKind::Body,
        }
    }
}

/// A coerced filter value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterValue {
    Number(f64),
    Flag(bool),
}

impl FilterValue {
    /// Compares two values of the same kind; mixed kinds (and NaN) are
    /// incomparable and match nothing.
    fn compare(&self, other: &FilterValue) -> Option<Ordering> {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.partial_cmp(b),
            (Self::Flag(a), Self::Flag(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

/// Comparison operator carrying its coerced bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterOp {
    Eq(FilterValue),
    Gt(FilterValue),
    Lt(FilterValue),
    Gte(FilterValue),
    Lte(FilterValue),
}

impl FilterOp {
    fn parse(symbol: &str, value: FilterValue) -> Option<Self> {
        match symbol {
            "=" => Some(Self::Eq(value)),
            ">" => Some(Self::Gt(value)),
            "<" => Some(Self::Lt(value)),
            ">=" => Some(Self::Gte(value)),
            "<=" => Some(Self::Lte(value)),
            _ => None,
        }
    }

    fn accepts(&self, actual: FilterValue) -> bool {
        match self {
            Self::Eq(bound) => actual.compare(bound) == Some(Ordering::Equal),
            Self::Gt(bound) => actual.compare(bound) == Some(Ordering::Greater),
            Self::Lt(bound) => actual.compare(bound) == Some(Ordering::Less),
            Self::Gte(bound) => {
                matches!(actual.compare(bound), Some(Ordering::Greater | Ordering::Equal))
            }
            Self::Lte(bound) => {
                matches!(actual.compare(bound), Some(Ordering::Less | Ordering::Equal))
            }
        }
    }
}

/// One typed predicate bound to a field, operator, and coerced value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Filter {
    field: FilterField,
    op: FilterOp,
}

impl Filter {
    /// Parses one `field:operator:value` token.
    ///
    /// Coercion is per field: the hazard flag takes `true` iff the value is
    /// exactly `True` (any other literal means false); all other fields
    /// require a float.
    pub fn parse_token(token: &str) -> SearcherResult<Self> {
        let parts: Vec<&str> = token.split(':').collect();
        if parts.len() != 3 {
            return Err(SearcherError::MalformedToken(token.to_string()));
        }
        let (field, symbol, value) = (parts[0], parts[1], parts[2]);

        let field = FilterField::parse(field)
            .ok_or_else(|| SearcherError::UnknownField(token.to_string()))?;
        let value = match field {
            FilterField::Hazardous => FilterValue::Flag(value == "True"),
            FilterField::Diameter | FilterField::Distance => FilterValue::Number(
                value.parse().map_err(|_| SearcherError::InvalidValue {
                    token: token.to_string(),
                    value: value.to_string(),
                })?,
            ),
        };
        let op = FilterOp::parse(symbol, value)
            .ok_or_else(|| SearcherError::UnknownOperator(token.to_string()))?;

        Ok(Self { field, op })
    }

    /// The entity shape this filter inspects.
    pub fn applies_to(&self) -> TargetKind {
        self.field.applies_to()
    }

    /// Whether the body satisfies this predicate. Event-scoped `distance`
    /// filters compare against the body's last-loaded miss distance.
    pub fn matches(&self, body: &Body) -> bool {
        let actual = match self.field {
            FilterField::Diameter => FilterValue::Number(body.diameter_min_km()),
            FilterField::Distance => FilterValue::Number(body.miss_distance_km()),
            FilterField::Hazardous => FilterValue::Flag(body.is_hazardous()),
        };
        self.op.accepts(actual)
    }

    /// Drops bodies failing the predicate; order is preserved.
    pub fn apply(&self, results: Vec<Body>) -> Vec<Body> {
        results.into_iter().filter(|body| self.matches(body)).collect()
    }
}

/// Parsed filters partitioned by the entity shape they inspect, each group
/// in input token order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSet {
    body: Vec<Filter>,
    event: Vec<Filter>,
}

impl FilterSet {
    /// Parses and partitions raw tokens. The first bad token fails the
    /// whole set.
    pub fn parse(tokens: &[String]) -> SearcherResult<Self> {
        let mut set = Self::default();
        for token in tokens {
            let filter = Filter::parse_token(token)?;
            match filter.applies_to() {
                TargetKind::ApproachEvent => set.event.push(filter),
                TargetKind::Body => set.body.push(filter),
            }
        }
        Ok(set)
    }

    /// Body-scoped filters in input order.
    pub fn body_filters(&self) -> &[Filter] {
        &self.body
    }

    /// Event-scoped filters in input order.
    pub fn event_filters(&self) -> &[Filter] {
        &self.event
    }

    /// Applies the body-scoped group, one filter at a time.
    pub fn apply_body_pass(&self, results: Vec<Body>) -> Vec<Body> {
        self.body
            .iter()
            .fold(results, |survivors, filter| filter.apply(survivors))
    }

    /// Applies the event-scoped group, one filter at a time.
    pub fn apply_event_pass(&self, results: Vec<Body>) -> Vec<Body> {
        self.event
            .iter()
            .fold(results, |survivors, filter| filter.apply(survivors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ApproachEvent, BodyFields};
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn body(name: &str, hazardous: bool, diameter: f64, miss_km: f64) -> Body {
        let mut body = Body::new(BodyFields {
            id: format!("id-{}", name),
            name: name.to_string(),
            hazardous,
            diameter_min_km: diameter,
        });
        body.record_approach(ApproachEvent::new(name, date("2023-01-01"), miss_km));
        body
    }

    fn names(results: &[Body]) -> Vec<&str> {
        results.iter().map(|b| b.name()).collect()
    }

    #[test]
    fn test_parse_numeric_filter() {
        let filter = Filter::parse_token("diameter:>=:0.5").unwrap();
        assert_eq!(filter.applies_to(), TargetKind::Body);
        assert!(filter.matches(&body("A", false, 0.5, 1.0)));
        assert!(!filter.matches(&body("B", false, 0.4, 1.0)));
    }

    #[test]
    fn test_distance_is_event_scoped() {
        let filter = Filter::parse_token("distance:<:1000.0").unwrap();
        assert_eq!(filter.applies_to(), TargetKind::ApproachEvent);
    }

    #[test]
    fn test_hazard_value_coercion() {
        let keep_hazardous = Filter::parse_token("is_hazardous:=:True").unwrap();
        assert!(keep_hazardous.matches(&body("A", true, 0.5, 1.0)));
        assert!(!keep_hazardous.matches(&body("B", false, 0.5, 1.0)));

        // Any literal other than the exact token `True` means false.
        for literal in ["true", "TRUE", "yes", "1", ""] {
            let filter = Filter::parse_token(&format!("is_hazardous:=:{}", literal)).unwrap();
            assert!(!filter.matches(&body("A", true, 0.5, 1.0)), "{}", literal);
            assert!(filter.matches(&body("B", false, 0.5, 1.0)), "{}", literal);
        }
    }

    #[test]
    fn test_malformed_token_missing_colons() {
        let err = Filter::parse_token("distance>1000").unwrap_err();
        assert_eq!(
            err,
            SearcherError::MalformedToken("distance>1000".to_string())
        );
    }

    #[test]
    fn test_too_many_parts_is_malformed() {
        let err = Filter::parse_token("distance:>:1000:km").unwrap_err();
        assert!(matches!(err, SearcherError::MalformedToken(_)));
    }

    #[test]
    fn test_unknown_field_names_token() {
        let err = Filter::parse_token("mass:>:10").unwrap_err();
        assert_eq!(err, SearcherError::UnknownField("mass:>:10".to_string()));
    }

    #[test]
    fn test_unknown_operator() {
        let err = Filter::parse_token("diameter:!:10").unwrap_err();
        assert!(matches!(err, SearcherError::UnknownOperator(_)));
    }

    #[test]
    fn test_non_numeric_value_for_numeric_field() {
        let err = Filter::parse_token("diameter:>:wide").unwrap_err();
        assert_eq!(
            err,
            SearcherError::InvalidValue {
                token: "diameter:>:wide".to_string(),
                value: "wide".to_string(),
            }
        );
    }

    #[test]
    fn test_partition_keeps_input_order() {
        let tokens = vec![
            "diameter:>:0.1".to_string(),
            "distance:<:5000.0".to_string(),
            "is_hazardous:=:True".to_string(),
        ];
        let set = FilterSet::parse(&tokens).unwrap();
        assert_eq!(set.body_filters().len(), 2);
        assert_eq!(set.event_filters().len(), 1);
        assert_eq!(set.body_filters()[0].applies_to(), TargetKind::Body);
    }

    #[test]
    fn test_apply_preserves_order() {
        let filter = Filter::parse_token("diameter:>:0.2").unwrap();
        let results = vec![
            body("A", false, 0.3, 1.0),
            body("B", false, 0.1, 1.0),
            body("C", false, 0.5, 1.0),
        ];
        assert_eq!(names(&filter.apply(results)), vec!["A", "C"]);
    }

    #[test]
    fn test_contradictory_distance_filters_empty_the_list() {
        let tokens = vec![
            "distance:<:1000000".to_string(),
            "distance:>=:1000000".to_string(),
        ];
        let set = FilterSet::parse(&tokens).unwrap();
        let results = vec![body("A", false, 0.3, 900000.0), body("B", false, 0.3, 2000000.0)];
        assert!(set.apply_event_pass(results).is_empty());
    }

    #[test]
    fn test_equality_on_floats() {
        let filter = Filter::parse_token("diameter:=:0.3").unwrap();
        assert!(filter.matches(&body("A", false, 0.3, 1.0)));
        assert!(!filter.matches(&body("B", false, 0.30001, 1.0)));
    }
}
