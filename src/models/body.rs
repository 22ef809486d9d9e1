//! Tracked near-Earth bodies.

use std::fmt;

use super::ApproachEvent;

/// Validated construction fields for a [`Body`].
///
/// The loader coerces raw source cells into this struct before a body is
/// ever created, so unparseable data fails at load time instead of turning
/// into NaN downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyFields {
    /// Dataset identifier.
    pub id: String,
    /// Unique body name (the index key).
    pub name: String,
    /// Potentially-hazardous flag.
    pub hazardous: bool,
    /// Minimum estimated diameter, in kilometers.
    pub diameter_min_km: f64,
}

/// One physical object tracked across multiple close approaches.
///
/// A body with a given name is a single shared instance: the loader appends
/// events to the first-seen instance and never replaces it. The only
/// mutation after construction is [`Body::record_approach`].
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    id: String,
    name: String,
    hazardous: bool,
    diameter_min_km: f64,
    /// Miss distance of the most recently loaded approach, in kilometers.
    miss_distance_km: f64,
    approaches: Vec<ApproachEvent>,
}

impl Body {
    /// Creates a body with no recorded approaches yet.
    pub fn new(fields: BodyFields) -> Self {
        Self {
            id: fields.id,
            name: fields.name,
            hazardous: fields.hazardous,
            diameter_min_km: fields.diameter_min_km,
            miss_distance_km: 0.0,
            approaches: Vec::new(),
        }
    }

    /// Appends an approach event and refreshes the body's miss distance to
    /// the new event's value, keeping the field last-loaded.
    pub fn record_approach(&mut self, event: ApproachEvent) {
        self.miss_distance_km = event.miss_distance_km;
        self.approaches.push(event);
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_hazardous(&self) -> bool {
        self.hazardous
    }

    pub fn diameter_min_km(&self) -> f64 {
        self.diameter_min_km
    }

    /// Miss distance of the most recently loaded approach.
    pub fn miss_distance_km(&self) -> f64 {
        self.miss_distance_km
    }

    /// Owned approach events, in load order.
    pub fn approaches(&self) -> &[ApproachEvent] {
        &self.approaches
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "id: {}", self.id)?;
        writeln!(f, "name: {}", self.name)?;
        writeln!(f, "hazardous: {}", self.hazardous)?;
        writeln!(f, "minimum diameter: {} km", self.diameter_min_km)?;
        writeln!(f, "miss distance: {} km", self.miss_distance_km)?;
        write!(f, "approaches: {}", self.approaches.len())?;
        for event in &self.approaches {
            write!(f, "\n  {} at {} km", event.date, event.miss_distance_km)?;
        }
        Ok(())
    }
}
