//! Delimited-source loader for close-approach datasets.
//!
//! Reads a comma-delimited file with a header row and builds an
//! [`IndexStore`]: every data row becomes one approach event owned by the
//! correct body, with column positions taken from the header the way a
//! dict-reader would. Coercion is centralized in one typed parse function
//! per field kind, so a bad cell fails the load instead of leaking NaN into
//! the indices.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::models::{ApproachEvent, BodyFields};

use super::errors::{DatabaseError, DatabaseResult};
use super::store::IndexStore;

/// Required source columns.
pub const COL_ID: &str = "id";
pub const COL_NAME: &str = "name";
pub const COL_HAZARDOUS: &str = "is_potentially_hazardous_asteroid";
pub const COL_DIAMETER_MIN: &str = "estimated_diameter_min_kilometers";
pub const COL_MISS_DISTANCE: &str = "miss_distance_kilometers";
pub const COL_APPROACH_DATE: &str = "close_approach_date";

/// Resolved positions of the required columns within one header.
#[derive(Debug, Clone, Copy)]
struct ColumnMap {
    id: usize,
    name: usize,
    hazardous: usize,
    diameter_min: usize,
    miss_distance: usize,
    approach_date: usize,
}

impl ColumnMap {
    fn from_header(header: &str) -> DatabaseResult<Self> {
        let cells: Vec<&str> = header.split(',').map(str::trim).collect();
        let position = |column: &str| {
            cells
                .iter()
                .position(|cell| *cell == column)
                .ok_or_else(|| DatabaseError::MissingColumn(column.to_string()))
        };

        Ok(Self {
            id: position(COL_ID)?,
            name: position(COL_NAME)?,
            hazardous: position(COL_HAZARDOUS)?,
            diameter_min: position(COL_DIAMETER_MIN)?,
            miss_distance: position(COL_MISS_DISTANCE)?,
            approach_date: position(COL_APPROACH_DATE)?,
        })
    }

    fn width(&self) -> usize {
        [
            self.id,
            self.name,
            self.hazardous,
            self.diameter_min,
            self.miss_distance,
            self.approach_date,
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
            + 1
    }
}

/// Loads a close-approach dataset into an [`IndexStore`].
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    path: PathBuf,
}

impl DatasetLoader {
    /// Creates a loader for the given source path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The source path this loader reads.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the source and builds the populated indices.
    ///
    /// Guarantees after a successful load:
    /// - each body name maps to exactly one [`Body`](crate::models::Body)
    ///   instance (first-seen wins)
    /// - every data row became one event owned by the correct body
    /// - blank lines are skipped, everything else must parse
    pub fn load(&self) -> DatabaseResult<IndexStore> {
        let content = fs::read_to_string(&self.path).map_err(|source| {
            DatabaseError::SourceUnavailable {
                path: self.path.clone(),
                source,
            }
        })?;

        let mut lines = content.lines().enumerate();
        let header = lines
            .by_ref()
            .find(|(_, line)| !line.trim().is_empty())
            .map(|(_, line)| line)
            .ok_or_else(|| DatabaseError::EmptySource {
                path: self.path.clone(),
            })?;
        let columns = ColumnMap::from_header(header)?;

        let mut store = IndexStore::new();
        for (index, line) in lines {
            if line.trim().is_empty() {
                continue;
            }
            // Lines are 1-based in error messages
            let (fields, event) = parse_row(line, index + 1, &columns)?;
            store.ingest(fields, event);
        }

        Ok(store)
    }
}

fn parse_row(
    line: &str,
    line_no: usize,
    columns: &ColumnMap,
) -> DatabaseResult<(BodyFields, ApproachEvent)> {
    let cells: Vec<&str> = line.split(',').map(str::trim).collect();
    if cells.len() < columns.width() {
        return Err(DatabaseError::ShortRow {
            line: line_no,
            expected: columns.width(),
            found: cells.len(),
        });
    }

    let name = cells[columns.name].to_string();
    let fields = BodyFields {
        id: cells[columns.id].to_string(),
        name: name.clone(),
        hazardous: parse_flag(cells[columns.hazardous]),
        diameter_min_km: parse_float(line_no, COL_DIAMETER_MIN, cells[columns.diameter_min])?,
    };
    let event = ApproachEvent::new(
        name,
        parse_date(line_no, COL_APPROACH_DATE, cells[columns.approach_date])?,
        parse_float(line_no, COL_MISS_DISTANCE, cells[columns.miss_distance])?,
    );

    Ok((fields, event))
}

/// The hazard flag is set iff the cell is exactly `True`; any other
/// literal reads as false.
fn parse_flag(raw: &str) -> bool {
    raw == "True"
}

fn parse_float(line: usize, column: &str, raw: &str) -> DatabaseResult<f64> {
    raw.parse().map_err(|_| DatabaseError::InvalidNumber {
        line,
        column: column.to_string(),
        value: raw.to_string(),
    })
}

fn parse_date(line: usize, column: &str, raw: &str) -> DatabaseResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| DatabaseError::InvalidDate {
        line,
        column: column.to_string(),
        value: raw.to_string(),
    })
}
