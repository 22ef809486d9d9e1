//! Dataset Loading Tests
//!
//! Tests for the loader guarantees:
//! - Each body name maps to exactly one instance (first-seen wins)
//! - Every data row becomes one owned approach event
//! - Bad sources fail loudly at load time

use std::fs;
use std::io::Write;

use perigee::database::{DatabaseError, DatasetLoader};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

const HEADER: &str = "id,name,is_potentially_hazardous_asteroid,\
                      estimated_diameter_min_kilometers,miss_distance_kilometers,\
                      close_approach_date";

fn write_dataset(dir: &TempDir, rows: &[&str]) -> std::path::PathBuf {
    let path = dir.path().join("neo.csv");
    let mut file = fs::File::create(&path).unwrap();
    writeln!(file, "{}", HEADER).unwrap();
    for row in rows {
        writeln!(file, "{}", row).unwrap();
    }
    path
}

// =============================================================================
// Happy Path Tests
// =============================================================================

/// Every row becomes one event; repeated names share one body instance.
#[test]
fn test_first_seen_wins_and_events_accumulate() {
    let dir = TempDir::new().unwrap();
    let path = write_dataset(
        &dir,
        &[
            "2000433,Eros,False,0.3,500000.0,2023-01-01",
            "2000433,Eros,False,0.3,750000.0,2023-01-03",
            "2099942,Apophis,True,0.17,300000.0,2023-01-02",
        ],
    );

    let mut store = DatasetLoader::new(&path).load().unwrap();
    assert_eq!(store.available_count(), 2);
    assert_eq!(store.event_count(), 3);

    let eros = store.take_available("Eros").unwrap();
    assert_eq!(eros.id(), "2000433");
    assert!(!eros.is_hazardous());
    assert_eq!(eros.approaches().len(), 2);
    assert_eq!(eros.approaches()[0].body_name, "Eros");

    let apophis = store.take_available("Apophis").unwrap();
    assert!(apophis.is_hazardous());
    assert_eq!(apophis.approaches().len(), 1);
}

/// The body's miss distance mirrors its newest loaded event.
#[test]
fn test_miss_distance_is_last_loaded() {
    let dir = TempDir::new().unwrap();
    let path = write_dataset(
        &dir,
        &[
            "2000433,Eros,False,0.3,500000.0,2023-01-01",
            "2000433,Eros,False,0.3,750000.0,2023-01-03",
        ],
    );

    let mut store = DatasetLoader::new(&path).load().unwrap();
    let eros = store.take_available("Eros").unwrap();
    assert_eq!(eros.miss_distance_km(), 750000.0);
}

/// The date index carries load order and the span reflects the data.
#[test]
fn test_date_index_populated() {
    let dir = TempDir::new().unwrap();
    let path = write_dataset(
        &dir,
        &[
            "1,A,False,0.1,1000.0,2023-01-05",
            "2,B,False,0.1,1000.0,2023-01-01",
        ],
    );

    let store = DatasetLoader::new(&path).load().unwrap();
    assert_eq!(
        store.date_span(),
        Some(("2023-01-01".parse().unwrap(), "2023-01-05".parse().unwrap()))
    );
    assert_eq!(store.names_on("2023-01-05".parse().unwrap()), vec!["A"]);
}

/// Columns may appear in any order; positions come from the header.
#[test]
fn test_header_order_does_not_matter() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("neo.csv");
    fs::write(
        &path,
        "name,close_approach_date,id,miss_distance_kilometers,\
         estimated_diameter_min_kilometers,is_potentially_hazardous_asteroid\n\
         Eros,2023-01-01,2000433,500000.0,0.3,True\n",
    )
    .unwrap();

    let mut store = DatasetLoader::new(&path).load().unwrap();
    let eros = store.take_available("Eros").unwrap();
    assert_eq!(eros.id(), "2000433");
    assert!(eros.is_hazardous());
    assert_eq!(eros.diameter_min_km(), 0.3);
}

/// Blank lines anywhere in the source are skipped.
#[test]
fn test_blank_lines_skipped() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("neo.csv");
    fs::write(
        &path,
        format!(
            "\n{}\n1,A,False,0.1,1000.0,2023-01-01\n\n2,B,False,0.1,1000.0,2023-01-02\n",
            HEADER
        ),
    )
    .unwrap();

    let store = DatasetLoader::new(&path).load().unwrap();
    assert_eq!(store.available_count(), 2);
}

// =============================================================================
// Failure Tests
// =============================================================================

/// An unreadable source is a source-unavailable error.
#[test]
fn test_unreadable_source() {
    let err = DatasetLoader::new("/no/such/file.csv").load().unwrap_err();
    assert!(matches!(err, DatabaseError::SourceUnavailable { .. }));
}

/// A file with no rows at all is an empty-source error.
#[test]
fn test_empty_source() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("neo.csv");
    fs::write(&path, "").unwrap();

    let err = DatasetLoader::new(&path).load().unwrap_err();
    assert!(matches!(err, DatabaseError::EmptySource { .. }));
}

/// A header missing a required column fails before any row is read.
#[test]
fn test_missing_column() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("neo.csv");
    fs::write(&path, "id,name\n1,A\n").unwrap();

    let err = DatasetLoader::new(&path).load().unwrap_err();
    match err {
        DatabaseError::MissingColumn(column) => {
            assert_eq!(column, "is_potentially_hazardous_asteroid");
        }
        other => panic!("unexpected error: {}", other),
    }
}

/// A non-numeric diameter cell names its row and column.
#[test]
fn test_bad_number_cell() {
    let dir = TempDir::new().unwrap();
    let path = write_dataset(&dir, &["1,A,False,wide,1000.0,2023-01-01"]);

    let err = DatasetLoader::new(&path).load().unwrap_err();
    match err {
        DatabaseError::InvalidNumber { line, column, value } => {
            assert_eq!(line, 2);
            assert_eq!(column, "estimated_diameter_min_kilometers");
            assert_eq!(value, "wide");
        }
        other => panic!("unexpected error: {}", other),
    }
}

/// A non-ISO date cell names its row and column.
#[test]
fn test_bad_date_cell() {
    let dir = TempDir::new().unwrap();
    let path = write_dataset(&dir, &["1,A,False,0.1,1000.0,01/05/2023"]);

    let err = DatasetLoader::new(&path).load().unwrap_err();
    assert!(matches!(err, DatabaseError::InvalidDate { line: 2, .. }));
}

/// A truncated row fails rather than producing a partial body.
#[test]
fn test_short_row() {
    let dir = TempDir::new().unwrap();
    let path = write_dataset(&dir, &["1,A,False"]);

    let err = DatasetLoader::new(&path).load().unwrap_err();
    assert!(matches!(err, DatabaseError::ShortRow { line: 2, .. }));
}
