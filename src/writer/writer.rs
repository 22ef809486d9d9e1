//! Result rendering to the console or a CSV file.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::models::Body;
use crate::query::TargetKind;

use super::errors::{WriterError, WriterResult};

/// Default path of the CSV results file, in the working directory.
pub const CSV_OUTPUT_PATH: &str = "neo_results.csv";

/// Header row of the CSV results file.
pub const CSV_HEADER: &str = "NEO_id, NEO_name, miss_distance, orbit_date";

const RULE_WIDTH: usize = 50;
const NO_RESULTS_NOTICE: &str = "No results found, try a different search.";

/// Supported output sinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Bordered console rendering.
    Display,
    /// One CSV file row per (body, approach event) pair.
    CsvFile,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Display => "display",
            Self::CsvFile => "csv_file",
        }
    }
}

/// Renders final result sequences.
#[derive(Debug, Clone)]
pub struct ResultWriter {
    csv_path: PathBuf,
}

impl Default for ResultWriter {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(CSV_OUTPUT_PATH),
        }
    }
}

impl ResultWriter {
    /// Creates a writer targeting the default CSV path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a writer targeting a custom CSV path.
    pub fn with_csv_path(csv_path: impl Into<PathBuf>) -> Self {
        Self {
            csv_path: csv_path.into(),
        }
    }

    /// Renders the results to the requested sink.
    ///
    /// An empty result set prints a notice on either sink; for
    /// [`OutputFormat::CsvFile`] no file is written in that case.
    pub fn write(
        &self,
        format: OutputFormat,
        target: TargetKind,
        results: &[Body],
    ) -> WriterResult<()> {
        if results.is_empty() {
            let mut stdout = io::stdout();
            writeln!(stdout, "{}", NO_RESULTS_NOTICE)?;
            stdout.flush()?;
            return Ok(());
        }

        match format {
            OutputFormat::Display => {
                let mut stdout = io::stdout();
                stdout.write_all(render_display(target, results).as_bytes())?;
                stdout.flush()?;
                Ok(())
            }
            OutputFormat::CsvFile => self.write_csv(results),
        }
    }

    /// Writes (or overwrites) the CSV results file. An empty result set
    /// writes nothing.
    pub fn write_csv(&self, results: &[Body]) -> WriterResult<()> {
        if results.is_empty() {
            return Ok(());
        }
        fs::write(&self.csv_path, render_csv(results)).map_err(|source| WriterError::File {
            path: self.csv_path.clone(),
            source,
        })
    }

    /// The CSV path this writer targets.
    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }
}

/// Builds the bordered console rendering: a header rule, a count line, then
/// each result between separator rules.
pub fn render_display(target: TargetKind, results: &[Body]) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!(
        "Found {} results for the given search criteria\n",
        results.len()
    ));
    out.push_str(&rule);
    out.push('\n');

    match target {
        TargetKind::Body => {
            for (index, body) in results.iter().enumerate() {
                out.push_str(&format!("Result #{}\n{}\n{}\n", index + 1, body, rule));
            }
        }
        TargetKind::ApproachEvent => {
            let events = results.iter().flat_map(|body| body.approaches());
            for (index, event) in events.enumerate() {
                out.push_str(&format!("Result #{}\n{}\n{}\n", index + 1, event, rule));
            }
        }
    }

    out
}

/// Builds the CSV payload: the fixed header, then one row per
/// (body, approach event) pair across all results.
pub fn render_csv(results: &[Body]) -> String {
    let mut out = String::with_capacity(64 * (results.len() + 1));
    out.push_str(CSV_HEADER);
    out.push('\n');
    for body in results {
        for event in body.approaches() {
            out.push_str(&format!(
                "{}, {}, {}, {}\n",
                body.id(),
                body.name(),
                event.miss_distance_km,
                event.date
            ));
        }
    }
    out
}
