//! Result rendering subsystem.
//!
//! Two sinks, modeled as a closed sum ([`OutputFormat`]):
//!
//! - `display`: bordered console rendering with a count line
//! - `csv_file`: one row per (body, approach event) pair, written to a
//!   fixed-path file (overwriting any previous run)
//!
//! An empty result set prints a notice and never writes a file.

mod errors;
mod writer;

pub use errors::{WriterError, WriterResult};
pub use writer::{
    render_csv, render_display, OutputFormat, ResultWriter, CSV_HEADER, CSV_OUTPUT_PATH,
};
