//! CLI argument definitions using clap
//!
//! Commands:
//! - perigee query --data <path> [date predicate] [--filter ...] [--output ...]
//! - perigee inspect --data <path>

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::query::TargetKind;
use crate::writer::OutputFormat;

/// Perigee - a deterministic in-memory query engine for near-Earth close approaches
#[derive(Parser, Debug)]
#[command(name = "perigee")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a close-approach query against a dataset
    Query {
        /// Path to the close-approach CSV dataset
        #[arg(long)]
        data: Option<PathBuf>,

        /// Path to an optional configuration file
        #[arg(long, default_value = "./perigee.json")]
        config: PathBuf,

        /// Exact approach date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Range start date (YYYY-MM-DD), paired with --end-date
        #[arg(long)]
        start_date: Option<NaiveDate>,

        /// Range end date (YYYY-MM-DD), paired with --start-date
        #[arg(long)]
        end_date: Option<NaiveDate>,

        /// Maximum number of results to return
        #[arg(long)]
        count: Option<usize>,

        /// Filter in field:operator:value form (repeatable)
        #[arg(long)]
        filter: Vec<String>,

        /// Entity shape to render
        #[arg(long, value_enum, default_value_t = TargetArg::Body)]
        target: TargetArg,

        /// Output sink
        #[arg(long, value_enum, default_value_t = OutputArg::Display)]
        output: OutputArg,
    },

    /// Summarize a dataset without querying it
    Inspect {
        /// Path to the close-approach CSV dataset
        #[arg(long)]
        data: Option<PathBuf>,

        /// Path to an optional configuration file
        #[arg(long, default_value = "./perigee.json")]
        config: PathBuf,
    },
}

/// Entity shape accepted on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetArg {
    Body,
    Approach,
}

impl From<TargetArg> for TargetKind {
    fn from(arg: TargetArg) -> Self {
        match arg {
            TargetArg::Body => TargetKind::Body,
            TargetArg::Approach => TargetKind::ApproachEvent,
        }
    }
}

/// Output sink accepted on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputArg {
    Display,
    CsvFile,
}

impl From<OutputArg> for OutputFormat {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Display => OutputFormat::Display,
            OutputArg::CsvFile => OutputFormat::CsvFile,
        }
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
