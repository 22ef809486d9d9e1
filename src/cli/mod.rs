//! CLI module for Perigee
//!
//! Provides the command-line interface:
//! - query: load a dataset, resolve one close-approach query, render results
//! - inspect: load a dataset and print a summary

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command, OutputArg, TargetArg};
pub use commands::run;
pub use config::Config;
pub use errors::{CliError, CliResult};
