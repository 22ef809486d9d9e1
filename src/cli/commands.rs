//! CLI command implementations
//!
//! `query` runs the full pipeline: load the dataset, normalize the raw
//! parameters into a selector, resolve it against the indices, render the
//! results. `inspect` loads the dataset and prints a summary. All shell
//! logging happens here; the core subsystems stay silent.

use std::path::PathBuf;

use crate::database::{DatasetLoader, IndexStore};
use crate::observability::Logger;
use crate::query::QueryParams;
use crate::searcher::Searcher;
use crate::writer::{OutputFormat, ResultWriter};

use super::args::{Cli, Command};
use super::config::Config;
use super::errors::{CliError, CliResult};

/// Parses arguments and dispatches to the requested command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    match cli.command {
        Command::Query {
            data,
            config,
            date,
            start_date,
            end_date,
            count,
            filter,
            target,
            output,
        } => {
            let config = Config::load_or_default(&config).map_err(CliError::Config)?;
            let store = load_dataset(data, &config)?;
            let params = QueryParams {
                date,
                start_date,
                end_date,
                count: Some(count.unwrap_or(config.default_count)),
                filters: filter,
                target: target.into(),
            };
            query(store, params, output.into(), &config)
        }
        Command::Inspect { data, config } => {
            let config = Config::load_or_default(&config).map_err(CliError::Config)?;
            let store = load_dataset(data, &config)?;
            inspect(&store)
        }
    }
}

/// Resolves the dataset path (flag wins over config) and loads the indices.
fn load_dataset(data: Option<PathBuf>, config: &Config) -> CliResult<IndexStore> {
    let path = data
        .or_else(|| config.data_path.as_ref().map(PathBuf::from))
        .ok_or(CliError::MissingDataPath)?;

    let loader = DatasetLoader::new(&path);
    let store = loader.load()?;
    Logger::info(
        "DATASET_LOADED",
        &[
            ("path", &path.display().to_string()),
            ("bodies", &store.available_count().to_string()),
            ("events", &store.event_count().to_string()),
        ],
    );
    Ok(store)
}

/// Runs one query end to end against a freshly loaded store.
fn query(
    mut store: IndexStore,
    params: QueryParams,
    output: OutputFormat,
    config: &Config,
) -> CliResult<()> {
    let selector = params.build()?;
    let target = selector.target_kind();

    let results = Searcher::new(&mut store).resolve_once(&selector)?;
    Logger::info(
        "QUERY_COMPLETE",
        &[("results", &results.len().to_string())],
    );

    let writer = ResultWriter::with_csv_path(&config.output_path);
    writer.write(output, target, &results)?;
    if output == OutputFormat::CsvFile && !results.is_empty() {
        Logger::info(
            "RESULTS_WRITTEN",
            &[("path", &writer.csv_path().display().to_string())],
        );
    }
    Ok(())
}

/// Prints a dataset summary without consuming anything.
fn inspect(store: &IndexStore) -> CliResult<()> {
    println!("bodies: {}", store.available_count());
    println!("approach events: {}", store.event_count());
    match store.date_span() {
        Some((first, last)) => println!("date span: {} to {}", first, last),
        None => println!("date span: empty dataset"),
    }
    Ok(())
}
