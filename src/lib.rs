//! perigee - a deterministic in-memory query engine for near-Earth close
//! approaches
//!
//! Pipeline: raw parameters -> [`query::QueryParams`] -> [`query::Selector`]
//! -> [`searcher::Searcher`] (reads the [`database::IndexStore`], delegates
//! to the filter engine) -> truncated results -> [`writer::ResultWriter`].

pub mod cli;
pub mod database;
pub mod models;
pub mod observability;
pub mod query;
pub mod searcher;
pub mod writer;
