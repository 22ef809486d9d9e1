//! Observability for the command shell.
//!
//! Structured one-line JSON logging with explicit severities. The query
//! core is silent; only the CLI shell emits events (dataset loaded, query
//! complete, results written), and they go to stderr so stdout stays
//! reserved for rendered results.

mod logger;

pub use logger::{Logger, Severity};
