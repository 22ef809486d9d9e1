//! Optional JSON configuration for the command shell.
//!
//! Every knob has a default and every flag overrides its config value, so
//! the file is never required.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::query::DEFAULT_RESULT_COUNT;
use crate::writer::CSV_OUTPUT_PATH;

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the close-approach dataset (optional, `--data` overrides)
    #[serde(default)]
    pub data_path: Option<String>,

    /// Result cap used when a query gives no `--count`
    #[serde(default = "default_result_count")]
    pub default_count: usize,

    /// Target path for csv_file output
    #[serde(default = "default_output_path")]
    pub output_path: String,
}

fn default_result_count() -> usize {
    DEFAULT_RESULT_COUNT
}

fn default_output_path() -> String {
    CSV_OUTPUT_PATH.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: None,
            default_count: DEFAULT_RESULT_COUNT,
            output_path: CSV_OUTPUT_PATH.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from file; a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| format!("invalid config JSON in {}: {}", path.display(), e))?;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<(), String> {
        if self.default_count == 0 {
            return Err("default_count must be at least 1".to_string());
        }
        if self.output_path.trim().is_empty() {
            return Err("output_path must not be empty".to_string());
        }
        Ok(())
    }
}
