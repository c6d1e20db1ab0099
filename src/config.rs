//! Startup configuration.
//!
//! Settings come from an optional JSON file and are then overridden by
//! command line flags.

use crate::data::{ExclusionRules, LoadOptions, NumericField, DEFAULT_EXCLUDED_COUNTRY};
use crate::error::{GapviewError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default dataset location, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "Data/gapminder_tidy.csv";

/// Year shown first when the dataset contains it.
pub const DEFAULT_START_YEAR: i32 = 1970;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dataset path.
    pub data_path: PathBuf,
    /// Field delimiter.
    pub delimiter: char,
    /// Countries whose rows are dropped at load time.
    pub exclude_countries: Vec<String>,
    /// Initial year. Falls back to the first year present.
    pub start_year: Option<i32>,
    /// Initial x field.
    pub x_field: NumericField,
    /// Initial y field.
    pub y_field: NumericField,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            delimiter: ',',
            exclude_countries: vec![DEFAULT_EXCLUDED_COUNTRY.to_string()],
            start_year: None,
            x_field: NumericField::Fertility,
            y_field: NumericField::LifeExpectancy,
        }
    }
}

impl Config {
    /// Read a JSON config file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| GapviewError::file_open(path.to_path_buf(), e))?;
        let config: Config = serde_json::from_str(&contents).map_err(|e| GapviewError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        if !config.delimiter.is_ascii() {
            return Err(GapviewError::Config {
                path: path.to_path_buf(),
                message: format!(
                    "delimiter must be a single ASCII character, got '{}'",
                    config.delimiter
                ),
            });
        }
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Loader options derived from this config.
    pub fn load_options(&self) -> LoadOptions {
        let mut exclusions = ExclusionRules::none();
        for country in &self.exclude_countries {
            exclusions.exclude(country.clone());
        }
        LoadOptions {
            // non-ASCII delimiters are rejected when the config is built
            delimiter: self.delimiter as u8,
            exclusions,
        }
    }

    /// Initial year: the configured one, else 1970 if present, else `first`.
    pub fn initial_year(&self, contains: impl Fn(i32) -> bool, first: i32) -> i32 {
        match self.start_year {
            Some(year) => year,
            None if contains(DEFAULT_START_YEAR) => DEFAULT_START_YEAR,
            None => first,
        }
    }
}
