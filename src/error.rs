//! Error types for Gapview.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Gapview operations.
pub type Result<T> = std::result::Result<T, GapviewError>;

/// Errors that can occur in Gapview.
#[derive(Debug, Error)]
pub enum GapviewError {
    /// Failed to open the dataset file.
    #[error("Failed to open file: {path}")]
    FileOpen {
        /// Path that could not be opened.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The dataset is not well-formed delimited text.
    #[error("Malformed dataset {path}: {source}")]
    Csv {
        /// Dataset path.
        path: PathBuf,
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },

    /// A required column is absent from the header.
    #[error("Missing required column: {column}")]
    MissingColumn {
        /// Normalized column name.
        column: String,
    },

    /// Two header cells normalize to the same column name.
    #[error("Duplicate column after normalization: {column}")]
    DuplicateColumn {
        /// Normalized column name.
        column: String,
    },

    /// A cell could not be parsed as the column's type.
    #[error("Invalid value '{value}' in column '{column}' at line {line}")]
    InvalidValue {
        /// 1-based line in the source file.
        line: u64,
        /// Normalized column name.
        column: String,
        /// Raw cell text.
        value: String,
    },

    /// More than one row for the same (year, country) pair.
    #[error("Duplicate record for {country} in {year}")]
    DuplicateRecord {
        /// Year of the duplicated row.
        year: i32,
        /// Country of the duplicated row.
        country: String,
    },

    /// No rows left after exclusion.
    #[error("Dataset contains no records")]
    EmptyDataset,

    /// The requested year is not in the table's year index.
    #[error("Year not found: {year}")]
    YearNotFound {
        /// Requested year.
        year: i32,
    },

    /// Unknown axis field name.
    #[error("Invalid field '{name}' (expected one of fertility, life_expectancy, child_mortality, gdp_per_capita)")]
    InvalidField {
        /// Name that failed to parse.
        name: String,
    },

    /// Configuration file could not be read or parsed.
    #[error("Config error in {path}: {message}")]
    Config {
        /// Config file path.
        path: PathBuf,
        /// What went wrong.
        message: String,
    },

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GapviewError {
    /// Create a FileOpen error.
    pub fn file_open(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileOpen { path, source }
    }

    /// Create a MissingColumn error.
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }

    /// Create an InvalidField error.
    pub fn invalid_field(name: impl Into<String>) -> Self {
        Self::InvalidField { name: name.into() }
    }

    /// Whether this error happened while loading the dataset.
    pub fn is_data_load(&self) -> bool {
        matches!(
            self,
            Self::FileOpen { .. }
                | Self::Csv { .. }
                | Self::MissingColumn { .. }
                | Self::DuplicateColumn { .. }
                | Self::InvalidValue { .. }
                | Self::DuplicateRecord { .. }
                | Self::EmptyDataset
        )
    }
}
