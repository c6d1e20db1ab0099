//! Gapview - a terminal explorer for Gapminder country indicators.
//!
//! Gapview loads the Gapminder tidy CSV, then plots one indicator against
//! another for a chosen year, with a year slider and two axis selectors.
//!
//! # Features
//!
//! - CSV loading with header normalization and explicit exclusion rules
//! - Pure per-year projection with axis bounds fixed across all years
//! - Message-driven view controller, testable without a terminal
//! - Scatter plot colored by region, with legend and hover tooltip
//! - Gruvbox color themes
//! - Clipboard integration
//!
//! # Example
//!
//! ```ignore
//! use gapview::data::{DataLoader, LoadOptions, NumericField};
//! use gapview::view::{recompute, ViewState};
//! use std::path::Path;
//!
//! let loaded = DataLoader::load(Path::new("Data/gapminder_tidy.csv"), &LoadOptions::default())?;
//! let state = ViewState::new(1970, NumericField::Fertility, NumericField::LifeExpectancy);
//! let projection = recompute(&loaded.table, &state)?;
//! println!("{}: {} countries", projection.title(), projection.len());
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod ui;
pub mod util;
pub mod view;

pub use error::{GapviewError, Result};
