//! Utility functions.
//!
//! This module provides region color mapping, clipboard helpers and
//! plot layout constants.

mod clipboard;
pub mod colormaps;
pub mod layout_config;

pub use clipboard::copy_to_clipboard;
pub use colormaps::RegionPalette;
pub use layout_config::LayoutConfig;
