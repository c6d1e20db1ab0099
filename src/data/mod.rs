//! Dataset loading and representation.
//!
//! This module reads the country-indicator CSV and holds it as an immutable
//! record table indexed by year.

mod field;
mod loader;
mod record;
mod table;

pub use field::NumericField;
pub use loader::{
    DataLoader, ExclusionRules, LoadOptions, LoadReport, LoadedDataset, COLUMN_RENAMES,
    DEFAULT_EXCLUDED_COUNTRY,
};
pub use record::Record;
pub use table::{AxisBounds, RecordTable};
