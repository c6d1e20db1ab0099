//! Numeric indicator fields selectable as plot axes.

use crate::error::{GapviewError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four numeric indicators that can drive a plot axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericField {
    /// Births per woman.
    Fertility,
    /// Life expectancy at birth, in years.
    LifeExpectancy,
    /// Deaths under five per 1000 births.
    ChildMortality,
    /// GDP per capita.
    GdpPerCapita,
}

impl NumericField {
    /// All fields, in selector order.
    pub const ALL: [NumericField; 4] = [
        NumericField::Fertility,
        NumericField::LifeExpectancy,
        NumericField::ChildMortality,
        NumericField::GdpPerCapita,
    ];

    /// Normalized column name of this field.
    pub fn column_name(self) -> &'static str {
        match self {
            NumericField::Fertility => "fertility",
            NumericField::LifeExpectancy => "life_expectancy",
            NumericField::ChildMortality => "child_mortality",
            NumericField::GdpPerCapita => "gdp_per_capita",
        }
    }

    /// Position in [`NumericField::ALL`].
    pub fn index(self) -> usize {
        match self {
            NumericField::Fertility => 0,
            NumericField::LifeExpectancy => 1,
            NumericField::ChildMortality => 2,
            NumericField::GdpPerCapita => 3,
        }
    }

    /// Move `steps` positions through the selector options, wrapping around.
    pub fn cycle(self, steps: i32) -> Self {
        let len = Self::ALL.len() as i32;
        let idx = (self.index() as i32 + steps).rem_euclid(len);
        Self::ALL[idx as usize]
    }
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

impl FromStr for NumericField {
    type Err = GapviewError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|field| field.column_name() == wanted)
            .ok_or_else(|| GapviewError::invalid_field(s))
    }
}
