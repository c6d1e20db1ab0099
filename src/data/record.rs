//! A single (year, country) row of the record table.

use super::NumericField;

/// One normalized row of the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Year of observation.
    pub year: i32,
    /// Country name.
    pub country: String,
    /// Region category.
    pub region: String,
    /// Total population.
    pub population: f64,
    /// Births per woman.
    pub fertility: f64,
    /// Life expectancy at birth.
    pub life_expectancy: f64,
    /// Deaths under five per 1000 births.
    pub child_mortality: f64,
    /// GDP per capita.
    pub gdp_per_capita: f64,
}

impl Record {
    /// Value of a numeric field. Missing cells are `NaN`.
    pub fn value(&self, field: NumericField) -> f64 {
        match field {
            NumericField::Fertility => self.fertility,
            NumericField::LifeExpectancy => self.life_expectancy,
            NumericField::ChildMortality => self.child_mortality,
            NumericField::GdpPerCapita => self.gdp_per_capita,
        }
    }
}
