//! Per-year projection of the record table.

use crate::data::{AxisBounds, NumericField, RecordTable};
use crate::error::{GapviewError, Result};
use std::io::Write;

/// Current selection of the three widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    /// Selected year.
    pub year: i32,
    /// Field on the x axis.
    pub x_field: NumericField,
    /// Field on the y axis.
    pub y_field: NumericField,
}

impl ViewState {
    /// Create a view state.
    pub fn new(year: i32, x_field: NumericField, y_field: NumericField) -> Self {
        Self {
            year,
            x_field,
            y_field,
        }
    }
}

/// Column-aligned data for one view state, ready to be plotted.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    /// View state this projection was computed for.
    pub state: ViewState,
    /// X values, one per country.
    pub x: Vec<f64>,
    /// Y values, one per country.
    pub y: Vec<f64>,
    /// Country names.
    pub country: Vec<String>,
    /// Populations.
    pub population: Vec<f64>,
    /// Region categories.
    pub region: Vec<String>,
    /// X axis range over every year.
    pub x_bounds: AxisBounds,
    /// Y axis range over every year.
    pub y_bounds: AxisBounds,
}

impl Projection {
    /// Number of rows.
    pub fn len(&self) -> usize {
        self.country.len()
    }

    /// Whether the projection has no rows.
    pub fn is_empty(&self) -> bool {
        self.country.is_empty()
    }

    /// Plot title embedding the selected year.
    pub fn title(&self) -> String {
        format!("Gapminder data for {}", self.state.year)
    }

    /// X axis label.
    pub fn x_label(&self) -> &'static str {
        self.state.x_field.column_name()
    }

    /// Y axis label.
    pub fn y_label(&self) -> &'static str {
        self.state.y_field.column_name()
    }

    /// Position of a country in this projection.
    pub fn position_of(&self, country: &str) -> Option<usize> {
        self.country.iter().position(|c| c == country)
    }

    /// Write the projection as tab-separated text with a short header.
    pub fn write_tsv<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "# {}", self.title())?;
        for (axis, field, bounds) in [
            ("x", self.state.x_field, self.x_bounds),
            ("y", self.state.y_field, self.y_bounds),
        ] {
            writeln!(out, "# {}: {} [{}, {}]", axis, field, bounds.start, bounds.end)?;
        }
        writeln!(
            out,
            "country\tregion\tpopulation\t{}\t{}",
            self.x_label(),
            self.y_label()
        )?;
        for i in 0..self.len() {
            writeln!(
                out,
                "{}\t{}\t{}\t{}\t{}",
                self.country[i], self.region[i], self.population[i], self.x[i], self.y[i]
            )?;
        }
        Ok(())
    }

    /// Finite (x, y) points for one region, in row order.
    pub fn points_for_region(&self, region: &str) -> Vec<(f64, f64)> {
        (0..self.len())
            .filter(|&i| self.region[i] == region)
            .filter(|&i| self.x[i].is_finite() && self.y[i].is_finite())
            .map(|i| (self.x[i], self.y[i]))
            .collect()
    }
}

/// Recompute the projection for a view state.
///
/// Axis bounds cover the chosen fields across all years so the plot keeps its
/// scale while the year changes.
pub fn recompute(table: &RecordTable, state: &ViewState) -> Result<Projection> {
    let rows = table
        .rows_for_year(state.year)
        .ok_or(GapviewError::YearNotFound { year: state.year })?;

    let capacity = table.country_count(state.year);
    let mut projection = Projection {
        state: *state,
        x: Vec::with_capacity(capacity),
        y: Vec::with_capacity(capacity),
        country: Vec::with_capacity(capacity),
        population: Vec::with_capacity(capacity),
        region: Vec::with_capacity(capacity),
        x_bounds: table.field_bounds(state.x_field),
        y_bounds: table.field_bounds(state.y_field),
    };

    for record in rows {
        projection.x.push(record.value(state.x_field));
        projection.y.push(record.value(state.y_field));
        projection.country.push(record.country.clone());
        projection.population.push(record.population);
        projection.region.push(record.region.clone());
    }

    Ok(projection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Record;

    fn record(year: i32, country: &str, region: &str, fertility: f64, life: f64) -> Record {
        Record {
            year,
            country: country.to_string(),
            region: region.to_string(),
            population: 1_000_000.0,
            fertility,
            life_expectancy: life,
            child_mortality: 50.0,
            gdp_per_capita: 3000.0,
        }
    }

    fn two_years() -> RecordTable {
        RecordTable::new(
            vec![],
            vec![
                record(1970, "Chad", "Africa", 6.5, 45.0),
                record(1970, "Peru", "America", 6.0, 53.0),
                record(1970, "Fiji", "Asia", 4.5, 60.0),
                record(1971, "Chad", "Africa", 7.1, 44.0),
                record(1971, "Peru", "America", 5.8, 54.0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn projects_one_row_per_country() {
        let table = two_years();
        let state = ViewState::new(1970, NumericField::Fertility, NumericField::LifeExpectancy);
        let p = recompute(&table, &state).unwrap();

        assert_eq!(p.len(), 3);
        assert_eq!(p.country, ["Chad", "Peru", "Fiji"]);
        assert_eq!(p.x, [6.5, 6.0, 4.5]);
        assert_eq!(p.y, [45.0, 53.0, 60.0]);
        assert_eq!(p.region, ["Africa", "America", "Asia"]);
        // bounds span both years
        assert_eq!(p.x_bounds, AxisBounds { start: 4.5, end: 7.1 });
        assert_eq!(p.y_bounds, AxisBounds { start: 44.0, end: 60.0 });
        assert_eq!(p.title(), "Gapminder data for 1970");
        assert_eq!(p.x_label(), "fertility");
        assert_eq!(p.y_label(), "life_expectancy");
    }

    #[test]
    fn row_count_matches_countries_per_year() {
        let table = two_years();
        for year in table.years() {
            let state = ViewState::new(year, NumericField::GdpPerCapita, NumericField::Fertility);
            assert_eq!(recompute(&table, &state).unwrap().len(), table.country_count(year));
        }
    }

    #[test]
    fn bounds_do_not_depend_on_year() {
        let table = two_years();
        let a = recompute(
            &table,
            &ViewState::new(1970, NumericField::Fertility, NumericField::LifeExpectancy),
        )
        .unwrap();
        let b = recompute(
            &table,
            &ViewState::new(1971, NumericField::Fertility, NumericField::LifeExpectancy),
        )
        .unwrap();
        assert_eq!(a.x_bounds, b.x_bounds);
        assert_eq!(a.y_bounds, b.y_bounds);
    }

    #[test]
    fn switching_x_leaves_y_side_untouched() {
        let table = two_years();
        let before = recompute(
            &table,
            &ViewState::new(1970, NumericField::Fertility, NumericField::LifeExpectancy),
        )
        .unwrap();
        let after = recompute(
            &table,
            &ViewState::new(1970, NumericField::GdpPerCapita, NumericField::LifeExpectancy),
        )
        .unwrap();

        assert_ne!(before.x, after.x);
        assert_ne!(before.x_bounds, after.x_bounds);
        assert_eq!(before.y, after.y);
        assert_eq!(before.y_bounds, after.y_bounds);
        assert_eq!(before.country, after.country);
        assert_eq!(before.region, after.region);
    }

    #[test]
    fn absent_year_is_a_lookup_error() {
        let table = two_years();
        let state = ViewState::new(1999, NumericField::Fertility, NumericField::LifeExpectancy);
        assert!(matches!(
            recompute(&table, &state),
            Err(GapviewError::YearNotFound { year: 1999 })
        ));
    }

    #[test]
    fn region_points_skip_missing_values() {
        let mut records = vec![record(1970, "Chad", "Africa", 6.5, 45.0)];
        records.push(record(1970, "Mali", "Africa", f64::NAN, 40.0));
        let table = RecordTable::new(vec![], records).unwrap();
        let p = recompute(
            &table,
            &ViewState::new(1970, NumericField::Fertility, NumericField::LifeExpectancy),
        )
        .unwrap();
        assert_eq!(p.len(), 2);
        assert_eq!(p.points_for_region("Africa"), vec![(6.5, 45.0)]);
        assert!(p.points_for_region("Europe").is_empty());
        assert_eq!(p.position_of("Mali"), Some(1));
    }

    #[test]
    fn writes_one_tsv_line_per_country() {
        let table = two_years();
        let p = recompute(
            &table,
            &ViewState::new(1971, NumericField::Fertility, NumericField::LifeExpectancy),
        )
        .unwrap();
        let mut out = Vec::new();
        p.write_tsv(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "# Gapminder data for 1971");
        assert_eq!(lines[1], "# x: fertility [4.5, 7.1]");
        assert_eq!(lines[3], "country\tregion\tpopulation\tfertility\tlife_expectancy");
        assert_eq!(lines[4], "Chad\tAfrica\t1000000\t7.1\t44");
        assert_eq!(lines.len(), 6);
    }
}
