//! The normalized record table and its year index.

use super::{NumericField, Record};
use crate::error::{GapviewError, Result};
use std::collections::{BTreeMap, HashSet};

/// Closed range `[start, end]` used for an axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds {
    /// Lower end.
    pub start: f64,
    /// Upper end.
    pub end: f64,
}

impl AxisBounds {
    /// Min/max over the finite values of an iterator.
    ///
    /// Returns `[0, 0]` when no finite value is present.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        let (start, end) = values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
                (min.min(v), max.max(v))
            });
        if start.is_finite() {
            Self { start, end }
        } else {
            Self {
                start: 0.0,
                end: 0.0,
            }
        }
    }

    /// Width of the range.
    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    /// Bounds widened by `factor` of the span on each side.
    ///
    /// A degenerate range is widened by one unit so a chart can still draw it.
    pub fn padded(&self, factor: f64) -> Self {
        let pad = if self.span().abs() < 1e-10 {
            1.0
        } else {
            self.span().abs() * factor
        };
        Self {
            start: self.start - pad,
            end: self.end + pad,
        }
    }

    /// As the `[start, end]` array ratatui axes expect.
    pub fn as_array(&self) -> [f64; 2] {
        [self.start, self.end]
    }
}

/// Full dataset, one row per (year, country), immutable after construction.
#[derive(Debug, Clone)]
pub struct RecordTable {
    columns: Vec<String>,
    records: Vec<Record>,
    years: BTreeMap<i32, Vec<usize>>,
    regions: Vec<String>,
    bounds: [AxisBounds; 4],
}

impl RecordTable {
    /// Build a table from normalized column names and rows.
    ///
    /// Rows keep their given order inside each year.
    pub fn new(columns: Vec<String>, records: Vec<Record>) -> Result<Self> {
        if records.is_empty() {
            return Err(GapviewError::EmptyDataset);
        }

        let mut years: BTreeMap<i32, Vec<usize>> = BTreeMap::new();
        let mut seen: HashSet<(i32, &str)> = HashSet::with_capacity(records.len());
        let mut regions: Vec<String> = Vec::new();

        for (idx, record) in records.iter().enumerate() {
            if !seen.insert((record.year, record.country.as_str())) {
                return Err(GapviewError::DuplicateRecord {
                    year: record.year,
                    country: record.country.clone(),
                });
            }
            years.entry(record.year).or_default().push(idx);
            if !regions.iter().any(|r| r == &record.region) {
                regions.push(record.region.clone());
            }
        }

        let bounds = NumericField::ALL
            .map(|field| AxisBounds::from_values(records.iter().map(|r| r.value(field))));

        Ok(Self {
            columns,
            records,
            years,
            regions,
            bounds,
        })
    }

    /// Normalized column names in file order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Whether a normalized column name is present.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// All rows.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false for a constructed table.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Years present, ascending.
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.years.keys().copied()
    }

    /// First and last year present.
    pub fn year_range(&self) -> (i32, i32) {
        let first = self.years.keys().next().copied().unwrap_or_default();
        let last = self.years.keys().next_back().copied().unwrap_or_default();
        (first, last)
    }

    /// Whether the year index contains `year`.
    pub fn contains_year(&self, year: i32) -> bool {
        self.years.contains_key(&year)
    }

    /// Rows for one year in file order, or `None` if the year is absent.
    pub fn rows_for_year(&self, year: i32) -> Option<impl Iterator<Item = &Record> + '_> {
        self.years
            .get(&year)
            .map(|idxs| idxs.iter().map(move |&i| &self.records[i]))
    }

    /// Number of countries observed in `year`.
    pub fn country_count(&self, year: i32) -> usize {
        self.years.get(&year).map_or(0, Vec::len)
    }

    /// Present year reached by moving `steps` entries through the index from `year`.
    ///
    /// Clamps to the first or last year. A `year` that is absent snaps to the
    /// nearest present year in the direction of travel.
    pub fn step_year(&self, year: i32, steps: i32) -> i32 {
        let (first, last) = self.year_range();
        let moves = steps.unsigned_abs() as usize;
        // An absent start year already counts as one move once snapped.
        let skip = if self.contains_year(year) {
            moves
        } else {
            moves.saturating_sub(1)
        };

        if steps >= 0 {
            self.years
                .range(year..)
                .map(|(&y, _)| y)
                .nth(skip)
                .unwrap_or(last)
        } else {
            self.years
                .range(..=year)
                .rev()
                .map(|(&y, _)| y)
                .nth(skip)
                .unwrap_or(first)
        }
    }

    /// Distinct regions in order of first appearance.
    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    /// Min/max of a field across every year.
    pub fn field_bounds(&self, field: NumericField) -> AxisBounds {
        self.bounds[field.index()]
    }
}
