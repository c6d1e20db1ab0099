//! Delimited-text dataset loader.
//!
//! Reads the Gapminder tidy CSV, normalizes the header, applies exclusion
//! rules and builds a [`RecordTable`].

use super::{NumericField, Record, RecordTable};
use crate::error::{GapviewError, Result};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Raw column names replaced by a more precise name at load time.
pub const COLUMN_RENAMES: [(&str, &str); 2] =
    [("gdp", "gdp_per_capita"), ("life", "life_expectancy")];

/// Country dropped by default because its rows break per-year column selection.
pub const DEFAULT_EXCLUDED_COUNTRY: &str = "Congo, Dem. Rep.";

const YEAR: &str = "year";
const COUNTRY: &str = "country";
const REGION: &str = "region";
const POPULATION: &str = "population";

/// Rows dropped before the table is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionRules {
    /// Country names whose rows are excluded, matched exactly.
    pub countries: Vec<String>,
}

impl Default for ExclusionRules {
    fn default() -> Self {
        Self {
            countries: vec![DEFAULT_EXCLUDED_COUNTRY.to_string()],
        }
    }
}

impl ExclusionRules {
    /// Rules that keep every row.
    pub fn none() -> Self {
        Self {
            countries: Vec::new(),
        }
    }

    /// Add a country to exclude. Duplicates are ignored.
    pub fn exclude(&mut self, country: impl Into<String>) {
        let country = country.into();
        if !self.countries.contains(&country) {
            self.countries.push(country);
        }
    }

    /// Whether a row for `country` is excluded.
    pub fn excludes(&self, country: &str) -> bool {
        self.countries.iter().any(|c| c == country)
    }
}

/// Options controlling how a dataset file is read.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Exclusion rules.
    pub exclusions: ExclusionRules,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            exclusions: ExclusionRules::default(),
        }
    }
}

/// Data-quality summary of one load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Data rows read from the file.
    pub rows_read: usize,
    /// Rows kept in the table.
    pub rows_kept: usize,
    /// Excluded rows counted per country.
    pub excluded: BTreeMap<String, usize>,
    /// Missing numeric cells per field, indexed like [`NumericField::ALL`].
    pub missing: [usize; 4],
}

impl LoadReport {
    /// Total excluded rows.
    pub fn excluded_rows(&self) -> usize {
        self.excluded.values().sum()
    }

    /// Missing cells for one field.
    pub fn missing_for(&self, field: NumericField) -> usize {
        self.missing[field.index()]
    }
}

/// A loaded table together with its load report.
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    /// Normalized record table.
    pub table: RecordTable,
    /// What happened while loading.
    pub report: LoadReport,
}

/// Dataset reader.
#[derive(Debug)]
pub struct DataLoader;

impl DataLoader {
    /// Load a dataset file.
    pub fn load(path: &Path, options: &LoadOptions) -> Result<LoadedDataset> {
        tracing::info!("Loading dataset from {}", path.display());
        let file = File::open(path).map_err(|e| GapviewError::file_open(path.to_path_buf(), e))?;
        Self::load_from_reader(BufReader::new(file), path, options)
    }

    /// Load a dataset from any reader. `source` is only used in error messages.
    pub fn load_from_reader<R: Read>(
        reader: R,
        source: &Path,
        options: &LoadOptions,
    ) -> Result<LoadedDataset> {
        let csv_err = |e: csv::Error| GapviewError::Csv {
            path: source.to_path_buf(),
            source: e,
        };

        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let columns = normalize_header(rdr.headers().map_err(csv_err)?)?;
        let layout = ColumnLayout::resolve(&columns)?;

        let mut report = LoadReport::default();
        let mut records = Vec::new();

        for row in rdr.records() {
            let row = row.map_err(csv_err)?;
            report.rows_read += 1;
            let line = row.position().map_or(0, |p| p.line());

            let country = row.get(layout.country).unwrap_or_default();
            if country.is_empty() {
                return Err(GapviewError::InvalidValue {
                    line,
                    column: COUNTRY.to_string(),
                    value: String::new(),
                });
            }
            if options.exclusions.excludes(country) {
                *report.excluded.entry(country.to_string()).or_default() += 1;
                continue;
            }

            let mut values = [0.0; 4];
            for field in NumericField::ALL {
                let raw = row.get(layout.fields[field.index()]).unwrap_or_default();
                let value = parse_number(raw, line, field.column_name())?;
                if value.is_nan() {
                    report.missing[field.index()] += 1;
                }
                values[field.index()] = value;
            }

            records.push(Record {
                year: parse_year(row.get(layout.year).unwrap_or_default(), line)?,
                country: country.to_string(),
                region: row.get(layout.region).unwrap_or_default().to_string(),
                population: parse_number(
                    row.get(layout.population).unwrap_or_default(),
                    line,
                    POPULATION,
                )?,
                fertility: values[NumericField::Fertility.index()],
                life_expectancy: values[NumericField::LifeExpectancy.index()],
                child_mortality: values[NumericField::ChildMortality.index()],
                gdp_per_capita: values[NumericField::GdpPerCapita.index()],
            });
        }

        report.rows_kept = records.len();
        for (country, count) in &report.excluded {
            tracing::warn!(
                "Data quality: excluded {} row(s) for '{}' by exclusion rule",
                count,
                country
            );
        }
        for field in NumericField::ALL {
            let missing = report.missing_for(field);
            if missing > 0 {
                tracing::debug!("{} missing value(s) in {}", missing, field);
            }
        }

        let table = RecordTable::new(columns, records)?;
        tracing::info!(
            "Loaded {} rows across {} years ({} excluded)",
            report.rows_kept,
            table.years().count(),
            report.excluded_rows()
        );

        Ok(LoadedDataset { table, report })
    }
}

/// Positions of the required columns in a normalized header.
#[derive(Debug)]
struct ColumnLayout {
    year: usize,
    country: usize,
    region: usize,
    population: usize,
    fields: [usize; 4],
}

impl ColumnLayout {
    fn resolve(columns: &[String]) -> Result<Self> {
        let find = |name: &str| {
            columns
                .iter()
                .position(|c| c == name)
                .ok_or_else(|| GapviewError::missing_column(name))
        };

        let mut fields = [0; 4];
        for field in NumericField::ALL {
            fields[field.index()] = find(field.column_name())?;
        }

        Ok(Self {
            year: find(YEAR)?,
            country: find(COUNTRY)?,
            region: find(REGION)?,
            population: find(POPULATION)?,
            fields,
        })
    }
}

/// Lowercase, trim, join inner whitespace with `_`, then apply [`COLUMN_RENAMES`].
fn normalize_header(header: &csv::StringRecord) -> Result<Vec<String>> {
    let mut columns: Vec<String> = Vec::with_capacity(header.len());
    for cell in header.iter() {
        let mut name = cell
            .trim()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_");
        if let Some((_, renamed)) = COLUMN_RENAMES.iter().find(|(raw, _)| *raw == name) {
            name = (*renamed).to_string();
        }
        if columns.contains(&name) {
            return Err(GapviewError::DuplicateColumn { column: name });
        }
        columns.push(name);
    }
    Ok(columns)
}

fn parse_number(raw: &str, line: u64, column: &str) -> Result<f64> {
    if raw.is_empty() || raw.eq_ignore_ascii_case("na") || raw.eq_ignore_ascii_case("n/a") {
        return Ok(f64::NAN);
    }
    raw.parse::<f64>().map_err(|_| GapviewError::InvalidValue {
        line,
        column: column.to_string(),
        value: raw.to_string(),
    })
}

fn parse_year(raw: &str, line: u64) -> Result<i32> {
    let invalid = || GapviewError::InvalidValue {
        line,
        column: YEAR.to_string(),
        value: raw.to_string(),
    };

    if let Ok(year) = raw.parse::<i32>() {
        return Ok(year);
    }
    // Spreadsheet exports sometimes write years as "1970.0".
    match raw.parse::<f64>() {
        Ok(v) if v.fract() == 0.0 && v.abs() < f64::from(i32::MAX) => Ok(v as i32),
        _ => Err(invalid()),
    }
}
