//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::io::Write;
use tempfile::NamedTempFile;

/// Two years of a small Gapminder-style dataset, raw column names, mixed-case header.
pub const GAPMINDER_SAMPLE: &str = "\
Country,Year,fertility,life,population,child_mortality,gdp,region
Afghanistan,1970,7.671,36.088,11121097,301.0,1167,South Asia
Albania,1970,5.16,66.97,2150707,87.0,3427,Europe & Central Asia
\"Congo, Dem. Rep.\",1970,6.29,45.73,20009902,246.0,1053,Sub-Saharan Africa
Peru,1970,6.28,53.5,13193000,162.0,5500,America
Afghanistan,1971,7.671,36.577,11362587,296.0,1179,South Asia
Albania,1971,5.03,67.67,2195064,83.0,3490,Europe & Central Asia
\"Congo, Dem. Rep.\",1971,6.3,46.03,20634000,243.0,1001,Sub-Saharan Africa
Peru,1971,6.1,54.1,13519000,157.0,5643,America
Chad,1971,6.63,42.4,3745000,241.0,,Sub-Saharan Africa
";

/// Write `contents` to a temporary `.csv` file.
pub fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("create temp csv");
    file.write_all(contents.as_bytes()).expect("write temp csv");
    file
}
