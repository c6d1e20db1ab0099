//! Command line behaviour of the `gapview` binary.

mod common;

use assert_cmd::Command;
use common::{write_csv, GAPMINDER_SAMPLE};
use predicates::prelude::*;
use std::io::Write;

fn gapview() -> Command {
    Command::cargo_bin("gapview").unwrap()
}

#[test]
fn print_emits_initial_projection() {
    let file = write_csv(GAPMINDER_SAMPLE);
    gapview()
        .arg(file.path())
        .arg("--print")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Gapminder data for 1970\n"))
        .stdout(predicate::str::contains(
            "country\tregion\tpopulation\tfertility\tlife_expectancy",
        ))
        .stdout(predicate::str::contains("Peru\tAmerica\t13193000\t6.28\t53.5"))
        .stdout(predicate::str::contains("Congo").not());
}

#[test]
fn print_honours_year_and_fields() {
    let file = write_csv(GAPMINDER_SAMPLE);
    gapview()
        .arg(file.path())
        .args(["--print", "--year", "1971", "-x", "gdp_per_capita", "-y", "child_mortality"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Gapminder data for 1971"))
        .stdout(predicate::str::contains("# x: gdp_per_capita [1001, 5643]").not())
        .stdout(predicate::str::contains("# x: gdp_per_capita [1167, 5643]"))
        .stdout(predicate::str::contains("Chad\tSub-Saharan Africa\t3745000\tNaN\t241"));
}

#[test]
fn exclusions_can_be_disabled_and_extended() {
    let file = write_csv(GAPMINDER_SAMPLE);
    gapview()
        .arg(file.path())
        .args(["--print", "--no-default-exclusions", "--exclude", "Peru"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Congo, Dem. Rep.\tSub-Saharan Africa"))
        .stdout(predicate::str::contains("Peru").not());
}

#[test]
fn config_file_sets_defaults() {
    let data = write_csv(GAPMINDER_SAMPLE);
    let mut config = tempfile::NamedTempFile::new().unwrap();
    write!(
        config,
        r#"{{"start_year": 1971, "y_field": "gdp_per_capita", "exclude_countries": []}}"#
    )
    .unwrap();

    gapview()
        .arg(data.path())
        .arg("--config")
        .arg(config.path())
        .arg("--print")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Gapminder data for 1971"))
        .stdout(predicate::str::contains("fertility\tgdp_per_capita"))
        .stdout(predicate::str::contains("Congo, Dem. Rep."));
}

#[test]
fn unknown_year_fails() {
    let file = write_csv(GAPMINDER_SAMPLE);
    gapview()
        .arg(file.path())
        .args(["--print", "--year", "1850"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Year not found: 1850"));
}

#[test]
fn raw_field_name_is_rejected() {
    let file = write_csv(GAPMINDER_SAMPLE);
    gapview()
        .arg(file.path())
        .args(["--print", "-x", "gdp"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid field 'gdp'"));
}

#[test]
fn missing_file_fails_to_load() {
    gapview()
        .args(["/nonexistent/gapminder.csv", "--print"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load dataset"));
}

#[test]
fn missing_column_is_reported() {
    let file = write_csv("year,country,region,population,gdp,fertility,child_mortality\n");
    gapview()
        .arg(file.path())
        .arg("--print")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required column: life_expectancy"));
}
