//! End-to-end properties of loading and projecting a dataset file.

mod common;

use common::{write_csv, GAPMINDER_SAMPLE};
use gapview::data::{
    AxisBounds, DataLoader, ExclusionRules, LoadOptions, NumericField, DEFAULT_EXCLUDED_COUNTRY,
};
use gapview::view::{recompute, ViewController, ViewEvent, ViewState};

fn load_default() -> gapview::data::LoadedDataset {
    let file = write_csv(GAPMINDER_SAMPLE);
    DataLoader::load(file.path(), &LoadOptions::default()).unwrap()
}

#[test]
fn every_year_projects_one_row_per_country() {
    let table = load_default().table;
    for year in table.years() {
        for x in NumericField::ALL {
            for y in NumericField::ALL {
                let p = recompute(&table, &ViewState::new(year, x, y)).unwrap();
                assert_eq!(p.len(), table.country_count(year));
                assert_eq!(p.x.len(), p.len());
                assert_eq!(p.y.len(), p.len());
                assert_eq!(p.population.len(), p.len());
                assert_eq!(p.region.len(), p.len());
            }
        }
    }
    assert_eq!(table.country_count(1970), 3);
    assert_eq!(table.country_count(1971), 4);
}

#[test]
fn excluded_country_never_projected() {
    let table = load_default().table;
    for year in table.years() {
        for x in NumericField::ALL {
            let p = recompute(&table, &ViewState::new(year, x, NumericField::Fertility)).unwrap();
            assert!(p.position_of(DEFAULT_EXCLUDED_COUNTRY).is_none());
        }
    }
}

#[test]
fn bounds_cover_both_years() {
    let table = load_default().table;
    let p = recompute(
        &table,
        &ViewState::new(1970, NumericField::Fertility, NumericField::LifeExpectancy),
    )
    .unwrap();

    assert_eq!(p.country, ["Afghanistan", "Albania", "Peru"]);
    assert_eq!(p.x_bounds, AxisBounds { start: 5.03, end: 7.671 });
    assert_eq!(p.y_bounds, AxisBounds { start: 36.088, end: 67.67 });

    let later = recompute(
        &table,
        &ViewState::new(1971, NumericField::Fertility, NumericField::LifeExpectancy),
    )
    .unwrap();
    assert_eq!(p.x_bounds, later.x_bounds);
    assert_eq!(p.y_bounds, later.y_bounds);
}

#[test]
fn missing_gdp_is_carried_but_not_bounding() {
    let loaded = load_default();
    assert_eq!(loaded.report.missing_for(NumericField::GdpPerCapita), 1);

    let p = recompute(
        &loaded.table,
        &ViewState::new(1971, NumericField::GdpPerCapita, NumericField::Fertility),
    )
    .unwrap();
    let chad = p.position_of("Chad").unwrap();
    assert!(p.x[chad].is_nan());
    assert_eq!(p.x_bounds, AxisBounds { start: 1167.0, end: 5643.0 });
    assert!(p.points_for_region("Sub-Saharan Africa").is_empty());
}

#[test]
fn keeping_all_rows_includes_the_default_exclusion() {
    let file = write_csv(GAPMINDER_SAMPLE);
    let options = LoadOptions {
        exclusions: ExclusionRules::none(),
        ..LoadOptions::default()
    };
    let loaded = DataLoader::load(file.path(), &options).unwrap();
    assert_eq!(loaded.report.excluded_rows(), 0);
    assert_eq!(loaded.table.country_count(1970), 4);
}

#[test]
fn controller_walks_the_slider_range() {
    let table = load_default().table;
    let mut controller = ViewController::new(
        &table,
        ViewState::new(1970, NumericField::Fertility, NumericField::LifeExpectancy),
    )
    .unwrap();

    let p = controller.dispatch(&table, ViewEvent::StepYear(1)).unwrap();
    assert_eq!(p.title(), "Gapminder data for 1971");
    assert_eq!(p.len(), 4);

    let before = controller.projection().unwrap().clone();
    let after = controller
        .dispatch(&table, ViewEvent::SelectX(NumericField::ChildMortality))
        .unwrap();
    assert_eq!(before.y, after.y);
    assert_eq!(before.country, after.country);
    assert_eq!(before.region, after.region);
    assert_ne!(before.x_bounds, after.x_bounds);
}
