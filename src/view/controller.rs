//! View-state controller and display buffer.

use super::{recompute, Projection, ViewState};
use crate::data::{NumericField, RecordTable};
use crate::error::Result;

/// Latest published projection, observed by the renderer.
#[derive(Debug, Clone, Default)]
pub struct DisplayBuffer {
    current: Option<Projection>,
    revision: u64,
}

impl DisplayBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the buffer contents.
    pub fn publish(&mut self, projection: Projection) -> &Projection {
        self.revision += 1;
        self.current.insert(projection)
    }

    /// Current projection, if anything was published.
    pub fn current(&self) -> Option<&Projection> {
        self.current.as_ref()
    }

    /// Number of publishes so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

/// Messages forwarded from the UI to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    /// Jump to a specific year.
    SelectYear(i32),
    /// Move through present years by the given count.
    StepYear(i32),
    /// Jump to the first year.
    FirstYear,
    /// Jump to the last year.
    LastYear,
    /// Set the x field.
    SelectX(NumericField),
    /// Set the y field.
    SelectY(NumericField),
    /// Move the x selector by the given count.
    CycleX(i32),
    /// Move the y selector by the given count.
    CycleY(i32),
}

/// Owns the view state and is the only writer of the display buffer.
#[derive(Debug, Clone)]
pub struct ViewController {
    state: ViewState,
    buffer: DisplayBuffer,
}

impl ViewController {
    /// Create a controller and publish the initial projection.
    pub fn new(table: &RecordTable, initial: ViewState) -> Result<Self> {
        let projection = recompute(table, &initial)?;
        let mut buffer = DisplayBuffer::new();
        buffer.publish(projection);
        Ok(Self {
            state: initial,
            buffer,
        })
    }

    /// Current view state.
    pub fn state(&self) -> ViewState {
        self.state
    }

    /// Display buffer.
    pub fn buffer(&self) -> &DisplayBuffer {
        &self.buffer
    }

    /// Projection currently on display.
    pub fn projection(&self) -> Option<&Projection> {
        self.buffer.current()
    }

    /// State that `event` would lead to from the current one.
    pub fn next_state(&self, table: &RecordTable, event: ViewEvent) -> ViewState {
        let mut next = self.state;
        match event {
            ViewEvent::SelectYear(year) => next.year = year,
            ViewEvent::StepYear(steps) => next.year = table.step_year(next.year, steps),
            ViewEvent::FirstYear => next.year = table.year_range().0,
            ViewEvent::LastYear => next.year = table.year_range().1,
            ViewEvent::SelectX(field) => next.x_field = field,
            ViewEvent::SelectY(field) => next.y_field = field,
            ViewEvent::CycleX(steps) => next.x_field = next.x_field.cycle(steps),
            ViewEvent::CycleY(steps) => next.y_field = next.y_field.cycle(steps),
        }
        next
    }

    /// Apply an event, recompute and publish.
    ///
    /// On error the state and the buffer are left as they were.
    pub fn dispatch(&mut self, table: &RecordTable, event: ViewEvent) -> Result<&Projection> {
        let next = self.next_state(table, event);
        let projection = recompute(table, &next)?;
        tracing::debug!(
            "View updated: year={} x={} y={} rows={}",
            next.year,
            next.x_field,
            next.y_field,
            projection.len()
        );
        self.state = next;
        Ok(self.buffer.publish(projection))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Record;
    use crate::error::GapviewError;

    fn table() -> RecordTable {
        let mut records = Vec::new();
        for (year, shift) in [(1970, 0.0), (1975, 1.0), (1980, 2.0)] {
            for (country, region) in [("Chad", "Africa"), ("Peru", "America")] {
                records.push(Record {
                    year,
                    country: country.to_string(),
                    region: region.to_string(),
                    population: 10.0,
                    fertility: 6.0 - shift,
                    life_expectancy: 50.0 + shift,
                    child_mortality: 200.0 - shift,
                    gdp_per_capita: 1000.0 + shift,
                });
            }
        }
        RecordTable::new(vec![], records).unwrap()
    }

    fn initial() -> ViewState {
        ViewState::new(1970, NumericField::Fertility, NumericField::LifeExpectancy)
    }

    #[test]
    fn publishes_initial_projection() {
        let table = table();
        let controller = ViewController::new(&table, initial()).unwrap();
        assert_eq!(controller.buffer().revision(), 1);
        assert_eq!(controller.projection().unwrap().state, initial());
    }

    #[test]
    fn initial_year_must_exist() {
        let table = table();
        let err = ViewController::new(&table, ViewState { year: 1971, ..initial() }).unwrap_err();
        assert!(matches!(err, GapviewError::YearNotFound { year: 1971 }));
    }

    #[test]
    fn steps_through_present_years() {
        let table = table();
        let mut controller = ViewController::new(&table, initial()).unwrap();

        controller.dispatch(&table, ViewEvent::StepYear(1)).unwrap();
        assert_eq!(controller.state().year, 1975);
        controller.dispatch(&table, ViewEvent::StepYear(5)).unwrap();
        assert_eq!(controller.state().year, 1980);
        controller.dispatch(&table, ViewEvent::FirstYear).unwrap();
        assert_eq!(controller.state().year, 1970);
        let p = controller.dispatch(&table, ViewEvent::LastYear).unwrap();
        assert_eq!(p.title(), "Gapminder data for 1980");
        assert_eq!(controller.buffer().revision(), 5);
    }

    #[test]
    fn cycles_fields() {
        let table = table();
        let mut controller = ViewController::new(&table, initial()).unwrap();

        let p = controller.dispatch(&table, ViewEvent::CycleX(1)).unwrap();
        assert_eq!(p.state.x_field, NumericField::LifeExpectancy);
        controller.dispatch(&table, ViewEvent::CycleY(-1)).unwrap();
        assert_eq!(controller.state().y_field, NumericField::Fertility);
        controller
            .dispatch(&table, ViewEvent::SelectX(NumericField::GdpPerCapita))
            .unwrap();
        assert_eq!(controller.projection().unwrap().x, [1000.0, 1000.0]);
    }

    #[test]
    fn failed_dispatch_changes_nothing() {
        let table = table();
        let mut controller = ViewController::new(&table, initial()).unwrap();
        let before = controller.projection().cloned();

        let err = controller.dispatch(&table, ViewEvent::SelectYear(1999)).unwrap_err();
        assert!(matches!(err, GapviewError::YearNotFound { year: 1999 }));
        assert_eq!(controller.state(), initial());
        assert_eq!(controller.buffer().revision(), 1);
        assert_eq!(controller.projection().cloned(), before);
    }

    #[test]
    fn year_change_keeps_axis_bounds() {
        let table = table();
        let mut controller = ViewController::new(&table, initial()).unwrap();
        let before = controller.projection().unwrap().clone();
        let after = controller.dispatch(&table, ViewEvent::StepYear(1)).unwrap();
        assert_eq!(before.x_bounds, after.x_bounds);
        assert_eq!(before.y_bounds, after.y_bounds);
        assert_ne!(before.x, after.x);
    }
}
