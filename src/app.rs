//! Application state and logic.

use std::path::PathBuf;

use crate::data::{LoadReport, LoadedDataset, RecordTable};
use crate::error::Result;
use crate::ui::formatters::format_number;
use crate::util::{copy_to_clipboard, RegionPalette};
use crate::view::{Projection, ViewController, ViewEvent, ViewState};

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Widget receiving adjust keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetFocus {
    /// Year slider.
    #[default]
    Year,
    /// X-axis field selector.
    XField,
    /// Y-axis field selector.
    YField,
}

impl WidgetFocus {
    /// Next widget in tab order.
    pub fn next(self) -> Self {
        match self {
            WidgetFocus::Year => WidgetFocus::XField,
            WidgetFocus::XField => WidgetFocus::YField,
            WidgetFocus::YField => WidgetFocus::Year,
        }
    }

    /// Previous widget in tab order.
    pub fn prev(self) -> Self {
        match self {
            WidgetFocus::Year => WidgetFocus::YField,
            WidgetFocus::XField => WidgetFocus::Year,
            WidgetFocus::YField => WidgetFocus::XField,
        }
    }

    /// Widget title.
    pub fn title(self) -> &'static str {
        match self {
            WidgetFocus::Year => "Year",
            WidgetFocus::XField => "x-axis data",
            WidgetFocus::YField => "y-axis data",
        }
    }
}

/// Everything loaded once at startup.
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Dataset path.
    pub source: PathBuf,
    /// Normalized record table.
    pub table: RecordTable,
    /// Load summary.
    pub report: LoadReport,
}

impl AppContext {
    /// Wrap a loaded dataset.
    pub fn new(source: PathBuf, dataset: LoadedDataset) -> Self {
        Self {
            source,
            table: dataset.table,
            report: dataset.report,
        }
    }
}

/// Tooltip contents for the hovered country.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverInfo {
    /// Country name.
    pub country: String,
    /// Population.
    pub population: f64,
    /// Region category.
    pub region: String,
    /// X value.
    pub x: f64,
    /// Y value.
    pub y: f64,
}

impl HoverInfo {
    /// Tooltip rows as (label, value) pairs.
    pub fn rows(&self) -> [(&'static str, String); 3] {
        let population = if self.population.is_finite() {
            format_number(self.population.round() as u64)
        } else {
            "n/a".to_string()
        };
        [
            ("Country", self.country.clone()),
            ("Population", population),
            ("Region", self.region.clone()),
        ]
    }

    /// Plain-text rendering used for the clipboard.
    pub fn to_text(&self) -> String {
        self.rows()
            .iter()
            .map(|(label, value)| format!("{}: {}", label, value))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Loaded data.
    pub context: AppContext,
    /// View controller.
    pub controller: ViewController,
    /// Region colors.
    pub palette: RegionPalette,
    /// Focused widget.
    pub focus: WidgetFocus,
    /// Hovered row of the current projection.
    pub hover: Option<usize>,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
}

impl App {
    /// Create the application and publish the initial view.
    pub fn new(context: AppContext, initial: ViewState) -> Result<Self> {
        let controller = ViewController::new(&context.table, initial)?;
        let palette = RegionPalette::spectral(context.table.regions());
        let status = format!(
            "{} loaded: {} rows, {} excluded",
            context
                .source
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| "dataset".to_string()),
            context.report.rows_kept,
            context.report.excluded_rows()
        );

        Ok(Self {
            context,
            controller,
            palette,
            focus: WidgetFocus::default(),
            hover: None,
            status,
            theme: Theme::GruvboxDark,
        })
    }

    /// Projection on display.
    pub fn projection(&self) -> Option<&Projection> {
        self.controller.projection()
    }

    /// Current view state.
    pub fn view_state(&self) -> ViewState {
        self.controller.state()
    }

    /// Forward an event to the controller.
    ///
    /// The hovered country stays hovered if it is still present.
    pub fn dispatch(&mut self, event: ViewEvent) {
        let hovered = self.hovered().map(|h| h.country);

        match self.controller.dispatch(&self.context.table, event) {
            Ok(projection) => {
                self.hover = hovered.and_then(|c| projection.position_of(&c));
                self.status = projection.title();
            },
            Err(e) => {
                tracing::warn!("Rejected view event {:?}: {}", event, e);
                self.status = format!("Error: {}", e);
            },
        }
    }

    /// Move focus to the next widget.
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
        self.status = format!("Focus: {}", self.focus.title());
    }

    /// Move focus to the previous widget.
    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
        self.status = format!("Focus: {}", self.focus.title());
    }

    /// Adjust the focused widget by `delta` steps.
    pub fn adjust(&mut self, delta: i32) {
        let event = match self.focus {
            WidgetFocus::Year => ViewEvent::StepYear(delta),
            WidgetFocus::XField => ViewEvent::CycleX(delta),
            WidgetFocus::YField => ViewEvent::CycleY(delta),
        };
        self.dispatch(event);
    }

    /// Jump the slider to the first year.
    pub fn first_year(&mut self) {
        self.dispatch(ViewEvent::FirstYear);
    }

    /// Jump the slider to the last year.
    pub fn last_year(&mut self) {
        self.dispatch(ViewEvent::LastYear);
    }

    /// Hover the next country.
    pub fn hover_next(&mut self) {
        self.move_hover(1);
    }

    /// Hover the previous country.
    pub fn hover_prev(&mut self) {
        self.move_hover(-1);
    }

    fn move_hover(&mut self, delta: isize) {
        let len = self.projection().map_or(0, Projection::len);
        if len == 0 {
            self.hover = None;
            return;
        }
        let next = match self.hover {
            Some(i) => (i as isize + delta).rem_euclid(len as isize) as usize,
            None if delta >= 0 => 0,
            None => len - 1,
        };
        self.hover = Some(next);
    }

    /// Clear the hover.
    pub fn clear_hover(&mut self) {
        self.hover = None;
    }

    /// Tooltip contents for the hovered row.
    pub fn hovered(&self) -> Option<HoverInfo> {
        let projection = self.projection()?;
        let i = self.hover?;
        Some(HoverInfo {
            country: projection.country.get(i)?.clone(),
            population: *projection.population.get(i)?,
            region: projection.region.get(i)?.clone(),
            x: *projection.x.get(i)?,
            y: *projection.y.get(i)?,
        })
    }

    /// Copy the tooltip to the clipboard.
    pub fn copy_hovered(&mut self) {
        let Some(info) = self.hovered() else {
            self.status = "No country selected".to_string();
            return;
        };
        match copy_to_clipboard(&info.to_text()) {
            Ok(()) => self.status = format!("Copied {}!", info.country),
            Err(e) => self.status = format!("Copy failed: {}", e),
        }
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }
}
