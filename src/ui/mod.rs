//! User interface rendering.
//!
//! Pure rendering layer: everything drawn here is read from [`App`] and its
//! display buffer.

pub mod formatters;
mod keymap_bar;
mod panel;
mod plot;
mod status_bar;
mod theme;

use crate::app::App;
use crate::util::LayoutConfig;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &App, layout: &LayoutConfig) {
    let colors = ThemeColors::from_theme(&app.theme);

    // Main layout with status bar and key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1), Constraint::Length(1)])
        .split(f.area());

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(layout.panel.width)])
        .split(chunks[0]);

    plot::draw_plot(f, content[0], app, &layout.plot, &colors);
    panel::draw_panel(f, content[1], app, &layout.panel, &colors);
    status_bar::draw_status(f, chunks[1], &app.status, &colors);
    keymap_bar::draw_keymap(f, chunks[2], &colors);
}
