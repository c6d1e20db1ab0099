//! Side panel: year slider, field selectors and hover tooltip.

use super::formatters::{format_value, truncate_to_width};
use super::ThemeColors;
use crate::app::{App, WidgetFocus};
use crate::data::NumericField;
use crate::util::layout_config::PanelLayoutConfig;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Draw the widget panel.
pub(super) fn draw_panel(
    f: &mut Frame<'_>,
    area: Rect,
    app: &App,
    layout: &PanelLayoutConfig,
    colors: &ThemeColors,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(layout.slider_height),
            Constraint::Length(layout.selector_height),
            Constraint::Length(layout.selector_height),
            Constraint::Min(3),
        ])
        .split(area);

    draw_slider(f, chunks[0], app, colors);
    draw_selector(
        f,
        chunks[1],
        WidgetFocus::XField,
        app.view_state().x_field,
        app,
        colors,
    );
    draw_selector(
        f,
        chunks[2],
        WidgetFocus::YField,
        app.view_state().y_field,
        app,
        colors,
    );
    draw_tooltip(f, chunks[3], app, layout, colors);
}

fn widget_block(title: String, focused: bool, colors: &ThemeColors) -> Block<'static> {
    let border = if focused {
        colors.cursor_bg
    } else {
        colors.border
    };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(colors.bg))
}

/// Fraction of the way `year` sits between `first` and `last`.
fn slider_ratio(year: i32, first: i32, last: i32) -> f64 {
    if last <= first {
        return 1.0;
    }
    (f64::from(year - first) / f64::from(last - first)).clamp(0.0, 1.0)
}

fn draw_slider(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let (first, last) = app.context.table.year_range();
    let year = app.view_state().year;

    let gauge = Gauge::default()
        .block(widget_block(
            format!(" {}: {}..{} ", WidgetFocus::Year.title(), first, last),
            app.focus == WidgetFocus::Year,
            colors,
        ))
        .gauge_style(Style::default().fg(colors.label).bg(colors.status_bg))
        .ratio(slider_ratio(year, first, last))
        .label(Span::styled(
            year.to_string(),
            Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
        ));

    f.render_widget(gauge, area);
}

fn draw_selector(
    f: &mut Frame<'_>,
    area: Rect,
    widget: WidgetFocus,
    selected: NumericField,
    app: &App,
    colors: &ThemeColors,
) {
    let items: Vec<ListItem<'_>> = NumericField::ALL
        .iter()
        .map(|&field| {
            let (marker, style) = if field == selected {
                (
                    "> ",
                    Style::default()
                        .fg(colors.cursor_fg)
                        .bg(colors.cursor_bg)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("  ", Style::default().fg(colors.text))
            };
            ListItem::new(Line::from(format!("{}{}", marker, field.column_name()))).style(style)
        })
        .collect();

    let list = List::new(items).block(widget_block(
        format!(" {} ", widget.title()),
        app.focus == widget,
        colors,
    ));

    f.render_widget(list, area);
}

fn draw_tooltip(
    f: &mut Frame<'_>,
    area: Rect,
    app: &App,
    layout: &PanelLayoutConfig,
    colors: &ThemeColors,
) {
    let lines = match app.hovered() {
        Some(info) => {
            let state = app.view_state();
            let mut lines: Vec<Line<'_>> = info
                .rows()
                .into_iter()
                .map(|(label, value)| {
                    Line::from(vec![
                        Span::styled(format!("{:<11}", label), Style::default().fg(colors.label)),
                        Span::styled(
                            truncate_to_width(&value, layout.max_country_width),
                            Style::default().fg(colors.value),
                        ),
                    ])
                })
                .collect();
            lines.push(Line::from(""));
            for (field, value) in [(state.x_field, info.x), (state.y_field, info.y)] {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{}: ", field.column_name()),
                        Style::default().fg(colors.label),
                    ),
                    Span::styled(format_value(value), Style::default().fg(colors.value)),
                ]));
            }
            lines
        },
        None => vec![Line::from(Span::styled(
            "j/k to inspect a country",
            Style::default().fg(colors.text),
        ))],
    };

    let mut title = " Hover ".to_string();
    let excluded = app.context.report.excluded_rows();
    if excluded > 0 {
        title = format!(" Hover ({} rows excluded) ", excluded);
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(Span::styled(title, Style::default().fg(colors.warning)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .style(Style::default().bg(colors.bg)),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}
