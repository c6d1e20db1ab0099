//! Scatter plot of the current projection.

use super::formatters::axis_labels;
use super::ThemeColors;
use crate::app::App;
use crate::util::layout_config::PlotLayoutConfig;
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition, Paragraph},
    Frame,
};

/// Draw the scatter plot, one dataset per region plus the hover marker.
pub(super) fn draw_plot(
    f: &mut Frame<'_>,
    area: Rect,
    app: &App,
    layout: &PlotLayoutConfig,
    colors: &ThemeColors,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));

    let Some(projection) = app.projection() else {
        let para = Paragraph::new("No data to display")
            .style(Style::default().fg(colors.text))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(para, area);
        return;
    };

    let series: Vec<(&str, Vec<(f64, f64)>)> = app
        .palette
        .factors()
        .iter()
        .map(|region| (region.as_str(), projection.points_for_region(region)))
        .filter(|(_, points)| !points.is_empty())
        .collect();

    let hovered: Vec<(f64, f64)> = app
        .hovered()
        .filter(|h| h.x.is_finite() && h.y.is_finite())
        .map(|h| vec![(h.x, h.y)])
        .unwrap_or_default();

    let mut datasets: Vec<Dataset<'_>> = series
        .iter()
        .map(|(region, points)| {
            Dataset::default()
                .name(region.to_string())
                .marker(Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(app.palette.color(region)))
                .data(points)
        })
        .collect();

    if !hovered.is_empty() {
        datasets.push(
            Dataset::default()
                .marker(Marker::Block)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(colors.hover))
                .data(&hovered),
        );
    }

    let x_bounds = projection.x_bounds.padded(layout.axis_padding_factor);
    let y_bounds = projection.y_bounds.padded(layout.axis_padding_factor);

    let x_axis = Axis::default()
        .title(projection.x_label())
        .style(Style::default().fg(colors.text))
        .bounds(x_bounds.as_array())
        .labels(axis_labels(x_bounds, layout.tick_count));

    let y_axis = Axis::default()
        .title(projection.y_label())
        .style(Style::default().fg(colors.text))
        .bounds(y_bounds.as_array())
        .labels(axis_labels(y_bounds, layout.tick_count));

    let plotted: usize = series.iter().map(|(_, points)| points.len()).sum();
    let title = format!(
        " {} ({} of {} countries plotted) ",
        projection.title(),
        plotted,
        projection.len()
    );

    let chart = Chart::new(datasets)
        .block(
            block
                .title(title)
                .title_style(Style::default().fg(colors.heading).add_modifier(Modifier::BOLD)),
        )
        .x_axis(x_axis)
        .y_axis(y_axis)
        .legend_position(Some(LegendPosition::TopLeft))
        .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)));

    f.render_widget(chart, area);
}
