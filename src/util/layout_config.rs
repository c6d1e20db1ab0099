//! Layout configuration constants for the explorer screen.

/// Configuration for the scatter plot.
#[derive(Debug, Clone)]
pub struct PlotLayoutConfig {
    /// Fraction of the axis span added on each side (0.05 = 5% margin).
    pub axis_padding_factor: f64,
    /// Number of tick labels per axis.
    pub tick_count: usize,
}

impl Default for PlotLayoutConfig {
    fn default() -> Self {
        Self {
            axis_padding_factor: 0.05,
            tick_count: 5,
        }
    }
}

/// Configuration for the widget side panel.
#[derive(Debug, Clone)]
pub struct PanelLayoutConfig {
    /// Width of the panel in characters.
    pub width: u16,
    /// Height of the year slider block.
    pub slider_height: u16,
    /// Height of each field selector block.
    pub selector_height: u16,
    /// Widest country name shown in the tooltip before truncation.
    pub max_country_width: usize,
}

impl Default for PanelLayoutConfig {
    fn default() -> Self {
        Self {
            width: 34,
            slider_height: 3,
            selector_height: 6,
            max_country_width: 28,
        }
    }
}

/// Combined layout configuration.
#[derive(Debug, Clone, Default)]
pub struct LayoutConfig {
    /// Scatter plot layout.
    pub plot: PlotLayoutConfig,
    /// Side panel layout.
    pub panel: PanelLayoutConfig,
}
