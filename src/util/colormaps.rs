//! Categorical color mapping for region legends.

use ratatui::style::Color;

/// Six-class ColorBrewer "Spectral" palette.
pub const SPECTRAL6: [Color; 6] = [
    Color::Rgb(50, 136, 189),
    Color::Rgb(153, 213, 148),
    Color::Rgb(230, 245, 152),
    Color::Rgb(254, 224, 139),
    Color::Rgb(252, 141, 89),
    Color::Rgb(213, 62, 79),
];

/// Color for categories the palette has no slot for.
pub const UNMAPPED_COLOR: Color = Color::Gray;

/// Maps region names to palette colors by order of first appearance.
#[derive(Debug, Clone)]
pub struct RegionPalette {
    factors: Vec<String>,
    palette: Vec<Color>,
}

impl RegionPalette {
    /// Build a mapper over `factors` using the Spectral6 palette.
    pub fn spectral(factors: &[String]) -> Self {
        Self {
            factors: factors.to_vec(),
            palette: SPECTRAL6.to_vec(),
        }
    }

    /// Color of a region. Unknown regions and factors past the palette length are gray.
    pub fn color(&self, region: &str) -> Color {
        self.factors
            .iter()
            .position(|f| f == region)
            .and_then(|i| self.palette.get(i).copied())
            .unwrap_or(UNMAPPED_COLOR)
    }

    /// Regions in legend order.
    pub fn factors(&self) -> &[String] {
        &self.factors
    }
}
