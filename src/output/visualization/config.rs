//! Plot configuration

use plotters::prelude::*;

/// Configuration for customizing concentration plots
///
/// # Example
///
/// ```rust
/// use contam_rs::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::default();
/// config.width = 1920;
/// config.series_colors = Some(vec![RED, BLUE, GREEN]);
/// assert_eq!(config.xlabel, "Time (days)");
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title (default: "Contaminant Concentration vs. Time")
    pub title: String,

    /// X-axis label (default: "Time (days)")
    pub xlabel: String,

    /// Y-axis label (default: "Concentration (mg/L)")
    pub ylabel: String,

    /// Optional colors, one per depth
    ///
    /// If None, uses the default palette: [RED, BLUE, GREEN, MAGENTA, CYAN, ...]
    pub series_colors: Option<Vec<RGBColor>>,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Contaminant Concentration vs. Time".to_string(),
            xlabel: "Time (days)".to_string(),
            ylabel: "Concentration (mg/L)".to_string(),
            series_colors: None,
            background: WHITE,
            line_width: 2,
            show_grid: true,
        }
    }
}

const DEFAULT_PALETTE: [RGBColor; 8] = [
    RED,
    BLUE,
    GREEN,
    MAGENTA,
    CYAN,
    BLACK,
    RGBColor(255, 165, 0), // Orange
    RGBColor(128, 0, 128), // Purple
];

impl PlotConfig {
    /// Default config with a custom title
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Default config with custom per-depth colors
    pub fn with_colors(colors: Vec<RGBColor>) -> Self {
        Self {
            series_colors: Some(colors),
            ..Default::default()
        }
    }

    /// Color for the series at `index`
    ///
    /// Uses custom colors if provided, otherwise falls back to the default palette
    pub(crate) fn series_color(&self, index: usize) -> RGBColor {
        if let Some(color) = self.series_colors.as_ref().and_then(|c| c.get(index)) {
            return *color;
        }
        DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()]
    }
}

// =================================================================================================
// Tests
// =================================================================================================
