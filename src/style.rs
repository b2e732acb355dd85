//! Style configuration consumed read-only by a layout pass.
//!
//! A [`StyleConfig`] is an immutable snapshot: build it with the `with_*`
//! methods or load it from TOML, then hand it to each render call.

use std::path::Path;

use serde::Deserialize;

use crate::axis::{AxisOverrides, AxisScale};
use crate::error::{ChartError, Result};
use crate::render::Color;

/// Geometry family used to draw a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartType {
    /// Points connected by lines, with markers.
    #[default]
    Line,
    /// Markers only.
    Scatter,
    /// Line with the region down to the baseline filled.
    Area,
    /// Grouped bars per category slot.
    Bar,
}

/// Style snapshot for one chart.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    chart_type: ChartType,
    chart_padding: f32,
    x_axis_min: Option<f64>,
    x_axis_max: Option<f64>,
    y_axis_min: Option<f64>,
    y_axis_max: Option<f64>,
    x_axis_logarithmic: bool,
    y_axis_logarithmic: bool,
    plot_background_color: Color,
    plot_border_color: Color,
    plot_border_visible: bool,
    plot_grid_lines_color: Color,
    plot_grid_lines_visible: bool,
    plot_ticks_marks_visible: bool,
    error_bars_color: Color,
    x_tick_spacing_hint: f32,
    y_tick_spacing_hint: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            chart_type: ChartType::Line,
            chart_padding: 10.0,
            x_axis_min: None,
            x_axis_max: None,
            y_axis_min: None,
            y_axis_max: None,
            x_axis_logarithmic: false,
            y_axis_logarithmic: false,
            plot_background_color: Color::from_rgb8(0xDB, 0xDB, 0xDB),
            plot_border_color: Color::WHITE,
            plot_border_visible: true,
            plot_grid_lines_color: Color::WHITE,
            plot_grid_lines_visible: true,
            plot_ticks_marks_visible: true,
            error_bars_color: Color::BLACK,
            x_tick_spacing_hint: 74.0,
            y_tick_spacing_hint: 44.0,
        }
    }
}

impl StyleConfig {
    /// Create the default style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a style from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a style from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ChartError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let style = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), chart_type = ?style.chart_type, "loaded style");
        Ok(style)
    }

    /// Default chart type.
    pub fn chart_type(&self) -> ChartType {
        self.chart_type
    }

    /// Padding between the target rectangle and the plot area.
    pub fn chart_padding(&self) -> f32 {
        self.chart_padding
    }

    /// X axis overrides.
    pub fn x_overrides(&self) -> AxisOverrides {
        AxisOverrides::new(self.x_axis_min, self.x_axis_max)
    }

    /// Y axis overrides.
    pub fn y_overrides(&self) -> AxisOverrides {
        AxisOverrides::new(self.y_axis_min, self.y_axis_max)
    }

    /// Whether the X axis is logarithmic.
    pub fn is_x_axis_logarithmic(&self) -> bool {
        self.x_axis_logarithmic
    }

    /// Whether the Y axis is logarithmic.
    pub fn is_y_axis_logarithmic(&self) -> bool {
        self.y_axis_logarithmic
    }

    /// X axis scale.
    pub fn x_scale(&self) -> AxisScale {
        AxisScale::from_logarithmic(self.x_axis_logarithmic)
    }

    /// Y axis scale.
    pub fn y_scale(&self) -> AxisScale {
        AxisScale::from_logarithmic(self.y_axis_logarithmic)
    }

    /// Plot background color.
    pub fn plot_background_color(&self) -> Color {
        self.plot_background_color
    }

    /// Plot border color.
    pub fn plot_border_color(&self) -> Color {
        self.plot_border_color
    }

    /// Whether the plot border is drawn.
    pub fn is_plot_border_visible(&self) -> bool {
        self.plot_border_visible
    }

    /// Grid line color.
    pub fn plot_grid_lines_color(&self) -> Color {
        self.plot_grid_lines_color
    }

    /// Whether grid lines are drawn.
    pub fn is_plot_grid_lines_visible(&self) -> bool {
        self.plot_grid_lines_visible
    }

    /// Whether tick marks are drawn along the plot border.
    pub fn is_plot_ticks_marks_visible(&self) -> bool {
        self.plot_ticks_marks_visible
    }

    /// Error bar color.
    pub fn error_bars_color(&self) -> Color {
        self.error_bars_color
    }

    /// Minimum pixel distance between X ticks.
    pub fn x_tick_spacing_hint(&self) -> f32 {
        self.x_tick_spacing_hint
    }

    /// Minimum pixel distance between Y ticks.
    pub fn y_tick_spacing_hint(&self) -> f32 {
        self.y_tick_spacing_hint
    }

    /// Set the default chart type.
    pub fn with_chart_type(mut self, chart_type: ChartType) -> Self {
        self.chart_type = chart_type;
        self
    }

    /// Set the chart padding.
    pub fn with_chart_padding(mut self, padding: f32) -> Self {
        self.chart_padding = padding;
        self
    }

    /// Override the X axis minimum.
    pub fn with_x_axis_min(mut self, min: f64) -> Self {
        self.x_axis_min = Some(min);
        self
    }

    /// Override the X axis maximum.
    pub fn with_x_axis_max(mut self, max: f64) -> Self {
        self.x_axis_max = Some(max);
        self
    }

    /// Override the Y axis minimum.
    pub fn with_y_axis_min(mut self, min: f64) -> Self {
        self.y_axis_min = Some(min);
        self
    }

    /// Override the Y axis maximum.
    pub fn with_y_axis_max(mut self, max: f64) -> Self {
        self.y_axis_max = Some(max);
        self
    }

    /// Toggle a logarithmic X axis.
    pub fn with_x_axis_logarithmic(mut self, logarithmic: bool) -> Self {
        self.x_axis_logarithmic = logarithmic;
        self
    }

    /// Toggle a logarithmic Y axis.
    pub fn with_y_axis_logarithmic(mut self, logarithmic: bool) -> Self {
        self.y_axis_logarithmic = logarithmic;
        self
    }

    /// Set the plot background color.
    pub fn with_plot_background_color(mut self, color: Color) -> Self {
        self.plot_background_color = color;
        self
    }

    /// Set the plot border color.
    pub fn with_plot_border_color(mut self, color: Color) -> Self {
        self.plot_border_color = color;
        self
    }

    /// Toggle the plot border.
    pub fn with_plot_border_visible(mut self, visible: bool) -> Self {
        self.plot_border_visible = visible;
        self
    }

    /// Set the grid line color.
    pub fn with_plot_grid_lines_color(mut self, color: Color) -> Self {
        self.plot_grid_lines_color = color;
        self
    }

    /// Toggle grid lines.
    pub fn with_plot_grid_lines_visible(mut self, visible: bool) -> Self {
        self.plot_grid_lines_visible = visible;
        self
    }

    /// Toggle border tick marks.
    pub fn with_plot_ticks_marks_visible(mut self, visible: bool) -> Self {
        self.plot_ticks_marks_visible = visible;
        self
    }

    /// Set the error bar color.
    pub fn with_error_bars_color(mut self, color: Color) -> Self {
        self.error_bars_color = color;
        self
    }

    /// Set the tick spacing hints in pixels.
    pub fn with_tick_spacing_hints(mut self, x: f32, y: f32) -> Self {
        self.x_tick_spacing_hint = x;
        self.y_tick_spacing_hint = y;
        self
    }
}
