//! Data series and their styling.

use std::cmp::Ordering;
use std::fmt;

use crate::axis::AxisDirection;
use crate::error::{ChartError, Result};
use crate::marker::MarkerShape;
use crate::render::{Color, LinePattern, LineStyle};
use crate::style::ChartType;

/// An X coordinate: numeric or categorical.
///
/// X values are totally ordered so they can key the category index: numbers
/// sort before categories, numbers by [`f64::total_cmp`], categories
/// lexically.
#[derive(Debug, Clone)]
pub enum XValue {
    /// Numeric coordinate (timestamps included).
    Number(f64),
    /// Named category.
    Category(String),
}

impl XValue {
    /// Numeric value, if any.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Category(_) => None,
        }
    }

    /// Check whether this is a category.
    pub fn is_category(&self) -> bool {
        matches!(self, Self::Category(_))
    }
}

impl PartialEq for XValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for XValue {}

impl PartialOrd for XValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for XValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Number(_), Self::Category(_)) => Ordering::Less,
            (Self::Category(_), Self::Number(_)) => Ordering::Greater,
            (Self::Category(a), Self::Category(b)) => a.cmp(b),
        }
    }
}

impl fmt::Display for XValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Category(name) => f.write_str(name),
        }
    }
}

impl From<f64> for XValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for XValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for XValue {
    fn from(value: &str) -> Self {
        Self::Category(value.to_string())
    }
}

impl From<String> for XValue {
    fn from(value: String) -> Self {
        Self::Category(value)
    }
}

/// Visual styling of one series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStyle {
    /// Line and marker color.
    pub stroke_color: Color,
    /// Bar and area fill color.
    pub fill_color: Color,
    /// Marker drawn at each point, if any.
    pub marker: Option<MarkerShape>,
    /// Connecting line pattern, `None` for no line.
    pub line: Option<LinePattern>,
    /// Connecting line width in pixels.
    pub line_width: f32,
}

impl SeriesStyle {
    /// Stroke used for the connecting line, if one is drawn.
    pub fn line_style(&self) -> Option<LineStyle> {
        self.line.map(|pattern| LineStyle {
            color: self.stroke_color,
            width: self.line_width,
            pattern,
        })
    }

    /// Set both stroke and fill from one color; the fill is translucent.
    pub fn with_color(mut self, color: Color) -> Self {
        self.stroke_color = color;
        self.fill_color = color.with_alpha(color.a * 0.75);
        self
    }
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            stroke_color: Color::BLACK,
            fill_color: Color::new(0.0, 0.0, 0.0, 0.75),
            marker: Some(MarkerShape::Circle),
            line: Some(LinePattern::Solid),
            line_width: 2.0,
        }
    }
}

/// A named sequence of points.
///
/// `x` and `y` must have equal length; error bars, when present, must match
/// `y`. The checks run in [`Series::validate`] before any layout work.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    name: String,
    x: Vec<XValue>,
    y: Vec<f64>,
    error_bars: Option<Vec<f64>>,
    style: SeriesStyle,
    chart_type: Option<ChartType>,
}

impl Series {
    /// Create a series from X and Y values.
    pub fn new<X, IX, IY>(name: impl Into<String>, x: IX, y: IY) -> Self
    where
        X: Into<XValue>,
        IX: IntoIterator<Item = X>,
        IY: IntoIterator<Item = f64>,
    {
        Self {
            name: name.into(),
            x: x.into_iter().map(Into::into).collect(),
            y: y.into_iter().collect(),
            error_bars: None,
            style: SeriesStyle::default(),
            chart_type: None,
        }
    }

    /// Create a series whose X values are the indices `1..=len`.
    pub fn from_iter_y<I>(name: impl Into<String>, y: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let y: Vec<f64> = y.into_iter().collect();
        let x = (1..=y.len()).map(|index| XValue::Number(index as f64));
        Self::new(name, x, y)
    }

    /// Attach error-bar magnitudes.
    pub fn with_error_bars<I>(mut self, errors: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        self.error_bars = Some(errors.into_iter().collect());
        self
    }

    /// Replace the style.
    pub fn with_style(mut self, style: SeriesStyle) -> Self {
        self.style = style;
        self
    }

    /// Render this series as `chart_type` regardless of the chart default.
    pub fn with_chart_type(mut self, chart_type: ChartType) -> Self {
        self.chart_type = Some(chart_type);
        self
    }

    /// Access the series name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Access the X values.
    pub fn x(&self) -> &[XValue] {
        &self.x
    }

    /// Access the Y values.
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Access the error bars.
    pub fn error_bars(&self) -> Option<&[f64]> {
        self.error_bars.as_deref()
    }

    /// Access the style.
    pub fn style(&self) -> &SeriesStyle {
        &self.style
    }

    /// Chart type override, if any.
    pub fn chart_type(&self) -> Option<ChartType> {
        self.chart_type
    }

    /// Chart type used for this series under a chart default.
    pub fn effective_chart_type(&self, default: ChartType) -> ChartType {
        self.chart_type.unwrap_or(default)
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.y.len()
    }

    /// Check whether the series has no points.
    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// Iterate over `(x, y, error)` triples.
    pub fn points(&self) -> impl Iterator<Item = (&XValue, f64, Option<f64>)> + '_ {
        self.x.iter().zip(&self.y).enumerate().map(|(index, (x, y))| {
            let error = self
                .error_bars
                .as_ref()
                .and_then(|errors| errors.get(index).copied());
            (x, *y, error)
        })
    }

    /// Lowest and highest Y including error bars.
    pub(crate) fn y_extent(y: f64, error: Option<f64>) -> (f64, f64) {
        match error {
            Some(error) => (y - error.abs(), y + error.abs()),
            None => (y, y),
        }
    }

    /// Check the shape invariants.
    pub fn validate(&self) -> Result<()> {
        if self.x.len() != self.y.len() {
            return Err(ChartError::ShapeMismatch {
                series: self.name.clone(),
                x_len: self.x.len(),
                y_len: self.y.len(),
            });
        }
        if let Some(errors) = &self.error_bars {
            if errors.len() != self.y.len() {
                return Err(ChartError::ErrorBarMismatch {
                    series: self.name.clone(),
                    y_len: self.y.len(),
                    error_len: errors.len(),
                });
            }
        }
        if self.y.is_empty() {
            return Err(ChartError::EmptySeries {
                series: self.name.clone(),
            });
        }
        let non_finite = |axis, value| ChartError::NonFinite {
            axis,
            series: self.name.clone(),
            value,
        };
        if let Some(x) = self
            .x
            .iter()
            .filter_map(XValue::as_number)
            .find(|x| !x.is_finite())
        {
            return Err(non_finite(AxisDirection::X, x));
        }
        let errors = self.error_bars.iter().flatten();
        if let Some(y) = self.y.iter().chain(errors).find(|y| !y.is_finite()) {
            return Err(non_finite(AxisDirection::Y, *y));
        }
        Ok(())
    }
}
