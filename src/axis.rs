//! Axis scaling and range resolution.

use std::fmt;

use crate::range::Range;

/// Which dimension an axis measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisDirection {
    /// Horizontal axis.
    X,
    /// Vertical axis; pixel Y grows downward while data Y grows upward.
    Y,
}

impl fmt::Display for AxisDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "X"),
            Self::Y => write!(f, "Y"),
        }
    }
}

/// Axis scale type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisScale {
    /// Linear scaling.
    #[default]
    Linear,
    /// Base-10 logarithmic scaling.
    Log10,
}

impl AxisScale {
    /// Scale from a style flag.
    pub fn from_logarithmic(logarithmic: bool) -> Self {
        if logarithmic { Self::Log10 } else { Self::Linear }
    }

    /// Check whether this is a logarithmic scale.
    pub fn is_log(self) -> bool {
        matches!(self, Self::Log10)
    }

    /// Map a value into axis space.
    pub fn map_value(self, value: f64) -> Option<f64> {
        if !value.is_finite() {
            return None;
        }
        match self {
            Self::Linear => Some(value),
            Self::Log10 => {
                if value <= 0.0 {
                    None
                } else {
                    Some(value.log10())
                }
            }
        }
    }

    /// Invert a value from axis space back into data space.
    pub fn invert_value(self, value: f64) -> Option<f64> {
        if !value.is_finite() {
            return None;
        }
        match self {
            Self::Linear => Some(value),
            Self::Log10 => Some(10_f64.powf(value)),
        }
    }

    /// Check whether a data value can be placed on this scale.
    pub fn accepts(self, value: f64) -> bool {
        match self {
            Self::Linear => true,
            Self::Log10 => value > 0.0,
        }
    }
}

/// Explicit min/max overrides for one axis.
///
/// Overrides are given in axis space: on a logarithmic axis they are
/// exponents, not data values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisOverrides {
    /// Replaces the data-derived minimum.
    pub min: Option<f64>,
    /// Replaces the data-derived maximum.
    pub max: Option<f64>,
}

impl AxisOverrides {
    /// Create overrides from optional bounds.
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }
}

/// Resolve an axis range from data bounds, overrides and scale.
///
/// Overrides replace data bounds unconditionally. Without an override a
/// logarithmic bound becomes `log10(bound)`; the data must already have been
/// validated positive. If an override puts the minimum above the maximum the
/// two bounds are swapped. A zero-span result is widened to
/// [`DEGENERATE_SPAN`](crate::range::DEGENERATE_SPAN) around its value.
pub fn resolve_range(data: Range, overrides: AxisOverrides, scale: AxisScale) -> Range {
    let to_axis = |value: f64| if scale.is_log() { value.log10() } else { value };
    let min = overrides.min.unwrap_or_else(|| to_axis(data.min));
    let max = overrides.max.unwrap_or_else(|| to_axis(data.max));
    if min > max {
        tracing::warn!(min, max, "axis override inverts the range; bounds swapped");
    }
    let resolved = Range::new(min, max);
    if resolved.is_degenerate() {
        tracing::debug!(
            value = resolved.min,
            "zero-span axis range widened around its value"
        );
    }
    resolved.non_degenerate()
}

/// One dimension of a chart: its data range, scale and overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    direction: AxisDirection,
    scale: AxisScale,
    overrides: AxisOverrides,
    data: Option<Range>,
}

impl Axis {
    /// Create an empty axis.
    pub fn new(direction: AxisDirection) -> Self {
        Self {
            direction,
            scale: AxisScale::Linear,
            overrides: AxisOverrides::default(),
            data: None,
        }
    }

    /// Access the axis direction.
    pub fn direction(&self) -> AxisDirection {
        self.direction
    }

    /// Access the axis scale.
    pub fn scale(&self) -> AxisScale {
        self.scale
    }

    /// Access the overrides.
    pub fn overrides(&self) -> AxisOverrides {
        self.overrides
    }

    /// Raw data range, if any data was bound.
    pub fn data_range(&self) -> Option<Range> {
        self.data
    }

    /// Apply the style of a render pass.
    pub(crate) fn configure(&mut self, scale: AxisScale, overrides: AxisOverrides) {
        self.scale = scale;
        self.overrides = overrides;
    }

    pub(crate) fn set_data_range(&mut self, range: Option<Range>) {
        self.data = range;
    }

    /// Resolved range, or `None` when no data was bound.
    pub fn resolved_range(&self) -> Option<Range> {
        self.data
            .map(|data| resolve_range(data, self.overrides, self.scale))
    }
}
