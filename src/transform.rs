//! Coordinate transforms between axis space and screen space.

use crate::axis::{AxisDirection, AxisScale};
use crate::geom::{Point, ScreenPoint, ScreenRect};
use crate::range::Range;
use crate::util::{tick_space, tick_start_offset};

/// Affine map from one resolved axis range onto a pixel span.
///
/// Values are in axis space: callers apply `log10` first on logarithmic
/// axes. The Y axis is flipped so larger values land higher on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisTransform {
    range: Range,
    pixel_start: f64,
    pixel_span: f64,
    flipped: bool,
}

impl AxisTransform {
    /// Create a transform over an explicit pixel span.
    ///
    /// A degenerate `range` is widened first so the map never divides by
    /// zero.
    pub fn new(range: Range, pixel_start: f64, pixel_span: f64, flipped: bool) -> Self {
        Self {
            range: range.non_degenerate(),
            pixel_start,
            pixel_span,
            flipped,
        }
    }

    /// Transform for one axis of `bounds`, leaving the 5% tick margin.
    pub fn for_bounds(direction: AxisDirection, range: Range, bounds: ScreenRect) -> Self {
        let span = PixelSpan::for_bounds(direction, bounds);
        Self::new(
            range,
            span.start,
            span.len,
            direction == AxisDirection::Y,
        )
    }

    /// Resolved range being mapped.
    pub fn range(&self) -> Range {
        self.range
    }

    /// First pixel of the span (top edge for the Y axis).
    pub fn pixel_start(&self) -> f64 {
        self.pixel_start
    }

    /// Length of the span in pixels.
    pub fn pixel_span(&self) -> f64 {
        self.pixel_span
    }

    /// Map an axis-space value to a pixel coordinate.
    pub fn to_pixel(&self, value: f64) -> f64 {
        let offset = self.range.normalize(value) * self.pixel_span;
        if self.flipped {
            self.pixel_start + self.pixel_span - offset
        } else {
            self.pixel_start + offset
        }
    }

    /// Map a pixel coordinate back to an axis-space value.
    pub fn from_pixel(&self, pixel: f64) -> f64 {
        let offset = if self.flipped {
            self.pixel_start + self.pixel_span - pixel
        } else {
            pixel - self.pixel_start
        };
        self.range.min + offset / self.pixel_span * self.range.span()
    }
}

/// Tick span of one dimension of a plot rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelSpan {
    /// First pixel of the tick span.
    pub start: f64,
    /// Tick span length in whole pixels.
    pub len: f64,
}

impl PixelSpan {
    /// Tick span along one axis of `bounds`.
    ///
    /// Along Y the margin is measured from the bottom edge, so the span ends
    /// `margin` pixels above it.
    pub fn for_bounds(direction: AxisDirection, bounds: ScreenRect) -> Self {
        let (origin, extent) = match direction {
            AxisDirection::X => (bounds.x(), bounds.width()),
            AxisDirection::Y => (bounds.y(), bounds.height()),
        };
        let working = extent as i32;
        let space = tick_space(working);
        let margin = tick_start_offset(working, space);
        // the flip uses the fractional height; only the tick space is whole
        let start = match direction {
            AxisDirection::X => f64::from(origin) + f64::from(margin),
            AxisDirection::Y => {
                f64::from(origin) + f64::from(extent) - f64::from(margin + space)
            }
        };
        Self {
            start,
            len: f64::from(space),
        }
    }
}

/// Transform of both axes for numeric data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotTransform {
    x: AxisTransform,
    y: AxisTransform,
    x_scale: AxisScale,
    y_scale: AxisScale,
}

impl PlotTransform {
    /// Combine per-axis transforms with their scales.
    pub fn new(x: AxisTransform, y: AxisTransform, x_scale: AxisScale, y_scale: AxisScale) -> Self {
        Self {
            x,
            y,
            x_scale,
            y_scale,
        }
    }

    /// Access the X transform.
    pub fn x(&self) -> &AxisTransform {
        &self.x
    }

    /// Access the Y transform.
    pub fn y(&self) -> &AxisTransform {
        &self.y
    }

    /// Map a data point into screen space.
    pub fn data_to_screen(&self, point: Point) -> Option<ScreenPoint> {
        let x = self.x_scale.map_value(point.x)?;
        let y = self.y_scale.map_value(point.y)?;
        Some(ScreenPoint::new(
            self.x.to_pixel(x) as f32,
            self.y.to_pixel(y) as f32,
        ))
    }

    /// Map a screen point into data space.
    pub fn screen_to_data(&self, point: ScreenPoint) -> Option<Point> {
        let x = self.x_scale.invert_value(self.x.from_pixel(f64::from(point.x)))?;
        let y = self.y_scale.invert_value(self.y.from_pixel(f64::from(point.y)))?;
        Some(Point::new(x, y))
    }
}
