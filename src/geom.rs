//! Geometric primitives used by the layout pipeline.
//!
//! Data-space coordinates are `f64`; screen-space coordinates are `f32`
//! logical pixels with Y increasing downward.

/// A point in data space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X value in data coordinates.
    pub x: f64,
    /// Y value in data coordinates.
    pub y: f64,
}

impl Point {
    /// Create a new data point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A point in screen space (pixel coordinates).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    /// X value in screen pixels.
    pub x: f32,
    /// Y value in screen pixels.
    pub y: f32,
}

impl ScreenPoint {
    /// Create a new screen point.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A rectangle in screen space (pixel coordinates).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    /// Top-left corner.
    pub min: ScreenPoint,
    /// Bottom-right corner.
    pub max: ScreenPoint,
}

impl ScreenRect {
    /// Create a new screen rectangle from corners.
    pub fn new(min: ScreenPoint, max: ScreenPoint) -> Self {
        Self { min, max }
    }

    /// Create a rectangle from its top-left origin and size.
    pub fn from_origin_size(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: ScreenPoint::new(x, y),
            max: ScreenPoint::new(x + width, y + height),
        }
    }

    /// Left edge.
    pub fn x(&self) -> f32 {
        self.min.x
    }

    /// Top edge.
    pub fn y(&self) -> f32 {
        self.min.y
    }

    /// Rectangle width in pixels.
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Rectangle height in pixels.
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Check whether the rectangle has positive area.
    pub fn is_valid(&self) -> bool {
        self.width() > 0.0 && self.height() > 0.0
    }

    /// Shrink the rectangle by `amount` on every side.
    ///
    /// Collapses to the center instead of inverting.
    pub fn inset(&self, amount: f32) -> Self {
        let dx = amount.min(self.width() * 0.5);
        let dy = amount.min(self.height() * 0.5);
        Self {
            min: ScreenPoint::new(self.min.x + dx, self.min.y + dy),
            max: ScreenPoint::new(self.max.x - dx, self.max.y - dy),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inset_shrinks_every_side() {
        let rect = ScreenRect::from_origin_size(0.0, 0.0, 100.0, 50.0).inset(10.0);
        assert_eq!(rect.min, ScreenPoint::new(10.0, 10.0));
        assert_eq!(rect.max, ScreenPoint::new(90.0, 40.0));
    }

    #[test]
    fn inset_collapses_instead_of_inverting() {
        let rect = ScreenRect::from_origin_size(0.0, 0.0, 10.0, 10.0).inset(20.0);
        assert_eq!(rect.width(), 0.0);
        assert!(!rect.is_valid());
    }
}
