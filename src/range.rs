//! Numeric ranges and combined data bounds.

/// Span substituted for an axis whose resolved bounds coincide.
pub const DEGENERATE_SPAN: f64 = 1.0;

/// Numeric range with inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    /// Minimum value.
    pub min: f64,
    /// Maximum value.
    pub max: f64,
}

impl Range {
    /// Create a new range, swapping bounds if needed.
    pub fn new(mut min: f64, mut max: f64) -> Self {
        if min > max {
            std::mem::swap(&mut min, &mut max);
        }
        Self { min, max }
    }

    /// Range covering a single value.
    pub fn point(value: f64) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Span of the range.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Check whether both bounds are finite.
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Check whether the range has zero span.
    pub fn is_degenerate(&self) -> bool {
        self.span() == 0.0
    }

    /// Expand the range to include a value.
    pub fn expand_to_include(&mut self, value: f64) {
        if !value.is_finite() {
            return;
        }
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    /// Union two ranges if both are finite.
    pub fn union(a: Self, b: Self) -> Option<Self> {
        if !a.is_finite() || !b.is_finite() {
            return None;
        }
        Some(Self {
            min: a.min.min(b.min),
            max: a.max.max(b.max),
        })
    }

    /// Normalized position of `value` inside the range.
    ///
    /// Callers must have resolved degenerate ranges first.
    pub fn normalize(&self, value: f64) -> f64 {
        (value - self.min) / self.span()
    }

    /// Replace a zero span with [`DEGENERATE_SPAN`] centered on the value.
    pub fn non_degenerate(&self) -> Self {
        if !self.is_degenerate() {
            return *self;
        }
        let half = DEGENERATE_SPAN * 0.5;
        Self {
            min: self.min - half,
            max: self.max + half,
        }
    }
}

/// Raw data bounds on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataBounds {
    /// X axis range.
    pub x: Range,
    /// Y axis range.
    pub y: Range,
}

impl DataBounds {
    /// Create bounds from X and Y ranges.
    pub fn new(x: Range, y: Range) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_swaps_inverted_bounds() {
        let range = Range::new(5.0, -1.0);
        assert_eq!(range.min, -1.0);
        assert_eq!(range.max, 5.0);
    }

    #[test]
    fn degenerate_range_is_centered() {
        let range = Range::point(5.0).non_degenerate();
        assert_eq!(range.span(), DEGENERATE_SPAN);
        assert_eq!(range.normalize(5.0), 0.5);
    }

    #[test]
    fn non_degenerate_range_is_untouched() {
        let range = Range::new(0.0, 10.0);
        assert_eq!(range.non_degenerate(), range);
    }

    #[test]
    fn expand_ignores_non_finite() {
        let mut range = Range::point(1.0);
        range.expand_to_include(f64::NAN);
        range.expand_to_include(3.0);
        assert_eq!(range, Range::new(1.0, 3.0));
    }
}
