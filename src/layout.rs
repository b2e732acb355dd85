//! Per-pass pixel layout of the plot area.
//!
//! A [`PlotLayout`] is built once per render pass from the resolved axes and
//! the plot bounds, then shared read-only by the surface and every content
//! variant so overlaid chart types agree on where values land.

use crate::axis::{AxisDirection, AxisScale};
use crate::axis_pair::{CategoryIndex, ChartForm, ResolvedAxes};
use crate::geom::ScreenRect;
use crate::series::XValue;
use crate::transform::{AxisTransform, PixelSpan, PlotTransform};

/// Positional X layout: one equal-width slot per category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotLayout {
    origin: f64,
    grid_step: f64,
    slots: usize,
}

impl SlotLayout {
    /// Divide the X tick span of `bounds` into `slots` whole-pixel slots.
    pub fn new(bounds: ScreenRect, slots: usize) -> Self {
        let span = PixelSpan::for_bounds(AxisDirection::X, bounds);
        let grid_step = if slots == 0 {
            0.0
        } else {
            (span.len / slots as f64).floor()
        };
        Self {
            origin: span.start,
            grid_step,
            slots,
        }
    }

    /// Left pixel of the first slot.
    pub fn origin(&self) -> f64 {
        self.origin
    }

    /// Slot width in whole pixels.
    pub fn grid_step(&self) -> f64 {
        self.grid_step
    }

    /// Number of slots.
    pub fn slots(&self) -> usize {
        self.slots
    }

    /// Left pixel of `slot`.
    pub fn slot_start(&self, slot: usize) -> f64 {
        self.origin + self.grid_step * slot as f64
    }

    /// Center pixel of `slot`.
    pub fn slot_center(&self, slot: usize) -> f64 {
        self.slot_start(slot) + self.grid_step / 2.0
    }
}

/// How X values become pixel columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum XLayout {
    /// Affine map of numeric values.
    Numeric {
        /// Transform over the resolved X range.
        transform: AxisTransform,
        /// Scale applied before the transform.
        scale: AxisScale,
    },
    /// Category slots.
    Slots(SlotLayout),
}

/// Pixel layout shared by everything drawn in one pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotLayout {
    bounds: ScreenRect,
    axes: ResolvedAxes,
    x: XLayout,
    y: AxisTransform,
}

impl PlotLayout {
    /// Lay out resolved axes inside `bounds`.
    pub fn new(axes: ResolvedAxes, bounds: ScreenRect) -> Self {
        let x = match axes.categories() {
            Some(categories) => XLayout::Slots(SlotLayout::new(bounds, categories.len())),
            None => XLayout::Numeric {
                transform: AxisTransform::for_bounds(AxisDirection::X, axes.x_range(), bounds),
                scale: axes.x_axis().scale(),
            },
        };
        let y = AxisTransform::for_bounds(AxisDirection::Y, axes.y_range(), bounds);
        Self { bounds, axes, x, y }
    }

    /// Plot bounds.
    pub fn bounds(&self) -> ScreenRect {
        self.bounds
    }

    /// Resolved axes.
    pub fn axes(&self) -> &ResolvedAxes {
        &self.axes
    }

    /// X layout.
    pub fn x(&self) -> &XLayout {
        &self.x
    }

    /// Y transform (axis space to pixels).
    pub fn y(&self) -> &AxisTransform {
        &self.y
    }

    /// Y scale.
    pub fn y_scale(&self) -> AxisScale {
        self.axes.y_axis().scale()
    }

    /// Chart form of the Y range.
    pub fn form(&self) -> ChartForm {
        self.axes.form()
    }

    /// Category index when X is positional.
    pub fn categories(&self) -> Option<&CategoryIndex> {
        self.axes.categories()
    }

    /// Slot layout when X is positional.
    pub fn slots(&self) -> Option<&SlotLayout> {
        match &self.x {
            XLayout::Slots(slots) => Some(slots),
            XLayout::Numeric { .. } => None,
        }
    }

    /// Full data-to-screen transform, available when X is numeric.
    pub fn plot_transform(&self) -> Option<PlotTransform> {
        match self.x {
            XLayout::Numeric { transform, scale } => {
                Some(PlotTransform::new(transform, self.y, scale, self.y_scale()))
            }
            XLayout::Slots(_) => None,
        }
    }

    /// Pixel column of an X value.
    pub fn x_pixel(&self, value: &XValue) -> Option<f64> {
        match &self.x {
            XLayout::Numeric { transform, scale } => {
                let mapped = scale.map_value(value.as_number()?)?;
                Some(transform.to_pixel(mapped))
            }
            XLayout::Slots(slots) => {
                let slot = self.categories()?.slot(value)?;
                Some(slots.slot_center(slot))
            }
        }
    }

    /// Pixel row of a data-space Y value.
    pub fn y_pixel(&self, value: f64) -> Option<f64> {
        let mapped = self.y_scale().map_value(value)?;
        Some(self.y.to_pixel(mapped))
    }

    /// Axis-space baseline for areas: zero, kept inside the Y range.
    pub fn baseline(&self) -> f64 {
        let range = self.axes.y_range();
        0.0_f64.clamp(range.min, range.max)
    }
}
