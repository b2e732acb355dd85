//! Grouped bar geometry.

use std::collections::BTreeMap;

use crate::geom::ScreenPoint;
use crate::layout::PlotLayout;
use crate::render::{Paint, Path, RenderList};
use crate::series::{Series, XValue};

/// Bars take this fraction less than their share of a slot.
const BAR_GAP_DIVISOR: f64 = 1.1;
/// Inset of the first bar from the slot edge, as a fraction of the slot.
const BAR_MARGIN_FRACTION: f64 = 0.05;
/// Bars stop one pixel short of the axis line.
const AXIS_INSET: f64 = 1.0;

/// Position of a series among the bar series of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarGroup {
    /// Zero-based index of this series among bar series.
    pub index: usize,
    /// Number of bar series sharing each slot.
    pub count: usize,
}

/// Pixel width of one bar in a slot of `grid_step` pixels.
pub fn bar_width(grid_step: f64, count: usize) -> f64 {
    (grid_step / count.max(1) as f64).floor() / BAR_GAP_DIVISOR
}

/// Emit one filled rectangle per category the series has a value for.
///
/// Slots are positional: a category the series lacks leaves a gap, and the
/// remaining bars stay aligned with the other series.
pub(crate) fn emit(layout: &PlotLayout, series: &Series, group: BarGroup, out: &mut RenderList) {
    let (Some(slots), Some(categories)) = (layout.slots(), layout.categories()) else {
        return;
    };
    let mut values: BTreeMap<&XValue, f64> = BTreeMap::new();
    for (x, y) in series.x().iter().zip(series.y()) {
        values.entry(x).or_insert(*y);
    }

    let width = bar_width(slots.grid_step(), group.count);
    let margin = slots.grid_step() * BAR_MARGIN_FRACTION;
    let range = layout.axes().y_range();
    let fill = Paint::Fill(series.style().fill_color);

    for (category, bar_index) in categories.iter() {
        let Some(value) = values.get(category) else {
            continue;
        };
        let Some(value) = layout.y_scale().map_value(*value) else {
            continue;
        };
        let (top, bottom) = layout.form().bar_extent(value, range);
        let y_top = layout.y().to_pixel(top) + AXIS_INSET;
        let y_bottom = layout.y().to_pixel(bottom) + AXIS_INSET;
        let x = slots.slot_start(bar_index) + width * group.index as f64 + margin;
        out.push_path(
            Path::rect(
                ScreenPoint::new(x as f32, y_top as f32),
                ScreenPoint::new((x + width) as f32, y_bottom as f32),
            ),
            fill,
        );
    }
}
