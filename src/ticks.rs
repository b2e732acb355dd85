//! Tick placement for both axes.

use crate::axis::AxisScale;
use crate::layout::{PlotLayout, XLayout};
use crate::transform::AxisTransform;
use crate::util::signed_pow;

const NICE_STEPS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];
const MAX_TICKS: usize = 1000;

/// One tick: a data value and where it lands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    /// Value in data space (not log-transformed).
    pub value: f64,
    /// Pixel coordinate along the axis.
    pub pixel: f64,
}

/// Ticks of both axes for one layout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisTicks {
    /// Ticks along X, left to right.
    pub x: Vec<Tick>,
    /// Ticks along Y, bottom to top.
    pub y: Vec<Tick>,
}

impl AxisTicks {
    /// Compute ticks for `layout` with minimum pixel spacings.
    pub fn compute(layout: &PlotLayout, x_spacing: f32, y_spacing: f32) -> Self {
        let x = match layout.x() {
            XLayout::Numeric { transform, scale } => scaled_ticks(transform, *scale, x_spacing),
            XLayout::Slots(slots) => (0..slots.slots())
                .map(|slot| Tick {
                    value: slot as f64,
                    pixel: slots.slot_center(slot),
                })
                .collect(),
        };
        let y = scaled_ticks(layout.y(), layout.y_scale(), y_spacing);
        Self { x, y }
    }
}

fn scaled_ticks(transform: &AxisTransform, scale: AxisScale, spacing: f32) -> Vec<Tick> {
    match scale {
        AxisScale::Linear => linear_ticks(transform, spacing),
        AxisScale::Log10 => log_ticks(transform, spacing),
    }
}

/// Ticks at "nice" multiples spaced at least `spacing` pixels apart.
pub fn linear_ticks(transform: &AxisTransform, spacing: f32) -> Vec<Tick> {
    let range = transform.range();
    let max_ticks = (transform.pixel_span() / f64::from(spacing.max(1.0))).floor();
    if max_ticks < 1.0 || !range.is_finite() {
        return Vec::new();
    }
    let step = nice_step(range.span() / max_ticks);
    let epsilon = step * 1e-9;
    let first = (range.min / step).ceil() * step;
    (0..MAX_TICKS)
        .map(|index| first + step * index as f64)
        .take_while(|value| *value <= range.max + epsilon)
        .map(|value| {
            // snap -0.0 and float noise such as 0.30000000000000004
            let value = if value.abs() < epsilon { 0.0 } else { value };
            Tick {
                value,
                pixel: transform.to_pixel(value),
            }
        })
        .collect()
}

/// Ticks on whole decades spaced at least `spacing` pixels apart; falls back
/// to linear ticks on the exponent when the range spans less than a decade.
///
/// Wide ranges skip decades with a stride, so the count never exceeds
/// [`MAX_TICKS`] whatever the exponent range.
pub fn log_ticks(transform: &AxisTransform, spacing: f32) -> Vec<Tick> {
    let range = transform.range();
    if !range.is_finite() {
        return Vec::new();
    }
    let first = range.min.ceil();
    let last = range.max.floor();
    if first > last {
        return linear_ticks(transform, spacing)
            .into_iter()
            .map(|tick| Tick {
                value: 10_f64.powf(tick.value),
                pixel: tick.pixel,
            })
            .collect();
    }
    let decade_pixels = transform.pixel_span() / range.span();
    let stride = decade_stride(decade_pixels, f64::from(spacing), last - first);
    let first = (first / stride).ceil() * stride;
    (0..MAX_TICKS)
        .map(|index| first + stride * index as f64)
        .take_while(|exponent| *exponent <= last)
        .map(|exponent| Tick {
            // beyond ±400 the power is 0 or infinite either way
            value: signed_pow(10.0, exponent.clamp(-400.0, 400.0) as i32),
            pixel: transform.to_pixel(exponent),
        })
        .collect()
}

/// Whole number of decades between ticks.
fn decade_stride(decade_pixels: f64, spacing: f64, decades: f64) -> f64 {
    let by_spacing = if decade_pixels > 0.0 {
        (spacing / decade_pixels).ceil()
    } else {
        1.0
    };
    let by_count = (decades / (MAX_TICKS - 1) as f64).ceil();
    by_spacing.max(by_count).max(1.0)
}

/// Smallest step of the form {1, 2, 2.5, 5} × 10^k that is ≥ `raw`.
pub fn nice_step(raw: f64) -> f64 {
    if !(raw.is_finite() && raw > 0.0) {
        return 1.0;
    }
    let magnitude = signed_pow(10.0, raw.log10().floor() as i32);
    NICE_STEPS
        .iter()
        .map(|step| step * magnitude)
        .find(|step| *step >= raw * (1.0 - 1e-12))
        .unwrap_or(10.0 * magnitude)
}
