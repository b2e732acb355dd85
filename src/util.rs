//! Small numeric helpers shared by the layout pipeline.

/// Fraction of a working dimension reserved for ticks.
const TICK_SPACE_FRACTION: f64 = 0.95;

/// Pixel space available for ticks along a working dimension.
///
/// The remaining 5% is split into margins so the outermost ticks are never
/// clipped by the plot border.
pub fn tick_space(working_space: i32) -> i32 {
    (f64::from(working_space) * TICK_SPACE_FRACTION) as i32
}

/// Offset of the first tick from the start of the working dimension.
pub fn tick_start_offset(working_space: i32, tick_space: i32) -> i32 {
    let margin_space = working_space - tick_space;
    (f64::from(margin_space) / 2.0) as i32
}

/// Raise `base` to a signed integer power.
pub fn signed_pow(base: f64, exponent: i32) -> f64 {
    if exponent > 0 {
        base.powi(exponent)
    } else {
        1.0 / base.powi(-exponent)
    }
}
