//! Plot surface: background, grid lines, border tick marks and border.

use crate::geom::{ScreenPoint, ScreenRect};
use crate::render::{LinePattern, LineSegment, LineStyle, RectStyle, RenderCommand, RenderList};
use crate::style::StyleConfig;
use crate::ticks::AxisTicks;

const TICK_MARK_LENGTH: f32 = 3.0;

/// Emit the plot surface behind the series content.
pub fn emit_surface(bounds: ScreenRect, ticks: &AxisTicks, style: &StyleConfig, out: &mut RenderList) {
    out.push(RenderCommand::Rect {
        rect: bounds,
        style: RectStyle::filled(style.plot_background_color()),
    });

    let xs = visible(ticks.x.iter().map(|tick| tick.pixel as f32), bounds.min.x, bounds.max.x);
    let ys = visible(ticks.y.iter().map(|tick| tick.pixel as f32), bounds.min.y, bounds.max.y);

    if style.is_plot_grid_lines_visible() {
        let mut segments = Vec::with_capacity(xs.len() + ys.len());
        for x in &xs {
            segments.push(LineSegment::new(
                ScreenPoint::new(*x, bounds.min.y),
                ScreenPoint::new(*x, bounds.max.y),
            ));
        }
        for y in &ys {
            segments.push(LineSegment::new(
                ScreenPoint::new(bounds.min.x, *y),
                ScreenPoint::new(bounds.max.x, *y),
            ));
        }
        out.push_segments(
            segments,
            LineStyle {
                color: style.plot_grid_lines_color(),
                width: 1.0,
                pattern: LinePattern::Dashed,
            },
        );
    }

    if style.is_plot_ticks_marks_visible() {
        let mut segments = Vec::with_capacity(2 * (xs.len() + ys.len()));
        for x in &xs {
            segments.push(LineSegment::new(
                ScreenPoint::new(*x, bounds.max.y),
                ScreenPoint::new(*x, bounds.max.y - TICK_MARK_LENGTH),
            ));
            segments.push(LineSegment::new(
                ScreenPoint::new(*x, bounds.min.y),
                ScreenPoint::new(*x, bounds.min.y + TICK_MARK_LENGTH),
            ));
        }
        for y in &ys {
            segments.push(LineSegment::new(
                ScreenPoint::new(bounds.min.x, *y),
                ScreenPoint::new(bounds.min.x + TICK_MARK_LENGTH, *y),
            ));
            segments.push(LineSegment::new(
                ScreenPoint::new(bounds.max.x, *y),
                ScreenPoint::new(bounds.max.x - TICK_MARK_LENGTH, *y),
            ));
        }
        out.push_segments(segments, LineStyle::solid(style.plot_border_color(), 1.0));
    }

    if style.is_plot_border_visible() {
        out.push(RenderCommand::Rect {
            rect: bounds,
            style: RectStyle::outlined(style.plot_border_color(), 1.0),
        });
    }
}

fn visible(pixels: impl Iterator<Item = f32>, min: f32, max: f32) -> Vec<f32> {
    pixels.filter(|pixel| *pixel >= min && *pixel <= max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ticks::Tick;

    fn ticks() -> AxisTicks {
        AxisTicks {
            x: vec![
                Tick { value: 0.0, pixel: 10.0 },
                Tick { value: 1.0, pixel: 500.0 },
            ],
            y: vec![Tick { value: 0.0, pixel: 50.0 }],
        }
    }

    #[test]
    fn full_surface_has_four_layers() {
        let bounds = ScreenRect::from_origin_size(0.0, 0.0, 100.0, 100.0);
        let mut out = RenderList::new();
        emit_surface(bounds, &ticks(), &StyleConfig::new(), &mut out);
        assert_eq!(out.len(), 4);
        match &out.commands()[1] {
            RenderCommand::LineSegments { segments, style } => {
                // the tick at x=500 lies outside the plot
                assert_eq!(segments.len(), 2);
                assert_eq!(style.pattern, LinePattern::Dashed);
            }
            other => panic!("expected grid lines, got {other:?}"),
        }
    }

    #[test]
    fn hidden_layers_are_skipped() {
        let bounds = ScreenRect::from_origin_size(0.0, 0.0, 100.0, 100.0);
        let style = StyleConfig::new()
            .with_plot_grid_lines_visible(false)
            .with_plot_ticks_marks_visible(false)
            .with_plot_border_visible(false);
        let mut out = RenderList::new();
        emit_surface(bounds, &ticks(), &style, &mut out);
        assert_eq!(out.len(), 1);
        assert!(matches!(out.commands()[0], RenderCommand::Rect { .. }));
    }
}
