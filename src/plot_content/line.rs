//! Line, area and scatter geometry.

use crate::geom::ScreenPoint;
use crate::layout::PlotLayout;
use crate::marker::MarkerShape;
use crate::render::{Color, LineSegment, LineStyle, Paint, Path, RenderList};
use crate::series::Series;

/// Half width of an error bar cap in pixels.
const ERROR_BAR_CAP: f32 = 3.0;

/// Which parts of a point series are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PointKind {
    Line,
    Area,
    Scatter,
}

#[derive(Debug, Clone, Copy)]
struct PlacedPoint {
    screen: ScreenPoint,
    error: Option<(f32, f32)>,
}

pub(crate) fn emit(
    kind: PointKind,
    layout: &PlotLayout,
    series: &Series,
    error_bars_color: Color,
    out: &mut RenderList,
) {
    let points = place_points(layout, series);
    if points.is_empty() {
        return;
    }
    let style = series.style();
    let screens: Vec<ScreenPoint> = points.iter().map(|point| point.screen).collect();

    if kind == PointKind::Area && screens.len() > 1 {
        let baseline = layout.y().to_pixel(layout.baseline()) as f32;
        out.push_path(area_path(&screens, baseline), Paint::Fill(style.fill_color));
    }

    if kind != PointKind::Scatter && screens.len() > 1 {
        if let Some(line) = style.line_style() {
            out.push_path(Path::polyline(&screens), Paint::Stroke(line));
        }
    }

    let error_bars: Vec<LineSegment> = points
        .iter()
        .filter_map(|point| Some((point.screen.x, point.error?)))
        .flat_map(|(x, (top, bottom))| error_bar(x, top, bottom))
        .collect();
    out.push_segments(error_bars, LineStyle::solid(error_bars_color, 1.0));

    let marker = match kind {
        PointKind::Scatter => Some(style.marker.unwrap_or(MarkerShape::Circle)),
        PointKind::Line | PointKind::Area => style.marker,
    };
    if let Some(marker) = marker {
        for screen in &screens {
            marker.paint_solid(out, *screen, style.stroke_color);
        }
    }
}

/// Transform every point the axes can place, in series order.
fn place_points(layout: &PlotLayout, series: &Series) -> Vec<PlacedPoint> {
    series
        .points()
        .filter_map(|(x, y, error)| {
            let px = layout.x_pixel(x)?;
            let py = layout.y_pixel(y)?;
            let error = error.and_then(|error| {
                let error = error.abs();
                let top = layout.y_pixel(y + error)?;
                let bottom = layout.y_pixel(y - error)?;
                Some((top as f32, bottom as f32))
            });
            Some(PlacedPoint {
                screen: ScreenPoint::new(px as f32, py as f32),
                error,
            })
        })
        .collect()
}

/// Closed outline from the first point down to the baseline and back.
fn area_path(points: &[ScreenPoint], baseline: f32) -> Path {
    let mut outline = Vec::with_capacity(points.len() + 2);
    if let (Some(first), Some(last)) = (points.first(), points.last()) {
        outline.push(ScreenPoint::new(first.x, baseline));
        outline.extend_from_slice(points);
        outline.push(ScreenPoint::new(last.x, baseline));
    }
    Path::polygon(&outline)
}

fn error_bar(x: f32, top: f32, bottom: f32) -> [LineSegment; 3] {
    [
        LineSegment::new(ScreenPoint::new(x, top), ScreenPoint::new(x, bottom)),
        LineSegment::new(
            ScreenPoint::new(x - ERROR_BAR_CAP, bottom),
            ScreenPoint::new(x + ERROR_BAR_CAP, bottom),
        ),
        LineSegment::new(
            ScreenPoint::new(x - ERROR_BAR_CAP, top),
            ScreenPoint::new(x + ERROR_BAR_CAP, top),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis_pair::AxisPair;
    use crate::geom::ScreenRect;
    use crate::render::{PathElement, RenderCommand};
    use crate::series::SeriesStyle;
    use crate::style::StyleConfig;

    fn render(kind: PointKind, series: Series) -> RenderList {
        render_styled(kind, series, &StyleConfig::new())
    }

    fn render_styled(kind: PointKind, series: Series, style: &StyleConfig) -> RenderList {
        let mut pair = AxisPair::new();
        pair.add_series(series).unwrap();
        let bounds = ScreenRect::from_origin_size(0.0, 0.0, 400.0, 200.0);
        let layout = PlotLayout::new(pair.resolve(style).unwrap(), bounds);
        let mut out = RenderList::new();
        let series = &pair.series_map()[0];
        emit(kind, &layout, series, Color::BLACK, &mut out);
        out
    }

    #[test]
    fn line_connects_points_then_marks_them() {
        let out = render(PointKind::Line, Series::new("a", [0, 1, 2], [0.0, 1.0, 0.0]));
        assert_eq!(out.len(), 4);
        match &out.commands()[0] {
            RenderCommand::Path { path, paint } => {
                assert_eq!(path.vertices().len(), 3);
                assert!(matches!(paint, Paint::Stroke(_)));
                assert_ne!(path.elements().last(), Some(&PathElement::Close));
            }
            other => panic!("expected polyline, got {other:?}"),
        }
    }

    #[test]
    fn log_axis_places_points_by_decade() {
        let style = StyleConfig::new().with_y_axis_logarithmic(true);
        let series = Series::new("a", [0, 1, 2], [1.0, 10.0, 100.0]);
        let out = render_styled(PointKind::Area, series, &style);
        let paths: Vec<Vec<ScreenPoint>> = out
            .commands()
            .iter()
            .filter_map(|command| match command {
                RenderCommand::Path { path, .. } => Some(path.vertices()),
                _ => None,
            })
            .collect();
        // exponents [0, 2] over a 190 px span starting at 5
        let expected = [195.0, 100.0, 5.0];
        let line = &paths[1];
        assert_eq!(line.len(), 3);
        for (point, y) in line.iter().zip(expected) {
            assert!((point.y - y).abs() < 1e-3, "{point:?}");
        }
        // area baseline sits at the bottom exponent, not at log(0)
        let area = &paths[0];
        assert!((area[0].y - 195.0).abs() < 1e-3);
        assert!((area[4].y - 195.0).abs() < 1e-3);
    }

    #[test]
    fn single_point_draws_marker_only() {
        let out = render(PointKind::Line, Series::new("a", [3], [7.0]));
        assert_eq!(out.len(), 1);
        assert!(matches!(out.commands()[0], RenderCommand::Ellipse { .. }));
    }

    #[test]
    fn area_closes_to_baseline() {
        let out = render(PointKind::Area, Series::new("a", [0, 1], [-1.0, 3.0]));
        match &out.commands()[0] {
            RenderCommand::Path { path, paint } => {
                assert!(matches!(paint, Paint::Fill(_)));
                let vertices = path.vertices();
                assert_eq!(vertices.len(), 4);
                // zero sits a quarter of the way up the [-1, 3] range
                let zero = 5.0 + 190.0 - 0.25 * 190.0;
                assert_eq!(vertices[0].y, zero as f32);
                assert_eq!(vertices[3].y, zero as f32);
                assert_eq!(path.elements().last(), Some(&PathElement::Close));
            }
            other => panic!("expected area fill, got {other:?}"),
        }
    }

    #[test]
    fn scatter_never_connects_points() {
        let series = Series::new("a", [0, 1, 2], [1.0, 2.0, 3.0])
            .with_style(SeriesStyle {
                marker: None,
                ..SeriesStyle::default()
            });
        let out = render(PointKind::Scatter, series);
        assert_eq!(out.len(), 3);
        assert!(
            out.commands()
                .iter()
                .all(|command| matches!(command, RenderCommand::Ellipse { .. }))
        );
    }

    #[test]
    fn error_bars_have_caps() {
        let series = Series::new("a", [0, 1], [2.0, 4.0])
            .with_error_bars([1.0, 1.0])
            .with_style(SeriesStyle {
                marker: None,
                line: None,
                ..SeriesStyle::default()
            });
        let out = render(PointKind::Line, series);
        assert_eq!(out.len(), 1);
        match &out.commands()[0] {
            RenderCommand::LineSegments { segments, .. } => {
                assert_eq!(segments.len(), 6);
                let stem = segments[0];
                assert_eq!(stem.start.x, stem.end.x);
                assert!(stem.start.y < stem.end.y);
            }
            other => panic!("expected error bars, got {other:?}"),
        }
    }
}
