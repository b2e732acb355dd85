//! Marker glyphs painted at data points.
//!
//! Every shape is laid out around its center from [`SIZE`] and
//! [`HALF_SIZE`]. Closed shapes are filled, open shapes (cross, plus) are
//! stroked.

use serde::Deserialize;

use crate::geom::{ScreenPoint, ScreenRect};
use crate::render::{Color, LineSegment, LineStyle, Paint, Path, RenderCommand, RenderList};

/// Marker edge length in pixels.
pub const SIZE: f32 = 8.0;
/// Half of [`SIZE`].
pub const HALF_SIZE: f32 = SIZE / 2.0;

/// Marker shape for data points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerShape {
    /// Filled circle.
    Circle,
    /// Filled square.
    Square,
    /// Filled diamond.
    Diamond,
    /// Filled triangle with its apex up.
    TriangleUp,
    /// Filled triangle with its apex down.
    TriangleDown,
    /// Diagonal cross, stroked.
    Cross,
    /// Upright plus, stroked.
    Plus,
}

/// Geometry of one marker, before painting.
#[derive(Debug, Clone, PartialEq)]
pub enum MarkerGeometry {
    /// Ellipse inscribed in a rectangle.
    Ellipse(ScreenRect),
    /// Closed polygon to fill.
    Polygon(Path),
    /// Open strokes.
    Strokes(Vec<LineSegment>),
}

impl MarkerShape {
    /// Whether the shape is filled rather than stroked.
    pub fn is_closed(self) -> bool {
        !matches!(self, Self::Cross | Self::Plus)
    }

    /// Geometry centered at `center` with the default [`SIZE`].
    pub fn geometry(self, center: ScreenPoint) -> MarkerGeometry {
        self.geometry_with_size(center, SIZE)
    }

    /// Geometry centered at `center` for an arbitrary edge length.
    pub fn geometry_with_size(self, center: ScreenPoint, size: f32) -> MarkerGeometry {
        let half = size / 2.0;
        let ScreenPoint { x, y } = center;
        match self {
            Self::Circle => {
                MarkerGeometry::Ellipse(ScreenRect::from_origin_size(x - half, y - half, size, size))
            }
            Self::Square => MarkerGeometry::Polygon(Path::rect(
                ScreenPoint::new(x - half, y - half),
                ScreenPoint::new(x + half, y + half),
            )),
            Self::Diamond => MarkerGeometry::Polygon(Path::polygon(&[
                ScreenPoint::new(x, y - half),
                ScreenPoint::new(x + half, y),
                ScreenPoint::new(x, y + half),
                ScreenPoint::new(x - half, y),
            ])),
            Self::TriangleUp => MarkerGeometry::Polygon(triangle(center, size, 1.0)),
            Self::TriangleDown => MarkerGeometry::Polygon(triangle(center, size, -1.0)),
            Self::Cross => MarkerGeometry::Strokes(vec![
                LineSegment::new(
                    ScreenPoint::new(x - half, y - half),
                    ScreenPoint::new(x + half, y + half),
                ),
                LineSegment::new(
                    ScreenPoint::new(x - half, y + half),
                    ScreenPoint::new(x + half, y - half),
                ),
            ]),
            Self::Plus => MarkerGeometry::Strokes(vec![
                LineSegment::new(ScreenPoint::new(x - half, y), ScreenPoint::new(x + half, y)),
                LineSegment::new(ScreenPoint::new(x, y - half), ScreenPoint::new(x, y + half)),
            ]),
        }
    }

    /// Paint the marker at `center`.
    ///
    /// Closed shapes are filled with the stroke color; open shapes are
    /// stroked with `stroke`.
    pub fn paint(self, out: &mut RenderList, center: ScreenPoint, stroke: LineStyle) {
        match self.geometry(center) {
            MarkerGeometry::Ellipse(rect) => out.push(RenderCommand::Ellipse {
                rect,
                paint: Paint::Fill(stroke.color),
            }),
            MarkerGeometry::Polygon(path) => out.push_path(path, Paint::Fill(stroke.color)),
            MarkerGeometry::Strokes(segments) => out.push_segments(segments, stroke),
        }
    }

    /// Paint the marker with a solid one-pixel stroke of `color`.
    pub fn paint_solid(self, out: &mut RenderList, center: ScreenPoint, color: Color) {
        self.paint(out, center, LineStyle::solid(color, 1.0));
    }
}

// Bounding box is (size + 1) square; the apex sits `half` from the center
// and the base `size + 1 - half` on the other side. `direction` is 1.0 for
// apex up and -1.0 for apex down.
fn triangle(center: ScreenPoint, size: f32, direction: f32) -> Path {
    let half = size / 2.0;
    let apex = half * direction;
    let base = (size + 1.0 - half) * direction;
    Path::polygon(&[
        ScreenPoint::new(center.x - half, center.y + base),
        ScreenPoint::new(center.x - half + size + 1.0, center.y + base),
        ScreenPoint::new(center.x, center.y - apex),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn polygon_vertices(geometry: MarkerGeometry) -> Vec<ScreenPoint> {
        match geometry {
            MarkerGeometry::Polygon(path) => path.vertices(),
            other => panic!("expected polygon, got {other:?}"),
        }
    }

    #[test]
    fn triangle_up_matches_reference_layout() {
        let vertices = polygon_vertices(MarkerShape::TriangleUp.geometry(ScreenPoint::new(10.0, 20.0)));
        assert_eq!(
            vertices,
            vec![
                ScreenPoint::new(6.0, 25.0),
                ScreenPoint::new(15.0, 25.0),
                ScreenPoint::new(10.0, 16.0),
            ]
        );
    }

    #[test]
    fn triangles_mirror_about_center_line() {
        for (cx, cy, size) in [(0.0, 0.0, 8.0), (13.5, -7.25, 5.0), (400.0, 311.0, 12.0)] {
            let center = ScreenPoint::new(cx, cy);
            let up = polygon_vertices(MarkerShape::TriangleUp.geometry_with_size(center, size));
            let down = polygon_vertices(MarkerShape::TriangleDown.geometry_with_size(center, size));
            assert_eq!(up.len(), down.len());
            for (a, b) in up.iter().zip(&down) {
                assert_eq!(a.x, b.x);
                assert!(((a.y + b.y) / 2.0 - cy).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn open_shapes_are_stroked() {
        let mut out = RenderList::new();
        MarkerShape::Plus.paint_solid(&mut out, ScreenPoint::new(0.0, 0.0), Color::BLACK);
        MarkerShape::Cross.paint_solid(&mut out, ScreenPoint::new(0.0, 0.0), Color::BLACK);
        assert_eq!(out.len(), 2);
        assert!(
            out.commands()
                .iter()
                .all(|command| matches!(command, RenderCommand::LineSegments { .. }))
        );
    }

    #[test]
    fn closed_shapes_are_filled() {
        for shape in [
            MarkerShape::Circle,
            MarkerShape::Square,
            MarkerShape::Diamond,
            MarkerShape::TriangleUp,
            MarkerShape::TriangleDown,
        ] {
            assert!(shape.is_closed());
            let mut out = RenderList::new();
            shape.paint_solid(&mut out, ScreenPoint::new(5.0, 5.0), Color::WHITE);
            match &out.commands()[0] {
                RenderCommand::Path { paint, .. } | RenderCommand::Ellipse { paint, .. } => {
                    assert_eq!(*paint, Paint::Fill(Color::WHITE));
                }
                other => panic!("unexpected command {other:?}"),
            }
        }
    }

    #[test]
    fn circle_bounds_are_size_square() {
        match MarkerShape::Circle.geometry(ScreenPoint::new(4.0, 4.0)) {
            MarkerGeometry::Ellipse(rect) => {
                assert_eq!(rect.min, ScreenPoint::new(0.0, 0.0));
                assert_eq!(rect.width(), SIZE);
                assert_eq!(rect.height(), SIZE);
            }
            other => panic!("expected ellipse, got {other:?}"),
        }
    }
}
