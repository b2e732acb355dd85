//! Rendering primitives emitted by a layout pass.
//!
//! These types are backend-agnostic: the pipeline only describes vector
//! geometry with style tags, and an external painter (such as the optional
//! GPUI backend) rasterizes it.

use serde::Deserialize;

use crate::error::ChartError;
use crate::geom::{ScreenPoint, ScreenRect};

/// RGBA color.
///
/// All components are expected to be in the 0.0..=1.0 range.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Create a new color.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            1.0,
        )
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA`.
    pub fn from_hex(text: &str) -> Result<Self, ChartError> {
        let invalid = || ChartError::InvalidColor(text.to_string());
        let hex = text.strip_prefix('#').ok_or_else(invalid)?;
        if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |index: usize| {
            u8::from_str_radix(&hex[index..index + 2], 16)
                .map(|value| f32::from(value) / 255.0)
                .map_err(|_| invalid())
        };
        let alpha = if hex.len() == 8 { channel(6)? } else { 1.0 };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?, alpha))
    }

    /// Same color with a different alpha.
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// Fully transparent.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
}

impl TryFrom<String> for Color {
    type Error = ChartError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

/// Dash pattern of a stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinePattern {
    /// Continuous line.
    #[default]
    Solid,
    /// Long dashes.
    Dashed,
    /// Short dots.
    Dotted,
}

impl LinePattern {
    /// Alternating on/off lengths in pixels, empty for solid strokes.
    pub fn dash_array(self) -> &'static [f32] {
        match self {
            Self::Solid => &[],
            Self::Dashed => &[6.0, 3.0],
            Self::Dotted => &[1.0, 2.0],
        }
    }
}

/// Line stroke styling.
///
/// The width is expressed in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f32,
    /// Dash pattern.
    pub pattern: LinePattern,
}

impl LineStyle {
    /// Solid stroke of the given color and width.
    pub fn solid(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            pattern: LinePattern::Solid,
        }
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self::solid(Color::BLACK, 1.0)
    }
}

/// Rectangle styling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectStyle {
    /// Fill color.
    pub fill: Color,
    /// Stroke color.
    pub stroke: Color,
    /// Stroke width, zero for no outline.
    pub stroke_width: f32,
}

impl RectStyle {
    /// Filled rectangle without an outline.
    pub fn filled(fill: Color) -> Self {
        Self {
            fill,
            stroke: Color::TRANSPARENT,
            stroke_width: 0.0,
        }
    }

    /// Outlined rectangle without a fill.
    pub fn outlined(stroke: Color, stroke_width: f32) -> Self {
        Self {
            fill: Color::TRANSPARENT,
            stroke,
            stroke_width,
        }
    }
}

impl Default for RectStyle {
    fn default() -> Self {
        Self::outlined(Color::BLACK, 1.0)
    }
}

/// A line segment in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    /// Segment start.
    pub start: ScreenPoint,
    /// Segment end.
    pub end: ScreenPoint,
}

impl LineSegment {
    /// Create a new line segment.
    pub fn new(start: ScreenPoint, end: ScreenPoint) -> Self {
        Self { start, end }
    }
}

/// One step of a vector path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathElement {
    /// Begin a new subpath.
    MoveTo(ScreenPoint),
    /// Straight edge from the current point.
    LineTo(ScreenPoint),
    /// Close the current subpath.
    Close,
}

/// A vector path in screen space.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    elements: Vec<PathElement>,
}

impl Path {
    /// Create an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Closed polygon through `points`.
    pub fn polygon(points: &[ScreenPoint]) -> Self {
        let mut path = Self::polyline(points);
        if !path.is_empty() {
            path.close();
        }
        path
    }

    /// Open polyline through `points`.
    pub fn polyline(points: &[ScreenPoint]) -> Self {
        let mut path = Self::new();
        let mut iter = points.iter();
        if let Some(first) = iter.next() {
            path.move_to(*first);
            for point in iter {
                path.line_to(*point);
            }
        }
        path
    }

    /// Axis-aligned rectangle between two corners.
    pub fn rect(top_left: ScreenPoint, bottom_right: ScreenPoint) -> Self {
        Self::polygon(&[
            top_left,
            ScreenPoint::new(bottom_right.x, top_left.y),
            bottom_right,
            ScreenPoint::new(top_left.x, bottom_right.y),
        ])
    }

    /// Begin a new subpath.
    pub fn move_to(&mut self, point: ScreenPoint) {
        self.elements.push(PathElement::MoveTo(point));
    }

    /// Add an edge to `point`.
    pub fn line_to(&mut self, point: ScreenPoint) {
        self.elements.push(PathElement::LineTo(point));
    }

    /// Close the current subpath.
    pub fn close(&mut self) {
        self.elements.push(PathElement::Close);
    }

    /// Access the path elements.
    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    /// Check whether the path has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// All explicit vertices in order.
    pub fn vertices(&self) -> Vec<ScreenPoint> {
        self.elements
            .iter()
            .filter_map(|element| match element {
                PathElement::MoveTo(point) | PathElement::LineTo(point) => Some(*point),
                PathElement::Close => None,
            })
            .collect()
    }
}

/// How a path or ellipse is painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    /// Fill the interior.
    Fill(Color),
    /// Stroke the outline.
    Stroke(LineStyle),
}

/// Render command list.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Start clipping to a rectangle.
    ClipRect(ScreenRect),
    /// End clipping.
    ClipEnd,
    /// Draw a rectangle.
    Rect {
        /// Rectangle bounds.
        rect: ScreenRect,
        /// Rectangle styling.
        style: RectStyle,
    },
    /// Draw line segments.
    LineSegments {
        /// Segments to draw.
        segments: Vec<LineSegment>,
        /// Styling for the segments.
        style: LineStyle,
    },
    /// Fill or stroke a path.
    Path {
        /// Path geometry.
        path: Path,
        /// Paint applied to the path.
        paint: Paint,
    },
    /// Fill or stroke the ellipse inscribed in a rectangle.
    Ellipse {
        /// Bounding rectangle.
        rect: ScreenRect,
        /// Paint applied to the ellipse.
        paint: Paint,
    },
}

/// Ordered render commands produced by one layout pass.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RenderList {
    commands: Vec<RenderCommand>,
}

impl RenderList {
    /// Create an empty render list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a render command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Push a path with the given paint, skipping empty paths.
    pub fn push_path(&mut self, path: Path, paint: Paint) {
        if !path.is_empty() {
            self.commands.push(RenderCommand::Path { path, paint });
        }
    }

    /// Push line segments, skipping empty batches.
    pub fn push_segments(&mut self, segments: Vec<LineSegment>, style: LineStyle) {
        if !segments.is_empty() {
            self.commands
                .push(RenderCommand::LineSegments { segments, style });
        }
    }

    /// Access all render commands.
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check whether no command was emitted.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colors() {
        let color = Color::from_hex("#FF8000").unwrap();
        assert_eq!(color.r, 1.0);
        assert!((color.g - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(color.b, 0.0);
        assert_eq!(color.a, 1.0);

        let translucent = Color::from_hex("#00000080").unwrap();
        assert!((translucent.a - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(Color::from_hex("FF8000").is_err());
        assert!(Color::from_hex("#FF80").is_err());
        assert!(Color::from_hex("#GG8000").is_err());
    }

    #[test]
    fn rect_path_is_closed_quad() {
        let path = Path::rect(ScreenPoint::new(1.0, 2.0), ScreenPoint::new(5.0, 8.0));
        assert_eq!(path.vertices().len(), 4);
        assert_eq!(path.elements().last(), Some(&PathElement::Close));
        assert_eq!(path.vertices()[2], ScreenPoint::new(5.0, 8.0));
    }

    #[test]
    fn empty_paths_are_not_pushed() {
        let mut list = RenderList::new();
        list.push_path(Path::polyline(&[]), Paint::Fill(Color::BLACK));
        list.push_segments(Vec::new(), LineStyle::default());
        assert!(list.is_empty());
    }
}
