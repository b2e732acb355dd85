use gpui::{
    BorderStyle, Bounds, ContentMask, Corners, Edges, PathBuilder, Pixels, Window, point, px,
    quad,
};

use crate::geom::ScreenRect;
use crate::render::{
    Color, LineSegment, LineStyle, Paint, Path, PathElement, RectStyle, RenderCommand, RenderList,
};

/// Paint every command of `list` into `window`, honoring clip commands.
///
/// Dash patterns are painted solid.
pub fn paint_render_list(list: &RenderList, window: &mut Window) {
    let mut clip_stack: Vec<ContentMask<Pixels>> = Vec::new();
    for command in list.commands() {
        match command {
            RenderCommand::ClipRect(rect) => {
                clip_stack.push(ContentMask {
                    bounds: to_bounds(*rect),
                });
            }
            RenderCommand::ClipEnd => {
                clip_stack.pop();
            }
            RenderCommand::Rect { rect, style } => {
                with_clip(window, &clip_stack, |window| {
                    paint_rect(window, *rect, *style);
                });
            }
            RenderCommand::LineSegments { segments, style } => {
                with_clip(window, &clip_stack, |window| {
                    paint_lines(window, segments, *style);
                });
            }
            RenderCommand::Path { path, paint } => {
                with_clip(window, &clip_stack, |window| {
                    paint_path(window, path, *paint);
                });
            }
            RenderCommand::Ellipse { rect, paint } => {
                with_clip(window, &clip_stack, |window| {
                    paint_ellipse(window, *rect, *paint);
                });
            }
        }
    }
}

fn paint_lines(window: &mut Window, segments: &[LineSegment], style: LineStyle) {
    if segments.is_empty() {
        return;
    }
    let width = style.width.max(0.5);
    let mut builder = PathBuilder::stroke(px(width));
    for segment in segments {
        builder.move_to(point(px(segment.start.x), px(segment.start.y)));
        builder.line_to(point(px(segment.end.x), px(segment.end.y)));
    }
    if let Ok(path) = builder.build() {
        window.paint_path(path, to_rgba(style.color));
    }
}

fn paint_path(window: &mut Window, path: &Path, paint: Paint) {
    let (mut builder, color) = match paint {
        Paint::Fill(color) => (PathBuilder::fill(), color),
        Paint::Stroke(style) => (PathBuilder::stroke(px(style.width.max(0.5))), style.color),
    };
    for element in path.elements() {
        match element {
            PathElement::MoveTo(pt) => builder.move_to(point(px(pt.x), px(pt.y))),
            PathElement::LineTo(pt) => builder.line_to(point(px(pt.x), px(pt.y))),
            PathElement::Close => builder.close(),
        }
    }
    if let Ok(path) = builder.build() {
        window.paint_path(path, to_rgba(color));
    }
}

fn paint_ellipse(window: &mut Window, rect: ScreenRect, paint: Paint) {
    let radius = rect.width().min(rect.height()) * 0.5;
    let (fill, border, border_width) = match paint {
        Paint::Fill(color) => (color, color, 0.0),
        Paint::Stroke(style) => (Color::TRANSPARENT, style.color, style.width),
    };
    window.paint_quad(quad(
        to_bounds(rect),
        Corners::all(px(radius)),
        to_rgba(fill),
        Edges::all(px(border_width)),
        to_rgba(border),
        BorderStyle::default(),
    ));
}

fn paint_rect(window: &mut Window, rect: ScreenRect, style: RectStyle) {
    window.paint_quad(quad(
        to_bounds(rect),
        Corners::all(px(0.0)),
        to_rgba(style.fill),
        Edges::all(px(style.stroke_width)),
        to_rgba(style.stroke),
        BorderStyle::default(),
    ));
}

fn to_rgba(color: Color) -> gpui::Rgba {
    gpui::Rgba {
        r: color.r,
        g: color.g,
        b: color.b,
        a: color.a,
    }
}

fn to_bounds(rect: ScreenRect) -> Bounds<Pixels> {
    Bounds::from_corners(
        point(px(rect.min.x), px(rect.min.y)),
        point(px(rect.max.x), px(rect.max.y)),
    )
}

fn with_clip(window: &mut Window, stack: &[ContentMask<Pixels>], f: impl FnOnce(&mut Window)) {
    if let Some(mask) = stack.last() {
        window.with_content_mask(Some(mask.clone()), f);
    } else {
        f(window);
    }
}
