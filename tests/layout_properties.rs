use chart_layout::{
    AxisScale, AxisTransform, Chart, ChartError, ChartForm, ChartType, MarkerGeometry,
    MarkerShape, PlotContent, Range, RenderCommand, ScreenPoint, ScreenRect, Series, StyleConfig,
    XValue, plot_content::bar_width,
};

fn target() -> ScreenRect {
    ScreenRect::from_origin_size(0.0, 0.0, 400.0, 200.0)
}

fn unpadded(chart_type: ChartType) -> StyleConfig {
    StyleConfig::new()
        .with_chart_type(chart_type)
        .with_chart_padding(0.0)
}

fn rect_vertices(commands: &[RenderCommand]) -> Vec<Vec<ScreenPoint>> {
    commands
        .iter()
        .filter_map(|command| match command {
            RenderCommand::Path { path, .. } => Some(path.vertices()),
            _ => None,
        })
        .collect()
}

#[test]
fn range_bounds_land_on_tick_span_edges() {
    let chart = Chart::builder()
        .style(unpadded(ChartType::Line))
        .series(Series::new("a", [0.0, 100.0], [0.0, 100.0]))
        .build()
        .unwrap();
    let layout = chart.layout(target()).unwrap();

    // 400 wide: tick space 380 starting 10px in
    assert_eq!(layout.x_pixel(&XValue::from(0.0)), Some(10.0));
    assert_eq!(layout.x_pixel(&XValue::from(100.0)), Some(390.0));
    // 200 high: tick space 190, flipped, ending 5px above the bottom
    assert_eq!(layout.y_pixel(0.0), Some(195.0));
    assert_eq!(layout.y_pixel(100.0), Some(5.0));
}

#[test]
fn log_axis_round_trips_through_pixels() {
    let transform = AxisTransform::new(Range::new(0.0, 3.0), 5.0, 190.0, true);
    for value in [1.0, 7.5, 42.0, 999.0] {
        let pixel = transform.to_pixel(AxisScale::Log10.map_value(value).unwrap());
        let back = AxisScale::Log10
            .invert_value(transform.from_pixel(pixel))
            .unwrap();
        assert!((back - value).abs() / value < 1e-9, "{value} -> {back}");
    }
}

#[test]
fn bars_of_sparse_series_stay_in_their_slot() {
    let style = unpadded(ChartType::Bar);
    let chart = Chart::builder()
        .style(style.clone())
        .series(Series::new("full", [1, 2, 3], [1.0, 2.0, 3.0]))
        .series(Series::new("sparse", [2], [5.0]))
        .build()
        .unwrap();
    let out = PlotContent::Bar
        .emit_geometry(chart.axis_pair(), target(), &style)
        .unwrap();
    let rects = rect_vertices(out.commands());
    assert_eq!(rects.len(), 4);

    // three slots of floor(380 / 3) = 126 pixels starting at 10
    let width = bar_width(126.0, 2);
    let full_middle = rects[1][0].x as f64;
    let sparse = rects[3][0].x as f64;
    assert!((full_middle - (136.0 + 126.0 * 0.05)).abs() < 1e-3);
    assert!((sparse - full_middle - width).abs() < 1e-3);
    assert!(sparse >= 136.0 && sparse + width < 262.0);
}

#[test]
fn chart_form_follows_sign_of_range() {
    assert_eq!(ChartForm::classify(0.0, 5.0), ChartForm::Positive);
    assert_eq!(ChartForm::classify(-3.0, -1.0), ChartForm::Negative);
    assert_eq!(ChartForm::classify(-1.0, 2.0), ChartForm::Span);

    let chart = Chart::builder()
        .style(unpadded(ChartType::Bar))
        .series(Series::new("loss", ["q1", "q2"], [-4.0, -2.0]))
        .build()
        .unwrap();
    let layout = chart.layout(target()).unwrap();
    assert_eq!(layout.form(), ChartForm::Negative);
    assert_eq!(layout.axes().y_range(), Range::new(-4.0, 0.0));
}

#[test]
fn override_replaces_data_bound() {
    let chart = Chart::builder()
        .style(unpadded(ChartType::Line).with_y_axis_max(20.0))
        .series(Series::from_iter_y("a", (1..=10).map(f64::from)))
        .build()
        .unwrap();
    let layout = chart.layout(target()).unwrap();
    assert_eq!(layout.axes().y_range(), Range::new(1.0, 20.0));
    assert_eq!(layout.y_pixel(20.0), Some(5.0));
}

#[test]
fn constant_line_is_centered() {
    let chart = Chart::builder()
        .style(unpadded(ChartType::Line))
        .series(Series::from_iter_y("flat", [5.0, 5.0, 5.0]))
        .build()
        .unwrap();
    let layout = chart.layout(target()).unwrap();
    assert_eq!(layout.axes().y_range(), Range::new(4.5, 5.5));
    assert_eq!(layout.y_pixel(5.0), Some(100.0));
    assert!(chart.render(target()).is_ok());
}

#[test]
fn zero_height_bar_chart_renders() {
    let chart = Chart::builder()
        .style(unpadded(ChartType::Bar))
        .series(Series::new("none", ["only"], [0.0]))
        .build()
        .unwrap();
    let out = chart.render(target()).unwrap();
    assert!(out.commands().contains(&RenderCommand::ClipEnd));
}

#[test]
fn triangle_markers_mirror_vertically() {
    let center = ScreenPoint::new(50.0, 40.0);
    let vertices = |shape: MarkerShape| match shape.geometry(center) {
        MarkerGeometry::Polygon(path) => path.vertices(),
        other => panic!("expected polygon, got {other:?}"),
    };
    let up = vertices(MarkerShape::TriangleUp);
    let down = vertices(MarkerShape::TriangleDown);
    for (a, b) in up.iter().zip(&down) {
        assert_eq!(a.x, b.x);
        assert_eq!(a.y - center.y, center.y - b.y);
    }
}

#[test]
fn log_axis_rejects_non_positive_values() {
    let chart = Chart::builder()
        .style(unpadded(ChartType::Scatter).with_y_axis_logarithmic(true))
        .series(Series::new("a", [1.0, 2.0], [10.0, 0.0]))
        .build()
        .unwrap();
    let err = chart.render(target()).unwrap_err();
    assert!(err.to_string().contains("logarithmic"));
}

#[test]
fn leading_nan_is_rejected_before_layout() {
    let err = Chart::builder()
        .series(Series::from_iter_y("a", [f64::NAN, 1.0, 5.0]))
        .build()
        .unwrap_err();
    assert!(matches!(err, ChartError::NonFinite { .. }));
}

#[test]
fn far_log_override_keeps_ticks_bounded() {
    let chart = Chart::builder()
        .style(
            unpadded(ChartType::Line)
                .with_y_axis_logarithmic(true)
                .with_y_axis_min(-1e7),
        )
        .series(Series::from_iter_y("a", [1.0, 10.0]))
        .build()
        .unwrap();
    let layout = chart.layout(target()).unwrap();
    let ticks = chart.ticks(&layout);
    assert!(!ticks.y.is_empty());
    // 190 px of tick space with a 44 px spacing hint
    assert!(ticks.y.len() <= 5);
    assert!(chart.render(target()).is_ok());
}
