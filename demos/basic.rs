use chart_layout::{
    Chart, ChartType, Color, RenderCommand, ScreenRect, Series, SeriesStyle, StyleConfig,
};

fn main() -> chart_layout::Result<()> {
    let quarters = ["q1", "q2", "q3", "q4"];
    let style = StyleConfig::new()
        .with_chart_type(ChartType::Bar)
        .with_y_axis_min(-2.0);

    let chart = Chart::builder()
        .style(style)
        .series(
            Series::new("2024", quarters, [4.0, 7.5, 5.0, -1.5])
                .with_style(SeriesStyle::default().with_color(Color::from_rgb8(0x33, 0x99, 0xdd))),
        )
        .series(
            // no q3 figure yet: its slot stays empty
            Series::new("2025", ["q1", "q2", "q4"], [5.5, 6.0, 2.0])
                .with_style(SeriesStyle::default().with_color(Color::from_rgb8(0xee, 0x77, 0x33))),
        )
        .build()?;

    let target = ScreenRect::from_origin_size(0.0, 0.0, 720.0, 480.0);
    let layout = chart.layout(target)?;
    println!(
        "y range {:?}, form {:?}",
        layout.axes().y_range(),
        layout.form()
    );

    let commands = chart.render(target)?;
    for command in commands.commands() {
        match command {
            RenderCommand::Path { path, .. } => {
                let vertices = path.vertices();
                if let (Some(top_left), Some(bottom_right)) = (vertices.first(), vertices.get(2)) {
                    println!(
                        "bar x {:>6.1}..{:>6.1}  y {:>6.1}..{:>6.1}",
                        top_left.x, bottom_right.x, top_left.y, bottom_right.y
                    );
                }
            }
            other => println!("{other:?}"),
        }
    }
    Ok(())
}
