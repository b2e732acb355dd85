//! Chart entry point and builder.

use crate::axis_pair::AxisPair;
use crate::error::{ChartError, Result};
use crate::geom::ScreenRect;
use crate::layout::PlotLayout;
use crate::plot_content::emit_clipped;
use crate::render::RenderList;
use crate::series::Series;
use crate::style::StyleConfig;
use crate::surface::emit_surface;
use crate::ticks::AxisTicks;

/// A style snapshot plus the series it draws.
///
/// Rendering is a pure function of the series, the style and the target
/// rectangle; the chart is not mutated by [`Chart::render`].
#[derive(Debug, Clone, Default)]
pub struct Chart {
    style: StyleConfig,
    axes: AxisPair,
}

impl Chart {
    /// Create an empty chart with the given style.
    pub fn new(style: StyleConfig) -> Self {
        Self {
            style,
            axes: AxisPair::new(),
        }
    }

    /// Start building a chart.
    pub fn builder() -> ChartBuilder {
        ChartBuilder::default()
    }

    /// Access the style.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Replace the style used by later render passes.
    pub fn set_style(&mut self, style: StyleConfig) {
        self.style = style;
    }

    /// Access the axis pair and its series.
    pub fn axis_pair(&self) -> &AxisPair {
        &self.axes
    }

    /// Add a series.
    pub fn add_series(&mut self, series: Series) -> Result<()> {
        self.axes.add_series(series)
    }

    /// Plot bounds inside `target` after chart padding.
    pub fn plot_bounds(&self, target: ScreenRect) -> Result<ScreenRect> {
        let bounds = target.inset(self.style.chart_padding());
        if !bounds.is_valid() {
            return Err(ChartError::InvalidBounds {
                width: bounds.width(),
                height: bounds.height(),
            });
        }
        Ok(bounds)
    }

    /// Resolve axes and lay them out inside `target`.
    pub fn layout(&self, target: ScreenRect) -> Result<PlotLayout> {
        let bounds = self.plot_bounds(target)?;
        Ok(PlotLayout::new(self.axes.resolve(&self.style)?, bounds))
    }

    /// Ticks of both axes for a layout.
    pub fn ticks(&self, layout: &PlotLayout) -> AxisTicks {
        AxisTicks::compute(
            layout,
            self.style.x_tick_spacing_hint(),
            self.style.y_tick_spacing_hint(),
        )
    }

    /// Run one layout pass and return the complete primitive sequence.
    ///
    /// Fails without emitting anything when the data or bounds are invalid.
    pub fn render(&self, target: ScreenRect) -> Result<RenderList> {
        let layout = self.layout(target)?;
        tracing::debug!(
            bounds = ?layout.bounds(),
            series = self.axes.series_map().len(),
            chart_type = ?self.style.chart_type(),
            "render pass"
        );
        let ticks = self.ticks(&layout);
        let mut out = RenderList::new();
        emit_surface(layout.bounds(), &ticks, &self.style, &mut out);
        emit_clipped(&layout, &self.axes, &self.style, None, &mut out);
        Ok(out)
    }
}

/// Builder for configuring a chart before construction.
#[derive(Debug, Default)]
pub struct ChartBuilder {
    style: StyleConfig,
    series: Vec<Series>,
}

impl ChartBuilder {
    /// Set the style.
    pub fn style(mut self, style: StyleConfig) -> Self {
        self.style = style;
        self
    }

    /// Add a series.
    pub fn series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    /// Build the chart, validating every series.
    pub fn build(self) -> Result<Chart> {
        let mut chart = Chart::new(self.style);
        for series in self.series {
            chart.add_series(series)?;
        }
        Ok(chart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RenderCommand;
    use crate::style::ChartType;

    #[test]
    fn render_emits_surface_then_clipped_content() {
        let chart = Chart::builder()
            .series(Series::from_iter_y("a", [1.0, 3.0, 2.0]))
            .build()
            .unwrap();
        let target = ScreenRect::from_origin_size(0.0, 0.0, 640.0, 480.0);
        let out = chart.render(target).unwrap();
        let commands = out.commands();
        assert!(matches!(commands[0], RenderCommand::Rect { .. }));
        let clip = commands
            .iter()
            .position(|command| matches!(command, RenderCommand::ClipRect(_)))
            .unwrap();
        assert_eq!(
            commands[clip],
            RenderCommand::ClipRect(target.inset(10.0))
        );
        assert_eq!(commands.last(), Some(&RenderCommand::ClipEnd));
    }

    #[test]
    fn padding_larger_than_target_fails() {
        let chart = Chart::builder()
            .series(Series::from_iter_y("a", [1.0]))
            .build()
            .unwrap();
        let target = ScreenRect::from_origin_size(0.0, 0.0, 15.0, 15.0);
        assert!(matches!(
            chart.render(target),
            Err(ChartError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn builder_rejects_mismatched_series() {
        let err = Chart::builder()
            .series(Series::new("a", [1, 2], [1.0]))
            .build()
            .unwrap_err();
        assert!(matches!(err, ChartError::ShapeMismatch { .. }));
    }

    #[test]
    fn empty_chart_fails_to_render() {
        let chart = Chart::new(StyleConfig::new().with_chart_type(ChartType::Bar));
        let target = ScreenRect::from_origin_size(0.0, 0.0, 100.0, 100.0);
        assert!(matches!(chart.render(target), Err(ChartError::NoSeries)));
    }
}
