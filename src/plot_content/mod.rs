//! Series geometry, one variant per chart type.
//!
//! Every variant reads the same [`PlotLayout`], so line, scatter, area and
//! bar series overlaid on one axis pair agree on where each value lands.

mod bar;
mod line;

pub use bar::{BarGroup, bar_width};

use crate::axis_pair::AxisPair;
use crate::error::{ChartError, Result};
use crate::geom::ScreenRect;
use crate::layout::PlotLayout;
use crate::render::{RenderCommand, RenderList};
use crate::series::Series;
use crate::style::{ChartType, StyleConfig};

use line::PointKind;

/// Geometry emitter for one chart type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotContent {
    /// Connected points with markers.
    Line,
    /// Markers only.
    Scatter,
    /// Filled region down to the baseline.
    Area,
    /// Grouped bars in category slots.
    Bar,
}

impl From<ChartType> for PlotContent {
    fn from(chart_type: ChartType) -> Self {
        match chart_type {
            ChartType::Line => Self::Line,
            ChartType::Scatter => Self::Scatter,
            ChartType::Area => Self::Area,
            ChartType::Bar => Self::Bar,
        }
    }
}

impl PlotContent {
    /// Content variant for a series under the chart's default type.
    pub fn for_series(series: &Series, style: &StyleConfig) -> Self {
        series.effective_chart_type(style.chart_type()).into()
    }

    /// Emit every series this variant draws, clipped to `bounds`.
    ///
    /// Resolves the axes over all series so the geometry matches a full
    /// chart render. Fails before emitting anything if the data is invalid.
    pub fn emit_geometry(
        self,
        axes: &AxisPair,
        bounds: ScreenRect,
        style: &StyleConfig,
    ) -> Result<RenderList> {
        if !bounds.is_valid() {
            return Err(ChartError::InvalidBounds {
                width: bounds.width(),
                height: bounds.height(),
            });
        }
        let layout = PlotLayout::new(axes.resolve(style)?, bounds);
        let mut out = RenderList::new();
        emit_clipped(&layout, axes, style, Some(self), &mut out);
        Ok(out)
    }

    /// Emit one series into `out`.
    pub fn emit_series(
        self,
        layout: &PlotLayout,
        series: &Series,
        bars: BarGroup,
        style: &StyleConfig,
        out: &mut RenderList,
    ) {
        tracing::trace!(series = series.name(), content = ?self, points = series.len(), "emit series");
        let error_color = style.error_bars_color();
        match self {
            Self::Line => line::emit(PointKind::Line, layout, series, error_color, out),
            Self::Scatter => line::emit(PointKind::Scatter, layout, series, error_color, out),
            Self::Area => line::emit(PointKind::Area, layout, series, error_color, out),
            Self::Bar => bar::emit(layout, series, bars, out),
        }
    }
}

/// Emit series content in insertion order inside a clip to the plot bounds.
///
/// With `only` set, series drawn by other variants are skipped but still
/// count toward bar grouping.
pub(crate) fn emit_clipped(
    layout: &PlotLayout,
    axes: &AxisPair,
    style: &StyleConfig,
    only: Option<PlotContent>,
    out: &mut RenderList,
) {
    let bar_count = axes
        .series_map()
        .values()
        .filter(|series| PlotContent::for_series(series, style) == PlotContent::Bar)
        .count();
    out.push(RenderCommand::ClipRect(layout.bounds()));
    let mut bar_index = 0;
    for series in axes.series_map().values() {
        let content = PlotContent::for_series(series, style);
        let bars = BarGroup {
            index: bar_index,
            count: bar_count,
        };
        if content == PlotContent::Bar {
            bar_index += 1;
        }
        if only.is_some_and(|only| only != content) {
            continue;
        }
        content.emit_series(layout, series, bars, style, out);
    }
    out.push(RenderCommand::ClipEnd);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(series: impl IntoIterator<Item = Series>) -> AxisPair {
        let mut pair = AxisPair::new();
        for series in series {
            pair.add_series(series).unwrap();
        }
        pair
    }

    #[test]
    fn chart_type_selects_variant() {
        assert_eq!(PlotContent::from(ChartType::Area), PlotContent::Area);
        let series = Series::from_iter_y("a", [1.0]).with_chart_type(ChartType::Bar);
        assert_eq!(PlotContent::for_series(&series, &StyleConfig::new()), PlotContent::Bar);
    }

    #[test]
    fn geometry_is_clipped() {
        let pair = pair([Series::from_iter_y("a", [1.0, 2.0])]);
        let bounds = ScreenRect::from_origin_size(0.0, 0.0, 200.0, 100.0);
        let out = PlotContent::Line
            .emit_geometry(&pair, bounds, &StyleConfig::new())
            .unwrap();
        assert_eq!(out.commands().first(), Some(&RenderCommand::ClipRect(bounds)));
        assert_eq!(out.commands().last(), Some(&RenderCommand::ClipEnd));
    }

    #[test]
    fn other_variants_are_skipped() {
        let pair = pair([
            Series::from_iter_y("line", [1.0, 2.0]),
            Series::new("bars", [1, 2], [3.0, 4.0]).with_chart_type(ChartType::Bar),
        ]);
        let bounds = ScreenRect::from_origin_size(0.0, 0.0, 200.0, 100.0);
        let out = PlotContent::Bar
            .emit_geometry(&pair, bounds, &StyleConfig::new())
            .unwrap();
        // clip, two bars, clip end
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn invalid_data_emits_nothing() {
        let pair = pair([Series::from_iter_y("a", [1.0, -2.0])]);
        let style = StyleConfig::new().with_y_axis_logarithmic(true);
        let bounds = ScreenRect::from_origin_size(0.0, 0.0, 200.0, 100.0);
        let err = PlotContent::Line.emit_geometry(&pair, bounds, &style).unwrap_err();
        assert!(matches!(err, ChartError::Domain { .. }));
    }
}
