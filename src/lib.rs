//! chart_layout turns series of numbers into positioned drawing primitives
//! for line, scatter, area and bar charts.
//! One render pass resolves axis ranges, maps data into pixel space and emits
//! a backend-neutral [`RenderList`].

#![forbid(unsafe_code)]

pub mod axis;
pub mod axis_pair;
pub mod chart;
pub mod error;
pub mod geom;
#[cfg(feature = "gpui")]
pub mod gpui_backend;
pub mod layout;
pub mod marker;
pub mod plot_content;
pub mod range;
pub mod render;
pub mod series;
pub mod style;
pub mod surface;
pub mod ticks;
pub mod transform;
pub mod util;

pub use axis::{Axis, AxisDirection, AxisOverrides, AxisScale};
pub use axis_pair::{AxisPair, CategoryIndex, ChartForm, ResolvedAxes};
pub use chart::{Chart, ChartBuilder};
pub use error::{ChartError, Result};
pub use geom::{Point, ScreenPoint, ScreenRect};
pub use layout::{PlotLayout, SlotLayout, XLayout};
pub use marker::{MarkerGeometry, MarkerShape};
pub use plot_content::{BarGroup, PlotContent};
pub use range::{DataBounds, Range};
pub use render::{
    Color, LinePattern, LineSegment, LineStyle, Paint, Path, PathElement, RectStyle,
    RenderCommand, RenderList,
};
pub use series::{Series, SeriesStyle, XValue};
pub use style::{ChartType, StyleConfig};
pub use ticks::{AxisTicks, Tick};
pub use transform::{AxisTransform, PixelSpan, PlotTransform};
