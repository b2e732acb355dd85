//! The X/Y axis pair and the series bound to it.

use std::collections::{BTreeMap, BTreeSet};

use indexmap::IndexMap;

use crate::axis::{Axis, AxisDirection, AxisOverrides, AxisScale, resolve_range};
use crate::error::{ChartError, Result};
use crate::range::{DataBounds, Range};
use crate::series::{Series, XValue};
use crate::style::{ChartType, StyleConfig};

/// Sign classification of a Y range, fixing the bar baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartForm {
    /// Both bounds ≥ 0: bars grow up from the minimum.
    Positive,
    /// Both bounds ≤ 0: bars hang down from the maximum.
    Negative,
    /// Zero lies strictly inside the range: bars grow away from zero.
    Span,
}

impl ChartForm {
    /// Classify a Y range.
    pub fn classify(min: f64, max: f64) -> Self {
        if min >= 0.0 && max >= 0.0 {
            Self::Positive
        } else if min <= 0.0 && max <= 0.0 {
            Self::Negative
        } else {
            Self::Span
        }
    }

    /// Stretch a range so zero is one of its bounds when it lies outside.
    pub fn include_zero(range: Range) -> Range {
        match Self::classify(range.min, range.max) {
            Self::Positive => Range::new(0.0, range.max),
            Self::Negative => Range::new(range.min, 0.0),
            Self::Span => range,
        }
    }

    /// Bar extent `(top, bottom)` for an axis-space `value` in `range`.
    pub fn bar_extent(self, value: f64, range: Range) -> (f64, f64) {
        match self {
            Self::Positive => (value, range.min),
            Self::Negative => (range.max, value),
            Self::Span => {
                if value >= 0.0 {
                    (value, 0.0)
                } else {
                    (0.0, value)
                }
            }
        }
    }
}

/// Ordered, deduplicated X values mapped to positional slots.
///
/// Built once per pass; every series queries the same index so a missing
/// category leaves a gap instead of shifting later bars.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryIndex {
    slots: BTreeMap<XValue, usize>,
}

impl CategoryIndex {
    /// Collect the X values of every series.
    pub fn build<'a>(series: impl IntoIterator<Item = &'a Series>) -> Self {
        let values: BTreeSet<&XValue> = series
            .into_iter()
            .flat_map(|series| series.x().iter())
            .collect();
        let slots = values
            .into_iter()
            .enumerate()
            .map(|(slot, value)| (value.clone(), slot))
            .collect();
        Self { slots }
    }

    /// Slot of a value, if it occurs in any series.
    pub fn slot(&self, value: &XValue) -> Option<usize> {
        self.slots.get(value).copied()
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check whether there are no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterate over values in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (&XValue, usize)> + '_ {
        self.slots.iter().map(|(value, slot)| (value, *slot))
    }
}

/// Axis ranges resolved for one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAxes {
    x: Axis,
    y: Axis,
    x_range: Range,
    y_range: Range,
    categories: Option<CategoryIndex>,
    form: ChartForm,
}

impl ResolvedAxes {
    /// Configured X axis.
    pub fn x_axis(&self) -> &Axis {
        &self.x
    }

    /// Configured Y axis.
    pub fn y_axis(&self) -> &Axis {
        &self.y
    }

    /// Resolved X range; slot indices when X is positional.
    pub fn x_range(&self) -> Range {
        self.x_range
    }

    /// Resolved Y range in axis space.
    pub fn y_range(&self) -> Range {
        self.y_range
    }

    /// Category index when X is positional.
    pub fn categories(&self) -> Option<&CategoryIndex> {
        self.categories.as_ref()
    }

    /// Chart form of the resolved Y range.
    pub fn form(&self) -> ChartForm {
        self.form
    }
}

/// Owns the X axis, the Y axis and the ordered series map.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisPair {
    x_axis: Axis,
    y_axis: Axis,
    series: IndexMap<String, Series>,
}

impl AxisPair {
    /// Create an empty axis pair.
    pub fn new() -> Self {
        Self {
            x_axis: Axis::new(AxisDirection::X),
            y_axis: Axis::new(AxisDirection::Y),
            series: IndexMap::new(),
        }
    }

    /// Access the X axis.
    pub fn x_axis(&self) -> &Axis {
        &self.x_axis
    }

    /// Access the Y axis.
    pub fn y_axis(&self) -> &Axis {
        &self.y_axis
    }

    /// Series in insertion order.
    pub fn series_map(&self) -> &IndexMap<String, Series> {
        &self.series
    }

    /// Look up a series by name.
    pub fn series(&self, name: &str) -> Option<&Series> {
        self.series.get(name)
    }

    /// Add a series and fold its data into both axes.
    pub fn add_series(&mut self, series: Series) -> Result<()> {
        series.validate()?;
        if self.series.contains_key(series.name()) {
            return Err(ChartError::DuplicateSeries {
                series: series.name().to_string(),
            });
        }
        let (x_range, y_range) = series_ranges(&series);
        self.x_axis
            .set_data_range(merge(self.x_axis.data_range(), x_range));
        self.y_axis
            .set_data_range(merge(self.y_axis.data_range(), y_range));
        self.series.insert(series.name().to_string(), series);
        Ok(())
    }

    /// Whether any X value is a category.
    pub fn has_categories(&self) -> bool {
        self.series
            .values()
            .any(|series| series.x().iter().any(XValue::is_category))
    }

    /// Whether any series renders as bars under `style`.
    pub fn has_bars(&self, style: &StyleConfig) -> bool {
        self.series
            .values()
            .any(|series| series.effective_chart_type(style.chart_type()) == ChartType::Bar)
    }

    /// Whether X is laid out in category slots rather than numerically.
    pub fn is_positional(&self, style: &StyleConfig) -> bool {
        self.has_bars(style) || self.has_categories()
    }

    /// Build the category index over every series.
    pub fn category_index(&self) -> CategoryIndex {
        CategoryIndex::build(self.series.values())
    }

    /// Raw data bounds; X is in slot indices when any X value is a category.
    pub fn compute_bounds(&self) -> Option<DataBounds> {
        let x = if self.has_categories() {
            let slots = self.category_index().len();
            Range::new(0.0, slots.saturating_sub(1) as f64)
        } else {
            self.x_axis.data_range()?
        };
        Some(DataBounds::new(x, self.y_axis.data_range()?))
    }

    /// Check every series against the style before any layout work.
    pub fn validate(&self, style: &StyleConfig) -> Result<()> {
        if self.series.is_empty() {
            return Err(ChartError::NoSeries);
        }
        let x_log = style.x_scale().is_log() && !self.is_positional(style);
        let y_scale = style.y_scale();
        for series in self.series.values() {
            series.validate()?;
            for (x, y, error) in series.points() {
                if x_log {
                    if let Some(x) = x.as_number().filter(|x| !AxisScale::Log10.accepts(*x)) {
                        return Err(domain_error(AxisDirection::X, series, x));
                    }
                }
                let (low, _) = Series::y_extent(y, error);
                if !y_scale.accepts(low) {
                    return Err(domain_error(AxisDirection::Y, series, low));
                }
            }
        }
        Ok(())
    }

    /// Resolve both axes for one render pass.
    pub fn resolve(&self, style: &StyleConfig) -> Result<ResolvedAxes> {
        self.validate(style)?;
        let bounds = self.compute_bounds().ok_or(ChartError::NoSeries)?;
        let positional = self.is_positional(style);

        let mut x = self.x_axis.clone();
        let mut y = self.y_axis.clone();
        y.configure(style.y_scale(), style.y_overrides());

        let (x_range, categories) = if positional {
            x.configure(AxisScale::Linear, AxisOverrides::default());
            let categories = self.category_index();
            let last_slot = categories.len().saturating_sub(1) as f64;
            (Range::new(0.0, last_slot).non_degenerate(), Some(categories))
        } else {
            x.configure(style.x_scale(), style.x_overrides());
            (resolve_range(bounds.x, x.overrides(), x.scale()), None)
        };

        let y_data = if self.has_bars(style) && !y.scale().is_log() {
            ChartForm::include_zero(bounds.y)
        } else {
            bounds.y
        };
        let y_range = resolve_range(y_data, y.overrides(), y.scale());
        let form = ChartForm::classify(y_range.min, y_range.max);
        tracing::debug!(
            ?x_range,
            ?y_range,
            ?form,
            positional,
            "resolved axes"
        );
        Ok(ResolvedAxes {
            x,
            y,
            x_range,
            y_range,
            categories,
            form,
        })
    }
}

impl Default for AxisPair {
    fn default() -> Self {
        Self::new()
    }
}

fn series_ranges(series: &Series) -> (Option<Range>, Option<Range>) {
    let mut x_range: Option<Range> = None;
    let mut y_range: Option<Range> = None;
    for (x, y, error) in series.points() {
        if let Some(x) = x.as_number() {
            x_range = merge(x_range, Some(Range::point(x)));
        }
        let (low, high) = Series::y_extent(y, error);
        y_range = merge(y_range, Some(Range::new(low, high)));
    }
    (x_range, y_range)
}

fn merge(a: Option<Range>, b: Option<Range>) -> Option<Range> {
    match (a, b) {
        (Some(a), Some(b)) => Range::union(a, b).or(Some(a)),
        (a, None) => a,
        (None, b) => b,
    }
}

fn domain_error(axis: AxisDirection, series: &Series, value: f64) -> ChartError {
    ChartError::Domain {
        axis,
        series: series.name().to_string(),
        value,
    }
}
