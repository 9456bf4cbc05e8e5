//! Declarative chart documents.
//!
//! A [`ChartConfig`] names a chart kind, the shared [`ChartOptions`], the
//! kind-specific layout options and the data. It loads from JSON or YAML and
//! builds into an [`AnyChart`].
//!
//! ```
//! use glance_charts::{ChartConfig, ChartKind};
//!
//! let config = ChartConfig::from_yaml(
//!     "kind: donut\nlayout:\n  hole_radius: 0.3\nentries:\n  - value: 10\n    color: '#2196f3'\n",
//! )
//! .unwrap();
//! let chart = config.build().unwrap();
//! assert_eq!(chart.kind(), ChartKind::Donut);
//! ```

use crate::chart::{Chart, ChartKind, ChartLayout};
use crate::entry::{Entry, Series};
use crate::error::ChartError;
use crate::invalidation::{InvalidationListener, Subscription};
use crate::layout::{
    BarLayout, DonutLayout, ExtendedBarLayout, GroupedBarLayout, HalfRadialGaugeLayout, LineLayout, PointLayout,
    RadarLayout, RadialGaugeLayout, RangeBarLayout,
};
use crate::options::{AxisOptions, ChartOptions};
use glance_core::Canvas;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Fewest Y ticks a nice scale can lay out.
const MIN_Y_TICKS: usize = 2;
const MAX_Y_TICKS: usize = 50;

// =============================================================================
// Document
// =============================================================================

/// A chart described as data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Chart kind to build
    pub kind: ChartKind,
    /// Shared options
    #[serde(default)]
    pub options: ChartOptions,
    /// Options of the kind's layout; missing fields take their defaults
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub layout: serde_json::Value,
    /// Flat entries
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entries: Vec<Entry>,
    /// Named series; take precedence over `entries` when present
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub series: Vec<Series>,
}

impl ChartConfig {
    /// Empty document for `kind` with default options.
    #[must_use]
    pub fn new(kind: ChartKind) -> Self {
        Self {
            kind,
            options: ChartOptions::default(),
            layout: serde_json::Value::Null,
            entries: Vec::new(),
            series: Vec::new(),
        }
    }

    /// Parse from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ChartError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ChartError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ChartError> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String, ChartError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Check the document without keeping the chart.
    pub fn validate(&self) -> Result<(), ChartError> {
        self.build().map(drop)
    }

    /// Build the chart. Data is assigned without animating.
    pub fn build(&self) -> Result<AnyChart, ChartError> {
        self.options.validate()?;

        let chart = match self.kind {
            ChartKind::Bar => {
                let mut layout: BarLayout = self.layout()?;
                clamp_ticks(&mut layout.axis);
                AnyChart::Bar(self.chart(layout))
            }
            ChartKind::Point => {
                let mut layout: PointLayout = self.layout()?;
                clamp_ticks(&mut layout.axis);
                AnyChart::Point(self.chart(layout))
            }
            ChartKind::Line => {
                let mut layout: LineLayout = self.layout()?;
                clamp_ticks(&mut layout.axis);
                AnyChart::Line(self.chart(layout))
            }
            ChartKind::GroupedBar => {
                let mut layout: GroupedBarLayout = self.layout()?;
                clamp_ticks(&mut layout.axis);
                AnyChart::GroupedBar(self.chart(layout))
            }
            ChartKind::RangeBar => {
                let mut layout: RangeBarLayout = self.layout()?;
                clamp_ticks(&mut layout.axis);
                AnyChart::RangeBar(self.chart(layout))
            }
            ChartKind::ExtendedBar => {
                let mut layout: ExtendedBarLayout = self.layout()?;
                clamp_ticks(&mut layout.bar.axis);
                AnyChart::ExtendedBar(self.chart(layout))
            }
            ChartKind::Donut => {
                let layout: DonutLayout = self.layout()?;
                check_hole_radius(layout.hole_radius)?;
                AnyChart::Donut(self.chart(layout))
            }
            ChartKind::Pie => {
                let mut layout: DonutLayout = self.layout()?;
                if self.layout.get("hole_radius").is_none() {
                    layout.hole_radius = 0.0;
                } else if layout.hole_radius != 0.0 {
                    warn!(hole_radius = layout.hole_radius, "pie charts have no hole; using 0");
                    layout.hole_radius = 0.0;
                }
                AnyChart::Pie(self.chart(layout))
            }
            ChartKind::RadialGauge => {
                let layout: RadialGaugeLayout = self.layout()?;
                check_line_size(layout.line_size)?;
                AnyChart::RadialGauge(self.chart(layout))
            }
            ChartKind::HalfRadialGauge => {
                let layout: HalfRadialGaugeLayout = self.layout()?;
                check_line_size(layout.line_size)?;
                AnyChart::HalfRadialGauge(self.chart(layout))
            }
            ChartKind::Radar => AnyChart::Radar(self.chart(self.layout()?)),
        };

        debug!(kind = %self.kind, entries = chart.entries().len(), "chart built from config");
        Ok(chart)
    }

    fn layout<L: DeserializeOwned + Default>(&self) -> Result<L, ChartError> {
        if self.layout.is_null() {
            return Ok(L::default());
        }
        Ok(L::deserialize(&self.layout)?)
    }

    fn chart<L: ChartLayout>(&self, layout: L) -> Chart<L> {
        let chart = Chart::new(layout).with_options(self.options.clone());
        if self.series.is_empty() {
            chart.with_entries(self.entries.iter().cloned())
        } else {
            chart.with_series(self.series.iter().cloned())
        }
    }
}

fn clamp_ticks(axis: &mut AxisOptions) {
    let used = axis.y_axis_max_ticks.clamp(MIN_Y_TICKS, MAX_Y_TICKS);
    if used != axis.y_axis_max_ticks {
        warn!(requested = axis.y_axis_max_ticks, used, "y_axis_max_ticks clamped");
        axis.y_axis_max_ticks = used;
    }
}

fn check_hole_radius(hole_radius: f32) -> Result<(), ChartError> {
    if hole_radius > 0.0 && hole_radius <= 1.0 {
        Ok(())
    } else {
        Err(ChartError::invalid(
            "hole_radius",
            format!("{hole_radius} is outside (0, 1]; use kind pie for no hole"),
        ))
    }
}

fn check_line_size(line_size: Option<f32>) -> Result<(), ChartError> {
    match line_size {
        Some(size) if !size.is_finite() || size < 0.0 => {
            Err(ChartError::invalid("line_size", format!("{size} must be a non-negative number")))
        }
        _ => Ok(()),
    }
}

// =============================================================================
// Any chart
// =============================================================================

/// A chart of any kind, as built from a [`ChartConfig`].
#[derive(Debug)]
pub enum AnyChart {
    /// Bar chart
    Bar(Chart<BarLayout>),
    /// Point chart
    Point(Chart<PointLayout>),
    /// Line chart
    Line(Chart<LineLayout>),
    /// Grouped bar chart
    GroupedBar(Chart<GroupedBarLayout>),
    /// Range bar chart
    RangeBar(Chart<RangeBarLayout>),
    /// Extended bar chart
    ExtendedBar(Chart<ExtendedBarLayout>),
    /// Donut chart
    Donut(Chart<DonutLayout>),
    /// Pie chart
    Pie(Chart<DonutLayout>),
    /// Full radial gauge
    RadialGauge(Chart<RadialGaugeLayout>),
    /// Half radial gauge
    HalfRadialGauge(Chart<HalfRadialGaugeLayout>),
    /// Radar chart
    Radar(Chart<RadarLayout>),
}

macro_rules! dispatch {
    ($self:expr, $chart:ident => $body:expr) => {
        match $self {
            AnyChart::Bar($chart) => $body,
            AnyChart::Point($chart) => $body,
            AnyChart::Line($chart) => $body,
            AnyChart::GroupedBar($chart) => $body,
            AnyChart::RangeBar($chart) => $body,
            AnyChart::ExtendedBar($chart) => $body,
            AnyChart::Donut($chart) | AnyChart::Pie($chart) => $body,
            AnyChart::RadialGauge($chart) => $body,
            AnyChart::HalfRadialGauge($chart) => $body,
            AnyChart::Radar($chart) => $body,
        }
    };
}

impl AnyChart {
    /// Configured kind.
    #[must_use]
    pub fn kind(&self) -> ChartKind {
        match self {
            Self::Pie(_) => ChartKind::Pie,
            Self::Donut(_) => ChartKind::Donut,
            other => dispatch!(other, c => c.kind()),
        }
    }

    /// See [`Chart::draw`].
    pub fn draw(&self, canvas: &mut dyn Canvas, width: f32, height: f32) {
        dispatch!(self, c => c.draw(canvas, width, height));
    }

    /// See [`Chart::set_entries`].
    pub fn set_entries(&mut self, entries: impl IntoIterator<Item = Entry>) {
        dispatch!(self, c => c.set_entries(entries));
    }

    /// See [`Chart::set_series`].
    pub fn set_series(&mut self, series: impl IntoIterator<Item = Series>) {
        dispatch!(self, c => c.set_series(series));
    }

    /// See [`Chart::advance`].
    pub fn advance(&mut self, dt: Duration) -> f32 {
        dispatch!(self, c => c.advance(dt))
    }

    /// See [`Chart::tick`].
    pub fn tick(&mut self) -> f32 {
        dispatch!(self, c => c.tick())
    }

    /// See [`Chart::cancel_animation`].
    pub fn cancel_animation(&mut self) -> bool {
        dispatch!(self, c => c.cancel_animation())
    }

    /// Current animation progress.
    #[must_use]
    pub fn animation_progress(&self) -> f32 {
        dispatch!(self, c => c.animation_progress())
    }

    /// Whether an entrance or exit is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        dispatch!(self, c => c.is_animating())
    }

    /// Entries being displayed.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        dispatch!(self, c => c.entries())
    }

    /// Shared options.
    #[must_use]
    pub fn options(&self) -> &ChartOptions {
        dispatch!(self, c => c.options())
    }

    /// Mutable shared options; marks the chart for redraw.
    pub fn options_mut(&mut self) -> &mut ChartOptions {
        dispatch!(self, c => c.options_mut())
    }

    /// See [`Chart::subscribe`].
    #[must_use = "dropping the Subscription unregisters the listener"]
    pub fn subscribe(&self, listener: &Arc<dyn InvalidationListener>) -> Subscription {
        dispatch!(self, c => c.subscribe(listener))
    }

    /// See [`Chart::take_redraw`].
    pub fn take_redraw(&mut self) -> bool {
        dispatch!(self, c => c.take_redraw())
    }
}
