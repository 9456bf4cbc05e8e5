//! Declarative chart layout and animation for Glance.
//!
//! A chart is a [`Chart`] holding shared state (options, data, animation,
//! repaint listeners) and a [`ChartLayout`] that turns that state into draw
//! calls on a [`glance_core::Canvas`]:
//!
//! - Axis-based: [`BarChart`], [`PointChart`], [`LineChart`],
//!   [`GroupedBarChart`], [`RangeBarChart`], [`ExtendedBarChart`]
//! - Radial: [`DonutChart`], [`PieChart`], [`RadialGaugeChart`],
//!   [`HalfRadialGaugeChart`]
//! - [`RadarChart`]
//!
//! Assigning new data runs an exit animation over the old entries and an
//! entrance over the new ones. The host drives time with
//! [`Chart::advance`] and repaints when notified.
//!
//! # Example
//!
//! ```
//! use glance_charts::{BarChart, Entry};
//! use glance_core::{Color, RecordingCanvas};
//! use std::time::Duration;
//!
//! let mut chart = BarChart::default();
//! chart.set_entries(vec![
//!     Entry::new(200.0).with_label("Jan").with_color(Color::from_hex("#266489").unwrap()),
//!     Entry::new(400.0).with_label("Feb"),
//! ]);
//! chart.advance(Duration::from_millis(1500));
//! assert_eq!(chart.animation_progress(), 1.0);
//!
//! let mut canvas = RecordingCanvas::new();
//! chart.draw(&mut canvas, 400.0, 300.0);
//! assert!(canvas.texts().contains(&"Jan"));
//! ```

pub mod animation;
mod caption;
pub mod chart;
pub mod config;
pub mod entry;
pub mod error;
pub mod invalidation;
pub mod layout;
mod legend;
pub mod options;
pub mod range;
pub mod scale;
mod text;

pub use animation::{AnimationState, Animator, Direction, Easing, DEFAULT_ANIMATION_DURATION, FRAME_INTERVAL};
pub use chart::{Chart, ChartData, ChartKind, ChartLayout, Frame};
pub use config::{AnyChart, ChartConfig};
pub use entry::{Entry, Series};
pub use error::ChartError;
pub use invalidation::{InvalidationChannel, InvalidationListener, Subscription};
pub use layout::{
    BarLayout, DonutLayout, ExtendedBarLayout, GroupedBarLayout, HalfRadialGaugeLayout, LineLayout, PointLayout,
    RadarLayout, RadialGaugeLayout, RangeBarLayout,
};
pub use options::{
    AxisOptions, ChartOptions, DonutLabelMode, LegendOption, LineMode, Orientation, PointMode, ValueLabelOption,
    YAxisPosition,
};
pub use range::{AbsoluteBounds, ValueBounds};
pub use scale::{format_tick, NiceScale};
pub use text::fit_label;

/// Vertical bars.
pub type BarChart = Chart<BarLayout>;
/// Markers only.
pub type PointChart = Chart<PointLayout>;
/// Lines through the points, one per series.
pub type LineChart = Chart<LineLayout>;
/// One bar per series within each label.
pub type GroupedBarChart = Chart<GroupedBarLayout>;
/// Bars spanning a start and an end value.
pub type RangeBarChart = Chart<RangeBarLayout>;
/// Bars with a Y axis and per-bar value labels.
pub type ExtendedBarChart = Chart<ExtendedBarLayout>;
/// Ring of sectors.
pub type DonutChart = Chart<DonutLayout>;
/// Donut without a hole; build with `PieChart::new(DonutLayout::pie())`.
pub type PieChart = Chart<DonutLayout>;
/// Concentric full-circle gauges.
pub type RadialGaugeChart = Chart<RadialGaugeLayout>;
/// Concentric half-circle gauges.
pub type HalfRadialGaugeChart = Chart<HalfRadialGaugeLayout>;
/// Polygon over equal-angle spokes.
pub type RadarChart = Chart<RadarLayout>;
