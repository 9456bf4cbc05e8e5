//! The chart: shared state composed with a per-kind layout.
//!
//! [`Chart`] owns everything common to all chart kinds (options, data,
//! animation, invalidation listeners). Geometry is delegated to a
//! [`ChartLayout`] implementation which reads a [`Frame`] and issues draw
//! calls.

use crate::animation::{Animator, Direction, FRAME_INTERVAL};
use crate::entry::{Entry, Series};
use crate::invalidation::{InvalidationChannel, InvalidationListener, Subscription};
use crate::options::ChartOptions;
use crate::range::ValueBounds;
use glance_core::{Canvas, Color, Rect, Size, TextStyle};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, trace};

// =============================================================================
// Chart kinds
// =============================================================================

/// Visual form of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Vertical bars
    Bar,
    /// Markers only
    Point,
    /// Lines through the points
    Line,
    /// One bar per series within each label
    GroupedBar,
    /// Bars spanning a start and end value
    RangeBar,
    /// Bar chart with a Y axis and per-bar value labels
    ExtendedBar,
    /// Ring of sectors
    Donut,
    /// Donut without a hole
    Pie,
    /// Concentric full-circle gauges
    RadialGauge,
    /// Concentric half-circle gauges
    HalfRadialGauge,
    /// Polygon over equal-angle spokes
    Radar,
}

impl ChartKind {
    /// Stable lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Point => "point",
            Self::Line => "line",
            Self::GroupedBar => "grouped_bar",
            Self::RangeBar => "range_bar",
            Self::ExtendedBar => "extended_bar",
            Self::Donut => "donut",
            Self::Pie => "pie",
            Self::RadialGauge => "radial_gauge",
            Self::HalfRadialGauge => "half_radial_gauge",
            Self::Radar => "radar",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Data
// =============================================================================

/// Entries currently assigned to a chart.
///
/// Assigning series keeps them and also flattens their entries in order,
/// so value bounds and simple layouts see one sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartData {
    entries: Vec<Entry>,
    series: Vec<Series>,
}

impl ChartData {
    /// Flat entries.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = Entry>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
            series: Vec::new(),
        }
    }

    /// Named series; entries are flattened in series order.
    #[must_use]
    pub fn from_series(series: impl IntoIterator<Item = Series>) -> Self {
        let series: Vec<Series> = series.into_iter().collect();
        let entries = series.iter().flat_map(|s| s.entries.iter().cloned()).collect();
        Self { entries, series }
    }

    /// All entries in draw order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Series, empty when flat entries were assigned.
    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Whether there is nothing to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Series to lay out; flat entries become one unnamed series.
    #[must_use]
    pub fn series_view(&self) -> Cow<'_, [Series]> {
        if self.series.is_empty() && !self.entries.is_empty() {
            Cow::Owned(vec![Series::new("", self.entries.iter().cloned())])
        } else {
            Cow::Borrowed(&self.series)
        }
    }

    /// Value bounds under the given overrides.
    #[must_use]
    pub fn bounds(&self, options: &ChartOptions) -> ValueBounds {
        ValueBounds::resolve(
            !self.entries.is_empty(),
            self.entries.iter().flat_map(Entry::range_values),
            options.min_value,
            options.max_value,
        )
    }
}

// =============================================================================
// Layout seam
// =============================================================================

/// Everything a layout needs for one draw.
pub struct Frame<'a> {
    /// Drawing surface
    pub canvas: &'a mut dyn Canvas,
    /// Surface size
    pub size: Size,
    /// Shared options
    pub options: &'a ChartOptions,
    /// Data being drawn
    pub data: &'a ChartData,
    /// Resolved value bounds of `data`
    pub bounds: ValueBounds,
    /// Animation progress in [0, 1]
    pub progress: f32,
}

impl Frame<'_> {
    /// Whole surface.
    #[must_use]
    pub const fn area(&self) -> Rect {
        Rect::from_size(self.size)
    }

    /// Label text style in `color`.
    #[must_use]
    pub fn text_style(&self, color: Color) -> TextStyle {
        self.options.text_style(color)
    }

    /// Measured size of `text`.
    #[must_use]
    pub fn measure(&self, text: &str, style: &TextStyle) -> Size {
        self.canvas.measure_text(text, style).size()
    }

    /// `color` faded by the animation progress.
    #[must_use]
    pub fn fade(&self, color: Color) -> Color {
        color.faded(self.progress)
    }
}

/// Geometry strategy for one chart kind.
pub trait ChartLayout: fmt::Debug {
    /// Kind drawn by this layout.
    fn kind(&self) -> ChartKind;

    /// Lay out and draw the data. The background has been cleared.
    fn draw_content(&self, frame: &mut Frame<'_>);
}

// =============================================================================
// Chart
// =============================================================================

/// A chart: shared state plus a layout strategy.
pub struct Chart<L: ChartLayout> {
    options: ChartOptions,
    layout: L,
    data: ChartData,
    pending: Option<ChartData>,
    animator: Animator,
    invalidation: InvalidationChannel,
    needs_redraw: bool,
}

impl<L: ChartLayout> fmt::Debug for Chart<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chart")
            .field("kind", &self.layout.kind())
            .field("layout", &self.layout)
            .field("entries", &self.data.entries.len())
            .field("progress", &self.animator.progress())
            .field("animating", &self.animator.direction())
            .finish_non_exhaustive()
    }
}

impl<L: ChartLayout + Default> Default for Chart<L> {
    fn default() -> Self {
        Self::new(L::default())
    }
}

impl<L: ChartLayout> Chart<L> {
    /// Empty chart with default options.
    #[must_use]
    pub fn new(layout: L) -> Self {
        let options = ChartOptions::default();
        Self {
            animator: Animator::new(options.animation_duration),
            options,
            layout,
            data: ChartData::default(),
            pending: None,
            invalidation: InvalidationChannel::new(),
            needs_redraw: true,
        }
    }

    /// Replace the options.
    #[must_use]
    pub fn with_options(mut self, options: ChartOptions) -> Self {
        self.animator.set_duration(options.animation_duration);
        self.options = options;
        self
    }

    /// Assign entries without animating.
    #[must_use]
    pub fn with_entries(mut self, entries: impl IntoIterator<Item = Entry>) -> Self {
        self.data = ChartData::from_entries(entries);
        self.animator.set_progress(1.0);
        self
    }

    /// Assign series without animating.
    #[must_use]
    pub fn with_series(mut self, series: impl IntoIterator<Item = Series>) -> Self {
        self.data = ChartData::from_series(series);
        self.animator.set_progress(1.0);
        self
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Shared options.
    #[must_use]
    pub const fn options(&self) -> &ChartOptions {
        &self.options
    }

    /// Mutable options; marks the chart for redraw.
    pub fn options_mut(&mut self) -> &mut ChartOptions {
        self.needs_redraw = true;
        &mut self.options
    }

    /// Kind-specific layout options.
    #[must_use]
    pub const fn layout(&self) -> &L {
        &self.layout
    }

    /// Mutable layout options; marks the chart for redraw.
    pub fn layout_mut(&mut self) -> &mut L {
        self.needs_redraw = true;
        &mut self.layout
    }

    /// Kind of this chart.
    #[must_use]
    pub fn kind(&self) -> ChartKind {
        self.layout.kind()
    }

    /// Entries being displayed.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        self.data.entries()
    }

    /// Series being displayed.
    #[must_use]
    pub fn series(&self) -> &[Series] {
        self.data.series()
    }

    /// Data being displayed.
    #[must_use]
    pub const fn data(&self) -> &ChartData {
        &self.data
    }

    /// Data waiting for the exit animation to finish.
    #[must_use]
    pub const fn pending(&self) -> Option<&ChartData> {
        self.pending.as_ref()
    }

    /// Resolved value bounds.
    #[must_use]
    pub fn value_bounds(&self) -> ValueBounds {
        self.data.bounds(&self.options)
    }

    /// Lower value bound.
    #[must_use]
    pub fn min_value(&self) -> f32 {
        self.value_bounds().min
    }

    /// Upper value bound.
    #[must_use]
    pub fn max_value(&self) -> f32 {
        self.value_bounds().max
    }

    /// `max_value - min_value`.
    #[must_use]
    pub fn value_range(&self) -> f32 {
        self.value_bounds().range()
    }

    /// Current animation progress.
    #[must_use]
    pub const fn animation_progress(&self) -> f32 {
        self.animator.progress()
    }

    /// Whether an entrance or exit is running.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    /// Direction of the running animation.
    #[must_use]
    pub const fn animation_direction(&self) -> Option<Direction> {
        self.animator.direction()
    }

    // -------------------------------------------------------------------------
    // Updates
    // -------------------------------------------------------------------------

    /// Replace the entries, animating the transition when enabled.
    pub fn set_entries(&mut self, entries: impl IntoIterator<Item = Entry>) {
        self.update(ChartData::from_entries(entries));
    }

    /// Replace the data with series, animating when enabled.
    pub fn set_series(&mut self, series: impl IntoIterator<Item = Series>) {
        self.update(ChartData::from_series(series));
    }

    fn update(&mut self, data: ChartData) {
        self.animator.set_duration(self.options.animation_duration);

        if self.options.is_animated && !self.data.is_empty() {
            // Exit from wherever the current animation is, then swap
            let from = self.animator.progress();
            self.pending = Some(data);
            self.animator.start(Direction::Exit);
            debug!(kind = %self.kind(), from, "exit animation started");
        } else {
            self.pending = None;
            self.animator.set_progress(0.0);
            self.swap_in(data);
        }
        self.invalidate();
    }

    fn swap_in(&mut self, data: ChartData) {
        self.data = data;
        if self.options.is_animated {
            self.animator.start_entrance();
            debug!(kind = %self.kind(), entries = self.data.entries.len(), "entrance animation started");
        } else {
            self.animator.set_progress(1.0);
        }
    }

    /// Advance the animation by `dt`; returns the new progress.
    ///
    /// Hosts call this once per frame while [`is_animating`](Self::is_animating).
    pub fn advance(&mut self, dt: Duration) -> f32 {
        if !self.animator.is_animating() {
            return self.animator.progress();
        }

        let step = self.animator.advance(dt);
        if step.completed == Some(Direction::Exit) {
            let data = self.pending.take().unwrap_or_default();
            debug!(kind = %self.kind(), "exit animation finished; swapping data");
            self.swap_in(data);
        } else if step.completed == Some(Direction::Entrance) {
            debug!(kind = %self.kind(), "entrance animation finished");
        }
        self.invalidate();
        self.animator.progress()
    }

    /// Advance by one 30 Hz frame.
    pub fn tick(&mut self) -> f32 {
        self.advance(FRAME_INTERVAL)
    }

    /// Stop any running animation.
    ///
    /// Pending data is swapped in and progress jumps to 1. Returns whether
    /// anything was running; exactly one invalidation fires in that case.
    pub fn cancel_animation(&mut self) -> bool {
        if !self.animator.is_animating() && self.pending.is_none() {
            return false;
        }
        if let Some(data) = self.pending.take() {
            self.data = data;
        }
        self.animator.set_progress(1.0);
        debug!(kind = %self.kind(), "animation cancelled");
        self.invalidate();
        true
    }

    // -------------------------------------------------------------------------
    // Invalidation
    // -------------------------------------------------------------------------

    /// Register a weakly held repaint listener.
    #[must_use = "dropping the Subscription unregisters the listener"]
    pub fn subscribe(&self, listener: &Arc<dyn InvalidationListener>) -> Subscription {
        self.invalidation.subscribe(listener)
    }

    /// Mark for redraw and notify listeners.
    pub fn invalidate(&mut self) {
        self.needs_redraw = true;
        self.invalidation.notify();
    }

    /// Whether a redraw was requested since the last [`take_redraw`](Self::take_redraw).
    #[must_use]
    pub const fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Return and clear the redraw flag.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    // -------------------------------------------------------------------------
    // Drawing
    // -------------------------------------------------------------------------

    /// Clear the surface and draw the chart at `width` x `height`.
    pub fn draw(&self, canvas: &mut dyn Canvas, width: f32, height: f32) {
        let progress = self.animator.progress();
        trace!(kind = %self.kind(), width, height, progress, "draw");

        canvas.clear(self.options.background_color);
        if width <= 0.0 || height <= 0.0 || self.data.is_empty() {
            return;
        }

        let mut frame = Frame {
            canvas,
            size: Size::new(width, height),
            options: &self.options,
            data: &self.data,
            bounds: self.value_bounds(),
            progress,
        };
        self.layout.draw_content(&mut frame);
    }
}
