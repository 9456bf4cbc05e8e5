//! Shared geometry of axis-based charts.
//!
//! Bar, point, line and their variants all lay items out the same way:
//! an optional Y axis gutter, a header reserved for value labels, a footer
//! reserved for labels, equal-width item slots separated by the margin,
//! and a zero line placed proportionally inside the plotted band.

use crate::chart::Frame;
use crate::entry::{Entry, EntryKey, Series};
use crate::options::{AxisOptions, Orientation, ValueLabelOption, YAxisPosition};
use crate::range::ValueBounds;
use crate::scale::{format_tick, NiceScale};
use crate::text::{centered_baseline, draw_vertical, fit_label};
use glance_core::{Color, Point, Rect, Stroke, TextAlign, TextStyle};
use indexmap::IndexMap;

/// Computed geometry of one axis-chart draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisGeometry {
    /// Spacing around and between items
    pub margin: f32,
    /// Horizontal offset of the first slot (left gutter width)
    pub x_shift: f32,
    /// Width available to item slots
    pub plot_width: f32,
    /// Width of one item slot
    pub item_width: f32,
    /// Number of item slots
    pub count: usize,
    /// Height reserved above the band
    pub header_height: f32,
    /// Height reserved below the band
    pub footer_height: f32,
    /// Height of the plotted band
    pub item_height: f32,
    /// Y of value zero
    pub origin: f32,
    /// Plotted value bounds (the nice scale when the Y axis is shown)
    pub bounds: ValueBounds,
    /// Y axis ticks, when shown
    pub scale: Option<NiceScale>,
}

impl AxisGeometry {
    /// Lay out `labels.len()` slots.
    ///
    /// `value_labels` are only measured, to size the header. `extra_footer`
    /// reserves room below the labels, e.g. for a legend.
    pub(crate) fn compute(
        frame: &Frame<'_>,
        axis: &AxisOptions,
        labels: &[Option<&str>],
        value_labels: &[&str],
        extra_footer: f32,
    ) -> Self {
        let margin = frame.options.margin;
        let style = frame.text_style(frame.options.label_color);

        let scale = axis
            .shows_y_axis()
            .then(|| NiceScale::calculate(frame.bounds.min, frame.bounds.max, axis.y_axis_max_ticks));
        let bounds = scale.map_or(frame.bounds, |s| ValueBounds::new(s.nice_min, s.nice_max));

        let gutter = match scale {
            Some(s) if axis.show_y_axis_text => {
                let widest = s
                    .ticks()
                    .map(|t| frame.measure(&format_tick(t, s.tick_spacing), &style).width)
                    .fold(0.0, f32::max);
                widest + margin
            }
            _ => 0.0,
        };
        let x_shift = match axis.y_axis_position {
            YAxisPosition::Left => gutter,
            YAxisPosition::Right => 0.0,
        };
        let plot_width = (frame.size.width - gutter).max(0.0);

        let count = labels.len().max(1);
        let n = count as f32;
        let item_width = ((n + 1.0).mul_add(-margin, plot_width) / n).max(0.0);

        let mut footer_height = margin + extra_footer;
        if let Some(h) = max_extent(frame, &style, labels.iter().flatten().copied(), axis.label_orientation) {
            footer_height += h + margin;
        }

        let mut header_height = margin;
        if axis.value_label_option.reserves_header() {
            if let Some(h) = max_extent(frame, &style, value_labels.iter().copied(), axis.value_label_orientation) {
                header_height += h + margin;
            }
        }

        let item_height = (frame.size.height - header_height - footer_height).max(0.0);
        let origin = if bounds.is_degenerate() {
            header_height + item_height / 2.0
        } else if bounds.max <= 0.0 {
            header_height
        } else if bounds.min > 0.0 {
            header_height + item_height
        } else {
            (bounds.max / bounds.range()).mul_add(item_height, header_height)
        };

        Self {
            margin,
            x_shift,
            plot_width,
            item_width,
            count,
            header_height,
            footer_height,
            item_height,
            origin,
            bounds,
            scale,
        }
    }

    /// Left edge of slot `i`.
    #[must_use]
    pub fn item_left(&self, i: usize) -> f32 {
        (i as f32).mul_add(self.item_width + self.margin, self.x_shift + self.margin)
    }

    /// Horizontal center of slot `i`.
    #[must_use]
    pub fn item_center(&self, i: usize) -> f32 {
        self.item_left(i) + self.item_width / 2.0
    }

    /// Top of the plotted band.
    #[must_use]
    pub const fn band_top(&self) -> f32 {
        self.header_height
    }

    /// Bottom of the plotted band.
    #[must_use]
    pub fn band_bottom(&self) -> f32 {
        self.header_height + self.item_height
    }

    /// Y of `value` at full progress.
    #[must_use]
    pub fn value_y(&self, value: f32) -> f32 {
        if self.bounds.is_degenerate() {
            return self.origin;
        }
        ((self.bounds.max - value) / self.bounds.range()).mul_add(self.item_height, self.header_height)
    }

    /// Y of `value` blended from the origin by `progress`.
    #[must_use]
    pub fn animated_y(&self, value: f32, progress: f32) -> f32 {
        (self.value_y(value) - self.origin).mul_add(progress, self.origin)
    }

    /// Bar from the origin to `value`, at least `min_height` tall and kept
    /// inside the band.
    #[must_use]
    pub fn bar_rect(&self, left: f32, width: f32, value: f32, progress: f32, min_height: f32) -> Rect {
        let y = self.animated_y(value, progress);
        self.span_rect(left, width, y, self.origin, min_height)
    }

    /// Rect between two y coordinates with the same minimum-height policy.
    #[must_use]
    pub fn span_rect(&self, left: f32, width: f32, y0: f32, y1: f32, min_height: f32) -> Rect {
        let mut top = y0.min(y1);
        let height = (y0 - y1).abs().max(min_height).min(self.item_height);
        if top + height > self.band_bottom() {
            top = self.band_bottom() - height;
        }
        top = top.max(self.band_top());
        Rect::new(left, top, width, height)
    }
}

/// Largest extent of `texts` across the reserved direction: line height for
/// horizontal text, text width for vertical text.
fn max_extent<'t>(
    frame: &Frame<'_>,
    style: &TextStyle,
    texts: impl Iterator<Item = &'t str>,
    orientation: Orientation,
) -> Option<f32> {
    texts
        .map(|t| {
            let size = frame.measure(t, style);
            match orientation {
                Orientation::Horizontal => size.height,
                Orientation::Vertical => size.width,
            }
        })
        .reduce(f32::max)
}

// =============================================================================
// Label grid
// =============================================================================

/// Entries of several series aligned into shared item slots.
///
/// Slots are the distinct entry keys in first-appearance order. A series
/// with no entry for a slot has `None` there.
#[derive(Debug)]
pub(crate) struct LabelGrid<'a> {
    pub labels: Vec<(Option<&'a str>, Color)>,
    pub cells: Vec<Vec<Option<&'a Entry>>>,
}

impl<'a> LabelGrid<'a> {
    pub(crate) fn build(series: &'a [Series]) -> Self {
        // A lone series keeps every entry, duplicate labels included
        let by_index = series.len() <= 1;
        let key = |i: usize, e: &Entry| if by_index { EntryKey::Index(i) } else { e.key(i) };

        let mut slots: IndexMap<EntryKey, (Option<&'a str>, Color)> = IndexMap::new();
        for s in series {
            for (i, e) in s.entries.iter().enumerate() {
                slots.entry(key(i, e)).or_insert((e.label_text(), e.text_color));
            }
        }

        let cells = series
            .iter()
            .map(|s| {
                let mut row = vec![None; slots.len()];
                for (i, e) in s.entries.iter().enumerate() {
                    if let Some(slot) = slots.get_index_of(&key(i, e)) {
                        row[slot] = Some(e);
                    }
                }
                row
            })
            .collect();

        Self {
            labels: slots.into_values().collect(),
            cells,
        }
    }

    /// Label texts for [`AxisGeometry::compute`].
    pub(crate) fn label_texts(&self) -> Vec<Option<&'a str>> {
        self.labels.iter().map(|(l, _)| *l).collect()
    }

    /// Value of a cell: missing entries count as 0, gaps stay `None`.
    pub(crate) fn value(cell: Option<&Entry>) -> Option<f32> {
        cell.map_or(Some(0.0), Entry::value)
    }
}

// =============================================================================
// Drawing helpers
// =============================================================================

/// Grid lines and tick labels of the Y axis.
pub(crate) fn draw_y_axis(frame: &mut Frame<'_>, geom: &AxisGeometry, axis: &AxisOptions) {
    let Some(scale) = geom.scale else {
        return;
    };

    let left = geom.x_shift;
    let right = geom.x_shift + geom.plot_width;
    let line = Stroke::new(frame.fade(axis.y_axis_line_color), 1.0);
    let (align, text_x) = match axis.y_axis_position {
        YAxisPosition::Left => (TextAlign::Right, geom.x_shift - geom.margin / 2.0),
        YAxisPosition::Right => (TextAlign::Left, geom.plot_width + geom.margin / 2.0),
    };
    let style = frame.text_style(axis.y_axis_text_color).with_align(align);

    for tick in scale.ticks() {
        let y = geom.value_y(tick);
        if axis.show_y_axis_lines {
            frame.canvas.draw_line(Point::new(left, y), Point::new(right, y), &line);
        }
        if axis.show_y_axis_text {
            let text = format_tick(tick, scale.tick_spacing);
            let bounds = frame.canvas.measure_text(&text, &style);
            frame
                .canvas
                .draw_text(&text, Point::new(text_x, centered_baseline(bounds, y)), &style);
        }
    }
}

/// Labels below the band, one per slot.
pub(crate) fn draw_footer_labels(
    frame: &mut Frame<'_>,
    geom: &AxisGeometry,
    axis: &AxisOptions,
    labels: &[(Option<&str>, Color)],
) {
    let top = geom.band_bottom() + geom.margin;
    for (i, (label, color)) in labels.iter().enumerate() {
        let Some(label) = label else {
            continue;
        };
        let x = geom.item_center(i);
        match axis.label_orientation {
            Orientation::Horizontal => {
                let style = frame.text_style(*color).with_align(TextAlign::Center);
                let text = fit_label(&*frame.canvas, label, &style, geom.item_width);
                let bounds = frame.canvas.measure_text(text, &style);
                frame.canvas.draw_text(text, Point::new(x, top - bounds.y), &style);
            }
            Orientation::Vertical => {
                let style = frame.text_style(*color).with_align(TextAlign::Right);
                draw_vertical(frame.canvas, label, Point::new(x, top), &style);
            }
        }
    }
}

/// A value label and the element it belongs to.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ValueLabel<'a> {
    pub text: &'a str,
    pub color: Color,
    pub center_x: f32,
    /// Drawn top of the bar or point
    pub top: f32,
    /// Drawn bottom of the bar or point
    pub bottom: f32,
    /// Whether "past the end" means above the element
    pub positive: bool,
}

/// One value label placed per the configured option.
pub(crate) fn draw_value_label(frame: &mut Frame<'_>, geom: &AxisGeometry, axis: &AxisOptions, label: &ValueLabel<'_>) {
    let base = frame.text_style(label.color);
    let half_margin = geom.margin / 2.0;

    match axis.value_label_option {
        ValueLabelOption::None => {}
        ValueLabelOption::TopOfChart => {
            let anchor = Point::new(label.center_x, geom.header_height - geom.margin);
            draw_outward(frame, geom, axis, label.text, &base, anchor, true);
        }
        ValueLabelOption::TopOfElement => {
            let anchor = if label.positive {
                Point::new(label.center_x, label.top - half_margin)
            } else {
                Point::new(label.center_x, label.bottom + half_margin)
            };
            draw_outward(frame, geom, axis, label.text, &base, anchor, label.positive);
        }
        ValueLabelOption::OverElement => {
            let mid = Point::new(label.center_x, (label.top + label.bottom) / 2.0);
            let style = base.with_align(TextAlign::Center);
            match axis.value_label_orientation {
                Orientation::Horizontal => {
                    let text = fit_label(&*frame.canvas, label.text, &style, geom.item_width);
                    let bounds = frame.canvas.measure_text(text, &style);
                    frame
                        .canvas
                        .draw_text(text, Point::new(mid.x, centered_baseline(bounds, mid.y)), &style);
                }
                Orientation::Vertical => draw_vertical(frame.canvas, label.text, mid, &style),
            }
        }
    }
}

/// Text growing away from `anchor`: upward when `up`, downward otherwise.
fn draw_outward(
    frame: &mut Frame<'_>,
    geom: &AxisGeometry,
    axis: &AxisOptions,
    text: &str,
    base: &TextStyle,
    anchor: Point,
    up: bool,
) {
    match axis.value_label_orientation {
        Orientation::Horizontal => {
            let style = base.clone().with_align(TextAlign::Center);
            let text = fit_label(&*frame.canvas, text, &style, geom.item_width);
            let bounds = frame.canvas.measure_text(text, &style);
            let baseline = if up {
                anchor.y - (bounds.y + bounds.height)
            } else {
                anchor.y - bounds.y
            };
            frame.canvas.draw_text(text, Point::new(anchor.x, baseline), &style);
        }
        Orientation::Vertical => {
            let align = if up { TextAlign::Left } else { TextAlign::Right };
            draw_vertical(frame.canvas, text, anchor, &base.clone().with_align(align));
        }
    }
}
