//! Side captions: a swatch plus label and value, stacked beside a chart.
//!
//! Radial charts place captions in left and right columns and shrink the
//! drawable area by what the columns consume, so the chart body can be
//! centered in the remainder.

use crate::chart::Frame;
use crate::entry::Entry;
use crate::text::CaptionText;
use glance_core::{Brush, Rect, TextAlign};

/// Column a caption list is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

/// Entries assigned to each caption column, in drawing order.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct CaptionSplit<'a> {
    pub left: Vec<&'a Entry>,
    pub right: Vec<&'a Entry>,
}

impl<'a> CaptionSplit<'a> {
    /// Fill the right column until its running `|value|` sum reaches half
    /// the total; the rest go left in reverse order.
    pub(crate) fn by_value(entries: &[&'a Entry]) -> Self {
        let magnitude = |e: &Entry| e.value().map_or(0.0, f32::abs);
        let total: f32 = entries.iter().map(|&e| magnitude(e)).sum();

        let mut current = 0.0;
        let mut split = entries.len();
        for (i, &entry) in entries.iter().enumerate() {
            if current >= total / 2.0 {
                split = i;
                break;
            }
            current += magnitude(entry);
        }
        Self::at(entries, split)
    }

    /// First half (rounded up) right, the rest left in reverse order.
    pub(crate) fn by_count(entries: &[&'a Entry]) -> Self {
        Self::at(entries, entries.len().div_ceil(2))
    }

    /// Everything on the right.
    pub(crate) fn right_only(entries: &[&'a Entry]) -> Self {
        Self::at(entries, entries.len())
    }

    fn at(entries: &[&'a Entry], split: usize) -> Self {
        let (right, left) = entries.split_at(split.min(entries.len()));
        Self {
            left: left.iter().rev().copied().collect(),
            right: right.to_vec(),
        }
    }

    /// Draw both columns, shrinking `area` by the space they take.
    pub(crate) fn draw(&self, frame: &mut Frame<'_>, area: &mut Rect) {
        draw_side_captions(frame, &self.right, Side::Right, area);
        draw_side_captions(frame, &self.left, Side::Left, area);
    }
}

/// Draw `entries` evenly spaced down one side of `area`.
///
/// `area` loses the width consumed by the column plus one margin. A
/// single caption is centered vertically.
pub(crate) fn draw_side_captions(frame: &mut Frame<'_>, entries: &[&Entry], side: Side, area: &mut Rect) {
    if entries.is_empty() {
        return;
    }

    let margin = frame.options.margin;
    let swatch = frame.options.label_text_size;
    let outer = 2.0 * margin;
    let available_height = (area.height - 2.0 * outer).max(0.0);
    let spread = (available_height - swatch).max(0.0);
    let step = if entries.len() <= 1 {
        0.0
    } else {
        spread / (entries.len() - 1) as f32
    };

    let x = match side {
        Side::Left => area.left() + margin,
        Side::Right => area.right() - margin - swatch,
    };
    let align = match side {
        Side::Left => TextAlign::Left,
        Side::Right => TextAlign::Right,
    };
    let text_x = match side {
        Side::Left => x + swatch + margin,
        Side::Right => x - margin,
    };
    let style = frame.text_style(frame.options.label_color);

    let mut text_width: f32 = 0.0;
    for (i, entry) in entries.iter().enumerate() {
        let mut y = (i as f32).mul_add(step, area.top() + outer);
        if entries.len() <= 1 {
            y += spread / 2.0;
        }

        let swatch_color = frame.fade(entry.color);
        frame
            .canvas
            .fill_rect(Rect::new(x, y, swatch, swatch), &Brush::Solid(swatch_color));

        let caption = CaptionText {
            label: entry.label_text().map(|l| (l, frame.fade(entry.text_color))),
            value: entry
                .value_label_text()
                .map(|v| (v, frame.fade(entry.value_label_color()))),
        };
        text_width = text_width.max(caption.width(&*frame.canvas, &style));
        let anchor = glance_core::Point::new(text_x, y + swatch / 2.0);
        caption.draw(&mut *frame.canvas, anchor, &style, align);
    }

    let consumed = swatch + margin + text_width + margin;
    *area = match side {
        Side::Left => area.with_left((area.left() + consumed + margin).min(area.right())),
        Side::Right => area.with_right((area.right() - consumed - margin).max(area.left())),
    };
}
