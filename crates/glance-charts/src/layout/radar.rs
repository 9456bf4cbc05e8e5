//! Radar charts.
//!
//! Entry `i` sits on the spoke at angle `PI + i * TAU / n`, at a distance
//! proportional to `|value - min|` over the absolute bounds. When the
//! smallest magnitude is zero, a value and its negation land at the same
//! distance.

use super::point::draw_point;
use crate::chart::{ChartKind, ChartLayout, Frame};
use crate::entry::Entry;
use crate::options::{LineMode, PointMode};
use crate::range::AbsoluteBounds;
use crate::text::CaptionText;
use glance_core::{Brush, Color, Point, Stroke, TextAlign};
use serde::{Deserialize, Serialize};
use std::f32::consts::{PI, TAU};

/// Tolerance when deciding whether a spoke points straight up or down.
const ANGLE_EPSILON: f32 = 0.01;

/// Angle of the first spoke.
pub const RADAR_START_ANGLE: f32 = PI;

/// Entries around a circle, joined edge to edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadarLayout {
    /// Edge style; splines are drawn straight
    pub line_mode: LineMode,
    /// Edge width
    pub line_size: f32,
    /// Mark shape
    pub point_mode: PointMode,
    /// Mark diameter
    pub point_size: f32,
    /// Color of the max-value circle and the spokes
    pub border_line_color: Color,
    /// Width of the max-value circle and the spokes
    pub border_line_size: f32,
}

impl Default for RadarLayout {
    fn default() -> Self {
        Self {
            line_mode: LineMode::Straight,
            line_size: 3.0,
            point_mode: PointMode::Circle,
            point_size: 14.0,
            border_line_color: Color::LIGHT_GRAY,
            border_line_size: 2.0,
        }
    }
}

/// Point at `distance` from `center` along the spoke at `angle`.
#[must_use]
pub fn radar_point(center: Point, distance: f32, angle: f32) -> Point {
    center + Point::new(0.0, distance).rotated(angle)
}

/// Angle of spoke `index` of `count`.
#[must_use]
pub fn spoke_angle(index: usize, count: usize) -> f32 {
    (index as f32).mul_add(TAU / count.max(1) as f32, RADAR_START_ANGLE)
}

/// Text alignment of a label at the end of the spoke at `angle`.
///
/// Spokes pointing straight up or down get centered labels; labels on the
/// right half start at the anchor and those on the left end there.
pub(crate) fn label_align(angle: f32) -> TextAlign {
    if (angle - PI).abs() < ANGLE_EPSILON || (angle - TAU).abs() < ANGLE_EPSILON {
        TextAlign::Center
    } else if angle > TAU {
        TextAlign::Right
    } else {
        TextAlign::Left
    }
}

impl ChartLayout for RadarLayout {
    fn kind(&self) -> ChartKind {
        ChartKind::Radar
    }

    fn draw_content(&self, frame: &mut Frame<'_>) {
        let entries = frame.data.entries();
        let count = entries.len();
        let margin = frame.options.margin;
        let style = frame.text_style(frame.options.label_color);

        let captions: Vec<CaptionText<'_>> = entries
            .iter()
            .map(|e| CaptionText {
                label: e.label_text().map(|l| (l, frame.fade(e.text_color))),
                value: e.value_label_text().map(|v| (v, frame.fade(e.value_label_color()))),
            })
            .collect();
        let caption_extent = captions
            .iter()
            .map(|c| c.width(&*frame.canvas, &style).max(c.height(&*frame.canvas, &style)))
            .fold(0.0, f32::max);

        let area = frame.area();
        let center = area.center();
        let radius = (area.width.min(area.height) / 2.0 - margin - caption_extent).max(0.0);

        let border = Stroke::new(self.border_line_color, self.border_line_size);
        frame.canvas.stroke_circle(center, radius, &border);

        let bounds = AbsoluteBounds::from_values(entries.iter().filter_map(Entry::value), frame.bounds);
        let points: Vec<Option<Point>> = entries
            .iter()
            .enumerate()
            .map(|(i, e)| {
                let distance = radius * bounds.distance_fraction(e.value()?) * frame.progress;
                Some(radar_point(center, distance, spoke_angle(i, count)))
            })
            .collect();

        if self.line_mode != LineMode::None && count > 1 {
            for i in 0..count {
                let j = (i + 1) % count;
                if let (Some(from), Some(to)) = (points[i], points[j]) {
                    let brush = Brush::radial(center, radius, Color::TRANSPARENT, frame.fade(entries[i].color));
                    frame.canvas.draw_line(from, to, &Stroke::new(brush, self.line_size));
                }
            }
        }

        let spoke = border.clone().with_dash(vec![self.border_line_size * 2.0, self.border_line_size * 2.0]);
        for (i, (entry, point)) in entries.iter().zip(&points).enumerate() {
            let Some(point) = *point else {
                continue;
            };
            let angle = spoke_angle(i, count);
            frame.canvas.draw_line(point, radar_point(center, radius, angle), &spoke);
            draw_point(frame, point, self.point_mode, self.point_size, entry.color);
        }

        for (i, caption) in captions.iter().enumerate() {
            let angle = spoke_angle(i, count);
            let height = caption.height(&*frame.canvas, &style);
            let anchor = radar_point(center, radius + margin, angle);
            // push the block outward along the vertical component of the spoke
            let anchor = Point::new(anchor.x, angle.cos().mul_add(height / 2.0, anchor.y));
            caption.draw(frame.canvas, anchor, &style, label_align(angle));
        }
    }
}
