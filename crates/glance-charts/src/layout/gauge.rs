//! Radial gauges: one concentric ring per entry.
//!
//! Ring `i` sits at radius `(i + 1) * spacing`. Entries without a value
//! draw nothing but keep their ring slot, so the other rings stay put.

use crate::caption::CaptionSplit;
use crate::chart::{ChartKind, ChartLayout, Frame};
use crate::entry::Entry;
use crate::range::AbsoluteBounds;
use glance_core::{Brush, LineCap, Path, Point, Stroke};
use serde::{Deserialize, Serialize};
use std::f32::consts::{PI, TAU};

/// Line width and ring spacing for `count` rings inside `radius`.
///
/// Without an explicit `line_size` the width is `radius / ((count + 1) * 2)`.
/// Rings are spaced two line widths apart.
#[must_use]
pub fn ring_metrics(radius: f32, count: usize, line_size: Option<f32>) -> (f32, f32) {
    let width = line_size.unwrap_or_else(|| radius / ((count + 1) * 2) as f32).max(0.0);
    (width, width * 2.0)
}

/// Shared ring drawing of the full and half gauges.
#[derive(Debug, Clone, Copy)]
struct Rings {
    line_size: Option<f32>,
    line_area_alpha: u8,
    start_angle: f32,
    total_arc: f32,
    show_captions: bool,
}

impl Rings {
    fn draw(self, frame: &mut Frame<'_>) {
        let entries = frame.data.entries();
        let mut area = frame.area();

        if self.show_captions {
            let captioned: Vec<&Entry> = entries.iter().filter(|e| e.value().is_some()).collect();
            CaptionSplit::by_count(&captioned).draw(frame, &mut area);
        }

        let margin = frame.options.margin;
        let half = self.total_arc < TAU;
        let (center, radius) = if half {
            let radius = (area.width / 2.0).min(area.height) - 2.0 * margin;
            (Point::new(area.center().x, area.bottom() - margin), radius.max(0.0))
        } else {
            let radius = (area.width.min(area.height) - 2.0 * margin) / 2.0;
            (area.center(), radius.max(0.0))
        };

        let bounds = AbsoluteBounds::from_values(entries.iter().filter_map(Entry::value), frame.bounds);
        let (line_width, spacing) = ring_metrics(radius, entries.len(), self.line_size);

        for (i, entry) in entries.iter().enumerate() {
            let Some(value) = entry.value() else {
                continue;
            };
            let ring_radius = (i + 1) as f32 * spacing;

            if self.line_area_alpha > 0 {
                let track = Path::arc_stroke(center, ring_radius, self.start_angle, self.total_arc);
                let color = frame.fade(entry.color.with_alpha8(self.line_area_alpha));
                frame.canvas.stroke_path(&track, &Stroke::new(color, line_width));
            }

            let sweep = frame.progress * self.total_arc * bounds.magnitude_fraction(value);
            if sweep > 0.0 {
                let arc = Path::arc_stroke(center, ring_radius, self.start_angle, sweep);
                let stroke = Stroke::new(Brush::Solid(entry.color), line_width).with_cap(LineCap::Round);
                frame.canvas.stroke_path(&arc, &stroke);
            }
        }
    }
}

/// Full-circle gauge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadialGaugeLayout {
    /// Ring line width; derived from the available radius when unset
    pub line_size: Option<f32>,
    /// Alpha (0-255) of the full-circle track behind each ring
    pub line_area_alpha: u8,
    /// Angle where rings start, in degrees (0 = +x, clockwise)
    pub start_angle: f32,
    /// Draw side captions
    pub show_captions: bool,
}

impl Default for RadialGaugeLayout {
    fn default() -> Self {
        Self {
            line_size: None,
            line_area_alpha: 52,
            start_angle: -90.0,
            show_captions: true,
        }
    }
}

impl ChartLayout for RadialGaugeLayout {
    fn kind(&self) -> ChartKind {
        ChartKind::RadialGauge
    }

    fn draw_content(&self, frame: &mut Frame<'_>) {
        Rings {
            line_size: self.line_size,
            line_area_alpha: self.line_area_alpha,
            start_angle: self.start_angle.to_radians(),
            total_arc: TAU,
            show_captions: self.show_captions,
        }
        .draw(frame);
    }
}

/// Half-circle gauge over the top of its center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HalfRadialGaugeLayout {
    /// Ring line width; derived from the available radius when unset
    pub line_size: Option<f32>,
    /// Alpha (0-255) of the half-circle track behind each ring
    pub line_area_alpha: u8,
    /// Angle where rings start, in degrees (0 = +x, clockwise)
    pub start_angle: f32,
    /// Draw side captions
    pub show_captions: bool,
}

impl Default for HalfRadialGaugeLayout {
    fn default() -> Self {
        Self {
            line_size: None,
            line_area_alpha: 52,
            start_angle: 180.0,
            show_captions: true,
        }
    }
}

impl ChartLayout for HalfRadialGaugeLayout {
    fn kind(&self) -> ChartKind {
        ChartKind::HalfRadialGauge
    }

    fn draw_content(&self, frame: &mut Frame<'_>) {
        Rings {
            line_size: self.line_size,
            line_area_alpha: self.line_area_alpha,
            start_angle: self.start_angle.to_radians(),
            total_arc: PI,
            show_captions: self.show_captions,
        }
        .draw(frame);
    }
}
