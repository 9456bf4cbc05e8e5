//! Bars spanning `[start_value, value]`.

use super::axis::{draw_footer_labels, draw_value_label, draw_y_axis, AxisGeometry, ValueLabel};
use super::bar::{draw_bar_area, fill_bar, DEFAULT_MIN_BAR_HEIGHT};
use crate::chart::{ChartKind, ChartLayout, Frame};
use crate::entry::Entry;
use crate::options::AxisOptions;
use glance_core::{Brush, Color, CornerRadius, Rect};
use serde::{Deserialize, Serialize};

/// Range bars. A span crossing zero is drawn as two segments meeting at the
/// zero line: the positive one in the entry color, the negative one in its
/// lower color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeBarLayout {
    /// Axis pipeline options
    pub axis: AxisOptions,
    /// Alpha (0-255) of the full-height column behind each bar
    pub bar_area_alpha: u8,
    /// Segments are never drawn shorter than this
    pub min_bar_height: f32,
    /// Corner radius of the segments' outer ends
    pub corner_radius: f32,
}

impl Default for RangeBarLayout {
    fn default() -> Self {
        Self {
            axis: AxisOptions::default(),
            bar_area_alpha: 32,
            min_bar_height: DEFAULT_MIN_BAR_HEIGHT,
            corner_radius: 0.0,
        }
    }
}

impl RangeBarLayout {
    /// Set the axis options.
    #[must_use]
    pub fn with_axis(mut self, axis: AxisOptions) -> Self {
        self.axis = axis;
        self
    }

    /// Set the corner radius.
    #[must_use]
    pub const fn with_corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Segments of one span: `(rect, color, corners)`.
    fn segments(&self, geom: &AxisGeometry, entry: &Entry, left: f32, progress: f32) -> Option<Vec<(Rect, Color, CornerRadius)>> {
        let value = entry.value()?;
        let start = entry.start_value().unwrap_or(0.0);
        let (low, high) = if start <= value { (start, value) } else { (value, start) };
        let r = self.corner_radius;
        let width = geom.item_width;
        let y = |v: f32| geom.animated_y(v, progress);

        if low < 0.0 && high > 0.0 {
            let upper = geom.span_rect(left, width, y(high), geom.origin, self.min_bar_height);
            let lower = geom.span_rect(left, width, geom.origin, y(low), self.min_bar_height);
            return Some(vec![
                (upper, entry.color, CornerRadius::top(r)),
                (lower, entry.lower_color(), CornerRadius::bottom(r)),
            ]);
        }

        let rect = geom.span_rect(left, width, y(high), y(low), self.min_bar_height);
        Some(vec![(rect, entry.color, CornerRadius::uniform(r))])
    }
}

impl ChartLayout for RangeBarLayout {
    fn kind(&self) -> ChartKind {
        ChartKind::RangeBar
    }

    fn draw_content(&self, frame: &mut Frame<'_>) {
        let entries = frame.data.entries();
        let labels: Vec<Option<&str>> = entries.iter().map(Entry::label_text).collect();
        let value_labels: Vec<&str> = entries.iter().filter_map(Entry::value_label_text).collect();
        let geom = AxisGeometry::compute(frame, &self.axis, &labels, &value_labels, 0.0);

        draw_y_axis(frame, &geom, &self.axis);

        for (i, entry) in entries.iter().enumerate() {
            let left = geom.item_left(i);
            let Some(segments) = self.segments(&geom, entry, left, frame.progress) else {
                continue;
            };

            if self.bar_area_alpha > 0 {
                let column = Rect::new(left, geom.band_top(), geom.item_width, geom.item_height);
                draw_bar_area(frame, column, entry.color, self.bar_area_alpha);
            }

            for (rect, color, radius) in &segments {
                fill_bar(frame, *rect, *radius, &Brush::Solid(*color));
            }

            if let Some(text) = entry.value_label_text() {
                let top = segments.iter().map(|s| s.0.top()).fold(f32::INFINITY, f32::min);
                let bottom = segments.iter().map(|s| s.0.bottom()).fold(f32::NEG_INFINITY, f32::max);
                let label = ValueLabel {
                    text,
                    color: frame.fade(entry.value_label_color()),
                    center_x: geom.item_center(i),
                    top,
                    bottom,
                    positive: true,
                };
                draw_value_label(frame, &geom, &self.axis, &label);
            }
        }

        let footer: Vec<(Option<&str>, Color)> = entries
            .iter()
            .map(|e| (e.label_text(), frame.fade(e.text_color)))
            .collect();
        draw_footer_labels(frame, &geom, &self.axis, &footer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Chart;
    use crate::options::ChartOptions;
    use glance_core::{DrawCommand, RecordingCanvas};

    const GREEN: Color = Color {
        r: 0.0,
        g: 1.0,
        b: 0.0,
        a: 1.0,
    };
    const RED: Color = Color {
        r: 1.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    fn segments(canvas: &RecordingCanvas) -> Vec<(Rect, Color, CornerRadius)> {
        canvas
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Rect {
                    bounds,
                    radius,
                    fill: Some(Brush::Solid(color)),
                    ..
                } if color.a >= 1.0 => Some((*bounds, *color, *radius)),
                _ => None,
            })
            .collect()
    }

    fn chart(entries: Vec<Entry>) -> Chart<RangeBarLayout> {
        Chart::new(RangeBarLayout::default().with_corner_radius(3.0))
            .with_options(ChartOptions::default().with_margin(10.0))
            .with_entries(entries)
    }

    #[test]
    fn test_crossing_span_splits_at_origin() {
        let chart = chart(vec![Entry::range(Some(-50.0), Some(100.0))
            .with_color(GREEN)
            .with_lower_color(RED)]);
        let mut canvas = RecordingCanvas::new();
        chart.draw(&mut canvas, 300.0, 200.0);
        let parts = segments(&canvas);
        assert_eq!(parts.len(), 2);

        let (upper, upper_color, upper_radius) = parts[0];
        let (lower, lower_color, lower_radius) = parts[1];
        assert_eq!(upper_color, GREEN);
        assert_eq!(lower_color, RED);
        assert_eq!(upper_radius, CornerRadius::top(3.0));
        assert_eq!(lower_radius, CornerRadius::bottom(3.0));
        // band 10..190, range 150: origin at 10 + 100/150 * 180 = 130
        assert!((upper.bottom() - 130.0).abs() < 1e-3);
        assert!((lower.top() - 130.0).abs() < 1e-3);
        assert!((upper.top() - 10.0).abs() < 1e-3);
        assert!((lower.bottom() - 190.0).abs() < 1e-3);
    }

    #[test]
    fn test_one_sided_span_is_single_rect() {
        let chart = chart(vec![Entry::range(Some(20.0), Some(80.0)).with_color(GREEN)]);
        let mut canvas = RecordingCanvas::new();
        chart.draw(&mut canvas, 300.0, 200.0);
        let parts = segments(&canvas);
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].2, CornerRadius::uniform(3.0));
        // 0..80 over 180 px: 20 sits 45 px above the band bottom
        assert!((parts[0].0.bottom() - 145.0).abs() < 1e-3);
    }

    #[test]
    fn test_missing_start_spans_from_zero() {
        let chart = chart(vec![Entry::range(None, Some(40.0)).with_color(GREEN)]);
        let mut canvas = RecordingCanvas::new();
        chart.draw(&mut canvas, 300.0, 200.0);
        let parts = segments(&canvas);
        assert!((parts[0].0.bottom() - 190.0).abs() < 1e-3);
        assert!((parts[0].0.top() - 10.0).abs() < 1e-3);
    }

    #[test]
    fn test_reversed_span() {
        let chart = chart(vec![Entry::range(Some(80.0), Some(20.0)).with_color(GREEN)]);
        let mut canvas = RecordingCanvas::new();
        chart.draw(&mut canvas, 300.0, 200.0);
        let parts = segments(&canvas);
        assert!((parts[0].0.bottom() - 145.0).abs() < 1e-3);
    }

    #[test]
    fn test_null_value_keeps_slot() {
        let chart = chart(vec![
            Entry::range(Some(1.0), None),
            Entry::range(Some(1.0), Some(2.0)).with_color(GREEN),
        ]);
        let mut canvas = RecordingCanvas::new();
        chart.draw(&mut canvas, 310.0, 200.0);
        let parts = segments(&canvas);
        assert_eq!(parts.len(), 1);
        // second slot: 10 + (310 - 30) / 2 + 10
        assert!((parts[0].0.x - 160.0).abs() < 1e-3);
    }
}
