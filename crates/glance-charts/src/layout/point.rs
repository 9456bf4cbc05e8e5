//! Point charts, plus the point marks line charts reuse.

use super::axis::{draw_footer_labels, draw_value_label, draw_y_axis, AxisGeometry, ValueLabel};
use crate::chart::{ChartKind, ChartLayout, Frame};
use crate::entry::Entry;
use crate::options::{AxisOptions, PointMode};
use glance_core::{Brush, Color, Point, Rect};
use serde::{Deserialize, Serialize};

/// Default diameter of a point mark.
pub const DEFAULT_POINT_SIZE: f32 = 14.0;

/// One mark per entry at the entry's value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointLayout {
    /// Axis pipeline options
    pub axis: AxisOptions,
    /// Mark shape
    pub point_mode: PointMode,
    /// Mark diameter
    pub point_size: f32,
    /// Alpha (0-255) of the column between a point and the origin
    pub point_area_alpha: u8,
}

impl Default for PointLayout {
    fn default() -> Self {
        Self {
            axis: AxisOptions::default(),
            point_mode: PointMode::Circle,
            point_size: DEFAULT_POINT_SIZE,
            point_area_alpha: 100,
        }
    }
}

impl PointLayout {
    /// Set the axis options.
    #[must_use]
    pub fn with_axis(mut self, axis: AxisOptions) -> Self {
        self.axis = axis;
        self
    }

    /// Set the mark shape.
    #[must_use]
    pub const fn with_point_mode(mut self, mode: PointMode) -> Self {
        self.point_mode = mode;
        self
    }
}

impl ChartLayout for PointLayout {
    fn kind(&self) -> ChartKind {
        ChartKind::Point
    }

    fn draw_content(&self, frame: &mut Frame<'_>) {
        let entries = frame.data.entries();
        let labels: Vec<Option<&str>> = entries.iter().map(Entry::label_text).collect();
        let value_labels: Vec<&str> = entries.iter().filter_map(Entry::value_label_text).collect();
        let geom = AxisGeometry::compute(frame, &self.axis, &labels, &value_labels, 0.0);

        draw_y_axis(frame, &geom, &self.axis);

        let marks: Vec<Option<Point>> = entries
            .iter()
            .enumerate()
            .map(|(i, e)| {
                e.value()
                    .map(|v| Point::new(geom.item_center(i), geom.animated_y(v, frame.progress)))
            })
            .collect();

        if self.point_area_alpha > 0 {
            for (entry, mark) in entries.iter().zip(&marks) {
                if let Some(center) = mark {
                    draw_point_area(frame, *center, geom.origin, self.point_size, entry.color, self.point_area_alpha);
                }
            }
        }

        for (entry, mark) in entries.iter().zip(&marks) {
            let (Some(center), Some(value)) = (mark, entry.value()) else {
                continue;
            };
            draw_point(frame, *center, self.point_mode, self.point_size, entry.color);
            if let Some(text) = entry.value_label_text() {
                let label = point_value_label(text, frame.fade(entry.value_label_color()), *center, self.point_size, value);
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

/// Column from a point down (or up) to the origin, fading toward the origin.
pub(crate) fn draw_point_area(frame: &mut Frame<'_>, center: Point, origin: f32, size: f32, color: Color, alpha: u8) {
    let top = center.y.min(origin);
    let height = (origin - center.y).abs();
    if height <= 0.0 {
        return;
    }
    let rect = Rect::new(center.x - size / 2.0, top, size, height);
    let brush = Brush::linear(
        center,
        Point::new(center.x, origin),
        &[
            color.with_alpha8(alpha).faded(frame.progress),
            color.with_alpha8(alpha / 3).faded(frame.progress),
        ],
    );
    frame.canvas.fill_rect(rect, &brush);
}

/// A single mark of `mode` centered on `center`.
pub(crate) fn draw_point(frame: &mut Frame<'_>, center: Point, mode: PointMode, size: f32, color: Color) {
    let brush = Brush::Solid(color);
    match mode {
        PointMode::None => {}
        PointMode::Circle => frame.canvas.fill_circle(center, size / 2.0, &brush),
        PointMode::Square => {
            let rect = Rect::new(center.x - size / 2.0, center.y - size / 2.0, size, size);
            frame.canvas.fill_rect(rect, &brush);
        }
    }
}

/// Value label wrapping a mark of diameter `size`.
pub(crate) fn point_value_label(text: &str, color: Color, center: Point, size: f32, value: f32) -> ValueLabel<'_> {
    ValueLabel {
        text,
        color,
        center_x: center.x,
        top: center.y - size / 2.0,
        bottom: center.y + size / 2.0,
        positive: value >= 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Chart;
    use crate::options::{ChartOptions, ValueLabelOption};
    use glance_core::{DrawCommand, RecordingCanvas};

    fn circles(canvas: &RecordingCanvas) -> Vec<(Point, f32)> {
        canvas
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Circle { center, radius, .. } => Some((*center, *radius)),
                _ => None,
            })
            .collect()
    }

    fn chart(values: &[f32]) -> Chart<PointLayout> {
        Chart::new(PointLayout::default())
            .with_options(ChartOptions::default().with_margin(10.0))
            .with_entries(values.iter().map(|v| Entry::new(*v)))
    }

    #[test]
    fn test_points_at_slot_centers() {
        let chart = chart(&[200.0, 400.0, -100.0]);
        let mut canvas = RecordingCanvas::new();
        chart.draw(&mut canvas, 300.0, 200.0);
        let marks = circles(&canvas);
        assert_eq!(marks.len(), 3);
        // 3 slots of (300 - 40) / 3 wide
        let item = 260.0 / 3.0;
        assert!((marks[0].0.x - (10.0 + item / 2.0)).abs() < 1e-3);
        assert!((marks[1].0.y - 10.0).abs() < 1e-3);
        assert!((marks[2].0.y - 190.0).abs() < 1e-3);
        assert_eq!(marks[0].1, DEFAULT_POINT_SIZE / 2.0);
    }

    #[test]
    fn test_point_areas_reach_origin() {
        let chart = chart(&[200.0, 400.0, -100.0]);
        let mut canvas = RecordingCanvas::new();
        chart.draw(&mut canvas, 300.0, 200.0);
        let areas = canvas.rects();
        assert_eq!(areas.len(), 3);
        assert!((areas[0].bottom() - 154.0).abs() < 1e-3);
        assert!((areas[2].top() - 154.0).abs() < 1e-3);
    }

    #[test]
    fn test_square_mode() {
        let layout = PointLayout {
            point_area_alpha: 0,
            ..PointLayout::default().with_point_mode(PointMode::Square)
        };
        let chart = Chart::new(layout).with_entries(vec![Entry::new(1.0)]);
        let mut canvas = RecordingCanvas::new();
        chart.draw(&mut canvas, 300.0, 200.0);
        assert!(circles(&canvas).is_empty());
        let rects = canvas.rects();
        assert_eq!(rects.len(), 1);
        assert_eq!(rects[0].width, DEFAULT_POINT_SIZE);
    }

    #[test]
    fn test_gap_skipped() {
        let chart = Chart::new(PointLayout::default())
            .with_entries(vec![Entry::new(1.0), Entry::empty(), Entry::new(2.0)]);
        let mut canvas = RecordingCanvas::new();
        chart.draw(&mut canvas, 300.0, 200.0);
        assert_eq!(circles(&canvas).len(), 2);
    }

    #[test]
    fn test_points_start_at_origin() {
        let mut chart = Chart::new(PointLayout::default())
            .with_options(ChartOptions::default().with_margin(10.0));
        chart.set_entries(vec![Entry::new(200.0), Entry::new(400.0), Entry::new(-100.0)]);
        assert_eq!(chart.animation_progress(), 0.0);
        let mut canvas = RecordingCanvas::new();
        chart.draw(&mut canvas, 300.0, 200.0);
        assert!(circles(&canvas).iter().all(|(c, _)| (c.y - 154.0).abs() < 1e-3));
        // no column height yet
        assert!(canvas.rects().is_empty());
    }

    #[test]
    fn test_value_label_above_positive_point() {
        let layout = PointLayout::default()
            .with_axis(AxisOptions::default().with_value_labels(ValueLabelOption::TopOfElement));
        let chart = Chart::new(layout).with_entries(vec![Entry::new(5.0).with_value_label("5")]);
        let mut canvas = RecordingCanvas::new();
        chart.draw(&mut canvas, 300.0, 200.0);
        let mark = circles(&canvas)[0].0;
        let baseline = canvas
            .commands()
            .iter()
            .find_map(|c| match c {
                DrawCommand::Text { position, .. } => Some(position.y),
                _ => None,
            })
            .unwrap_or_default();
        assert!(baseline < mark.y - DEFAULT_POINT_SIZE / 2.0);
    }
}
