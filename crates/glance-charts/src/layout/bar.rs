//! Vertical bar charts.

use super::axis::{draw_footer_labels, draw_value_label, draw_y_axis, AxisGeometry, ValueLabel};
use crate::chart::{ChartKind, ChartLayout, Frame};
use crate::entry::Entry;
use crate::options::AxisOptions;
use glance_core::{Brush, Color, CornerRadius, Rect};
use serde::{Deserialize, Serialize};

/// Default minimum bar height in pixels.
pub const DEFAULT_MIN_BAR_HEIGHT: f32 = 4.0;

/// Bars rising from (or hanging below) the zero line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarLayout {
    /// Axis pipeline options
    pub axis: AxisOptions,
    /// Alpha (0-255) of the full-height column behind each bar
    pub bar_area_alpha: u8,
    /// Bars are never drawn shorter than this
    pub min_bar_height: f32,
    /// Radius of the corners at the bar's far end
    pub corner_radius: f32,
}

impl Default for BarLayout {
    fn default() -> Self {
        Self {
            axis: AxisOptions::default(),
            bar_area_alpha: 32,
            min_bar_height: DEFAULT_MIN_BAR_HEIGHT,
            corner_radius: 0.0,
        }
    }
}

impl BarLayout {
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
}

impl ChartLayout for BarLayout {
    fn kind(&self) -> ChartKind {
        ChartKind::Bar
    }

    fn draw_content(&self, frame: &mut Frame<'_>) {
        self.draw_with_axis(frame, &self.axis);
    }
}

impl BarLayout {
    /// Draw with `axis` in place of the layout's own axis options.
    pub(crate) fn draw_with_axis(&self, frame: &mut Frame<'_>, axis: &AxisOptions) {
        let entries = frame.data.entries();
        let labels: Vec<Option<&str>> = entries.iter().map(Entry::label_text).collect();
        let value_labels: Vec<&str> = entries.iter().filter_map(Entry::value_label_text).collect();
        let geom = AxisGeometry::compute(frame, axis, &labels, &value_labels, 0.0);

        draw_y_axis(frame, &geom, axis);

        if self.bar_area_alpha > 0 {
            for (i, entry) in entries.iter().enumerate() {
                if entry.value().is_some() {
                    let column = Rect::new(geom.item_left(i), geom.band_top(), geom.item_width, geom.item_height);
                    draw_bar_area(frame, column, entry.color, self.bar_area_alpha);
                }
            }
        }

        for (i, entry) in entries.iter().enumerate() {
            let Some(value) = entry.value() else {
                continue;
            };
            let rect = geom.bar_rect(geom.item_left(i), geom.item_width, value, frame.progress, self.min_bar_height);
            let radius = far_end_radius(self.corner_radius, value);
            fill_bar(frame, rect, radius, &Brush::Solid(entry.color));

            if let Some(text) = entry.value_label_text() {
                let label = ValueLabel {
                    text,
                    color: frame.fade(entry.value_label_color()),
                    center_x: geom.item_center(i),
                    top: rect.top(),
                    bottom: rect.bottom(),
                    positive: value >= 0.0,
                };
                draw_value_label(frame, &geom, axis, &label);
            }
        }

        let footer: Vec<(Option<&str>, Color)> = entries
            .iter()
            .map(|e| (e.label_text(), frame.fade(e.text_color)))
            .collect();
        draw_footer_labels(frame, &geom, axis, &footer);
    }
}

/// Corners rounded at the end away from the zero line.
pub(crate) fn far_end_radius(radius: f32, value: f32) -> CornerRadius {
    if radius <= 0.0 {
        CornerRadius::ZERO
    } else if value >= 0.0 {
        CornerRadius::top(radius)
    } else {
        CornerRadius::bottom(radius)
    }
}

/// Fill `rect`, rounded when `radius` is non-zero.
pub(crate) fn fill_bar(frame: &mut Frame<'_>, rect: Rect, radius: CornerRadius, brush: &Brush) {
    if radius.is_zero() {
        frame.canvas.fill_rect(rect, brush);
    } else {
        frame.canvas.fill_rounded_rect(rect, radius, brush);
    }
}

/// Faint full-height column behind a bar.
pub(crate) fn draw_bar_area(frame: &mut Frame<'_>, column: Rect, color: Color, alpha: u8) {
    let fill = color.with_alpha8(alpha).faded(frame.progress);
    frame.canvas.fill_rect(column, &Brush::Solid(fill));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Chart;
    use crate::options::{ChartOptions, ValueLabelOption};
    use glance_core::{DrawCommand, RecordingCanvas};

    fn bars(canvas: &RecordingCanvas) -> Vec<Rect> {
        canvas
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Rect {
                    bounds,
                    fill: Some(Brush::Solid(color)),
                    ..
                } if color.a >= 1.0 => Some(*bounds),
                _ => None,
            })
            .collect()
    }

    fn chart(values: &[f32]) -> Chart<BarLayout> {
        Chart::new(BarLayout::default())
            .with_options(ChartOptions::default().with_margin(10.0))
            .with_entries(values.iter().map(|v| Entry::new(*v).with_color(Color::BLACK)))
    }

    #[test]
    fn test_bars_straddle_origin() {
        let chart = chart(&[200.0, 400.0, -100.0]);
        let mut canvas = RecordingCanvas::new();
        chart.draw(&mut canvas, 300.0, 200.0);
        let rects = bars(&canvas);
        assert_eq!(rects.len(), 3);
        // origin at 154
        assert!((rects[0].bottom() - 154.0).abs() < 1e-3);
        assert!((rects[1].bottom() - 154.0).abs() < 1e-3);
        assert!((rects[2].top() - 154.0).abs() < 1e-3);
        assert!(rects[1].height > rects[0].height);
    }

    #[test]
    fn test_bar_areas_drawn_behind_bars() {
        let chart = chart(&[1.0, 2.0]);
        let mut canvas = RecordingCanvas::new();
        chart.draw(&mut canvas, 300.0, 200.0);
        // 2 areas + 2 bars
        assert_eq!(canvas.rects().len(), 4);
    }

    #[test]
    fn test_gap_keeps_slot() {
        let chart = Chart::new(BarLayout::default())
            .with_options(ChartOptions::default().with_margin(10.0))
            .with_entries(vec![
                Entry::new(1.0).with_color(Color::BLACK),
                Entry::empty(),
                Entry::new(1.0).with_color(Color::BLACK),
            ]);
        let mut canvas = RecordingCanvas::new();
        chart.draw(&mut canvas, 310.0, 200.0);
        let rects = bars(&canvas);
        assert_eq!(rects.len(), 2);
        // slot width (310 - 40) / 3 = 90; third slot starts at 10 + 2 * 100
        assert!((rects[1].x - 210.0).abs() < 1e-3);
    }

    #[test]
    fn test_min_height_bar() {
        let chart = chart(&[0.0001, 100.0]);
        let mut canvas = RecordingCanvas::new();
        chart.draw(&mut canvas, 300.0, 200.0);
        let rects = bars(&canvas);
        assert_eq!(rects[0].height, DEFAULT_MIN_BAR_HEIGHT);
    }

    #[test]
    fn test_rounded_corners_face_away_from_zero() {
        assert_eq!(far_end_radius(4.0, 1.0), CornerRadius::top(4.0));
        assert_eq!(far_end_radius(4.0, -1.0), CornerRadius::bottom(4.0));
        assert!(far_end_radius(0.0, 1.0).is_zero());
    }

    #[test]
    fn test_labels_and_value_labels() {
        let chart = Chart::new(BarLayout::default()).with_entries(vec![
            Entry::new(10.0).with_label("Jan").with_value_label("10"),
            Entry::new(20.0).with_label("Feb").with_value_label("20"),
        ]);
        let mut canvas = RecordingCanvas::new();
        chart.draw(&mut canvas, 400.0, 300.0);
        assert_eq!(canvas.texts(), vec!["10", "20", "Jan", "Feb"]);
    }

    #[test]
    fn test_value_labels_hidden() {
        let layout = BarLayout::default()
            .with_axis(AxisOptions::default().with_value_labels(ValueLabelOption::None));
        let chart = Chart::new(layout).with_entries(vec![Entry::new(10.0).with_value_label("10")]);
        let mut canvas = RecordingCanvas::new();
        chart.draw(&mut canvas, 400.0, 300.0);
        assert!(canvas.texts().is_empty());
    }

    #[test]
    fn test_long_label_truncated() {
        let chart = Chart::new(BarLayout::default())
            .with_entries((0..10).map(|i| Entry::new(i as f32).with_label("September")));
        let mut canvas = RecordingCanvas::new();
        chart.draw(&mut canvas, 300.0, 300.0);
        assert!(canvas.texts().iter().all(|t| t.chars().count() <= 3));
    }

    #[test]
    fn test_draw_is_idempotent() {
        let chart = chart(&[3.0, -1.0, 7.5]);
        let mut first = RecordingCanvas::new();
        let mut second = RecordingCanvas::new();
        chart.draw(&mut first, 300.0, 200.0);
        chart.draw(&mut second, 300.0, 200.0);
        assert_eq!(first.commands(), second.commands());
    }

    #[test]
    fn test_y_axis_draws_ticks() {
        let layout = BarLayout::default().with_axis(AxisOptions::default().with_y_axis());
        let chart = Chart::new(layout).with_entries(vec![Entry::new(97.0)]);
        let mut canvas = RecordingCanvas::new();
        chart.draw(&mut canvas, 300.0, 200.0);
        assert!(canvas.texts().contains(&"100"));
        assert!(canvas.texts().contains(&"0"));
    }
}
