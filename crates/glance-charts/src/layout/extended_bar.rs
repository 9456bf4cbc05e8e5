//! Bar charts that always carry a Y axis.

use super::bar::BarLayout;
use crate::chart::{ChartKind, ChartLayout, Frame};
use crate::options::{AxisOptions, ValueLabelOption};
use serde::{Deserialize, Serialize};

/// A [`BarLayout`] with nice-scale ticks, grid lines, rounded tops and value
/// labels on the bars by default.
///
/// Turning both the tick text and the grid lines off still lays out the
/// nice scale and draws the grid lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtendedBarLayout {
    /// Bar options
    #[serde(flatten)]
    pub bar: BarLayout,
}

impl Default for ExtendedBarLayout {
    fn default() -> Self {
        let axis = AxisOptions::default()
            .with_y_axis()
            .with_value_labels(ValueLabelOption::TopOfElement);
        Self {
            bar: BarLayout::default().with_axis(axis).with_corner_radius(4.0),
        }
    }
}

impl ExtendedBarLayout {
    /// Axis options actually used for drawing.
    #[must_use]
    pub fn effective_axis(&self) -> AxisOptions {
        let mut axis = self.bar.axis.clone();
        if !axis.shows_y_axis() {
            axis.show_y_axis_lines = true;
        }
        axis
    }
}

impl ChartLayout for ExtendedBarLayout {
    fn kind(&self) -> ChartKind {
        ChartKind::ExtendedBar
    }

    fn draw_content(&self, frame: &mut Frame<'_>) {
        self.bar.draw_with_axis(frame, &self.effective_axis());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Chart;
    use crate::entry::Entry;
    use glance_core::{CornerRadius, DrawCommand, RecordingCanvas};

    #[test]
    fn test_defaults() {
        let layout = ExtendedBarLayout::default();
        assert!(layout.bar.axis.show_y_axis_text);
        assert_eq!(layout.bar.axis.value_label_option, ValueLabelOption::TopOfElement);
        assert_eq!(layout.bar.corner_radius, 4.0);
    }

    #[test]
    fn test_axis_cannot_be_removed() {
        let mut layout = ExtendedBarLayout::default();
        layout.bar.axis.show_y_axis_text = false;
        layout.bar.axis.show_y_axis_lines = false;
        assert!(layout.effective_axis().shows_y_axis());
    }

    #[test]
    fn test_draws_grid_ticks_and_rounded_bars() {
        let chart = Chart::new(ExtendedBarLayout::default())
            .with_entries(vec![Entry::new(40.0).with_value_label("40"), Entry::new(-15.0)]);
        let mut canvas = RecordingCanvas::new();
        chart.draw(&mut canvas, 400.0, 300.0);

        let grid_lines = canvas
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count();
        assert!(grid_lines >= 3);
        assert!(canvas.texts().contains(&"40"));

        let radii: Vec<CornerRadius> = canvas
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Rect { radius, .. } if !radius.is_zero() => Some(*radius),
                _ => None,
            })
            .collect();
        assert_eq!(radii, vec![CornerRadius::top(4.0), CornerRadius::bottom(4.0)]);
    }

    #[test]
    fn test_kind() {
        assert_eq!(ExtendedBarLayout::default().kind(), ChartKind::ExtendedBar);
    }
}
