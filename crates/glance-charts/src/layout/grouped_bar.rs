//! Bars of several series side by side under shared labels.

use super::axis::{draw_footer_labels, draw_value_label, draw_y_axis, AxisGeometry, LabelGrid, ValueLabel};
use super::bar::{draw_bar_area, far_end_radius, fill_bar, DEFAULT_MIN_BAR_HEIGHT};
use crate::chart::{ChartKind, ChartLayout, Frame};
use crate::legend::{LegendItem, LegendLayout};
use crate::options::{AxisOptions, LegendOption};
use glance_core::{Brush, Color, Point, Rect};
use serde::{Deserialize, Serialize};

/// One slot per distinct label, split into one bar per series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupedBarLayout {
    /// Axis pipeline options
    pub axis: AxisOptions,
    /// Alpha (0-255) of the full-height column behind each bar
    pub bar_area_alpha: u8,
    /// Bars are never drawn shorter than this
    pub min_bar_height: f32,
    /// Radius of the corners at the bar's far end
    pub corner_radius: f32,
    /// Where the series legend goes
    pub legend_option: LegendOption,
}

impl Default for GroupedBarLayout {
    fn default() -> Self {
        Self {
            axis: AxisOptions::default(),
            bar_area_alpha: 32,
            min_bar_height: DEFAULT_MIN_BAR_HEIGHT,
            corner_radius: 0.0,
            legend_option: LegendOption::Bottom,
        }
    }
}

impl GroupedBarLayout {
    /// Set the axis options.
    #[must_use]
    pub fn with_axis(mut self, axis: AxisOptions) -> Self {
        self.axis = axis;
        self
    }

    /// Set the legend placement.
    #[must_use]
    pub const fn with_legend(mut self, option: LegendOption) -> Self {
        self.legend_option = option;
        self
    }
}

/// Width of one series' bar inside a slot of `item_width`.
#[must_use]
pub fn grouped_bar_width(item_width: f32, series_count: usize, margin: f32) -> f32 {
    let n = series_count.max(1) as f32;
    (n.mul_add(-margin / 2.0, item_width) / n).max(0.0)
}

impl ChartLayout for GroupedBarLayout {
    fn kind(&self) -> ChartKind {
        ChartKind::GroupedBar
    }

    fn draw_content(&self, frame: &mut Frame<'_>) {
        let data = frame.data;
        let series = data.series_view();
        let grid = LabelGrid::build(&series);
        let margin = frame.options.margin;

        let legend_style = frame.text_style(frame.options.label_color);
        let legend_items: Vec<LegendItem<'_>> = match self.legend_option {
            LegendOption::None => Vec::new(),
            LegendOption::Bottom => series
                .iter()
                .filter(|s| !s.name.is_empty())
                .map(|s| LegendItem {
                    name: &s.name,
                    color: s.color.unwrap_or_else(|| s.entries.first().map_or(Color::BLACK, |e| e.color)),
                })
                .collect(),
        };
        let legend = LegendLayout::compute(&*frame.canvas, &legend_items, &legend_style, frame.size.width, margin);

        let value_labels: Vec<&str> = grid
            .cells
            .iter()
            .flatten()
            .flatten()
            .filter_map(|e| e.value_label_text())
            .collect();
        let geom = AxisGeometry::compute(frame, &self.axis, &grid.label_texts(), &value_labels, legend.height);

        draw_y_axis(frame, &geom, &self.axis);

        let bar_width = grouped_bar_width(geom.item_width, series.len(), margin);
        let bar_left = |slot: usize, j: usize| {
            (j as f32).mul_add(bar_width + margin / 2.0, geom.item_left(slot) + margin / 4.0)
        };

        for (j, (s, row)) in series.iter().zip(&grid.cells).enumerate() {
            for (slot, &cell) in row.iter().enumerate() {
                let Some(value) = LabelGrid::value(cell) else {
                    continue;
                };
                let color = cell.map_or_else(|| s.color.unwrap_or(Color::BLACK), |e| s.entry_color(e));
                let left = bar_left(slot, j);

                if self.bar_area_alpha > 0 {
                    let column = Rect::new(left, geom.band_top(), bar_width, geom.item_height);
                    draw_bar_area(frame, column, color, self.bar_area_alpha);
                }

                let rect = geom.bar_rect(left, bar_width, value, frame.progress, self.min_bar_height);
                fill_bar(frame, rect, far_end_radius(self.corner_radius, value), &Brush::Solid(color));

                if let Some(entry) = cell {
                    if let Some(text) = entry.value_label_text() {
                        let label = ValueLabel {
                            text,
                            color: frame.fade(entry.value_label_color()),
                            center_x: left + bar_width / 2.0,
                            top: rect.top(),
                            bottom: rect.bottom(),
                            positive: value >= 0.0,
                        };
                        draw_value_label(frame, &geom, &self.axis, &label);
                    }
                }
            }
        }

        let footer: Vec<(Option<&str>, Color)> = grid
            .labels
            .iter()
            .map(|&(label, color)| (label, frame.fade(color)))
            .collect();
        draw_footer_labels(frame, &geom, &self.axis, &footer);

        if !legend_items.is_empty() {
            let origin = Point::new(0.0, frame.size.height - legend.height);
            legend.draw(frame.canvas, &legend_items, &legend_style, origin, margin, frame.progress);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Chart;
    use crate::entry::{Entry, Series};
    use crate::options::{ChartOptions, ValueLabelOption};
    use glance_core::{DrawCommand, RecordingCanvas};

    const RED: Color = Color {
        r: 1.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    const BLUE: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 1.0,
        a: 1.0,
    };

    fn solid_rects(canvas: &RecordingCanvas, color: Color) -> Vec<Rect> {
        canvas
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Rect {
                    bounds,
                    fill: Some(Brush::Solid(fill)),
                    ..
                } if *fill == color => Some(*bounds),
                _ => None,
            })
            .collect()
    }

    fn monthly(name: &str, color: Color, values: &[(&str, f32)]) -> Series {
        Series::new(
            name,
            values.iter().map(|(label, v)| Entry::new(*v).with_label(*label)),
        )
        .with_color(color)
    }

    fn chart() -> Chart<GroupedBarLayout> {
        Chart::new(GroupedBarLayout::default())
            .with_options(ChartOptions::default().with_margin(10.0))
            .with_series(vec![
                monthly("2023", RED, &[("Jan", 10.0), ("Feb", 20.0), ("Mar", 30.0)]),
                monthly("2024", BLUE, &[("Jan", 15.0), ("Feb", 25.0), ("Mar", 35.0)]),
            ])
    }

    #[test]
    fn test_sub_bar_width() {
        // (100 - 2 * 5) / 2
        assert!((grouped_bar_width(100.0, 2, 10.0) - 45.0).abs() < 1e-4);
        assert_eq!(grouped_bar_width(1.0, 4, 10.0), 0.0);
    }

    #[test]
    fn test_bars_side_by_side() {
        let chart = chart();
        let mut canvas = RecordingCanvas::new();
        chart.draw(&mut canvas, 400.0, 300.0);
        let red = solid_rects(&canvas, RED);
        let blue = solid_rects(&canvas, BLUE);
        // legend swatches come last
        assert_eq!(red.len(), 4);
        assert_eq!(blue.len(), 4);
        for slot in 0..3 {
            assert!(blue[slot].x > red[slot].right());
            assert!((blue[slot].width - red[slot].width).abs() < 1e-4);
        }
        // the gap between sibling bars is half a margin
        assert!((blue[0].x - red[0].right() - 5.0).abs() < 1e-3);
    }

    #[test]
    fn test_legend_and_labels() {
        let chart = chart();
        let mut canvas = RecordingCanvas::new();
        chart.draw(&mut canvas, 400.0, 300.0);
        assert_eq!(canvas.texts(), vec!["Jan", "Feb", "Mar", "2023", "2024"]);
        let legend = solid_rects(&canvas, RED)[3];
        assert!(legend.bottom() <= 300.0);
        assert!(legend.top() > solid_rects(&canvas, RED)[0].bottom());
    }

    #[test]
    fn test_no_legend() {
        let chart = Chart::new(GroupedBarLayout::default().with_legend(LegendOption::None))
            .with_series(vec![monthly("a", RED, &[("x", 1.0)])]);
        let mut canvas = RecordingCanvas::new();
        chart.draw(&mut canvas, 400.0, 300.0);
        assert_eq!(canvas.texts(), vec!["x"]);
    }

    #[test]
    fn test_missing_label_is_zero() {
        let chart = Chart::new(GroupedBarLayout::default().with_legend(LegendOption::None))
            .with_series(vec![
                monthly("a", RED, &[("x", 10.0), ("y", 10.0)]),
                monthly("b", BLUE, &[("x", 10.0)]),
            ]);
        let mut canvas = RecordingCanvas::new();
        chart.draw(&mut canvas, 400.0, 300.0);
        let blue = solid_rects(&canvas, BLUE);
        assert_eq!(blue.len(), 2);
        assert_eq!(blue[1].height, DEFAULT_MIN_BAR_HEIGHT);
    }

    #[test]
    fn test_value_labels_per_bar() {
        let layout = GroupedBarLayout::default()
            .with_legend(LegendOption::None)
            .with_axis(AxisOptions::default().with_value_labels(ValueLabelOption::TopOfElement));
        let chart = Chart::new(layout).with_series(vec![
            Series::new("a", vec![Entry::new(1.0).with_label("x").with_value_label("1")]),
            Series::new("b", vec![Entry::new(2.0).with_label("x").with_value_label("2")]),
        ]);
        let mut canvas = RecordingCanvas::new();
        chart.draw(&mut canvas, 400.0, 300.0);
        assert_eq!(canvas.texts(), vec!["1", "2", "x"]);
    }
}
