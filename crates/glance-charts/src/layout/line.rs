//! Line charts: one line per series through the entry points.
//!
//! Gaps (entries without a value) break a line into separate runs. A
//! series missing an entry that another series has gets a 0 there.

use super::axis::{draw_footer_labels, draw_value_label, draw_y_axis, AxisGeometry, LabelGrid};
use super::point::{draw_point, draw_point_area, point_value_label};
use crate::chart::{ChartKind, ChartLayout, Frame};
use crate::options::{AxisOptions, LineMode, PointMode};
use glance_core::{Brush, Color, LineCap, Path, Point, Stroke};
use serde::{Deserialize, Serialize};

/// Control points of the cubic joining `previous` to `current`.
///
/// Both control points keep their anchor's y, so the curve eases in and
/// out horizontally and never overshoots either value.
#[must_use]
pub fn spline_controls(previous: Point, current: Point, item_width: f32) -> (Point, Point) {
    let offset = item_width * 0.8;
    (
        Point::new(previous.x + offset, previous.y),
        Point::new(current.x - offset, current.y),
    )
}

/// Lines through each series' entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineLayout {
    /// Axis pipeline options
    pub axis: AxisOptions,
    /// Marks drawn on the line
    pub point_mode: PointMode,
    /// Mark diameter
    pub point_size: f32,
    /// Alpha (0-255) of the column between a mark and the origin
    pub point_area_alpha: u8,
    /// Segment shape
    pub line_mode: LineMode,
    /// Stroke width
    pub line_size: f32,
    /// Alpha (0-255) of the area under the line
    pub line_area_alpha: u8,
    /// Fade the area out toward the origin instead of along the line
    pub enable_y_fade_out_gradient: bool,
}

impl Default for LineLayout {
    fn default() -> Self {
        Self {
            axis: AxisOptions::default(),
            point_mode: PointMode::Circle,
            point_size: 10.0,
            point_area_alpha: 0,
            line_mode: LineMode::Spline,
            line_size: 3.0,
            line_area_alpha: 32,
            enable_y_fade_out_gradient: false,
        }
    }
}

impl LineLayout {
    /// Set the axis options.
    #[must_use]
    pub fn with_axis(mut self, axis: AxisOptions) -> Self {
        self.axis = axis;
        self
    }

    /// Set the segment shape.
    #[must_use]
    pub const fn with_line_mode(mut self, mode: LineMode) -> Self {
        self.line_mode = mode;
        self
    }

    /// Append the segments through `run` after its first point.
    fn trace(&self, path: &mut Path, run: &[(Point, Color)], item_width: f32) {
        for pair in run.windows(2) {
            let (previous, current) = (pair[0].0, pair[1].0);
            if self.line_mode == LineMode::Spline {
                let (c1, c2) = spline_controls(previous, current, item_width);
                path.cubic_to(c1, c2, current);
            } else {
                path.line_to(current);
            }
        }
    }

    fn draw_area(&self, frame: &mut Frame<'_>, geom: &AxisGeometry, run: &[(Point, Color)]) {
        let (Some(&(first, _)), Some(&(last, _))) = (run.first(), run.last()) else {
            return;
        };
        let mut path = Path::new();
        path.move_to(Point::new(first.x, geom.origin)).line_to(first);
        self.trace(&mut path, run, geom.item_width);
        path.line_to(Point::new(last.x, geom.origin)).close();

        let alpha = self.line_area_alpha;
        let brush = if self.enable_y_fade_out_gradient {
            let color = run[0].1;
            Brush::linear(
                Point::new(first.x, geom.band_top()),
                Point::new(first.x, geom.origin),
                &[frame.fade(color.with_alpha8(alpha)), Color::TRANSPARENT],
            )
        } else {
            run_brush(frame, run, Some(alpha))
        };
        frame.canvas.fill_path(&path, &brush);
    }

    fn draw_line(&self, frame: &mut Frame<'_>, geom: &AxisGeometry, run: &[(Point, Color)]) {
        let Some(&(first, _)) = run.first() else {
            return;
        };
        let mut path = Path::new();
        path.move_to(first);
        self.trace(&mut path, run, geom.item_width);
        let stroke = Stroke::new(run_brush(frame, run, None), self.line_size).with_cap(LineCap::Round);
        frame.canvas.stroke_path(&path, &stroke);
    }
}

/// Horizontal gradient across the run's colors, faded by progress.
fn run_brush(frame: &Frame<'_>, run: &[(Point, Color)], alpha: Option<u8>) -> Brush {
    let colors: Vec<Color> = run
        .iter()
        .map(|(_, c)| frame.fade(alpha.map_or(*c, |a| c.with_alpha8(a))))
        .collect();
    let (Some(&(start, _)), Some(&(end, _))) = (run.first(), run.last()) else {
        return Brush::Solid(Color::TRANSPARENT);
    };
    if colors.windows(2).all(|w| w[0] == w[1]) {
        return Brush::Solid(colors[0]);
    }
    Brush::linear(Point::new(start.x, 0.0), Point::new(end.x, 0.0), &colors)
}

impl ChartLayout for LineLayout {
    fn kind(&self) -> ChartKind {
        ChartKind::Line
    }

    fn draw_content(&self, frame: &mut Frame<'_>) {
        let data = frame.data;
        let series = data.series_view();
        let grid = LabelGrid::build(&series);
        let value_labels: Vec<&str> = grid
            .cells
            .iter()
            .flatten()
            .flatten()
            .filter_map(|e| e.value_label_text())
            .collect();
        let geom = AxisGeometry::compute(frame, &self.axis, &grid.label_texts(), &value_labels, 0.0);

        draw_y_axis(frame, &geom, &self.axis);

        let missing_color = frame.options.label_color;
        let lines: Vec<Vec<Option<(Point, Color)>>> = series
            .iter()
            .zip(&grid.cells)
            .map(|(s, row)| {
                row.iter()
                    .enumerate()
                    .map(|(i, &cell)| {
                        let value = LabelGrid::value(cell)?;
                        let point = Point::new(geom.item_center(i), geom.animated_y(value, frame.progress));
                        let color = cell.map_or_else(|| s.color.unwrap_or(missing_color), |e| s.entry_color(e));
                        Some((point, color))
                    })
                    .collect()
            })
            .collect();

        for marks in &lines {
            for run in marks.split(Option::is_none) {
                let run: Vec<(Point, Color)> = run.iter().flatten().copied().collect();
                if run.len() < 2 {
                    continue;
                }
                if self.line_area_alpha > 0 {
                    self.draw_area(frame, &geom, &run);
                }
                if self.line_mode != LineMode::None {
                    self.draw_line(frame, &geom, &run);
                }
            }
        }

        for (marks, row) in lines.iter().zip(&grid.cells) {
            if self.point_area_alpha > 0 {
                for (point, color) in marks.iter().flatten() {
                    draw_point_area(frame, *point, geom.origin, self.point_size, *color, self.point_area_alpha);
                }
            }
            for (mark, cell) in marks.iter().zip(row) {
                let Some((point, color)) = *mark else {
                    continue;
                };
                draw_point(frame, point, self.point_mode, self.point_size, color);
                let Some(entry) = cell else {
                    continue;
                };
                if let (Some(text), Some(value)) = (entry.value_label_text(), entry.value()) {
                    let label = point_value_label(text, frame.fade(entry.value_label_color()), point, self.point_size, value);
                    draw_value_label(frame, &geom, &self.axis, &label);
                }
            }
        }

        let footer: Vec<(Option<&str>, Color)> = grid
            .labels
            .iter()
            .map(|&(label, color)| (label, frame.fade(color)))
            .collect();
        draw_footer_labels(frame, &geom, &self.axis, &footer);
    }
}
