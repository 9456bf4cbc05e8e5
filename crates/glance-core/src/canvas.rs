//! The drawing-surface boundary and a recording implementation.

use crate::draw::{DrawCommand, Transform2D};
use crate::paint::{Brush, Stroke, TextStyle};
use crate::path::Path;
use crate::{Color, CornerRadius, Point, Rect};

/// Canvas trait for paint operations.
///
/// Charts compute all geometry themselves and only hand finished shapes
/// to this trait. Backends (Skia, tiny-skia, a web `<canvas>`, a GPU
/// batcher) implement it; transforms and clips follow save/restore
/// semantics.
pub trait Canvas {
    /// Fill the whole surface with a color.
    fn clear(&mut self, color: Color);

    /// Draw a filled rectangle.
    fn fill_rect(&mut self, rect: Rect, brush: &Brush);

    /// Draw a filled rectangle with per-corner radii.
    fn fill_rounded_rect(&mut self, rect: Rect, radius: CornerRadius, brush: &Brush);

    /// Draw a stroked rectangle.
    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke);

    /// Draw a filled circle.
    fn fill_circle(&mut self, center: Point, radius: f32, brush: &Brush);

    /// Draw a stroked circle.
    fn stroke_circle(&mut self, center: Point, radius: f32, stroke: &Stroke);

    /// Draw a line between two points.
    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke);

    /// Fill an arbitrary path.
    fn fill_path(&mut self, path: &Path, brush: &Brush);

    /// Stroke an arbitrary path.
    fn stroke_path(&mut self, path: &Path, stroke: &Stroke);

    /// Draw text with its baseline origin at `position`.
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle);

    /// Measure text as it would be drawn left-aligned at the origin.
    ///
    /// The returned bounds are relative to the baseline origin, so `y` is
    /// negative (the ascent) and `y + height` is the descent.
    fn measure_text(&self, text: &str, style: &TextStyle) -> Rect;

    /// Intersect the current clip with a path.
    fn clip_path(&mut self, path: &Path);

    /// Push transform and clip state.
    fn save(&mut self);

    /// Pop transform and clip state.
    fn restore(&mut self);

    /// Translate subsequent drawing.
    fn translate(&mut self, dx: f32, dy: f32);

    /// Rotate subsequent drawing (radians, clockwise on y-down surfaces).
    fn rotate(&mut self, radians: f32);
}

/// Fixed-advance text metrics used by [`RecordingCanvas`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    /// Advance per character as a fraction of the font size
    pub advance: f32,
    /// Ascent as a fraction of the font size
    pub ascent: f32,
    /// Descent as a fraction of the font size
    pub descent: f32,
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self {
            advance: 0.6,
            ascent: 0.8,
            descent: 0.2,
        }
    }
}

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// This is useful for:
/// - Testing (verify what was painted)
/// - Serialization (send commands to another process or a web client)
/// - Diffing (compare render outputs)
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    transform: Transform2D,
    saved: Vec<Transform2D>,
    metrics: TextMetrics,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use custom text metrics.
    #[must_use]
    pub const fn with_metrics(mut self, metrics: TextMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        self.saved.clear();
        self.transform = Transform2D::identity();
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Current transform.
    #[must_use]
    pub const fn current_transform(&self) -> Transform2D {
        self.transform
    }

    /// Depth of the save stack.
    #[must_use]
    pub fn save_depth(&self) -> usize {
        self.saved.len()
    }

    /// All recorded text contents, in draw order.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Bounds of every recorded rectangle, in draw order.
    #[must_use]
    pub fn rects(&self) -> Vec<Rect> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Rect { bounds, .. } => Some(*bounds),
                _ => None,
            })
            .collect()
    }

    /// Number of commands painting pixels (excludes state changes).
    #[must_use]
    pub fn paint_count(&self) -> usize {
        self.commands.iter().filter(|c| c.is_paint()).count()
    }

    fn push_transform(&mut self, transform: Transform2D) {
        self.transform = transform.then(&self.transform);
        self.commands.push(DrawCommand::Transform { transform });
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear { color });
    }

    fn fill_rect(&mut self, rect: Rect, brush: &Brush) {
        self.commands
            .push(DrawCommand::filled_rect(rect, brush.clone()));
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: CornerRadius, brush: &Brush) {
        self.commands.push(DrawCommand::Rect {
            bounds: rect,
            radius,
            fill: Some(brush.clone()),
            stroke: None,
        });
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke) {
        self.commands.push(DrawCommand::Rect {
            bounds: rect,
            radius: CornerRadius::ZERO,
            fill: None,
            stroke: Some(stroke.clone()),
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, brush: &Brush) {
        self.commands
            .push(DrawCommand::filled_circle(center, radius, brush.clone()));
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, stroke: &Stroke) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            fill: None,
            stroke: Some(stroke.clone()),
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            stroke: stroke.clone(),
        });
    }

    fn fill_path(&mut self, path: &Path, brush: &Brush) {
        self.commands.push(DrawCommand::Path {
            path: path.clone(),
            fill: Some(brush.clone()),
            stroke: None,
        });
    }

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke) {
        self.commands.push(DrawCommand::Path {
            path: path.clone(),
            fill: None,
            stroke: Some(stroke.clone()),
        });
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            content: text.to_string(),
            position,
            style: style.clone(),
            transform: self.transform,
        });
    }

    fn measure_text(&self, text: &str, style: &TextStyle) -> Rect {
        let chars = text.chars().count() as f32;
        let size = style.size;
        Rect::new(
            0.0,
            -self.metrics.ascent * size,
            chars * self.metrics.advance * size,
            (self.metrics.ascent + self.metrics.descent) * size,
        )
    }

    fn clip_path(&mut self, path: &Path) {
        self.commands.push(DrawCommand::Clip { path: path.clone() });
    }

    fn save(&mut self) {
        self.saved.push(self.transform);
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        if let Some(transform) = self.saved.pop() {
            self.transform = transform;
        }
        self.commands.push(DrawCommand::Restore);
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.push_transform(Transform2D::translate(dx, dy));
    }

    fn rotate(&mut self, radians: f32) {
        self.push_transform(Transform2D::rotate(radians));
    }
}
