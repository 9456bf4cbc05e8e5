//! Series legend wrapped across lines.

use crate::text::centered_baseline;
use glance_core::{Brush, Canvas, Color, Point, Rect, TextStyle};

/// One legend chip: swatch plus series name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct LegendItem<'a> {
    pub name: &'a str,
    pub color: Color,
}

/// Chip positions relative to the legend block's top-left corner.
#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct LegendLayout {
    /// Swatch rectangle per item
    pub swatches: Vec<Rect>,
    /// Number of lines used
    pub lines: usize,
    /// Line height
    pub line_height: f32,
    /// Total block height: `lines * (line_height + margin)`
    pub height: f32,
}

impl LegendLayout {
    /// Lay out chips left to right, starting a new line when the next chip
    /// would overflow `width`.
    pub(crate) fn compute(canvas: &dyn Canvas, items: &[LegendItem<'_>], style: &TextStyle, width: f32, margin: f32) -> Self {
        if items.is_empty() {
            return Self::default();
        }

        let bounds: Vec<Rect> = items.iter().map(|i| canvas.measure_text(i.name, style)).collect();
        let line_height = bounds.iter().map(|b| b.height).fold(0.0, f32::max);
        let swatch = line_height;

        let mut swatches = Vec::with_capacity(items.len());
        let mut line = 0usize;
        let mut x = margin;
        let mut on_line = 0usize;
        for b in &bounds {
            let chip = swatch + margin / 2.0 + b.width;
            if on_line > 0 && x + chip > width - margin {
                line += 1;
                x = margin;
                on_line = 0;
            }
            let y = (line as f32) * (line_height + margin);
            swatches.push(Rect::new(x, y, swatch, swatch));
            x += chip + margin;
            on_line += 1;
        }

        let lines = line + 1;
        Self {
            swatches,
            lines,
            line_height,
            height: lines as f32 * (line_height + margin),
        }
    }

    /// Draw at `origin`, faded by `progress`.
    pub(crate) fn draw(&self, canvas: &mut dyn Canvas, items: &[LegendItem<'_>], style: &TextStyle, origin: Point, margin: f32, progress: f32) {
        for (item, swatch) in items.iter().zip(&self.swatches) {
            let swatch = swatch.offset(origin.x, origin.y);
            canvas.fill_rect(swatch, &Brush::Solid(item.color.faded(progress)));

            let bounds = canvas.measure_text(item.name, style);
            let mut text_style = style.clone();
            text_style.color = style.color.faded(progress);
            let position = Point::new(
                swatch.right() + margin / 2.0,
                centered_baseline(bounds, swatch.center().y),
            );
            canvas.draw_text(item.name, position, &text_style);
        }
    }
}
