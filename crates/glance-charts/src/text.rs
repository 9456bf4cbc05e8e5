//! Text measurement helpers shared by layouts.

use glance_core::{Canvas, Color, Point, Rect, TextAlign, TextStyle};

/// Shorten `text` until it fits in `max_width`.
///
/// Text that overflows is cut to its first 3 characters, then to its first
/// character. The single-character form is returned even if it still
/// overflows.
#[must_use]
pub fn fit_label<'a>(canvas: &dyn Canvas, text: &'a str, style: &TextStyle, max_width: f32) -> &'a str {
    if canvas.measure_text(text, style).width <= max_width {
        return text;
    }
    let three = prefix(text, 3);
    if canvas.measure_text(three, style).width <= max_width {
        return three;
    }
    prefix(text, 1)
}

fn prefix(text: &str, chars: usize) -> &str {
    text.char_indices()
        .nth(chars)
        .map_or(text, |(end, _)| &text[..end])
}

/// Baseline that vertically centers text with `bounds` on `mid_y`.
#[must_use]
pub(crate) fn centered_baseline(bounds: Rect, mid_y: f32) -> f32 {
    mid_y - bounds.y - bounds.height / 2.0
}

/// Draw `text` rotated a quarter turn counter-clockwise around `anchor`.
///
/// With [`TextAlign::Right`] the text ends at `anchor` and runs downward on
/// screen; with [`TextAlign::Left`] it starts there and runs upward.
pub(crate) fn draw_vertical(canvas: &mut dyn Canvas, text: &str, anchor: Point, style: &TextStyle) {
    let bounds = canvas.measure_text(text, style);
    canvas.save();
    canvas.translate(anchor.x, anchor.y);
    canvas.rotate(-std::f32::consts::FRAC_PI_2);
    canvas.draw_text(text, Point::new(0.0, centered_baseline(bounds, 0.0)), style);
    canvas.restore();
}

/// A label / value-label pair drawn around a horizontal midline.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CaptionText<'a> {
    pub label: Option<(&'a str, Color)>,
    pub value: Option<(&'a str, Color)>,
}

impl CaptionText<'_> {
    /// Height of the block: one line each, plus the caption margin when
    /// both are present.
    pub(crate) fn height(&self, canvas: &dyn Canvas, style: &TextStyle) -> f32 {
        let line = |text: &str| canvas.measure_text(text, style).height;
        match (self.label, self.value) {
            (Some((l, _)), Some((v, _))) => line(l) + line(v) + caption_margin(style),
            (Some((t, _)), None) | (None, Some((t, _))) => line(t),
            (None, None) => 0.0,
        }
    }

    /// Width of the wider line.
    pub(crate) fn width(&self, canvas: &dyn Canvas, style: &TextStyle) -> f32 {
        [self.label, self.value]
            .into_iter()
            .flatten()
            .map(|(t, _)| canvas.measure_text(t, style).width)
            .fold(0.0, f32::max)
    }

    /// Draw with the label above `anchor.y` and the value below it.
    ///
    /// A lone label or value is centered on the midline instead.
    pub(crate) fn draw(&self, canvas: &mut dyn Canvas, anchor: Point, style: &TextStyle, align: TextAlign) {
        let styled = |color: Color| {
            let mut s = style.clone().with_align(align);
            s.color = color;
            s
        };
        let gap = caption_margin(style) / 2.0;

        match (self.label, self.value) {
            (Some((label, label_color)), Some((value, value_color))) => {
                let lb = canvas.measure_text(label, style);
                let vb = canvas.measure_text(value, style);
                let label_baseline = anchor.y - gap - (lb.y + lb.height);
                let value_baseline = anchor.y + gap - vb.y;
                canvas.draw_text(label, Point::new(anchor.x, label_baseline), &styled(label_color));
                canvas.draw_text(value, Point::new(anchor.x, value_baseline), &styled(value_color));
            }
            (Some((text, color)), None) | (None, Some((text, color))) => {
                let bounds = canvas.measure_text(text, style);
                let baseline = centered_baseline(bounds, anchor.y);
                canvas.draw_text(text, Point::new(anchor.x, baseline), &styled(color));
            }
            (None, None) => {}
        }
    }
}

/// Vertical gap between a caption's label and value lines.
pub(crate) fn caption_margin(style: &TextStyle) -> f32 {
    style.size * 0.6
}
