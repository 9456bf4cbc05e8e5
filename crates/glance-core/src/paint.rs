//! Paint descriptions: brushes, strokes and text styles.

use crate::{Color, Point};
use serde::{Deserialize, Serialize};

/// A color stop in a gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Position along the gradient [0.0, 1.0]
    pub offset: f32,
    /// Color at this position
    pub color: Color,
}

impl GradientStop {
    /// Create a new stop, clamping the offset.
    #[must_use]
    pub fn new(offset: f32, color: Color) -> Self {
        Self {
            offset: offset.clamp(0.0, 1.0),
            color,
        }
    }
}

/// How a shape is filled or a stroke is colored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Brush {
    /// Single color
    Solid(Color),
    /// Linear gradient between two points
    LinearGradient {
        /// Gradient start
        start: Point,
        /// Gradient end
        end: Point,
        /// Color stops, ordered by offset
        stops: Vec<GradientStop>,
    },
    /// Radial gradient from a center outward
    RadialGradient {
        /// Gradient center
        center: Point,
        /// Radius at which the last stop is reached
        radius: f32,
        /// Color stops, ordered by offset
        stops: Vec<GradientStop>,
    },
}

impl Brush {
    /// Linear gradient spreading `colors` evenly from `start` to `end`.
    ///
    /// A single color produces a solid brush.
    #[must_use]
    pub fn linear(start: Point, end: Point, colors: &[Color]) -> Self {
        match colors {
            [] => Self::Solid(Color::TRANSPARENT),
            [only] => Self::Solid(*only),
            _ => {
                let last = (colors.len() - 1) as f32;
                Self::LinearGradient {
                    start,
                    end,
                    stops: colors
                        .iter()
                        .enumerate()
                        .map(|(i, c)| GradientStop::new(i as f32 / last, *c))
                        .collect(),
                }
            }
        }
    }

    /// Two-stop radial gradient.
    #[must_use]
    pub fn radial(center: Point, radius: f32, inner: Color, outer: Color) -> Self {
        Self::RadialGradient {
            center,
            radius,
            stops: vec![GradientStop::new(0.0, inner), GradientStop::new(1.0, outer)],
        }
    }

    /// The color a backend without gradient support should use.
    #[must_use]
    pub fn dominant_color(&self) -> Color {
        match self {
            Self::Solid(c) => *c,
            Self::LinearGradient { stops, .. } | Self::RadialGradient { stops, .. } => stops
                .last()
                .map_or(Color::TRANSPARENT, |stop| stop.color),
        }
    }
}

impl From<Color> for Brush {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

/// Line cap style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineCap {
    /// Flat cap at endpoint
    #[default]
    Butt,
    /// Rounded cap
    Round,
    /// Square cap extending beyond endpoint
    Square,
}

/// Stroke style for lines, arcs and outlines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// Stroke paint
    pub brush: Brush,
    /// Stroke width in pixels
    pub width: f32,
    /// Line cap style
    pub cap: LineCap,
    /// Dash pattern (empty = solid)
    pub dash: Vec<f32>,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            brush: Brush::Solid(Color::BLACK),
            width: 1.0,
            cap: LineCap::Butt,
            dash: Vec::new(),
        }
    }
}

impl Stroke {
    /// Solid stroke of the given color and width.
    #[must_use]
    pub fn new(brush: impl Into<Brush>, width: f32) -> Self {
        Self {
            brush: brush.into(),
            width,
            ..Self::default()
        }
    }

    /// Set the line cap.
    #[must_use]
    pub const fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }

    /// Set a dash pattern (on, off, on, off, ...).
    #[must_use]
    pub fn with_dash(mut self, dash: Vec<f32>) -> Self {
        self.dash = dash;
        self
    }
}

/// Horizontal text alignment relative to the draw position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAlign {
    /// Text starts at the position
    #[default]
    Left,
    /// Text is centered on the position
    Center,
    /// Text ends at the position
    Right,
}

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontWeight {
    /// Normal (400)
    #[default]
    Normal,
    /// Bold (700)
    Bold,
}

/// Text style for rendering.
///
/// The draw position passed with a style is the baseline origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub size: f32,
    /// Text color
    pub color: Color,
    /// Horizontal alignment
    pub align: TextAlign,
    /// Font weight
    pub weight: FontWeight,
    /// Font family; `None` uses the backend default
    pub typeface: Option<String>,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 16.0,
            color: Color::BLACK,
            align: TextAlign::Left,
            weight: FontWeight::Normal,
            typeface: None,
        }
    }
}

impl TextStyle {
    /// Style with a size and color.
    #[must_use]
    pub fn new(size: f32, color: Color) -> Self {
        Self {
            size,
            color,
            ..Self::default()
        }
    }

    /// Set alignment.
    #[must_use]
    pub const fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Set typeface.
    #[must_use]
    pub fn with_typeface(mut self, typeface: Option<String>) -> Self {
        self.typeface = typeface;
        self
    }
}
