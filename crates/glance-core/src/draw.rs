//! Recorded draw commands.
//!
//! Every call a chart makes on a [`Canvas`](crate::Canvas) reduces to one
//! of these primitives.

use crate::paint::{Brush, Stroke, TextStyle};
use crate::path::Path;
use crate::{Color, CornerRadius, Point, Rect};
use serde::{Deserialize, Serialize};

/// 2D transformation matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform2D {
    /// Matrix elements [a, b, c, d, e, f]
    /// | a c e |
    /// | b d f |
    /// | 0 0 1 |
    pub matrix: [f32; 6],
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform2D {
    /// Identity transformation.
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            matrix: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
        }
    }

    /// Create a translation transform.
    #[must_use]
    pub const fn translate(x: f32, y: f32) -> Self {
        Self {
            matrix: [1.0, 0.0, 0.0, 1.0, x, y],
        }
    }

    /// Create a rotation transform (radians).
    #[must_use]
    pub fn rotate(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            matrix: [cos, sin, -sin, cos, 0.0, 0.0],
        }
    }

    /// Chain transforms: first apply self, then apply other.
    ///
    /// For point p: `a.then(b).apply(p)` == `b.apply(a.apply(p))`
    #[must_use]
    pub fn then(&self, other: &Self) -> Self {
        let a = other.matrix;
        let b = self.matrix;
        Self {
            matrix: [
                a[0] * b[0] + a[2] * b[1],
                a[1] * b[0] + a[3] * b[1],
                a[0] * b[2] + a[2] * b[3],
                a[1] * b[2] + a[3] * b[3],
                a[0] * b[4] + a[2] * b[5] + a[4],
                a[1] * b[4] + a[3] * b[5] + a[5],
            ],
        }
    }

    /// Transform a point.
    #[must_use]
    pub fn apply(&self, point: Point) -> Point {
        let m = self.matrix;
        Point::new(
            m[0] * point.x + m[2] * point.y + m[4],
            m[1] * point.x + m[3] * point.y + m[5],
        )
    }

    /// Whether this is the identity transform.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }
}

/// Drawing primitive - all chart rendering reduces to these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Fill the whole surface
    Clear {
        /// Background color
        color: Color,
    },

    /// Draw a rectangle
    Rect {
        /// Rectangle bounds
        bounds: Rect,
        /// Corner radius
        radius: CornerRadius,
        /// Fill paint (None = no fill)
        fill: Option<Brush>,
        /// Outline (None = no stroke)
        stroke: Option<Stroke>,
    },

    /// Draw a circle
    Circle {
        /// Center point
        center: Point,
        /// Radius
        radius: f32,
        /// Fill paint (None = no fill)
        fill: Option<Brush>,
        /// Outline (None = no stroke)
        stroke: Option<Stroke>,
    },

    /// Draw a single line segment
    Line {
        /// Start point
        from: Point,
        /// End point
        to: Point,
        /// Stroke style
        stroke: Stroke,
    },

    /// Draw a vector path
    Path {
        /// The path
        path: Path,
        /// Fill paint (None = no fill)
        fill: Option<Brush>,
        /// Outline (None = no stroke)
        stroke: Option<Stroke>,
    },

    /// Draw text
    Text {
        /// Text content
        content: String,
        /// Baseline origin
        position: Point,
        /// Text style
        style: TextStyle,
        /// Canvas transform active when the text was drawn
        transform: Transform2D,
    },

    /// Intersect the clip with a path
    Clip {
        /// Clip path
        path: Path,
    },

    /// Push canvas state (transform + clip)
    Save,

    /// Pop canvas state
    Restore,

    /// Concatenate a transform onto the current one
    Transform {
        /// Transform applied
        transform: Transform2D,
    },
}

impl DrawCommand {
    /// Create a filled rectangle.
    #[must_use]
    pub fn filled_rect(bounds: Rect, brush: Brush) -> Self {
        Self::Rect {
            bounds,
            radius: CornerRadius::ZERO,
            fill: Some(brush),
            stroke: None,
        }
    }

    /// Create a filled circle.
    #[must_use]
    pub fn filled_circle(center: Point, radius: f32, brush: Brush) -> Self {
        Self::Circle {
            center,
            radius,
            fill: Some(brush),
            stroke: None,
        }
    }

    /// Whether this command paints pixels (as opposed to state changes).
    #[must_use]
    pub const fn is_paint(&self) -> bool {
        !matches!(
            self,
            Self::Clip { .. } | Self::Save | Self::Restore | Self::Transform { .. }
        )
    }
}
