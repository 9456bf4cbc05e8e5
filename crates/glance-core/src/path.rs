//! Vector paths handed to the [`Canvas`](crate::Canvas).
//!
//! Paths are recorded as verbs so a backend can map them onto its own path
//! object (Skia, Vello, `<canvas>`), or call [`Path::flatten`] when it can
//! only draw polylines.

use crate::geometry::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

/// Fill rule for path filling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FillRule {
    /// Non-zero winding rule
    #[default]
    NonZero,
    /// Even-odd rule
    EvenOdd,
}

/// A single path instruction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathVerb {
    /// Start a new sub-path.
    MoveTo(Point),
    /// Straight segment from the current point.
    LineTo(Point),
    /// Cubic Bézier from the current point.
    CubicTo {
        /// First control point
        c1: Point,
        /// Second control point
        c2: Point,
        /// End point
        to: Point,
    },
    /// Circular arc. When the path has a current point, a straight segment
    /// joins it to the arc start; otherwise the arc starts a new sub-path.
    Arc {
        /// Arc center
        center: Point,
        /// Arc radius
        radius: f32,
        /// Start angle in radians (0 = +x, clockwise on y-down surfaces)
        start_angle: f32,
        /// Sweep in radians; negative sweeps run counter-clockwise
        sweep: f32,
    },
    /// Close the current sub-path.
    Close,
}

/// A recorded vector path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    verbs: Vec<PathVerb>,
    fill_rule: FillRule,
}

impl Path {
    /// Create an empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded verbs.
    #[must_use]
    pub fn verbs(&self) -> &[PathVerb] {
        &self.verbs
    }

    /// Fill rule used when the path is filled.
    #[must_use]
    pub const fn fill_rule(&self) -> FillRule {
        self.fill_rule
    }

    /// Set the fill rule.
    #[must_use]
    pub const fn with_fill_rule(mut self, rule: FillRule) -> Self {
        self.fill_rule = rule;
        self
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    /// Start a new sub-path.
    pub fn move_to(&mut self, point: Point) -> &mut Self {
        self.verbs.push(PathVerb::MoveTo(point));
        self
    }

    /// Append a straight segment.
    pub fn line_to(&mut self, point: Point) -> &mut Self {
        self.verbs.push(PathVerb::LineTo(point));
        self
    }

    /// Append a cubic Bézier segment.
    pub fn cubic_to(&mut self, c1: Point, c2: Point, to: Point) -> &mut Self {
        self.verbs.push(PathVerb::CubicTo { c1, c2, to });
        self
    }

    /// Append a circular arc.
    pub fn arc(&mut self, center: Point, radius: f32, start_angle: f32, sweep: f32) -> &mut Self {
        self.verbs.push(PathVerb::Arc {
            center,
            radius,
            start_angle,
            sweep,
        });
        self
    }

    /// Close the current sub-path.
    pub fn close(&mut self) -> &mut Self {
        self.verbs.push(PathVerb::Close);
        self
    }

    /// Axis-aligned rectangle.
    #[must_use]
    pub fn rect(rect: Rect) -> Self {
        let mut path = Self::new();
        path.move_to(Point::new(rect.left(), rect.top()))
            .line_to(Point::new(rect.right(), rect.top()))
            .line_to(Point::new(rect.right(), rect.bottom()))
            .line_to(Point::new(rect.left(), rect.bottom()))
            .close();
        path
    }

    /// Closed polygon through `points`.
    #[must_use]
    pub fn polygon(points: &[Point]) -> Self {
        let mut path = Self::new();
        let mut iter = points.iter();
        if let Some(first) = iter.next() {
            path.move_to(*first);
            for p in iter {
                path.line_to(*p);
            }
            path.close();
        }
        path
    }

    /// Full circle.
    #[must_use]
    pub fn circle(center: Point, radius: f32) -> Self {
        let mut path = Self::new();
        path.arc(center, radius, 0.0, TAU).close();
        path
    }

    /// Open arc, e.g. a gauge ring to be stroked.
    #[must_use]
    pub fn arc_stroke(center: Point, radius: f32, start_angle: f32, sweep: f32) -> Self {
        let mut path = Self::new();
        path.arc(center, radius, start_angle, sweep);
        path
    }

    /// Annular wedge covering `[start, end)` as fractions of a full turn.
    ///
    /// `inner == 0` produces a pie slice. A wedge covering the whole turn is
    /// built as two concentric circles filled even-odd so the hole stays
    /// empty. Returns an empty path when `end <= start`.
    #[must_use]
    pub fn sector(
        center: Point,
        start: f32,
        end: f32,
        outer: f32,
        inner: f32,
        start_angle: f32,
    ) -> Self {
        let mut path = Self::new();
        if end <= start || outer <= 0.0 {
            return path;
        }

        if end - start >= 1.0 {
            path.arc(center, outer, start_angle, TAU).close();
            if inner > 0.0 {
                path.arc(center, inner, start_angle, TAU).close();
            }
            return path.with_fill_rule(FillRule::EvenOdd);
        }

        let from = start.mul_add(TAU, start_angle);
        let to = end.mul_add(TAU, start_angle);
        path.arc(center, outer, from, to - from);
        if inner > 0.0 {
            path.arc(center, inner, to, from - to);
        } else {
            path.line_to(center);
        }
        path.close();
        path
    }

    /// Flatten into polylines, one per sub-path.
    ///
    /// Curves are split into `segments` pieces; arcs use one segment per
    /// `TAU / (4 * segments)` radians of sweep.
    #[must_use]
    pub fn flatten(&self, segments: usize) -> Vec<Vec<Point>> {
        let segments = segments.max(1);
        let mut polylines: Vec<Vec<Point>> = Vec::new();
        let mut current: Vec<Point> = Vec::new();

        for verb in &self.verbs {
            match *verb {
                PathVerb::MoveTo(p) => {
                    if current.len() > 1 {
                        polylines.push(std::mem::take(&mut current));
                    }
                    current.clear();
                    current.push(p);
                }
                PathVerb::LineTo(p) => current.push(p),
                PathVerb::CubicTo { c1, c2, to } => {
                    let from = current.last().copied().unwrap_or(c1);
                    let curve = CubicBezier::new(from, c1, c2, to);
                    current.extend((1..=segments).map(|i| curve.evaluate(i as f32 / segments as f32)));
                }
                PathVerb::Arc {
                    center,
                    radius,
                    start_angle,
                    sweep,
                } => {
                    let steps = ((sweep.abs() / TAU) * (4 * segments) as f32).ceil().max(1.0) as usize;
                    current.extend((0..=steps).map(|i| {
                        let angle = (sweep * i as f32).mul_add(1.0 / steps as f32, start_angle);
                        Point::polar(center, radius, angle)
                    }));
                }
                PathVerb::Close => {
                    if let Some(first) = current.first().copied() {
                        current.push(first);
                    }
                    if current.len() > 1 {
                        polylines.push(std::mem::take(&mut current));
                    }
                    current.clear();
                }
            }
        }
        if current.len() > 1 {
            polylines.push(current);
        }
        polylines
    }

    /// Bounding box of the flattened path.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        let mut points = self.flatten(8).into_iter().flatten();
        let first = points.next()?;
        let (mut l, mut t, mut r, mut b) = (first.x, first.y, first.x, first.y);
        for p in points {
            l = l.min(p.x);
            t = t.min(p.y);
            r = r.max(p.x);
            b = b.max(p.y);
        }
        Some(Rect::from_ltrb(l, t, r, b))
    }
}

/// Cubic Bézier segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    /// Start point
    pub p0: Point,
    /// First control point
    pub p1: Point,
    /// Second control point
    pub p2: Point,
    /// End point
    pub p3: Point,
}

impl CubicBezier {
    /// Create a curve from its four points.
    #[must_use]
    pub const fn new(p0: Point, p1: Point, p2: Point, p3: Point) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Evaluate at parameter `t` in [0, 1].
    #[must_use]
    pub fn evaluate(&self, t: f32) -> Point {
        let t = t.clamp(0.0, 1.0);
        let mt = 1.0 - t;
        let a = mt * mt * mt;
        let b = 3.0 * mt * mt * t;
        let c = 3.0 * mt * t * t;
        let d = t * t * t;
        Point::new(
            a * self.p0.x + b * self.p1.x + c * self.p2.x + d * self.p3.x,
            a * self.p0.y + b * self.p1.y + c * self.p2.y + d * self.p3.y,
        )
    }
}
