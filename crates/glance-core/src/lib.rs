//! Core types and traits for Glance charts.
//!
//! This crate provides the foundational types the chart engine draws with:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`], [`CornerRadius`]
//! - Color representation: [`Color`] with hex parsing and alpha fades
//! - Vector paths: [`Path`] with arc and sector builders
//! - Paint: [`Brush`], [`Stroke`], [`TextStyle`]
//! - The drawing surface boundary: [`Canvas`], plus [`RecordingCanvas`]
//!
//! # Example
//!
//! ```
//! use glance_core::{Canvas, Color, Point, RecordingCanvas, Stroke};
//!
//! let mut canvas = RecordingCanvas::new();
//! canvas.clear(Color::WHITE);
//! canvas.draw_line(Point::new(0.0, 0.0), Point::new(10.0, 10.0), &Stroke::new(Color::BLACK, 2.0));
//! assert_eq!(canvas.command_count(), 2);
//! ```

mod canvas;
mod color;
pub mod draw;
mod geometry;
mod paint;
pub mod path;

pub use canvas::{Canvas, RecordingCanvas, TextMetrics};
pub use color::{Color, ColorParseError};
pub use draw::{DrawCommand, Transform2D};
pub use geometry::{CornerRadius, Point, Rect, Size};
pub use paint::{Brush, FontWeight, GradientStop, LineCap, Stroke, TextAlign, TextStyle};
pub use path::{CubicBezier, FillRule, Path, PathVerb};
