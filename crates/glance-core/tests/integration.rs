//! Integration tests for glance-core.
//!
//! These tests exercise the public API the way a chart backend uses it.

use glance_core::{
    Brush, Canvas, Color, CornerRadius, DrawCommand, FillRule, Path, PathVerb, Point, RecordingCanvas, Rect, Stroke,
    TextStyle,
};
use std::f32::consts::{FRAC_PI_2, TAU};

// =============================================================================
// Color Integration Tests
// =============================================================================

#[test]
fn test_color_roundtrip_hex() {
    let original = Color::rgb(0.5, 0.25, 0.75);
    let parsed = Color::from_hex(&original.to_hex()).expect("valid hex");

    // 8-bit quantization
    assert!((original.r - parsed.r).abs() < 0.01);
    assert!((original.g - parsed.g).abs() < 0.01);
    assert!((original.b - parsed.b).abs() < 0.01);
}

#[test]
fn test_color_fade_for_entrance() {
    let base = Color::from_hex("#266489cc").expect("valid hex");
    let hidden = base.faded(0.0);
    let half = base.faded(0.5);

    assert!(hidden.is_transparent());
    assert!((half.a - base.a * 0.5).abs() < 1e-6);
    assert_eq!((half.r, half.g, half.b), (base.r, base.g, base.b));
}

// =============================================================================
// Path Integration Tests
// =============================================================================

#[test]
fn test_quarter_sector_bounds() {
    let path = Path::sector(Point::ORIGIN, 0.0, 0.25, 10.0, 0.0, -FRAC_PI_2);
    let bounds = path.bounds().expect("non-empty path");

    assert!(bounds.left().abs() < 1e-3);
    assert!((bounds.top() + 10.0).abs() < 1e-3);
    assert!((bounds.right() - 10.0).abs() < 1e-3);
    assert!(bounds.bottom().abs() < 1e-3);
}

#[test]
fn test_full_ring_sector_is_even_odd() {
    let path = Path::sector(Point::new(50.0, 50.0), 0.0, 1.0, 40.0, 20.0, 0.0);
    assert_eq!(path.fill_rule(), FillRule::EvenOdd);

    let radii: Vec<f32> = path
        .verbs()
        .iter()
        .filter_map(|v| match v {
            PathVerb::Arc { radius, sweep, .. } if (*sweep - TAU).abs() < 1e-6 => Some(*radius),
            _ => None,
        })
        .collect();
    assert_eq!(radii, vec![40.0, 20.0]);
}

#[test]
fn test_empty_sector() {
    assert!(Path::sector(Point::ORIGIN, 0.5, 0.5, 10.0, 5.0, 0.0).is_empty());
    assert!(Path::sector(Point::ORIGIN, 0.0, 0.5, 0.0, 0.0, 0.0).is_empty());
}

// =============================================================================
// Canvas Integration Tests
// =============================================================================

fn paint_scene(canvas: &mut dyn Canvas) {
    canvas.clear(Color::WHITE);
    canvas.fill_rounded_rect(
        Rect::new(10.0, 10.0, 20.0, 80.0),
        CornerRadius::top(4.0),
        &Brush::linear(Point::new(0.0, 10.0), Point::new(0.0, 90.0), &[Color::BLACK, Color::GRAY]),
    );
    canvas.save();
    canvas.translate(40.0, 90.0);
    canvas.rotate(-FRAC_PI_2);
    canvas.draw_text("label", Point::ORIGIN, &TextStyle::new(12.0, Color::BLACK));
    canvas.restore();
    canvas.stroke_path(
        &Path::arc_stroke(Point::new(50.0, 50.0), 30.0, -FRAC_PI_2, FRAC_PI_2),
        &Stroke::new(Color::GRAY, 3.0),
    );
}

#[test]
fn test_recording_through_trait_object() {
    let mut canvas = RecordingCanvas::new();
    paint_scene(&mut canvas);

    assert_eq!(canvas.texts(), vec!["label"]);
    assert_eq!(canvas.rects(), vec![Rect::new(10.0, 10.0, 20.0, 80.0)]);
    assert_eq!(canvas.save_depth(), 0);
    assert!(canvas.current_transform().is_identity());
    // clear, rect, text, arc
    assert_eq!(canvas.paint_count(), 4);
}

#[test]
fn test_rotated_text_keeps_transform() {
    let mut canvas = RecordingCanvas::new();
    paint_scene(&mut canvas);

    let transform = canvas
        .commands()
        .iter()
        .find_map(|c| match c {
            DrawCommand::Text { transform, .. } => Some(*transform),
            _ => None,
        })
        .expect("text recorded");
    let origin = transform.apply(Point::ORIGIN);
    assert!((origin.x - 40.0).abs() < 1e-4);
    assert!((origin.y - 90.0).abs() < 1e-4);
}

#[test]
fn test_measure_uses_fixed_metrics() {
    let canvas = RecordingCanvas::new();
    let bounds = canvas.measure_text("abcd", &TextStyle::new(10.0, Color::BLACK));
    assert!((bounds.width - 24.0).abs() < 1e-5);
    assert!((bounds.top() + 8.0).abs() < 1e-5);
    assert!((bounds.height - 10.0).abs() < 1e-5);
}

#[test]
fn test_draw_list_serializes() {
    let mut canvas = RecordingCanvas::new();
    paint_scene(&mut canvas);

    let json = serde_json::to_string(canvas.commands()).expect("serializable");
    let back: Vec<DrawCommand> = serde_json::from_str(&json).expect("deserializable");
    assert_eq!(back.len(), canvas.command_count());
    assert_eq!(back[0], DrawCommand::Clear { color: Color::WHITE });
}
