//! End-to-end tests for glance-charts.
//!
//! Charts are driven through the public API only: assign data, advance
//! time, draw onto a `RecordingCanvas` and inspect the recorded commands.

use glance_charts::{
    BarChart, ChartConfig, ChartKind, ChartOptions, DonutChart, DonutLayout, DonutLabelMode, Entry,
    InvalidationListener, LineChart, Series,
};
use glance_core::{Brush, Color, DrawCommand, PathVerb, Point, RecordingCanvas, Rect};
use std::f32::consts::TAU;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

const ALL_KINDS: [ChartKind; 11] = [
    ChartKind::Bar,
    ChartKind::Point,
    ChartKind::Line,
    ChartKind::GroupedBar,
    ChartKind::RangeBar,
    ChartKind::ExtendedBar,
    ChartKind::Donut,
    ChartKind::Pie,
    ChartKind::RadialGauge,
    ChartKind::HalfRadialGauge,
    ChartKind::Radar,
];

/// Opaque solid-filled rectangles: bars, not their background columns.
fn bars(canvas: &RecordingCanvas) -> Vec<Rect> {
    canvas
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Rect {
                bounds,
                fill: Some(Brush::Solid(color)),
                ..
            } if color.a >= 1.0 => Some(*bounds),
            _ => None,
        })
        .collect()
}

fn counter() -> (Arc<AtomicUsize>, Arc<dyn InvalidationListener>) {
    let count = Arc::new(AtomicUsize::new(0));
    let c = Arc::clone(&count);
    let listener: Arc<dyn InvalidationListener> = Arc::new(move || {
        c.fetch_add(1, Ordering::SeqCst);
    });
    (count, listener)
}

fn is_finite(p: Point) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

fn assert_finite_geometry(canvas: &RecordingCanvas) {
    for command in canvas.commands() {
        let ok = match command {
            DrawCommand::Rect { bounds, .. } => {
                bounds.x.is_finite() && bounds.y.is_finite() && bounds.width.is_finite() && bounds.height.is_finite()
            }
            DrawCommand::Circle { center, radius, .. } => is_finite(*center) && radius.is_finite(),
            DrawCommand::Line { from, to, .. } => is_finite(*from) && is_finite(*to),
            DrawCommand::Text { position, .. } => is_finite(*position),
            DrawCommand::Path { path, .. } => path.verbs().iter().all(|v| match *v {
                PathVerb::MoveTo(p) | PathVerb::LineTo(p) => is_finite(p),
                PathVerb::CubicTo { c1, c2, to } => is_finite(c1) && is_finite(c2) && is_finite(to),
                PathVerb::Arc {
                    center,
                    radius,
                    start_angle,
                    sweep,
                } => is_finite(center) && radius.is_finite() && start_angle.is_finite() && sweep.is_finite(),
                PathVerb::Close => true,
            }),
            _ => true,
        };
        assert!(ok, "non-finite geometry in {command:?}");
    }
}

// =============================================================================
// Bar scenario
// =============================================================================

#[test]
fn test_bar_chart_spanning_zero() {
    let chart = BarChart::default()
        .with_options(ChartOptions::default().with_margin(10.0))
        .with_entries([200.0, 400.0, -100.0].map(Entry::new));

    let mut canvas = RecordingCanvas::new();
    chart.draw(&mut canvas, 300.0, 200.0);
    let rects = bars(&canvas);
    assert_eq!(rects.len(), 3);

    let origin = rects[0].bottom();
    assert!(origin > 10.0 && origin < 190.0, "origin {origin} inside the band");
    assert!((rects[1].bottom() - origin).abs() < 1e-3);
    assert!((rects[2].top() - origin).abs() < 1e-3);
    assert!(rects[1].height > rects[0].height);
    assert!(rects[0].height > rects[2].height);
}

#[test]
fn test_bars_grow_from_origin() {
    let mut chart = BarChart::default().with_options(ChartOptions::default().with_margin(10.0));
    chart.set_entries([100.0, 50.0].map(Entry::new));

    let mut heights = Vec::new();
    while chart.is_animating() {
        chart.tick();
        let mut canvas = RecordingCanvas::new();
        chart.draw(&mut canvas, 300.0, 200.0);
        heights.push(bars(&canvas)[0].height);
    }

    assert!(heights.len() > 2);
    assert!(heights.windows(2).all(|w| w[1] >= w[0]));
    let last = heights.last().copied().unwrap_or_default();
    assert!(heights[0] < last);
}

#[test]
fn test_tiny_bar_keeps_minimum_height() {
    let chart = BarChart::default().with_entries([1000.0, 0.1].map(Entry::new));
    let mut canvas = RecordingCanvas::new();
    chart.draw(&mut canvas, 300.0, 200.0);
    let rects = bars(&canvas);
    assert!((rects[1].height - glance_charts::layout::DEFAULT_MIN_BAR_HEIGHT).abs() < 1e-4);
    assert!((rects[1].bottom() - rects[0].bottom()).abs() < 1e-3);
}

// =============================================================================
// Update protocol
// =============================================================================

#[test]
fn test_entrance_reaches_one_at_duration() {
    let mut chart = DonutChart::default();
    chart.set_entries([1.0, 2.0].map(Entry::new));
    assert_eq!(chart.animation_progress(), 0.0);

    let mut last = 0.0;
    for _ in 0..15 {
        let p = chart.advance(Duration::from_millis(100));
        assert!(p >= last);
        last = p;
    }
    assert!((chart.animation_progress() - 1.0).abs() < 1e-6);
    assert!(!chart.is_animating());
}

#[test]
fn test_replacement_shows_old_then_new() {
    let labelled = |labels: &[&str]| -> Vec<Entry> { labels.iter().map(|l| Entry::new(1.0).with_label(*l)).collect() };

    let mut chart = BarChart::default().with_entries(labelled(&["old"]));
    chart.set_entries(labelled(&["new", "newer"]));

    let mut canvas = RecordingCanvas::new();
    chart.advance(chart.options().animation_duration / 2);
    chart.draw(&mut canvas, 300.0, 200.0);
    assert_eq!(canvas.texts(), vec!["old"]);

    chart.advance(chart.options().animation_duration);
    let mut canvas = RecordingCanvas::new();
    chart.draw(&mut canvas, 300.0, 200.0);
    assert_eq!(canvas.texts(), vec!["new", "newer"]);
    assert_eq!(chart.animation_progress(), 0.0);

    chart.advance(chart.options().animation_duration);
    assert_eq!(chart.animation_progress(), 1.0);
}

#[test]
fn test_dropped_subscription_stops_notifications() {
    let (count, listener) = counter();
    let mut chart = LineChart::default();

    let subscription = chart.subscribe(&listener);
    chart.set_entries([1.0].map(Entry::new));
    assert_eq!(count.load(Ordering::SeqCst), 1);

    drop(subscription);
    chart.tick();
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn test_listener_is_held_weakly() {
    let (count, listener) = counter();
    let mut chart = LineChart::default();
    let _subscription = chart.subscribe(&listener);
    drop(listener);

    chart.set_entries([1.0].map(Entry::new));
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

// =============================================================================
// Series
// =============================================================================

#[test]
fn test_series_flatten_in_order() {
    let series = vec![
        Series::new("a", [1.0, 2.0].map(Entry::new)),
        Series::new("b", [3.0, 4.0, 5.0].map(Entry::new)),
    ];
    let flat: Vec<Option<f32>> = series.iter().flat_map(|s| s.entries.iter().map(Entry::value)).collect();

    let chart = LineChart::default().with_series(series);
    let values: Vec<Option<f32>> = chart.entries().iter().map(Entry::value).collect();
    assert_eq!(values, flat);
    assert_eq!(chart.series().len(), 2);
    assert_eq!(chart.max_value(), 5.0);
}

// =============================================================================
// Donut
// =============================================================================

#[test]
fn test_donut_second_sector() {
    let chart = DonutChart::new(DonutLayout::default().with_label_mode(DonutLabelMode::None))
        .with_entries([10.0, 20.0, 30.0].map(Entry::new));
    let mut canvas = RecordingCanvas::new();
    chart.draw(&mut canvas, 400.0, 400.0);

    let sweeps: Vec<(f32, f32)> = canvas
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Path { path, fill: Some(_), .. } => path.verbs().iter().find_map(|v| match v {
                PathVerb::Arc {
                    start_angle, sweep, ..
                } => Some((*start_angle, *sweep)),
                _ => None,
            }),
            _ => None,
        })
        .collect();

    assert_eq!(sweeps.len(), 3);
    let (start, sweep) = sweeps[1];
    assert!((start - (glance_charts::layout::DONUT_START_ANGLE + TAU * 10.0 / 60.0)).abs() < 1e-4);
    assert!((sweep - TAU * 20.0 / 60.0).abs() < 1e-4);
}

// =============================================================================
// Every kind
// =============================================================================

fn sample_entries() -> Vec<Entry> {
    vec![
        Entry::new(3.0).with_label("a").with_value_label("3").with_color(Color::from_rgba8(33, 150, 243, 255)),
        Entry::empty().with_label("b"),
        Entry::range(Some(-1.0), Some(2.0)).with_label("c").with_value_label("2"),
        Entry::new(-2.0).with_label("d").with_value_label("-2"),
    ]
}

fn build(kind: ChartKind, entries: Vec<Entry>) -> glance_charts::AnyChart {
    let mut config = ChartConfig::new(kind);
    config.entries = entries;
    match config.build() {
        Ok(chart) => chart,
        Err(err) => panic!("{kind} failed to build: {err}"),
    }
}

#[test]
fn test_draw_is_idempotent_for_every_kind() {
    for kind in ALL_KINDS {
        let mut chart = build(kind, sample_entries());
        chart.set_entries(sample_entries());
        chart.advance(Duration::from_millis(400));

        let mut first = RecordingCanvas::new();
        let mut second = RecordingCanvas::new();
        chart.draw(&mut first, 480.0, 320.0);
        chart.draw(&mut second, 480.0, 320.0);
        assert_eq!(first.commands(), second.commands(), "{kind}");
        assert!(first.paint_count() > 1, "{kind} drew nothing");
        assert_eq!(first.save_depth(), 0, "{kind} left state saved");
    }
}

#[test]
fn test_degenerate_inputs_stay_finite() {
    let cases: Vec<Vec<Entry>> = vec![
        vec![Entry::new(0.0), Entry::new(0.0)],
        vec![Entry::new(7.0)],
        vec![Entry::empty(), Entry::empty()],
        vec![Entry::new(-5.0).with_label("only")],
    ];
    for kind in ALL_KINDS {
        for entries in &cases {
            let chart = build(kind, entries.clone());
            for (w, h) in [(300.0, 200.0), (20.0, 20.0), (1.0, 400.0)] {
                let mut canvas = RecordingCanvas::new();
                chart.draw(&mut canvas, w, h);
                assert_finite_geometry(&canvas);
            }
        }
    }
}

#[test]
fn test_kind_survives_build() {
    for kind in ALL_KINDS {
        assert_eq!(build(kind, Vec::new()).kind(), kind);
    }
}
