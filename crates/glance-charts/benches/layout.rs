//! Benchmarks for chart layout and draw-list generation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glance_charts::{
    BarChart, ChartOptions, DonutChart, Entry, LineChart, NiceScale, RadarChart, Series,
};
use glance_core::RecordingCanvas;

fn entries(count: usize) -> Vec<Entry> {
    (0..count)
        .map(|i| {
            let value = ((i * 37) % 101) as f32 - 30.0;
            Entry::new(value).with_label(format!("L{i}")).with_value_label(format!("{value}"))
        })
        .collect()
}

fn bench_nice_scale(c: &mut Criterion) {
    c.bench_function("nice_scale_calculate", |b| {
        b.iter(|| NiceScale::calculate(black_box(-130.0), black_box(420.0), black_box(5)))
    });
}

fn bench_bar_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("bar_draw");
    for count in [10, 100, 1000] {
        let chart = BarChart::default().with_entries(entries(count));
        group.bench_with_input(BenchmarkId::from_parameter(count), &chart, |b, chart| {
            b.iter(|| {
                let mut canvas = RecordingCanvas::new();
                chart.draw(&mut canvas, black_box(1920.0), black_box(1080.0));
                canvas.command_count()
            })
        });
    }
    group.finish();
}

fn bench_line_series_draw(c: &mut Criterion) {
    let series: Vec<Series> = (0..4).map(|s| Series::new(format!("s{s}"), entries(200))).collect();
    let chart = LineChart::default().with_series(series);
    c.bench_function("line_4x200_draw", |b| {
        b.iter(|| {
            let mut canvas = RecordingCanvas::new();
            chart.draw(&mut canvas, black_box(1920.0), black_box(1080.0));
            canvas.command_count()
        })
    });
}

fn bench_radial_draw(c: &mut Criterion) {
    let donut = DonutChart::default().with_entries(entries(24));
    let radar = RadarChart::default().with_entries(entries(24));
    c.bench_function("donut_24_draw", |b| {
        b.iter(|| {
            let mut canvas = RecordingCanvas::new();
            donut.draw(&mut canvas, black_box(800.0), black_box(600.0));
            canvas.command_count()
        })
    });
    c.bench_function("radar_24_draw", |b| {
        b.iter(|| {
            let mut canvas = RecordingCanvas::new();
            radar.draw(&mut canvas, black_box(800.0), black_box(600.0));
            canvas.command_count()
        })
    });
}

fn bench_animation_run(c: &mut Criterion) {
    c.bench_function("bar_full_transition", |b| {
        b.iter(|| {
            let mut chart = BarChart::default()
                .with_options(ChartOptions::default())
                .with_entries(entries(50));
            chart.set_entries(entries(60));
            let mut frames = 0;
            while chart.is_animating() {
                chart.tick();
                frames += 1;
            }
            frames
        })
    });
}

criterion_group!(
    benches,
    bench_nice_scale,
    bench_bar_draw,
    bench_line_series_draw,
    bench_radial_draw,
    bench_animation_run,
);
criterion_main!(benches);
