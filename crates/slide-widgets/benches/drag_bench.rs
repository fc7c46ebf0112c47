//! Benchmarks for the carousel engine hot paths.
//!
//! Run with: cargo bench -p slide-widgets --bench drag_bench

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use slide_core::event::SlideEvent;
use slide_core::geometry::uniform_strip;
use slide_layout::PanelSequence;
use slide_widgets::{MemorySurface, SlideConfig, SlideEngine};
use std::hint::black_box;
use std::time::Duration;

fn mounted(count: usize) -> SlideEngine<MemorySurface> {
    let surface = MemorySurface::new(1280.0, uniform_strip(count, 320.0));
    let mut engine = SlideEngine::new(surface, SlideConfig::default());
    let _ = engine.mount();
    engine
}

fn bench_gesture_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("slide/gesture_moves");

    for moves in [10, 100, 1_000] {
        group.bench_with_input(BenchmarkId::new("pointer", moves), &moves, |b, &moves| {
            b.iter_batched(
                || mounted(8),
                |mut engine| {
                    engine.handle_event(&SlideEvent::pointer_down(0.0), Duration::ZERO);
                    for i in 0..moves {
                        let x = -(i as f64) * 0.5;
                        black_box(
                            engine.handle_event(&SlideEvent::pointer_move(x), Duration::ZERO),
                        );
                    }
                    black_box(engine.handle_event(&SlideEvent::pointer_up(), Duration::ZERO))
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_navigate(c: &mut Criterion) {
    let mut group = c.benchmark_group("slide/navigate");

    for count in [3, 32, 256] {
        let mut engine = mounted(count);
        let mut next = 0usize;
        group.bench_function(BenchmarkId::from_parameter(count), |b| {
            b.iter(|| {
                next = (next + 7) % count;
                black_box(engine.navigate(next))
            })
        });
    }

    group.finish();
}

fn bench_measure(c: &mut Criterion) {
    let mut group = c.benchmark_group("slide/measure");

    for count in [3, 32, 256, 2_048] {
        let geometry = uniform_strip(count, 320.0);
        group.bench_with_input(BenchmarkId::from_parameter(count), &geometry, |b, g| {
            b.iter(|| black_box(PanelSequence::measure(black_box(1280.0), g)))
        });
    }

    group.finish();
}

fn bench_resize_storm(c: &mut Criterion) {
    c.bench_function("slide/resize_storm_64", |b| {
        b.iter_batched(
            || mounted(16),
            |mut engine| {
                for i in 0..64u64 {
                    let now = Duration::from_millis(i * 10);
                    engine.handle_event(&SlideEvent::Resize { width: 1280.0 }, now);
                    let _ = engine.tick(now);
                }
                black_box(engine.tick(Duration::from_secs(5)))
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_gesture_moves,
    bench_navigate,
    bench_measure,
    bench_resize_storm
);
criterion_main!(benches);
