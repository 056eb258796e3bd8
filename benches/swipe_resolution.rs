// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the per-frame card computations.
//!
//! Measures the performance of:
//! - Pan to transform conversion (every pointer move)
//! - Release resolution (every pan end)
//! - Release animation sampling (every frame tick)

use criterion::{criterion_group, criterion_main, Criterion};
use iced_swipe::domain::card::{
    resolve_release, CardTransform, Displacement, SwipeOutcome, SwipeSettings,
};
use iced_swipe::ui::state::{SpringCurve, SwipeAnimation};
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Benchmark converting a sweep of pan displacements into transforms.
fn bench_transform_for(c: &mut Criterion) {
    let mut group = c.benchmark_group("swipe_resolution");
    let calculator = SwipeSettings::default().calculator();

    group.bench_function("transform_for_sweep", |b| {
        b.iter(|| {
            for dx in -300..=300 {
                let displacement = Displacement::new(dx as f32, (dx / 4) as f32);
                black_box(calculator.transform_for(black_box(displacement)));
            }
        });
    });

    group.finish();
}

/// Benchmark the dismiss/snap-back decision.
fn bench_resolve_release(c: &mut Criterion) {
    let mut group = c.benchmark_group("swipe_resolution");
    let threshold = SwipeSettings::default().threshold;

    group.bench_function("resolve_release_sweep", |b| {
        b.iter(|| {
            for dx in -300..=300 {
                black_box(resolve_release(black_box(dx as f32), threshold));
            }
        });
    });

    group.finish();
}

/// Benchmark sampling a dismissal animation over a full second of frames.
fn bench_animation_frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("swipe_resolution");
    let settings = SwipeSettings::default();
    let start = Instant::now();
    let from = settings
        .calculator()
        .transform_for(Displacement::new(150.0, 0.0));
    let outcome = resolve_release(150.0, settings.threshold);
    let animation = SwipeAnimation::new(
        outcome,
        from,
        outcome.target(&from, settings.dismiss_distance()),
        start,
        settings.duration.as_duration(),
        SpringCurve::new(settings.damping),
        0,
    );
    assert!(matches!(outcome, SwipeOutcome::Dismiss(_)));

    group.bench_function("dismiss_animation_60_frames", |b| {
        b.iter(|| {
            let mut last = CardTransform::IDENTITY;
            for frame in 0..60u64 {
                last = animation.transform_at(start + Duration::from_millis(frame * 16));
            }
            black_box(last)
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_transform_for,
    bench_resolve_release,
    bench_animation_frames
);
criterion_main!(benches);
