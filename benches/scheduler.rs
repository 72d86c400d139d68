//! Scheduler fire-path benchmarks.
//!
//! The event loop calls `fire_due` on every tick (~30/s), so it must stay
//! cheap both when nothing is due and when a burst of deadlines passes.
//!
//! Run with: cargo bench --bench scheduler

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use letterbox::sched::Scheduler;
use std::time::{Duration, Instant};

/// A scheduler loaded with `count` steps spread over one second, all of
/// them strictly in the future.
fn loaded_scheduler(now: Instant, count: u64) -> Scheduler<u64> {
    let mut scheduler = Scheduler::new();
    for i in 0..count {
        scheduler.schedule_after(now, Duration::from_millis(i % 1000 + 1), i);
    }
    scheduler
}

/// `fire_due` before any deadline has passed: the per-tick idle cost.
fn benchmark_fire_due_idle(c: &mut Criterion) {
    let mut group = c.benchmark_group("fire_due_idle");
    for count in [4u64, 64, 1024] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let now = Instant::now();
            let mut scheduler = loaded_scheduler(now, count);
            b.iter(|| black_box(scheduler.fire_due(black_box(now))));
        });
    }
    group.finish();
}

/// Schedule and drain a full batch, the shape of one open/reset cycle.
fn benchmark_schedule_and_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("schedule_and_drain");
    for count in [4u64, 64, 1024] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let now = Instant::now();
                let mut scheduler = loaded_scheduler(now, count);
                let due = scheduler.fire_due(now + Duration::from_secs(2));
                black_box(due)
            });
        });
    }
    group.finish();
}

/// Cancel a loaded scheduler, the restart path taken by open() and reset().
fn benchmark_cancel_all(c: &mut Criterion) {
    c.bench_function("cancel_all_64", |b| {
        b.iter(|| {
            let now = Instant::now();
            let mut scheduler = loaded_scheduler(now, 64);
            scheduler.cancel_all();
            black_box(scheduler.is_idle())
        });
    });
}

criterion_group!(
    benches,
    benchmark_fire_due_idle,
    benchmark_schedule_and_drain,
    benchmark_cancel_all
);
criterion_main!(benches);
