// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the notification queue.
//!
//! Measures the performance of:
//! - Enqueueing a burst of notifications
//! - Ticking a full queue through auto-dismiss and exit animation

use criterion::{criterion_group, criterion_main, Criterion};
use iced_overlays::ui::notifications::{Manager, NotificationSpec};
use std::hint::black_box;
use std::time::{Duration, Instant};

const BURST: u64 = 200;

/// Benchmark enqueueing a burst of timed notifications.
fn bench_enqueue(c: &mut Criterion) {
    let mut group = c.benchmark_group("notification_queue");

    group.bench_function("enqueue_burst", |b| {
        b.iter(|| {
            let now = Instant::now();
            let mut manager = Manager::new();
            for i in 0..BURST {
                manager.enqueue(
                    NotificationSpec::info(format!("message {i}"))
                        .duration(Duration::from_millis(1000 + i)),
                    now,
                );
            }
            black_box(&manager);
        });
    });

    group.finish();
}

/// Benchmark draining a full queue through its timers.
///
/// Every entry fires its auto-dismiss and exit timers in one late tick.
fn bench_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("notification_queue");

    group.bench_function("tick_drain", |b| {
        b.iter_batched(
            || {
                let now = Instant::now();
                let mut manager = Manager::new();
                for i in 0..BURST {
                    manager.enqueue(
                        NotificationSpec::info("tick").duration(Duration::from_millis(1 + i)),
                        now,
                    );
                }
                (manager, now)
            },
            |(mut manager, now)| {
                let removed = manager.tick(now + Duration::from_secs(10));
                black_box(removed);
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_enqueue, bench_drain);
criterion_main!(benches);
