//! Snapshot Benchmarks — Request Hot Path
//!
//! Measures snapshot generation and the full `GetStatus()` path
//! (draw, range check, JSON encoding, metric updates).
//!
//! Run with: cargo bench --bench snapshot_bench

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use trading_bot_status::adapters::metrics::MetricsRegistry;
use trading_bot_status::adapters::simulated::SimulatedSource;
use trading_bot_status::domain::snapshot::{round_dp, StatusSnapshot};
use trading_bot_status::usecases::StatusReporter;

/// Benchmark drawing a snapshot from a seeded RNG.
fn bench_snapshot_draw(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);

    c.bench_function("snapshot_draw", |b| {
        b.iter(|| {
            let _snap = StatusSnapshot::draw(black_box(&mut rng));
        });
    });
}

/// Benchmark decimal rounding.
fn bench_round_dp(c: &mut Criterion) {
    c.bench_function("round_dp_4", |b| {
        b.iter(|| {
            let _v = round_dp(black_box(0.123_456_7), black_box(4));
        });
    });
}

/// Benchmark the full report path with the thread-local RNG.
fn bench_get_status(c: &mut Criterion) {
    let reporter = StatusReporter::new(
        Arc::new(SimulatedSource::new()),
        Arc::new(MetricsRegistry::new().expect("metrics registry")),
    );

    c.bench_function("get_status_json", |b| {
        b.iter(|| {
            let _report = reporter.get_status().expect("report");
        });
    });
}

criterion_group!(
    benches,
    bench_snapshot_draw,
    bench_round_dp,
    bench_get_status,
);
criterion_main!(benches);
