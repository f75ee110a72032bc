//! Criterion benchmarks for prodmix_core
//!
//! Run with: cargo bench -p prodmix_core

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use prodmix_core::model::{Resource, ResourceEnvelope};
use prodmix_core::sensitivity::{find_breakpoint, sweep};
use prodmix_core::solver::solve;

fn bench_single_solve(c: &mut Criterion) {
    let baseline = ResourceEnvelope::default();

    c.bench_function("solve_baseline", |b| {
        b.iter(|| solve(black_box(&baseline)).unwrap())
    });
}

fn bench_pump_sweep(c: &mut Criterion) {
    let baseline = ResourceEnvelope::default();

    c.bench_function("sweep_pumps_200_220", |b| {
        b.iter(|| sweep(Resource::Pumps, 200, 220, black_box(&baseline)).unwrap())
    });
}

fn bench_breakpoint_scan(c: &mut Criterion) {
    let baseline = ResourceEnvelope::default();
    let series = sweep(Resource::LaborHours, 1566, 1820, &baseline).unwrap();

    c.bench_function("find_breakpoint_labor_series", |b| {
        b.iter(|| find_breakpoint(black_box(&series)))
    });
}

criterion_group!(
    benches,
    bench_single_solve,
    bench_pump_sweep,
    bench_breakpoint_scan
);
criterion_main!(benches);
