//! Performance benchmarks for evaluation and export
//!
//! # What We're Measuring
//!
//! 1. **Single depth**: `evaluate` over grids of increasing size
//!    (one erfc + one exp per point)
//! 2. **Solver fan-out**: all depths through `AnalyticalSolver`, sequential
//!    versus the rayon path (only differs with `--features parallel`)
//! 3. **CSV render**: table assembly + scientific formatting of a full cycle
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench --bench evaluation_performance
//! cargo bench --bench evaluation_performance --features parallel fan_out
//! ```
//!
//! Time should scale linearly with grid points. Rendering is dominated by
//! float formatting and is expected to cost more than evaluation.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use contam_rs::models::{evaluate, ErfcDecayModel, TransportParameters};
use contam_rs::output::export::{CsvExporter, ExportTable, Exporter};
use contam_rs::physics::{DepthSet, TimeGrid};
use contam_rs::solver::{AnalyticalSolver, Scenario, Solver, SolverConfiguration};

fn parameters() -> TransportParameters {
    TransportParameters::new(100.0, 10.0, 0.01).unwrap()
}

fn scenario(depths: usize) -> Scenario {
    let depth_set = DepthSet::new((0..depths).map(|i| 10.0 * (i + 1) as f64)).unwrap();
    Scenario::new(Box::new(ErfcDecayModel::new(parameters())), depth_set)
}

// =================================================================================================
// Benchmark Functions
// =================================================================================================

fn benchmark_single_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_depth");
    let params = parameters();

    for points in [200, 2_000, 20_000] {
        let grid = TimeGrid::linspace(1.0, 300.0, points).unwrap();
        group.throughput(Throughput::Elements(points as u64));
        group.bench_with_input(BenchmarkId::from_parameter(points), &grid, |b, grid| {
            b.iter(|| evaluate(black_box(&params), black_box(50.0), black_box(grid)).unwrap());
        });
    }

    group.finish();
}

fn benchmark_fan_out(c: &mut Criterion) {
    let mut group = c.benchmark_group("fan_out");
    let config = SolverConfiguration::up_to(300.0).time_points(10_000);

    for depths in [1, 5, 20] {
        let scenario = scenario(depths);
        group.throughput(Throughput::Elements((depths * config.time_points) as u64));

        let sequential = AnalyticalSolver::new().with_parallel_threshold(usize::MAX);
        group.bench_with_input(BenchmarkId::new("sequential", depths), &scenario, |b, s| {
            b.iter(|| sequential.solve(black_box(s), black_box(&config)).unwrap());
        });

        let eager = AnalyticalSolver::new().with_parallel_threshold(1);
        group.bench_with_input(BenchmarkId::new("parallel_when_enabled", depths), &scenario, |b, s| {
            b.iter(|| eager.solve(black_box(s), black_box(&config)).unwrap());
        });
    }

    group.finish();
}

fn benchmark_csv_render(c: &mut Criterion) {
    let result = AnalyticalSolver::new()
        .solve(&scenario(3), &SolverConfiguration::up_to(100.0))
        .unwrap();
    let exporter = CsvExporter::default();

    c.bench_function("csv_render_default_cycle", |b| {
        b.iter(|| {
            let table = ExportTable::from_result(black_box(&result)).unwrap();
            exporter.render(&table).unwrap()
        });
    });
}

criterion_group!(
    benches,
    benchmark_single_depth,
    benchmark_fan_out,
    benchmark_csv_render,
);
criterion_main!(benches);
