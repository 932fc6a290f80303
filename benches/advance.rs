//! Generation-step throughput.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_life::core::LifeRng;
use rust_life::sim::Simulator;

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");

    for size in [20usize, 64, 256] {
        let mut sim = Simulator::new(size, size);
        sim.load_random(&mut LifeRng::new(42));

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(sim.advance()));
        });
    }

    group.finish();
}

fn bench_count_neighbors(c: &mut Criterion) {
    let mut sim = Simulator::new(64, 64);
    sim.load_random(&mut LifeRng::new(7));
    let grid = sim.current();

    c.bench_function("count_live_neighbors 64x64", |b| {
        b.iter(|| {
            let mut total = 0u32;
            for r in 0..grid.rows() {
                for col in 0..grid.cols() {
                    total += u32::from(grid.count_live_neighbors(r, col).unwrap_or(0));
                }
            }
            black_box(total)
        });
    });
}

criterion_group!(benches, bench_advance, bench_count_neighbors);
criterion_main!(benches);
