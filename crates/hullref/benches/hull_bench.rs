//! Criterion benchmarks for the hull algorithms.
//! Focus sizes: n in {10, 100, 1000, 10000} lattice points in [-100, 100]².
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p hullref

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hullref::api::{draw_point_set, Algorithm, GenCfg, HullCfg, HullComputer, PointCount, ReplayToken};

fn point_set(n: usize, seed: u64) -> hullref::PointSet {
    draw_point_set(
        GenCfg {
            count: PointCount::Fixed(n),
            bound: 100,
            distinct: false,
        },
        ReplayToken { seed, index: 0 },
    )
}

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull");
    for &n in &[10usize, 100, 1000, 10000] {
        for (name, algorithm) in [
            ("gift_wrap", Algorithm::GiftWrap),
            ("monotone_chain", Algorithm::MonotoneChain),
        ] {
            let computer = HullComputer::new(HullCfg {
                algorithm,
                ..HullCfg::default()
            });
            group.bench_with_input(BenchmarkId::new(name, n), &n, |b, &n| {
                b.iter_batched(
                    || point_set(n, 43),
                    |ps| {
                        let _hull = computer.compute(&ps).unwrap();
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_hull);
criterion_main!(benches);
