use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use modsparse::{FixtureGenerator, HashMatrix, LinearMatrix, OrderedMatrix, SparseMatrix};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// (N, k) per case; the linear backend only sees the first
const CASES: [(usize, usize); 3] = [(100, 500), (1_000, 10_000), (10_000, 100)];

fn fixture<M: SparseMatrix>(n: usize, k: usize, seed: u64) -> M {
    let block = FixtureGenerator::new(seed).generate(n, k);
    M::from_triplets(block.dimension, &block.triplets)
}

fn positions(n: usize, count: usize) -> Vec<(usize, usize)> {
    let mut rng = StdRng::seed_from_u64(17);
    (0..count)
        .map(|_| (rng.gen_range(0..n), rng.gen_range(0..n)))
        .collect()
}

fn bench_backend<M: SparseMatrix>(c: &mut Criterion, name: &str, cases: &[(usize, usize)]) {
    let mut group = c.benchmark_group(name);

    for &(n, k) in cases {
        let a: M = fixture(n, k, 1);
        let b: M = fixture(n, k, 2);
        let probes = positions(n, 1_000);
        let label = format!("N={n},k={k}");

        group.bench_with_input(BenchmarkId::new("get", &label), &probes, |bench, probes| {
            bench.iter(|| {
                probes
                    .iter()
                    .map(|&(i, j)| a.get(i, j))
                    .fold(0i64, |acc, v| acc ^ v)
            })
        });

        group.bench_with_input(BenchmarkId::new("set", &label), &probes, |bench, probes| {
            bench.iter(|| {
                let mut m = a.materialize();
                for (step, &(i, j)) in probes.iter().enumerate() {
                    m.set(i, j, step as i64);
                }
                black_box(m.nnz())
            })
        });

        group.bench_function(BenchmarkId::new("add", &label), |bench| {
            bench.iter(|| black_box(a.add(&b)))
        });

        group.bench_function(BenchmarkId::new("multiply", &label), |bench| {
            bench.iter(|| black_box(a.multiply(&b)))
        });
    }

    group.finish();
}

fn benchmark_backends(c: &mut Criterion) {
    bench_backend::<HashMatrix>(c, "hash", &CASES);
    bench_backend::<OrderedMatrix>(c, "ordered", &CASES);
    bench_backend::<LinearMatrix>(c, "linear", &CASES[..1]);
}

criterion_group!(benches, benchmark_backends);
criterion_main!(benches);
