//! # Algorithm Benchmarks
//!
//! End-to-end cost of the algorithm layer, including register setup.
//!
//! Run: `cargo bench --bench algorithms_bench`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use qsim_algorithms::{BernsteinVazirani, BooleanFunction, DeutschJozsa, Grover, Shor};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn bench_grover(c: &mut Criterion) {
    let mut group = c.benchmark_group("grover");
    let mut rng = StdRng::seed_from_u64(7);

    for n in [2, 4, 6, 8] {
        let grover = Grover::for_target(n, 1).unwrap();
        group.bench_with_input(BenchmarkId::new("execute", n), &n, |b, _| {
            b.iter(|| black_box(grover.execute(&mut rng).unwrap()))
        });
    }

    group.finish();
}

fn bench_oracles(c: &mut Criterion) {
    let mut group = c.benchmark_group("oracle_algorithms");
    let mut rng = StdRng::seed_from_u64(11);

    let dj = DeutschJozsa::new(BooleanFunction::Parity, 8).unwrap();
    group.bench_function("deutsch_jozsa_8", |b| {
        b.iter(|| black_box(dj.execute(&mut rng).unwrap()))
    });

    let bv = BernsteinVazirani::from_bit_string("10110101").unwrap();
    group.bench_function("bernstein_vazirani_8", |b| {
        b.iter(|| black_box(bv.execute(&mut rng).unwrap()))
    });

    group.finish();
}

fn bench_shor(c: &mut Criterion) {
    let mut group = c.benchmark_group("shor");
    group.sample_size(10);

    let shor = Shor::new(15, 7).unwrap();
    group.bench_function("prepare_15", |b| b.iter(|| black_box(shor.prepare().unwrap())));

    let finder = shor.period_finder();
    group.bench_function("find_factors", |b| {
        b.iter(|| black_box(finder.find_factors(black_box(&[0, 1, 0, 0, 0, 0, 0, 0]))))
    });

    group.finish();
}

criterion_group!(benches, bench_grover, bench_oracles, bench_shor);
criterion_main!(benches);
