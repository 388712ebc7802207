//! # Register Benchmarks
//!
//! Measures gate application and measurement cost as the register grows.
//!
//! Run: `cargo bench --bench register_bench`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use qsim_core::QuantumRegister;
use rand::SeedableRng;
use rand::rngs::StdRng;

const SIZES: [usize; 4] = [4, 8, 12, 16];

fn uniform_register(n: usize) -> QuantumRegister {
    let mut register = QuantumRegister::new(n).unwrap();
    for q in 0..n {
        register.hadamard(q).unwrap();
    }
    register
}

/// Dense (H) vs in-place (T, CNOT) single-qubit paths
fn bench_gates(c: &mut Criterion) {
    let mut group = c.benchmark_group("gates");

    for n in SIZES {
        group.throughput(Throughput::Elements(1 << n));
        let register = uniform_register(n);

        group.bench_with_input(BenchmarkId::new("hadamard", n), &n, |b, _| {
            let mut reg = register.clone();
            b.iter(|| reg.hadamard(black_box(0)).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("t", n), &n, |b, _| {
            let mut reg = register.clone();
            b.iter(|| reg.t(black_box(0)).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("cnot", n), &n, |b, _| {
            let mut reg = register.clone();
            b.iter(|| reg.cnot(black_box(0), black_box(n - 1)).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("controlled_phase", n), &n, |b, _| {
            let mut reg = register.clone();
            b.iter(|| reg.controlled_phase(0, n - 1, black_box(0.25)).unwrap())
        });
    }

    group.finish();
}

fn bench_measurement(c: &mut Criterion) {
    let mut group = c.benchmark_group("measurement");
    let mut rng = StdRng::seed_from_u64(1);

    for n in SIZES {
        let register = uniform_register(n);

        group.bench_with_input(BenchmarkId::new("measure_all", n), &n, |b, _| {
            b.iter(|| black_box(register.clone().measure_all(&mut rng)))
        });

        group.bench_with_input(BenchmarkId::new("measure_qubit", n), &n, |b, _| {
            b.iter(|| black_box(register.clone().measure_qubit(0, &mut rng).unwrap()))
        });
    }

    group.finish();
}

fn bench_qft(c: &mut Criterion) {
    let mut group = c.benchmark_group("qft");

    for n in [4, 8, 12] {
        let register = uniform_register(n);
        group.bench_with_input(BenchmarkId::new("inverse_partial", n), &n, |b, &n| {
            b.iter(|| {
                let mut reg = register.clone();
                reg.qft_inverse_partial(0, n).unwrap();
                black_box(reg)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_gates, bench_measurement, bench_qft);
criterion_main!(benches);
