//! # Crypto Benchmarks
//!
//! Run: `cargo bench --bench crypto_bench`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use qsim_crypto::{Bb84, Channel, decrypt, encrypt, generate_random_key};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn bench_key_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("keygen");
    let mut rng = StdRng::seed_from_u64(3);

    for length in [64, 256, 1024] {
        group.bench_with_input(BenchmarkId::new("random_key", length), &length, |b, &len| {
            b.iter(|| black_box(generate_random_key(len, &mut rng)))
        });
    }

    group.finish();
}

fn bench_bb84(c: &mut Criterion) {
    let mut group = c.benchmark_group("bb84");
    let mut rng = StdRng::seed_from_u64(84);

    for channel in [Channel::Ideal, Channel::Noisy { intensity: 0.01 }] {
        let bb84 = Bb84::default().with_channel(channel);
        group.bench_with_input(BenchmarkId::new("exchange_256", format!("{channel:?}")), &bb84, |b, bb84| {
            b.iter(|| black_box(bb84.exchange(256, &mut rng).unwrap()))
        });
    }

    group.finish();
}

fn bench_one_time_pad(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(5);
    let message = "the quick brown fox jumps over the lazy dog";
    let key = generate_random_key(message.len() * 8, &mut rng);
    let cipher = encrypt(message, &key).unwrap();

    c.bench_function("otp_encrypt", |b| b.iter(|| black_box(encrypt(black_box(message), &key).unwrap())));
    c.bench_function("otp_decrypt", |b| b.iter(|| black_box(decrypt(black_box(&cipher), &key).unwrap())));
}

criterion_group!(benches, bench_key_generation, bench_bb84, bench_one_time_pad);
criterion_main!(benches);
