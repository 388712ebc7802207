//! Testes integrados para qsim-crypto

use crate::*;
use qsim_core::Complex;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_noiseless_exchange_of_fifty_bits() {
    let mut rng = StdRng::seed_from_u64(50);
    let result = simulate_key_exchange(50, &mut rng).unwrap();

    assert!(result.error_rate < 0.11);
    assert_eq!(result.error_rate, 0.0);
    assert!(result.key.len() >= 50);
    assert!(result.total_bits_generated >= result.key.len());
    assert!(result.key.iter().all(|&b| b <= 1));
}

#[test]
fn test_sample_is_ten_percent_of_sifted() {
    let mut rng = StdRng::seed_from_u64(3);
    let result = simulate_key_exchange(100, &mut rng).unwrap();
    assert_eq!(result.sample_size, result.sifted_length / 10);
    assert_eq!(result.total_bits_generated, result.sifted_length - result.sample_size);
    // ~metade das bases coincide
    assert!((150..=250).contains(&result.sifted_length));
}

#[test]
fn test_eavesdropper_is_detected() {
    let mut rng = StdRng::seed_from_u64(1984);
    let bb84 = Bb84::default().with_channel(Channel::InterceptResend);
    match bb84.exchange(500, &mut rng) {
        Err(CryptoError::SecurityAbort { qber, threshold }) => {
            assert!(qber > threshold);
            // intercept-resend introduz ~25% de erro
            assert!((0.12..0.4).contains(&qber));
        }
        other => panic!("expected abort, got {other:?}"),
    }
}

#[test]
fn test_weak_channel_noise_is_tolerated() {
    let mut rng = StdRng::seed_from_u64(77);
    let bb84 = Bb84::default().with_channel(Channel::Noisy { intensity: 0.01 });
    let result = bb84.exchange(64, &mut rng).unwrap();
    assert!(result.error_rate <= 0.11);
    assert_eq!(result.key.len(), 64);
}

#[test]
fn test_custom_noise_source_flips_bits() {
    // perturbação que domina as amplitudes de todo fóton
    let mut rng = StdRng::seed_from_u64(5);
    let mut noise = |_: f64| Complex::new(-10.0, 0.0);
    let config = Bb84Config::default();
    let result = exchange_with_noise(&config, 200, &mut noise, 1.0, &mut rng);
    assert!(matches!(result, Err(CryptoError::SecurityAbort { .. })));
}

#[test]
fn test_zero_length_request() {
    let mut rng = StdRng::seed_from_u64(0);
    let result = simulate_key_exchange(0, &mut rng).unwrap();
    assert!(result.key.is_empty());
    assert_eq!(result.sample_size, 0);
    assert_eq!(result.error_rate, 0.0);
}

#[test]
fn test_lenient_threshold_accepts_eavesdropper() {
    let mut rng = StdRng::seed_from_u64(12);
    let config = Bb84Config {
        qber_threshold: 1.0,
        ..Bb84Config::default()
    };
    let result = Bb84::new(config)
        .with_channel(Channel::InterceptResend)
        .exchange(400, &mut rng)
        .unwrap();
    assert!(result.error_rate > 0.0);
}

#[test]
fn test_exchange_then_one_time_pad() {
    let mut rng = StdRng::seed_from_u64(2024);
    let message = "BB84 + OTP";
    let exchange = simulate_key_exchange(message.len() * 8, &mut rng).unwrap();
    let cipher = encrypt(message, &exchange.key).unwrap();
    assert_ne!(cipher, bytes_to_bits(message.as_bytes()));
    assert_eq!(decrypt(&cipher, &exchange.key).unwrap(), message);
}

#[test]
fn test_otp_roundtrip_with_random_keys() {
    let mut rng = StdRng::seed_from_u64(9);
    for message in ["", "a", "hello world", "çãõ ⟩⊕"] {
        let key = generate_random_key(message.len() * 8 + 3, &mut rng);
        let cipher = encrypt(message, &key).unwrap();
        assert_eq!(decrypt(&cipher, &key).unwrap(), message);
    }
}

#[test]
fn test_key_exchange_serializes() {
    let mut rng = StdRng::seed_from_u64(4);
    let config = Bb84Config {
        oversampling: 16,
        ..Bb84Config::default()
    };
    let result = Bb84::new(config).exchange(8, &mut rng).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["key"].as_array().unwrap().len(), 8);
    assert!(json["error_rate"].is_number());
}
