//! # BB84 — Distribuição quântica de chaves
//!
//! ## Fases
//!
//! ```text
//! 1. geração      bits de Alice, bases de Alice, bases de Bob (k·n cada)
//! 2. transmissão  X se bit = 1, H se base = 1 ──canal──► H se base Bob = 1, medir
//! 3. peneira      mantém posições com bases iguais
//!                 amostra = primeiros 10% ──► QBER
//!                 QBER > 0.11 ──► SecurityAbort
//! ```
//!
//! Sem retentativas: uma troca abortada não devolve chave parcial.

use crate::error::{CryptoError, CryptoResult};
use crate::keygen::{generate_random_key, random_bit};
use qsim_core::config::env_or;
use qsim_core::{NoiseSource, Qubit, VacuumFluctuation};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Bits brutos gerados por bit de chave pedido
pub const DEFAULT_OVERSAMPLING: usize = 4;

/// Fração da sequência peneirada sacrificada para estimar o QBER
pub const DEFAULT_SAMPLE_FRACTION: f64 = 0.1;

/// Limite teórico de segurança (~11%)
pub const DEFAULT_QBER_THRESHOLD: f64 = 0.11;

/// Parâmetros do protocolo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bb84Config {
    pub oversampling: usize,
    pub sample_fraction: f64,
    pub qber_threshold: f64,
}

impl Default for Bb84Config {
    fn default() -> Self {
        Self {
            oversampling: DEFAULT_OVERSAMPLING,
            sample_fraction: DEFAULT_SAMPLE_FRACTION,
            qber_threshold: DEFAULT_QBER_THRESHOLD,
        }
    }
}

impl Bb84Config {
    /// Lê `QSIM_BB84_OVERSAMPLING`, `QSIM_BB84_SAMPLE_FRACTION` e
    /// `QSIM_BB84_QBER_THRESHOLD`
    pub fn from_env() -> Self {
        Self {
            oversampling: env_or("QSIM_BB84_OVERSAMPLING", DEFAULT_OVERSAMPLING),
            sample_fraction: env_or("QSIM_BB84_SAMPLE_FRACTION", DEFAULT_SAMPLE_FRACTION),
            qber_threshold: env_or("QSIM_BB84_QBER_THRESHOLD", DEFAULT_QBER_THRESHOLD),
        }
    }

    pub fn validate(&self) -> CryptoResult<()> {
        if self.oversampling == 0 {
            return Err(CryptoError::InvalidConfig("oversampling must be at least 1".into()));
        }
        if !(0.0..1.0).contains(&self.sample_fraction) {
            return Err(CryptoError::InvalidConfig(format!(
                "sample fraction {} outside [0, 1)",
                self.sample_fraction
            )));
        }
        if !(0.0..=1.0).contains(&self.qber_threshold) {
            return Err(CryptoError::InvalidConfig(format!(
                "QBER threshold {} outside [0, 1]",
                self.qber_threshold
            )));
        }
        Ok(())
    }
}

/// Canal quântico entre Alice e Bob
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Channel {
    /// Sem perturbação
    #[default]
    Ideal,
    /// Flutuação do vácuo somada a cada fóton
    Noisy { intensity: f64 },
    /// Eve mede cada fóton numa base aleatória e reenvia
    InterceptResend,
}

/// Resultado de uma troca bem-sucedida
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyExchange {
    /// Chave compartilhada, truncada ao tamanho pedido
    pub key: Vec<u8>,
    /// Bits peneirados que sobraram após a amostragem
    pub total_bits_generated: usize,
    pub error_rate: f64,
    pub sifted_length: usize,
    pub sample_size: usize,
}

/// Protocolo BB84 sobre um canal
#[derive(Debug, Clone, Default)]
pub struct Bb84 {
    config: Bb84Config,
    channel: Channel,
}

impl Bb84 {
    pub fn new(config: Bb84Config) -> Self {
        Self {
            config,
            channel: Channel::Ideal,
        }
    }

    pub fn with_channel(mut self, channel: Channel) -> Self {
        self.channel = channel;
        self
    }

    pub fn config(&self) -> &Bb84Config {
        &self.config
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Executa uma troca completa para uma chave de `length` bits
    pub fn exchange<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> CryptoResult<KeyExchange> {
        match self.channel {
            Channel::Ideal => run(&self.config, length, rng, |photon, _| photon),
            Channel::Noisy { intensity } => {
                let mut noise = VacuumFluctuation::new(StdRng::seed_from_u64(rng.next_u64()));
                run(&self.config, length, rng, |mut photon, _| {
                    photon.apply_noise(&mut noise, intensity);
                    photon
                })
            }
            Channel::InterceptResend => {
                run(&self.config, length, rng, |photon, rng| intercept_resend(photon, rng))
            }
        }
    }
}

/// Troca com configuração padrão num canal ideal
pub fn simulate_key_exchange<R: Rng + ?Sized>(length: usize, rng: &mut R) -> CryptoResult<KeyExchange> {
    Bb84::default().exchange(length, rng)
}

/// Troca com uma fonte de ruído arbitrária aplicada a cada fóton
pub fn exchange_with_noise<R, N>(
    config: &Bb84Config,
    length: usize,
    noise: &mut N,
    intensity: f64,
    rng: &mut R,
) -> CryptoResult<KeyExchange>
where
    R: Rng + ?Sized,
    N: NoiseSource + ?Sized,
{
    run(config, length, rng, |mut photon, _| {
        photon.apply_noise(&mut *noise, intensity);
        photon
    })
}

/// Codifica um bit numa base: X se bit = 1, depois H se base = 1
fn prepare(bit: u8, basis: u8) -> Qubit {
    let mut qubit = Qubit::new();
    if bit == 1 {
        qubit.pauli_x();
    }
    if basis == 1 {
        qubit.hadamard();
    }
    qubit
}

/// Eve mede numa base aleatória e reenvia o que viu
fn intercept_resend<R: Rng + ?Sized>(mut photon: Qubit, rng: &mut R) -> Qubit {
    let basis = random_bit(rng);
    if basis == 1 {
        photon.hadamard();
    }
    let bit = photon.measure(rng);
    prepare(bit, basis)
}

fn run<R, F>(config: &Bb84Config, length: usize, rng: &mut R, mut channel: F) -> CryptoResult<KeyExchange>
where
    R: Rng + ?Sized,
    F: FnMut(Qubit, &mut R) -> Qubit,
{
    config.validate()?;
    let raw = length.saturating_mul(config.oversampling);

    // 1. geração
    let alice_bits = generate_random_key(raw, rng);
    let alice_bases = generate_random_key(raw, rng);
    let bob_bases = generate_random_key(raw, rng);

    // 2. transmissão e medição
    let mut bob_bits = Vec::with_capacity(raw);
    for i in 0..raw {
        let mut photon = channel(prepare(alice_bits[i], alice_bases[i]), rng);
        if bob_bases[i] == 1 {
            photon.hadamard();
        }
        bob_bits.push(photon.measure(rng));
    }

    // 3. peneira e estimativa
    let (sifted_alice, sifted_bob): (Vec<u8>, Vec<u8>) = (0..raw)
        .filter(|&i| alice_bases[i] == bob_bases[i])
        .map(|i| (alice_bits[i], bob_bits[i]))
        .unzip();

    let sifted_length = sifted_alice.len();
    let sample_size = (sifted_length as f64 * config.sample_fraction).floor() as usize;
    let errors = sifted_alice[..sample_size]
        .iter()
        .zip(&sifted_bob[..sample_size])
        .filter(|(a, b)| a != b)
        .count();

    let error_rate = if sample_size == 0 {
        0.0
    } else {
        errors as f64 / sample_size as f64
    };

    tracing::debug!(raw, sifted_length, sample_size, errors, error_rate, "bb84 sifting done");

    if error_rate > config.qber_threshold {
        tracing::warn!(error_rate, threshold = config.qber_threshold, "bb84 aborted");
        return Err(CryptoError::SecurityAbort {
            qber: error_rate,
            threshold: config.qber_threshold,
        });
    }

    let remaining = &sifted_alice[sample_size..];
    if remaining.len() < length {
        tracing::warn!(requested = length, available = remaining.len(), "bb84 key shorter than requested");
    }

    Ok(KeyExchange {
        key: remaining.iter().take(length).copied().collect(),
        total_bits_generated: remaining.len(),
        error_rate,
        sifted_length,
        sample_size,
    })
}
