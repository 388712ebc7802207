//! # ⚛️ qsim-core — Simulação por vetor de estado
//!
//! Motor clássico para computação quântica de pequena escala: aritmética
//! complexa, qubits isolados, registradores de n qubits, aplicação de
//! portas, medição com colapso e o pós-processamento numérico de Shor.
//!
//! ## Computational Complexity
//!
//! **Registrador — O(2^n) memória:**
//! - 16 bytes por amplitude
//! - n ≤ 24 por padrão (`QSIM_MAX_QUBITS`)
//!
//! **Portas e medição — O(2^n) por operação:**
//! - Uma passada sobre o vetor de estado
//! - Portas diagonais e trocas sem alocação
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │          QuantumRegister                        │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Vec<Complex> (2^n, qubit 0 = MSB)        │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌──────────────┐ ┌──────────────┐ ┌────────┐  │
//! │  │ QuantumGate  │ │ Oracle       │ │ Noise  │  │
//! │  └──────────────┘ └──────────────┘ └────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Measurement (rng injetado)               │  │
//! │  └───────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Exemplo
//!
//! ```
//! use qsim_core::QuantumRegister;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let mut reg = QuantumRegister::new(2)?;
//! reg.hadamard(0)?;
//! reg.cnot(0, 1)?;
//!
//! let bits = reg.measure_all(&mut rng);
//! assert_eq!(bits[0], bits[1]);
//! # Ok::<(), qsim_core::QuantumError>(())
//! ```

pub mod arithmetic;
pub mod complex;
pub mod config;
pub mod error;
pub mod gates;
pub mod noise;
pub mod oracle;
pub mod qubit;
pub mod register;

pub use arithmetic::{
    Convergents, PeriodFinder, continued_fraction_denominator, gcd, mod_pow,
    modular_exponentiation,
};
pub use complex::Complex;
pub use config::SimulatorConfig;
pub use error::{QuantumError, QuantumResult};
pub use gates::{
    Hadamard, Matrix2x2, PauliX, PauliY, PauliZ, Phase, QuantumGate, RotationX, RotationY,
    RotationZ, SGate, TGate,
};
pub use noise::{NoiseSource, OMEGA, VacuumFluctuation};
pub use oracle::{Oracle, OracleKind, PhaseOracle};
pub use qubit::Qubit;
pub use register::{QuantumRegister, RegisterSnapshot, bits_to_index, index_to_bits};

use rand::Rng;
use rand::distributions::{Distribution, Standard};

/// Sorteio uniforme em [0, 1) a partir de uma fonte injetada
#[inline]
pub fn uniform<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    Distribution::<f64>::sample(&Standard, rng)
}
