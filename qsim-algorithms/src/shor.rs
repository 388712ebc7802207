//! # Shor — Fatoração por estimativa de período
//!
//! ## Layout do registrador
//!
//! ```text
//! qubits 0 .. m-1        controle (m = 2·t), bits mais significativos
//! qubits m .. m+t-1      alvo     (t = ⌈log2 N⌉), inicia em |1⟩
//! ```
//!
//! ## Circuito
//!
//! 1. X no último qubit (alvo = 1)
//! 2. H em todo o controle
//! 3. |c⟩|x⟩ → |c⟩|x · a^c mod N⟩
//! 4. QFT inversa no controle, com inversão dos bits
//! 5. Medição; os m bits de controle alimentam o [`PeriodFinder`]
//!
//! ## Computational Complexity
//!
//! - Memória: 2^(3t) amplitudes (N = 15 → 12 qubits, 4096 estados)
//! - N = 21 já exige 15 qubits

use crate::error::{AlgorithmError, AlgorithmResult};
use qsim_core::{PeriodFinder, QuantumRegister, gcd, modular_exponentiation};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Instância de Shor para um par (N, a)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shor {
    n: u64,
    a: u64,
    target_bits: usize,
    control_bits: usize,
}

/// Resultado de uma fatoração
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Factorization {
    pub factors: (u64, u64),
    pub attempts: usize,
    /// Medição que produziu os fatores; `None` no atalho clássico
    pub measurement: Option<Vec<u8>>,
}

impl Shor {
    /// Cria a instância; `a` deve estar em 2..N
    pub fn new(n: u64, a: u64) -> AlgorithmResult<Self> {
        if n < 3 {
            return Err(AlgorithmError::InvalidInput(format!("cannot factor {n}")));
        }
        if a < 2 || a >= n {
            return Err(AlgorithmError::InvalidInput(format!(
                "base {a} must lie in 2..{n}"
            )));
        }

        let target_bits = (u64::BITS - (n - 1).leading_zeros()) as usize;
        Ok(Self {
            n,
            a,
            target_bits,
            control_bits: 2 * target_bits,
        })
    }

    pub fn n(&self) -> u64 {
        self.n
    }

    pub fn a(&self) -> u64 {
        self.a
    }

    pub fn control_bits(&self) -> usize {
        self.control_bits
    }

    pub fn target_bits(&self) -> usize {
        self.target_bits
    }

    pub fn total_qubits(&self) -> usize {
        self.control_bits + self.target_bits
    }

    pub fn period_finder(&self) -> PeriodFinder {
        PeriodFinder::new(self.n, self.a, self.control_bits)
    }

    /// Estado imediatamente antes da medição
    pub fn prepare(&self) -> AlgorithmResult<QuantumRegister> {
        let total = self.total_qubits();
        let mut register = QuantumRegister::new(total)?;

        register.pauli_x(total - 1)?;
        for q in 0..self.control_bits {
            register.hadamard(q)?;
        }

        modular_exponentiation(&mut register, self.control_bits, self.target_bits, self.a, self.n)?;

        register.qft_inverse_partial(0, self.control_bits)?;
        register.reverse_qubits(0, self.control_bits)?;
        Ok(register)
    }

    /// Executa o circuito e retorna os bits do registrador de controle
    pub fn execute<R: Rng + ?Sized>(&self, rng: &mut R) -> AlgorithmResult<Vec<u8>> {
        let mut register = self.prepare()?;
        let mut bits = register.measure_all(rng);
        bits.truncate(self.control_bits);
        Ok(bits)
    }

    pub fn find_factors(&self, bits: &[u8]) -> Option<(u64, u64)> {
        self.period_finder().find_factors(bits)
    }

    /// Repete execução + pós-processamento até `max_attempts` vezes
    pub fn factor<R: Rng + ?Sized>(&self, max_attempts: usize, rng: &mut R) -> AlgorithmResult<Factorization> {
        let shared = gcd(self.a, self.n);
        if shared > 1 {
            tracing::debug!(a = self.a, factor = shared, "base shares a factor with N");
            return Ok(Factorization {
                factors: (shared, self.n / shared),
                attempts: 0,
                measurement: None,
            });
        }

        // o circuito é o mesmo a cada tentativa; só a medição muda
        let prepared = self.prepare()?;

        for attempt in 1..=max_attempts {
            let mut bits = prepared.clone().measure_all(rng);
            bits.truncate(self.control_bits);

            if let Some(factors) = self.find_factors(&bits) {
                tracing::debug!(attempt, ?factors, "factorization succeeded");
                return Ok(Factorization {
                    factors,
                    attempts: attempt,
                    measurement: Some(bits),
                });
            }
            tracing::debug!(attempt, ?bits, "measurement gave no factors");
        }

        tracing::warn!(n = self.n, a = self.a, max_attempts, "factoring failed");
        Err(AlgorithmError::FactoringFailed {
            n: self.n,
            attempts: max_attempts,
        })
    }
}
