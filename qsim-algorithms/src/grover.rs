//! # Grover — Busca com amplificação de amplitude
//!
//! ```text
//! H^n ─► [ oráculo ─► difusão ] × ⌊π/4 · √2^n⌋ ─► medir
//! ```
//!
//! A difusão é a inversão sobre a média: H, X, sinal invertido em
//! |1…1⟩, X, H.

use crate::error::{AlgorithmError, AlgorithmResult};
use qsim_core::{Oracle, OracleKind, PhaseOracle, QuantumRegister, QuantumResult};
use rand::Rng;
use std::f64::consts::FRAC_PI_4;

/// Busca de Grover parametrizada pelo oráculo de fase
#[derive(Debug, Clone)]
pub struct Grover<O: Oracle = PhaseOracle> {
    num_qubits: usize,
    oracle: O,
    iterations: usize,
}

impl Grover<PhaseOracle> {
    /// Busca por um único índice marcado
    pub fn for_target(num_qubits: usize, target: usize) -> AlgorithmResult<Self> {
        if num_qubits > 0 && num_qubits < usize::BITS as usize && target >= 1 << num_qubits {
            return Err(AlgorithmError::InvalidInput(format!(
                "target {target} does not fit in {num_qubits} qubits"
            )));
        }
        Self::new(num_qubits, PhaseOracle::single(target))
    }
}

impl<O: Oracle> Grover<O> {
    pub fn new(num_qubits: usize, oracle: O) -> AlgorithmResult<Self> {
        if num_qubits == 0 {
            return Err(AlgorithmError::InvalidInput("Grover needs at least one qubit".into()));
        }
        if oracle.kind() != OracleKind::Phase {
            return Err(AlgorithmError::InvalidInput(format!(
                "Grover needs a phase oracle, got {}",
                oracle.name()
            )));
        }

        let search_space = 2f64.powi(num_qubits as i32);
        let iterations = ((FRAC_PI_4 * search_space.sqrt()).floor() as usize).max(1);

        Ok(Self {
            num_qubits,
            oracle,
            iterations,
        })
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Inversão sobre a média
    fn diffusion(&self, register: &mut QuantumRegister) -> QuantumResult<()> {
        let n = self.num_qubits;
        for q in 0..n {
            register.hadamard(q)?;
        }
        for q in 0..n {
            register.pauli_x(q)?;
        }
        register.flip_sign(&[register.num_states() - 1])?;
        for q in 0..n {
            register.pauli_x(q)?;
        }
        for q in 0..n {
            register.hadamard(q)?;
        }
        Ok(())
    }

    /// Estado imediatamente antes da medição
    pub fn prepare(&self) -> AlgorithmResult<QuantumRegister> {
        let mut register = QuantumRegister::new(self.num_qubits)?;
        for q in 0..self.num_qubits {
            register.hadamard(q)?;
        }

        for _ in 0..self.iterations {
            self.oracle.apply(&mut register)?;
            self.diffusion(&mut register)?;
        }
        Ok(register)
    }

    /// Executa a busca e mede todos os qubits
    pub fn execute<R: Rng + ?Sized>(&self, rng: &mut R) -> AlgorithmResult<Vec<u8>> {
        let mut register = self.prepare()?;
        let measurement = register.measure_all(rng);
        tracing::debug!(iterations = self.iterations, ?measurement, "grover finished");
        Ok(measurement)
    }
}
