//! Transformada de Fourier Quântica na ordem padrão de bits
//!
//! ```text
//! QFT      = reverse_qubits ∘ qft_partial
//! QFT⁻¹    = qft_inverse_partial ∘ reverse_qubits
//! QFT|j⟩   = 1/√N Σ_k e^(2πi·jk/N) |k⟩
//! ```

use crate::error::AlgorithmResult;
use qsim_core::{QuantumRegister, QuantumResult};
use rand::Rng;

/// QFT sobre `start..start+count`
pub fn qft(register: &mut QuantumRegister, start: usize, count: usize) -> QuantumResult<()> {
    register.reverse_qubits(start, count)?;
    register.qft_partial(start, count)
}

/// QFT inversa sobre `start..start+count`
pub fn inverse_qft(register: &mut QuantumRegister, start: usize, count: usize) -> QuantumResult<()> {
    register.qft_inverse_partial(start, count)?;
    register.reverse_qubits(start, count)
}

/// Demonstração: QFT de um estado de base inteiro
#[derive(Debug, Clone, Copy)]
pub struct Qft {
    num_qubits: usize,
}

impl Qft {
    pub fn new(num_qubits: usize) -> Self {
        Self { num_qubits }
    }

    /// Prepara |input⟩ e aplica a QFT em todos os qubits
    pub fn transform(&self, input: usize) -> AlgorithmResult<QuantumRegister> {
        let mut register = QuantumRegister::new(self.num_qubits)?;
        register.permute_basis(|index| index ^ input)?;
        qft(&mut register, 0, self.num_qubits)?;
        Ok(register)
    }

    /// QFT de |input⟩ seguida de medição
    pub fn execute<R: Rng + ?Sized>(&self, input: usize, rng: &mut R) -> AlgorithmResult<Vec<u8>> {
        let mut register = self.transform(input)?;
        Ok(register.measure_all(rng))
    }
}
