//! Tipos de erro para qsim-core

use thiserror::Error;

/// Resultado customizado para operações quânticas
pub type QuantumResult<T> = Result<T, QuantumError>;

/// Erros que podem ocorrer em operações do registrador
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuantumError {
    #[error("Qubit {index} does not exist in a {num_qubits}-qubit register")]
    InvalidQubit { index: usize, num_qubits: usize },

    #[error("Qubit {0} used more than once in the same gate")]
    DuplicateQubit(usize),

    #[error("Invalid qubit count {requested}: supported range is 1..={max}")]
    InvalidQubitCount { requested: usize, max: usize },

    #[error("Qubit range {start}..{start}+{count} exceeds a {num_qubits}-qubit register")]
    InvalidRange {
        start: usize,
        count: usize,
        num_qubits: usize,
    },

    #[error("Basis state {index} out of range for {num_states} states")]
    InvalidBasisState { index: usize, num_states: usize },

    #[error("Invalid modulus {modulus} for a {target_bits}-bit target register")]
    InvalidModulus { modulus: u64, target_bits: usize },

    #[error("Base {base} shares a factor with modulus {modulus}")]
    NonCoprimeBase { base: u64, modulus: u64 },

    #[error("Register layout mismatch: {control} control + {target} target bits on {num_qubits} qubits")]
    RegisterLayout {
        control: usize,
        target: usize,
        num_qubits: usize,
    },
}
