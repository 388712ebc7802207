//! Tipos de erro para qsim-algorithms

use qsim_core::QuantumError;
use thiserror::Error;

/// Resultado customizado para os algoritmos
pub type AlgorithmResult<T> = Result<T, AlgorithmError>;

/// Erros que podem ocorrer na execução de um algoritmo
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AlgorithmError {
    #[error("Quantum error: {0}")]
    Quantum(#[from] QuantumError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to factor {n} after {attempts} attempts")]
    FactoringFailed { n: u64, attempts: usize },
}
