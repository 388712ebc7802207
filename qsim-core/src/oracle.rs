//! Porta de oráculo
//!
//! Um oráculo só enxerga o registrador pelas primitivas limitadas
//! ([`QuantumRegister::flip_sign`], [`QuantumRegister::apply_phase_to_indices`],
//! [`QuantumRegister::permute_basis`]) e pelas portas públicas; nunca
//! escreve amplitudes diretamente.

use crate::error::QuantumResult;
use crate::register::QuantumRegister;
use serde::{Deserialize, Serialize};

/// Forma de ação do oráculo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OracleKind {
    /// |x⟩|y⟩ → |x⟩|y ⊕ f(x)⟩
    Bit,
    /// |x⟩ → (-1)^f(x) |x⟩
    Phase,
}

/// Oráculo aplicável a um registrador
pub trait Oracle {
    fn kind(&self) -> OracleKind;

    fn apply(&self, register: &mut QuantumRegister) -> QuantumResult<()>;

    fn name(&self) -> &str {
        match self.kind() {
            OracleKind::Bit => "bit-oracle",
            OracleKind::Phase => "phase-oracle",
        }
    }
}

/// Oráculo de fase que marca um conjunto de estados de base
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseOracle {
    marked: Vec<usize>,
}

impl PhaseOracle {
    pub fn new(marked: Vec<usize>) -> Self {
        Self { marked }
    }

    /// Marca um único estado
    pub fn single(index: usize) -> Self {
        Self::new(vec![index])
    }

    pub fn marked(&self) -> &[usize] {
        &self.marked
    }
}

impl Oracle for PhaseOracle {
    fn kind(&self) -> OracleKind {
        OracleKind::Phase
    }

    fn apply(&self, register: &mut QuantumRegister) -> QuantumResult<()> {
        register.flip_sign(&self.marked)
    }
}
