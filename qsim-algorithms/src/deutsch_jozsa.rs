//! # Deutsch-Jozsa — Constante ou balanceada em uma consulta
//!
//! ```text
//! |0⟩^n ─H─┤    ├─H─ medir
//!          │ Uf │
//! |1⟩   ─H─┤    ├───
//! ```
//!
//! Entradas nos qubits `0..n`, ancila no qubit `n` (bit menos
//! significativo do índice de base).

use crate::error::{AlgorithmError, AlgorithmResult};
use qsim_core::{Oracle, OracleKind, QuantumError, QuantumRegister, QuantumResult};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Maior número de entradas representável em `u64`
pub const MAX_INPUTS: usize = 63;

/// Funções booleanas de exemplo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BooleanFunction {
    /// f(x) = constante
    Constant(bool),
    /// f(x) = bit mais significativo de x
    FirstBit,
    /// f(x) = paridade de x
    Parity,
    /// f(x) = paridade de x & máscara
    Mask(u64),
}

/// Classificação de uma função booleana
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FunctionClass {
    Constant,
    Balanced,
}

impl BooleanFunction {
    /// Avalia f sobre uma entrada de `num_inputs` bits
    pub fn evaluate(&self, input: u64, num_inputs: usize) -> bool {
        match *self {
            Self::Constant(value) => value,
            Self::FirstBit => num_inputs > 0 && (input >> (num_inputs - 1)) & 1 == 1,
            Self::Parity => input.count_ones() % 2 == 1,
            Self::Mask(mask) => (input & mask).count_ones() % 2 == 1,
        }
    }

    /// Classe esperada para `num_inputs` entradas
    pub fn class(&self, num_inputs: usize) -> FunctionClass {
        let relevant = if num_inputs >= 64 { u64::MAX } else { (1u64 << num_inputs) - 1 };
        match *self {
            Self::Constant(_) => FunctionClass::Constant,
            Self::Mask(mask) if mask & relevant == 0 => FunctionClass::Constant,
            _ => FunctionClass::Balanced,
        }
    }
}

/// Oráculo de bit |x⟩|y⟩ → |x⟩|y ⊕ f(x)⟩
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionOracle {
    function: BooleanFunction,
    num_inputs: usize,
}

impl FunctionOracle {
    pub fn new(function: BooleanFunction, num_inputs: usize) -> Self {
        Self { function, num_inputs }
    }
}

impl Oracle for FunctionOracle {
    fn kind(&self) -> OracleKind {
        OracleKind::Bit
    }

    fn name(&self) -> &str {
        "deutsch-jozsa"
    }

    fn apply(&self, register: &mut QuantumRegister) -> QuantumResult<()> {
        if register.num_qubits() != self.num_inputs + 1 {
            return Err(QuantumError::RegisterLayout {
                control: self.num_inputs,
                target: 1,
                num_qubits: register.num_qubits(),
            });
        }

        // Bijeção: troca a ancila dos pares onde f(x) = 1
        let (function, n) = (self.function, self.num_inputs);
        register.permute_basis(|index| {
            let input = (index >> 1) as u64;
            if function.evaluate(input, n) { index ^ 1 } else { index }
        })
    }
}

/// Resultado de uma execução
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeutschJozsaResult {
    pub class: FunctionClass,
    pub measurements: Vec<u8>,
}

/// Algoritmo de Deutsch-Jozsa
#[derive(Debug, Clone)]
pub struct DeutschJozsa {
    num_inputs: usize,
    oracle: FunctionOracle,
}

impl DeutschJozsa {
    pub fn new(function: BooleanFunction, num_inputs: usize) -> AlgorithmResult<Self> {
        if num_inputs == 0 || num_inputs > MAX_INPUTS {
            return Err(AlgorithmError::InvalidInput(format!(
                "Deutsch-Jozsa needs 1..={MAX_INPUTS} input qubits, got {num_inputs}"
            )));
        }
        Ok(Self {
            num_inputs,
            oracle: FunctionOracle::new(function, num_inputs),
        })
    }

    pub fn num_inputs(&self) -> usize {
        self.num_inputs
    }

    /// Executa o circuito e classifica a função
    pub fn execute<R: Rng + ?Sized>(&self, rng: &mut R) -> AlgorithmResult<DeutschJozsaResult> {
        let n = self.num_inputs;
        let mut register = QuantumRegister::new(n + 1)?;

        register.pauli_x(n)?;
        for q in 0..=n {
            register.hadamard(q)?;
        }

        self.oracle.apply(&mut register)?;

        for q in 0..n {
            register.hadamard(q)?;
        }

        let measurements = (0..n)
            .map(|q| register.measure_qubit(q, rng))
            .collect::<QuantumResult<Vec<u8>>>()?;

        let class = if measurements.iter().all(|&bit| bit == 0) {
            FunctionClass::Constant
        } else {
            FunctionClass::Balanced
        };

        tracing::debug!(?class, ?measurements, "deutsch-jozsa finished");
        Ok(DeutschJozsaResult { class, measurements })
    }
}
