//! Bernstein-Vazirani: recupera a string secreta `s` de f(x) = s·x mod 2
//! com uma única consulta, via phase kickback na ancila |−⟩.

use crate::error::{AlgorithmError, AlgorithmResult};
use qsim_core::{Oracle, OracleKind, QuantumError, QuantumRegister, QuantumResult};
use rand::Rng;

/// Oráculo de produto interno: CNOT de cada entrada com s_i = 1 para a ancila
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InnerProductOracle {
    secret: Vec<u8>,
}

impl InnerProductOracle {
    pub fn new(secret: Vec<u8>) -> Self {
        Self { secret }
    }
}

impl Oracle for InnerProductOracle {
    fn kind(&self) -> OracleKind {
        OracleKind::Bit
    }

    fn name(&self) -> &str {
        "inner-product"
    }

    fn apply(&self, register: &mut QuantumRegister) -> QuantumResult<()> {
        let ancilla = self.secret.len();
        if register.num_qubits() != ancilla + 1 {
            return Err(QuantumError::RegisterLayout {
                control: ancilla,
                target: 1,
                num_qubits: register.num_qubits(),
            });
        }

        for (input, _) in self.secret.iter().enumerate().filter(|(_, bit)| **bit == 1) {
            register.cnot(input, ancilla)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct BernsteinVazirani {
    oracle: InnerProductOracle,
    num_inputs: usize,
}

impl BernsteinVazirani {
    /// `secret` deve conter apenas 0 e 1
    pub fn new(secret: Vec<u8>) -> AlgorithmResult<Self> {
        if secret.is_empty() {
            return Err(AlgorithmError::InvalidInput("secret string is empty".into()));
        }
        if let Some(bad) = secret.iter().find(|&&bit| bit > 1) {
            return Err(AlgorithmError::InvalidInput(format!(
                "secret bits must be 0 or 1, got {bad}"
            )));
        }
        Ok(Self {
            num_inputs: secret.len(),
            oracle: InnerProductOracle::new(secret),
        })
    }

    /// Parse de uma string binária como `"1011"`
    pub fn from_bit_string(bits: &str) -> AlgorithmResult<Self> {
        let secret = bits
            .chars()
            .map(|c| match c {
                '0' => Ok(0),
                '1' => Ok(1),
                other => Err(AlgorithmError::InvalidInput(format!(
                    "unexpected character {other:?} in secret"
                ))),
            })
            .collect::<AlgorithmResult<Vec<u8>>>()?;
        Self::new(secret)
    }

    /// Executa o circuito; retorna os n bits de entrada medidos
    pub fn execute<R: Rng + ?Sized>(&self, rng: &mut R) -> AlgorithmResult<Vec<u8>> {
        let n = self.num_inputs;
        let mut register = QuantumRegister::new(n + 1)?;

        // ancila em |−⟩
        register.pauli_x(n)?;
        register.hadamard(n)?;
        for q in 0..n {
            register.hadamard(q)?;
        }

        self.oracle.apply(&mut register)?;

        for q in 0..n {
            register.hadamard(q)?;
        }

        let mut bits = register.measure_all(rng);
        bits.truncate(n);
        Ok(bits)
    }
}
