//! # Aritmética modular — suporte ao algoritmo de Shor
//!
//! Duas metades:
//!
//! ```text
//! quântica:  |c⟩|x⟩ ──► |c⟩|x · a^c mod N⟩      (modular_exponentiation)
//! clássica:  medição c ──► c/2^m ≈ s/r ──► r ──► gcd(a^(r/2) ± 1, N)
//!                                                  (PeriodFinder)
//! ```
//!
//! As frações contínuas usam inteiros exatos sobre `c / 2^m`, sem ponto
//! flutuante.

use crate::error::{QuantumError, QuantumResult};
use crate::register::{QuantumRegister, bits_to_index};
use serde::{Deserialize, Serialize};

/// Exponenciação modular por quadrados sucessivos: base^exp mod modulus
pub fn mod_pow(base: u64, mut exp: u64, modulus: u64) -> u64 {
    if modulus == 1 {
        return 0;
    }
    let m = modulus as u128;
    let mut result: u128 = 1;
    let mut base = base as u128 % m;

    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % m;
        }
        base = base * base % m;
        exp >>= 1;
    }
    result as u64
}

/// Máximo divisor comum (Euclides)
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Convergentes h/k da expansão em fração contínua de `numerator / denominator`
#[derive(Debug, Clone)]
pub struct Convergents {
    numerator: u64,
    denominator: u64,
    h: (u64, u64),
    k: (u64, u64),
}

impl Convergents {
    pub fn new(numerator: u64, denominator: u64) -> Self {
        Self {
            numerator,
            denominator,
            // (h_{-1}, h_{-2}) e (k_{-1}, k_{-2})
            h: (1, 0),
            k: (0, 1),
        }
    }
}

impl Iterator for Convergents {
    type Item = (u64, u64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.denominator == 0 {
            return None;
        }
        let a = self.numerator / self.denominator;
        (self.numerator, self.denominator) = (self.denominator, self.numerator % self.denominator);

        let h = a.checked_mul(self.h.0)?.checked_add(self.h.1)?;
        let k = a.checked_mul(self.k.0)?.checked_add(self.k.1)?;
        self.h = (h, self.h.0);
        self.k = (k, self.k.0);
        Some((h, k))
    }
}

/// Maior denominador de convergente estritamente menor que `limit`
pub fn continued_fraction_denominator(numerator: u64, denominator: u64, limit: u64) -> u64 {
    Convergents::new(numerator, denominator)
        .map(|(_, k)| k)
        .take_while(|&k| k < limit)
        .last()
        .unwrap_or(1)
}

/// Aplica |c⟩|x⟩ → |c⟩|x · a^c mod N⟩ ao registrador.
///
/// O campo de controle ocupa os `control_bits` qubits mais significativos
/// e o alvo os `target_bits` restantes. Estados com `x ≥ N` passam
/// inalterados. `a` precisa ser coprimo com N, senão o mapa não é
/// injetivo.
pub fn modular_exponentiation(
    register: &mut QuantumRegister,
    control_bits: usize,
    target_bits: usize,
    a: u64,
    modulus: u64,
) -> QuantumResult<()> {
    if control_bits + target_bits != register.num_qubits() || target_bits == 0 {
        return Err(QuantumError::RegisterLayout {
            control: control_bits,
            target: target_bits,
            num_qubits: register.num_qubits(),
        });
    }
    if modulus < 2 || (target_bits < u64::BITS as usize && modulus > 1u64 << target_bits) {
        return Err(QuantumError::InvalidModulus {
            modulus,
            target_bits,
        });
    }

    if gcd(a, modulus) != 1 {
        return Err(QuantumError::NonCoprimeBase { base: a, modulus });
    }

    let target_mask = (1usize << target_bits) - 1;
    register.permute_basis(|index| {
        let c = (index >> target_bits) as u64;
        let x = (index & target_mask) as u64;
        if x >= modulus {
            return index;
        }
        let y = (x as u128 * mod_pow(a, c, modulus) as u128 % modulus as u128) as usize;
        (index & !target_mask) | y
    })
}

/// Pós-processamento clássico da estimativa de fase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodFinder {
    /// Número a fatorar
    pub n: u64,
    /// Base coprima com N
    pub a: u64,
    /// Largura do registrador de controle
    pub control_bits: usize,
}

impl PeriodFinder {
    pub fn new(n: u64, a: u64, control_bits: usize) -> Self {
        Self { n, a, control_bits }
    }

    /// Candidato a período para uma medição do registrador de controle.
    /// `None` quando a fase medida é zero.
    pub fn period(&self, bits: &[u8]) -> Option<u64> {
        let value = bits_to_index(bits) as u64;
        if value == 0 || self.control_bits >= u64::BITS as usize {
            return None;
        }
        Some(continued_fraction_denominator(
            value,
            1u64 << self.control_bits,
            self.n,
        ))
    }

    /// Tenta extrair um par de fatores não triviais de N
    pub fn find_factors(&self, bits: &[u8]) -> Option<(u64, u64)> {
        let Some(r) = self.period(bits) else {
            tracing::debug!("phase 0 measured, no period");
            return None;
        };

        if r <= 1 || r % 2 != 0 {
            tracing::debug!(period = r, "unusable period");
            return None;
        }

        let x = mod_pow(self.a, r / 2, self.n);
        if x == self.n - 1 {
            tracing::debug!(period = r, "a^(r/2) ≡ -1 mod N");
            return None;
        }

        let candidates = [gcd((x + self.n - 1) % self.n, self.n), gcd(x + 1, self.n)];
        let factor = candidates
            .into_iter()
            .find(|&f| f > 1 && f < self.n)?;

        tracing::debug!(period = r, factor, "non-trivial factor found");
        Some((factor, self.n / factor))
    }
}
