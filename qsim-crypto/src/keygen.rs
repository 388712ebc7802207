//! Geração de chaves por colapso de superposição
//!
//! Cada bit vem de um qubit |0⟩ levado a |+⟩ por Hadamard e medido.

use qsim_core::Qubit;
use rand::Rng;

/// Um bit aleatório: H|0⟩ medido
pub fn random_bit<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    let mut qubit = Qubit::new();
    qubit.hadamard();
    qubit.measure(rng)
}

/// Sequência de `length` bits aleatórios
pub fn generate_random_key<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Vec<u8> {
    (0..length).map(|_| random_bit(rng)).collect()
}
