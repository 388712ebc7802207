//! # Qubit — Estado de dois níveis
//!
//! |ψ⟩ = α|0⟩ + β|1⟩ com |α|² + |β|² = 1.
//!
//! Independente do [`QuantumRegister`](crate::QuantumRegister): usado
//! diretamente pelo BB84 e pela geração de chaves aleatórias.

use crate::complex::{Complex, format_term};
use crate::config::SimulatorConfig;
use crate::gates::{
    Hadamard, PauliX, PauliY, PauliZ, Phase, QuantumGate, RotationX, RotationY, RotationZ, SGate,
    TGate,
};
use crate::noise::NoiseSource;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Qubit isolado
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Qubit {
    alpha: Complex,
    beta: Complex,
}

impl Default for Qubit {
    fn default() -> Self {
        Self::new()
    }
}

impl Qubit {
    /// Cria qubit em |0⟩
    pub fn new() -> Self {
        Self {
            alpha: Complex::ONE,
            beta: Complex::ZERO,
        }
    }

    /// Cria qubit a partir de amplitudes arbitrárias (normalizadas aqui).
    /// Amplitudes nulas resultam em |0⟩.
    pub fn from_amplitudes(alpha: Complex, beta: Complex) -> Self {
        let mut qubit = Self { alpha, beta };
        if qubit.norm_sqr() == 0.0 {
            return Self::new();
        }
        qubit.normalize();
        qubit
    }

    /// Amplitude de |0⟩
    pub fn alpha(&self) -> Complex {
        self.alpha
    }

    /// Amplitude de |1⟩
    pub fn beta(&self) -> Complex {
        self.beta
    }

    fn norm_sqr(&self) -> f64 {
        self.alpha.norm_sqr() + self.beta.norm_sqr()
    }

    /// Reescala para |α|² + |β|² = 1
    pub fn normalize(&mut self) {
        let norm = self.norm_sqr().sqrt();
        if norm > 0.0 && (norm - 1.0).abs() > f64::EPSILON {
            self.alpha = self.alpha.scale(1.0 / norm);
            self.beta = self.beta.scale(1.0 / norm);
        }
    }

    /// Verifica o invariante de normalização
    pub fn is_normalized(&self) -> bool {
        (self.norm_sqr() - 1.0).abs() < SimulatorConfig::from_env().tolerance
    }

    /// Aplica uma porta arbitrária de um qubit
    pub fn apply_gate<G: QuantumGate + ?Sized>(&mut self, gate: &G) {
        let [alpha, beta] = gate.apply([self.alpha, self.beta]);
        self.alpha = alpha;
        self.beta = beta;
        self.normalize();
    }

    pub fn hadamard(&mut self) {
        self.apply_gate(&Hadamard);
    }

    pub fn pauli_x(&mut self) {
        self.apply_gate(&PauliX);
    }

    pub fn pauli_y(&mut self) {
        self.apply_gate(&PauliY);
    }

    pub fn pauli_z(&mut self) {
        self.apply_gate(&PauliZ);
    }

    pub fn s(&mut self) {
        self.apply_gate(&SGate);
    }

    pub fn t(&mut self) {
        self.apply_gate(&TGate);
    }

    /// Rotação em torno do eixo X
    pub fn rotate_x(&mut self, angle: f64) {
        self.apply_gate(&RotationX::new(angle));
    }

    /// Rotação em torno do eixo Y
    pub fn rotate_y(&mut self, angle: f64) {
        self.apply_gate(&RotationY::new(angle));
    }

    /// Rotação em torno do eixo Z
    pub fn rotate_z(&mut self, angle: f64) {
        self.apply_gate(&RotationZ::new(angle));
    }

    /// P(φ) = diag(1, e^(iφ))
    pub fn phase(&mut self, angle: f64) {
        self.apply_gate(&Phase::new(angle));
    }

    /// Mede na base computacional, colapsando o estado
    pub fn measure<R: Rng + ?Sized>(&mut self, rng: &mut R) -> u8 {
        let prob0 = self.alpha.norm_sqr();

        if crate::uniform(rng) < prob0 {
            *self = Self::new();
            0
        } else {
            self.alpha = Complex::ZERO;
            self.beta = Complex::ONE;
            1
        }
    }

    /// Probabilidades (P(0), P(1))
    pub fn probabilities(&self) -> (f64, f64) {
        (self.alpha.norm_sqr(), self.beta.norm_sqr())
    }

    /// Soma uma perturbação a cada amplitude e renormaliza
    pub fn apply_noise<N: NoiseSource + ?Sized>(&mut self, noise: &mut N, intensity: f64) {
        self.alpha = self.alpha + noise.fluctuation(intensity);
        self.beta = self.beta + noise.fluctuation(intensity);
        if self.norm_sqr() == 0.0 {
            *self = Self::new();
        }
        self.normalize();
    }

    /// Estado em notação ket, ex. `0.707|0⟩ + 0.707|1⟩`
    pub fn state_string(&self) -> String {
        self.state_string_with(SimulatorConfig::from_env().display_threshold)
    }

    /// Notação ket omitindo amplitudes com módulo até `threshold`
    pub fn state_string_with(&self, threshold: f64) -> String {
        let terms: Vec<String> = [(self.alpha, "0"), (self.beta, "1")]
            .into_iter()
            .filter(|(amp, _)| !amp.is_negligible(threshold))
            .map(|(amp, label)| format_term(amp, label, threshold))
            .collect();

        if terms.is_empty() {
            "0|0⟩".to_string()
        } else {
            terms.join(" + ")
        }
    }
}
