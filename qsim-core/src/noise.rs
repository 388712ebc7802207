//! Injeção de ruído (decoerência)
//!
//! O motor nunca aplica ruído por conta própria: o chamador passa um
//! [`NoiseSource`] explicitamente para [`Qubit::apply_noise`](crate::Qubit::apply_noise)
//! ou [`QuantumRegister::apply_noise`](crate::QuantumRegister::apply_noise).
//! A perturbação é somada a cada amplitude e o estado é renormalizado.

use crate::complex::Complex;
use rand::Rng;
use std::f64::consts::TAU;

/// Fonte de perturbações complexas, parametrizada por intensidade
pub trait NoiseSource {
    /// Perturbação a ser somada a uma amplitude
    fn fluctuation(&mut self, intensity: f64) -> Complex;
}

impl<F> NoiseSource for F
where
    F: FnMut(f64) -> Complex,
{
    fn fluctuation(&mut self, intensity: f64) -> Complex {
        self(intensity)
    }
}

/// Constante de escala do modelo de flutuação do vácuo
pub const OMEGA: f64 = 117.038;

/// Modelo padrão de flutuação do vácuo
///
/// Fases sorteadas uniformemente e reescaladas por Ω; o módulo cresce
/// linearmente com a intensidade e é atenuado por `ln Ω`.
#[derive(Debug, Clone)]
pub struct VacuumFluctuation<R> {
    rng: R,
}

impl<R: Rng> VacuumFluctuation<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> NoiseSource for VacuumFluctuation<R> {
    fn fluctuation(&mut self, intensity: f64) -> Complex {
        let phase1 = crate::uniform(&mut self.rng) * TAU / (OMEGA / 100.0);
        let phase2 = crate::uniform(&mut self.rng) * TAU * (OMEGA % 1.0);
        let magnitude = crate::uniform(&mut self.rng) * intensity / OMEGA.ln();

        Complex::new(
            magnitude * (phase1 + phase2).cos(),
            magnitude * (phase1 - phase2).sin(),
        )
    }
}
