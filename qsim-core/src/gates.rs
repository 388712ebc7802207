//! # Quantum Gates — Portas de um qubit
//!
//! Matrizes 2×2 unitárias usadas tanto pelo [`Qubit`](crate::Qubit)
//! isolado quanto pelo [`QuantumRegister`](crate::QuantumRegister).
//!
//! ## Gates Implementadas
//!
//! - **Clifford**: H (Hadamard), X, Y, Z (Pauli), S
//! - **Fase**: T, P(φ)
//! - **Rotação**: Rx, Ry, Rz

use crate::complex::Complex;
use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_4};

/// Matriz 2x2 complexa para gates single-qubit
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix2x2 {
    /// Elementos: [[a, b], [c, d]]
    pub elements: [[Complex; 2]; 2],
}

impl Matrix2x2 {
    /// Cria matriz a partir dos quatro elementos
    pub const fn new(a: Complex, b: Complex, c: Complex, d: Complex) -> Self {
        Self {
            elements: [[a, b], [c, d]],
        }
    }

    /// Matriz diagonal diag(d0, d1)
    pub const fn diagonal(d0: Complex, d1: Complex) -> Self {
        Self::new(d0, Complex::ZERO, Complex::ZERO, d1)
    }

    /// Cria matriz identidade
    pub const fn identity() -> Self {
        Self::diagonal(Complex::ONE, Complex::ONE)
    }

    /// Aplica gate a um estado [alpha, beta]
    pub fn apply(&self, state: [Complex; 2]) -> [Complex; 2] {
        let [alpha, beta] = state;
        let [[a, b], [c, d]] = self.elements;

        [a * alpha + b * beta, c * alpha + d * beta]
    }

    /// Multiplicação de matrizes
    pub fn mul(&self, other: &Matrix2x2) -> Matrix2x2 {
        let [[a, b], [c, d]] = self.elements;
        let [[e, f], [g, h]] = other.elements;

        Matrix2x2::new(a * e + b * g, a * f + b * h, c * e + d * g, c * f + d * h)
    }

    /// Transposta conjugada (dagger)
    pub fn dagger(&self) -> Matrix2x2 {
        let [[a, b], [c, d]] = self.elements;
        Matrix2x2::new(a.conj(), c.conj(), b.conj(), d.conj())
    }

    /// Gates diagonais só reescalam amplitudes e podem ser aplicadas in-place
    pub fn is_diagonal(&self) -> bool {
        let [[_, b], [c, _]] = self.elements;
        b == Complex::ZERO && c == Complex::ZERO
    }
}

/// Trait para portas quânticas de um qubit
pub trait QuantumGate {
    /// Nome da porta
    fn name(&self) -> &'static str;

    /// Matriz da porta
    fn matrix(&self) -> Matrix2x2;

    /// Verifica se é unitária
    fn is_unitary(&self) -> bool {
        let m = self.matrix();
        let product = m.mul(&m.dagger());

        let [[a, b], [c, d]] = product.elements;
        (a.re - 1.0).abs() < 1e-10
            && a.im.abs() < 1e-10
            && b.norm_sqr() < 1e-10
            && c.norm_sqr() < 1e-10
            && (d.re - 1.0).abs() < 1e-10
            && d.im.abs() < 1e-10
    }

    /// Aplica a um estado
    fn apply(&self, state: [Complex; 2]) -> [Complex; 2] {
        self.matrix().apply(state)
    }
}

// =============================================================================
// Portas Padrão
// =============================================================================

/// Porta Hadamard: cria superposição
#[derive(Clone, Copy, Debug, Default)]
pub struct Hadamard;

impl QuantumGate for Hadamard {
    fn name(&self) -> &'static str {
        "H"
    }

    fn matrix(&self) -> Matrix2x2 {
        let h = Complex::new(FRAC_1_SQRT_2, 0.0);
        Matrix2x2::new(h, h, h, -h)
    }
}

/// Porta Pauli-X (NOT quântico)
#[derive(Clone, Copy, Debug, Default)]
pub struct PauliX;

impl QuantumGate for PauliX {
    fn name(&self) -> &'static str {
        "X"
    }

    fn matrix(&self) -> Matrix2x2 {
        Matrix2x2::new(Complex::ZERO, Complex::ONE, Complex::ONE, Complex::ZERO)
    }
}

/// Porta Pauli-Y
#[derive(Clone, Copy, Debug, Default)]
pub struct PauliY;

impl QuantumGate for PauliY {
    fn name(&self) -> &'static str {
        "Y"
    }

    fn matrix(&self) -> Matrix2x2 {
        Matrix2x2::new(Complex::ZERO, -Complex::I, Complex::I, Complex::ZERO)
    }
}

/// Porta Pauli-Z (phase flip)
#[derive(Clone, Copy, Debug, Default)]
pub struct PauliZ;

impl QuantumGate for PauliZ {
    fn name(&self) -> &'static str {
        "Z"
    }

    fn matrix(&self) -> Matrix2x2 {
        Matrix2x2::diagonal(Complex::ONE, -Complex::ONE)
    }
}

/// Porta S (√Z)
#[derive(Clone, Copy, Debug, Default)]
pub struct SGate;

impl QuantumGate for SGate {
    fn name(&self) -> &'static str {
        "S"
    }

    fn matrix(&self) -> Matrix2x2 {
        Matrix2x2::diagonal(Complex::ONE, Complex::I)
    }
}

/// Porta T (π/8)
#[derive(Clone, Copy, Debug, Default)]
pub struct TGate;

impl QuantumGate for TGate {
    fn name(&self) -> &'static str {
        "T"
    }

    fn matrix(&self) -> Matrix2x2 {
        Matrix2x2::diagonal(Complex::ONE, Complex::cis(FRAC_PI_4))
    }
}

/// Porta de rotação em X
#[derive(Clone, Copy, Debug)]
pub struct RotationX {
    pub theta: f64,
}

impl RotationX {
    pub fn new(theta: f64) -> Self {
        Self { theta }
    }
}

impl QuantumGate for RotationX {
    fn name(&self) -> &'static str {
        "Rx"
    }

    fn matrix(&self) -> Matrix2x2 {
        let c = Complex::new((self.theta / 2.0).cos(), 0.0);
        let s = Complex::new(0.0, -(self.theta / 2.0).sin());
        Matrix2x2::new(c, s, s, c)
    }
}

/// Porta de rotação em Y
#[derive(Clone, Copy, Debug)]
pub struct RotationY {
    pub theta: f64,
}

impl RotationY {
    pub fn new(theta: f64) -> Self {
        Self { theta }
    }
}

impl QuantumGate for RotationY {
    fn name(&self) -> &'static str {
        "Ry"
    }

    fn matrix(&self) -> Matrix2x2 {
        let c = (self.theta / 2.0).cos();
        let s = (self.theta / 2.0).sin();
        Matrix2x2::new(
            Complex::new(c, 0.0),
            Complex::new(-s, 0.0),
            Complex::new(s, 0.0),
            Complex::new(c, 0.0),
        )
    }
}

/// Porta de rotação em Z
#[derive(Clone, Copy, Debug)]
pub struct RotationZ {
    pub theta: f64,
}

impl RotationZ {
    pub fn new(theta: f64) -> Self {
        Self { theta }
    }
}

impl QuantumGate for RotationZ {
    fn name(&self) -> &'static str {
        "Rz"
    }

    fn matrix(&self) -> Matrix2x2 {
        let half = self.theta / 2.0;
        Matrix2x2::diagonal(Complex::cis(-half), Complex::cis(half))
    }
}

/// Porta de fase genérica
#[derive(Clone, Copy, Debug)]
pub struct Phase {
    pub phi: f64,
}

impl Phase {
    pub fn new(phi: f64) -> Self {
        Self { phi }
    }
}

impl QuantumGate for Phase {
    fn name(&self) -> &'static str {
        "P"
    }

    fn matrix(&self) -> Matrix2x2 {
        Matrix2x2::diagonal(Complex::ONE, Complex::cis(self.phi))
    }
}

// =============================================================================
// Testes
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_hadamard_unitary() {
        assert!(Hadamard.is_unitary());
    }

    #[test]
    fn test_pauli_gates_unitary() {
        assert!(PauliX.is_unitary());
        assert!(PauliY.is_unitary());
        assert!(PauliZ.is_unitary());
    }

    #[test]
    fn test_hadamard_creates_superposition() {
        let zero = [Complex::ONE, Complex::ZERO];

        let result = Hadamard.apply(zero);

        // |+⟩ = (|0⟩ + |1⟩)/√2
        assert!((result[0].re - FRAC_1_SQRT_2).abs() < 1e-10);
        assert!((result[1].re - FRAC_1_SQRT_2).abs() < 1e-10);
    }

    #[test]
    fn test_pauli_y_maps_one_to_minus_i_zero() {
        let one = [Complex::ZERO, Complex::ONE];

        let result = PauliY.apply(one);

        // Y|1⟩ = -i|0⟩
        assert!((result[0].im + 1.0).abs() < 1e-10);
        assert!(result[1].norm_sqr() < 1e-10);
    }

    #[test]
    fn test_hadamard_self_inverse() {
        let zero = [Complex::ONE, Complex::ZERO];

        // H² = I
        let result = Hadamard.apply(Hadamard.apply(zero));

        assert!((result[0].re - 1.0).abs() < 1e-10);
        assert!(result[1].norm_sqr() < 1e-10);
    }

    #[test]
    fn test_hadamard_squared_is_identity() {
        let h = Hadamard.matrix();
        let product = h.mul(&h);
        let identity = Matrix2x2::identity();

        for (row, expected) in product.elements.iter().zip(identity.elements.iter()) {
            for (value, want) in row.iter().zip(expected.iter()) {
                assert!((*value - *want).norm_sqr() < 1e-20);
            }
        }
        assert!(identity.is_diagonal());
        assert_eq!(identity.apply([Complex::I, Complex::ONE]), [Complex::I, Complex::ONE]);
    }

    #[test]
    fn test_rotation_gates() {
        assert!(RotationX::new(PI).is_unitary());
        assert!(RotationY::new(PI / 3.0).is_unitary());
        assert!(RotationZ::new(PI).is_unitary());
        assert!(Phase::new(0.7).is_unitary());
    }

    #[test]
    fn test_s_squared_is_z() {
        let s2 = SGate.matrix().mul(&SGate.matrix());
        let z = PauliZ.matrix();

        assert!((s2.elements[1][1].re - z.elements[1][1].re).abs() < 1e-10);
        assert!(s2.elements[1][1].im.abs() < 1e-10);
    }

    #[test]
    fn test_diagonal_detection() {
        assert!(PauliZ.matrix().is_diagonal());
        assert!(TGate.matrix().is_diagonal());
        assert!(RotationZ::new(0.3).matrix().is_diagonal());
        assert!(!Hadamard.matrix().is_diagonal());
        assert!(!RotationX::new(0.3).matrix().is_diagonal());
    }
}
