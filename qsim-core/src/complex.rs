//! # Complex — Amplitudes complexas
//!
//! Tipo valor imutável usado como amplitude em todo o simulador.
//! Conversões com `num_complex::Complex64` permitem interoperar com
//! código numérico externo.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// Número complexo simples
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    /// Zero complexo
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };

    /// Um complexo
    pub const ONE: Self = Self { re: 1.0, im: 0.0 };

    /// Unidade imaginária
    pub const I: Self = Self { re: 0.0, im: 1.0 };

    /// Cria número complexo
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Forma polar: r·(cos θ + i sin θ)
    pub fn from_polar(r: f64, theta: f64) -> Self {
        Self {
            re: r * theta.cos(),
            im: r * theta.sin(),
        }
    }

    /// Exponencial complexa: e^(iθ)
    pub fn cis(theta: f64) -> Self {
        Self::from_polar(1.0, theta)
    }

    /// Conjugado
    pub fn conj(self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }

    /// Módulo ao quadrado (probabilidade de Born)
    pub fn norm_sqr(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Módulo
    pub fn magnitude(self) -> f64 {
        self.norm_sqr().sqrt()
    }

    /// Fase (argumento)
    pub fn arg(self) -> f64 {
        self.im.atan2(self.re)
    }

    /// Multiplicação por escalar
    pub fn scale(self, s: f64) -> Self {
        Self {
            re: self.re * s,
            im: self.im * s,
        }
    }

    /// Verifica se o número é (quase) nulo
    pub fn is_negligible(self, threshold: f64) -> bool {
        self.re.abs() <= threshold && self.im.abs() <= threshold
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }
}

impl AddAssign for Complex {
    fn add_assign(&mut self, other: Self) {
        self.re += other.re;
        self.im += other.im;
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            re: self.re - other.re,
            im: self.im - other.im,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            re: self.re * other.re - self.im * other.im,
            im: self.re * other.im + self.im * other.re,
        }
    }
}

impl Mul<f64> for Complex {
    type Output = Self;

    fn mul(self, s: f64) -> Self {
        self.scale(s)
    }
}

impl Neg for Complex {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            re: -self.re,
            im: -self.im,
        }
    }
}

impl From<Complex64> for Complex {
    fn from(c: Complex64) -> Self {
        Self { re: c.re, im: c.im }
    }
}

impl From<Complex> for Complex64 {
    fn from(c: Complex) -> Self {
        Complex64::new(c.re, c.im)
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.im.is_sign_negative() { '-' } else { '+' };
        write!(f, "{:.3}{}{:.3}i", self.re, sign, self.im.abs())
    }
}

/// Renderiza uma amplitude em notação ket: `0.707|01⟩` ou `(0.500-0.500i)|1⟩`
pub(crate) fn format_term(amplitude: Complex, label: &str, threshold: f64) -> String {
    if amplitude.im.abs() < threshold {
        format!("{:.3}|{}⟩", amplitude.re, label)
    } else {
        format!("({})|{}⟩", amplitude, label)
    }
}
