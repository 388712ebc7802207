//! # 🔎 qsim-algorithms — Algoritmos quânticos clássicos
//!
//! Camada de algoritmos sobre o [`qsim_core::QuantumRegister`]. Cada
//! algoritmo fala com o registrador apenas pelas portas públicas, pela
//! medição e pelas primitivas limitadas dos oráculos.
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │  DeutschJozsa   BernsteinVazirani   Grover      │
//! │  (FunctionOracle) (InnerProductOracle) (Phase)  │
//! ├─────────────────────────────────────────────────┤
//! │  Qft            Shor ──► PeriodFinder           │
//! ├─────────────────────────────────────────────────┤
//! │           qsim_core::QuantumRegister            │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Exemplo
//!
//! ```
//! use qsim_algorithms::Grover;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! let grover = Grover::for_target(2, 3)?;
//! assert_eq!(grover.execute(&mut rng)?, vec![1, 1]);
//! # Ok::<(), qsim_algorithms::AlgorithmError>(())
//! ```

pub mod bernstein_vazirani;
pub mod deutsch_jozsa;
pub mod error;
pub mod grover;
pub mod qft;
pub mod shor;

pub use bernstein_vazirani::{BernsteinVazirani, InnerProductOracle};
pub use deutsch_jozsa::{BooleanFunction, DeutschJozsa, DeutschJozsaResult, FunctionClass, FunctionOracle};
pub use error::{AlgorithmError, AlgorithmResult};
pub use grover::Grover;
pub use qft::{Qft, inverse_qft, qft};
pub use shor::{Factorization, Shor};
