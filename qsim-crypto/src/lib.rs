//! # 🔐 qsim-crypto — Chaves quânticas e one-time pad
//!
//! Aleatoriedade por colapso de superposição, distribuição de chaves BB84
//! e cifragem one-time pad sobre a chave resultante.
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │  keygen   H|0⟩ ─► medir ─► bit                  │
//! ├─────────────────────────────────────────────────┤
//! │  bb84     geração ─► canal ─► peneira ─► QBER   │
//! │           Channel: Ideal | Noisy | Intercept    │
//! ├─────────────────────────────────────────────────┤
//! │  otp      UTF-8 ─► bits ⊕ chave                 │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Exemplo
//!
//! ```
//! use qsim_crypto::{decrypt, encrypt, simulate_key_exchange};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(84);
//! let exchange = simulate_key_exchange(64, &mut rng)?;
//! let cipher = encrypt("hi", &exchange.key)?;
//! assert_eq!(decrypt(&cipher, &exchange.key)?, "hi");
//! # Ok::<(), qsim_crypto::CryptoError>(())
//! ```

pub mod bb84;
pub mod error;
pub mod keygen;
pub mod otp;

pub use bb84::{Bb84, Bb84Config, Channel, KeyExchange, exchange_with_noise, simulate_key_exchange};
pub use error::{CryptoError, CryptoResult};
pub use keygen::{generate_random_key, random_bit};
pub use otp::{bits_to_bytes, bytes_to_bits, decrypt, encrypt};

#[cfg(test)]
mod tests;
