//! Tipos de erro para qsim-crypto

use std::string::FromUtf8Error;
use thiserror::Error;

/// Resultado customizado para operações criptográficas
pub type CryptoResult<T> = Result<T, CryptoError>;

/// Erros de distribuição de chaves e cifragem
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CryptoError {
    #[error("Key length {key} is too short for a message of {required} bits")]
    KeyLength { key: usize, required: usize },

    #[error("QBER {qber:.3} exceeds threshold {threshold:.3}: possible eavesdropping")]
    SecurityAbort { qber: f64, threshold: f64 },

    #[error("Value {value} at position {position} is not a bit")]
    InvalidBit { position: usize, value: u8 },

    #[error("Decrypted bytes are not valid UTF-8: {0}")]
    InvalidPlaintext(#[from] FromUtf8Error),

    #[error("Invalid BB84 configuration: {0}")]
    InvalidConfig(String),
}
