//! Configuração do simulador carregada de `.env` ou variáveis de ambiente
//!
//! - `QSIM_MAX_QUBITS`: maior registrador aceito (default: 24)
//! - `QSIM_TOLERANCE`: tolerância de normalização (default: 1e-9)
//! - `QSIM_DISPLAY_THRESHOLD`: amplitude mínima exibida em notação ket (default: 1e-10)

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

// Carrega .env na primeira leitura de configuração
static DOTENV_INIT: Lazy<()> = Lazy::new(|| {
    let _ = dotenv::dotenv();
});

/// Garante que o ambiente foi carregado
#[inline]
fn ensure_loaded() {
    let _ = &*DOTENV_INIT;
}

/// Lê uma variável de ambiente, caindo no default se ausente ou inválida
pub fn env_or<T: FromStr>(key: &str, default: T) -> T {
    ensure_loaded();
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Limite prático de memória: 2^24 amplitudes × 16 bytes = 256 MiB
pub const DEFAULT_MAX_QUBITS: usize = 24;

/// Tolerância usada pelo invariante de normalização
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Amplitudes abaixo deste módulo são omitidas na notação ket
pub const DEFAULT_DISPLAY_THRESHOLD: f64 = 1e-10;

/// Configuração do simulador
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Número máximo de qubits por registrador
    pub max_qubits: usize,
    /// Tolerância de normalização
    pub tolerance: f64,
    /// Limiar de exibição de amplitudes
    pub display_threshold: f64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            max_qubits: DEFAULT_MAX_QUBITS,
            tolerance: DEFAULT_TOLERANCE,
            display_threshold: DEFAULT_DISPLAY_THRESHOLD,
        }
    }
}

impl SimulatorConfig {
    /// Carrega configuração do ambiente
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            // usize::BITS limita o deslocamento 1 << n
            max_qubits: env_or("QSIM_MAX_QUBITS", defaults.max_qubits)
                .min(usize::BITS as usize - 1),
            tolerance: env_or("QSIM_TOLERANCE", defaults.tolerance),
            display_threshold: env_or("QSIM_DISPLAY_THRESHOLD", defaults.display_threshold),
        }
    }
}
