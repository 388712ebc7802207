//! # QuantumRegister — Vetor de estado de n qubits
//!
//! Buffer denso de `2^n` amplitudes indexado pelo estado de base.
//!
//! ## Convenção de bits
//!
//! ```text
//! índice = b0 b1 ... b(n-1)      (binário, b0 = bit mais significativo)
//! qubit 0     → bit 2^(n-1)
//! qubit n-1   → bit 2^0
//! ```
//!
//! ## Computational Complexity
//!
//! - Gates de um qubit: O(2^n), buffer novo por aplicação
//! - Gates diagonais (Z, S, T, P, Rz, CP): O(2^n) in-place
//! - CNOT / Toffoli / SWAP: O(2^n) por trocas in-place
//! - Medição: O(2^n)
//! - Memória: 16 · 2^n bytes

use crate::complex::{Complex, format_term};
use crate::config::SimulatorConfig;
use crate::error::{QuantumError, QuantumResult};
use crate::gates::{
    Hadamard, Matrix2x2, PauliX, PauliY, PauliZ, Phase, QuantumGate, RotationX, RotationY,
    RotationZ, SGate, TGate,
};
use crate::noise::NoiseSource;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// Registrador quântico de n qubits
#[derive(Clone, Debug, PartialEq)]
pub struct QuantumRegister {
    num_qubits: usize,
    amplitudes: Vec<Complex>,
    config: SimulatorConfig,
}

/// Cópia somente-leitura do estado, para visualização e serialização
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisterSnapshot {
    pub num_qubits: usize,
    pub amplitudes: Vec<Complex>,
    pub probabilities: Vec<f64>,
    pub ket: String,
}

impl QuantumRegister {
    /// Cria registrador em |0…0⟩ com a configuração do ambiente
    pub fn new(num_qubits: usize) -> QuantumResult<Self> {
        Self::with_config(num_qubits, &SimulatorConfig::from_env())
    }

    /// Cria registrador em |0…0⟩ com configuração customizada
    pub fn with_config(num_qubits: usize, config: &SimulatorConfig) -> QuantumResult<Self> {
        let max = Self::max_qubits(config);
        if num_qubits == 0 || num_qubits > max {
            return Err(QuantumError::InvalidQubitCount {
                requested: num_qubits,
                max,
            });
        }

        let mut amplitudes = vec![Complex::ZERO; 1 << num_qubits];
        amplitudes[0] = Complex::ONE;

        tracing::debug!(num_qubits, num_states = amplitudes.len(), "register allocated");

        Ok(Self {
            num_qubits,
            amplitudes,
            config: config.clone(),
        })
    }

    /// Produto tensorial de qubits isolados; o primeiro vira o qubit 0
    pub fn from_qubits(qubits: &[crate::Qubit]) -> QuantumResult<Self> {
        let Some((first, rest)) = qubits.split_first() else {
            return Err(QuantumError::InvalidQubitCount {
                requested: 0,
                max: Self::max_qubits(&SimulatorConfig::from_env()),
            });
        };

        let mut register = Self::new(1)?;
        register.amplitudes = vec![first.alpha(), first.beta()];
        for qubit in rest {
            register.add_qubit(qubit)?;
        }
        Ok(register)
    }

    fn max_qubits(config: &SimulatorConfig) -> usize {
        config.max_qubits.min(usize::BITS as usize - 1)
    }

    /// Anexa um qubit como novo bit menos significativo: |ψ⟩ ⊗ |φ⟩
    pub fn add_qubit(&mut self, qubit: &crate::Qubit) -> QuantumResult<()> {
        let max = Self::max_qubits(&self.config);
        if self.num_qubits + 1 > max {
            return Err(QuantumError::InvalidQubitCount {
                requested: self.num_qubits + 1,
                max,
            });
        }

        let (alpha, beta) = (qubit.alpha(), qubit.beta());
        self.amplitudes = self
            .amplitudes
            .iter()
            .flat_map(|&amp| [amp * alpha, amp * beta])
            .collect();
        self.num_qubits += 1;
        self.normalize();
        Ok(())
    }

    // =========================================================================
    // Acesso somente-leitura
    // =========================================================================

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Configuração aplicada a este registrador
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// 2^n
    pub fn num_states(&self) -> usize {
        self.amplitudes.len()
    }

    pub fn amplitudes(&self) -> &[Complex] {
        &self.amplitudes
    }

    pub fn amplitude(&self, index: usize) -> QuantumResult<Complex> {
        self.check_basis_state(index)?;
        Ok(self.amplitudes[index])
    }

    /// |amplitude|² de cada estado de base
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|amp| amp.norm_sqr()).collect()
    }

    pub fn probability(&self, index: usize) -> QuantumResult<f64> {
        Ok(self.amplitude(index)?.norm_sqr())
    }

    /// Σ|amplitude|²
    pub fn total_probability(&self) -> f64 {
        self.amplitudes.iter().map(|amp| amp.norm_sqr()).sum()
    }

    /// Verifica o invariante de normalização
    pub fn is_normalized(&self) -> bool {
        (self.total_probability() - 1.0).abs() < self.config.tolerance
    }

    /// Estado em notação ket, omitindo amplitudes desprezíveis
    pub fn state_string(&self) -> String {
        let threshold = self.config.display_threshold;
        let terms: Vec<String> = self
            .amplitudes
            .iter()
            .enumerate()
            .filter(|(_, amp)| !amp.is_negligible(threshold))
            .map(|(index, &amp)| format_term(amp, &self.basis_label(index), threshold))
            .collect();

        if terms.is_empty() {
            format!("1.000|{}⟩", "0".repeat(self.num_qubits))
        } else {
            terms.join(" + ")
        }
    }

    pub fn snapshot(&self) -> RegisterSnapshot {
        RegisterSnapshot {
            num_qubits: self.num_qubits,
            amplitudes: self.amplitudes.clone(),
            probabilities: self.probabilities(),
            ket: self.state_string(),
        }
    }

    fn basis_label(&self, index: usize) -> String {
        format!("{:0width$b}", index, width = self.num_qubits)
    }

    // =========================================================================
    // Validação
    // =========================================================================

    /// Posição do bit do qubit no índice de base (qubit 0 = MSB)
    fn bit_position(&self, qubit: usize) -> usize {
        self.num_qubits - 1 - qubit
    }

    fn mask(&self, qubit: usize) -> usize {
        1 << self.bit_position(qubit)
    }

    fn check_qubit(&self, qubit: usize) -> QuantumResult<()> {
        if qubit >= self.num_qubits {
            return Err(QuantumError::InvalidQubit {
                index: qubit,
                num_qubits: self.num_qubits,
            });
        }
        Ok(())
    }

    fn check_distinct(&self, qubits: &[usize]) -> QuantumResult<()> {
        for (i, &qubit) in qubits.iter().enumerate() {
            self.check_qubit(qubit)?;
            if qubits[..i].contains(&qubit) {
                return Err(QuantumError::DuplicateQubit(qubit));
            }
        }
        Ok(())
    }

    fn check_range(&self, start: usize, count: usize) -> QuantumResult<()> {
        match start.checked_add(count) {
            Some(end) if end <= self.num_qubits => Ok(()),
            _ => Err(QuantumError::InvalidRange {
                start,
                count,
                num_qubits: self.num_qubits,
            }),
        }
    }

    fn check_basis_state(&self, index: usize) -> QuantumResult<()> {
        if index >= self.num_states() {
            return Err(QuantumError::InvalidBasisState {
                index,
                num_states: self.num_states(),
            });
        }
        Ok(())
    }

    // =========================================================================
    // Gates de um qubit
    // =========================================================================

    /// Aplica uma porta 2×2 arbitrária ao qubit alvo
    pub fn apply_gate<G: QuantumGate + ?Sized>(&mut self, target: usize, gate: &G) -> QuantumResult<()> {
        self.check_qubit(target)?;
        let matrix = gate.matrix();
        if matrix.is_diagonal() {
            self.apply_diagonal(target, matrix);
        } else {
            self.apply_dense(target, matrix);
        }
        Ok(())
    }

    /// Pares (state, state ^ mask) acumulados num buffer novo
    fn apply_dense(&mut self, target: usize, matrix: Matrix2x2) {
        let mask = self.mask(target);
        let [[a, b], [c, d]] = matrix.elements;
        let mut next = vec![Complex::ZERO; self.num_states()];

        for (state, &amp) in self.amplitudes.iter().enumerate() {
            let flipped = state ^ mask;
            if state & mask == 0 {
                // |0⟩ → a|0⟩ + c|1⟩
                next[state] += a * amp;
                next[flipped] += c * amp;
            } else {
                // |1⟩ → b|0⟩ + d|1⟩
                next[flipped] += b * amp;
                next[state] += d * amp;
            }
        }

        self.amplitudes = next;
    }

    /// Gates diagonais só reescalam: in-place
    fn apply_diagonal(&mut self, target: usize, matrix: Matrix2x2) {
        let mask = self.mask(target);
        let d0 = matrix.elements[0][0];
        let d1 = matrix.elements[1][1];

        for (state, amp) in self.amplitudes.iter_mut().enumerate() {
            let factor = if state & mask == 0 { d0 } else { d1 };
            if factor != Complex::ONE {
                *amp = *amp * factor;
            }
        }
    }

    pub fn hadamard(&mut self, target: usize) -> QuantumResult<()> {
        self.apply_gate(target, &Hadamard)
    }

    pub fn pauli_x(&mut self, target: usize) -> QuantumResult<()> {
        self.apply_gate(target, &PauliX)
    }

    pub fn pauli_y(&mut self, target: usize) -> QuantumResult<()> {
        self.apply_gate(target, &PauliY)
    }

    pub fn pauli_z(&mut self, target: usize) -> QuantumResult<()> {
        self.apply_gate(target, &PauliZ)
    }

    /// P(φ) no qubit alvo
    pub fn phase(&mut self, target: usize, angle: f64) -> QuantumResult<()> {
        self.apply_gate(target, &Phase::new(angle))
    }

    pub fn rx(&mut self, target: usize, angle: f64) -> QuantumResult<()> {
        self.apply_gate(target, &RotationX::new(angle))
    }

    pub fn ry(&mut self, target: usize, angle: f64) -> QuantumResult<()> {
        self.apply_gate(target, &RotationY::new(angle))
    }

    pub fn rz(&mut self, target: usize, angle: f64) -> QuantumResult<()> {
        self.apply_gate(target, &RotationZ::new(angle))
    }

    /// Porta S (fase π/2)
    pub fn s(&mut self, target: usize) -> QuantumResult<()> {
        self.apply_gate(target, &SGate)
    }

    /// Porta T (fase π/4)
    pub fn t(&mut self, target: usize) -> QuantumResult<()> {
        self.apply_gate(target, &TGate)
    }

    // =========================================================================
    // Gates de dois e três qubits
    // =========================================================================

    /// Controlled-NOT
    pub fn cnot(&mut self, control: usize, target: usize) -> QuantumResult<()> {
        self.check_distinct(&[control, target])?;
        let control_mask = self.mask(control);
        let target_mask = self.mask(target);

        for state in 0..self.num_states() {
            if state & control_mask != 0 && state & target_mask == 0 {
                self.amplitudes.swap(state, state | target_mask);
            }
        }
        Ok(())
    }

    /// Toffoli (CCNOT)
    pub fn toffoli(&mut self, control1: usize, control2: usize, target: usize) -> QuantumResult<()> {
        self.check_distinct(&[control1, control2, target])?;
        let controls = self.mask(control1) | self.mask(control2);
        let target_mask = self.mask(target);

        for state in 0..self.num_states() {
            if state & controls == controls && state & target_mask == 0 {
                self.amplitudes.swap(state, state | target_mask);
            }
        }
        Ok(())
    }

    /// Troca direta dos bits dos dois qubits
    pub fn swap(&mut self, qubit1: usize, qubit2: usize) -> QuantumResult<()> {
        self.check_distinct(&[qubit1, qubit2])?;
        let mask1 = self.mask(qubit1);
        let mask2 = self.mask(qubit2);

        // |..1..0..⟩ ↔ |..0..1..⟩; cada par visitado uma única vez
        for state in 0..self.num_states() {
            if state & mask1 != 0 && state & mask2 == 0 {
                self.amplitudes.swap(state, state ^ mask1 ^ mask2);
            }
        }
        Ok(())
    }

    /// Fase e^(iθ) quando controle e alvo estão em |1⟩
    pub fn controlled_phase(&mut self, control: usize, target: usize, angle: f64) -> QuantumResult<()> {
        self.check_distinct(&[control, target])?;
        let both = self.mask(control) | self.mask(target);
        self.scale_where(both, Complex::cis(angle));
        Ok(())
    }

    /// Controlled-Z (fase exata -1)
    pub fn cz(&mut self, control: usize, target: usize) -> QuantumResult<()> {
        self.check_distinct(&[control, target])?;
        let both = self.mask(control) | self.mask(target);
        self.scale_where(both, -Complex::ONE);
        Ok(())
    }

    fn scale_where(&mut self, mask: usize, factor: Complex) {
        for (state, amp) in self.amplitudes.iter_mut().enumerate() {
            if state & mask == mask {
                *amp = *amp * factor;
            }
        }
    }

    // =========================================================================
    // QFT parcial
    // =========================================================================

    /// QFT inversa sobre `start..start+count`, sem inversão final dos bits.
    ///
    /// O qubit `start + k` termina com o k-ésimo bit menos significativo da
    /// fase; quem precisa da ordem padrão aplica [`reverse_qubits`](Self::reverse_qubits).
    pub fn qft_inverse_partial(&mut self, start: usize, count: usize) -> QuantumResult<()> {
        self.check_range(start, count)?;
        for i in start..start + count {
            for j in start..i {
                let angle = -PI / 2f64.powi((i - j) as i32);
                self.controlled_phase(j, i, angle)?;
            }
            self.hadamard(i)?;
        }
        Ok(())
    }

    /// Inversa exata de [`qft_inverse_partial`](Self::qft_inverse_partial)
    pub fn qft_partial(&mut self, start: usize, count: usize) -> QuantumResult<()> {
        self.check_range(start, count)?;
        for i in (start..start + count).rev() {
            self.hadamard(i)?;
            for j in (start..i).rev() {
                let angle = PI / 2f64.powi((i - j) as i32);
                self.controlled_phase(j, i, angle)?;
            }
        }
        Ok(())
    }

    /// Inverte a ordem dos qubits `start..start+count` com SWAPs
    pub fn reverse_qubits(&mut self, start: usize, count: usize) -> QuantumResult<()> {
        self.check_range(start, count)?;
        for k in 0..count / 2 {
            self.swap(start + k, start + count - 1 - k)?;
        }
        Ok(())
    }

    // =========================================================================
    // Mutação limitada (oráculos)
    // =========================================================================

    /// Multiplica por e^(iθ) as amplitudes dos índices dados (cada índice uma vez)
    pub fn apply_phase_to_indices(&mut self, indices: &[usize], angle: f64) -> QuantumResult<()> {
        self.rescale_indices(indices, Complex::cis(angle))
    }

    /// Inverte o sinal das amplitudes dos índices dados (cada índice uma vez)
    pub fn flip_sign(&mut self, indices: &[usize]) -> QuantumResult<()> {
        self.rescale_indices(indices, -Complex::ONE)
    }

    fn rescale_indices(&mut self, indices: &[usize], factor: Complex) -> QuantumResult<()> {
        for &index in indices {
            self.check_basis_state(index)?;
        }

        let mut unique = indices.to_vec();
        unique.sort_unstable();
        unique.dedup();
        for index in unique {
            self.amplitudes[index] = self.amplitudes[index] * factor;
        }
        Ok(())
    }

    /// Move a amplitude do índice `i` para `map(i)`, acumulando colisões.
    ///
    /// Preserva a norma apenas se `map` for injetivo no suporte do estado.
    /// Imagens fora do espaço de estados são rejeitadas antes de qualquer escrita.
    pub fn permute_basis<F>(&mut self, map: F) -> QuantumResult<()>
    where
        F: Fn(usize) -> usize,
    {
        let num_states = self.num_states();
        let mut next = vec![Complex::ZERO; num_states];

        for (index, &amp) in self.amplitudes.iter().enumerate() {
            let image = map(index);
            if image >= num_states {
                return Err(QuantumError::InvalidBasisState {
                    index: image,
                    num_states,
                });
            }
            next[image] += amp;
        }

        self.amplitudes = next;
        Ok(())
    }

    // =========================================================================
    // Normalização e ruído
    // =========================================================================

    /// Reescala por 1/√(Σ|amp|²); no-op se a norma já for ~1 ou nula
    pub fn normalize(&mut self) {
        let norm = self.total_probability().sqrt();
        if norm > 0.0 && (norm - 1.0).abs() > f64::EPSILON {
            let inv = 1.0 / norm;
            for amp in &mut self.amplitudes {
                *amp = amp.scale(inv);
            }
        }
    }

    /// Soma uma perturbação a cada amplitude e renormaliza
    pub fn apply_noise<N: NoiseSource + ?Sized>(&mut self, noise: &mut N, intensity: f64) {
        for amp in &mut self.amplitudes {
            *amp += noise.fluctuation(intensity);
        }
        if self.total_probability() == 0.0 {
            self.amplitudes[0] = Complex::ONE;
        }
        self.normalize();
    }

    // =========================================================================
    // Medição
    // =========================================================================

    /// Mede todos os qubits (amostragem pela CDF inversa) e colapsa o estado.
    ///
    /// Retorna os bits com o qubit 0 primeiro.
    pub fn measure_all<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<u8> {
        let draw = crate::uniform(rng);
        let mut cumulative = 0.0;
        let mut last_populated = 0;
        let mut measured = None;

        for (index, amp) in self.amplitudes.iter().enumerate() {
            let probability = amp.norm_sqr();
            if probability > 0.0 {
                last_populated = index;
            }
            cumulative += probability;
            if draw < cumulative {
                measured = Some(index);
                break;
            }
        }

        // Arredondamento pode deixar Σp ligeiramente abaixo do sorteio
        let measured = measured.unwrap_or(last_populated);

        self.amplitudes.fill(Complex::ZERO);
        self.amplitudes[measured] = Complex::ONE;

        tracing::debug!(outcome = %self.basis_label(measured), "register collapsed");

        index_to_bits(measured, self.num_qubits)
    }

    /// Mede um único qubit, colapsando apenas o subespaço correspondente
    pub fn measure_qubit<R: Rng + ?Sized>(&mut self, target: usize, rng: &mut R) -> QuantumResult<u8> {
        self.check_qubit(target)?;
        let mask = self.mask(target);

        let prob0: f64 = self
            .amplitudes
            .iter()
            .enumerate()
            .filter(|(state, _)| state & mask == 0)
            .map(|(_, amp)| amp.norm_sqr())
            .sum();

        let outcome: u8 = if crate::uniform(rng) < prob0 { 0 } else { 1 };

        let mut surviving = 0.0;
        for (state, amp) in self.amplitudes.iter_mut().enumerate() {
            let bit = u8::from(state & mask != 0);
            if bit == outcome {
                surviving += amp.norm_sqr();
            } else {
                *amp = Complex::ZERO;
            }
        }

        if surviving > 0.0 {
            let inv = 1.0 / surviving.sqrt();
            for amp in &mut self.amplitudes {
                *amp = amp.scale(inv);
            }
        }

        tracing::debug!(qubit = target, outcome, prob0, "qubit measured");
        Ok(outcome)
    }

    /// Paridade esperada de todos os qubits, sem colapsar
    pub fn check_parity(&self) -> u8 {
        let expected: f64 = self
            .amplitudes
            .iter()
            .enumerate()
            .filter(|(state, _)| state.count_ones() % 2 == 1)
            .map(|(_, amp)| amp.norm_sqr())
            .sum();
        u8::from(expected.round() >= 1.0)
    }
}

impl fmt::Display for QuantumRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.state_string())
    }
}

/// Decompõe um índice de base em bits, MSB primeiro
pub fn index_to_bits(index: usize, width: usize) -> Vec<u8> {
    (0..width)
        .rev()
        .map(|shift| ((index >> shift) & 1) as u8)
        .collect()
}

/// Recompõe um índice de base a partir de bits MSB-first (qualquer valor ≠ 0 conta como 1)
pub fn bits_to_index(bits: &[u8]) -> usize {
    bits.iter()
        .fold(0, |acc, &bit| (acc << 1) | usize::from(bit != 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;
    use std::f64::consts::FRAC_1_SQRT_2;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-10
    }

    #[test]
    fn test_initial_state() {
        for n in 1..=6 {
            let reg = QuantumRegister::new(n).unwrap();
            assert_eq!(reg.num_states(), 1 << n);
            assert_eq!(reg.amplitudes()[0], Complex::ONE);
            assert!(reg.amplitudes()[1..].iter().all(|a| *a == Complex::ZERO));
            assert!(close(reg.total_probability(), 1.0));
        }
    }

    #[test]
    fn test_invalid_qubit_count() {
        assert!(matches!(
            QuantumRegister::new(0),
            Err(QuantumError::InvalidQubitCount { requested: 0, .. })
        ));
        let config = SimulatorConfig {
            max_qubits: 4,
            ..SimulatorConfig::default()
        };
        assert!(QuantumRegister::with_config(5, &config).is_err());
        assert!(QuantumRegister::with_config(4, &config).is_ok());
    }

    #[test]
    fn test_new_reads_environment_config() {
        let reg = QuantumRegister::new(2).unwrap();
        assert_eq!(reg.config(), &SimulatorConfig::from_env());
    }

    #[test]
    fn test_config_controls_limits_and_rendering() {
        let config = SimulatorConfig {
            max_qubits: 2,
            display_threshold: 0.9,
            ..SimulatorConfig::default()
        };
        assert!(matches!(
            QuantumRegister::with_config(3, &config),
            Err(QuantumError::InvalidQubitCount { requested: 3, max: 2 })
        ));

        let mut reg = QuantumRegister::with_config(2, &config).unwrap();
        assert!(matches!(
            reg.add_qubit(&crate::Qubit::new()),
            Err(QuantumError::InvalidQubitCount { requested: 3, max: 2 })
        ));

        // 0.707 fica abaixo do limiar: nenhum termo é exibido
        reg.hadamard(0).unwrap();
        assert_eq!(reg.state_string(), "1.000|00⟩");

        let mut reg = QuantumRegister::with_config(2, &SimulatorConfig::default()).unwrap();
        reg.hadamard(0).unwrap();
        assert_eq!(reg.state_string(), "0.707|00⟩ + 0.707|10⟩");
    }

    #[test]
    fn test_bit_ordering_msb_first() {
        let mut reg = QuantumRegister::new(3).unwrap();
        reg.pauli_x(0).unwrap();
        // qubit 0 é o MSB: |100⟩ = índice 4
        assert!(close(reg.probability(4).unwrap(), 1.0));
        assert_eq!(reg.state_string(), "1.000|100⟩");
    }

    #[test]
    fn test_pauli_x_moves_amplitude_exactly() {
        let mut reg = QuantumRegister::new(1).unwrap();
        reg.pauli_x(0).unwrap();
        assert_eq!(reg.amplitudes()[0], Complex::ZERO);
        assert_eq!(reg.amplitudes()[1], Complex::ONE);
    }

    #[test]
    fn test_pauli_sequence() {
        let mut reg = QuantumRegister::new(1).unwrap();
        reg.pauli_x(0).unwrap();
        reg.pauli_z(0).unwrap();
        assert!(close(reg.amplitudes()[1].re, -1.0));
        reg.pauli_y(0).unwrap();
        // Y(-|1⟩) = i|0⟩
        assert!(close(reg.amplitudes()[0].im, 1.0));
    }

    #[test]
    fn test_hadamard_involution() {
        let mut reg = QuantumRegister::new(2).unwrap();
        reg.hadamard(1).unwrap();
        assert!(close(reg.amplitudes()[0].re, FRAC_1_SQRT_2));
        assert!(close(reg.amplitudes()[1].re, FRAC_1_SQRT_2));

        reg.hadamard(1).unwrap();
        assert!(close(reg.amplitudes()[0].re, 1.0));
        assert!(reg.amplitudes()[1].magnitude() < 1e-12);
    }

    #[test]
    fn test_bell_state() {
        let mut reg = QuantumRegister::new(2).unwrap();
        reg.hadamard(0).unwrap();
        reg.cnot(0, 1).unwrap();

        let probs = reg.probabilities();
        assert!(close(probs[0], 0.5));
        assert!(close(probs[1], 0.0));
        assert!(close(probs[2], 0.0));
        assert!(close(probs[3], 0.5));
    }

    #[test]
    fn test_toffoli_and_swap() {
        let mut reg = QuantumRegister::new(3).unwrap();
        reg.pauli_x(0).unwrap();
        reg.pauli_x(1).unwrap();
        reg.toffoli(0, 1, 2).unwrap();
        assert!(close(reg.probability(0b111).unwrap(), 1.0));

        let mut reg = QuantumRegister::new(2).unwrap();
        reg.pauli_x(0).unwrap(); // |10⟩
        reg.swap(0, 1).unwrap(); // |01⟩
        assert!(close(reg.probability(0b01).unwrap(), 1.0));
    }

    #[test]
    fn test_toffoli_requires_both_controls() {
        let mut reg = QuantumRegister::new(3).unwrap();
        reg.pauli_x(0).unwrap();
        reg.toffoli(0, 1, 2).unwrap();
        assert!(close(reg.probability(0b100).unwrap(), 1.0));
    }

    #[test]
    fn test_index_errors_leave_state_untouched() {
        let mut reg = QuantumRegister::new(2).unwrap();
        reg.hadamard(0).unwrap();
        let before = reg.clone();

        assert_eq!(
            reg.pauli_x(2),
            Err(QuantumError::InvalidQubit { index: 2, num_qubits: 2 })
        );
        assert!(reg.swap(0, 2).is_err());
        assert!(reg.cnot(2, 0).is_err());
        assert!(reg.phase(5, 0.5).is_err());
        assert!(reg.rx(2, 0.5).is_err());
        assert_eq!(reg.cnot(1, 1), Err(QuantumError::DuplicateQubit(1)));
        assert!(reg.qft_inverse_partial(1, 2).is_err());
        assert!(reg.flip_sign(&[4]).is_err());
        assert_eq!(reg, before);
    }

    #[test]
    fn test_rotation_gates() {
        let mut reg = QuantumRegister::new(1).unwrap();
        reg.rx(0, PI).unwrap();
        assert!(close(reg.amplitudes()[1].magnitude(), 1.0));

        reg.ry(0, PI).unwrap();
        assert!(reg.amplitudes()[0].magnitude() > 0.9);
    }

    #[test]
    fn test_phase_gates_change_relative_phase_only() {
        let mut reg = QuantumRegister::new(1).unwrap();
        reg.pauli_x(0).unwrap();
        reg.hadamard(0).unwrap(); // |−⟩
        let initial = reg.state_string();

        reg.s(0).unwrap();
        assert_ne!(reg.state_string(), initial);
        reg.t(0).unwrap();
        reg.rz(0, 0.3).unwrap();
        assert!(close(reg.probability(0).unwrap(), 0.5));
        assert!(reg.is_normalized());
    }

    #[test]
    fn test_controlled_phase_only_on_both_set() {
        let mut reg = QuantumRegister::new(2).unwrap();
        reg.hadamard(0).unwrap();
        reg.hadamard(1).unwrap();
        reg.controlled_phase(0, 1, PI / 2.0).unwrap();

        let amps = reg.amplitudes();
        assert!(close(amps[0].re, 0.5));
        assert!(close(amps[2].re, 0.5));
        assert!(close(amps[3].im, 0.5));

        reg.cz(0, 1).unwrap();
        assert!(close(reg.amplitudes()[3].im, -0.5));
    }

    #[test]
    fn test_measure_all_inverse_cdf() {
        let mut reg = QuantumRegister::new(2).unwrap();
        reg.hadamard(0).unwrap();
        reg.cnot(0, 1).unwrap();

        // sorteio 0.0 cai no primeiro estado com probabilidade > 0
        let bits = reg.clone().measure_all(&mut StepRng::new(0, 0));
        assert_eq!(bits, vec![0, 0]);

        // sorteio ~1.0 cai no último estado populado
        let bits = reg.measure_all(&mut StepRng::new(u64::MAX, 0));
        assert_eq!(bits, vec![1, 1]);
        assert_eq!(reg.amplitudes()[3], Complex::ONE);
        assert!(close(reg.total_probability(), 1.0));
    }

    #[test]
    fn test_measure_qubit_partial_collapse() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let mut reg = QuantumRegister::new(2).unwrap();
            reg.hadamard(0).unwrap();
            reg.cnot(0, 1).unwrap();

            let first = reg.measure_qubit(0, &mut rng).unwrap();
            // emaranhamento: o segundo qubit é determinado
            let second = reg.measure_qubit(1, &mut rng).unwrap();
            assert_eq!(first, second);
            assert!(reg.is_normalized());
        }
    }

    #[test]
    fn test_measure_qubit_keeps_superposition_of_rest() {
        let mut reg = QuantumRegister::new(2).unwrap();
        reg.hadamard(0).unwrap();
        reg.hadamard(1).unwrap();

        let outcome = reg.measure_qubit(0, &mut StepRng::new(0, 0)).unwrap();
        assert_eq!(outcome, 0);
        let probs = reg.probabilities();
        assert!(close(probs[0], 0.5));
        assert!(close(probs[1], 0.5));
        assert!(close(probs[2] + probs[3], 0.0));
    }

    #[test]
    fn test_qft_partial_roundtrip() {
        let mut reg = QuantumRegister::new(3).unwrap();
        reg.pauli_x(0).unwrap();
        reg.hadamard(2).unwrap();
        reg.t(2).unwrap();
        let before = reg.clone();

        reg.qft_partial(0, 3).unwrap();
        reg.qft_inverse_partial(0, 3).unwrap();

        for (a, b) in reg.amplitudes().iter().zip(before.amplitudes()) {
            assert!((*a - *b).magnitude() < 1e-10);
        }
    }

    #[test]
    fn test_inverse_qft_yields_reversed_phase_bits() {
        // Estado de fase y/2^m com y = 1 (m = 3): após a QFT inversa parcial
        // o resultado aparece com os bits invertidos (qubit 0 = LSB).
        let m = 3;
        let mut reg = QuantumRegister::new(m).unwrap();
        for q in 0..m {
            reg.hadamard(q).unwrap();
        }
        let n = reg.num_states();
        let phases: Vec<usize> = (0..n).collect();
        for index in phases {
            let angle = 2.0 * PI * index as f64 / n as f64;
            reg.apply_phase_to_indices(&[index], angle).unwrap();
        }

        reg.qft_inverse_partial(0, m).unwrap();
        assert!(close(reg.probability(0b100).unwrap(), 1.0));

        reg.reverse_qubits(0, m).unwrap();
        assert!(close(reg.probability(0b001).unwrap(), 1.0));
    }

    #[test]
    fn test_flip_sign_deduplicates() {
        let mut reg = QuantumRegister::new(1).unwrap();
        reg.hadamard(0).unwrap();
        reg.flip_sign(&[1, 1]).unwrap();
        assert!(close(reg.amplitudes()[1].re, -FRAC_1_SQRT_2));
    }

    #[test]
    fn test_permute_basis_rejects_out_of_range() {
        let mut reg = QuantumRegister::new(2).unwrap();
        let before = reg.clone();
        assert!(matches!(
            reg.permute_basis(|i| i + 4),
            Err(QuantumError::InvalidBasisState { num_states: 4, .. })
        ));
        assert_eq!(reg, before);

        reg.permute_basis(|i| i ^ 0b11).unwrap();
        assert!(close(reg.probability(3).unwrap(), 1.0));
    }

    #[test]
    fn test_tensor_product_construction() {
        let mut plus = crate::Qubit::new();
        plus.hadamard();
        let mut one = crate::Qubit::new();
        one.pauli_x();

        let reg = QuantumRegister::from_qubits(&[plus, one]).unwrap();
        assert_eq!(reg.num_qubits(), 2);
        let probs = reg.probabilities();
        assert!(close(probs[0b01], 0.5));
        assert!(close(probs[0b11], 0.5));
        assert!(QuantumRegister::from_qubits(&[]).is_err());
    }

    #[test]
    fn test_check_parity() {
        let mut reg = QuantumRegister::new(3).unwrap();
        assert_eq!(reg.check_parity(), 0);
        reg.pauli_x(1).unwrap();
        assert_eq!(reg.check_parity(), 1);
        reg.pauli_x(2).unwrap();
        assert_eq!(reg.check_parity(), 0);
    }

    #[test]
    fn test_noise_keeps_normalization() {
        let mut reg = QuantumRegister::new(2).unwrap();
        let mut noise = |intensity: f64| Complex::new(intensity, -intensity);
        reg.apply_noise(&mut noise, 0.05);
        assert!(reg.is_normalized());
        assert!(reg.probability(3).unwrap() > 0.0);
    }

    #[test]
    fn test_bits_helpers() {
        assert_eq!(index_to_bits(6, 4), vec![0, 1, 1, 0]);
        assert_eq!(bits_to_index(&[0, 1, 1, 0]), 6);
        assert_eq!(bits_to_index(&[]), 0);
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut reg = QuantumRegister::new(1).unwrap();
        reg.hadamard(0).unwrap();
        let snapshot = reg.snapshot();
        assert_eq!(snapshot.ket, "0.707|0⟩ + 0.707|1⟩");
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"num_qubits\":1"));
    }
}
