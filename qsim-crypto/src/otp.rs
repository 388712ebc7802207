//! One-time pad sobre bits
//!
//! A mensagem é codificada em UTF-8 e cada byte vira 8 bits (MSB
//! primeiro); cifragem e decifragem são o mesmo XOR com a chave.

use crate::error::{CryptoError, CryptoResult};

/// Bytes → bits, MSB primeiro
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<u8> {
    bytes
        .iter()
        .flat_map(|&byte| (0..8).rev().map(move |shift| (byte >> shift) & 1))
        .collect()
}

/// Bits → bytes; um último grupo incompleto é montado só com os bits presentes
pub fn bits_to_bytes(bits: &[u8]) -> Vec<u8> {
    bits.chunks(8)
        .map(|chunk| chunk.iter().fold(0u8, |acc, &bit| (acc << 1) | (bit & 1)))
        .collect()
}

fn check_key(key: &[u8], required: usize) -> CryptoResult<()> {
    if key.len() < required {
        return Err(CryptoError::KeyLength {
            key: key.len(),
            required,
        });
    }
    check_bits(&key[..required])
}

fn check_bits(bits: &[u8]) -> CryptoResult<()> {
    match bits.iter().position(|&bit| bit > 1) {
        Some(position) => Err(CryptoError::InvalidBit {
            position,
            value: bits[position],
        }),
        None => Ok(()),
    }
}

fn xor(bits: &[u8], key: &[u8]) -> Vec<u8> {
    bits.iter().zip(key).map(|(b, k)| b ^ k).collect()
}

/// Cifra `message`; a chave precisa ter ao menos 8 bits por byte
pub fn encrypt(message: &str, key: &[u8]) -> CryptoResult<Vec<u8>> {
    check_key(key, message.len() * 8)?;
    Ok(xor(&bytes_to_bits(message.as_bytes()), key))
}

/// Decifra bits produzidos por [`encrypt`]
pub fn decrypt(bits: &[u8], key: &[u8]) -> CryptoResult<String> {
    check_key(key, bits.len())?;
    check_bits(bits)?;
    let plain = bits_to_bytes(&xor(bits, key));
    Ok(String::from_utf8(plain)?)
}
