//! Cryptographically secure random generation.
//!
//! Uses the operating system's CSPRNG for all random number generation.
//! There is no fallback generator: if the OS primitive fails, the call
//! fails with [`CryptoError::EntropyUnavailable`].

use rand::{rngs::OsRng, RngCore};
use zeroize::Zeroizing;

use crate::cipher::{IV_SIZE, KEY_SIZE};
use crate::error::CryptoError;

/// Fills `buf` with cryptographically secure random bytes.
pub fn fill_bytes(buf: &mut [u8]) -> Result<(), CryptoError> {
    OsRng
        .try_fill_bytes(buf)
        .map_err(|_| CryptoError::EntropyUnavailable)
}

/// Generates `len` cryptographically secure random bytes.
pub fn generate_bytes(len: usize) -> Result<Vec<u8>, CryptoError> {
    let mut bytes = vec![0u8; len];
    fill_bytes(&mut bytes)?;
    Ok(bytes)
}

/// Generates a cryptographically secure random 256-bit key.
///
/// The key is wrapped in `Zeroizing` to ensure it is cleared from memory
/// when dropped.
pub fn generate_key() -> Result<Zeroizing<[u8; KEY_SIZE]>, CryptoError> {
    let mut key = Zeroizing::new([0u8; KEY_SIZE]);
    fill_bytes(&mut *key)?;
    Ok(key)
}

/// Generates a fresh random initialization vector for CBC encryption.
pub fn generate_iv() -> Result<[u8; IV_SIZE], CryptoError> {
    let mut iv = [0u8; IV_SIZE];
    fill_bytes(&mut iv)?;
    Ok(iv)
}

/// Generates a cryptographically secure random token as a hex string.
///
/// # Arguments
///
/// * `byte_len` - Number of random bytes (output string will be 2x this length)
pub fn generate_token(byte_len: usize) -> Result<String, CryptoError> {
    let bytes = generate_bytes(byte_len)?;
    Ok(hex_encode(&bytes))
}

/// Encodes bytes as lowercase hexadecimal.
fn hex_encode(bytes: &[u8]) -> String {
    const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";
    let mut hex = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        hex.push(HEX_CHARS[(byte >> 4) as usize] as char);
        hex.push(HEX_CHARS[(byte & 0x0F) as usize] as char);
    }
    hex
}
