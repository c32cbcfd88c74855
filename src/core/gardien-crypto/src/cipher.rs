//! AES-256-CBC symmetric encryption.
//!
//! Produces self-contained blobs encoded as base64 of `IV || ciphertext`,
//! with a fresh random IV per call.
//!
//! CBC carries no authentication tag: tampered ciphertext may decrypt to
//! garbage without signalling. Callers that need integrity compose with
//! [`crate::mac`] over the blob (encrypt-then-MAC); the cipher itself
//! promises confidentiality only.

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use aes::Aes256;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use zeroize::Zeroizing;

use crate::error::CryptoError;
use crate::random::generate_iv;

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Size of an AES-256 key in bytes.
pub const KEY_SIZE: usize = 32;

/// Size of a CBC initialization vector in bytes (one AES block).
pub const IV_SIZE: usize = 16;

/// AES block size in bytes.
const BLOCK_SIZE: usize = 16;

fn check_key(key: &[u8]) -> Result<(), CryptoError> {
    if key.len() != KEY_SIZE {
        return Err(CryptoError::InvalidKeyLength {
            expected: KEY_SIZE,
            actual: key.len(),
        });
    }
    Ok(())
}

/// Encrypts plaintext using AES-256-CBC with PKCS#7 padding.
///
/// The IV is drawn fresh from the OS CSPRNG and prepended to the
/// ciphertext. Format before encoding: `IV (16 bytes) || ciphertext`.
///
/// # Arguments
///
/// * `key` - 32-byte encryption key
/// * `plaintext` - Data to encrypt
///
/// # Returns
///
/// Base64-encoded blob containing the IV and ciphertext.
pub fn encrypt(key: &[u8], plaintext: &[u8]) -> Result<String, CryptoError> {
    check_key(key)?;

    let iv = generate_iv()?;

    let cipher = Aes256CbcEnc::new_from_slices(key, &iv).map_err(|_| {
        CryptoError::InvalidKeyLength {
            expected: KEY_SIZE,
            actual: key.len(),
        }
    })?;

    let ciphertext = cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext);

    let mut blob = Vec::with_capacity(IV_SIZE + ciphertext.len());
    blob.extend_from_slice(&iv);
    blob.extend_from_slice(&ciphertext);

    Ok(BASE64.encode(blob))
}

/// Decrypts a blob produced by [`encrypt`].
///
/// Structural problems (bad base64, truncated blob) surface as
/// [`CryptoError::MalformedInput`] before the key is touched. Every
/// failure inside the cryptographic step, padding included, is the bare
/// [`CryptoError::DecryptionFailed`] so that bad padding and a wrong key
/// are indistinguishable.
///
/// # Returns
///
/// Decrypted plaintext wrapped in `Zeroizing` for automatic memory cleanup.
pub fn decrypt(key: &[u8], blob: &str) -> Result<Zeroizing<Vec<u8>>, CryptoError> {
    check_key(key)?;

    let raw = BASE64
        .decode(blob)
        .map_err(|_| CryptoError::MalformedInput("invalid base64".to_string()))?;

    if raw.len() < IV_SIZE + BLOCK_SIZE {
        return Err(CryptoError::MalformedInput("blob too short".to_string()));
    }

    let (iv, ciphertext) = raw.split_at(IV_SIZE);

    if ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(CryptoError::MalformedInput(
            "ciphertext not block-aligned".to_string(),
        ));
    }

    let cipher = Aes256CbcDec::new_from_slices(key, iv).map_err(|_| {
        CryptoError::InvalidKeyLength {
            expected: KEY_SIZE,
            actual: key.len(),
        }
    })?;

    let plaintext = cipher
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| CryptoError::DecryptionFailed)?;

    Ok(Zeroizing::new(plaintext))
}
