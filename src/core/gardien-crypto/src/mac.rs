//! HMAC generation and verification.
//!
//! Digest comparison is constant time: verification never leaks the
//! position of the first mismatching byte.

use std::fmt;
use std::str::FromStr;

use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};
use subtle::ConstantTimeEq;

use crate::error::CryptoError;

type HmacSha256 = Hmac<Sha256>;
type HmacSha384 = Hmac<Sha384>;
type HmacSha512 = Hmac<Sha512>;

/// Supported HMAC digest algorithms.
///
/// The set is closed: adding an algorithm is an enumeration change checked
/// at compile time, not a string comparison at run time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HmacAlgorithm {
    /// HMAC-SHA256 (default, 32-byte digest).
    Sha256,
    /// HMAC-SHA384 (48-byte digest).
    Sha384,
    /// HMAC-SHA512 (64-byte digest).
    Sha512,
}

impl HmacAlgorithm {
    /// Returns the digest length in bytes.
    pub fn digest_len(&self) -> usize {
        match self {
            Self::Sha256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }
}

impl Default for HmacAlgorithm {
    fn default() -> Self {
        Self::Sha256
    }
}

impl fmt::Display for HmacAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sha256 => write!(f, "sha256"),
            Self::Sha384 => write!(f, "sha384"),
            Self::Sha512 => write!(f, "sha512"),
        }
    }
}

impl FromStr for HmacAlgorithm {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sha256" => Ok(Self::Sha256),
            "sha384" => Ok(Self::Sha384),
            "sha512" => Ok(Self::Sha512),
            _ => Err(CryptoError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

/// Computes the HMAC of `data` under `key`.
///
/// HMAC accepts keys of any length, so this cannot fail.
pub fn sign(data: &[u8], key: &[u8], algorithm: HmacAlgorithm) -> Vec<u8> {
    match algorithm {
        HmacAlgorithm::Sha256 => {
            let mut mac =
                HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");
            mac.update(data);
            mac.finalize().into_bytes().to_vec()
        },
        HmacAlgorithm::Sha384 => {
            let mut mac =
                HmacSha384::new_from_slice(key).expect("HMAC can take key of any size");
            mac.update(data);
            mac.finalize().into_bytes().to_vec()
        },
        HmacAlgorithm::Sha512 => {
            let mut mac =
                HmacSha512::new_from_slice(key).expect("HMAC can take key of any size");
            mac.update(data);
            mac.finalize().into_bytes().to_vec()
        },
    }
}

/// Verifies a candidate digest against the HMAC of `data` under `key`.
///
/// The comparison runs in constant time over the digest bytes. A candidate
/// of the wrong length is rejected before any byte is inspected.
pub fn verify(data: &[u8], key: &[u8], algorithm: HmacAlgorithm, candidate: &[u8]) -> bool {
    let computed = sign(data, key, algorithm);
    constant_time_eq(&computed, candidate)
}

/// Compares two byte slices in constant time.
///
/// Slices of different lengths are unequal; equal-length slices are
/// compared without data-dependent branching, so timing does not reveal
/// where the inputs first differ.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
