//! Cryptographic error types.

use thiserror::Error;

/// Errors that can occur during cryptographic operations.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Key has the wrong length for the requested operation.
    #[error("invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength {
        /// Length the operation requires.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },

    /// Algorithm name is not one of the supported variants.
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Input is structurally invalid (bad encoding, truncated blob).
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// Decryption failed. Carries no cause: bad padding, bad key and
    /// corrupted ciphertext are indistinguishable to the caller.
    #[error("decryption failed")]
    DecryptionFailed,

    /// The OS entropy source failed.
    #[error("entropy source unavailable")]
    EntropyUnavailable,
}
