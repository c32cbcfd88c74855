//! Token error types.

use thiserror::Error;

use gardien_crypto::CryptoError;

/// Errors that can occur while producing a token.
///
/// Decoding and verification never produce an error: a token that does
/// not parse, is tampered with, or carries a bad signature is `None`.
#[derive(Debug, Error)]
pub enum TokenError {
    /// Payload could not be serialized.
    #[error("payload serialization failed: {0}")]
    Serialize(String),

    /// A cryptographic primitive failed (entropy exhaustion).
    #[error(transparent)]
    Crypto(#[from] CryptoError),
}
