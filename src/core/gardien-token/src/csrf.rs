//! Anti-forgery (CSRF) token issuance and verification.
//!
//! A token is a random nonce issued for a protected form or session
//! context; verification is a single constant-time equality check against
//! the session-stored counterpart. Tokens are not consumable: callers
//! that want one-time semantics enforce them externally.

use gardien_crypto::{mac, random};

use crate::error::TokenError;

/// Number of random bytes in a CSRF token before encoding.
pub const CSRF_TOKEN_BYTES: usize = 32;

/// Issues a fresh CSRF token: 32 random bytes, hex-encoded.
pub fn issue() -> Result<String, TokenError> {
    Ok(random::generate_token(CSRF_TOKEN_BYTES)?)
}

/// Verifies a candidate token against the session-stored token.
///
/// Constant time; argument order is irrelevant; an empty string on
/// either side is always `false`.
pub fn verify(candidate: &str, session_token: &str) -> bool {
    if candidate.is_empty() || session_token.is_empty() {
        return false;
    }
    mac::constant_time_eq(candidate.as_bytes(), session_token.as_bytes())
}
