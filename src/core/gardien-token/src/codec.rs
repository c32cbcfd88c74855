//! Compact signed token codec.
//!
//! Tokens are three base64url segments joined by `.`:
//! `header_b64.payload_b64.signature_b64`. The signature is an HMAC over
//! the ASCII bytes of `header_b64 + "." + payload_b64`, and verification
//! recomputes it over the exact received segments, so the payload bytes
//! that are parsed are the same bytes that were signed.

use std::fmt;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use serde_json::{json, Map, Value};
use tracing::debug;

use gardien_crypto::mac::{self, HmacAlgorithm};

use crate::error::TokenError;

/// Supported token signing algorithms.
///
/// Closed set: adding an algorithm is a compile-time enumeration change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SigningAlgorithm {
    /// HMAC-SHA256.
    Hs256,
}

impl SigningAlgorithm {
    /// Returns the header name for this algorithm.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hs256 => "HS256",
        }
    }

    /// Looks up an algorithm from its header name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "HS256" => Some(Self::Hs256),
            _ => None,
        }
    }

    fn hmac(&self) -> HmacAlgorithm {
        match self {
            Self::Hs256 => HmacAlgorithm::Sha256,
        }
    }
}

impl Default for SigningAlgorithm {
    fn default() -> Self {
        Self::Hs256
    }
}

impl fmt::Display for SigningAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Encodes a payload map as a signed token under `secret`.
pub fn encode(payload: &Map<String, Value>, secret: &[u8]) -> Result<String, TokenError> {
    encode_with(payload, secret, SigningAlgorithm::default())
}

/// Encodes a payload map as a signed token with an explicit algorithm.
///
/// The payload is serialized exactly once; the signature covers the
/// serialized bytes as they appear in the token.
pub fn encode_with(
    payload: &Map<String, Value>,
    secret: &[u8],
    algorithm: SigningAlgorithm,
) -> Result<String, TokenError> {
    let header = json!({ "alg": algorithm.name(), "typ": "JWT" });
    let header_bytes =
        serde_json::to_vec(&header).map_err(|e| TokenError::Serialize(e.to_string()))?;
    let payload_bytes =
        serde_json::to_vec(payload).map_err(|e| TokenError::Serialize(e.to_string()))?;

    let header_b64 = URL_SAFE_NO_PAD.encode(header_bytes);
    let payload_b64 = URL_SAFE_NO_PAD.encode(payload_bytes);

    let signing_input = format!("{header_b64}.{payload_b64}");
    let signature = mac::sign(signing_input.as_bytes(), secret, algorithm.hmac());

    Ok(format!(
        "{signing_input}.{}",
        URL_SAFE_NO_PAD.encode(signature)
    ))
}

/// Decodes and verifies a token, returning its payload map.
///
/// Returns `None` for anything that is not a valid token under `secret`:
/// wrong segment count, unrecognized header, undecodable segments, or a
/// signature mismatch. The signature is compared as decoded raw bytes in
/// constant time, never as base64 text. The payload is parsed only after
/// the signature has been verified.
pub fn decode(token: &str, secret: &[u8]) -> Option<Map<String, Value>> {
    let mut segments = token.split('.');
    let (header_b64, payload_b64, signature_b64) =
        match (segments.next(), segments.next(), segments.next(), segments.next()) {
            (Some(h), Some(p), Some(s), None) => (h, p, s),
            _ => {
                debug!("token rejected: wrong segment count");
                return None;
            },
        };

    let header_bytes = URL_SAFE_NO_PAD.decode(header_b64).ok()?;
    let header: Map<String, Value> = serde_json::from_slice(&header_bytes).ok()?;
    let algorithm = SigningAlgorithm::from_name(header.get("alg")?.as_str()?)?;

    let signature = URL_SAFE_NO_PAD.decode(signature_b64).ok()?;

    // The signing input is the token up to the second dot, byte for byte.
    let signing_input = &token[..header_b64.len() + 1 + payload_b64.len()];
    if !mac::verify(
        signing_input.as_bytes(),
        secret,
        algorithm.hmac(),
        &signature,
    ) {
        debug!("token rejected: signature mismatch");
        return None;
    }

    let payload_bytes = URL_SAFE_NO_PAD.decode(payload_b64).ok()?;
    match serde_json::from_slice(&payload_bytes).ok()? {
        Value::Object(map) => Some(map),
        _ => None,
    }
}
