//! # Gardien Token
//!
//! Compact signed tokens and anti-forgery (CSRF) tokens.
//!
//! The codec produces JWT-shaped tokens signed with HMAC-SHA256. It does
//! not implement registered claims, expiry, or algorithm negotiation:
//! callers put those in the payload and validate them after decode.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod codec;
pub mod csrf;
pub mod error;

pub use codec::SigningAlgorithm;
pub use error::TokenError;
