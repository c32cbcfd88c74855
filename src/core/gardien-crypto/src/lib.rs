//! # Gardien Crypto
//!
//! Core cryptographic primitives for Gardien.
//!
//! This crate provides the low-level building blocks the rest of the
//! workspace is composed from:
//! - Secure random generation (OS CSPRNG)
//! - HMAC generation and constant-time verification
//! - Symmetric encryption (AES-256-CBC)
//! - Zeroizing key types

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cipher;
pub mod error;
pub mod keys;
pub mod mac;
pub mod random;

pub use error::CryptoError;
pub use keys::CipherKey;
pub use mac::HmacAlgorithm;
