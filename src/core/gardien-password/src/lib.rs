//! # Gardien Password
//!
//! Adaptive password hashing and strength policy.
//!
//! Credentials are Argon2id PHC strings: self-describing, salted, and
//! never reversible. Verification fails closed on malformed stored
//! values, and the cost parameters embedded in a credential can be
//! compared against a target to drive lazy re-hashing on login.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod hasher;
pub mod policy;

pub use error::PasswordError;
pub use hasher::{hash_password, hash_password_with, needs_rehash, verify_password};
pub use policy::is_strong;
