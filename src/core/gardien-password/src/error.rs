//! Password hashing error types.

use thiserror::Error;

/// Errors that can occur while hashing a password.
///
/// Verification never produces an error: a credential that cannot be
/// parsed or does not match yields `false`.
#[derive(Debug, Error)]
pub enum PasswordError {
    /// The underlying hash function failed.
    #[error("password hashing failed: {0}")]
    Hash(String),
}
