//! Argon2id password hashing and verification.
//!
//! Every hash draws a fresh random salt, so hashing the same password
//! twice yields different credentials. The digest comparison inside
//! verification is constant time (provided by the argon2 crate).

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version, ARGON2ID_IDENT,
};
use tracing::debug;

use crate::error::PasswordError;

/// Hashes a password with Argon2id and default cost parameters.
///
/// Returns a PHC-format credential string carrying the algorithm tag,
/// cost parameters, salt and digest.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    hash_password_with(password, &Params::default())
}

/// Hashes a password with Argon2id and explicit cost parameters.
pub fn hash_password_with(password: &str, params: &Params) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params.clone());

    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| PasswordError::Hash(e.to_string()))?;

    Ok(hash.to_string())
}

/// Verifies a password against a stored credential.
///
/// Fails closed: a credential that does not parse is `false`, never an
/// error, since stored values may be attacker controlled.
pub fn verify_password(password: &str, credential: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(credential) else {
        debug!("credential rejected: unparsable PHC string");
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

/// Returns `true` when a stored credential should be re-hashed.
///
/// A credential needs re-hashing when any of its cost parameters is below
/// the target, when it was produced by a different algorithm, or when it
/// does not parse at all.
pub fn needs_rehash(credential: &str, target: &Params) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(credential) else {
        return true;
    };

    if parsed_hash.algorithm != ARGON2ID_IDENT {
        return true;
    }

    let Ok(stored) = Params::try_from(&parsed_hash) else {
        return true;
    };

    stored.m_cost() < target.m_cost()
        || stored.t_cost() < target.t_cost()
        || stored.p_cost() < target.p_cost()
}
