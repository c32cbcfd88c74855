//! Integration tests for the Gardien security core.
//!
//! These tests drive the crates together the way a web application would:
//! registration and login against stored credentials, session tokens,
//! CSRF protection, and encrypt-then-MAC for data at rest.

// Allow unwrap() in tests - panics are acceptable for test assertions
#![allow(clippy::disallowed_methods)]

use std::collections::HashMap;

use anyhow::{bail, Result};
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// Test Harness
// ============================================================================

/// An in-memory account store standing in for the caller's database.
#[derive(Default)]
pub struct AccountStore {
    credentials: HashMap<String, String>,
}

impl AccountStore {
    /// Registers an account, enforcing the strength policy before hashing.
    pub fn register(&mut self, username: &str, password: &str) -> Result<()> {
        if !gardien_password::is_strong(password) {
            bail!("password rejected by policy");
        }
        let credential = gardien_password::hash_password(password)?;
        self.credentials.insert(username.to_string(), credential);
        Ok(())
    }

    /// Attempts a login. Unknown accounts and wrong passwords are both false.
    pub fn login(&self, username: &str, password: &str) -> bool {
        match self.credentials.get(username) {
            Some(credential) => gardien_password::verify_password(password, credential),
            None => false,
        }
    }

    /// Returns the stored credential for inspection.
    pub fn credential(&self, username: &str) -> Option<&str> {
        self.credentials.get(username).map(String::as_str)
    }

    /// Replaces a stored credential (lazy re-hash after login).
    pub fn replace_credential(&mut self, username: &str, credential: String) {
        self.credentials.insert(username.to_string(), credential);
    }
}

/// Claims carried in a session token.
#[derive(Debug, Serialize)]
pub struct SessionClaims {
    pub sub: String,
    pub role: String,
}

/// Issues a signed session token for the given claims.
pub fn issue_session_token(claims: &SessionClaims, secret: &[u8]) -> Result<String> {
    let Value::Object(payload) = serde_json::to_value(claims)? else {
        bail!("claims did not serialize to an object");
    };
    Ok(gardien_token::codec::encode(&payload, secret)?)
}

/// Encrypts a payload and signs the resulting blob (encrypt-then-MAC).
pub fn seal_with_integrity(key: &[u8], plaintext: &[u8]) -> Result<(String, Vec<u8>)> {
    let blob = gardien_crypto::cipher::encrypt(key, plaintext)?;
    let tag = gardien_crypto::mac::sign(
        blob.as_bytes(),
        key,
        gardien_crypto::HmacAlgorithm::Sha256,
    );
    Ok((blob, tag))
}

/// Verifies the blob's tag, then decrypts. Tampering is caught by the MAC
/// before the cipher ever runs.
pub fn open_with_integrity(key: &[u8], blob: &str, tag: &[u8]) -> Result<Vec<u8>> {
    if !gardien_crypto::mac::verify(
        blob.as_bytes(),
        key,
        gardien_crypto::HmacAlgorithm::Sha256,
        tag,
    ) {
        bail!("integrity check failed");
    }
    let plaintext = gardien_crypto::cipher::decrypt(key, blob)?;
    Ok(plaintext.to_vec())
}

// ============================================================================
// Scenario Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    use serde_json::{json, Map};

    #[test]
    fn test_register_login_flow() {
        let mut store = AccountStore::default();
        store.register("alice", "Tr0ub4dor&3").unwrap();

        assert!(store.login("alice", "Tr0ub4dor&3"));
        assert!(!store.login("alice", "Tr0ub4dor&4"));
        assert!(!store.login("bob", "Tr0ub4dor&3"));
    }

    #[test]
    fn test_register_rejects_weak_password() {
        let mut store = AccountStore::default();

        assert!(store.register("alice", "password").is_err());
        assert!(store.register("alice", "Ab1!").is_err());
        assert!(!store.login("alice", "password"));
    }

    #[test]
    fn test_lazy_rehash_on_login() {
        let weak_params = argon2::Params::new(8 * 1024, 1, 1, None).unwrap();
        let target = argon2::Params::default();

        let mut store = AccountStore::default();
        let old_credential =
            gardien_password::hash_password_with("Tr0ub4dor&3", &weak_params).unwrap();
        store.replace_credential("alice", old_credential);

        // Login succeeds against the stale credential, which is then upgraded.
        assert!(store.login("alice", "Tr0ub4dor&3"));
        assert!(gardien_password::needs_rehash(
            store.credential("alice").unwrap(),
            &target
        ));

        let upgraded = gardien_password::hash_password("Tr0ub4dor&3").unwrap();
        store.replace_credential("alice", upgraded);

        assert!(store.login("alice", "Tr0ub4dor&3"));
        assert!(!gardien_password::needs_rehash(
            store.credential("alice").unwrap(),
            &target
        ));
    }

    #[test]
    fn test_session_token_roundtrip() {
        let secret = b"session-signing-secret";
        let claims = SessionClaims {
            sub: "alice".to_string(),
            role: "admin".to_string(),
        };

        let token = issue_session_token(&claims, secret).unwrap();
        let payload = gardien_token::codec::decode(&token, secret).unwrap();

        assert_eq!(payload.get("sub").unwrap(), "alice");
        assert_eq!(payload.get("role").unwrap(), "admin");
    }

    #[test]
    fn test_token_scenario_from_contract() {
        // secret "s3cr3t", payload {"sub":"42"}
        let mut payload = Map::new();
        payload.insert("sub".to_string(), json!("42"));

        let token = gardien_token::codec::encode(&payload, b"s3cr3t").unwrap();
        assert_eq!(token.split('.').count(), 3);

        let decoded = gardien_token::codec::decode(&token, b"s3cr3t").unwrap();
        assert_eq!(decoded, payload);

        assert!(gardien_token::codec::decode(&token, b"wrong").is_none());
    }

    #[test]
    fn test_cipher_scenario_from_contract() {
        // key = 32 zero bytes, plaintext "hello"
        let key = [0u8; 32];
        let blob = gardien_crypto::cipher::encrypt(&key, b"hello").unwrap();
        let plaintext = gardien_crypto::cipher::decrypt(&key, &blob).unwrap();
        assert_eq!(&*plaintext, b"hello");

        let result = gardien_crypto::cipher::encrypt(&[0u8; 16], b"hello");
        assert!(matches!(
            result,
            Err(gardien_crypto::CryptoError::InvalidKeyLength { .. })
        ));
    }

    #[test]
    fn test_csrf_issue_verify_flow() {
        let session_token = gardien_token::csrf::issue().unwrap();

        // Form round-trip: the same token comes back with the submission.
        let submitted = session_token.clone();
        assert!(gardien_token::csrf::verify(&submitted, &session_token));

        // A token from another session must not pass.
        let other = gardien_token::csrf::issue().unwrap();
        assert!(!gardien_token::csrf::verify(&other, &session_token));
        assert!(!gardien_token::csrf::verify("", ""));
    }

    #[test]
    fn test_csrf_uniqueness() {
        let mut seen = HashSet::new();
        for _ in 0..1000 {
            assert!(seen.insert(gardien_token::csrf::issue().unwrap()));
        }
    }

    #[test]
    fn test_encrypt_then_mac_composition() {
        let key = gardien_crypto::CipherKey::generate().unwrap();
        let (blob, tag) = seal_with_integrity(key.as_bytes(), b"attack at dawn").unwrap();

        let opened = open_with_integrity(key.as_bytes(), &blob, &tag).unwrap();
        assert_eq!(opened, b"attack at dawn");
    }

    #[test]
    fn test_encrypt_then_mac_detects_tampering() {
        let key = gardien_crypto::CipherKey::generate().unwrap();
        let (blob, tag) = seal_with_integrity(key.as_bytes(), b"attack at dawn").unwrap();

        // Flip a character of the blob; the MAC must reject it before any
        // decryption is attempted.
        let mut chars: Vec<char> = blob.chars().collect();
        chars[0] = if chars[0] == 'A' { 'B' } else { 'A' };
        let tampered: String = chars.into_iter().collect();

        assert!(open_with_integrity(key.as_bytes(), &tampered, &tag).is_err());
    }

    #[test]
    fn test_distinct_users_distinct_credentials() {
        let mut store = AccountStore::default();
        store.register("alice", "Tr0ub4dor&3").unwrap();
        store.register("bob", "Tr0ub4dor&3").unwrap();

        // Same password, different salts: stored credentials differ.
        assert_ne!(store.credential("alice"), store.credential("bob"));
        assert!(store.login("alice", "Tr0ub4dor&3"));
        assert!(store.login("bob", "Tr0ub4dor&3"));
    }
}
