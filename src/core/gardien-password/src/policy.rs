//! Password strength policy.

/// Returns `true` when a password meets the minimum strength policy.
///
/// The policy requires at least 8 characters and at least one ASCII
/// uppercase letter, one lowercase letter, one digit, and one non-word
/// character (anything outside `[A-Za-z0-9_]`).
///
/// Pure predicate: no secret material, no side effects.
pub fn is_strong(password: &str) -> bool {
    if password.chars().count() < 8 {
        return false;
    }

    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password
        .chars()
        .any(|c| !c.is_ascii_alphanumeric() && c != '_');

    has_upper && has_lower && has_digit && has_special
}
