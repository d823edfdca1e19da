//! Password hashing for stored user credentials.
//!
//! # Invariants
//! - Every stored credential is an Argon2id PHC string with a random salt.
//! - Verification failures are reported as `false`, never as errors.
//!   Only malformed stored hashes are errors.

use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use once_cell::sync::Lazy;

// Hash of a random throwaway password, checked when no stored hash exists.
static DUMMY_HASH: Lazy<Option<String>> = Lazy::new(|| {
    let salt = SaltString::generate(&mut rand::thread_rng());
    hash_password(salt.as_str()).ok()
});

/// Hashes `password` into a PHC string suitable for `users.password`.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut rand::thread_rng());
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Checks `candidate` against a stored PHC string.
pub fn verify_password(
    stored_hash: &str,
    candidate: &str,
) -> Result<bool, argon2::password_hash::Error> {
    let parsed = PasswordHash::new(stored_hash)?;
    Ok(Argon2::default()
        .verify_password(candidate.as_bytes(), &parsed)
        .is_ok())
}

/// Runs a full verification against a throwaway hash and always reports `false`.
///
/// Lookups for unknown accounts call this so they cost the same as a wrong password.
pub fn verify_unknown_account(candidate: &str) -> bool {
    if let Some(hash) = DUMMY_HASH.as_deref() {
        let _ = verify_password(hash, candidate);
    }
    false
}
