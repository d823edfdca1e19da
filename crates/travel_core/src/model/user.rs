//! User entity.
//!
//! # Invariants
//! - `email` is the identity key; no two rows share it.
//! - The stored credential is an Argon2 PHC string, never the raw password.

use super::ModelValidationError;
use serde::{Deserialize, Serialize};

/// Registration payload and login credentials.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub password: String,
}

impl User {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Checks the fields required before a user row is inserted.
    pub fn validate(&self) -> Result<(), ModelValidationError> {
        if self.email.trim().is_empty() {
            return Err(ModelValidationError::BlankEmail);
        }
        if self.password.is_empty() {
            return Err(ModelValidationError::BlankPassword);
        }
        Ok(())
    }
}

// Keeps the raw password out of debug logs and panic messages.
impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// A user row as read back from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub email: String,
    /// Argon2 PHC string stored in `users.password`.
    pub password_hash: String,
}
