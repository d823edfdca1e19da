//! Active-user session context.
//!
//! # Responsibility
//! - Track which user is authenticated in the running process.
//! - Derive the greeting name shown on the home screen.
//!
//! # Invariants
//! - The session lives in memory only; it starts empty and is never persisted.
//! - One context is shared by `Arc` between the holders of one app instance.

use super::cell::StateCell;
use tokio::sync::watch;

/// Name shown when nobody is logged in.
pub const GUEST_NAME: &str = "Guest";

/// Explicit session object injected into the components that need identity.
#[derive(Debug, Default)]
pub struct SessionContext {
    email: StateCell<Option<String>>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `email` as the authenticated user.
    pub fn begin(&self, email: impl Into<String>) {
        self.email.set(Some(email.into()));
    }

    /// Clears the authenticated user. Safe to call when already empty.
    pub fn end(&self) {
        self.email.set(None);
    }

    pub fn current_email(&self) -> Option<String> {
        self.email.get()
    }

    pub fn is_active(&self) -> bool {
        self.email.get().is_some()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<String>> {
        self.email.subscribe()
    }

    /// Greeting name for the current session, `GUEST_NAME` when empty.
    pub fn display_name(&self) -> String {
        display_name(self.current_email().as_deref())
    }
}

/// Capitalized local part of `email`, or `GUEST_NAME` without one.
pub fn display_name(email: Option<&str>) -> String {
    let source = email.unwrap_or(GUEST_NAME);
    let local = source.split('@').next().unwrap_or(source);
    let mut chars = local.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
