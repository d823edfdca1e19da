//! Login and signup view state.
//!
//! # Responsibility
//! - Run login/registration through `UserRepository`.
//! - Publish success flags and the last error message.
//! - Begin and end the shared session.
//!
//! # Invariants
//! - Login failure never reveals whether the email exists.
//! - A failed login keeps any previously begun session; only `logout` ends it.
//! - `logout` leaves `error_message` untouched.

use super::cell::StateCell;
use super::session::SessionContext;
use crate::model::user::User;
use crate::repository::user_repository::UserRepository;
use log::{info, warn};
use std::sync::Arc;

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials";
pub const REGISTRATION_FAILED_MESSAGE: &str = "Registration failed (email already used)";

/// View state for the login and signup screens.
pub struct UserViewState {
    repo: UserRepository,
    session: Arc<SessionContext>,
    login_success: StateCell<bool>,
    signup_success: StateCell<bool>,
    error_message: StateCell<Option<String>>,
}

impl UserViewState {
    pub fn new(repo: UserRepository, session: Arc<SessionContext>) -> Self {
        Self {
            repo,
            session,
            login_success: StateCell::new(false),
            signup_success: StateCell::new(false),
            error_message: StateCell::new(None),
        }
    }

    pub fn login_success(&self) -> &StateCell<bool> {
        &self.login_success
    }

    pub fn signup_success(&self) -> &StateCell<bool> {
        &self.signup_success
    }

    pub fn error_message(&self) -> &StateCell<Option<String>> {
        &self.error_message
    }

    pub fn session(&self) -> &Arc<SessionContext> {
        &self.session
    }

    /// Attempts to log in with exact credentials.
    pub async fn login(&self, email: &str, password: &str) {
        let found = match self.repo.login_user(email, password).await {
            Ok(found) => found,
            Err(err) => {
                warn!("event=user_login module=state status=error error={}", err);
                None
            }
        };

        match found {
            Some(user) => {
                self.session.begin(user.email);
                self.login_success.set(true);
                self.error_message.set(None);
                info!("event=user_login module=state status=ok");
            }
            None => {
                self.error_message
                    .set(Some(INVALID_CREDENTIALS_MESSAGE.to_string()));
                self.login_success.set(false);
                info!("event=user_login module=state status=rejected");
            }
        }
    }

    /// Registers a new user. Duplicate emails are rejected by the store.
    pub async fn register(&self, user: User) {
        if self.repo.register_user(user).await {
            self.error_message.set(None);
            self.signup_success.set(true);
        } else {
            self.error_message
                .set(Some(REGISTRATION_FAILED_MESSAGE.to_string()));
            self.signup_success.set(false);
        }
    }

    /// Ends the session. Idempotent.
    pub fn logout(&self) {
        self.session.end();
        self.login_success.set(false);
        info!("event=user_logout module=state status=ok");
    }

    pub fn current_user_email(&self) -> Option<String> {
        self.session.current_email()
    }

    /// Acknowledges a signup so the flag can fire again on the next one.
    pub fn reset_signup_success(&self) {
        self.signup_success.set(false);
    }
}
