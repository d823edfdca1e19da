//! Persisted entities of the travel store.
//!
//! # Responsibility
//! - Define the `User` and `Trip` records shared by every layer.
//! - Hold the field-level invariants checked before persistence.
//!
//! # Invariants
//! - A user is identified by its email; a trip by its store-assigned id.
//! - A trip references its owner by email value only.

pub mod trip;
pub mod user;

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Field-level validation failure for an entity about to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelValidationError {
    BlankEmail,
    BlankPassword,
    BlankOwner,
    BlankDestination,
    NonPositiveTravelers(i64),
}

impl Display for ModelValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankEmail => write!(f, "email must not be blank"),
            Self::BlankPassword => write!(f, "password must not be blank"),
            Self::BlankOwner => write!(f, "trip owner email must not be blank"),
            Self::BlankDestination => write!(f, "trip destination must not be blank"),
            Self::NonPositiveTravelers(value) => {
                write!(f, "travelers must be at least 1, got {value}")
            }
        }
    }
}

impl Error for ModelValidationError {}
