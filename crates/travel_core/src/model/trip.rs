//! Trip entity and booking form conversion.
//!
//! # Responsibility
//! - Define the persisted trip row and its insert payload.
//! - Convert raw booking-form strings into a trip payload.
//!
//! # Invariants
//! - `travelers` is always >= 1 once a payload is built from a form.
//! - Dates are kept as entered (`YYYY-MM-DD` text); they are not calendar-checked.

use super::ModelValidationError;
use serde::{Deserialize, Serialize};

/// Store-assigned surrogate key of a trip row.
pub type TripId = i64;

/// Traveler count used when the form input does not parse.
pub const DEFAULT_TRAVELERS: i64 = 1;

/// A trip row as read back from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: TripId,
    pub user_email: String,
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    pub travelers: i64,
    pub notes: String,
}

/// Insert payload for a trip; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTrip {
    pub user_email: String,
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    pub travelers: i64,
    pub notes: String,
}

impl NewTrip {
    pub fn validate(&self) -> Result<(), ModelValidationError> {
        if self.user_email.trim().is_empty() {
            return Err(ModelValidationError::BlankOwner);
        }
        if self.destination.trim().is_empty() {
            return Err(ModelValidationError::BlankDestination);
        }
        if self.travelers < 1 {
            return Err(ModelValidationError::NonPositiveTravelers(self.travelers));
        }
        Ok(())
    }
}

/// Raw strings collected by the trip details screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripForm {
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    pub travelers: String,
    pub notes: String,
}

impl TripForm {
    /// Whether the form may be submitted. Only the dates are required.
    pub fn is_submittable(&self) -> bool {
        !self.start_date.trim().is_empty() && !self.end_date.trim().is_empty()
    }

    /// Builds the insert payload for `owner_email`.
    ///
    /// Unparseable or non-positive traveler input becomes `DEFAULT_TRAVELERS`.
    pub fn into_new_trip(self, owner_email: impl Into<String>) -> NewTrip {
        NewTrip {
            user_email: owner_email.into(),
            travelers: parse_travelers(&self.travelers),
            destination: self.destination,
            start_date: self.start_date,
            end_date: self.end_date,
            notes: self.notes,
        }
    }
}

/// Parses a traveler count, falling back to `DEFAULT_TRAVELERS`.
pub fn parse_travelers(raw: &str) -> i64 {
    match raw.trim().parse::<i64>() {
        Ok(value) if value >= 1 => value,
        _ => DEFAULT_TRAVELERS,
    }
}
