//! Trip list view state.
//!
//! # Responsibility
//! - Insert trips and keep the owner's trip list loaded.
//! - Turn a booking form into a trip for the active session.
//!
//! # Invariants
//! - `add_trip` is insert-then-reload; a failed reload does not undo the insert.
//! - `load_trips` replaces the list wholesale; the last completed call wins.

use super::cell::StateCell;
use super::session::SessionContext;
use crate::model::trip::{NewTrip, Trip, TripForm, TripId};
use crate::repository::trip_repository::TripRepository;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const SAVE_FAILED_MESSAGE: &str = "Could not save trip";
pub const LOAD_FAILED_MESSAGE: &str = "Could not load trips";

/// Why a booking was not stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookTripError {
    NotLoggedIn,
    MissingDates,
    SaveFailed,
}

impl Display for BookTripError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotLoggedIn => write!(f, "User not logged in"),
            Self::MissingDates => write!(f, "Start and end dates are required"),
            Self::SaveFailed => write!(f, "{SAVE_FAILED_MESSAGE}"),
        }
    }
}

impl Error for BookTripError {}

/// View state for trip planning and the trip list.
pub struct TripViewState {
    repo: TripRepository,
    trips: StateCell<Vec<Trip>>,
    error_message: StateCell<Option<String>>,
}

impl TripViewState {
    pub fn new(repo: TripRepository) -> Self {
        Self {
            repo,
            trips: StateCell::new(Vec::new()),
            error_message: StateCell::new(None),
        }
    }

    pub fn trips(&self) -> &StateCell<Vec<Trip>> {
        &self.trips
    }

    pub fn error_message(&self) -> &StateCell<Option<String>> {
        &self.error_message
    }

    /// Stores `trip`, then reloads the owner's list.
    ///
    /// Returns the new id, or `None` when the insert failed.
    pub async fn add_trip(&self, trip: NewTrip) -> Option<TripId> {
        let owner = trip.user_email.clone();
        let id = match self.repo.add_trip(trip).await {
            Ok(id) => id,
            Err(err) => {
                warn!("event=trip_add module=state status=error error={}", err);
                self.error_message.set(Some(SAVE_FAILED_MESSAGE.to_string()));
                return None;
            }
        };
        info!("event=trip_add module=state status=ok trip_id={id}");

        self.load_trips(&owner).await;
        Some(id)
    }

    /// Replaces the held list with the trips owned by `email`.
    ///
    /// A successful load clears the error cell. Returns `false` and keeps the
    /// previous list when the query fails.
    pub async fn load_trips(&self, email: &str) -> bool {
        match self.repo.get_trips_for_user(email).await {
            Ok(trips) => {
                info!(
                    "event=trip_load module=state status=ok count={}",
                    trips.len()
                );
                self.trips.set(trips);
                self.error_message.set(None);
                true
            }
            Err(err) => {
                warn!("event=trip_load module=state status=error error={}", err);
                self.error_message.set(Some(LOAD_FAILED_MESSAGE.to_string()));
                false
            }
        }
    }

    /// Books the form for the active session user.
    pub async fn book_trip(
        &self,
        session: &SessionContext,
        form: TripForm,
    ) -> Result<TripId, BookTripError> {
        let Some(owner) = session.current_email() else {
            return Err(BookTripError::NotLoggedIn);
        };
        if !form.is_submittable() {
            return Err(BookTripError::MissingDates);
        }

        self.add_trip(form.into_new_trip(owner))
            .await
            .ok_or(BookTripError::SaveFailed)
    }

    /// Drops the loaded list, e.g. when the session ends.
    pub fn clear(&self) {
        self.trips.set(Vec::new());
    }
}
