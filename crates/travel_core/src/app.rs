//! Composition root for one running app instance.
//!
//! # Responsibility
//! - Open the store and wire repositories, session and view-state holders.
//! - Tie session teardown to the holders that depend on it.
//!
//! # Invariants
//! - Exactly one `SessionContext` is shared by all holders of an instance.

use crate::db::{into_shared, open_db, open_db_in_memory, DbConn, DbResult};
use crate::repository::trip_repository::TripRepository;
use crate::repository::user_repository::UserRepository;
use crate::state::session::SessionContext;
use crate::state::trip_state::TripViewState;
use crate::state::user_state::UserViewState;
use std::path::Path;
use std::sync::Arc;

/// Wired view-state for one active UI flow.
pub struct TravelApp {
    session: Arc<SessionContext>,
    users: UserViewState,
    trips: TripViewState,
}

impl TravelApp {
    /// Opens the database file at `path` and wires a fresh instance.
    pub fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        Ok(Self::with_connection(into_shared(open_db(path)?)))
    }

    pub fn open_in_memory() -> DbResult<Self> {
        Ok(Self::with_connection(into_shared(open_db_in_memory()?)))
    }

    pub fn with_connection(conn: DbConn) -> Self {
        let session = Arc::new(SessionContext::new());
        let users = UserViewState::new(UserRepository::new(conn.clone()), Arc::clone(&session));
        let trips = TripViewState::new(TripRepository::new(conn));
        Self {
            session,
            users,
            trips,
        }
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn users(&self) -> &UserViewState {
        &self.users
    }

    pub fn trips(&self) -> &TripViewState {
        &self.trips
    }

    /// Ends the session and drops the trip list loaded for it.
    ///
    /// The last error message is kept, matching `UserViewState::logout`.
    pub fn logout(&self) {
        self.users.logout();
        self.trips.clear();
    }
}
