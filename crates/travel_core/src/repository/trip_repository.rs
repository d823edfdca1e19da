//! Trip repository.

use super::{run_blocking, RepoResult};
use crate::dao::trip_dao::{SqliteTripDao, TripDao};
use crate::db::DbConn;
use crate::model::trip::{NewTrip, Trip, TripId};

/// Async wrapper around `trips` data access.
#[derive(Clone)]
pub struct TripRepository {
    conn: DbConn,
}

impl TripRepository {
    pub fn new(conn: DbConn) -> Self {
        Self { conn }
    }

    /// Inserts a trip and returns its store-assigned id.
    pub async fn add_trip(&self, trip: NewTrip) -> RepoResult<TripId> {
        run_blocking(&self.conn, move |conn| {
            SqliteTripDao::new(conn).insert_trip(&trip)
        })
        .await
    }

    /// Returns every trip owned by `email`, oldest first.
    pub async fn get_trips_for_user(&self, email: impl Into<String>) -> RepoResult<Vec<Trip>> {
        let email = email.into();
        run_blocking(&self.conn, move |conn| {
            SqliteTripDao::new(conn).get_trips_by_user(&email)
        })
        .await
    }
}
