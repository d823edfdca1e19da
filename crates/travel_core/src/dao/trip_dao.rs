//! Trip data access.
//!
//! # Invariants
//! - Trip ids are assigned by the store on insert.
//! - Owner lookups use exact email equality and return rows in insertion order.

use super::{DaoError, DaoResult};
use crate::model::trip::{NewTrip, Trip, TripId};
use rusqlite::{params, Connection, Row};

const TRIP_SELECT_SQL: &str = "SELECT
    id,
    userEmail,
    destination,
    startDate,
    endDate,
    travelers,
    notes
FROM trips";

/// Data access contract for the `trips` table.
pub trait TripDao {
    fn insert_trip(&self, trip: &NewTrip) -> DaoResult<TripId>;
    fn get_trips_by_user(&self, email: &str) -> DaoResult<Vec<Trip>>;
}

/// SQLite-backed trip data access.
pub struct SqliteTripDao<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTripDao<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TripDao for SqliteTripDao<'_> {
    fn insert_trip(&self, trip: &NewTrip) -> DaoResult<TripId> {
        trip.validate()?;

        self.conn.execute(
            "INSERT INTO trips (
                userEmail,
                destination,
                startDate,
                endDate,
                travelers,
                notes
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                trip.user_email.as_str(),
                trip.destination.as_str(),
                trip.start_date.as_str(),
                trip.end_date.as_str(),
                trip.travelers,
                trip.notes.as_str(),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn get_trips_by_user(&self, email: &str) -> DaoResult<Vec<Trip>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TRIP_SELECT_SQL} WHERE userEmail = ?1 ORDER BY id ASC;"))?;
        let mut rows = stmt.query([email])?;
        let mut trips = Vec::new();

        while let Some(row) = rows.next()? {
            trips.push(parse_trip_row(row)?);
        }

        Ok(trips)
    }
}

fn parse_trip_row(row: &Row<'_>) -> DaoResult<Trip> {
    let id: TripId = row.get("id")?;
    let travelers: i64 = row.get("travelers")?;
    if travelers < 1 {
        return Err(DaoError::InvalidData(format!(
            "invalid travelers value `{travelers}` in trips.travelers for id {id}"
        )));
    }

    Ok(Trip {
        id,
        user_email: row.get("userEmail")?,
        destination: row.get("destination")?,
        start_date: row.get("startDate")?,
        end_date: row.get("endDate")?,
        travelers,
        notes: row.get("notes")?,
    })
}
