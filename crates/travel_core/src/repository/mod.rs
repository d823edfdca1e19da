//! Async repositories over the data access layer.
//!
//! # Responsibility
//! - Translate domain calls one-to-one into data access calls.
//! - Move blocking SQLite work off the async executor.
//!
//! # Invariants
//! - Repositories add no business rules beyond error translation.
//! - All statements go through the shared `DbConn` mutex.

pub mod trip_repository;
pub mod user_repository;

use crate::dao::{DaoError, DaoResult};
use crate::db::DbConn;
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

pub type RepoResult<T> = Result<T, RepoError>;

/// Error surfaced by a repository call.
#[derive(Debug)]
pub enum RepoError {
    Dao(DaoError),
    LockPoisoned,
    Join(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dao(err) => write!(f, "{err}"),
            Self::LockPoisoned => write!(f, "database connection lock is poisoned"),
            Self::Join(message) => write!(f, "database task failed: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Dao(err) => Some(err),
            Self::LockPoisoned | Self::Join(_) => None,
        }
    }
}

impl From<DaoError> for RepoError {
    fn from(value: DaoError) -> Self {
        Self::Dao(value)
    }
}

/// Runs one data access operation on the blocking pool.
async fn run_blocking<T, F>(conn: &DbConn, op: F) -> RepoResult<T>
where
    T: Send + 'static,
    F: FnOnce(&Connection) -> DaoResult<T> + Send + 'static,
{
    let conn = Arc::clone(conn);
    tokio::task::spawn_blocking(move || {
        let guard = conn.lock().map_err(|_| RepoError::LockPoisoned)?;
        op(&guard).map_err(RepoError::from)
    })
    .await
    .map_err(|err| RepoError::Join(err.to_string()))?
}
