//! Data access contracts and SQLite implementations.
//!
//! # Responsibility
//! - Define per-entity insert and lookup operations.
//! - Keep SQL text and row mapping inside the persistence boundary.
//!
//! # Invariants
//! - Write paths validate the entity before any SQL mutation.
//! - Each operation is a single statement; nothing spans a transaction.

pub mod trip_dao;
pub mod user_dao;

use crate::db::DbError;
use crate::model::ModelValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type DaoResult<T> = Result<T, DaoError>;

/// Error raised by a data access operation.
#[derive(Debug)]
pub enum DaoError {
    Validation(ModelValidationError),
    Db(DbError),
    Credential(String),
    InvalidData(String),
}

impl DaoError {
    /// Returns whether the store rejected the write on a constraint.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::Db(err) if err.is_constraint_violation())
    }
}

impl Display for DaoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::Credential(message) => write!(f, "credential error: {message}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for DaoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::Credential(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<ModelValidationError> for DaoError {
    fn from(value: ModelValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for DaoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for DaoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
