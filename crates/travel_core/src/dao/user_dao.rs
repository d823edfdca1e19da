//! User data access.
//!
//! # Invariants
//! - `users.email` is the primary key; duplicate inserts are rejected by the store.
//! - `get_user` never distinguishes an unknown email from a wrong password,
//!   in its result or in the hashing work it performs.

use super::{DaoError, DaoResult};
use crate::credential::{hash_password, verify_password, verify_unknown_account};
use crate::model::user::{User, UserRecord};
use rusqlite::{params, Connection, OptionalExtension};

/// Data access contract for the `users` table.
pub trait UserDao {
    fn insert_user(&self, user: &User) -> DaoResult<()>;
    fn get_user(&self, email: &str, password: &str) -> DaoResult<Option<UserRecord>>;
}

/// SQLite-backed user data access.
pub struct SqliteUserDao<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteUserDao<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl UserDao for SqliteUserDao<'_> {
    fn insert_user(&self, user: &User) -> DaoResult<()> {
        user.validate()?;
        let password_hash =
            hash_password(&user.password).map_err(|err| DaoError::Credential(err.to_string()))?;

        self.conn.execute(
            "INSERT INTO users (email, password) VALUES (?1, ?2);",
            params![user.email.as_str(), password_hash],
        )?;
        Ok(())
    }

    fn get_user(&self, email: &str, password: &str) -> DaoResult<Option<UserRecord>> {
        let record = self
            .conn
            .query_row(
                "SELECT email, password FROM users WHERE email = ?1;",
                [email],
                |row| {
                    Ok(UserRecord {
                        email: row.get(0)?,
                        password_hash: row.get(1)?,
                    })
                },
            )
            .optional()?;

        let Some(record) = record else {
            verify_unknown_account(password);
            return Ok(None);
        };

        let matches = verify_password(&record.password_hash, password).map_err(|err| {
            DaoError::InvalidData(format!("unreadable hash in users.password: {err}"))
        })?;
        Ok(matches.then_some(record))
    }
}
