//! User repository.

use super::{run_blocking, RepoResult};
use crate::dao::user_dao::{SqliteUserDao, UserDao};
use crate::db::DbConn;
use crate::model::user::{User, UserRecord};
use log::{info, warn};

/// Async wrapper around `users` data access.
#[derive(Clone)]
pub struct UserRepository {
    conn: DbConn,
}

impl UserRepository {
    pub fn new(conn: DbConn) -> Self {
        Self { conn }
    }

    /// Inserts a new user.
    ///
    /// Returns `false` on any failure; the cause is logged and dropped.
    pub async fn register_user(&self, user: User) -> bool {
        let result = run_blocking(&self.conn, move |conn| {
            SqliteUserDao::new(conn).insert_user(&user)
        })
        .await;

        match result {
            Ok(()) => {
                info!("event=user_register module=repository status=ok");
                true
            }
            Err(err) => {
                warn!(
                    "event=user_register module=repository status=error error={}",
                    err
                );
                false
            }
        }
    }

    /// Looks up a user by exact email and password.
    pub async fn login_user(
        &self,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> RepoResult<Option<UserRecord>> {
        let email = email.into();
        let password = password.into();
        run_blocking(&self.conn, move |conn| {
            SqliteUserDao::new(conn).get_user(&email, &password)
        })
        .await
    }
}
