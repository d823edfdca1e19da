//! Runtime configuration resolved from the process environment.
//!
//! # Responsibility
//! - Resolve where the travel database and log files live.
//! - Pick the log level for the current build.
//!
//! # Invariants
//! - Blank variables are treated as unset.
//! - Resolution never fails; every field has a default.

use crate::logging::default_log_level;
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "TRAVEL_DB_PATH";
pub const LOG_LEVEL_ENV: &str = "TRAVEL_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "TRAVEL_LOG_DIR";
pub const DEFAULT_DB_FILE_NAME: &str = "travel_app_db.sqlite3";

/// Core settings shared by the FFI and CLI entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub db_path: PathBuf,
    pub log_level: String,
    /// Logging stays off when unset.
    pub log_dir: Option<PathBuf>,
}

impl CoreConfig {
    /// Resolves configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            db_path: read(DB_PATH_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME)),
            log_level: read(LOG_LEVEL_ENV).unwrap_or_else(|| default_log_level().to_string()),
            log_dir: read(LOG_DIR_ENV).map(PathBuf::from),
        }
    }
}
