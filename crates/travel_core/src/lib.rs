//! Core persistence and view-state layer for the travel planner app.
//! UI and FFI layers call into this crate; it owns the on-device store.

pub mod app;
pub mod catalog;
pub mod config;
pub mod credential;
pub mod dao;
pub mod db;
pub mod expense;
pub mod logging;
pub mod model;
pub mod repository;
pub mod state;

pub use app::TravelApp;
pub use config::CoreConfig;
pub use dao::trip_dao::{SqliteTripDao, TripDao};
pub use dao::user_dao::{SqliteUserDao, UserDao};
pub use dao::{DaoError, DaoResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::trip::{parse_travelers, NewTrip, Trip, TripForm, TripId, DEFAULT_TRAVELERS};
pub use model::user::{User, UserRecord};
pub use model::ModelValidationError;
pub use repository::trip_repository::TripRepository;
pub use repository::user_repository::UserRepository;
pub use repository::{RepoError, RepoResult};
pub use state::cell::StateCell;
pub use state::session::{display_name, SessionContext};
pub use state::trip_state::{
    BookTripError, TripViewState, LOAD_FAILED_MESSAGE, SAVE_FAILED_MESSAGE,
};
pub use state::user_state::{
    UserViewState, INVALID_CREDENTIALS_MESSAGE, REGISTRATION_FAILED_MESSAGE,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
