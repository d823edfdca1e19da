//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose login, signup, trip booking and screen helpers to Dart via FRB.
//! - Own the single app instance and the runtime its async intents run on.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Failures come back as envelope fields, never as Dart exceptions.

use log::error;
use once_cell::sync::OnceCell;
use tokio::runtime::Runtime;
use travel_core::catalog::{self, Destination};
use travel_core::expense::{ExpenseCategory, ExpenseSheet};
use travel_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    CoreConfig, TravelApp, Trip, TripForm, User,
};

// Only a successfully built context is cached; failed builds are retried.
static CONTEXT: OnceCell<FfiContext> = OnceCell::new();

struct FfiContext {
    runtime: Runtime,
    app: TravelApp,
}

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Snapshot of the login/signup cells after an auth call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthState {
    pub login_success: bool,
    pub signup_success: bool,
    /// Message to show under the form, if any.
    pub error_message: Option<String>,
    pub current_email: Option<String>,
}

/// Trip row as shown in the trip list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripItem {
    pub id: i64,
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    pub travelers: i64,
    pub notes: String,
}

/// Result envelope for trip booking and list loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripResponse {
    pub ok: bool,
    pub trip_id: Option<i64>,
    pub items: Vec<TripItem>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationItem {
    pub name: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseSummary {
    pub total: f64,
    /// Total rendered for display, e.g. `$12.50`.
    pub formatted_total: String,
    /// Labels of fields whose input could not be parsed.
    pub invalid_fields: Vec<String>,
}

/// Registers a user and returns the resulting auth state.
#[flutter_rust_bridge::frb(sync)]
pub fn register(email: String, password: String) -> AuthState {
    with_context(
        |ctx| {
            ctx.runtime
                .block_on(ctx.app.users().register(User::new(email.trim(), password)));
            auth_state(&ctx.app)
        },
        auth_failure,
    )
}

/// Logs in with exact credentials and returns the resulting auth state.
#[flutter_rust_bridge::frb(sync)]
pub fn login(email: String, password: String) -> AuthState {
    with_context(
        |ctx| {
            ctx.runtime
                .block_on(ctx.app.users().login(email.trim(), password.as_str()));
            auth_state(&ctx.app)
        },
        auth_failure,
    )
}

/// Ends the session and clears the loaded trip list.
#[flutter_rust_bridge::frb(sync)]
pub fn logout() -> AuthState {
    with_context(
        |ctx| {
            ctx.app.logout();
            auth_state(&ctx.app)
        },
        auth_failure,
    )
}

/// Acknowledges a completed signup before navigating back to login.
#[flutter_rust_bridge::frb(sync)]
pub fn reset_signup_success() -> AuthState {
    with_context(
        |ctx| {
            ctx.app.users().reset_signup_success();
            auth_state(&ctx.app)
        },
        auth_failure,
    )
}

#[flutter_rust_bridge::frb(sync)]
pub fn current_user_email() -> Option<String> {
    with_context(|ctx| ctx.app.users().current_user_email(), |_| None)
}

/// Greeting name for the home screen, `Guest` when logged out.
#[flutter_rust_bridge::frb(sync)]
pub fn display_name() -> String {
    with_context(
        |ctx| ctx.app.session().display_name(),
        |_| travel_core::display_name(None),
    )
}

/// Books a trip for the logged-in user from raw form input.
///
/// Traveler input that does not parse is stored as 1.
#[flutter_rust_bridge::frb(sync)]
pub fn book_trip(
    destination: String,
    start_date: String,
    end_date: String,
    travelers: String,
    notes: String,
) -> TripResponse {
    let form = TripForm {
        destination,
        start_date,
        end_date,
        travelers,
        notes,
    };
    with_context(
        |ctx| {
            let trips = ctx.app.trips();
            match ctx
                .runtime
                .block_on(trips.book_trip(ctx.app.session(), form))
            {
                Ok(id) => TripResponse {
                    ok: true,
                    trip_id: Some(id),
                    items: to_trip_items(trips.trips().get()),
                    message: "Trip booked!".to_string(),
                },
                Err(err) => TripResponse {
                    ok: false,
                    trip_id: None,
                    items: to_trip_items(trips.trips().get()),
                    message: err.to_string(),
                },
            }
        },
        trip_failure,
    )
}

/// Loads every trip owned by `email`.
#[flutter_rust_bridge::frb(sync)]
pub fn load_trips(email: String) -> TripResponse {
    with_context(
        |ctx| {
            let trips = ctx.app.trips();
            let ok = ctx.runtime.block_on(trips.load_trips(email.trim()));
            let items = to_trip_items(trips.trips().get());
            let message = if !ok {
                trips.error_message().get().unwrap_or_default()
            } else if items.is_empty() {
                "No trips yet.".to_string()
            } else {
                format!("Found {} trip(s).", items.len())
            };
            TripResponse {
                ok,
                trip_id: None,
                items,
                message,
            }
        },
        trip_failure,
    )
}

#[flutter_rust_bridge::frb(sync)]
pub fn search_destinations(query: String) -> Vec<DestinationItem> {
    catalog::search(&query)
        .into_iter()
        .map(to_destination_item)
        .collect()
}

#[flutter_rust_bridge::frb(sync)]
pub fn recommended_destinations() -> Vec<DestinationItem> {
    catalog::recommended()
        .into_iter()
        .map(to_destination_item)
        .collect()
}

/// Totals the expense screen fields.
#[flutter_rust_bridge::frb(sync)]
pub fn expense_summary(
    accommodation: String,
    food: String,
    transport: String,
    other: String,
) -> ExpenseSummary {
    let mut sheet = ExpenseSheet::default();
    let mut invalid_fields = Vec::new();
    let inputs = [accommodation, food, transport, other];
    for (category, text) in ExpenseCategory::ALL.into_iter().zip(inputs.iter()) {
        if sheet.set_from_input(category, text).is_error {
            invalid_fields.push(category.label().to_string());
        }
    }

    ExpenseSummary {
        total: sheet.total(),
        formatted_total: sheet.format_total(),
        invalid_fields,
    }
}

fn with_context<T>(f: impl FnOnce(&FfiContext) -> T, on_error: impl FnOnce(&str) -> T) -> T {
    match context_in(&CONTEXT, CoreConfig::from_env) {
        Ok(ctx) => f(ctx),
        Err(err) => on_error(&err),
    }
}

fn context_in(
    cell: &OnceCell<FfiContext>,
    config: impl FnOnce() -> CoreConfig,
) -> Result<&FfiContext, String> {
    cell.get_or_try_init(|| build_context(&config()))
}

fn build_context(config: &CoreConfig) -> Result<FfiContext, String> {
    if let Some(log_dir) = config.log_dir.as_ref().and_then(|dir| dir.to_str()) {
        if let Err(err) = init_logging_inner(&config.log_level, log_dir) {
            eprintln!("travel_ffi logging disabled: {err}");
        }
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .map_err(|err| format!("runtime init failed: {err}"))?;
    let app = TravelApp::open(&config.db_path).map_err(|err| {
        error!("event=ffi_init module=ffi status=error error={err}");
        format!("travel DB open failed: {err}")
    })?;

    Ok(FfiContext { runtime, app })
}

fn auth_state(app: &TravelApp) -> AuthState {
    let users = app.users();
    AuthState {
        login_success: users.login_success().get(),
        signup_success: users.signup_success().get(),
        error_message: users.error_message().get(),
        current_email: users.current_user_email(),
    }
}

fn auth_failure(err: &str) -> AuthState {
    AuthState {
        login_success: false,
        signup_success: false,
        error_message: Some(err.to_string()),
        current_email: None,
    }
}

fn trip_failure(err: &str) -> TripResponse {
    TripResponse {
        ok: false,
        trip_id: None,
        items: Vec::new(),
        message: err.to_string(),
    }
}

fn to_trip_items(trips: Vec<Trip>) -> Vec<TripItem> {
    trips
        .into_iter()
        .map(|trip| TripItem {
            id: trip.id,
            destination: trip.destination,
            start_date: trip.start_date,
            end_date: trip.end_date,
            travelers: trip.travelers,
            notes: trip.notes,
        })
        .collect()
}

fn to_destination_item(destination: Destination) -> DestinationItem {
    DestinationItem {
        name: destination.name.to_string(),
        summary: destination.summary.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        book_trip, context_in, core_version, display_name, expense_summary, init_logging,
        load_trips, login, logout, ping, recommended_destinations, register, search_destinations,
    };
    use once_cell::sync::OnceCell;
    use std::time::{SystemTime, UNIX_EPOCH};
    use travel_core::config::DB_PATH_ENV;
    use travel_core::CoreConfig;

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_bad_input() {
        assert!(!init_logging("info".to_string(), String::new()).is_empty());
        assert!(!init_logging("verbose".to_string(), "tmp/logs".to_string()).is_empty());
    }

    #[test]
    fn catalog_helpers_return_destinations() {
        let hits = search_destinations("korea".to_string());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "South Korea");
        assert_eq!(recommended_destinations().len(), 4);
    }

    #[test]
    fn expense_summary_reports_invalid_fields() {
        let summary = expense_summary(
            "100".to_string(),
            "25.5".to_string(),
            "lots".to_string(),
            String::new(),
        );
        assert_eq!(summary.formatted_total, "$125.50");
        assert_eq!(summary.invalid_fields, vec!["Transport".to_string()]);
    }

    #[test]
    fn context_build_is_retried_after_a_failure() {
        let dir = tempfile::tempdir().unwrap();
        let db_dir = dir.path().join("not_created_yet");
        let config = CoreConfig {
            db_path: db_dir.join("travel.sqlite3"),
            log_level: "info".to_string(),
            log_dir: None,
        };
        let cell = OnceCell::new();

        let first = context_in(&cell, || config.clone()).err();
        assert!(first.is_some_and(|err| err.contains("travel DB open failed")));

        std::fs::create_dir_all(&db_dir).unwrap();
        let second = context_in(&cell, || config.clone());
        assert!(second.is_ok(), "{:?}", second.err());
        assert!(cell.get().is_some());
    }

    // The only test that touches the shared context and session.
    #[test]
    fn signup_login_book_and_logout_flow() {
        let db_dir = tempfile::tempdir().unwrap();
        std::env::set_var(DB_PATH_ENV, db_dir.path().join("travel.sqlite3"));

        let email = format!("{}@example.com", unique_token("flow"));

        let signed_up = register(email.clone(), "pw1".to_string());
        assert!(signed_up.signup_success, "{:?}", signed_up.error_message);

        let duplicate = register(email.clone(), "pw2".to_string());
        assert!(!duplicate.signup_success);
        assert!(duplicate.error_message.is_some());

        let rejected = login(email.clone(), "wrong".to_string());
        assert!(!rejected.login_success);
        assert_eq!(rejected.error_message.as_deref(), Some("Invalid credentials"));

        let logged_in = login(email.clone(), "pw1".to_string());
        assert!(logged_in.login_success);
        assert_eq!(logged_in.current_email.as_deref(), Some(email.as_str()));
        assert!(display_name().starts_with("Flow-"));

        let booked = book_trip(
            "Japan".to_string(),
            "2025-09-01".to_string(),
            "2025-09-05".to_string(),
            "abc".to_string(),
            "cherry blossoms".to_string(),
        );
        assert!(booked.ok, "{}", booked.message);
        assert_eq!(booked.items.len(), 1);
        assert_eq!(booked.items[0].travelers, 1);

        let listed = load_trips(email.clone());
        assert!(listed.ok);
        assert_eq!(listed.items.len(), 1);

        let logged_out = logout();
        assert!(!logged_out.login_success);
        assert_eq!(logged_out.current_email, None);

        let not_logged_in = book_trip(
            "Italy".to_string(),
            "2025-10-01".to_string(),
            "2025-10-02".to_string(),
            "2".to_string(),
            String::new(),
        );
        assert!(!not_logged_in.ok);
        assert_eq!(not_logged_in.message, "User not logged in");
    }

    fn unique_token(prefix: &str) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time went backwards")
            .as_nanos();
        format!("{prefix}-{nanos}")
    }
}
