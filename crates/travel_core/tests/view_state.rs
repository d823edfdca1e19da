use rusqlite::Connection;
use std::path::Path;
use travel_core::{
    BookTripError, NewTrip, TravelApp, TripForm, User, DEFAULT_TRAVELERS,
    INVALID_CREDENTIALS_MESSAGE, LOAD_FAILED_MESSAGE, REGISTRATION_FAILED_MESSAGE,
};

fn app() -> TravelApp {
    TravelApp::open_in_memory().unwrap()
}

/// Writes a row that passes SQL but fails trip row parsing.
fn seed_corrupted_trip(path: &Path, owner: &str) {
    let conn = Connection::open(path).unwrap();
    conn.execute(
        "INSERT INTO trips (userEmail, destination, startDate, endDate, travelers, notes)
         VALUES (?1, 'Atlantis', '2025-01-01', '2025-01-02', -1, '');",
        [owner],
    )
    .unwrap();
}

fn trip_count(path: &Path, owner: &str) -> i64 {
    let conn = Connection::open(path).unwrap();
    conn.query_row(
        "SELECT COUNT(*) FROM trips WHERE userEmail = ?1;",
        [owner],
        |row| row.get(0),
    )
    .unwrap()
}

fn trip_for(owner: &str, destination: &str) -> NewTrip {
    NewTrip {
        user_email: owner.to_string(),
        destination: destination.to_string(),
        start_date: "2025-11-01".to_string(),
        end_date: "2025-11-03".to_string(),
        travelers: 1,
        notes: "Business trip".to_string(),
    }
}

#[tokio::test]
async fn register_then_login_starts_a_session() {
    let app = app();
    let users = app.users();

    users.register(User::new("a@x.com", "pw1")).await;
    assert!(users.signup_success().get());
    assert_eq!(users.error_message().get(), None);

    users.login("a@x.com", "pw1").await;
    assert!(users.login_success().get());
    assert_eq!(users.error_message().get(), None);
    assert_eq!(users.current_user_email().as_deref(), Some("a@x.com"));
    assert_eq!(app.session().display_name(), "A");
}

#[tokio::test]
async fn failed_login_without_prior_session_leaves_it_unset() {
    let app = app();
    let users = app.users();
    users.register(User::new("a@x.com", "pw1")).await;

    users.login("nobody@x.com", "pw1").await;
    assert!(!users.login_success().get());
    assert_eq!(
        users.error_message().get().as_deref(),
        Some(INVALID_CREDENTIALS_MESSAGE)
    );
    assert_eq!(users.current_user_email(), None);
}

#[tokio::test]
async fn failed_login_after_success_keeps_previous_session_email() {
    let app = app();
    let users = app.users();
    users.register(User::new("a@x.com", "pw1")).await;

    users.login("a@x.com", "pw1").await;
    users.login("a@x.com", "wrong").await;

    assert!(!users.login_success().get());
    assert_eq!(
        users.error_message().get().as_deref(),
        Some(INVALID_CREDENTIALS_MESSAGE)
    );
    assert_eq!(users.current_user_email().as_deref(), Some("a@x.com"));
}

#[tokio::test]
async fn duplicate_registration_fails_with_generic_message() {
    let app = app();
    let users = app.users();

    users.register(User::new("a@x.com", "pw1")).await;
    users.reset_signup_success();
    assert!(!users.signup_success().get());

    users.register(User::new("a@x.com", "other")).await;
    assert!(!users.signup_success().get());
    assert_eq!(
        users.error_message().get().as_deref(),
        Some(REGISTRATION_FAILED_MESSAGE)
    );
}

#[tokio::test]
async fn logout_twice_leaves_session_unset_and_keeps_error() {
    let app = app();
    let users = app.users();
    users.register(User::new("a@x.com", "pw1")).await;
    users.login("a@x.com", "pw1").await;
    users.login("a@x.com", "wrong").await;

    users.logout();
    assert_eq!(users.current_user_email(), None);
    assert!(!users.login_success().get());

    users.logout();
    assert_eq!(users.current_user_email(), None);
    assert_eq!(
        users.error_message().get().as_deref(),
        Some(INVALID_CREDENTIALS_MESSAGE)
    );
}

#[tokio::test]
async fn load_trips_returns_only_the_owners_trips() {
    let app = app();
    let trips = app.trips();

    for destination in ["Japan", "Italy", "Canada"] {
        trips.add_trip(trip_for("b@y.com", destination)).await.unwrap();
    }
    trips.add_trip(trip_for("c@y.com", "Mexico")).await.unwrap();

    assert!(trips.load_trips("b@y.com").await);
    let loaded = trips.trips().get();
    assert_eq!(loaded.len(), 3);
    assert!(loaded.iter().all(|trip| trip.user_email == "b@y.com"));

    assert!(trips.load_trips("nobody@z.com").await);
    assert!(trips.trips().get().is_empty());
}

#[tokio::test]
async fn add_trip_reloads_the_owners_list_and_notifies() {
    let app = app();
    let trips = app.trips();
    let mut rx = trips.trips().subscribe();

    let id = trips.add_trip(trip_for("b@y.com", "Japan")).await.unwrap();

    assert!(rx.has_changed().unwrap());
    let snapshot = rx.borrow_and_update().clone();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].id, id);
    assert_eq!(trips.error_message().get(), None);
}

#[tokio::test]
async fn invalid_trip_is_reported_through_error_cell() {
    let app = app();
    let trips = app.trips();

    let mut trip = trip_for("b@y.com", "Japan");
    trip.travelers = 0;
    assert_eq!(trips.add_trip(trip).await, None);
    assert!(trips.error_message().get().is_some());
    assert!(trips.trips().get().is_empty());
}

#[tokio::test]
async fn book_trip_requires_a_session_and_dates() {
    let app = app();
    let form = TripForm {
        destination: "Japan".to_string(),
        start_date: "2025-09-01".to_string(),
        end_date: "2025-09-05".to_string(),
        travelers: "2".to_string(),
        notes: String::new(),
    };

    let err = app
        .trips()
        .book_trip(app.session(), form.clone())
        .await
        .unwrap_err();
    assert_eq!(err, BookTripError::NotLoggedIn);
    assert_eq!(err.to_string(), "User not logged in");

    app.session().begin("b@y.com");
    let missing_dates = TripForm {
        end_date: String::new(),
        ..form.clone()
    };
    let err = app
        .trips()
        .book_trip(app.session(), missing_dates)
        .await
        .unwrap_err();
    assert_eq!(err, BookTripError::MissingDates);

    app.trips().book_trip(app.session(), form).await.unwrap();
    assert_eq!(app.trips().trips().get()[0].travelers, 2);
}

#[tokio::test]
async fn unparseable_travelers_are_stored_as_one() {
    let app = app();
    app.session().begin("b@y.com");

    for travelers in ["", "two"] {
        let form = TripForm {
            destination: "Italy".to_string(),
            start_date: "2025-09-01".to_string(),
            end_date: "2025-09-05".to_string(),
            travelers: travelers.to_string(),
            notes: String::new(),
        };
        app.trips().book_trip(app.session(), form).await.unwrap();
    }

    let stored = app.trips().trips().get();
    assert_eq!(stored.len(), 2);
    assert!(stored.iter().all(|trip| trip.travelers == DEFAULT_TRAVELERS));
}

#[tokio::test]
async fn app_logout_clears_session_and_trip_list() {
    let app = app();
    app.users().register(User::new("b@y.com", "pw")).await;
    app.users().login("b@y.com", "pw").await;
    app.trips().add_trip(trip_for("b@y.com", "Japan")).await.unwrap();
    assert_eq!(app.trips().trips().get().len(), 1);

    app.logout();
    assert!(!app.session().is_active());
    assert!(app.trips().trips().get().is_empty());
}

#[tokio::test]
async fn add_trip_keeps_the_insert_when_reload_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("travel.sqlite3");
    let app = TravelApp::open(&path).unwrap();
    seed_corrupted_trip(&path, "b@y.com");

    let id = app.trips().add_trip(trip_for("b@y.com", "Japan")).await;

    assert!(id.is_some());
    assert_eq!(trip_count(&path, "b@y.com"), 2);
    assert_eq!(
        app.trips().error_message().get().as_deref(),
        Some(LOAD_FAILED_MESSAGE)
    );
    assert!(app.trips().trips().get().is_empty());
}

#[tokio::test]
async fn failed_load_keeps_previous_list_and_next_success_clears_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("travel.sqlite3");
    let app = TravelApp::open(&path).unwrap();
    let trips = app.trips();
    trips.add_trip(trip_for("good@y.com", "Italy")).await.unwrap();
    seed_corrupted_trip(&path, "bad@y.com");

    assert!(!trips.load_trips("bad@y.com").await);
    let held = trips.trips().get();
    assert_eq!(held.len(), 1);
    assert_eq!(held[0].destination, "Italy");
    assert_eq!(
        trips.error_message().get().as_deref(),
        Some(LOAD_FAILED_MESSAGE)
    );

    assert!(trips.load_trips("good@y.com").await);
    assert_eq!(trips.error_message().get(), None);
    assert_eq!(trips.trips().get().len(), 1);
}
