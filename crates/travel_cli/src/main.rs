//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `travel_core` linkage and run one signup/login/booking pass.
//! - Keep output deterministic for quick local sanity checks.

use std::process::ExitCode;
use travel_core::{TravelApp, TripForm, User};

#[tokio::main]
async fn main() -> ExitCode {
    println!("travel_core ping={}", travel_core::ping());
    println!("travel_core version={}", travel_core::core_version());

    let app = match TravelApp::open_in_memory() {
        Ok(app) => app,
        Err(err) => {
            eprintln!("travel_core db=error {err}");
            return ExitCode::FAILURE;
        }
    };

    app.users()
        .register(User::new("smoke@example.com", "smoke"))
        .await;
    app.users().login("smoke@example.com", "smoke").await;
    println!(
        "travel_core login={} user={}",
        app.users().login_success().get(),
        app.session().display_name()
    );

    let form = TripForm {
        destination: "Japan".to_string(),
        start_date: "2025-09-01".to_string(),
        end_date: "2025-09-05".to_string(),
        travelers: "2".to_string(),
        notes: "smoke".to_string(),
    };
    match app.trips().book_trip(app.session(), form).await {
        Ok(id) => println!(
            "travel_core trip_id={id} trips={}",
            app.trips().trips().get().len()
        ),
        Err(err) => {
            eprintln!("travel_core booking=error {err}");
            return ExitCode::FAILURE;
        }
    }

    app.logout();
    println!("travel_core session_active={}", app.session().is_active());
    ExitCode::SUCCESS
}
