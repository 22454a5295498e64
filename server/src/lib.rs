//! # Clinic
//!
//! Appointment booking backend for a small clinic.
//!
//! # General Infrastructure
//! - JSON API served by axum, one process, stateless apart from Redis
//! - Users, appointments and sessions live in Redis (see [`database`])
//! - Decision logic (symptom matching, quiz recommendations) lives in the
//!   `triage` crate and is pure; handlers here only glue it to HTTP and
//!   session state
//!
//! # Sessions
//! - One HTTP-only cookie holding an opaque UUID v4 session id
//! - Session documents expire after a month of inactivity
//! - The admin flag lives on the same session as the user login
//!
//! # Setup
//!
//! Needs a reachable Redis (`REDIS_URL`, defaults to localhost).
//! ```sh
//! RUST_LOG=info cargo run -p clinic
//! ```
use std::time::Duration;

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{delete, get, post},
};

use tokio::{
    net::TcpListener,
    signal::{
        ctrl_c,
        unix::{SignalKind, signal},
    },
};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod admin;
pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod routes;
pub mod session;
pub mod state;
pub mod utils;

use admin::{
    admin_dashboard_handler, admin_login_handler, admin_logout_handler,
    delete_appointment_handler,
};
use routes::{
    book_appointment_handler, confirmation_handler, login_handler, logout_handler,
    quiz_handler, quiz_submit_handler, register_handler, symptoms_handler,
    symptoms_input_handler, test_details_handler, tests_handler,
};
use state::AppState;

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = AppState::new().await;

    info!("Starting server...");

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let app = Router::new()
        .route("/register", post(register_handler))
        .route("/login", post(login_handler))
        .route("/logout", post(logout_handler))
        .route("/tests", get(tests_handler))
        .route("/tests/{name}", get(test_details_handler))
        .route("/appointments", post(book_appointment_handler))
        .route("/appointments/confirmation", get(confirmation_handler))
        .route("/symptoms", get(symptoms_input_handler).post(symptoms_handler))
        .route("/quiz", get(quiz_handler).post(quiz_submit_handler))
        .route("/admin/login", post(admin_login_handler))
        .route("/admin/logout", post(admin_logout_handler))
        .route("/admin/dashboard", get(admin_dashboard_handler))
        .route("/admin/appointments/{id}", delete(delete_appointment_handler))
        .layer(cors)
        .with_state(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("Server shutting down...");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
