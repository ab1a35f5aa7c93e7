//! HTTP API for ironlog workouts.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]

pub mod api_error;
mod handlers;
mod query_types;
mod response_types;


use axum::{
    Json, Router,
    routing::get,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use ironlog_service::WorkoutService;

pub use response_types::VersionResponse;

/// Shared application state for all HTTP handlers.
pub struct AppState {
    pub workout_service: Arc<WorkoutService>,
}

impl AppState {
    #[must_use]
    pub fn new(workout_service: Arc<WorkoutService>) -> Self {
        Self { workout_service }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/version", get(version))
        .route(
            "/workouts",
            get(handlers::workouts::list_workouts)
                .post(handlers::workouts::create_workout)
                .delete(handlers::workouts::delete_workout_by_query),
        )
        .route(
            "/workouts/{id}",
            get(handlers::workouts::get_workout).delete(handlers::workouts::delete_workout),
        )
        .route("/exercises", get(handlers::exercises::list_exercises))
        .route("/trend", get(handlers::workouts::trend))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
