//! Route assembly.

use crate::AppState;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum::routing::get;
use axum::Router;
use serde_json::json;

mod account;
mod budget;
mod checklist;
mod guests;
mod seating;
mod vendors;

/// Assemble the full API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(account::router())
        .merge(guests::router())
        .merge(seating::router())
        .merge(checklist::router())
        .merge(budget::router())
        .merge(vendors::router())
        .with_state(state)
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}
