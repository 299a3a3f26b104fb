use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

pub const HEALTH_PATH: &str = "/health";

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Rejected submissions currently held in memory.
    pub error_count: usize,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        error_count: state.error_log.len(),
    })
}

/// Mount health check routes.
pub fn router() -> Router<AppState> {
    Router::new().route(HEALTH_PATH, get(health_check))
}
