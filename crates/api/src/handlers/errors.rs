//! Handlers for inspecting and purging rejected submissions.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ErrorsResponse {
    /// Raw submissions in the order they were rejected.
    pub errors: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ClearErrorsResponse {
    pub deleted: usize,
}

/// GET /errors
pub async fn list_errors(State(state): State<AppState>) -> Json<ErrorsResponse> {
    let errors = state.error_log.snapshot();
    tracing::debug!(count = errors.len(), "Listing rejected submissions");

    Json(ErrorsResponse { errors })
}

/// DELETE /errors
///
/// Purge the log and report how many entries were removed.
pub async fn clear_errors(State(state): State<AppState>) -> Json<ClearErrorsResponse> {
    let deleted = state.error_log.clear();
    tracing::info!(deleted, "Cleared rejected submissions");

    Json(ClearErrorsResponse { deleted })
}
