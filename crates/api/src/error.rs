use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tempwatch_core::error::ParseError;

/// Body of every 400 response. The reason is logged, never returned.
pub const BAD_REQUEST_MESSAGE: &str = "bad request";

/// Application-level error type for HTTP handlers.
///
/// All client-side failures collapse to the same `{"error": "bad request"}`
/// body so the parse taxonomy stays internal.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A submission rejected by the telemetry parser.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Any other malformed request, with a reason for the logs.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            // Already logged with its kind by the ingest path.
            AppError::Parse(_) => {}
            AppError::BadRequest(reason) => tracing::warn!(%reason, "Bad request"),
        }

        (
            StatusCode::BAD_REQUEST,
            axum::Json(json!({ "error": BAD_REQUEST_MESSAGE })),
        )
            .into_response()
    }
}
