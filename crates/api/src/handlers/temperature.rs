//! Handler for telemetry submissions.
//!
//! Request body: `{"data": "<device_id>:<epoch_ms>:'Temperature':<value>"}`,
//! e.g. `{"data": "365951380:1640995229697:'Temperature':58.48256793121914"}`.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;
use axum::Json;
use serde::Deserialize;
use tempwatch_core::classify::ClassificationResponse;
use tempwatch_core::ingest::parse_and_classify;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

const JSON_MEDIA_TYPE: &str = "application/json";

#[derive(Debug, Deserialize)]
struct TemperatureSubmission {
    data: Option<String>,
}

/// POST /temp
///
/// Classify one submission. Every failure after the content-type check
/// archives what the client sent before answering 400.
pub async fn post_temperature(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<Json<ClassificationResponse>> {
    if !is_json_content_type(&headers) {
        return Err(AppError::BadRequest(format!(
            "request header {CONTENT_TYPE} must be {JSON_MEDIA_TYPE}"
        )));
    }

    let submission: TemperatureSubmission = match serde_json::from_slice(&body) {
        Ok(submission) => submission,
        Err(err) => {
            state.error_log.push(String::from_utf8_lossy(&body));
            return Err(AppError::BadRequest(format!("invalid JSON body: {err}")));
        }
    };

    let data = match submission.data {
        Some(data) if !data.is_empty() => data,
        _ => {
            state.error_log.push(String::from_utf8_lossy(&body));
            return Err(AppError::BadRequest("Got empty data".into()));
        }
    };

    let classification = parse_and_classify(&data, &state.error_log)?;

    Ok(Json(classification.into()))
}

/// Media type must be `application/json`; parameters such as `charset` are
/// ignored.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|media_type| media_type.trim().eq_ignore_ascii_case(JSON_MEDIA_TYPE))
}
