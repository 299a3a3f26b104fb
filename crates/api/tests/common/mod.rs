#![allow(dead_code)]

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use tempwatch_api::config::ServerConfig;
use tempwatch_api::router::build_app_router;
use tempwatch_api::state::AppState;

pub const OVER_TEMP: &str = "365951380:1640995229697:'Temperature':110.48256793121914";
pub const NORMAL_TEMP: &str = "365951380:1640995229697:'Temperature':10.48256793121914";
pub const BAD_MARKER: &str = "365951380:1640995229697:'TemperatureXX':110.48256793121914";

/// Build a test `ServerConfig` with default paths and a local bind address.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        ..ServerConfig::default()
    }
}

/// Fresh state; keep a clone to inspect the error log after requests.
pub fn test_state() -> AppState {
    AppState::new(test_config())
}

/// Build the full application router, middleware included.
pub fn build_test_app(state: AppState) -> Router {
    build_app_router(state)
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// POST a raw body with the given content type.
pub async fn post_raw(
    app: &Router,
    uri: &str,
    content_type: Option<&str>,
    body: impl Into<Body>,
) -> Response<Body> {
    let mut builder = Request::builder().method(Method::POST).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(CONTENT_TYPE, content_type);
    }
    send(app, builder.body(body.into()).unwrap()).await
}

pub async fn post_json(app: &Router, uri: &str, body: &Value) -> Response<Body> {
    post_raw(app, uri, Some("application/json"), body.to_string()).await
}

/// POST `{"data": data}` to `/temp`.
pub async fn post_temp(app: &Router, data: &str) -> Response<Body> {
    post_json(app, "/temp", &serde_json::json!({ "data": data })).await
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
