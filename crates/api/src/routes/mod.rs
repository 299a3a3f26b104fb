pub mod health;

use axum::routing::{delete, get, post};
use axum::Router;

use crate::config::ServerConfig;
use crate::handlers;
use crate::state::AppState;

/// Build the telemetry route tree.
///
/// Paths come from configuration:
///
/// ```text
/// POST   {temp_path}      classify a submission
/// GET    {errors_path}    list rejected submissions
/// DELETE {delete_path}    clear rejected submissions
/// ```
pub fn telemetry_routes(config: &ServerConfig) -> Router<AppState> {
    Router::new()
        .route(
            &config.temp_path,
            post(handlers::temperature::post_temperature),
        )
        .route(&config.errors_path, get(handlers::errors::list_errors))
        .route(&config.delete_path, delete(handlers::errors::clear_errors))
}
