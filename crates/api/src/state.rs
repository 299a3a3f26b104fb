use std::sync::Arc;

use tempwatch_core::error_log::ErrorLog;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Rejected submissions, shared by every handler for the process lifetime.
    pub error_log: Arc<ErrorLog>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            error_log: Arc::new(ErrorLog::new()),
        }
    }
}
