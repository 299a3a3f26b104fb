use crate::routes::health::HEALTH_PATH;

/// Invalid configuration detected at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a valid {expected}, got {value:?}")]
    Parse {
        var: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("invalid port: {0} for HTTP server")]
    InvalidPort(u16),

    #[error("{var} must start with '/', not be \"/health\" and not contain ':', '*', '{{' or '}}', got {value:?}")]
    InvalidPath { var: &'static str, value: String },
}

/// Log output format selected by `LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Name used in startup and shutdown logs (default: `tempwatch`).
    pub app_name: String,
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `60`).
    pub request_timeout_secs: u64,
    /// Path accepting telemetry submissions via POST (default: `/temp`).
    pub temp_path: String,
    /// Path for listing rejected submissions via GET (default: `/errors`).
    pub errors_path: String,
    /// Path for clearing rejected submissions via DELETE (default: same as
    /// `errors_path`).
    pub delete_path: String,
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            app_name: "tempwatch".into(),
            host: "0.0.0.0".into(),
            port: 8080,
            request_timeout_secs: 60,
            temp_path: "/temp".into(),
            errors_path: "/errors".into(),
            delete_path: "/errors".into(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default         |
    /// |------------------------|-----------------|
    /// | `APP_NAME`             | `tempwatch`     |
    /// | `HOST`                 | `0.0.0.0`       |
    /// | `PORT`                 | `8080`          |
    /// | `REQUEST_TIMEOUT_SECS` | `60`            |
    /// | `TEMP_PATH`            | `/temp`         |
    /// | `ERRORS_PATH`          | `/errors`       |
    /// | `DELETE_PATH`          | `ERRORS_PATH`   |
    /// | `LOG_FORMAT`           | `pretty`        |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`ServerConfig::from_env`] but reading values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::Parse {
                var: "PORT",
                expected: "u16",
                value,
            })?,
            None => defaults.port,
        };

        let request_timeout_secs = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::Parse {
                var: "REQUEST_TIMEOUT_SECS",
                expected: "u64",
                value,
            })?,
            None => defaults.request_timeout_secs,
        };

        let log_format = match lookup("LOG_FORMAT") {
            Some(value) => match value.trim().to_ascii_lowercase().as_str() {
                "pretty" | "text" => LogFormat::Pretty,
                "json" => LogFormat::Json,
                _ => {
                    return Err(ConfigError::Parse {
                        var: "LOG_FORMAT",
                        expected: "log format (pretty|json)",
                        value,
                    })
                }
            },
            None => defaults.log_format,
        };

        let errors_path = lookup("ERRORS_PATH").unwrap_or(defaults.errors_path);
        let delete_path = lookup("DELETE_PATH").unwrap_or_else(|| errors_path.clone());

        let config = Self {
            app_name: lookup("APP_NAME").unwrap_or(defaults.app_name),
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            request_timeout_secs,
            temp_path: lookup("TEMP_PATH").unwrap_or(defaults.temp_path),
            errors_path,
            delete_path,
            log_format,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::InvalidPort(self.port));
        }
        let paths = [
            ("TEMP_PATH", &self.temp_path),
            ("ERRORS_PATH", &self.errors_path),
            ("DELETE_PATH", &self.delete_path),
        ];
        for (var, value) in paths {
            if !is_static_route(value) {
                return Err(ConfigError::InvalidPath {
                    var,
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }
}

/// A literal path axum can mount: absolute, free of capture and wildcard
/// syntax, and not shadowing the health check.
fn is_static_route(path: &str) -> bool {
    path.starts_with('/')
        && path != HEALTH_PATH
        && !path.contains([':', '*', '{', '}'])
}
