//! Configuration handling for the application.
//!
//! Everything is read from environment variables with development defaults,
//! so the binary runs with no setup. `Config::from_env` performs that
//! loading; validation that can fail lives behind `ConfigError`.

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Environment variable names. Keeping them public lets tests and deployment
/// scripts refer to them directly.
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_CACHE_PATH: &str = "CACHE_PATH";
pub const ENV_CORS_ORIGIN: &str = "CORS_ORIGIN";

/// Default development values used when environment variables are absent.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_CACHE_PATH: &str = "cache.json";
const DEFAULT_CORS_ORIGIN: &str = "*";

/// Application runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    bind_addr: String,
    cache_path: String,
    cors_origin: String,
}

impl Config {
    /// Create a new config explicitly.
    pub fn new(
        bind_addr: impl Into<String>,
        cache_path: impl Into<String>,
        cors_origin: impl Into<String>,
    ) -> Self {
        Self {
            bind_addr: bind_addr.into(),
            cache_path: cache_path.into(),
            cors_origin: cors_origin.into(),
        }
    }

    /// Load from environment variables, falling back to development defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = env::var(ENV_BIND_ADDR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let cache_path =
            env::var(ENV_CACHE_PATH).unwrap_or_else(|_| DEFAULT_CACHE_PATH.to_string());
        let cors_origin =
            env::var(ENV_CORS_ORIGIN).unwrap_or_else(|_| DEFAULT_CORS_ORIGIN.to_string());

        if cache_path.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: ENV_CACHE_PATH,
                reason: "must not be empty".to_string(),
            });
        }

        Ok(Self {
            bind_addr,
            cache_path,
            cors_origin,
        })
    }

    /// TCP bind address (host:port) for the HTTP server.
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }
    /// Path of the JSON metadata cache file.
    pub fn cache_path(&self) -> &str {
        &self.cache_path
    }
    /// Allowed CORS origin for the analyze endpoint (`*` for any).
    pub fn cors_origin(&self) -> &str {
        &self.cors_origin
    }

    /// Development defaults (mirrors `from_env` with no env overrides).
    pub fn default() -> Self {
        Self::new(DEFAULT_BIND_ADDR, DEFAULT_CACHE_PATH, DEFAULT_CORS_ORIGIN)
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug)]
pub enum ConfigError {
    InvalidValue { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl Error for ConfigError {}
