//! Configuration loading and constants.
//!
//! Loads application configuration from TOML files and defines the fixed
//! service constants: route paths, the greeting body, the recorded event
//! message, and logging defaults. `AppConfig` is the root configuration
//! struct containing all settings.

use const_format::formatcp;
use serde::Deserialize;
use std::path::Path;

// =============================================================================
// Service Constants
// =============================================================================

/// Service name, stamped on log records and used in the default log filter.
pub const SERVICE_NAME: &str = "greeter";

/// Route serving the greeting.
pub const GREETING_PATH: &str = "/hello";

/// Fixed response body for the greeting route.
pub const GREETING_BODY: &str = "Hello World";

/// Message recorded through the event sink on every greeting invocation.
pub const GREETING_EVENT: &str = "User logged in";

/// Route serving the liveness probe.
pub const HEALTH_PATH: &str = "/health";

/// Response body for the liveness probe.
pub const HEALTH_BODY: &str = "ok";

// =============================================================================
// HTTP Response Cache Control
// =============================================================================
// The greeting records an event per invocation; an intermediary cache
// answering for the origin would skip that record. All routes therefore opt
// out of shared caching entirely.

pub const CACHE_CONTROL_NO_STORE: &str = "no-store";

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default log filter when neither --log-level nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str = formatcp!("{}=info", SERVICE_NAME);

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    pub http: HttpServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable single-line records
    Text,
    /// Structured records, one JSON object per line
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LoggingConfig::default_format(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> LogFormat {
        LogFormat::Text
    }
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        Ok(config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
