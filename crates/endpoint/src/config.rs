//! Endpoint configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `ENDPOINT_HOST` - Bind address (default: 127.0.0.1)
//! - `ENDPOINT_PORT` - Listen port (default: 3000)
//! - `SHIPSTATION_BASE_URL` - Remote API base URL (default: the public
//!   ShipStation REST API; integration tests point this at a mock server)
//! - `SHIPSTATION_TIMEOUT_SECS` - Outbound call timeout (default: 300).
//!   Deliberately generous: a slow upstream should finish, not fail early.
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Sentry error sample rate (0.0 to 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Sentry traces sample rate (0.0 to 1.0)
//!
//! ShipStation credentials are NOT configured here: the hub supplies them
//! per request inside the envelope's `parameters`.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use thiserror::Error;

/// Public ShipStation REST API.
pub const DEFAULT_BASE_URL: &str = "https://ssapi.shipstation.com";

const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Endpoint application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// ShipStation API base URL
    pub shipstation_base_url: String,
    /// Timeout applied to every outbound ShipStation call
    pub remote_timeout: Duration,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "development", "staging", "production")
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate (0.0 to 1.0)
    pub sentry_sample_rate: f32,
    /// Sentry traces sample rate for performance monitoring (0.0 to 1.0)
    pub sentry_traces_sample_rate: f32,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("ENDPOINT_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("ENDPOINT_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("ENDPOINT_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("ENDPOINT_PORT".to_string(), e.to_string()))?;
        let shipstation_base_url = get_env_or_default("SHIPSTATION_BASE_URL", DEFAULT_BASE_URL);
        let timeout_secs = get_env_or_default(
            "SHIPSTATION_TIMEOUT_SECS",
            &DEFAULT_TIMEOUT_SECS.to_string(),
        )
        .parse::<u64>()
        .map_err(|e| {
            ConfigError::InvalidEnvVar("SHIPSTATION_TIMEOUT_SECS".to_string(), e.to_string())
        })?;

        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");
        let sentry_sample_rate = get_optional_env("SENTRY_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);
        let sentry_traces_sample_rate = get_optional_env("SENTRY_TRACES_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);

        Ok(Self {
            host,
            port,
            shipstation_base_url,
            remote_timeout: Duration::from_secs(timeout_secs),
            sentry_dsn,
            sentry_environment,
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            shipstation_base_url: DEFAULT_BASE_URL.to_string(),
            remote_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 1.0,
        }
    }
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            port: 3100,
            ..Default::default()
        };
        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3100);
    }

    #[test]
    fn test_default_points_at_public_api() {
        let config = ServerConfig::default();
        assert_eq!(config.shipstation_base_url, DEFAULT_BASE_URL);
        assert_eq!(config.remote_timeout, Duration::from_secs(300));
    }
}
