//! Environment-driven configuration for the matching service. Values come
//! from `CREWMATCH_*` variables, with `.env` files honored in development.

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: &str = "8080";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Deployment stage, used to pick log formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Staging,
    Production,
}

impl AppEnvironment {
    fn detect(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "staging" | "stage" => Self::Staging,
            _ => Self::Development,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("CREWMATCH_PORT value '{value}' is not a valid port number")]
    Port { value: String },
    #[error("CREWMATCH_HOST value '{value}' is not an IP address or 'localhost'")]
    Host {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Top-level runtime configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::detect(&env_or("CREWMATCH_ENV", "development"));

        let host = env_or("CREWMATCH_HOST", DEFAULT_HOST);
        let raw_port = env_or("CREWMATCH_PORT", DEFAULT_PORT);
        let port = raw_port
            .parse::<u16>()
            .map_err(|_| ConfigError::Port { value: raw_port })?;

        let log_level = env_or("CREWMATCH_LOG", DEFAULT_LOG_LEVEL);

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// HTTP listener binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip = match self.host.trim().to_ascii_lowercase().as_str() {
            "localhost" => IpAddr::V4(Ipv4Addr::LOCALHOST),
            other => other.parse().map_err(|source| ConfigError::Host {
                value: self.host.clone(),
                source,
            })?,
        };

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Log filtering controls; see [`crate::telemetry::init`].
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Env lookup treating unset and blank the same way.
fn env_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
