//! Tracing setup for the service binaries. `RUST_LOG` wins when set;
//! otherwise the configured level applies. Development gets human-oriented
//! output, everything else gets compact plain-text suitable for collectors.

use crate::config::{AppConfig, AppEnvironment};
use thiserror::Error;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("invalid log filter '{value}'")]
    Filter {
        value: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
    #[error("failed to install tracing subscriber")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

pub fn init(config: &AppConfig) -> Result<(), TelemetryError> {
    let directives =
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.telemetry.log_level.clone());
    let filter = EnvFilter::try_new(&directives).map_err(|source| TelemetryError::Filter {
        value: directives.clone(),
        source,
    })?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    if config.environment == AppEnvironment::Development {
        builder.pretty().finish().try_init()?;
    } else {
        builder.compact().with_ansi(false).finish().try_init()?;
    }

    Ok(())
}
