//! Opt-in `tracing` subscriber installation.
//!
//! The library only emits events; applications that want them printed call
//! [`init_tracing`] once at startup. `RUST_LOG` takes precedence over the
//! configured level.

use crate::config::LoggingConfig;
use crate::error::{Error, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Builds the filter: `RUST_LOG` if set and valid, otherwise `config.level`.
#[must_use]
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Installs a global fmt subscriber (text or json, per `config.format`).
///
/// # Errors
///
/// Returns [`Error::Config`] if a global subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let json = config.format == "json";

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(tracing_subscriber::fmt::layer))
        .try_init()
        .map_err(|e| Error::Config(format!("tracing subscriber: {e}")))
}
