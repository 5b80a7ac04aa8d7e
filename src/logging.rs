//! Diagnostic output setup.
//!
//! Call sites log through `tracing`; [`init`] installs a formatting
//! subscriber gated by [`AppConfig`]. `RUST_LOG` takes precedence over the
//! environment-derived level when set.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, Environment};

/// Returns the maximum level logged for the configured environment.
///
/// Production logs errors only; every other environment logs debug output.
/// Disabled logging maps to [`LevelFilter::OFF`].
#[must_use]
pub const fn default_level(config: &AppConfig) -> LevelFilter {
    if !config.enable_logging {
        return LevelFilter::OFF;
    }
    match config.environment {
        Environment::Production => LevelFilter::ERROR,
        Environment::Development | Environment::Test => LevelFilter::DEBUG,
    }
}

/// Installs the global subscriber.
///
/// Returns `false` without installing anything when logging is disabled or
/// a global subscriber is already set.
pub fn init(config: &AppConfig) -> bool {
    let level = default_level(config);
    if level == LevelFilter::OFF {
        return false;
    }
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init()
        .is_ok()
}
