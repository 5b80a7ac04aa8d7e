//! Application configuration.
//!
//! Configuration is resolved once, when the application wires up its
//! repository and logging, and is never reloaded. Values come from the
//! process environment with compiled defaults for anything unset:
//!
//! - `TASKBOARD_STORAGE_PREFIX`: namespace for the storage key
//! - `TASKBOARD_ENABLE_LOGGING`: `true` forces diagnostic output on
//! - `TASKBOARD_ENV`: `development`, `production`, or `test`
//! - `TASKBOARD_VERSION`: reported application version

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Default storage namespace.
pub const DEFAULT_STORAGE_PREFIX: &str = "todo-app";

const STORAGE_PREFIX_VAR: &str = "TASKBOARD_STORAGE_PREFIX";
const ENABLE_LOGGING_VAR: &str = "TASKBOARD_ENABLE_LOGGING";
const ENVIRONMENT_VAR: &str = "TASKBOARD_ENV";
const VERSION_VAR: &str = "TASKBOARD_VERSION";

/// Errors raised while resolving configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The environment name is not recognised.
    #[error("unknown environment '{0}', expected development, production, or test")]
    UnknownEnvironment(String),
}

/// Deployment environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development; verbose logging on by default.
    #[default]
    Development,
    /// Production; only errors are logged.
    Production,
    /// Automated tests.
    Test,
}

impl Environment {
    /// Returns the canonical name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Test => "test",
        }
    }
}

impl TryFrom<&str> for Environment {
    type Error = ConfigError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            "test" => Ok(Self::Test),
            _ => Err(ConfigError::UnknownEnvironment(value.to_owned())),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fully resolved application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Namespace prefixed to the storage key.
    pub storage_prefix: String,
    /// Whether diagnostic output is emitted at all.
    pub enable_logging: bool,
    /// Deployment environment; selects the log level.
    pub environment: Environment,
    /// Application version.
    pub version: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_prefix: DEFAULT_STORAGE_PREFIX.to_owned(),
            enable_logging: true,
            environment: Environment::Development,
            version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

impl AppConfig {
    /// Resolves configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownEnvironment`] when `TASKBOARD_ENV` holds
    /// an unsupported value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolves configuration through an arbitrary variable lookup.
    ///
    /// Logging is on in development and whenever `TASKBOARD_ENABLE_LOGGING`
    /// is `true`. Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownEnvironment`] when the environment name
    /// is unsupported.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let environment = read(ENVIRONMENT_VAR)
            .map(|value| Environment::try_from(value.as_str()))
            .transpose()?
            .unwrap_or_default();
        let logging_forced = read(ENABLE_LOGGING_VAR).is_some_and(|value| value.trim() == "true");

        Ok(Self {
            storage_prefix: read(STORAGE_PREFIX_VAR).unwrap_or(defaults.storage_prefix),
            enable_logging: environment == Environment::Development || logging_forced,
            environment,
            version: read(VERSION_VAR).unwrap_or(defaults.version),
        })
    }

    /// Returns the key the task collection is stored under.
    #[must_use]
    pub fn storage_key(&self) -> String {
        format!("{}-todos", self.storage_prefix)
    }
}
