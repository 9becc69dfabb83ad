//! Logger configuration

use serde::{Deserialize, Serialize};

use crate::level::Level;

/// Configuration for building a logger
///
/// Deserializable so it can be embedded in an application's own config
/// file; missing fields take their defaults.
///
/// # Example
///
/// ```
/// use logfan_core::{Config, Level};
///
/// let config: Config = serde_json::from_str(r#"{"level": "warn"}"#).unwrap();
/// assert_eq!(config.threshold(), Level::WARN);
/// assert!(!config.remote_active());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// One of `debug`, `info`, `warn`, `error`; anything else means `info`
    pub level: String,
    /// Sentry DSN; remote reporting stays off while empty
    pub remote_dsn: String,
    /// Turn on remote reporting
    pub remote_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            remote_dsn: String::new(),
            remote_enabled: false,
        }
    }
}

impl Config {
    /// Create a local-only config at `level`
    pub fn new(level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            ..Default::default()
        }
    }

    /// Enable remote reporting to `dsn`
    pub fn with_remote(mut self, dsn: impl Into<String>) -> Self {
        self.remote_dsn = dsn.into();
        self.remote_enabled = true;
        self
    }

    /// Minimum level for the JSON output
    pub fn threshold(&self) -> Level {
        Level::from_config(&self.level)
    }

    /// Whether records should also go to the remote tracker
    pub fn remote_active(&self) -> bool {
        self.remote_enabled && !self.remote_dsn.is_empty()
    }
}
