//! Mapping from local levels to the remote severity vocabulary

use crate::level::Level;

/// Severity as understood by the remote error tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl RemoteLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RemoteLevel::Debug => "debug",
            RemoteLevel::Info => "info",
            RemoteLevel::Warning => "warning",
            RemoteLevel::Error => "error",
        }
    }
}

impl From<Level> for RemoteLevel {
    /// Only the four named levels have a counterpart; every other value,
    /// including custom intermediate levels, is reported as `Info`.
    fn from(level: Level) -> Self {
        match level {
            Level::DEBUG => RemoteLevel::Debug,
            Level::INFO => RemoteLevel::Info,
            Level::WARN => RemoteLevel::Warning,
            Level::ERROR => RemoteLevel::Error,
            _ => RemoteLevel::Info,
        }
    }
}

impl From<RemoteLevel> for sentry::Level {
    fn from(level: RemoteLevel) -> Self {
        match level {
            RemoteLevel::Debug => sentry::Level::Debug,
            RemoteLevel::Info => sentry::Level::Info,
            RemoteLevel::Warning => sentry::Level::Warning,
            RemoteLevel::Error => sentry::Level::Error,
        }
    }
}

impl std::fmt::Display for RemoteLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
