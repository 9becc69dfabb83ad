//! Severity levels

use serde::{Serialize, Serializer};

/// Severity of a log record
///
/// Levels are plain integers so that intermediate severities can be
/// expressed. The four named levels are spaced four apart, leaving room for
/// custom levels between them (e.g. `Level::new(2)` sits between INFO and WARN).
///
/// Higher values are more severe; sinks compare levels with `>=` against
/// their threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(i32);

impl Level {
    pub const DEBUG: Level = Level(-4);
    pub const INFO: Level = Level(0);
    pub const WARN: Level = Level(4);
    pub const ERROR: Level = Level(8);

    /// Create a level from its raw value
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Raw numeric value
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Parse a configured level name
    ///
    /// Only the exact lowercase names `debug`, `info`, `warn` and `error` are
    /// recognised. Anything else falls back to INFO.
    pub fn from_config(name: &str) -> Self {
        match name {
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::INFO
    }
}

impl std::fmt::Display for Level {
    /// Named levels print as `DEBUG`, `INFO`, `WARN`, `ERROR`. Other values
    /// print relative to the nearest named level below them, e.g. `INFO+2`
    /// or `DEBUG-1`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (base, name) = if self.0 < Level::INFO.0 {
            (Level::DEBUG.0, "DEBUG")
        } else if self.0 < Level::WARN.0 {
            (Level::INFO.0, "INFO")
        } else if self.0 < Level::ERROR.0 {
            (Level::WARN.0, "WARN")
        } else {
            (Level::ERROR.0, "ERROR")
        };

        let offset = self.0 - base;
        if offset == 0 {
            write!(f, "{}", name)
        } else {
            write!(f, "{}{:+}", name, offset)
        }
    }
}

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(Level::INFO > Level::DEBUG);
        assert!(Level::WARN > Level::INFO);
        assert!(Level::ERROR > Level::WARN);
        assert!(Level::new(2) > Level::INFO);
        assert!(Level::new(2) < Level::WARN);
    }

    #[test]
    fn test_from_config_known_names() {
        assert_eq!(Level::from_config("debug"), Level::DEBUG);
        assert_eq!(Level::from_config("info"), Level::INFO);
        assert_eq!(Level::from_config("warn"), Level::WARN);
        assert_eq!(Level::from_config("error"), Level::ERROR);
    }

    #[test]
    fn test_from_config_unknown_defaults_to_info() {
        for name in ["", "trace", "WARN", "Error", "fatal", "warning", " info"] {
            assert_eq!(Level::from_config(name), Level::INFO, "name {:?}", name);
        }
    }

    #[test]
    fn test_level_display() {
        assert_eq!(Level::DEBUG.to_string(), "DEBUG");
        assert_eq!(Level::INFO.to_string(), "INFO");
        assert_eq!(Level::WARN.to_string(), "WARN");
        assert_eq!(Level::ERROR.to_string(), "ERROR");
        assert_eq!(Level::new(2).to_string(), "INFO+2");
        assert_eq!(Level::new(-5).to_string(), "DEBUG-1");
        assert_eq!(Level::new(12).to_string(), "ERROR+4");
    }

    #[test]
    fn test_level_serializes_as_name() {
        let json = serde_json::to_string(&Level::WARN).unwrap();
        assert_eq!(json, "\"WARN\"");
    }
}
