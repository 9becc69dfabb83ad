//! Log records and their attributes

use std::panic::Location;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::level::Level;

/// A key-value pair attached to a record or a derived logger
#[derive(Debug, Clone, PartialEq)]
pub struct Attr {
    pub key: String,
    pub value: Value,
}

impl Attr {
    /// Create an attribute from anything convertible into a JSON value
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create a group attribute whose members render as a nested object
    pub fn group(key: impl Into<String>, attrs: impl IntoIterator<Item = Attr>) -> Self {
        let members = attrs
            .into_iter()
            .filter(|a| !a.key.is_empty())
            .map(|a| (a.key, a.value))
            .collect::<serde_json::Map<_, _>>();
        Self {
            key: key.into(),
            value: Value::Object(members),
        }
    }
}

/// Build a `Vec<Attr>` from `key => value` pairs
///
/// ```
/// use logfan_core::attrs;
///
/// let attrs = attrs!["user" => "alice", "attempt" => 3];
/// assert_eq!(attrs.len(), 2);
/// ```
#[macro_export]
macro_rules! attrs {
    () => {
        ::std::vec::Vec::<$crate::Attr>::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        vec![$($crate::Attr::new($key, $value)),+]
    };
}

/// Call site of a log statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Source {
    pub file: &'static str,
    pub line: u32,
    pub column: u32,
}

impl From<&'static Location<'static>> for Source {
    fn from(location: &'static Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
            column: location.column(),
        }
    }
}

/// A single log event
///
/// Records are created by `Logger` for each emission call and handed to the
/// sink chain by reference. Sinks must not retain them.
#[derive(Debug, Clone)]
pub struct Record {
    pub time: DateTime<Utc>,
    pub level: Level,
    pub message: String,
    pub attrs: Vec<Attr>,
    pub source: Option<Source>,
}

impl Record {
    /// Create a record stamped with the current time and no call site
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            time: Utc::now(),
            level,
            message: message.into(),
            attrs: Vec::new(),
            source: None,
        }
    }

    /// Attach attributes to the record
    pub fn with_attrs(mut self, attrs: impl IntoIterator<Item = Attr>) -> Self {
        self.attrs.extend(attrs);
        self
    }

    /// Record the caller's location as the record source
    #[track_caller]
    pub fn with_caller(mut self) -> Self {
        self.source = Some(Location::caller().into());
        self
    }
}
