//! JSON lines sink

use std::io::{self, Write};
use std::sync::Arc;

use chrono::SecondsFormat;
use parking_lot::Mutex;
use serde_json::{Map, Value};

use super::traits::{SharedSink, Sink, SinkResult};
use crate::level::Level;
use crate::record::{Attr, Record};

/// Options for a `JsonSink`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonSinkOptions {
    /// Minimum level the sink admits
    pub level: Level,
    /// Include the call site as a `source` object
    pub add_source: bool,
}

impl Default for JsonSinkOptions {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            add_source: false,
        }
    }
}

type SharedWriter = Arc<Mutex<Box<dyn Write + Send>>>;

/// Prefix for top-level attributes whose key collides with a built-in field
const CLASH_PREFIX: &str = "fields.";

/// A sink that writes one JSON object per record
///
/// Each line has the keys `time`, `level`, `source` (when enabled), `msg`
/// and then the attributes. Attributes added under a group are nested in an
/// object named after the group; groups that end up empty are left out.
/// A top-level attribute named like a built-in key is written as
/// `fields.<key>` so the record's own fields are never replaced.
///
/// `enabled` is the admission check. `handle` writes every record it is
/// given, so a fan-out that admits a record for its other branch still gets
/// a JSON line for it.
///
/// Derived sinks share the writer of the sink they came from. A line is
/// encoded before the writer lock is taken and written with a single
/// `write_all`, so output from concurrent callers never interleaves.
pub struct JsonSink {
    writer: SharedWriter,
    options: JsonSinkOptions,
    attrs: Map<String, Value>,
    groups: Vec<String>,
}

impl JsonSink {
    /// Create a JSON sink on any writer
    pub fn new(writer: impl Write + Send + 'static, options: JsonSinkOptions) -> Self {
        Self {
            writer: Arc::new(Mutex::new(Box::new(writer))),
            options,
            attrs: Map::new(),
            groups: Vec::new(),
        }
    }

    /// Create a JSON sink writing to standard output
    pub fn stdout(options: JsonSinkOptions) -> Self {
        Self::new(io::stdout(), options)
    }

    /// Create a JSON sink and wrap it for use behind a `Logger`
    pub fn shared(writer: impl Write + Send + 'static, options: JsonSinkOptions) -> SharedSink {
        Arc::new(Self::new(writer, options))
    }

    fn derive(&self, attrs: Map<String, Value>, groups: Vec<String>) -> Self {
        Self {
            writer: Arc::clone(&self.writer),
            options: self.options,
            attrs,
            groups,
        }
    }

    fn encode(&self, record: &Record) -> SinkResult<Vec<u8>> {
        let mut object = Map::new();
        object.insert(
            "time".to_string(),
            Value::String(record.time.to_rfc3339_opts(SecondsFormat::Nanos, true)),
        );
        object.insert("level".to_string(), Value::String(record.level.to_string()));
        if self.options.add_source {
            if let Some(source) = record.source {
                object.insert("source".to_string(), serde_json::to_value(source)?);
            }
        }
        object.insert("msg".to_string(), Value::String(record.message.clone()));

        let mut attrs = self.attrs.clone();
        insert_under_groups(&mut attrs, &self.groups, &record.attrs);
        for (key, value) in attrs {
            if object.contains_key(&key) {
                object.insert(format!("{}{}", CLASH_PREFIX, key), value);
            } else {
                object.insert(key, value);
            }
        }

        let mut line = serde_json::to_vec(&Value::Object(object))?;
        line.push(b'\n');
        Ok(line)
    }
}

/// Insert `attrs` into `root` below the nested `groups` path
///
/// The group objects are only created when at least one attribute will land
/// in them.
fn insert_under_groups(root: &mut Map<String, Value>, groups: &[String], attrs: &[Attr]) {
    if attrs.iter().all(|a| a.key.is_empty()) {
        return;
    }

    let mut target = root;
    for group in groups {
        let entry = target
            .entry(group.clone())
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        let Some(map) = entry.as_object_mut() else {
            return;
        };
        target = map;
    }

    for attr in attrs.iter().filter(|a| !a.key.is_empty()) {
        target.insert(attr.key.clone(), attr.value.clone());
    }
}

impl Sink for JsonSink {
    fn name(&self) -> &str {
        "json"
    }

    fn enabled(&self, level: Level) -> bool {
        level >= self.options.level
    }

    fn handle(&self, record: &Record) -> SinkResult<()> {
        let line = self.encode(record)?;
        let mut writer = self.writer.lock();
        writer.write_all(&line)?;
        writer.flush()?;
        Ok(())
    }

    fn with_attrs(&self, attrs: &[Attr]) -> SharedSink {
        let mut derived = self.attrs.clone();
        insert_under_groups(&mut derived, &self.groups, attrs);
        Arc::new(self.derive(derived, self.groups.clone()))
    }

    fn with_group(&self, name: &str) -> SharedSink {
        let mut groups = self.groups.clone();
        if !name.is_empty() {
            groups.push(name.to_string());
        }
        Arc::new(self.derive(self.attrs.clone(), groups))
    }
}

impl std::fmt::Debug for JsonSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonSink")
            .field("options", &self.options)
            .field("attrs", &self.attrs)
            .field("groups", &self.groups)
            .finish()
    }
}
