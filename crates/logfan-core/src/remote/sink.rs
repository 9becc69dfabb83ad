//! Sink adapter that reports records to a remote error tracker

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;

use super::level::RemoteLevel;
use super::traits::{RemoteEvent, SharedRemoteClient};
use crate::level::Level;
use crate::record::{Attr, Record};
use crate::sink::{SharedSink, Sink, SinkResult};

/// A sink that turns qualifying records into remote events
///
/// Records at or above `min_level` are submitted to the remote client as one
/// message event each, with their attributes attached as extras. Records
/// below the threshold are never submitted. In both cases the record is then
/// passed to the chained `next` sink, if there is one.
///
/// Attributes and groups added through `with_attrs` / `with_group` are kept
/// and included in the extras of later events. Keys under a group are
/// qualified with the dot-joined group path, e.g. `request.id`.
pub struct RemoteSink {
    client: SharedRemoteClient,
    min_level: Level,
    next: Option<SharedSink>,
    attrs: Vec<(String, Value)>,
    groups: Vec<String>,
}

impl RemoteSink {
    /// Create an adapter over `client` reporting records at `min_level` and above
    pub fn new(client: SharedRemoteClient, min_level: Level) -> Self {
        Self {
            client,
            min_level,
            next: None,
            attrs: Vec::new(),
            groups: Vec::new(),
        }
    }

    /// Chain a sink that receives every record after this one
    pub fn with_next(mut self, next: SharedSink) -> Self {
        self.next = Some(next);
        self
    }

    fn qualify(&self, key: &str) -> String {
        if self.groups.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.groups.join("."), key)
        }
    }

    /// Flatten derived and record attributes; later keys overwrite earlier ones
    fn collect_extra(&self, record: &Record) -> BTreeMap<String, Value> {
        let mut extra = BTreeMap::new();
        for (key, value) in &self.attrs {
            extra.insert(key.clone(), value.clone());
        }
        for attr in record.attrs.iter().filter(|a| !a.key.is_empty()) {
            extra.insert(self.qualify(&attr.key), attr.value.clone());
        }
        extra
    }

    fn forward(&self, record: &Record) -> SinkResult<()> {
        match &self.next {
            Some(next) => next.handle(record),
            None => Ok(()),
        }
    }

    fn derive(&self, attrs: Vec<(String, Value)>, groups: Vec<String>) -> Self {
        Self {
            client: Arc::clone(&self.client),
            min_level: self.min_level,
            next: self.next.clone(),
            attrs,
            groups,
        }
    }
}

impl Sink for RemoteSink {
    fn name(&self) -> &str {
        "remote"
    }

    fn enabled(&self, level: Level) -> bool {
        level >= self.min_level
    }

    fn handle(&self, record: &Record) -> SinkResult<()> {
        if record.level < self.min_level {
            return self.forward(record);
        }

        let event = RemoteEvent {
            message: record.message.clone(),
            level: RemoteLevel::from(record.level),
            extra: self.collect_extra(record),
        };
        self.client.capture(&event);

        self.forward(record)
    }

    fn with_attrs(&self, attrs: &[Attr]) -> SharedSink {
        let mut derived = self.attrs.clone();
        derived.extend(
            attrs
                .iter()
                .filter(|a| !a.key.is_empty())
                .map(|a| (self.qualify(&a.key), a.value.clone())),
        );
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

impl std::fmt::Debug for RemoteSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteSink")
            .field("client", &self.client.name())
            .field("min_level", &self.min_level)
            .field("next", &self.next.as_ref().map(|n| n.name()))
            .field("attrs", &self.attrs.len())
            .field("groups", &self.groups)
            .finish()
    }
}
