//! Sink trait definition

use std::sync::Arc;

use thiserror::Error;

use crate::level::Level;
use crate::record::{Attr, Record};

/// Errors a sink can report while handling a record
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Sink error: {0}")]
    Other(String),
}

pub type SinkResult<T> = Result<T, SinkError>;

/// Destination for log records
///
/// Implementations:
/// - `JsonSink`: One JSON object per line on any writer
/// - `RemoteSink`: Forwards qualifying records to a remote error tracker
/// - `FanoutSink`: Offers each record to two sinks in order
///
/// Sinks are immutable values. `with_attrs` and `with_group` return a new
/// sink and leave `self` untouched; derived sinks keep the threshold and any
/// downstream chain of the original.
pub trait Sink: Send + Sync {
    /// Human-readable name of this sink
    fn name(&self) -> &str;

    /// Whether a record at `level` would be processed
    fn enabled(&self, level: Level) -> bool;

    /// Process a record
    fn handle(&self, record: &Record) -> SinkResult<()>;

    /// Derive a sink that adds `attrs` to every record it handles
    fn with_attrs(&self, attrs: &[Attr]) -> SharedSink;

    /// Derive a sink that nests subsequent attributes under `name`
    fn with_group(&self, name: &str) -> SharedSink;
}

/// Type alias for an Arc-wrapped sink
pub type SharedSink = Arc<dyn Sink>;
