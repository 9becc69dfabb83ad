//! Remote client trait and event type

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;

use super::level::RemoteLevel;

/// One message event submitted to the remote error tracker
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteEvent {
    pub message: String,
    pub level: RemoteLevel,
    /// Contextual metadata attached to the event's scope
    pub extra: BTreeMap<String, Value>,
}

/// Client for a remote error-tracking service
///
/// Implementations:
/// - `SentryClient`: Reports to Sentry
/// - `MemoryRemoteClient`: Records events in memory for testing
///
/// `capture` is fire-and-forget. It opens a reporting scope, attaches the
/// event's extras and level to it, submits the message and releases the
/// scope before returning. Delivery failures are the client's concern and
/// are never reported back.
pub trait RemoteClient: Send + Sync {
    /// Human-readable name of this client
    fn name(&self) -> &str;

    /// Submit an event
    fn capture(&self, event: &RemoteEvent);

    /// Wait up to `timeout` for buffered events to be delivered
    ///
    /// Returns `true` if the buffer drained in time.
    fn flush(&self, _timeout: std::time::Duration) -> bool {
        true
    }
}

/// Type alias for an Arc-wrapped remote client
pub type SharedRemoteClient = Arc<dyn RemoteClient>;
