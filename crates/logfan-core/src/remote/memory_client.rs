//! In-memory remote client

use parking_lot::RwLock;

use super::traits::{RemoteClient, RemoteEvent};

/// Remote client that keeps captured events in memory
///
/// Stands in for the real error tracker in tests.
///
/// # Example
///
/// ```
/// use logfan_core::remote::{MemoryRemoteClient, RemoteClient, RemoteEvent, RemoteLevel};
///
/// let client = MemoryRemoteClient::new();
/// client.capture(&RemoteEvent {
///     message: "disk full".to_string(),
///     level: RemoteLevel::Error,
///     extra: Default::default(),
/// });
/// assert_eq!(client.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MemoryRemoteClient {
    events: RwLock<Vec<RemoteEvent>>,
    flushes: RwLock<usize>,
}

impl MemoryRemoteClient {
    /// Create a client with no recorded events
    pub fn new() -> Self {
        Self::default()
    }

    /// Events captured so far, oldest first
    pub fn events(&self) -> Vec<RemoteEvent> {
        self.events.read().clone()
    }

    /// Number of captured events
    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    /// Check if nothing has been captured
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of times `flush` was called
    pub fn flush_count(&self) -> usize {
        *self.flushes.read()
    }

    /// Forget all captured events
    pub fn clear(&self) {
        self.events.write().clear();
    }
}

impl RemoteClient for MemoryRemoteClient {
    fn name(&self) -> &str {
        "memory"
    }

    fn capture(&self, event: &RemoteEvent) {
        self.events.write().push(event.clone());
    }

    fn flush(&self, _timeout: std::time::Duration) -> bool {
        *self.flushes.write() += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::RemoteLevel;
    use std::time::Duration;

    #[test]
    fn test_memory_client_records_events() {
        let client = MemoryRemoteClient::new();
        assert!(client.is_empty());

        let mut event = RemoteEvent {
            message: "first".to_string(),
            level: RemoteLevel::Warning,
            extra: Default::default(),
        };
        client.capture(&event);
        event.message = "second".to_string();
        client.capture(&event);

        let messages: Vec<_> = client.events().into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["first", "second"]);

        client.clear();
        assert!(client.is_empty());
    }

    #[test]
    fn test_memory_client_counts_flushes() {
        let client = MemoryRemoteClient::new();
        assert!(client.flush(Duration::from_secs(2)));
        assert!(client.flush(Duration::from_secs(2)));
        assert_eq!(client.flush_count(), 2);
    }
}
