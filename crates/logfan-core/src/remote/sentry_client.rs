//! Sentry-backed remote client
//!
//! Clients are process-wide and keyed by DSN: connecting twice with the same
//! DSN returns the client created the first time instead of initialising the
//! SDK again.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use sentry::types::Dsn;
use sentry::{ClientOptions, Hub, Scope};

use super::traits::{RemoteClient, RemoteEvent};
use crate::error::{LoggerError, LoggerResult};

/// Fraction of transactions sampled for tracing
pub const TRACES_SAMPLE_RATE: f32 = 0.05;

/// Initialised clients by DSN
static CLIENTS: Lazy<Mutex<HashMap<String, Arc<sentry::Client>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Remote client reporting to Sentry
///
/// Each `SentryClient` owns a hub bound to its DSN's client, so events are
/// routed to the right project even when several DSNs are in use.
///
/// # Example
///
/// ```no_run
/// use logfan_core::remote::SentryClient;
///
/// let client = SentryClient::connect("https://key@o0.ingest.sentry.io/0")?;
/// # Ok::<(), logfan_core::LoggerError>(())
/// ```
pub struct SentryClient {
    hub: Arc<Hub>,
    client: Arc<sentry::Client>,
}

impl SentryClient {
    /// Connect to Sentry, initialising the SDK client for `dsn` on first use
    pub fn connect(dsn: &str) -> LoggerResult<Self> {
        Ok(Self::from_client(Self::client_for(dsn)?))
    }

    /// Wrap an already configured SDK client in a fresh hub
    fn from_client(client: Arc<sentry::Client>) -> Self {
        let hub = Arc::new(Hub::new(Some(Arc::clone(&client)), Arc::new(Scope::default())));
        Self { hub, client }
    }

    fn client_for(dsn: &str) -> LoggerResult<Arc<sentry::Client>> {
        let mut clients = CLIENTS.lock();
        if let Some(existing) = clients.get(dsn) {
            return Ok(Arc::clone(existing));
        }

        let parsed: Dsn = dsn
            .parse()
            .map_err(|e: sentry::types::ParseDsnError| LoggerError::InvalidDsn(e.to_string()))?;

        let options = sentry::apply_defaults(ClientOptions {
            dsn: Some(parsed),
            traces_sample_rate: TRACES_SAMPLE_RATE,
            ..Default::default()
        });
        let client = Arc::new(sentry::Client::from(options));
        if !client.is_enabled() {
            return Err(LoggerError::RemoteInit(
                "sentry client has no transport for the configured DSN".to_string(),
            ));
        }

        clients.insert(dsn.to_string(), Arc::clone(&client));
        Ok(client)
    }

    /// Whether a client for `dsn` has already been initialised in this process
    pub fn is_connected(dsn: &str) -> bool {
        CLIENTS.lock().contains_key(dsn)
    }
}

impl RemoteClient for SentryClient {
    fn name(&self) -> &str {
        "sentry"
    }

    fn capture(&self, event: &RemoteEvent) {
        let level = sentry::Level::from(event.level);
        self.hub.with_scope(
            |scope| {
                for (key, value) in &event.extra {
                    scope.set_extra(key, value.clone());
                }
                scope.set_level(Some(level));
            },
            || self.hub.capture_message(&event.message, level),
        );
    }

    fn flush(&self, timeout: Duration) -> bool {
        self.client.flush(Some(timeout))
    }
}

impl std::fmt::Debug for SentryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentryClient")
            .field("enabled", &self.client.is_enabled())
            .finish()
    }
}
