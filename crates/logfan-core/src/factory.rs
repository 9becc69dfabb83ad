//! Logger construction from a `Config`
//!
//! A local-only config yields a logger over a single `JsonSink` on stdout. A
//! remote-enabled config with a DSN yields a `FanoutSink` that writes JSON
//! first and then reports WARN and above to the remote tracker.

use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::error::LoggerResult;
use crate::level::Level;
use crate::logger::Logger;
use crate::record::Attr;
use crate::remote::{RemoteClient, RemoteSink, SentryClient, SharedRemoteClient};
use crate::sink::{FanoutSink, JsonSink, JsonSinkOptions, SharedSink};

/// Minimum level reported to the remote tracker
pub const REMOTE_MIN_LEVEL: Level = Level::WARN;

/// Upper bound on the flush performed after connecting a remote client
pub const FLUSH_TIMEOUT: Duration = Duration::from_secs(2);

/// Factory function type for connecting a remote client to a DSN
pub type RemoteClientFactory = Box<dyn Fn(&str) -> LoggerResult<SharedRemoteClient> + Send + Sync>;

/// Factory function type for opening the JSON output
pub type WriterFactory = Box<dyn Fn() -> Box<dyn Write + Send> + Send + Sync>;

/// Flushes a remote client when dropped
struct FlushGuard<'a> {
    client: &'a dyn RemoteClient,
    timeout: Duration,
}

impl Drop for FlushGuard<'_> {
    fn drop(&mut self) {
        // Best effort: proceed whether or not the buffer drained
        let _ = self.client.flush(self.timeout);
    }
}

/// Builds loggers from configuration
///
/// The default factory writes JSON to stdout and reports to Sentry. Both can
/// be replaced, which is how tests observe output and remote submissions.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use logfan_core::remote::{MemoryRemoteClient, SharedRemoteClient};
/// use logfan_core::sink::MemoryWriter;
/// use logfan_core::{Config, LoggerFactory};
///
/// let output = MemoryWriter::new();
/// let remote = Arc::new(MemoryRemoteClient::new());
/// let events = remote.clone();
///
/// let factory = LoggerFactory::new()
///     .with_writer(output.clone())
///     .with_remote_factory(move |_dsn| {
///         let client: SharedRemoteClient = remote.clone();
///         Ok(client)
///     });
///
/// let logger = factory.create(&Config::new("info").with_remote("https://key@host/1")).unwrap();
/// logger.error("disk full", &[]).unwrap();
///
/// assert_eq!(output.lines().len(), 1);
/// assert_eq!(events.len(), 1);
/// ```
pub struct LoggerFactory {
    writer: WriterFactory,
    remote: RemoteClientFactory,
}

impl Default for LoggerFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerFactory {
    /// Create a factory writing to stdout and reporting to Sentry
    pub fn new() -> Self {
        Self {
            writer: Box::new(|| -> Box<dyn Write + Send> { Box::new(io::stdout()) }),
            remote: Box::new(|dsn: &str| {
                let client: SharedRemoteClient = Arc::new(SentryClient::connect(dsn)?);
                Ok(client)
            }),
        }
    }

    /// Write JSON output to clones of `writer` instead of stdout
    pub fn with_writer<W>(mut self, writer: W) -> Self
    where
        W: Write + Clone + Send + Sync + 'static,
    {
        self.writer = Box::new(move || -> Box<dyn Write + Send> { Box::new(writer.clone()) });
        self
    }

    /// Connect remote clients with `factory` instead of Sentry
    pub fn with_remote_factory<F>(mut self, factory: F) -> Self
    where
        F: Fn(&str) -> LoggerResult<SharedRemoteClient> + Send + Sync + 'static,
    {
        self.remote = Box::new(factory);
        self
    }

    /// Build a logger for `config`
    ///
    /// Fails only when the remote client cannot be initialised.
    pub fn create(&self, config: &Config) -> LoggerResult<Logger> {
        let json: SharedSink = Arc::new(JsonSink::new(
            (self.writer)(),
            JsonSinkOptions {
                level: config.threshold(),
                add_source: true,
            },
        ));

        if !config.remote_active() {
            return Ok(Logger::new(json));
        }

        let client = (self.remote)(&config.remote_dsn)?;
        let _flush = FlushGuard {
            client: client.as_ref(),
            timeout: FLUSH_TIMEOUT,
        };

        let remote: SharedSink = Arc::new(RemoteSink::new(Arc::clone(&client), REMOTE_MIN_LEVEL));
        Ok(Logger::new(Arc::new(FanoutSink::new(json, remote))))
    }

    /// Build a logger for `config` that tags every record with `tag`
    pub fn create_tagged(&self, config: &Config, tag: &str) -> LoggerResult<Logger> {
        let logger = self.create(config)?;
        Ok(logger.with(&[Attr::new("tag", tag)]))
    }
}

impl std::fmt::Debug for LoggerFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerFactory").finish_non_exhaustive()
    }
}

/// Build a logger writing to stdout and, when configured, reporting to Sentry
pub fn create(config: &Config) -> LoggerResult<Logger> {
    LoggerFactory::new().create(config)
}

/// Like `create`, adding a `tag` attribute to every record
pub fn create_tagged(config: &Config, tag: &str) -> LoggerResult<Logger> {
    LoggerFactory::new().create_tagged(config, tag)
}
