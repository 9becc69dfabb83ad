//! logfan Core
//!
//! Structured JSON logging with optional fan-out to a remote error tracker.
//!
//! A `Logger` hands each record to a `Sink`. The factory builds one of two
//! shapes from a `Config`:
//! - JSON only: a `JsonSink` writing one object per line to stdout
//! - Fan-out: the same `JsonSink`, then a `RemoteSink` reporting WARN and
//!   above to Sentry
//!
//! ```rust,no_run
//! use logfan_core::{attrs, create_tagged, Config};
//!
//! let config = Config::new("debug").with_remote("https://key@o0.ingest.sentry.io/0");
//! let logger = create_tagged(&config, "worker")?;
//!
//! logger.info("job started", &attrs!["job" => 17])?;
//! logger.error("job failed", &attrs!["job" => 17, "reason" => "timeout"])?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod level;
pub mod record;
pub mod sink;
pub mod remote;
pub mod config;
pub mod error;
pub mod logger;
pub mod factory;

// Re-export commonly used types
pub use level::Level;
pub use record::{Attr, Record, Source};

pub use sink::{Sink, SharedSink, SinkError, SinkResult, JsonSink, JsonSinkOptions, FanoutSink};

pub use remote::{RemoteClient, RemoteLevel, RemoteSink, SentryClient};

pub use config::Config;
pub use error::{LoggerError, LoggerResult};
pub use logger::Logger;
pub use factory::{create, create_tagged, LoggerFactory, REMOTE_MIN_LEVEL, FLUSH_TIMEOUT};
