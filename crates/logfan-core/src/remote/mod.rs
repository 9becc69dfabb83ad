//! Remote error-tracking support
//!
//! - `RemoteClient` trait for the service a `RemoteSink` reports to
//! - `RemoteSink`: the `Sink` adapter that turns records into remote events
//! - `RemoteLevel`: the remote severity vocabulary and the level mapping
//! - Built-in clients: `SentryClient`, `MemoryRemoteClient`

mod traits;
mod level;
mod sink;
mod sentry_client;
mod memory_client;

pub use traits::{RemoteClient, RemoteEvent, SharedRemoteClient};
pub use level::RemoteLevel;
pub use sink::RemoteSink;
pub use sentry_client::{SentryClient, TRACES_SAMPLE_RATE};
pub use memory_client::MemoryRemoteClient;
