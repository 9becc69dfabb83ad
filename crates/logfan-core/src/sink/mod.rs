//! Sink abstractions and implementations
//!
//! This module provides the pluggable record destinations behind a `Logger`:
//! - `Sink` trait for implementing custom destinations
//! - `JsonSink`: JSON lines on stdout, a file, or any writer
//! - `FanoutSink`: Ordered delivery to two sinks
//! - `MemoryWriter`: Shared in-memory output for capturing JSON lines
//!
//! The remote error-tracking sink lives in `crate::remote`.

mod traits;
mod json;
mod fanout;
mod memory_writer;

pub use traits::{Sink, SharedSink, SinkError, SinkResult};
pub use json::{JsonSink, JsonSinkOptions};
pub use fanout::FanoutSink;
pub use memory_writer::MemoryWriter;
