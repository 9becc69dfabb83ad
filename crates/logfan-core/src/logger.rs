//! User-facing logger handle

use crate::level::Level;
use crate::record::{Attr, Record};
use crate::sink::{SharedSink, SinkResult};

/// A structured logger backed by a single sink
///
/// Cloning is cheap and clones share the sink. `Logger` is `Send + Sync`;
/// sinks do not mutate shared state while handling, so one logger can be
/// used from many threads.
///
/// Emission methods capture the caller's file and line and return the sink
/// chain's result, so output failures reach the caller.
///
/// # Example
///
/// ```
/// use logfan_core::sink::{JsonSink, JsonSinkOptions, MemoryWriter};
/// use logfan_core::{attrs, Logger};
///
/// let output = MemoryWriter::new();
/// let logger = Logger::new(JsonSink::shared(output.clone(), JsonSinkOptions::default()))
///     .with(&attrs!["service" => "billing"]);
///
/// logger.info("invoice sent", &attrs!["invoice" => 1042]).unwrap();
/// assert!(output.contents().contains(r#""service":"billing""#));
/// ```
#[derive(Clone)]
pub struct Logger {
    sink: SharedSink,
}

impl Logger {
    /// Create a logger on top of `sink`
    pub fn new(sink: SharedSink) -> Self {
        Self { sink }
    }

    /// The sink records are handed to
    pub fn sink(&self) -> &SharedSink {
        &self.sink
    }

    /// Whether a record at `level` would be processed
    pub fn enabled(&self, level: Level) -> bool {
        self.sink.enabled(level)
    }

    /// Emit a record at an arbitrary level
    #[track_caller]
    pub fn log(&self, level: Level, message: &str, attrs: &[Attr]) -> SinkResult<()> {
        if !self.sink.enabled(level) {
            return Ok(());
        }
        let record = Record::new(level, message)
            .with_attrs(attrs.iter().cloned())
            .with_caller();
        self.sink.handle(&record)
    }

    /// Emit a debug record
    #[track_caller]
    pub fn debug(&self, message: &str, attrs: &[Attr]) -> SinkResult<()> {
        self.log(Level::DEBUG, message, attrs)
    }

    /// Emit an info record
    #[track_caller]
    pub fn info(&self, message: &str, attrs: &[Attr]) -> SinkResult<()> {
        self.log(Level::INFO, message, attrs)
    }

    /// Emit a warning record
    #[track_caller]
    pub fn warn(&self, message: &str, attrs: &[Attr]) -> SinkResult<()> {
        self.log(Level::WARN, message, attrs)
    }

    /// Emit an error record
    #[track_caller]
    pub fn error(&self, message: &str, attrs: &[Attr]) -> SinkResult<()> {
        self.log(Level::ERROR, message, attrs)
    }

    /// Derive a logger that adds `attrs` to every record
    pub fn with(&self, attrs: &[Attr]) -> Logger {
        if attrs.is_empty() {
            return self.clone();
        }
        Logger::new(self.sink.with_attrs(attrs))
    }

    /// Derive a logger that nests later attributes under `name`
    pub fn with_group(&self, name: &str) -> Logger {
        if name.is_empty() {
            return self.clone();
        }
        Logger::new(self.sink.with_group(name))
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("sink", &self.sink.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs;
    use crate::sink::{JsonSink, JsonSinkOptions, MemoryWriter};
    use serde_json::Value;

    fn json_logger(level: Level) -> (Logger, MemoryWriter) {
        let output = MemoryWriter::new();
        let sink = JsonSink::shared(output.clone(), JsonSinkOptions { level, add_source: true });
        (Logger::new(sink), output)
    }

    fn parse(line: &str) -> Value {
        serde_json::from_str(line).unwrap()
    }

    #[test]
    fn test_logger_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Logger>();
    }

    #[test]
    fn test_logger_emits_levels() {
        let (logger, output) = json_logger(Level::DEBUG);
        logger.debug("d", &[]).unwrap();
        logger.info("i", &[]).unwrap();
        logger.warn("w", &[]).unwrap();
        logger.error("e", &[]).unwrap();
        logger.log(Level::new(2), "custom", &[]).unwrap();

        let levels: Vec<_> = output
            .lines()
            .iter()
            .map(|l| parse(l)["level"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(levels, vec!["DEBUG", "INFO", "WARN", "ERROR", "INFO+2"]);
    }

    #[test]
    fn test_logger_skips_disabled_levels() {
        let (logger, output) = json_logger(Level::WARN);
        assert!(!logger.enabled(Level::INFO));
        logger.info("dropped", &[]).unwrap();
        logger.warn("kept", &[]).unwrap();

        let lines = output.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(parse(&lines[0])["msg"], "kept");
    }

    #[test]
    fn test_logger_captures_call_site() {
        let (logger, output) = json_logger(Level::INFO);
        let line = line!() + 1;
        logger.info("here", &[]).unwrap();

        let record = parse(&output.lines()[0]);
        assert!(record["source"]["file"].as_str().unwrap().ends_with("logger.rs"));
        assert_eq!(record["source"]["line"], line);
    }

    #[test]
    fn test_logger_with_and_group() {
        let (logger, output) = json_logger(Level::INFO);
        let scoped = logger.with(&attrs!["tag" => "jobs"]).with_group("job");

        scoped.info("ran", &attrs!["id" => 9]).unwrap();
        logger.info("base", &attrs!["id" => 1]).unwrap();

        let lines = output.lines();
        let first = parse(&lines[0]);
        assert_eq!(first["tag"], "jobs");
        assert_eq!(first["job"]["id"], 9);

        let second = parse(&lines[1]);
        assert!(second.get("tag").is_none());
        assert_eq!(second["id"], 1);
    }

    #[test]
    fn test_logger_empty_derivations_are_noops() {
        let (logger, _) = json_logger(Level::INFO);
        assert!(std::sync::Arc::ptr_eq(logger.with(&[]).sink(), logger.sink()));
        assert!(std::sync::Arc::ptr_eq(logger.with_group("").sink(), logger.sink()));
    }
}
