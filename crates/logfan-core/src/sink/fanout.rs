//! Sink that offers each record to two sinks in order

use std::sync::Arc;

use super::traits::{SharedSink, Sink, SinkResult};
use crate::level::Level;
use crate::record::{Attr, Record};

/// A sink that delivers every record to a primary and then a secondary sink
///
/// The primary sink always sees the record first. If it fails, the error is
/// returned and the secondary sink is not invoked for that record.
///
/// # Example
///
/// ```
/// use logfan_core::sink::{FanoutSink, JsonSink, JsonSinkOptions, MemoryWriter, Sink};
/// use logfan_core::Level;
///
/// let local = JsonSink::shared(MemoryWriter::new(), JsonSinkOptions::default());
/// let audit = JsonSink::shared(MemoryWriter::new(), JsonSinkOptions { level: Level::ERROR, add_source: false });
///
/// let fanout = FanoutSink::new(local, audit);
/// assert!(fanout.enabled(Level::INFO));
/// ```
pub struct FanoutSink {
    primary: SharedSink,
    secondary: SharedSink,
}

impl FanoutSink {
    /// Create a fan-out over `primary` then `secondary`
    pub fn new(primary: SharedSink, secondary: SharedSink) -> Self {
        Self { primary, secondary }
    }
}

impl Sink for FanoutSink {
    fn name(&self) -> &str {
        "fanout"
    }

    fn enabled(&self, level: Level) -> bool {
        // Processed if either branch wants it
        self.primary.enabled(level) || self.secondary.enabled(level)
    }

    fn handle(&self, record: &Record) -> SinkResult<()> {
        self.primary.handle(record)?;
        self.secondary.handle(record)
    }

    fn with_attrs(&self, attrs: &[Attr]) -> SharedSink {
        Arc::new(Self::new(
            self.primary.with_attrs(attrs),
            self.secondary.with_attrs(attrs),
        ))
    }

    fn with_group(&self, name: &str) -> SharedSink {
        Arc::new(Self::new(
            self.primary.with_group(name),
            self.secondary.with_group(name),
        ))
    }
}

impl std::fmt::Debug for FanoutSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FanoutSink")
            .field("primary", &self.primary.name())
            .field("secondary", &self.secondary.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs;
    use crate::sink::SinkError;
    use parking_lot::Mutex;

    /// Records every call into a shared journal
    struct JournalSink {
        label: &'static str,
        min_level: Level,
        fail: bool,
        prefix: Vec<String>,
        journal: Arc<Mutex<Vec<String>>>,
    }

    impl JournalSink {
        fn shared(
            label: &'static str,
            min_level: Level,
            fail: bool,
            journal: &Arc<Mutex<Vec<String>>>,
        ) -> SharedSink {
            Arc::new(Self {
                label,
                min_level,
                fail,
                prefix: Vec::new(),
                journal: Arc::clone(journal),
            })
        }

        fn derive(&self, entry: String) -> SharedSink {
            let mut prefix = self.prefix.clone();
            prefix.push(entry);
            Arc::new(Self {
                label: self.label,
                min_level: self.min_level,
                fail: self.fail,
                prefix,
                journal: Arc::clone(&self.journal),
            })
        }
    }

    impl Sink for JournalSink {
        fn name(&self) -> &str {
            self.label
        }

        fn enabled(&self, level: Level) -> bool {
            level >= self.min_level
        }

        fn handle(&self, record: &Record) -> SinkResult<()> {
            let mut entry = format!("{}:{}", self.label, record.message);
            for p in &self.prefix {
                entry.push_str(&format!("[{}]", p));
            }
            self.journal.lock().push(entry);
            if self.fail {
                return Err(SinkError::Other(format!("{} failed", self.label)));
            }
            Ok(())
        }

        fn with_attrs(&self, attrs: &[Attr]) -> SharedSink {
            let keys: Vec<_> = attrs.iter().map(|a| a.key.as_str()).collect();
            self.derive(format!("attrs={}", keys.join(",")))
        }

        fn with_group(&self, name: &str) -> SharedSink {
            self.derive(format!("group={}", name))
        }
    }

    #[test]
    fn test_fanout_order() {
        let journal = Arc::new(Mutex::new(Vec::new()));
        let fanout = FanoutSink::new(
            JournalSink::shared("json", Level::INFO, false, &journal),
            JournalSink::shared("remote", Level::WARN, false, &journal),
        );

        fanout.handle(&Record::new(Level::ERROR, "boom")).unwrap();

        assert_eq!(*journal.lock(), vec!["json:boom", "remote:boom"]);
    }

    #[test]
    fn test_fanout_primary_failure_skips_secondary() {
        let journal = Arc::new(Mutex::new(Vec::new()));
        let fanout = FanoutSink::new(
            JournalSink::shared("json", Level::INFO, true, &journal),
            JournalSink::shared("remote", Level::WARN, false, &journal),
        );

        let err = fanout.handle(&Record::new(Level::ERROR, "boom")).unwrap_err();

        assert_eq!(err.to_string(), "Sink error: json failed");
        assert_eq!(*journal.lock(), vec!["json:boom"]);
    }

    #[test]
    fn test_fanout_secondary_failure_is_returned() {
        let journal = Arc::new(Mutex::new(Vec::new()));
        let fanout = FanoutSink::new(
            JournalSink::shared("json", Level::INFO, false, &journal),
            JournalSink::shared("remote", Level::WARN, true, &journal),
        );

        let err = fanout.handle(&Record::new(Level::ERROR, "boom")).unwrap_err();

        assert_eq!(err.to_string(), "Sink error: remote failed");
        assert_eq!(journal.lock().len(), 2);
    }

    #[test]
    fn test_fanout_enabled_is_either_branch() {
        let journal = Arc::new(Mutex::new(Vec::new()));
        let fanout = FanoutSink::new(
            JournalSink::shared("json", Level::ERROR, false, &journal),
            JournalSink::shared("remote", Level::WARN, false, &journal),
        );

        assert!(!fanout.enabled(Level::DEBUG));
        assert!(!fanout.enabled(Level::INFO));
        assert!(fanout.enabled(Level::WARN));
        assert!(fanout.enabled(Level::ERROR));
    }

    #[test]
    fn test_fanout_derivation_reaches_both_branches() {
        let journal = Arc::new(Mutex::new(Vec::new()));
        let fanout = FanoutSink::new(
            JournalSink::shared("json", Level::INFO, false, &journal),
            JournalSink::shared("remote", Level::INFO, false, &journal),
        );

        let derived = fanout.with_attrs(&attrs!["tag" => "x"]).with_group("req");
        derived.handle(&Record::new(Level::INFO, "m")).unwrap();
        fanout.handle(&Record::new(Level::INFO, "plain")).unwrap();

        assert_eq!(
            *journal.lock(),
            vec![
                "json:m[attrs=tag][group=req]",
                "remote:m[attrs=tag][group=req]",
                "json:plain",
                "remote:plain",
            ]
        );
        assert_eq!(derived.name(), "fanout");
    }
}
