//! In-memory output for JSON sinks

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// In-memory writer for testing and capturing output
///
/// Clones share the same buffer, so a clone handed to a `JsonSink` can be
/// inspected through the original.
///
/// # Example
///
/// ```
/// use logfan_core::sink::{JsonSink, JsonSinkOptions, MemoryWriter};
/// use logfan_core::Logger;
///
/// let output = MemoryWriter::new();
/// let logger = Logger::new(JsonSink::shared(output.clone(), JsonSinkOptions::default()));
/// logger.info("hello", &[]).unwrap();
/// assert_eq!(output.lines().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemoryWriter {
    /// Create a new empty writer
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    /// Written output split into lines
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    /// Discard everything written so far
    pub fn clear(&self) {
        self.buffer.lock().clear();
    }

    /// Number of bytes written
    pub fn len(&self) -> usize {
        self.buffer.lock().len()
    }

    /// Check if nothing has been written
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Write for MemoryWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_writer_shares_buffer() {
        let writer = MemoryWriter::new();
        assert!(writer.is_empty());

        let mut clone = writer.clone();
        clone.write_all(b"first\nsecond\n").unwrap();

        assert_eq!(writer.len(), 13);
        assert_eq!(writer.lines(), vec!["first", "second"]);

        writer.clear();
        assert!(clone.is_empty());
    }
}
