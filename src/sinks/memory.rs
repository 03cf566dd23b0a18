//! In-memory sink, mostly for tests and diagnostics

use crate::core::{LogRecord, LoggerError, Result, Sink};
use parking_lot::Mutex;
use std::sync::Arc;

/// Shared view of the records a [`MemorySink`] has received
///
/// Stays readable after the sink itself has moved into a logger.
#[derive(Debug, Clone, Default)]
pub struct MemoryRecords {
    inner: Arc<Mutex<Vec<LogRecord>>>,
}

impl MemoryRecords {
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn records(&self) -> Vec<LogRecord> {
        self.inner.lock().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.inner
            .lock()
            .iter()
            .map(|record| record.message.clone())
            .collect()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

#[derive(Debug)]
pub struct MemorySink {
    records: MemoryRecords,
    closed: bool,
}

impl MemorySink {
    /// Create a sink plus the handle used to inspect what it received
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> (Self, MemoryRecords) {
        let records = MemoryRecords::default();
        let sink = Self {
            records: records.clone(),
            closed: false,
        };
        (sink, records)
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl Sink for MemorySink {
    fn receive(&mut self, record: &LogRecord) -> Result<()> {
        if self.closed {
            return Err(LoggerError::sink_closed(self.name()));
        }
        self.records.inner.lock().push(record.clone());
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.closed = true;
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Level;

    #[test]
    fn test_records_visible_through_handle() {
        let (mut sink, records) = MemorySink::new();
        sink.receive(&LogRecord::new(Level::INFO, "one")).unwrap();
        sink.receive(&LogRecord::new(Level::ERROR, "two")).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records.messages(), vec!["one", "two"]);
        assert_eq!(records.records()[1].level, Level::ERROR);

        records.clear();
        assert!(records.is_empty());
    }

    #[test]
    fn test_closed_sink_rejects_records() {
        let (mut sink, records) = MemorySink::new();
        sink.close().unwrap();
        sink.close().unwrap();
        assert!(sink.is_closed());
        assert!(sink.receive(&LogRecord::new(Level::INFO, "late")).is_err());
        assert!(records.is_empty());
    }
}
