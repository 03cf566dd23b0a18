//! Named threshold/sink pairs

use super::{error::Result, level::Level, record::LogRecord, sink::Sink};
use std::fmt;

/// A sink registered under a name, receiving records at or above `threshold`
///
/// Dropping a filter does not close its sink. Use [`Filter::close`] or let
/// the owning [`Logger`](super::Logger) close it.
pub struct Filter {
    name: String,
    threshold: Level,
    sink: Box<dyn Sink>,
}

impl Filter {
    pub fn new<S: Sink + 'static>(name: impl Into<String>, threshold: Level, sink: S) -> Self {
        Self::from_boxed(name, threshold, Box::new(sink))
    }

    pub fn from_boxed(name: impl Into<String>, threshold: Level, sink: Box<dyn Sink>) -> Self {
        Self {
            name: name.into(),
            threshold,
            sink,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn threshold(&self) -> Level {
        self.threshold
    }

    #[inline]
    pub fn accepts(&self, level: Level) -> bool {
        self.threshold <= level
    }

    pub fn sink(&self) -> &dyn Sink {
        self.sink.as_ref()
    }

    pub(crate) fn deliver(&mut self, record: &LogRecord) -> Result<()> {
        self.sink.receive(record)
    }

    pub fn flush(&mut self) -> Result<()> {
        self.sink.flush()
    }

    pub fn close(&mut self) -> Result<()> {
        self.sink.close()
    }

    pub fn into_sink(self) -> Box<dyn Sink> {
        self.sink
    }
}

impl fmt::Debug for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter")
            .field("name", &self.name)
            .field("threshold", &self.threshold)
            .field("sink", &self.sink.name())
            .finish()
    }
}
