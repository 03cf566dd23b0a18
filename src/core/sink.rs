//! Sink trait for log output destinations

use super::{error::Result, record::LogRecord};

/// A destination that consumes log records and later releases its resources
///
/// Sinks are owned by the logger they are registered with. `close` may be
/// called more than once and must not fail the second time just because the
/// sink is already closed.
pub trait Sink: Send + Sync {
    fn receive(&mut self, record: &LogRecord) -> Result<()>;
    fn close(&mut self) -> Result<()>;
    fn name(&self) -> &str;

    /// Push buffered output to its destination; unbuffered sinks need not override
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn receive(&mut self, record: &LogRecord) -> Result<()> {
        (**self).receive(record)
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
}
