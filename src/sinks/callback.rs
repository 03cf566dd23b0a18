//! Closure-backed sink

use crate::core::{LogRecord, LoggerError, Result, Sink};
use std::fmt;

type CloseHook = Box<dyn FnMut() + Send + Sync>;

/// Sink that hands every record to a closure
///
/// # Example
///
/// ```
/// use filter_logger::prelude::*;
///
/// let logger = Logger::new();
/// logger.add_filter("print", Level::INFO, FnSink::new(|record: &LogRecord| {
///     println!("{}", record.message);
/// }));
/// logger.info("hello");
/// ```
pub struct FnSink<F> {
    on_receive: F,
    on_close: Option<CloseHook>,
    closed: bool,
}

impl<F> FnSink<F>
where
    F: FnMut(&LogRecord) + Send + Sync,
{
    pub fn new(on_receive: F) -> Self {
        Self {
            on_receive,
            on_close: None,
            closed: false,
        }
    }

    /// Run `hook` the first time the sink is closed
    #[must_use]
    pub fn on_close(mut self, hook: impl FnMut() + Send + Sync + 'static) -> Self {
        self.on_close = Some(Box::new(hook));
        self
    }
}

impl<F> Sink for FnSink<F>
where
    F: FnMut(&LogRecord) + Send + Sync,
{
    fn receive(&mut self, record: &LogRecord) -> Result<()> {
        if self.closed {
            return Err(LoggerError::sink_closed(self.name()));
        }
        (self.on_receive)(record);
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if !self.closed {
            self.closed = true;
            if let Some(ref mut hook) = self.on_close {
                hook();
            }
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "fn"
    }
}

impl<F> fmt::Debug for FnSink<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSink")
            .field("closed", &self.closed)
            .finish_non_exhaustive()
    }
}
