//! Main logger implementation

use super::{
    error::Result,
    filter::Filter,
    level::Level,
    metrics::LoggerMetrics,
    record::LogRecord,
    sink::Sink,
};
use parking_lot::RwLock;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;

/// A set of named filters plus the logging entry points that feed them
///
/// Delivery is synchronous: every accepting sink has received the record
/// before a logging call returns. Sinks must not log back into the logger
/// that owns them; the filter map is locked during delivery.
pub struct Logger {
    filters: RwLock<HashMap<String, Filter>>,
    metrics: LoggerMetrics,
}

impl Logger {
    #[must_use]
    pub fn new() -> Self {
        Self {
            filters: RwLock::new(HashMap::new()),
            metrics: LoggerMetrics::new(),
        }
    }

    /// Register `sink` under `name`, replacing any filter already using it
    ///
    /// The replaced filter is returned as-is; its sink has not been closed.
    pub fn add_filter<S: Sink + 'static>(
        &self,
        name: impl Into<String>,
        threshold: Level,
        sink: S,
    ) -> Option<Filter> {
        self.insert_filter(Filter::new(name, threshold, sink))
    }

    pub fn insert_filter(&self, filter: Filter) -> Option<Filter> {
        let mut filters = self.filters.write();
        filters.insert(filter.name().to_string(), filter)
    }

    /// Unregister a filter without closing its sink
    pub fn remove_filter(&self, name: &str) -> Option<Filter> {
        self.filters.write().remove(name)
    }

    pub fn filter_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.filters.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn filter_count(&self) -> usize {
        self.filters.read().len()
    }

    /// Whether any registered filter would accept a record at `level`
    pub fn is_enabled(&self, level: Level) -> bool {
        self.filters.read().values().any(|filter| filter.accepts(level))
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Render `args` and deliver the message at `level`
    ///
    /// Usually reached through the [`logf!`](crate::logf) macro.
    pub fn logf(&self, level: Level, args: fmt::Arguments<'_>) {
        if !self.is_enabled(level) {
            return;
        }
        self.dispatch(LogRecord::new(level, args.to_string()));
    }

    /// Log the string form of `message` at `level`
    pub fn log(&self, level: Level, message: impl fmt::Display) {
        if !self.is_enabled(level) {
            return;
        }
        self.dispatch(LogRecord::new(level, message.to_string()));
    }

    /// Deliver a prebuilt record to every filter whose threshold it meets
    pub fn dispatch(&self, record: LogRecord) {
        self.metrics.record_dispatched();

        let mut filters = self.filters.write();
        let mut accepted = 0usize;
        for filter in filters.values_mut() {
            if !filter.accepts(record.level) {
                continue;
            }
            accepted += 1;
            Self::deliver(filter, &record, &self.metrics);
        }

        if accepted == 0 {
            self.metrics.record_unrouted();
        }
    }

    /// Deliver to one filter with panic isolation
    ///
    /// A sink that errors or panics is reported on stderr and counted; the
    /// remaining filters still receive the record.
    fn deliver(filter: &mut Filter, record: &LogRecord, metrics: &LoggerMetrics) {
        let result =
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| filter.deliver(record)));

        match result {
            Ok(Ok(())) => {
                metrics.record_delivered();
            }
            Ok(Err(e)) => {
                eprintln!(
                    "[LOGGER ERROR] Filter '{}' failed to deliver: {}",
                    filter.name(),
                    e
                );
                metrics.record_sink_failure();
            }
            Err(panic_info) => {
                eprintln!(
                    "[LOGGER CRITICAL] Filter '{}' panicked: {}. \
                     Other filters continue to function.",
                    filter.name(),
                    panic_message(panic_info.as_ref())
                );
                metrics.record_sink_failure();
            }
        }
    }

    #[inline]
    pub fn finest(&self, message: impl fmt::Display) {
        self.log(Level::FINEST, message);
    }

    #[inline]
    pub fn fine(&self, message: impl fmt::Display) {
        self.log(Level::FINE, message);
    }

    #[inline]
    pub fn debug(&self, message: impl fmt::Display) {
        self.log(Level::DEBUG, message);
    }

    #[inline]
    pub fn trace(&self, message: impl fmt::Display) {
        self.log(Level::TRACE, message);
    }

    #[inline]
    pub fn info(&self, message: impl fmt::Display) {
        self.log(Level::INFO, message);
    }

    #[inline]
    pub fn warn(&self, message: impl fmt::Display) {
        self.log(Level::WARNING, message);
    }

    #[inline]
    pub fn error(&self, message: impl fmt::Display) {
        self.log(Level::ERROR, message);
    }

    #[inline]
    pub fn critical(&self, message: impl fmt::Display) {
        self.log(Level::CRITICAL, message);
    }

    /// Flush every sink, stopping at the first error
    pub fn flush(&self) -> Result<()> {
        let mut filters = self.filters.write();
        for filter in filters.values_mut() {
            filter.flush()?;
        }
        Ok(())
    }

    /// Swap in a new filter set in one step, closing the previous sinks
    ///
    /// Later filters with a duplicate name replace earlier ones; the
    /// superseded duplicates are closed along with the previous set.
    pub fn replace_filters(&self, filters: impl IntoIterator<Item = Filter>) {
        let mut replacement = HashMap::new();
        let mut superseded = Vec::new();
        for filter in filters {
            if let Some(earlier) = replacement.insert(filter.name().to_string(), filter) {
                superseded.push(earlier);
            }
        }
        let previous = std::mem::replace(&mut *self.filters.write(), replacement);
        self.close_filters(superseded.into_iter().chain(previous.into_values()));
    }

    /// Close every sink and forget every filter
    ///
    /// Safe on an empty logger and safe to call again. Close errors are
    /// reported on stderr; every sink is still attempted.
    pub fn close(&self) {
        let drained: Vec<Filter> = {
            let mut filters = self.filters.write();
            filters.drain().map(|(_, filter)| filter).collect()
        };
        self.close_filters(drained);
    }

    // Runs without the map lock so sinks may touch the logger while closing
    fn close_filters(&self, filters: impl IntoIterator<Item = Filter>) {
        for mut filter in filters {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| filter.close()));
            match result {
                Ok(Ok(())) => {
                    self.metrics.record_sink_closed();
                }
                Ok(Err(e)) => {
                    eprintln!(
                        "[LOGGER ERROR] Failed to close filter '{}': {}",
                        filter.name(),
                        e
                    );
                }
                Err(panic_info) => {
                    eprintln!(
                        "[LOGGER CRITICAL] Filter '{}' panicked while closing: {}",
                        filter.name(),
                        panic_message(panic_info.as_ref())
                    );
                }
            }
        }
    }
}

fn panic_message(panic_info: &(dyn Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("filters", &self.filter_names())
            .field("metrics", &self.metrics)
            .finish()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.close();
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use filter_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .filter("stdout", Level::INFO, ConsoleSink::new())
///     .build();
/// assert_eq!(logger.filter_count(), 1);
/// ```
pub struct LoggerBuilder {
    filters: Vec<Filter>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter; a later filter with the same name replaces an earlier one
    #[must_use = "builder methods return a new value"]
    pub fn filter<S: Sink + 'static>(
        mut self,
        name: impl Into<String>,
        threshold: Level,
        sink: S,
    ) -> Self {
        self.filters.push(Filter::new(name, threshold, sink));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Build the logger, closing any filter a same-named later one replaced
    pub fn build(self) -> Logger {
        let logger = Logger::new();
        logger.replace_filters(self.filters);
        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LoggerError;
    use crate::sinks::{FnSink, MemorySink};
    use parking_lot::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn collecting_logger(threshold: Level) -> (Logger, Arc<Mutex<Vec<String>>>) {
        let logs = Arc::new(Mutex::new(Vec::new()));
        let sink_logs = Arc::clone(&logs);
        let logger = Logger::new();
        logger.add_filter(
            "test",
            threshold,
            FnSink::new(move |record: &LogRecord| sink_logs.lock().push(record.message.clone())),
        );
        (logger, logs)
    }

    #[test]
    fn test_logf_hello_world() {
        let (logger, logs) = collecting_logger(Level::FINEST);
        logger.logf(Level::DEBUG, format_args!("hello {}", "world"));
        assert_eq!(*logs.lock(), vec!["hello world".to_string()]);
    }

    #[test]
    fn test_logf_every_level_including_unnamed() {
        let (logger, logs) = collecting_logger(Level::FINEST);
        let marker = chrono::Utc::now().to_rfc3339();

        let levels = Level::ALL.iter().copied().chain(std::iter::once(Level::new(999)));
        for level in levels {
            logger.logf(level, format_args!("{}", marker));
        }

        let logs = logs.lock();
        assert_eq!(logs.len(), 9);
        assert!(logs.iter().all(|entry| entry.contains(&marker)));
    }

    #[test]
    fn test_threshold_blocks_lower_levels() {
        let (logger, logs) = collecting_logger(Level::WARNING);
        logger.info("quiet");
        logger.warn("loud");
        logger.critical("louder");
        assert_eq!(*logs.lock(), vec!["loud".to_string(), "louder".to_string()]);
        assert_eq!(logger.metrics().dispatched(), 2);
    }

    #[test]
    fn test_convenience_methods() {
        let (logger, logs) = collecting_logger(Level::FINEST);
        logger.finest("finest");
        logger.fine("fine");
        logger.debug("debug");
        logger.trace("trace");
        logger.info("info");
        logger.warn("warn");
        logger.error("error");
        logger.critical(42);

        let logs = logs.lock();
        assert_eq!(
            *logs,
            vec!["finest", "fine", "debug", "trace", "info", "warn", "error", "42"]
        );
    }

    #[test]
    fn test_convenience_methods_do_not_format() {
        let (logger, logs) = collecting_logger(Level::FINEST);
        logger.info("100% {}");
        assert_eq!(*logs.lock(), vec!["100% {}".to_string()]);
    }

    #[test]
    fn test_readding_a_name_replaces() {
        let (logger, logs) = collecting_logger(Level::FINEST);
        let second = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&second);

        let previous = logger.add_filter(
            "test",
            Level::FINEST,
            FnSink::new(move |_: &LogRecord| {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );

        assert!(previous.is_some());
        assert_eq!(logger.filter_count(), 1);

        logger.info("once");
        assert!(logs.lock().is_empty());
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_every_accepting_filter_receives_once() {
        let logger = Logger::new();
        let (low, low_records) = MemorySink::new();
        let (mid, mid_records) = MemorySink::new();
        let (high, high_records) = MemorySink::new();
        logger.add_filter("low", Level::FINEST, low);
        logger.add_filter("mid", Level::INFO, mid);
        logger.add_filter("high", Level::ERROR, high);

        logger.warn("disk almost full");

        assert_eq!(low_records.len(), 1);
        assert_eq!(mid_records.len(), 1);
        assert_eq!(high_records.len(), 0);
        assert_eq!(logger.metrics().delivered(), 2);
    }

    #[test]
    fn test_close_empty_logger_twice() {
        let logger = Logger::new();
        logger.close();
        logger.close();
        assert_eq!(logger.filter_count(), 0);
    }

    #[test]
    fn test_close_closes_sinks_and_clears() {
        let closed = Arc::new(AtomicUsize::new(0));
        let logger = Logger::new();
        for name in ["a", "b"] {
            let closed = Arc::clone(&closed);
            logger.add_filter(
                name,
                Level::FINEST,
                FnSink::new(|_: &LogRecord| {}).on_close(move || {
                    closed.fetch_add(1, Ordering::SeqCst);
                }),
            );
        }

        logger.close();
        assert_eq!(closed.load(Ordering::SeqCst), 2);
        assert_eq!(logger.filter_count(), 0);
        assert_eq!(logger.metrics().sinks_closed(), 2);

        // Nothing left to deliver to
        logger.dispatch(LogRecord::new(Level::INFO, "after close"));
        assert_eq!(logger.metrics().unrouted(), 1);
    }

    #[test]
    fn test_drop_closes_sinks() {
        let closed = Arc::new(AtomicUsize::new(0));
        {
            let closed = Arc::clone(&closed);
            let logger = Logger::new();
            logger.add_filter(
                "x",
                Level::INFO,
                FnSink::new(|_: &LogRecord| {}).on_close(move || {
                    closed.fetch_add(1, Ordering::SeqCst);
                }),
            );
        }
        assert_eq!(closed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_removed_filter_is_not_closed() {
        let closed = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&closed);
        let logger = Logger::new();
        logger.add_filter(
            "x",
            Level::INFO,
            FnSink::new(|_: &LogRecord| {}).on_close(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );

        let mut removed = logger.remove_filter("x").expect("filter registered");
        logger.close();
        assert_eq!(closed.load(Ordering::SeqCst), 0);

        removed.close().unwrap();
        assert_eq!(closed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failing_and_panicking_sinks_are_isolated() {
        struct FailingSink;

        impl Sink for FailingSink {
            fn receive(&mut self, _record: &LogRecord) -> Result<()> {
                Err(LoggerError::other("Simulated failure"))
            }

            fn close(&mut self) -> Result<()> {
                Ok(())
            }

            fn name(&self) -> &str {
                "failing"
            }
        }

        let logger = Logger::new();
        let (memory, records) = MemorySink::new();
        logger.add_filter("failing", Level::FINEST, FailingSink);
        logger.add_filter(
            "panicking",
            Level::FINEST,
            FnSink::new(|_: &LogRecord| panic!("sink exploded")),
        );
        logger.add_filter("memory", Level::FINEST, memory);

        logger.error("still delivered");

        assert_eq!(records.len(), 1);
        assert_eq!(logger.metrics().sink_failures(), 2);
        assert_eq!(logger.metrics().delivered(), 1);
    }

    #[test]
    fn test_is_enabled_tracks_lowest_threshold() {
        let logger = Logger::new();
        assert!(!logger.is_enabled(Level::CRITICAL));

        logger.add_filter("w", Level::WARNING, FnSink::new(|_: &LogRecord| {}));
        assert!(!logger.is_enabled(Level::INFO));
        assert!(logger.is_enabled(Level::WARNING));
        assert!(logger.is_enabled(Level::new(999)));
    }

    #[test]
    fn test_disabled_level_skips_dispatch() {
        let (logger, logs) = collecting_logger(Level::ERROR);
        logger.logf(Level::DEBUG, format_args!("{}", "ignored"));
        assert!(logs.lock().is_empty());
        assert_eq!(logger.metrics().dispatched(), 0);
    }

    #[test]
    fn test_replace_filters_closes_previous() {
        let closed = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&closed);
        let logger = Logger::new();
        logger.add_filter(
            "old",
            Level::FINEST,
            FnSink::new(|_: &LogRecord| {}).on_close(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );

        let (fresh, records) = MemorySink::new();
        logger.replace_filters(vec![Filter::new("new", Level::INFO, fresh)]);

        assert_eq!(closed.load(Ordering::SeqCst), 1);
        assert_eq!(logger.filter_names(), vec!["new".to_string()]);
        logger.info("routed to the new sink");
        assert_eq!(records.len(), 1);
    }

    fn counted_sink(counter: Arc<AtomicUsize>) -> impl Sink {
        FnSink::new(|_: &LogRecord| {}).on_close(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn test_replace_filters_closes_superseded_duplicate() {
        let closes = Arc::new(AtomicUsize::new(0));
        let logger = Logger::new();
        let (kept, records) = MemorySink::new();

        logger.replace_filters(vec![
            Filter::new("dup", Level::FINEST, counted_sink(Arc::clone(&closes))),
            Filter::new("dup", Level::FINEST, kept),
        ]);

        assert_eq!(closes.load(Ordering::SeqCst), 1);
        assert_eq!(logger.metrics().sinks_closed(), 1);
        logger.info("to the survivor");
        assert_eq!(records.len(), 1);

        logger.close();
        assert_eq!(closes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_builder_closes_superseded_duplicate() {
        let closes = Arc::new(AtomicUsize::new(0));
        let (second, _records) = MemorySink::new();
        let logger = Logger::builder()
            .filter("dup", Level::FINEST, counted_sink(Arc::clone(&closes)))
            .filter("dup", Level::FINEST, second)
            .build();

        assert_eq!(closes.load(Ordering::SeqCst), 1);
        assert_eq!(logger.filter_count(), 1);
        drop(logger);
        assert_eq!(closes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_builder_last_name_wins() {
        let (first, first_records) = MemorySink::new();
        let (second, second_records) = MemorySink::new();
        let logger = Logger::builder()
            .filter("dup", Level::FINEST, first)
            .filter("dup", Level::FINEST, second)
            .build();

        logger.info("hi");
        assert_eq!(logger.filter_names(), vec!["dup".to_string()]);
        assert_eq!(first_records.len(), 0);
        assert_eq!(second_records.len(), 1);
    }

    #[test]
    fn test_builder_default_is_empty() {
        let logger = LoggerBuilder::default().build();
        assert_eq!(logger.filter_count(), 0);
        assert!(format!("{:?}", logger).contains("Logger"));
    }
}
