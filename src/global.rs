//! Process-wide logger
//!
//! The global logger starts with one filter, `"stdout"`, sending DEBUG and
//! above to a [`ConsoleSink`](crate::sinks::ConsoleSink) (when the `console`
//! feature is enabled). Any caller may close it, add filters to it or
//! reconfigure it; the logger's own lock keeps those changes consistent,
//! but ordering between independent callers is up to them.
//!
//! ```
//! use filter_logger::{self as log, Level, sinks::MemorySink};
//!
//! log::close();
//! let (sink, records) = MemorySink::new();
//! log::add_filter("capture", Level::FINEST, sink);
//!
//! filter_logger::info!("Testing: {} {}", "hello", "world");
//! assert_eq!(records.messages(), vec!["Testing: hello world"]);
//! ```

use crate::config::LoggerConfig;
use crate::core::{Filter, Level, Logger, Result, Sink};
use std::fmt;
use std::sync::LazyLock;

/// Name of the console filter installed at startup
pub const DEFAULT_FILTER_NAME: &str = "stdout";

/// Threshold of the console filter installed at startup
pub const DEFAULT_LEVEL: Level = Level::DEBUG;

static GLOBAL: LazyLock<Logger> = LazyLock::new(default_logger);

fn default_logger() -> Logger {
    let logger = Logger::new();
    #[cfg(feature = "console")]
    logger.add_filter(
        DEFAULT_FILTER_NAME,
        DEFAULT_LEVEL,
        crate::sinks::ConsoleSink::new(),
    );
    logger
}

/// The process-wide logger
pub fn global() -> &'static Logger {
    &GLOBAL
}

pub fn add_filter<S: Sink + 'static>(
    name: impl Into<String>,
    threshold: Level,
    sink: S,
) -> Option<Filter> {
    GLOBAL.add_filter(name, threshold, sink)
}

pub fn remove_filter(name: &str) -> Option<Filter> {
    GLOBAL.remove_filter(name)
}

/// Close every sink of the global logger; it keeps working with no filters
pub fn close() {
    GLOBAL.close();
}

/// Replace the global logger's filters with the ones `config` describes
///
/// Nothing changes if any sink fails to open.
pub fn configure(config: &LoggerConfig) -> Result<()> {
    let filters = config.build_filters()?;
    GLOBAL.replace_filters(filters);
    Ok(())
}

pub fn flush() -> Result<()> {
    GLOBAL.flush()
}

pub fn logf(level: Level, args: fmt::Arguments<'_>) {
    GLOBAL.logf(level, args);
}

pub fn log(level: Level, message: impl fmt::Display) {
    GLOBAL.log(level, message);
}

pub fn finest(message: impl fmt::Display) {
    GLOBAL.finest(message);
}

pub fn fine(message: impl fmt::Display) {
    GLOBAL.fine(message);
}

pub fn debug(message: impl fmt::Display) {
    GLOBAL.debug(message);
}

pub fn trace(message: impl fmt::Display) {
    GLOBAL.trace(message);
}

pub fn info(message: impl fmt::Display) {
    GLOBAL.info(message);
}

pub fn warn(message: impl fmt::Display) {
    GLOBAL.warn(message);
}

pub fn error(message: impl fmt::Display) {
    GLOBAL.error(message);
}

pub fn critical(message: impl fmt::Display) {
    GLOBAL.critical(message);
}
