//! Logging macros for format-string logging.
//!
//! The per-level macros accept either a leading format literal, which logs to
//! the [global logger](crate::global()), or a leading logger expression
//! followed by the format literal. `logf!` always takes the logger and the
//! level explicitly. The call site's `file:line` is attached to the record,
//! and nothing is formatted unless some filter accepts the level.
//!
//! # Examples
//!
//! ```
//! use filter_logger::prelude::*;
//! use filter_logger::{info, logf};
//!
//! let logger = Logger::new();
//! let (sink, records) = MemorySink::new();
//! logger.add_filter("test", Level::FINEST, sink);
//!
//! logf!(logger, Level::DEBUG, "hello {}", "world");
//! info!(logger, "Server listening on port {}", 8080);
//!
//! assert_eq!(records.messages(), vec!["hello world", "Server listening on port 8080"]);
//! ```

/// Log a formatted message at any level, including unnamed ones.
///
/// # Examples
///
/// ```
/// # use filter_logger::prelude::*;
/// # let logger = Logger::new();
/// use filter_logger::logf;
/// logf!(logger, Level::ERROR, "Error code: {}", 500);
/// logf!(logger, 999, "Off the scale");
/// logf!(filter_logger::global(), Level::INFO, "to the global logger");
/// ```
#[macro_export]
macro_rules! logf {
    ($logger:expr, $level:expr, $fmt:literal $($arg:tt)*) => {{
        let logger: &$crate::Logger = &$logger;
        let level = $crate::Level::from($level);
        if logger.is_enabled(level) {
            logger.dispatch(
                $crate::LogRecord::new(level, ::std::format!($fmt $($arg)*))
                    .with_source(::std::file!(), ::std::line!()),
            );
        }
    }};
}

/// Log a finest-level message.
#[macro_export]
macro_rules! finest {
    ($fmt:literal $($arg:tt)*) => {
        $crate::logf!($crate::global(), $crate::Level::FINEST, $fmt $($arg)*)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::Level::FINEST, $($arg)+)
    };
}

/// Log a fine-level message.
#[macro_export]
macro_rules! fine {
    ($fmt:literal $($arg:tt)*) => {
        $crate::logf!($crate::global(), $crate::Level::FINE, $fmt $($arg)*)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::Level::FINE, $($arg)+)
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use filter_logger::prelude::*;
/// # let logger = Logger::new();
/// use filter_logger::debug;
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($fmt:literal $($arg:tt)*) => {
        $crate::logf!($crate::global(), $crate::Level::DEBUG, $fmt $($arg)*)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::Level::DEBUG, $($arg)+)
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($fmt:literal $($arg:tt)*) => {
        $crate::logf!($crate::global(), $crate::Level::TRACE, $fmt $($arg)*)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::Level::TRACE, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use filter_logger::prelude::*;
/// # let logger = Logger::new();
/// use filter_logger::info;
/// info!(logger, "Processing {} items", 100);
/// info!("Testing: {} {}", "hello", "world");
/// ```
#[macro_export]
macro_rules! info {
    ($fmt:literal $($arg:tt)*) => {
        $crate::logf!($crate::global(), $crate::Level::INFO, $fmt $($arg)*)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::Level::INFO, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($fmt:literal $($arg:tt)*) => {
        $crate::logf!($crate::global(), $crate::Level::WARNING, $fmt $($arg)*)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::Level::WARNING, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($fmt:literal $($arg:tt)*) => {
        $crate::logf!($crate::global(), $crate::Level::ERROR, $fmt $($arg)*)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::Level::ERROR, $($arg)+)
    };
}

/// Log a critical-level message.
///
/// # Examples
///
/// ```
/// # use filter_logger::prelude::*;
/// # let logger = Logger::new();
/// use filter_logger::critical;
/// critical!(logger, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! critical {
    ($fmt:literal $($arg:tt)*) => {
        $crate::logf!($crate::global(), $crate::Level::CRITICAL, $fmt $($arg)*)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::Level::CRITICAL, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Level, Logger};
    use crate::sinks::{MemoryRecords, MemorySink};

    fn capturing(threshold: Level) -> (Logger, MemoryRecords) {
        let logger = Logger::new();
        let (sink, records) = MemorySink::new();
        logger.add_filter("test", threshold, sink);
        (logger, records)
    }

    #[test]
    fn test_logf_macro() {
        let (logger, records) = capturing(Level::FINEST);
        logf!(logger, Level::DEBUG, "hello {}", "world");
        logf!(logger, 999, "plain");

        assert_eq!(records.messages(), vec!["hello world", "plain"]);
        let captured = records.records();
        assert_eq!(captured[1].level, Level::new(999));
        let source = captured[0].source.as_deref().unwrap();
        assert!(source.starts_with(file!()));
    }

    #[test]
    fn test_level_macros() {
        let (logger, records) = capturing(Level::FINEST);
        finest!(logger, "finest {}", 0);
        fine!(logger, "fine {}", 1);
        debug!(logger, "debug {}", 2);
        trace!(logger, "trace {}", 3);
        info!(logger, "info {}", 4);
        warn!(logger, "warn {}", 5);
        error!(logger, "error {}", 6);
        critical!(logger, "critical {}", 7);

        let captured = records.records();
        assert_eq!(captured.len(), 8);
        for (record, level) in captured.iter().zip(Level::ALL) {
            assert_eq!(record.level, level);
        }
    }

    #[test]
    fn test_macro_accepts_references() {
        let (logger, records) = capturing(Level::INFO);
        let by_ref = &logger;
        warn!(by_ref, "through a reference");
        info!(std::sync::Arc::new(Logger::new()), "nobody listens");
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_filtered_macro_does_not_format() {
        struct Loud;
        impl std::fmt::Display for Loud {
            fn fmt(&self, _: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                panic!("formatted below threshold");
            }
        }

        let (logger, records) = capturing(Level::ERROR);
        debug!(logger, "{}", Loud);
        assert!(records.is_empty());
    }
}
