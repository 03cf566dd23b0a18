//! # Filter Logger
//!
//! A small, synchronous logging facade. A [`Logger`] owns named filters;
//! each filter pairs a minimum [`Level`] with a [`Sink`]. Every record is
//! delivered to each filter whose threshold it meets before the logging
//! call returns.
//!
//! ## Features
//!
//! - **Ordered levels**: FINEST through CRITICAL, plus any integer level
//! - **Named filters**: re-adding a name replaces the earlier filter
//! - **Sinks**: console, file, JSON lines, TCP, in-memory and closure sinks
//! - **Global logger**: process-wide free functions and macros
//!
//! ```
//! use filter_logger::prelude::*;
//! use filter_logger::logf;
//!
//! let logger = Logger::new();
//! let (sink, records) = MemorySink::new();
//! logger.add_filter("test", Level::FINEST, sink);
//!
//! logf!(logger, Level::DEBUG, "hello {}", "world");
//! assert_eq!(records.messages(), vec!["hello world"]);
//!
//! logger.close();
//! ```

pub mod config;
pub mod core;
pub mod global;
pub mod macros;
pub mod sinks;

pub mod prelude {
    #[cfg(feature = "console")]
    pub use crate::sinks::ConsoleSink;
    pub use crate::config::{FilterConfig, LoggerConfig, SinkConfig};
    pub use crate::core::{
        Filter, Level, LogRecord, Logger, LoggerBuilder, LoggerError, LoggerMetrics, OutputFormat,
        Result, Sink, TimestampFormat,
    };
    pub use crate::sinks::{FileSink, FnSink, MemoryRecords, MemorySink, NetworkSink};
}

pub use crate::core::{
    Filter, Level, LogRecord, Logger, LoggerBuilder, LoggerError, LoggerMetrics, OutputFormat,
    Result, Sink, TimestampFormat,
};
pub use crate::global::{
    add_filter, close, configure, critical, debug, error, fine, finest, flush, global, info, log,
    logf, remove_filter, trace, warn,
};
