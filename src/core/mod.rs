//! Core logger types and traits

pub mod error;
pub mod filter;
pub mod level;
pub mod logger;
pub mod metrics;
pub mod output_format;
pub mod record;
pub mod sink;
pub mod timestamp;

pub use error::{LoggerError, Result};
pub use filter::Filter;
pub use level::Level;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use output_format::OutputFormat;
pub use record::LogRecord;
pub use sink::Sink;
pub use timestamp::TimestampFormat;
