//! Declarative logger configuration
//!
//! A [`LoggerConfig`] describes a set of filters and the sinks behind them.
//! It deserializes from JSON:
//!
//! ```
//! use filter_logger::config::LoggerConfig;
//!
//! let config = LoggerConfig::from_json_str(r#"{
//!     "filters": [
//!         { "name": "stdout", "level": "INFO", "sink": { "type": "console", "colors": false } },
//!         { "name": "audit", "level": 999, "enabled": false,
//!           "sink": { "type": "file", "path": "/tmp/audit.log" } }
//!     ]
//! }"#).unwrap();
//!
//! let logger = config.build().unwrap();
//! assert_eq!(logger.filter_names(), vec!["stdout".to_string()]);
//! ```

use crate::core::{Filter, Level, Logger, LoggerError, OutputFormat, Result, Sink};
use crate::sinks::{FileSink, NetworkSink};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggerConfig {
    #[serde(default)]
    pub filters: Vec<FilterConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterConfig {
    pub name: String,
    pub level: Level,
    #[serde(default = "default_true")]
    pub enabled: bool,
    pub sink: SinkConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", deny_unknown_fields)]
pub enum SinkConfig {
    Console {
        #[serde(default = "default_true")]
        colors: bool,
        #[serde(default)]
        format: OutputFormat,
    },
    File {
        path: PathBuf,
        #[serde(default)]
        format: OutputFormat,
    },
    Json {
        path: PathBuf,
    },
    Network {
        address: String,
        #[serde(default = "default_network_format")]
        format: OutputFormat,
    },
}

fn default_true() -> bool {
    true
}

fn default_network_format() -> OutputFormat {
    OutputFormat::Json
}

impl LoggerConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| LoggerError::path("read configuration", path, e))?;
        Self::from_json_str(&text)
    }

    /// Reject empty or duplicate filter names among enabled filters
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for filter in self.filters.iter().filter(|filter| filter.enabled) {
            if filter.name.trim().is_empty() {
                return Err(LoggerError::config("filters", "filter name must not be empty"));
            }
            if !seen.insert(filter.name.as_str()) {
                return Err(LoggerError::config(
                    "filters",
                    format!("duplicate filter name '{}'", filter.name),
                ));
            }
        }
        Ok(())
    }

    /// Open every enabled filter's sink
    ///
    /// Sinks opened before a failure are dropped, which releases their
    /// files and connections.
    pub fn build_filters(&self) -> Result<Vec<Filter>> {
        self.validate()?;
        self.filters
            .iter()
            .filter(|filter| filter.enabled)
            .map(FilterConfig::build)
            .collect()
    }

    pub fn build(&self) -> Result<Logger> {
        let logger = Logger::new();
        logger.replace_filters(self.build_filters()?);
        Ok(logger)
    }
}

impl FilterConfig {
    pub fn build(&self) -> Result<Filter> {
        Ok(Filter::from_boxed(
            self.name.clone(),
            self.level,
            self.sink.build()?,
        ))
    }
}

impl SinkConfig {
    pub fn build(&self) -> Result<Box<dyn Sink>> {
        match self {
            #[cfg(feature = "console")]
            SinkConfig::Console { colors, format } => Ok(Box::new(
                crate::sinks::ConsoleSink::with_colors(*colors).with_output_format(*format),
            )),
            #[cfg(not(feature = "console"))]
            SinkConfig::Console { .. } => Err(LoggerError::config(
                "console sink",
                "built without the `console` feature",
            )),
            SinkConfig::File { path, format } => {
                Ok(Box::new(FileSink::new(path)?.with_output_format(*format)))
            }
            SinkConfig::Json { path } => Ok(Box::new(FileSink::json(path)?)),
            SinkConfig::Network { address, format } => Ok(Box::new(
                NetworkSink::new(address.clone())?.with_output_format(*format),
            )),
        }
    }
}
