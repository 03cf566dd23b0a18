//! Error types for the logging facade
//!
//! Logging calls themselves never return errors; these surface from sink
//! construction, configuration and the `Sink` methods the logger reports
//! on stderr.

use std::io;
use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// A file could not be opened or read
    #[error("cannot {action} '{}': {source}", path.display())]
    Path {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Level text that is neither a known name nor an integer
    #[error("unknown log level '{0}'")]
    InvalidLevel(String),

    #[error("invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Sink used after it was closed
    #[error("sink '{name}' is closed")]
    SinkClosed { name: String },

    #[error("write to '{}' failed: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("network sink '{address}': {message}")]
    Network { address: String, message: String },

    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    pub fn path(action: &'static str, path: impl AsRef<Path>, source: io::Error) -> Self {
        LoggerError::Path {
            action,
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn invalid_level(text: impl Into<String>) -> Self {
        LoggerError::InvalidLevel(text.into())
    }

    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    pub fn sink_closed(name: impl Into<String>) -> Self {
        LoggerError::SinkClosed { name: name.into() }
    }

    pub fn file_write(path: impl AsRef<Path>, source: io::Error) -> Self {
        LoggerError::FileWrite {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn network(address: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Network {
            address: address.into(),
            message: message.into(),
        }
    }

    pub fn other(message: impl Into<String>) -> Self {
        LoggerError::Other(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_display() {
        assert_eq!(
            LoggerError::invalid_level("LOUD").to_string(),
            "unknown log level 'LOUD'"
        );
        assert_eq!(
            LoggerError::sink_closed("file").to_string(),
            "sink 'file' is closed"
        );
        assert_eq!(
            LoggerError::network("127.0.0.1:9", "connection refused").to_string(),
            "network sink '127.0.0.1:9': connection refused"
        );
        assert_eq!(
            LoggerError::config("filters", "duplicate name").to_string(),
            "invalid configuration for filters: duplicate name"
        );
    }

    #[test]
    fn test_path_error_keeps_source() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::path("open for append", "/var/log/app.log", io_err);

        assert_eq!(
            err.to_string(),
            "cannot open for append '/var/log/app.log': access denied"
        );
        let source = err.source().expect("io source");
        assert_eq!(source.to_string(), "access denied");
    }

    #[test]
    fn test_from_conversions() {
        let err: LoggerError = io::Error::new(io::ErrorKind::Other, "boom").into();
        assert!(matches!(err, LoggerError::Io(_)));

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: LoggerError = json_err.into();
        assert!(matches!(err, LoggerError::Json(_)));
    }
}
