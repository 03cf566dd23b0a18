//! Log record structure

use super::level::Level;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// One logging event, built per call and shared read-only with every sink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub level: Level,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl LogRecord {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: Utc::now(),
            source: None,
        }
    }

    /// The message with line breaks and tabs escaped
    ///
    /// One-line text renderings use this so a message cannot forge extra
    /// log lines; sinks that receive the record itself see it verbatim.
    pub fn escaped_message(&self) -> Cow<'_, str> {
        if !self.message.contains(['\n', '\r', '\t']) {
            return Cow::Borrowed(&self.message);
        }
        let mut escaped = String::with_capacity(self.message.len() + 8);
        for c in self.message.chars() {
            match c {
                '\n' => escaped.push_str("\\n"),
                '\r' => escaped.push_str("\\r"),
                '\t' => escaped.push_str("\\t"),
                _ => escaped.push(c),
            }
        }
        Cow::Owned(escaped)
    }

    /// Attach the `file:line` the record was logged from
    #[must_use]
    pub fn with_source(mut self, file: &str, line: u32) -> Self {
        self.source = Some(format!("{}:{}", file, line));
        self
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}
