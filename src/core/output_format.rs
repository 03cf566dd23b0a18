//! Output format configuration for log records
//!
//! - Text: Human-readable format (default)
//! - Compact: Text with four-character level tags and no source
//! - Json: Machine-readable JSON format
//! - Logfmt: Key-value format compatible with log aggregation tools

use super::record::LogRecord;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};

/// Output format for log records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Example: `[2025-01-08T10:30:45.123Z] [INFO    ] (src/main.rs:12) Request processed`
    #[default]
    Text,

    /// Example: `[2025-01-08T10:30:45.123Z] [INFO] Request processed`
    Compact,

    /// Example: `{"timestamp":"2025-01-08T10:30:45.123Z","level":"INFO","message":"Request processed"}`
    Json,

    /// Example: `timestamp=2025-01-08T10:30:45.123Z level=INFO message="Request processed"`
    Logfmt,
}

impl OutputFormat {
    /// Format a log record according to this output format
    pub fn format(&self, record: &LogRecord, timestamp_format: &TimestampFormat) -> String {
        match self {
            OutputFormat::Text => self.format_text(record, timestamp_format),
            OutputFormat::Compact => format!(
                "[{}] [{}] {}",
                timestamp_format.format(&record.timestamp),
                record.level.short_name(),
                record.escaped_message()
            ),
            OutputFormat::Json => self.format_json(record, timestamp_format),
            OutputFormat::Logfmt => self.format_logfmt(record, timestamp_format),
        }
    }

    fn format_text(&self, record: &LogRecord, timestamp_format: &TimestampFormat) -> String {
        let timestamp_str = timestamp_format.format(&record.timestamp);
        match record.source {
            Some(ref source) => format!(
                "[{}] [{:8}] ({}) {}",
                timestamp_str,
                record.level,
                source,
                record.escaped_message()
            ),
            None => format!(
                "[{}] [{:8}] {}",
                timestamp_str,
                record.level,
                record.escaped_message()
            ),
        }
    }

    fn format_json(&self, record: &LogRecord, timestamp_format: &TimestampFormat) -> String {
        let mut json_obj = serde_json::Map::new();

        json_obj.insert(
            "timestamp".to_string(),
            timestamp_format.to_json_value(&record.timestamp),
        );

        // Unnamed levels keep their numeric value
        let level = serde_json::to_value(record.level).unwrap_or(serde_json::Value::Null);
        json_obj.insert("level".to_string(), level);

        if let Some(ref source) = record.source {
            json_obj.insert(
                "source".to_string(),
                serde_json::Value::String(source.clone()),
            );
        }

        json_obj.insert(
            "message".to_string(),
            serde_json::Value::String(record.message.clone()),
        );

        serde_json::Value::Object(json_obj).to_string()
    }

    fn format_logfmt(&self, record: &LogRecord, timestamp_format: &TimestampFormat) -> String {
        let mut parts = Vec::with_capacity(4);

        parts.push(format!(
            "timestamp={}",
            self.escape_logfmt_value(&timestamp_format.format(&record.timestamp))
        ));
        parts.push(format!(
            "level={}",
            self.escape_logfmt_value(&record.level.to_string())
        ));
        if let Some(ref source) = record.source {
            parts.push(format!("source={}", self.escape_logfmt_value(source)));
        }

        // Message is always quoted
        parts.push(format!("message={}", self.quote_logfmt_value(&record.message)));

        parts.join(" ")
    }

    /// Quote a logfmt value if it contains whitespace, quotes or `=`
    fn escape_logfmt_value(&self, value: &str) -> String {
        if value.contains([' ', '"', '=', '\n', '\r', '\t']) {
            self.quote_logfmt_value(value)
        } else {
            value.to_string()
        }
    }

    fn quote_logfmt_value(&self, value: &str) -> String {
        let mut quoted = String::with_capacity(value.len() + 2);
        quoted.push('"');
        for c in value.chars() {
            match c {
                '\\' => quoted.push_str("\\\\"),
                '"' => quoted.push_str("\\\""),
                '\n' => quoted.push_str("\\n"),
                '\r' => quoted.push_str("\\r"),
                '\t' => quoted.push_str("\\t"),
                _ => quoted.push(c),
            }
        }
        quoted.push('"');
        quoted
    }
}
