//! Record timestamp rendering
//!
//! Every sink that writes text carries one of these; JSON output keeps the
//! Unix variants numeric.

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

const ISO_8601_MILLIS: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// How a record's UTC timestamp is written out
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use filter_logger::TimestampFormat;
///
/// let at = Utc.with_ymd_and_hms(2024, 2, 29, 23, 59, 1).unwrap();
/// assert_eq!(TimestampFormat::Iso8601.format(&at), "2024-02-29T23:59:01.000Z");
/// assert_eq!(TimestampFormat::Unix.format(&at), "1709251141");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// `2024-02-29T23:59:01.250Z`
    #[default]
    Iso8601,

    /// `2024-02-29T23:59:01.250000Z`
    Iso8601Micros,

    /// `2024-02-29T23:59:01.250+00:00`
    Rfc3339,

    /// Whole seconds since the epoch
    Unix,

    /// Milliseconds since the epoch
    UnixMillis,

    /// Any chrono strftime pattern
    ///
    /// Prefer [`TimestampFormat::custom`], which rejects patterns chrono
    /// cannot render. An unrenderable pattern falls back to [`Iso8601`](Self::Iso8601).
    Custom(String),
}

impl TimestampFormat {
    fn pattern(&self) -> Option<&str> {
        match self {
            TimestampFormat::Iso8601 => Some(ISO_8601_MILLIS),
            TimestampFormat::Iso8601Micros => Some("%Y-%m-%dT%H:%M:%S%.6fZ"),
            TimestampFormat::Custom(pattern) => Some(pattern.as_str()),
            _ => None,
        }
    }

    /// A [`Custom`](Self::Custom) format, checked against chrono's strftime syntax
    ///
    /// ```
    /// use filter_logger::TimestampFormat;
    ///
    /// assert!(TimestampFormat::custom("%H:%M:%S").is_ok());
    /// assert!(TimestampFormat::custom("%Q").is_err());
    /// ```
    pub fn custom(pattern: impl Into<String>) -> Result<Self> {
        let format = TimestampFormat::Custom(pattern.into());
        format.validate()?;
        Ok(format)
    }

    pub fn validate(&self) -> Result<()> {
        if let TimestampFormat::Custom(pattern) = self {
            if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
                return Err(LoggerError::config(
                    "timestamp format",
                    format!("invalid strftime pattern '{}'", pattern),
                ));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn format(&self, at: &DateTime<Utc>) -> String {
        if let Some(pattern) = self.pattern() {
            let mut rendered = String::new();
            if write!(rendered, "{}", at.format(pattern)).is_ok() {
                return rendered;
            }
            return at.format(ISO_8601_MILLIS).to_string();
        }
        match self {
            TimestampFormat::Unix => at.timestamp().to_string(),
            TimestampFormat::UnixMillis => at.timestamp_millis().to_string(),
            _ => at.to_rfc3339(),
        }
    }

    /// Whether the rendered form is an integer
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, TimestampFormat::Unix | TimestampFormat::UnixMillis)
    }

    pub(crate) fn to_json_value(&self, at: &DateTime<Utc>) -> serde_json::Value {
        match self {
            TimestampFormat::Unix => at.timestamp().into(),
            TimestampFormat::UnixMillis => at.timestamp_millis().into(),
            _ => self.format(at).into(),
        }
    }
}
