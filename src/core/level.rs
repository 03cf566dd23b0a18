//! Severity levels
//!
//! Levels are plain integers with eight named points. Any integer is a valid
//! level; unnamed ones order by their value like the named ones do.

use super::error::LoggerError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(i32);

impl Level {
    pub const FINEST: Level = Level(0);
    pub const FINE: Level = Level(1);
    pub const DEBUG: Level = Level(2);
    pub const TRACE: Level = Level(3);
    pub const INFO: Level = Level(4);
    pub const WARNING: Level = Level(5);
    pub const ERROR: Level = Level(6);
    pub const CRITICAL: Level = Level(7);

    /// The named levels, lowest first
    pub const ALL: [Level; 8] = [
        Level::FINEST,
        Level::FINE,
        Level::DEBUG,
        Level::TRACE,
        Level::INFO,
        Level::WARNING,
        Level::ERROR,
        Level::CRITICAL,
    ];

    #[inline]
    pub const fn new(value: i32) -> Self {
        Level(value)
    }

    #[inline]
    pub const fn value(self) -> i32 {
        self.0
    }

    pub fn is_named(self) -> bool {
        self.name().is_some()
    }

    pub fn name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("FINEST"),
            1 => Some("FINE"),
            2 => Some("DEBUG"),
            3 => Some("TRACE"),
            4 => Some("INFO"),
            5 => Some("WARNING"),
            6 => Some("ERROR"),
            7 => Some("CRITICAL"),
            _ => None,
        }
    }

    /// Four-character tag used by compact output
    pub fn short_name(self) -> &'static str {
        match self.0 {
            0 => "FNST",
            1 => "FINE",
            2 => "DEBG",
            3 => "TRAC",
            4 => "INFO",
            5 => "WARN",
            6 => "EROR",
            7 => "CRIT",
            _ => "????",
        }
    }

    #[cfg(feature = "console")]
    pub fn color_code(self) -> colored::Color {
        use colored::Color::*;
        match self {
            Level::FINEST | Level::FINE => BrightBlack,
            Level::DEBUG | Level::TRACE => Blue,
            Level::INFO => Green,
            Level::WARNING => Yellow,
            Level::ERROR => Red,
            _ if self > Level::ERROR => BrightRed,
            _ => White,
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::INFO
    }
}

impl From<i32> for Level {
    fn from(value: i32) -> Self {
        Level(value)
    }
}

impl From<Level> for i32 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            // pad() so width specifiers like {:8} apply
            Some(name) => f.pad(name),
            None => f.pad(&format!("LEVEL({})", self.0)),
        }
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_uppercase().as_str() {
            "FINEST" | "FNST" => Ok(Level::FINEST),
            "FINE" => Ok(Level::FINE),
            "DEBUG" | "DEBG" => Ok(Level::DEBUG),
            "TRACE" | "TRAC" => Ok(Level::TRACE),
            "INFO" => Ok(Level::INFO),
            "WARNING" | "WARN" => Ok(Level::WARNING),
            "ERROR" | "EROR" => Ok(Level::ERROR),
            "CRITICAL" | "CRIT" => Ok(Level::CRITICAL),
            _ => trimmed
                .parse::<i32>()
                .map(Level)
                .map_err(|_| LoggerError::invalid_level(s)),
        }
    }
}

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.name() {
            Some(name) => serializer.serialize_str(name),
            None => serializer.serialize_i32(self.0),
        }
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Value(i32),
            Name(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Value(value) => Ok(Level(value)),
            Repr::Name(name) => name.parse().map_err(serde::de::Error::custom),
        }
    }
}
