//! Console sink implementation

use crate::core::{Level, LogRecord, OutputFormat, Result, Sink, TimestampFormat};
use colored::Colorize;
use std::io::Write;

/// Writes records to stdout, or stderr for ERROR and above
pub struct ConsoleSink {
    use_colors: bool,
    timestamp_format: TimestampFormat,
    output_format: OutputFormat,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self {
            use_colors: true,
            timestamp_format: TimestampFormat::default(),
            output_format: OutputFormat::default(),
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            ..Self::new()
        }
    }

    /// Set the output format for this sink
    ///
    /// # Example
    ///
    /// ```
    /// use filter_logger::sinks::ConsoleSink;
    /// use filter_logger::OutputFormat;
    ///
    /// let sink = ConsoleSink::new().with_output_format(OutputFormat::Logfmt);
    /// ```
    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Format as text with an optionally colored level
    fn format_text(&self, record: &LogRecord) -> String {
        let level_str = format!("{:8}", record.level);
        let level_str = if self.use_colors {
            level_str.color(record.level.color_code()).to_string()
        } else {
            level_str
        };

        let timestamp_str = self.timestamp_format.format(&record.timestamp);
        match record.source {
            Some(ref source) => format!(
                "[{}] [{}] ({}) {}",
                timestamp_str,
                level_str,
                source,
                record.escaped_message()
            ),
            None => format!(
                "[{}] [{}] {}",
                timestamp_str,
                level_str,
                record.escaped_message()
            ),
        }
    }

    pub(crate) fn render(&self, record: &LogRecord) -> String {
        match self.output_format {
            OutputFormat::Text => self.format_text(record),
            _ => self.output_format.format(record, &self.timestamp_format),
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn receive(&mut self, record: &LogRecord) -> Result<()> {
        let output = self.render(record);

        if record.level >= Level::ERROR {
            writeln!(std::io::stderr().lock(), "{}", output)?;
        } else {
            writeln!(std::io::stdout().lock(), "{}", output)?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.flush()
    }

    fn name(&self) -> &str {
        "console"
    }
}
