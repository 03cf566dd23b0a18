//! File sink implementation

use crate::core::{LogRecord, LoggerError, OutputFormat, Result, Sink, TimestampFormat};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Appends one line per record to a file
///
/// Output is buffered; [`Sink::flush`] and [`Sink::close`] push it to disk.
/// After `close` the file handle is released and further records are
/// rejected with [`LoggerError::SinkClosed`].
pub struct FileSink {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
    timestamp_format: TimestampFormat,
    output_format: OutputFormat,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LoggerError::path("open for append", &path, e))?;

        Ok(Self {
            path,
            writer: Some(BufWriter::new(file)),
            timestamp_format: TimestampFormat::default(),
            output_format: OutputFormat::default(),
        })
    }

    /// A file sink writing one JSON object per line
    pub fn json(path: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self::new(path)?.with_output_format(OutputFormat::Json))
    }

    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Set the timestamp format for this sink
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use filter_logger::sinks::FileSink;
    /// use filter_logger::TimestampFormat;
    ///
    /// let sink = FileSink::new("/var/log/app.log")
    ///     .unwrap()
    ///     .with_timestamp_format(TimestampFormat::Rfc3339);
    /// ```
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_closed(&self) -> bool {
        self.writer.is_none()
    }
}

impl Sink for FileSink {
    fn receive(&mut self, record: &LogRecord) -> Result<()> {
        let line = self.output_format.format(record, &self.timestamp_format);
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| LoggerError::sink_closed("file"))?;

        writeln!(writer, "{}", line)
            .map_err(|e| LoggerError::file_write(&self.path, e))
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if let Some(mut writer) = self.writer.take() {
            writer.flush()?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        // Ensure all buffered data is flushed to disk
        let _ = self.flush();
    }
}
