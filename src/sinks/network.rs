//! Network sink for remote logging
//!
//! Sends one newline-terminated record per line to a TCP server.
//! Records are JSON by default so the receiving side can parse them.

use crate::core::{LogRecord, LoggerError, OutputFormat, Result, Sink, TimestampFormat};
use std::io::Write;
use std::net::{Shutdown, TcpStream};
use std::time::Duration;

const IO_TIMEOUT: Duration = Duration::from_secs(5);

/// Network sink that sends records to a remote TCP server
///
/// # Example
///
/// ```no_run
/// use filter_logger::prelude::*;
///
/// let sink = NetworkSink::new("127.0.0.1:8080")
///     .expect("Failed to connect to log server");
///
/// let logger = Logger::new();
/// logger.add_filter("remote", Level::WARNING, sink);
/// logger.warn("This record is sent to 127.0.0.1:8080");
/// ```
pub struct NetworkSink {
    stream: Option<TcpStream>,
    address: String,
    reconnect_on_error: bool,
    closed: bool,
    timestamp_format: TimestampFormat,
    output_format: OutputFormat,
}

impl NetworkSink {
    /// Connect to `address` (e.g. "localhost:8080")
    ///
    /// # Errors
    ///
    /// Returns error if the connection fails
    pub fn new(address: impl Into<String>) -> Result<Self> {
        let address = address.into();
        let stream = Self::connect(&address)?;

        Ok(Self {
            stream: Some(stream),
            address,
            reconnect_on_error: true,
            closed: false,
            timestamp_format: TimestampFormat::default(),
            output_format: OutputFormat::Json,
        })
    }

    fn connect(address: &str) -> Result<TcpStream> {
        let stream = TcpStream::connect(address)
            .map_err(|e| LoggerError::network(address, e.to_string()))?;
        stream.set_write_timeout(Some(IO_TIMEOUT))?;
        stream.set_read_timeout(Some(IO_TIMEOUT))?;
        stream.set_nodelay(true)?;
        Ok(stream)
    }

    /// Enable or disable automatic reconnection on errors
    ///
    /// Default: enabled
    #[must_use]
    pub fn with_reconnect(mut self, enable: bool) -> Self {
        self.reconnect_on_error = enable;
        self
    }

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

    pub fn address(&self) -> &str {
        &self.address
    }
}

impl Sink for NetworkSink {
    fn receive(&mut self, record: &LogRecord) -> Result<()> {
        if self.closed {
            return Err(LoggerError::sink_closed(self.name()));
        }

        let mut message = self.output_format.format(record, &self.timestamp_format);
        message.push('\n');

        let result = match self.stream {
            Some(ref mut stream) => stream.write_all(message.as_bytes()),
            None if self.reconnect_on_error => Err(std::io::Error::new(
                std::io::ErrorKind::NotConnected,
                "stream dropped after earlier failure",
            )),
            None => {
                return Err(LoggerError::network(&self.address, "not connected"));
            }
        };

        match result {
            Ok(()) => Ok(()),
            Err(e) => {
                self.stream = None;

                if !self.reconnect_on_error {
                    return Err(LoggerError::network(&self.address, e.to_string()));
                }

                match Self::connect(&self.address) {
                    Ok(mut stream) => {
                        stream.write_all(message.as_bytes())?;
                        self.stream = Some(stream);
                        Ok(())
                    }
                    Err(reconnect_err) => Err(LoggerError::network(
                        &self.address,
                        format!("send failed: {} (reconnect: {})", e, reconnect_err),
                    )),
                }
            }
        }
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(ref mut stream) = self.stream {
            stream.flush()?;
        }
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.closed = true;
        if let Some(mut stream) = self.stream.take() {
            stream.flush()?;
            // Peer may already be gone
            let _ = stream.shutdown(Shutdown::Both);
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "network"
    }
}

impl Drop for NetworkSink {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Level;
    use std::io::{BufRead, BufReader};
    use std::net::TcpListener;
    use std::thread;

    #[test]
    fn test_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let address = listener.local_addr().unwrap().to_string();
        drop(listener);

        let result = NetworkSink::new(address);
        assert!(matches!(result, Err(LoggerError::Network { .. })));
    }

    #[test]
    fn test_sends_json_lines() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let address = listener.local_addr().unwrap().to_string();

        let server = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            BufReader::new(stream)
                .lines()
                .map(|line| line.unwrap())
                .collect::<Vec<String>>()
        });

        let mut sink = NetworkSink::new(address).unwrap();
        sink.receive(&LogRecord::new(Level::WARNING, "over the wire"))
            .unwrap();
        sink.receive(&LogRecord::new(Level::new(999), "odd")).unwrap();
        sink.close().unwrap();

        let lines = server.join().unwrap();
        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(first["level"], "WARNING");
        assert_eq!(first["message"], "over the wire");
        let second: serde_json::Value = serde_json::from_str(&lines[1]).unwrap();
        assert_eq!(second["level"], 999);
    }

    #[test]
    fn test_receive_after_close() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let address = listener.local_addr().unwrap().to_string();

        let mut sink = NetworkSink::new(address).unwrap().with_reconnect(false);
        sink.close().unwrap();
        sink.close().unwrap();

        let err = sink.receive(&LogRecord::new(Level::INFO, "late")).unwrap_err();
        assert!(matches!(err, LoggerError::SinkClosed { .. }));
    }
}
