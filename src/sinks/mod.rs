//! Sinks: destinations for emitted log records
//!
//! A [`Sink`] pairs a writer with a level filter and an encoder. Writes are
//! serialized by an internal lock; the facade adds no locking of its own.

pub mod multi;
pub mod rotating_file;

pub use multi::MultiWriter;
pub use rotating_file::{RotatingFileWriter, RotationPolicy};

use crate::core::error::{LoggerError, Result};
use crate::core::log_entry::LogEntry;
use crate::core::log_level::LogLevel;
use crate::core::output_format::OutputFormat;
use crate::core::timestamp::TimestampFormat;
use parking_lot::Mutex;
use std::io::Write;

pub struct Sink {
    min_level: LogLevel,
    format: OutputFormat,
    timestamp_format: TimestampFormat,
    colors: bool,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl Sink {
    pub fn new(min_level: LogLevel, format: OutputFormat, writer: Box<dyn Write + Send>) -> Self {
        Self {
            min_level,
            format,
            timestamp_format: TimestampFormat::default(),
            colors: false,
            writer: Mutex::new(writer),
        }
    }

    /// Colorize the level tag; only meaningful for text output on a console.
    #[must_use = "builder methods return a new value"]
    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    #[must_use]
    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    #[must_use]
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format and write one record; records below the sink's level are
    /// dropped. The whole line goes out in a single write so rotation never
    /// splits a record.
    pub fn write_entry(&self, entry: &LogEntry) -> Result<()> {
        if entry.level < self.min_level {
            return Ok(());
        }

        let mut line = self.format.format(entry, &self.timestamp_format, self.colors);
        line.push('\n');

        let mut writer = self.writer.lock();
        writer
            .write_all(line.as_bytes())
            .map_err(|e| LoggerError::io_operation("writing log record", "sink write failed", e))
    }

    pub fn flush(&self) -> Result<()> {
        self.writer
            .lock()
            .flush()
            .map_err(|e| LoggerError::io_operation("flushing sink", "sink flush failed", e))
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use parking_lot::Mutex;
    use std::io::{self, Write};
    use std::sync::Arc;

    /// Cloneable in-memory writer for observing sink output in tests
    #[derive(Clone, Default)]
    pub struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        pub fn contents(&self) -> String {
            String::from_utf8(self.0.lock().clone()).unwrap()
        }

        pub fn lines(&self) -> Vec<String> {
            self.contents().lines().map(String::from).collect()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }
}
