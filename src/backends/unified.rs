//! Unified backend: one pipeline, one shared level
//!
//! Both sinks share a single resolved level and a single formatter. With
//! console and file enabled at once, each formatted record is written once
//! and multiplexed to both destinations, so the file receives exactly the
//! console's bytes.

use super::rotating_writer;
use crate::config::Configuration;
use crate::core::error::Result;
use crate::core::fields::Fields;
use crate::core::log_entry::LogEntry;
use crate::core::log_level::LogLevel;
use crate::core::logger::Log;
use crate::core::output_format::OutputFormat;
use crate::sinks::{MultiWriter, Sink};
use std::any::Any;
use std::io;
use std::sync::Arc;

pub struct UnifiedLogger {
    sink: Arc<Sink>,
    fields: Fields,
}

impl std::fmt::Debug for UnifiedLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnifiedLogger")
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}

impl UnifiedLogger {
    /// Build the backend from its console/file blocks.
    ///
    /// The effective level prefers the console block's level, falls back to
    /// the file block's, and defaults to Info when neither is set. Output
    /// routing:
    /// - console and file enabled: one multiplexed sink with the console
    ///   block's formatter;
    /// - file only: the rotating file sink with the file block's formatter;
    /// - console only, or neither enabled: console with the console block's
    ///   formatter.
    ///
    /// # Errors
    ///
    /// Fails on a level string naming no known level, or on a file sink
    /// enabled without a usable path.
    pub fn new(config: &Configuration) -> Result<Self> {
        let console = &config.unified_console;
        let file = &config.unified_file;

        let console_level = LogLevel::parse_optional(&console.level)?;
        let file_level = LogLevel::parse_optional(&file.level)?;
        let level = console_level.or(file_level).unwrap_or_default();

        let sink = if console.enabled && file.enabled {
            let rotating = rotating_writer(file, "unified file sink")?;
            let writer = MultiWriter::new(vec![
                Box::new(io::stdout()),
                Box::new(rotating),
            ]);
            Sink::new(
                level,
                OutputFormat::from_json_flag(console.json_format),
                Box::new(writer),
            )
        } else if file.enabled {
            let rotating = rotating_writer(file, "unified file sink")?;
            Sink::new(
                level,
                OutputFormat::from_json_flag(file.json_format),
                Box::new(rotating),
            )
        } else {
            let format = OutputFormat::from_json_flag(console.json_format);
            Sink::new(level, format, Box::new(io::stdout()))
                .with_colors(format == OutputFormat::Text)
        };

        Ok(Self {
            sink: Arc::new(sink),
            fields: Fields::new(),
        })
    }

    #[cfg(test)]
    pub(crate) fn from_sink(sink: Sink) -> Self {
        Self {
            sink: Arc::new(sink),
            fields: Fields::new(),
        }
    }

    #[must_use]
    pub fn level(&self) -> LogLevel {
        self.sink.min_level()
    }
}

impl Log for UnifiedLogger {
    fn log(&self, mut entry: LogEntry) {
        if !self.fields.is_empty() {
            entry.fields = self.fields.merged(entry.fields);
        }
        if let Err(e) = self.sink.write_entry(&entry) {
            eprintln!("[logfacade] unified sink write failed: {}", e);
        }
    }

    fn with_fields(&self, fields: Fields) -> Arc<dyn Log> {
        Arc::new(Self {
            sink: Arc::clone(&self.sink),
            fields: self.fields.merged(fields),
        })
    }

    fn flush(&self) -> Result<()> {
        self.sink.flush()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConsoleConfig, FileConfig};
    use crate::core::error::LoggerError;
    use crate::sinks::test_support::SharedBuf;

    fn buffer_logger(buf: &SharedBuf, level: LogLevel, format: OutputFormat) -> UnifiedLogger {
        UnifiedLogger::from_sink(Sink::new(level, format, Box::new(buf.clone())))
    }

    #[test]
    fn test_level_resolution_prefers_console() {
        let config = Configuration {
            unified_console: ConsoleConfig::enabled("error"),
            unified_file: FileConfig {
                level: "debug".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };

        let logger = UnifiedLogger::new(&config).unwrap();
        assert_eq!(logger.level(), LogLevel::Error);
    }

    #[test]
    fn test_level_resolution_falls_back_to_file_then_info() {
        let config = Configuration {
            unified_file: FileConfig {
                level: "warn".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(UnifiedLogger::new(&config).unwrap().level(), LogLevel::Warn);

        let config = Configuration::default();
        assert_eq!(UnifiedLogger::new(&config).unwrap().level(), LogLevel::Info);
    }

    #[test]
    fn test_unknown_level_is_rejected() {
        let config = Configuration {
            unified_console: ConsoleConfig::enabled("loud"),
            ..Default::default()
        };
        let err = UnifiedLogger::new(&config).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidLevel(s) if s == "loud"));
    }

    #[test]
    fn test_file_level_is_validated_even_when_console_wins() {
        let config = Configuration {
            unified_console: ConsoleConfig::enabled("info"),
            unified_file: FileConfig {
                level: "noisy".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(UnifiedLogger::new(&config).is_err());
    }

    #[test]
    fn test_scoped_fields_are_merged_into_records() {
        let buf = SharedBuf::default();
        let logger = buffer_logger(&buf, LogLevel::Debug, OutputFormat::Json);

        let scoped = logger.with_fields(Fields::new().with_field("request_id", "r-1"));
        scoped.infof(format_args!("handled"));

        let parsed: serde_json::Value = serde_json::from_str(&buf.lines()[0]).unwrap();
        assert_eq!(parsed["request_id"], "r-1");
        assert_eq!(parsed["message"], "handled");
    }

    #[test]
    fn test_with_fields_leaves_parent_unscoped() {
        let buf = SharedBuf::default();
        let logger = buffer_logger(&buf, LogLevel::Debug, OutputFormat::Json);

        let first = logger.with_fields(Fields::new().with_field("a", 1));
        let second = first.with_fields(Fields::new().with_field("b", 2));

        second.infof(format_args!("child"));
        first.infof(format_args!("parent"));

        let lines = buf.lines();
        let child: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(child["a"], 1);
        assert_eq!(child["b"], 2);

        let parent: serde_json::Value = serde_json::from_str(&lines[1]).unwrap();
        assert_eq!(parent["a"], 1);
        assert!(parent.get("b").is_none());
    }

    #[test]
    fn test_records_below_shared_level_are_dropped() {
        let buf = SharedBuf::default();
        let logger = buffer_logger(&buf, LogLevel::Warn, OutputFormat::Text);

        logger.infof(format_args!("too quiet"));
        logger.errorf(format_args!("loud enough"));

        let contents = buf.contents();
        assert!(!contents.contains("too quiet"));
        assert!(contents.contains("loud enough"));
    }
}
