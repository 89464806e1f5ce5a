//! Tee backend: independent sinks, fan-out per record
//!
//! Each enabled sink is its own pipeline with its own level filter and
//! formatter. Every record is offered to every sink; a record may pass one
//! filter and not another. There is no shared minimum level.

use super::rotating_writer;
use crate::config::Configuration;
use crate::core::error::Result;
use crate::core::fields::Fields;
use crate::core::log_entry::LogEntry;
use crate::core::log_level::LogLevel;
use crate::core::logger::Log;
use crate::core::output_format::OutputFormat;
use crate::sinks::Sink;
use std::any::Any;
use std::io;
use std::sync::Arc;

pub struct TeeLogger {
    sinks: Arc<Vec<Sink>>,
    fields: Fields,
}

impl std::fmt::Debug for TeeLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TeeLogger")
            .field("sinks", &self.sinks.len())
            .field("fields", &self.fields)
            .finish()
    }
}

impl TeeLogger {
    /// Build the backend from its console/file blocks.
    ///
    /// Each enabled sink resolves its own level (empty means Info) and its
    /// own formatter. With neither sink enabled, records are discarded.
    ///
    /// # Errors
    ///
    /// Fails on a level string naming no known level for an enabled sink, or
    /// on a file sink enabled without a usable path.
    pub fn new(config: &Configuration) -> Result<Self> {
        let mut sinks = Vec::new();

        let console = &config.tee_console;
        if console.enabled {
            let level = LogLevel::parse_optional(&console.level)?.unwrap_or_default();
            let format = OutputFormat::from_json_flag(console.json_format);
            sinks.push(
                Sink::new(level, format, Box::new(io::stdout()))
                    .with_colors(format == OutputFormat::Text),
            );
        }

        let file = &config.tee_file;
        if file.enabled {
            let level = LogLevel::parse_optional(&file.level)?.unwrap_or_default();
            let writer = rotating_writer(file, "tee file sink")?;
            sinks.push(Sink::new(
                level,
                OutputFormat::from_json_flag(file.json_format),
                Box::new(writer),
            ));
        }

        Ok(Self {
            sinks: Arc::new(sinks),
            fields: Fields::new(),
        })
    }

    #[cfg(test)]
    pub(crate) fn from_sinks(sinks: Vec<Sink>) -> Self {
        Self {
            sinks: Arc::new(sinks),
            fields: Fields::new(),
        }
    }

    #[must_use]
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }
}

impl Log for TeeLogger {
    fn log(&self, mut entry: LogEntry) {
        if !self.fields.is_empty() {
            entry.fields = self.fields.merged(entry.fields);
        }
        // Best effort per sink: one failing destination must not starve the
        // others.
        for sink in self.sinks.iter() {
            if let Err(e) = sink.write_entry(&entry) {
                eprintln!("[logfacade] tee sink write failed: {}", e);
            }
        }
    }

    fn with_fields(&self, fields: Fields) -> Arc<dyn Log> {
        Arc::new(Self {
            sinks: Arc::clone(&self.sinks),
            fields: self.fields.merged(fields),
        })
    }

    fn flush(&self) -> Result<()> {
        for sink in self.sinks.iter() {
            sink.flush()?;
        }
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
