//! The `Log` capability set shared by all backends

use super::error::Result;
use super::fields::Fields;
use super::log_entry::LogEntry;
use super::log_level::LogLevel;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Capability set implemented by every backend.
///
/// Implementations must be safe for concurrent use; the sinks behind them
/// serialize writes internally.
pub trait Log: Send + Sync {
    /// Route one record to the backend's sinks, merging the logger's scoped
    /// fields into it.
    fn log(&self, entry: LogEntry);

    /// Derive a new logger carrying the merged field context. The receiver is
    /// never mutated; chained calls accumulate fields.
    fn with_fields(&self, fields: Fields) -> Arc<dyn Log>;

    /// Flush all sinks.
    fn flush(&self) -> Result<()>;

    /// Escape hatch for callers needing the concrete backend.
    fn as_any(&self) -> &dyn Any;

    fn debugf(&self, args: fmt::Arguments<'_>) {
        self.log(LogEntry::new(LogLevel::Debug, args.to_string()));
    }

    fn infof(&self, args: fmt::Arguments<'_>) {
        self.log(LogEntry::new(LogLevel::Info, args.to_string()));
    }

    fn warnf(&self, args: fmt::Arguments<'_>) {
        self.log(LogEntry::new(LogLevel::Warn, args.to_string()));
    }

    fn errorf(&self, args: fmt::Arguments<'_>) {
        self.log(LogEntry::new(LogLevel::Error, args.to_string()));
    }

    /// Log at fatal severity, flush, and terminate the process with exit
    /// code 1. Termination is a documented side effect, not an error path.
    fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.log(LogEntry::new(LogLevel::Fatal, args.to_string()));
        let _ = self.flush();
        std::process::exit(1);
    }

    /// Log at fatal severity, flush, then panic with the message.
    ///
    /// Unlike `fatalf` the condition is recoverable by an enclosing
    /// `catch_unwind`.
    fn panicf(&self, args: fmt::Arguments<'_>) -> ! {
        let message = args.to_string();
        self.log(LogEntry::new(LogLevel::Fatal, message.clone()));
        let _ = self.flush();
        panic!("{}", message);
    }
}

/// A logger that drops every record.
///
/// Returned by the facade when field scoping is requested before
/// initialization; also handy as a test stand-in.
#[derive(Debug, Clone, Copy, Default)]
pub struct Discard;

impl Log for Discard {
    fn log(&self, _entry: LogEntry) {}

    fn with_fields(&self, _fields: Fields) -> Arc<dyn Log> {
        Arc::new(Discard)
    }

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
