//! Facade: backend selection, process-wide logger, free functions
//!
//! `init` constructs the chosen backend and installs it as the process-wide
//! logger; every free function below delegates to it. The singleton lives in
//! a lock, so a logging call racing a re-initialization is safe; logging
//! before a successful `init` is a silent no-op.

use crate::backends::{TeeLogger, UnifiedLogger};
use crate::config::Configuration;
use crate::core::error::{LoggerError, Result};
use crate::core::fields::Fields;
use crate::core::log_entry::LogEntry;
use crate::core::log_level::LogLevel;
use crate::core::logger::{Discard, Log};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

static GLOBAL: RwLock<Option<Arc<dyn Log>>> = RwLock::new(None);

/// Which backend `init` should construct
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// One shared level and formatter, multiplexed output
    Unified,
    /// Independent per-sink levels and formatters, fan-out output
    Tee,
}

impl BackendKind {
    pub fn name(&self) -> &'static str {
        match self {
            BackendKind::Unified => "unified",
            BackendKind::Tee => "tee",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for BackendKind {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "unified" => Ok(BackendKind::Unified),
            "tee" => Ok(BackendKind::Tee),
            _ => Err(LoggerError::InvalidBackend(s.to_string())),
        }
    }
}

/// Construct the chosen backend and install it as the process-wide logger.
///
/// Intended to be called once at process start, before worker threads begin
/// logging; calling it again atomically replaces the logger.
///
/// # Errors
///
/// Surfaces the backend's misconfiguration errors ([`LoggerError::InvalidLevel`],
/// [`LoggerError::InvalidConfiguration`], file open failures). On error the
/// previously installed logger, if any, is left unchanged.
pub fn init(config: &Configuration, backend: BackendKind) -> Result<()> {
    let logger: Arc<dyn Log> = match backend {
        BackendKind::Unified => Arc::new(UnifiedLogger::new(config)?),
        BackendKind::Tee => Arc::new(TeeLogger::new(config)?),
    };
    *GLOBAL.write() = Some(logger);
    Ok(())
}

/// Handle to the process-wide logger; `None` before a successful `init`.
pub fn logger() -> Option<Arc<dyn Log>> {
    GLOBAL.read().clone()
}

/// Derive a field-scoped logger from the process-wide one.
///
/// Before `init` this returns a [`Discard`] logger, so scoping never fails.
pub fn with_fields(fields: Fields) -> Arc<dyn Log> {
    match logger() {
        Some(logger) => logger.with_fields(fields),
        None => Arc::new(Discard),
    }
}

/// Route one record through the process-wide logger; a no-op before `init`.
pub fn log(entry: LogEntry) {
    if let Some(logger) = logger() {
        logger.log(entry);
    }
}

pub fn debugf(args: fmt::Arguments<'_>) {
    log(LogEntry::new(LogLevel::Debug, args.to_string()));
}

pub fn infof(args: fmt::Arguments<'_>) {
    log(LogEntry::new(LogLevel::Info, args.to_string()));
}

pub fn warnf(args: fmt::Arguments<'_>) {
    log(LogEntry::new(LogLevel::Warn, args.to_string()));
}

pub fn errorf(args: fmt::Arguments<'_>) {
    log(LogEntry::new(LogLevel::Error, args.to_string()));
}

/// Log at fatal severity and terminate the process with exit code 1.
/// Terminates even before `init` (with nothing logged).
pub fn fatalf(args: fmt::Arguments<'_>) -> ! {
    match logger() {
        Some(logger) => logger.fatalf(args),
        None => std::process::exit(1),
    }
}

/// Log at fatal severity and panic with the message.
pub fn panicf(args: fmt::Arguments<'_>) -> ! {
    match logger() {
        Some(logger) => logger.panicf(args),
        None => panic!("{}", args),
    }
}

/// Flush the process-wide logger's sinks; a no-op before `init`.
pub fn flush() -> Result<()> {
    match logger() {
        Some(logger) => logger.flush(),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConsoleConfig;

    #[test]
    fn test_backend_kind_parsing() {
        assert_eq!("unified".parse::<BackendKind>().unwrap(), BackendKind::Unified);
        assert_eq!("tee".parse::<BackendKind>().unwrap(), BackendKind::Tee);

        let err = "syslog".parse::<BackendKind>().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidBackend(s) if s == "syslog"));
    }

    #[test]
    fn test_backend_kind_display_roundtrip() {
        for kind in [BackendKind::Unified, BackendKind::Tee] {
            assert_eq!(kind.to_string().parse::<BackendKind>().unwrap(), kind);
        }
    }

    // The global logger is process state, so every assertion about it lives
    // in this one test to keep parallel test threads out of each other's way.
    #[test]
    fn test_global_lifecycle() {
        // Before init: verbs are no-ops, scoping yields a discard logger.
        assert!(logger().is_none());
        infof(format_args!("goes nowhere"));
        assert!(flush().is_ok());
        let scoped = with_fields(Fields::new().with_field("a", 1));
        assert!(scoped.as_any().downcast_ref::<Discard>().is_some());

        // Successful init installs the backend.
        let config = Configuration {
            tee_console: ConsoleConfig::enabled("error"),
            ..Default::default()
        };
        init(&config, BackendKind::Tee).unwrap();
        let installed = logger().expect("logger installed");
        assert!(installed.as_any().downcast_ref::<TeeLogger>().is_some());

        // Failed init leaves the installed logger unchanged.
        let bad = Configuration {
            unified_console: ConsoleConfig::enabled("shouty"),
            ..Default::default()
        };
        assert!(init(&bad, BackendKind::Unified).is_err());
        let still = logger().expect("logger still installed");
        assert!(still.as_any().downcast_ref::<TeeLogger>().is_some());
    }
}
