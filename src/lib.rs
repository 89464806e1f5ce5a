//! # Logfacade
//!
//! A structured logging facade with selectable backends for console and
//! rotating-file output.
//!
//! ## Features
//!
//! - **Two Backends**: unified (one shared level, multiplexed output) and
//!   tee (independent per-sink levels and formatters)
//! - **Structured Records**: field-scoped loggers layer key/value context
//!   non-destructively
//! - **Rotating Files**: size-based rotation with compression and retention
//! - **Plain Text or JSON**: each sink picks its own encoding
//!
//! ## Quick start
//!
//! ```no_run
//! use logfacade::prelude::*;
//! use logfacade::{errorf, fields, infof};
//!
//! let config = Configuration {
//!     tee_console: ConsoleConfig::enabled("info"),
//!     tee_file: FileConfig::enabled("/var/log/app/app.log", "debug").with_json(true),
//!     ..Default::default()
//! };
//! logfacade::init(&config, BackendKind::Tee).unwrap();
//!
//! infof!("service started on port {}", 8080);
//!
//! let request_log = logfacade::with_fields(fields! { "request_id" => "r-42" });
//! errorf!(request_log, "upstream timed out after {}ms", 500);
//! ```

pub mod backends;
pub mod config;
pub mod core;
pub mod facade;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::backends::{TeeLogger, UnifiedLogger};
    pub use crate::config::{Configuration, ConsoleConfig, FileConfig};
    pub use crate::core::{
        Discard, FieldValue, Fields, Log, LogEntry, LogLevel, LoggerError, OutputFormat, Result,
        TimestampFormat,
    };
    pub use crate::facade::BackendKind;
}

pub use backends::{TeeLogger, UnifiedLogger};
pub use config::{Configuration, ConsoleConfig, FileConfig};
pub use core::{
    Discard, FieldValue, Fields, Log, LogEntry, LogLevel, LoggerError, OutputFormat, Result,
    TimestampFormat,
};
pub use facade::{flush, init, logger, with_fields, BackendKind};
pub use sinks::{MultiWriter, RotatingFileWriter, RotationPolicy, Sink};
