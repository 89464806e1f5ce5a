//! Core types shared by the facade and both backends

pub mod error;
pub mod fields;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod output_format;
pub mod timestamp;

pub use error::{LoggerError, Result};
pub use fields::{FieldValue, Fields};
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use logger::{Discard, Log};
pub use output_format::OutputFormat;
pub use timestamp::TimestampFormat;
