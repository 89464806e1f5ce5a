//! Logging macros for printf-style message formatting
//!
//! Each verb macro has two forms: against the process-wide logger, and
//! against an explicit logger handle. Both capture the caller's location so
//! the JSON encoder can report the real call site.
//!
//! # Examples
//!
//! ```no_run
//! use logfacade::prelude::*;
//! use logfacade::{fields, infof, warnf};
//!
//! let config = Configuration {
//!     tee_console: ConsoleConfig::enabled("info"),
//!     ..Default::default()
//! };
//! logfacade::init(&config, BackendKind::Tee).unwrap();
//!
//! infof!("server listening on port {}", 8080);
//!
//! let scoped = logfacade::with_fields(fields! { "request_id" => "r-42" });
//! warnf!(scoped, "slow request: {}ms", 1200);
//! ```

/// Build a [`Fields`](crate::core::Fields) set from literal key/value pairs.
#[macro_export]
macro_rules! fields {
    () => {
        $crate::core::Fields::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut fields = $crate::core::Fields::new();
        $(fields.add_field($key, $value);)+
        fields
    }};
}

/// Log against an explicit logger handle at the given level, capturing the
/// call site.
#[macro_export]
macro_rules! logf {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log(
            $crate::core::LogEntry::new($level, format!($($arg)+))
                .with_location(file!(), line!(), module_path!()),
        )
    };
}

/// Log a debug-level message.
///
/// `debugf!("fmt", args)` targets the process-wide logger;
/// `debugf!(logger, "fmt", args)` targets an explicit handle.
#[macro_export]
macro_rules! debugf {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::facade::log(
            $crate::core::LogEntry::new($crate::core::LogLevel::Debug, format!($fmt $(, $arg)*))
                .with_location(file!(), line!(), module_path!()),
        )
    };
    ($logger:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::logf!($logger, $crate::core::LogLevel::Debug, $fmt $(, $arg)*)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! infof {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::facade::log(
            $crate::core::LogEntry::new($crate::core::LogLevel::Info, format!($fmt $(, $arg)*))
                .with_location(file!(), line!(), module_path!()),
        )
    };
    ($logger:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::logf!($logger, $crate::core::LogLevel::Info, $fmt $(, $arg)*)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warnf {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::facade::log(
            $crate::core::LogEntry::new($crate::core::LogLevel::Warn, format!($fmt $(, $arg)*))
                .with_location(file!(), line!(), module_path!()),
        )
    };
    ($logger:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::logf!($logger, $crate::core::LogLevel::Warn, $fmt $(, $arg)*)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! errorf {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::facade::log(
            $crate::core::LogEntry::new($crate::core::LogLevel::Error, format!($fmt $(, $arg)*))
                .with_location(file!(), line!(), module_path!()),
        )
    };
    ($logger:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::logf!($logger, $crate::core::LogLevel::Error, $fmt $(, $arg)*)
    };
}

/// Log a fatal-level message and terminate the process with exit code 1.
#[macro_export]
macro_rules! fatalf {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::facade::fatalf(format_args!($fmt $(, $arg)*))
    };
    ($logger:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $logger.fatalf(format_args!($fmt $(, $arg)*))
    };
}

/// Log a fatal-level message and panic with it.
#[macro_export]
macro_rules! panicf {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::facade::panicf(format_args!($fmt $(, $arg)*))
    };
    ($logger:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $logger.panicf(format_args!($fmt $(, $arg)*))
    };
}
