//! Typed configuration for the facade
//!
//! One settings block per backend/sink pair. Absent blocks deserialize to
//! their zero value: sink disabled, empty level. Rotation parameters are
//! configurable per file sink and fall back to conservative defaults when a
//! block is enabled without them.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default size a log file may reach before rotation, in megabytes.
pub const DEFAULT_MAX_SIZE_MB: u64 = 100;
/// Default age after which rotated files are pruned, in days.
pub const DEFAULT_MAX_AGE_DAYS: u64 = 28;
/// Default number of rotated files kept on disk.
pub const DEFAULT_MAX_BACKUPS: usize = 7;

/// Settings for the whole facade: one console/file pair per backend.
///
/// Each backend reads only its own pair and ignores the rest, so a single
/// `Configuration` can describe both backends at once.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub unified_console: ConsoleConfig,
    pub unified_file: FileConfig,
    pub tee_console: ConsoleConfig,
    pub tee_file: FileConfig,
}

/// Console sink settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    pub enabled: bool,
    pub json_format: bool,
    /// One of `debug`, `info`, `warn`, `error`, `fatal`; empty means unset.
    pub level: String,
}

impl ConsoleConfig {
    /// An enabled console sink at the given level, text format.
    pub fn enabled(level: impl Into<String>) -> Self {
        Self {
            enabled: true,
            json_format: false,
            level: level.into(),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_json(mut self, json_format: bool) -> Self {
        self.json_format = json_format;
        self
    }
}

/// Rotating-file sink settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub enabled: bool,
    pub json_format: bool,
    /// One of `debug`, `info`, `warn`, `error`, `fatal`; empty means unset.
    pub level: String,
    pub path: PathBuf,
    /// Size the file may reach before rotation, in megabytes.
    pub max_size_mb: u64,
    /// Gzip rotated files.
    pub compress: bool,
    /// Prune rotated files older than this many days; 0 keeps them forever.
    pub max_age_days: u64,
    /// Number of rotated files kept on disk.
    pub max_backups: usize,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            json_format: false,
            level: String::new(),
            path: PathBuf::new(),
            max_size_mb: DEFAULT_MAX_SIZE_MB,
            compress: true,
            max_age_days: DEFAULT_MAX_AGE_DAYS,
            max_backups: DEFAULT_MAX_BACKUPS,
        }
    }
}

impl FileConfig {
    /// An enabled file sink at the given path and level, text format,
    /// default rotation parameters.
    pub fn enabled(path: impl Into<PathBuf>, level: impl Into<String>) -> Self {
        Self {
            enabled: true,
            level: level.into(),
            path: path.into(),
            ..Default::default()
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_json(mut self, json_format: bool) -> Self {
        self.json_format = json_format;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_max_size_mb(mut self, max_size_mb: u64) -> Self {
        self.max_size_mb = max_size_mb;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_compress(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_max_age_days(mut self, max_age_days: u64) -> Self {
        self.max_age_days = max_age_days;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_max_backups(mut self, max_backups: usize) -> Self {
        self.max_backups = max_backups;
        self
    }
}
