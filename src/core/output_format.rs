//! Output formats for log records
//!
//! Provides the two encoders a sink can be configured with:
//! - Text: human-readable format with a full timestamp (default)
//! - Json: one JSON object per record, fields flattened at the top level

use super::log_entry::LogEntry;
use super::timestamp::TimestampFormat;
use colored::Colorize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text format
    ///
    /// Example: `[2025-01-08T10:30:45.123Z] [INFO ] request processed user_id=123`
    #[default]
    Text,

    /// JSON format for machine processing
    ///
    /// Example: `{"timestamp":"2025-01-08T10:30:45.123Z","level":"INFO","message":"request processed","user_id":123}`
    Json,
}

impl OutputFormat {
    /// Map a configuration `json_format` flag to an encoder
    #[must_use]
    pub fn from_json_flag(json_format: bool) -> Self {
        if json_format {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }

    /// Format a log record according to this output format
    ///
    /// `colors` only affects the text encoder; it colorizes the level tag for
    /// console sinks.
    pub fn format(&self, entry: &LogEntry, timestamp: &TimestampFormat, colors: bool) -> String {
        match self {
            OutputFormat::Text => Self::format_text(entry, timestamp, colors),
            OutputFormat::Json => Self::format_json(entry, timestamp),
        }
    }

    fn format_text(entry: &LogEntry, timestamp: &TimestampFormat, colors: bool) -> String {
        let level_str = if colors {
            format!("{:5}", entry.level.as_str())
                .color(entry.level.color_code())
                .to_string()
        } else {
            format!("{:5}", entry.level.as_str())
        };

        let base = format!(
            "[{}] [{}] {}",
            timestamp.format(&entry.timestamp),
            level_str,
            entry.message
        );

        if entry.fields.is_empty() {
            base
        } else {
            format!("{} {}", base, entry.fields.format_fields())
        }
    }

    fn format_json(entry: &LogEntry, timestamp: &TimestampFormat) -> String {
        let mut json_obj = serde_json::Map::new();

        json_obj.insert(
            "timestamp".to_string(),
            Self::format_timestamp_json(entry, timestamp),
        );
        json_obj.insert(
            "level".to_string(),
            serde_json::Value::String(entry.level.as_str().to_string()),
        );
        json_obj.insert(
            "message".to_string(),
            serde_json::Value::String(entry.message.clone()),
        );

        // Caller location when the record was built by a logging macro
        if let Some(file) = entry.file {
            json_obj.insert(
                "file".to_string(),
                serde_json::Value::String(file.to_string()),
            );
        }
        if let Some(line) = entry.line {
            json_obj.insert("line".to_string(), serde_json::Value::Number(line.into()));
        }
        if let Some(module_path) = entry.module_path {
            json_obj.insert(
                "module_path".to_string(),
                serde_json::Value::String(module_path.to_string()),
            );
        }

        for (key, value) in entry.fields.iter() {
            json_obj.insert(key.clone(), value.to_json_value());
        }

        serde_json::to_string(&serde_json::Value::Object(json_obj)).unwrap_or_default()
    }

    fn format_timestamp_json(entry: &LogEntry, timestamp: &TimestampFormat) -> serde_json::Value {
        if timestamp.is_numeric() {
            serde_json::Value::Number(entry.timestamp.timestamp_millis().into())
        } else {
            serde_json::Value::String(timestamp.format(&entry.timestamp))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Fields, LogLevel};

    #[test]
    fn test_text_format() {
        let entry = LogEntry::new(LogLevel::Info, "Test message");
        let result = OutputFormat::Text.format(&entry, &TimestampFormat::Iso8601, false);

        assert!(result.contains("INFO"));
        assert!(result.contains("Test message"));
    }

    #[test]
    fn test_text_format_with_fields() {
        let entry = LogEntry::new(LogLevel::Info, "User logged in").with_fields(
            Fields::new()
                .with_field("user_id", 123)
                .with_field("action", "login"),
        );
        let result = OutputFormat::Text.format(&entry, &TimestampFormat::Iso8601, false);

        assert!(result.contains("User logged in"));
        assert!(result.contains("user_id=123"));
        assert!(result.contains("action=login"));
    }

    #[test]
    fn test_json_format() {
        let entry = LogEntry::new(LogLevel::Error, "Error occurred");
        let result = OutputFormat::Json.format(&entry, &TimestampFormat::Iso8601, false);

        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed["level"], "ERROR");
        assert_eq!(parsed["message"], "Error occurred");
        assert!(parsed["timestamp"].is_string());
    }

    #[test]
    fn test_json_format_with_fields() {
        let entry = LogEntry::new(LogLevel::Info, "Request completed").with_fields(
            Fields::new()
                .with_field("request_id", "abc-123")
                .with_field("latency_ms", 42),
        );
        let result = OutputFormat::Json.format(&entry, &TimestampFormat::Iso8601, false);

        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed["request_id"], "abc-123");
        assert_eq!(parsed["latency_ms"], 42);
    }

    #[test]
    fn test_json_format_with_location() {
        let entry =
            LogEntry::new(LogLevel::Debug, "x").with_location("src/server.rs", 17, "app::server");
        let result = OutputFormat::Json.format(&entry, &TimestampFormat::Iso8601, false);

        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed["file"], "src/server.rs");
        assert_eq!(parsed["line"], 17);
        assert_eq!(parsed["module_path"], "app::server");
    }

    #[test]
    fn test_json_numeric_timestamp() {
        let entry = LogEntry::new(LogLevel::Info, "x");
        let result = OutputFormat::Json.format(&entry, &TimestampFormat::UnixMillis, false);

        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert!(parsed["timestamp"].is_number());
    }

    #[test]
    fn test_from_json_flag() {
        assert_eq!(OutputFormat::from_json_flag(true), OutputFormat::Json);
        assert_eq!(OutputFormat::from_json_flag(false), OutputFormat::Text);
    }
}
