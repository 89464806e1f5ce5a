//! Log record structure

use super::fields::Fields;
use super::log_level::LogLevel;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    /// Caller location, captured at the macro call site
    pub file: Option<&'static str>,
    pub line: Option<u32>,
    pub module_path: Option<&'static str>,
    /// Structured fields merged from the logger's scoped context
    pub fields: Fields,
}

impl LogEntry {
    /// Sanitize log message to prevent log injection attacks
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// so a message cannot fake additional log records.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: Self::sanitize_message(&message.into()),
            timestamp: Utc::now(),
            file: None,
            line: None,
            module_path: None,
            fields: Fields::new(),
        }
    }

    #[must_use]
    pub fn with_location(mut self, file: &'static str, line: u32, module_path: &'static str) -> Self {
        self.file = Some(file);
        self.line = Some(line);
        self.module_path = Some(module_path);
        self
    }

    #[must_use]
    pub fn with_fields(mut self, fields: Fields) -> Self {
        self.fields = fields;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_sanitization() {
        let entry = LogEntry::new(LogLevel::Info, "line one\nFAKE [ERROR] injected");
        assert!(!entry.message.contains('\n'));
        assert!(entry.message.contains("\\n"));
    }

    #[test]
    fn test_with_location() {
        let entry = LogEntry::new(LogLevel::Debug, "x").with_location("src/lib.rs", 42, "app");
        assert_eq!(entry.file, Some("src/lib.rs"));
        assert_eq!(entry.line, Some(42));
        assert_eq!(entry.module_path, Some("app"));
    }

    #[test]
    fn test_with_fields() {
        let entry = LogEntry::new(LogLevel::Info, "x")
            .with_fields(Fields::new().with_field("request_id", "abc-123"));
        assert_eq!(entry.fields.len(), 1);
    }
}
