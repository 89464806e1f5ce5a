//! Property-based tests for logfacade using proptest

use logfacade::prelude::*;
use proptest::prelude::*;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::Fatal),
    ]
}

proptest! {
    /// The five configuration names and only those parse to levels
    #[test]
    fn test_level_name_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.name().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Any string that is not one of the five names is rejected
    #[test]
    fn test_unknown_level_strings_rejected(s in "[a-zA-Z0-9_]{0,12}") {
        let recognized = ["debug", "info", "warn", "error", "fatal"];
        prop_assume!(!recognized.contains(&s.as_str()));

        if s.is_empty() {
            prop_assert_eq!(LogLevel::parse_optional(&s).unwrap(), None);
        } else {
            prop_assert!(s.parse::<LogLevel>().is_err());
            prop_assert!(LogLevel::parse_optional(&s).is_err());
        }
    }

    /// Level ordering matches the numeric discriminants
    #[test]
    fn test_level_ordering(level1 in any_level(), level2 in any_level()) {
        let val1 = level1 as u8;
        let val2 = level2 as u8;

        prop_assert_eq!(level1 <= level2, val1 <= val2);
        prop_assert_eq!(level1 < level2, val1 < val2);
    }

    /// Messages never carry raw newlines after sanitization
    #[test]
    fn test_message_stays_single_line(message in ".*") {
        let entry = LogEntry::new(LogLevel::Info, message.clone());

        prop_assert!(!entry.message.contains('\n'),
            "unsanitized newline in {:?}", entry.message);
        prop_assert!(!entry.message.contains('\r'),
            "unsanitized carriage return in {:?}", entry.message);

        if message.contains('\n') {
            prop_assert!(entry.message.contains("\\n"));
        }
    }

    /// Merging fields never mutates the receiver and the newer value wins
    #[test]
    fn test_field_merge_semantics(base in 0i64..1000, update in 0i64..1000) {
        let parent = Fields::new().with_field("shared", base).with_field("own", 1);
        let merged = parent.merged(Fields::new().with_field("shared", update));

        prop_assert_eq!(parent.get("shared"), Some(&FieldValue::Int(base)));
        prop_assert_eq!(merged.get("shared"), Some(&FieldValue::Int(update)));
        prop_assert_eq!(merged.get("own"), Some(&FieldValue::Int(1)));
    }

    /// The JSON encoder always emits one parseable object per record
    #[test]
    fn test_json_encoder_output_parses(message in ".*", key in "[a-z][a-z0-9_]{0,8}", value in 0i64..10_000) {
        let reserved = ["timestamp", "level", "message", "file", "line", "module_path"];
        prop_assume!(!reserved.contains(&key.as_str()));

        let entry = LogEntry::new(LogLevel::Info, message)
            .with_fields(Fields::new().with_field(key.as_str(), value));
        let line = OutputFormat::Json.format(&entry, &TimestampFormat::default(), false);

        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        prop_assert_eq!(parsed["level"].as_str(), Some("INFO"));
        prop_assert_eq!(parsed[key.as_str()].as_i64(), Some(value));
    }
}
