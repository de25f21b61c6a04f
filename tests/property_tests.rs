//! Property-based tests for rust_log_facade using proptest

use proptest::prelude::*;
use rust_log_facade::core::{Encoder, OutputFormat};
use rust_log_facade::prelude::*;
use std::time::Duration;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::Panic),
        Just(LogLevel::Fatal),
    ]
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Level names roundtrip through as_str
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.as_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Parsing ignores case
    #[test]
    fn test_log_level_case_insensitive(level in any_level(), mask in prop::collection::vec(any::<bool>(), 5)) {
        let mixed: String = level
            .as_str()
            .chars()
            .zip(mask.iter().cycle())
            .map(|(c, upper)| if *upper { c.to_ascii_uppercase() } else { c })
            .collect();
        let parsed: LogLevel = mixed.parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Ordering agrees with the numeric severity
    #[test]
    fn test_log_level_ordering(a in any_level(), b in any_level()) {
        prop_assert_eq!(a < b, (a as u8) < (b as u8));
        prop_assert_eq!(a == b, (a as u8) == (b as u8));
    }

    /// Anything that is not a level name fails to parse
    #[test]
    fn test_log_level_invalid_parse(invalid in "[a-z]{0,12}") {
        let known = ["", "debug", "info", "warn", "warning", "error", "panic", "fatal"];
        prop_assume!(!known.contains(&invalid.as_str()));
        prop_assert!(invalid.parse::<LogLevel>().is_err());
    }
}

// ============================================================================
// Options Tests
// ============================================================================

proptest! {
    /// Format names are accepted in any case
    #[test]
    fn test_format_case_insensitive(json in any::<bool>(), upper in any::<bool>()) {
        let name = if json { "json" } else { "console" };
        let name = if upper { name.to_uppercase() } else { name.to_string() };
        let opts = Options { format: name, ..Options::new() };

        prop_assert!(opts.validate().is_empty());
        let expected = if json { OutputFormat::Json } else { OutputFormat::Console };
        prop_assert_eq!(opts.format().unwrap(), expected);
    }

    /// Options survive a trip through their JSON display form
    #[test]
    fn test_options_display_roundtrip(
        level in any_level(),
        color in any::<bool>(),
        caller in any::<bool>(),
        paths in prop::collection::vec("[a-z/]{1,16}", 1..4),
    ) {
        let opts = Options {
            level: level.as_str().to_string(),
            format: "json".to_string(),
            enable_color: color,
            enable_caller: caller,
            output_paths: paths.clone(),
            error_output_paths: paths,
        };

        let parsed: Options = serde_json::from_str(&opts.to_string()).unwrap();
        prop_assert_eq!(parsed, opts);
    }

    /// Unknown levels produce exactly one validation error
    #[test]
    fn test_invalid_level_reported(level in "[A-Z]{3,8}x") {
        let opts = Options { level, ..Options::new() };
        let errs = opts.validate();
        prop_assert_eq!(errs.len(), 1);
        prop_assert!(errs[0].is_configuration());
    }
}

// ============================================================================
// Encoding Tests
// ============================================================================

proptest! {
    /// Console lines never contain raw line breaks (prevents log injection)
    #[test]
    fn test_console_line_single_line(message in ".*") {
        let entry = LogEntry::new(LogLevel::Info, message);
        let line = Encoder::new(OutputFormat::Console).encode(&entry);

        prop_assert!(!line.contains('\n'), "unsanitized newline: {:?}", line);
        prop_assert!(!line.contains('\r'), "unsanitized carriage return: {:?}", line);
    }

    /// JSON lines parse back with the original message
    #[test]
    fn test_json_message_preserved(message in ".*", level in any_level()) {
        let entry = LogEntry::new(level, message.clone());
        let line = Encoder::new(OutputFormat::Json).encode(&entry);

        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        prop_assert_eq!(value["msg"].as_str(), Some(message.as_str()));
        prop_assert_eq!(value["level"].as_str(), Some(level.as_str()));
    }

    /// Durations are encoded as milliseconds
    #[test]
    fn test_duration_millis(ms in 0u64..10_000_000) {
        let value = FieldValue::from(Duration::from_millis(ms)).to_json_value();
        prop_assert_eq!(value.as_f64(), Some(ms as f64));
    }

    /// Caller short form keeps the last directory and the file name
    #[test]
    fn test_caller_short_form(
        dirs in prop::collection::vec("[a-z]{1,8}", 1..5),
        file in "[a-z]{1,8}\\.rs",
        line in 1u32..100_000,
    ) {
        let path: &'static str = Box::leak(format!("{}/{}", dirs.join("/"), file).into_boxed_str());
        let caller = Caller::new(path, line);
        let expected = format!("{}/{}:{}", dirs[dirs.len() - 1], file, line);
        prop_assert_eq!(caller.short(), expected);
    }
}
