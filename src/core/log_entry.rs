//! Log entry structure

use super::field::Field;
use super::log_level::LogLevel;
use chrono::{DateTime, Local, SecondsFormat};
use std::fmt;
use std::panic::Location;

/// Source location of a logging call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub file: &'static str,
    pub line: u32,
}

impl Caller {
    pub fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Location of the outermost `#[track_caller]` frame
    #[track_caller]
    pub fn here() -> Self {
        Location::caller().into()
    }

    /// `dir/file.rs:line`, keeping only the last directory of the path
    pub fn short(&self) -> String {
        format!("{}:{}", short_path(self.file), self.line)
    }
}

impl From<&'static Location<'static>> for Caller {
    fn from(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line())
    }
}

impl fmt::Display for Caller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

fn short_path(path: &str) -> &str {
    let Some(last) = path.rfind(['/', '\\']) else {
        return path;
    };
    match path[..last].rfind(['/', '\\']) {
        Some(prev) => &path[prev + 1..],
        None => path,
    }
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Local>,
    pub logger_name: Option<String>,
    pub caller: Option<Caller>,
    pub stack: Option<String>,
    pub fields: Vec<Field>,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: Local::now(),
            logger_name: None,
            caller: None,
            stack: None,
            fields: Vec::new(),
        }
    }

    pub fn with_caller(mut self, caller: Caller) -> Self {
        self.caller = Some(caller);
        self
    }

    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.logger_name = name;
        self
    }

    pub fn with_fields(mut self, fields: Vec<Field>) -> Self {
        self.fields = fields;
        self
    }

    /// Capture the current stack trace regardless of `RUST_BACKTRACE`
    pub fn with_stack(mut self) -> Self {
        self.stack = Some(std::backtrace::Backtrace::force_capture().to_string());
        self
    }

    /// Timestamp as RFC 3339 with seconds precision
    pub fn rfc3339(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_path() {
        assert_eq!(short_path("src/core/logger.rs"), "core/logger.rs");
        assert_eq!(short_path("/home/me/app/src/main.rs"), "src/main.rs");
        assert_eq!(short_path("src/main.rs"), "src/main.rs");
        assert_eq!(short_path("main.rs"), "main.rs");
        assert_eq!(short_path("C:\\work\\app\\main.rs"), "app\\main.rs");
    }

    #[test]
    fn test_caller_here() {
        let caller = Caller::here();
        assert!(caller.file.ends_with("log_entry.rs"));
        assert!(caller.short().starts_with("core/log_entry.rs:"));
    }

    #[test]
    fn test_rfc3339_seconds_precision() {
        let entry = LogEntry::new(LogLevel::Info, "hello");
        let ts = entry.rfc3339();
        let parsed = DateTime::parse_from_rfc3339(&ts).expect("valid rfc3339");
        assert_eq!(parsed.timestamp(), entry.timestamp.timestamp());
        assert!(!ts.contains('.'));
    }

    #[test]
    fn test_stack_capture() {
        let entry = LogEntry::new(LogLevel::Panic, "boom").with_stack();
        assert!(entry.stack.is_some());
    }
}
