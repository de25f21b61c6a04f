//! Output encodings for log entries
//!
//! - Console: tab-separated, human-readable line (default)
//! - Json: one JSON object per line

use super::field::fields_to_json;
use super::log_entry::LogEntry;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const TIME_KEY: &str = "time";
pub const LEVEL_KEY: &str = "level";
pub const NAME_KEY: &str = "logger";
pub const CALLER_KEY: &str = "caller";
pub const MESSAGE_KEY: &str = "msg";
pub const STACK_KEY: &str = "stack";

/// Output format for log entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text format (default)
    ///
    /// Example: `2025-01-08T10:30:45+08:00	info	Request processed	{"status":200}`
    #[default]
    Console,

    /// JSON format for machine processing
    ///
    /// Example: `{"time":"2025-01-08T10:30:45+08:00","level":"info","msg":"Request processed"}`
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Console => "console",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "console" => Ok(OutputFormat::Console),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("not a valid log format: {:?}", s)),
        }
    }
}

/// Turns entries into single output lines
///
/// The caller element is written only when `include_caller` is set. Color
/// applies to the level of console lines only; JSON output is never colored.
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    pub format: OutputFormat,
    pub use_colors: bool,
    pub include_caller: bool,
}

impl Encoder {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    #[must_use]
    pub fn with_caller(mut self, include_caller: bool) -> Self {
        self.include_caller = include_caller;
        self
    }

    /// Encode an entry, without trailing newline
    pub fn encode(&self, entry: &LogEntry) -> String {
        match self.format {
            OutputFormat::Console => self.encode_console(entry),
            OutputFormat::Json => self.encode_json(entry),
        }
    }

    fn encode_console(&self, entry: &LogEntry) -> String {
        // written even when no terminal is attached
        let level = if self.use_colors {
            format!(
                "\x1b[{}m{}\x1b[0m",
                entry.level.color_code().to_fg_str(),
                entry.level.capital_str()
            )
        } else {
            entry.level.as_str().to_string()
        };

        let mut parts = vec![entry.rfc3339(), level];
        if let Some(ref name) = entry.logger_name {
            parts.push(name.clone());
        }
        if self.include_caller {
            if let Some(caller) = entry.caller {
                parts.push(caller.short());
            }
        }
        parts.push(sanitize_message(&entry.message));
        if !entry.fields.is_empty() {
            let fields = serde_json::Value::Object(fields_to_json(&entry.fields));
            parts.push(fields.to_string());
        }

        let mut line = parts.join("\t");
        if let Some(ref stack) = entry.stack {
            line.push('\n');
            line.push_str(stack.trim_end());
        }
        line
    }

    fn encode_json(&self, entry: &LogEntry) -> String {
        use serde_json::Value;

        let mut json_obj = serde_json::Map::new();
        json_obj.insert(TIME_KEY.to_string(), Value::String(entry.rfc3339()));
        json_obj.insert(
            LEVEL_KEY.to_string(),
            Value::String(entry.level.as_str().to_string()),
        );
        if let Some(ref name) = entry.logger_name {
            json_obj.insert(NAME_KEY.to_string(), Value::String(name.clone()));
        }
        if self.include_caller {
            if let Some(caller) = entry.caller {
                json_obj.insert(CALLER_KEY.to_string(), Value::String(caller.short()));
            }
        }
        json_obj.insert(
            MESSAGE_KEY.to_string(),
            Value::String(entry.message.clone()),
        );
        if let Some(ref stack) = entry.stack {
            json_obj.insert(STACK_KEY.to_string(), Value::String(stack.clone()));
        }
        json_obj.extend(fields_to_json(&entry.fields));

        Value::Object(json_obj).to_string()
    }
}

/// Escape line breaks and tabs so one entry stays on one console line
fn sanitize_message(message: &str) -> String {
    message
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
