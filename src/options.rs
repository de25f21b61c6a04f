//! Logger configuration
//!
//! [`Options`] is a plain record that can come from defaults, command-line
//! flags (see [`Options::add_flags`]) or any serde loader. It is validated and
//! turned into a logger by [`crate::init`] or [`Logger::from_options`].
//!
//! ```
//! use clap::Command;
//! use rust_log_facade::Options;
//!
//! let mut opts = Options::new();
//! let matches = opts
//!     .add_flags(Command::new("app"))
//!     .get_matches_from(["app", "--log.level=debug", "--log.format=json"]);
//! opts.apply_matches(&matches);
//!
//! assert!(opts.validate().is_empty());
//! assert_eq!(opts.level, "debug");
//! ```
//!
//! [`Logger::from_options`]: crate::Logger::from_options

use crate::core::{LogLevel, LoggerError, OutputFormat, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const FLAG_LEVEL: &str = "log.level";
pub const FLAG_FORMAT: &str = "log.format";
pub const FLAG_ENABLE_COLOR: &str = "log.enable-color";
pub const FLAG_ENABLE_CALLER: &str = "log.enable-caller";
pub const FLAG_OUTPUT_PATHS: &str = "log.output-paths";
pub const FLAG_ERROR_OUTPUT_PATHS: &str = "log.error-output-paths";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Options {
    /// Minimum level name: debug, info, warn, error, panic or fatal
    pub level: String,
    /// `console` or `json`
    pub format: String,
    pub enable_color: bool,
    pub enable_caller: bool,
    /// Sinks for entries below error level
    pub output_paths: Vec<String>,
    /// Sinks for error, panic and fatal entries
    pub error_output_paths: Vec<String>,
}

impl Options {
    pub fn new() -> Self {
        Self {
            level: LogLevel::Info.as_str().to_string(),
            format: OutputFormat::Console.as_str().to_string(),
            enable_color: false,
            enable_caller: false,
            output_paths: vec!["stdout".to_string()],
            error_output_paths: vec!["stderr".to_string()],
        }
    }

    /// Check the level and format names
    ///
    /// Returns every problem found; an empty list means the options are valid.
    pub fn validate(&self) -> Vec<LoggerError> {
        let mut errs = Vec::new();
        if let Err(e) = self.level() {
            errs.push(e);
        }
        if let Err(e) = self.format() {
            errs.push(e);
        }
        errs
    }

    pub fn level(&self) -> Result<LogLevel> {
        self.level
            .parse()
            .map_err(|_| LoggerError::invalid_level(&self.level))
    }

    pub fn format(&self) -> Result<OutputFormat> {
        self.format
            .parse()
            .map_err(|_| LoggerError::invalid_format(&self.format))
    }

    /// Register the `log.*` flags on `cmd`, defaulting to the current values
    pub fn add_flags(&self, cmd: Command) -> Command {
        cmd.arg(
            Arg::new(FLAG_LEVEL)
                .long(FLAG_LEVEL)
                .value_name("LEVEL")
                .default_value(self.level.clone())
                .help("Minimum log level: debug, info, warn, error, panic or fatal"),
        )
        .arg(
            Arg::new(FLAG_FORMAT)
                .long(FLAG_FORMAT)
                .value_name("FORMAT")
                .default_value(self.format.clone())
                .help("Log output format: console or json"),
        )
        .arg(bool_flag(FLAG_ENABLE_COLOR, self.enable_color).help(
            "Color the level in console output",
        ))
        .arg(bool_flag(FLAG_ENABLE_CALLER, self.enable_caller).help(
            "Include the calling file and line in each entry",
        ))
        .arg(
            path_list_flag(FLAG_OUTPUT_PATHS, &self.output_paths)
                .help("Comma-separated sinks for log output (stdout, stderr or file paths)"),
        )
        .arg(
            path_list_flag(FLAG_ERROR_OUTPUT_PATHS, &self.error_output_paths)
                .help("Comma-separated sinks for error-level output"),
        )
    }

    /// Copy parsed `log.*` flag values into the options
    ///
    /// Flags that were never registered on the command leave the field as is.
    pub fn apply_matches(&mut self, matches: &ArgMatches) {
        if let Ok(Some(level)) = matches.try_get_one::<String>(FLAG_LEVEL) {
            self.level = level.clone();
        }
        if let Ok(Some(format)) = matches.try_get_one::<String>(FLAG_FORMAT) {
            self.format = format.clone();
        }
        if let Ok(Some(enabled)) = matches.try_get_one::<bool>(FLAG_ENABLE_COLOR) {
            self.enable_color = *enabled;
        }
        if let Ok(Some(enabled)) = matches.try_get_one::<bool>(FLAG_ENABLE_CALLER) {
            self.enable_caller = *enabled;
        }
        if let Ok(Some(paths)) = matches.try_get_many::<String>(FLAG_OUTPUT_PATHS) {
            self.output_paths = paths.cloned().collect();
        }
        if let Ok(Some(paths)) = matches.try_get_many::<String>(FLAG_ERROR_OUTPUT_PATHS) {
            self.error_output_paths = paths.cloned().collect();
        }
    }
}

fn bool_flag(name: &'static str, current: bool) -> Arg {
    Arg::new(name)
        .long(name)
        .value_name("BOOL")
        .action(ArgAction::Set)
        .num_args(0..=1)
        .require_equals(true)
        .default_value(if current { "true" } else { "false" })
        .default_missing_value("true")
        .value_parser(value_parser!(bool))
}

fn path_list_flag(name: &'static str, current: &[String]) -> Arg {
    Arg::new(name)
        .long(name)
        .value_name("PATHS")
        .action(ArgAction::Set)
        .value_delimiter(',')
        .default_values(current.to_vec())
}

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Options {
    /// JSON form of the options; empty if serialization fails
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serde_json::to_string(self).unwrap_or_default())
    }
}
