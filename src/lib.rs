//! # Rust Log Facade
//!
//! A structured logging facade: leveled functions in plain, formatted and
//! key-value shapes over a small synchronous engine, plus a process-wide
//! logger configured once at startup.
//!
//! ## Features
//!
//! - **Three call shapes**: typed fields (`info`), `format_args!` (`infof`),
//!   alternating keys and values (`infow`)
//! - **Console or JSON** output with optional caller and colored levels
//! - **Sinks**: stdout, stderr and files, with error-level entries routed
//!   to their own sinks
//! - **Sampling**: the first 100 entries per level each second, then every 100th
//!
//! ## Example
//!
//! ```no_run
//! use rust_log_facade::{field, infof, kv, Options};
//!
//! let opts = Options {
//!     level: "debug".to_string(),
//!     enable_caller: true,
//!     ..Options::new()
//! };
//! rust_log_facade::init(Some(&opts)).expect("logger options are valid");
//!
//! rust_log_facade::info("started", &[field::int("port", 8080)]);
//! infof!("listening on {}", "0.0.0.0:8080");
//! rust_log_facade::warnw("slow request", &kv!["path", "/search", "ms", 840]);
//!
//! rust_log_facade::flush();
//! ```

pub mod appenders;
pub mod core;
pub mod global;
pub mod macros;
pub mod options;

pub use crate::core::field;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, ConsoleStream, FileAppender};
    pub use crate::core::{
        Appender, Caller, Field, FieldValue, LogEntry, LogLevel, LogSampler, Logger,
        LoggerBuilder, LoggerError, LoggerMetrics, OutputFormat, Result, SamplingConfig,
    };
    pub use crate::field;
    pub use crate::options::Options;
}

pub use appenders::{open_appender, open_appenders, ConsoleAppender, ConsoleStream, FileAppender};
pub use core::{
    Appender, Caller, Encoder, FatalHook, Field, FieldValue, LogEntry, LogLevel, LogSampler,
    Logger, LoggerBuilder, LoggerError, LoggerMetrics, OutputFormat, Result, SamplingConfig,
};
pub use global::{
    debug, debugf, debugw, error, errorf, errorw, fatal, fatalf, fatalw, flush, info, infof,
    infow, init, logger, panic, panicf, panicw, warn, warnf, warnw,
};
pub use options::Options;
