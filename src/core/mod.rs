//! Core logger types and traits

pub mod appender;
pub mod error;
pub mod field;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod output_format;
pub mod sampling;

pub use appender::Appender;
pub use error::{LoggerError, Result};
pub use field::{Field, FieldValue};
pub use log_entry::{Caller, LogEntry};
pub use log_level::LogLevel;
pub use logger::{FatalHook, Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use output_format::{Encoder, OutputFormat};
pub use sampling::{LogSampler, SamplingConfig};
