//! Main logger implementation
//!
//! A [`Logger`] owns its sinks behind an [`Arc`], so clones and child loggers
//! created with [`Logger::with`] or [`Logger::named`] write to the same place.
//! Every entry point has three shapes:
//!
//! - plain: message plus pre-built [`Field`]s (`info`)
//! - formatted: `format_args!` output as the message (`infof`)
//! - key-value: message plus alternating keys and values (`infow`)

use super::{
    appender::Appender,
    error::Result,
    field::{Field, FieldValue},
    log_entry::{Caller, LogEntry},
    log_level::LogLevel,
    metrics::LoggerMetrics,
    output_format::{Encoder, OutputFormat},
    sampling::{LogSampler, SamplingConfig},
};
use crate::appenders::open_appenders;
use crate::options::Options;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// Called with the message after a fatal entry is written, before the process exits
pub type FatalHook = Arc<dyn Fn(&str) + Send + Sync>;

const ODD_KEY_VALUES: &str = "odd number of arguments passed as key-value pairs for logging";
const NON_STRING_KEY: &str =
    "non-string key argument passed to logging, ignoring all later arguments";

struct Core {
    min_level: LogLevel,
    encoder: Encoder,
    appenders: Mutex<Vec<Box<dyn Appender>>>,
    error_appenders: Mutex<Vec<Box<dyn Appender>>>,
    sampler: Option<LogSampler>,
    metrics: LoggerMetrics,
    fatal_hook: Option<FatalHook>,
}

#[derive(Clone)]
pub struct Logger {
    core: Arc<Core>,
    name: Option<String>,
    context: Vec<Field>,
}

impl Logger {
    /// Build a logger from validated options, opening every sink they name
    pub fn from_options(opts: &Options) -> Result<Self> {
        let level = opts.level()?;
        let format = opts.format()?;
        let appenders = open_appenders(&opts.output_paths)?;
        let error_appenders = open_appenders(&opts.error_output_paths)?;

        Ok(Logger::builder()
            .min_level(level)
            .format(format)
            .color(opts.enable_color)
            .caller(opts.enable_caller)
            .appenders(appenders)
            .error_appenders(error_appenders)
            .sampling(Some(SamplingConfig::default()))
            .build())
    }

    #[inline]
    pub fn level(&self) -> LogLevel {
        self.core.min_level
    }

    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.core.min_level
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Child logger that adds `fields` to every entry
    #[must_use]
    pub fn with(&self, fields: &[Field]) -> Logger {
        let mut child = self.clone();
        child.context.extend_from_slice(fields);
        child
    }

    /// Child logger whose name is this logger's name joined with `name` by a dot
    #[must_use]
    pub fn named(&self, name: &str) -> Logger {
        let mut child = self.clone();
        child.name = match self.name {
            Some(ref parent) if !name.is_empty() => Some(format!("{}.{}", parent, name)),
            Some(ref parent) => Some(parent.clone()),
            None if name.is_empty() => None,
            None => Some(name.to_string()),
        };
        child
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.core.metrics
    }

    pub fn sampler(&self) -> Option<&LogSampler> {
        self.core.sampler.as_ref()
    }

    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl Into<String>, fields: &[Field]) {
        if !self.enabled(level) {
            return;
        }
        self.dispatch(level, message.into(), fields.to_vec(), Caller::here());
    }

    #[track_caller]
    pub fn log_fmt(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }
        self.dispatch(level, args.to_string(), Vec::new(), Caller::here());
    }

    /// Log with a flat list of alternating keys and values
    ///
    /// A non-string key stops processing: it and everything after it is
    /// dropped. An unpaired trailing element is dropped. Both cases emit an
    /// error-level diagnostic entry instead of failing the call.
    #[track_caller]
    pub fn log_kv(&self, level: LogLevel, message: impl Into<String>, key_values: &[FieldValue]) {
        if !self.enabled(level) {
            return;
        }
        let caller = Caller::here();
        let fields = self.sweeten(key_values, caller);
        self.dispatch(level, message.into(), fields, caller);
    }

    fn sweeten(&self, key_values: &[FieldValue], caller: Caller) -> Vec<Field> {
        let mut fields = Vec::with_capacity(key_values.len() / 2);
        let mut i = 0;
        while i < key_values.len() {
            if i == key_values.len() - 1 {
                self.diagnose(ODD_KEY_VALUES, Field::new("ignored key", key_values[i].clone()), caller);
                break;
            }

            let Some(key) = key_values[i].as_key() else {
                self.diagnose(NON_STRING_KEY, Field::new("invalid key", key_values[i].clone()), caller);
                break;
            };

            fields.push(Field::new(key, key_values[i + 1].clone()));
            i += 2;
        }
        fields
    }

    fn diagnose(&self, message: &str, field: Field, caller: Caller) {
        self.core.metrics.record_diagnostic();
        if self.enabled(LogLevel::Error) {
            self.dispatch(LogLevel::Error, message.to_string(), vec![field], caller);
        }
    }

    fn dispatch(&self, level: LogLevel, message: String, fields: Vec<Field>, caller: Caller) {
        if let Some(ref sampler) = self.core.sampler {
            if !sampler.should_sample(level) {
                self.core.metrics.record_sampled_out();
                return;
            }
        }

        let mut all_fields = Vec::with_capacity(self.context.len() + fields.len());
        all_fields.extend_from_slice(&self.context);
        all_fields.extend(fields);

        let mut entry = LogEntry::new(level, message)
            .with_name(self.name.clone())
            .with_caller(caller)
            .with_fields(all_fields);
        if level.captures_stack() {
            entry = entry.with_stack();
        }

        let line = self.core.encoder.encode(&entry);
        let appenders = if level.is_error() {
            &self.core.error_appenders
        } else {
            &self.core.appenders
        };

        let mut appenders = appenders.lock();
        if Self::process_sync(&mut appenders, &line) {
            self.core.metrics.record_dropped();
        } else {
            self.core.metrics.record_logged();
        }
    }

    /// Write a line to every appender with per-appender panic isolation
    ///
    /// Returns true if any appender failed.
    fn process_sync(appenders: &mut [Box<dyn Appender>], line: &str) -> bool {
        let mut has_error = false;

        for appender in appenders.iter_mut() {
            let append_result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                appender.append(line)
            }));

            match append_result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    eprintln!("[LOGGER ERROR] Appender '{}' failed: {}", appender.name(), e);
                    has_error = true;
                }
                Err(panic_info) => {
                    let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                        s.to_string()
                    } else if let Some(s) = panic_info.downcast_ref::<String>() {
                        s.clone()
                    } else {
                        "Unknown panic".to_string()
                    };
                    eprintln!(
                        "[LOGGER CRITICAL] Appender '{}' panicked: {}. \
                         Other appenders continue to function.",
                        appender.name(),
                        panic_msg
                    );
                    has_error = true;
                }
            }
        }

        has_error
    }

    /// Flush every appender, returning the first failure
    pub fn flush(&self) -> Result<()> {
        let mut first_err = None;
        for appenders in [&self.core.appenders, &self.core.error_appenders] {
            for appender in appenders.lock().iter_mut() {
                if let Err(e) = appender.flush() {
                    first_err.get_or_insert(e);
                }
            }
        }
        first_err.map_or(Ok(()), Err)
    }

    #[track_caller]
    fn escape_panic(&self, message: String) -> ! {
        let _ = self.flush();
        std::panic::panic_any(message)
    }

    fn escape_fatal(&self, message: &str) -> ! {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush before exit: {}", e);
        }
        if let Some(ref hook) = self.core.fatal_hook {
            hook(message);
        }
        std::process::exit(1)
    }

    #[track_caller]
    pub fn debug(&self, message: impl Into<String>, fields: &[Field]) {
        self.log(LogLevel::Debug, message, fields);
    }

    #[track_caller]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(LogLevel::Debug, args);
    }

    #[track_caller]
    pub fn debugw(&self, message: impl Into<String>, key_values: &[FieldValue]) {
        self.log_kv(LogLevel::Debug, message, key_values);
    }

    #[track_caller]
    pub fn info(&self, message: impl Into<String>, fields: &[Field]) {
        self.log(LogLevel::Info, message, fields);
    }

    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(LogLevel::Info, args);
    }

    #[track_caller]
    pub fn infow(&self, message: impl Into<String>, key_values: &[FieldValue]) {
        self.log_kv(LogLevel::Info, message, key_values);
    }

    #[track_caller]
    pub fn warn(&self, message: impl Into<String>, fields: &[Field]) {
        self.log(LogLevel::Warn, message, fields);
    }

    #[track_caller]
    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(LogLevel::Warn, args);
    }

    #[track_caller]
    pub fn warnw(&self, message: impl Into<String>, key_values: &[FieldValue]) {
        self.log_kv(LogLevel::Warn, message, key_values);
    }

    #[track_caller]
    pub fn error(&self, message: impl Into<String>, fields: &[Field]) {
        self.log(LogLevel::Error, message, fields);
    }

    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(LogLevel::Error, args);
    }

    #[track_caller]
    pub fn errorw(&self, message: impl Into<String>, key_values: &[FieldValue]) {
        self.log_kv(LogLevel::Error, message, key_values);
    }

    /// Log at panic level, then panic with the message
    #[track_caller]
    pub fn panic(&self, message: impl Into<String>, fields: &[Field]) -> ! {
        let message = message.into();
        self.log(LogLevel::Panic, message.clone(), fields);
        self.escape_panic(message)
    }

    #[track_caller]
    pub fn panicf(&self, args: fmt::Arguments<'_>) -> ! {
        let message = args.to_string();
        self.log(LogLevel::Panic, message.clone(), &[]);
        self.escape_panic(message)
    }

    #[track_caller]
    pub fn panicw(&self, message: impl Into<String>, key_values: &[FieldValue]) -> ! {
        let message = message.into();
        self.log_kv(LogLevel::Panic, message.clone(), key_values);
        self.escape_panic(message)
    }

    /// Log at fatal level, flush, then terminate the process with status 1
    #[track_caller]
    pub fn fatal(&self, message: impl Into<String>, fields: &[Field]) -> ! {
        let message = message.into();
        self.log(LogLevel::Fatal, message.clone(), fields);
        self.escape_fatal(&message)
    }

    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        let message = args.to_string();
        self.log(LogLevel::Fatal, message.clone(), &[]);
        self.escape_fatal(&message)
    }

    #[track_caller]
    pub fn fatalw(&self, message: impl Into<String>, key_values: &[FieldValue]) -> ! {
        let message = message.into();
        self.log_kv(LogLevel::Fatal, message.clone(), key_values);
        self.escape_fatal(&message)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.core.min_level)
            .field("encoder", &self.core.encoder)
            .field("name", &self.name)
            .field("context", &self.context)
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use rust_log_facade::prelude::*;
///
/// let logger = Logger::builder()
///     .min_level(LogLevel::Debug)
///     .format(OutputFormat::Json)
///     .caller(true)
///     .appender(ConsoleAppender::stdout())
///     .error_appender(ConsoleAppender::stderr())
///     .build();
///
/// logger.debug("ready", &[]);
/// ```
pub struct LoggerBuilder {
    min_level: LogLevel,
    encoder: Encoder,
    appenders: Vec<Box<dyn Appender>>,
    error_appenders: Vec<Box<dyn Appender>>,
    sampling: Option<SamplingConfig>,
    fatal_hook: Option<FatalHook>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::Info,
            encoder: Encoder::default(),
            appenders: Vec::new(),
            error_appenders: Vec::new(),
            sampling: None,
            fatal_hook: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.encoder.format = format;
        self
    }

    /// Color the level of console lines
    #[must_use = "builder methods return a new value"]
    pub fn color(mut self, enabled: bool) -> Self {
        self.encoder.use_colors = enabled;
        self
    }

    /// Include the `file:line` of the logging call
    #[must_use = "builder methods return a new value"]
    pub fn caller(mut self, enabled: bool) -> Self {
        self.encoder.include_caller = enabled;
        self
    }

    /// Add a sink for entries below error level
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appenders.push(Box::new(appender));
        self
    }

    /// Add a sink for error, panic and fatal entries
    #[must_use = "builder methods return a new value"]
    pub fn error_appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.error_appenders.push(Box::new(appender));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn appenders(mut self, appenders: Vec<Box<dyn Appender>>) -> Self {
        self.appenders.extend(appenders);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn error_appenders(mut self, appenders: Vec<Box<dyn Appender>>) -> Self {
        self.error_appenders.extend(appenders);
        self
    }

    /// Enable decimating sampling; `None` writes every entry
    #[must_use = "builder methods return a new value"]
    pub fn sampling(mut self, config: Option<SamplingConfig>) -> Self {
        self.sampling = config;
        self
    }

    /// Run `hook` after a fatal entry is flushed, before the process exits
    ///
    /// A hook that diverges (panics or exits itself) replaces the exit.
    #[must_use = "builder methods return a new value"]
    pub fn fatal_hook(mut self, hook: FatalHook) -> Self {
        self.fatal_hook = Some(hook);
        self
    }

    pub fn build(self) -> Logger {
        Logger {
            core: Arc::new(Core {
                min_level: self.min_level,
                encoder: self.encoder,
                appenders: Mutex::new(self.appenders),
                error_appenders: Mutex::new(self.error_appenders),
                sampler: self.sampling.map(LogSampler::new),
                metrics: LoggerMetrics::new(),
                fatal_hook: self.fatal_hook,
            }),
            name: None,
            context: Vec::new(),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field;

    #[derive(Clone, Default)]
    struct MemoryAppender {
        lines: Arc<Mutex<Vec<String>>>,
        flushes: Arc<Mutex<usize>>,
    }

    impl MemoryAppender {
        fn lines(&self) -> Vec<String> {
            self.lines.lock().clone()
        }
    }

    impl Appender for MemoryAppender {
        fn append(&mut self, line: &str) -> Result<()> {
            self.lines.lock().push(line.to_string());
            Ok(())
        }

        fn flush(&mut self) -> Result<()> {
            *self.flushes.lock() += 1;
            Ok(())
        }

        fn name(&self) -> &str {
            "memory"
        }
    }

    struct FailingAppender;

    impl Appender for FailingAppender {
        fn append(&mut self, _line: &str) -> Result<()> {
            Err(std::io::Error::other("Simulated failure").into())
        }

        fn flush(&mut self) -> Result<()> {
            Err(std::io::Error::other("Simulated flush failure").into())
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    fn json_logger(level: LogLevel) -> (Logger, MemoryAppender, MemoryAppender) {
        let out = MemoryAppender::default();
        let err = MemoryAppender::default();
        let logger = Logger::builder()
            .min_level(level)
            .format(OutputFormat::Json)
            .appender(out.clone())
            .error_appender(err.clone())
            .build();
        (logger, out, err)
    }

    fn parse(line: &str) -> serde_json::Value {
        serde_json::from_str(line).expect("valid JSON line")
    }

    #[test]
    fn test_level_filter() {
        let (logger, out, _) = json_logger(LogLevel::Warn);

        logger.debug("hidden", &[]);
        logger.info("hidden", &[]);
        logger.warn("visible", &[]);

        let lines = out.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(parse(&lines[0])["level"], "warn");
    }

    #[test]
    fn test_error_levels_use_error_appenders() {
        let (logger, out, err) = json_logger(LogLevel::Debug);

        logger.info("normal", &[]);
        logger.error("broken", &[]);

        assert_eq!(out.lines().len(), 1);
        assert_eq!(err.lines().len(), 1);
        assert_eq!(parse(&err.lines()[0])["msg"], "broken");
    }

    #[test]
    fn test_plain_fields() {
        let (logger, out, _) = json_logger(LogLevel::Info);

        logger.info("user created", &[field::string("id", "001"), field::int("age", 30)]);

        let record = parse(&out.lines()[0]);
        assert_eq!(record["id"], "001");
        assert_eq!(record["age"], 30);
    }

    #[test]
    fn test_formatted() {
        let (logger, out, _) = json_logger(LogLevel::Debug);

        logger.debugf(format_args!("This is a {} log message.", "debugf"));

        assert_eq!(parse(&out.lines()[0])["msg"], "This is a debugf log message.");
    }

    #[test]
    fn test_key_values_well_formed() {
        let (logger, out, err) = json_logger(LogLevel::Info);

        logger.infow("msg", &["k1".into(), "v1".into(), "k2".into(), "v2".into()]);

        let lines = out.lines();
        assert_eq!(lines.len(), 1);
        let record = parse(&lines[0]);
        assert_eq!(record["k1"], "v1");
        assert_eq!(record["k2"], "v2");
        assert!(err.lines().is_empty());
        assert_eq!(logger.metrics().diagnostics(), 0);
    }

    #[test]
    fn test_key_values_non_string_key() {
        let (logger, out, err) = json_logger(LogLevel::Info);

        logger.infow("msg", &[42.into(), "v1".into()]);

        let record = parse(&out.lines()[0]);
        let obj = record.as_object().expect("object");
        assert!(!obj.contains_key("42"));
        assert_eq!(obj.len(), 3); // time, level, msg

        let diagnostics = err.lines();
        assert_eq!(diagnostics.len(), 1);
        let diag = parse(&diagnostics[0]);
        assert_eq!(diag["msg"], NON_STRING_KEY);
        assert_eq!(diag["invalid key"], 42);
    }

    #[test]
    fn test_key_values_stop_at_bad_key() {
        let (logger, out, err) = json_logger(LogLevel::Info);

        logger.infow(
            "msg",
            &["k1".into(), "v1".into(), true.into(), "v2".into(), "k3".into(), "v3".into()],
        );

        let record = parse(&out.lines()[0]);
        assert_eq!(record["k1"], "v1");
        assert!(record.get("k3").is_none());
        assert_eq!(err.lines().len(), 1);
    }

    #[test]
    fn test_key_values_odd_count() {
        let (logger, out, err) = json_logger(LogLevel::Info);

        logger.infow("msg", &["k1".into(), "v1".into(), "k2".into()]);

        let record = parse(&out.lines()[0]);
        assert_eq!(record["k1"], "v1");
        assert!(record.get("k2").is_none());

        let diagnostics = err.lines();
        assert_eq!(diagnostics.len(), 1);
        let diag = parse(&diagnostics[0]);
        assert_eq!(diag["msg"], ODD_KEY_VALUES);
        assert_eq!(diag["ignored key"], "k2");
        assert_eq!(logger.metrics().diagnostics(), 1);
    }

    #[test]
    fn test_caller_points_at_call_site() {
        let out = MemoryAppender::default();
        let logger = Logger::builder()
            .format(OutputFormat::Json)
            .caller(true)
            .appender(out.clone())
            .build();

        let line = line!() + 1;
        logger.info("where", &[]);

        let record = parse(&out.lines()[0]);
        assert_eq!(record["caller"], format!("core/logger.rs:{}", line));
    }

    #[test]
    fn test_caller_for_key_values_and_format() {
        let out = MemoryAppender::default();
        let logger = Logger::builder()
            .format(OutputFormat::Json)
            .caller(true)
            .appender(out.clone())
            .build();

        let line = line!() + 1;
        logger.infow("kv", &["a".into(), 1.into()]);
        logger.infof(format_args!("fmt {}", 1));

        let lines = out.lines();
        assert_eq!(parse(&lines[0])["caller"], format!("core/logger.rs:{}", line));
        assert_eq!(parse(&lines[1])["caller"], format!("core/logger.rs:{}", line + 1));
    }

    #[test]
    fn test_child_loggers() {
        let (logger, out, _) = json_logger(LogLevel::Info);

        let child = logger
            .named("http")
            .named("server")
            .with(&[field::string("component", "router")]);
        child.info("started", &[field::int("port", 8080)]);

        let record = parse(&out.lines()[0]);
        assert_eq!(record["logger"], "http.server");
        assert_eq!(record["component"], "router");
        assert_eq!(record["port"], 8080);
        assert!(logger.name().is_none());
    }

    #[test]
    fn test_sampling_drops_after_initial() {
        let out = MemoryAppender::default();
        let logger = Logger::builder()
            .appender(out.clone())
            .sampling(Some(SamplingConfig::new(5, 0)))
            .build();

        for i in 0..20 {
            logger.infof(format_args!("message {}", i));
        }

        assert_eq!(out.lines().len(), 5);
        assert_eq!(logger.metrics().sampled_out(), 15);
        assert_eq!(logger.metrics().total_logged(), 5);
    }

    #[test]
    fn test_panic_level_panics_with_message() {
        let (logger, _, err) = json_logger(LogLevel::Info);

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            logger.panic("This is a panic log message.", &[]);
        }));

        let payload = result.expect_err("panic level must panic");
        assert_eq!(
            payload.downcast_ref::<String>().map(String::as_str),
            Some("This is a panic log message.")
        );

        let record = parse(&err.lines()[0]);
        assert_eq!(record["level"], "panic");
        assert!(record["stack"].is_string());
    }

    #[test]
    fn test_panic_escapes_even_when_filtered() {
        let (logger, _, err) = json_logger(LogLevel::Fatal);

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            logger.panicf(format_args!("code {}", 7));
        }));

        assert!(result.is_err());
        assert!(err.lines().is_empty());
    }

    #[test]
    fn test_fatal_runs_hook() {
        let err = MemoryAppender::default();
        let logger = Logger::builder()
            .format(OutputFormat::Json)
            .error_appender(err.clone())
            .fatal_hook(Arc::new(|msg: &str| panic!("fatal hook: {}", msg)))
            .build();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            logger.fatalw("shutting down", &["reason".into(), "disk full".into()]);
        }));

        assert!(result.is_err());
        let record = parse(&err.lines()[0]);
        assert_eq!(record["level"], "fatal");
        assert_eq!(record["reason"], "disk full");
        assert!(*err.flushes.lock() >= 1);
    }

    #[test]
    fn test_failing_appender_is_isolated() {
        let out = MemoryAppender::default();
        let logger = Logger::builder()
            .appender(FailingAppender)
            .appender(out.clone())
            .build();

        for _ in 0..5 {
            logger.info("Test message", &[]);
        }

        assert_eq!(out.lines().len(), 5);
        assert_eq!(logger.metrics().dropped_count(), 5);
        assert!(logger.flush().is_err());
    }

    #[test]
    fn test_flush_reaches_all_appenders() {
        let (logger, out, err) = json_logger(LogLevel::Info);

        logger.flush().expect("flush");
        logger.flush().expect("flush");

        assert_eq!(*out.flushes.lock(), 2);
        assert_eq!(*err.flushes.lock(), 2);
        assert!(out.lines().is_empty());
    }

    #[test]
    fn test_builder_default() {
        let logger = LoggerBuilder::default().build();
        assert_eq!(logger.level(), LogLevel::Info);
        assert!(logger.sampler().is_none());
        assert!(logger.enabled(LogLevel::Warn));
        assert!(!logger.enabled(LogLevel::Debug));
    }
}
