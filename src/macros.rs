//! Formatting and key-value macros.
//!
//! The leveled macros format their arguments like `println!` and log through
//! the process-wide logger. [`log!`](crate::log) does the same for an explicit
//! [`Logger`](crate::Logger), and [`kv!`](crate::kv) builds the key-value list
//! taken by the `*w` functions.
//!
//! # Examples
//!
//! ```no_run
//! use rust_log_facade::{infof, kv, warnf};
//!
//! let port = 8080;
//! infof!("Server listening on port {}", port);
//! warnf!("Retry {} of {}", 1, 3);
//!
//! rust_log_facade::infow("user created", &kv!["id", "001", "age", 30]);
//! ```

/// Log a formatted message at `$level` through an explicit logger.
///
/// # Examples
///
/// ```
/// # use rust_log_facade::prelude::*;
/// # let logger = Logger::builder().build();
/// use rust_log_facade::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_fmt($level, ::std::format_args!($($arg)+))
    };
}

/// Build a `[FieldValue; N]` of alternating keys and values.
///
/// ```
/// use rust_log_facade::{kv, FieldValue};
///
/// let pairs = kv!["user", "alice", "attempt", 3];
/// assert_eq!(pairs[0], FieldValue::String("user".into()));
/// assert_eq!(pairs.len(), 4);
/// ```
#[macro_export]
macro_rules! kv {
    () => {{
        let empty: [$crate::FieldValue; 0] = [];
        empty
    }};
    ($($value:expr),+ $(,)?) => {
        [$($crate::FieldValue::from($value)),+]
    };
}

#[macro_export]
macro_rules! debugf {
    ($($arg:tt)+) => {
        $crate::debugf(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! infof {
    ($($arg:tt)+) => {
        $crate::infof(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! warnf {
    ($($arg:tt)+) => {
        $crate::warnf(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! errorf {
    ($($arg:tt)+) => {
        $crate::errorf(::std::format_args!($($arg)+))
    };
}

/// Log at panic level through the process-wide logger, then panic.
#[macro_export]
macro_rules! panicf {
    ($($arg:tt)+) => {
        $crate::panicf(::std::format_args!($($arg)+))
    };
}

/// Log at fatal level through the process-wide logger, then exit.
#[macro_export]
macro_rules! fatalf {
    ($($arg:tt)+) => {
        $crate::fatalf(::std::format_args!($($arg)+))
    };
}
