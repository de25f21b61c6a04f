//! Process-wide logger
//!
//! [`init`] builds a logger from [`Options`] and installs it; the free
//! functions in this module log through whatever logger is installed. If
//! nothing was installed, the first call builds one from default options.
//!
//! A later [`init`] replaces the installed logger. Calls racing with the
//! replacement may land on either the old or the new logger.

use crate::core::{Field, FieldValue, Logger, Result};
use crate::options::Options;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

static GLOBAL: RwLock<Option<Arc<Logger>>> = parking_lot::const_rwlock(None);

/// Build a logger from `opts` (defaults when `None`) and install it
///
/// On error the installed logger, if any, is left in place.
pub fn init(opts: Option<&Options>) -> Result<Arc<Logger>> {
    let logger = match opts {
        Some(opts) => Logger::from_options(opts)?,
        None => Logger::from_options(&Options::new())?,
    };
    let logger = Arc::new(logger);
    *GLOBAL.write() = Some(Arc::clone(&logger));
    Ok(logger)
}

/// The installed logger, building a default one on first use
///
/// # Panics
///
/// If no logger was installed and the default configuration cannot be built.
pub fn logger() -> Arc<Logger> {
    if let Some(ref logger) = *GLOBAL.read() {
        return Arc::clone(logger);
    }

    let mut global = GLOBAL.write();
    if let Some(ref logger) = *global {
        return Arc::clone(logger);
    }
    match Logger::from_options(&Options::new()) {
        Ok(logger) => {
            let logger = Arc::new(logger);
            *global = Some(Arc::clone(&logger));
            logger
        }
        Err(e) => panic!("[LOGGER FATAL] cannot build default logger: {}", e),
    }
}

/// Flush the installed logger; does nothing if none was installed
///
/// Flush failures are ignored.
pub fn flush() {
    let installed = GLOBAL.read().clone();
    if let Some(logger) = installed {
        let _ = logger.flush();
    }
}

#[track_caller]
pub fn debug(message: impl Into<String>, fields: &[Field]) {
    logger().debug(message, fields);
}

#[track_caller]
pub fn debugf(args: fmt::Arguments<'_>) {
    logger().debugf(args);
}

#[track_caller]
pub fn debugw(message: impl Into<String>, key_values: &[FieldValue]) {
    logger().debugw(message, key_values);
}

#[track_caller]
pub fn info(message: impl Into<String>, fields: &[Field]) {
    logger().info(message, fields);
}

#[track_caller]
pub fn infof(args: fmt::Arguments<'_>) {
    logger().infof(args);
}

#[track_caller]
pub fn infow(message: impl Into<String>, key_values: &[FieldValue]) {
    logger().infow(message, key_values);
}

#[track_caller]
pub fn warn(message: impl Into<String>, fields: &[Field]) {
    logger().warn(message, fields);
}

#[track_caller]
pub fn warnf(args: fmt::Arguments<'_>) {
    logger().warnf(args);
}

#[track_caller]
pub fn warnw(message: impl Into<String>, key_values: &[FieldValue]) {
    logger().warnw(message, key_values);
}

#[track_caller]
pub fn error(message: impl Into<String>, fields: &[Field]) {
    logger().error(message, fields);
}

#[track_caller]
pub fn errorf(args: fmt::Arguments<'_>) {
    logger().errorf(args);
}

#[track_caller]
pub fn errorw(message: impl Into<String>, key_values: &[FieldValue]) {
    logger().errorw(message, key_values);
}

/// Log at panic level, then panic with the message
#[track_caller]
pub fn panic(message: impl Into<String>, fields: &[Field]) -> ! {
    logger().panic(message, fields)
}

#[track_caller]
pub fn panicf(args: fmt::Arguments<'_>) -> ! {
    logger().panicf(args)
}

#[track_caller]
pub fn panicw(message: impl Into<String>, key_values: &[FieldValue]) -> ! {
    logger().panicw(message, key_values)
}

/// Log at fatal level, flush, then exit the process with status 1
#[track_caller]
pub fn fatal(message: impl Into<String>, fields: &[Field]) -> ! {
    logger().fatal(message, fields)
}

#[track_caller]
pub fn fatalf(args: fmt::Arguments<'_>) -> ! {
    logger().fatalf(args)
}

#[track_caller]
pub fn fatalw(message: impl Into<String>, key_values: &[FieldValue]) -> ! {
    logger().fatalw(message, key_values)
}
