//! Basic facade usage
//!
//! Installs a console logger at debug level with caller info, logs through
//! every call shape, then ends with a panic-level and a fatal-level entry.
//! `--log.*` flags override the built-in configuration.
//!
//! Run with: cargo run --example basic_usage -- --log.format=json

use clap::Command;
use rust_log_facade::{debugf, field, kv, Options};

fn main() {
    let mut opts = Options {
        level: "debug".to_string(),
        format: "console".to_string(),
        enable_color: false,
        enable_caller: true,
        output_paths: vec!["stdout".to_string()],
        error_output_paths: vec!["stderr".to_string()],
    };

    let matches = opts
        .add_flags(Command::new("basic_usage").about("Logging facade demo"))
        .get_matches();
    opts.apply_matches(&matches);

    for err in opts.validate() {
        eprintln!("invalid option: {}", err);
    }
    if let Err(e) = rust_log_facade::init(Some(&opts)) {
        eprintln!("cannot initialize logger: {}", e);
        std::process::exit(2);
    }

    rust_log_facade::debug("This is a debug log message.", &[]);
    debugf!("This is a {} log message.", "debugf");
    rust_log_facade::debugw("This is a debugw log message", &kv!["id", "001"]);

    rust_log_facade::info("This is a info log message.", &[field::string("options", opts.to_string())]);
    rust_log_facade::warn("This is a warn log message.", &[]);

    rust_log_facade::error("This is a error log message.", &[]);

    let panicked = std::panic::catch_unwind(|| {
        rust_log_facade::panic("This is a panic log message.", &[]);
    });
    if panicked.is_err() {
        rust_log_facade::info("recovered from panic-level entry", &[]);
    }

    rust_log_facade::flush();
    rust_log_facade::fatal("This is a fatal log message.", &[]);
}
