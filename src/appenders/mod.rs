//! Appender implementations and sink resolution

pub mod console;
pub mod file;

pub use console::{ConsoleAppender, ConsoleStream};
pub use file::FileAppender;

pub use crate::core::Appender;
use crate::core::Result;

/// Open the appender named by a sink identifier
///
/// `stdout` and `stderr` select the standard streams; anything else is a file
/// path, optionally written as a `file://` URL.
pub fn open_appender(path: &str) -> Result<Box<dyn Appender>> {
    match path {
        "stdout" => Ok(Box::new(ConsoleAppender::stdout())),
        "stderr" => Ok(Box::new(ConsoleAppender::stderr())),
        _ => {
            let file_path = path.strip_prefix("file://").unwrap_or(path);
            Ok(Box::new(FileAppender::new(file_path)?))
        }
    }
}

/// Open every sink in order, failing on the first one that cannot be opened
pub fn open_appenders(paths: &[String]) -> Result<Vec<Box<dyn Appender>>> {
    paths.iter().map(|p| open_appender(p)).collect()
}
