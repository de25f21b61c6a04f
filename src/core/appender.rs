//! Appender trait for log output destinations

use super::error::Result;

/// A sink that receives fully encoded lines
pub trait Appender: Send + Sync {
    /// Write one encoded entry; the appender adds the line terminator
    fn append(&mut self, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
