//! Error types for the logging facade

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Severity name that does not map to a known level
    #[error("unrecognized level: {level:?}")]
    InvalidLevel { level: String },

    /// Output encoding other than console or json
    #[error("not a valid log format: {format:?}")]
    InvalidFormat { format: String },

    /// Sink that could not be opened
    #[error("can't open sink '{path}': {source}")]
    Sink {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl LoggerError {
    /// Create an invalid level error
    pub fn invalid_level(level: impl Into<String>) -> Self {
        LoggerError::InvalidLevel {
            level: level.into(),
        }
    }

    /// Create an invalid format error
    pub fn invalid_format(format: impl Into<String>) -> Self {
        LoggerError::InvalidFormat {
            format: format.into(),
        }
    }

    /// Create a sink error for the given path
    pub fn sink(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::Sink {
            path: path.into(),
            source,
        }
    }

    /// True for errors raised while checking options
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            LoggerError::InvalidLevel { .. } | LoggerError::InvalidFormat { .. }
        )
    }
}
