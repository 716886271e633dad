//! Error types for the steerlog core library
//!
//! Every fallible operation on records, loggers and log files returns
//! [`Result`], built on the [`Error`] enum defined here with `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

use crate::field::DataType;

/// Main error type for steerlog operations
#[derive(Error, Debug)]
pub enum Error {
    /// A record or logger index past the end
    #[error("Index {index} out of range (length {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// A value does not have the type that was asked for or declared
    #[error("Type mismatch at index {index}: expected {expected}, found {found}")]
    TypeMismatch {
        index: usize,
        expected: DataType,
        found: DataType,
    },

    /// A record carries more values than the logger declares fields
    #[error("Record value at index {index} has no declared field ({declared} field(s) declared)")]
    UndeclaredField { index: usize, declared: usize },

    /// A field name that cannot be written to metadata
    #[error("Invalid field name '{name}': {reason}")]
    InvalidField { name: String, reason: String },

    /// Unknown numeric data type code
    #[error("Unknown data type code: {code}")]
    UnknownDataType { code: i64 },

    /// A value that cannot be written to a log line
    #[error("Value at index {index} cannot be written: {reason}")]
    UnwritableValue { index: usize, reason: String },

    /// Two log data sets that must line up do not
    #[error("Length mismatch: expected {expected} record(s), found {found}")]
    LengthMismatch { expected: usize, found: usize },

    /// Malformed or unwritable log text
    #[error("Format error on line {line}: {message}")]
    Format { line: usize, message: String },

    /// No logger registered under a name
    #[error("No logger registered as '{name}'")]
    LoggerNotFound { name: String },

    /// A logger was used in the wrong mode
    #[error("Logger '{name}' is not open for {expected}")]
    WrongMode { name: String, expected: &'static str },

    /// IO errors
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO errors on an in-memory or anonymous stream
    #[error("IO error: {0}")]
    Stream(#[from] std::io::Error),
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a format error for a given (1-based) line
    pub fn format(line: usize, message: impl Into<String>) -> Self {
        Self::Format {
            line,
            message: message.into(),
        }
    }

    /// Attach a path to an IO error
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_mismatch_message() {
        let err = Error::TypeMismatch {
            index: 2,
            expected: DataType::Integer,
            found: DataType::Float,
        };
        assert_eq!(
            err.to_string(),
            "Type mismatch at index 2: expected integer, found float"
        );
    }

    #[test]
    fn test_io_error_carries_path() {
        let err = Error::io(
            "/tmp/missing.log",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.to_string().contains("/tmp/missing.log"));
    }
}
