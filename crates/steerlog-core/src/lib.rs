//! Steerlog Core - typed log records and field-declaring loggers
//!
//! This crate provides the in-process logging model used to record
//! per-step data from steering simulations:
//!
//! - **Records**: [`LogRecord`] accumulates typed [`Value`]s in append order
//! - **Loggers**: [`Logger`] declares named, typed fields and renders records
//! - **Log files**: [`LogWriter`] / [`LogReader`] speak the text log format
//! - **Log data**: [`LogData`] holds a loaded log and joins logs column-wise
//! - **Manager**: [`LogManager`] keeps open log files by name
//!
//! # Example
//!
//! ```
//! use steerlog_core::{LogRecord, Logger, Result};
//!
//! fn example() -> Result<()> {
//!     let mut logger = Logger::new();
//!     logger.add_integer_field("bacons")?;
//!     logger.add_integer_field("eggs")?;
//!     logger.add_integer_field("toasts")?;
//!
//!     let mut record = LogRecord::new();
//!     record.push_int(3);
//!     record.push_int(30);
//!     record.push_float(2.3);
//!
//!     assert_eq!(logger.render(&record), "bacons,eggs,toasts\n3,30,2.3");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod error;
pub mod field;
pub mod format;
pub mod log_data;
pub mod logger;
pub mod manager;
pub mod record;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use field::{DataType, Field};
pub use format::{LogMode, LogReader, LogWriter};
pub use log_data::LogData;
pub use logger::Logger;
pub use manager::{FileLog, LogManager, LoggerKind};
pub use record::{LogRecord, Value};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_version() {
        assert!(!VERSION.is_empty());
    }
}
