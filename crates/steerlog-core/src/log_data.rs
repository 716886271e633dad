//! A loaded log: one logger and the records read against it

use std::path::Path;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::format;
use crate::logger::Logger;
use crate::record::LogRecord;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LogData {
    logger: Logger,
    records: Vec<LogRecord>,
}

impl LogData {
    pub fn new(logger: Logger) -> Self {
        Self {
            logger,
            records: Vec::new(),
        }
    }

    /// Read a whole log file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let mut reader = format::open(path)?;
        let records = reader.read_all()?;
        Ok(Self {
            logger: reader.logger().clone(),
            records,
        })
    }

    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = logger;
    }

    pub fn add_record(&mut self, record: LogRecord) {
        self.records.push(record);
    }

    pub fn set_records(&mut self, records: Vec<LogRecord>) {
        self.records = records;
    }

    pub fn record_at(&self, index: usize) -> Option<&LogRecord> {
        self.records.get(index)
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Join `other` column-wise onto this log
    ///
    /// Both logs must hold the same number of records. `other`'s fields
    /// are declared after this logger's, and the i-th record of `other`
    /// is appended to the i-th record here. On error nothing changes.
    pub fn append(&mut self, other: &LogData) -> Result<()> {
        if self.len() != other.len() {
            return Err(Error::LengthMismatch {
                expected: self.len(),
                found: other.len(),
            });
        }

        self.logger.extend_from(&other.logger);
        for (mine, theirs) in self.records.iter_mut().zip(&other.records) {
            mine.extend_from(theirs);
        }
        tracing::debug!(
            records = self.len(),
            fields = self.logger.field_count(),
            "Appended log data"
        );
        Ok(())
    }
}
