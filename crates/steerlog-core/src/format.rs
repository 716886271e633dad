//! The steerlog text log format
//!
//! A log file is a metadata line (see [`Logger::metadata`]) followed by
//! one typed record line per [`LogRecord`]:
//!
//! ```text
//! bacons 0 eggs 0 speed 1
//! 3 30 2.3
//! 4 31 2.5
//! ```
//!
//! [`LogWriter`] and [`LogReader`] work over any `Write` / `BufRead`, and
//! [`create`] / [`open`] wrap them around files.

use std::fmt::Display;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::logger::Logger;
use crate::record::{LogRecord, Value};

/// Direction a log file is opened in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogMode {
    Read,
    Write,
}

/// Writes records against a logger's fields
pub struct LogWriter<W: Write> {
    logger: Logger,
    inner: W,
    records_written: usize,
}

impl<W: Write> LogWriter<W> {
    pub fn new(logger: Logger, inner: W) -> Self {
        Self {
            logger,
            inner,
            records_written: 0,
        }
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    pub fn records_written(&self) -> usize {
        self.records_written
    }

    /// Write the field header line
    pub fn write_metadata(&mut self) -> Result<()> {
        self.inner.write_all(self.logger.metadata().as_bytes())?;
        Ok(())
    }

    /// Write one typed record line and flush it
    pub fn write_record(&mut self, record: &LogRecord) -> Result<()> {
        let line = self.logger.to_line(record)?;
        self.emit(&line)
    }

    /// Like [`write_record`](Self::write_record), padded to field widths
    pub fn write_record_pretty(&mut self, record: &LogRecord) -> Result<()> {
        let line = self.logger.to_pretty_line(record)?;
        self.emit(&line)
    }

    /// Write a free-form line, not tied to the fields
    pub fn write_data<T: Display>(&mut self, data: T) -> Result<()> {
        writeln!(self.inner, "{}", data)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }

    /// Flush and hand back the underlying writer
    pub fn into_inner(mut self) -> Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }

    fn emit(&mut self, line: &str) -> Result<()> {
        self.inner.write_all(line.as_bytes())?;
        self.inner.flush()?;
        self.records_written += 1;
        debug!(record = self.records_written, "Wrote log record");
        Ok(())
    }
}

/// Reads typed records against a logger's fields
pub struct LogReader<R: BufRead> {
    logger: Logger,
    inner: R,
    line: usize,
}

impl<R: BufRead> LogReader<R> {
    /// Read the metadata line and build the logger from it
    pub fn open(mut inner: R) -> Result<Self> {
        let mut header = String::new();
        if inner.read_line(&mut header)? == 0 {
            return Err(Error::format(1, "missing metadata line"));
        }
        let logger = Logger::from_metadata(&header)?;
        Ok(Self {
            logger,
            inner,
            line: 1,
        })
    }

    /// Read records against a known logger; no metadata line is expected
    pub fn with_logger(logger: Logger, inner: R) -> Self {
        Self {
            logger,
            inner,
            line: 0,
        }
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Next record, or `None` at end of input
    ///
    /// A blank line is an empty record.
    pub fn next_record(&mut self) -> Result<Option<LogRecord>> {
        let mut text = String::new();
        if self.inner.read_line(&mut text)? == 0 {
            return Ok(None);
        }
        self.line += 1;

        let mut record = LogRecord::new();
        for (index, token) in text.split_whitespace().enumerate() {
            let field = self.logger.fields().get(index).ok_or_else(|| {
                Error::format(
                    self.line,
                    format!(
                        "{} field(s) declared but line has more values",
                        self.logger.field_count()
                    ),
                )
            })?;
            record.push(Value::parse(token, field.data_type, self.line)?);
        }
        Ok(Some(record))
    }

    /// Iterate over the remaining records
    pub fn records(&mut self) -> Records<'_, R> {
        Records { reader: self }
    }

    /// Read every remaining record
    pub fn read_all(&mut self) -> Result<Vec<LogRecord>> {
        self.records().collect()
    }
}

/// Iterator returned by [`LogReader::records`]
pub struct Records<'a, R: BufRead> {
    reader: &'a mut LogReader<R>,
}

impl<R: BufRead> Iterator for Records<'_, R> {
    type Item = Result<LogRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.reader.next_record().transpose()
    }
}

/// Create (truncate) a log file and write its metadata line
pub fn create(path: impl AsRef<Path>, logger: Logger) -> Result<LogWriter<BufWriter<File>>> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut writer = LogWriter::new(logger, BufWriter::new(file));
    writer.write_metadata()?;
    writer.flush()?;
    info!(path = %path.display(), fields = writer.logger().field_count(), "Created log file");
    Ok(writer)
}

/// Open a log file and read its metadata line
pub fn open(path: impl AsRef<Path>) -> Result<LogReader<BufReader<File>>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let reader = LogReader::open(BufReader::new(file))?;
    info!(path = %path.display(), fields = reader.logger().field_count(), "Opened log file");
    Ok(reader)
}
