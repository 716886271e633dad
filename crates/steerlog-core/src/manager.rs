//! Named log files
//!
//! A [`LogManager`] opens log files under one root directory and keeps
//! them by name, so a simulation can hand out "the collisions log" or
//! "the frame timing log" without passing file handles around.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::format::{self, LogMode, LogReader, LogWriter};
use crate::logger::Logger;
use crate::record::LogRecord;

/// Kind of logger a manager can create
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoggerKind {
    /// Read an existing log file
    BasicRead,
    /// Create (truncate) a log file and write to it
    BasicWrite,
}

impl LoggerKind {
    pub fn mode(self) -> LogMode {
        match self {
            LoggerKind::BasicRead => LogMode::Read,
            LoggerKind::BasicWrite => LogMode::Write,
        }
    }
}

/// An open log file, in one direction
pub enum FileLog {
    Writer(LogWriter<BufWriter<File>>),
    Reader(LogReader<BufReader<File>>),
}

impl FileLog {
    pub fn mode(&self) -> LogMode {
        match self {
            FileLog::Writer(_) => LogMode::Write,
            FileLog::Reader(_) => LogMode::Read,
        }
    }

    pub fn logger(&self) -> &Logger {
        match self {
            FileLog::Writer(w) => w.logger(),
            FileLog::Reader(r) => r.logger(),
        }
    }

    pub fn writer(&mut self) -> Option<&mut LogWriter<BufWriter<File>>> {
        match self {
            FileLog::Writer(w) => Some(w),
            FileLog::Reader(_) => None,
        }
    }

    pub fn reader(&mut self) -> Option<&mut LogReader<BufReader<File>>> {
        match self {
            FileLog::Reader(r) => Some(r),
            FileLog::Writer(_) => None,
        }
    }
}

/// Registry of open log files under a root directory
pub struct LogManager {
    root: PathBuf,
    logs: BTreeMap<String, FileLog>,
}

impl LogManager {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            logs: BTreeMap::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path a log named `name` lives at
    pub fn path_of(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Open the log file `name` and register it
    ///
    /// For [`LoggerKind::BasicWrite`] the file is truncated and `fields`
    /// becomes its metadata line. For [`LoggerKind::BasicRead`] the fields
    /// come from the file; a non-empty `fields` must match them. An
    /// existing entry of the same name is replaced.
    pub fn create_logger(
        &mut self,
        name: &str,
        kind: LoggerKind,
        fields: Logger,
    ) -> Result<&mut FileLog> {
        let path = self.path_of(name);
        let log = match kind {
            LoggerKind::BasicWrite => FileLog::Writer(format::create(&path, fields)?),
            LoggerKind::BasicRead => {
                let reader = format::open(&path)?;
                if fields.field_count() > 0 && reader.logger() != &fields {
                    return Err(Error::format(
                        1,
                        format!(
                            "fields in {} do not match the expected fields",
                            path.display()
                        ),
                    ));
                }
                FileLog::Reader(reader)
            }
        };

        if let Some(old) = self.logs.insert(name.to_string(), log) {
            warn!(name, mode = ?old.mode(), "Replaced open logger");
        }
        info!(name, kind = ?kind, "Registered logger");

        // Just inserted.
        self.logs
            .get_mut(name)
            .ok_or_else(|| Error::LoggerNotFound { name: name.to_string() })
    }

    pub fn get(&self, name: &str) -> Option<&FileLog> {
        self.logs.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut FileLog> {
        self.logs.get_mut(name)
    }

    /// Write a record to the writer registered as `name`
    pub fn write_record(&mut self, name: &str, record: &LogRecord) -> Result<()> {
        let writer = self.require(name)?.writer().ok_or_else(|| Error::WrongMode {
            name: name.to_string(),
            expected: "writing",
        })?;
        writer.write_record(record)
    }

    /// Read the next record from the reader registered as `name`
    pub fn next_record(&mut self, name: &str) -> Result<Option<LogRecord>> {
        let reader = self.require(name)?.reader().ok_or_else(|| Error::WrongMode {
            name: name.to_string(),
            expected: "reading",
        })?;
        reader.next_record()
    }

    /// Unregister `name`, flushing it if it is a writer
    pub fn close(&mut self, name: &str) -> Result<()> {
        let log = self
            .logs
            .remove(name)
            .ok_or_else(|| Error::LoggerNotFound { name: name.to_string() })?;
        if let FileLog::Writer(writer) = log {
            writer.into_inner()?;
        }
        info!(name, "Closed logger");
        Ok(())
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        self.logs.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.logs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.logs.is_empty()
    }

    fn require(&mut self, name: &str) -> Result<&mut FileLog> {
        self.logs
            .get_mut(name)
            .ok_or_else(|| Error::LoggerNotFound { name: name.to_string() })
    }
}
