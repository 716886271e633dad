//! Field-declaring logger
//!
//! A [`Logger`] holds the ordered field declarations of a log and turns
//! [`LogRecord`]s into text:
//!
//! - [`Logger::render`]: two comma-separated lines, field names then values.
//!   Lenient about count mismatches, used for display.
//! - [`Logger::to_line`] / [`Logger::to_pretty_line`]: the typed line
//!   format of a log file. Every value must match its declared field.
//! - [`Logger::metadata`] / [`Logger::from_metadata`]: the field header of
//!   a log file.

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use crate::error::{Error, Result};
use crate::field::{DataType, Field};
use crate::record::{LogRecord, Value};

/// Ordered set of named, typed fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Logger {
    fields: Vec<Field>,
}

impl Logger {
    /// Create a logger with no fields
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field of any type
    pub fn add_field(&mut self, name: impl Into<String>, data_type: DataType) -> Result<()> {
        let field = Field::new(name, data_type)?;
        tracing::trace!(name = %field.name, data_type = %data_type, "Declared field");
        self.fields.push(field);
        Ok(())
    }

    /// Declare an integer field
    pub fn add_integer_field(&mut self, name: impl Into<String>) -> Result<()> {
        self.add_field(name, DataType::Integer)
    }

    /// Declare a float field
    pub fn add_float_field(&mut self, name: impl Into<String>) -> Result<()> {
        self.add_field(name, DataType::Float)
    }

    /// Declare a 64-bit integer field
    pub fn add_long_field(&mut self, name: impl Into<String>) -> Result<()> {
        self.add_field(name, DataType::LongLong)
    }

    /// Declare a string field
    pub fn add_string_field(&mut self, name: impl Into<String>) -> Result<()> {
        self.add_field(name, DataType::String)
    }

    /// Builder form of [`add_field`](Self::add_field)
    pub fn with_field(mut self, name: impl Into<String>, data_type: DataType) -> Result<Self> {
        self.add_field(name, data_type)?;
        Ok(self)
    }

    pub fn field(&self, index: usize) -> Result<&Field> {
        self.fields.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.fields.len(),
        })
    }

    pub fn field_name(&self, index: usize) -> Result<&str> {
        self.field(index).map(|f| f.name.as_str())
    }

    pub fn field_type(&self, index: usize) -> Result<DataType> {
        self.field(index).map(|f| f.data_type)
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Appends every field of `other` after this logger's fields
    pub fn extend_from(&mut self, other: &Logger) {
        self.fields.extend(other.fields.iter().cloned());
    }

    /// Render a record as `names\nvalues`, both comma separated
    ///
    /// Each value is printed in its own representation, whatever its
    /// field declares, and the two lines may differ in length.
    pub fn render(&self, record: &LogRecord) -> String {
        let header = self
            .fields
            .iter()
            .map(|f| f.name.as_str())
            .collect::<Vec<_>>()
            .join(",");
        let values = record
            .values()
            .iter()
            .map(Value::to_string)
            .collect::<Vec<_>>()
            .join(",");
        format!("{}\n{}", header, values)
    }

    /// Typed log line: `"v1 v2 ... \n"`
    pub fn to_line(&self, record: &LogRecord) -> Result<String> {
        let mut line = String::new();
        for (index, value) in record.values().iter().enumerate() {
            let text = self.checked_text(index, value)?;
            line.push_str(&text);
            line.push(' ');
        }
        line.push('\n');
        Ok(line)
    }

    /// Typed log line with each value padded to its field name's width
    pub fn to_pretty_line(&self, record: &LogRecord) -> Result<String> {
        let mut line = String::new();
        for (index, value) in record.values().iter().enumerate() {
            let text = self.checked_text(index, value)?;
            let name = &self.fields[index].name;
            let _ = write!(line, "{}{} ", text, padding(name, &text));
        }
        line.push('\n');
        Ok(line)
    }

    /// Field header: `"name code name code ... \n"`
    pub fn metadata(&self) -> String {
        let mut out = String::new();
        for field in &self.fields {
            let _ = write!(out, "{} {} ", field.name, field.data_type.code());
        }
        out.push('\n');
        out
    }

    /// Parse a field header produced by [`metadata`](Self::metadata)
    pub fn from_metadata(line: &str) -> Result<Self> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() % 2 != 0 {
            return Err(Error::format(
                1,
                format!("expected name/type pairs, found {} token(s)", tokens.len()),
            ));
        }

        let mut logger = Logger::new();
        for pair in tokens.chunks(2) {
            let code: i64 = pair[1].parse().map_err(|_| {
                Error::format(1, format!("type code '{}' for '{}' is not a number", pair[1], pair[0]))
            })?;
            logger.add_field(pair[0], DataType::from_code(code)?)?;
        }
        Ok(logger)
    }

    fn checked_text(&self, index: usize, value: &Value) -> Result<String> {
        let field = self.fields.get(index).ok_or(Error::UndeclaredField {
            index,
            declared: self.fields.len(),
        })?;
        if value.data_type() != field.data_type {
            return Err(Error::TypeMismatch {
                index,
                expected: field.data_type,
                found: value.data_type(),
            });
        }
        if let Value::String(s) = value {
            if s.is_empty() {
                return Err(Error::UnwritableValue {
                    index,
                    reason: "empty string".to_string(),
                });
            }
            if s.chars().any(char::is_whitespace) {
                return Err(Error::UnwritableValue {
                    index,
                    reason: format!("'{}' contains whitespace", s),
                });
            }
        }
        Ok(value.to_string())
    }
}

/// Spaces needed to pad `value` out to the width of `name`
pub fn padding(name: &str, value: &str) -> String {
    " ".repeat(name.len().saturating_sub(value.len()))
}
