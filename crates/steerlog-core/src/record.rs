//! Log records
//!
//! A [`LogRecord`] accumulates typed [`Value`]s in append order. It knows
//! nothing about field names; a [`Logger`](crate::Logger) supplies those
//! when the record is rendered or written.

use serde::Serialize;
use std::fmt;

use crate::error::{Error, Result};
use crate::field::DataType;

/// One typed item of a record
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Integer(i32),
    LongLong(i64),
    Float(f32),
    String(String),
}

impl Value {
    /// The data type this value carries
    pub fn data_type(&self) -> DataType {
        match self {
            Value::Integer(_) => DataType::Integer,
            Value::Float(_) => DataType::Float,
            Value::LongLong(_) => DataType::LongLong,
            Value::String(_) => DataType::String,
        }
    }

    /// Parse a single whitespace-free token as `data_type`
    ///
    /// `line` is only used for error reporting.
    pub fn parse(token: &str, data_type: DataType, line: usize) -> Result<Self> {
        let bad = |e: &dyn fmt::Display| {
            Error::format(line, format!("cannot read '{}' as {}: {}", token, data_type, e))
        };
        match data_type {
            DataType::Integer => token.parse().map(Value::Integer).map_err(|e| bad(&e)),
            DataType::Float => token.parse().map(Value::Float).map_err(|e| bad(&e)),
            DataType::LongLong => token.parse().map(Value::LongLong).map_err(|e| bad(&e)),
            DataType::String => Ok(Value::String(token.to_string())),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::LongLong(v) => write!(f, "{}", v),
            Value::String(v) => f.write_str(v),
        }
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::LongLong(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

/// An ordered list of typed values
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LogRecord {
    values: Vec<Value>,
}

impl LogRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an integer value
    pub fn push_int(&mut self, value: i32) {
        self.values.push(Value::Integer(value));
    }

    /// Append a floating-point value
    pub fn push_float(&mut self, value: f32) {
        self.values.push(Value::Float(value));
    }

    /// Append a 64-bit integer value
    pub fn push_long(&mut self, value: i64) {
        self.values.push(Value::LongLong(value));
    }

    /// Append a string value
    pub fn push_string(&mut self, value: impl Into<String>) {
        self.values.push(Value::String(value.into()));
    }

    /// Append any value
    pub fn push(&mut self, value: impl Into<Value>) {
        self.values.push(value.into());
    }

    /// Builder form of [`push`](Self::push)
    pub fn with(mut self, value: impl Into<Value>) -> Self {
        self.push(value);
        self
    }

    /// Value at `index`, if any
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Value at `index`, or `IndexOutOfRange`
    pub fn value_at(&self, index: usize) -> Result<&Value> {
        self.values.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.values.len(),
        })
    }

    /// Integer value at `index`
    pub fn int_at(&self, index: usize) -> Result<i32> {
        match self.value_at(index)? {
            Value::Integer(v) => Ok(*v),
            other => Err(mismatch(index, DataType::Integer, other)),
        }
    }

    /// Float value at `index`
    pub fn float_at(&self, index: usize) -> Result<f32> {
        match self.value_at(index)? {
            Value::Float(v) => Ok(*v),
            other => Err(mismatch(index, DataType::Float, other)),
        }
    }

    /// 64-bit integer value at `index`
    pub fn long_at(&self, index: usize) -> Result<i64> {
        match self.value_at(index)? {
            Value::LongLong(v) => Ok(*v),
            other => Err(mismatch(index, DataType::LongLong, other)),
        }
    }

    /// String value at `index`
    pub fn string_at(&self, index: usize) -> Result<&str> {
        match self.value_at(index)? {
            Value::String(v) => Ok(v),
            other => Err(mismatch(index, DataType::String, other)),
        }
    }

    /// Appends every value of `other`, keeping their order
    pub fn extend_from(&mut self, other: &LogRecord) {
        self.values.extend(other.values.iter().cloned());
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn mismatch(index: usize, expected: DataType, found: &Value) -> Error {
    Error::TypeMismatch {
        index,
        expected,
        found: found.data_type(),
    }
}

impl From<Vec<Value>> for LogRecord {
    fn from(values: Vec<Value>) -> Self {
        Self { values }
    }
}

impl FromIterator<Value> for LogRecord {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// `"<len> v1 v2 ... "`
impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.values.len())?;
        for value in &self.values {
            write!(f, "{} ", value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_order() {
        let mut record = LogRecord::new();
        record.push_int(3);
        record.push_int(30);
        record.push_float(2.3);

        assert_eq!(record.len(), 3);
        assert_eq!(record.get(0), Some(&Value::Integer(3)));
        assert_eq!(record.get(1), Some(&Value::Integer(30)));
        assert_eq!(record.get(2), Some(&Value::Float(2.3)));
        assert_eq!(record.get(3), None);
    }

    #[test]
    fn test_typed_accessors() {
        let record = LogRecord::new()
            .with(7)
            .with(1.5f32)
            .with(9_000_000_000i64)
            .with("left");

        assert_eq!(record.int_at(0).unwrap(), 7);
        assert_eq!(record.float_at(1).unwrap(), 1.5);
        assert_eq!(record.long_at(2).unwrap(), 9_000_000_000);
        assert_eq!(record.string_at(3).unwrap(), "left");

        assert!(matches!(
            record.int_at(1),
            Err(Error::TypeMismatch {
                index: 1,
                expected: DataType::Integer,
                found: DataType::Float
            })
        ));
        assert!(matches!(
            record.int_at(4),
            Err(Error::IndexOutOfRange { index: 4, len: 4 })
        ));
    }

    #[test]
    fn test_display_is_count_prefixed() {
        let record = LogRecord::new().with(3).with(30).with(2.3f32);
        assert_eq!(record.to_string(), "3 3 30 2.3 ");
        assert_eq!(LogRecord::new().to_string(), "0 ");
    }

    #[test]
    fn test_clone_is_independent() {
        let original = LogRecord::new().with(1);
        let mut copy = original.clone();
        copy.push_int(2);
        assert_eq!(original.len(), 1);
        assert_eq!(copy.len(), 2);
    }

    #[test]
    fn test_parse_tokens() {
        assert_eq!(
            Value::parse("-12", DataType::Integer, 1).unwrap(),
            Value::Integer(-12)
        );
        assert_eq!(
            Value::parse("0.25", DataType::Float, 1).unwrap(),
            Value::Float(0.25)
        );
        assert!(matches!(
            Value::parse("x", DataType::LongLong, 4),
            Err(Error::Format { line: 4, .. })
        ));
    }

    #[test]
    fn test_json_shape() {
        let record = LogRecord::new()
            .with(3)
            .with(1i64 << 40)
            .with(5i64)
            .with(2.3f32)
            .with("a1");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"[3,1099511627776,5,2.3,"a1"]"#);
    }
}
