//! Field declarations
//!
//! A logger is an ordered list of [`Field`]s. Each field has a name and a
//! [`DataType`]; the numeric type codes are what the metadata line of a
//! log file stores.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Type of the values a field labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum DataType {
    /// 32-bit signed integer
    Integer = 0,
    /// 32-bit float
    Float = 1,
    /// 64-bit signed integer
    LongLong = 2,
    /// Whitespace-free string
    String = 3,
}

impl DataType {
    /// Every data type, in code order
    pub const ALL: [DataType; 4] = [
        DataType::Integer,
        DataType::Float,
        DataType::LongLong,
        DataType::String,
    ];

    /// Numeric code stored in log metadata
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Look a data type up by its metadata code
    pub fn from_code(code: i64) -> Result<Self> {
        match code {
            0 => Ok(DataType::Integer),
            1 => Ok(DataType::Float),
            2 => Ok(DataType::LongLong),
            3 => Ok(DataType::String),
            _ => Err(Error::UnknownDataType { code }),
        }
    }

    /// Lowercase name, as used on the command line and in messages
    pub fn name(self) -> &'static str {
        match self {
            DataType::Integer => "integer",
            DataType::Float => "float",
            DataType::LongLong => "long_long",
            DataType::String => "string",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DataType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "integer" | "int" | "i32" => Ok(DataType::Integer),
            "float" | "f32" => Ok(DataType::Float),
            "long_long" | "longlong" | "long" | "i64" => Ok(DataType::LongLong),
            "string" | "str" => Ok(DataType::String),
            other => Err(format!("unknown data type '{}'", other)),
        }
    }
}

/// A named, typed column of a log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Field name; never empty, never contains whitespace
    pub name: String,
    /// Type of the values this field labels
    pub data_type: DataType,
}

impl Field {
    /// Create a field, validating its name
    pub fn new(name: impl Into<String>, data_type: DataType) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self { name, data_type })
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::InvalidField {
            name: name.to_string(),
            reason: "field name is empty".to_string(),
        });
    }
    if name.chars().any(char::is_whitespace) {
        return Err(Error::InvalidField {
            name: name.to_string(),
            reason: "field name contains whitespace".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        for data_type in DataType::ALL {
            assert_eq!(DataType::from_code(data_type.code() as i64).unwrap(), data_type);
        }
        assert_eq!(DataType::String.code(), 3);
    }

    #[test]
    fn test_unknown_code() {
        assert!(matches!(
            DataType::from_code(4),
            Err(Error::UnknownDataType { code: 4 })
        ));
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("int".parse::<DataType>().unwrap(), DataType::Integer);
        assert_eq!("Float".parse::<DataType>().unwrap(), DataType::Float);
        assert_eq!("i64".parse::<DataType>().unwrap(), DataType::LongLong);
        assert!("bool".parse::<DataType>().is_err());
    }

    #[test]
    fn test_field_name_validation() {
        assert!(Field::new("bacons", DataType::Integer).is_ok());
        assert!(Field::new("", DataType::Integer).is_err());
        assert!(Field::new("two words", DataType::Float).is_err());
    }
}
