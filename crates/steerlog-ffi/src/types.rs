//! FFI-safe type definitions
//!
//! All types in this module are designed to be safely passed across
//! the FFI boundary with C ABI compatibility.

/// Result codes for FFI operations
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SteerlogResult {
    /// Operation completed successfully
    Success = 0,
    /// Invalid input parameters
    InvalidInput = -1,
    /// Null pointer provided
    NullPointer = -2,
    /// Invalid UTF-8 string
    Utf8Error = -3,
    /// Index past the end of a record, logger or log
    IndexOutOfRange = -4,
    /// Value type does not match the request or the declared field
    TypeMismatch = -5,
    /// Malformed log text or unwritable value
    FormatError = -6,
    /// File could not be read or written
    IoError = -7,
    /// No logger registered under the given name
    NotFound = -8,
    /// Memory allocation failure
    MemoryError = -9,
    /// Internal error
    InternalError = -10,
    /// Unknown error
    Unknown = -99,
}

/// Opaque handle for a log record
#[repr(C)]
pub struct SteerlogRecord {
    _private: [u8; 0],
}

/// Opaque handle for a logger
#[repr(C)]
pub struct SteerlogLogger {
    _private: [u8; 0],
}

/// Opaque handle for loaded log data
#[repr(C)]
pub struct SteerlogLogData {
    _private: [u8; 0],
}

impl SteerlogResult {
    /// Check if the result indicates success
    pub fn is_success(self) -> bool {
        self == SteerlogResult::Success
    }

    /// Get a human-readable error message
    pub fn error_message(self) -> &'static str {
        match self {
            SteerlogResult::Success => "Success",
            SteerlogResult::InvalidInput => "Invalid input parameters",
            SteerlogResult::NullPointer => "Null pointer provided",
            SteerlogResult::Utf8Error => "Invalid UTF-8 string",
            SteerlogResult::IndexOutOfRange => "Index out of range",
            SteerlogResult::TypeMismatch => "Type mismatch",
            SteerlogResult::FormatError => "Log format error",
            SteerlogResult::IoError => "IO error",
            SteerlogResult::NotFound => "Logger not found",
            SteerlogResult::MemoryError => "Memory allocation failed",
            SteerlogResult::InternalError => "Internal error",
            SteerlogResult::Unknown => "Unknown error",
        }
    }
}
