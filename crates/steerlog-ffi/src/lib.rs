//! Steerlog FFI - C ABI over steerlog-core
//!
//! This crate exposes log records, loggers, loaded log data and named
//! log files to C and to anything that can load a C shared library.
//!
//! # Ownership
//!
//! - Handles from `*_new`, `*_copy` and `*_load` belong to the caller and
//!   are released with the matching `*_free`.
//! - Handles from `steerlog_log_data_record_at` / `steerlog_log_data_logger`
//!   are borrowed from their log data and must not be freed.
//! - Strings written to out-parameters are released with
//!   `steerlog_string_free`.
//!
//! # Safety
//!
//! All FFI functions that take pointers are `unsafe`. Callers must pass
//! null or live handles, valid null-terminated UTF-8 strings, and must
//! not use a handle from two threads at once.

#![warn(missing_docs)]

#[macro_use]
mod error;
mod log_data;
mod logger;
mod manager;
mod memory;
mod record;
mod types;

use std::os::raw::c_char;

// Re-export public API
pub use log_data::*;
pub use logger::*;
pub use manager::*;
pub use memory::{steerlog_clear_error, steerlog_get_last_error, steerlog_string_free};
pub use record::*;
pub use types::{SteerlogLogData, SteerlogLogger, SteerlogRecord, SteerlogResult};

/// Get version information
///
/// # Safety
/// The returned string is static and should NOT be freed
#[no_mangle]
pub unsafe extern "C" fn steerlog_version() -> *const c_char {
    concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"), "\0").as_ptr() as *const c_char
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    #[test]
    fn test_version() {
        unsafe {
            let version = CStr::from_ptr(steerlog_version()).to_str().unwrap();
            assert!(version.starts_with("steerlog-ffi "));
        }
    }
}
