//! Error handling for FFI boundary
//!
//! This module provides utilities for safely propagating errors
//! across the FFI boundary without panics or undefined behavior.

use std::any::Any;
use std::panic;

use crate::memory::set_last_error;
use crate::types::SteerlogResult;

/// Convert a steerlog core error to an FFI result code
pub fn map_core_error(error: steerlog_core::Error) -> SteerlogResult {
    use steerlog_core::Error;

    set_last_error(error.to_string());
    match error {
        Error::IndexOutOfRange { .. } => SteerlogResult::IndexOutOfRange,
        Error::TypeMismatch { .. } | Error::UndeclaredField { .. } => SteerlogResult::TypeMismatch,
        Error::InvalidField { .. }
        | Error::UnknownDataType { .. }
        | Error::LengthMismatch { .. }
        | Error::WrongMode { .. } => SteerlogResult::InvalidInput,
        Error::UnwritableValue { .. } | Error::Format { .. } => SteerlogResult::FormatError,
        Error::LoggerNotFound { .. } => SteerlogResult::NotFound,
        Error::Io { .. } | Error::Stream(_) => SteerlogResult::IoError,
    }
}

/// Safely execute a closure that might panic
///
/// Panics are caught and turned into `InternalError` with the panic
/// message stored as the last error.
pub fn catch_panic<F, R>(f: F) -> Result<R, SteerlogResult>
where
    F: FnOnce() -> Result<R, SteerlogResult>,
{
    match panic::catch_unwind(panic::AssertUnwindSafe(f)) {
        Ok(result) => result,
        Err(panic_info) => {
            let msg = get_panic_message(&panic_info);
            tracing::error!(panic = %msg, "panic caught at FFI boundary");
            set_last_error(format!("Panic occurred: {}", msg));
            Err(SteerlogResult::InternalError)
        }
    }
}

fn get_panic_message(panic_info: &Box<dyn Any + Send>) -> String {
    if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic".to_string()
    }
}

/// Run an FFI body, returning its result code or the error code
///
/// The body evaluates to `Result<SteerlogResult, SteerlogResult>` so
/// `?` can be used on validation steps.
#[macro_export]
macro_rules! ffi_boundary {
    ($body:expr) => {{
        match $crate::error::catch_panic(|| $body) {
            Ok(result) => result,
            Err(code) => code,
        }
    }};
}

/// Validate that a pointer is not null
pub fn validate_ptr<T>(ptr: *const T, name: &str) -> Result<(), SteerlogResult> {
    if ptr.is_null() {
        set_last_error(format!("{} is null", name));
        Err(SteerlogResult::NullPointer)
    } else {
        Ok(())
    }
}

/// Validate that a mutable pointer is not null
pub fn validate_mut_ptr<T>(ptr: *mut T, name: &str) -> Result<(), SteerlogResult> {
    validate_ptr(ptr as *const T, name)
}
