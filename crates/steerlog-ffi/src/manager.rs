//! Process-wide named log files for C callers
//!
//! C code has no owner for a [`LogManager`], so one instance rooted at
//! the current directory lives behind a mutex here. Absolute names are
//! used as-is.

use std::os::raw::{c_char, c_int};
use std::ptr;
use std::sync::{Mutex, MutexGuard, OnceLock};

use steerlog_core::{LogManager, Logger, LoggerKind};

use crate::error::{map_core_error, validate_mut_ptr};
use crate::logger::logger_ref;
use crate::memory::{c_str_to_string, clear_last_error, set_last_error};
use crate::record::{into_handle, record_ref};
use crate::types::{SteerlogLogger, SteerlogRecord, SteerlogResult};

/// `kind` value for reading an existing log file
pub const STEERLOG_LOGGER_READ: c_int = 0;
/// `kind` value for creating a log file to write
pub const STEERLOG_LOGGER_WRITE: c_int = 1;

static MANAGER: OnceLock<Mutex<LogManager>> = OnceLock::new();

fn manager() -> Result<MutexGuard<'static, LogManager>, SteerlogResult> {
    MANAGER
        .get_or_init(|| Mutex::new(LogManager::new(".")))
        .lock()
        .map_err(|_| {
            set_last_error("Log manager lock is poisoned");
            SteerlogResult::InternalError
        })
}

/// Open the log file `name` and register it
///
/// `kind` is `STEERLOG_LOGGER_READ` or `STEERLOG_LOGGER_WRITE`. When
/// writing, `fields` (copied) becomes the file's metadata line; when
/// reading, a non-null `fields` must match the file. `fields` may be null.
///
/// # Safety
/// `name` must be a valid null-terminated UTF-8 string and `fields` null
/// or a live logger handle.
#[no_mangle]
pub unsafe extern "C" fn steerlog_manager_create_logger(
    name: *const c_char,
    kind: c_int,
    fields: *const SteerlogLogger,
) -> SteerlogResult {
    ffi_boundary!({
        clear_last_error();
        let name = c_str_to_string(name)?;
        let kind = match kind {
            STEERLOG_LOGGER_READ => LoggerKind::BasicRead,
            STEERLOG_LOGGER_WRITE => LoggerKind::BasicWrite,
            other => {
                set_last_error(format!("Unknown logger kind {}", other));
                return Err(SteerlogResult::InvalidInput);
            }
        };
        let fields = if fields.is_null() {
            Logger::new()
        } else {
            logger_ref(fields)?.clone()
        };

        tracing::debug!(name = %name, ?kind, "registering log file from C");
        manager()?
            .create_logger(&name, kind, fields)
            .map_err(map_core_error)?;
        Ok(SteerlogResult::Success)
    })
}

/// Write a record to the log registered as `name`
///
/// # Safety
/// `name` must be a valid null-terminated UTF-8 string and `record` a
/// live record handle.
#[no_mangle]
pub unsafe extern "C" fn steerlog_manager_write_record(
    name: *const c_char,
    record: *const SteerlogRecord,
) -> SteerlogResult {
    ffi_boundary!({
        clear_last_error();
        let name = c_str_to_string(name)?;
        let record = record_ref(record)?;
        manager()?
            .write_record(&name, record)
            .map_err(map_core_error)?;
        Ok(SteerlogResult::Success)
    })
}

/// Read the next record from the log registered as `name`
///
/// At end of file `*out_record` is set to null and `Success` returned.
/// Otherwise the new record must be freed with `steerlog_record_free`.
///
/// # Safety
/// `name` must be a valid null-terminated UTF-8 string and `out_record`
/// valid for writes.
#[no_mangle]
pub unsafe extern "C" fn steerlog_manager_next_record(
    name: *const c_char,
    out_record: *mut *mut SteerlogRecord,
) -> SteerlogResult {
    ffi_boundary!({
        clear_last_error();
        validate_mut_ptr(out_record, "out_record")?;
        let name = c_str_to_string(name)?;
        let next = manager()?.next_record(&name).map_err(map_core_error)?;
        *out_record = match next {
            Some(record) => into_handle(record),
            None => ptr::null_mut(),
        };
        Ok(SteerlogResult::Success)
    })
}

/// Flush and unregister the log `name`
///
/// # Safety
/// `name` must be a valid null-terminated UTF-8 string.
#[no_mangle]
pub unsafe extern "C" fn steerlog_manager_close(name: *const c_char) -> SteerlogResult {
    ffi_boundary!({
        clear_last_error();
        let name = c_str_to_string(name)?;
        manager()?.close(&name).map_err(map_core_error)?;
        Ok(SteerlogResult::Success)
    })
}
