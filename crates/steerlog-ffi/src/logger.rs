//! Logger handles
//!
//! A `SteerlogLogger` is a boxed [`Logger`]: declared fields plus the
//! render operations that turn a record into text.

use std::os::raw::{c_char, c_int};

use steerlog_core::{DataType, Logger};

use crate::error::{map_core_error, validate_mut_ptr, validate_ptr};
use crate::memory::{c_str_to_string, clear_last_error, write_string};
use crate::record::record_ref;
use crate::types::{SteerlogLogger, SteerlogRecord, SteerlogResult};

pub(crate) unsafe fn logger_ref<'a>(
    logger: *const SteerlogLogger,
) -> Result<&'a Logger, SteerlogResult> {
    validate_ptr(logger, "logger")?;
    Ok(&*(logger as *const Logger))
}

unsafe fn logger_mut<'a>(logger: *mut SteerlogLogger) -> Result<&'a mut Logger, SteerlogResult> {
    validate_mut_ptr(logger, "logger")?;
    Ok(&mut *(logger as *mut Logger))
}

unsafe fn add_field(
    logger: *mut SteerlogLogger,
    name: *const c_char,
    data_type: DataType,
) -> SteerlogResult {
    ffi_boundary!({
        clear_last_error();
        let logger = logger_mut(logger)?;
        let name = c_str_to_string(name)?;
        logger.add_field(name, data_type).map_err(map_core_error)?;
        Ok(SteerlogResult::Success)
    })
}

/// Create a logger with no fields
///
/// The logger must be freed with `steerlog_logger_free`.
#[no_mangle]
pub extern "C" fn steerlog_logger_new() -> *mut SteerlogLogger {
    clear_last_error();
    Box::into_raw(Box::new(Logger::new())) as *mut SteerlogLogger
}

/// Free a logger
///
/// # Safety
/// The pointer must be null or come from `steerlog_logger_new`, and must
/// not be freed twice. Loggers borrowed from log data must not be passed
/// here.
#[no_mangle]
pub unsafe extern "C" fn steerlog_logger_free(logger: *mut SteerlogLogger) {
    if logger.is_null() {
        return;
    }
    drop(Box::from_raw(logger as *mut Logger));
}

/// Declare an integer field
///
/// Field names must be non-empty and contain no whitespace.
///
/// # Safety
/// `logger` must be a live logger handle and `name` a valid
/// null-terminated UTF-8 string.
#[no_mangle]
pub unsafe extern "C" fn steerlog_logger_add_integer_field(
    logger: *mut SteerlogLogger,
    name: *const c_char,
) -> SteerlogResult {
    add_field(logger, name, DataType::Integer)
}

/// Declare a float field
///
/// # Safety
/// See `steerlog_logger_add_integer_field`.
#[no_mangle]
pub unsafe extern "C" fn steerlog_logger_add_float_field(
    logger: *mut SteerlogLogger,
    name: *const c_char,
) -> SteerlogResult {
    add_field(logger, name, DataType::Float)
}

/// Declare a 64-bit integer field
///
/// # Safety
/// See `steerlog_logger_add_integer_field`.
#[no_mangle]
pub unsafe extern "C" fn steerlog_logger_add_long_field(
    logger: *mut SteerlogLogger,
    name: *const c_char,
) -> SteerlogResult {
    add_field(logger, name, DataType::LongLong)
}

/// Declare a string field
///
/// # Safety
/// See `steerlog_logger_add_integer_field`.
#[no_mangle]
pub unsafe extern "C" fn steerlog_logger_add_string_field(
    logger: *mut SteerlogLogger,
    name: *const c_char,
) -> SteerlogResult {
    add_field(logger, name, DataType::String)
}

/// Number of declared fields
///
/// # Safety
/// `logger` must be a live logger handle and `out_count` valid for writes.
#[no_mangle]
pub unsafe extern "C" fn steerlog_logger_field_count(
    logger: *const SteerlogLogger,
    out_count: *mut usize,
) -> SteerlogResult {
    ffi_boundary!({
        clear_last_error();
        let logger = logger_ref(logger)?;
        validate_mut_ptr(out_count, "out_count")?;
        *out_count = logger.field_count();
        Ok(SteerlogResult::Success)
    })
}

/// Name of the field at `index`
///
/// # Safety
/// `logger` must be a live logger handle and `out_name` valid for writes.
/// The returned string must be freed with `steerlog_string_free`.
#[no_mangle]
pub unsafe extern "C" fn steerlog_logger_field_name(
    logger: *const SteerlogLogger,
    index: usize,
    out_name: *mut *mut c_char,
) -> SteerlogResult {
    ffi_boundary!({
        clear_last_error();
        let logger = logger_ref(logger)?;
        validate_mut_ptr(out_name, "out_name")?;
        let name = logger.field_name(index).map_err(map_core_error)?;
        write_string(out_name, name)?;
        Ok(SteerlogResult::Success)
    })
}

/// Data type code of the field at `index`
///
/// Codes: 0 integer, 1 float, 2 long long, 3 string.
///
/// # Safety
/// `logger` must be a live logger handle and `out_type` valid for writes.
#[no_mangle]
pub unsafe extern "C" fn steerlog_logger_field_type(
    logger: *const SteerlogLogger,
    index: usize,
    out_type: *mut c_int,
) -> SteerlogResult {
    ffi_boundary!({
        clear_last_error();
        let logger = logger_ref(logger)?;
        validate_mut_ptr(out_type, "out_type")?;
        *out_type = logger.field_type(index).map_err(map_core_error)?.code();
        Ok(SteerlogResult::Success)
    })
}

/// Field header line, `"name code name code ... \n"`
///
/// # Safety
/// `logger` must be a live logger handle and `out_metadata` valid for
/// writes. The returned string must be freed with `steerlog_string_free`.
#[no_mangle]
pub unsafe extern "C" fn steerlog_logger_metadata(
    logger: *const SteerlogLogger,
    out_metadata: *mut *mut c_char,
) -> SteerlogResult {
    ffi_boundary!({
        clear_last_error();
        let logger = logger_ref(logger)?;
        validate_mut_ptr(out_metadata, "out_metadata")?;
        write_string(out_metadata, &logger.metadata())?;
        Ok(SteerlogResult::Success)
    })
}

/// Render a record as field names, newline, values (comma separated)
///
/// # Safety
/// `logger` and `record` must be live handles and `out_text` valid for
/// writes. The returned string must be freed with `steerlog_string_free`.
#[no_mangle]
pub unsafe extern "C" fn steerlog_logger_render(
    logger: *const SteerlogLogger,
    record: *const SteerlogRecord,
    out_text: *mut *mut c_char,
) -> SteerlogResult {
    ffi_boundary!({
        clear_last_error();
        let logger = logger_ref(logger)?;
        let record = record_ref(record)?;
        validate_mut_ptr(out_text, "out_text")?;
        write_string(out_text, &logger.render(record))?;
        Ok(SteerlogResult::Success)
    })
}

/// Typed log line for a record, `"v1 v2 ... \n"`
///
/// Fails with `TypeMismatch` if a value does not match its field.
///
/// # Safety
/// `logger` and `record` must be live handles and `out_line` valid for
/// writes. The returned string must be freed with `steerlog_string_free`.
#[no_mangle]
pub unsafe extern "C" fn steerlog_logger_to_string(
    logger: *const SteerlogLogger,
    record: *const SteerlogRecord,
    out_line: *mut *mut c_char,
) -> SteerlogResult {
    ffi_boundary!({
        clear_last_error();
        let logger = logger_ref(logger)?;
        let record = record_ref(record)?;
        validate_mut_ptr(out_line, "out_line")?;
        let line = logger.to_line(record).map_err(map_core_error)?;
        write_string(out_line, &line)?;
        Ok(SteerlogResult::Success)
    })
}
