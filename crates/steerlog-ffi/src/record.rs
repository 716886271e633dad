//! Log record handles
//!
//! A `SteerlogRecord` is a boxed [`LogRecord`]. Records made by
//! `steerlog_record_new` or `steerlog_record_copy` are owned by the caller
//! and released with `steerlog_record_free`.

use std::os::raw::{c_char, c_float, c_int, c_longlong};
use std::ptr;

use steerlog_core::LogRecord;

use crate::error::{map_core_error, validate_mut_ptr, validate_ptr};
use crate::memory::{c_str_to_string, clear_last_error, write_string};
use crate::types::{SteerlogRecord, SteerlogResult};

/// Borrow the record behind a handle
///
/// # Safety
/// `record` must be null or a live handle from this library.
pub(crate) unsafe fn record_ref<'a>(
    record: *const SteerlogRecord,
) -> Result<&'a LogRecord, SteerlogResult> {
    validate_ptr(record, "record")?;
    Ok(&*(record as *const LogRecord))
}

/// Mutably borrow the record behind a handle
///
/// # Safety
/// `record` must be null or a live handle from this library that nothing
/// else is borrowing.
pub(crate) unsafe fn record_mut<'a>(
    record: *mut SteerlogRecord,
) -> Result<&'a mut LogRecord, SteerlogResult> {
    validate_mut_ptr(record, "record")?;
    Ok(&mut *(record as *mut LogRecord))
}

pub(crate) fn into_handle(record: LogRecord) -> *mut SteerlogRecord {
    Box::into_raw(Box::new(record)) as *mut SteerlogRecord
}

/// Create an empty log record
///
/// The record must be freed with `steerlog_record_free`.
#[no_mangle]
pub extern "C" fn steerlog_record_new() -> *mut SteerlogRecord {
    clear_last_error();
    into_handle(LogRecord::new())
}

/// Free a log record
///
/// # Safety
/// The pointer must be null or come from `steerlog_record_new` /
/// `steerlog_record_copy`, and must not be freed twice. Records borrowed
/// from log data must not be passed here.
#[no_mangle]
pub unsafe extern "C" fn steerlog_record_free(record: *mut SteerlogRecord) {
    if record.is_null() {
        return;
    }
    drop(Box::from_raw(record as *mut LogRecord));
}

/// Copy a log record
///
/// Returns null (with the last error set) if `record` is null. The copy
/// must be freed with `steerlog_record_free`.
///
/// # Safety
/// `record` must be null or a live record handle.
#[no_mangle]
pub unsafe extern "C" fn steerlog_record_copy(record: *const SteerlogRecord) -> *mut SteerlogRecord {
    clear_last_error();
    match record_ref(record) {
        Ok(r) => into_handle(r.clone()),
        Err(_) => ptr::null_mut(),
    }
}

/// Append an integer value
///
/// # Safety
/// `record` must be a live record handle.
#[no_mangle]
pub unsafe extern "C" fn steerlog_record_add_int(
    record: *mut SteerlogRecord,
    value: c_int,
) -> SteerlogResult {
    ffi_boundary!({
        clear_last_error();
        record_mut(record)?.push_int(value);
        Ok(SteerlogResult::Success)
    })
}

/// Append a floating-point value
///
/// # Safety
/// `record` must be a live record handle.
#[no_mangle]
pub unsafe extern "C" fn steerlog_record_add_float(
    record: *mut SteerlogRecord,
    value: c_float,
) -> SteerlogResult {
    ffi_boundary!({
        clear_last_error();
        record_mut(record)?.push_float(value);
        Ok(SteerlogResult::Success)
    })
}

/// Append a 64-bit integer value
///
/// # Safety
/// `record` must be a live record handle.
#[no_mangle]
pub unsafe extern "C" fn steerlog_record_add_long(
    record: *mut SteerlogRecord,
    value: c_longlong,
) -> SteerlogResult {
    ffi_boundary!({
        clear_last_error();
        record_mut(record)?.push_long(value);
        Ok(SteerlogResult::Success)
    })
}

/// Append a string value (copied)
///
/// # Safety
/// `record` must be a live record handle and `value` a valid
/// null-terminated UTF-8 string.
#[no_mangle]
pub unsafe extern "C" fn steerlog_record_add_string(
    record: *mut SteerlogRecord,
    value: *const c_char,
) -> SteerlogResult {
    ffi_boundary!({
        clear_last_error();
        let record = record_mut(record)?;
        let value = c_str_to_string(value)?;
        record.push_string(value);
        Ok(SteerlogResult::Success)
    })
}

/// Number of values in a record
///
/// # Safety
/// `record` must be a live record handle and `out_len` valid for writes.
#[no_mangle]
pub unsafe extern "C" fn steerlog_record_len(
    record: *const SteerlogRecord,
    out_len: *mut usize,
) -> SteerlogResult {
    ffi_boundary!({
        clear_last_error();
        let record = record_ref(record)?;
        validate_mut_ptr(out_len, "out_len")?;
        *out_len = record.len();
        Ok(SteerlogResult::Success)
    })
}

/// Data type code of the value at `index`
///
/// Codes: 0 integer, 1 float, 2 long long, 3 string.
///
/// # Safety
/// `record` must be a live record handle and `out_type` valid for writes.
#[no_mangle]
pub unsafe extern "C" fn steerlog_record_data_type(
    record: *const SteerlogRecord,
    index: usize,
    out_type: *mut c_int,
) -> SteerlogResult {
    ffi_boundary!({
        clear_last_error();
        let record = record_ref(record)?;
        validate_mut_ptr(out_type, "out_type")?;
        let value = record.value_at(index).map_err(map_core_error)?;
        *out_type = value.data_type().code();
        Ok(SteerlogResult::Success)
    })
}

/// Integer value at `index`
///
/// Fails with `TypeMismatch` if the value is not an integer.
///
/// # Safety
/// `record` must be a live record handle and `out_value` valid for writes.
#[no_mangle]
pub unsafe extern "C" fn steerlog_record_get_int(
    record: *const SteerlogRecord,
    index: usize,
    out_value: *mut c_int,
) -> SteerlogResult {
    ffi_boundary!({
        clear_last_error();
        let record = record_ref(record)?;
        validate_mut_ptr(out_value, "out_value")?;
        *out_value = record.int_at(index).map_err(map_core_error)?;
        Ok(SteerlogResult::Success)
    })
}

/// Float value at `index`
///
/// # Safety
/// `record` must be a live record handle and `out_value` valid for writes.
#[no_mangle]
pub unsafe extern "C" fn steerlog_record_get_float(
    record: *const SteerlogRecord,
    index: usize,
    out_value: *mut c_float,
) -> SteerlogResult {
    ffi_boundary!({
        clear_last_error();
        let record = record_ref(record)?;
        validate_mut_ptr(out_value, "out_value")?;
        *out_value = record.float_at(index).map_err(map_core_error)?;
        Ok(SteerlogResult::Success)
    })
}

/// 64-bit integer value at `index`
///
/// # Safety
/// `record` must be a live record handle and `out_value` valid for writes.
#[no_mangle]
pub unsafe extern "C" fn steerlog_record_get_long(
    record: *const SteerlogRecord,
    index: usize,
    out_value: *mut c_longlong,
) -> SteerlogResult {
    ffi_boundary!({
        clear_last_error();
        let record = record_ref(record)?;
        validate_mut_ptr(out_value, "out_value")?;
        *out_value = record.long_at(index).map_err(map_core_error)?;
        Ok(SteerlogResult::Success)
    })
}

/// String value at `index`
///
/// # Safety
/// `record` must be a live record handle and `out_value` valid for
/// writes. The returned string must be freed with `steerlog_string_free`.
#[no_mangle]
pub unsafe extern "C" fn steerlog_record_get_string(
    record: *const SteerlogRecord,
    index: usize,
    out_value: *mut *mut c_char,
) -> SteerlogResult {
    ffi_boundary!({
        clear_last_error();
        let record = record_ref(record)?;
        validate_mut_ptr(out_value, "out_value")?;
        let value = record.string_at(index).map_err(map_core_error)?;
        write_string(out_value, value)?;
        Ok(SteerlogResult::Success)
    })
}
