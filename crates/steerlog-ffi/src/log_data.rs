//! Loaded log data handles

use std::os::raw::c_char;
use std::ptr;

use steerlog_core::LogData;

use crate::error::{map_core_error, validate_mut_ptr, validate_ptr};
use crate::memory::{c_str_to_string, clear_last_error, set_last_error};
use crate::types::{SteerlogLogData, SteerlogLogger, SteerlogRecord, SteerlogResult};

unsafe fn data_ref<'a>(data: *const SteerlogLogData) -> Result<&'a LogData, SteerlogResult> {
    validate_ptr(data, "log_data")?;
    Ok(&*(data as *const LogData))
}

/// Load a whole log file
///
/// # Safety
/// `path` must be a valid null-terminated UTF-8 string and `out_data`
/// valid for writes. The result must be freed with
/// `steerlog_log_data_free`.
#[no_mangle]
pub unsafe extern "C" fn steerlog_log_data_load(
    path: *const c_char,
    out_data: *mut *mut SteerlogLogData,
) -> SteerlogResult {
    ffi_boundary!({
        clear_last_error();
        validate_mut_ptr(out_data, "out_data")?;
        let path = c_str_to_string(path)?;
        let data = LogData::load(&path).map_err(map_core_error)?;
        *out_data = Box::into_raw(Box::new(data)) as *mut SteerlogLogData;
        Ok(SteerlogResult::Success)
    })
}

/// Free loaded log data, including its records and logger
///
/// # Safety
/// The pointer must be null or come from `steerlog_log_data_load`, and
/// must not be freed twice.
#[no_mangle]
pub unsafe extern "C" fn steerlog_log_data_free(data: *mut SteerlogLogData) {
    if data.is_null() {
        return;
    }
    drop(Box::from_raw(data as *mut LogData));
}

/// Number of records
///
/// # Safety
/// `data` must be a live log data handle and `out_len` valid for writes.
#[no_mangle]
pub unsafe extern "C" fn steerlog_log_data_len(
    data: *const SteerlogLogData,
    out_len: *mut usize,
) -> SteerlogResult {
    ffi_boundary!({
        clear_last_error();
        let data = data_ref(data)?;
        validate_mut_ptr(out_len, "out_len")?;
        *out_len = data.len();
        Ok(SteerlogResult::Success)
    })
}

/// Borrow the record at `index`
///
/// Returns null (with the last error set) when out of range. The record
/// belongs to `data`; do not free it or use it after `data` is freed.
///
/// # Safety
/// `data` must be null or a live log data handle.
#[no_mangle]
pub unsafe extern "C" fn steerlog_log_data_record_at(
    data: *const SteerlogLogData,
    index: usize,
) -> *const SteerlogRecord {
    clear_last_error();
    let Ok(data) = data_ref(data) else {
        return ptr::null();
    };
    match data.record_at(index) {
        Some(record) => record as *const _ as *const SteerlogRecord,
        None => {
            set_last_error(format!(
                "Record index {} out of range (length {})",
                index,
                data.len()
            ));
            ptr::null()
        }
    }
}

/// Borrow the logger describing the records
///
/// The logger belongs to `data`; do not free it or use it after `data`
/// is freed.
///
/// # Safety
/// `data` must be null or a live log data handle.
#[no_mangle]
pub unsafe extern "C" fn steerlog_log_data_logger(
    data: *const SteerlogLogData,
) -> *const SteerlogLogger {
    clear_last_error();
    match data_ref(data) {
        Ok(data) => data.logger() as *const _ as *const SteerlogLogger,
        Err(_) => ptr::null(),
    }
}
