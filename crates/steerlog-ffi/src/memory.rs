//! String ownership and last-error storage for the FFI boundary
//!
//! Strings handed to C are allocated here with `CString::into_raw` and
//! must come back through [`steerlog_string_free`]. Error messages are
//! kept per thread and stay valid until the next call on that thread.

use std::cell::RefCell;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

use crate::types::SteerlogResult;

thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

/// Set the last error message for the current thread
pub fn set_last_error<S: Into<String>>(err: S) {
    let message = CString::new(err.into())
        .unwrap_or_else(|_| CString::new("Error message contained null byte").unwrap_or_default());
    LAST_ERROR.with(|e| *e.borrow_mut() = Some(message));
}

/// Clear the last error message
pub fn clear_last_error() {
    LAST_ERROR.with(|e| *e.borrow_mut() = None);
}

/// Allocate a C string for return to the caller
///
/// Returns null and sets the last error if `s` contains a NUL byte.
pub fn allocate_string(s: &str) -> *mut c_char {
    match CString::new(s) {
        Ok(c_str) => c_str.into_raw(),
        Err(_) => {
            set_last_error("String contains null byte");
            ptr::null_mut()
        }
    }
}

/// Allocate `s` and store it through an out-parameter
///
/// # Safety
/// `out` must be valid for writes.
pub unsafe fn write_string(out: *mut *mut c_char, s: &str) -> Result<(), SteerlogResult> {
    let raw = allocate_string(s);
    if raw.is_null() {
        return Err(SteerlogResult::MemoryError);
    }
    *out = raw;
    Ok(())
}

/// Convert a C string to a Rust string
///
/// # Safety
/// The pointer must be null or a valid null-terminated C string
pub unsafe fn c_str_to_string(s: *const c_char) -> Result<String, SteerlogResult> {
    if s.is_null() {
        set_last_error("String argument is null");
        return Err(SteerlogResult::NullPointer);
    }

    match CStr::from_ptr(s).to_str() {
        Ok(str) => Ok(str.to_string()),
        Err(_) => {
            set_last_error("Invalid UTF-8 in input string");
            Err(SteerlogResult::Utf8Error)
        }
    }
}

/// Free a string returned by steerlog
///
/// # Safety
/// The pointer must be null or have been returned through a steerlog
/// out-parameter, and must not be freed twice.
#[no_mangle]
pub unsafe extern "C" fn steerlog_string_free(s: *mut c_char) {
    if s.is_null() {
        return;
    }
    drop(CString::from_raw(s));
}

/// Get the last error message for the calling thread
///
/// Returns null when no error is set.
///
/// # Safety
/// The returned pointer must NOT be freed and is only valid until the
/// next steerlog call on this thread.
#[no_mangle]
pub unsafe extern "C" fn steerlog_get_last_error() -> *const c_char {
    LAST_ERROR.with(|e| match &*e.borrow() {
        Some(err) => err.as_ptr(),
        None => ptr::null(),
    })
}

/// Clear the last error message
#[no_mangle]
pub extern "C" fn steerlog_clear_error() {
    clear_last_error();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_handling() {
        set_last_error("Test error");
        unsafe {
            let error = steerlog_get_last_error();
            assert!(!error.is_null());
            assert_eq!(CStr::from_ptr(error).to_str().unwrap(), "Test error");
        }

        clear_last_error();
        unsafe {
            assert!(steerlog_get_last_error().is_null());
        }
    }

    #[test]
    fn test_string_allocation() {
        let s = allocate_string("bacons,eggs");
        assert!(!s.is_null());
        unsafe {
            assert_eq!(CStr::from_ptr(s).to_str().unwrap(), "bacons,eggs");
            steerlog_string_free(s);
        }
    }

    #[test]
    fn test_nul_byte_is_rejected() {
        assert!(allocate_string("a\0b").is_null());
        unsafe {
            assert!(!steerlog_get_last_error().is_null());
        }
    }

    #[test]
    fn test_null_string_argument() {
        unsafe {
            assert_eq!(
                c_str_to_string(ptr::null()),
                Err(SteerlogResult::NullPointer)
            );
        }
    }
}
