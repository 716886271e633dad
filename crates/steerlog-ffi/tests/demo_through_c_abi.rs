//! The breakfast demo driven through the C ABI, call for call

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;
use steerlog_ffi::*;

#[test]
fn test_breakfast_demo() {
    unsafe {
        let logger = steerlog_logger_new();
        for name in ["bacons", "eggs", "toasts"] {
            let name = CString::new(name).unwrap();
            assert_eq!(
                steerlog_logger_add_integer_field(logger, name.as_ptr()),
                SteerlogResult::Success
            );
        }

        let record = steerlog_record_new();
        assert_eq!(steerlog_record_add_int(record, 3), SteerlogResult::Success);
        assert_eq!(steerlog_record_add_int(record, 30), SteerlogResult::Success);
        assert_eq!(steerlog_record_add_float(record, 2.3), SteerlogResult::Success);

        let mut out: *mut c_char = ptr::null_mut();
        assert_eq!(
            steerlog_logger_render(logger, record, &mut out),
            SteerlogResult::Success
        );
        let text = CStr::from_ptr(out).to_str().unwrap().to_owned();
        steerlog_string_free(out);

        assert!(!text.is_empty());
        assert_eq!(text, "bacons,eggs,toasts\n3,30,2.3");

        steerlog_record_free(record);
        steerlog_logger_free(logger);
    }
}

#[test]
fn test_render_with_nothing_declared() {
    unsafe {
        let logger = steerlog_logger_new();
        let record = steerlog_record_new();

        let mut out: *mut c_char = ptr::null_mut();
        assert_eq!(
            steerlog_logger_render(logger, record, &mut out),
            SteerlogResult::Success
        );
        assert_eq!(CStr::from_ptr(out).to_bytes(), b"\n");

        steerlog_string_free(out);
        steerlog_record_free(record);
        steerlog_logger_free(logger);
    }
}
