//! C FFI for native hosts
//!
//! Each validator is exported under its exact name and takes the JSON call
//! envelope as a NUL-terminated string. The verdict JSON is returned as an
//! owned string that must be released with `polylint_string_free()`. A null
//! return means the call failed; `polylint_last_error()` says why.

use std::cell::RefCell;
use std::ffi::{CStr, CString, c_char};
use std::ptr;

use crate::registry::ValidatorKind;
use crate::validators::{call_file_content_validator, call_line_validator, call_path_validator};

thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

fn set_last_error(msg: &str) {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = CString::new(msg).ok();
    });
}

fn clear_last_error() {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = None;
    });
}

/// Shared body of the exported validators.
///
/// # Safety
/// `input` must be null or a valid null-terminated C string.
unsafe fn dispatch(
    input: *const c_char,
    call: fn(&str) -> crate::Result<String>,
) -> *mut c_char {
    if input.is_null() {
        set_last_error("input is null");
        return ptr::null_mut();
    }

    let input = match unsafe { CStr::from_ptr(input) }.to_str() {
        Ok(s) => s,
        Err(e) => {
            set_last_error(&format!("invalid UTF-8 in input: {}", e));
            return ptr::null_mut();
        }
    };

    match call(input).map(CString::new) {
        Ok(Ok(output)) => {
            clear_last_error();
            output.into_raw()
        }
        Ok(Err(e)) => {
            set_last_error(&format!("verdict contains NUL byte: {}", e));
            ptr::null_mut()
        }
        Err(e) => {
            set_last_error(&e.to_string());
            ptr::null_mut()
        }
    }
}

/// Get the last error message (thread-local)
///
/// # Safety
/// Returns a pointer to a thread-local string. The pointer is valid
/// until the next FFI call on the same thread.
#[unsafe(no_mangle)]
pub extern "C" fn polylint_last_error() -> *const c_char {
    LAST_ERROR.with(|e| {
        e.borrow()
            .as_ref()
            .map(|s| s.as_ptr())
            .unwrap_or(ptr::null())
    })
}

/// Free a verdict string returned by a validator.
///
/// # Safety
/// - `output` must be null or a pointer returned by one of the validators.
/// - The pointer must not be used after this call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn polylint_string_free(output: *mut c_char) {
    if !output.is_null() {
        // SAFETY: output was allocated by CString::into_raw in dispatch
        unsafe { drop(CString::from_raw(output)) };
    }
}

/// Number of validators exported by this library.
#[unsafe(no_mangle)]
pub extern "C" fn polylint_validator_count() -> usize {
    ValidatorKind::ALL.len()
}

/// Check whether an action on a path is admitted.
///
/// Returns `{"value":true}` or `{"value":false}`, or null on failure.
///
/// # Safety
/// - `input` must be a valid null-terminated C string.
/// - The returned pointer must be freed with `polylint_string_free()`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn path_validator(input: *const c_char) -> *mut c_char {
    unsafe { dispatch(input, call_path_validator) }
}

/// Check whether writing a whole file's content is admitted.
///
/// # Safety
/// - `input` must be a valid null-terminated C string.
/// - The returned pointer must be freed with `polylint_string_free()`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn file_content_validator(input: *const c_char) -> *mut c_char {
    unsafe { dispatch(input, call_file_content_validator) }
}

/// Check whether writing a single line is admitted.
///
/// # Safety
/// - `input` must be a valid null-terminated C string.
/// - The returned pointer must be freed with `polylint_string_free()`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn line_validator(input: *const c_char) -> *mut c_char {
    unsafe { dispatch(input, call_line_validator) }
}
