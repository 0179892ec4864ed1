use crate::error::{with_last_error_mut, ModeratorError, ModeratorErrorCode};
use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use crate::error::DefaultModeratorError;

/// Set the thread-local error message and code.
pub(crate) fn set_last_error(error: &impl ModeratorError) {
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Track an error by setting it in thread-local storage and returning its code.
#[inline]
pub(crate) fn track_error(error: &impl ModeratorError) -> ModeratorErrorCode {
    set_last_error(error);
    error.code()
}

/// Clear the thread-local error message and code.
/// Called on successful fallible operations.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = ModeratorErrorCode::Ok;
    });
}

/// Record the outcome of a fallible operation and map it to its code.
pub(crate) fn track_result<T>(
    result: Result<T, DefaultModeratorError>,
) -> Result<T, ModeratorErrorCode> {
    match result {
        Ok(value) => {
            clear_last_error();
            Ok(value)
        }
        Err(error) => Err(track_error(&error)),
    }
}

/// Borrow a C string argument as UTF-8.
///
/// # Safety
/// `ptr`, if non-null, must point to a valid null-terminated string that
/// outlives the returned reference.
pub(crate) unsafe fn str_from_ptr<'a>(
    ptr: *const c_char,
    param_name: &str,
) -> Result<&'a str, DefaultModeratorError> {
    if ptr.is_null() {
        return Err(DefaultModeratorError::null_pointer(param_name));
    }
    // SAFETY: non-null checked above; validity is the caller's contract.
    let cstr = unsafe { CStr::from_ptr(ptr) };
    cstr.to_str()
        .map_err(|_| DefaultModeratorError::invalid_utf8(param_name))
}
