use moderator_chem_core::TableError;
use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

/// Common interface for FFI error types.
///
/// - `code()` - Returns the error code to be passed across FFI boundary
/// - `msg()` - Returns the error message for diagnostic purposes
pub(crate) trait ModeratorError {
    /// Returns the error code to be returned across the FFI boundary.
    fn code(&self) -> ModeratorErrorCode;

    /// Returns the human-readable error message.
    fn msg(&self) -> &str;
}

/// Default implementation of `ModeratorError` for the FFI error scenarios.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultModeratorError {
    code: ModeratorErrorCode,
    msg: String,
}

impl DefaultModeratorError {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"path"`, `"out_table"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: ModeratorErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }

    /// Create error for a C string argument that is not valid UTF-8.
    pub fn invalid_utf8(param_name: &str) -> Self {
        Self {
            code: ModeratorErrorCode::InvalidString,
            msg: format!("Parameter '{param_name}' is not valid UTF-8"),
        }
    }

    /// Create error for an output buffer too small for the result.
    pub fn buffer_too_small(required: usize, capacity: usize) -> Self {
        Self {
            code: ModeratorErrorCode::BufferTooSmall,
            msg: format!("Output buffer holds {capacity} values, {required} required"),
        }
    }
}

impl ModeratorError for DefaultModeratorError {
    fn code(&self) -> ModeratorErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

impl From<TableError> for DefaultModeratorError {
    fn from(error: TableError) -> Self {
        let code = match error {
            TableError::Io { .. } => ModeratorErrorCode::FileNotReadable,
            TableError::Csv(_) => ModeratorErrorCode::MalformedTable,
            TableError::MissingIndexColumn => ModeratorErrorCode::MissingIndexColumn,
            TableError::UnknownColumn(_) => ModeratorErrorCode::UnknownColumn,
            TableError::NonNumeric { .. } => ModeratorErrorCode::NonNumeric,
        };
        Self {
            code,
            msg: error.to_string(),
        }
    }
}

/// FFI error codes returned by moderator functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeratorErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,

    /// A C string argument is not valid UTF-8.
    InvalidString = 2,

    /// The table file does not exist or cannot be read.
    FileNotReadable = 3,

    /// The table file could not be parsed (e.g. rows of unequal length).
    MalformedTable = 4,

    /// The table has no exported index column to drop.
    MissingIndexColumn = 5,

    /// No column with the requested name.
    UnknownColumn = 6,

    /// A cell in the requested column is not a number.
    NonNumeric = 7,

    /// The caller's output buffer is too small.
    BufferTooSmall = 8,
}

impl From<DefaultModeratorError> for ModeratorErrorCode {
    fn from(error: DefaultModeratorError) -> Self {
        error.code
    }
}

thread_local! {
    /// Thread-local storage for the most recent FFI error (C string, error code).
    /// The CString is stored to prevent memory leaks when returning raw pointers via FFI.
    static LAST_ERROR: RefCell<(Option<CString>, ModeratorErrorCode)> = const { RefCell::new((None, ModeratorErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, ModeratorErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, ModeratorErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if an error occurred.
/// - `null` if the last call succeeded or the message cannot be converted to a C string.
///
/// # Lifetime
/// The returned pointer is valid until the next FFI call on this thread that
/// sets or clears the error.
///
/// **DO NOT FREE THIS POINTER** - it is managed internally.
///
/// Example:
/// ```c
/// ModeratorTableHandle* table = NULL;
/// if (moderator_table_load("run42.csv", &table) != Ok) {
///     const char* error = moderator_get_last_error();
///     if (error) {
///         fprintf(stderr, "load failed: %s\n", error);
///     }
/// }
/// ```
#[no_mangle]
pub extern "C" fn moderator_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code.
///
/// Returns `ModeratorErrorCode::Ok` (0) if the last fallible call on this
/// thread succeeded.
#[no_mangle]
pub extern "C" fn moderator_get_last_error_code() -> ModeratorErrorCode {
    with_last_error(|(_cstring, code)| *code)
}
