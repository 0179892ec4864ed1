//! Moderator data tables behind an opaque handle.

use moderator_chem_core::ModeratorTable;
use std::os::raw::c_char;
use std::ptr;

use crate::error::{DefaultModeratorError, ModeratorErrorCode};
use crate::helpers::{str_from_ptr, track_error, track_result};

/// Opaque handle to a loaded moderator data table.
pub struct ModeratorTableHandle {
    table: ModeratorTable,
}

/// Load a moderator data file, dropping its exported index column.
///
/// Parameters
/// - `path`: null-terminated UTF-8 file path.
/// - `out_table`: receives the loaded table on success, null on failure.
///
/// Returns
/// - `ModeratorErrorCode::Ok` (0) - success, `out_table` owns a table
/// - `NullPointer` / `InvalidString` - bad arguments
/// - `FileNotReadable`, `MalformedTable`, `MissingIndexColumn` - load failures
///
/// Call `moderator_get_last_error()` for the error description.
///
/// # Safety
/// - `path` must be null or a valid null-terminated string.
/// - `out_table` must be null or point to writable memory.
/// - The caller owns the table and MUST call `moderator_table_destroy` exactly once.
#[no_mangle]
pub unsafe extern "C" fn moderator_table_load(
    path: *const c_char,
    out_table: *mut *mut ModeratorTableHandle,
) -> ModeratorErrorCode {
    if out_table.is_null() {
        return track_error(&DefaultModeratorError::null_pointer("out_table"));
    }

    // SAFETY: `path` validity is the caller's contract.
    let loaded = unsafe { str_from_ptr(path, "path") }
        .and_then(|path| ModeratorTable::load(path).map_err(DefaultModeratorError::from));

    match track_result(loaded) {
        Ok(table) => {
            unsafe {
                *out_table = Box::into_raw(Box::new(ModeratorTableHandle { table }));
            }
            ModeratorErrorCode::Ok
        }
        Err(code) => {
            unsafe {
                // Set to null on error (per documentation contract)
                *out_table = ptr::null_mut();
            }
            code
        }
    }
}

/// Number of data rows, or 0 if `table` is null.
///
/// # Safety
/// `table` must be null or a live pointer from `moderator_table_load`.
#[no_mangle]
pub unsafe extern "C" fn moderator_table_row_count(table: *const ModeratorTableHandle) -> usize {
    // SAFETY: caller contract.
    unsafe { table.as_ref() }.map_or(0, |handle| handle.table.row_count())
}

/// Number of columns (index column excluded), or 0 if `table` is null.
///
/// # Safety
/// `table` must be null or a live pointer from `moderator_table_load`.
#[no_mangle]
pub unsafe extern "C" fn moderator_table_column_count(table: *const ModeratorTableHandle) -> usize {
    // SAFETY: caller contract.
    unsafe { table.as_ref() }.map_or(0, |handle| handle.table.column_count())
}

/// Copy one column, parsed as numbers, into a caller-owned buffer.
///
/// `out_len` always receives the column length when the column parses, so a
/// caller can size the buffer with a first call passing `capacity = 0`.
/// Blank cells are written as NaN.
///
/// Returns `Ok`, `NullPointer`, `InvalidString`, `UnknownColumn`,
/// `NonNumeric` or `BufferTooSmall`.
///
/// # Safety
/// - `table` must be a live pointer from `moderator_table_load`.
/// - `name` must be a valid null-terminated string.
/// - `out_values` must point to at least `capacity` writable f64 values
///   (may be null when `capacity` is 0).
/// - `out_len` must point to writable memory.
#[no_mangle]
pub unsafe extern "C" fn moderator_table_column_f64(
    table: *const ModeratorTableHandle,
    name: *const c_char,
    out_values: *mut f64,
    capacity: usize,
    out_len: *mut usize,
) -> ModeratorErrorCode {
    // SAFETY: caller contract.
    let Some(handle) = (unsafe { table.as_ref() }) else {
        return track_error(&DefaultModeratorError::null_pointer("table"));
    };
    if out_len.is_null() {
        return track_error(&DefaultModeratorError::null_pointer("out_len"));
    }

    let values = unsafe { str_from_ptr(name, "name") }
        .and_then(|name| handle.table.column_f64(name).map_err(DefaultModeratorError::from));
    let values = match track_result(values) {
        Ok(values) => values,
        Err(code) => return code,
    };

    unsafe {
        *out_len = values.len();
    }
    if values.len() > capacity {
        return track_error(&DefaultModeratorError::buffer_too_small(values.len(), capacity));
    }
    if !values.is_empty() {
        if out_values.is_null() {
            return track_error(&DefaultModeratorError::null_pointer("out_values"));
        }
        // SAFETY: `out_values` holds at least `capacity >= values.len()` elements.
        unsafe {
            ptr::copy_nonoverlapping(values.as_ptr(), out_values, values.len());
        }
    }

    ModeratorErrorCode::Ok
}

/// Free a table returned by `moderator_table_load`. Null is a no-op.
///
/// # Safety
/// - The pointer MUST have been created by `moderator_table_load` and not freed already.
/// - The caller must not use the pointer again.
#[no_mangle]
pub unsafe extern "C" fn moderator_table_destroy(table: *mut ModeratorTableHandle) {
    if table.is_null() {
        return;
    }

    // SAFETY: created by `Box::into_raw` in `moderator_table_load`.
    unsafe {
        drop(Box::from_raw(table));
    }
}
