//! C ABI for the methane moderator radiolysis library.
//!
//! - Formula functions: plain `f64` in and out, never fail
//! - Table loading: opaque `ModeratorTableHandle`, `ModeratorErrorCode`
//!   results and per-thread last-error message
//!
//! The C header `ModeratorChemFFI.h` is generated at build time by cbindgen.

mod calculator;
mod error;
mod helpers;
mod table;

pub use calculator::*;
pub use error::{moderator_get_last_error, moderator_get_last_error_code, ModeratorErrorCode};
pub use table::*;
