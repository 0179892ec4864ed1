//! Core types: physical constants and unit wrappers

pub mod constants;
pub mod units;

pub use constants::*;
pub use units::*;
