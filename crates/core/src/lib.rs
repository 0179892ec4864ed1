//! Methane Moderator Radiolysis Core Library
//!
//! Radiation chemistry of liquid methane neutron moderators, following the
//! analysis of irradiation effects in the ISIS CH4 moderator (Evans 1995).
//! Irradiated methane produces radicals, molecular hydrogen and a (-CH2-)n
//! polymer "sludge" that builds up in the moderator circuit.
//!
//! ## Contents
//!
//! - Closed-form yield and production-rate formulas ([`physics`])
//! - Exact physical constants and unit wrappers ([`core_types`])
//! - Operating-point presets and production reports ([`scenario`])
//! - Loader for externally produced moderator data tables ([`data`])

// Core types and utilities
pub mod core_types;

pub mod data;
pub mod physics;
pub mod scenario;

// Re-export core types
pub use core_types::{
    CubicCentimetres, Grams, GramsPerMole, Kilograms, MegagraysPerSecond, MolesPerJoule,
    SpecificGravity,
};

pub use data::{read_moderator_table, ModeratorTable, TableError, TableResult};
pub use physics::{
    dose_rate_to_mev_per_second, g_value_to_molecules_per_mev, hydrogen_volume_rate_evans,
    hydrogen_volume_rate_from_energy, mev_per_gram_per_second_to_mgy_per_second,
    molecular_weight, moles_per_mgy_per_gram, polymer_formation_rate, radicals_per_mgy_per_gram,
    HydrogenMethod,
};
pub use scenario::{ConditionsError, ModeratorConditions, ProductionReport, YieldConstants};
