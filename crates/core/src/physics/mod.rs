//! Radiation chemistry of irradiated liquid methane
//!
//! Closed-form yield and production-rate formulas for a CH4 neutron moderator.
//! Every function here is pure: plain f64 in, f64 out, no validation, no state.
//!
//! The conversion chains are:
//! - G-value → moles/(MGy·g) → radicals/(MGy·g)
//! - G-value → moles/(MGy·g) → H2 volume rate (Evans)
//! - G-value → molecules/MeV, dose rate → MeV/s → H2 volume rate (energy deposition)
//! - chain length → Mr, G-value → polymer mass rate

pub mod dose;
pub mod hydrogen;
pub mod polymer;
pub mod radiolysis;

pub use dose::{dose_rate_to_mev_per_second, mev_per_gram_per_second_to_mgy_per_second};
pub use hydrogen::{
    g_value_to_molecules_per_mev, hydrogen_volume_rate_evans, hydrogen_volume_rate_from_energy,
    HydrogenMethod,
};
pub use polymer::{molecular_weight, polymer_formation_rate};
pub use radiolysis::{moles_per_mgy_per_gram, radicals_per_mgy_per_gram};
