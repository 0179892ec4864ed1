//! Radiolysis formulas exported with C linkage.
//!
//! Thin wrappers: same arguments, same units, same results as the functions
//! in `moderator_chem_core::physics`. None of them can fail.

use moderator_chem_core::physics;

/// Moles per MGy per gram of CH4 for a G-value in mol/J.
#[no_mangle]
pub extern "C" fn moderator_moles_per_mgy_per_gram(g_value: f64) -> f64 {
    physics::moles_per_mgy_per_gram(g_value)
}

/// Radicals per MGy per gram of CH4.
#[no_mangle]
pub extern "C" fn moderator_radicals_per_mgy_per_gram(moles_per_mgy_per_gram: f64) -> f64 {
    physics::radicals_per_mgy_per_gram(moles_per_mgy_per_gram)
}

/// H2 volume rate (cm³/s at STP), Evans method.
///
/// Argument order: yield (mol/(MGy·g)), CH4 volume (cm³), dose rate (MGy/s),
/// specific gravity.
#[no_mangle]
pub extern "C" fn moderator_hydrogen_volume_rate_evans(
    moles_per_mgy_per_gram: f64,
    ch4_volume: f64,
    dose_rate: f64,
    specific_gravity: f64,
) -> f64 {
    physics::hydrogen_volume_rate_evans(moles_per_mgy_per_gram, ch4_volume, dose_rate, specific_gravity)
}

/// G-value conversion from mol/J to molecules/MeV.
#[no_mangle]
pub extern "C" fn moderator_g_value_to_molecules_per_mev(g_value: f64) -> f64 {
    physics::g_value_to_molecules_per_mev(g_value)
}

/// Energy deposited per second (MeV/s) for a dose rate (MGy/s) and CH4 mass (kg).
#[no_mangle]
pub extern "C" fn moderator_dose_rate_to_mev_per_second(dose_rate: f64, ch4_mass_kg: f64) -> f64 {
    physics::dose_rate_to_mev_per_second(dose_rate, ch4_mass_kg)
}

/// H2 volume rate (cm³/s at STP) from deposited energy (MeV/s) and yield (molecules/MeV).
#[no_mangle]
pub extern "C" fn moderator_hydrogen_volume_rate_from_energy(
    dose_mev_per_second: f64,
    g_molecules_per_mev: f64,
) -> f64 {
    physics::hydrogen_volume_rate_from_energy(dose_mev_per_second, g_molecules_per_mev)
}

/// Molecular weight (g/mol) of a (-CH2-)n chain.
#[no_mangle]
pub extern "C" fn moderator_molecular_weight(chain_length: u32) -> f64 {
    physics::molecular_weight(chain_length)
}

/// Polymer formation rate (g/s).
///
/// Argument order: G-value (mol/J), Mr (g/mol), dose rate (MGy/s), CH4 mass (g).
#[no_mangle]
pub extern "C" fn moderator_polymer_formation_rate(
    g_value: f64,
    molecular_weight: f64,
    dose_rate: f64,
    ch4_mass: f64,
) -> f64 {
    physics::polymer_formation_rate(g_value, molecular_weight, dose_rate, ch4_mass)
}

/// Absorbed dose rate (MGy/s) from an energy deposition rate (MeV/g/s).
#[no_mangle]
pub extern "C" fn moderator_mev_per_gram_per_second_to_mgy_per_second(value: f64) -> f64 {
    physics::mev_per_gram_per_second_to_mgy_per_second(value)
}
