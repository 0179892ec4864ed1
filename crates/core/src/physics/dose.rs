//! Dose-rate unit conversions
//!
//! Two conversions between absorbed dose and deposited energy:
//! - MGy/s in a known mass of CH4 → MeV/s (used by the energy-deposition
//!   hydrogen estimate)
//! - MeV/g/s (e.g. a transport-code energy deposition tally) → MGy/s
//!
//! The first conversion's literal, 6.242e18, is MeV/s per MGy/s per kilogram,
//! so its mass argument is in kg.

use crate::core_types::constants::{MEV_PER_MGY_KILOGRAM, MGY_PER_MEV_PER_GRAM};

/// Energy deposited per second in the moderator charge
///
/// # Arguments
/// * `dose_rate` - Absorbed dose rate (MGy/s)
/// * `ch4_mass_kg` - Mass of methane (kg)
///
/// # Returns
/// Deposited energy rate (MeV/s)
#[inline]
pub fn dose_rate_to_mev_per_second(dose_rate: f64, ch4_mass_kg: f64) -> f64 {
    dose_rate * ch4_mass_kg * MEV_PER_MGY_KILOGRAM
}

/// Convert a specific energy deposition rate to an absorbed dose rate
///
/// # Arguments
/// * `mev_per_gram_per_second` - Energy deposited per gram per second (MeV/g/s)
///
/// # Returns
/// Absorbed dose rate (MGy/s)
#[inline]
pub fn mev_per_gram_per_second_to_mgy_per_second(mev_per_gram_per_second: f64) -> f64 {
    mev_per_gram_per_second * MGY_PER_MEV_PER_GRAM
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_dose_conversion() {
        // 0.01 MGy/s into the 169.6 g charge
        let mev = dose_rate_to_mev_per_second(0.01, 0.1696);
        assert_eq!(mev, 0.01 * 0.1696 * 6.242e18);
        assert_relative_eq!(mev, 1.0586432e16, max_relative = 1e-9);
    }

    #[test]
    fn test_energy_rate_to_dose_rate() {
        assert_eq!(mev_per_gram_per_second_to_mgy_per_second(1.0), 1.60218e-16);

        // 1e14 MeV/g/s is about 0.016 MGy/s
        let dose = mev_per_gram_per_second_to_mgy_per_second(1e14);
        assert_relative_eq!(dose, 0.0160218, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_dose() {
        assert_eq!(dose_rate_to_mev_per_second(0.0, 0.1696), 0.0);
        assert_eq!(mev_per_gram_per_second_to_mgy_per_second(0.0), 0.0);
    }
}
