//! Polymer ("sludge") formation in the moderator circuit
//!
//! The polymer found in irradiated methane moderators is thought to form by
//! dimerisation of the methylene di-radical (:CH2), building (-CH2-)n chains.
//! The chain length is hard to measure but is not expected to exceed n = 20.
//! Unit density is assumed for the charge.
//!
//! polymer/MGy = moles/(MGy·g) × Mr
//! polymer/s   = polymer/MGy × D × Mass_CH4
//!
//! # Scientific References
//! - Evans, D. (1995). "Irradiation effects in liquid methane used as a neutron
//!   moderator". Cryogenics, 35(11), 763-766

use super::radiolysis::moles_per_mgy_per_gram;
use crate::core_types::constants::CH2_UNIT_MASS;

/// Molecular weight of a (-CH2-)n chain (g/mol)
///
/// Linear in n: Mr(n) = 14n. A zero-length chain weighs nothing.
#[inline]
pub fn molecular_weight(chain_length: u32) -> f64 {
    f64::from(CH2_UNIT_MASS) * f64::from(chain_length)
}

/// Polymer mass formed per second
///
/// # Arguments
/// * `g_value` - Polymer yield (mol/J)
/// * `molecular_weight` - Mr of the polymer (g/mol), see [`molecular_weight`]
/// * `dose_rate` - Absorbed dose rate (MGy/s)
/// * `ch4_mass` - Mass of methane (g)
///
/// # Returns
/// Polymer formation rate (g/s)
#[inline]
pub fn polymer_formation_rate(
    g_value: f64,
    molecular_weight: f64,
    dose_rate: f64,
    ch4_mass: f64,
) -> f64 {
    let polymer_per_mgy = moles_per_mgy_per_gram(g_value) * molecular_weight;
    polymer_per_mgy * dose_rate * ch4_mass
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_molecular_weight_is_linear() {
        assert_eq!(molecular_weight(1), 14.0);
        assert_eq!(molecular_weight(20), 280.0);
        for n in 0..100 {
            assert_eq!(molecular_weight(n), 14.0 * f64::from(n));
        }
    }

    #[test]
    fn test_reference_formation_rate() {
        let rate = polymer_formation_rate(0.22e-6, 300.0, 0.01, 169.6);
        let expected = ((0.22e-6 / 1000.0) * 1e6 * 300.0) * 0.01 * 169.6;
        assert_eq!(rate, expected);
        assert_relative_eq!(rate, 0.111936, max_relative = 1e-9);
    }

    #[test]
    fn test_zero_chain_and_zero_dose() {
        assert_eq!(polymer_formation_rate(0.22e-6, molecular_weight(0), 0.01, 169.6), 0.0);
        assert_eq!(polymer_formation_rate(0.22e-6, 300.0, 0.0, 169.6), 0.0);
    }
}
