//! Physical constants used by the radiolysis formulas
//!
//! The literals are the rounded values used in the Evans (1995) analysis of the
//! ISIS methane moderator. They are kept exactly as published so results stay
//! numerically comparable with that work; do not replace them with CODATA values.
//!
//! # References
//! - Evans, D. (1995). "Irradiation effects in liquid methane used as a neutron
//!   moderator". Cryogenics, 35(11), 763-766

/// Avogadro's number (mol⁻¹)
pub const AVOGADRO: f64 = 6.023e23;

/// Molar volume of an ideal gas at STP (cm³/mol)
pub const STP_MOLAR_VOLUME_CM3: f64 = 2.24e4;

/// MeV per joule
pub const MEV_PER_JOULE: f64 = 6.242e12;

/// MeV deposited per second by 1 MGy/s in 1 kg of material
pub const MEV_PER_MGY_KILOGRAM: f64 = 6.242e18;

/// MGy/s produced by 1 MeV/g/s
pub const MGY_PER_MEV_PER_GRAM: f64 = 1.60218e-16;

/// Grams per kilogram (1 Gy = 1 J/kg)
pub const GRAMS_PER_KILOGRAM: f64 = 1000.0;

/// Grays per megagray
pub const GRAYS_PER_MEGAGRAY: f64 = 1e6;

/// Atomic mass of carbon used for the CH2 repeat unit (g/mol)
pub const CARBON_MASS: u32 = 12;

/// Mass of the two hydrogens in the CH2 repeat unit (g/mol)
pub const HYDROGEN_PAIR_MASS: u32 = 2;

/// Mass of one (-CH2-) repeat unit (g/mol)
pub const CH2_UNIT_MASS: u32 = CARBON_MASS + HYDROGEN_PAIR_MASS;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ch2_unit_mass() {
        assert_eq!(CH2_UNIT_MASS, 14);
    }

    #[test]
    fn test_mev_conversions_are_consistent() {
        // 1 MGy in 1 kg = 1e6 J, and 1 J = 6.242e12 MeV
        let mev = GRAYS_PER_MEGAGRAY * MEV_PER_JOULE;
        assert!((mev - MEV_PER_MGY_KILOGRAM).abs() / MEV_PER_MGY_KILOGRAM < 1e-12);

        // Forward is per kg, inverse is per g, so the product is g/kg up to literal rounding
        let round_trip = MEV_PER_MGY_KILOGRAM * MGY_PER_MEV_PER_GRAM;
        assert!((round_trip - GRAMS_PER_KILOGRAM).abs() / GRAMS_PER_KILOGRAM < 1e-3);
    }
}
