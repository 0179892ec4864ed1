//! Radical yield per unit dose
//!
//! Evans (1995) quotes the radical yield of irradiated liquid methane as a
//! G-value in mol/J. Since 1 Gy = 1 J/kg, dividing by 1000 gives moles per gram
//! per gray, and scaling by 1e6 gives moles per gram per megagray.
//!
//! # Scientific References
//! - Evans, D. (1995). "Irradiation effects in liquid methane used as a neutron
//!   moderator". Cryogenics, 35(11), 763-766

use crate::core_types::constants::{AVOGADRO, GRAMS_PER_KILOGRAM, GRAYS_PER_MEGAGRAY};

/// Moles produced per MGy of absorbed dose per gram of CH4
///
/// # Arguments
/// * `g_value` - Radiation-chemical yield (mol/J)
///
/// # Returns
/// Yield in mol/(MGy·g)
#[inline]
pub fn moles_per_mgy_per_gram(g_value: f64) -> f64 {
    let moles_per_gram_per_gray = g_value / GRAMS_PER_KILOGRAM;
    moles_per_gram_per_gray * GRAYS_PER_MEGAGRAY
}

/// Radicals produced per MGy per gram of CH4
///
/// # Arguments
/// * `moles_per_mgy_per_gram` - Output of [`moles_per_mgy_per_gram`]
///
/// # Returns
/// Radical count per MGy·g
#[inline]
pub fn radicals_per_mgy_per_gram(moles_per_mgy_per_gram: f64) -> f64 {
    moles_per_mgy_per_gram * AVOGADRO
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_evans_radical_g_value() {
        let moles = moles_per_mgy_per_gram(0.66e-6);
        assert_relative_eq!(moles, 6.6e-4, max_relative = 1e-12);

        let radicals = radicals_per_mgy_per_gram(moles);
        assert_relative_eq!(radicals, 3.975e20, max_relative = 1e-3);
    }

    #[test]
    fn test_formula_literal() {
        let g = 0.22e-6;
        assert_eq!(moles_per_mgy_per_gram(g), (g / 1000.0) * 1e6);
        assert_eq!(radicals_per_mgy_per_gram(2.0), 2.0 * 6.023e23);
    }

    #[test]
    fn test_zero_yield() {
        assert_eq!(moles_per_mgy_per_gram(0.0), 0.0);
        assert_eq!(radicals_per_mgy_per_gram(0.0), 0.0);
    }

    #[test]
    fn test_negative_input_passes_through() {
        assert!(moles_per_mgy_per_gram(-1e-6) < 0.0);
        assert!(moles_per_mgy_per_gram(f64::NAN).is_nan());
    }
}
