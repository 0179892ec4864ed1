//! Semantic unit types for moderator quantities
//!
//! Newtype wrappers for the physical quantities that describe a moderator
//! operating point, so a dose rate cannot be passed where a volume is expected
//! when building [`ModeratorConditions`](crate::scenario::ModeratorConditions).
//!
//! # Design Philosophy
//! - All types wrap f64; the formulas they feed are evaluated in double precision
//! - No validation: negative or non-finite values pass straight through, the
//!   radiolysis formulas accept whatever the caller measured
//! - `Deref<Target = f64>` so wrapped values drop into the free formula functions
//! - Total ordering via `total_cmp` (NaN sorts above every value)
//! - Serde support for loading conditions from JSON
//!
//! # Usage
//! ```
//! use moderator_chem_core::core_types::units::{CubicCentimetres, SpecificGravity};
//!
//! let volume = CubicCentimetres::new(400.0);
//! let mass = volume.mass_at(SpecificGravity::new(0.43));
//! assert!((*mass - 172.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Deref, Mul, Sub};

use super::constants::{CH2_UNIT_MASS, GRAMS_PER_KILOGRAM};

/// Shared boilerplate for an f64 quantity newtype: ordering, deref, raw
/// conversions, scalar multiplication and same-unit addition.
macro_rules! scalar_unit {
    ($name:ident, $symbol:literal) => {
        impl Eq for $name {}

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> Ordering {
                self.0.total_cmp(&other.0)
            }
        }

        impl Deref for $name {
            type Target = f64;
            #[inline]
            fn deref(&self) -> &f64 {
                &self.0
            }
        }

        impl $name {
            /// Wrap a raw value (no validation)
            #[inline]
            #[must_use]
            pub const fn new(value: f64) -> Self {
                $name(value)
            }

            /// Get the raw f64 value
            #[inline]
            #[must_use]
            pub const fn value(self) -> f64 {
                self.0
            }
        }

        impl From<f64> for $name {
            fn from(v: f64) -> Self {
                $name(v)
            }
        }

        impl From<$name> for f64 {
            fn from(v: $name) -> f64 {
                v.0
            }
        }

        impl Add for $name {
            type Output = $name;
            fn add(self, rhs: $name) -> $name {
                $name(self.0 + rhs.0)
            }
        }

        impl Sub for $name {
            type Output = $name;
            fn sub(self, rhs: $name) -> $name {
                $name(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $name {
            type Output = $name;
            fn mul(self, rhs: f64) -> $name {
                $name(self.0 * rhs)
            }
        }

        impl PartialEq<f64> for $name {
            fn eq(&self, other: &f64) -> bool {
                self.0 == *other
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{:e} {}", self.0, $symbol)
            }
        }
    };
}

// ============================================================================
// RADIATION CHEMISTRY
// ============================================================================

/// Radiation-chemical yield (G-value) in mol/J
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct MolesPerJoule(f64);

scalar_unit!(MolesPerJoule, "mol/J");

/// Absorbed dose rate in MGy/s
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct MegagraysPerSecond(f64);

scalar_unit!(MegagraysPerSecond, "MGy/s");

impl MegagraysPerSecond {
    /// No irradiation (beam off)
    pub const ZERO: MegagraysPerSecond = MegagraysPerSecond(0.0);
}

// ============================================================================
// MASS AND VOLUME
// ============================================================================

/// Mass in grams
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct Grams(f64);

scalar_unit!(Grams, "g");

impl Grams {
    /// Convert to kilograms
    #[inline]
    #[must_use]
    pub fn to_kilograms(self) -> Kilograms {
        Kilograms(self.0 / GRAMS_PER_KILOGRAM)
    }
}

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct Kilograms(f64);

scalar_unit!(Kilograms, "kg");

impl Kilograms {
    /// Convert to grams
    #[inline]
    #[must_use]
    pub fn to_grams(self) -> Grams {
        Grams(self.0 * GRAMS_PER_KILOGRAM)
    }
}

impl From<Grams> for Kilograms {
    fn from(g: Grams) -> Kilograms {
        g.to_kilograms()
    }
}

impl From<Kilograms> for Grams {
    fn from(kg: Kilograms) -> Grams {
        kg.to_grams()
    }
}

/// Volume in cm³
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct CubicCentimetres(f64);

scalar_unit!(CubicCentimetres, "cm3");

impl CubicCentimetres {
    /// Mass of this volume at the given specific gravity (water = 1 g/cm³)
    #[inline]
    #[must_use]
    pub fn mass_at(self, specific_gravity: SpecificGravity) -> Grams {
        Grams(self.0 * specific_gravity.0)
    }
}

/// Specific gravity (dimensionless, relative to water)
///
/// Used directly as a density in g/cm³.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct SpecificGravity(f64);

scalar_unit!(SpecificGravity, "SG");

impl SpecificGravity {
    /// Liquid methane near its boiling point
    pub const LIQUID_METHANE: SpecificGravity = SpecificGravity(0.43);
}

// ============================================================================
// POLYMER
// ============================================================================

/// Molecular weight in g/mol
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct GramsPerMole(f64);

scalar_unit!(GramsPerMole, "g/mol");

impl GramsPerMole {
    /// Molecular weight of a (-CH2-)n chain
    #[inline]
    #[must_use]
    pub fn of_ch2_chain(chain_length: u32) -> Self {
        GramsPerMole(f64::from(CH2_UNIT_MASS) * f64::from(chain_length))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grams_to_kilograms() {
        let g = Grams::new(169.6);
        let kg = g.to_kilograms();
        assert!((*kg - 0.1696).abs() < 1e-12);
        assert!((*kg.to_grams() - 169.6).abs() < 1e-9);
    }

    #[test]
    fn test_volume_mass_at_specific_gravity() {
        let mass = CubicCentimetres::new(400.0).mass_at(SpecificGravity::LIQUID_METHANE);
        assert!((mass.value() - 172.0).abs() < 1e-9);
    }

    #[test]
    fn test_ch2_chain_weight() {
        assert_eq!(GramsPerMole::of_ch2_chain(1), 14.0);
        assert_eq!(GramsPerMole::of_ch2_chain(20), 280.0);
        assert_eq!(GramsPerMole::of_ch2_chain(0), 0.0);
    }

    #[test]
    fn test_no_validation_on_negative_values() {
        let dose = MegagraysPerSecond::new(-0.01);
        assert_eq!(dose, -0.01);
    }

    #[test]
    fn test_total_ordering_puts_nan_last() {
        let mut values = [Grams::new(f64::NAN), Grams::new(2.0), Grams::new(1.0)];
        values.sort();
        assert_eq!(values[0], 1.0);
        assert_eq!(values[1], 2.0);
        assert!(values[2].is_nan());
    }

    #[test]
    fn test_display_includes_unit() {
        assert_eq!(MegagraysPerSecond::new(0.01).to_string(), "1e-2 MGy/s");
        assert_eq!(GramsPerMole::new(280.0).to_string(), "2.8e2 g/mol");
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&Grams::new(169.6)).unwrap();
        assert_eq!(json, "169.6");
        let back: Grams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Grams::new(169.6));
    }
}
