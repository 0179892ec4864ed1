//! Hydrogen gas production in an irradiated methane moderator
//!
//! Radiolysis of CH4 yields atomic hydrogen, which abstracts hydrogen from
//! methane to form H2 and the methylene di-radical. Two independent estimates
//! of the H2 volume rate are provided; neither is treated as authoritative and
//! callers pick one through [`HydrogenMethod`].
//!
//! # Evans method
//! Vol_STP = moles/(MGy·g) × 2.24e4
//! Vol_H2  = Vol_STP × Vol_CH4 × SG × D
//!
//! # Energy-deposition method
//! G (molecules/MeV) = G (mol/J) × 6.023e23 / 6.242e12
//! D (MeV/s)         = D (MGy/s) × Mass_CH4 (kg) × 6.242e18
//! Vol_H2            = D × G × 2.24e4 / 6.023e23
//!
//! # Scientific References
//! - Evans, D. (1995). "Irradiation effects in liquid methane used as a neutron
//!   moderator". Cryogenics, 35(11), 763-766
//! - U.S. NRC (2015). "Hydrogen Gas Generation Analysis", ML15351A331

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::dose::dose_rate_to_mev_per_second;
use super::radiolysis::moles_per_mgy_per_gram;
use crate::core_types::constants::{AVOGADRO, MEV_PER_JOULE, STP_MOLAR_VOLUME_CM3};
use crate::scenario::ModeratorConditions;

/// H2 volume rate at STP, Evans method
///
/// Specific gravity stands in for density (g/cm³), so volume × SG is the mass
/// of the charge in grams.
///
/// # Arguments
/// * `moles_per_mgy_per_gram` - Yield in mol/(MGy·g)
/// * `ch4_volume` - Methane volume (cm³)
/// * `dose_rate` - Absorbed dose rate (MGy/s)
/// * `specific_gravity` - Methane specific gravity
///
/// # Returns
/// H2 production (cm³/s at STP)
#[inline]
pub fn hydrogen_volume_rate_evans(
    moles_per_mgy_per_gram: f64,
    ch4_volume: f64,
    dose_rate: f64,
    specific_gravity: f64,
) -> f64 {
    let stp_volume = moles_per_mgy_per_gram * STP_MOLAR_VOLUME_CM3;
    stp_volume * ch4_volume * specific_gravity * dose_rate
}

/// Convert a G-value from mol/J to molecules/MeV
#[inline]
pub fn g_value_to_molecules_per_mev(g_value: f64) -> f64 {
    g_value * (AVOGADRO / MEV_PER_JOULE)
}

/// H2 volume rate at STP from deposited energy
///
/// # Arguments
/// * `dose_mev_per_second` - Energy deposited in the charge (MeV/s), see
///   [`dose_rate_to_mev_per_second`]
/// * `g_molecules_per_mev` - Yield (molecules/MeV), see [`g_value_to_molecules_per_mev`]
///
/// # Returns
/// H2 production (cm³/s at STP)
#[inline]
pub fn hydrogen_volume_rate_from_energy(dose_mev_per_second: f64, g_molecules_per_mev: f64) -> f64 {
    (dose_mev_per_second * g_molecules_per_mev * STP_MOLAR_VOLUME_CM3) / AVOGADRO
}

/// Which hydrogen estimate to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HydrogenMethod {
    /// Yield per MGy·g scaled by charge volume, SG and dose rate
    #[default]
    Evans,
    /// Deposited energy (MeV/s) times yield in molecules/MeV
    EnergyDeposition,
}

impl HydrogenMethod {
    /// Both methods, Evans first
    pub const ALL: [HydrogenMethod; 2] = [HydrogenMethod::Evans, HydrogenMethod::EnergyDeposition];

    /// H2 volume rate (cm³/s) for a raw G-value (mol/J) under the given conditions
    ///
    /// Evans uses the charge volume and SG; the energy-deposition method uses
    /// the charge mass.
    pub fn volume_rate(self, g_value: f64, conditions: &ModeratorConditions) -> f64 {
        match self {
            HydrogenMethod::Evans => hydrogen_volume_rate_evans(
                moles_per_mgy_per_gram(g_value),
                *conditions.ch4_volume,
                *conditions.dose_rate,
                *conditions.specific_gravity,
            ),
            HydrogenMethod::EnergyDeposition => {
                let dose = dose_rate_to_mev_per_second(
                    *conditions.dose_rate,
                    *conditions.ch4_mass.to_kilograms(),
                );
                hydrogen_volume_rate_from_energy(dose, g_value_to_molecules_per_mev(g_value))
            }
        }
    }

    /// Short name used on the command line and in reports
    pub fn name(self) -> &'static str {
        match self {
            HydrogenMethod::Evans => "evans",
            HydrogenMethod::EnergyDeposition => "energy-deposition",
        }
    }
}

impl fmt::Display for HydrogenMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HydrogenMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "evans" | "a" => Ok(HydrogenMethod::Evans),
            "energy-deposition" | "energy" | "b" => Ok(HydrogenMethod::EnergyDeposition),
            other => Err(format!("unknown hydrogen method '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_evans_literal_recomputation() {
        let rate = hydrogen_volume_rate_evans(6.6e-10, 400.0, 0.01, 0.43);
        let expected = (6.6e-10 * 2.24e4) * 400.0 * 0.43 * 0.01;
        assert_relative_eq!(rate, expected, max_relative = 1e-12);
        assert_relative_eq!(rate, 2.543e-5, max_relative = 1e-3);
    }

    #[test]
    fn test_evans_reference_point() {
        // Evans radical G-value at the ISIS reference point
        let rate = hydrogen_volume_rate_evans(moles_per_mgy_per_gram(0.66e-6), 400.0, 0.01, 0.43);
        assert_relative_eq!(rate, 25.4285, max_relative = 1e-4);
    }

    #[test]
    fn test_g_value_conversion() {
        let g = g_value_to_molecules_per_mev(0.66e-6);
        assert_eq!(g, 0.66e-6 * (6.023e23 / 6.242e12));
        assert_relative_eq!(g, 6.3685e4, max_relative = 1e-4);
    }

    #[test]
    fn test_energy_method_literal() {
        let rate = hydrogen_volume_rate_from_energy(1.0586432e16, 6.3685e4);
        assert_eq!(rate, (1.0586432e16 * 6.3685e4 * 2.24e4) / 6.023e23);
    }

    #[test]
    fn test_methods_agree_when_mass_matches_volume() {
        // 400 cm³ at SG 0.43 is 172 g
        let conditions = ModeratorConditions::basic("matched", 400.0, 172.0, 0.43, 0.01, 20);
        let evans = HydrogenMethod::Evans.volume_rate(0.66e-6, &conditions);
        let energy = HydrogenMethod::EnergyDeposition.volume_rate(0.66e-6, &conditions);
        assert_relative_eq!(evans, energy, max_relative = 1e-9);
    }

    #[test]
    fn test_zero_dose_rate_gives_no_hydrogen() {
        assert_eq!(hydrogen_volume_rate_evans(6.6e-4, 400.0, 0.0, 0.43), 0.0);
        assert_eq!(hydrogen_volume_rate_from_energy(0.0, 6.3685e4), 0.0);
    }

    #[test]
    fn test_method_parsing() {
        assert_eq!("evans".parse::<HydrogenMethod>(), Ok(HydrogenMethod::Evans));
        assert_eq!("Energy".parse::<HydrogenMethod>(), Ok(HydrogenMethod::EnergyDeposition));
        assert!("stp".parse::<HydrogenMethod>().is_err());
        assert_eq!(HydrogenMethod::EnergyDeposition.to_string(), "energy-deposition");
    }
}
