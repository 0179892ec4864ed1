//! Moderator operating points and production reports
//!
//! A [`ModeratorConditions`] value describes one irradiated methane charge
//! (volume, mass, specific gravity, dose rate, polymer chain length).
//! [`ProductionReport::evaluate`] runs every formula in [`crate::physics`]
//! against it and collects the derived rates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::core_types::units::{
    CubicCentimetres, Grams, GramsPerMole, MegagraysPerSecond, MolesPerJoule, SpecificGravity,
};
use crate::physics::{
    dose_rate_to_mev_per_second, g_value_to_molecules_per_mev, molecular_weight,
    moles_per_mgy_per_gram, polymer_formation_rate, radicals_per_mgy_per_gram, HydrogenMethod,
};

/// Failure to read a conditions file
#[derive(Error, Debug)]
pub enum ConditionsError {
    #[error("failed to read conditions file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid conditions JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// One operating point of a liquid methane moderator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeratorConditions {
    /// Human-readable label
    pub name: String,
    /// Volume of the methane charge (cm³)
    pub ch4_volume: CubicCentimetres,
    /// Mass of the methane charge (g)
    pub ch4_mass: Grams,
    /// Specific gravity of the methane, used as density (g/cm³)
    pub specific_gravity: SpecificGravity,
    /// Absorbed dose rate (MGy/s)
    pub dose_rate: MegagraysPerSecond,
    /// Polymer chain length n of (-CH2-)n
    pub chain_length: u32,
}

impl ModeratorConditions {
    /// ISIS methane moderator reference point (Evans 1995)
    ///
    /// 400 cm³ of liquid CH4 at SG 0.43 under 0.01 MGy/s, 169.6 g charge,
    /// chain length at its expected upper bound of 20.
    pub fn isis_reference() -> Self {
        Self {
            name: "ISIS CH4 moderator".to_string(),
            ch4_volume: CubicCentimetres::new(400.0),
            ch4_mass: Grams::new(169.6),
            specific_gravity: SpecificGravity::LIQUID_METHANE,
            dose_rate: MegagraysPerSecond::new(0.01),
            chain_length: 20,
        }
    }

    /// Build conditions from raw values
    ///
    /// # Arguments
    /// * `name` - Label
    /// * `ch4_volume` - cm³
    /// * `ch4_mass` - g
    /// * `specific_gravity` - dimensionless
    /// * `dose_rate` - MGy/s
    /// * `chain_length` - n
    pub fn basic(
        name: &str,
        ch4_volume: f64,
        ch4_mass: f64,
        specific_gravity: f64,
        dose_rate: f64,
        chain_length: u32,
    ) -> Self {
        Self {
            name: name.to_string(),
            ch4_volume: CubicCentimetres::new(ch4_volume),
            ch4_mass: Grams::new(ch4_mass),
            specific_gravity: SpecificGravity::new(specific_gravity),
            dose_rate: MegagraysPerSecond::new(dose_rate),
            chain_length,
        }
    }

    /// Load conditions from a JSON file
    ///
    /// # Errors
    /// Returns [`ConditionsError::Io`] if the file cannot be read and
    /// [`ConditionsError::Json`] if it does not describe a `ModeratorConditions`.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConditionsError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConditionsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let conditions: Self =
            serde_json::from_str(&text).map_err(|source| ConditionsError::Json {
                path: path.to_path_buf(),
                source,
            })?;

        debug!(path = %path.display(), name = %conditions.name, "loaded moderator conditions");
        Ok(conditions)
    }

    /// Charge mass implied by volume × SG (g)
    ///
    /// Comparison only: the formulas use `ch4_mass` as given.
    pub fn density_mass(&self) -> Grams {
        self.ch4_volume.mass_at(self.specific_gravity)
    }

    /// Replace the dose rate
    pub fn with_dose_rate(mut self, dose_rate: f64) -> Self {
        self.dose_rate = MegagraysPerSecond::new(dose_rate);
        self
    }

    /// Replace the chain length
    pub fn with_chain_length(mut self, chain_length: u32) -> Self {
        self.chain_length = chain_length;
        self
    }
}

impl Default for ModeratorConditions {
    fn default() -> Self {
        Self::isis_reference()
    }
}

/// Empirical G-values for irradiated liquid methane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YieldConstants {
    /// Radical (and H2) yield
    pub radical_g_value: MolesPerJoule,
    /// Polymer yield
    pub polymer_g_value: MolesPerJoule,
}

impl YieldConstants {
    /// Values quoted by Evans (1995)
    pub const fn evans_1995() -> Self {
        Self {
            radical_g_value: MolesPerJoule::new(0.66e-6),
            polymer_g_value: MolesPerJoule::new(0.22e-6),
        }
    }
}

impl Default for YieldConstants {
    fn default() -> Self {
        Self::evans_1995()
    }
}

/// Every derived quantity for one conditions/constants pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionReport {
    pub conditions: ModeratorConditions,
    pub constants: YieldConstants,
    /// mol/(MGy·g)
    pub moles_per_mgy_per_gram: f64,
    /// radicals/(MGy·g)
    pub radicals_per_mgy_per_gram: f64,
    /// H2 cm³/s, Evans method
    pub hydrogen_evans: f64,
    /// H2 cm³/s, energy-deposition method
    pub hydrogen_energy_deposition: f64,
    /// Radical G-value in molecules/MeV
    pub g_molecules_per_mev: f64,
    /// Energy deposited in the charge (MeV/s)
    pub dose_mev_per_second: f64,
    /// Polymer Mr
    pub molecular_weight: GramsPerMole,
    /// Polymer g/s
    pub polymer_rate: f64,
}

impl ProductionReport {
    /// Evaluate all formulas for the given operating point
    pub fn evaluate(conditions: &ModeratorConditions, constants: &YieldConstants) -> Self {
        let radical_g = *constants.radical_g_value;
        let moles = moles_per_mgy_per_gram(radical_g);
        let mr = molecular_weight(conditions.chain_length);

        let report = Self {
            conditions: conditions.clone(),
            constants: *constants,
            moles_per_mgy_per_gram: moles,
            radicals_per_mgy_per_gram: radicals_per_mgy_per_gram(moles),
            hydrogen_evans: HydrogenMethod::Evans.volume_rate(radical_g, conditions),
            hydrogen_energy_deposition: HydrogenMethod::EnergyDeposition
                .volume_rate(radical_g, conditions),
            g_molecules_per_mev: g_value_to_molecules_per_mev(radical_g),
            dose_mev_per_second: dose_rate_to_mev_per_second(
                *conditions.dose_rate,
                *conditions.ch4_mass.to_kilograms(),
            ),
            molecular_weight: GramsPerMole::new(mr),
            polymer_rate: polymer_formation_rate(
                *constants.polymer_g_value,
                mr,
                *conditions.dose_rate,
                *conditions.ch4_mass,
            ),
        };

        debug!(
            conditions = %conditions.name,
            hydrogen_evans = report.hydrogen_evans,
            hydrogen_energy_deposition = report.hydrogen_energy_deposition,
            polymer_rate = report.polymer_rate,
            "evaluated production report"
        );

        report
    }

    /// H2 volume rate for the chosen method (cm³/s)
    pub fn hydrogen(&self, method: HydrogenMethod) -> f64 {
        match method {
            HydrogenMethod::Evans => self.hydrogen_evans,
            HydrogenMethod::EnergyDeposition => self.hydrogen_energy_deposition,
        }
    }
}

impl fmt::Display for ProductionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.conditions;
        writeln!(f, "=== {} ===", c.name)?;
        writeln!(
            f,
            "Charge: {:.1} cm3, {:.1} g, SG {:.3}, dose {:e} MGy/s, n = {}",
            *c.ch4_volume, *c.ch4_mass, *c.specific_gravity, *c.dose_rate, c.chain_length
        )?;
        writeln!(f, "{:e} mol/g", self.moles_per_mgy_per_gram)?;
        writeln!(f, "{:e} radicals/g.MGy", self.radicals_per_mgy_per_gram)?;
        writeln!(f, "{:e} cm3/s (H2, evans)", self.hydrogen_evans)?;
        writeln!(f, "{:e} molecules/MeV", self.g_molecules_per_mev)?;
        writeln!(f, "{:e} MeV/s", self.dose_mev_per_second)?;
        writeln!(
            f,
            "{:e} cm3/s (H2, energy-deposition)",
            self.hydrogen_energy_deposition
        )?;
        writeln!(f, "Mr = {} g/mol", *self.molecular_weight)?;
        write!(f, "{:e} g polymer/s", self.polymer_rate)
    }
}
