//! NSM-I parameters
//!
//! This module contains the parameter blocks for every NSM-I module.
//! Each block provides defaults matching the standard NSM-I configuration and exposes
//! its values as static model variables, keyed by the symbols used in the kinetics
//! (e.g. `AWd`, `mu_max_20`, `use_Algae`).
//!
//! Blocks are grouped in [`NsmParameters`] which can be read from TOML.
//! Tables and keys which are omitted fall back to their defaults:
//!
//! ```
//! use nsm_kinetics::parameters::NsmParameters;
//!
//! let params = NsmParameters::from_toml_str(
//!     r#"
//!     [global_vars]
//!     TwaterC = 25.0
//!
//!     [global_parameters]
//!     use_Pathogen = false
//!     "#,
//! )
//! .unwrap();
//! assert_eq!(params.global_vars.water_temperature, 25.0);
//! assert!(!params.global_parameters.use_pathogen);
//! assert_eq!(params.algae.mu_max_20, 1.0);
//! ```

mod algae;
mod alkalinity;
mod balgae;
mod carbon;
mod cbod;
mod dox;
mod global_parameters;
mod global_vars;
mod initial_state;
mod n2;
mod nitrogen;
mod pathogen;
mod phosphorus;
mod pom;

pub use algae::AlgaeParameters;
pub use alkalinity::AlkalinityParameters;
pub use balgae::BenthicAlgaeParameters;
pub use carbon::CarbonParameters;
pub use cbod::CBODParameters;
pub use dox::DOXParameters;
pub use global_parameters::GlobalParameters;
pub use global_vars::GlobalVars;
pub use initial_state::InitialState;
pub use n2::N2Parameters;
pub use nitrogen::NitrogenParameters;
pub use pathogen::PathogenParameters;
pub use phosphorus::PhosphorusParameters;
pub use pom::POMParameters;

use nsm_core::errors::{NsmError, NsmResult};
use serde::{Deserialize, Serialize};

/// A named static value supplied to the model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticValue {
    pub name: &'static str,
    pub units: &'static str,
    pub description: &'static str,
    pub value: f64,
}

impl StaticValue {
    pub const fn new(
        name: &'static str,
        units: &'static str,
        description: &'static str,
        value: f64,
    ) -> Self {
        Self {
            name,
            units,
            description,
            value,
        }
    }

    /// A boolean option flag, stored as 1.0 or 0.0.
    pub fn flag(name: &'static str, description: &'static str, value: bool) -> Self {
        Self::new(name, "unitless", description, if value { 1.0 } else { 0.0 })
    }
}

/// A parameter block which is bound to the model as static variables.
pub trait StaticParameters {
    /// The static values provided by this block, in registration order.
    fn static_values(&self) -> Vec<StaticValue>;

    /// Check that option selectors and ranges are valid.
    fn validate(&self) -> NsmResult<()> {
        Ok(())
    }
}

/// Check that an option selector is one of `1..=max`.
pub(crate) fn check_option(name: &str, value: u8, max: u8) -> NsmResult<()> {
    if (1..=max).contains(&value) {
        Ok(())
    } else {
        Err(NsmError::Parameter(format!(
            "{} must be between 1 and {}, got {}",
            name, max, value
        )))
    }
}

/// Option selectors and the number of choices each offers
pub(crate) const OPTION_SELECTORS: [(&str, u8); 6] = [
    ("growth_rate_option", 3),
    ("light_limitation_option", 3),
    ("b_growth_rate_option", 3),
    ("b_light_limitation_option", 3),
    ("hydraulic_reaeration_option", 9),
    ("wind_reaeration_option", 13),
];

/// Check every value supplied for an option selector, e.g. a per-cell override.
pub(crate) fn check_option_values(
    name: &str,
    values: impl IntoIterator<Item = f64>,
    max: u8,
) -> NsmResult<()> {
    for value in values {
        if value.fract() != 0.0 || !(1.0..=max as f64).contains(&value) {
            return Err(NsmError::Parameter(format!(
                "{} must be between 1 and {}, got {}",
                name, max, value
            )));
        }
    }
    Ok(())
}

/// Check that a value lies within `[lower, upper]`.
pub(crate) fn check_range(name: &str, value: f64, lower: f64, upper: f64) -> NsmResult<()> {
    if (lower..=upper).contains(&value) {
        Ok(())
    } else {
        Err(NsmError::Parameter(format!(
            "{} must be between {} and {}, got {}",
            name, lower, upper, value
        )))
    }
}

/// All parameters of an NSM-I model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NsmParameters {
    pub algae: AlgaeParameters,
    pub alkalinity: AlkalinityParameters,
    pub balgae: BenthicAlgaeParameters,
    pub nitrogen: NitrogenParameters,
    pub carbon: CarbonParameters,
    #[serde(rename = "CBOD")]
    pub cbod: CBODParameters,
    #[serde(rename = "DOX")]
    pub dox: DOXParameters,
    #[serde(rename = "N2")]
    pub n2: N2Parameters,
    #[serde(rename = "POM")]
    pub pom: POMParameters,
    pub pathogen: PathogenParameters,
    pub phosphorus: PhosphorusParameters,
    pub global_parameters: GlobalParameters,
    pub global_vars: GlobalVars,
}

impl NsmParameters {
    /// Read parameters from a TOML document.
    pub fn from_toml_str(s: &str) -> NsmResult<Self> {
        let params: Self = toml::from_str(s).map_err(|e| NsmError::Parameter(e.to_string()))?;
        params.validate()?;
        Ok(params)
    }

    pub fn to_toml_string(&self) -> NsmResult<String> {
        toml::to_string(self).map_err(|e| NsmError::Parameter(e.to_string()))
    }

    fn blocks(&self) -> [&dyn StaticParameters; 13] {
        [
            &self.global_parameters,
            &self.global_vars,
            &self.algae,
            &self.balgae,
            &self.nitrogen,
            &self.phosphorus,
            &self.carbon,
            &self.cbod,
            &self.dox,
            &self.n2,
            &self.pom,
            &self.pathogen,
            &self.alkalinity,
        ]
    }
}

impl StaticParameters for NsmParameters {
    fn static_values(&self) -> Vec<StaticValue> {
        self.blocks()
            .iter()
            .flat_map(|block| block.static_values())
            .collect()
    }

    fn validate(&self) -> NsmResult<()> {
        self.blocks().iter().try_for_each(|block| block.validate())
    }
}
