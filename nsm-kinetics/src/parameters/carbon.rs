//! Carbon cycle parameters

use nsm_core::errors::NsmResult;
use serde::{Deserialize, Serialize};

use super::{check_range, StaticParameters, StaticValue};

/// Parameters for particulate, dissolved organic and dissolved inorganic carbon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarbonParameters {
    /// Fraction of algal mortality into POC
    /// unit: unitless
    /// default: 0.9
    pub f_pocp: f64,

    /// DOC oxidation rate at 20 degC
    /// unit: 1/d
    /// default: 0.01
    pub kdoc_20: f64,

    /// Fraction of benthic algal mortality into POC
    /// unit: unitless
    /// default: 0.9
    pub f_pocb: f64,

    /// POC hydrolysis rate at 20 degC
    /// unit: 1/d
    /// default: 0.005
    pub kpoc_20: f64,

    /// Half-saturation oxygen attenuation constant for DOC oxidation
    /// unit: mg-O2/L
    /// default: 1.0
    #[serde(rename = "K_sOxmc")]
    pub oxidation_oxygen_half_saturation: f64,

    /// Partial pressure of atmospheric CO2
    /// unit: ppm
    /// default: 383.0
    #[serde(rename = "pCO2")]
    pub atmospheric_co2: f64,

    /// Fraction of DIC present as free CO2
    /// unit: unitless
    /// default: 0.2
    #[serde(rename = "FCO2")]
    pub co2_fraction: f64,

    /// POC settling velocity
    /// unit: m/d
    /// default: 0.01
    #[serde(rename = "vsoc")]
    pub settling_velocity: f64,

    /// Oxygen to carbon ratio
    /// unit: mg-O2/mg-C
    /// default: 32/12
    #[serde(rename = "roc")]
    pub oxygen_carbon_ratio: f64,
}

impl Default for CarbonParameters {
    fn default() -> Self {
        Self {
            f_pocp: 0.9,
            kdoc_20: 0.01,
            f_pocb: 0.9,
            kpoc_20: 0.005,
            oxidation_oxygen_half_saturation: 1.0,
            atmospheric_co2: 383.0,
            co2_fraction: 0.2,
            settling_velocity: 0.01,
            oxygen_carbon_ratio: 32.0 / 12.0,
        }
    }
}

impl StaticParameters for CarbonParameters {
    fn static_values(&self) -> Vec<StaticValue> {
        vec![
            StaticValue::new("f_pocp", "unitless", "Algal mortality fraction to POC", self.f_pocp),
            StaticValue::new("kdoc_20", "1/d", "DOC oxidation rate at 20C", self.kdoc_20),
            StaticValue::new(
                "f_pocb",
                "unitless",
                "Benthic algal mortality fraction to POC",
                self.f_pocb,
            ),
            StaticValue::new("kpoc_20", "1/d", "POC hydrolysis rate at 20C", self.kpoc_20),
            StaticValue::new(
                "K_sOxmc",
                "mg-O2/L",
                "Oxygen half-saturation for DOC oxidation",
                self.oxidation_oxygen_half_saturation,
            ),
            StaticValue::new("pCO2", "ppm", "Atmospheric CO2", self.atmospheric_co2),
            StaticValue::new("FCO2", "unitless", "Fraction of DIC as CO2", self.co2_fraction),
            StaticValue::new("vsoc", "m/d", "POC settling velocity", self.settling_velocity),
            StaticValue::new(
                "roc",
                "mg-O2/mg-C",
                "Oxygen to carbon ratio",
                self.oxygen_carbon_ratio,
            ),
        ]
    }

    fn validate(&self) -> NsmResult<()> {
        check_range("f_pocp", self.f_pocp, 0.0, 1.0)?;
        check_range("f_pocb", self.f_pocb, 0.0, 1.0)?;
        check_range("FCO2", self.co2_fraction, 0.0, 1.0)
    }
}
