//! Nitrogen cycle parameters

use nsm_core::errors::NsmResult;
use serde::{Deserialize, Serialize};

use super::{check_range, StaticParameters, StaticValue};

/// Parameters for the organic nitrogen, ammonium and nitrate pools
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NitrogenParameters {
    /// Oxygen inhibition factor for nitrification
    /// unit: L/mg-O2
    /// default: 0.6
    #[serde(rename = "KNR")]
    pub nitrification_inhibition: f64,

    /// Nitrification rate of ammonium at 20 degC
    /// unit: 1/d
    /// default: 0.1
    pub knit_20: f64,

    /// Decay rate of organic nitrogen to ammonium at 20 degC
    /// unit: 1/d
    /// default: 0.1
    pub kon_20: f64,

    /// Denitrification rate at 20 degC
    /// unit: 1/d
    /// default: 0.002
    pub kdnit_20: f64,

    /// Sediment release rate of ammonium at 20 degC
    /// unit: g-N/m2/d
    /// default: 0.0
    pub rnh4_20: f64,

    /// Sediment denitrification transfer velocity at 20 degC
    /// unit: m/d
    /// default: 0.0
    pub vno3_20: f64,

    /// Half-saturation oxygen inhibition constant for denitrification
    /// unit: mg-O2/L
    /// default: 0.1
    #[serde(rename = "KsOxdn")]
    pub denitrification_oxygen_half_saturation: f64,

    /// Algal ammonium uptake preference
    /// unit: unitless
    /// default: 0.5
    #[serde(rename = "PN")]
    pub algae_ammonium_preference: f64,

    /// Benthic algae ammonium uptake preference
    /// unit: unitless
    /// default: 0.5
    #[serde(rename = "PNb")]
    pub benthic_ammonium_preference: f64,

    /// Organic nitrogen settling velocity
    /// unit: m/d
    /// default: 0.01
    #[serde(rename = "vson")]
    pub organic_settling_velocity: f64,
}

impl Default for NitrogenParameters {
    fn default() -> Self {
        Self {
            nitrification_inhibition: 0.6,
            knit_20: 0.1,
            kon_20: 0.1,
            kdnit_20: 0.002,
            rnh4_20: 0.0,
            vno3_20: 0.0,
            denitrification_oxygen_half_saturation: 0.1,
            algae_ammonium_preference: 0.5,
            benthic_ammonium_preference: 0.5,
            organic_settling_velocity: 0.01,
        }
    }
}

impl StaticParameters for NitrogenParameters {
    fn static_values(&self) -> Vec<StaticValue> {
        vec![
            StaticValue::new(
                "KNR",
                "L/mg-O2",
                "Oxygen inhibition factor for nitrification",
                self.nitrification_inhibition,
            ),
            StaticValue::new("knit_20", "1/d", "Nitrification rate at 20C", self.knit_20),
            StaticValue::new("kon_20", "1/d", "OrgN decay rate at 20C", self.kon_20),
            StaticValue::new("kdnit_20", "1/d", "Denitrification rate at 20C", self.kdnit_20),
            StaticValue::new("rnh4_20", "g-N/m2/d", "Sediment NH4 release at 20C", self.rnh4_20),
            StaticValue::new(
                "vno3_20",
                "m/d",
                "Sediment denitrification velocity at 20C",
                self.vno3_20,
            ),
            StaticValue::new(
                "KsOxdn",
                "mg-O2/L",
                "Oxygen half-saturation for denitrification",
                self.denitrification_oxygen_half_saturation,
            ),
            StaticValue::new(
                "PN",
                "unitless",
                "Algal NH4 preference",
                self.algae_ammonium_preference,
            ),
            StaticValue::new(
                "PNb",
                "unitless",
                "Benthic algae NH4 preference",
                self.benthic_ammonium_preference,
            ),
            StaticValue::new(
                "vson",
                "m/d",
                "OrgN settling velocity",
                self.organic_settling_velocity,
            ),
        ]
    }

    fn validate(&self) -> NsmResult<()> {
        check_range("PN", self.algae_ammonium_preference, 0.0, 1.0)?;
        check_range("PNb", self.benthic_ammonium_preference, 0.0, 1.0)
    }
}
