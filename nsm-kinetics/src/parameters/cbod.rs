//! Carbonaceous biochemical oxygen demand parameters

use serde::{Deserialize, Serialize};

use super::{StaticParameters, StaticValue};

/// Parameters for CBOD
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CBODParameters {
    /// CBOD oxidation rate at 20 degC
    /// unit: 1/d
    /// default: 0.12
    pub kbod_20: f64,

    /// CBOD sedimentation rate at 20 degC
    /// unit: 1/d
    /// default: 0.0
    pub ksbod_20: f64,

    /// Half-saturation oxygen attenuation constant for CBOD oxidation
    /// unit: mg-O2/L
    /// default: 0.5
    #[serde(rename = "ksOxbod")]
    pub oxidation_oxygen_half_saturation: f64,
}

impl Default for CBODParameters {
    fn default() -> Self {
        Self {
            kbod_20: 0.12,
            ksbod_20: 0.0,
            oxidation_oxygen_half_saturation: 0.5,
        }
    }
}

impl StaticParameters for CBODParameters {
    fn static_values(&self) -> Vec<StaticValue> {
        vec![
            StaticValue::new("kbod_20", "1/d", "CBOD oxidation rate at 20C", self.kbod_20),
            StaticValue::new("ksbod_20", "1/d", "CBOD sedimentation rate at 20C", self.ksbod_20),
            StaticValue::new(
                "ksOxbod",
                "mg-O2/L",
                "Oxygen half-saturation for CBOD oxidation",
                self.oxidation_oxygen_half_saturation,
            ),
        ]
    }
}
