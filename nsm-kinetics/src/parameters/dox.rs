//! Dissolved oxygen parameters

use serde::{Deserialize, Serialize};

use super::{StaticParameters, StaticValue};

/// Parameters for dissolved oxygen (`DOX`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DOXParameters {
    /// Oxygen consumed per unit of ammonium nitrified
    /// unit: mg-O2/mg-N
    /// default: 2*32/14
    #[serde(rename = "ron")]
    pub oxygen_nitrogen_ratio: f64,

    /// Sediment oxygen demand at 20 degC
    /// unit: g-O2/m2/d
    /// default: 0.0
    #[serde(rename = "SOD_20")]
    pub sod_20: f64,

    /// Temperature correction factor for sediment oxygen demand
    /// unit: unitless
    /// default: 1.047
    #[serde(rename = "SOD_theta")]
    pub sod_theta: f64,
}

impl Default for DOXParameters {
    fn default() -> Self {
        Self {
            oxygen_nitrogen_ratio: 2.0 * 32.0 / 14.0,
            sod_20: 0.0,
            sod_theta: 1.047,
        }
    }
}

impl StaticParameters for DOXParameters {
    fn static_values(&self) -> Vec<StaticValue> {
        vec![
            StaticValue::new(
                "ron",
                "mg-O2/mg-N",
                "Oxygen consumed per nitrogen nitrified",
                self.oxygen_nitrogen_ratio,
            ),
            StaticValue::new("SOD_20", "g-O2/m2/d", "Sediment oxygen demand at 20C", self.sod_20),
            StaticValue::new(
                "SOD_theta",
                "unitless",
                "Sediment oxygen demand temperature coefficient",
                self.sod_theta,
            ),
        ]
    }
}
