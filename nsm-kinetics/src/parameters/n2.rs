//! Dissolved nitrogen gas parameters

use serde::{Deserialize, Serialize};

use super::{StaticParameters, StaticValue};

/// Parameters for dissolved nitrogen gas (`N2`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct N2Parameters {
    /// Volume fraction of N2 in the atmosphere
    /// unit: unitless
    /// default: 0.79
    #[serde(rename = "N2_atm_fraction")]
    pub atmospheric_fraction: f64,

    /// Ratio of the N2 and O2 gas transfer coefficients
    /// unit: unitless
    /// default: 1.034
    #[serde(rename = "rkaN2")]
    pub transfer_ratio: f64,
}

impl Default for N2Parameters {
    fn default() -> Self {
        Self {
            atmospheric_fraction: 0.79,
            transfer_ratio: 1.034,
        }
    }
}

impl StaticParameters for N2Parameters {
    fn static_values(&self) -> Vec<StaticValue> {
        vec![
            StaticValue::new(
                "N2_atm_fraction",
                "unitless",
                "Atmospheric N2 fraction",
                self.atmospheric_fraction,
            ),
            StaticValue::new(
                "rkaN2",
                "unitless",
                "N2 to O2 gas transfer ratio",
                self.transfer_ratio,
            ),
        ]
    }
}
