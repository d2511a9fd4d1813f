//! Pathogen parameters

use serde::{Deserialize, Serialize};

use super::{StaticParameters, StaticValue};

/// Parameters for the pathogen concentration (`PX`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathogenParameters {
    /// Pathogen death rate at 20 degC
    /// unit: 1/d
    /// default: 0.8
    pub kdx_20: f64,

    /// Light efficiency factor for pathogen decay
    /// unit: unitless
    /// default: 1.0
    pub apx: f64,

    /// Pathogen settling velocity
    /// unit: m/d
    /// default: 1.0
    pub vx: f64,
}

impl Default for PathogenParameters {
    fn default() -> Self {
        Self {
            kdx_20: 0.8,
            apx: 1.0,
            vx: 1.0,
        }
    }
}

impl StaticParameters for PathogenParameters {
    fn static_values(&self) -> Vec<StaticValue> {
        vec![
            StaticValue::new("kdx_20", "1/d", "Pathogen death rate at 20C", self.kdx_20),
            StaticValue::new("apx", "unitless", "Pathogen light efficiency factor", self.apx),
            StaticValue::new("vx", "m/d", "Pathogen settling velocity", self.vx),
        ]
    }
}
