//! Phosphorus cycle parameters

use serde::{Deserialize, Serialize};

use super::{StaticParameters, StaticValue};

/// Parameters for the organic and inorganic phosphorus pools
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhosphorusParameters {
    /// Decay rate of organic phosphorus to dissolved inorganic phosphorus at 20 degC
    /// unit: 1/d
    /// default: 0.1
    pub kop_20: f64,

    /// Sediment release rate of phosphate at 20 degC
    /// unit: g-P/m2/d
    /// default: 0.0
    pub rpo4_20: f64,

    /// Partition coefficient of inorganic phosphorus to suspended solids
    /// unit: L/mg
    /// default: 0.0
    pub kdpo4: f64,

    /// Organic phosphorus settling velocity
    /// unit: m/d
    /// default: 0.01
    #[serde(rename = "vsop")]
    pub organic_settling_velocity: f64,

    /// Settling velocity of particulate inorganic phosphorus
    /// unit: m/d
    /// default: 0.01
    #[serde(rename = "vs")]
    pub particulate_settling_velocity: f64,
}

impl Default for PhosphorusParameters {
    fn default() -> Self {
        Self {
            kop_20: 0.1,
            rpo4_20: 0.0,
            kdpo4: 0.0,
            organic_settling_velocity: 0.01,
            particulate_settling_velocity: 0.01,
        }
    }
}

impl StaticParameters for PhosphorusParameters {
    fn static_values(&self) -> Vec<StaticValue> {
        vec![
            StaticValue::new("kop_20", "1/d", "OrgP decay rate at 20C", self.kop_20),
            StaticValue::new("rpo4_20", "g-P/m2/d", "Sediment PO4 release at 20C", self.rpo4_20),
            StaticValue::new("kdpo4", "L/mg", "Inorganic P partition coefficient", self.kdpo4),
            StaticValue::new(
                "vsop",
                "m/d",
                "OrgP settling velocity",
                self.organic_settling_velocity,
            ),
            StaticValue::new(
                "vs",
                "m/d",
                "Particulate inorganic P settling velocity",
                self.particulate_settling_velocity,
            ),
        ]
    }
}
