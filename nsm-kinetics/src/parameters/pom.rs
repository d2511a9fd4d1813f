//! Particulate organic matter parameters

use nsm_core::errors::{NsmError, NsmResult};
use serde::{Deserialize, Serialize};

use super::{StaticParameters, StaticValue};

/// Parameters for particulate organic matter (`POM`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct POMParameters {
    /// POM dissolution rate at 20 degC
    /// unit: 1/d
    /// default: 0.1
    pub kpom_20: f64,

    /// Ratio of carbon to organic matter
    /// unit: mg-C/mg-D
    /// default: 0.4
    pub fcom: f64,

    /// POM burial velocity
    /// unit: m/d
    /// default: 0.01
    #[serde(rename = "vb")]
    pub burial_velocity: f64,

    /// Thickness of the active sediment layer holding POM
    /// unit: m
    /// default: 0.1
    #[serde(rename = "h2")]
    pub active_layer_thickness: f64,
}

impl Default for POMParameters {
    fn default() -> Self {
        Self {
            kpom_20: 0.1,
            fcom: 0.4,
            burial_velocity: 0.01,
            active_layer_thickness: 0.1,
        }
    }
}

impl StaticParameters for POMParameters {
    fn static_values(&self) -> Vec<StaticValue> {
        vec![
            StaticValue::new("kpom_20", "1/d", "POM dissolution rate at 20C", self.kpom_20),
            StaticValue::new("fcom", "mg-C/mg-D", "Carbon to organic matter ratio", self.fcom),
            StaticValue::new("vb", "m/d", "POM burial velocity", self.burial_velocity),
            StaticValue::new(
                "h2",
                "m",
                "Active sediment layer thickness",
                self.active_layer_thickness,
            ),
        ]
    }

    fn validate(&self) -> NsmResult<()> {
        for (name, value) in [("fcom", self.fcom), ("h2", self.active_layer_thickness)] {
            if value <= 0.0 {
                return Err(NsmError::Parameter(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fcom_must_be_positive() {
        assert!(POMParameters::default().validate().is_ok());
        let params = POMParameters {
            fcom: 0.0,
            ..Default::default()
        };
        assert!(params.validate().is_err());

        let params = POMParameters {
            active_layer_thickness: 0.0,
            ..Default::default()
        };
        assert_eq!(
            params.validate().unwrap_err(),
            NsmError::Parameter("h2 must be positive, got 0".to_string())
        );
    }
}
