//! Alkalinity parameters
//!
//! Ratios converting the nitrogen and carbon transformations into changes of alkalinity.

use serde::{Deserialize, Serialize};

use super::{StaticParameters, StaticValue};

/// Parameters for alkalinity (`Alk`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlkalinityParameters {
    /// Alkalinity produced per unit of algal carbon respired, or consumed by growth on ammonium
    /// unit: eq/mg-C
    /// default: 14/106/12/1000
    pub r_alkaa: f64,

    /// Alkalinity produced per unit of algal carbon fixed while growing on nitrate
    /// unit: eq/mg-C
    /// default: 18/106/12/1000
    pub r_alkan: f64,

    /// Alkalinity consumed per unit of ammonium nitrified
    /// unit: eq/mg-N
    /// default: 2/14/1000
    pub r_alkn: f64,

    /// Alkalinity produced per unit of nitrate denitrified
    /// unit: eq/mg-N
    /// default: 4/14/4/1000
    pub r_alkden: f64,

    /// Benthic analogue of `r_alkaa`
    /// unit: eq/mg-C
    /// default: 14/106/12/1000
    pub r_alkba: f64,

    /// Benthic analogue of `r_alkan`
    /// unit: eq/mg-C
    /// default: 18/106/12/1000
    pub r_alkbn: f64,
}

impl Default for AlkalinityParameters {
    fn default() -> Self {
        Self {
            r_alkaa: 14.0 / 106.0 / 12.0 / 1000.0,
            r_alkan: 18.0 / 106.0 / 12.0 / 1000.0,
            r_alkn: 2.0 / 14.0 / 1000.0,
            r_alkden: 4.0 / 14.0 / 4.0 / 1000.0,
            r_alkba: 14.0 / 106.0 / 12.0 / 1000.0,
            r_alkbn: 18.0 / 106.0 / 12.0 / 1000.0,
        }
    }
}

impl StaticParameters for AlkalinityParameters {
    fn static_values(&self) -> Vec<StaticValue> {
        vec![
            StaticValue::new("r_alkaa", "eq/mg-C", "Alkalinity ratio, algal NH4 growth", self.r_alkaa),
            StaticValue::new("r_alkan", "eq/mg-C", "Alkalinity ratio, algal NO3 growth", self.r_alkan),
            StaticValue::new("r_alkn", "eq/mg-N", "Alkalinity ratio, nitrification", self.r_alkn),
            StaticValue::new(
                "r_alkden",
                "eq/mg-N",
                "Alkalinity ratio, denitrification",
                self.r_alkden,
            ),
            StaticValue::new(
                "r_alkba",
                "eq/mg-C",
                "Alkalinity ratio, benthic NH4 growth",
                self.r_alkba,
            ),
            StaticValue::new(
                "r_alkbn",
                "eq/mg-C",
                "Alkalinity ratio, benthic NO3 growth",
                self.r_alkbn,
            ),
        ]
    }
}
