//! Floating algae parameters
//!
//! Stoichiometry, growth and loss rates of phytoplankton.
//! Algal biomass is tracked as chlorophyll-a, so the stoichiometric weights are expressed
//! relative to `AWa`.

use nsm_core::errors::NsmResult;
use serde::{Deserialize, Serialize};

use super::{check_option, StaticParameters, StaticValue};

/// Parameters for floating algae (`Ap`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlgaeParameters {
    /// Algal dry weight
    /// unit: mg
    /// default: 100.0
    #[serde(rename = "AWd")]
    pub dry_weight: f64,

    /// Algal carbon weight
    /// unit: mg
    /// default: 40.0
    #[serde(rename = "AWc")]
    pub carbon_weight: f64,

    /// Algal nitrogen weight
    /// unit: mg
    /// default: 7.2
    #[serde(rename = "AWn")]
    pub nitrogen_weight: f64,

    /// Algal phosphorus weight
    /// unit: mg
    /// default: 1.0
    #[serde(rename = "AWp")]
    pub phosphorus_weight: f64,

    /// Algal chlorophyll-a weight
    /// unit: ug
    /// default: 1000.0
    #[serde(rename = "AWa")]
    pub chla_weight: f64,

    /// Light limitation constant
    /// unit: W/m2
    /// default: 10.0
    #[serde(rename = "KL")]
    pub light_constant: f64,

    /// Half-saturation constant for nitrogen uptake
    /// unit: mg-N/L
    /// default: 0.04
    #[serde(rename = "KsN")]
    pub nitrogen_half_saturation: f64,

    /// Half-saturation constant for phosphorus uptake
    /// unit: mg-P/L
    /// default: 0.0012
    #[serde(rename = "KsP")]
    pub phosphorus_half_saturation: f64,

    /// Maximum growth rate at 20 degC
    /// unit: 1/d
    /// default: 1.0
    pub mu_max_20: f64,

    /// Death rate at 20 degC
    /// unit: 1/d
    /// default: 0.15
    pub kdp_20: f64,

    /// Respiration rate at 20 degC
    /// unit: 1/d
    /// default: 0.2
    pub krp_20: f64,

    /// Settling velocity
    /// unit: m/d
    /// default: 0.15
    #[serde(rename = "vsap")]
    pub settling_velocity: f64,

    /// How the light and nutrient limitation factors are combined
    /// 1: multiplicative, 2: Liebig's law of the minimum, 3: harmonic mean
    /// default: 1
    pub growth_rate_option: u8,

    /// Light limitation formulation
    /// 1: half-saturation, 2: Smith, 3: Steele
    /// default: 1
    pub light_limitation_option: u8,
}

impl Default for AlgaeParameters {
    fn default() -> Self {
        Self {
            dry_weight: 100.0,
            carbon_weight: 40.0,
            nitrogen_weight: 7.2,
            phosphorus_weight: 1.0,
            chla_weight: 1000.0,
            light_constant: 10.0,
            nitrogen_half_saturation: 0.04,
            phosphorus_half_saturation: 0.0012,
            mu_max_20: 1.0,
            kdp_20: 0.15,
            krp_20: 0.2,
            settling_velocity: 0.15,
            growth_rate_option: 1,
            light_limitation_option: 1,
        }
    }
}

impl StaticParameters for AlgaeParameters {
    fn static_values(&self) -> Vec<StaticValue> {
        vec![
            StaticValue::new("AWd", "mg", "Algal dry weight", self.dry_weight),
            StaticValue::new("AWc", "mg", "Algal carbon weight", self.carbon_weight),
            StaticValue::new("AWn", "mg", "Algal nitrogen weight", self.nitrogen_weight),
            StaticValue::new("AWp", "mg", "Algal phosphorus weight", self.phosphorus_weight),
            StaticValue::new("AWa", "ug", "Algal chlorophyll-a weight", self.chla_weight),
            StaticValue::new("KL", "W/m2", "Algal light limitation constant", self.light_constant),
            StaticValue::new(
                "KsN",
                "mg-N/L",
                "Algal nitrogen half-saturation",
                self.nitrogen_half_saturation,
            ),
            StaticValue::new(
                "KsP",
                "mg-P/L",
                "Algal phosphorus half-saturation",
                self.phosphorus_half_saturation,
            ),
            StaticValue::new("mu_max_20", "1/d", "Max algal growth rate at 20C", self.mu_max_20),
            StaticValue::new("kdp_20", "1/d", "Algal death rate at 20C", self.kdp_20),
            StaticValue::new("krp_20", "1/d", "Algal respiration rate at 20C", self.krp_20),
            StaticValue::new("vsap", "m/d", "Algal settling velocity", self.settling_velocity),
            StaticValue::new(
                "growth_rate_option",
                "unitless",
                "Algal growth limitation combination",
                f64::from(self.growth_rate_option),
            ),
            StaticValue::new(
                "light_limitation_option",
                "unitless",
                "Algal light limitation formulation",
                f64::from(self.light_limitation_option),
            ),
        ]
    }

    fn validate(&self) -> NsmResult<()> {
        check_option("growth_rate_option", self.growth_rate_option, 3)?;
        check_option("light_limitation_option", self.light_limitation_option, 3)
    }
}
