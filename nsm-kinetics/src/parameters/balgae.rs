//! Benthic algae parameters
//!
//! Benthic algae are tracked as dry weight per unit bottom area.
//! Stoichiometric weights are relative to `BWd`.

use nsm_core::errors::NsmResult;
use serde::{Deserialize, Serialize};

use super::{check_option, check_range, StaticParameters, StaticValue};

/// Parameters for benthic algae (`Ab`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenthicAlgaeParameters {
    /// Benthic algae dry weight
    /// unit: mg
    /// default: 100.0
    #[serde(rename = "BWd")]
    pub dry_weight: f64,

    /// Benthic algae carbon weight
    /// unit: mg
    /// default: 40.0
    #[serde(rename = "BWc")]
    pub carbon_weight: f64,

    /// Benthic algae nitrogen weight
    /// unit: mg
    /// default: 7.2
    #[serde(rename = "BWn")]
    pub nitrogen_weight: f64,

    /// Benthic algae phosphorus weight
    /// unit: mg
    /// default: 1.0
    #[serde(rename = "BWp")]
    pub phosphorus_weight: f64,

    /// Benthic algae chlorophyll-a weight
    /// unit: mg
    /// default: 3500.0
    #[serde(rename = "BWa")]
    pub chla_weight: f64,

    /// Light limitation constant
    /// unit: W/m2
    /// default: 1.0
    #[serde(rename = "KLb")]
    pub light_constant: f64,

    /// Half-saturation constant for nitrogen uptake
    /// unit: mg-N/L
    /// default: 0.25
    #[serde(rename = "KsNb")]
    pub nitrogen_half_saturation: f64,

    /// Half-saturation constant for phosphorus uptake
    /// unit: mg-P/L
    /// default: 0.125
    #[serde(rename = "KsPb")]
    pub phosphorus_half_saturation: f64,

    /// Half-saturation density constant
    /// unit: g-D/m2
    /// default: 80.0
    #[serde(rename = "Ksb")]
    pub density_half_saturation: f64,

    /// Maximum growth rate at 20 degC
    /// unit: 1/d
    /// default: 0.6
    pub mub_max_20: f64,

    /// Respiration rate at 20 degC
    /// unit: 1/d
    /// default: 0.2
    pub krb_20: f64,

    /// Death rate at 20 degC
    /// unit: 1/d
    /// default: 0.3
    pub kdb_20: f64,

    /// How the light and nutrient limitation factors are combined
    /// 1: multiplicative, 2: Liebig's law of the minimum, 3: harmonic mean
    /// default: 1
    pub b_growth_rate_option: u8,

    /// Light limitation formulation
    /// 1: half-saturation, 2: Smith, 3: Steele
    /// default: 1
    pub b_light_limitation_option: u8,

    /// Fraction of benthic algae mortality released to the water column
    ///
    /// The rest is retained on the bed as particulate organic matter.
    /// unit: unitless
    /// default: 0.9
    #[serde(rename = "Fw")]
    pub water_release_fraction: f64,

    /// Fraction of the bottom area available for benthic algae
    /// unit: unitless
    /// default: 0.9
    #[serde(rename = "Fb")]
    pub bottom_fraction: f64,
}

impl Default for BenthicAlgaeParameters {
    fn default() -> Self {
        Self {
            dry_weight: 100.0,
            carbon_weight: 40.0,
            nitrogen_weight: 7.2,
            phosphorus_weight: 1.0,
            chla_weight: 3500.0,
            light_constant: 1.0,
            nitrogen_half_saturation: 0.25,
            phosphorus_half_saturation: 0.125,
            density_half_saturation: 80.0,
            mub_max_20: 0.6,
            krb_20: 0.2,
            kdb_20: 0.3,
            b_growth_rate_option: 1,
            b_light_limitation_option: 1,
            water_release_fraction: 0.9,
            bottom_fraction: 0.9,
        }
    }
}

impl StaticParameters for BenthicAlgaeParameters {
    fn static_values(&self) -> Vec<StaticValue> {
        vec![
            StaticValue::new("BWd", "mg", "Benthic algae dry weight", self.dry_weight),
            StaticValue::new("BWc", "mg", "Benthic algae carbon weight", self.carbon_weight),
            StaticValue::new("BWn", "mg", "Benthic algae nitrogen weight", self.nitrogen_weight),
            StaticValue::new(
                "BWp",
                "mg",
                "Benthic algae phosphorus weight",
                self.phosphorus_weight,
            ),
            StaticValue::new("BWa", "mg", "Benthic algae chlorophyll-a weight", self.chla_weight),
            StaticValue::new(
                "KLb",
                "W/m2",
                "Benthic algae light limitation constant",
                self.light_constant,
            ),
            StaticValue::new(
                "KsNb",
                "mg-N/L",
                "Benthic algae nitrogen half-saturation",
                self.nitrogen_half_saturation,
            ),
            StaticValue::new(
                "KsPb",
                "mg-P/L",
                "Benthic algae phosphorus half-saturation",
                self.phosphorus_half_saturation,
            ),
            StaticValue::new(
                "Ksb",
                "g-D/m2",
                "Benthic algae density half-saturation",
                self.density_half_saturation,
            ),
            StaticValue::new("mub_max_20", "1/d", "Max benthic growth rate at 20C", self.mub_max_20),
            StaticValue::new("krb_20", "1/d", "Benthic respiration rate at 20C", self.krb_20),
            StaticValue::new("kdb_20", "1/d", "Benthic death rate at 20C", self.kdb_20),
            StaticValue::new(
                "b_growth_rate_option",
                "unitless",
                "Benthic growth limitation combination",
                f64::from(self.b_growth_rate_option),
            ),
            StaticValue::new(
                "b_light_limitation_option",
                "unitless",
                "Benthic light limitation formulation",
                f64::from(self.b_light_limitation_option),
            ),
            StaticValue::new(
                "Fw",
                "unitless",
                "Fraction of benthic mortality released to the water column",
                self.water_release_fraction,
            ),
            StaticValue::new(
                "Fb",
                "unitless",
                "Fraction of bottom area available for benthic algae",
                self.bottom_fraction,
            ),
        ]
    }

    fn validate(&self) -> NsmResult<()> {
        check_option("b_growth_rate_option", self.b_growth_rate_option, 3)?;
        check_option("b_light_limitation_option", self.b_light_limitation_option, 3)?;
        check_range("Fw", self.water_release_fraction, 0.0, 1.0)?;
        check_range("Fb", self.bottom_fraction, 0.0, 1.0)
    }
}
