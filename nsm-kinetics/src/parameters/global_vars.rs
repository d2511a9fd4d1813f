//! Hydrodynamic and environmental forcing
//!
//! These values are normally supplied by a hydrodynamic driver.
//! They are static for the duration of a timestep and may be replaced between timesteps
//! with [`Model::set_static`](nsm_core::model::Model::set_static).

use nsm_core::errors::NsmResult;
use serde::{Deserialize, Serialize};

use super::{check_option, StaticParameters, StaticValue};

/// Forcing, light attenuation and reaeration settings shared by all modules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalVars {
    /// Water temperature
    /// unit: degC
    /// default: 20.0
    #[serde(rename = "TwaterC")]
    pub water_temperature: f64,

    /// Water depth
    /// unit: m
    /// default: 1.5
    pub depth: f64,

    /// Mean water velocity
    /// unit: m/s
    /// default: 1.0
    pub velocity: f64,

    /// Flow rate
    /// unit: m3/s
    /// default: 150.0
    pub flow: f64,

    /// Top width of the channel
    /// unit: m
    /// default: 100.0
    pub topwidth: f64,

    /// Channel slope
    /// unit: m/m
    /// default: 0.0002
    pub slope: f64,

    /// Shear velocity
    /// unit: m/s
    /// default: 0.05334
    pub shear_velocity: f64,

    /// Atmospheric pressure
    /// unit: mbar
    /// default: 1013.25
    pub pressure_mb: f64,

    /// Wind speed at 2 m
    /// unit: m/s
    /// default: 3.0
    pub wind_speed: f64,

    /// Net incoming solar radiation
    /// unit: W/m2
    /// default: 500.0
    pub q_solar: f64,

    /// Suspended solids concentration
    /// unit: mg/L
    /// default: 1.0
    #[serde(rename = "Solid")]
    pub solids: f64,

    /// Background light extinction coefficient
    /// unit: 1/m
    /// default: 0.02
    pub lambda0: f64,

    /// Linear light extinction coefficient for algae
    /// unit: 1/m/(ug-Chla/L)
    /// default: 0.0088
    pub lambda1: f64,

    /// Non-linear light extinction coefficient for algae
    /// unit: 1/m/(ug-Chla/L)^(2/3)
    /// default: 0.054
    pub lambda2: f64,

    /// Light extinction coefficient for suspended solids
    /// unit: L/mg/m
    /// default: 0.052
    pub lambdas: f64,

    /// Light extinction coefficient for particulate organic matter
    /// unit: L/mg/m
    /// default: 0.174
    pub lambdam: f64,

    /// Fraction of solar radiation that is photosynthetically active
    /// unit: unitless
    /// default: 0.47
    #[serde(rename = "Fr_PAR")]
    pub fraction_par: f64,

    /// Euler step length
    /// unit: d
    /// default: 1.0
    pub timestep: f64,

    /// Hydraulic reaeration formula
    /// 1: user supplied `kah_20_user`, 2: O'Connor-Dobbins, 3: Churchill, 4: Owens-Gibbs,
    /// 5: Covar, 6: Tsivoglou-Wallace, 7: Thackston-Dawson, 8: USGS pool-riffle,
    /// 9: USGS channel-control
    /// default: 1
    pub hydraulic_reaeration_option: u8,

    /// User supplied hydraulic reaeration rate at 20 degC
    /// unit: 1/d
    /// default: 1.0
    pub kah_20_user: f64,

    /// Wind reaeration formula
    /// 1: user supplied `kaw_20_user`, 2: Broecker, 3: Mattingly, 4: Banks,
    /// 5: Banks-Herrera, 6: Wanninkhof, 7: Chen-Kanwisher, 8: Cole-Buchak, 9: Gelda,
    /// 10: Smith, 11: Liss, 12: Downing-Truesdale, 13: Kanwisher
    /// default: 1
    pub wind_reaeration_option: u8,

    /// User supplied wind reaeration velocity at 20 degC
    /// unit: m/d
    /// default: 0.0
    pub kaw_20_user: f64,

    /// Sediment oxygen demand from an external sediment model
    /// unit: g-O2/m2/d
    /// default: 0.0
    #[serde(rename = "SOD_Bed")]
    pub sod_bed: f64,

    /// Ammonium flux from an external sediment model
    /// unit: g-N/m2/d
    /// default: 0.0
    #[serde(rename = "JNH4")]
    pub jnh4: f64,

    /// Nitrate flux into an external sediment model
    /// unit: g-N/m2/d
    /// default: 0.0
    #[serde(rename = "JNO3")]
    pub jno3: f64,

    /// Soluble reactive phosphorus flux from an external sediment model
    /// unit: g-P/m2/d
    /// default: 0.0
    #[serde(rename = "JSRP")]
    pub jsrp: f64,

    /// Dissolved inorganic carbon flux from an external sediment model
    /// unit: g-C/m2/d
    /// default: 0.0
    #[serde(rename = "JDIC")]
    pub jdic: f64,
}

impl Default for GlobalVars {
    fn default() -> Self {
        Self {
            water_temperature: 20.0,
            depth: 1.5,
            velocity: 1.0,
            flow: 150.0,
            topwidth: 100.0,
            slope: 0.0002,
            shear_velocity: 0.05334,
            pressure_mb: 1013.25,
            wind_speed: 3.0,
            q_solar: 500.0,
            solids: 1.0,
            lambda0: 0.02,
            lambda1: 0.0088,
            lambda2: 0.054,
            lambdas: 0.052,
            lambdam: 0.174,
            fraction_par: 0.47,
            timestep: 1.0,
            hydraulic_reaeration_option: 1,
            kah_20_user: 1.0,
            wind_reaeration_option: 1,
            kaw_20_user: 0.0,
            sod_bed: 0.0,
            jnh4: 0.0,
            jno3: 0.0,
            jsrp: 0.0,
            jdic: 0.0,
        }
    }
}

impl StaticParameters for GlobalVars {
    fn static_values(&self) -> Vec<StaticValue> {
        vec![
            StaticValue::new("TwaterC", "degC", "Water temperature", self.water_temperature),
            StaticValue::new("depth", "m", "Water depth", self.depth),
            StaticValue::new("velocity", "m/s", "Mean water velocity", self.velocity),
            StaticValue::new("flow", "m3/s", "Flow rate", self.flow),
            StaticValue::new("topwidth", "m", "Channel top width", self.topwidth),
            StaticValue::new("slope", "m/m", "Channel slope", self.slope),
            StaticValue::new("shear_velocity", "m/s", "Shear velocity", self.shear_velocity),
            StaticValue::new("pressure_mb", "mbar", "Atmospheric pressure", self.pressure_mb),
            StaticValue::new("wind_speed", "m/s", "Wind speed at 2 m", self.wind_speed),
            StaticValue::new("q_solar", "W/m2", "Net solar radiation", self.q_solar),
            StaticValue::new("Solid", "mg/L", "Suspended solids", self.solids),
            StaticValue::new("lambda0", "1/m", "Background light extinction", self.lambda0),
            StaticValue::new(
                "lambda1",
                "1/m/(ug-Chla/L)",
                "Linear algal light extinction",
                self.lambda1,
            ),
            StaticValue::new(
                "lambda2",
                "1/m/(ug-Chla/L)^(2/3)",
                "Non-linear algal light extinction",
                self.lambda2,
            ),
            StaticValue::new("lambdas", "L/mg/m", "Solids light extinction", self.lambdas),
            StaticValue::new("lambdam", "L/mg/m", "Organic matter light extinction", self.lambdam),
            StaticValue::new("Fr_PAR", "unitless", "Fraction of PAR", self.fraction_par),
            StaticValue::new("timestep", "d", "Euler step length", self.timestep),
            StaticValue::new(
                "hydraulic_reaeration_option",
                "unitless",
                "Hydraulic reaeration formula",
                f64::from(self.hydraulic_reaeration_option),
            ),
            StaticValue::new(
                "kah_20_user",
                "1/d",
                "User hydraulic reaeration rate at 20C",
                self.kah_20_user,
            ),
            StaticValue::new(
                "wind_reaeration_option",
                "unitless",
                "Wind reaeration formula",
                f64::from(self.wind_reaeration_option),
            ),
            StaticValue::new(
                "kaw_20_user",
                "m/d",
                "User wind reaeration velocity at 20C",
                self.kaw_20_user,
            ),
            StaticValue::new("SOD_Bed", "g-O2/m2/d", "Sediment model SOD", self.sod_bed),
            StaticValue::new("JNH4", "g-N/m2/d", "Sediment model NH4 flux", self.jnh4),
            StaticValue::new("JNO3", "g-N/m2/d", "Sediment model NO3 flux", self.jno3),
            StaticValue::new("JSRP", "g-P/m2/d", "Sediment model SRP flux", self.jsrp),
            StaticValue::new("JDIC", "g-C/m2/d", "Sediment model DIC flux", self.jdic),
        ]
    }

    fn validate(&self) -> NsmResult<()> {
        check_option(
            "hydraulic_reaeration_option",
            self.hydraulic_reaeration_option,
            9,
        )?;
        check_option("wind_reaeration_option", self.wind_reaeration_option, 13)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parameters() {
        let params = GlobalVars::default();
        assert!((params.depth - 1.5).abs() < 1e-10);
        assert!((params.pressure_mb - 1013.25).abs() < 1e-10);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn reaeration_options() {
        let params: GlobalVars = toml::from_str("wind_reaeration_option = 13").unwrap();
        assert!(params.validate().is_ok());
        let params: GlobalVars = toml::from_str("hydraulic_reaeration_option = 10").unwrap();
        assert!(params.validate().is_err());
    }
}
