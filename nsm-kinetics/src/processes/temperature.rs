//! Temperature and pressure conversions shared by the kinetics

use nsm_core::process;
use nsm_core::variable::Variable;

/// Offset between degrees Celsius and Kelvin used by the saturation formulas
pub const KELVIN_OFFSET: f64 = 273.16;

/// Standard atmosphere
/// unit: mbar
pub const STANDARD_PRESSURE_MB: f64 = 1013.25;

/// Arrhenius temperature correction of a rate given at 20 degC.
///
/// `rate_20 * theta^(TwaterC - 20)`
pub fn arrhenius(water_temperature: f64, rate_20: f64, theta: f64) -> f64 {
    rate_20 * theta.powf(water_temperature - 20.0)
}

pub fn kelvin(water_temperature: f64) -> f64 {
    water_temperature + KELVIN_OFFSET
}

/// Partial pressure of water vapour
///
/// unit: atm
pub fn water_vapour_pressure(temperature_k: f64) -> f64 {
    (11.8571 - 3840.70 / temperature_k - 216961.0 / temperature_k.powi(2)).exp()
}

pub fn variables() -> Vec<Variable> {
    vec![
        Variable::dynamic(
            "TwaterK",
            "K",
            "Water temperature",
            process!(|TwaterC| kelvin(TwaterC)),
        ),
        Variable::dynamic(
            "pressure_atm",
            "atm",
            "Atmospheric pressure",
            process!(|pressure_mb| pressure_mb / STANDARD_PRESSURE_MB),
        ),
    ]
}
