//! Dissolved nitrogen gas (`N2`)
//!
//! N2 relaxes towards saturation at a rate proportional to the oxygen reaeration rate.

use nsm_core::kernel::maximum;
use nsm_core::process;
use nsm_core::variable::Variable;

use super::gated;
use super::temperature::water_vapour_pressure;

/// Kelvin offset used with the 298.15 K reference temperature of the Henry constant
const ABSOLUTE_ZERO_OFFSET: f64 = 273.15;
const REFERENCE_TEMPERATURE_K: f64 = 298.15;

/// Henry's law constant for nitrogen gas
///
/// unit: mol/L/atm
pub fn n2_henry_constant(water_temperature: f64) -> f64 {
    let temperature_k = water_temperature + ABSOLUTE_ZERO_OFFSET;
    6.5e-4 * (1300.0 * (1.0 / temperature_k - 1.0 / REFERENCE_TEMPERATURE_K)).exp()
}

/// Saturation concentration of nitrogen gas, never negative
///
/// unit: mg-N/L
pub fn n2_saturation(water_temperature: f64, atm_fraction: f64, pressure_atm: f64) -> f64 {
    let pwv = water_vapour_pressure(water_temperature + ABSOLUTE_ZERO_OFFSET);
    let saturation =
        2.8e4 * n2_henry_constant(water_temperature) * atm_fraction * (pressure_atm - pwv);
    maximum(saturation, 0.0)
}

pub fn variables() -> Vec<Variable> {
    vec![
        Variable::dynamic(
            "KHN2_tc",
            "mol/L/atm",
            "Henry's law constant for N2",
            process!(|TwaterC| n2_henry_constant(TwaterC)),
        ),
        Variable::dynamic(
            "N2sat",
            "mg-N/L",
            "N2 saturation concentration",
            process!(|TwaterC, N2_atm_fraction, pressure_atm| n2_saturation(
                TwaterC,
                N2_atm_fraction,
                pressure_atm
            )),
        ),
        Variable::dynamic(
            "dN2dt",
            "mg-N/L/d",
            "Rate of change of N2",
            process!(|use_N2, rkaN2, ka_tc, N2sat, N2| gated(
                use_N2,
                rkaN2 * ka_tc * (N2sat - N2)
            )),
        ),
    ]
}
