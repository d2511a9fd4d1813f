//! Atmospheric reaeration
//!
//! The combined reaeration rate `ka_tc` is the sum of a hydraulic (stream turbulence)
//! component and a wind driven component.
//! Each is selected from a set of empirical formulas.

use nsm_core::kernel::{option, where_};
use nsm_core::process;
use nsm_core::variable::Variable;

use super::temperature::arrhenius;

/// Flow below which the low-flow variants of the empirical formulas apply
/// unit: m3/s
const LOW_FLOW: f64 = 0.556;

/// Molecular diffusivity of oxygen in water
/// unit: m2/s
const OXYGEN_DIFFUSIVITY: f64 = 2.04e-9;

const GRAVITY: f64 = 9.81;

fn oconnor_dobbins(velocity: f64, depth: f64) -> f64 {
    3.93 * velocity.powf(0.5) / depth.powf(1.5)
}

fn churchill(velocity: f64, depth: f64) -> f64 {
    5.026 * velocity / depth.powf(1.67)
}

fn owens_gibbs(velocity: f64, depth: f64) -> f64 {
    5.32 * velocity.powf(0.67) / depth.powf(1.85)
}

/// Hydraulic reaeration rate at 20 degC
///
/// unit: 1/d
#[allow(clippy::too_many_arguments)]
pub fn hydraulic_reaeration(
    option: i64,
    user_rate: f64,
    velocity: f64,
    depth: f64,
    flow: f64,
    topwidth: f64,
    slope: f64,
    shear_velocity: f64,
) -> f64 {
    let low_flow = flow < LOW_FLOW;
    match option {
        1 => user_rate,
        2 => oconnor_dobbins(velocity, depth),
        3 => churchill(velocity, depth),
        4 => owens_gibbs(velocity, depth),
        // Covar: pick the formula suited to the depth and velocity
        5 => {
            if depth < 0.61 {
                owens_gibbs(velocity, depth)
            } else if depth > 3.45 * velocity.powf(2.5) {
                oconnor_dobbins(velocity, depth)
            } else {
                churchill(velocity, depth)
            }
        }
        // Tsivoglou-Wallace
        6 => where_(low_flow, 31183.0, 15308.0) * velocity * slope,
        // Thackston-Dawson
        7 => {
            let froude = velocity / (GRAVITY * depth).sqrt();
            2.16 * (1.0 + 9.0 * froude.powf(0.25)) * shear_velocity / depth
        }
        // USGS pool-riffle
        8 => {
            let stream_power = velocity * slope;
            if low_flow {
                517.0 * stream_power.powf(0.524) * flow.powf(-0.242)
            } else {
                596.0 * stream_power.powf(0.528) * flow.powf(-0.136)
            }
        }
        // USGS channel-control
        9 => {
            let stream_power = velocity * slope;
            if low_flow {
                88.0 * stream_power.powf(0.313) * depth.powf(-0.353)
            } else {
                142.0 * stream_power.powf(0.333) * depth.powf(-0.66) * topwidth.powf(-0.243)
            }
        }
        _ => f64::NAN,
    }
}

/// Wind speed at 10 m from the wind speed at 2 m
pub fn wind_speed_10m(wind_speed: f64) -> f64 {
    wind_speed * (10.0_f64 / 2.0).powf(0.143)
}

/// Wind driven oxygen transfer velocity at 20 degC
///
/// unit: m/d
pub fn wind_reaeration(option: i64, user_rate: f64, uw10: f64) -> f64 {
    match option {
        1 => user_rate,
        // Broecker
        2 => 0.864 * uw10,
        // Mattingly
        3 => 0.728 * uw10.powf(0.5),
        // Banks
        4 => {
            if uw10 <= 5.5 {
                0.362 * uw10.powf(0.5)
            } else {
                0.0277 * uw10.powi(2)
            }
        }
        // Banks-Herrera
        5 => 0.728 * uw10.powf(0.5) - 0.317 * uw10 + 0.0372 * uw10.powi(2),
        // Wanninkhof
        6 => 0.0986 * uw10.powf(1.64),
        // Chen-Kanwisher
        7 => OXYGEN_DIFFUSIVITY / ((200.0 - 60.0 * uw10.sqrt()) * 1e-6) * 86400.0,
        // Cole-Buchak
        8 => 0.5 + 0.05 * uw10.powi(2),
        // Gelda
        9 => {
            if uw10 <= 3.5 {
                0.2 * uw10
            } else {
                0.057 * uw10.powi(2)
            }
        }
        // Smith
        10 => 0.64 + 0.128 * uw10.powi(2),
        // Liss
        11 => {
            if uw10 <= 4.1 {
                0.156 * uw10.powf(0.63)
            } else {
                0.0269 * uw10.powf(1.9)
            }
        }
        // Downing-Truesdale
        12 => 0.0276 * uw10.powi(2),
        // Kanwisher
        13 => 0.0432 * uw10.powi(2),
        _ => f64::NAN,
    }
}

pub fn variables() -> Vec<Variable> {
    vec![
        Variable::dynamic(
            "kah_20",
            "1/d",
            "Hydraulic reaeration rate at 20C",
            process!(|hydraulic_reaeration_option,
                      kah_20_user,
                      velocity,
                      depth,
                      flow,
                      topwidth,
                      slope,
                      shear_velocity| {
                hydraulic_reaeration(
                    option(hydraulic_reaeration_option),
                    kah_20_user,
                    velocity,
                    depth,
                    flow,
                    topwidth,
                    slope,
                    shear_velocity,
                )
            }),
        ),
        Variable::dynamic(
            "kah_tc",
            "1/d",
            "Hydraulic reaeration rate",
            process!(|TwaterC, kah_20| arrhenius(TwaterC, kah_20, 1.024)),
        ),
        Variable::dynamic(
            "Uw10",
            "m/s",
            "Wind speed at 10 m",
            process!(|wind_speed| wind_speed_10m(wind_speed)),
        ),
        Variable::dynamic(
            "kaw_20",
            "m/d",
            "Wind reaeration velocity at 20C",
            process!(|wind_reaeration_option, kaw_20_user, Uw10| wind_reaeration(
                option(wind_reaeration_option),
                kaw_20_user,
                Uw10
            )),
        ),
        Variable::dynamic(
            "kaw_tc",
            "m/d",
            "Wind reaeration velocity",
            process!(|TwaterC, kaw_20| arrhenius(TwaterC, kaw_20, 1.024)),
        ),
        Variable::dynamic(
            "ka_tc",
            "1/d",
            "Oxygen reaeration rate",
            process!(|kaw_tc, depth, kah_tc| kaw_tc / depth + kah_tc),
        ),
    ]
}
