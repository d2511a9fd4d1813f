//! Light attenuation and light limitation of algal growth
//!
//! Floating algae see the depth-averaged light in the water column while benthic algae
//! see what reaches the bed.

use std::ops::RangeInclusive;

use nsm_core::kernel::{clip, enabled, isnan, option, where_};
use nsm_core::process;
use nsm_core::variable::Variable;

/// Below this the light constant is treated as zero
const KL_EPSILON: f64 = 1e-10;

/// Valid light limitation options
pub const LIGHT_OPTIONS: RangeInclusive<i64> = 1..=3;

/// Light extinction coefficient of the water column
///
/// unit: 1/m
#[allow(clippy::too_many_arguments)]
pub fn extinction_coefficient(
    lambda0: f64,
    lambdas: f64,
    solids: f64,
    organic_matter: f64,
    lambdam: f64,
    lambda1: f64,
    lambda2: f64,
    algae: f64,
) -> f64 {
    lambda0 + lambdas * solids + lambdam * organic_matter + lambda1 * algae
        + lambda2 * algae.powf(0.66667)
}

/// Depth-averaged light limitation for a layer with extinction `kext`.
///
/// Options: 1 half-saturation, 2 Smith, 3 Steele.
/// Any other option gives NaN.
pub fn depth_averaged_limitation(option: i64, par: f64, kl: f64, kext: f64) -> f64 {
    match option {
        1 => (1.0 / kext) * ((kl + par) / (kl + par * (-kext).exp())).ln(),
        2 => {
            if kl.abs() < KL_EPSILON {
                return 1.0;
            }
            let surface = par / kl;
            let bottom = par * (-kext).exp() / kl;
            (1.0 / kext)
                * ((surface + (1.0 + surface.powi(2)).sqrt())
                    / (bottom + (1.0 + bottom.powi(2)).sqrt()))
                .ln()
        }
        3 => {
            if kl.abs() < KL_EPSILON {
                return 0.0;
            }
            (2.718 / kext) * ((-par / kl * (-kext).exp()).exp() - (-par / kl).exp())
        }
        _ => f64::NAN,
    }
}

/// Zero where there is no biomass or no light, NaN treated as no growth and the result
/// clamped to `[0, 1]`.
///
/// An unknown option is left as NaN so that it shows up in the warning log.
fn guard(option: i64, value: f64, biomass: f64, kext: f64, par: f64) -> f64 {
    if !LIGHT_OPTIONS.contains(&option) {
        return f64::NAN;
    }
    let value = where_(biomass <= 0.0 || kext <= 0.0 || par <= 0.0, 0.0, value);
    clip(where_(isnan(value), 0.0, value), 0.0, 1.0)
}

pub fn algae_light_limitation(option: i64, ap: f64, par: f64, kl: f64, l: f64, depth: f64) -> f64 {
    let kext = l * depth;
    guard(option, depth_averaged_limitation(option, par, kl, kext), ap, kext, par)
}

/// Light limitation of benthic algae.
///
/// Uses the depth-averaged forms with the bed transmittance `exp(-L * depth)` as the
/// extinction term.
pub fn benthic_light_limitation(
    option: i64,
    ab: f64,
    par: f64,
    klb: f64,
    l: f64,
    depth: f64,
) -> f64 {
    let kext = (-l * depth).exp();
    guard(option, depth_averaged_limitation(option, par, klb, kext), ab, kext, par)
}

pub fn variables() -> Vec<Variable> {
    vec![
        Variable::dynamic(
            "L",
            "1/m",
            "Light extinction coefficient",
            process!(|lambda0,
                      lambdas,
                      Solid,
                      use_POC,
                      lambdam,
                      POC,
                      fcom,
                      use_Algae,
                      lambda1,
                      lambda2,
                      Ap| {
                let organic_matter = where_(enabled(use_POC), POC / fcom, 0.0);
                let algae = where_(enabled(use_Algae), Ap, 0.0);
                extinction_coefficient(
                    lambda0,
                    lambdas,
                    Solid,
                    organic_matter,
                    lambdam,
                    lambda1,
                    lambda2,
                    algae,
                )
            }),
        ),
        Variable::dynamic(
            "PAR",
            "W/m2",
            "Photosynthetically active radiation at the surface",
            process!(|use_Algae, use_Balgae, q_solar, Fr_PAR| where_(
                enabled(use_Algae) || enabled(use_Balgae),
                q_solar * Fr_PAR,
                0.0
            )),
        ),
        Variable::dynamic(
            "FL",
            "unitless",
            "Algal light limitation",
            process!(|light_limitation_option, Ap, PAR, KL, L, depth| {
                algae_light_limitation(option(light_limitation_option), Ap, PAR, KL, L, depth)
            }),
        ),
        Variable::dynamic(
            "FLb",
            "unitless",
            "Benthic algae light limitation",
            process!(|b_light_limitation_option, Ab, PAR, KLb, L, depth| {
                benthic_light_limitation(option(b_light_limitation_option), Ab, PAR, KLb, L, depth)
            }),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn clear_water_extinction() {
        assert_eq!(
            extinction_coefficient(0.02, 0.052, 1.0, 0.0, 0.174, 0.0088, 0.054, 0.0),
            0.02 + 0.052
        );
    }

    #[test]
    fn limitation_is_bounded() {
        for opt in 1..=3 {
            for par in [1.0, 50.0, 235.0, 1000.0] {
                let fl = algae_light_limitation(opt, 36.77, par, 10.0, 1.2, 1.5);
                assert!((0.0..=1.0).contains(&fl), "option {} par {}: {}", opt, par, fl);
                let flb = benthic_light_limitation(opt, 24.0, par, 10.0, 1.2, 1.5);
                assert!((0.0..=1.0).contains(&flb), "option {} par {}: {}", opt, par, flb);
            }
        }
    }

    #[test]
    fn no_light_or_biomass() {
        assert_eq!(algae_light_limitation(1, 36.77, 0.0, 10.0, 1.2, 1.5), 0.0);
        assert_eq!(algae_light_limitation(1, 0.0, 200.0, 10.0, 1.2, 1.5), 0.0);
        assert_eq!(algae_light_limitation(2, 36.77, 200.0, 10.0, 0.0, 1.5), 0.0);
        assert_eq!(benthic_light_limitation(3, 0.0, 200.0, 10.0, 1.2, 1.5), 0.0);
    }

    #[test]
    fn degenerate_light_constant() {
        assert_eq!(depth_averaged_limitation(2, 100.0, 0.0, 1.0), 1.0);
        assert_eq!(depth_averaged_limitation(3, 100.0, 0.0, 1.0), 0.0);
    }

    #[test]
    fn unknown_option_is_nan() {
        assert!(depth_averaged_limitation(7, 235.0, 10.0, 1.8).is_nan());
        assert!(algae_light_limitation(7, 36.77, 235.0, 10.0, 1.2, 1.5).is_nan());
        assert!(benthic_light_limitation(0, 24.0, 235.0, 1.0, 1.2, 1.5).is_nan());
    }

    #[test]
    fn bed_transmittance() {
        let (par, klb, l, depth): (f64, f64, f64, f64) = (235.0, 1.0, 2.0, 1.5);
        let kext = (-l * depth).exp();
        let expected = ((klb + par) / (klb + par * (-kext).exp())).ln() / kext;
        assert_relative_eq!(
            benthic_light_limitation(1, 24.0, par, klb, l, depth),
            expected,
            max_relative = 1e-12
        );
    }

    #[test]
    fn half_saturation_matches_closed_form() {
        let (par, kl, kext): (f64, f64, f64) = (235.0, 10.0, 1.8);
        let expected = ((kl + par) / (kl + par * (-kext).exp())).ln() / kext;
        assert_relative_eq!(depth_averaged_limitation(1, par, kl, kext), expected);
    }

    #[test]
    fn light_is_off_without_algae() {
        let par = variables()[1].process.unwrap();
        assert_eq!(par.evaluate(&[0.0, 0.0, 500.0, 0.47]), 0.0);
        assert_relative_eq!(par.evaluate(&[0.0, 1.0, 500.0, 0.47]), 235.0);
    }
}
