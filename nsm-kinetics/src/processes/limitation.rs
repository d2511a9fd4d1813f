//! Nutrient and density limitation of algal growth and the split of nitrogen uptake
//! between the ammonium and nitrate pools

use nsm_core::kernel::{clip, enabled, isnan, minimum, where_};
use nsm_core::process;
use nsm_core::variable::Variable;

/// Fraction of total inorganic phosphorus which is dissolved
pub fn dissolved_phosphorus_fraction(kdpo4: f64, solids: f64) -> f64 {
    1.0 / (1.0 + kdpo4 * solids)
}

/// Michaelis-Menten limitation, NaN treated as fully limited.
fn monod(concentration: f64, half_saturation: f64) -> f64 {
    let value = concentration / (half_saturation + concentration);
    clip(where_(isnan(value), 0.0, value), 0.0, 1.0)
}

pub fn nitrogen_limitation(use_nh4: f64, use_no3: f64, nh4: f64, no3: f64, ksn: f64) -> f64 {
    let nitrogen = where_(enabled(use_nh4), nh4, 0.0) + where_(enabled(use_no3), no3, 0.0);
    where_(
        enabled(use_nh4) || enabled(use_no3),
        monod(nitrogen, ksn),
        1.0,
    )
}

pub fn phosphorus_limitation(use_tip: f64, fdp: f64, tip: f64, ksp: f64) -> f64 {
    where_(enabled(use_tip), monod(fdp * tip, ksp), 1.0)
}

/// Self-shading of benthic algae as the bed fills up
pub fn density_limitation(ab: f64, ksb: f64) -> f64 {
    let value = 1.0 - ab / (ab + ksb);
    minimum(where_(isnan(value), 1.0, value), 1.0)
}

/// Combine light and nutrient limitation into a single growth factor.
///
/// Options: 1 multiplicative, 2 limiting nutrient, 3 harmonic mean of the nutrients.
/// Any other option gives NaN.
pub fn growth_limitation(option: i64, fl: f64, fn_: f64, fp: f64) -> f64 {
    match option {
        1 => fl * fp * fn_,
        2 => fl * minimum(fp, fn_),
        3 => where_(
            fn_ == 0.0 || fp == 0.0,
            0.0,
            fl * 2.0 / (1.0 / fn_ + 1.0 / fp),
        ),
        _ => f64::NAN,
    }
}

/// Fraction of nitrogen uptake drawn from ammonium, with ammonium preference `pn`.
///
/// If only one pool is simulated all uptake comes from it.
/// With neither pool the uptake is split evenly.
pub fn ammonium_uptake_fraction(use_nh4: f64, use_no3: f64, pn: f64, nh4: f64, no3: f64) -> f64 {
    let both = pn * nh4 / (pn * nh4 + (1.0 - pn) * no3);
    let both = where_(isnan(both), pn, both);
    match (enabled(use_nh4), enabled(use_no3)) {
        (true, true) => both,
        (true, false) => 1.0,
        (false, true) => 0.0,
        (false, false) => 0.5,
    }
}

pub fn variables() -> Vec<Variable> {
    vec![
        Variable::dynamic(
            "fdp",
            "unitless",
            "Fraction of phosphorus dissolved",
            process!(|kdpo4, Solid| dissolved_phosphorus_fraction(kdpo4, Solid)),
        ),
        Variable::dynamic(
            "FN",
            "unitless",
            "Algal nitrogen limitation",
            process!(|use_NH4, use_NO3, NH4, NO3, KsN| nitrogen_limitation(
                use_NH4, use_NO3, NH4, NO3, KsN
            )),
        ),
        Variable::dynamic(
            "FP",
            "unitless",
            "Algal phosphorus limitation",
            process!(|use_TIP, fdp, TIP, KsP| phosphorus_limitation(use_TIP, fdp, TIP, KsP)),
        ),
        Variable::dynamic(
            "FNb",
            "unitless",
            "Benthic algae nitrogen limitation",
            process!(|use_NH4, use_NO3, NH4, NO3, KsNb| nitrogen_limitation(
                use_NH4, use_NO3, NH4, NO3, KsNb
            )),
        ),
        Variable::dynamic(
            "FPb",
            "unitless",
            "Benthic algae phosphorus limitation",
            process!(|use_TIP, fdp, TIP, KsPb| phosphorus_limitation(use_TIP, fdp, TIP, KsPb)),
        ),
        Variable::dynamic(
            "FSb",
            "unitless",
            "Benthic algae density limitation",
            process!(|Ab, Ksb| density_limitation(Ab, Ksb)),
        ),
        Variable::dynamic(
            "ApUptakeFr_NH4",
            "unitless",
            "Fraction of algal nitrogen uptake from NH4",
            process!(|use_NH4, use_NO3, PN, NH4, NO3| ammonium_uptake_fraction(
                use_NH4, use_NO3, PN, NH4, NO3
            )),
        ),
        Variable::dynamic(
            "ApUptakeFr_NO3",
            "unitless",
            "Fraction of algal nitrogen uptake from NO3",
            process!(|ApUptakeFr_NH4| 1.0 - ApUptakeFr_NH4),
        ),
        Variable::dynamic(
            "AbUptakeFr_NH4",
            "unitless",
            "Fraction of benthic algae nitrogen uptake from NH4",
            process!(|use_NH4, use_NO3, PNb, NH4, NO3| ammonium_uptake_fraction(
                use_NH4, use_NO3, PNb, NH4, NO3
            )),
        ),
        Variable::dynamic(
            "AbUptakeFr_NO3",
            "unitless",
            "Fraction of benthic algae nitrogen uptake from NO3",
            process!(|AbUptakeFr_NH4| 1.0 - AbUptakeFr_NH4),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn nitrogen() {
        assert_relative_eq!(nitrogen_limitation(1.0, 1.0, 0.25, 0.25, 0.5), 0.5);
        assert_relative_eq!(nitrogen_limitation(1.0, 0.0, 0.1, 100.0, 0.1), 0.5);
        assert_eq!(nitrogen_limitation(0.0, 0.0, 0.0, 0.0, 0.1), 1.0);
        // 0/0
        assert_eq!(nitrogen_limitation(1.0, 1.0, 0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn phosphorus() {
        let fdp = dissolved_phosphorus_fraction(0.0, 1.0);
        assert_eq!(fdp, 1.0);
        assert_relative_eq!(phosphorus_limitation(1.0, fdp, 0.01, 0.01), 0.5);
        assert_eq!(phosphorus_limitation(0.0, fdp, 0.0, 0.01), 1.0);
    }

    #[test]
    fn density() {
        assert_relative_eq!(density_limitation(10.0, 10.0), 0.5);
        assert_eq!(density_limitation(0.0, 0.0), 1.0);
    }

    #[test]
    fn growth_options() {
        assert_relative_eq!(growth_limitation(1, 0.5, 0.5, 0.8), 0.2);
        assert_relative_eq!(growth_limitation(2, 0.5, 0.5, 0.8), 0.25);
        assert_relative_eq!(growth_limitation(3, 1.0, 0.5, 0.5), 0.5);
        assert_eq!(growth_limitation(3, 1.0, 0.0, 0.5), 0.0);
        assert!(growth_limitation(4, 1.0, 0.5, 0.5).is_nan());
    }

    #[test]
    fn uptake_fraction() {
        assert_relative_eq!(ammonium_uptake_fraction(1.0, 1.0, 0.5, 1.0, 3.0), 0.25);
        // 0/0 falls back to the preference factor
        assert_eq!(ammonium_uptake_fraction(1.0, 1.0, 0.7, 0.0, 0.0), 0.7);
        assert_eq!(ammonium_uptake_fraction(1.0, 0.0, 0.7, 0.0, 1.0), 1.0);
        assert_eq!(ammonium_uptake_fraction(0.0, 1.0, 0.7, 1.0, 1.0), 0.0);
        assert_eq!(ammonium_uptake_fraction(0.0, 0.0, 0.7, 1.0, 1.0), 0.5);
    }
}
