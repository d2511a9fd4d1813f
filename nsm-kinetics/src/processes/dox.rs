//! Dissolved oxygen (`DOX`)

use nsm_core::kernel::{enabled, where_};
use nsm_core::process;
use nsm_core::variable::Variable;

use super::gated;
use super::nitrogen::benthic_to_water;
use super::temperature::{arrhenius, water_vapour_pressure, KELVIN_OFFSET};

/// Oxygen produced per unit carbon fixed when algae take up nitrate
const OXYGEN_PER_NITRATE_UPTAKE: f64 = 138.0 / 106.0;
/// Reduction in oxygen production when nitrogen is taken up as ammonium
const AMMONIUM_UPTAKE_CREDIT: f64 = 32.0 / 106.0;

/// Oxygen saturation concentration in fresh water
///
/// The Benson-Krause fit at one atmosphere with a correction for atmospheric pressure
/// and water vapour.
///
/// unit: mg-O2/L
pub fn oxygen_saturation(temperature_k: f64, pressure_atm: f64) -> f64 {
    let ln_cs = -139.34411 + 1.575701e5 / temperature_k - 6.642308e7 / temperature_k.powi(2)
        + 1.243800e10 / temperature_k.powi(3)
        - 8.621949e11 / temperature_k.powi(4);
    let cs = ln_cs.exp();

    let pwv = water_vapour_pressure(temperature_k);
    let t = temperature_k - KELVIN_OFFSET;
    let theta = 0.000975 - 1.426e-5 * t + 6.436e-8 * t.powi(2);

    cs * pressure_atm * (1.0 - pwv / pressure_atm) * (1.0 - theta * pressure_atm)
        / ((1.0 - pwv) * (1.0 - theta))
}

/// Oxygen released per unit of algal carbon growth
pub fn photosynthesis_oxygen_ratio(ammonium_fraction: f64) -> f64 {
    OXYGEN_PER_NITRATE_UPTAKE - AMMONIUM_UPTAKE_CREDIT * ammonium_fraction
}

pub fn sediment_oxygen_demand(
    use_sod: f64,
    use_sedflux: f64,
    sod_bed: f64,
    water_temperature: f64,
    sod_20: f64,
    sod_theta: f64,
) -> f64 {
    let sod = where_(
        enabled(use_sedflux),
        sod_bed,
        arrhenius(water_temperature, sod_20, sod_theta),
    );
    gated(use_sod, sod)
}

pub fn variables() -> Vec<Variable> {
    vec![
        Variable::dynamic(
            "DOX_sat",
            "mg-O2/L",
            "Oxygen saturation concentration",
            process!(|TwaterK, pressure_atm| oxygen_saturation(TwaterK, pressure_atm)),
        ),
        Variable::dynamic(
            "DOX_reaeration",
            "mg-O2/L/d",
            "Atmospheric reaeration",
            process!(|use_DOX, ka_tc, DOX_sat, DOX| gated(use_DOX, ka_tc * (DOX_sat - DOX))),
        ),
        Variable::dynamic(
            "DOX_ApGrowth",
            "mg-O2/L/d",
            "Oxygen from algal photosynthesis",
            process!(|ApUptakeFr_NH4, rca, roc, ApGrowth| photosynthesis_oxygen_ratio(
                ApUptakeFr_NH4
            ) * rca
                * roc
                * ApGrowth),
        ),
        Variable::dynamic(
            "DOX_ApRespiration",
            "mg-O2/L/d",
            "Oxygen consumed by algal respiration",
            process!(|rca, roc, ApRespiration| rca * roc * ApRespiration),
        ),
        Variable::dynamic(
            "DOX_AbGrowth",
            "mg-O2/L/d",
            "Oxygen from benthic algae photosynthesis",
            process!(|AbUptakeFr_NH4, rcb, roc, AbGrowth, Fb, depth| benthic_to_water(
                photosynthesis_oxygen_ratio(AbUptakeFr_NH4) * rcb * roc * AbGrowth,
                Fb,
                depth
            )),
        ),
        Variable::dynamic(
            "DOX_AbRespiration",
            "mg-O2/L/d",
            "Oxygen consumed by benthic algae respiration",
            process!(|rcb, roc, AbRespiration, Fb, depth| benthic_to_water(
                rcb * roc * AbRespiration,
                Fb,
                depth
            )),
        ),
        Variable::dynamic(
            "DOX_Nitrification",
            "mg-O2/L/d",
            "Oxygen consumed by nitrification",
            process!(|ron, NH4_Nitrification| ron * NH4_Nitrification),
        ),
        Variable::dynamic(
            "DOX_DOC_oxidation",
            "mg-O2/L/d",
            "Oxygen consumed by DOC oxidation",
            process!(|roc, DOC_oxidation| roc * DOC_oxidation),
        ),
        Variable::dynamic(
            "DOX_CBOD_oxidation",
            "mg-O2/L/d",
            "Oxygen consumed by CBOD oxidation",
            process!(|CBOD_oxidation| CBOD_oxidation),
        ),
        Variable::dynamic(
            "SOD_tc",
            "g-O2/m2/d",
            "Sediment oxygen demand",
            process!(|use_SOD, use_SedFlux, SOD_Bed, TwaterC, SOD_20, SOD_theta| {
                sediment_oxygen_demand(use_SOD, use_SedFlux, SOD_Bed, TwaterC, SOD_20, SOD_theta)
            }),
        ),
        Variable::dynamic(
            "DOX_SOD",
            "mg-O2/L/d",
            "Oxygen consumed by the sediment",
            process!(|SOD_tc, depth| SOD_tc / depth),
        ),
        Variable::dynamic(
            "dDOXdt",
            "mg-O2/L/d",
            "Rate of change of dissolved oxygen",
            process!(|use_DOX,
                      DOX_reaeration,
                      DOX_ApGrowth,
                      DOX_ApRespiration,
                      DOX_AbGrowth,
                      DOX_AbRespiration,
                      DOX_Nitrification,
                      DOX_DOC_oxidation,
                      DOX_CBOD_oxidation,
                      DOX_SOD| {
                gated(
                    use_DOX,
                    DOX_reaeration + DOX_ApGrowth - DOX_ApRespiration + DOX_AbGrowth
                        - DOX_AbRespiration
                        - DOX_Nitrification
                        - DOX_DOC_oxidation
                        - DOX_CBOD_oxidation
                        - DOX_SOD,
                )
            }),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn saturation_at_standard_conditions() {
        // Tabulated values for fresh water at one atmosphere
        assert_relative_eq!(oxygen_saturation(293.16, 1.0), 9.09, max_relative = 5e-3);
        assert_relative_eq!(oxygen_saturation(273.16, 1.0), 14.62, max_relative = 5e-3);
    }

    #[test]
    fn saturation_increases_with_pressure() {
        let sea_level = oxygen_saturation(293.16, 1.0);
        let altitude = oxygen_saturation(293.16, 0.8);
        assert!(altitude < sea_level);
        assert_relative_eq!(altitude / sea_level, 0.8, max_relative = 0.01);
    }

    #[test]
    fn photosynthesis_ratio() {
        assert_relative_eq!(photosynthesis_oxygen_ratio(0.0), 138.0 / 106.0);
        assert_relative_eq!(photosynthesis_oxygen_ratio(1.0), 1.0);
    }

    #[test]
    fn sod_sources() {
        assert_eq!(sediment_oxygen_demand(0.0, 0.0, 5.0, 25.0, 2.0, 1.06), 0.0);
        assert_eq!(sediment_oxygen_demand(1.0, 0.0, 5.0, 20.0, 2.0, 1.06), 2.0);
        assert_eq!(sediment_oxygen_demand(1.0, 1.0, 5.0, 20.0, 2.0, 1.06), 5.0);
    }
}
