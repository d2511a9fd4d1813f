//! Nitrogen cycle: organic nitrogen (`OrgN`), ammonium (`NH4`) and nitrate (`NO3`)

use nsm_core::kernel::{enabled, where_};
use nsm_core::process;
use nsm_core::variable::Variable;

use super::gated;
use super::temperature::arrhenius;

/// Oxygen limitation of nitrification
pub fn nitrification_oxygen_factor(use_dox: f64, knr: f64, dox: f64) -> f64 {
    where_(enabled(use_dox), 1.0 - (-knr * dox).exp(), 1.0)
}

/// Oxygen inhibition of denitrification
pub fn denitrification_oxygen_factor(use_dox: f64, ks_ox: f64, dox: f64) -> f64 {
    where_(enabled(use_dox), 1.0 - dox / (ks_ox + dox), 1.0)
}

/// Areal benthic flux expressed as a water column rate
pub fn benthic_to_water(flux: f64, fb: f64, depth: f64) -> f64 {
    flux * fb / depth
}

/// Share of benthic algae mortality released to the water column.
///
/// The remaining `1 - fw` is deposited on the bed as particulate organic matter.
pub fn benthic_mortality_to_water(flux: f64, fw: f64, fb: f64, depth: f64) -> f64 {
    benthic_to_water(fw * flux, fb, depth)
}

pub fn variables() -> Vec<Variable> {
    vec![
        Variable::dynamic(
            "knit_tc",
            "1/d",
            "Nitrification rate",
            process!(|TwaterC, knit_20| arrhenius(TwaterC, knit_20, 1.083)),
        ),
        Variable::dynamic(
            "rnh4_tc",
            "g-N/m2/d",
            "Sediment release rate of NH4",
            process!(|TwaterC, rnh4_20| arrhenius(TwaterC, rnh4_20, 1.074)),
        ),
        Variable::dynamic(
            "vno3_tc",
            "m/d",
            "Sediment denitrification transfer velocity",
            process!(|TwaterC, vno3_20| arrhenius(TwaterC, vno3_20, 1.08)),
        ),
        Variable::dynamic(
            "kon_tc",
            "1/d",
            "Organic nitrogen decay rate",
            process!(|TwaterC, kon_20| arrhenius(TwaterC, kon_20, 1.047)),
        ),
        Variable::dynamic(
            "kdnit_tc",
            "1/d",
            "Denitrification rate",
            process!(|TwaterC, kdnit_20| arrhenius(TwaterC, kdnit_20, 1.045)),
        ),
        // Organic nitrogen
        Variable::dynamic(
            "ApDeath_OrgN",
            "mg-N/L/d",
            "Organic nitrogen from algal death",
            process!(|rna, ApDeath| rna * ApDeath),
        ),
        Variable::dynamic(
            "AbDeath_OrgN",
            "mg-N/L/d",
            "Organic nitrogen from benthic algae death",
            process!(|rnb, AbDeath, Fw, Fb, depth| benthic_mortality_to_water(
                rnb * AbDeath,
                Fw,
                Fb,
                depth
            )),
        ),
        Variable::dynamic(
            "OrgN_NH4_Decay",
            "mg-N/L/d",
            "Decay of organic nitrogen to NH4",
            process!(|use_OrgN, kon_tc, OrgN| gated(use_OrgN, kon_tc * OrgN)),
        ),
        Variable::dynamic(
            "OrgN_Settling",
            "mg-N/L/d",
            "Settling of organic nitrogen",
            process!(|use_OrgN, vson, depth, OrgN| gated(use_OrgN, vson / depth * OrgN)),
        ),
        Variable::dynamic(
            "dOrgNdt",
            "mg-N/L/d",
            "Rate of change of organic nitrogen",
            process!(|use_OrgN, ApDeath_OrgN, AbDeath_OrgN, OrgN_NH4_Decay, OrgN_Settling| {
                gated(
                    use_OrgN,
                    ApDeath_OrgN + AbDeath_OrgN - OrgN_NH4_Decay - OrgN_Settling,
                )
            }),
        ),
        // Ammonium
        Variable::dynamic(
            "NH4_Nitrification",
            "mg-N/L/d",
            "Nitrification of NH4 to NO3",
            process!(|use_NH4, knit_tc, NH4, use_DOX, KNR, DOX| gated(
                use_NH4,
                knit_tc * NH4 * nitrification_oxygen_factor(use_DOX, KNR, DOX)
            )),
        ),
        Variable::dynamic(
            "NH4_SedRelease",
            "mg-N/L/d",
            "Release of NH4 from the sediment",
            process!(|use_NH4, use_SedFlux, JNH4, rnh4_tc, depth| gated(
                use_NH4,
                where_(enabled(use_SedFlux), JNH4, rnh4_tc) / depth
            )),
        ),
        Variable::dynamic(
            "NH4_ApRespiration",
            "mg-N/L/d",
            "NH4 from algal respiration",
            process!(|rna, ApRespiration| rna * ApRespiration),
        ),
        Variable::dynamic(
            "NH4_ApGrowth",
            "mg-N/L/d",
            "NH4 uptake by algae",
            process!(|ApUptakeFr_NH4, rna, ApGrowth| ApUptakeFr_NH4 * rna * ApGrowth),
        ),
        Variable::dynamic(
            "NH4_AbRespiration",
            "mg-N/L/d",
            "NH4 from benthic algae respiration",
            process!(|rnb, AbRespiration, Fb, depth| benthic_to_water(
                rnb * AbRespiration,
                Fb,
                depth
            )),
        ),
        Variable::dynamic(
            "NH4_AbGrowth",
            "mg-N/L/d",
            "NH4 uptake by benthic algae",
            process!(|AbUptakeFr_NH4, rnb, AbGrowth, Fb, depth| benthic_to_water(
                AbUptakeFr_NH4 * rnb * AbGrowth,
                Fb,
                depth
            )),
        ),
        Variable::dynamic(
            "dNH4dt",
            "mg-N/L/d",
            "Rate of change of NH4",
            process!(|use_NH4,
                      OrgN_NH4_Decay,
                      NH4_Nitrification,
                      NH4_SedRelease,
                      NH4_ApRespiration,
                      NH4_ApGrowth,
                      NH4_AbRespiration,
                      NH4_AbGrowth| {
                gated(
                    use_NH4,
                    OrgN_NH4_Decay - NH4_Nitrification + NH4_SedRelease + NH4_ApRespiration
                        - NH4_ApGrowth
                        + NH4_AbRespiration
                        - NH4_AbGrowth,
                )
            }),
        ),
        // Nitrate
        Variable::dynamic(
            "NO3_Denit",
            "mg-N/L/d",
            "Denitrification in the water column",
            process!(|use_NO3, kdnit_tc, NO3, use_DOX, KsOxdn, DOX| gated(
                use_NO3,
                kdnit_tc * NO3 * denitrification_oxygen_factor(use_DOX, KsOxdn, DOX)
            )),
        ),
        Variable::dynamic(
            "NO3_BedDenit",
            "mg-N/L/d",
            "Denitrification in the sediment",
            process!(|use_NO3, use_SedFlux, JNO3, vno3_tc, NO3, depth| gated(
                use_NO3,
                where_(enabled(use_SedFlux), JNO3, vno3_tc * NO3) / depth
            )),
        ),
        Variable::dynamic(
            "NO3_ApGrowth",
            "mg-N/L/d",
            "NO3 uptake by algae",
            process!(|ApUptakeFr_NO3, rna, ApGrowth| ApUptakeFr_NO3 * rna * ApGrowth),
        ),
        Variable::dynamic(
            "NO3_AbGrowth",
            "mg-N/L/d",
            "NO3 uptake by benthic algae",
            process!(|AbUptakeFr_NO3, rnb, AbGrowth, Fb, depth| benthic_to_water(
                AbUptakeFr_NO3 * rnb * AbGrowth,
                Fb,
                depth
            )),
        ),
        Variable::dynamic(
            "dNO3dt",
            "mg-N/L/d",
            "Rate of change of NO3",
            process!(|use_NO3,
                      NH4_Nitrification,
                      NO3_Denit,
                      NO3_BedDenit,
                      NO3_ApGrowth,
                      NO3_AbGrowth| {
                gated(
                    use_NO3,
                    NH4_Nitrification - NO3_Denit - NO3_BedDenit - NO3_ApGrowth - NO3_AbGrowth,
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
    fn oxygen_factors() {
        assert_eq!(nitrification_oxygen_factor(0.0, 0.6, 0.0), 1.0);
        assert_eq!(nitrification_oxygen_factor(1.0, 0.6, 0.0), 0.0);
        assert_relative_eq!(
            nitrification_oxygen_factor(1.0, 0.6, 8.0),
            1.0 - (-4.8_f64).exp()
        );
        assert_eq!(denitrification_oxygen_factor(1.0, 0.1, 0.0), 1.0);
        assert_relative_eq!(denitrification_oxygen_factor(1.0, 0.1, 0.1), 0.5);
        assert_eq!(denitrification_oxygen_factor(0.0, 0.1, 0.1), 1.0);
    }

    #[test]
    fn sediment_release_source() {
        let vars = variables();
        let release = vars.iter().find(|v| v.name == "NH4_SedRelease").unwrap();
        let release = release.process.unwrap();
        // Zero-order release unless an external sediment model supplies the flux
        assert_relative_eq!(
            release.evaluate(&[1.0, 0.0, 3.0, 0.15, 1.5]),
            0.1,
            max_relative = 1e-12
        );
        assert_relative_eq!(release.evaluate(&[1.0, 1.0, 3.0, 0.15, 1.5]), 2.0);
        assert_eq!(release.evaluate(&[0.0, 1.0, 3.0, 0.15, 1.5]), 0.0);
    }

    #[test]
    fn benthic_flux_scaling() {
        assert_relative_eq!(
            benthic_to_water(3.0, 0.9, 1.5),
            1.8,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            benthic_mortality_to_water(3.0, 0.9, 0.9, 1.5),
            1.62,
            max_relative = 1e-12
        );
        assert_eq!(benthic_mortality_to_water(3.0, 0.0, 0.9, 1.5), 0.0);
    }

    #[test]
    fn organic_nitrogen_decay_temperature() {
        let vars = variables();
        let kon = vars.iter().find(|v| v.name == "kon_tc").unwrap();
        let kon = kon.process.unwrap();
        assert_relative_eq!(
            kon.evaluate(&[25.0, 0.1]),
            0.1 * 1.047_f64.powi(5),
            max_relative = 1e-12
        );
    }
}
