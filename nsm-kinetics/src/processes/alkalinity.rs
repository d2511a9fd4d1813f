//! Alkalinity (`Alk`)

use nsm_core::process;
use nsm_core::variable::Variable;

use super::gated;
use super::nitrogen::benthic_to_water;

pub fn variables() -> Vec<Variable> {
    vec![
        Variable::dynamic(
            "Alk_denitrification",
            "eq/L/d",
            "Alkalinity gained by denitrification",
            process!(|r_alkden, NO3_Denit| r_alkden * NO3_Denit),
        ),
        Variable::dynamic(
            "Alk_nitrification",
            "eq/L/d",
            "Alkalinity consumed by nitrification",
            process!(|r_alkn, NH4_Nitrification| r_alkn * NH4_Nitrification),
        ),
        Variable::dynamic(
            "Alk_ApGrowth",
            "eq/L/d",
            "Alkalinity change from algal nutrient uptake",
            process!(|r_alkaa, r_alkan, ApUptakeFr_NH4, ApUptakeFr_NO3, rca, ApGrowth| {
                (r_alkaa * ApUptakeFr_NH4 - r_alkan * ApUptakeFr_NO3) * rca * ApGrowth
            }),
        ),
        Variable::dynamic(
            "Alk_ApRespiration",
            "eq/L/d",
            "Alkalinity from algal respiration",
            process!(|r_alkaa, rca, ApRespiration| r_alkaa * rca * ApRespiration),
        ),
        Variable::dynamic(
            "Alk_AbGrowth",
            "eq/L/d",
            "Alkalinity change from benthic algae nutrient uptake",
            process!(|r_alkba,
                      r_alkbn,
                      AbUptakeFr_NH4,
                      AbUptakeFr_NO3,
                      rcb,
                      AbGrowth,
                      Fb,
                      depth| {
                benthic_to_water(
                    (r_alkba * AbUptakeFr_NH4 - r_alkbn * AbUptakeFr_NO3) * rcb * AbGrowth,
                    Fb,
                    depth,
                )
            }),
        ),
        Variable::dynamic(
            "Alk_AbRespiration",
            "eq/L/d",
            "Alkalinity from benthic algae respiration",
            process!(|r_alkba, rcb, AbRespiration, Fb, depth| benthic_to_water(
                r_alkba * rcb * AbRespiration,
                Fb,
                depth
            )),
        ),
        Variable::dynamic(
            "dAlkdt",
            "eq/L/d",
            "Rate of change of alkalinity",
            process!(|use_Alk,
                      Alk_denitrification,
                      Alk_nitrification,
                      Alk_ApGrowth,
                      Alk_ApRespiration,
                      Alk_AbGrowth,
                      Alk_AbRespiration| {
                gated(
                    use_Alk,
                    Alk_denitrification - Alk_nitrification - Alk_ApGrowth + Alk_ApRespiration
                        - Alk_AbGrowth
                        + Alk_AbRespiration,
                )
            }),
        ),
    ]
}
