//! Phosphorus cycle: organic phosphorus (`OrgP`) and total inorganic phosphorus (`TIP`)
//!
//! Inorganic phosphorus partitions between a dissolved fraction (`fdp`), which is
//! available to algae, and a particulate fraction which settles.

use nsm_core::kernel::{enabled, where_};
use nsm_core::process;
use nsm_core::variable::Variable;

use super::gated;
use super::nitrogen::{benthic_mortality_to_water, benthic_to_water};
use super::temperature::arrhenius;

pub fn variables() -> Vec<Variable> {
    vec![
        Variable::dynamic(
            "kop_tc",
            "1/d",
            "Organic phosphorus decay rate",
            process!(|TwaterC, kop_20| arrhenius(TwaterC, kop_20, 1.047)),
        ),
        Variable::dynamic(
            "rpo4_tc",
            "g-P/m2/d",
            "Sediment release rate of phosphate",
            process!(|TwaterC, rpo4_20| arrhenius(TwaterC, rpo4_20, 1.074)),
        ),
        Variable::dynamic(
            "ApDeath_OrgP",
            "mg-P/L/d",
            "Organic phosphorus from algal death",
            process!(|rpa, ApDeath| rpa * ApDeath),
        ),
        Variable::dynamic(
            "AbDeath_OrgP",
            "mg-P/L/d",
            "Organic phosphorus from benthic algae death",
            process!(|rpb, AbDeath, Fw, Fb, depth| benthic_mortality_to_water(
                rpb * AbDeath,
                Fw,
                Fb,
                depth
            )),
        ),
        Variable::dynamic(
            "OrgP_DIP_decay",
            "mg-P/L/d",
            "Decay of organic phosphorus to dissolved phosphate",
            process!(|use_OrgP, kop_tc, OrgP| gated(use_OrgP, kop_tc * OrgP)),
        ),
        Variable::dynamic(
            "OrgP_Settling",
            "mg-P/L/d",
            "Settling of organic phosphorus",
            process!(|use_OrgP, vsop, depth, OrgP| gated(use_OrgP, vsop / depth * OrgP)),
        ),
        Variable::dynamic(
            "dOrgPdt",
            "mg-P/L/d",
            "Rate of change of organic phosphorus",
            process!(|use_OrgP, ApDeath_OrgP, AbDeath_OrgP, OrgP_DIP_decay, OrgP_Settling| {
                gated(
                    use_OrgP,
                    ApDeath_OrgP + AbDeath_OrgP - OrgP_DIP_decay - OrgP_Settling,
                )
            }),
        ),
        Variable::dynamic(
            "TIP_Settling",
            "mg-P/L/d",
            "Settling of particulate inorganic phosphorus",
            process!(|use_TIP, vs, depth, fdp, TIP| gated(
                use_TIP,
                vs / depth * (1.0 - fdp) * TIP
            )),
        ),
        Variable::dynamic(
            "DIP_SedRelease",
            "mg-P/L/d",
            "Release of phosphate from the sediment",
            process!(|use_TIP, use_SedFlux, JSRP, rpo4_tc, depth| gated(
                use_TIP,
                where_(enabled(use_SedFlux), JSRP, rpo4_tc) / depth
            )),
        ),
        Variable::dynamic(
            "DIP_ApRespiration",
            "mg-P/L/d",
            "Phosphate from algal respiration",
            process!(|rpa, ApRespiration| rpa * ApRespiration),
        ),
        Variable::dynamic(
            "DIP_ApGrowth",
            "mg-P/L/d",
            "Phosphate uptake by algae",
            process!(|rpa, ApGrowth| rpa * ApGrowth),
        ),
        Variable::dynamic(
            "DIP_AbRespiration",
            "mg-P/L/d",
            "Phosphate from benthic algae respiration",
            process!(|rpb, AbRespiration, Fb, depth| benthic_to_water(
                rpb * AbRespiration,
                Fb,
                depth
            )),
        ),
        Variable::dynamic(
            "DIP_AbGrowth",
            "mg-P/L/d",
            "Phosphate uptake by benthic algae",
            process!(|rpb, AbGrowth, Fb, depth| benthic_to_water(
                rpb * AbGrowth,
                Fb,
                depth
            )),
        ),
        Variable::dynamic(
            "dTIPdt",
            "mg-P/L/d",
            "Rate of change of total inorganic phosphorus",
            process!(|use_TIP,
                      OrgP_DIP_decay,
                      TIP_Settling,
                      DIP_SedRelease,
                      DIP_ApRespiration,
                      DIP_ApGrowth,
                      DIP_AbRespiration,
                      DIP_AbGrowth| {
                gated(
                    use_TIP,
                    OrgP_DIP_decay - TIP_Settling + DIP_SedRelease + DIP_ApRespiration
                        - DIP_ApGrowth
                        + DIP_AbRespiration
                        - DIP_AbGrowth,
                )
            }),
        ),
    ]
}
