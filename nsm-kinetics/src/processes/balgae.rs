//! Benthic algae (`Ab`)
//!
//! Benthic algae are tracked as dry weight per unit bed area.
//! Their exchanges with the water column are converted to concentrations by the
//! nutrient modules with `Fb / depth`.

use nsm_core::kernel::option;
use nsm_core::process;
use nsm_core::variable::Variable;

use super::gated;
use super::limitation::growth_limitation;
use super::temperature::arrhenius;

pub fn variables() -> Vec<Variable> {
    vec![
        Variable::dynamic(
            "rnb",
            "mg-N/mg-D",
            "Benthic algae nitrogen to dry weight ratio",
            process!(|BWn, BWd| BWn / BWd),
        ),
        Variable::dynamic(
            "rpb",
            "mg-P/mg-D",
            "Benthic algae phosphorus to dry weight ratio",
            process!(|BWp, BWd| BWp / BWd),
        ),
        Variable::dynamic(
            "rcb",
            "mg-C/mg-D",
            "Benthic algae carbon to dry weight ratio",
            process!(|BWc, BWd| BWc / BWd),
        ),
        Variable::dynamic(
            "rab",
            "ug-Chla/mg-D",
            "Benthic algae chlorophyll-a to dry weight ratio",
            process!(|BWa, BWd| BWa / BWd),
        ),
        Variable::dynamic(
            "mub_max_tc",
            "1/d",
            "Maximum benthic algae growth rate",
            process!(|TwaterC, mub_max_20| arrhenius(TwaterC, mub_max_20, 1.047)),
        ),
        Variable::dynamic(
            "krb_tc",
            "1/d",
            "Benthic algae respiration rate",
            process!(|TwaterC, krb_20| arrhenius(TwaterC, krb_20, 1.06)),
        ),
        Variable::dynamic(
            "kdb_tc",
            "1/d",
            "Benthic algae death rate",
            process!(|TwaterC, kdb_20| arrhenius(TwaterC, kdb_20, 1.047)),
        ),
        Variable::dynamic(
            "mub",
            "1/d",
            "Benthic algae growth rate",
            process!(|mub_max_tc, b_growth_rate_option, FLb, FNb, FPb, FSb| mub_max_tc
                * growth_limitation(option(b_growth_rate_option), FLb, FNb, FPb)
                * FSb),
        ),
        Variable::dynamic(
            "AbGrowth",
            "g-D/m2/d",
            "Benthic algae growth",
            process!(|use_Balgae, mub, Ab| gated(use_Balgae, mub * Ab)),
        ),
        Variable::dynamic(
            "AbRespiration",
            "g-D/m2/d",
            "Benthic algae respiration",
            process!(|use_Balgae, krb_tc, Ab| gated(use_Balgae, krb_tc * Ab)),
        ),
        Variable::dynamic(
            "AbDeath",
            "g-D/m2/d",
            "Benthic algae death",
            process!(|use_Balgae, kdb_tc, Ab| gated(use_Balgae, kdb_tc * Ab)),
        ),
        Variable::dynamic(
            "dAbdt",
            "g-D/m2/d",
            "Rate of change of benthic algae",
            process!(|AbGrowth, AbRespiration, AbDeath| AbGrowth - AbRespiration - AbDeath),
        ),
        Variable::dynamic(
            "Chlb",
            "mg-Chla/m2",
            "Benthic chlorophyll-a",
            process!(|rab, Ab| rab * Ab),
        ),
    ]
}
