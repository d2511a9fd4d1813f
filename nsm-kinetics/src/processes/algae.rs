//! Floating algae (`Ap`)

use nsm_core::kernel::option;
use nsm_core::process;
use nsm_core::variable::Variable;

use super::gated;
use super::limitation::growth_limitation;
use super::temperature::arrhenius;

pub fn variables() -> Vec<Variable> {
    vec![
        Variable::dynamic(
            "rna",
            "mg-N/ug-Chla",
            "Algal nitrogen to chlorophyll-a ratio",
            process!(|AWn, AWa| AWn / AWa),
        ),
        Variable::dynamic(
            "rpa",
            "mg-P/ug-Chla",
            "Algal phosphorus to chlorophyll-a ratio",
            process!(|AWp, AWa| AWp / AWa),
        ),
        Variable::dynamic(
            "rca",
            "mg-C/ug-Chla",
            "Algal carbon to chlorophyll-a ratio",
            process!(|AWc, AWa| AWc / AWa),
        ),
        Variable::dynamic(
            "rda",
            "mg-D/ug-Chla",
            "Algal dry weight to chlorophyll-a ratio",
            process!(|AWd, AWa| AWd / AWa),
        ),
        Variable::dynamic(
            "mu_max_tc",
            "1/d",
            "Maximum algal growth rate",
            process!(|TwaterC, mu_max_20| arrhenius(TwaterC, mu_max_20, 1.047)),
        ),
        Variable::dynamic(
            "krp_tc",
            "1/d",
            "Algal respiration rate",
            process!(|TwaterC, krp_20| arrhenius(TwaterC, krp_20, 1.047)),
        ),
        Variable::dynamic(
            "kdp_tc",
            "1/d",
            "Algal death rate",
            process!(|TwaterC, kdp_20| arrhenius(TwaterC, kdp_20, 1.047)),
        ),
        Variable::dynamic(
            "mu",
            "1/d",
            "Algal growth rate",
            process!(|mu_max_tc, growth_rate_option, FL, FN, FP| mu_max_tc
                * growth_limitation(option(growth_rate_option), FL, FN, FP)),
        ),
        Variable::dynamic(
            "ApGrowth",
            "ug-Chla/L/d",
            "Algal growth",
            process!(|use_Algae, mu, Ap| gated(use_Algae, mu * Ap)),
        ),
        Variable::dynamic(
            "ApRespiration",
            "ug-Chla/L/d",
            "Algal respiration",
            process!(|use_Algae, krp_tc, Ap| gated(use_Algae, krp_tc * Ap)),
        ),
        Variable::dynamic(
            "ApDeath",
            "ug-Chla/L/d",
            "Algal death",
            process!(|use_Algae, kdp_tc, Ap| gated(use_Algae, kdp_tc * Ap)),
        ),
        Variable::dynamic(
            "ApSettling",
            "ug-Chla/L/d",
            "Algal settling",
            process!(|use_Algae, vsap, depth, Ap| gated(use_Algae, vsap / depth * Ap)),
        ),
        Variable::dynamic(
            "dApdt",
            "ug-Chla/L/d",
            "Rate of change of floating algae",
            process!(|ApGrowth, ApRespiration, ApDeath, ApSettling| ApGrowth
                - ApRespiration
                - ApDeath
                - ApSettling),
        ),
    ]
}
