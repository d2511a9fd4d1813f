//! Derived totals reported alongside the state variables

use nsm_core::kernel::{enabled, where_};
use nsm_core::process;
use nsm_core::variable::Variable;

pub fn variables() -> Vec<Variable> {
    vec![
        Variable::dynamic(
            "DIN",
            "mg-N/L",
            "Dissolved inorganic nitrogen",
            process!(|use_NH4, NH4, use_NO3, NO3| where_(enabled(use_NH4), NH4, 0.0)
                + where_(enabled(use_NO3), NO3, 0.0)),
        ),
        Variable::dynamic(
            "TON",
            "mg-N/L",
            "Total organic nitrogen",
            process!(|use_OrgN, OrgN, use_Algae, rna, Ap| where_(enabled(use_OrgN), OrgN, 0.0)
                + where_(enabled(use_Algae), rna * Ap, 0.0)),
        ),
        Variable::dynamic(
            "TKN",
            "mg-N/L",
            "Total Kjeldahl nitrogen",
            process!(|use_NH4, NH4, TON| where_(enabled(use_NH4), NH4, 0.0) + TON),
        ),
        Variable::dynamic(
            "TN",
            "mg-N/L",
            "Total nitrogen",
            process!(|DIN, TON| DIN + TON),
        ),
        Variable::dynamic(
            "DIP",
            "mg-P/L",
            "Dissolved inorganic phosphorus",
            process!(|fdp, TIP| fdp * TIP),
        ),
        Variable::dynamic(
            "TOP",
            "mg-P/L",
            "Total organic phosphorus",
            process!(|use_OrgP, OrgP, use_Algae, rpa, Ap| where_(enabled(use_OrgP), OrgP, 0.0)
                + where_(enabled(use_Algae), rpa * Ap, 0.0)),
        ),
        Variable::dynamic(
            "TP",
            "mg-P/L",
            "Total phosphorus",
            process!(|TOP, use_TIP, TIP| TOP + where_(enabled(use_TIP), TIP, 0.0)),
        ),
        Variable::dynamic(
            "TOC",
            "mg-C/L",
            "Total organic carbon",
            process!(|use_POC, POC, use_DOC, DOC, use_Algae, rca, Ap| where_(
                enabled(use_POC),
                POC,
                0.0
            ) + where_(enabled(use_DOC), DOC, 0.0)
                + where_(enabled(use_Algae), rca * Ap, 0.0)),
        ),
    ]
}
