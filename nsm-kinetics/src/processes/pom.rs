//! Particulate organic matter (`POM`)
//!
//! POM lives in the active sediment layer of thickness `h2`, so every areal flux onto the
//! bed is divided by `h2` rather than by the water depth.

use nsm_core::process;
use nsm_core::variable::Variable;

use super::gated;
use super::temperature::arrhenius;

/// Areal flux onto the bed expressed as a rate in the active sediment layer
pub fn bed_deposition(flux: f64, h2: f64) -> f64 {
    flux / h2
}

pub fn variables() -> Vec<Variable> {
    vec![
        Variable::dynamic(
            "kpom_tc",
            "1/d",
            "POM dissolution rate",
            process!(|TwaterC, kpom_20| arrhenius(TwaterC, kpom_20, 1.047)),
        ),
        Variable::dynamic(
            "POM_algal_settling",
            "mg-D/L/d",
            "POM from settling algae",
            process!(|use_Algae, rda, vsap, Ap, h2| gated(
                use_Algae,
                bed_deposition(rda * vsap * Ap, h2)
            )),
        ),
        Variable::dynamic(
            "POM_POC_settling",
            "mg-D/L/d",
            "POM from settling POC",
            process!(|use_POC, vsoc, POC, fcom, h2| gated(
                use_POC,
                bed_deposition(vsoc * POC / fcom, h2)
            )),
        ),
        Variable::dynamic(
            "POM_benthic_algae_mortality",
            "mg-D/L/d",
            "POM from benthic algae death retained on the bed",
            process!(|AbDeath, Fw, Fb, h2| bed_deposition((1.0 - Fw) * Fb * AbDeath, h2)),
        ),
        Variable::dynamic(
            "POM_dissolution",
            "mg-D/L/d",
            "Dissolution of POM",
            process!(|use_POM, kpom_tc, POM| gated(use_POM, kpom_tc * POM)),
        ),
        Variable::dynamic(
            "POM_burial",
            "mg-D/L/d",
            "Burial of POM",
            process!(|use_POM, vb, POM, h2| gated(use_POM, vb * POM / h2)),
        ),
        Variable::dynamic(
            "dPOMdt",
            "mg-D/L/d",
            "Rate of change of POM",
            process!(|use_POM,
                      POM_algal_settling,
                      POM_POC_settling,
                      POM_benthic_algae_mortality,
                      POM_dissolution,
                      POM_burial| {
                gated(
                    use_POM,
                    POM_algal_settling + POM_POC_settling + POM_benthic_algae_mortality
                        - POM_dissolution
                        - POM_burial,
                )
            }),
        ),
    ]
}
