//! Pathogens (`PX`)

use nsm_core::kernel::{isnan, where_};
use nsm_core::process;
use nsm_core::variable::Variable;

use super::gated;
use super::temperature::arrhenius;

/// Depth-averaged photolysis of pathogens.
///
/// Falls back to the surface rate when the water column has no extinction.
pub fn photolysis(apx: f64, q_solar: f64, l: f64, depth: f64, px: f64) -> f64 {
    let kext = l * depth;
    let rate = apx * q_solar / kext * (1.0 - (-kext).exp()) * px;
    where_(isnan(rate), apx * q_solar * px, rate)
}

pub fn variables() -> Vec<Variable> {
    vec![
        Variable::dynamic(
            "kdx_tc",
            "1/d",
            "Pathogen death rate",
            process!(|TwaterC, kdx_20| arrhenius(TwaterC, kdx_20, 1.07)),
        ),
        Variable::dynamic(
            "PathogenDeath",
            "cfu/100mL/d",
            "Natural death of pathogens",
            process!(|use_Pathogen, kdx_tc, PX| gated(use_Pathogen, kdx_tc * PX)),
        ),
        Variable::dynamic(
            "PathogenDecay",
            "cfu/100mL/d",
            "Photolysis of pathogens",
            process!(|use_Pathogen, apx, q_solar, L, depth, PX| gated(
                use_Pathogen,
                photolysis(apx, q_solar, L, depth, PX)
            )),
        ),
        Variable::dynamic(
            "PathogenSettling",
            "cfu/100mL/d",
            "Settling of pathogens",
            process!(|use_Pathogen, vx, depth, PX| gated(use_Pathogen, vx / depth * PX)),
        ),
        Variable::dynamic(
            "dPXdt",
            "cfu/100mL/d",
            "Rate of change of pathogens",
            process!(|use_Pathogen, PathogenDeath, PathogenDecay, PathogenSettling| gated(
                use_Pathogen,
                -PathogenDeath - PathogenDecay - PathogenSettling
            )),
        ),
    ]
}
