//! Carbonaceous biochemical oxygen demand (`CBOD`)

use nsm_core::process;
use nsm_core::variable::Variable;

use super::carbon::oxygen_limitation;
use super::gated;
use super::temperature::arrhenius;

pub fn variables() -> Vec<Variable> {
    vec![
        Variable::dynamic(
            "kbod_tc",
            "1/d",
            "CBOD oxidation rate",
            process!(|TwaterC, kbod_20| arrhenius(TwaterC, kbod_20, 1.047)),
        ),
        Variable::dynamic(
            "ksbod_tc",
            "1/d",
            "CBOD sedimentation rate",
            process!(|TwaterC, ksbod_20| arrhenius(TwaterC, ksbod_20, 1.024)),
        ),
        Variable::dynamic(
            "CBOD_oxidation",
            "mg-O2/L/d",
            "Oxidation of CBOD",
            process!(|use_CBOD, kbod_tc, CBOD, use_DOX, ksOxbod, DOX| gated(
                use_CBOD,
                kbod_tc * CBOD * oxygen_limitation(use_DOX, ksOxbod, DOX)
            )),
        ),
        Variable::dynamic(
            "CBOD_sedimentation",
            "mg-O2/L/d",
            "Sedimentation of CBOD",
            process!(|use_CBOD, ksbod_tc, CBOD| gated(use_CBOD, ksbod_tc * CBOD)),
        ),
        Variable::dynamic(
            "dCBODdt",
            "mg-O2/L/d",
            "Rate of change of CBOD",
            process!(|use_CBOD, CBOD_oxidation, CBOD_sedimentation| gated(
                use_CBOD,
                -CBOD_oxidation - CBOD_sedimentation
            )),
        ),
    ]
}
