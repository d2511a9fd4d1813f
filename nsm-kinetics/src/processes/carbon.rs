//! Carbon cycle: particulate (`POC`), dissolved organic (`DOC`) and dissolved inorganic
//! (`DIC`) carbon

use nsm_core::kernel::{enabled, where_};
use nsm_core::process;
use nsm_core::variable::Variable;

use super::gated;
use super::nitrogen::{benthic_mortality_to_water, benthic_to_water};
use super::temperature::arrhenius;

/// Molar mass of carbon
/// unit: mg-C/mol
pub const CARBON_MG_PER_MOL: f64 = 12000.0;

/// Henry's law constant for carbon dioxide
///
/// unit: mol/L/atm
pub fn co2_henry_constant(temperature_k: f64) -> f64 {
    10.0_f64.powf(2385.73 / temperature_k + 0.0152642 * temperature_k - 14.0184)
}

/// Saturation concentration of carbon dioxide
///
/// unit: mol/L
pub fn co2_saturation(henry: f64, pco2_ppm: f64, pressure_atm: f64) -> f64 {
    henry * pco2_ppm * 1e-6 * pressure_atm
}

/// Carbon dioxide reaeration rate from the 20 degC oxygen rates
///
/// unit: 1/d
pub fn co2_reaeration_rate(temperature_c: f64, kah_20: f64, kaw_20: f64, depth: f64) -> f64 {
    arrhenius(temperature_c, 0.923 * (kah_20 + kaw_20 / depth), 1.047)
}

/// Oxygen half-saturation limitation of an oxidation process
pub fn oxygen_limitation(use_dox: f64, half_saturation: f64, dox: f64) -> f64 {
    where_(enabled(use_dox), dox / (half_saturation + dox), 1.0)
}

pub fn variables() -> Vec<Variable> {
    vec![
        Variable::dynamic(
            "kpoc_tc",
            "1/d",
            "POC hydrolysis rate",
            process!(|TwaterC, kpoc_20| arrhenius(TwaterC, kpoc_20, 1.047)),
        ),
        Variable::dynamic(
            "kdoc_tc",
            "1/d",
            "DOC oxidation rate",
            process!(|TwaterC, kdoc_20| arrhenius(TwaterC, kdoc_20, 1.047)),
        ),
        // Particulate organic carbon
        Variable::dynamic(
            "POC_settling",
            "mg-C/L/d",
            "Settling of POC",
            process!(|use_POC, vsoc, depth, POC| gated(use_POC, vsoc / depth * POC)),
        ),
        Variable::dynamic(
            "POC_hydrolysis",
            "mg-C/L/d",
            "Hydrolysis of POC to DOC",
            process!(|use_POC, kpoc_tc, POC| gated(use_POC, kpoc_tc * POC)),
        ),
        Variable::dynamic(
            "POC_ApDeath",
            "mg-C/L/d",
            "POC from algal death",
            process!(|f_pocp, rca, ApDeath| f_pocp * rca * ApDeath),
        ),
        Variable::dynamic(
            "POC_AbDeath",
            "mg-C/L/d",
            "POC from benthic algae death",
            process!(|f_pocb, rcb, AbDeath, Fw, Fb, depth| benthic_mortality_to_water(
                f_pocb * rcb * AbDeath,
                Fw,
                Fb,
                depth
            )),
        ),
        Variable::dynamic(
            "dPOCdt",
            "mg-C/L/d",
            "Rate of change of POC",
            process!(|use_POC, POC_ApDeath, POC_AbDeath, POC_settling, POC_hydrolysis| {
                gated(
                    use_POC,
                    POC_ApDeath + POC_AbDeath - POC_settling - POC_hydrolysis,
                )
            }),
        ),
        // Dissolved organic carbon
        Variable::dynamic(
            "DOC_ApDeath",
            "mg-C/L/d",
            "DOC from algal death",
            process!(|f_pocp, rca, ApDeath| (1.0 - f_pocp) * rca * ApDeath),
        ),
        Variable::dynamic(
            "DOC_AbDeath",
            "mg-C/L/d",
            "DOC from benthic algae death",
            process!(|f_pocb, rcb, AbDeath, Fw, Fb, depth| benthic_mortality_to_water(
                (1.0 - f_pocb) * rcb * AbDeath,
                Fw,
                Fb,
                depth
            )),
        ),
        Variable::dynamic(
            "DOC_oxidation",
            "mg-C/L/d",
            "Oxidation of DOC",
            process!(|use_DOC, kdoc_tc, DOC, use_DOX, K_sOxmc, DOX| gated(
                use_DOC,
                kdoc_tc * DOC * oxygen_limitation(use_DOX, K_sOxmc, DOX)
            )),
        ),
        Variable::dynamic(
            "dDOCdt",
            "mg-C/L/d",
            "Rate of change of DOC",
            process!(|use_DOC, POC_hydrolysis, DOC_ApDeath, DOC_AbDeath, DOC_oxidation| {
                gated(
                    use_DOC,
                    POC_hydrolysis + DOC_ApDeath + DOC_AbDeath - DOC_oxidation,
                )
            }),
        ),
        // Dissolved inorganic carbon
        Variable::dynamic(
            "K_H",
            "mol/L/atm",
            "Henry's law constant for CO2",
            process!(|TwaterK| co2_henry_constant(TwaterK)),
        ),
        Variable::dynamic(
            "CO2_sat",
            "mol/L",
            "CO2 saturation concentration",
            process!(|K_H, pCO2, pressure_atm| co2_saturation(K_H, pCO2, pressure_atm)),
        ),
        Variable::dynamic(
            "kac",
            "1/d",
            "CO2 reaeration rate",
            process!(|TwaterC, kah_20, kaw_20, depth| co2_reaeration_rate(
                TwaterC, kah_20, kaw_20, depth
            )),
        ),
        Variable::dynamic(
            "DIC_reaeration",
            "mol/L/d",
            "Atmospheric exchange of CO2",
            process!(|use_DIC, kac, CO2_sat, FCO2, DIC| gated(
                use_DIC,
                kac * (CO2_sat - FCO2 * DIC)
            )),
        ),
        Variable::dynamic(
            "DIC_ApRespiration",
            "mol/L/d",
            "DIC from algal respiration",
            process!(|rca, ApRespiration| rca * ApRespiration / CARBON_MG_PER_MOL),
        ),
        Variable::dynamic(
            "DIC_ApGrowth",
            "mol/L/d",
            "DIC uptake by algae",
            process!(|rca, ApGrowth| rca * ApGrowth / CARBON_MG_PER_MOL),
        ),
        Variable::dynamic(
            "DIC_AbRespiration",
            "mol/L/d",
            "DIC from benthic algae respiration",
            process!(|rcb, AbRespiration, Fb, depth| benthic_to_water(
                rcb * AbRespiration / CARBON_MG_PER_MOL,
                Fb,
                depth
            )),
        ),
        Variable::dynamic(
            "DIC_AbGrowth",
            "mol/L/d",
            "DIC uptake by benthic algae",
            process!(|rcb, AbGrowth, Fb, depth| benthic_to_water(
                rcb * AbGrowth / CARBON_MG_PER_MOL,
                Fb,
                depth
            )),
        ),
        Variable::dynamic(
            "DIC_CBOD_oxidation",
            "mol/L/d",
            "DIC from CBOD oxidation",
            process!(|CBOD_oxidation, roc| CBOD_oxidation / roc / CARBON_MG_PER_MOL),
        ),
        Variable::dynamic(
            "DIC_SedRelease",
            "mol/L/d",
            "Release of DIC from the sediment",
            process!(|use_DIC, use_SedFlux, JDIC, SOD_tc, roc, depth| gated(
                use_DIC,
                where_(enabled(use_SedFlux), JDIC, SOD_tc / roc) / depth / CARBON_MG_PER_MOL
            )),
        ),
        Variable::dynamic(
            "dDICdt",
            "mol/L/d",
            "Rate of change of DIC",
            process!(|use_DIC,
                      DIC_reaeration,
                      DIC_ApRespiration,
                      DIC_ApGrowth,
                      DIC_AbRespiration,
                      DIC_AbGrowth,
                      DIC_CBOD_oxidation,
                      DIC_SedRelease| {
                gated(
                    use_DIC,
                    DIC_reaeration + DIC_ApRespiration - DIC_ApGrowth + DIC_AbRespiration
                        - DIC_AbGrowth
                        + DIC_CBOD_oxidation
                        + DIC_SedRelease,
                )
            }),
        ),
    ]
}
