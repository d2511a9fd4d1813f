//! Module switches
//!
//! Each flag enables one NSM-I module.
//! A disabled module contributes nothing to any derivative, and its own state is held
//! constant.
//! Flags are fixed for the duration of a run so the shape of the variable graph never
//! changes.

use serde::{Deserialize, Serialize};

use super::{StaticParameters, StaticValue};

/// Module switches for an NSM-I model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalParameters {
    /// Simulate ammonium
    /// default: true
    #[serde(rename = "use_NH4")]
    pub use_nh4: bool,

    /// Simulate nitrate
    /// default: true
    #[serde(rename = "use_NO3")]
    pub use_no3: bool,

    /// Simulate floating algae
    /// default: true
    #[serde(rename = "use_Algae")]
    pub use_algae: bool,

    /// Simulate dissolved oxygen
    /// default: true
    #[serde(rename = "use_DOX")]
    pub use_dox: bool,

    /// Simulate benthic algae
    /// default: true
    #[serde(rename = "use_Balgae")]
    pub use_balgae: bool,

    /// Simulate organic nitrogen
    /// default: true
    #[serde(rename = "use_OrgN")]
    pub use_orgn: bool,

    /// Simulate organic phosphorus
    /// default: true
    #[serde(rename = "use_OrgP")]
    pub use_orgp: bool,

    /// Simulate total inorganic phosphorus
    /// default: true
    #[serde(rename = "use_TIP")]
    pub use_tip: bool,

    /// Simulate dissolved organic carbon
    /// default: true
    #[serde(rename = "use_DOC")]
    pub use_doc: bool,

    /// Simulate particulate organic carbon
    /// default: true
    #[serde(rename = "use_POC")]
    pub use_poc: bool,

    /// Simulate dissolved inorganic carbon
    /// default: true
    #[serde(rename = "use_DIC")]
    pub use_dic: bool,

    /// Simulate carbonaceous biochemical oxygen demand
    /// default: true
    #[serde(rename = "use_CBOD")]
    pub use_cbod: bool,

    /// Simulate dissolved nitrogen gas
    /// default: true
    #[serde(rename = "use_N2")]
    pub use_n2: bool,

    /// Simulate pathogens
    /// default: true
    #[serde(rename = "use_Pathogen")]
    pub use_pathogen: bool,

    /// Simulate alkalinity
    /// default: true
    #[serde(rename = "use_Alk")]
    pub use_alk: bool,

    /// Simulate particulate organic matter
    /// default: true
    #[serde(rename = "use_POM")]
    pub use_pom: bool,

    /// Include sediment oxygen demand
    /// default: true
    #[serde(rename = "use_SOD")]
    pub use_sod: bool,

    /// Read sediment fluxes from an external sediment model
    /// (`SOD_Bed`, `JNH4`, `JNO3`, `JSRP` and `JDIC`) instead of the zero-order rates
    /// default: false
    #[serde(rename = "use_SedFlux")]
    pub use_sedflux: bool,
}

impl Default for GlobalParameters {
    fn default() -> Self {
        Self {
            use_nh4: true,
            use_no3: true,
            use_algae: true,
            use_dox: true,
            use_balgae: true,
            use_orgn: true,
            use_orgp: true,
            use_tip: true,
            use_doc: true,
            use_poc: true,
            use_dic: true,
            use_cbod: true,
            use_n2: true,
            use_pathogen: true,
            use_alk: true,
            use_pom: true,
            use_sod: true,
            use_sedflux: false,
        }
    }
}

impl GlobalParameters {
    /// Every module switched off.
    ///
    /// Useful as a starting point when simulating a single module in isolation.
    pub fn none() -> Self {
        Self {
            use_nh4: false,
            use_no3: false,
            use_algae: false,
            use_dox: false,
            use_balgae: false,
            use_orgn: false,
            use_orgp: false,
            use_tip: false,
            use_doc: false,
            use_poc: false,
            use_dic: false,
            use_cbod: false,
            use_n2: false,
            use_pathogen: false,
            use_alk: false,
            use_pom: false,
            use_sod: false,
            use_sedflux: false,
        }
    }
}

impl StaticParameters for GlobalParameters {
    fn static_values(&self) -> Vec<StaticValue> {
        vec![
            StaticValue::flag("use_NH4", "Simulate ammonium", self.use_nh4),
            StaticValue::flag("use_NO3", "Simulate nitrate", self.use_no3),
            StaticValue::flag("use_Algae", "Simulate floating algae", self.use_algae),
            StaticValue::flag("use_DOX", "Simulate dissolved oxygen", self.use_dox),
            StaticValue::flag("use_Balgae", "Simulate benthic algae", self.use_balgae),
            StaticValue::flag("use_OrgN", "Simulate organic nitrogen", self.use_orgn),
            StaticValue::flag("use_OrgP", "Simulate organic phosphorus", self.use_orgp),
            StaticValue::flag("use_TIP", "Simulate total inorganic phosphorus", self.use_tip),
            StaticValue::flag("use_DOC", "Simulate dissolved organic carbon", self.use_doc),
            StaticValue::flag("use_POC", "Simulate particulate organic carbon", self.use_poc),
            StaticValue::flag("use_DIC", "Simulate dissolved inorganic carbon", self.use_dic),
            StaticValue::flag("use_CBOD", "Simulate CBOD", self.use_cbod),
            StaticValue::flag("use_N2", "Simulate dissolved nitrogen gas", self.use_n2),
            StaticValue::flag("use_Pathogen", "Simulate pathogens", self.use_pathogen),
            StaticValue::flag("use_Alk", "Simulate alkalinity", self.use_alk),
            StaticValue::flag("use_POM", "Simulate particulate organic matter", self.use_pom),
            StaticValue::flag("use_SOD", "Include sediment oxygen demand", self.use_sod),
            StaticValue::flag("use_SedFlux", "Use external sediment fluxes", self.use_sedflux),
        ]
    }
}
