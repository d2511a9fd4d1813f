//! Initial values of the NSM-I state variables

use serde::{Deserialize, Serialize};

/// Values of the state variables at the start of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitialState {
    /// Floating algae
    /// unit: ug-Chla/L
    /// default: 36.77
    #[serde(rename = "Ap")]
    pub ap: f64,

    /// Benthic algae
    /// unit: g-D/m2
    /// default: 24.0
    #[serde(rename = "Ab")]
    pub ab: f64,

    /// Ammonium
    /// unit: mg-N/L
    /// default: 0.063
    #[serde(rename = "NH4")]
    pub nh4: f64,

    /// Nitrate
    /// unit: mg-N/L
    /// default: 5.54
    #[serde(rename = "NO3")]
    pub no3: f64,

    /// Organic nitrogen
    /// unit: mg-N/L
    /// default: 1.726
    #[serde(rename = "OrgN")]
    pub orgn: f64,

    /// Dissolved nitrogen gas
    /// unit: mg-N/L
    /// default: 1.0
    #[serde(rename = "N2")]
    pub n2: f64,

    /// Total inorganic phosphorus
    /// unit: mg-P/L
    /// default: 0.071
    #[serde(rename = "TIP")]
    pub tip: f64,

    /// Organic phosphorus
    /// unit: mg-P/L
    /// default: 0.24
    #[serde(rename = "OrgP")]
    pub orgp: f64,

    /// Particulate organic carbon
    /// unit: mg-C/L
    /// default: 4.356
    #[serde(rename = "POC")]
    pub poc: f64,

    /// Dissolved organic carbon
    /// unit: mg-C/L
    /// default: 1.0
    #[serde(rename = "DOC")]
    pub doc: f64,

    /// Dissolved inorganic carbon
    /// unit: mol/L
    /// default: 1.0
    #[serde(rename = "DIC")]
    pub dic: f64,

    /// Particulate organic matter
    /// unit: mg-D/L
    /// default: 1.0
    #[serde(rename = "POM")]
    pub pom: f64,

    /// Carbonaceous biochemical oxygen demand
    /// unit: mg-O2/L
    /// default: 1.0
    #[serde(rename = "CBOD")]
    pub cbod: f64,

    /// Dissolved oxygen
    /// unit: mg-O2/L
    /// default: 8.0
    #[serde(rename = "DOX")]
    pub dox: f64,

    /// Pathogens
    /// unit: cfu/100mL
    /// default: 1.0
    #[serde(rename = "PX")]
    pub px: f64,

    /// Alkalinity
    /// unit: eq/L
    /// default: 1.0
    #[serde(rename = "Alk")]
    pub alk: f64,
}

impl Default for InitialState {
    fn default() -> Self {
        Self {
            ap: 36.77,
            ab: 24.0,
            nh4: 0.063,
            no3: 5.54,
            orgn: 1.726,
            n2: 1.0,
            tip: 0.071,
            orgp: 0.24,
            poc: 4.356,
            doc: 1.0,
            dic: 1.0,
            pom: 1.0,
            cbod: 1.0,
            dox: 8.0,
            px: 1.0,
            alk: 1.0,
        }
    }
}

impl InitialState {
    /// Initial values keyed by state variable name.
    pub fn values(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("Ap", self.ap),
            ("Ab", self.ab),
            ("NH4", self.nh4),
            ("NO3", self.no3),
            ("OrgN", self.orgn),
            ("N2", self.n2),
            ("TIP", self.tip),
            ("OrgP", self.orgp),
            ("POC", self.poc),
            ("DOC", self.doc),
            ("DIC", self.dic),
            ("POM", self.pom),
            ("CBOD", self.cbod),
            ("DOX", self.dox),
            ("PX", self.px),
            ("Alk", self.alk),
        ]
    }
}
