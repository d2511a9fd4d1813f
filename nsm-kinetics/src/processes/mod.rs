//! NSM-I kinetics
//!
//! Each module declares the dynamic variables of one part of the nutrient cycle.
//! Processes read static parameters, forcing, state variables and the outputs of other
//! processes by name, so the modules can be registered in any order.
//! The evaluation order is resolved when the model is built.
//!
//! Every pathway belonging to a module is multiplied out by the module's `use_*` flag,
//! and a disabled module's own derivative is zero.

pub mod algae;
pub mod alkalinity;
pub mod balgae;
pub mod carbon;
pub mod cbod;
pub mod diagnostics;
pub mod dox;
pub mod light;
pub mod limitation;
pub mod n2;
pub mod nitrogen;
pub mod pathogen;
pub mod phosphorus;
pub mod pom;
pub mod reaeration;
pub mod temperature;

use nsm_core::kernel::{enabled, where_};
use nsm_core::variable::Variable;

/// `value` when the module switched by `flag` is enabled, otherwise zero.
///
/// The disabled branch discards `value` entirely, including NaN.
#[inline]
pub fn gated(flag: f64, value: f64) -> f64 {
    where_(enabled(flag), value, 0.0)
}

/// State variables of NSM-I as `(name, units, description, derivative)`
pub const STATE_VARIABLES: [(&str, &str, &str, &str); 16] = [
    ("Ap", "ug-Chla/L", "Floating algae", "dApdt"),
    ("Ab", "g-D/m2", "Benthic algae", "dAbdt"),
    ("NH4", "mg-N/L", "Ammonium", "dNH4dt"),
    ("NO3", "mg-N/L", "Nitrate", "dNO3dt"),
    ("OrgN", "mg-N/L", "Organic nitrogen", "dOrgNdt"),
    ("N2", "mg-N/L", "Dissolved nitrogen gas", "dN2dt"),
    ("TIP", "mg-P/L", "Total inorganic phosphorus", "dTIPdt"),
    ("OrgP", "mg-P/L", "Organic phosphorus", "dOrgPdt"),
    ("POC", "mg-C/L", "Particulate organic carbon", "dPOCdt"),
    ("DOC", "mg-C/L", "Dissolved organic carbon", "dDOCdt"),
    ("DIC", "mol/L", "Dissolved inorganic carbon", "dDICdt"),
    ("POM", "mg-D/L", "Particulate organic matter", "dPOMdt"),
    ("CBOD", "mg-O2/L", "Carbonaceous biochemical oxygen demand", "dCBODdt"),
    ("DOX", "mg-O2/L", "Dissolved oxygen", "dDOXdt"),
    ("PX", "cfu/100mL", "Pathogens", "dPXdt"),
    ("Alk", "eq/L", "Alkalinity", "dAlkdt"),
];

pub fn state_variables() -> Vec<Variable> {
    STATE_VARIABLES
        .iter()
        .map(|(name, units, description, derivative)| {
            Variable::state(*name, *units, *description, *derivative)
        })
        .collect()
}

/// Every dynamic variable of NSM-I, in registration order.
pub fn dynamic_variables() -> Vec<Variable> {
    [
        temperature::variables(),
        light::variables(),
        limitation::variables(),
        reaeration::variables(),
        algae::variables(),
        balgae::variables(),
        nitrogen::variables(),
        phosphorus::variables(),
        carbon::variables(),
        cbod::variables(),
        dox::variables(),
        n2::variables(),
        pom::variables(),
        pathogen::variables(),
        alkalinity::variables(),
        diagnostics::variables(),
    ]
    .into_iter()
    .flatten()
    .collect()
}
