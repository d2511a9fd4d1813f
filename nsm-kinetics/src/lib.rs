//! Nutrient Simulation Module I (NSM-I)
//!
//! Kinetics of algae, benthic algae, nitrogen, phosphorus, carbon, CBOD, dissolved
//! oxygen, nitrogen gas, particulate organic matter, pathogens and alkalinity for a
//! well-mixed water column cell.
//!
//! Parameters are grouped in [`parameters`], the processes live in [`processes`] and
//! [`model::NsmModelBuilder`] assembles them into a runnable
//! [`Model`](nsm_core::model::Model).

pub mod model;
pub mod parameters;
pub mod processes;

pub use model::NsmModelBuilder;
pub use parameters::{InitialState, NsmParameters};
