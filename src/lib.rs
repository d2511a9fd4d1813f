//! Nutrient Simulation Module I
//!
//! Re-exports the variable-graph solver ([`solver`]) and the NSM-I kinetics
//! ([`kinetics`]).
//!
//! ```
//! use nsm::kinetics::{NsmModelBuilder, NsmParameters};
//!
//! let params = NsmParameters::from_toml_str("[global_vars]\nTwaterC = 25.0").unwrap();
//! let mut model = NsmModelBuilder::new()
//!     .with_parameters(params)
//!     .with_time_steps(1)
//!     .build()
//!     .unwrap();
//! model.run().unwrap();
//!
//! let n2 = model.dataset().get("N2").unwrap().scalar_values().unwrap();
//! assert!((n2[1] - 16.0511).abs() < 1e-3);
//! ```

pub use ndarray;
pub use nsm_core as solver;
pub use nsm_kinetics as kinetics;

pub use nsm_core::{
    solve_2x2, Dataset, Field, Model, ModelBuilder, NsmError, NsmResult, Variable,
};
pub use nsm_kinetics::{InitialState, NsmModelBuilder, NsmParameters};
