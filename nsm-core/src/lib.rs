//! Variable-graph solver for coupled kinetics models.
//!
//! A model is declared as a set of [`Variable`]s, each static, dynamic or state.
//! Dynamic variables are pure elementwise [`Process`]es over other variables and are
//! evaluated once per timestep in dependency order.
//! State variables are integrated forward with an explicit Euler step.
//! All values are N-dimensional arrays ([`Field`]) which broadcast against each other.

pub mod dataset;
pub mod errors;
pub mod kernel;
pub mod linalg;
pub mod model;
pub mod process;
pub mod variable;

pub use dataset::{DataVariable, Dataset};
pub use errors::{NsmError, NsmResult};
pub use kernel::{scalar, Field};
pub use linalg::solve_2x2;
pub use model::{Model, ModelBuilder, NumericWarning};
pub use process::Process;
pub use variable::{Variable, VariableKind, VariableRegistry};
