//! A model is a registry of variables which are evaluated together, one timestep at a time.
//!
//! Static variables are bound when the model is built.
//! Dynamic variables are evaluated every timestep in an order determined by their
//! dependencies, so that every variable a process reads has been calculated before the
//! process is evaluated.
//! Once all dynamic variables are known the state variables are advanced with an explicit
//! Euler step and the model moves to the next timestep.
//! Every value is recorded in the output dataset.

mod builder;
mod runtime;
mod types;
mod validation;

#[cfg(test)]
mod tests;

// Public re-exports
pub use builder::{ModelBuilder, DEFAULT_TIMESTEP_VARIABLE};
pub use runtime::Model;
pub use types::{DependencyGraph, NumericIssue, NumericWarning};
