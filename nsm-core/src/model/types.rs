//! Type definitions for the model module.

use petgraph::graph::DiGraph;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Dependency graph between dynamic variables.
///
/// Nodes hold variable names and an edge `u -> v` means that `v` reads `u`.
pub type DependencyGraph = DiGraph<String, ()>;

/// The kind of non-finite value found in a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumericIssue {
    NaN,
    Infinite,
}

impl fmt::Display for NumericIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericIssue::NaN => write!(f, "NaN"),
            NumericIssue::Infinite => write!(f, "Inf"),
        }
    }
}

/// A non-fatal record of the first non-finite value produced for a variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumericWarning {
    /// Index of the timestep being evaluated when the value was produced
    pub timestep: usize,
    pub variable: String,
    pub kind: NumericIssue,
}

impl fmt::Display for NumericWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} produced {} at timestep {}",
            self.variable, self.kind, self.timestep
        )
    }
}
