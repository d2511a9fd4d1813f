//! Variable declarations and the per-model registry.
//!
//! A model is described entirely by its variables.
//! Each variable has a [`VariableKind`]:
//!
//! - [`Static`](VariableKind::Static) values are supplied when the model is built and do not
//!   change unless the host replaces them between timesteps,
//! - [`Dynamic`](VariableKind::Dynamic) values are recomputed from a [`Process`] every timestep,
//! - [`State`](VariableKind::State) values carry over between timesteps and are advanced with
//!   an explicit Euler step using the value of a dynamic derivative variable.
//!
//! ```
//! use nsm_core::process;
//! use nsm_core::variable::{Variable, VariableRegistry};
//!
//! let mut registry = VariableRegistry::new();
//! registry.register(Variable::static_var("k", "1/d", "Decay rate")).unwrap();
//! registry.register(Variable::state("X", "mg/L", "Decaying pool", "dX")).unwrap();
//! registry
//!     .register(Variable::dynamic("dX", "mg/L/d", "Rate of change of X", process!(|k, X| -k * X)))
//!     .unwrap();
//!
//! assert_eq!(registry.states().count(), 1);
//! assert!(registry.register(Variable::static_var("k", "1/d", "Duplicate")).is_err());
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{NsmError, NsmResult};
use crate::process::Process;

/// How the value of a variable is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VariableKind {
    /// Supplied by configuration
    Static,
    /// Recomputed every timestep
    Dynamic,
    /// Carried between timesteps and integrated forward
    State,
}

impl fmt::Display for VariableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariableKind::Static => write!(f, "static"),
            VariableKind::Dynamic => write!(f, "dynamic"),
            VariableKind::State => write!(f, "state"),
        }
    }
}

/// A registry entry.
#[derive(Debug, Clone)]
pub struct Variable {
    pub name: String,
    pub kind: VariableKind,
    pub units: String,
    pub description: String,
    pub long_name: Option<String>,
    /// Process used to calculate a dynamic variable
    pub process: Option<Process>,
    /// Name of the dynamic variable holding the time derivative of a state variable
    pub derivative: Option<String>,
}

impl Variable {
    /// Declare a static variable.
    pub fn static_var(
        name: impl Into<String>,
        units: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: VariableKind::Static,
            units: units.into(),
            description: description.into(),
            long_name: None,
            process: None,
            derivative: None,
        }
    }

    /// Declare a dynamic variable calculated by `process`.
    pub fn dynamic(
        name: impl Into<String>,
        units: impl Into<String>,
        description: impl Into<String>,
        process: Process,
    ) -> Self {
        Self {
            name: name.into(),
            kind: VariableKind::Dynamic,
            units: units.into(),
            description: description.into(),
            long_name: None,
            process: Some(process),
            derivative: None,
        }
    }

    /// Declare a state variable whose rate of change is the dynamic variable `derivative`.
    pub fn state(
        name: impl Into<String>,
        units: impl Into<String>,
        description: impl Into<String>,
        derivative: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: VariableKind::State,
            units: units.into(),
            description: description.into(),
            long_name: None,
            process: None,
            derivative: Some(derivative.into()),
        }
    }

    pub fn with_long_name(mut self, long_name: impl Into<String>) -> Self {
        self.long_name = Some(long_name.into());
        self
    }

    /// Names of the variables this variable reads during a timestep.
    pub fn inputs(&self) -> &'static [&'static str] {
        self.process.map(|p| p.inputs()).unwrap_or(&[])
    }
}

/// An ordered table of the variables in a model.
///
/// Registration order is preserved and used to break ties when ordering independent
/// dynamic variables, so evaluation is deterministic.
#[derive(Debug, Clone, Default)]
pub struct VariableRegistry {
    variables: IndexMap<String, Variable>,
}

impl VariableRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable to the registry.
    ///
    /// Returns an error if a variable with the same name has already been registered.
    pub fn register(&mut self, variable: Variable) -> NsmResult<()> {
        if self.variables.contains_key(&variable.name) {
            return Err(NsmError::DuplicateVariable(variable.name));
        }
        self.variables.insert(variable.name.clone(), variable);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.variables.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Position of a variable in registration order.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.variables.get_index_of(name)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// All variables in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Variable> {
        self.variables.values()
    }

    pub fn of_kind(&self, kind: VariableKind) -> impl Iterator<Item = &Variable> {
        self.iter().filter(move |v| v.kind == kind)
    }

    pub fn statics(&self) -> impl Iterator<Item = &Variable> {
        self.of_kind(VariableKind::Static)
    }

    pub fn dynamics(&self) -> impl Iterator<Item = &Variable> {
        self.of_kind(VariableKind::Dynamic)
    }

    pub fn states(&self) -> impl Iterator<Item = &Variable> {
        self.of_kind(VariableKind::State)
    }
}
