//! Model builder for constructing models from variable declarations.

use indexmap::IndexMap;
use ndarray::IxDyn;
use tracing::debug;

use crate::dataset::Dataset;
use crate::errors::{NsmError, NsmResult};
use crate::kernel::{broadcast_shape, broadcast_to, Field};
use crate::variable::{Variable, VariableKind, VariableRegistry};

use super::runtime::Model;
use super::validation::{resolve, verify_references};

/// Name of the static variable holding the Euler step length unless configured otherwise.
pub const DEFAULT_TIMESTEP_VARIABLE: &str = "timestep";

/// Build a new model from a set of variables.
///
/// The builder registers the variables, binds static and initial values, and
/// determines the order in which dynamic variables are evaluated each timestep.
/// All validation happens in [`ModelBuilder::build`] so that the model itself can never be
/// in an inconsistent state.
#[derive(Debug, Clone)]
pub struct ModelBuilder {
    variables: Vec<Variable>,
    static_values: IndexMap<String, Field>,
    initial_values: IndexMap<String, Field>,
    time_steps: usize,
    time_dim: String,
    timestep_variable: String,
}

impl ModelBuilder {
    /// Create a new model builder with default settings.
    pub fn new() -> Self {
        Self {
            variables: vec![],
            static_values: IndexMap::new(),
            initial_values: IndexMap::new(),
            time_steps: 1,
            time_dim: "time".to_string(),
            timestep_variable: DEFAULT_TIMESTEP_VARIABLE.to_string(),
        }
    }

    /// Register a variable with the builder.
    pub fn with_variable(&mut self, variable: Variable) -> &mut Self {
        self.variables.push(variable);
        self
    }

    pub fn with_variables(&mut self, variables: impl IntoIterator<Item = Variable>) -> &mut Self {
        self.variables.extend(variables);
        self
    }

    /// Supply the value of a static variable.
    ///
    /// Values for names that are not registered are ignored.
    /// A later value for the same name replaces an earlier one.
    pub fn with_static_value(&mut self, name: impl Into<String>, value: Field) -> &mut Self {
        self.static_values.insert(name.into(), value);
        self
    }

    pub fn with_static_values(&mut self, values: IndexMap<String, Field>) -> &mut Self {
        self.static_values.extend(values);
        self
    }

    /// Supply the value of a state variable at the start of the run.
    ///
    /// Building a model where any state variable does not have an initial value will result
    /// in an error.
    pub fn with_initial_value(&mut self, name: impl Into<String>, value: Field) -> &mut Self {
        self.initial_values.insert(name.into(), value);
        self
    }

    pub fn with_initial_values(&mut self, values: IndexMap<String, Field>) -> &mut Self {
        self.initial_values.extend(values);
        self
    }

    /// Number of Euler steps the model will be run for.
    pub fn with_time_steps(&mut self, time_steps: usize) -> &mut Self {
        self.time_steps = time_steps;
        self
    }

    /// Name of the time dimension in the output dataset.
    pub fn with_time_dim(&mut self, time_dim: impl Into<String>) -> &mut Self {
        self.time_dim = time_dim.into();
        self
    }

    /// Name of the static variable holding the step length used by the Euler update.
    pub fn with_timestep_variable(&mut self, name: impl Into<String>) -> &mut Self {
        self.timestep_variable = name.into();
        self
    }

    /// Find the shape shared by every bound value.
    fn model_shape(&self, bound: &[(&str, &Field)]) -> NsmResult<Vec<usize>> {
        let shapes: Vec<&[usize]> = bound.iter().map(|(_, v)| v.shape()).collect();
        broadcast_shape(&shapes).ok_or_else(|| {
            // Report the first value that can't be combined with the values before it
            let mut offender = "";
            for i in 1..=bound.len() {
                if broadcast_shape(&shapes[..i]).is_none() {
                    offender = bound[i - 1].0;
                    break;
                }
            }
            NsmError::Shape {
                variable: offender.to_string(),
                shapes: shapes.iter().map(|s| s.to_vec()).collect(),
            }
        })
    }

    /// Builds the dependency graph for the registered variables and creates a concrete model.
    ///
    /// This fails if a variable name is registered twice, a process reads a variable which
    /// doesn't exist, a static or initial value is missing, the bound values don't share a
    /// common shape or the dynamic variables depend on each other in a cycle.
    pub fn build(&self) -> NsmResult<Model> {
        let mut registry = VariableRegistry::new();
        for variable in self.variables.iter() {
            registry.register(variable.clone())?;
        }
        verify_references(&registry)?;

        if registry.states().next().is_some() {
            match registry.get(&self.timestep_variable) {
                Some(v) if v.kind == VariableKind::Static => {}
                Some(_) => {
                    return Err(NsmError::NotAStaticVariable(
                        self.timestep_variable.clone(),
                    ))
                }
                None => return Err(NsmError::MissingStaticValue(self.timestep_variable.clone())),
            }
        }

        let mut bound: Vec<(&str, &Field)> = vec![];
        for variable in registry.statics() {
            let value = self
                .static_values
                .get(&variable.name)
                .ok_or_else(|| NsmError::MissingStaticValue(variable.name.clone()))?;
            bound.push((variable.name.as_str(), value));
        }
        for variable in registry.states() {
            let value = self
                .initial_values
                .get(&variable.name)
                .ok_or_else(|| NsmError::MissingInitialValue(variable.name.clone()))?;
            bound.push((variable.name.as_str(), value));
        }
        for name in self.static_values.keys() {
            match registry.get(name) {
                Some(v) if v.kind != VariableKind::Static => {
                    return Err(NsmError::NotAStaticVariable(name.clone()))
                }
                _ => {}
            }
        }

        let shape = self.model_shape(&bound)?;
        let resolution = resolve(&registry)?;

        let mut static_values = IndexMap::new();
        let mut state = IndexMap::new();
        let mut dataset = Dataset::new(self.time_dim.clone());
        for variable in registry.iter() {
            let initial = match variable.kind {
                VariableKind::Static => {
                    let value = expand(&self.static_values[&variable.name], &shape, variable)?;
                    static_values.insert(variable.name.clone(), value.clone());
                    value
                }
                VariableKind::State => {
                    let value = expand(&self.initial_values[&variable.name], &shape, variable)?;
                    state.insert(variable.name.clone(), value.clone());
                    value
                }
                // Dynamic variables are only defined once a timestep has been evaluated
                VariableKind::Dynamic => Field::from_elem(IxDyn(&shape), f64::NAN),
            };
            dataset.add_variable(
                variable.name.clone(),
                variable.units.clone(),
                variable.kind,
                variable.long_name.clone(),
                initial,
            )?;
        }

        debug!(
            statics = static_values.len(),
            dynamics = resolution.order.len(),
            states = state.len(),
            shape = ?shape,
            time_steps = self.time_steps,
            "Built model"
        );

        Ok(Model::new(
            registry,
            static_values,
            state,
            dataset,
            resolution,
            shape,
            self.time_steps,
            self.timestep_variable.clone(),
        ))
    }
}

fn expand(value: &Field, shape: &[usize], variable: &Variable) -> NsmResult<Field> {
    broadcast_to(value, shape).ok_or_else(|| NsmError::Shape {
        variable: variable.name.clone(),
        shapes: vec![value.shape().to_vec(), shape.to_vec()],
    })
}

impl Default for ModelBuilder {
    fn default() -> Self {
        Self::new()
    }
}
