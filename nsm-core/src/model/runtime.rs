//! Model struct and runtime execution.

use indexmap::IndexMap;
use petgraph::dot::{Config, Dot};
use std::collections::HashSet;
use tracing::{trace, warn};

use crate::dataset::Dataset;
use crate::errors::{NsmError, NsmResult};
use crate::kernel::{broadcast_to, map_n, Field};
use crate::variable::{VariableKind, VariableRegistry};

use super::types::{DependencyGraph, NumericIssue, NumericWarning};
use super::validation::Resolution;

/// A set of variables which are evaluated together on a common time axis.
///
/// Each timestep the model:
///
/// 1. builds an evaluation environment from the static values and the state at the start of
///    the step,
/// 2. evaluates every dynamic variable in dependency order, each exactly once,
/// 3. advances every state variable with an explicit Euler step,
///    `x + dx/dt * timestep`, using the derivative evaluated in (2),
/// 4. appends the values of all variables to the output [`Dataset`].
///
/// Non-finite values do not stop a run.
/// The first NaN or infinite value seen for each variable is recorded as a
/// [`NumericWarning`].
#[derive(Debug)]
pub struct Model {
    registry: VariableRegistry,
    static_values: IndexMap<String, Field>,
    /// State at the start of the current timestep
    state: IndexMap<String, Field>,
    dataset: Dataset,
    graph: DependencyGraph,
    /// Evaluation order of the dynamic variables
    topo_order: Vec<String>,
    shape: Vec<usize>,
    time_steps: usize,
    time_step_index: usize,
    timestep_variable: String,
    warnings: WarningLog,
}

/// First non-finite value recorded per variable.
#[derive(Debug, Default)]
struct WarningLog {
    warnings: Vec<NumericWarning>,
    seen: HashSet<String>,
}

impl WarningLog {
    /// The warning to record for `value`, if it is the first non-finite value of `name`.
    fn check(&self, timestep: usize, name: &str, value: &Field) -> Option<NumericWarning> {
        if self.seen.contains(name) {
            return None;
        }
        let kind = if value.iter().any(|v| v.is_nan()) {
            NumericIssue::NaN
        } else if value.iter().any(|v| v.is_infinite()) {
            NumericIssue::Infinite
        } else {
            return None;
        };
        Some(NumericWarning {
            timestep,
            variable: name.to_string(),
            kind,
        })
    }

    /// Record the warnings of a completed timestep.
    fn commit(&mut self, pending: Vec<NumericWarning>) {
        for warning in pending {
            warn!(
                variable = %warning.variable,
                timestep = warning.timestep,
                kind = %warning.kind,
                "Non-finite value produced"
            );
            self.seen.insert(warning.variable.clone());
            self.warnings.push(warning);
        }
    }
}

impl Model {
    #[allow(clippy::too_many_arguments)]
    pub(super) fn new(
        registry: VariableRegistry,
        static_values: IndexMap<String, Field>,
        state: IndexMap<String, Field>,
        dataset: Dataset,
        resolution: Resolution,
        shape: Vec<usize>,
        time_steps: usize,
        timestep_variable: String,
    ) -> Self {
        Self {
            registry,
            static_values,
            state,
            dataset,
            graph: resolution.graph,
            topo_order: resolution.order,
            shape,
            time_steps,
            time_step_index: 0,
            timestep_variable,
            warnings: WarningLog::default(),
        }
    }

    /// Evaluate all dynamic variables for the current timestep.
    ///
    /// Returns the environment containing every static, state and dynamic value, and the
    /// warnings raised while evaluating it.
    fn evaluate(&self) -> NsmResult<(IndexMap<String, Field>, Vec<NumericWarning>)> {
        let mut env: IndexMap<String, Field> = self
            .static_values
            .iter()
            .chain(self.state.iter())
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        let mut pending = vec![];

        for name in self.topo_order.iter() {
            let variable = self
                .registry
                .get(name)
                .ok_or_else(|| NsmError::Error(format!("Variable '{}' is not registered", name)))?;
            let process = variable.process.ok_or_else(|| {
                NsmError::Error(format!("Dynamic variable '{}' has no process", name))
            })?;

            let inputs = process
                .inputs()
                .iter()
                .map(|input| {
                    env.get(*input).ok_or_else(|| NsmError::UnknownVariable {
                        variable: name.clone(),
                        reference: input.to_string(),
                    })
                })
                .collect::<NsmResult<Vec<&Field>>>()?;

            let shape_error = || NsmError::Shape {
                variable: name.clone(),
                shapes: inputs.iter().map(|f| f.shape().to_vec()).collect(),
            };
            let value = map_n(&inputs, |args| process.evaluate(args)).ok_or_else(shape_error)?;
            let value = broadcast_to(&value, &self.shape).ok_or_else(shape_error)?;

            pending.extend(self.warnings.check(self.time_step_index, name, &value));
            env.insert(name.clone(), value);
        }
        Ok((env, pending))
    }

    /// Steps the model forward one timestep.
    ///
    /// The state at the start of the next timestep is `x + dx/dt * timestep` for every state
    /// variable `x`.
    /// An error is returned if the model has already run all of its timesteps or a process
    /// produced a value that can't be broadcast to the shape of the model.
    /// The state is not advanced when an error occurs.
    pub fn step(&mut self) -> NsmResult<()> {
        if self.finished() {
            return Err(NsmError::Error(format!(
                "Model has already completed {} time steps",
                self.time_steps
            )));
        }

        let (mut env, mut pending) = self.evaluate()?;

        let timestep = env
            .get(&self.timestep_variable)
            .cloned()
            .unwrap_or_else(|| Field::zeros(ndarray::IxDyn(&self.shape)));
        let mut next_state = IndexMap::new();
        for variable in self.registry.states() {
            let derivative_name = variable.derivative.as_deref().unwrap_or_default();
            let current = &self.state[&variable.name];
            let derivative = env.get(derivative_name).ok_or_else(|| {
                NsmError::InvalidDerivative {
                    state: variable.name.clone(),
                    derivative: derivative_name.to_string(),
                }
            })?;
            let value = current + &(derivative * &timestep);
            next_state.insert(variable.name.clone(), value);
        }

        for (name, value) in next_state.iter() {
            pending.extend(self.warnings.check(self.time_step_index, name, value));
            env.insert(name.clone(), value.clone());
        }
        self.dataset.increment_timestep(&env)?;
        self.warnings.commit(pending);
        self.state = next_state;
        self.time_step_index += 1;

        trace!(time_step_index = self.time_step_index, "Completed timestep");
        Ok(())
    }

    /// Alias of [`Model::step`].
    pub fn increment_timestep(&mut self) -> NsmResult<()> {
        self.step()
    }

    /// Steps the model until all time steps have been evaluated.
    pub fn run(&mut self) -> NsmResult<()> {
        while !self.finished() {
            self.step()?;
        }
        Ok(())
    }

    /// Steps the model forward `n` time steps, stopping early once it is finished.
    pub fn run_steps(&mut self, n: usize) -> NsmResult<()> {
        for _ in 0..n {
            if self.finished() {
                break;
            }
            self.step()?;
        }
        Ok(())
    }

    /// Returns true if the model has no more time steps to process.
    pub fn finished(&self) -> bool {
        self.time_step_index >= self.time_steps
    }

    /// Number of time steps evaluated so far.
    pub fn time_step_index(&self) -> usize {
        self.time_step_index
    }

    /// Total number of time steps the model was built for.
    pub fn time_steps(&self) -> usize {
        self.time_steps
    }

    /// Replace the value of a static variable.
    ///
    /// This is how a host supplies time-varying forcing (water temperature, depth,
    /// solar radiation, ...) between timesteps.
    /// The new value is used, and recorded in the dataset, from the next timestep on.
    pub fn set_static(&mut self, name: &str, value: Field) -> NsmResult<()> {
        match self.registry.get(name) {
            None => {
                return Err(NsmError::Error(format!(
                    "Variable '{}' is not registered",
                    name
                )))
            }
            Some(v) if v.kind != VariableKind::Static => {
                return Err(NsmError::NotAStaticVariable(name.to_string()))
            }
            _ => {}
        }
        let expanded = broadcast_to(&value, &self.shape).ok_or_else(|| NsmError::Shape {
            variable: name.to_string(),
            shapes: vec![value.shape().to_vec(), self.shape.clone()],
        })?;
        self.static_values.insert(name.to_string(), expanded);
        Ok(())
    }

    /// Current value of a static variable.
    pub fn static_value(&self, name: &str) -> Option<&Field> {
        self.static_values.get(name)
    }

    /// Value of a state variable at the start of the current timestep.
    pub fn state_value(&self, name: &str) -> Option<&Field> {
        self.state.get(name)
    }

    pub fn registry(&self) -> &VariableRegistry {
        &self.registry
    }

    /// Shape shared by every value in the model.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Evaluation order of the dynamic variables.
    pub fn topo_order(&self) -> &[String] {
        &self.topo_order
    }

    /// The dependency graph between dynamic variables.
    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    /// Non-finite values encountered during the run.
    pub fn warnings(&self) -> &[NumericWarning] {
        &self.warnings.warnings
    }

    /// Returns a reference to the output dataset.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Consume the model, returning the output dataset.
    pub fn into_dataset(self) -> Dataset {
        self.dataset
    }

    /// Create a diagram that represents the dependency graph.
    ///
    /// Useful for debugging.
    pub fn as_dot(&self) -> Dot<'_, &DependencyGraph> {
        Dot::with_attr_getters(
            &self.graph,
            &[Config::NodeNoLabel, Config::EdgeNoLabel],
            &|_, _| String::new(),
            &|_, (_, name)| format!("label = \"{}\"", name.replace('"', "\\\"")),
        )
    }
}
