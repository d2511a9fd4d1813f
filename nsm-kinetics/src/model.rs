//! Assembly of a complete NSM-I model
//!
//! [`NsmModelBuilder`] binds the parameter blocks as static variables, registers the
//! sixteen state variables and every kinetic process, and hands the result to the core
//! [`ModelBuilder`].
//!
//! ```
//! use nsm_kinetics::model::NsmModelBuilder;
//! use nsm_kinetics::parameters::NsmParameters;
//!
//! let mut params = NsmParameters::default();
//! params.global_vars.water_temperature = 25.0;
//!
//! let mut model = NsmModelBuilder::new()
//!     .with_parameters(params)
//!     .with_time_steps(2)
//!     .build()
//!     .unwrap();
//! model.run().unwrap();
//!
//! let dox = model.dataset().series("DOX").unwrap();
//! assert_eq!(dox.len(), 3);
//! ```

use indexmap::IndexMap;
use nsm_core::errors::{NsmError, NsmResult};
use nsm_core::kernel::{scalar, Field};
use nsm_core::model::{Model, ModelBuilder};
use nsm_core::variable::Variable;
use tracing::debug;

use crate::parameters::{
    check_option_values, InitialState, NsmParameters, StaticParameters, OPTION_SELECTORS,
};
use crate::processes::{dynamic_variables, state_variables, STATE_VARIABLES};

/// Builder for an NSM-I model.
///
/// Every static value and initial value defaults to a scalar taken from the parameter
/// blocks.
/// Any of them can be replaced by an array to simulate many cells at once; scalars
/// broadcast against the arrays.
#[derive(Debug, Clone)]
pub struct NsmModelBuilder {
    parameters: NsmParameters,
    initial_state: InitialState,
    static_overrides: IndexMap<String, Field>,
    initial_overrides: IndexMap<String, Field>,
    time_steps: usize,
    time_dim: String,
}

impl NsmModelBuilder {
    pub fn new() -> Self {
        Self {
            parameters: NsmParameters::default(),
            initial_state: InitialState::default(),
            static_overrides: IndexMap::new(),
            initial_overrides: IndexMap::new(),
            time_steps: 1,
            time_dim: "time".to_string(),
        }
    }

    pub fn with_parameters(&mut self, parameters: NsmParameters) -> &mut Self {
        self.parameters = parameters;
        self
    }

    pub fn with_initial_state(&mut self, initial_state: InitialState) -> &mut Self {
        self.initial_state = initial_state;
        self
    }

    /// Replace the value of a static parameter or forcing, e.g. a per-cell depth.
    pub fn with_static_override(&mut self, name: impl Into<String>, value: Field) -> &mut Self {
        self.static_overrides.insert(name.into(), value);
        self
    }

    /// Replace the initial value of a state variable.
    pub fn with_initial_override(&mut self, name: impl Into<String>, value: Field) -> &mut Self {
        self.initial_overrides.insert(name.into(), value);
        self
    }

    pub fn with_time_steps(&mut self, time_steps: usize) -> &mut Self {
        self.time_steps = time_steps;
        self
    }

    pub fn with_time_dim(&mut self, time_dim: impl Into<String>) -> &mut Self {
        self.time_dim = time_dim.into();
        self
    }

    /// Check that every override names a variable of the right kind and that overridden
    /// option selectors hold valid choices.
    fn check_overrides(&self, statics: &IndexMap<String, Field>) -> NsmResult<()> {
        let is_state = |name: &str| STATE_VARIABLES.iter().any(|(state, ..)| *state == name);

        for (name, value) in self.static_overrides.iter() {
            if is_state(name) {
                return Err(NsmError::NotAStaticVariable(name.clone()));
            }
            if !statics.contains_key(name) {
                return Err(NsmError::Parameter(format!(
                    "Unknown static variable '{}'",
                    name
                )));
            }
            let selector = OPTION_SELECTORS
                .iter()
                .find(|(option, _)| *option == name.as_str());
            if let Some((_, max)) = selector {
                check_option_values(name, value.iter().copied(), *max)?;
            }
        }
        for name in self.initial_overrides.keys() {
            if !is_state(name) {
                return Err(NsmError::Parameter(format!(
                    "Unknown state variable '{}'",
                    name
                )));
            }
        }
        Ok(())
    }

    /// Validate the parameters and build the model.
    pub fn build(&self) -> NsmResult<Model> {
        self.parameters.validate()?;

        let mut variables: Vec<Variable> = vec![];
        let mut statics = IndexMap::new();
        for value in self.parameters.static_values() {
            variables.push(Variable::static_var(
                value.name,
                value.units,
                value.description,
            ));
            statics.insert(value.name.to_string(), scalar(value.value));
        }
        self.check_overrides(&statics)?;
        statics.extend(self.static_overrides.clone());

        let mut initial_values: IndexMap<String, Field> = self
            .initial_state
            .values()
            .into_iter()
            .map(|(name, value)| (name.to_string(), scalar(value)))
            .collect();
        initial_values.extend(self.initial_overrides.clone());

        variables.extend(state_variables());
        variables.extend(dynamic_variables());

        debug!(
            variables = variables.len(),
            static_overrides = self.static_overrides.len(),
            initial_overrides = self.initial_overrides.len(),
            "Assembling NSM-I model"
        );

        ModelBuilder::new()
            .with_variables(variables)
            .with_static_values(statics)
            .with_initial_values(initial_values)
            .with_time_steps(self.time_steps)
            .with_time_dim(self.time_dim.clone())
            .build()
    }
}

impl Default for NsmModelBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use nsm_core::variable::VariableKind;

    #[test]
    fn builds_with_defaults() {
        let model = NsmModelBuilder::new().build().unwrap();
        assert_eq!(model.registry().states().count(), 16);
        assert!(model.shape().is_empty());
        assert_eq!(
            model.registry().get("TwaterC").unwrap().kind,
            VariableKind::Static
        );
        assert_eq!(
            model.registry().get("dDOXdt").unwrap().kind,
            VariableKind::Dynamic
        );
    }

    #[test]
    fn array_override_sets_shape() {
        let model = NsmModelBuilder::new()
            .with_static_override("depth", array![1.0, 2.0, 3.0].into_dyn())
            .build()
            .unwrap();
        assert_eq!(model.shape(), &[3]);
        assert_eq!(model.state_value("Ap").unwrap().shape(), &[3]);
    }

    #[test]
    fn rejects_bad_overrides() {
        let err = NsmModelBuilder::new()
            .with_static_override("Ap", scalar(1.0))
            .build()
            .unwrap_err();
        assert_eq!(err, NsmError::NotAStaticVariable("Ap".to_string()));

        let err = NsmModelBuilder::new()
            .with_static_override("not_a_parameter", scalar(1.0))
            .build()
            .unwrap_err();
        assert!(matches!(err, NsmError::Parameter(_)));

        let err = NsmModelBuilder::new()
            .with_initial_override("depth", scalar(1.0))
            .build()
            .unwrap_err();
        assert!(matches!(err, NsmError::Parameter(_)));
    }

    #[test]
    fn rejects_invalid_option_overrides() {
        let err = NsmModelBuilder::new()
            .with_static_override("light_limitation_option", scalar(7.0))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            NsmError::Parameter("light_limitation_option must be between 1 and 3, got 7".to_string())
        );

        let err = NsmModelBuilder::new()
            .with_static_override("wind_reaeration_option", array![2.0, 14.0].into_dyn())
            .build()
            .unwrap_err();
        assert!(matches!(err, NsmError::Parameter(_)));

        let model = NsmModelBuilder::new()
            .with_static_override("hydraulic_reaeration_option", array![1.0, 9.0].into_dyn())
            .build()
            .unwrap();
        assert_eq!(model.shape(), &[2]);
    }

    #[test]
    fn rejects_invalid_parameters() {
        let mut params = NsmParameters::default();
        params.global_vars.wind_reaeration_option = 0;
        let err = NsmModelBuilder::new()
            .with_parameters(params)
            .build()
            .unwrap_err();
        assert!(matches!(err, NsmError::Parameter(_)));
    }
}
