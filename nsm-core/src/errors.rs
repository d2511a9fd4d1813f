use thiserror::Error;

/// Error type for invalid model definitions and failed evaluations.
///
/// Construction-time problems (duplicate names, dangling references, missing values,
/// cycles) are reported by [`ModelBuilder::build`](crate::model::ModelBuilder::build).
/// Shape errors can also surface while stepping a model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NsmError {
    #[error("{0}")]
    Error(String),
    #[error("Variable '{0}' is already registered")]
    DuplicateVariable(String),
    #[error("Process for variable '{variable}' references unknown variable '{reference}'")]
    UnknownVariable { variable: String, reference: String },
    #[error("No value was supplied for static variable '{0}'")]
    MissingStaticValue(String),
    #[error("No initial value was supplied for state variable '{0}'")]
    MissingInitialValue(String),
    #[error("State variable '{state}' declares derivative '{derivative}' which is not a dynamic variable")]
    InvalidDerivative { state: String, derivative: String },
    #[error("Variable '{0}' is not a static variable")]
    NotAStaticVariable(String),
    #[error("Invalid parameter: {0}")]
    Parameter(String),
    #[error("Circular dependency between dynamic variables: {}", .cycle.join(", "))]
    Cycle { cycle: Vec<String> },
    #[error("Shapes {shapes:?} cannot be broadcast together while evaluating '{variable}'")]
    Shape {
        variable: String,
        shapes: Vec<Vec<usize>>,
    },
    #[error("Singular matrix (determinant is zero)")]
    SingularMatrix,
}

/// Convenience type for `Result<T, NsmError>`.
pub type NsmResult<T> = Result<T, NsmError>;
