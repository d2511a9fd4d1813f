//! Errors raised while building a model.

use crate::errors::NsmError;
use crate::kernel::scalar;
use crate::model::ModelBuilder;
use crate::process;
use crate::variable::Variable;
use ndarray::array;

fn builder() -> ModelBuilder {
    let mut builder = ModelBuilder::new();
    builder
        .with_variables(vec![
            Variable::static_var("k", "1/d", "Decay rate"),
            Variable::static_var("timestep", "d", "Step length"),
            Variable::state("X", "mg/L", "Decaying pool", "dX"),
            Variable::dynamic("dX", "mg/L/d", "Decay of X", process!(|k, X| -k * X)),
        ])
        .with_static_value("k", scalar(0.1))
        .with_static_value("timestep", scalar(1.0))
        .with_initial_value("X", scalar(10.0));
    builder
}

#[test]
fn valid() {
    assert!(builder().build().is_ok());
}

#[test]
fn duplicate_variable() {
    let err = builder()
        .with_variable(Variable::static_var("k", "1/d", "Again"))
        .build()
        .unwrap_err();
    assert_eq!(err, NsmError::DuplicateVariable("k".to_string()));
}

#[test]
fn unknown_reference() {
    let err = builder()
        .with_variable(Variable::dynamic(
            "y",
            "1",
            "",
            process!(|X, theta| X * theta),
        ))
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        NsmError::UnknownVariable {
            variable: "y".to_string(),
            reference: "theta".to_string()
        }
    );
    assert_eq!(
        err.to_string(),
        "Process for variable 'y' references unknown variable 'theta'"
    );
}

#[test]
fn missing_static_value() {
    let err = builder()
        .with_variable(Variable::static_var("depth", "m", "Depth"))
        .build()
        .unwrap_err();
    assert_eq!(err, NsmError::MissingStaticValue("depth".to_string()));
}

#[test]
fn missing_initial_value() {
    let err = builder()
        .with_variable(Variable::state("Y", "mg/L", "Second pool", "dX"))
        .build()
        .unwrap_err();
    assert_eq!(err, NsmError::MissingInitialValue("Y".to_string()));
}

#[test]
fn missing_timestep() {
    let err = builder()
        .with_timestep_variable("dt")
        .build()
        .unwrap_err();
    assert_eq!(err, NsmError::MissingStaticValue("dt".to_string()));
}

#[test]
fn value_for_non_static_variable() {
    let err = builder()
        .with_static_value("X", scalar(1.0))
        .build()
        .unwrap_err();
    assert_eq!(err, NsmError::NotAStaticVariable("X".to_string()));
}

#[test]
fn unneeded_values_are_ignored() {
    assert!(builder()
        .with_static_value("unused", scalar(1.0))
        .build()
        .is_ok());
}

#[test]
fn cycle() {
    let err = builder()
        .with_variables(vec![
            Variable::dynamic("p", "1", "", process!(|q, X| q + X)),
            Variable::dynamic("q", "1", "", process!(|p| p)),
        ])
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        NsmError::Cycle {
            cycle: vec!["p".to_string(), "q".to_string()]
        }
    );
    assert_eq!(
        err.to_string(),
        "Circular dependency between dynamic variables: p, q"
    );
}

#[test]
fn incompatible_shapes() {
    let err = builder()
        .with_static_value("k", array![0.1, 0.2].into_dyn())
        .with_initial_value("X", array![1.0, 2.0, 3.0].into_dyn())
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        NsmError::Shape {
            variable: "X".to_string(),
            shapes: vec![vec![2], vec![], vec![3]]
        }
    );
}
