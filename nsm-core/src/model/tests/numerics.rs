//! Non-finite values are recorded but never stop a run.

use crate::kernel::{isnan, scalar, where_};
use crate::model::{ModelBuilder, NumericIssue, NumericWarning};
use crate::process;
use crate::variable::Variable;

#[test]
fn first_nan_is_recorded_once() {
    let mut model = ModelBuilder::new()
        .with_variables(vec![
            Variable::static_var("timestep", "d", ""),
            Variable::static_var("zero", "1", ""),
            Variable::state("X", "1", "", "dX"),
            Variable::dynamic("ratio", "1", "", process!(|zero| zero / zero)),
            Variable::dynamic("guarded", "1", "", process!(|ratio| where_(isnan(ratio), 0.0, ratio))),
            Variable::dynamic("dX", "1", "", process!(|guarded| guarded + 1.0)),
        ])
        .with_static_value("timestep", scalar(1.0))
        .with_static_value("zero", scalar(0.0))
        .with_initial_value("X", scalar(0.0))
        .with_time_steps(3)
        .build()
        .unwrap();

    model.run().unwrap();

    assert_eq!(
        model.warnings(),
        &[NumericWarning {
            timestep: 0,
            variable: "ratio".to_string(),
            kind: NumericIssue::NaN,
        }]
    );
    assert_eq!(
        model.dataset().get("X").unwrap().scalar_values().unwrap(),
        vec![0.0, 1.0, 2.0, 3.0]
    );
}

#[test]
fn infinite_values_propagate_to_state() {
    let mut model = ModelBuilder::new()
        .with_variables(vec![
            Variable::static_var("timestep", "d", ""),
            Variable::static_var("depth", "m", ""),
            Variable::state("X", "1", "", "dX"),
            Variable::dynamic("dX", "1", "", process!(|depth| 1.0 / depth)),
        ])
        .with_static_value("timestep", scalar(1.0))
        .with_static_value("depth", scalar(0.0))
        .with_initial_value("X", scalar(1.0))
        .with_time_steps(2)
        .build()
        .unwrap();

    model.run().unwrap();

    let warnings = model.warnings();
    assert_eq!(warnings.len(), 2);
    assert_eq!(warnings[0].variable, "dX");
    assert_eq!(warnings[0].kind, NumericIssue::Infinite);
    assert_eq!(warnings[1].variable, "X");
    assert_eq!(warnings[1].to_string(), "X produced Inf at timestep 0");
    assert!(model.state_value("X").unwrap().sum().is_infinite());
}
