//! Basic model tests: step, run, forcing updates and dot output.

use crate::kernel::{scalar, Field};
use crate::model::{Model, ModelBuilder};
use crate::process;
use crate::variable::{Variable, VariableKind};
use approx::assert_relative_eq;
use is_close::is_close;
use ndarray::array;

fn decay_variables() -> Vec<Variable> {
    vec![
        Variable::static_var("k", "1/d", "Decay rate"),
        Variable::static_var("timestep", "d", "Step length"),
        Variable::state("X", "mg/L", "Decaying pool", "dX"),
        Variable::dynamic("half", "mg/L", "Half of X", process!(|X| X / 2.0)),
        Variable::dynamic("dX", "mg/L/d", "Decay of X", process!(|k, X| -k * X)),
    ]
}

fn decay_model(time_steps: usize, x0: Field) -> Model {
    ModelBuilder::new()
        .with_variables(decay_variables())
        .with_static_value("k", scalar(0.1))
        .with_static_value("timestep", scalar(1.0))
        .with_initial_value("X", x0)
        .with_time_steps(time_steps)
        .build()
        .unwrap()
}

#[test]
fn step() {
    let mut model = decay_model(3, scalar(10.0));

    assert_eq!(model.time_step_index(), 0);
    model.step().unwrap();
    assert_eq!(model.time_step_index(), 1);
    assert_relative_eq!(model.state_value("X").unwrap().sum(), 9.0);

    model.increment_timestep().unwrap();
    assert_relative_eq!(model.state_value("X").unwrap().sum(), 8.1, epsilon = 1e-12);

    model.run().unwrap();
    assert!(model.finished());
    assert!(model.step().is_err());

    let x = model.dataset().get("X").unwrap().scalar_values().unwrap();
    assert_eq!(x.len(), 4);
    assert!(is_close!(x[3], 7.29));
}

#[test]
fn run_steps_stops_when_finished() {
    let mut model = decay_model(2, scalar(10.0));
    model.run_steps(1).unwrap();
    assert_eq!(model.time_step_index(), 1);
    model.run_steps(5).unwrap();
    assert_eq!(model.time_step_index(), 2);
    assert_eq!(model.dataset().len(), 3);
}

#[test]
fn dynamic_values_are_recorded_with_the_next_state() {
    let mut model = decay_model(2, scalar(10.0));
    model.run().unwrap();

    let dataset = model.dataset();
    let dx = dataset.get("dX").unwrap().scalar_values().unwrap();
    let half = dataset.get("half").unwrap().scalar_values().unwrap();
    let x = dataset.get("X").unwrap().scalar_values().unwrap();

    // Dynamic variables are only known once a step has been evaluated
    assert!(dx[0].is_nan());
    assert!(half[0].is_nan());

    // The values at index t + 1 were calculated from the state at index t
    for t in 0..2 {
        assert_relative_eq!(x[t + 1], x[t] + dx[t + 1] * 1.0, epsilon = 1e-12);
        assert_relative_eq!(half[t + 1], x[t] / 2.0, epsilon = 1e-12);
    }

    let k = dataset.get("k").unwrap();
    assert_eq!(k.kind, VariableKind::Static);
    assert_eq!(k.scalar_values().unwrap(), vec![0.1, 0.1, 0.1]);
}

#[test]
fn arrays_broadcast_against_scalars() {
    let mut model = decay_model(1, array![10.0, 20.0].into_dyn());
    assert_eq!(model.shape(), &[2]);
    model.run().unwrap();

    let x = model.dataset().stacked("X").unwrap();
    assert_eq!(x.shape(), &[2, 2]);
    assert_relative_eq!(x[[1, 0]], 9.0, epsilon = 1e-12);
    assert_relative_eq!(x[[1, 1]], 18.0, epsilon = 1e-12);

    // Static values are expanded to the shape of the model
    let k = model.dataset().stacked("k").unwrap();
    assert_eq!(k, array![[0.1, 0.1], [0.1, 0.1]].into_dyn());
}

#[test]
fn set_static_between_steps() {
    let mut model = decay_model(2, scalar(10.0));
    model.step().unwrap();
    model.set_static("k", scalar(0.5)).unwrap();
    model.step().unwrap();

    assert_relative_eq!(model.state_value("X").unwrap().sum(), 4.5, epsilon = 1e-12);
    let k = model.dataset().get("k").unwrap().scalar_values().unwrap();
    assert_eq!(k, vec![0.1, 0.1, 0.5]);
    assert_eq!(model.static_value("k"), Some(&scalar(0.5)));
}

#[test]
fn set_static_rejects_other_variables() {
    let mut model = decay_model(1, array![1.0, 2.0].into_dyn());
    assert!(model.set_static("X", scalar(1.0)).is_err());
    assert!(model.set_static("missing", scalar(1.0)).is_err());
    assert!(model
        .set_static("k", array![1.0, 2.0, 3.0].into_dyn())
        .is_err());
    assert!(model.set_static("k", array![0.2, 0.3].into_dyn()).is_ok());
}

#[test]
fn evaluation_order() {
    let model = decay_model(1, scalar(1.0));
    assert_eq!(model.topo_order(), &["half".to_string(), "dX".to_string()]);
    assert_eq!(model.graph().node_count(), 2);
    assert_eq!(model.graph().edge_count(), 0);
}

#[test]
fn chained_dynamics_use_values_from_the_same_step() {
    let mut model = ModelBuilder::new()
        .with_variables(vec![
            Variable::static_var("timestep", "d", ""),
            Variable::state("X", "1", "", "dX"),
            Variable::dynamic("dX", "1", "", process!(|b| b)),
            Variable::dynamic("b", "1", "", process!(|a| a + 1.0)),
            Variable::dynamic("a", "1", "", process!(|X| 2.0 * X)),
        ])
        .with_static_value("timestep", scalar(0.5))
        .with_initial_value("X", scalar(1.0))
        .build()
        .unwrap();

    assert_eq!(model.topo_order(), &["a", "b", "dX"]);
    model.step().unwrap();

    let ds = model.dataset();
    assert_eq!(ds.at("a", 1), Some(&scalar(2.0)));
    assert_eq!(ds.at("b", 1), Some(&scalar(3.0)));
    assert_eq!(ds.at("X", 1), Some(&scalar(2.5)));
}

#[test]
fn dot() {
    let model = ModelBuilder::new()
        .with_variables(vec![
            Variable::static_var("k", "1", ""),
            Variable::dynamic("a", "1", "", process!(|k| k)),
            Variable::dynamic("b", "1", "", process!(|a| a)),
        ])
        .with_static_value("k", scalar(1.0))
        .build()
        .unwrap();

    let res = format!("{:?}", model.as_dot());
    assert!(res.starts_with("digraph {"));
    assert!(res.contains("0 [ label = \"a\"]"));
    assert!(res.contains("1 [ label = \"b\"]"));
    assert!(res.contains("0 -> 1"));
}

#[test]
fn deterministic() {
    let run = || {
        let mut model = decay_model(5, array![1.0, 2.0, 3.0].into_dyn());
        model.run().unwrap();
        model.into_dataset()
    };
    assert_eq!(run().stacked("X").unwrap(), run().stacked("X").unwrap());
}
