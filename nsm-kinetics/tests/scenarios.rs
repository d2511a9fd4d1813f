//! End-to-end NSM-I runs with the default parameter set

use approx::assert_abs_diff_eq;
use ndarray::array;
use nsm_core::kernel::scalar;
use nsm_core::linalg::solve_2x2;
use nsm_core::model::Model;
use nsm_kinetics::parameters::NsmParameters;
use nsm_kinetics::NsmModelBuilder;

fn value(model: &Model, name: &str, time_index: usize) -> f64 {
    let field = model
        .dataset()
        .at(name, time_index)
        .unwrap_or_else(|| panic!("{} has no value at {}", name, time_index));
    *field.first().unwrap()
}

fn cells(model: &Model, name: &str, time_index: usize) -> Vec<f64> {
    model
        .dataset()
        .at(name, time_index)
        .unwrap()
        .iter()
        .copied()
        .collect()
}

fn run(params: NsmParameters, time_steps: usize) -> Model {
    let mut model = NsmModelBuilder::new()
        .with_parameters(params)
        .with_time_steps(time_steps)
        .build()
        .unwrap();
    model.run().unwrap();
    model
}

/// One step from the default state with the water temperature and some initial values
/// replaced.
fn single_step(temperature: f64, initial: &[(&str, f64)]) -> Model {
    let mut builder = NsmModelBuilder::new();
    builder.with_static_override("TwaterC", scalar(temperature));
    for (name, value) in initial {
        builder.with_initial_override(*name, scalar(*value));
    }
    let mut model = builder.build().unwrap();
    model.run().unwrap();
    model
}

fn warm_water() -> NsmParameters {
    let mut params = NsmParameters::default();
    params.global_vars.water_temperature = 25.0;
    params
}

#[test]
fn n2_relaxes_towards_saturation() {
    let model = run(warm_water(), 1);
    assert_abs_diff_eq!(value(&model, "N2", 0), 1.0);
    assert_abs_diff_eq!(value(&model, "N2", 1), 16.051128, epsilon = 1e-4);
}

#[test]
fn n2_at_two_atmospheres() {
    let mut params = warm_water();
    params.global_vars.pressure_mb = 2026.5;
    let model = run(params, 1);
    assert_abs_diff_eq!(value(&model, "pressure_atm", 1), 2.0);
    assert_abs_diff_eq!(value(&model, "N2", 1), 32.789715, epsilon = 1e-4);
}

#[test]
fn baseline_carbon() {
    let model = single_step(25.0, &[]);
    assert_abs_diff_eq!(value(&model, "POC", 1), 6.30, epsilon = 0.01);
    assert_abs_diff_eq!(value(&model, "DOC", 1), 1.24, epsilon = 0.01);
    assert_abs_diff_eq!(value(&model, "DIC", 1), 0.77, epsilon = 0.01);
}

#[test]
fn carbon_low_poc() {
    let model = single_step(25.0, &[("POC", 2.0)]);
    assert_abs_diff_eq!(value(&model, "POC", 1), 3.98, epsilon = 0.01);
    assert_abs_diff_eq!(value(&model, "DOC", 1), 1.22, epsilon = 0.01);
    assert_abs_diff_eq!(value(&model, "DIC", 1), 0.77, epsilon = 0.01);
}

#[test]
fn carbon_cold_water() {
    let model = single_step(15.0, &[]);
    assert_abs_diff_eq!(value(&model, "POC", 1), 5.58, epsilon = 0.01);
    assert_abs_diff_eq!(value(&model, "DOC", 1), 1.15, epsilon = 0.01);
    assert_abs_diff_eq!(value(&model, "DIC", 1), 0.85, epsilon = 0.01);
}

#[test]
fn nitrogen_module() {
    let model = single_step(25.0, &[]);
    assert_abs_diff_eq!(value(&model, "NH4", 1), 0.6101, epsilon = 1e-4);
    assert_abs_diff_eq!(value(&model, "NO3", 1), 5.1261, epsilon = 1e-4);
    assert_abs_diff_eq!(value(&model, "OrgN", 1), 1.8995, epsilon = 1e-4);
}

#[test]
fn pom_module() {
    let model = single_step(25.0, &[("POM", 10.0)]);
    assert_abs_diff_eq!(value(&model, "POM", 1), 22.49918, epsilon = 1e-6);
}

#[test]
fn baseline_run_is_finite() {
    let model = run(warm_water(), 5);
    assert!(model.finished());
    assert!(model.warnings().is_empty(), "{:?}", model.warnings());

    let dataset = model.dataset();
    assert_eq!(dataset.len(), 6);
    for (name, ..) in nsm_kinetics::processes::STATE_VARIABLES.iter() {
        let series = dataset.get(name).unwrap().scalar_values().unwrap();
        assert!(series.iter().all(|v| v.is_finite()), "{}: {:?}", name, series);
    }
}

#[test]
fn dissolved_oxygen_moves_towards_saturation_without_biology() {
    let mut params = warm_water();
    let flags = &mut params.global_parameters;
    flags.use_algae = false;
    flags.use_balgae = false;
    flags.use_cbod = false;
    flags.use_doc = false;
    flags.use_nh4 = false;
    flags.use_sod = false;

    let model = run(params, 10);
    let saturation = value(&model, "DOX_sat", 1);
    let start = value(&model, "DOX", 0);
    let end = value(&model, "DOX", 10);
    assert!(start < saturation);
    assert!((end - saturation).abs() < 1e-3 * (start - saturation).abs());
}

#[test]
fn cells_are_independent() {
    let temperatures = [15.0, 20.0, 25.0];
    let mut model = NsmModelBuilder::new()
        .with_static_override("TwaterC", array![15.0, 20.0, 25.0].into_dyn())
        .with_time_steps(2)
        .build()
        .unwrap();
    model.run().unwrap();
    assert_eq!(model.shape(), &[3]);

    for (i, temperature) in temperatures.iter().enumerate() {
        let mut params = NsmParameters::default();
        params.global_vars.water_temperature = *temperature;
        let single = run(params, 2);

        for name in ["DOX", "NH4", "POC", "Ap", "TP"] {
            let values = cells(&model, name, 2);
            assert_eq!(values[i], value(&single, name, 2), "{} in cell {}", name, i);
        }
    }
}

#[test]
fn forcing_updates_between_steps() {
    let mut model = NsmModelBuilder::new()
        .with_time_steps(2)
        .build()
        .unwrap();
    model.step().unwrap();
    model.set_static("TwaterC", scalar(10.0)).unwrap();
    model.step().unwrap();

    let temperature = model.dataset().get("TwaterC").unwrap().scalar_values().unwrap();
    assert_eq!(temperature, vec![20.0, 20.0, 10.0]);
    // Colder water holds more oxygen
    assert!(value(&model, "DOX_sat", 2) > value(&model, "DOX_sat", 1));
}

#[test]
fn unknown_selector_set_between_steps_is_reported() {
    let mut model = NsmModelBuilder::new()
        .with_time_steps(2)
        .build()
        .unwrap();
    model.step().unwrap();
    assert!(model.warnings().is_empty());

    model.set_static("light_limitation_option", scalar(7.0)).unwrap();
    model.step().unwrap();

    assert!(value(&model, "FL", 2).is_nan());
    assert!(model.warnings().iter().any(|w| w.variable == "FL" && w.timestep == 1));
}

#[test]
fn configured_from_toml() {
    let params = NsmParameters::from_toml_str(
        r#"
        [global_vars]
        TwaterC = 25.0
        depth = 3.0

        [global_parameters]
        use_Pathogen = false
        "#,
    )
    .unwrap();
    let model = run(params, 3);

    assert_eq!(value(&model, "depth", 3), 3.0);
    assert_eq!(value(&model, "PX", 3), value(&model, "PX", 0));
    assert_eq!(value(&model, "dPXdt", 3), 0.0);
    assert_ne!(value(&model, "DOX", 3), value(&model, "DOX", 0));
}

#[test]
fn sediment_fluxes_from_external_model() {
    let mut params = warm_water();
    params.global_parameters.use_sedflux = true;
    params.global_vars.jnh4 = 0.3;
    params.global_vars.sod_bed = 1.5;
    let model = run(params, 1);

    assert_abs_diff_eq!(value(&model, "NH4_SedRelease", 1), 0.2, epsilon = 1e-12);
    assert_abs_diff_eq!(value(&model, "SOD_tc", 1), 1.5);
    assert_abs_diff_eq!(value(&model, "DOX_SOD", 1), 1.0, epsilon = 1e-12);
}

#[test]
fn sediment_flux_solved_by_the_host_between_steps() {
    let mut params = warm_water();
    params.global_parameters.use_sedflux = true;
    let mut model = NsmModelBuilder::new()
        .with_parameters(params)
        .with_time_steps(2)
        .build()
        .unwrap();
    model.step().unwrap();
    assert_eq!(value(&model, "NH4_SedRelease", 1), 0.0);

    // Two-layer pore water balance, released from the top layer at 0.15 m/d
    let (top, _) = solve_2x2(0.7, -0.2, -0.2, 0.4, 1.2, 0.0).unwrap();
    model.set_static("JNH4", scalar(0.15 * top)).unwrap();
    model.step().unwrap();

    assert_abs_diff_eq!(value(&model, "NH4_SedRelease", 2), 0.2, epsilon = 1e-12);
}

#[test]
fn degenerate_cells_are_reported_but_do_not_stop_the_run() {
    let mut model = NsmModelBuilder::new()
        .with_static_override("depth", array![1.5, 0.0].into_dyn())
        .with_time_steps(2)
        .build()
        .unwrap();
    model.run().unwrap();

    assert!(model.finished());
    assert!(!model.warnings().is_empty());
    assert!(model.warnings().iter().all(|w| w.timestep == 0 || w.timestep == 1));
    // The healthy cell is unaffected
    let dox = cells(&model, "DOX", 2);
    assert!(dox[0].is_finite());
}
