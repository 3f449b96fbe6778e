use approx::assert_relative_eq;
use integration_tests::{STEP_CEILING, every_model, plate, rod};
use penetra_models::{AndersonWalker, Error, Simulation};
use penetra_solvers::transient::march;

const VELOCITIES: [f64; 3] = [500.0, 1000.0, 1500.0];

fn sweep_config() -> march::Config {
    march::Config::sweep().with_max_steps(STEP_CEILING)
}

#[test]
fn one_terminal_row_per_velocity() {
    let simulation = Simulation::from(AndersonWalker::new(rod(), plate(), 1500.0).unwrap());
    let sweep = simulation
        .run_over_velocities(&VELOCITIES, &sweep_config())
        .unwrap();

    assert_eq!(sweep.v0, VELOCITIES);
    assert_eq!(sweep.len(), 3);
    assert_eq!(sweep.terminal.len(), 3);
    assert_eq!(sweep.terminal.dop.len(), 3);
    assert_eq!(sweep.terminal.rt.len(), 3);
}

#[test]
fn faster_impacts_penetrate_deeper() {
    for simulation in every_model(plate(), 1000.0) {
        let sweep = simulation
            .run_over_velocities(&VELOCITIES, &sweep_config())
            .unwrap();

        for pair in sweep.terminal.dop.windows(2) {
            assert!(pair[1] > pair[0], "{}: {:?}", simulation.name(), sweep.terminal.dop);
        }
    }
}

#[test]
fn sweep_matches_individual_runs() {
    let config = sweep_config();
    for simulation in every_model(plate(), 1000.0) {
        let sweep = simulation.run_over_velocities(&VELOCITIES, &config).unwrap();

        for (i, &velocity) in VELOCITIES.iter().enumerate() {
            let single = simulation
                .with_impact_velocity(velocity)
                .unwrap()
                .run(&config)
                .unwrap();
            let terminal = single.last().unwrap();
            assert_eq!(sweep.terminal.dop[i], terminal.dop, "{}", simulation.name());
            assert_eq!(sweep.terminal.t[i], terminal.t);
            assert_eq!(sweep.terminal.v[i], terminal.v);
        }
    }
}

#[test]
fn terminal_sample_ignores_log_interval() {
    let simulation = Simulation::from(AndersonWalker::new(rod(), plate(), 1500.0).unwrap());
    let coarse = simulation.run(&sweep_config()).unwrap();
    let fine = simulation.run(&march::Config::default()).unwrap();

    assert_eq!(coarse.len(), 2);
    assert_eq!(coarse.t[0], fine.t[0]);
    assert_eq!(coarse.t[1], *fine.t.last().unwrap());
    assert_eq!(coarse.dop[1], *fine.dop.last().unwrap());
}

#[test]
fn bad_velocity_stops_the_sweep() {
    let simulation = Simulation::from(AndersonWalker::new(rod(), plate(), 1500.0).unwrap());
    let result = simulation.run_over_velocities(&[800.0, -5.0], &sweep_config());

    assert!(matches!(result, Err(Error::Parameter(_))));
}

#[test]
fn history_serializes_with_channel_names() {
    let simulation = Simulation::from(AndersonWalker::new(rod(), plate(), 1500.0).unwrap());
    let history = simulation.run(&march::Config::default()).unwrap();

    let json = serde_json::to_value(&history).unwrap();
    for channel in [
        "t", "DoP", "v", "u", "L", "Le", "vdot", "udot", "Ldot", "s", "sdot", "alpha",
        "alphadot", "vu_sdot", "Y", "Rt",
    ] {
        let column = json[channel].as_array().unwrap_or_else(|| panic!("missing {channel}"));
        assert_eq!(column.len(), history.len());
    }
    assert_relative_eq!(json["DoP"][0].as_f64().unwrap(), 0.0);
}

#[test]
fn sweep_serializes_flat() {
    let simulation = Simulation::from(AndersonWalker::new(rod(), plate(), 1500.0).unwrap());
    let sweep = simulation
        .run_over_velocities(&VELOCITIES, &sweep_config())
        .unwrap();

    let json = serde_json::to_value(&sweep).unwrap();
    assert_eq!(json["V0"].as_array().map(Vec::len), Some(3));
    assert_eq!(json["DoP"].as_array().map(Vec::len), Some(3));
    assert_relative_eq!(json["V0"][2].as_f64().unwrap(), 1500.0);
}
