use approx::assert_relative_eq;
use integration_tests::{every_model, hardened_plate, plate, rod, run_bounded};
use penetra_models::{AndersonWalker, Composite, Error, Simulation};
use penetra_observers::StepLimit;
use penetra_solvers::transient::march;

#[test]
fn eroding_rod_at_1500() {
    let simulation = Simulation::from(AndersonWalker::new(rod(), plate(), 1500.0).unwrap());
    let history = simulation.run(&march::Config::default()).unwrap();

    let first = history.first().unwrap();
    assert_relative_eq!(first.t, 0.0);
    assert_relative_eq!(first.dop, 0.0);
    assert_relative_eq!(first.v, 1500.0);
    // Matched materials split the impact velocity evenly.
    assert_relative_eq!(first.u, 750.0, max_relative = 1e-3);

    let last = history.last().unwrap();
    assert!(last.length > 0.0 && last.length <= 0.1);
    assert!(last.erosion > 0.0 && last.erosion < 1.0);
    assert!(last.dop > 0.02 && last.dop < 0.05, "dop = {}", last.dop);
    assert!((10..=12).contains(&history.len()), "{} rows", history.len());
}

#[test]
fn every_model_moves_forward_in_time_and_depth() {
    let config = march::Config::default();
    for simulation in every_model(plate(), 1000.0) {
        let history = run_bounded(&simulation, &config);

        assert!(history.len() >= 2, "{}", simulation.name());
        for pair in history.t.windows(2) {
            assert!(pair[1] > pair[0], "{}: time stalled", simulation.name());
        }
        for pair in history.dop.windows(2) {
            assert!(pair[1] >= pair[0], "{}: depth went back", simulation.name());
        }
        assert!(history.y.iter().all(|&y| y > 0.0));
    }
}

#[test]
fn hardened_surface_reduces_penetration() {
    let config = march::Config::default();
    let soft = every_model(plate(), 1000.0);
    let hard = every_model(hardened_plate(), 1000.0);

    for (soft, hard) in soft.iter().zip(&hard) {
        // Harder plates end erosion earlier with a faster tail, and that tail speed
        // seeds the rigid phase, so only the composite's eroding phase is compared.
        let (soft, hard): (Simulation, Simulation) = match (soft, hard) {
            (Simulation::Composite(soft), Simulation::Composite(hard)) => {
                ((*soft.eroding()).into(), (*hard.eroding()).into())
            }
            _ => (*soft, *hard),
        };
        let soft_dop = run_bounded(&soft, &config).last().unwrap().dop;
        let hard_dop = run_bounded(&hard, &config).last().unwrap().dop;
        assert!(hard_dop < soft_dop, "{}: {hard_dop} >= {soft_dop}", soft.name());
    }
}

#[test]
fn hardened_surface_shows_in_yield_channel() {
    let simulation = Simulation::from(AndersonWalker::new(rod(), hardened_plate(), 1500.0).unwrap());
    let history = run_bounded(&simulation, &march::Config::default());

    assert_relative_eq!(history.y[0], 2.0, max_relative = 1e-12);
    for pair in history.y.windows(2) {
        assert!(pair[1] <= pair[0]);
    }
    assert!(history.y.iter().all(|&y| (1.2..=2.0).contains(&y)));
}

#[test]
fn composite_continues_past_erosion() {
    let config = march::Config::default();
    let composite = Composite::new(rod(), plate(), 1000.0).unwrap();
    let eroding_run = march::solve_unobserved(composite.eroding(), &config).unwrap();
    let eroding = &eroding_run.history;
    let joined = run_bounded(&Simulation::from(composite), &config);

    let handover = eroding.last().unwrap();
    let terminal = joined.last().unwrap();
    assert!(terminal.dop > handover.dop);
    assert!(terminal.t > handover.t);

    // The eroding rows are kept as they are.
    assert_eq!(joined.t[..eroding.len()], eroding.t[..]);
    assert_eq!(joined.dop[..eroding.len()], eroding.dop[..]);
    // The first rigid row after its impact row is offset by the handover time and depth.
    let rigid = composite.rigid_phase(&eroding_run.last).unwrap().unwrap();
    let rigid_run = march::solve_unobserved(&rigid, &config).unwrap();
    assert_eq!(joined.len(), eroding.len() + rigid_run.history.len() - 1);
    assert_eq!(joined.t[eroding.len()], handover.t + rigid_run.history.t[1]);
    assert_eq!(joined.dop[eroding.len()], handover.dop + rigid_run.history.dop[1]);
    assert_eq!(joined.v[eroding.len()], rigid_run.history.v[1]);
    // The rigid phase starts from the rod that was left.
    assert_relative_eq!(terminal.length, handover.length, max_relative = 1e-12);
    for pair in joined.t.windows(2) {
        assert!(pair[1] > pair[0]);
    }
}

#[test]
fn composite_hooks_point_to_run() {
    let composite = Simulation::from(Composite::new(rod(), plate(), 1000.0).unwrap());

    let err = composite.init(1e-7).unwrap_err();
    assert!(matches!(err, Error::Unsupported { hook: "init" }));
    assert!(err.to_string().contains("run"));
}

#[test]
fn step_limit_leaves_normal_runs_alone() {
    let config = march::Config::default();
    for simulation in every_model(plate(), 1500.0) {
        let mut limit = StepLimit::new(100_000);
        let solution = simulation
            .run_observed(&config, &mut limit)
            .unwrap();

        assert_eq!(solution.status, march::Status::Terminated, "{}", simulation.name());
        assert!(!limit.tripped());
    }
}

#[test]
fn step_limit_cuts_long_runs_short() {
    let simulation = Simulation::from(AndersonWalker::new(rod(), plate(), 1500.0).unwrap());
    let mut limit = StepLimit::new(50);
    let solution = simulation
        .run_observed(&march::Config::default(), &mut limit)
        .unwrap();

    assert_eq!(solution.status, march::Status::StoppedByObserver);
    assert!(limit.tripped());
    assert_eq!(solution.steps, 50);
    assert!(solution.last.length > 0.09);
}
