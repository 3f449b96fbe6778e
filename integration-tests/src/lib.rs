//! Shared fixtures for the workspace integration tests.
//!
//! Every scenario strikes a mild-steel target with a mild-steel rod of
//! length 100 mm and diameter 10 mm.

use penetra_core::{History, Material, Penetrator, Target};
use penetra_models::{
    AndersonWalker, AndersonWalkerLv, Composite, ForrestalWarren, Simulation, Tate,
};
use penetra_observers::StepLimit;
use penetra_solvers::transient::march;
use uom::si::{
    f64::{Length, Pressure},
    length::millimeter,
    pressure::gigapascal,
};

/// Steel: ρ = 7850 kg/m³, Y = 1.2 GPa, E = 200 GPa, K0 = 160 GPa, k = 1.5.
pub fn steel() -> Material {
    Material::from_gpa(7850.0, 1.2, 200.0, 160.0, 1.5).expect("steel constants are valid")
}

pub fn rod() -> Penetrator {
    Penetrator::new(
        steel(),
        Length::new::<millimeter>(100.0),
        Length::new::<millimeter>(10.0),
    )
    .expect("rod geometry is valid")
}

pub fn plate() -> Target {
    Target::new(steel())
}

/// The steel plate with a 2 GPa surface layer 5 mm thick, blending into the
/// bulk by 10 mm.
pub fn hardened_plate() -> Target {
    Target::hardened(
        steel(),
        Pressure::new::<gigapascal>(2.0),
        Length::new::<millimeter>(5.0),
        Length::new::<millimeter>(10.0),
    )
    .expect("hardening profile is valid")
}

/// One simulation per model, all striking `target` at `velocity` m/s.
pub fn every_model(target: Target, velocity: f64) -> Vec<Simulation> {
    let rod = rod();
    vec![
        AndersonWalker::new(rod, target, velocity)
            .expect("positive velocity")
            .into(),
        AndersonWalkerLv::new(rod, target, velocity)
            .expect("positive velocity")
            .into(),
        Composite::new(rod, target, velocity)
            .expect("positive velocity")
            .into(),
        ForrestalWarren::new(rod, target, velocity)
            .expect("positive velocity")
            .into(),
        Tate::new(rod, target, velocity)
            .expect("positive velocity")
            .into(),
    ]
}

/// Far more steps than any fixture needs to come to rest.
pub const STEP_CEILING: usize = 1_000_000;

/// Runs `simulation` under a [`StepLimit`] and checks that it ended on its own.
///
/// # Panics
///
/// Panics if the run fails or is cut off by the step ceiling.
pub fn run_bounded(simulation: &Simulation, config: &march::Config) -> History {
    let solution = simulation
        .run_observed(config, StepLimit::new(STEP_CEILING))
        .expect("run succeeds");
    assert_eq!(
        solution.status,
        march::Status::Terminated,
        "{} did not terminate",
        simulation.name()
    );
    solution.history
}
