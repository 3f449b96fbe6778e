//! Analytic penetration models for long rods and rigid projectiles.
//!
//! Each model implements [`penetra_core::PenetrationModel`] and is driven by
//! [`penetra_solvers::transient::march`]:
//!
//! - [`AndersonWalker`] — eroding rod with a plastic zone in the target
//! - [`AndersonWalkerLv`] — the same rod once it stops eroding
//! - [`Composite`] — the eroding phase handing over to the rigid phase
//! - [`ForrestalWarren`] — rigid ogive-nosed projectile
//! - [`Tate`] — Tate–Alekseevskii with a rigid-body regime
//!
//! [`Simulation`] wraps any of them behind `run` and `run_over_velocities`.

pub mod cavity;
mod anderson_walker;
mod anderson_walker_lv;
mod composite;
mod error;
mod forrestal_warren;
mod resistance;
mod simulation;
mod tate;
mod termination;

pub use anderson_walker::AndersonWalker;
pub use anderson_walker_lv::AndersonWalkerLv;
pub use cavity::CraterFit;
pub use composite::Composite;
pub use error::Error;
pub use forrestal_warren::ForrestalWarren;
pub use resistance::ResistanceFit;
pub use simulation::Simulation;
pub use tate::Tate;
pub use termination::Termination;
