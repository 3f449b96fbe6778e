//! Reusable observers for the Penetra solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the solvers in `penetra-solvers`.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasResidual`], [`HasStep`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`StepLimit`] — stops any solver after a fixed number of steps
//!
//! [`Observer`]: penetra_core::Observer
//! [`HasResidual`]: traits::HasResidual
//! [`HasStep`]: traits::HasStep
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod step_limit;

pub use step_limit::StepLimit;
