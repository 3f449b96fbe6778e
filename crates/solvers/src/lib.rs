//! Numerical solvers for the Penetra framework.
//!
//! - [`equation`] — root finding for scalar equations
//! - [`transient`] — time marching of penetration models
//!
//! Every solver accepts an [`Observer`] that sees each iteration and may stop
//! the solver early.
//!
//! [`Observer`]: penetra_core::Observer

pub mod equation;
pub mod transient;
