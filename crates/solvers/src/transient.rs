//! Solvers for transient problems: advancing a model through time.
//!
//! # Solvers
//!
//! - [`march`] — fixed-step march with coarse logging and model-driven termination

pub mod march;
