//! Solvers for scalar equations: finding roots of `f(x) = 0`.
//!
//! # Solvers
//!
//! - [`newton`] — Newton iteration with a forward-difference slope

pub mod newton;
