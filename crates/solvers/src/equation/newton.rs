//! Newton iteration for a single scalar equation.
//!
//! The slope is estimated with a forward difference, so the residual only has
//! to be evaluable, not differentiable in closed form:
//!
//! ```text
//! f'(x) ≈ (f(x + h) − f(x)) / h
//! x_{n+1} = x_n − f(x_n) / f'(x_n)
//! ```
//!
//! # Example
//!
//! ```
//! use penetra_solvers::equation::newton;
//!
//! let config = newton::Config {
//!     residual_tol: 1e-10,
//!     slope_step: 1e-8,
//!     ..newton::Config::default()
//! };
//! let solution = newton::solve_unobserved(|x| x * x - 2.0, 1.0, &config).unwrap();
//!
//! assert!(solution.is_converged());
//! assert!((solution.x - 2_f64.sqrt()).abs() < 1e-8);
//! ```

mod action;
mod config;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use config::Config;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use log::trace;
use penetra_core::Observer;

/// Finds a root of `residual` starting from `x0`.
///
/// # Algorithm
///
/// Each iteration estimates the slope at the current iterate, takes a full
/// Newton step, and evaluates the residual at the new iterate. The solver
/// always takes at least one step, then stops as soon as
/// `|f(x)| <= residual_tol` or after `max_iters` iterations.
///
/// # Observer
///
/// The observer receives an [`Event`] after each iteration and may return
/// [`Action::StopEarly`] to end the solve with the latest iterate.
///
/// # Errors
///
/// Returns an error if the config is invalid, if `x0` is not finite, if the
/// residual is not finite at an iterate, or if the estimated slope vanishes.
pub fn solve<F, Obs>(
    residual: F,
    x0: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
    Obs: Observer<Event, Action>,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    if !x0.is_finite() {
        return Err(Error::NonFiniteGuess { x: x0 });
    }

    let mut x = x0;
    let mut fx = evaluate(&residual, x)?;

    for iter in 1..=config.max_iters {
        let slope = (residual(x + config.slope_step) - fx) / config.slope_step;
        if slope == 0.0 || !slope.is_finite() {
            return Err(Error::ZeroSlope { x });
        }

        x -= fx / slope;
        fx = evaluate(&residual, x)?;
        trace!("newton iter {iter}: x = {x}, residual = {fx}");

        let status = if fx.abs() <= config.residual_tol {
            Some(Status::Converged)
        } else if let Some(Action::StopEarly) = observer.observe(&Event {
            iter,
            x,
            residual: fx,
        }) {
            Some(Status::StoppedByObserver)
        } else {
            None
        };

        if let Some(status) = status {
            return Ok(Solution {
                status,
                x,
                residual: fx,
                iters: iter,
            });
        }
    }

    Ok(Solution {
        status: Status::MaxIters,
        x,
        residual: fx,
        iters: config.max_iters,
    })
}

/// Finds a root of `residual` without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F>(residual: F, x0: f64, config: &Config) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
{
    solve(residual, x0, config, ())
}

fn evaluate<F: Fn(f64) -> f64>(residual: &F, x: f64) -> Result<f64, Error> {
    let fx = residual(x);
    if fx.is_finite() {
        Ok(fx)
    } else {
        Err(Error::NonFiniteResidual { x, residual: fx })
    }
}
