//! Fixed-step time march with coarse logging.
//!
//! The driver owns no physics. It asks a [`PenetrationModel`] for the impact
//! state, advances it with a constant step, and records a [`Sample`] every
//! `log_interval` seconds until the model reports a terminal state:
//!
//! ```text
//! prev = next = init
//! log_time = 0
//! loop:
//!     while running and next.t < log_time:
//!         prev, next = next, step(next)
//!         running = !terminal(next, prev)
//!     log(prev)
//!     if !running: break
//!     log_time += log_interval
//! ```
//!
//! Samples lag the log boundary by one step, and the state that ends the
//! march is never logged; the last sample is the final accepted state.
//!
//! # Example
//!
//! ```ignore
//! use penetra_solvers::transient::march;
//!
//! let solution = march::solve_unobserved(&model, &march::Config::default())?;
//! let terminal = solution.history.last().unwrap();
//! println!("depth of penetration: {} m", terminal.dop);
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

use log::debug;
use penetra_core::{History, Observer, PenetrationModel, Sample, State};

/// Marches `model` from impact until it terminates.
///
/// # Observer
///
/// The observer receives an [`Event`] after every step that does not end the
/// march, and may return [`Action::StopEarly`] to stop with the samples
/// logged so far plus the state preceding the observed one.
///
/// # Errors
///
/// Returns an error if the config is invalid or if the model fails to build
/// its initial state or to take a step.
pub fn solve<M, Obs>(model: &M, config: &Config, mut observer: Obs) -> Result<Solution, Error>
where
    M: PenetrationModel,
    Obs: Observer<Event, Action>,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let dt = config.step;
    debug!(
        "{}: marching with step {dt} s, log interval {} s",
        model.name(),
        config.log_interval
    );

    let mut prev = model.init(dt).map_err(Error::model)?;
    let mut next = prev;
    let mut history = History::default();
    let mut log_time = 0.0;
    let mut steps = 0;
    let mut status = None;

    loop {
        while status.is_none() && next.t < log_time {
            prev = next;
            next = model.step(&prev, dt).map_err(Error::model)?;
            steps += 1;

            status = if model.is_terminal(&next, &prev) {
                Some(Status::Terminated)
            } else if let Some(Action::StopEarly) = observer.observe(&Event { step: steps, state: next }) {
                Some(Status::StoppedByObserver)
            } else if config.max_steps.is_some_and(|max| steps >= max) {
                Some(Status::StepLimit)
            } else {
                None
            };
        }

        record(&mut history, model, &prev);

        if let Some(status) = status {
            debug!(
                "{}: {status:?} after {steps} steps, {} samples, depth {} m",
                model.name(),
                history.len(),
                prev.dop
            );
            return Ok(Solution {
                status,
                history,
                steps,
                last: prev,
            });
        }

        log_time += config.log_interval;
    }
}

/// Marches `model` without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<M: PenetrationModel>(model: &M, config: &Config) -> Result<Solution, Error> {
    solve(model, config, ())
}

/// Logs `state` unless it is not newer than the last sample.
///
/// A state can reach the log twice when the log interval is no longer than
/// a single step.
fn record<M: PenetrationModel>(history: &mut History, model: &M, state: &State) {
    let sample = Sample::from_state(
        state,
        model.target().yield_at(state.dop),
        model.resistance(state),
    );

    if history.last().is_some_and(|last| sample.t <= last.t) {
        return;
    }
    history.push(sample);
}
