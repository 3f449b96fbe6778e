//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, so one
//! observer can watch both the Newton solver and the time march.
//!
//! # Event traits
//!
//! - [`HasResidual`] — events that carry a residual value
//! - [`HasStep`] — events that carry a step or iteration counter
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use penetra_core::Observer;
//! use penetra_observers::traits::{CanStopEarly, HasResidual};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.residual().abs() < self.tolerance).then(A::stop_early)
//!     }
//! }
//! ```

use penetra_solvers::{equation::newton, transient::march};

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the residual for this event.
    fn residual(&self) -> f64;
}

/// An event that carries a 1-based step or iteration counter.
pub trait HasStep {
    /// Returns the number of steps taken when the event was emitted.
    fn step(&self) -> usize;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasResidual for newton::Event {
    fn residual(&self) -> f64 {
        self.residual
    }
}

impl HasStep for newton::Event {
    fn step(&self) -> usize {
        self.iter
    }
}

impl HasStep for march::Event {
    fn step(&self) -> usize {
        self.step
    }
}

impl CanStopEarly for newton::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for march::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use penetra_core::Observer;

    /// Stops as soon as the residual drops below a loose tolerance.
    struct Loose(f64);

    impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for Loose {
        fn observe(&mut self, event: &E) -> Option<A> {
            (event.residual().abs() < self.0).then(A::stop_early)
        }
    }

    #[test]
    fn residual_observer_stops_newton() {
        let config = newton::Config {
            max_iters: 50,
            residual_tol: 1e-14,
            slope_step: 1e-8,
        };
        let solution = newton::solve(|x| x * x - 2.0, 1.0, &config, Loose(1e-2)).unwrap();

        assert_eq!(solution.status, newton::Status::StoppedByObserver);
        assert!(solution.residual.abs() >= 1e-14);
    }

    #[test]
    fn march_events_report_their_step() {
        let event = march::Event {
            step: 7,
            state: penetra_core::State::default(),
        };
        assert_eq!(HasStep::step(&event), 7);
        assert_eq!(march::Action::stop_early(), march::Action::StopEarly);
    }
}
