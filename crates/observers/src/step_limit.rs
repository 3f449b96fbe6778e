use log::warn;
use penetra_core::Observer;

use crate::traits::{CanStopEarly, HasStep};

/// Stops a solver once a fixed number of steps has elapsed.
///
/// A march only ends when its model reports a terminal state, so parameters
/// that keep the termination test from ever firing would march forever.
/// Attaching a `StepLimit` turns that hang into a run that ends with
/// `Status::StoppedByObserver`.
///
/// # Example
///
/// ```ignore
/// use penetra_observers::StepLimit;
///
/// let solution = simulation.run_observed(&config, StepLimit::new(1_000_000))?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepLimit {
    max_steps: usize,
    tripped: bool,
}

impl StepLimit {
    /// Creates an observer that stops at step `max_steps`.
    #[must_use]
    pub fn new(max_steps: usize) -> Self {
        Self {
            max_steps,
            tripped: false,
        }
    }

    /// The configured ceiling.
    #[must_use]
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// Returns `true` if this observer has stopped a solver.
    #[must_use]
    pub fn tripped(&self) -> bool {
        self.tripped
    }
}

impl<E: HasStep, A: CanStopEarly> Observer<E, A> for StepLimit {
    fn observe(&mut self, event: &E) -> Option<A> {
        if event.step() < self.max_steps {
            return None;
        }
        if !self.tripped {
            warn!("step limit of {} reached", self.max_steps);
        }
        self.tripped = true;
        Some(A::stop_early())
    }
}

/// Lets a borrowed limit be handed to a solver and inspected afterwards.
impl<E: HasStep, A: CanStopEarly> Observer<E, A> for &mut StepLimit {
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}
