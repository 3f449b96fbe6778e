//! High-velocity erosion followed by low-velocity rigid penetration.

use log::debug;
use penetra_core::{Observer, PenetrationModel, Penetrator, State, Target};
use penetra_solvers::{equation::newton, transient::march};
use uom::si::{f64::Length, length::meter};

use crate::{AndersonWalker, AndersonWalkerLv, Error, cavity::CraterFit, termination::Termination};

/// Chains [`AndersonWalker`] into [`AndersonWalkerLv`].
///
/// The eroding phase runs until it terminates. Its last sample seeds the
/// rigid phase: the residual rod length becomes the penetrator length and the
/// tail velocity becomes the impact velocity. The rigid phase's samples are
/// shifted by the eroding phase's final time and depth, and its impact sample
/// is dropped because it coincides with the last eroding sample.
///
/// A composite has no per-step physics of its own and so does not implement
/// [`PenetrationModel`]; only [`Composite::run_observed`] drives it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Composite {
    eroding: AndersonWalker,
}

impl Composite {
    /// Creates the composite model with the default crater fit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parameter`] if the impact velocity is not positive.
    pub fn new(penetrator: Penetrator, target: Target, impact_velocity: f64) -> Result<Self, Error> {
        Ok(Self {
            eroding: AndersonWalker::new(penetrator, target, impact_velocity)?,
        })
    }

    /// Returns a copy striking at a different velocity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parameter`] if the velocity is not positive.
    pub fn with_impact_velocity(&self, impact_velocity: f64) -> Result<Self, Error> {
        Ok(Self {
            eroding: self.eroding.with_impact_velocity(impact_velocity)?,
        })
    }

    /// Returns a copy whose phases both use `crater_fit`.
    #[must_use]
    pub fn with_crater_fit(&self, crater_fit: CraterFit) -> Self {
        Self {
            eroding: self.eroding.with_crater_fit(crater_fit),
        }
    }

    /// Returns a copy whose eroding phase ends by `termination`.
    ///
    /// The rigid phase keeps [`Termination::rigid`].
    #[must_use]
    pub fn with_termination(&self, termination: Termination) -> Self {
        Self {
            eroding: self.eroding.with_termination(termination),
        }
    }

    /// Returns a copy whose impact pressure balance uses `config`.
    #[must_use]
    pub fn with_newton(&self, config: newton::Config) -> Self {
        Self {
            eroding: self.eroding.with_newton(config),
        }
    }

    /// The high-velocity phase.
    #[must_use]
    pub fn eroding(&self) -> &AndersonWalker {
        &self.eroding
    }

    /// The rod at impact, before any erosion.
    #[must_use]
    pub fn penetrator(&self) -> &Penetrator {
        self.eroding.penetrator()
    }

    /// The target shared by both phases.
    #[must_use]
    pub fn target(&self) -> &Target {
        self.eroding.target()
    }

    /// Impact velocity of the eroding phase in m/s.
    #[must_use]
    pub fn impact_velocity(&self) -> f64 {
        self.eroding.impact_velocity()
    }

    /// Builds the rigid phase from the last state of the eroding phase.
    ///
    /// Returns `None` when the rod was consumed or has come to rest, leaving
    /// nothing for a rigid phase to do.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parameter`] if the rebuilt penetrator is invalid.
    pub fn rigid_phase(&self, handover: &State) -> Result<Option<AndersonWalkerLv>, Error> {
        if handover.length <= 0.0 || handover.v <= 0.0 {
            return Ok(None);
        }

        let penetrator = self
            .eroding
            .penetrator()
            .with_length(Length::new::<meter>(handover.length))?;
        let rigid = AndersonWalkerLv::new(penetrator, *self.eroding.target(), handover.v)?
            .with_crater_fit(self.eroding.crater_fit());

        Ok(Some(rigid))
    }

    /// Runs both phases and joins their samples.
    ///
    /// The observer sees the events of both phases; step numbers restart at 1
    /// when the rigid phase begins. If the eroding phase does not end by
    /// terminating, its solution is returned as is.
    ///
    /// # Errors
    ///
    /// Returns an error if either phase fails or the handover is invalid.
    pub fn run_observed<Obs>(&self, config: &march::Config, mut observer: Obs) -> Result<march::Solution, Error>
    where
        Obs: Observer<march::Event, march::Action>,
    {
        let eroding = march::solve(&self.eroding, config, |event: &march::Event| {
            observer.observe(event)
        })?;
        if eroding.status != march::Status::Terminated {
            return Ok(eroding);
        }

        let Some(rigid) = self.rigid_phase(&eroding.last)? else {
            debug!("{}: no rigid phase after erosion", self.eroding.name());
            return Ok(eroding);
        };
        debug!(
            "handing over to rigid phase at {} m/s with {} m of rod left",
            eroding.last.v, eroding.last.length
        );

        let rigid_run = march::solve(&rigid, config, |event: &march::Event| observer.observe(event))?;

        let (time, depth) = (eroding.last.t, eroding.last.dop);
        let mut history = eroding.history;
        if let Some(end) = history.last() {
            history.extend_shifted(&rigid_run.history, 1, end.t, end.dop);
        }

        Ok(march::Solution {
            status: rigid_run.status,
            history,
            steps: eroding.steps + rigid_run.steps,
            last: State {
                t: rigid_run.last.t + time,
                dop: rigid_run.last.dop + depth,
                ..rigid_run.last
            },
        })
    }
}
