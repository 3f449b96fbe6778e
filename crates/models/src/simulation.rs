use log::debug;
use penetra_core::{History, Observer, PenetrationModel, Penetrator, State, Target, VelocitySweep};
use penetra_solvers::transient::march;

use crate::{AndersonWalker, AndersonWalkerLv, Composite, Error, ForrestalWarren, Tate};

/// Any of the penetration models, behind one interface.
///
/// # Example
///
/// ```
/// use penetra_core::{Material, Penetrator, Target};
/// use penetra_models::{AndersonWalker, Simulation};
/// use penetra_solvers::transient::march;
/// use uom::si::{f64::Length, length::millimeter};
///
/// let steel = Material::from_gpa(7850.0, 1.2, 200.0, 160.0, 1.5)?;
/// let rod = Penetrator::new(
///     steel,
///     Length::new::<millimeter>(100.0),
///     Length::new::<millimeter>(10.0),
/// )?;
/// let simulation = Simulation::from(AndersonWalker::new(rod, Target::new(steel), 1500.0)?);
///
/// let history = simulation.run(&march::Config::default())?;
/// let terminal = history.last().unwrap();
/// assert!(terminal.dop > 0.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Simulation {
    AndersonWalker(AndersonWalker),
    AndersonWalkerLv(AndersonWalkerLv),
    Composite(Composite),
    ForrestalWarren(ForrestalWarren),
    Tate(Tate),
}

impl Simulation {
    /// Model name for diagnostics.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::AndersonWalker(model) => model.name(),
            Self::AndersonWalkerLv(model) => model.name(),
            Self::Composite(_) => "Anderson-Walker (high to low velocity)",
            Self::ForrestalWarren(model) => model.name(),
            Self::Tate(model) => model.name(),
        }
    }

    /// The penetrator of the wrapped model.
    #[must_use]
    pub fn penetrator(&self) -> &Penetrator {
        match self {
            Self::AndersonWalker(model) => model.penetrator(),
            Self::AndersonWalkerLv(model) => model.penetrator(),
            Self::Composite(model) => model.penetrator(),
            Self::ForrestalWarren(model) => model.penetrator(),
            Self::Tate(model) => model.penetrator(),
        }
    }

    /// The target of the wrapped model.
    #[must_use]
    pub fn target(&self) -> &Target {
        match self {
            Self::AndersonWalker(model) => model.target(),
            Self::AndersonWalkerLv(model) => model.target(),
            Self::Composite(model) => model.target(),
            Self::ForrestalWarren(model) => model.target(),
            Self::Tate(model) => model.target(),
        }
    }

    /// Impact velocity in m/s.
    #[must_use]
    pub fn impact_velocity(&self) -> f64 {
        match self {
            Self::AndersonWalker(model) => model.impact_velocity(),
            Self::AndersonWalkerLv(model) => model.impact_velocity(),
            Self::Composite(model) => model.impact_velocity(),
            Self::ForrestalWarren(model) => model.impact_velocity(),
            Self::Tate(model) => model.impact_velocity(),
        }
    }

    /// Returns a copy striking at `impact_velocity` (m/s).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parameter`] if the velocity is not positive.
    pub fn with_impact_velocity(&self, impact_velocity: f64) -> Result<Self, Error> {
        Ok(match self {
            Self::AndersonWalker(model) => Self::AndersonWalker(model.with_impact_velocity(impact_velocity)?),
            Self::AndersonWalkerLv(model) => {
                Self::AndersonWalkerLv(model.with_impact_velocity(impact_velocity)?)
            }
            Self::Composite(model) => Self::Composite(model.with_impact_velocity(impact_velocity)?),
            Self::ForrestalWarren(model) => {
                Self::ForrestalWarren(model.with_impact_velocity(impact_velocity)?)
            }
            Self::Tate(model) => Self::Tate(model.with_impact_velocity(impact_velocity)?),
        })
    }

    /// Runs the model from impact until it terminates and returns the logged samples.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid or the model fails.
    pub fn run(&self, config: &march::Config) -> Result<History, Error> {
        Ok(self.run_observed(config, ())?.history)
    }

    /// Runs the model with an observer attached to the march.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid or the model fails.
    pub fn run_observed<Obs>(&self, config: &march::Config, observer: Obs) -> Result<march::Solution, Error>
    where
        Obs: Observer<march::Event, march::Action>,
    {
        debug!(
            "{}: impact at {} m/s, step {} s, log interval {} s",
            self.name(),
            self.impact_velocity(),
            config.step,
            config.log_interval
        );

        let solution = match self {
            Self::AndersonWalker(model) => march::solve(model, config, observer)?,
            Self::AndersonWalkerLv(model) => march::solve(model, config, observer)?,
            Self::Composite(model) => model.run_observed(config, observer)?,
            Self::ForrestalWarren(model) => march::solve(model, config, observer)?,
            Self::Tate(model) => march::solve(model, config, observer)?,
        };

        debug!(
            "{}: {:?} after {} steps, depth of penetration {} m",
            self.name(),
            solution.status,
            solution.steps,
            solution.last.dop
        );
        Ok(solution)
    }

    /// Runs one simulation per impact velocity and collects the terminal samples.
    ///
    /// The receiver is left untouched; each velocity runs on a rebuilt copy.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any of the runs.
    pub fn run_over_velocities(
        &self,
        velocities: &[f64],
        config: &march::Config,
    ) -> Result<VelocitySweep, Error> {
        let mut sweep = VelocitySweep::default();
        for &velocity in velocities {
            let history = self.with_impact_velocity(velocity)?.run(config)?;
            sweep.push(velocity, history.last().unwrap_or_default());
        }
        Ok(sweep)
    }

    /// Builds the impact state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unsupported`] for the composite model, or the model's
    /// own error otherwise.
    pub fn init(&self, step: f64) -> Result<State, Error> {
        match self {
            Self::AndersonWalker(model) => model.init(step),
            Self::AndersonWalkerLv(model) => model.init(step),
            Self::Composite(_) => Err(Error::Unsupported { hook: "init" }),
            Self::ForrestalWarren(model) => model.init(step),
            Self::Tate(model) => model.init(step),
        }
    }

    /// Advances `state` by `step` seconds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unsupported`] for the composite model, or the model's
    /// own error otherwise.
    pub fn step(&self, state: &State, step: f64) -> Result<State, Error> {
        match self {
            Self::AndersonWalker(model) => model.step(state, step),
            Self::AndersonWalkerLv(model) => model.step(state, step),
            Self::Composite(_) => Err(Error::Unsupported { hook: "step" }),
            Self::ForrestalWarren(model) => model.step(state, step),
            Self::Tate(model) => model.step(state, step),
        }
    }

    /// Reports whether `next` ends the penetration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unsupported`] for the composite model.
    pub fn is_terminal(&self, next: &State, prev: &State) -> Result<bool, Error> {
        match self {
            Self::AndersonWalker(model) => Ok(model.is_terminal(next, prev)),
            Self::AndersonWalkerLv(model) => Ok(model.is_terminal(next, prev)),
            Self::Composite(_) => Err(Error::Unsupported { hook: "is_terminal" }),
            Self::ForrestalWarren(model) => Ok(model.is_terminal(next, prev)),
            Self::Tate(model) => Ok(model.is_terminal(next, prev)),
        }
    }

    /// Target resistance in Pa at `state`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unsupported`] for the composite model.
    pub fn resistance(&self, state: &State) -> Result<f64, Error> {
        match self {
            Self::AndersonWalker(model) => Ok(model.resistance(state)),
            Self::AndersonWalkerLv(model) => Ok(model.resistance(state)),
            Self::Composite(_) => Err(Error::Unsupported { hook: "resistance" }),
            Self::ForrestalWarren(model) => Ok(model.resistance(state)),
            Self::Tate(model) => Ok(model.resistance(state)),
        }
    }
}

impl From<AndersonWalker> for Simulation {
    fn from(model: AndersonWalker) -> Self {
        Self::AndersonWalker(model)
    }
}

impl From<AndersonWalkerLv> for Simulation {
    fn from(model: AndersonWalkerLv) -> Self {
        Self::AndersonWalkerLv(model)
    }
}

impl From<Composite> for Simulation {
    fn from(model: Composite) -> Self {
        Self::Composite(model)
    }
}

impl From<ForrestalWarren> for Simulation {
    fn from(model: ForrestalWarren) -> Self {
        Self::ForrestalWarren(model)
    }
}

impl From<Tate> for Simulation {
    fn from(model: Tate) -> Self {
        Self::Tate(model)
    }
}
