use crate::{State, Target};

/// The capability every single-phase penetration model provides.
///
/// A model owns its penetrator, target, and impact velocity. The time-march
/// driver asks it for an initial [`State`], advances that state by fixed
/// steps, and stops once [`PenetrationModel::is_terminal`] reports that the
/// physics no longer applies.
///
/// Implementations must be pure: calling any method with the same arguments
/// returns the same result and never changes the model.
pub trait PenetrationModel {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Short human-readable model name, used in diagnostics.
    fn name(&self) -> &'static str;

    /// The target the model penetrates.
    ///
    /// The driver reads the depth-dependent yield strength from it when logging.
    fn target(&self) -> &Target;

    /// Builds the state at the instant of impact.
    ///
    /// The `step` size is available to models whose initial derivatives
    /// depend on it.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the initial state cannot be established, for
    /// example when an embedded root solve fails to converge.
    fn init(&self, step: f64) -> Result<State, Self::Error>;

    /// Advances `state` by `step` seconds and returns the new state.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the step cannot be computed.
    fn step(&self, state: &State, step: f64) -> Result<State, Self::Error>;

    /// Returns `true` once `next` (reached from `prev`) ends the penetration.
    fn is_terminal(&self, next: &State, prev: &State) -> bool;

    /// Instantaneous target resistance in Pa at `state`.
    fn resistance(&self, state: &State) -> f64;
}
