/// Step and logging cadence of a march.
///
/// `step` is the integration step and `log_interval` the spacing of logged
/// samples, both in seconds. A march has no time horizon of its own; it ends
/// when the model reports a terminal state, so `max_steps` is the only guard
/// against a model that never terminates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub step: f64,
    pub log_interval: f64,
    pub max_steps: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(1e-7, 1e-5)
    }
}

impl Config {
    /// Creates an unbounded config with the given step and log interval.
    #[must_use]
    pub fn new(step: f64, log_interval: f64) -> Self {
        Self {
            step,
            log_interval,
            max_steps: None,
        }
    }

    /// Config used for velocity sweeps.
    ///
    /// The log interval is far longer than any penetration event, so a run
    /// logs only its initial and terminal samples.
    #[must_use]
    pub fn sweep() -> Self {
        Self::new(1e-7, 1.0)
    }

    /// Returns a copy that stops after at most `max_steps` steps.
    #[must_use]
    pub fn with_max_steps(self, max_steps: usize) -> Self {
        Self {
            max_steps: Some(max_steps),
            ..self
        }
    }

    /// Validates the step and log interval.
    ///
    /// # Errors
    ///
    /// Returns an error if `step` is not positive and finite, or if
    /// `log_interval` is smaller than `step` (an infinite interval is allowed).
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err("step must be finite and positive");
        }
        if self.log_interval.is_nan() || self.log_interval < self.step {
            return Err("log_interval must be at least step");
        }
        if self.max_steps == Some(0) {
            return Err("max_steps must be at least 1");
        }
        Ok(())
    }
}
