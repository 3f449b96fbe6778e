/// Configuration for the Newton solver.
///
/// The defaults suit the pressure-balance solve at impact: residuals are in
/// pascal, so converging to within one pascal is well below the precision of
/// the material data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Maximum number of iterations before giving up.
    pub max_iters: usize,

    /// Converged once `|f(x)| <= residual_tol`.
    pub residual_tol: f64,

    /// Forward-difference step used to estimate `f'(x)`.
    pub slope_step: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            residual_tol: 1.0,
            slope_step: 1e-3,
        }
    }
}

impl Config {
    /// Validates the iteration budget and tolerances.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero, if `residual_tol` is negative
    /// or non-finite, or if `slope_step` is not positive and finite.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.max_iters == 0 {
            return Err("max_iters must be at least 1");
        }
        if !self.residual_tol.is_finite() || self.residual_tol < 0.0 {
            return Err("residual_tol must be finite and non-negative");
        }
        if !self.slope_step.is_finite() || self.slope_step <= 0.0 {
            return Err("slope_step must be finite and positive");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn rejects_bad_values() {
        let zero_iters = Config {
            max_iters: 0,
            ..Config::default()
        };
        assert!(zero_iters.validate().is_err());

        let bad_tol = Config {
            residual_tol: f64::NAN,
            ..Config::default()
        };
        assert!(bad_tol.validate().is_err());

        let bad_step = Config {
            slope_step: 0.0,
            ..Config::default()
        };
        assert!(bad_step.validate().is_err());
    }
}
