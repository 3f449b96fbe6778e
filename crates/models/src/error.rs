use penetra_core::ParameterError;
use penetra_solvers::{equation::newton, transient::march};
use thiserror::Error;

/// Errors raised while building or running a penetration model.
///
/// Physical termination (the penetrator stopping) is never an error; it is the
/// normal end of a run.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    #[error("pressure balance did not converge after {iters} iterations (residual {residual} Pa)")]
    Convergence { iters: usize, residual: f64 },

    #[error("root finding failed: {0}")]
    RootFinding(#[from] newton::Error),

    #[error("`{hook}` is not available on the composite model; call `run` instead")]
    Unsupported { hook: &'static str },

    #[error("march failed: {0}")]
    March(#[source] march::Error),
}

/// Recovers model errors that the march driver boxed on their way out.
impl From<march::Error> for Error {
    fn from(err: march::Error) -> Self {
        match err {
            march::Error::Model(boxed) => match boxed.downcast::<Error>() {
                Ok(err) => *err,
                Err(other) => Self::March(march::Error::Model(other)),
            },
            other => Self::March(other),
        }
    }
}

/// Returns `value` if it is a usable impact velocity.
pub(crate) fn check_impact_velocity(value: f64) -> Result<f64, ParameterError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ParameterError::NonPositive {
            name: "impact_velocity",
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwraps_boxed_model_errors() {
        let boxed = march::Error::Model(Box::new(Error::Unsupported { hook: "step" }));

        assert!(matches!(
            Error::from(boxed),
            Error::Unsupported { hook: "step" }
        ));
    }

    #[test]
    fn keeps_driver_errors() {
        let err = Error::from(march::Error::InvalidConfig { reason: "bad" });
        assert!(matches!(
            err,
            Error::March(march::Error::InvalidConfig { reason: "bad" })
        ));
    }

    #[test]
    fn rejects_non_positive_velocity() {
        assert!(check_impact_velocity(1500.0).is_ok());
        assert!(check_impact_velocity(0.0).is_err());
        assert!(check_impact_velocity(f64::NAN).is_err());
    }
}
