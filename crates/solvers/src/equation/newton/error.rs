use thiserror::Error;

/// Errors that can occur during Newton iteration.
///
/// Running out of iterations is not an error; it is reported through
/// [`Status::MaxIters`](super::Status::MaxIters).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error("initial guess is not finite: {x}")]
    NonFiniteGuess { x: f64 },

    #[error("non-finite residual {residual} at x = {x}")]
    NonFiniteResidual { x: f64, residual: f64 },

    #[error("slope vanished or is not finite at x = {x}")]
    ZeroSlope { x: f64 },
}
