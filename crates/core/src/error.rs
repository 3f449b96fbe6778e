use thiserror::Error;

/// Errors raised when a parameter object is constructed from invalid values.
///
/// Each variant corresponds to an input that would otherwise produce an
/// undefined derived quantity (NaN, infinity, or a negative square root).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ParameterError {
    /// A quantity that must be strictly positive and finite was not.
    #[error("`{name}` must be positive and finite, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    /// A quantity that must be non-negative and finite was not.
    #[error("`{name}` must be non-negative and finite, got {value}")]
    Negative { name: &'static str, value: f64 },

    /// The shear modulus `G = 3·K0·E / (9·K0 − E)` is undefined or non-positive.
    #[error("shear modulus is undefined for E = {youngs} Pa and K0 = {bulk} Pa (requires 9·K0 > E)")]
    DegenerateModuli { youngs: f64, bulk: f64 },

    /// The caliber-radius-head ratio is below the hemispherical-ish limit of 0.25.
    #[error("nose CRH must be at least 0.25, got {crh}")]
    NoseTooBlunt { crh: f64 },

    /// The hardened layer thicknesses violate `0 ≤ ts ≤ th`.
    #[error("hardened layer requires 0 <= ts <= th, got ts = {surface} m, th = {hardened} m")]
    InvalidHardenedLayer { surface: f64, hardened: f64 },
}

/// Returns `value` if it is strictly positive and finite.
pub(crate) fn positive(name: &'static str, value: f64) -> Result<f64, ParameterError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ParameterError::NonPositive { name, value })
    }
}

/// Returns `value` if it is non-negative and finite.
pub(crate) fn non_negative(name: &'static str, value: f64) -> Result<f64, ParameterError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ParameterError::Negative { name, value })
    }
}
