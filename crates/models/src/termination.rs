use penetra_core::State;

/// Tunable constants of the tip-deceleration termination test.
///
/// A march continues while the new tip deceleration keeps at least
/// `ratio_threshold` of the previous one. Near steady state both values are
/// tiny and their ratio is noise, so the eroding model also keeps going while
/// the absolute change stays below `steady_tolerance` (m/s²).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Termination {
    pub ratio_threshold: f64,
    pub steady_tolerance: Option<f64>,
}

impl Termination {
    /// Settings for the eroding high-velocity model.
    #[must_use]
    pub const fn eroding() -> Self {
        Self {
            ratio_threshold: 0.2,
            steady_tolerance: Some(5e4),
        }
    }

    /// Settings for the rigid-body models.
    #[must_use]
    pub const fn rigid() -> Self {
        Self {
            ratio_threshold: 0.2,
            steady_tolerance: None,
        }
    }

    /// Returns `true` while the tip deceleration evolves smoothly from `prev` to `next`.
    #[must_use]
    pub fn is_smooth(&self, next: &State, prev: &State) -> bool {
        next.udot / prev.udot > self.ratio_threshold
            || self
                .steady_tolerance
                .is_some_and(|tolerance| (next.udot - prev.udot).abs() < tolerance)
    }
}
