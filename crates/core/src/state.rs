#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The per-step record evolved by a penetration model.
///
/// Each integration step produces a fresh `State` from the previous one; the
/// driver never mutates an accepted state in place.
///
/// All quantities are in SI base units. Fields that a model does not evolve
/// stay at zero (for example `s` and `vu_sdot` in the rigid-body models).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct State {
    /// Tip (penetrator/target interface) velocity `u` in m/s.
    pub u: f64,
    /// Tail (rigid rear section) velocity `v` in m/s.
    pub v: f64,
    /// Size `s` of the plastic zone inside the penetrator tip in m.
    pub s: f64,
    /// Residual penetrator length `L` in m.
    #[cfg_attr(feature = "serde", serde(rename = "L"))]
    pub length: f64,
    /// Eroded fraction `Le = (L0 − L)/L0`.
    #[cfg_attr(feature = "serde", serde(rename = "Le"))]
    pub erosion: f64,
    /// Target plastic-zone radius ratio `α`.
    pub alpha: f64,
    /// Tip deceleration `du/dt` in m/s².
    pub udot: f64,
    /// Tail deceleration `dv/dt` in m/s².
    pub vdot: f64,
    /// Rate of change of residual length `dL/dt` in m/s.
    #[cfg_attr(feature = "serde", serde(rename = "Ldot"))]
    pub ldot: f64,
    /// Rate of change of the tip plastic zone `ds/dt` in m/s.
    pub sdot: f64,
    /// Rate of change of `α` in 1/s.
    pub alphadot: f64,
    /// Erosion-rate cross term of the eroding tip momentum balance, in 1/s².
    pub vu_sdot: f64,
    /// Depth of penetration in m.
    #[cfg_attr(feature = "serde", serde(rename = "DoP"))]
    pub dop: f64,
    /// Elapsed time in s.
    pub t: f64,
}

impl State {
    /// Creates the impact state for a rod of `length` m striking at `velocity` m/s.
    ///
    /// Tip velocity starts equal to the tail velocity.
    #[must_use]
    pub fn impact(velocity: f64, length: f64) -> Self {
        Self {
            u: velocity,
            v: velocity,
            length,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn impact_state() {
        let state = State::impact(1500.0, 0.1);

        assert_eq!(state.u, 1500.0);
        assert_eq!(state.v, 1500.0);
        assert_eq!(state.length, 0.1);
        assert_eq!(state.dop, 0.0);
        assert_eq!(state.t, 0.0);
        assert_eq!(state.udot, 0.0);
    }
}
