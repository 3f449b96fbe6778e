//! Rigid-body penetration at low velocity after Anderson and Walker.
//!
//! Below the erosion threshold the rod no longer shortens. Tip and tail share
//! one deceleration, driven by the target's plastic-zone resistance alone.

use penetra_core::{PenetrationModel, Penetrator, State, Target};

use crate::{
    Error,
    cavity::{self, CraterFit},
    error::check_impact_velocity,
    termination::Termination,
};

/// The low-velocity Anderson–Walker model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AndersonWalkerLv {
    penetrator: Penetrator,
    target: Target,
    impact_velocity: f64,
    crater_fit: CraterFit,
    crater_radius: f64,
    termination: Termination,
}

impl AndersonWalkerLv {
    /// Creates the model with the default crater fit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parameter`] if the impact velocity is not positive.
    pub fn new(penetrator: Penetrator, target: Target, impact_velocity: f64) -> Result<Self, Error> {
        let impact_velocity = check_impact_velocity(impact_velocity)?;
        let crater_fit = CraterFit::default();
        Ok(Self {
            crater_radius: crater_fit.crater_radius(penetrator.radius(), impact_velocity),
            penetrator,
            target,
            impact_velocity,
            crater_fit,
            termination: Termination::rigid(),
        })
    }

    /// Returns a copy striking at a different velocity; the crater radius follows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parameter`] if the velocity is not positive.
    pub fn with_impact_velocity(&self, impact_velocity: f64) -> Result<Self, Error> {
        let impact_velocity = check_impact_velocity(impact_velocity)?;
        Ok(Self {
            impact_velocity,
            crater_radius: self
                .crater_fit
                .crater_radius(self.penetrator.radius(), impact_velocity),
            ..*self
        })
    }

    /// Returns a copy using a different crater fit.
    #[must_use]
    pub fn with_crater_fit(&self, crater_fit: CraterFit) -> Self {
        Self {
            crater_fit,
            crater_radius: crater_fit.crater_radius(self.penetrator.radius(), self.impact_velocity),
            ..*self
        }
    }

    /// Returns a copy with different termination constants.
    #[must_use]
    pub fn with_termination(&self, termination: Termination) -> Self {
        Self {
            termination,
            ..*self
        }
    }

    /// The rigid rod.
    #[must_use]
    pub fn penetrator(&self) -> &Penetrator {
        &self.penetrator
    }

    /// Impact velocity in m/s.
    #[must_use]
    pub fn impact_velocity(&self) -> f64 {
        self.impact_velocity
    }

    /// Crater-radius fit in use.
    #[must_use]
    pub fn crater_fit(&self) -> CraterFit {
        self.crater_fit
    }

    /// Crater radius `Rc` in m.
    #[must_use]
    pub fn crater_radius(&self) -> f64 {
        self.crater_radius
    }

    /// Crater diameter `2·Rc` in m.
    #[must_use]
    pub fn crater_diameter(&self) -> f64 {
        2.0 * self.crater_radius
    }

    /// Termination constants in use.
    #[must_use]
    pub fn termination(&self) -> Termination {
        self.termination
    }

    fn deceleration(&self, st: &State) -> f64 {
        let rho_t = self.target.density();
        let rc = self.crater_radius;

        let lh = rho_t * st.alphadot * 2.0 * rc * st.u / ((st.alpha + 1.0) * (st.alpha + 1.0));
        let rh = -(0.5 * rho_t * st.u * st.u + cavity::resistance(self.target.yield_at(st.dop), st.alpha));
        let denom = self.penetrator.density() * self.penetrator.length()
            + rho_t * rc * (st.alpha - 1.0) / (st.alpha + 1.0);

        (rh - lh) / denom
    }
}

impl PenetrationModel for AndersonWalkerLv {
    type Error = Error;

    fn name(&self) -> &'static str {
        "Anderson-Walker (low velocity)"
    }

    fn target(&self) -> &Target {
        &self.target
    }

    fn init(&self, _step: f64) -> Result<State, Error> {
        let mut st = State::impact(self.impact_velocity, self.penetrator.length());
        st.alpha = cavity::plastic_zone_ratio(&self.target, st.u, st.dop);
        st.udot = self.deceleration(&st);
        st.vdot = st.udot;
        Ok(st)
    }

    fn step(&self, old: &State, step: f64) -> Result<State, Error> {
        let fresh = self.deceleration(old);
        let udot = 0.5 * (old.udot + fresh);
        let vdot = 0.5 * (old.vdot + fresh);
        let alpha = cavity::plastic_zone_ratio(&self.target, old.u, old.dop);
        let u = old.u + udot * step;

        Ok(State {
            u,
            v: old.v + vdot * step,
            length: self.penetrator.length(),
            alpha,
            udot,
            vdot,
            alphadot: 0.5 * (old.alphadot + (alpha - old.alpha) / step),
            dop: old.dop + u * step,
            t: old.t + step,
            ..State::default()
        })
    }

    fn is_terminal(&self, next: &State, prev: &State) -> bool {
        !(next.u > 0.0 && self.termination.is_smooth(next, prev))
    }

    fn resistance(&self, state: &State) -> f64 {
        cavity::resistance(self.target.yield_at(state.dop), state.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use penetra_core::Material;
    use uom::si::{f64::Length, length::meter};

    fn model(velocity: f64) -> AndersonWalkerLv {
        let steel = Material::from_gpa(7850.0, 1.2, 200.0, 160.0, 1.5).unwrap();
        let rod = Penetrator::new(
            steel,
            Length::new::<meter>(0.1),
            Length::new::<meter>(0.01),
        )
        .unwrap();
        AndersonWalkerLv::new(rod, Target::new(steel), velocity).unwrap()
    }

    #[test]
    fn impact_state_is_rigid() {
        let st = model(500.0).init(1e-7).unwrap();

        assert_relative_eq!(st.u, 500.0);
        assert_relative_eq!(st.v, 500.0);
        assert_relative_eq!(st.udot, st.vdot);
        assert!(st.udot < 0.0);
        assert!(st.alpha > 1.0);
        assert_relative_eq!(st.length, 0.1);
    }

    #[test]
    fn rod_keeps_its_length() {
        let model = model(500.0);
        let mut st = model.init(1e-7).unwrap();
        for _ in 0..100 {
            st = model.step(&st, 1e-7).unwrap();
        }

        assert_relative_eq!(st.length, 0.1);
        assert_eq!(st.erosion, 0.0);
        assert_eq!(st.s, 0.0);
        assert_relative_eq!(st.u, st.v, max_relative = 1e-12);
        assert_relative_eq!(st.t, 1e-5, max_relative = 1e-9);
        assert!(st.dop > 0.0 && st.u < 500.0);
    }

    #[test]
    fn terminal_without_steady_escape() {
        let model = model(500.0);
        let prev = State {
            u: 10.0,
            udot: -2e4,
            ..State::default()
        };
        let next = State {
            u: 9.0,
            udot: 1e3,
            ..State::default()
        };

        assert!(model.is_terminal(&next, &prev));
        assert!(model.is_terminal(&State { u: -1.0, ..prev }, &prev));
    }

    #[test]
    fn crater_radius_uses_own_velocity() {
        let model = model(500.0);
        assert_relative_eq!(
            model.crater_radius(),
            0.005 * (1.0 + 2.87e-4 * 500.0 + 1.48e-7 * 250_000.0),
            max_relative = 1e-12
        );
    }
}
