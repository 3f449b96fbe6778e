//! Rigid projectile with an ogive nose, after Forrestal and Warren.
//!
//! The resisting force integrates the cavity-expansion stress over a tangent
//! ogive nose. The normal stress on the nose is a static term `Rt` plus a
//! dynamic term `3/2·ρt·u²`, and the nose shape enters through its CRH and
//! half-angle `θ0`.

use penetra_core::{PenetrationModel, Penetrator, State, Target};

use crate::{Error, error::check_impact_velocity, resistance::ResistanceFit, termination::Termination};

/// The Forrestal–Warren rigid-penetrator model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForrestalWarren {
    penetrator: Penetrator,
    target: Target,
    impact_velocity: f64,
    fit: ResistanceFit,
    termination: Termination,
}

impl ForrestalWarren {
    /// Creates the model with the default resistance fit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parameter`] if the impact velocity is not positive.
    pub fn new(penetrator: Penetrator, target: Target, impact_velocity: f64) -> Result<Self, Error> {
        Ok(Self {
            penetrator,
            target,
            impact_velocity: check_impact_velocity(impact_velocity)?,
            fit: ResistanceFit::default(),
            termination: Termination::rigid(),
        })
    }

    /// Returns a copy striking at a different velocity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parameter`] if the velocity is not positive.
    pub fn with_impact_velocity(&self, impact_velocity: f64) -> Result<Self, Error> {
        Ok(Self {
            impact_velocity: check_impact_velocity(impact_velocity)?,
            ..*self
        })
    }

    /// Returns a copy using a different target resistance fit.
    #[must_use]
    pub fn with_resistance_fit(&self, fit: ResistanceFit) -> Self {
        Self { fit, ..*self }
    }

    /// Returns a copy with different termination constants.
    #[must_use]
    pub fn with_termination(&self, termination: Termination) -> Self {
        Self {
            termination,
            ..*self
        }
    }

    /// The rigid projectile.
    #[must_use]
    pub fn penetrator(&self) -> &Penetrator {
        &self.penetrator
    }

    /// Impact velocity in m/s.
    #[must_use]
    pub fn impact_velocity(&self) -> f64 {
        self.impact_velocity
    }

    /// Target resistance fit in use.
    #[must_use]
    pub fn resistance_fit(&self) -> ResistanceFit {
        self.fit
    }

    /// The crater matches the rod: `Rc = R`.
    #[must_use]
    pub fn crater_radius(&self) -> f64 {
        self.penetrator.radius()
    }

    /// Crater diameter in m, the rod diameter.
    #[must_use]
    pub fn crater_diameter(&self) -> f64 {
        self.penetrator.diameter()
    }

    /// Plastic-zone ratio `(2E/(3Y))^(1/3)` of a quasi-static spherical cavity.
    fn plastic_zone_ratio(&self, depth: f64) -> f64 {
        (2.0 * self.target.youngs_modulus() / (3.0 * self.target.yield_at(depth))).cbrt()
    }

    fn deceleration(&self, st: &State) -> f64 {
        let p = &self.penetrator;
        let crh = p.crh();
        let rt = self.resistance(st);
        let dynamic = 1.5 * self.target.density() * st.u * st.u;
        let (sn, cs) = p.nose_half_angle().sin_cos();
        let shoulder = 1.0 - 0.5 / crh;

        let static_part = rt * (1.0 - sn * sn) * 0.5 - rt * shoulder * (1.0 - sn);
        let dynamic_part = dynamic * cs.powi(4) * 0.25
            - dynamic * shoulder * (2.0 / 3.0 - sn + sn.powi(3) / 3.0);
        let stress = 8.0 * crh * crh * (static_part + dynamic_part);

        let effective_length = p.length() - p.nose_length() + p.nose_coefficient() * self.crater_radius();
        -stress / effective_length / p.density()
    }
}

impl PenetrationModel for ForrestalWarren {
    type Error = Error;

    fn name(&self) -> &'static str {
        "Forrestal-Warren"
    }

    fn target(&self) -> &Target {
        &self.target
    }

    fn init(&self, _step: f64) -> Result<State, Error> {
        let mut st = State::impact(self.impact_velocity, self.penetrator.length());
        st.alpha = self.plastic_zone_ratio(st.dop);
        st.udot = self.deceleration(&st);
        st.vdot = st.udot;
        Ok(st)
    }

    fn step(&self, old: &State, step: f64) -> Result<State, Error> {
        let fresh = self.deceleration(old);
        let udot = 0.5 * (old.udot + fresh);
        let vdot = 0.5 * (old.vdot + fresh);
        let alpha = self.plastic_zone_ratio(old.dop);
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
        self.fit
            .resistance(self.target.youngs_modulus(), self.target.yield_at(state.dop))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use penetra_core::Material;
    use uom::si::{f64::Length, length::meter};

    fn steel() -> Material {
        Material::from_gpa(7850.0, 1.2, 200.0, 160.0, 1.5).unwrap()
    }

    fn model(crh: f64) -> ForrestalWarren {
        let rod = Penetrator::new(
            steel(),
            Length::new::<meter>(0.1),
            Length::new::<meter>(0.01),
        )
        .unwrap()
        .with_nose(crh)
        .unwrap();
        ForrestalWarren::new(rod, Target::new(steel()), 800.0).unwrap()
    }

    #[test]
    fn hemispherical_nose_reduces_to_sphere_stress() {
        let model = model(0.5);
        let st = model.init(1e-7).unwrap();

        // With θ0 = 0 the nose stress is Rt + 3/4·ρt·u².
        let rt = model.resistance(&st);
        let stress = rt + 0.75 * 7850.0 * 800.0 * 800.0;
        let r = 0.005;
        let effective_length = 0.1 - r + 2.0 / 3.0 * r;

        assert_relative_eq!(st.udot, -stress / effective_length / 7850.0, max_relative = 1e-9);
        assert_relative_eq!(st.vdot, st.udot);
    }

    #[test]
    fn sharper_nose_decelerates_less() {
        let blunt = model(0.5).init(1e-7).unwrap();
        let sharp = model(3.0).init(1e-7).unwrap();

        assert!(sharp.udot < 0.0);
        assert!(sharp.udot > blunt.udot);
    }

    #[test]
    fn resistance_fit_and_plastic_zone() {
        let model = model(0.5);
        let st = model.init(1e-7).unwrap();

        let expected = 1.2e9 * (2.0 / 3.0 * (200.0_f64 / 1.2).ln() + 0.396_356_594_594_557_1);
        assert_relative_eq!(model.resistance(&st), expected, max_relative = 1e-9);
        assert_relative_eq!(st.alpha, (2.0 * 200.0 / 3.6_f64).cbrt(), max_relative = 1e-12);
        assert_relative_eq!(model.crater_radius(), 0.005, max_relative = 1e-12);
    }

    #[test]
    fn custom_fit_changes_resistance() {
        let model = model(0.5);
        let st = model.init(1e-7).unwrap();
        let stronger = model.with_resistance_fit(ResistanceFit { k1: 1.0, k2: 1.0 });

        assert!(stronger.resistance(&st) > model.resistance(&st));
        assert_relative_eq!(stronger.resistance_fit().k1, 1.0);
    }

    #[test]
    fn steps_are_rigid() {
        let model = model(3.0);
        let old = model.init(1e-7).unwrap();
        let new = model.step(&old, 1e-7).unwrap();

        assert_relative_eq!(new.u, new.v);
        assert_relative_eq!(new.length, 0.1);
        assert_relative_eq!(new.dop, new.u * 1e-7);
        assert!(!model.is_terminal(&new, &old));
    }
}
