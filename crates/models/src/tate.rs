//! Tate–Alekseevskii penetration with a rigid-body regime.
//!
//! The interface obeys the modified Bernoulli balance
//!
//! ```text
//! ½·ρp·(v − u)² + Yp = ½·ρt·u² + Yt
//! ```
//!
//! which gives the tip velocity in closed form. The rear of the rod
//! decelerates under its own strength `Yp`. When the penetrator is the
//! stronger material and the tail is slower than the limit velocity, the rod
//! stops eroding and pushes against the static target strength instead.

use penetra_core::{PenetrationModel, Penetrator, State, Target};

use crate::{Error, error::check_impact_velocity};

/// Below this `|1 − μ²|` the densities count as matched.
const MATCHED_DENSITY: f64 = 1e-12;

/// The Tate–Alekseevskii model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tate {
    penetrator: Penetrator,
    target: Target,
    impact_velocity: f64,
    density_ratio: f64,
}

impl Tate {
    /// Creates the model and precomputes the density ratio.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parameter`] if the impact velocity is not positive.
    pub fn new(penetrator: Penetrator, target: Target, impact_velocity: f64) -> Result<Self, Error> {
        Ok(Self {
            density_ratio: (target.density() / penetrator.density()).sqrt(),
            penetrator,
            target,
            impact_velocity: check_impact_velocity(impact_velocity)?,
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

    /// The rod at impact.
    #[must_use]
    pub fn penetrator(&self) -> &Penetrator {
        &self.penetrator
    }

    /// Impact velocity in m/s.
    #[must_use]
    pub fn impact_velocity(&self) -> f64 {
        self.impact_velocity
    }

    /// Density ratio `μ = √(ρt/ρp)`.
    #[must_use]
    pub fn density_ratio(&self) -> f64 {
        self.density_ratio
    }

    /// Hydrodynamic penetration efficiency `√(ρp/ρt)`.
    #[must_use]
    pub fn hydrodynamic_limit(&self) -> f64 {
        1.0 / self.density_ratio
    }

    /// Velocity `√(2·|Yt − Yp|/ρp)` in m/s separating the regimes at `depth`.
    #[must_use]
    pub fn limit_velocity(&self, depth: f64) -> f64 {
        let difference = self.target.yield_at(depth) - self.penetrator.yield_strength();
        (2.0 * difference.abs() / self.penetrator.density()).sqrt()
    }

    fn is_rigid(&self, st: &State) -> bool {
        self.penetrator.yield_strength() > self.target.yield_at(st.dop)
            && st.v < self.limit_velocity(st.dop)
    }

    fn tail_deceleration(&self, st: &State) -> f64 {
        let load = if self.is_rigid(st) {
            self.target.yield_at(st.dop) + 0.5 * self.target.density() * st.v * st.v
        } else {
            self.penetrator.yield_strength()
        };
        -load / (self.penetrator.density() * st.length)
    }

    fn tip_velocity(&self, st: &State) -> f64 {
        if self.is_rigid(st) {
            return st.v;
        }

        let v = st.v;
        let strength = self.target.yield_at(st.dop) - self.penetrator.yield_strength();
        let mu = self.density_ratio;
        let one_minus = 1.0 - mu * mu;

        let u = if one_minus.abs() < MATCHED_DENSITY {
            0.5 * v - strength / (self.penetrator.density() * v)
        } else {
            let a = 2.0 * strength * one_minus / self.target.density();
            (v - mu * (v * v + a).sqrt()) / one_minus
        };

        if u.is_nan() || u < 0.0 { 0.0 } else { u }
    }
}

impl PenetrationModel for Tate {
    type Error = Error;

    fn name(&self) -> &'static str {
        "Tate-Alekseevskii"
    }

    fn target(&self) -> &Target {
        &self.target
    }

    fn init(&self, _step: f64) -> Result<State, Error> {
        let mut st = State::impact(self.impact_velocity, self.penetrator.length());
        st.u = self.tip_velocity(&st);
        st.ldot = st.u - st.v;
        Ok(st)
    }

    fn step(&self, old: &State, step: f64) -> Result<State, Error> {
        let vdot = self.tail_deceleration(old);
        let ldot = old.u - old.v;
        let u = self.tip_velocity(old);
        let length = old.length + ldot * step;
        let l0 = self.penetrator.length();

        Ok(State {
            u,
            v: old.v + vdot * step,
            length,
            erosion: (l0 - length) / l0,
            vdot,
            ldot,
            dop: old.dop + u * step,
            t: old.t + step,
            ..State::default()
        })
    }

    fn is_terminal(&self, next: &State, _prev: &State) -> bool {
        !(next.u > 0.0 && next.length > 0.0 && next.v > next.u)
    }

    fn resistance(&self, state: &State) -> f64 {
        self.target.yield_at(state.dop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use penetra_core::Material;
    use uom::si::{f64::Length, length::meter};

    fn rod(material: Material) -> Penetrator {
        Penetrator::new(
            material,
            Length::new::<meter>(0.1),
            Length::new::<meter>(0.01),
        )
        .unwrap()
    }

    fn steel() -> Material {
        Material::from_gpa(7850.0, 1.2, 200.0, 160.0, 1.5).unwrap()
    }

    /// Residual of the modified Bernoulli balance.
    fn bernoulli(model: &Tate, st: &State) -> f64 {
        let p = model.penetrator();
        let t = model.target();
        0.5 * p.density() * (st.v - st.u).powi(2) + p.yield_strength()
            - 0.5 * t.density() * st.u * st.u
            - t.yield_at(st.dop)
    }

    #[test]
    fn density_ratios() {
        let model = Tate::new(rod(Material::tungsten()), Target::new(steel()), 1500.0).unwrap();

        assert_relative_eq!(model.density_ratio(), (7850.0_f64 / 19200.0).sqrt(), max_relative = 1e-12);
        assert_relative_eq!(model.hydrodynamic_limit() * model.density_ratio(), 1.0, max_relative = 1e-12);
    }

    #[test]
    fn tip_velocity_satisfies_bernoulli() {
        let model = Tate::new(rod(Material::tungsten()), Target::new(steel()), 1500.0).unwrap();
        let st = model.init(1e-7).unwrap();

        assert!(st.u > 0.0 && st.u < 1500.0);
        assert!(bernoulli(&model, &st).abs() < 1e-6 * 1.2e9);
    }

    #[test]
    fn matched_densities_use_linear_limit() {
        let model = Tate::new(rod(steel()), Target::new(steel()), 1500.0).unwrap();
        let st = model.init(1e-7).unwrap();

        assert_relative_eq!(model.density_ratio(), 1.0);
        assert_relative_eq!(st.u, 750.0, max_relative = 1e-12);
        assert!(bernoulli(&model, &st).abs() < 1.0);
    }

    #[test]
    fn weak_penetrator_against_strong_target_clamps_to_zero() {
        let model = Tate::new(rod(Material::aluminum()), Target::new(steel()), 200.0).unwrap();
        let st = model.init(1e-7).unwrap();

        assert_eq!(st.u, 0.0);
        let next = model.step(&st, 1e-7).unwrap();
        assert!(model.is_terminal(&next, &st));
    }

    #[test]
    fn strong_slow_penetrator_is_rigid() {
        let model = Tate::new(rod(Material::tungsten()), Target::new(Material::aluminum()), 100.0).unwrap();

        assert!(model.limit_velocity(0.0) > 100.0);
        let st = model.init(1e-7).unwrap();
        assert_relative_eq!(st.u, 100.0);
        assert_relative_eq!(st.ldot, 0.0);
    }

    #[test]
    fn eroding_step() {
        let model = Tate::new(rod(Material::tungsten()), Target::new(steel()), 1500.0).unwrap();
        let old = model.init(1e-7).unwrap();
        let new = model.step(&old, 1e-7).unwrap();

        assert_relative_eq!(new.vdot, -1e9 / (19200.0 * 0.1), max_relative = 1e-12);
        assert!(new.length < 0.1);
        assert!(new.erosion > 0.0);
        assert_relative_eq!(new.dop, new.u * 1e-7);
        assert_relative_eq!(model.resistance(&new), 1.2e9, max_relative = 1e-12);
        assert!(!model.is_terminal(&new, &old));
    }
}
