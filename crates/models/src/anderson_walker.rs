//! Eroding long-rod penetration after Anderson and Walker.
//!
//! The rod is split into a rigid rear section moving at `v` and a plastic tip
//! region of length `s` whose front face moves at `u`. Erosion consumes the
//! rod at `u − v`. The target resists through a plastic zone of radius
//! `α·Rc` around the crater.

use log::warn;
use penetra_core::{PenetrationModel, Penetrator, State, Target};
use penetra_solvers::equation::newton;

use crate::{
    Error,
    cavity::{self, CraterFit},
    error::check_impact_velocity,
    termination::Termination,
};

/// The high-velocity Anderson–Walker erosion model.
///
/// The impact state comes from balancing the shock pressures on both sides
/// of the interface; after that the tip, tail, plastic-zone, and length
/// equations are advanced together with derivatives averaged over the old
/// state and a fresh evaluation at the old state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AndersonWalker {
    penetrator: Penetrator,
    target: Target,
    impact_velocity: f64,
    crater_fit: CraterFit,
    crater_radius: f64,
    termination: Termination,
    newton: newton::Config,
}

impl AndersonWalker {
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
            termination: Termination::eroding(),
            newton: newton::Config::default(),
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

    /// Returns a copy whose impact pressure balance uses `config`.
    #[must_use]
    pub fn with_newton(&self, config: newton::Config) -> Self {
        Self {
            newton: config,
            ..*self
        }
    }

    /// The rod at impact.
    #[must_use]
    pub fn penetrator(&self) -> &Penetrator {
        &self.penetrator
    }

    /// Impact velocity `V0` in m/s.
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

    /// Net shock pressure across the interface when the tip moves at `u`.
    ///
    /// Positive while the penetrator side pushes harder than the target.
    fn pressure_balance(&self, u: f64) -> f64 {
        let (p, t) = (&self.penetrator, &self.target);
        let relative = self.impact_velocity - u;
        let penetrator = relative * (p.bulk_sound_speed() + p.shock_slope() * relative) * p.density();
        let target = u * (t.bulk_sound_speed() + t.shock_slope() * u) * t.density();
        penetrator - target
    }

    /// Tip velocity at the instant of impact.
    fn initial_tip_velocity(&self) -> Result<f64, Error> {
        let solution = newton::solve_unobserved(
            |u| self.pressure_balance(u),
            self.impact_velocity - 1.0,
            &self.newton,
        )?;

        if solution.is_converged() {
            Ok(solution.x)
        } else {
            warn!(
                "{}: pressure balance at {} m/s unresolved after {} iterations (residual {} Pa)",
                self.name(),
                self.impact_velocity,
                solution.iters,
                solution.residual
            );
            Err(Error::Convergence {
                iters: solution.iters,
                residual: solution.residual,
            })
        }
    }

    fn tip_deceleration(&self, st: &State) -> f64 {
        let (rho_p, rho_t) = (self.penetrator.density(), self.target.density());
        let rc = self.crater_radius;

        let lh = rho_p * st.vdot * (st.length - st.s)
            + 0.5 * rho_p * st.vu_sdot * st.s * st.s
            + rho_t * st.alphadot * 2.0 * rc * st.u / ((st.alpha + 1.0) * (st.alpha + 1.0));
        let rh = 0.5 * rho_p * (st.v - st.u) * (st.v - st.u)
            - (0.5 * rho_t * st.u * st.u + cavity::resistance(self.target.yield_at(st.dop), st.alpha));
        let denom = rho_p * st.s + rho_t * rc * (st.alpha - 1.0) / (st.alpha + 1.0);

        (rh - lh) / denom
    }

    fn tail_deceleration(&self, st: &State) -> f64 {
        let p = &self.penetrator;
        -p.yield_strength() / p.density() / (st.length - st.s)
            * (1.0 + (st.v - st.u) / p.sound_speed() + st.sdot / p.sound_speed())
    }

    /// Length `s` of the plastic region in the rod tip.
    fn tip_plastic_zone(&self, st: &State) -> f64 {
        self.crater_radius * 0.5 * (st.v / st.u - 1.0) * (1.0 - 1.0 / (st.alpha * st.alpha))
    }

    /// Erosion cross term of the tip momentum balance.
    ///
    /// This closure of `d((v − u)·s)/dt` is kept as calibrated; it has not
    /// been derived independently.
    fn erosion_cross_term(&self, st: &State, udot: f64, alphadot: f64) -> f64 {
        let a2 = st.alpha * st.alpha;
        4.0 / (a2 - 1.0) / self.crater_radius
            * (a2 * udot * 0.5 - st.u * st.alpha * alphadot / (a2 - 1.0))
    }
}

impl PenetrationModel for AndersonWalker {
    type Error = Error;

    fn name(&self) -> &'static str {
        "Anderson-Walker"
    }

    fn target(&self) -> &Target {
        &self.target
    }

    fn init(&self, _step: f64) -> Result<State, Error> {
        let mut st = State::impact(self.impact_velocity, self.penetrator.length());
        st.u = self.initial_tip_velocity()?;
        st.ldot = st.u - st.v;
        st.alpha = cavity::plastic_zone_ratio(&self.target, st.u, st.dop);
        st.s = self.tip_plastic_zone(&st);
        st.vdot = self.tail_deceleration(&st);
        st.udot = self.tip_deceleration(&st);
        st.vu_sdot = self.erosion_cross_term(&st, st.udot, 0.0);
        Ok(st)
    }

    fn step(&self, old: &State, step: f64) -> Result<State, Error> {
        let udot = 0.5 * (old.udot + self.tip_deceleration(old));
        let vdot = 0.5 * (old.vdot + self.tail_deceleration(old));
        let ldot = old.u - old.v;
        let alpha = cavity::plastic_zone_ratio(&self.target, old.u, old.dop);
        let s = self.tip_plastic_zone(old);

        let u = old.u + udot * step;
        let length = old.length + ldot * step;
        let l0 = self.penetrator.length();

        Ok(State {
            u,
            v: old.v + vdot * step,
            s,
            length,
            erosion: (l0 - length) / l0,
            alpha,
            udot,
            vdot,
            ldot,
            sdot: 0.5 * (old.sdot + (s - old.s) / step),
            alphadot: 0.5 * (old.alphadot + (alpha - old.alpha) / step),
            vu_sdot: 0.5 * (old.vu_sdot + self.erosion_cross_term(old, old.udot, old.alphadot)),
            dop: old.dop + u * step,
            t: old.t + step,
        })
    }

    fn is_terminal(&self, next: &State, prev: &State) -> bool {
        let running = next.u > 0.0 && self.termination.is_smooth(next, prev) && next.length >= 0.0;
        !running
    }

    fn resistance(&self, state: &State) -> f64 {
        cavity::resistance(self.target.yield_at(state.dop), state.alpha)
    }
}
