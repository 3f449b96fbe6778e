//! Dynamic cavity-expansion relations shared by the Anderson–Walker models.
//!
//! The target around the penetrator tip is idealised as a spherical cavity
//! expanding at the tip velocity `u`. The plastic zone extends to `α·Rc`,
//! where `Rc` is the crater radius and `α` solves the elastic-plastic jump
//! condition
//!
//! ```text
//! (1 + ρu²/Y)² · (K − ρu²·α²) = (1 + ρu²·α²/(2G))² · (K − ρu²)
//! ```
//!
//! with `K` the bulk modulus stiffened by the shock Hugoniot at particle
//! speed `u`. The equation is quadratic in `α²` and solved in closed form.

use std::f64::consts::SQRT_2;

use penetra_core::Target;

/// Stiffening of the static bulk modulus resisting a cavity that expands at `u` (m/s).
///
/// From `Us = c0 + k·u` and `Us = √(K/ρ)`: `K(u) = K0 · (1 + k·u/c0)²`.
#[must_use]
pub fn loaded_bulk_modulus(target: &Target, u: f64) -> f64 {
    let factor = 1.0 + target.shock_slope() * u / target.bulk_sound_speed();
    target.bulk_modulus() * factor * factor
}

/// Plastic-zone radius ratio `α` for a tip moving at `u` (m/s) at `depth` (m).
///
/// Particle speeds below 1 m/s are evaluated at 1 m/s, where the closed form
/// is still regular. The stiffened modulus always uses the actual `u`.
#[must_use]
pub fn plastic_zone_ratio(target: &Target, u: f64, depth: f64) -> f64 {
    let k = loaded_bulk_modulus(target, u);
    let u2 = if u > 1.0 { u * u } else { 1.0 };
    let r = target.density() * u2;
    let yi = target.inverse_yield_at(depth);
    let gi = 1.0 / target.shear_modulus();

    let root = (0.5 * gi * gi * k * k - 0.5 * gi * gi * k * r + gi * k - gi * r
        + 0.5 * yi * yi * r * r
        + yi * r
        + 0.5)
        .sqrt();
    let alpha2 = 2.0
        * (-gi * k + gi * r - yi * yi * r * r - 2.0 * yi * r + SQRT_2 * (yi * r + 1.0) * root - 1.0)
        / (gi * gi * r * (k - r));

    alpha2.sqrt()
}

/// Cavity-expansion target resistance `7/3 · Y · ln α` in Pa.
#[must_use]
pub fn resistance(yield_strength: f64, alpha: f64) -> f64 {
    7.0 / 3.0 * yield_strength * alpha.ln()
}

/// Empirical growth of the crater radius with impact velocity.
///
/// ```text
/// Rc = R · (1 + linear·V0 + quadratic·V0²)
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CraterFit {
    pub linear: f64,
    pub quadratic: f64,
}

impl Default for CraterFit {
    fn default() -> Self {
        Self {
            linear: 2.87e-4,
            quadratic: 1.48e-7,
        }
    }
}

impl CraterFit {
    /// Crater radius in m for a penetrator of `radius` (m) striking at `velocity` (m/s).
    #[must_use]
    pub fn crater_radius(&self, radius: f64, velocity: f64) -> f64 {
        radius * (1.0 + self.linear * velocity + self.quadratic * velocity * velocity)
    }
}
