/// Two-parameter logarithmic fit of quasi-static target resistance.
///
/// ```text
/// Rt = Y · (k1 · ln(E/Y) + k2)
/// ```
///
/// The default is the spherical cavity-expansion result for an
/// incompressible elastic-perfectly-plastic solid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResistanceFit {
    pub k1: f64,
    pub k2: f64,
}

impl Default for ResistanceFit {
    fn default() -> Self {
        Self::from_cavity_expansion(2.0 / 3.0, 2.0 / 3.0)
    }
}

impl ResistanceFit {
    /// Builds the fit from cavity-expansion constants `P/Y = c1·(1 + ln(c2·E/Y))`.
    #[must_use]
    pub fn from_cavity_expansion(c1: f64, c2: f64) -> Self {
        Self {
            k1: c1,
            k2: c1 * (1.0 + c2.ln()),
        }
    }

    /// Resistance in Pa of a target with Young's modulus `youngs` and local
    /// yield strength `yield_strength`, both in Pa.
    #[must_use]
    pub fn resistance(&self, youngs: f64, yield_strength: f64) -> f64 {
        yield_strength * (self.k1 * (youngs / yield_strength).ln() + self.k2)
    }
}
