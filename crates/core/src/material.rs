use uom::si::{
    f64::{MassDensity, Pressure},
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
};

use crate::error::{ParameterError, non_negative, positive};

const GPA: f64 = 1e9;

/// Elastic and plastic constants of a homogeneous substance.
///
/// A `Material` is immutable once built: every derived value (shear modulus,
/// wave speeds) is computed at construction, and the `with_*` methods return a
/// new, revalidated instance instead of mutating in place.
///
/// All accessors return SI base units (Pa, kg/m³, m/s).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    density: f64,
    yield_strength: f64,
    youngs_modulus: f64,
    bulk_modulus: f64,
    shock_slope: f64,
    shear_modulus: f64,
    bulk_sound_speed: f64,
    sound_speed: f64,
}

impl Material {
    /// Creates a material from dimensioned quantities.
    ///
    /// `shock_slope` is the dimensionless slope `k` of the linear shock
    /// velocity / particle velocity relation `Us = c0 + k·up`.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] if any quantity is non-positive or
    /// non-finite, if `shock_slope` is negative, or if `9·K0 ≤ E`.
    pub fn new(
        density: MassDensity,
        yield_strength: Pressure,
        youngs_modulus: Pressure,
        bulk_modulus: Pressure,
        shock_slope: f64,
    ) -> Result<Self, ParameterError> {
        Self::from_si(
            density.get::<kilogram_per_cubic_meter>(),
            yield_strength.get::<pascal>(),
            youngs_modulus.get::<pascal>(),
            bulk_modulus.get::<pascal>(),
            shock_slope,
        )
    }

    /// Creates a material with strengths and moduli given in GPa.
    ///
    /// `density` is in kg/m³.
    ///
    /// # Errors
    ///
    /// See [`Material::new`].
    pub fn from_gpa(
        density: f64,
        yield_strength: f64,
        youngs_modulus: f64,
        bulk_modulus: f64,
        shock_slope: f64,
    ) -> Result<Self, ParameterError> {
        Self::from_si(
            density,
            yield_strength * GPA,
            youngs_modulus * GPA,
            bulk_modulus * GPA,
            shock_slope,
        )
    }

    fn from_si(
        density: f64,
        yield_strength: f64,
        youngs_modulus: f64,
        bulk_modulus: f64,
        shock_slope: f64,
    ) -> Result<Self, ParameterError> {
        let density = positive("density", density)?;
        let yield_strength = positive("yield_strength", yield_strength)?;
        let youngs_modulus = positive("youngs_modulus", youngs_modulus)?;
        let bulk_modulus = positive("bulk_modulus", bulk_modulus)?;
        let shock_slope = non_negative("shock_slope", shock_slope)?;

        if 9.0 * bulk_modulus <= youngs_modulus {
            return Err(ParameterError::DegenerateModuli {
                youngs: youngs_modulus,
                bulk: bulk_modulus,
            });
        }

        Ok(Self::derive(
            density,
            yield_strength,
            youngs_modulus,
            bulk_modulus,
            shock_slope,
        ))
    }

    /// Computes derived values from already validated SI constants.
    fn derive(
        density: f64,
        yield_strength: f64,
        youngs_modulus: f64,
        bulk_modulus: f64,
        shock_slope: f64,
    ) -> Self {
        Self {
            density,
            yield_strength,
            youngs_modulus,
            bulk_modulus,
            shock_slope,
            shear_modulus: 3.0 * bulk_modulus * youngs_modulus
                / (9.0 * bulk_modulus - youngs_modulus),
            bulk_sound_speed: (bulk_modulus / density).sqrt(),
            sound_speed: (youngs_modulus / density).sqrt(),
        }
    }

    /// Aluminium: ρ = 2700 kg/m³, Y = 0.443 GPa, E = 72 GPa, K0 = 78 GPa, k = 1.27.
    #[must_use]
    pub fn aluminum() -> Self {
        Self::derive(2700.0, 0.443 * GPA, 72.0 * GPA, 78.0 * GPA, 1.27)
    }

    /// Iron: ρ = 7900 kg/m³, Y = 1 GPa, E = 200 GPa, K0 = 172 GPa, k = 1.
    #[must_use]
    pub fn iron() -> Self {
        Self::derive(7900.0, GPA, 200.0 * GPA, 172.0 * GPA, 1.0)
    }

    /// Tungsten heavy alloy: ρ = 17600 kg/m³, Y = 1 GPa, E = 411 GPa, K0 = 311 GPa, k = 1.23.
    #[must_use]
    pub fn tungsten_heavy_alloy() -> Self {
        Self::derive(17_600.0, GPA, 411.0 * GPA, 311.0 * GPA, 1.23)
    }

    /// Tungsten: ρ = 19200 kg/m³, Y = 1 GPa, E = 411 GPa, K0 = 311 GPa, k = 1.23.
    #[must_use]
    pub fn tungsten() -> Self {
        Self::derive(19_200.0, GPA, 411.0 * GPA, 311.0 * GPA, 1.23)
    }

    /// Depleted uranium: ρ = 18600 kg/m³, Y = 1 GPa, E = 193 GPa, K0 = 104 GPa, k = 1.51.
    #[must_use]
    pub fn depleted_uranium() -> Self {
        Self::derive(18_600.0, GPA, 193.0 * GPA, 104.0 * GPA, 1.51)
    }

    /// Looks up a preset by its short name.
    ///
    /// Recognized names are `"Al"`, `"iron"`, `"WHA"`, `"Tungsten"`, `"W"`,
    /// and `"DU"`.
    #[must_use]
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "Al" => Some(Self::aluminum()),
            "iron" => Some(Self::iron()),
            "WHA" => Some(Self::tungsten_heavy_alloy()),
            "Tungsten" | "W" => Some(Self::tungsten()),
            "DU" => Some(Self::depleted_uranium()),
            _ => None,
        }
    }

    /// Returns a copy with a different density.
    ///
    /// # Errors
    ///
    /// See [`Material::new`].
    pub fn with_density(&self, density: MassDensity) -> Result<Self, ParameterError> {
        Self::from_si(
            density.get::<kilogram_per_cubic_meter>(),
            self.yield_strength,
            self.youngs_modulus,
            self.bulk_modulus,
            self.shock_slope,
        )
    }

    /// Returns a copy with a different yield strength.
    ///
    /// # Errors
    ///
    /// See [`Material::new`].
    pub fn with_yield_strength(&self, yield_strength: Pressure) -> Result<Self, ParameterError> {
        Self::from_si(
            self.density,
            yield_strength.get::<pascal>(),
            self.youngs_modulus,
            self.bulk_modulus,
            self.shock_slope,
        )
    }

    /// Returns a copy with a different Young's modulus.
    ///
    /// # Errors
    ///
    /// See [`Material::new`].
    pub fn with_youngs_modulus(&self, youngs_modulus: Pressure) -> Result<Self, ParameterError> {
        Self::from_si(
            self.density,
            self.yield_strength,
            youngs_modulus.get::<pascal>(),
            self.bulk_modulus,
            self.shock_slope,
        )
    }

    /// Returns a copy with a different static bulk modulus.
    ///
    /// # Errors
    ///
    /// See [`Material::new`].
    pub fn with_bulk_modulus(&self, bulk_modulus: Pressure) -> Result<Self, ParameterError> {
        Self::from_si(
            self.density,
            self.yield_strength,
            self.youngs_modulus,
            bulk_modulus.get::<pascal>(),
            self.shock_slope,
        )
    }

    /// Returns a copy with a different shock slope.
    ///
    /// # Errors
    ///
    /// See [`Material::new`].
    pub fn with_shock_slope(&self, shock_slope: f64) -> Result<Self, ParameterError> {
        Self::from_si(
            self.density,
            self.yield_strength,
            self.youngs_modulus,
            self.bulk_modulus,
            shock_slope,
        )
    }

    /// Density in kg/m³.
    #[must_use]
    pub fn density(&self) -> f64 {
        self.density
    }

    /// Yield strength in Pa.
    #[must_use]
    pub fn yield_strength(&self) -> f64 {
        self.yield_strength
    }

    /// Young's modulus in Pa.
    #[must_use]
    pub fn youngs_modulus(&self) -> f64 {
        self.youngs_modulus
    }

    /// Static bulk modulus in Pa.
    #[must_use]
    pub fn bulk_modulus(&self) -> f64 {
        self.bulk_modulus
    }

    /// Slope of the shock-velocity / particle-velocity relation.
    #[must_use]
    pub fn shock_slope(&self) -> f64 {
        self.shock_slope
    }

    /// Shear modulus `G = 3·K0·E / (9·K0 − E)` in Pa.
    #[must_use]
    pub fn shear_modulus(&self) -> f64 {
        self.shear_modulus
    }

    /// Bulk sound speed `c0 = √(K0/ρ)` in m/s.
    #[must_use]
    pub fn bulk_sound_speed(&self) -> f64 {
        self.bulk_sound_speed
    }

    /// Longitudinal bar wave speed `c = √(E/ρ)` in m/s.
    #[must_use]
    pub fn sound_speed(&self) -> f64 {
        self.sound_speed
    }
}
