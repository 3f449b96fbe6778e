use std::f64::consts::PI;

use uom::si::{f64::Length, length::meter};

use crate::{
    Material,
    error::{ParameterError, positive},
};

/// Nose shape used when none is given: a hemispherical tip.
pub const HEMISPHERICAL_CRH: f64 = 0.5;

/// A cylindrical long-rod penetrator with a tangent-ogive nose.
///
/// The nose sharpness is given by its caliber-radius-head ratio (CRH), the
/// ogive radius in units of the rod diameter. A CRH of 0.5 is a hemisphere;
/// the smallest valid value is 0.25, which degenerates to a flat face.
///
/// Derived nose geometry and mass are computed once at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Penetrator {
    material: Material,
    length: f64,
    diameter: f64,
    crh: f64,
    nose_length: f64,
    nose_coefficient: f64,
    nose_half_angle: f64,
    mass: f64,
}

impl Penetrator {
    /// Creates a penetrator with a hemispherical nose.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] if the length or diameter is not positive.
    pub fn new(material: Material, length: Length, diameter: Length) -> Result<Self, ParameterError> {
        Self::from_si(
            material,
            length.get::<meter>(),
            diameter.get::<meter>(),
            HEMISPHERICAL_CRH,
        )
    }

    /// Returns a copy with a different nose CRH.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::NoseTooBlunt`] if `crh < 0.25`.
    pub fn with_nose(&self, crh: f64) -> Result<Self, ParameterError> {
        Self::from_si(self.material, self.length, self.diameter, crh)
    }

    /// Returns a copy with a different overall length.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] if the length is not positive.
    pub fn with_length(&self, length: Length) -> Result<Self, ParameterError> {
        Self::from_si(self.material, length.get::<meter>(), self.diameter, self.crh)
    }

    /// Returns a copy made of a different material.
    #[must_use]
    pub fn with_material(&self, material: Material) -> Self {
        Self::derive(material, self.length, self.diameter, self.crh)
    }

    fn from_si(
        material: Material,
        length: f64,
        diameter: f64,
        crh: f64,
    ) -> Result<Self, ParameterError> {
        let length = positive("length", length)?;
        let diameter = positive("diameter", diameter)?;
        if !crh.is_finite() || crh < 0.25 {
            return Err(ParameterError::NoseTooBlunt { crh });
        }
        Ok(Self::derive(material, length, diameter, crh))
    }

    fn derive(material: Material, length: f64, diameter: f64, crh: f64) -> Self {
        let radius = 0.5 * diameter;
        let root = (4.0 * crh - 1.0).sqrt();

        let nose_length = radius * root;
        let nose_coefficient = (4.0 * crh * crh - 4.0 * crh / 3.0 + 1.0 / 3.0) * root
            - 4.0 * crh * crh * (2.0 * crh - 1.0) * (0.5 * root / crh).asin();
        let nose_half_angle = (0.5 * (2.0 * crh - 1.0) / crh).asin();
        let mass =
            (length - nose_length + nose_coefficient * radius) * material.density() * radius * radius * PI;

        Self {
            material,
            length,
            diameter,
            crh,
            nose_length,
            nose_coefficient,
            nose_half_angle,
            mass,
        }
    }

    /// The penetrator material.
    #[must_use]
    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Overall length `L` in m.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Diameter `D` in m.
    #[must_use]
    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    /// Radius `R = D/2` in m.
    #[must_use]
    pub fn radius(&self) -> f64 {
        0.5 * self.diameter
    }

    /// Slenderness `L/D`.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        self.length / self.diameter
    }

    /// Caliber-radius-head ratio of the nose.
    #[must_use]
    pub fn crh(&self) -> f64 {
        self.crh
    }

    /// Nose length `l = R·√(4·CRH − 1)` in m.
    #[must_use]
    pub fn nose_length(&self) -> f64 {
        self.nose_length
    }

    /// Dimensionless nose volume coefficient `cv`.
    ///
    /// The nose volume is `cv·π·R³`; it equals 2/3 for a hemisphere.
    #[must_use]
    pub fn nose_coefficient(&self) -> f64 {
        self.nose_coefficient
    }

    /// Nose half-angle `θ0 = asin((2·CRH − 1)/(2·CRH))` in radians.
    #[must_use]
    pub fn nose_half_angle(&self) -> f64 {
        self.nose_half_angle
    }

    /// Total mass `(L − l + cv·R)·ρ·π·R²` in kg.
    #[must_use]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Density in kg/m³.
    #[must_use]
    pub fn density(&self) -> f64 {
        self.material.density()
    }

    /// Yield strength in Pa.
    #[must_use]
    pub fn yield_strength(&self) -> f64 {
        self.material.yield_strength()
    }

    /// Shock slope `k`.
    #[must_use]
    pub fn shock_slope(&self) -> f64 {
        self.material.shock_slope()
    }

    /// Bulk sound speed in m/s.
    #[must_use]
    pub fn bulk_sound_speed(&self) -> f64 {
        self.material.bulk_sound_speed()
    }

    /// Longitudinal wave speed in m/s.
    #[must_use]
    pub fn sound_speed(&self) -> f64 {
        self.material.sound_speed()
    }
}
