use uom::si::{
    f64::{Length, Pressure},
    length::meter,
    pressure::pascal,
};

use crate::{
    Material,
    error::{ParameterError, non_negative, positive},
};

/// A semi-infinite target with optional case hardening.
///
/// The target carries its own copy of a [`Material`] plus a depth-dependent
/// yield profile: a fully hardened surface layer of thickness `ts` at yield
/// `Ys`, followed by a transition layer in which the yield strength blends
/// linearly into the bulk value, ending at total hardened depth `th`.
///
/// ```text
///  Y(x)
///   Ys ┤━━━━━━━━╮
///      │         ╲
///   Y  ┤          ╰━━━━━━━━━━
///      └────────┬─────┬──────▶ x
///               ts    th
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    material: Material,
    surface_yield: f64,
    surface_thickness: f64,
    hardened_thickness: f64,
}

impl Target {
    /// Creates a homogeneous target with no hardened layer.
    #[must_use]
    pub fn new(material: Material) -> Self {
        Self {
            material,
            surface_yield: material.yield_strength(),
            surface_thickness: 0.0,
            hardened_thickness: 0.0,
        }
    }

    /// Creates a case-hardened target.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] if `surface_yield` is not positive, or if
    /// the thicknesses violate `0 ≤ surface_thickness ≤ hardened_thickness`.
    pub fn hardened(
        material: Material,
        surface_yield: Pressure,
        surface_thickness: Length,
        hardened_thickness: Length,
    ) -> Result<Self, ParameterError> {
        Self::new(material).with_yield_profile(surface_yield, surface_thickness, hardened_thickness)
    }

    /// Returns a copy with a different hardened-layer profile.
    ///
    /// # Errors
    ///
    /// See [`Target::hardened`].
    pub fn with_yield_profile(
        &self,
        surface_yield: Pressure,
        surface_thickness: Length,
        hardened_thickness: Length,
    ) -> Result<Self, ParameterError> {
        let surface_yield = positive("surface_yield", surface_yield.get::<pascal>())?;
        let surface = non_negative("surface_thickness", surface_thickness.get::<meter>())?;
        let hardened = non_negative("hardened_thickness", hardened_thickness.get::<meter>())?;

        if surface > hardened {
            return Err(ParameterError::InvalidHardenedLayer { surface, hardened });
        }

        Ok(Self {
            material: self.material,
            surface_yield,
            surface_thickness: surface,
            hardened_thickness: hardened,
        })
    }

    /// Returns a copy whose bulk (matrix) yield strength is replaced.
    ///
    /// The hardened-layer profile is kept as is.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] if the yield strength is not positive.
    pub fn with_bulk_yield(&self, yield_strength: Pressure) -> Result<Self, ParameterError> {
        let material = self.material.with_yield_strength(yield_strength)?;
        Ok(Self { material, ..*self })
    }

    /// Returns a copy built on a different material, keeping the layer profile.
    #[must_use]
    pub fn with_material(&self, material: Material) -> Self {
        Self { material, ..*self }
    }

    /// Yield strength in Pa at penetration depth `depth` (m).
    #[must_use]
    pub fn yield_at(&self, depth: f64) -> f64 {
        let bulk = self.material.yield_strength();
        let ts = self.surface_thickness;
        let th = self.hardened_thickness;

        #[allow(clippy::float_cmp)]
        let homogeneous = self.surface_yield == bulk || (ts == 0.0 && th == 0.0);

        if depth >= th || homogeneous {
            bulk
        } else if depth >= ts {
            self.surface_yield + (bulk - self.surface_yield) * (depth - ts) / (th - ts)
        } else {
            self.surface_yield
        }
    }

    /// Reciprocal of [`Target::yield_at`].
    #[must_use]
    pub fn inverse_yield_at(&self, depth: f64) -> f64 {
        1.0 / self.yield_at(depth)
    }

    /// The underlying bulk material.
    #[must_use]
    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Bulk (matrix) yield strength in Pa.
    #[must_use]
    pub fn bulk_yield(&self) -> f64 {
        self.material.yield_strength()
    }

    /// Surface yield strength `Ys` in Pa.
    #[must_use]
    pub fn surface_yield(&self) -> f64 {
        self.surface_yield
    }

    /// Thickness `ts` of the fully hardened surface layer in m.
    #[must_use]
    pub fn surface_thickness(&self) -> f64 {
        self.surface_thickness
    }

    /// Total hardened thickness `th` in m.
    #[must_use]
    pub fn hardened_thickness(&self) -> f64 {
        self.hardened_thickness
    }

    /// Thickness `th − ts` of the linear transition layer in m.
    #[must_use]
    pub fn transition_thickness(&self) -> f64 {
        self.hardened_thickness - self.surface_thickness
    }

    /// Density in kg/m³.
    #[must_use]
    pub fn density(&self) -> f64 {
        self.material.density()
    }

    /// Young's modulus in Pa.
    #[must_use]
    pub fn youngs_modulus(&self) -> f64 {
        self.material.youngs_modulus()
    }

    /// Static bulk modulus in Pa.
    #[must_use]
    pub fn bulk_modulus(&self) -> f64 {
        self.material.bulk_modulus()
    }

    /// Shear modulus in Pa.
    #[must_use]
    pub fn shear_modulus(&self) -> f64 {
        self.material.shear_modulus()
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

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{length::millimeter, pressure::gigapascal};

    fn armor() -> Target {
        Target::hardened(
            Material::from_gpa(7850.0, 1.2, 200.0, 160.0, 1.5).unwrap(),
            Pressure::new::<gigapascal>(2.0),
            Length::new::<millimeter>(5.0),
            Length::new::<millimeter>(10.0),
        )
        .unwrap()
    }

    #[test]
    fn homogeneous_target_uses_bulk_yield() {
        let target = Target::new(Material::iron());

        assert_relative_eq!(target.yield_at(0.0), 1e9);
        assert_relative_eq!(target.yield_at(0.5), 1e9);
        assert_relative_eq!(target.transition_thickness(), 0.0);
    }

    #[test]
    fn surface_layer_uses_surface_yield() {
        let target = armor();

        assert_relative_eq!(target.yield_at(0.0), 2.0e9, max_relative = 1e-12);
        assert_relative_eq!(target.yield_at(0.004), 2.0e9, max_relative = 1e-12);
        assert_relative_eq!(target.yield_at(0.005), 2.0e9, max_relative = 1e-12);
    }

    #[test]
    fn beyond_hardened_depth_uses_bulk_yield() {
        let target = armor();

        assert_relative_eq!(target.yield_at(0.010), 1.2e9, max_relative = 1e-12);
        assert_relative_eq!(target.yield_at(1.0), 1.2e9, max_relative = 1e-12);
    }

    #[test]
    fn transition_layer_is_linear() {
        let target = armor();

        let quarter = target.yield_at(0.00625);
        let half = target.yield_at(0.0075);
        let three_quarter = target.yield_at(0.00875);

        assert_relative_eq!(half, 1.6e9, max_relative = 1e-12);
        assert_relative_eq!(quarter, 1.8e9, max_relative = 1e-12);
        assert_relative_eq!(three_quarter, 1.4e9, max_relative = 1e-12);
        assert!(quarter < 2.0e9 && three_quarter > 1.2e9);
        assert_relative_eq!(quarter - half, half - three_quarter, max_relative = 1e-9);
    }

    #[test]
    fn inverse_yield() {
        let target = armor();
        assert_relative_eq!(target.inverse_yield_at(0.0) * 2.0e9, 1.0);
    }

    #[test]
    fn rejects_inverted_layers() {
        let err = Target::hardened(
            Material::iron(),
            Pressure::new::<gigapascal>(2.0),
            Length::new::<millimeter>(10.0),
            Length::new::<millimeter>(5.0),
        )
        .unwrap_err();

        assert!(matches!(err, ParameterError::InvalidHardenedLayer { .. }));
    }

    #[test]
    fn bulk_yield_rebuild_keeps_profile() {
        let target = armor()
            .with_bulk_yield(Pressure::new::<gigapascal>(0.8))
            .unwrap();

        assert_relative_eq!(target.yield_at(1.0), 0.8e9, max_relative = 1e-12);
        assert_relative_eq!(target.yield_at(0.0), 2.0e9);
        assert_relative_eq!(target.hardened_thickness(), 0.010, max_relative = 1e-12);
    }
}
