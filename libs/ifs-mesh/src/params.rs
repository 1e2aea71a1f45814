//! # Shape Parameters
//!
//! Optional, defaulted inputs for every generator. `None` means "use the
//! documented default"; an explicit value is validated and used as given.

use crate::error::MeshError;
use config::constants::{
    CONE_HEIGHT_RATIO, DEFAULT_CUBE_SIDE, DEFAULT_SLICES, DEFAULT_STACKS,
    TORUS_INNER_RADIUS_RATIO,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Parameters for sphere generators.
///
/// # Example
///
/// ```rust
/// use ifs_mesh::SphereParams;
///
/// let params = SphereParams::default().with_radius(2.0).with_slices(8);
/// assert_eq!(params.radius, Some(2.0));
/// assert_eq!(params.stacks, None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereParams {
    /// Sphere radius.
    pub radius: Option<f64>,
    /// Lines of longitude.
    pub slices: Option<u32>,
    /// Bands between lines of latitude.
    pub stacks: Option<u32>,
}

impl SphereParams {
    /// Sets the radius.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    /// Sets the slice count.
    pub fn with_slices(mut self, slices: u32) -> Self {
        self.slices = Some(slices);
        self
    }

    /// Sets the stack count.
    pub fn with_stacks(mut self, stacks: u32) -> Self {
        self.stacks = Some(stacks);
        self
    }

    pub(crate) fn resolve(&self, default_radius: f64) -> Result<ResolvedSphere, MeshError> {
        Ok(ResolvedSphere {
            radius: length("radius", self.radius, default_radius)?,
            slices: resolution("slices", self.slices, DEFAULT_SLICES)?,
            stacks: resolution("stacks", self.stacks, DEFAULT_STACKS)?,
        })
    }
}

/// Parameters for torus generators.
///
/// `inner_radius` defaults to a third of `outer_radius`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TorusParams {
    /// Distance from the centre to the outside of the tube.
    pub outer_radius: Option<f64>,
    /// Distance from the centre to the inside of the tube.
    pub inner_radius: Option<f64>,
    /// Subdivisions around the hole.
    pub slices: Option<u32>,
    /// Subdivisions around the tube.
    pub stacks: Option<u32>,
}

impl TorusParams {
    /// Sets the outer radius.
    pub fn with_outer_radius(mut self, radius: f64) -> Self {
        self.outer_radius = Some(radius);
        self
    }

    /// Sets the inner radius.
    pub fn with_inner_radius(mut self, radius: f64) -> Self {
        self.inner_radius = Some(radius);
        self
    }

    /// Sets the slice count.
    pub fn with_slices(mut self, slices: u32) -> Self {
        self.slices = Some(slices);
        self
    }

    /// Sets the stack count.
    pub fn with_stacks(mut self, stacks: u32) -> Self {
        self.stacks = Some(stacks);
        self
    }

    pub(crate) fn resolve(&self, default_outer: f64) -> Result<ResolvedTorus, MeshError> {
        let outer_radius = length("outer_radius", self.outer_radius, default_outer)?;
        let inner_radius = length(
            "inner_radius",
            self.inner_radius,
            outer_radius * TORUS_INNER_RADIUS_RATIO,
        )?;
        Ok(ResolvedTorus {
            outer_radius,
            inner_radius,
            slices: resolution("slices", self.slices, DEFAULT_SLICES)?,
            stacks: resolution("stacks", self.stacks, DEFAULT_STACKS)?,
        })
    }
}

/// Parameters for cylinder generators.
///
/// Both caps are generated unless suppressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CylinderParams {
    /// Cylinder radius.
    pub radius: Option<f64>,
    /// Cylinder height; defaults to a multiple of the radius.
    pub height: Option<f64>,
    /// Subdivisions around the axis.
    pub slices: Option<u32>,
    /// Omit the disk at +height/2.
    pub no_top: bool,
    /// Omit the disk at -height/2.
    pub no_bottom: bool,
}

impl CylinderParams {
    /// Sets the radius.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    /// Sets the height.
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    /// Sets the slice count.
    pub fn with_slices(mut self, slices: u32) -> Self {
        self.slices = Some(slices);
        self
    }

    /// Suppresses the top and/or bottom cap.
    pub fn without_caps(mut self, no_top: bool, no_bottom: bool) -> Self {
        self.no_top = no_top;
        self.no_bottom = no_bottom;
        self
    }

    pub(crate) fn resolve(
        &self,
        default_radius: f64,
        height_ratio: f64,
    ) -> Result<ResolvedCylinder, MeshError> {
        let radius = length("radius", self.radius, default_radius)?;
        Ok(ResolvedCylinder {
            radius,
            height: length("height", self.height, height_ratio * radius)?,
            slices: resolution("slices", self.slices, DEFAULT_SLICES)?,
            top: !self.no_top,
            bottom: !self.no_bottom,
        })
    }
}

/// Parameters for the cone generator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConeParams {
    /// Base radius.
    pub radius: Option<f64>,
    /// Height from base to tip; defaults to twice the radius.
    pub height: Option<f64>,
    /// Subdivisions around the axis.
    pub slices: Option<u32>,
    /// Omit the base disk.
    pub no_bottom: bool,
}

impl ConeParams {
    /// Sets the radius.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    /// Sets the height.
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    /// Sets the slice count.
    pub fn with_slices(mut self, slices: u32) -> Self {
        self.slices = Some(slices);
        self
    }

    /// Suppresses the base disk.
    pub fn without_bottom(mut self) -> Self {
        self.no_bottom = true;
        self
    }

    pub(crate) fn resolve(&self, default_radius: f64) -> Result<ResolvedCone, MeshError> {
        let radius = length("radius", self.radius, default_radius)?;
        Ok(ResolvedCone {
            radius,
            height: length("height", self.height, CONE_HEIGHT_RATIO * radius)?,
            slices: resolution("slices", self.slices, DEFAULT_SLICES)?,
            bottom: !self.no_bottom,
        })
    }
}

/// Parameters for the cube generator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CubeParams {
    /// Edge length before placement scaling.
    pub side: Option<f64>,
}

impl CubeParams {
    /// Sets the side length.
    pub fn with_side(mut self, side: f64) -> Self {
        self.side = Some(side);
        self
    }

    pub(crate) fn resolve(&self) -> Result<f64, MeshError> {
        length("side", self.side, DEFAULT_CUBE_SIDE)
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct ResolvedSphere {
    pub radius: f64,
    pub slices: u32,
    pub stacks: u32,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct ResolvedTorus {
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub slices: u32,
    pub stacks: u32,
}

impl ResolvedTorus {
    /// Distance from the centre of the hole to the centre of the tube.
    pub fn center_radius(&self) -> f64 {
        (self.inner_radius + self.outer_radius) / 2.0
    }

    /// Radius of the tube itself.
    pub fn tube_radius(&self) -> f64 {
        self.outer_radius - self.center_radius()
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct ResolvedCylinder {
    pub radius: f64,
    pub height: f64,
    pub slices: u32,
    pub top: bool,
    pub bottom: bool,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct ResolvedCone {
    pub radius: f64,
    pub height: f64,
    pub slices: u32,
    pub bottom: bool,
}

fn length(name: &'static str, value: Option<f64>, default: f64) -> Result<f64, MeshError> {
    let value = value.unwrap_or(default);
    if !value.is_finite() {
        warn!(parameter = name, value, "rejecting non-finite length");
        return Err(MeshError::invalid_parameter(
            name,
            format!("must be finite: {}", value),
        ));
    }
    Ok(value)
}

fn resolution(name: &'static str, value: Option<u32>, default: u32) -> Result<u32, MeshError> {
    match value {
        None => Ok(default),
        Some(0) => {
            warn!(parameter = name, "rejecting zero resolution");
            Err(MeshError::invalid_parameter(name, "must be at least 1"))
        }
        Some(value) => Ok(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sphere_defaults() {
        let resolved = SphereParams::default().resolve(0.5).unwrap();
        assert_eq!(resolved.radius, 0.5);
        assert_eq!(resolved.slices, DEFAULT_SLICES);
        assert_eq!(resolved.stacks, DEFAULT_STACKS);
    }

    #[test]
    fn test_torus_inner_defaults_to_third_of_outer() {
        let resolved = TorusParams::default()
            .with_outer_radius(0.9)
            .resolve(0.5)
            .unwrap();
        assert_relative_eq!(resolved.inner_radius, 0.3);
        assert_relative_eq!(resolved.center_radius(), 0.6);
        assert_relative_eq!(resolved.tube_radius(), 0.3);
    }

    #[test]
    fn test_cylinder_height_follows_radius() {
        let resolved = CylinderParams::default()
            .with_radius(0.25)
            .resolve(0.5, 3.0)
            .unwrap();
        assert_relative_eq!(resolved.height, 0.75);
        assert!(resolved.top && resolved.bottom);
    }

    #[test]
    fn test_cylinder_cap_flags() {
        let resolved = CylinderParams::default()
            .without_caps(true, false)
            .resolve(0.5, 2.0)
            .unwrap();
        assert!(!resolved.top);
        assert!(resolved.bottom);
    }

    #[test]
    fn test_cone_height_defaults_to_twice_radius() {
        let resolved = ConeParams::default().with_radius(0.2).resolve(0.5).unwrap();
        assert_relative_eq!(resolved.height, 0.4);
        assert!(resolved.bottom);
        assert!(!ConeParams::default().without_bottom().resolve(0.5).unwrap().bottom);
    }

    #[test]
    fn test_zero_resolution_rejected() {
        let err = SphereParams::default().with_slices(0).resolve(0.5).unwrap_err();
        assert_eq!(err, MeshError::invalid_parameter("slices", "must be at least 1"));
    }

    #[test]
    fn test_non_finite_length_rejected() {
        let result = CubeParams::default().with_side(f64::NAN).resolve();
        assert!(matches!(
            result,
            Err(MeshError::InvalidParameter { name: "side", .. })
        ));
        let result = ConeParams::default().with_height(f64::INFINITY).resolve(0.5);
        assert!(matches!(
            result,
            Err(MeshError::InvalidParameter { name: "height", .. })
        ));
    }

    #[test]
    fn test_params_deserialize_with_missing_fields() {
        let params: SphereParams = serde_json::from_str(r#"{"radius": 2.0}"#).unwrap();
        assert_eq!(params.radius, Some(2.0));
        assert_eq!(params.slices, None);
    }
}
