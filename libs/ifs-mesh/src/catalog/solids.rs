//! Cylinders, cone, cube and pyramid at their scene positions.

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::params::{ConeParams, CubeParams, CylinderParams, ResolvedCylinder};
use crate::placement::Placement;
use crate::primitives::{cone_mesh, cube_mesh, cylinder_mesh, pyramid_mesh};
use config::constants::{
    CYLINDER_HEIGHT_RATIO, DEFAULT_CONE_RADIUS, UV_CYLINDER2_HEIGHT_RATIO, UV_CYLINDER2_RADIUS,
    UV_CYLINDER_RADIUS,
};
use glam::DVec3;

const CUBE: Placement = Placement::new(0.125, DVec3::splat(1.2));
const PYRAMID: Placement = Placement::translation(DVec3::splat(0.8));

/// Drops both caps.
fn lateral_only(cylinder: ResolvedCylinder) -> ResolvedCylinder {
    ResolvedCylinder {
        top: false,
        bottom: false,
        ..cylinder
    }
}

/// Open tube (default radius 0.09, height 2 x radius) offset by
/// `(r, 7r, 0)`.
///
/// `no_top` and `no_bottom` have no effect.
pub fn uv_cylinder(params: &CylinderParams) -> Result<Mesh, MeshError> {
    let cylinder = lateral_only(params.resolve(UV_CYLINDER_RADIUS, CYLINDER_HEIGHT_RATIO)?);
    let r = cylinder.radius;
    let placement = Placement::translation(DVec3::new(r, 7.0 * r, 0.0));
    cylinder_mesh("uv_cylinder", &cylinder, &placement)
}

/// Open tube with default radius 0.1 and height 3 x radius, offset by
/// `(-7r, -10r, 0)`.
///
/// `no_top` and `no_bottom` have no effect.
pub fn uv_cylinder2(params: &CylinderParams) -> Result<Mesh, MeshError> {
    let cylinder = lateral_only(params.resolve(UV_CYLINDER2_RADIUS, UV_CYLINDER2_HEIGHT_RATIO)?);
    let r = cylinder.radius;
    let placement = Placement::translation(DVec3::new(-7.0 * r, -10.0 * r, 0.0));
    cylinder_mesh("uv_cylinder2", &cylinder, &placement)
}

/// Cone at the origin, default radius 0.5 / 3.3.
pub fn uv_cone(params: &ConeParams) -> Result<Mesh, MeshError> {
    cone_mesh("uv_cone", params, DEFAULT_CONE_RADIUS, &Placement::IDENTITY)
}

/// Cube of `side / 8` centred at (1.2, 1.2, 1.2).
pub fn cube(params: &CubeParams) -> Result<Mesh, MeshError> {
    cube_mesh("cube", params, &CUBE)
}

/// Pyramid with its apex at (0.8, 1.0, 0.8).
pub fn pyramid() -> Result<Mesh, MeshError> {
    pyramid_mesh("pyramid", &PYRAMID)
}
