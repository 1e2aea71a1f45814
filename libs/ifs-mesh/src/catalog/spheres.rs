//! The three quarter-scale spheres, each parked at its own offset.

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::params::SphereParams;
use crate::placement::Placement;
use crate::primitives::sphere_mesh;
use glam::DVec3;

const SPHERE_SCALE: f64 = 0.25;

const UV_SPHERE: Placement = Placement::new(SPHERE_SCALE, DVec3::new(-1.0, -1.0, -1.0));
const UV_SPHERE2: Placement = Placement::new(SPHERE_SCALE, DVec3::new(0.0, -1.6, -1.4));
const UV_SPHERE3: Placement = Placement::new(SPHERE_SCALE, DVec3::new(-0.78, -0.2, 0.1));

/// Sphere centred at (-1, -1, -1).
///
/// Positions are `radius * p / 4 + offset` and normals `p / 4`, where `p` is
/// the unit-sphere point.
pub fn uv_sphere(params: &SphereParams) -> Result<Mesh, MeshError> {
    sphere_mesh("uv_sphere", params, &UV_SPHERE)
}

/// Sphere centred at (0, -1.6, -1.4).
pub fn uv_sphere2(params: &SphereParams) -> Result<Mesh, MeshError> {
    sphere_mesh("uv_sphere2", params, &UV_SPHERE2)
}

/// Sphere centred at (-0.78, -0.2, 0.1).
pub fn uv_sphere3(params: &SphereParams) -> Result<Mesh, MeshError> {
    sphere_mesh("uv_sphere3", params, &UV_SPHERE3)
}
