//! # Sphere Primitive
//!
//! Latitude/longitude sphere around the z axis, north pole on +z.

use crate::error::MeshError;
use crate::grid::{surface_mesh, GridDomain, SurfaceSample, Winding};
use crate::mesh::Mesh;
use crate::params::SphereParams;
use crate::placement::Placement;
use config::constants::DEFAULT_SPHERE_RADIUS;
use glam::DVec3;
use std::f64::consts::{FRAC_PI_2, PI};

/// Creates a UV sphere.
///
/// # Arguments
///
/// * `params` - radius (default 0.5), slices (default 32), stacks (default 16)
/// * `placement` - scale and offset baked into the positions
///
/// # Algorithm
///
/// For `u` in `[0, 2π]` and `v` in `[-π/2, π/2]`:
///
/// ```text
/// p        = (cos u cos v, sin u cos v, sin v) * placement.scale
/// position = radius * p + placement.offset
/// normal   = p
/// ```
///
/// The normal is the scaled unit-sphere point, not the radius-scaled
/// position, so it is only unit length when the placement scale is 1.
///
/// # Example
///
/// ```rust
/// use ifs_mesh::primitives::sphere;
/// use ifs_mesh::{Placement, SphereParams};
///
/// let mesh = sphere(&SphereParams::default(), &Placement::IDENTITY).unwrap();
/// assert_eq!(mesh.vertex_count(), 33 * 17);
/// assert_eq!(mesh.triangle_count(), 2 * 32 * 16);
/// ```
pub fn sphere(params: &SphereParams, placement: &Placement) -> Result<Mesh, MeshError> {
    sphere_mesh("sphere", params, placement)
}

pub(crate) fn sphere_mesh(
    shape: &'static str,
    params: &SphereParams,
    placement: &Placement,
) -> Result<Mesh, MeshError> {
    let sphere = params.resolve(DEFAULT_SPHERE_RADIUS)?;
    let domain = GridDomain::periodic(sphere.slices, sphere.stacks, -FRAC_PI_2, PI);

    surface_mesh(shape, &domain, Winding::Standard, |p| {
        let (sin_u, cos_u) = p.u.sin_cos();
        let (sin_v, cos_v) = p.v.sin_cos();
        let point = DVec3::new(cos_u * cos_v, sin_u * cos_v, sin_v) * placement.scale;
        SurfaceSample::new(
            point * sphere.radius + placement.offset,
            point,
            p.tex_coord(&domain),
        )
    })
}
