//! # Torus Primitive
//!
//! Ring torus around the z axis. The tube angle `v` starts on the inside of
//! the ring at `-π`.

use crate::error::MeshError;
use crate::grid::{surface_mesh, GridDomain, SurfaceSample, Winding};
use crate::mesh::Mesh;
use crate::params::TorusParams;
use crate::placement::Placement;
use config::constants::DEFAULT_TORUS_OUTER_RADIUS;
use glam::DVec3;
use std::f64::consts::{PI, TAU};

/// Creates a torus.
///
/// # Arguments
///
/// * `params` - outer radius (default 0.5), inner radius (default outer / 3),
///   slices (default 32), stacks (default 16)
/// * `placement` - scale and offset baked into the positions
///
/// # Algorithm
///
/// With `R = (inner + outer) / 2` and `r = outer - R`:
///
/// ```text
/// position = ((R + r cos v) cos u, (R + r cos v) sin u, r sin v)
/// normal   = (cos v cos u, cos v sin u, sin v)
/// ```
///
/// # Example
///
/// ```rust
/// use ifs_mesh::primitives::torus;
/// use ifs_mesh::{Placement, TorusParams};
///
/// let params = TorusParams::default().with_outer_radius(1.0).with_inner_radius(0.5);
/// let mesh = torus(&params, &Placement::IDENTITY).unwrap();
/// assert_eq!(mesh.vertex_count(), 33 * 17);
/// ```
pub fn torus(params: &TorusParams, placement: &Placement) -> Result<Mesh, MeshError> {
    torus_mesh("torus", params, placement)
}

pub(crate) fn torus_mesh(
    shape: &'static str,
    params: &TorusParams,
    placement: &Placement,
) -> Result<Mesh, MeshError> {
    let torus = params.resolve(DEFAULT_TORUS_OUTER_RADIUS)?;
    let center = torus.center_radius();
    let tube = torus.tube_radius();
    let domain = GridDomain::periodic(torus.slices, torus.stacks, -PI, TAU);

    surface_mesh(shape, &domain, Winding::Standard, |p| {
        let (sin_u, cos_u) = p.u.sin_cos();
        let (sin_v, cos_v) = p.v.sin_cos();
        let ring = center + tube * cos_v;
        SurfaceSample::new(
            placement.apply(DVec3::new(ring * cos_u, ring * sin_u, tube * sin_v)),
            DVec3::new(cos_v * cos_u, cos_v * sin_u, sin_v),
            p.tex_coord(&domain),
        )
    })
}
