//! # Cone Primitive
//!
//! Cone along the z axis with its base at `-h/2` and tip at `h/2`.

use crate::buffers::{check_vertex_count, VertexBuffers};
use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::params::ConeParams;
use crate::placement::Placement;
use crate::radial::{cap_vertex_count, cone_lateral, cone_vertex_count, disk_cap, CapFacing};
use config::constants::{CONE_RING_FRACTIONS, DEFAULT_CONE_RADIUS};

/// Creates a cone.
///
/// # Arguments
///
/// * `params` - base radius (default 0.5 / 3.3), height (default 2 x radius),
///   slices (default 32), bottom flag
/// * `placement` - scale and offset baked into the positions
///
/// # Algorithm
///
/// Five rings at fixed height fractions form the lateral surface, closed by
/// `slices` tip vertices that share a position but carry one normal per
/// slice. A downward-facing disk closes the base unless suppressed.
///
/// # Example
///
/// ```rust
/// use ifs_mesh::primitives::cone;
/// use ifs_mesh::{ConeParams, Placement};
///
/// let mesh = cone(&ConeParams::default().with_slices(8), &Placement::IDENTITY).unwrap();
/// assert_eq!(mesh.vertex_count(), 5 * 9 + 8 + 10);
/// ```
pub fn cone(params: &ConeParams, placement: &Placement) -> Result<Mesh, MeshError> {
    cone_mesh("cone", params, DEFAULT_CONE_RADIUS, placement)
}

pub(crate) fn cone_mesh(
    shape: &'static str,
    params: &ConeParams,
    default_radius: f64,
    placement: &Placement,
) -> Result<Mesh, MeshError> {
    let cone = params.resolve(default_radius)?;
    let rings = CONE_RING_FRACTIONS.len();
    let cap = if cone.bottom { cap_vertex_count(cone.slices) } else { 0 };

    let vertex_count = cone_vertex_count(cone.slices, rings).and_then(|n| n.checked_add(cap));
    let vertex_count = check_vertex_count(shape, vertex_count)?;
    let slices = cone.slices as usize;
    let index_count = (rings - 1) * 6 * slices + 3 * slices + if cone.bottom { 3 * slices } else { 0 };
    let mut buffers = VertexBuffers::with_capacity(vertex_count, index_count);

    cone_lateral(
        &mut buffers,
        placement,
        cone.radius,
        cone.height,
        cone.slices,
        &CONE_RING_FRACTIONS,
    );
    if cone.bottom {
        disk_cap(
            &mut buffers,
            placement,
            cone.radius,
            -cone.height / 2.0,
            cone.slices,
            CapFacing::Down,
        );
    }

    buffers.into_mesh(shape)
}
