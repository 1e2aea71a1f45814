//! # Cylinder Primitive
//!
//! Open tube along the z axis, centred on the origin, with optional disk
//! caps.
//!
//! Vertex order is lateral surface, then the top cap, then the bottom cap.

use crate::buffers::{check_vertex_count, VertexBuffers};
use crate::error::MeshError;
use crate::grid::{grid_index_count, sample_grid, triangulate_grid, GridDomain, SurfaceSample, Winding};
use crate::mesh::Mesh;
use crate::params::{CylinderParams, ResolvedCylinder};
use crate::placement::Placement;
use crate::radial::{cap_vertex_count, disk_cap, CapFacing};
use config::constants::{grid_vertex_count, CYLINDER_HEIGHT_RATIO, DEFAULT_CYLINDER_RADIUS};
use glam::DVec3;

/// Creates a cylinder.
///
/// # Arguments
///
/// * `params` - radius (default 0.5), height (default 2 x radius),
///   slices (default 32), cap flags
/// * `placement` - scale and offset baked into the positions
///
/// # Algorithm
///
/// The lateral surface is a grid one stack high: two rings of `slices + 1`
/// vertices at `z = -h/2` and `z = h/2` with normals `(cos u, sin u, 0)`.
/// Each cap adds a centre vertex and `slices + 1` perimeter vertices.
///
/// # Example
///
/// ```rust
/// use ifs_mesh::primitives::cylinder;
/// use ifs_mesh::{CylinderParams, Placement};
///
/// let mesh = cylinder(&CylinderParams::default().with_slices(8), &Placement::IDENTITY).unwrap();
/// assert_eq!(mesh.vertex_count(), 2 * 9 + 2 * 10);
/// assert_eq!(mesh.triangle_count(), 2 * 8 + 2 * 8);
/// ```
pub fn cylinder(params: &CylinderParams, placement: &Placement) -> Result<Mesh, MeshError> {
    let cylinder = params.resolve(DEFAULT_CYLINDER_RADIUS, CYLINDER_HEIGHT_RATIO)?;
    cylinder_mesh("cylinder", &cylinder, placement)
}

pub(crate) fn cylinder_mesh(
    shape: &'static str,
    cylinder: &ResolvedCylinder,
    placement: &Placement,
) -> Result<Mesh, MeshError> {
    let ResolvedCylinder {
        radius,
        height,
        slices,
        top,
        bottom,
    } = *cylinder;
    let caps = usize::from(top) + usize::from(bottom);

    let vertex_count = grid_vertex_count(slices, 1)
        .and_then(|lateral| lateral.checked_add(caps * cap_vertex_count(slices)));
    let vertex_count = check_vertex_count(shape, vertex_count)?;
    let index_count = grid_index_count(slices, 1) + caps * 3 * slices as usize;
    let mut buffers = VertexBuffers::with_capacity(vertex_count, index_count);

    let domain = GridDomain::periodic(slices, 1, -height / 2.0, height);
    let first = sample_grid(&mut buffers, &domain, |p| {
        let (s, c) = p.u.sin_cos();
        SurfaceSample::new(
            placement.apply(DVec3::new(c * radius, s * radius, p.v)),
            DVec3::new(c, s, 0.0),
            p.tex_coord(&domain),
        )
    });
    triangulate_grid(&mut buffers, first, slices, 1, Winding::Standard);

    if top {
        disk_cap(&mut buffers, placement, radius, height / 2.0, slices, CapFacing::Up);
    }
    if bottom {
        disk_cap(&mut buffers, placement, radius, -height / 2.0, slices, CapFacing::Down);
    }

    buffers.into_mesh(shape)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cylinder_counts_with_caps() {
        let mesh = cylinder(&CylinderParams::default().with_slices(12), &Placement::IDENTITY).unwrap();
        assert_eq!(mesh.vertex_count(), 2 * 13 + 2 * 14);
        assert_eq!(mesh.triangle_count(), 12 * 4);
        assert!(mesh.validate());
    }

    #[test]
    fn test_cylinder_without_caps() {
        let params = CylinderParams::default().with_slices(12).without_caps(true, true);
        let mesh = cylinder(&params, &Placement::IDENTITY).unwrap();
        assert_eq!(mesh.vertex_count(), 2 * 13);
        assert_eq!(mesh.triangle_count(), 24);
    }

    #[test]
    fn test_cylinder_single_cap() {
        let params = CylinderParams::default().with_slices(6).without_caps(true, false);
        let mesh = cylinder(&params, &Placement::IDENTITY).unwrap();
        assert_eq!(mesh.vertex_count(), 14 + 8);
        // Only the bottom cap remains
        assert_eq!(mesh.normal(14).to_array(), [0.0, 0.0, -1.0]);
    }

    #[test]
    fn test_cylinder_lateral_rows() {
        let params = CylinderParams::default().with_radius(1.0).with_height(4.0).with_slices(8);
        let mesh = cylinder(&params, &Placement::IDENTITY).unwrap();
        for i in 0..9 {
            assert_relative_eq!(mesh.position(i).z, -2.0);
            assert_relative_eq!(mesh.position(i + 9).z, 2.0);
            assert_eq!(mesh.tex_coord(i).y, 0.0);
            assert_eq!(mesh.tex_coord(i + 9).y, 1.0);
        }
    }

    #[test]
    fn test_cylinder_lateral_normals_are_radial() {
        let params = CylinderParams::default().with_slices(8).without_caps(true, true);
        let mesh = cylinder(&params, &Placement::new(2.0, DVec3::ONE)).unwrap();
        for i in 0..mesh.vertex_count() {
            let n = mesh.normal(i);
            assert_eq!(n.z, 0.0);
            assert_relative_eq!(n.length(), 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_cylinder_default_height_is_twice_radius() {
        let params = CylinderParams::default().with_radius(0.3);
        let mesh = cylinder(&params, &Placement::IDENTITY).unwrap();
        let (min, max) = mesh.bounding_box();
        assert_relative_eq!(max.z - min.z, 1.2, epsilon = 1e-6);
    }

    #[test]
    fn test_cylinder_rejects_zero_slices() {
        let params = CylinderParams::default().with_slices(0);
        assert!(matches!(
            cylinder(&params, &Placement::IDENTITY),
            Err(MeshError::InvalidParameter { .. })
        ));
    }
}
