//! # Cube Primitive
//!
//! Axis-aligned cube centred on the origin, six independent quads.

use crate::error::MeshError;
use crate::flat::FlatFaceBuilder;
use crate::mesh::Mesh;
use crate::params::CubeParams;
use crate::placement::Placement;
use glam::DVec3;

/// Creates a cube with 24 vertices and 12 triangles.
///
/// Faces are emitted front, back, top, bottom, right, left; each carries its
/// own axis-aligned normal and the unit texture square.
///
/// # Example
///
/// ```rust
/// use ifs_mesh::primitives::cube;
/// use ifs_mesh::{CubeParams, Placement};
///
/// let mesh = cube(&CubeParams::default().with_side(2.0), &Placement::IDENTITY).unwrap();
/// assert_eq!(mesh.vertex_count(), 24);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn cube(params: &CubeParams, placement: &Placement) -> Result<Mesh, MeshError> {
    cube_mesh("cube", params, placement)
}

pub(crate) fn cube_mesh(
    shape: &'static str,
    params: &CubeParams,
    placement: &Placement,
) -> Result<Mesh, MeshError> {
    let s = params.resolve()? / 2.0;
    let v = |x: f64, y: f64, z: f64| DVec3::new(x * s, y * s, z * s);

    let mut builder = FlatFaceBuilder::named(shape, *placement);
    builder
        .quad(
            [v(-1.0, -1.0, 1.0), v(1.0, -1.0, 1.0), v(1.0, 1.0, 1.0), v(-1.0, 1.0, 1.0)],
            DVec3::Z,
        )
        .quad(
            [v(-1.0, -1.0, -1.0), v(-1.0, 1.0, -1.0), v(1.0, 1.0, -1.0), v(1.0, -1.0, -1.0)],
            DVec3::NEG_Z,
        )
        .quad(
            [v(-1.0, 1.0, -1.0), v(-1.0, 1.0, 1.0), v(1.0, 1.0, 1.0), v(1.0, 1.0, -1.0)],
            DVec3::Y,
        )
        .quad(
            [v(-1.0, -1.0, -1.0), v(1.0, -1.0, -1.0), v(1.0, -1.0, 1.0), v(-1.0, -1.0, 1.0)],
            DVec3::NEG_Y,
        )
        .quad(
            [v(1.0, -1.0, -1.0), v(1.0, 1.0, -1.0), v(1.0, 1.0, 1.0), v(1.0, -1.0, 1.0)],
            DVec3::X,
        )
        .quad(
            [v(-1.0, -1.0, -1.0), v(-1.0, -1.0, 1.0), v(-1.0, 1.0, 1.0), v(-1.0, 1.0, -1.0)],
            DVec3::NEG_X,
        );
    builder.build()
}
