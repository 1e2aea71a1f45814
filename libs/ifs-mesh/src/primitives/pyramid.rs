//! # Pyramid Primitive
//!
//! Small four-sided pyramid with its apex on +y and an open base.

use crate::error::MeshError;
use crate::flat::{face_normal, FlatFaceBuilder};
use crate::mesh::Mesh;
use crate::placement::Placement;
use glam::DVec3;

/// Apex of the pyramid before placement.
const APEX: DVec3 = DVec3::new(0.0, 0.2, 0.0);

/// Half-width of the square base, which sits at `y = -BASE_HALF`.
const BASE_HALF: f64 = 0.05;

/// Creates a pyramid of 4 triangular faces, 12 vertices.
///
/// Faces are emitted back, left, front, right. Each face gets the flat
/// normal of its plane.
///
/// # Example
///
/// ```rust
/// use ifs_mesh::primitives::pyramid;
/// use ifs_mesh::Placement;
///
/// let mesh = pyramid(&Placement::IDENTITY).unwrap();
/// assert_eq!(mesh.vertex_count(), 12);
/// assert_eq!(mesh.triangle_count(), 4);
/// ```
pub fn pyramid(placement: &Placement) -> Result<Mesh, MeshError> {
    pyramid_mesh("pyramid", placement)
}

pub(crate) fn pyramid_mesh(shape: &'static str, placement: &Placement) -> Result<Mesh, MeshError> {
    let b = |x: f64, z: f64| DVec3::new(x * BASE_HALF, -BASE_HALF, z * BASE_HALF);
    let faces = [
        [APEX, b(1.0, -1.0), b(-1.0, -1.0)],
        [APEX, b(-1.0, -1.0), b(-1.0, 1.0)],
        [APEX, b(-1.0, 1.0), b(1.0, 1.0)],
        [APEX, b(1.0, 1.0), b(1.0, -1.0)],
    ];

    let mut builder = FlatFaceBuilder::named(shape, *placement);
    for [apex, left, right] in faces {
        builder.triangle([apex, left, right], face_normal(apex, left, right));
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_pyramid_normals_point_away_from_axis() {
        let mesh = pyramid(&Placement::IDENTITY).unwrap();
        let outward = [DVec3::NEG_Z, DVec3::NEG_X, DVec3::Z, DVec3::X];
        for (face, direction) in outward.iter().enumerate() {
            let normal = mesh.normal(face * 3).as_dvec3();
            assert!(normal.dot(*direction) > 0.0, "face {face}");
            assert!(normal.y > 0.0);
            assert_relative_eq!(normal.length(), 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_pyramid_vertices_are_finite() {
        let mesh = pyramid(&Placement::translation(DVec3::splat(0.8))).unwrap();
        assert!(mesh.vertex_positions().iter().all(|v| v.is_finite()));
        assert!(mesh.vertex_normals().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_pyramid_apex_shared_by_every_face() {
        let mesh = pyramid(&Placement::translation(DVec3::splat(0.8))).unwrap();
        for face in 0..4 {
            assert_relative_eq!(mesh.position(face * 3).y, 1.0, epsilon = 1e-6);
            assert_relative_eq!(mesh.position(face * 3 + 1).y, 0.75, epsilon = 1e-6);
        }
    }
}
