//! # Flat Faces
//!
//! Builds faceted shapes from independent planar faces. No vertex is shared
//! between faces, so every face keeps its own unblended normal.

use crate::buffers::VertexBuffers;
use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::placement::Placement;
use glam::{DVec2, DVec3};

/// Texture coordinates of a face's corners, in declaration order.
const FACE_TEX_COORDS: [DVec2; 4] = [
    DVec2::new(0.0, 0.0),
    DVec2::new(1.0, 0.0),
    DVec2::new(1.0, 1.0),
    DVec2::new(0.0, 1.0),
];

/// Incremental builder for faceted meshes.
///
/// Buffers grow as faces are declared; nothing is pre-sized.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use ifs_mesh::flat::FlatFaceBuilder;
/// use ifs_mesh::Placement;
///
/// let mut builder = FlatFaceBuilder::new(Placement::IDENTITY);
/// builder.quad(
///     [
///         DVec3::new(0.0, 0.0, 0.0),
///         DVec3::new(1.0, 0.0, 0.0),
///         DVec3::new(1.0, 1.0, 0.0),
///         DVec3::new(0.0, 1.0, 0.0),
///     ],
///     DVec3::Z,
/// );
/// let mesh = builder.build().unwrap();
/// assert_eq!(mesh.vertex_count(), 4);
/// assert_eq!(mesh.indices(), &[0, 1, 2, 0, 2, 3]);
/// ```
#[derive(Debug)]
pub struct FlatFaceBuilder {
    buffers: VertexBuffers,
    placement: Placement,
    shape: &'static str,
}

impl FlatFaceBuilder {
    /// Creates an empty builder whose positions are mapped through `placement`.
    pub fn new(placement: Placement) -> Self {
        Self::named("flat", placement)
    }

    pub(crate) fn named(shape: &'static str, placement: Placement) -> Self {
        Self {
            buffers: VertexBuffers::new(),
            placement,
            shape,
        }
    }

    /// Number of vertices declared so far.
    pub fn vertex_count(&self) -> usize {
        self.buffers.vertex_count() as usize
    }

    /// Appends a quad: 4 vertices and triangles
    /// `(start, start+1, start+2)`, `(start, start+2, start+3)`.
    ///
    /// Corners should run counter-clockwise seen from the side `normal`
    /// points to.
    pub fn quad(&mut self, corners: [DVec3; 4], normal: DVec3) -> &mut Self {
        let start = self.push_corners(&corners, normal);
        self.buffers.push_triangle(start, start + 1, start + 2);
        self.buffers.push_triangle(start, start + 2, start + 3);
        self
    }

    /// Appends a triangle: 3 vertices and one triangle.
    pub fn triangle(&mut self, corners: [DVec3; 3], normal: DVec3) -> &mut Self {
        let start = self.push_corners(&corners, normal);
        self.buffers.push_triangle(start, start + 1, start + 2);
        self
    }

    /// Finishes the mesh.
    pub fn build(self) -> Result<Mesh, MeshError> {
        self.buffers.into_mesh(self.shape)
    }

    fn push_corners(&mut self, corners: &[DVec3], normal: DVec3) -> u32 {
        let start = self.buffers.vertex_count();
        for (corner, tex_coord) in corners.iter().zip(FACE_TEX_COORDS) {
            self.buffers
                .push_vertex(self.placement.apply(*corner), normal, tex_coord);
        }
        start
    }
}

/// Unit normal of the plane through `a`, `b`, `c` (counter-clockwise).
pub fn face_normal(a: DVec3, b: DVec3, c: DVec3) -> DVec3 {
    (b - a).cross(c - a).normalize_or_zero()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faces_do_not_share_vertices() {
        let mut builder = FlatFaceBuilder::new(Placement::IDENTITY);
        let corners = [DVec3::ZERO, DVec3::X, DVec3::ONE, DVec3::Y];
        builder.quad(corners, DVec3::Z).quad(corners, DVec3::Z);
        assert_eq!(builder.vertex_count(), 8);

        let mesh = builder.build().unwrap();
        assert_eq!(mesh.indices(), &[0, 1, 2, 0, 2, 3, 4, 5, 6, 4, 6, 7]);
    }

    #[test]
    fn test_quad_tex_coords_are_fixed_square() {
        let mut builder = FlatFaceBuilder::new(Placement::IDENTITY);
        builder.quad([DVec3::ZERO, DVec3::X, DVec3::ONE, DVec3::Y], DVec3::Z);
        let mesh = builder.build().unwrap();
        assert_eq!(
            mesh.vertex_texture_coords(),
            &[0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0]
        );
    }

    #[test]
    fn test_triangle_face() {
        let mut builder = FlatFaceBuilder::new(Placement::IDENTITY);
        builder.triangle([DVec3::ZERO, DVec3::X, DVec3::Y], DVec3::Z);
        let mesh = builder.build().unwrap();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.indices(), &[0, 1, 2]);
        assert_eq!(mesh.vertex_texture_coords(), &[0.0, 0.0, 1.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_placement_moves_corners_not_normals() {
        let mut builder = FlatFaceBuilder::new(Placement::translation(DVec3::splat(0.8)));
        builder.triangle([DVec3::ZERO, DVec3::X, DVec3::Y], DVec3::Z);
        let mesh = builder.build().unwrap();
        assert_eq!(mesh.position(0).to_array(), [0.8, 0.8, 0.8]);
        assert_eq!(mesh.normal(0).to_array(), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_face_normal() {
        assert_eq!(face_normal(DVec3::ZERO, DVec3::X, DVec3::Y), DVec3::Z);
        assert_eq!(face_normal(DVec3::ZERO, DVec3::Y, DVec3::X), DVec3::NEG_Z);
        assert_eq!(face_normal(DVec3::ZERO, DVec3::X, DVec3::X), DVec3::ZERO);
    }
}
