//! # Mesh Data Structure
//!
//! The indexed face set handed to the renderer: four flat, positionally
//! aligned arrays.

use crate::error::MeshError;
use config::constants::MAX_VERTICES;
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// An indexed triangle mesh.
///
/// Geometry is evaluated in f64 by the builders and stored here as f32,
/// ready for upload into GPU vertex buffers. Index `i` of the position,
/// normal and texture coordinate arrays describes the same vertex.
///
/// Normals are not guaranteed to be unit length.
///
/// Deserialization runs [`Mesh::validate`], so a decoded mesh upholds the
/// same invariants as a generated one.
///
/// # Example
///
/// ```rust
/// use ifs_mesh::catalog::uv_sphere;
/// use ifs_mesh::SphereParams;
///
/// let mesh = uv_sphere(&SphereParams::default()).unwrap();
/// assert_eq!(mesh.vertex_count(), 561);
/// assert_eq!(mesh.indices().len(), 3072);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawMesh")]
pub struct Mesh {
    /// Vertex positions as [x, y, z, x, y, z, ...]
    vertex_positions: Vec<f32>,
    /// Vertex normals as [nx, ny, nz, ...]
    vertex_normals: Vec<f32>,
    /// Texture coordinates as [u, v, u, v, ...]
    vertex_texture_coords: Vec<f32>,
    /// Triangle indices (3 per triangle)
    indices: Vec<u16>,
}

/// Wire form of [`Mesh`] before validation.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMesh {
    vertex_positions: Vec<f32>,
    vertex_normals: Vec<f32>,
    vertex_texture_coords: Vec<f32>,
    indices: Vec<u16>,
}

impl TryFrom<RawMesh> for Mesh {
    type Error = MeshError;

    fn try_from(raw: RawMesh) -> Result<Self, Self::Error> {
        let mesh = Mesh::from_parts(
            raw.vertex_positions,
            raw.vertex_normals,
            raw.vertex_texture_coords,
            raw.indices,
        );
        if mesh.vertex_count() > MAX_VERTICES {
            return Err(MeshError::index_range(mesh.vertex_count(), MAX_VERTICES));
        }
        if !mesh.validate() {
            return Err(MeshError::invalid_parameter(
                "mesh",
                "arrays are misaligned or an index addresses a missing vertex",
            ));
        }
        Ok(mesh)
    }
}

impl Mesh {
    /// Assembles a mesh from already range-checked arrays.
    pub(crate) fn from_parts(
        vertex_positions: Vec<f32>,
        vertex_normals: Vec<f32>,
        vertex_texture_coords: Vec<f32>,
        indices: Vec<u16>,
    ) -> Self {
        Self {
            vertex_positions,
            vertex_normals,
            vertex_texture_coords,
            indices,
        }
    }

    /// Consumes the mesh and returns its arrays as
    /// `(positions, normals, texture_coords, indices)`.
    pub fn into_parts(self) -> (Vec<f32>, Vec<f32>, Vec<f32>, Vec<u16>) {
        (
            self.vertex_positions,
            self.vertex_normals,
            self.vertex_texture_coords,
            self.indices,
        )
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_positions.len() / 3
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertex_positions.is_empty()
    }

    /// Returns the flat position array.
    #[inline]
    pub fn vertex_positions(&self) -> &[f32] {
        &self.vertex_positions
    }

    /// Returns the flat normal array.
    #[inline]
    pub fn vertex_normals(&self) -> &[f32] {
        &self.vertex_normals
    }

    /// Returns the flat texture coordinate array.
    #[inline]
    pub fn vertex_texture_coords(&self) -> &[f32] {
        &self.vertex_texture_coords
    }

    /// Returns the flat index array.
    #[inline]
    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    /// Returns the position of vertex `index`.
    #[inline]
    pub fn position(&self, index: usize) -> Vec3 {
        Vec3::from_slice(&self.vertex_positions[index * 3..index * 3 + 3])
    }

    /// Returns the normal of vertex `index`.
    #[inline]
    pub fn normal(&self, index: usize) -> Vec3 {
        Vec3::from_slice(&self.vertex_normals[index * 3..index * 3 + 3])
    }

    /// Returns the texture coordinate of vertex `index`.
    #[inline]
    pub fn tex_coord(&self, index: usize) -> Vec2 {
        Vec2::from_slice(&self.vertex_texture_coords[index * 2..index * 2 + 2])
    }

    /// Returns the vertex indices of triangle `index`.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u16; 3] {
        let base = index * 3;
        [
            self.indices[base],
            self.indices[base + 1],
            self.indices[base + 2],
        ]
    }

    /// Iterates over all triangles.
    pub fn triangles(&self) -> impl Iterator<Item = [u16; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (Vec3, Vec3) {
        if self.is_empty() {
            return (Vec3::ZERO, Vec3::ZERO);
        }

        let mut min = self.position(0);
        let mut max = min;

        for i in 1..self.vertex_count() {
            let v = self.position(i);
            min = min.min(v);
            max = max.max(v);
        }

        (min, max)
    }

    /// Validates the structural invariants of the mesh.
    ///
    /// Checks:
    /// - Array lengths agree on one vertex count
    /// - Index count is a multiple of 3
    /// - Every index addresses an existing vertex
    /// - The vertex count fits 16-bit indices
    ///
    /// Degenerate triangles (pole rows, collapsed tips) are legal.
    pub fn validate(&self) -> bool {
        if self.vertex_positions.len() % 3 != 0 || self.indices.len() % 3 != 0 {
            return false;
        }

        let vertex_count = self.vertex_count();
        if self.vertex_normals.len() != vertex_count * 3
            || self.vertex_texture_coords.len() != vertex_count * 2
            || vertex_count > MAX_VERTICES
        {
            return false;
        }

        self.indices.iter().all(|&i| (i as usize) < vertex_count)
    }
}
