//! # Vertex Buffers
//!
//! Staging storage shared by every builder. Geometry arrives as f64 and is
//! narrowed to f32 on write; indices are kept as u32 until the final range
//! check converts them to u16.

use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::MAX_VERTICES;
use glam::{DVec2, DVec3};
use tracing::{debug, warn};

/// Growable or pre-sized vertex and index storage.
#[derive(Debug, Default)]
pub(crate) struct VertexBuffers {
    positions: Vec<f32>,
    normals: Vec<f32>,
    tex_coords: Vec<f32>,
    indices: Vec<u32>,
}

impl VertexBuffers {
    /// Creates empty, growable buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates buffers sized for exactly `vertices` vertices and
    /// `indices` indices.
    pub fn with_capacity(vertices: usize, indices: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices * 3),
            normals: Vec::with_capacity(vertices * 3),
            tex_coords: Vec::with_capacity(vertices * 2),
            indices: Vec::with_capacity(indices),
        }
    }

    /// Number of vertices written so far.
    #[inline]
    pub fn vertex_count(&self) -> u32 {
        u32::try_from(self.positions.len() / 3).unwrap_or(u32::MAX)
    }

    /// Number of indices written so far.
    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Appends a vertex and returns its index.
    pub fn push_vertex(&mut self, position: DVec3, normal: DVec3, tex_coord: DVec2) -> u32 {
        let index = self.vertex_count();
        self.positions
            .extend_from_slice(&[position.x as f32, position.y as f32, position.z as f32]);
        self.normals
            .extend_from_slice(&[normal.x as f32, normal.y as f32, normal.z as f32]);
        self.tex_coords
            .extend_from_slice(&[tex_coord.x as f32, tex_coord.y as f32]);
        index
    }

    /// Appends a triangle by vertex indices.
    #[inline]
    pub fn push_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.indices.extend_from_slice(&[i0, i1, i2]);
    }

    /// Range-checks the indices and freezes the buffers into a [`Mesh`].
    pub fn into_mesh(self, shape: &'static str) -> Result<Mesh, MeshError> {
        let vertex_count = self.positions.len() / 3;
        check_vertex_count(shape, Some(vertex_count))?;

        let indices = self
            .indices
            .iter()
            .map(|&i| u16::try_from(i).map_err(|_| MeshError::index_range(i as usize + 1, MAX_VERTICES)))
            .collect::<Result<Vec<u16>, MeshError>>()?;

        debug_assert!(indices.iter().all(|&i| (i as usize) < vertex_count));

        debug!(
            shape,
            vertices = vertex_count,
            triangles = indices.len() / 3,
            "generated mesh"
        );

        Ok(Mesh::from_parts(
            self.positions,
            self.normals,
            self.tex_coords,
            indices,
        ))
    }
}

/// Verifies a vertex count fits 16-bit indices.
///
/// `None` means the count overflowed `usize` while being computed.
pub(crate) fn check_vertex_count(
    shape: &'static str,
    count: Option<usize>,
) -> Result<usize, MeshError> {
    match count {
        Some(count) if count <= MAX_VERTICES => Ok(count),
        other => {
            let count = other.unwrap_or(usize::MAX);
            warn!(shape, count, max = MAX_VERTICES, "vertex count exceeds 16-bit index range");
            Err(MeshError::index_range(count, MAX_VERTICES))
        }
    }
}
