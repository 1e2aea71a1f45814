//! # Parametric Grid
//!
//! Samples a surface function over a regular (u, v) parameter grid and
//! triangulates the result.
//!
//! ## Layout
//!
//! A grid of `slices x stacks` cells has `(slices + 1) x (stacks + 1)`
//! vertices stored row by row:
//!
//! ```text
//! index = row * (slices + 1) + column      row = v index, column = u index
//! ```
//!
//! Column 0 and column `slices` of a periodic surface share a position but
//! are kept as separate vertices so the seam can carry texture u = 0 and
//! u = 1.

mod triangulate;

pub use triangulate::Winding;
pub(crate) use triangulate::{grid_index_count, triangulate_grid};

use crate::buffers::{check_vertex_count, VertexBuffers};
use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::grid_vertex_count;
use glam::{DVec2, DVec3};
use std::f64::consts::TAU;

/// Parameter domain of a sampled grid.
///
/// `u = u_start + column * u_step` and `v = v_start + row * v_step`.
///
/// # Example
///
/// ```rust
/// use ifs_mesh::grid::GridDomain;
/// use std::f64::consts::PI;
///
/// // Latitude/longitude grid of a sphere
/// let domain = GridDomain::periodic(32, 16, -PI / 2.0, PI);
/// assert_eq!(domain.vertex_count(), Some(33 * 17));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridDomain {
    /// Cells along u.
    pub slices: u32,
    /// Cells along v.
    pub stacks: u32,
    /// u at column 0.
    pub u_start: f64,
    /// u increment per column.
    pub u_step: f64,
    /// v at row 0.
    pub v_start: f64,
    /// v increment per row.
    pub v_step: f64,
    /// Extra rows and columns visited past `stacks` and `slices`.
    ///
    /// The vertex budget stays `(slices + 1) x (stacks + 1)`; sampling stops
    /// once it is filled, so overscan shifts which samples land in the
    /// buffer rather than enlarging it.
    pub overscan: u32,
}

impl GridDomain {
    /// Creates a domain with u over a full turn and v over `[v_start, v_start + v_span]`.
    pub fn periodic(slices: u32, stacks: u32, v_start: f64, v_span: f64) -> Self {
        Self {
            slices,
            stacks,
            u_start: 0.0,
            u_step: TAU / slices as f64,
            v_start,
            v_step: v_span / stacks as f64,
            overscan: 0,
        }
    }

    /// Replaces the u start and step.
    pub fn with_u(mut self, start: f64, step: f64) -> Self {
        self.u_start = start;
        self.u_step = step;
        self
    }

    /// Replaces the v start and step.
    pub fn with_v(mut self, start: f64, step: f64) -> Self {
        self.v_start = start;
        self.v_step = step;
        self
    }

    /// Sets the overscan.
    pub fn with_overscan(mut self, overscan: u32) -> Self {
        self.overscan = overscan;
        self
    }

    /// Number of vertices the grid occupies, or `None` on overflow.
    pub fn vertex_count(&self) -> Option<usize> {
        grid_vertex_count(self.slices, self.stacks)
    }

    /// Number of triangle indices for the grid cells.
    pub fn index_count(&self) -> usize {
        grid_index_count(self.slices, self.stacks)
    }
}

/// A grid location handed to the surface function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPoint {
    /// u index.
    pub column: u32,
    /// v index.
    pub row: u32,
    /// u parameter value.
    pub u: f64,
    /// v parameter value.
    pub v: f64,
}

impl GridPoint {
    /// Normalized parameter value `(column / slices, row / stacks)`.
    pub fn tex_coord(&self, domain: &GridDomain) -> DVec2 {
        DVec2::new(
            self.column as f64 / domain.slices as f64,
            self.row as f64 / domain.stacks as f64,
        )
    }
}

/// Position, normal and texture coordinate of one sampled vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSample {
    /// Output position.
    pub position: DVec3,
    /// Output normal; not necessarily unit length.
    pub normal: DVec3,
    /// Output texture coordinate.
    pub tex_coord: DVec2,
}

impl SurfaceSample {
    /// Creates a sample.
    pub fn new(position: DVec3, normal: DVec3, tex_coord: DVec2) -> Self {
        Self {
            position,
            normal,
            tex_coord,
        }
    }
}

/// Samples `surface` over the domain into `buffers`, row by row.
///
/// Returns the index of the first emitted vertex. At most
/// `(slices + 1) x (stacks + 1)` vertices are written.
pub(crate) fn sample_grid<F>(buffers: &mut VertexBuffers, domain: &GridDomain, mut surface: F) -> u32
where
    F: FnMut(&GridPoint) -> SurfaceSample,
{
    let first = buffers.vertex_count();
    let budget = domain.vertex_count().unwrap_or(usize::MAX);
    let columns = domain.slices.saturating_add(domain.overscan);
    let rows = domain.stacks.saturating_add(domain.overscan);
    let mut emitted = 0usize;

    'rows: for row in 0..=rows {
        let v = domain.v_start + row as f64 * domain.v_step;
        for column in 0..=columns {
            if emitted == budget {
                break 'rows;
            }
            let point = GridPoint {
                column,
                row,
                u: domain.u_start + column as f64 * domain.u_step,
                v,
            };
            let sample = surface(&point);
            buffers.push_vertex(sample.position, sample.normal, sample.tex_coord);
            emitted += 1;
        }
    }

    first
}

/// Builds a mesh from any parametric surface.
///
/// The grid is sampled with [`GridDomain`] and triangulated with the given
/// winding. Fails with [`MeshError::IndexRangeExceeded`] before allocating
/// if the grid needs more vertices than 16-bit indices can address.
///
/// # Example
///
/// ```rust
/// use glam::{DVec2, DVec3};
/// use ifs_mesh::grid::{parametric_surface, GridDomain, SurfaceSample, Winding};
///
/// // A flat 4x2 patch in the xy plane
/// let domain = GridDomain::periodic(4, 2, 0.0, 1.0).with_u(0.0, 0.25);
/// let mesh = parametric_surface(&domain, Winding::Standard, |p| {
///     SurfaceSample::new(DVec3::new(p.u, p.v, 0.0), DVec3::Z, p.tex_coord(&domain))
/// })
/// .unwrap();
/// assert_eq!(mesh.vertex_count(), 15);
/// assert_eq!(mesh.triangle_count(), 16);
/// ```
pub fn parametric_surface<F>(
    domain: &GridDomain,
    winding: Winding,
    surface: F,
) -> Result<Mesh, MeshError>
where
    F: FnMut(&GridPoint) -> SurfaceSample,
{
    surface_mesh("parametric_surface", domain, winding, surface)
}

/// Shared path for every grid-sampled shape.
pub(crate) fn surface_mesh<F>(
    shape: &'static str,
    domain: &GridDomain,
    winding: Winding,
    surface: F,
) -> Result<Mesh, MeshError>
where
    F: FnMut(&GridPoint) -> SurfaceSample,
{
    let vertex_count = check_vertex_count(shape, domain.vertex_count())?;
    let mut buffers = VertexBuffers::with_capacity(vertex_count, domain.index_count());
    let first = sample_grid(&mut buffers, domain, surface);
    triangulate_grid(&mut buffers, first, domain.slices, domain.stacks, winding);
    buffers.into_mesh(shape)
}
