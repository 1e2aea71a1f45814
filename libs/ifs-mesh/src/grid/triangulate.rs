//! # Grid Triangulation
//!
//! Connects each grid cell into two triangles.

use crate::buffers::VertexBuffers;

/// Triangle winding used for grid cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Winding {
    /// Counter-clockwise seen from the side the (∂u × ∂v) normal points to.
    ///
    /// Cell (row j, column i) emits `(r1+i, r2+i+1, r2+i)` and
    /// `(r1+i, r1+i+1, r2+i+1)` with `r1 = j(slices+1)`, `r2 = r1 + slices + 1`.
    #[default]
    Standard,
    /// Opposite winding, visiting one extra column per row.
    ///
    /// Cell (row j, column i) emits `(r2+i, r1+i+1, r1+i)` and
    /// `(r2+i, r2+i+1, r1+i+1)` for `i` in `0..=slices`. The extra column
    /// wraps onto the next row. Output is cut at the standard index count,
    /// so the final `stacks` cells are never emitted.
    Reversed,
}

/// Number of indices for a `slices x stacks` grid (6 per cell).
pub(crate) fn grid_index_count(slices: u32, stacks: u32) -> usize {
    (slices as usize)
        .saturating_mul(stacks as usize)
        .saturating_mul(6)
}

/// Emits triangles for a grid whose first vertex is `first`.
///
/// The seam column is never a cell of its own under [`Winding::Standard`]:
/// a row has `slices` cells even though it has `slices + 1` vertices.
pub(crate) fn triangulate_grid(
    buffers: &mut VertexBuffers,
    first: u32,
    slices: u32,
    stacks: u32,
    winding: Winding,
) {
    let stride = slices + 1;

    match winding {
        Winding::Standard => {
            for j in 0..stacks {
                let row1 = first + j * stride;
                let row2 = row1 + stride;
                for i in 0..slices {
                    buffers.push_triangle(row1 + i, row2 + i + 1, row2 + i);
                    buffers.push_triangle(row1 + i, row1 + i + 1, row2 + i + 1);
                }
            }
        }
        Winding::Reversed => {
            let budget = buffers.index_count() + grid_index_count(slices, stacks);
            'rows: for j in 0..stacks {
                let row1 = first + j * stride;
                let row2 = row1 + stride;
                for i in 0..=slices {
                    if buffers.index_count() >= budget {
                        break 'rows;
                    }
                    buffers.push_triangle(row2 + i, row1 + i + 1, row1 + i);
                    buffers.push_triangle(row2 + i, row2 + i + 1, row1 + i + 1);
                }
            }
        }
    }
}
