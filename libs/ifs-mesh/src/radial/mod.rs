//! # Radial Fans
//!
//! Disk caps, the cone's ring-stacked lateral surface and its tip fan.
//!
//! ## Cone Rings
//!
//! ```text
//! tip         * * * *          slices vertices, one normal each
//!            /\ /\ /\ /\
//! ring n    o--o--o--o--o      slices + 1 vertices (seam duplicated)
//!           |\ |\ |\ |\ |
//! ring 0    o--o--o--o--o      base
//! ```
//!
//! Ring spacing follows a fixed list of height fractions that clusters rings
//! near the tip. Odd rings are rotated by half a slice.

use crate::buffers::VertexBuffers;
use crate::grid::{sample_grid, triangulate_grid, GridDomain, SurfaceSample, Winding};
use crate::placement::Placement;
use config::constants::approx_zero;
use glam::{DVec2, DVec3};
use std::f64::consts::TAU;

/// Which way a disk cap faces along the z axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CapFacing {
    /// Normal (0, 0, 1); perimeter walked counter-clockwise from above.
    Up,
    /// Normal (0, 0, -1); perimeter walked clockwise from above.
    Down,
}

impl CapFacing {
    fn normal(self) -> DVec3 {
        match self {
            CapFacing::Up => DVec3::Z,
            CapFacing::Down => DVec3::NEG_Z,
        }
    }
}

/// Vertices added by one disk cap.
pub(crate) fn cap_vertex_count(slices: u32) -> usize {
    slices as usize + 2
}

/// Vertices added by the cone lateral surface and tip.
pub(crate) fn cone_vertex_count(slices: u32, rings: usize) -> Option<usize> {
    (slices as usize + 1)
        .checked_mul(rings)?
        .checked_add(slices as usize)
}

/// Emits a disk of `radius` at height `z`: a centre vertex, `slices + 1`
/// perimeter vertices and `slices` triangles fanning from the centre.
pub(crate) fn disk_cap(
    buffers: &mut VertexBuffers,
    placement: &Placement,
    radius: f64,
    z: f64,
    slices: u32,
    facing: CapFacing,
) {
    let normal = facing.normal();
    let du = TAU / slices as f64;
    let center = buffers.push_vertex(
        placement.apply(DVec3::new(0.0, 0.0, z)),
        normal,
        DVec2::splat(0.5),
    );

    for i in 0..=slices {
        let (u, tex_sign) = match facing {
            CapFacing::Up => (i as f64 * du, 1.0),
            CapFacing::Down => (TAU - i as f64 * du, -1.0),
        };
        let (s, c) = u.sin_cos();
        buffers.push_vertex(
            placement.apply(DVec3::new(c * radius, s * radius, z)),
            normal,
            DVec2::new(0.5 + tex_sign * 0.5 * c, 0.5 + 0.5 * s),
        );
    }

    for i in 0..slices {
        buffers.push_triangle(center, center + i + 1, center + i + 2);
    }
}

/// Slope terms of the cone's lateral normal `(cos u * n1, sin u * n1, n2)`.
///
/// A cone collapsed to a point gets a straight-up normal.
fn cone_normal_terms(radius: f64, height: f64) -> (f64, f64) {
    let length = (height * height + radius * radius).sqrt();
    if approx_zero(length) {
        return (0.0, 1.0);
    }
    (height / length, radius / length)
}

/// Emits the cone's lateral rings and tip fan.
///
/// Ring `j` sits at `z = -height/2 + fractions[j] * height` with radius
/// `radius * (1 - fractions[j])`. Returns the index of the first tip vertex.
pub(crate) fn cone_lateral(
    buffers: &mut VertexBuffers,
    placement: &Placement,
    radius: f64,
    height: f64,
    slices: u32,
    fractions: &[f64],
) -> u32 {
    let (n1, n2) = cone_normal_terms(radius, height);
    let du = TAU / slices as f64;
    let rings = u32::try_from(fractions.len().saturating_sub(1)).unwrap_or(0);
    let domain = GridDomain::periodic(slices, rings, 0.0, 1.0);

    let first = sample_grid(buffers, &domain, |p| {
        let fraction = fractions[p.row as usize];
        let u_offset = if p.row % 2 == 0 { 0.0 } else { 0.5 };
        let u = (p.column as f64 + u_offset) * du;
        let (s, c) = u.sin_cos();
        let ring_radius = radius * (1.0 - fraction);
        SurfaceSample::new(
            placement.apply(DVec3::new(
                c * ring_radius,
                s * ring_radius,
                -height / 2.0 + fraction * height,
            )),
            DVec3::new(c * n1, s * n1, n2),
            DVec2::new((p.column as f64 + u_offset) / slices as f64, fraction),
        )
    });
    triangulate_grid(buffers, first, slices, rings, Winding::Standard);

    let last_ring = first + rings * (slices + 1);
    tip_fan(buffers, placement, last_ring, height, n1, n2, slices)
}

/// Emits `slices` tip vertices sharing the apex position but each with its
/// own normal, and one triangle per slice joining them to the last ring.
fn tip_fan(
    buffers: &mut VertexBuffers,
    placement: &Placement,
    last_ring: u32,
    height: f64,
    n1: f64,
    n2: f64,
    slices: u32,
) -> u32 {
    let du = TAU / slices as f64;
    let apex = placement.apply(DVec3::new(0.0, 0.0, height / 2.0));
    let tip = buffers.vertex_count();

    for i in 0..slices {
        let (s, c) = ((i as f64 + 0.5) * du).sin_cos();
        buffers.push_vertex(
            apex,
            DVec3::new(c * n1, s * n1, n2),
            DVec2::new((i as f64 + 0.5) / slices as f64, 1.0),
        );
    }

    for i in 0..slices {
        buffers.push_triangle(last_ring + i, last_ring + i + 1, tip + i);
    }

    tip
}

#[cfg(test)]
mod tests;
