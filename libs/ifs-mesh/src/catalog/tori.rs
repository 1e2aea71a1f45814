//! Torus variants.
//!
//! `uv_torus` is a plain torus. `torus2`, `star` and `bow` bend the torus
//! formula into decorative shapes and bake their placement into the
//! formula itself; their output is reproduced value for value.

use crate::error::MeshError;
use crate::grid::{surface_mesh, GridDomain, SurfaceSample, Winding};
use crate::mesh::Mesh;
use crate::params::TorusParams;
use crate::placement::Placement;
use crate::primitives::torus_mesh;
use config::constants::{DEFAULT_TORUS_OUTER_RADIUS, STAR_OUTER_RADIUS, STAR_OVERSCAN};
use glam::{DVec2, DVec3};
use std::f64::consts::{PI, TAU};

const UV_TORUS: Placement = Placement::translation(DVec3::new(-0.5, 0.0, 0.0));

/// Standard torus shifted to x = -0.5.
pub fn uv_torus(params: &TorusParams) -> Result<Mesh, MeshError> {
    torus_mesh("uv_torus", params, &UV_TORUS)
}

/// Torus squashed sideways and stretched along z, centred near (0, -0.7, -1).
///
/// ```text
/// x = sin u (R - r sin v / 2)
/// y = cos u (R + r cos v / 2)
/// z = 4 r cos v
/// position = (x, 2y - 0.7, z / 5 - 1)
/// normal   = (sin u cos v, cos u cos v, sin v)
/// ```
pub fn torus2(params: &TorusParams) -> Result<Mesh, MeshError> {
    let torus = params.resolve(DEFAULT_TORUS_OUTER_RADIUS)?;
    let (center, tube) = (torus.center_radius(), torus.tube_radius());
    let domain = GridDomain::periodic(torus.slices, torus.stacks, -PI, TAU);

    surface_mesh("torus2", &domain, Winding::Standard, |p| {
        let (cy, cx) = p.u.sin_cos();
        let (sin, cos) = p.v.sin_cos();
        let x = cy * (center - tube * 0.5 * sin);
        let y = cx * (center + tube * 0.5 * cos);
        let z = 4.0 * cos * tube;
        SurfaceSample::new(
            DVec3::new(x, 2.0 * y - 0.7, z * 0.2 - 1.0),
            DVec3::new(cy * cos, cx * cos, sin),
            p.tex_coord(&domain),
        )
    })
}

/// Star-like knot traced by winding the torus ten times in both directions.
///
/// Steps are `20π / slices` and `20π / stacks`. The sampler visits
/// [`STAR_OVERSCAN`] extra rows and columns, so rows are wider than the
/// nominal `slices + 1`, but only the first `(slices + 1) x (stacks + 1)`
/// samples are kept and the triangulation still assumes nominal rows.
/// The resulting interleaving is what gives the star its shape.
///
/// Default outer radius is 1.7.
pub fn star(params: &TorusParams) -> Result<Mesh, MeshError> {
    let torus = params.resolve(STAR_OUTER_RADIUS)?;
    let (center, tube) = (torus.center_radius(), torus.tube_radius());
    let domain = GridDomain::periodic(torus.slices, torus.stacks, -PI, TAU)
        .with_u(0.0, 20.0 * PI / torus.slices as f64)
        .with_v(-PI, 20.0 * PI / torus.stacks as f64)
        .with_overscan(STAR_OVERSCAN);

    surface_mesh("star", &domain, Winding::Standard, |p| {
        let (cy, cx) = p.u.sin_cos();
        let (sin, cos) = p.v.sin_cos();
        let y = cx * (center - tube * sin);
        let x = cy * (center + tube * cos);
        let z = sin * tube;
        SurfaceSample::new(
            DVec3::new(1.7 * x - 0.55, 1.5 * y + 0.5, z / 2.0 + 0.1),
            DVec3::new(cx * cos, cy * cos, sin),
            p.tex_coord(&domain),
        )
    })
}

/// Bow made from a half turn of the tube, centred near (0.39, -0.1, 0.59).
///
/// Row `j` samples `v = -π + j dv + dv / j` (row 0 takes no extra phase)
/// and column `i` samples `u = -i du / 2`, with sine and cosine of `v`
/// swapped:
///
/// ```text
/// position = (r cos u sin v + 0.39, r sin u cos v - 0.1, r sin v + 0.59)
/// normal   = (cos u cos v, sin u cos v, cos v)
/// ```
///
/// Texture coordinates are transposed to `(j / slices, i / stacks)`.
/// Triangles use [`Winding::Reversed`].
pub fn bow(params: &TorusParams) -> Result<Mesh, MeshError> {
    let torus = params.resolve(DEFAULT_TORUS_OUTER_RADIUS)?;
    let tube = torus.tube_radius();
    let (slices, stacks) = (torus.slices as f64, torus.stacks as f64);
    let dv = TAU / stacks;
    let domain = GridDomain::periodic(torus.slices, torus.stacks, -PI, TAU)
        .with_u(0.0, -PI / slices);

    surface_mesh("bow", &domain, Winding::Reversed, |p| {
        let phase = if p.row == 0 { 0.0 } else { dv / p.row as f64 };
        let (cy, cx) = p.u.sin_cos();
        let (cos, sin) = (p.v + phase).sin_cos();
        let y = cx * (tube * cos);
        let x = cy * (tube * sin);
        let z = cos * tube;
        SurfaceSample::new(
            DVec3::new(y + 0.39, x - 0.1, z + 0.59),
            DVec3::new(cx * sin, cy * sin, sin),
            DVec2::new(p.row as f64 / slices, p.column as f64 / stacks),
        )
    })
}
