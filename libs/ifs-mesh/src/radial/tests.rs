//! Tests for disk caps and the cone fan.

use super::*;
use approx::assert_relative_eq;
use config::constants::CONE_RING_FRACTIONS;

fn cap_mesh(facing: CapFacing) -> crate::Mesh {
    let mut buffers = VertexBuffers::new();
    disk_cap(&mut buffers, &Placement::IDENTITY, 1.0, 0.5, 8, facing);
    buffers.into_mesh("cap").unwrap()
}

fn cone_mesh(slices: u32) -> (crate::Mesh, u32) {
    let mut buffers = VertexBuffers::new();
    let tip = cone_lateral(
        &mut buffers,
        &Placement::IDENTITY,
        0.5,
        1.0,
        slices,
        &CONE_RING_FRACTIONS,
    );
    (buffers.into_mesh("cone").unwrap(), tip)
}

#[test]
fn test_cap_counts() {
    let mesh = cap_mesh(CapFacing::Up);
    assert_eq!(mesh.vertex_count(), cap_vertex_count(8));
    assert_eq!(mesh.triangle_count(), 8);
    assert!(mesh.validate());
}

#[test]
fn test_cap_fans_from_center() {
    let mesh = cap_mesh(CapFacing::Down);
    for (i, [a, b, c]) in mesh.triangles().enumerate() {
        assert_eq!(a, 0);
        assert_eq!(b as usize, i + 1);
        assert_eq!(c as usize, i + 2);
    }
}

#[test]
fn test_cap_winding_matches_normal() {
    for facing in [CapFacing::Up, CapFacing::Down] {
        let mesh = cap_mesh(facing);
        for [a, b, c] in mesh.triangles() {
            let p0 = mesh.position(a as usize);
            let face = (mesh.position(b as usize) - p0).cross(mesh.position(c as usize) - p0);
            let normal = mesh.normal(a as usize);
            assert!(face.dot(normal) > 0.0, "{facing:?} cap winding");
        }
    }
}

#[test]
fn test_cap_normals_are_axis_aligned() {
    let up = cap_mesh(CapFacing::Up);
    let down = cap_mesh(CapFacing::Down);
    for i in 0..up.vertex_count() {
        assert_eq!(up.normal(i).to_array(), [0.0, 0.0, 1.0]);
        assert_eq!(down.normal(i).to_array(), [0.0, 0.0, -1.0]);
    }
}

#[test]
fn test_cap_tex_coords_stay_in_unit_square() {
    let mesh = cap_mesh(CapFacing::Down);
    assert_eq!(mesh.tex_coord(0).to_array(), [0.5, 0.5]);
    // First perimeter vertex sits at u = 2π, mirrored in texture u
    assert_relative_eq!(mesh.tex_coord(1).x, 0.0, epsilon = 1e-6);
    for i in 0..mesh.vertex_count() {
        let t = mesh.tex_coord(i);
        assert!((0.0..=1.0).contains(&t.x) && (0.0..=1.0).contains(&t.y));
    }
}

#[test]
fn test_cone_counts() {
    let (mesh, tip) = cone_mesh(12);
    let rings = CONE_RING_FRACTIONS.len();
    assert_eq!(
        mesh.vertex_count(),
        cone_vertex_count(12, rings).unwrap()
    );
    assert_eq!(tip as usize, rings * 13);
    assert_eq!(mesh.triangle_count(), (rings - 1) * 12 * 2 + 12);
}

#[test]
fn test_cone_ring_heights_and_radii() {
    let (mesh, _) = cone_mesh(8);
    for (j, fraction) in CONE_RING_FRACTIONS.iter().enumerate() {
        let p = mesh.position(j * 9);
        assert_relative_eq!(p.z, (-0.5 + fraction) as f32, epsilon = 1e-6);
        assert_relative_eq!(p.truncate().length(), (0.5 * (1.0 - fraction)) as f32, epsilon = 1e-6);
    }
}

#[test]
fn test_cone_odd_rings_offset_half_step() {
    let (mesh, _) = cone_mesh(8);
    assert_eq!(mesh.tex_coord(0).x, 0.0);
    assert_relative_eq!(mesh.tex_coord(9).x, 0.5 / 8.0);
    assert_eq!(mesh.tex_coord(18).x, 0.0);
    assert_relative_eq!(mesh.tex_coord(27).x, 0.5 / 8.0);
}

#[test]
fn test_cone_tip_vertices_share_position_not_normal() {
    let (mesh, tip) = cone_mesh(8);
    let apex = mesh.position(tip as usize);
    assert_eq!(apex.to_array(), [0.0, 0.0, 0.5]);
    for i in 1..8 {
        let index = tip as usize + i;
        assert_eq!(mesh.position(index), apex);
        assert_ne!(mesh.normal(index), mesh.normal(index - 1));
    }
}

#[test]
fn test_cone_fan_uses_one_tip_vertex_per_triangle() {
    let (mesh, tip) = cone_mesh(8);
    let fan_start = mesh.triangle_count() - 8;
    let mut seen = Vec::new();
    for t in fan_start..mesh.triangle_count() {
        let tips: Vec<u16> = mesh
            .triangle(t)
            .into_iter()
            .filter(|&i| i as u32 >= tip)
            .collect();
        assert_eq!(tips.len(), 1);
        assert!(!seen.contains(&tips[0]));
        seen.push(tips[0]);
    }
}

#[test]
fn test_cone_normals_slope_outward() {
    let (mesh, _) = cone_mesh(8);
    let (n1, n2) = cone_normal_terms(0.5, 1.0);
    assert_relative_eq!(n1 * n1 + n2 * n2, 1.0);
    let normal = mesh.normal(0);
    assert_relative_eq!(normal.x, n1 as f32, epsilon = 1e-6);
    assert_relative_eq!(normal.z, n2 as f32, epsilon = 1e-6);
}

#[test]
fn test_collapsed_cone_normals_are_finite() {
    assert_eq!(cone_normal_terms(0.0, 0.0), (0.0, 1.0));
    let mut buffers = VertexBuffers::new();
    cone_lateral(&mut buffers, &Placement::IDENTITY, 0.0, 0.0, 4, &CONE_RING_FRACTIONS);
    let mesh = buffers.into_mesh("cone").unwrap();
    assert!(mesh.vertex_normals().iter().all(|n| n.is_finite()));
}

#[test]
fn test_placement_moves_cap() {
    let mut buffers = VertexBuffers::new();
    let placement = Placement::translation(DVec3::new(1.0, 2.0, 0.0));
    disk_cap(&mut buffers, &placement, 1.0, -1.0, 4, CapFacing::Down);
    let mesh = buffers.into_mesh("cap").unwrap();
    assert_eq!(mesh.position(0).to_array(), [1.0, 2.0, -1.0]);
}
