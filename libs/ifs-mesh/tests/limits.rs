//! Resolution limits and parameter rejection.

use config::constants::MAX_VERTICES;
use ifs_mesh::catalog;
use ifs_mesh::grid::{parametric_surface, GridDomain, SurfaceSample, Winding};
use ifs_mesh::{ConeParams, CubeParams, CylinderParams, MeshError, SphereParams, TorusParams};

fn is_index_range(result: Result<ifs_mesh::Mesh, MeshError>) -> bool {
    matches!(result, Err(MeshError::IndexRangeExceeded { .. }))
}

#[test]
fn test_largest_addressable_sphere() {
    // 257 x 255 = 65535 vertices
    let params = SphereParams::default().with_slices(256).with_stacks(254);
    let mesh = catalog::uv_sphere(&params).unwrap();
    assert_eq!(mesh.vertex_count(), MAX_VERTICES);
    assert!(mesh.validate());
}

#[test]
fn test_oversized_grids_rejected() {
    let sphere = SphereParams::default().with_slices(300).with_stacks(300);
    let torus = TorusParams::default().with_slices(300).with_stacks(300);
    assert!(is_index_range(catalog::uv_sphere(&sphere)));
    assert!(is_index_range(catalog::uv_torus(&torus)));
    assert!(is_index_range(catalog::torus2(&torus)));
    assert!(is_index_range(catalog::star(&torus)));
    assert!(is_index_range(catalog::bow(&torus)));
}

#[test]
fn test_oversized_radial_shapes_rejected() {
    // Open tube: 2 x (slices + 1) vertices
    let cylinder = CylinderParams::default().with_slices(40_000);
    let cone = ConeParams::default().with_slices(20_000);
    assert!(is_index_range(catalog::uv_cylinder(&cylinder)));
    assert!(is_index_range(catalog::uv_cone(&cone)));
}

#[test]
fn test_extreme_resolution_does_not_overflow() {
    let sphere = SphereParams::default().with_slices(u32::MAX).with_stacks(u32::MAX);
    assert!(is_index_range(catalog::uv_sphere(&sphere)));

    let domain = GridDomain::periodic(u32::MAX, u32::MAX, 0.0, 1.0);
    let result = parametric_surface(&domain, Winding::Standard, |p| {
        SurfaceSample::new(glam::DVec3::ZERO, glam::DVec3::Z, p.tex_coord(&domain))
    });
    assert!(is_index_range(result));
}

#[test]
fn test_error_reports_requested_count() {
    let params = SphereParams::default().with_slices(300).with_stacks(300);
    assert_eq!(
        catalog::uv_sphere(&params),
        Err(MeshError::index_range(301 * 301, MAX_VERTICES))
    );
}

#[test]
fn test_zero_resolution_rejected() {
    let result = catalog::uv_sphere(&SphereParams::default().with_stacks(0));
    assert!(matches!(
        result,
        Err(MeshError::InvalidParameter { name: "stacks", .. })
    ));

    let result = catalog::star(&TorusParams::default().with_slices(0));
    assert!(matches!(
        result,
        Err(MeshError::InvalidParameter { name: "slices", .. })
    ));
}

#[test]
fn test_non_finite_lengths_rejected() {
    assert!(matches!(
        catalog::uv_torus(&TorusParams::default().with_outer_radius(f64::NAN)),
        Err(MeshError::InvalidParameter { name: "outer_radius", .. })
    ));
    assert!(matches!(
        catalog::uv_cylinder(&CylinderParams::default().with_height(f64::INFINITY)),
        Err(MeshError::InvalidParameter { name: "height", .. })
    ));
    assert!(matches!(
        catalog::cube(&CubeParams::default().with_side(f64::NAN)),
        Err(MeshError::InvalidParameter { name: "side", .. })
    ));
}
