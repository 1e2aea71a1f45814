//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_epsilon_below_f32_noise_floor() {
    // Coordinates stay well below 10 units, where f32 spacing is ~1e-6
    assert!(EPSILON <= 1e-5);
}

// =============================================================================
// RESOLUTION TESTS
// =============================================================================

#[test]
fn test_default_resolution() {
    assert_eq!(DEFAULT_SLICES, 32);
    assert_eq!(DEFAULT_STACKS, 16);
}

#[test]
fn test_default_grid_fits_index_range() {
    let count = grid_vertex_count(DEFAULT_SLICES, DEFAULT_STACKS).unwrap();
    assert_eq!(count, 561);
    assert!(count <= MAX_VERTICES);
}

#[test]
fn test_star_overscan_grid_fits_index_range() {
    let count =
        grid_vertex_count(DEFAULT_SLICES + STAR_OVERSCAN, DEFAULT_STACKS + STAR_OVERSCAN).unwrap();
    assert!(count <= MAX_VERTICES);
}

// =============================================================================
// SHAPE DEFAULT TESTS
// =============================================================================

#[test]
fn test_torus_inner_ratio() {
    assert!(approx_equal(TORUS_INNER_RADIUS_RATIO * 3.0, 1.0));
}

#[test]
fn test_cone_fractions_cluster_towards_tip() {
    assert_eq!(CONE_RING_FRACTIONS[0], 0.0);
    // Each gap halves the previous one
    for w in CONE_RING_FRACTIONS.windows(3) {
        let first = w[1] - w[0];
        let second = w[2] - w[1];
        assert!(approx_equal(first, 2.0 * second));
    }
    assert!(*CONE_RING_FRACTIONS.last().unwrap() < 1.0);
}

#[test]
fn test_default_radii_positive() {
    for radius in [
        DEFAULT_SPHERE_RADIUS,
        DEFAULT_TORUS_OUTER_RADIUS,
        STAR_OUTER_RADIUS,
        DEFAULT_CYLINDER_RADIUS,
        UV_CYLINDER_RADIUS,
        UV_CYLINDER2_RADIUS,
        DEFAULT_CONE_RADIUS,
        DEFAULT_CUBE_SIDE,
    ] {
        assert!(radius > 0.0);
    }
}

// =============================================================================
// LIMIT TESTS
// =============================================================================

#[test]
fn test_max_vertices_matches_u16() {
    assert_eq!(MAX_VERTICES, 65535);
}

#[test]
fn test_grid_vertex_count_overflow() {
    assert_eq!(grid_vertex_count(u32::MAX, u32::MAX), None);
    assert_eq!(grid_vertex_count(0, 0), Some(1));
    assert_eq!(grid_vertex_count(1, 1), Some(4));
}

// =============================================================================
// HELPER FUNCTION TESTS
// =============================================================================

#[test]
fn test_approx_equal() {
    assert!(approx_equal(1.0, 1.0));
    assert!(approx_equal(1.0, 1.0 + 1e-7));
    assert!(!approx_equal(1.0, 1.001));
}

#[test]
fn test_approx_zero() {
    assert!(approx_zero(0.0));
    assert!(approx_zero(1e-7));
    assert!(approx_zero(-1e-7));
    assert!(!approx_zero(0.001));
}
