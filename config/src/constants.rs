//! # Configuration Constants
//!
//! Centralized constants for the IFS shape generators. All default shape
//! parameters, grid resolutions and buffer limits are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Resolution**: Default grid subdivisions (slices, stacks)
//! - **Shape Defaults**: Default radii and sizes per shape
//! - **Limits**: Index range bounds for GPU buffers

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Vertex data is stored as `f32`, so comparisons against values read back
/// from a mesh should use this tolerance rather than exact equality.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-7));
/// ```
pub const EPSILON: f64 = 1e-6;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Default number of slices (subdivisions around the shape axis).
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_SLICES;
///
/// let user_slices: Option<u32> = None;
/// assert_eq!(user_slices.unwrap_or(DEFAULT_SLICES), 32);
/// ```
pub const DEFAULT_SLICES: u32 = 32;

/// Default number of stacks (subdivisions along the shape profile).
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_STACKS;
///
/// let user_stacks: Option<u32> = None;
/// assert_eq!(user_stacks.unwrap_or(DEFAULT_STACKS), 16);
/// ```
pub const DEFAULT_STACKS: u32 = 16;

/// Extra rows and columns visited by the star generator beyond its nominal
/// slices and stacks.
pub const STAR_OVERSCAN: u32 = 10;

// =============================================================================
// SHAPE DEFAULTS
// =============================================================================

/// Default sphere radius.
pub const DEFAULT_SPHERE_RADIUS: f64 = 0.5;

/// Default torus outer radius (centre to the outside of the tube).
pub const DEFAULT_TORUS_OUTER_RADIUS: f64 = 0.5;

/// Default ratio of inner radius to outer radius for tori.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_TORUS_OUTER_RADIUS, TORUS_INNER_RADIUS_RATIO};
///
/// let inner = DEFAULT_TORUS_OUTER_RADIUS * TORUS_INNER_RADIUS_RATIO;
/// assert!((inner - 0.5 / 3.0).abs() < 1e-12);
/// ```
pub const TORUS_INNER_RADIUS_RATIO: f64 = 1.0 / 3.0;

/// Default outer radius of the star ornament.
pub const STAR_OUTER_RADIUS: f64 = 1.7;

/// Default radius of the origin-centred cylinder.
pub const DEFAULT_CYLINDER_RADIUS: f64 = 0.5;

/// Default radius of the first catalog cylinder.
pub const UV_CYLINDER_RADIUS: f64 = 0.09;

/// Default radius of the second catalog cylinder.
pub const UV_CYLINDER2_RADIUS: f64 = 0.1;

/// Default cylinder height as a multiple of its radius.
pub const CYLINDER_HEIGHT_RATIO: f64 = 2.0;

/// Height-to-radius ratio of the second catalog cylinder.
pub const UV_CYLINDER2_HEIGHT_RATIO: f64 = 3.0;

/// Default cone base radius.
pub const DEFAULT_CONE_RADIUS: f64 = 0.5 / 3.3;

/// Default cone height as a multiple of its radius.
pub const CONE_HEIGHT_RATIO: f64 = 2.0;

/// Default cube side length.
pub const DEFAULT_CUBE_SIDE: f64 = 1.0;

/// Fractions of the cone height at which lateral rings are placed.
///
/// Rings cluster towards the tip, where the profile needs denser sampling.
/// Ring `j` has radius `radius * (1 - CONE_RING_FRACTIONS[j])`.
///
/// # Example
///
/// ```rust
/// use config::constants::CONE_RING_FRACTIONS;
///
/// assert_eq!(CONE_RING_FRACTIONS[0], 0.0);
/// assert!(CONE_RING_FRACTIONS.windows(2).all(|w| w[0] < w[1]));
/// ```
pub const CONE_RING_FRACTIONS: [f64; 5] = [0.0, 0.5, 0.75, 0.875, 0.9375];

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a single mesh.
///
/// Indices are 16-bit, so a mesh may not hold more vertices than `u16`
/// can address.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_VERTICES;
///
/// let vertex_count = 33 * 17;
/// assert!(vertex_count <= MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = u16::MAX as usize;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Number of vertices in a `(slices + 1) x (stacks + 1)` parameter grid.
///
/// Returns `None` if the count does not fit in `usize`.
///
/// # Example
///
/// ```rust
/// use config::constants::grid_vertex_count;
///
/// assert_eq!(grid_vertex_count(32, 16), Some(33 * 17));
/// ```
pub fn grid_vertex_count(slices: u32, stacks: u32) -> Option<usize> {
    let columns = usize::try_from(slices).ok()?.checked_add(1)?;
    let rows = usize::try_from(stacks).ok()?.checked_add(1)?;
    columns.checked_mul(rows)
}

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-7));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-7));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
