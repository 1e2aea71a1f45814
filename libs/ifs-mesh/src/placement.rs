//! # Placement
//!
//! Scale and translation baked directly into generated vertex positions.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Uniform scale followed by a translation.
///
/// Placements are applied to every position a builder emits:
/// `position = local * scale + offset`.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use ifs_mesh::Placement;
///
/// let placement = Placement::new(0.5, DVec3::new(1.0, 0.0, 0.0));
/// assert_eq!(placement.apply(DVec3::new(2.0, 2.0, 2.0)), DVec3::new(2.0, 1.0, 1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Uniform scale factor.
    pub scale: f64,
    /// Translation added after scaling.
    pub offset: DVec3,
}

impl Default for Placement {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Placement {
    /// No scaling, no translation.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        offset: DVec3::ZERO,
    };

    /// Creates a placement from a scale and an offset.
    pub const fn new(scale: f64, offset: DVec3) -> Self {
        Self { scale, offset }
    }

    /// Creates a pure translation.
    pub const fn translation(offset: DVec3) -> Self {
        Self { scale: 1.0, offset }
    }

    /// Maps a local position into output coordinates.
    #[inline]
    pub fn apply(&self, local: DVec3) -> DVec3 {
        local * self.scale + self.offset
    }
}
