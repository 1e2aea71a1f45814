//! # Shape Catalog
//!
//! The named decorative shapes of the demo scene. Each generator fills in
//! its own defaults and bakes a fixed placement into the vertex positions,
//! so the meshes can be drawn together without further transforms.
//!
//! | Shape | Placement |
//! |-------|-----------|
//! | `uv_sphere` | scale 1/4, at (-1, -1, -1) |
//! | `uv_sphere2` | scale 1/4, at (0, -1.6, -1.4) |
//! | `uv_sphere3` | scale 1/4, at (-0.78, -0.2, 0.1) |
//! | `uv_torus` | at (-0.5, 0, 0) |
//! | `torus2`, `star`, `bow` | inside the formula |
//! | `uv_cylinder` | at (r, 7r, 0) |
//! | `uv_cylinder2` | at (-7r, -10r, 0) |
//! | `uv_cone` | origin |
//! | `cube` | scale 1/8, at (1.2, 1.2, 1.2) |
//! | `pyramid` | at (0.8, 0.8, 0.8) |

mod solids;
mod spheres;
mod tori;

pub use solids::{cube, pyramid, uv_cone, uv_cylinder, uv_cylinder2};
pub use spheres::{uv_sphere, uv_sphere2, uv_sphere3};
pub use tori::{bow, star, torus2, uv_torus};

/// Names of every catalog generator, in scene order.
pub const NAMES: [&str; 12] = [
    "uv_sphere",
    "uv_sphere2",
    "uv_sphere3",
    "uv_torus",
    "torus2",
    "star",
    "bow",
    "uv_cylinder",
    "uv_cylinder2",
    "uv_cone",
    "cube",
    "pyramid",
];
