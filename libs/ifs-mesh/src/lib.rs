//! # IFS Mesh
//!
//! Indexed face set generation for parametric shapes.
//! Every generator returns a [`Mesh`]: flat position, normal and texture
//! coordinate arrays plus 16-bit triangle indices, ready for GPU upload.
//!
//! ## Architecture
//!
//! ```text
//! params → grid / radial / flat builders → VertexBuffers → Mesh
//! ```
//!
//! ## Builders
//!
//! - **Grid**: samples a surface function over a (u, v) grid, then
//!   triangulates it
//! - **Radial**: disk caps and the ring-stacked cone with its tip fan
//! - **Flat**: independent planar faces with per-face normals
//!
//! ## Usage
//!
//! ```rust
//! use ifs_mesh::primitives::sphere;
//! use ifs_mesh::{Placement, SphereParams};
//!
//! let params = SphereParams::default().with_radius(2.0).with_slices(16);
//! let mesh = sphere(&params, &Placement::IDENTITY)?;
//! assert_eq!(mesh.vertex_count(), 17 * 17);
//! # Ok::<(), ifs_mesh::MeshError>(())
//! ```

pub mod catalog;
pub mod error;
pub mod flat;
pub mod grid;
pub mod mesh;
pub mod primitives;

mod buffers;
mod params;
mod placement;
mod radial;

pub use error::MeshError;
pub use mesh::Mesh;
pub use params::{ConeParams, CubeParams, CylinderParams, SphereParams, TorusParams};
pub use placement::Placement;
