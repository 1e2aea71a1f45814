//! # Primitive Generators
//!
//! General-purpose shapes: sphere, torus, cylinder, cone, cube and pyramid.
//! Each takes its parameter record and a [`Placement`](crate::Placement)
//! and returns a complete [`Mesh`](crate::Mesh).
//!
//! The fixed decorative variants in [`catalog`](crate::catalog) are built
//! on these.

mod cone;
mod cube;
mod cylinder;
mod pyramid;
mod sphere;
mod torus;

pub use cone::cone;
pub use cube::cube;
pub use cylinder::cylinder;
pub use pyramid::pyramid;
pub use sphere::sphere;
pub use torus::torus;

pub(crate) use cone::cone_mesh;
pub(crate) use cube::cube_mesh;
pub(crate) use cylinder::cylinder_mesh;
pub(crate) use pyramid::pyramid_mesh;
pub(crate) use sphere::sphere_mesh;
pub(crate) use torus::torus_mesh;
