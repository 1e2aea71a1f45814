//! # Mesh Errors
//!
//! Error types for mesh generation.

use thiserror::Error;

/// Errors that can occur during mesh generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// The mesh needs more vertices than 16-bit indices can address.
    #[error("Index range exceeded: {count} vertices (max: {max})")]
    IndexRangeExceeded { count: usize, max: usize },

    /// A supplied parameter cannot produce a mesh.
    #[error("Invalid parameter `{name}`: {message}")]
    InvalidParameter { name: &'static str, message: String },
}

impl MeshError {
    /// Creates an index range error.
    pub fn index_range(count: usize, max: usize) -> Self {
        Self::IndexRangeExceeded { count, max }
    }

    /// Creates an invalid parameter error.
    pub fn invalid_parameter(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            message: message.into(),
        }
    }
}
