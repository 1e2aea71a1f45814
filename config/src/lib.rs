//! # Config Crate
//!
//! Centralized configuration constants for the IFS shape generators.
//! Default radii, default grid resolutions, the cone ring profile and the
//! 16-bit index limit are defined here so every crate agrees on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{grid_vertex_count, DEFAULT_SLICES, DEFAULT_STACKS, MAX_VERTICES};
//!
//! // A default sphere fits comfortably in 16-bit indices
//! let count = grid_vertex_count(DEFAULT_SLICES, DEFAULT_STACKS).unwrap();
//! assert_eq!(count, 561);
//! assert!(count <= MAX_VERTICES);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Legacy Compatible**: Defaults match the JavaScript shape library

pub mod constants;

#[cfg(test)]
mod tests;
