//! Affine transforms applied per draw call.
//!
//! A [`GeometryMatrix`] moves destination vertices, a [`ColorMatrix`] maps
//! RGBA values. Both are plain values: a draw call copies them and nothing
//! is retained afterwards.

mod color;
mod geometry;

pub use color::ColorMatrix;
pub use geometry::GeometryMatrix;
