//! Shared simulation primitives.

pub mod geometry;

pub use geometry::Rect;
