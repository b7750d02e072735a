//! Spatial partitioning.

pub mod grid;

pub use grid::{CellKey, SpatialGrid};
