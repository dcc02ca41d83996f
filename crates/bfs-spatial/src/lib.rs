//! Dense spatial data structures for wavefront heuristics.
//!
//! This crate provides the grid layer the heuristic crates are built on:
//!
//! - [`VoxelCoord`] - Integer cell coordinates
//! - [`GridDims`] and [`GridBounds`] - Grid extents and inclusive boxes
//! - [`DenseGrid`] - One value per cell in a fixed box, Z-Y-X storage order
//! - [`GridFrame`] - World ↔ grid mapping
//! - [`ClearanceGrid`] - Read-only distance-to-obstacle field supplied by the
//!   environment, with [`DenseClearanceGrid`] as an in-memory implementation
//!
//! # Layer 0 Crate
//!
//! No planner or framework dependencies; only `nalgebra` for world points.
//!
//! # Coordinate Systems
//!
//! World coordinates are continuous `f64` values. Grid coordinates are
//! discrete `i32` values; a grid of size `nx × ny × nz` covers
//! `0..nx`, `0..ny`, `0..nz`. Points outside the grid still map to
//! coordinates, which then fail [`GridDims::contains`].
//!
//! # Example
//!
//! ```
//! use bfs_spatial::{ClearanceGrid, DenseClearanceGrid, GridDims, GridFrame, VoxelCoord};
//! use nalgebra::Point3;
//!
//! let dims = GridDims::new(10, 10, 10).unwrap();
//! let frame = GridFrame::with_resolution(0.1).unwrap();
//! let grid = DenseClearanceGrid::uniform(dims, frame, 0.5);
//!
//! let cell = grid.world_to_grid(Point3::new(0.55, 0.55, 0.55));
//! assert_eq!(cell, VoxelCoord::new(5, 5, 5));
//! assert!(grid.dims().contains(cell));
//! assert_eq!(grid.clearance(cell), 0.5);
//! ```
//!
//! # Feature Flags
//!
//! - `serde`: Enables serialization/deserialization for all types

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod clearance;
mod error;
mod frame;
mod grid;
mod voxel;

pub use clearance::{ClearanceGrid, DenseClearanceGrid};
pub use error::SpatialError;
pub use frame::GridFrame;
pub use grid::{DenseGrid, GridBounds, GridBoundsIter, GridDims};
pub use voxel::VoxelCoord;

// Re-export nalgebra types for convenience
pub use nalgebra::Point3;
