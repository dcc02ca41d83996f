//! Core types for grid-backed search heuristics.
//!
//! This crate provides the vocabulary shared between a heuristic and the
//! search engine that queries it:
//!
//! - **Distances and costs**: [`Distance`] (tagged wavefront value), [`Cost`],
//!   [`INFINITE_COST`], [`WALL_METRIC_STEPS`]
//! - **Configuration**: [`BfsHeuristicConfig`], [`Connectivity`]
//! - **Goals**: [`GoalPoint`]
//! - **Collaborators**: [`StateId`], [`StateLookup`], [`GoalTest`],
//!   [`PointProjection`], [`ProjectedLookup`]
//! - **Interface**: [`RobotHeuristic`], [`Capability`]
//! - **Errors**: [`HeuristicError`]
//!
//! # Example
//!
//! ```
//! use heuristic_types::{BfsHeuristicConfig, Connectivity, Distance, scale_steps};
//!
//! let config = BfsHeuristicConfig::default()
//!     .with_cost_per_cell(10)
//!     .with_connectivity(Connectivity::Six);
//!
//! let d = Distance::Steps(4);
//! assert_eq!(scale_steps(d.steps().unwrap(), config.cost_per_cell()), 40);
//! ```
//!
//! # Integration with bfs-spatial
//!
//! Cells are [`bfs_spatial::VoxelCoord`]s and world points are
//! [`nalgebra::Point3`]s mapped through a [`bfs_spatial::ClearanceGrid`].
//!
//! # Feature Flags
//!
//! - `serde`: Enables serialization/deserialization for all data types

#![doc(html_root_url = "https://docs.rs/heuristic-types/0.7.0")]
#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod capability;
pub mod config;
pub mod cost;
pub mod error;
pub mod goal;
pub mod state;

// Re-export main types at crate root for convenience
pub use capability::{Capability, RobotHeuristic, ZeroHeuristic};
pub use config::{BfsHeuristicConfig, Connectivity};
pub use cost::{Cost, Distance, INFINITE_COST, WALL_METRIC_STEPS, scale_steps};
pub use error::HeuristicError;
pub use goal::GoalPoint;
pub use state::{GoalTest, PointProjection, ProjectedLookup, StateId, StateLookup};
