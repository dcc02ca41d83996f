//! Wavefront (breadth-first) distance-to-goal heuristic for 3D search.
//!
//! This crate turns a clearance grid into a cost-to-goal estimate that a
//! graph search can query in constant time.
//!
//! # Overview
//!
//! - **Voxel field** ([`VoxelField`]): cells whose clearance is at most the
//!   planning body's radius become walls
//! - **Wavefront** ([`WavefrontEngine`]): one breadth-first sweep from the
//!   goal cell(s) stores the step count of every reachable cell
//! - **Adapter** ([`BfsHeuristic`]): resolves goals and search states and
//!   answers the [`RobotHeuristic`] queries
//! - **Diagnostics** ([`diagnostics`]): wall clouds and distance markers for
//!   an injected [`DiagnosticsSink`]
//!
//! # Quick Start
//!
//! ```
//! use heuristic_bfs::{BfsHeuristic, RobotHeuristic};
//! use heuristic_types::{BfsHeuristicConfig, Connectivity, GoalPoint, StateId};
//! use bfs_spatial::{DenseClearanceGrid, GridDims, GridFrame, VoxelCoord};
//! use hashbrown::HashMap;
//!
//! // 10 cm cells; everything within 5 cm of the floor (z == 0) is blocked.
//! let grid = DenseClearanceGrid::from_fn(
//!     GridDims::new(20, 20, 10).unwrap(),
//!     GridFrame::with_resolution(0.1).unwrap(),
//!     |c| 0.1 * f64::from(c.z),
//! );
//!
//! let mut states = HashMap::new();
//! states.insert(StateId(0), VoxelCoord::new(0, 0, 1));
//! states.insert(StateId(1), VoxelCoord::new(5, 0, 0));
//!
//! let config = BfsHeuristicConfig::default()
//!     .with_clearance_radius(0.05)
//!     .with_cost_per_cell(10)
//!     .with_connectivity(Connectivity::TwentySix);
//! let mut heuristic = BfsHeuristic::new(&grid, states, |_: StateId| false, config).unwrap();
//!
//! heuristic.set_goal(GoalPoint::cell(10, 0, 1)).unwrap();
//! assert_eq!(heuristic.goal_heuristic(StateId(0)), 100);
//! // State 1 sits in the blocked floor layer.
//! assert_eq!(heuristic.goal_heuristic(StateId(1)), heuristic_types::INFINITE_COST);
//! ```
//!
//! # Connectivity
//!
//! | Connectivity | Neighbors | Free-space distance |
//! |--------------|-----------|---------------------|
//! | `Six` | faces | Manhattan |
//! | `Eighteen` | faces + edges | `max(chebyshev, ceil(manhattan / 2))` |
//! | `TwentySix` (default) | faces + edges + corners | Chebyshev |
//!
//! # Errors and sentinels
//!
//! Only construction and goal changes return errors. Queries never fail:
//! unreachable cells cost [`heuristic_types::INFINITE_COST`], unknown states
//! cost 0, and query shapes the heuristic does not support return 0 after a
//! one-time `tracing` warning.

#![doc(html_root_url = "https://docs.rs/heuristic-bfs/0.7.0")]
#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod adapter;
pub mod diagnostics;
pub mod field;
pub mod neighbors;
pub mod wavefront;

// Re-export main types for convenience
pub use adapter::BfsHeuristic;
pub use diagnostics::{DiagnosticsSink, RecordingSink, ValueMarker, WallCloud};
pub use field::VoxelField;
pub use heuristic_types::{Capability, RobotHeuristic};
pub use neighbors::NeighborGenerator;
pub use wavefront::{EngineState, WavefrontEngine};
