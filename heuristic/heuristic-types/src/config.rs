//! Configuration types for the BFS heuristic.
//!
//! # Example
//!
//! ```
//! use heuristic_types::{BfsHeuristicConfig, Connectivity};
//!
//! let config = BfsHeuristicConfig::default()
//!     .with_clearance_radius(0.08)
//!     .with_cost_per_cell(100)
//!     .with_connectivity(Connectivity::Six);
//!
//! assert!(config.validate().is_ok());
//! ```

use bfs_spatial::VoxelCoord;

use crate::cost::Cost;
use crate::error::HeuristicError;

const FACE_OFFSETS: [[i32; 3]; 6] = [
    [1, 0, 0],
    [-1, 0, 0],
    [0, 1, 0],
    [0, -1, 0],
    [0, 0, 1],
    [0, 0, -1],
];

const EDGE_OFFSETS: [[i32; 3]; 12] = [
    [1, 1, 0],
    [1, -1, 0],
    [-1, 1, 0],
    [-1, -1, 0],
    [1, 0, 1],
    [1, 0, -1],
    [-1, 0, 1],
    [-1, 0, -1],
    [0, 1, 1],
    [0, 1, -1],
    [0, -1, 1],
    [0, -1, -1],
];

const CORNER_OFFSETS: [[i32; 3]; 8] = [
    [1, 1, 1],
    [1, 1, -1],
    [1, -1, 1],
    [1, -1, -1],
    [-1, 1, 1],
    [-1, 1, -1],
    [-1, -1, 1],
    [-1, -1, -1],
];

/// Neighborhood used by the wavefront expansion.
///
/// The choice fixes both the distance metric and the admissibility bound of
/// the heuristic: one BFS step is one move to any neighbor in the set, so a
/// step count is a lower bound on path length only for motions that cannot
/// cross more than one cell per neighbor move.
///
/// Unobstructed distances from `(2, 2, 2)` to `(0, 0, 0)`:
///
/// | Connectivity | Neighbors | Steps |
/// |--------------|-----------|-------|
/// | `Six`        | faces     | 6     |
/// | `Eighteen`   | + edges   | 3     |
/// | `TwentySix`  | + corners | 2     |
///
/// # Example
///
/// ```
/// use heuristic_types::Connectivity;
/// use bfs_spatial::VoxelCoord;
///
/// let a = VoxelCoord::new(2, 2, 2);
/// let b = VoxelCoord::new(0, 0, 0);
/// assert_eq!(Connectivity::Six.free_space_steps(a, b), 6);
/// assert_eq!(Connectivity::Eighteen.free_space_steps(a, b), 3);
/// assert_eq!(Connectivity::TwentySix.free_space_steps(a, b), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Connectivity {
    /// Face neighbors only (von Neumann neighborhood).
    Six,
    /// Face and edge neighbors.
    Eighteen,
    /// Face, edge and corner neighbors (Moore neighborhood).
    #[default]
    TwentySix,
}

impl Connectivity {
    /// Number of neighbors per cell.
    #[must_use]
    pub const fn neighbor_count(self) -> usize {
        match self {
            Self::Six => 6,
            Self::Eighteen => 18,
            Self::TwentySix => 26,
        }
    }

    /// Integer offsets to every neighbor, face neighbors first.
    pub fn offsets(self) -> impl Iterator<Item = [i32; 3]> {
        let faces: &'static [[i32; 3]] = &FACE_OFFSETS;
        let edges: &'static [[i32; 3]] = match self {
            Self::Six => &[],
            Self::Eighteen | Self::TwentySix => &EDGE_OFFSETS,
        };
        let corners: &'static [[i32; 3]] = match self {
            Self::Six | Self::Eighteen => &[],
            Self::TwentySix => &CORNER_OFFSETS,
        };
        faces.iter().chain(edges).chain(corners).copied()
    }

    /// Returns `true` if `a` and `b` are distinct neighbors under this connectivity.
    #[must_use]
    pub fn are_adjacent(self, a: VoxelCoord, b: VoxelCoord) -> bool {
        let dx = a.x.abs_diff(b.x);
        let dy = a.y.abs_diff(b.y);
        let dz = a.z.abs_diff(b.z);
        if dx > 1 || dy > 1 || dz > 1 {
            return false;
        }
        let changed = dx + dy + dz;
        match self {
            Self::Six => changed == 1,
            Self::Eighteen => changed == 1 || changed == 2,
            Self::TwentySix => changed >= 1,
        }
    }

    /// Step count between two cells in an obstacle-free grid.
    ///
    /// Any wavefront distance under this connectivity is at least this value.
    #[must_use]
    pub fn free_space_steps(self, a: VoxelCoord, b: VoxelCoord) -> u32 {
        match self {
            Self::Six => a.manhattan_distance(b),
            Self::Eighteen => a
                .chebyshev_distance(b)
                .max(a.manhattan_distance(b).div_ceil(2)),
            Self::TwentySix => a.chebyshev_distance(b),
        }
    }
}

/// Configuration for the BFS heuristic.
///
/// Defaults:
/// - Clearance radius: 0.0 (only cells touching an obstacle are walls)
/// - Cost per cell: 100
/// - Connectivity: 26 neighbors
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BfsHeuristicConfig {
    /// Cells whose clearance is at most this radius are walls (world units).
    clearance_radius: f64,
    /// Heuristic cost of one wavefront step.
    cost_per_cell: Cost,
    /// Neighborhood for the wavefront expansion.
    connectivity: Connectivity,
}

impl BfsHeuristicConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            clearance_radius: 0.0,
            cost_per_cell: 100,
            connectivity: Connectivity::TwentySix,
        }
    }

    /// Sets the clearance radius of the body being planned for.
    #[must_use]
    pub const fn with_clearance_radius(mut self, radius: f64) -> Self {
        self.clearance_radius = radius;
        self
    }

    /// Sets the cost of one wavefront step.
    #[must_use]
    pub const fn with_cost_per_cell(mut self, cost: Cost) -> Self {
        self.cost_per_cell = cost;
        self
    }

    /// Sets the wavefront connectivity.
    #[must_use]
    pub const fn with_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }

    /// Returns the clearance radius.
    #[must_use]
    pub const fn clearance_radius(&self) -> f64 {
        self.clearance_radius
    }

    /// Returns the cost per cell.
    #[must_use]
    pub const fn cost_per_cell(&self) -> Cost {
        self.cost_per_cell
    }

    /// Returns the connectivity.
    #[must_use]
    pub const fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    /// Checks the configuration for invalid values.
    ///
    /// # Errors
    ///
    /// Returns [`HeuristicError::InvalidConfig`] if the clearance radius is not
    /// finite or the cost per cell is not positive.
    pub fn validate(&self) -> Result<(), HeuristicError> {
        if !self.clearance_radius.is_finite() {
            return Err(HeuristicError::invalid_config(format!(
                "clearance_radius must be finite, got {}",
                self.clearance_radius
            )));
        }
        if self.cost_per_cell <= 0 {
            return Err(HeuristicError::invalid_config(format!(
                "cost_per_cell must be positive, got {}",
                self.cost_per_cell
            )));
        }
        Ok(())
    }
}

impl Default for BfsHeuristicConfig {
    fn default() -> Self {
        Self::new()
    }
}
