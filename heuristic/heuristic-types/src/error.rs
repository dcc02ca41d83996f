//! Error types for heuristic operations.
//!
//! Only construction and goal changes can fail. Queries never return errors;
//! unreachable or unsupported queries are answered with sentinel costs.

use bfs_spatial::{SpatialError, VoxelCoord};

/// Errors that can occur while building a heuristic or setting its goal.
///
/// # Example
///
/// ```
/// use heuristic_types::HeuristicError;
/// use bfs_spatial::VoxelCoord;
///
/// let error = HeuristicError::GoalInWall(VoxelCoord::new(1, 2, 3));
/// assert!(error.is_invalid_goal());
/// assert!(error.to_string().contains("(1, 2, 3)"));
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum HeuristicError {
    /// The goal cell lies outside the grid.
    #[error("goal cell {0} is out of bounds")]
    GoalOutOfBounds(VoxelCoord),

    /// The goal cell is a wall for the configured clearance radius.
    #[error("goal cell {0} is inside a wall")]
    GoalInWall(VoxelCoord),

    /// A goal was requested with no cells in it.
    #[error("goal contains no free cells")]
    EmptyGoal,

    /// An invalid configuration parameter was provided.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The underlying grid could not be built.
    #[error(transparent)]
    Spatial(#[from] SpatialError),
}

impl HeuristicError {
    /// Creates an invalid configuration error with the given message.
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Returns `true` if the error rejects a goal (out of bounds, in a wall, or empty).
    #[must_use]
    pub const fn is_invalid_goal(&self) -> bool {
        matches!(
            self,
            Self::GoalOutOfBounds(_) | Self::GoalInWall(_) | Self::EmptyGoal
        )
    }
}
