//! Goal specification for distance-to-goal heuristics.
//!
//! A goal can be named as a grid cell, as a world-space point (mapped through
//! the clearance grid), or as a box of cells. A box seeds the wavefront from
//! every free cell inside it.
//!
//! # Example
//!
//! ```
//! use heuristic_types::GoalPoint;
//! use bfs_spatial::{GridBounds, VoxelCoord};
//! use nalgebra::Point3;
//!
//! let cell = GoalPoint::cell(5, 5, 5);
//! let world = GoalPoint::World(Point3::new(0.5, 0.5, 0.5));
//! let region = GoalPoint::Region(GridBounds::new(
//!     VoxelCoord::new(4, 4, 4),
//!     VoxelCoord::new(6, 6, 6),
//! ));
//!
//! assert!(cell.is_cell());
//! assert!(world.is_world());
//! assert!(region.is_region());
//! ```

use bfs_spatial::{GridBounds, VoxelCoord};
use nalgebra::Point3;

/// A goal for the wavefront.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GoalPoint {
    /// An exact grid cell.
    Cell(VoxelCoord),
    /// A world-space point; the goal is the cell containing it.
    World(Point3<f64>),
    /// Every free cell inside an inclusive box of cells.
    Region(GridBounds),
}

impl GoalPoint {
    /// Creates a goal from grid coordinates.
    #[must_use]
    pub const fn cell(x: i32, y: i32, z: i32) -> Self {
        Self::Cell(VoxelCoord::new(x, y, z))
    }

    /// Creates a goal from world coordinates.
    #[must_use]
    pub fn world(x: f64, y: f64, z: f64) -> Self {
        Self::World(Point3::new(x, y, z))
    }

    /// Returns `true` if this is a grid-cell goal.
    #[must_use]
    pub const fn is_cell(&self) -> bool {
        matches!(self, Self::Cell(_))
    }

    /// Returns `true` if this is a world-point goal.
    #[must_use]
    pub const fn is_world(&self) -> bool {
        matches!(self, Self::World(_))
    }

    /// Returns `true` if this is a region goal.
    #[must_use]
    pub const fn is_region(&self) -> bool {
        matches!(self, Self::Region(_))
    }
}

impl From<VoxelCoord> for GoalPoint {
    fn from(coord: VoxelCoord) -> Self {
        Self::Cell(coord)
    }
}

impl From<Point3<f64>> for GoalPoint {
    fn from(point: Point3<f64>) -> Self {
        Self::World(point)
    }
}

impl From<GridBounds> for GoalPoint {
    fn from(bounds: GridBounds) -> Self {
        Self::Region(bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(
            GoalPoint::from(VoxelCoord::new(1, 2, 3)),
            GoalPoint::cell(1, 2, 3)
        );
        assert_eq!(
            GoalPoint::from(Point3::new(0.1, 0.2, 0.3)),
            GoalPoint::world(0.1, 0.2, 0.3)
        );
        let bounds = GridBounds::from_point(VoxelCoord::origin());
        assert!(GoalPoint::from(bounds).is_region());
    }
}
