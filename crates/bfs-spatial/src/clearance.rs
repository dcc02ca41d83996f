//! Clearance (distance-to-nearest-obstacle) grids.
//!
//! A clearance grid answers, for every cell, how far that cell is from the
//! nearest obstacle. How those values are computed (distance transforms,
//! sensor fusion) is up to the provider; consumers only read them.

use nalgebra::Point3;

use crate::error::SpatialError;
use crate::frame::GridFrame;
use crate::grid::{DenseGrid, GridDims};
use crate::voxel::VoxelCoord;

/// Read-only view of a bounded clearance field.
///
/// Implementors must return values for every coordinate inside [`dims`]
/// and keep them unchanged while a consumer is reading them.
///
/// [`dims`]: ClearanceGrid::dims
pub trait ClearanceGrid {
    /// Grid size in cells.
    fn dims(&self) -> GridDims;

    /// Distance from the cell to the nearest obstacle, in world units.
    ///
    /// Only called with coordinates inside [`ClearanceGrid::dims`].
    fn clearance(&self, coord: VoxelCoord) -> f64;

    /// Edge length of one cell in world units.
    fn resolution(&self) -> f64;

    /// Cell containing a world point. The result may lie outside the grid.
    fn world_to_grid(&self, point: Point3<f64>) -> VoxelCoord;

    /// World-space center of a cell.
    fn grid_to_world(&self, coord: VoxelCoord) -> Point3<f64>;
}

/// In-memory clearance grid backed by a [`DenseGrid<f64>`].
///
/// # Example
///
/// ```
/// use bfs_spatial::{ClearanceGrid, DenseClearanceGrid, GridDims, GridFrame, VoxelCoord};
///
/// let dims = GridDims::new(4, 4, 4).unwrap();
/// let frame = GridFrame::with_resolution(0.05).unwrap();
/// let grid = DenseClearanceGrid::from_fn(dims, frame, |c| if c.x == 0 { 0.0 } else { 1.0 });
///
/// assert_eq!(grid.clearance(VoxelCoord::new(0, 2, 2)), 0.0);
/// assert_eq!(grid.clearance(VoxelCoord::new(3, 2, 2)), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DenseClearanceGrid {
    frame: GridFrame,
    cells: DenseGrid<f64>,
}

impl DenseClearanceGrid {
    /// Creates a grid where every cell has the same clearance.
    #[must_use]
    pub fn uniform(dims: GridDims, frame: GridFrame, clearance: f64) -> Self {
        Self {
            frame,
            cells: DenseGrid::filled(dims, clearance),
        }
    }

    /// Creates a grid by evaluating `f` at every cell.
    pub fn from_fn<F>(dims: GridDims, frame: GridFrame, f: F) -> Self
    where
        F: FnMut(VoxelCoord) -> f64,
    {
        Self {
            frame,
            cells: DenseGrid::from_fn(dims, f),
        }
    }

    /// Wraps clearance values laid out in Z-Y-X order.
    ///
    /// # Errors
    ///
    /// Returns [`SpatialError::DimensionMismatch`] if the number of values does
    /// not equal the declared cell count.
    pub fn from_values(
        dims: GridDims,
        frame: GridFrame,
        values: Vec<f64>,
    ) -> Result<Self, SpatialError> {
        Ok(Self {
            frame,
            cells: DenseGrid::from_vec(dims, values)?,
        })
    }

    /// The world placement of this grid.
    #[must_use]
    pub const fn frame(&self) -> &GridFrame {
        &self.frame
    }

    /// Overwrites the clearance of one cell. Returns `false` if out of bounds.
    pub fn set_clearance(&mut self, coord: VoxelCoord, clearance: f64) -> bool {
        self.cells.set(coord, clearance).is_some()
    }
}

impl ClearanceGrid for DenseClearanceGrid {
    fn dims(&self) -> GridDims {
        self.cells.dims()
    }

    fn clearance(&self, coord: VoxelCoord) -> f64 {
        // Callers stay in bounds; treat anything else as touching an obstacle.
        self.cells.get(coord).copied().unwrap_or(0.0)
    }

    fn resolution(&self) -> f64 {
        self.frame.resolution()
    }

    fn world_to_grid(&self, point: Point3<f64>) -> VoxelCoord {
        self.frame.world_to_grid(point)
    }

    fn grid_to_world(&self, coord: VoxelCoord) -> Point3<f64> {
        self.frame.grid_to_world(coord)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    fn dims() -> GridDims {
        GridDims::new(3, 3, 3).unwrap()
    }

    fn frame() -> GridFrame {
        GridFrame::with_resolution(0.1).unwrap()
    }

    #[test]
    fn test_from_values_rejects_mismatch() {
        let result = DenseClearanceGrid::from_values(dims(), frame(), vec![1.0; 26]);
        assert!(matches!(
            result,
            Err(SpatialError::DimensionMismatch {
                expected: 27,
                actual: 26
            })
        ));
    }

    #[test]
    fn test_from_values_layout() {
        let values: Vec<f64> = (0..27).map(f64::from).collect();
        let grid = DenseClearanceGrid::from_values(dims(), frame(), values).unwrap();
        assert_eq!(grid.clearance(VoxelCoord::new(1, 0, 0)), 1.0);
        assert_eq!(grid.clearance(VoxelCoord::new(0, 1, 0)), 3.0);
        assert_eq!(grid.clearance(VoxelCoord::new(0, 0, 1)), 9.0);
    }

    #[test]
    fn test_set_clearance() {
        let mut grid = DenseClearanceGrid::uniform(dims(), frame(), 1.0);
        assert!(grid.set_clearance(VoxelCoord::new(1, 1, 1), 0.0));
        assert!(!grid.set_clearance(VoxelCoord::new(3, 1, 1), 0.0));
        assert_eq!(grid.clearance(VoxelCoord::new(1, 1, 1)), 0.0);
        assert_eq!(grid.clearance(VoxelCoord::new(0, 1, 1)), 1.0);
    }

    #[test]
    fn test_trait_delegates_to_frame() {
        let grid = DenseClearanceGrid::uniform(dims(), frame(), 1.0);
        assert_eq!(grid.resolution(), 0.1);
        let c = VoxelCoord::new(2, 1, 0);
        assert_eq!(grid.world_to_grid(grid.grid_to_world(c)), c);
    }
}
