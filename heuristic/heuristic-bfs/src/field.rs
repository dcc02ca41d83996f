//! Wall classification of a clearance grid.
//!
//! A [`VoxelField`] is a dense boolean mask: a cell is a wall iff its
//! clearance is at most the clearance radius of the body being planned for.
//! The mask is a snapshot; when the environment changes, build a new one.

use bfs_spatial::{ClearanceGrid, DenseGrid, GridDims, SpatialError, VoxelCoord};
use tracing::info;

/// Dense wall mask over a fixed grid.
///
/// # Example
///
/// ```
/// use heuristic_bfs::VoxelField;
/// use bfs_spatial::{DenseClearanceGrid, GridDims, GridFrame, VoxelCoord};
///
/// let dims = GridDims::new(4, 4, 4).unwrap();
/// let frame = GridFrame::with_resolution(0.1).unwrap();
/// // Clearance grows with x: cells at x = 0 and x = 1 are within 0.1 of an obstacle.
/// let grid = DenseClearanceGrid::from_fn(dims, frame, |c| 0.1 * f64::from(c.x));
///
/// let field = VoxelField::build(&grid, 0.1);
/// assert!(field.is_wall(VoxelCoord::new(1, 0, 0)));
/// assert!(!field.is_wall(VoxelCoord::new(2, 0, 0)));
/// assert_eq!(field.wall_count(), 32);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawVoxelField"))]
pub struct VoxelField {
    walls: DenseGrid<bool>,
    #[cfg_attr(feature = "serde", serde(skip_serializing))]
    wall_count: usize,
}

impl VoxelField {
    /// Classifies every cell of a clearance grid.
    ///
    /// A cell is a wall iff `grid.clearance(cell) <= clearance_radius`. The
    /// result has exactly the grid's dimensions.
    pub fn build<G>(grid: &G, clearance_radius: f64) -> Self
    where
        G: ClearanceGrid + ?Sized,
    {
        let dims = grid.dims();
        let walls = DenseGrid::from_fn(dims, |coord| grid.clearance(coord) <= clearance_radius);
        let field = Self::from_walls(walls);

        let (nx, ny, nz) = dims.as_tuple();
        info!(
            nx,
            ny,
            nz,
            cells = field.cell_count(),
            walls = field.wall_count,
            wall_percent = 100.0 * field.wall_fraction(),
            clearance_radius,
            "Built BFS voxel field"
        );

        field
    }

    /// Wraps an explicit wall mask laid out in Z-Y-X order.
    ///
    /// # Errors
    ///
    /// Returns [`SpatialError::DimensionMismatch`] if the mask length differs
    /// from the declared cell count.
    pub fn from_mask(dims: GridDims, mask: Vec<bool>) -> Result<Self, SpatialError> {
        Ok(Self::from_walls(DenseGrid::from_vec(dims, mask)?))
    }

    fn from_walls(walls: DenseGrid<bool>) -> Self {
        let wall_count = walls.as_slice().iter().filter(|w| **w).count();
        Self { walls, wall_count }
    }

    /// Grid dimensions.
    #[must_use]
    pub const fn dims(&self) -> GridDims {
        self.walls.dims()
    }

    /// Returns `true` if the coordinate lies inside the grid.
    #[must_use]
    pub fn in_bounds(&self, coord: VoxelCoord) -> bool {
        self.dims().contains(coord)
    }

    /// Returns `true` if the cell is a wall. Out-of-bounds cells are not walls.
    #[must_use]
    pub fn is_wall(&self, coord: VoxelCoord) -> bool {
        self.walls.get(coord).copied().unwrap_or(false)
    }

    /// Returns `true` if the cell is inside the grid and not a wall.
    #[must_use]
    pub fn is_free(&self, coord: VoxelCoord) -> bool {
        matches!(self.walls.get(coord), Some(false))
    }

    /// Number of wall cells.
    #[must_use]
    pub const fn wall_count(&self) -> usize {
        self.wall_count
    }

    /// Total number of cells.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.dims().cell_count()
    }

    /// Fraction of cells that are walls, in `[0, 1]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn wall_fraction(&self) -> f64 {
        self.wall_count as f64 / self.cell_count() as f64
    }

    /// Iterates every wall cell in storage order.
    pub fn walls(&self) -> impl Iterator<Item = VoxelCoord> + '_ {
        self.walls
            .iter()
            .filter_map(|(coord, wall)| wall.then_some(coord))
    }

    /// The raw mask in storage order.
    #[must_use]
    pub fn as_mask(&self) -> &[bool] {
        self.walls.as_slice()
    }
}

/// Only the mask is read back; the wall count is recomputed from it.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawVoxelField {
    walls: DenseGrid<bool>,
}

#[cfg(feature = "serde")]
impl From<RawVoxelField> for VoxelField {
    fn from(raw: RawVoxelField) -> Self {
        Self::from_walls(raw.walls)
    }
}
