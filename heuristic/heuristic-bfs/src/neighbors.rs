//! Neighbor generation for the wavefront expansion.
//!
//! # Example
//!
//! ```
//! use heuristic_bfs::{NeighborGenerator, VoxelField};
//! use heuristic_types::Connectivity;
//! use bfs_spatial::{GridDims, VoxelCoord};
//!
//! let dims = GridDims::new(3, 3, 3).unwrap();
//! let field = VoxelField::from_mask(dims, vec![false; 27]).unwrap();
//! let generator = NeighborGenerator::new(&field, Connectivity::TwentySix);
//!
//! let center: Vec<_> = generator.neighbors(VoxelCoord::new(1, 1, 1)).collect();
//! assert_eq!(center.len(), 26);
//!
//! // Corner cells lose every neighbor that would leave the grid.
//! let corner: Vec<_> = generator.neighbors(VoxelCoord::new(0, 0, 0)).collect();
//! assert_eq!(corner.len(), 7);
//! ```

use bfs_spatial::VoxelCoord;
use heuristic_types::Connectivity;

use crate::field::VoxelField;

/// Generator for free, in-bounds neighbors of a cell.
///
/// Handles connectivity (6, 18 or 26 neighbors), grid bounds and walls.
#[derive(Debug, Clone, Copy)]
pub struct NeighborGenerator<'a> {
    field: &'a VoxelField,
    connectivity: Connectivity,
}

impl<'a> NeighborGenerator<'a> {
    /// Creates a generator over a voxel field.
    #[must_use]
    pub const fn new(field: &'a VoxelField, connectivity: Connectivity) -> Self {
        Self {
            field,
            connectivity,
        }
    }

    /// The connectivity in use.
    #[must_use]
    pub const fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    /// Returns `true` if the coordinate is inside the grid and not a wall.
    #[must_use]
    pub fn is_free(&self, coord: VoxelCoord) -> bool {
        self.field.is_free(coord)
    }

    /// Iterates the free neighbors of `coord`.
    pub fn neighbors(&self, coord: VoxelCoord) -> impl Iterator<Item = VoxelCoord> + use<'a> {
        let field = self.field;
        self.connectivity
            .offsets()
            .filter_map(move |delta| coord.offset(delta))
            .filter(move |n| field.is_free(*n))
    }
}
