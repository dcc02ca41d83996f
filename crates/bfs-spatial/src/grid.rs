//! Dense, bounded voxel grids.
//!
//! Unlike a sparse hash grid, a [`DenseGrid`] allocates one value per cell of
//! a fixed `nx × ny × nz` box whose minimum corner is the origin cell. Cells
//! are stored in Z-Y-X order (X varies fastest), which is also the iteration
//! order of [`GridDims::iter`].

use crate::error::SpatialError;
use crate::voxel::VoxelCoord;

/// Axis-aligned bounds in grid space. Both corners are inclusive.
///
/// # Example
///
/// ```
/// use bfs_spatial::{GridBounds, VoxelCoord};
///
/// let bounds = GridBounds::new(VoxelCoord::new(2, 2, 2), VoxelCoord::new(0, 0, 0));
/// assert_eq!(bounds.min, VoxelCoord::new(0, 0, 0));
/// assert!(bounds.contains(VoxelCoord::new(1, 2, 0)));
/// assert_eq!(bounds.iter().count(), 27);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridBounds {
    /// Minimum corner (inclusive).
    pub min: VoxelCoord,
    /// Maximum corner (inclusive).
    pub max: VoxelCoord,
}

impl GridBounds {
    /// Creates bounds from two corners, ordering them so `min ≤ max` per axis.
    #[must_use]
    pub fn new(a: VoxelCoord, b: VoxelCoord) -> Self {
        Self {
            min: VoxelCoord::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: VoxelCoord::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    /// Creates bounds containing a single cell.
    #[must_use]
    pub const fn from_point(coord: VoxelCoord) -> Self {
        Self {
            min: coord,
            max: coord,
        }
    }

    /// Number of cells inside the bounds.
    #[must_use]
    pub fn volume(&self) -> u64 {
        let w = u64::from(self.max.x.abs_diff(self.min.x)) + 1;
        let h = u64::from(self.max.y.abs_diff(self.min.y)) + 1;
        let d = u64::from(self.max.z.abs_diff(self.min.z)) + 1;
        w.saturating_mul(h).saturating_mul(d)
    }

    /// Checks if the bounds contain a coordinate.
    #[must_use]
    pub const fn contains(&self, coord: VoxelCoord) -> bool {
        coord.x >= self.min.x
            && coord.x <= self.max.x
            && coord.y >= self.min.y
            && coord.y <= self.max.y
            && coord.z >= self.min.z
            && coord.z <= self.max.z
    }

    /// Returns the overlap of two bounds, or `None` if they are disjoint.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let min = VoxelCoord::new(
            self.min.x.max(other.min.x),
            self.min.y.max(other.min.y),
            self.min.z.max(other.min.z),
        );
        let max = VoxelCoord::new(
            self.max.x.min(other.max.x),
            self.max.y.min(other.max.y),
            self.max.z.min(other.max.z),
        );

        (min.x <= max.x && min.y <= max.y && min.z <= max.z).then_some(Self { min, max })
    }

    /// Iterates every coordinate inside the bounds in Z-Y-X order.
    #[must_use]
    pub const fn iter(&self) -> GridBoundsIter {
        GridBoundsIter {
            bounds: *self,
            current: Some(self.min),
        }
    }
}

impl IntoIterator for GridBounds {
    type Item = VoxelCoord;
    type IntoIter = GridBoundsIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &GridBounds {
    type Item = VoxelCoord;
    type IntoIter = GridBoundsIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over all coordinates in a [`GridBounds`].
#[derive(Debug, Clone)]
pub struct GridBoundsIter {
    bounds: GridBounds,
    current: Option<VoxelCoord>,
}

impl Iterator for GridBoundsIter {
    type Item = VoxelCoord;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;

        let mut next = current;
        if next.x < self.bounds.max.x {
            next.x += 1;
        } else {
            next.x = self.bounds.min.x;
            if next.y < self.bounds.max.y {
                next.y += 1;
            } else {
                next.y = self.bounds.min.y;
                if next.z < self.bounds.max.z {
                    next.z += 1;
                } else {
                    self.current = None;
                    return Some(current);
                }
            }
        }
        self.current = Some(next);

        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.current.map_or(0, |current| {
            let size_x = u64::from(self.bounds.max.x.abs_diff(self.bounds.min.x)) + 1;
            let size_y = u64::from(self.bounds.max.y.abs_diff(self.bounds.min.y)) + 1;

            let rest_x = u64::from(self.bounds.max.x.abs_diff(current.x)) + 1;
            let rest_y = u64::from(self.bounds.max.y.abs_diff(current.y));
            let rest_z = u64::from(self.bounds.max.z.abs_diff(current.z));

            rest_x
                .saturating_add(rest_y.saturating_mul(size_x))
                .saturating_add(rest_z.saturating_mul(size_x).saturating_mul(size_y))
        });

        let remaining = usize::try_from(remaining).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GridBoundsIter {}

/// Size of a dense grid in cells along each axis.
///
/// Valid coordinates are `0 <= x < nx`, `0 <= y < ny`, `0 <= z < nz`.
///
/// # Example
///
/// ```
/// use bfs_spatial::{GridDims, VoxelCoord};
///
/// let dims = GridDims::new(4, 3, 2).unwrap();
/// assert_eq!(dims.cell_count(), 24);
/// assert!(dims.contains(VoxelCoord::new(3, 2, 1)));
/// assert!(!dims.contains(VoxelCoord::new(4, 0, 0)));
/// assert_eq!(dims.index(VoxelCoord::new(1, 1, 0)), Some(5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGridDims"))]
pub struct GridDims {
    nx: usize,
    ny: usize,
    nz: usize,
}

impl GridDims {
    /// Creates grid dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`SpatialError::InvalidDimensions`] if any axis is zero, exceeds
    /// `i32::MAX`, or the total cell count overflows `usize`.
    pub fn new(nx: usize, ny: usize, nz: usize) -> Result<Self, SpatialError> {
        let invalid = SpatialError::InvalidDimensions { nx, ny, nz };
        let axis_ok = |n: usize| n > 0 && i32::try_from(n).is_ok();
        if !(axis_ok(nx) && axis_ok(ny) && axis_ok(nz)) {
            return Err(invalid);
        }
        if nx.checked_mul(ny).and_then(|a| a.checked_mul(nz)).is_none() {
            return Err(invalid);
        }
        Ok(Self { nx, ny, nz })
    }

    /// Cells along X.
    #[must_use]
    pub const fn nx(&self) -> usize {
        self.nx
    }

    /// Cells along Y.
    #[must_use]
    pub const fn ny(&self) -> usize {
        self.ny
    }

    /// Cells along Z.
    #[must_use]
    pub const fn nz(&self) -> usize {
        self.nz
    }

    /// Returns `(nx, ny, nz)`.
    #[must_use]
    pub const fn as_tuple(&self) -> (usize, usize, usize) {
        (self.nx, self.ny, self.nz)
    }

    /// Total number of cells.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.nx * self.ny * self.nz
    }

    /// Returns `true` if the coordinate lies inside the grid.
    #[must_use]
    pub fn contains(&self, coord: VoxelCoord) -> bool {
        self.index(coord).is_some()
    }

    /// Linear storage index of a coordinate, or `None` if out of bounds.
    #[must_use]
    pub fn index(&self, coord: VoxelCoord) -> Option<usize> {
        let x = usize::try_from(coord.x).ok()?;
        let y = usize::try_from(coord.y).ok()?;
        let z = usize::try_from(coord.z).ok()?;
        if x >= self.nx || y >= self.ny || z >= self.nz {
            return None;
        }
        Some(x + self.nx * (y + self.ny * z))
    }

    /// Coordinate of a linear storage index, or `None` if out of range.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub const fn coord(&self, index: usize) -> Option<VoxelCoord> {
        if index >= self.cell_count() {
            return None;
        }
        let x = index % self.nx;
        let y = (index / self.nx) % self.ny;
        let z = index / (self.nx * self.ny);
        // Each axis fits in i32, checked in `new`.
        Some(VoxelCoord::new(x as i32, y as i32, z as i32))
    }

    /// Bounds covering every cell of the grid.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub const fn bounds(&self) -> GridBounds {
        GridBounds {
            min: VoxelCoord::origin(),
            max: VoxelCoord::new(
                (self.nx - 1) as i32,
                (self.ny - 1) as i32,
                (self.nz - 1) as i32,
            ),
        }
    }

    /// Iterates every coordinate in storage order.
    #[must_use]
    pub const fn iter(&self) -> GridBoundsIter {
        self.bounds().iter()
    }
}

/// A dense 3D array with one value per cell.
///
/// # Example
///
/// ```
/// use bfs_spatial::{DenseGrid, GridDims, VoxelCoord};
///
/// let dims = GridDims::new(2, 2, 2).unwrap();
/// let mut grid = DenseGrid::filled(dims, 0u8);
/// grid.set(VoxelCoord::new(1, 1, 1), 7);
///
/// assert_eq!(grid.get(VoxelCoord::new(1, 1, 1)), Some(&7));
/// assert_eq!(grid.get(VoxelCoord::new(2, 0, 0)), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawDenseGrid<T>",
        bound(deserialize = "T: serde::Deserialize<'de>")
    )
)]
pub struct DenseGrid<T> {
    dims: GridDims,
    data: Vec<T>,
}

impl<T> DenseGrid<T> {
    /// Wraps an existing buffer laid out in Z-Y-X order.
    ///
    /// # Errors
    ///
    /// Returns [`SpatialError::DimensionMismatch`] if `data.len()` differs from
    /// the declared cell count. Buffers are never truncated or padded.
    pub fn from_vec(dims: GridDims, data: Vec<T>) -> Result<Self, SpatialError> {
        if data.len() != dims.cell_count() {
            return Err(SpatialError::DimensionMismatch {
                expected: dims.cell_count(),
                actual: data.len(),
            });
        }
        Ok(Self { dims, data })
    }

    /// Builds a grid by evaluating `f` at every coordinate.
    pub fn from_fn<F>(dims: GridDims, f: F) -> Self
    where
        F: FnMut(VoxelCoord) -> T,
    {
        Self {
            dims,
            data: dims.iter().map(f).collect(),
        }
    }

    /// Grid dimensions.
    #[must_use]
    pub const fn dims(&self) -> GridDims {
        self.dims
    }

    /// Value at a coordinate, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, coord: VoxelCoord) -> Option<&T> {
        self.dims.index(coord).map(|i| &self.data[i])
    }

    /// Mutable value at a coordinate, or `None` if out of bounds.
    pub fn get_mut(&mut self, coord: VoxelCoord) -> Option<&mut T> {
        self.dims.index(coord).map(|i| &mut self.data[i])
    }

    /// Replaces the value at a coordinate, returning the previous one.
    ///
    /// Returns `None` and leaves the grid untouched if out of bounds.
    pub fn set(&mut self, coord: VoxelCoord, value: T) -> Option<T> {
        let slot = self.get_mut(coord)?;
        Some(std::mem::replace(slot, value))
    }

    /// Raw cell values in storage order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable raw cell values in storage order.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterates `(coord, value)` pairs in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (VoxelCoord, &T)> + '_ {
        self.dims.iter().zip(self.data.iter())
    }
}

impl<T: Clone> DenseGrid<T> {
    /// Creates a grid with every cell set to `value`.
    #[must_use]
    pub fn filled(dims: GridDims, value: T) -> Self {
        Self {
            dims,
            data: vec![value; dims.cell_count()],
        }
    }

    /// Overwrites every cell with `value`.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }
}

// Deserialized values pass through the same checks as the constructors.

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGridDims {
    nx: usize,
    ny: usize,
    nz: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGridDims> for GridDims {
    type Error = SpatialError;

    fn try_from(raw: RawGridDims) -> Result<Self, Self::Error> {
        Self::new(raw.nx, raw.ny, raw.nz)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawDenseGrid<T> {
    dims: GridDims,
    data: Vec<T>,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<RawDenseGrid<T>> for DenseGrid<T> {
    type Error = SpatialError;

    fn try_from(raw: RawDenseGrid<T>) -> Result<Self, Self::Error> {
        Self::from_vec(raw.dims, raw.data)
    }
}
