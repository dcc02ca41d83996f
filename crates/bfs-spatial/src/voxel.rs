//! Voxel coordinate type.

use nalgebra::Point3;

/// A discrete 3D cell coordinate.
///
/// Coordinates are signed so that points projected outside a grid (for
/// example a world point left of the grid origin) remain representable and
/// can be rejected by a bounds check instead of wrapping around.
///
/// # Example
///
/// ```
/// use bfs_spatial::VoxelCoord;
///
/// let coord = VoxelCoord::new(1, 2, 3);
/// assert_eq!(coord.as_array(), [1, 2, 3]);
///
/// let outside = VoxelCoord::new(-1, 0, 0);
/// assert_eq!(outside.x, -1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VoxelCoord {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
    /// Z coordinate.
    pub z: i32,
}

impl VoxelCoord {
    /// Creates a new voxel coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The coordinate (0, 0, 0).
    #[must_use]
    pub const fn origin() -> Self {
        Self::new(0, 0, 0)
    }

    /// Returns the coordinate as an array.
    #[must_use]
    pub const fn as_array(self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }

    /// Returns the coordinate shifted by an integer offset, or `None` on overflow.
    ///
    /// # Example
    ///
    /// ```
    /// use bfs_spatial::VoxelCoord;
    ///
    /// let c = VoxelCoord::new(5, 5, 5);
    /// assert_eq!(c.offset([1, 0, -1]), Some(VoxelCoord::new(6, 5, 4)));
    /// assert_eq!(VoxelCoord::new(i32::MAX, 0, 0).offset([1, 0, 0]), None);
    /// ```
    #[must_use]
    pub const fn offset(self, delta: [i32; 3]) -> Option<Self> {
        let Some(x) = self.x.checked_add(delta[0]) else {
            return None;
        };
        let Some(y) = self.y.checked_add(delta[1]) else {
            return None;
        };
        let Some(z) = self.z.checked_add(delta[2]) else {
            return None;
        };
        Some(Self::new(x, y, z))
    }

    /// Chebyshev (L-infinity) distance to another coordinate.
    ///
    /// This is the step count between two cells under 26-connectivity when no
    /// obstacles intervene.
    ///
    /// ```
    /// use bfs_spatial::VoxelCoord;
    ///
    /// let a = VoxelCoord::new(0, 0, 0);
    /// assert_eq!(a.chebyshev_distance(VoxelCoord::new(3, 4, 5)), 5);
    /// ```
    #[must_use]
    pub fn chebyshev_distance(self, other: Self) -> u32 {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        let dz = self.z.abs_diff(other.z);
        dx.max(dy).max(dz)
    }

    /// Manhattan (L1) distance to another coordinate.
    ///
    /// ```
    /// use bfs_spatial::VoxelCoord;
    ///
    /// let a = VoxelCoord::new(0, 0, 0);
    /// assert_eq!(a.manhattan_distance(VoxelCoord::new(3, 4, 5)), 12);
    /// ```
    #[must_use]
    pub const fn manhattan_distance(self, other: Self) -> u32 {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        let dz = self.z.abs_diff(other.z);
        dx.saturating_add(dy).saturating_add(dz)
    }

    /// Converts to a floating-point point (cell index space, not world space).
    #[must_use]
    pub fn to_point(self) -> Point3<f64> {
        Point3::new(f64::from(self.x), f64::from(self.y), f64::from(self.z))
    }
}

impl From<(i32, i32, i32)> for VoxelCoord {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<[i32; 3]> for VoxelCoord {
    fn from([x, y, z]: [i32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<VoxelCoord> for [i32; 3] {
    fn from(coord: VoxelCoord) -> Self {
        coord.as_array()
    }
}

impl std::fmt::Display for VoxelCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
