//! World ↔ grid coordinate mapping.

use nalgebra::Point3;

use crate::error::SpatialError;
use crate::voxel::VoxelCoord;

/// Placement of a regular grid in world space.
///
/// Cell `(0, 0, 0)` spans `[origin, origin + resolution)` on every axis.
///
/// # Example
///
/// ```
/// use bfs_spatial::{GridFrame, VoxelCoord};
/// use nalgebra::Point3;
///
/// let frame = GridFrame::new(Point3::new(-1.0, 0.0, 0.0), 0.5).unwrap();
/// assert_eq!(frame.world_to_grid(Point3::new(-0.9, 0.2, 1.1)), VoxelCoord::new(0, 0, 2));
///
/// let center = frame.grid_to_world(VoxelCoord::new(0, 0, 0));
/// assert!((center.x - -0.75).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGridFrame"))]
pub struct GridFrame {
    origin: Point3<f64>,
    resolution: f64,
    #[cfg_attr(feature = "serde", serde(skip_serializing))]
    inv_resolution: f64,
}

impl GridFrame {
    /// Creates a frame with the given origin (minimum corner of cell 0) and cell size.
    ///
    /// # Errors
    ///
    /// Returns [`SpatialError::InvalidResolution`] if `resolution` is not
    /// positive and finite.
    pub fn new(origin: Point3<f64>, resolution: f64) -> Result<Self, SpatialError> {
        if resolution <= 0.0 || !resolution.is_finite() {
            return Err(SpatialError::InvalidResolution(resolution));
        }
        Ok(Self {
            origin,
            resolution,
            inv_resolution: 1.0 / resolution,
        })
    }

    /// Frame with its origin at the world origin.
    ///
    /// # Errors
    ///
    /// See [`GridFrame::new`].
    pub fn with_resolution(resolution: f64) -> Result<Self, SpatialError> {
        Self::new(Point3::origin(), resolution)
    }

    /// World-space minimum corner of cell `(0, 0, 0)`.
    #[must_use]
    pub const fn origin(&self) -> &Point3<f64> {
        &self.origin
    }

    /// Edge length of one cell in world units.
    #[must_use]
    pub const fn resolution(&self) -> f64 {
        self.resolution
    }

    /// Cell containing a world point.
    ///
    /// Values beyond the `i32` range saturate and NaN components map to
    /// `i32::MIN`, so far-away or undefined points still map to coordinates
    /// that fail any bounds check.
    #[must_use]
    pub fn world_to_grid(&self, point: Point3<f64>) -> VoxelCoord {
        let relative = point - self.origin;
        VoxelCoord::new(
            self.axis_cell(relative.x),
            self.axis_cell(relative.y),
            self.axis_cell(relative.z),
        )
    }

    #[allow(clippy::cast_possible_truncation)]
    fn axis_cell(&self, offset: f64) -> i32 {
        let cell = (offset * self.inv_resolution).floor();
        if cell.is_nan() {
            return i32::MIN;
        }
        // `as` saturates on overflow.
        cell as i32
    }

    /// World-space center of a cell.
    #[must_use]
    pub fn grid_to_world(&self, coord: VoxelCoord) -> Point3<f64> {
        let half = self.resolution * 0.5;
        Point3::new(
            f64::from(coord.x).mul_add(self.resolution, self.origin.x) + half,
            f64::from(coord.y).mul_add(self.resolution, self.origin.y) + half,
            f64::from(coord.z).mul_add(self.resolution, self.origin.z) + half,
        )
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGridFrame {
    origin: Point3<f64>,
    resolution: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGridFrame> for GridFrame {
    type Error = SpatialError;

    fn try_from(raw: RawGridFrame) -> Result<Self, Self::Error> {
        Self::new(raw.origin, raw.resolution)
    }
}
