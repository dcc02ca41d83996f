//! Diagnostic views of the wavefront.
//!
//! Two views are produced: the wall cells as a cloud of cubes, and one value
//! marker per discovered cell carrying its distance and a display hue. How
//! they are drawn is up to the [`DiagnosticsSink`] the caller passes in.

use bfs_spatial::{ClearanceGrid, VoxelCoord};
use nalgebra::Point3;

use crate::wavefront::WavefrontEngine;

/// Distance at which the hue ramp saturates.
pub const HUE_RAMP_STEPS: f64 = 30.0;

/// Hue, in degrees, reached at [`HUE_RAMP_STEPS`] and beyond.
pub const MAX_HUE: f64 = 300.0;

/// RGBA colour suggested for wall cubes.
pub const WALL_COLOR: [f32; 4] = [100.0 / 255.0, 149.0 / 255.0, 238.0 / 255.0, 1.0];

/// Wall cells in world space.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WallCloud {
    /// Centre of every wall cell.
    pub points: Vec<Point3<f64>>,
    /// Edge length of each cube (the grid resolution).
    pub cube_size: f64,
}

impl WallCloud {
    /// Number of wall cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if there are no walls.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Distance annotation for one discovered cell.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValueMarker {
    /// Grid cell.
    pub cell: VoxelCoord,
    /// World-space centre of the cell.
    pub position: Point3<f64>,
    /// BFS step count to the goal.
    pub distance: u32,
    /// Display hue in degrees, `[0, 300]`.
    pub hue: f64,
}

/// Receiver for diagnostic output.
pub trait DiagnosticsSink {
    /// Receives the wall cloud.
    fn publish_walls(&mut self, walls: &WallCloud);

    /// Receives one marker per discovered cell.
    fn publish_values(&mut self, values: &[ValueMarker]);
}

/// Hue for a step count: linear from 0 at the goal to [`MAX_HUE`] at
/// [`HUE_RAMP_STEPS`], clamped beyond.
#[must_use]
pub fn distance_hue(distance: u32) -> f64 {
    (f64::from(distance) / HUE_RAMP_STEPS * MAX_HUE).clamp(0.0, MAX_HUE)
}

/// Iterates the wall cells of the engine's field.
pub fn wall_cells(engine: &WavefrontEngine) -> impl Iterator<Item = VoxelCoord> + '_ {
    engine.field().walls()
}

/// Iterates `(cell, steps)` for every discovered, non-wall cell.
pub fn distance_values(engine: &WavefrontEngine) -> impl Iterator<Item = (VoxelCoord, u32)> + '_ {
    engine
        .distances()
        .filter_map(|(cell, distance)| distance.steps().map(|steps| (cell, steps)))
}

/// Collects the walls into world space using `grid` for placement.
pub fn wall_cloud<G>(engine: &WavefrontEngine, grid: &G) -> WallCloud
where
    G: ClearanceGrid + ?Sized,
{
    WallCloud {
        points: wall_cells(engine).map(|c| grid.grid_to_world(c)).collect(),
        cube_size: grid.resolution(),
    }
}

/// Builds one marker per discovered cell.
pub fn value_markers<G>(engine: &WavefrontEngine, grid: &G) -> Vec<ValueMarker>
where
    G: ClearanceGrid + ?Sized,
{
    distance_values(engine)
        .map(|(cell, distance)| ValueMarker {
            cell,
            position: grid.grid_to_world(cell),
            distance,
            hue: distance_hue(distance),
        })
        .collect()
}

/// Sink that keeps the last published data. Useful in tests and tools.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    /// Last wall cloud received.
    pub walls: Option<WallCloud>,
    /// Last value markers received.
    pub values: Vec<ValueMarker>,
    /// Number of publish calls of either kind.
    pub publish_count: usize,
}

impl DiagnosticsSink for RecordingSink {
    fn publish_walls(&mut self, walls: &WallCloud) {
        self.walls = Some(walls.clone());
        self.publish_count += 1;
    }

    fn publish_values(&mut self, values: &[ValueMarker]) {
        self.values = values.to_vec();
        self.publish_count += 1;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::field::VoxelField;
    use approx::assert_relative_eq;
    use bfs_spatial::{DenseClearanceGrid, GridDims, GridFrame};
    use heuristic_types::Connectivity;

    fn setup() -> (DenseClearanceGrid, WavefrontEngine) {
        let dims = GridDims::new(4, 3, 2).unwrap();
        let frame = GridFrame::with_resolution(0.5).unwrap();
        // Plane of walls at x == 2 with a gap along y == 0.
        let grid = DenseClearanceGrid::from_fn(dims, frame, |c| {
            if c.x == 2 && c.y > 0 { 0.0 } else { 1.0 }
        });
        let field = VoxelField::build(&grid, 0.0);
        let engine = WavefrontEngine::new(field, Connectivity::Six);
        (grid, engine)
    }

    #[test]
    fn test_hue_ramp() {
        assert_eq!(distance_hue(0), 0.0);
        assert_relative_eq!(distance_hue(15), 150.0);
        assert_eq!(distance_hue(30), 300.0);
        assert_eq!(distance_hue(1000), 300.0);
    }

    #[test]
    fn test_walls_listed_before_goal() {
        let (grid, engine) = setup();
        let cloud = wall_cloud(&engine, &grid);
        assert_eq!(cloud.len(), 4);
        assert_eq!(cloud.cube_size, 0.5);
        for point in &cloud.points {
            assert_relative_eq!(point.x, 1.25);
        }
        // Stale engine: nothing discovered yet.
        assert!(value_markers(&engine, &grid).is_empty());
    }

    #[test]
    fn test_values_skip_walls() {
        let (grid, mut engine) = setup();
        engine.set_goal(VoxelCoord::new(0, 0, 0)).unwrap();

        let markers = value_markers(&engine, &grid);
        assert_eq!(markers.len(), 24 - 4);
        assert!(markers.iter().all(|m| !engine.is_wall(m.cell)));

        let goal = markers.iter().find(|m| m.distance == 0).unwrap();
        assert_eq!(goal.cell, VoxelCoord::new(0, 0, 0));
        assert_eq!(goal.hue, 0.0);
        assert_relative_eq!(goal.position.x, 0.25);

        // Crossing the gap first keeps the path monotone: 3 + 2 + 1.
        let far = markers
            .iter()
            .find(|m| m.cell == VoxelCoord::new(3, 2, 1))
            .unwrap();
        assert_eq!(far.distance, 6);
        assert_relative_eq!(far.hue, 60.0);
    }

    #[test]
    fn test_recording_sink() {
        let (grid, mut engine) = setup();
        engine.set_goal(VoxelCoord::new(3, 0, 0)).unwrap();

        let mut sink = RecordingSink::default();
        sink.publish_walls(&wall_cloud(&engine, &grid));
        sink.publish_values(&value_markers(&engine, &grid));

        assert_eq!(sink.publish_count, 2);
        assert_eq!(sink.walls.unwrap().len(), 4);
        assert_eq!(sink.values.len(), distance_values(&engine).count());
    }
}
