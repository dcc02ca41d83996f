//! Breadth-first wavefront distance field.
//!
//! The engine owns a [`VoxelField`] and a dense distance array of the same
//! size. Setting a goal runs one breadth-first sweep from the goal cell(s);
//! afterwards every free cell holds its step count to the nearest goal cell
//! and lookups are O(1).
//!
//! # Lifecycle
//!
//! ```text
//! new / rebuild ──► Stale ──set_goal──► Valid ──set_goal──► Valid
//!                     ▲                   │
//!                     └────── rebuild ────┘
//! ```
//!
//! A rejected goal leaves both the state and the distances untouched.
//!
//! # Example
//!
//! ```
//! use heuristic_bfs::{EngineState, VoxelField, WavefrontEngine};
//! use heuristic_types::{Connectivity, Distance};
//! use bfs_spatial::{GridDims, VoxelCoord};
//!
//! let dims = GridDims::new(5, 5, 5).unwrap();
//! let field = VoxelField::from_mask(dims, vec![false; 125]).unwrap();
//! let mut engine = WavefrontEngine::new(field, Connectivity::TwentySix);
//! assert_eq!(engine.state(), EngineState::Stale);
//!
//! engine.set_goal(VoxelCoord::new(2, 2, 2)).unwrap();
//! assert_eq!(engine.state(), EngineState::Valid);
//! assert_eq!(engine.get_distance(VoxelCoord::new(2, 2, 2)), Distance::Steps(0));
//! assert_eq!(engine.get_distance(VoxelCoord::new(0, 0, 0)), Distance::Steps(2));
//! ```

use std::collections::VecDeque;
use std::time::Instant;

use bfs_spatial::{DenseGrid, GridDims, VoxelCoord};
use heuristic_types::{Connectivity, Distance, HeuristicError};
use tracing::debug;

use crate::field::VoxelField;
use crate::neighbors::NeighborGenerator;

// Reserved cell values. Step counts stay below `UNDISCOVERED_CELL`.
const WALL_CELL: u32 = u32::MAX;
const UNDISCOVERED_CELL: u32 = u32::MAX - 1;
const MAX_STEPS: u32 = UNDISCOVERED_CELL - 1;

/// Lifecycle state of a [`WavefrontEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineState {
    /// No sweep has run on the current voxel field; every free cell is undiscovered.
    Stale,
    /// Distances reflect the current goal on the current voxel field.
    Valid,
}

/// BFS distance field over a voxel field.
#[derive(Debug, Clone)]
pub struct WavefrontEngine {
    field: VoxelField,
    distances: DenseGrid<u32>,
    connectivity: Connectivity,
    state: EngineState,
    goals: Vec<VoxelCoord>,
    discovered: usize,
}

impl WavefrontEngine {
    /// Creates a stale engine over `field`.
    ///
    /// The connectivity is fixed for the lifetime of the engine.
    #[must_use]
    pub fn new(field: VoxelField, connectivity: Connectivity) -> Self {
        let distances = DenseGrid::filled(field.dims(), UNDISCOVERED_CELL);
        let mut engine = Self {
            field,
            distances,
            connectivity,
            state: EngineState::Stale,
            goals: Vec::new(),
            discovered: 0,
        };
        engine.reset_distances();
        engine
    }

    /// Replaces the voxel field after an environment change.
    ///
    /// The engine becomes [`EngineState::Stale`] and forgets its goal; call
    /// [`WavefrontEngine::set_goal`] again to repopulate distances.
    pub fn rebuild(&mut self, field: VoxelField) {
        if field.dims() != self.distances.dims() {
            self.distances = DenseGrid::filled(field.dims(), UNDISCOVERED_CELL);
        }
        self.field = field;
        self.state = EngineState::Stale;
        self.goals.clear();
        self.reset_distances();
    }

    /// Runs the wavefront from a single goal cell.
    ///
    /// # Errors
    ///
    /// Returns [`HeuristicError::GoalOutOfBounds`] or
    /// [`HeuristicError::GoalInWall`] without modifying the engine.
    pub fn set_goal(&mut self, goal: VoxelCoord) -> Result<(), HeuristicError> {
        self.set_goals(&[goal])
    }

    /// Runs the wavefront from several goal cells at once.
    ///
    /// Every cell ends up with its distance to the nearest goal. Goals are
    /// validated together: if any is rejected, nothing changes. Duplicate
    /// goals are allowed.
    ///
    /// # Errors
    ///
    /// Returns [`HeuristicError::EmptyGoal`] for an empty slice, otherwise the
    /// error for the first out-of-bounds or walled goal.
    pub fn set_goals(&mut self, goals: &[VoxelCoord]) -> Result<(), HeuristicError> {
        if goals.is_empty() {
            return Err(HeuristicError::EmptyGoal);
        }
        for &goal in goals {
            if !self.field.in_bounds(goal) {
                return Err(HeuristicError::GoalOutOfBounds(goal));
            }
            if self.field.is_wall(goal) {
                return Err(HeuristicError::GoalInWall(goal));
            }
        }

        self.sweep(goals);
        self.goals.clear();
        self.goals.extend_from_slice(goals);
        self.state = EngineState::Valid;
        Ok(())
    }

    fn reset_distances(&mut self) {
        for (slot, wall) in self
            .distances
            .as_mut_slice()
            .iter_mut()
            .zip(self.field.as_mask())
        {
            *slot = if *wall { WALL_CELL } else { UNDISCOVERED_CELL };
        }
        self.discovered = 0;
    }

    /// Layered BFS from `sources`, which must be in bounds and free.
    fn sweep(&mut self, sources: &[VoxelCoord]) {
        let start = Instant::now();
        self.reset_distances();

        let dims = self.distances.dims();
        let generator = NeighborGenerator::new(&self.field, self.connectivity);
        let distances = self.distances.as_mut_slice();
        let mut frontier = VecDeque::with_capacity(sources.len());
        let mut discovered = 0usize;

        for &source in sources {
            let Some(index) = dims.index(source) else {
                continue;
            };
            if distances[index] == 0 {
                continue;
            }
            distances[index] = 0;
            discovered += 1;
            frontier.push_back(source);
        }

        while let Some(cell) = frontier.pop_front() {
            let Some(current_index) = dims.index(cell) else {
                continue;
            };
            let current = distances[current_index];
            if current >= MAX_STEPS {
                continue;
            }

            for neighbor in generator.neighbors(cell) {
                let Some(index) = dims.index(neighbor) else {
                    continue;
                };
                if distances[index] == UNDISCOVERED_CELL {
                    distances[index] = current + 1;
                    discovered += 1;
                    frontier.push_back(neighbor);
                }
            }
        }

        self.discovered = discovered;
        debug!(
            sources = sources.len(),
            discovered,
            free_cells = self.field.cell_count() - self.field.wall_count(),
            elapsed_us = start.elapsed().as_micros(),
            "Wavefront sweep complete"
        );
    }

    /// Distance of a cell.
    ///
    /// Callers should check [`WavefrontEngine::in_bounds`] first;
    /// out-of-bounds coordinates are reported as [`Distance::Wall`].
    #[must_use]
    pub fn get_distance(&self, coord: VoxelCoord) -> Distance {
        self.try_distance(coord).unwrap_or(Distance::Wall)
    }

    /// Distance of a cell, or `None` if the coordinate is outside the grid.
    #[must_use]
    pub fn try_distance(&self, coord: VoxelCoord) -> Option<Distance> {
        self.distances.get(coord).map(|&raw| decode(raw))
    }

    /// Returns `true` if the coordinate lies inside the grid.
    #[must_use]
    pub fn in_bounds(&self, coord: VoxelCoord) -> bool {
        self.field.in_bounds(coord)
    }

    /// Returns `true` if the cell is a wall.
    #[must_use]
    pub fn is_wall(&self, coord: VoxelCoord) -> bool {
        self.field.is_wall(coord)
    }

    /// Returns `true` if the cell is free but unreached by the current sweep.
    #[must_use]
    pub fn is_undiscovered(&self, coord: VoxelCoord) -> bool {
        self.distances.get(coord) == Some(&UNDISCOVERED_CELL)
    }

    /// Iterates `(cell, distance)` for every cell in storage order.
    pub fn distances(&self) -> impl Iterator<Item = (VoxelCoord, Distance)> + '_ {
        self.distances
            .iter()
            .map(|(coord, &raw)| (coord, decode(raw)))
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> EngineState {
        self.state
    }

    /// Returns `true` once a goal has been set on the current voxel field.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.state == EngineState::Valid
    }

    /// Goal cells of the last successful sweep (empty while stale).
    #[must_use]
    pub fn goals(&self) -> &[VoxelCoord] {
        &self.goals
    }

    /// Number of cells reached by the last sweep, goals included.
    #[must_use]
    pub const fn discovered_count(&self) -> usize {
        self.discovered
    }

    /// The wavefront connectivity.
    #[must_use]
    pub const fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    /// The voxel field being swept.
    #[must_use]
    pub const fn field(&self) -> &VoxelField {
        &self.field
    }

    /// Grid dimensions.
    #[must_use]
    pub const fn dims(&self) -> GridDims {
        self.field.dims()
    }
}

const fn decode(raw: u32) -> Distance {
    match raw {
        WALL_CELL => Distance::Wall,
        UNDISCOVERED_CELL => Distance::Undiscovered,
        steps => Distance::Steps(steps),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn open_engine(n: usize, connectivity: Connectivity) -> WavefrontEngine {
        let dims = GridDims::new(n, n, n).unwrap();
        let field = VoxelField::from_mask(dims, vec![false; dims.cell_count()]).unwrap();
        WavefrontEngine::new(field, connectivity)
    }

    fn engine_with_walls<F>(n: usize, connectivity: Connectivity, is_wall: F) -> WavefrontEngine
    where
        F: Fn(VoxelCoord) -> bool,
    {
        let dims = GridDims::new(n, n, n).unwrap();
        let mask = dims.iter().map(is_wall).collect();
        WavefrontEngine::new(VoxelField::from_mask(dims, mask).unwrap(), connectivity)
    }

    // ==================== Lifecycle ====================

    #[test]
    fn test_new_engine_is_stale() {
        let engine = engine_with_walls(3, Connectivity::Six, |c| c.x == 0);
        assert_eq!(engine.state(), EngineState::Stale);
        assert!(engine.goals().is_empty());
        assert_eq!(engine.get_distance(VoxelCoord::new(0, 1, 1)), Distance::Wall);
        assert_eq!(
            engine.get_distance(VoxelCoord::new(1, 1, 1)),
            Distance::Undiscovered
        );
    }

    #[test]
    fn test_rebuild_returns_to_stale() {
        let mut engine = open_engine(4, Connectivity::Six);
        engine.set_goal(VoxelCoord::new(1, 1, 1)).unwrap();
        assert!(engine.is_valid());

        let dims = GridDims::new(2, 3, 4).unwrap();
        let field = VoxelField::from_mask(dims, vec![false; 24]).unwrap();
        engine.rebuild(field);

        assert_eq!(engine.state(), EngineState::Stale);
        assert_eq!(engine.dims(), dims);
        assert!(engine.goals().is_empty());
        assert_eq!(engine.discovered_count(), 0);
        assert!(engine.is_undiscovered(VoxelCoord::new(1, 1, 1)));
        assert!(!engine.in_bounds(VoxelCoord::new(2, 0, 0)));
    }

    // ==================== Open grid ====================

    #[test]
    fn test_open_grid_distances_per_connectivity() {
        let goal = VoxelCoord::new(2, 2, 2);
        let corner = VoxelCoord::new(0, 0, 0);
        for (connectivity, expected) in [
            (Connectivity::Six, 6),
            (Connectivity::Eighteen, 3),
            (Connectivity::TwentySix, 2),
        ] {
            let mut engine = open_engine(5, connectivity);
            engine.set_goal(goal).unwrap();
            assert_eq!(engine.get_distance(goal), Distance::Steps(0));
            assert_eq!(engine.get_distance(corner), Distance::Steps(expected));
            assert_eq!(engine.discovered_count(), 125);
        }
    }

    #[test]
    fn test_open_grid_matches_free_space_steps() {
        let goal = VoxelCoord::new(1, 3, 0);
        for connectivity in [
            Connectivity::Six,
            Connectivity::Eighteen,
            Connectivity::TwentySix,
        ] {
            let mut engine = open_engine(5, connectivity);
            engine.set_goal(goal).unwrap();
            for (cell, distance) in engine.distances() {
                assert_eq!(
                    distance,
                    Distance::Steps(connectivity.free_space_steps(cell, goal)),
                    "{connectivity:?} at {cell}"
                );
            }
        }
    }

    // ==================== Rejected goals ====================

    #[test]
    fn test_goal_in_wall_preserves_field() {
        let mut engine = engine_with_walls(5, Connectivity::TwentySix, |c| c.x == 4);
        engine.set_goal(VoxelCoord::new(0, 0, 0)).unwrap();
        let before: Vec<_> = engine.distances().collect();

        let err = engine.set_goal(VoxelCoord::new(4, 1, 1)).unwrap_err();
        assert_eq!(err, HeuristicError::GoalInWall(VoxelCoord::new(4, 1, 1)));

        let after: Vec<_> = engine.distances().collect();
        assert_eq!(before, after);
        assert_eq!(engine.goals(), &[VoxelCoord::new(0, 0, 0)]);
        assert!(engine.is_valid());
    }

    #[test]
    fn test_goal_out_of_bounds_keeps_stale() {
        let mut engine = open_engine(3, Connectivity::Six);
        let err = engine.set_goal(VoxelCoord::new(3, 0, 0)).unwrap_err();
        assert_eq!(err, HeuristicError::GoalOutOfBounds(VoxelCoord::new(3, 0, 0)));
        assert_eq!(engine.state(), EngineState::Stale);
        assert!(engine.is_undiscovered(VoxelCoord::new(0, 0, 0)));
    }

    // ==================== Enclosed cells ====================

    #[test]
    fn test_enclosed_cell_stays_undiscovered() {
        let pocket = VoxelCoord::new(2, 2, 2);
        // Shell of walls around the pocket.
        let mut engine = engine_with_walls(5, Connectivity::TwentySix, |c| {
            c != pocket && c.chebyshev_distance(pocket) == 1
        });
        engine.set_goal(VoxelCoord::new(0, 0, 0)).unwrap();

        assert_eq!(engine.get_distance(pocket), Distance::Undiscovered);
        assert!(engine.is_undiscovered(pocket));
        assert_eq!(engine.discovered_count(), 125 - 26 - 1);
    }

    #[test]
    fn test_edge_gap_needs_eighteen() {
        // Two free cells that touch only along an edge.
        let dims = GridDims::new(2, 2, 1).unwrap();
        let mask = dims.iter().map(|c| c.x != c.y).collect::<Vec<_>>();
        let far = VoxelCoord::new(1, 1, 0);

        for (connectivity, expected) in [
            (Connectivity::Six, Distance::Undiscovered),
            (Connectivity::Eighteen, Distance::Steps(1)),
            (Connectivity::TwentySix, Distance::Steps(1)),
        ] {
            let field = VoxelField::from_mask(dims, mask.clone()).unwrap();
            let mut engine = WavefrontEngine::new(field, connectivity);
            engine.set_goal(VoxelCoord::origin()).unwrap();
            assert_eq!(engine.get_distance(far), expected, "{connectivity:?}");
        }
    }

    #[test]
    fn test_corner_gap_needs_twenty_six() {
        // Two free cells that touch only at a corner.
        let far = VoxelCoord::new(1, 1, 1);
        let is_wall = |c: VoxelCoord| c != VoxelCoord::origin() && c != far;

        let mut eighteen = engine_with_walls(2, Connectivity::Eighteen, is_wall);
        eighteen.set_goal(VoxelCoord::origin()).unwrap();
        assert!(eighteen.is_undiscovered(far));

        let mut twenty_six = engine_with_walls(2, Connectivity::TwentySix, is_wall);
        twenty_six.set_goal(VoxelCoord::origin()).unwrap();
        assert_eq!(twenty_six.get_distance(far), Distance::Steps(1));
    }

    // ==================== Walls and idempotence ====================

    #[test]
    fn test_walls_never_receive_distance() {
        let mut engine =
            engine_with_walls(6, Connectivity::TwentySix, |c| c.y == 3 && c.x > 0);
        let walls: Vec<_> = engine.field().walls().collect();
        for &wall in &walls {
            assert_eq!(engine.get_distance(wall), Distance::Wall);
        }
        engine.set_goal(VoxelCoord::new(5, 0, 5)).unwrap();
        for &wall in &walls {
            assert_eq!(engine.get_distance(wall), Distance::Wall);
            assert!(engine.is_wall(wall));
        }
        // The wall has a gap at x == 0, so the far side is reachable.
        assert!(engine.get_distance(VoxelCoord::new(5, 5, 5)).is_reachable());
    }

    #[test]
    fn test_rerun_is_idempotent() {
        let mut engine = engine_with_walls(6, Connectivity::Eighteen, |c| {
            (c.x == 2 && c.z < 4) || (c.x == 4 && c.z > 1)
        });
        let goal = VoxelCoord::new(0, 3, 0);
        engine.set_goal(goal).unwrap();
        let first: Vec<_> = engine.distances().collect();
        engine.set_goal(VoxelCoord::new(5, 5, 5)).unwrap();
        engine.set_goal(goal).unwrap();
        let second: Vec<_> = engine.distances().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_detour_around_wall() {
        // A wall plane at x == 2 with a single hole at (2, 4, 0).
        let hole = VoxelCoord::new(2, 4, 0);
        let mut engine = engine_with_walls(5, Connectivity::Six, |c| c.x == 2 && c != hole);
        engine.set_goal(VoxelCoord::new(0, 0, 0)).unwrap();
        // 0,0,0 -> 1,4,0 (5 steps) -> hole (6) -> 3,4,0 (7) -> 4,0,0 (12)
        assert_eq!(
            engine.get_distance(VoxelCoord::new(4, 0, 0)),
            Distance::Steps(12)
        );
    }

    // ==================== Multi-source ====================

    #[test]
    fn test_multiple_goals_take_nearest() {
        let mut engine = open_engine(7, Connectivity::Six);
        let goals = [VoxelCoord::new(0, 0, 0), VoxelCoord::new(6, 6, 6)];
        engine.set_goals(&goals).unwrap();

        for (cell, distance) in engine.distances() {
            let nearest = goals
                .iter()
                .map(|g| g.manhattan_distance(cell))
                .min()
                .unwrap();
            assert_eq!(distance, Distance::Steps(nearest));
        }
        assert_eq!(engine.goals(), &goals);
    }

    #[test]
    fn test_duplicate_goals() {
        let mut engine = open_engine(3, Connectivity::Six);
        let g = VoxelCoord::new(1, 1, 1);
        engine.set_goals(&[g, g]).unwrap();
        assert_eq!(engine.get_distance(g), Distance::Steps(0));
        assert_eq!(engine.discovered_count(), 27);
    }

    #[test]
    fn test_goal_set_is_all_or_nothing() {
        let mut engine = engine_with_walls(4, Connectivity::Six, |c| c == VoxelCoord::new(3, 3, 3));
        engine.set_goal(VoxelCoord::new(0, 0, 0)).unwrap();

        let err = engine
            .set_goals(&[VoxelCoord::new(1, 1, 1), VoxelCoord::new(3, 3, 3)])
            .unwrap_err();
        assert!(err.is_invalid_goal());
        assert_eq!(engine.goals(), &[VoxelCoord::new(0, 0, 0)]);
        assert_eq!(
            engine.get_distance(VoxelCoord::new(1, 1, 1)),
            Distance::Steps(3)
        );

        assert_eq!(engine.set_goals(&[]), Err(HeuristicError::EmptyGoal));
    }

    #[test]
    fn test_out_of_bounds_lookup() {
        let mut engine = open_engine(3, Connectivity::TwentySix);
        engine.set_goal(VoxelCoord::new(1, 1, 1)).unwrap();
        let outside = VoxelCoord::new(-1, 0, 0);
        assert!(!engine.in_bounds(outside));
        assert_eq!(engine.try_distance(outside), None);
        assert_eq!(engine.get_distance(outside), Distance::Wall);
        assert!(!engine.is_wall(outside));
        assert!(!engine.is_undiscovered(outside));
    }
}
