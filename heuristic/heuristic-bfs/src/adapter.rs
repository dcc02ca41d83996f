//! BFS distance-to-goal heuristic for a graph search.
//!
//! [`BfsHeuristic`] sits between a search engine and a [`WavefrontEngine`]:
//! it builds the voxel field from a clearance grid, resolves goals, and turns
//! opaque state ids into grid lookups through an injected [`StateLookup`].
//!
//! # Example
//!
//! ```
//! use heuristic_bfs::{BfsHeuristic, RobotHeuristic};
//! use heuristic_types::{BfsHeuristicConfig, GoalPoint, INFINITE_COST, StateId};
//! use bfs_spatial::{DenseClearanceGrid, GridDims, GridFrame, VoxelCoord};
//!
//! let grid = DenseClearanceGrid::uniform(
//!     GridDims::new(8, 8, 8).unwrap(),
//!     GridFrame::with_resolution(0.1).unwrap(),
//!     1.0,
//! );
//! // State n sits at cell (n, 0, 0); state 7 is the goal.
//! let lookup = |id: StateId| (0..8).contains(&id.0).then(|| VoxelCoord::new(id.0, 0, 0));
//! let is_goal = |id: StateId| id.0 == 7;
//!
//! let mut heuristic =
//!     BfsHeuristic::new(&grid, lookup, is_goal, BfsHeuristicConfig::default()).unwrap();
//!
//! // Nothing is reachable until a goal is set.
//! assert_eq!(heuristic.cost_to_goal(VoxelCoord::new(0, 0, 0)), INFINITE_COST);
//!
//! heuristic.set_goal(GoalPoint::cell(7, 0, 0)).unwrap();
//! assert_eq!(heuristic.goal_heuristic(StateId(4)), 300);
//! assert_eq!(heuristic.goal_heuristic(StateId(99)), 0);
//! ```

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use bfs_spatial::{ClearanceGrid, VoxelCoord};
use heuristic_types::{
    BfsHeuristicConfig, Capability, Cost, Distance, GoalPoint, GoalTest, HeuristicError,
    INFINITE_COST, RobotHeuristic, StateId, StateLookup, WALL_METRIC_STEPS, scale_steps,
};
use nalgebra::Point3;
use tracing::{error, info, warn};

use crate::diagnostics::{self, DiagnosticsSink};
use crate::field::VoxelField;
use crate::wavefront::WavefrontEngine;

/// Wavefront heuristic over a borrowed clearance grid.
///
/// Queries take `&self`; goal changes and resyncs take `&mut self`, so a
/// goal can never change underneath a running query.
pub struct BfsHeuristic<'a, G: ?Sized, L, T> {
    grid: &'a G,
    lookup: L,
    goal_test: T,
    config: BfsHeuristicConfig,
    engine: WavefrontEngine,
    warned_start: AtomicBool,
    warned_from_to: AtomicBool,
    warned_metric_start: AtomicBool,
}

impl<'a, G, L, T> BfsHeuristic<'a, G, L, T>
where
    G: ClearanceGrid + ?Sized,
    L: StateLookup,
    T: GoalTest,
{
    /// Builds the voxel field for `grid` and an engine with no goal.
    ///
    /// # Errors
    ///
    /// Returns [`HeuristicError::InvalidConfig`] if `config` fails validation.
    pub fn new(
        grid: &'a G,
        lookup: L,
        goal_test: T,
        config: BfsHeuristicConfig,
    ) -> Result<Self, HeuristicError> {
        config.validate()?;
        let field = VoxelField::build(grid, config.clearance_radius());
        let engine = WavefrontEngine::new(field, config.connectivity());
        Ok(Self {
            grid,
            lookup,
            goal_test,
            config,
            engine,
            warned_start: AtomicBool::new(false),
            warned_from_to: AtomicBool::new(false),
            warned_metric_start: AtomicBool::new(false),
        })
    }

    /// Rebuilds the voxel field from the grid after the environment changed.
    ///
    /// The goal is dropped; call [`BfsHeuristic::set_goal`] again.
    pub fn sync(&mut self) {
        let field = VoxelField::build(self.grid, self.config.clearance_radius());
        self.engine.rebuild(field);
    }

    /// Switches to a different clearance grid and resyncs.
    pub fn replace_grid(&mut self, grid: &'a G) {
        self.grid = grid;
        self.sync();
    }

    /// Sets the goal and runs the wavefront.
    ///
    /// World points are mapped to the cell containing them. Regions seed the
    /// wavefront from every free cell inside the grid; parts of the box
    /// outside the grid are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`HeuristicError::GoalOutOfBounds`], [`HeuristicError::GoalInWall`]
    /// or, for a region with no free cells, [`HeuristicError::EmptyGoal`]. The
    /// previous distances stay in place.
    pub fn set_goal(&mut self, goal: impl Into<GoalPoint>) -> Result<(), HeuristicError> {
        let goal = goal.into();
        let result = match &goal {
            GoalPoint::Cell(cell) => self.set_goal_cell(*cell),
            GoalPoint::World(point) => self.set_goal_cell(self.grid.world_to_grid(*point)),
            GoalPoint::Region(bounds) => {
                let field = self.engine.field();
                let cells: Vec<VoxelCoord> = bounds
                    .intersection(&self.engine.dims().bounds())
                    .into_iter()
                    .flat_map(|b| b.iter())
                    .filter(|c| field.is_free(*c))
                    .collect();
                info!(
                    region = ?bounds,
                    cells = cells.len(),
                    "Setting BFS heuristic goal region"
                );
                self.engine.set_goals(&cells)
            }
        };

        if let Err(err) = &result {
            error!(goal = ?goal, error = %err, "Rejected BFS heuristic goal");
        }
        result
    }

    fn set_goal_cell(&mut self, cell: VoxelCoord) -> Result<(), HeuristicError> {
        info!(x = cell.x, y = cell.y, z = cell.z, "Setting BFS heuristic goal");
        self.engine.set_goal(cell)
    }

    /// Search cost from a cell to the goal.
    ///
    /// [`INFINITE_COST`] for cells outside the grid, walls, and cells the
    /// wavefront has not reached.
    #[must_use]
    pub fn cost_to_goal(&self, cell: VoxelCoord) -> Cost {
        match self.engine.try_distance(cell) {
            Some(Distance::Steps(steps)) => scale_steps(steps, self.config.cost_per_cell()),
            _ => INFINITE_COST,
        }
    }

    /// Iterates the wall cells.
    pub fn walls(&self) -> impl Iterator<Item = VoxelCoord> + '_ {
        diagnostics::wall_cells(&self.engine)
    }

    /// Iterates `(cell, steps)` for every discovered cell.
    pub fn values(&self) -> impl Iterator<Item = (VoxelCoord, u32)> + '_ {
        diagnostics::distance_values(&self.engine)
    }

    /// Sends the wall cloud to `sink`.
    pub fn publish_walls<S>(&self, sink: &mut S)
    where
        S: DiagnosticsSink + ?Sized,
    {
        sink.publish_walls(&diagnostics::wall_cloud(&self.engine, self.grid));
    }

    /// Sends the distance markers to `sink`.
    pub fn publish_values<S>(&self, sink: &mut S)
    where
        S: DiagnosticsSink + ?Sized,
    {
        sink.publish_values(&diagnostics::value_markers(&self.engine, self.grid));
    }

    /// The wavefront engine.
    #[must_use]
    pub const fn engine(&self) -> &WavefrontEngine {
        &self.engine
    }

    /// The heuristic configuration.
    #[must_use]
    pub const fn config(&self) -> &BfsHeuristicConfig {
        &self.config
    }

    /// The clearance grid.
    #[must_use]
    pub const fn grid(&self) -> &'a G {
        self.grid
    }
}

fn warn_once(flag: &AtomicBool, query: &'static str) {
    if !flag.swap(true, Ordering::Relaxed) {
        warn!(query, "BFS heuristic does not support this query; returning 0");
    }
}

impl<G, L, T> RobotHeuristic for BfsHeuristic<'_, G, L, T>
where
    G: ClearanceGrid + ?Sized,
    L: StateLookup,
    T: GoalTest,
{
    fn supports(&self, capability: Capability) -> bool {
        matches!(
            capability,
            Capability::GoalQuery | Capability::MetricGoalQuery
        )
    }

    fn goal_heuristic(&self, state: StateId) -> Cost {
        self.lookup
            .resolve(state)
            .map_or(0, |cell| self.cost_to_goal(cell))
    }

    fn start_heuristic(&self, _state: StateId) -> Cost {
        warn_once(&self.warned_start, "start_heuristic");
        0
    }

    fn from_to_heuristic(&self, from: StateId, to: StateId) -> Cost {
        if self.goal_test.is_goal(to) {
            self.goal_heuristic(from)
        } else {
            warn_once(&self.warned_from_to, "from_to_heuristic");
            0
        }
    }

    fn metric_goal_distance(&self, point: Point3<f64>) -> f64 {
        let cell = self.grid.world_to_grid(point);
        let steps = match self.engine.try_distance(cell) {
            Some(Distance::Steps(steps)) => f64::from(steps),
            _ => WALL_METRIC_STEPS,
        };
        steps * self.grid.resolution()
    }

    fn metric_start_distance(&self, _point: Point3<f64>) -> f64 {
        warn_once(&self.warned_metric_start, "metric_start_distance");
        0.0
    }
}

impl<G: ?Sized, L, T> fmt::Debug for BfsHeuristic<'_, G, L, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BfsHeuristic")
            .field("config", &self.config)
            .field("dims", &self.engine.dims())
            .field("state", &self.engine.state())
            .field("goals", &self.engine.goals())
            .finish_non_exhaustive()
    }
}
