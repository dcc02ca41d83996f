//! Search-state collaborators.
//!
//! The heuristic never owns the search graph. It receives opaque
//! [`StateId`]s and asks injected collaborators what they mean:
//!
//! - [`StateLookup`] maps a state to the grid cell of its planning point
//! - [`GoalTest`] says whether a state is the search goal
//! - [`PointProjection`] maps a state to a world-space point; wrap it in a
//!   [`ProjectedLookup`] to obtain a [`StateLookup`]
//!
//! Closures and `hashbrown` collections implement the traits directly:
//!
//! ```
//! use heuristic_types::{GoalTest, StateId, StateLookup};
//! use bfs_spatial::VoxelCoord;
//! use hashbrown::{HashMap, HashSet};
//!
//! let mut cells = HashMap::new();
//! cells.insert(StateId(7), VoxelCoord::new(1, 2, 3));
//! assert_eq!(cells.resolve(StateId(7)), Some(VoxelCoord::new(1, 2, 3)));
//! assert_eq!(cells.resolve(StateId(8)), None);
//!
//! let goals: HashSet<StateId> = [StateId(0)].into_iter().collect();
//! assert!(goals.is_goal(StateId(0)));
//!
//! let even = |id: StateId| id.0 % 2 == 0;
//! assert!(even.is_goal(StateId(4)));
//! ```

use bfs_spatial::{ClearanceGrid, VoxelCoord};
use hashbrown::{HashMap, HashSet};
use nalgebra::Point3;

/// Opaque identifier of a search state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateId(pub i32);

impl From<i32> for StateId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for StateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Resolves search states to grid cells.
pub trait StateLookup {
    /// Grid cell of the state's planning point, or `None` if the id is unknown.
    fn resolve(&self, state: StateId) -> Option<VoxelCoord>;
}

/// Recognizes the search goal state.
pub trait GoalTest {
    /// Returns `true` if `state` is the designated goal.
    fn is_goal(&self, state: StateId) -> bool;
}

/// Projects search states into the workspace.
pub trait PointProjection {
    /// World-space point of the state's planning link, or `None` if unknown.
    fn project(&self, state: StateId) -> Option<Point3<f64>>;
}

impl<F> StateLookup for F
where
    F: Fn(StateId) -> Option<VoxelCoord>,
{
    fn resolve(&self, state: StateId) -> Option<VoxelCoord> {
        self(state)
    }
}

impl StateLookup for HashMap<StateId, VoxelCoord> {
    fn resolve(&self, state: StateId) -> Option<VoxelCoord> {
        self.get(&state).copied()
    }
}

impl<F> GoalTest for F
where
    F: Fn(StateId) -> bool,
{
    fn is_goal(&self, state: StateId) -> bool {
        self(state)
    }
}

impl GoalTest for HashSet<StateId> {
    fn is_goal(&self, state: StateId) -> bool {
        self.contains(&state)
    }
}

impl PointProjection for HashMap<StateId, Point3<f64>> {
    fn project(&self, state: StateId) -> Option<Point3<f64>> {
        self.get(&state).copied()
    }
}

/// A [`StateLookup`] that projects states to world points and maps them to cells.
///
/// The resulting cell may lie outside the grid; bounds are the heuristic's
/// concern, not the lookup's.
///
/// # Example
///
/// ```
/// use heuristic_types::{ProjectedLookup, StateId, StateLookup};
/// use bfs_spatial::{DenseClearanceGrid, GridDims, GridFrame, VoxelCoord};
/// use hashbrown::HashMap;
/// use nalgebra::Point3;
///
/// let grid = DenseClearanceGrid::uniform(
///     GridDims::new(10, 10, 10).unwrap(),
///     GridFrame::with_resolution(0.1).unwrap(),
///     1.0,
/// );
/// let mut points = HashMap::new();
/// points.insert(StateId(1), Point3::new(0.25, 0.35, 0.05));
///
/// let lookup = ProjectedLookup::new(&points, &grid);
/// assert_eq!(lookup.resolve(StateId(1)), Some(VoxelCoord::new(2, 3, 0)));
/// assert_eq!(lookup.resolve(StateId(2)), None);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ProjectedLookup<'a, P: ?Sized, G: ?Sized> {
    projection: &'a P,
    grid: &'a G,
}

impl<'a, P: ?Sized, G: ?Sized> ProjectedLookup<'a, P, G> {
    /// Combines a projection with the grid's world → grid mapping.
    #[must_use]
    pub const fn new(projection: &'a P, grid: &'a G) -> Self {
        Self { projection, grid }
    }
}

impl<P, G> StateLookup for ProjectedLookup<'_, P, G>
where
    P: PointProjection + ?Sized,
    G: ClearanceGrid + ?Sized,
{
    fn resolve(&self, state: StateId) -> Option<VoxelCoord> {
        self.projection
            .project(state)
            .map(|point| self.grid.world_to_grid(point))
    }
}
