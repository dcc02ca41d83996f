//! Distances and heuristic costs.
//!
//! Distances are grid step counts produced by a wavefront. Costs are what a
//! search engine consumes: step counts scaled into edge-cost units, with a
//! reserved value for "unreachable".

/// Heuristic cost in the search engine's integer cost units.
pub type Cost = i32;

/// Cost returned for states that cannot reach the goal or lie outside the grid.
///
/// Searches should treat this as infinite and prune the state.
pub const INFINITE_COST: Cost = Cost::MAX;

/// Step count used to price out-of-grid metric queries.
///
/// Metric queries return `WALL_METRIC_STEPS × resolution` instead of an
/// unbounded value so downstream arithmetic stays finite.
#[allow(clippy::cast_lossless)]
pub const WALL_METRIC_STEPS: f64 = INFINITE_COST as f64;

/// Wavefront distance of a single cell.
///
/// # Example
///
/// ```
/// use heuristic_types::Distance;
///
/// let d = Distance::Steps(4);
/// assert_eq!(d.steps(), Some(4));
/// assert!(Distance::Wall.is_wall());
/// assert_eq!(Distance::Undiscovered.steps(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Distance {
    /// The cell is an obstacle; it never receives a distance.
    Wall,
    /// The cell is free but was not reached from any goal cell.
    Undiscovered,
    /// Minimum number of grid steps to the nearest goal cell.
    Steps(u32),
}

impl Distance {
    /// Step count, if the cell was reached.
    #[must_use]
    pub const fn steps(self) -> Option<u32> {
        match self {
            Self::Steps(n) => Some(n),
            Self::Wall | Self::Undiscovered => None,
        }
    }

    /// Returns `true` for obstacle cells.
    #[must_use]
    pub const fn is_wall(self) -> bool {
        matches!(self, Self::Wall)
    }

    /// Returns `true` for free cells not connected to a goal.
    #[must_use]
    pub const fn is_undiscovered(self) -> bool {
        matches!(self, Self::Undiscovered)
    }

    /// Returns `true` if the cell has a finite distance.
    #[must_use]
    pub const fn is_reachable(self) -> bool {
        matches!(self, Self::Steps(_))
    }
}

/// Scales a step count into heuristic cost units.
///
/// The result is `cost_per_cell × steps`, saturating one below
/// [`INFINITE_COST`] so a very distant but reachable cell is never confused
/// with an unreachable one. Negative `cost_per_cell` values are treated as 0.
///
/// # Example
///
/// ```
/// use heuristic_types::{scale_steps, INFINITE_COST};
///
/// assert_eq!(scale_steps(3, 100), 300);
/// assert_eq!(scale_steps(u32::MAX, 100), INFINITE_COST - 1);
/// ```
#[must_use]
pub fn scale_steps(steps: u32, cost_per_cell: Cost) -> Cost {
    let per_cell = i64::from(cost_per_cell.max(0));
    let scaled = per_cell.saturating_mul(i64::from(steps));
    let cap = i64::from(INFINITE_COST - 1);
    Cost::try_from(scaled.min(cap)).unwrap_or(INFINITE_COST - 1)
}
