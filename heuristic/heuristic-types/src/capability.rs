//! The heuristic interface seen by a search engine.
//!
//! A search engine may hold several heuristics behind `&dyn RobotHeuristic`.
//! Not every heuristic can answer every query shape, so each reports what it
//! supports through [`Capability`] instead of silently returning zeros.
//! Unsupported entry points still exist and return a non-informative value
//! (0), which keeps any search correct at the price of guidance.

use nalgebra::Point3;

use crate::cost::Cost;
use crate::state::StateId;

/// A query shape a heuristic may or may not support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Capability {
    /// Cost from a state to the goal.
    GoalQuery,
    /// Cost from the start to a state.
    StartQuery,
    /// Cost between two arbitrary states.
    PairwiseQuery,
    /// Workspace distance from a point to the goal.
    MetricGoalQuery,
    /// Workspace distance from a point to the start.
    MetricStartQuery,
}

impl Capability {
    /// Every capability, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::GoalQuery,
        Self::StartQuery,
        Self::PairwiseQuery,
        Self::MetricGoalQuery,
        Self::MetricStartQuery,
    ];
}

/// Heuristic entry points consumed by a graph search.
pub trait RobotHeuristic {
    /// Returns `true` if the heuristic gives informative answers for `capability`.
    fn supports(&self, capability: Capability) -> bool;

    /// Estimated cost from `state` to the goal.
    fn goal_heuristic(&self, state: StateId) -> Cost;

    /// Estimated cost from the start to `state`.
    fn start_heuristic(&self, state: StateId) -> Cost;

    /// Estimated cost from `from` to `to`.
    fn from_to_heuristic(&self, from: StateId, to: StateId) -> Cost;

    /// Workspace distance from `point` to the goal, in world units.
    fn metric_goal_distance(&self, point: Point3<f64>) -> f64;

    /// Workspace distance from the start to `point`, in world units.
    fn metric_start_distance(&self, point: Point3<f64>) -> f64;
}

/// A heuristic that knows nothing: every query returns zero.
///
/// Searching with it degenerates to uniform-cost search.
///
/// ```
/// use heuristic_types::{Capability, RobotHeuristic, StateId, ZeroHeuristic};
///
/// let h = ZeroHeuristic;
/// assert_eq!(h.goal_heuristic(StateId(3)), 0);
/// assert!(Capability::ALL.iter().all(|c| h.supports(*c)));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl RobotHeuristic for ZeroHeuristic {
    fn supports(&self, _capability: Capability) -> bool {
        true
    }

    fn goal_heuristic(&self, _state: StateId) -> Cost {
        0
    }

    fn start_heuristic(&self, _state: StateId) -> Cost {
        0
    }

    fn from_to_heuristic(&self, _from: StateId, _to: StateId) -> Cost {
        0
    }

    fn metric_goal_distance(&self, _point: Point3<f64>) -> f64 {
        0.0
    }

    fn metric_start_distance(&self, _point: Point3<f64>) -> f64 {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_object() {
        let heuristics: Vec<Box<dyn RobotHeuristic>> = vec![Box::new(ZeroHeuristic)];
        for h in &heuristics {
            assert_eq!(h.from_to_heuristic(StateId(1), StateId(2)), 0);
            assert!(h.metric_goal_distance(Point3::origin()).abs() < f64::EPSILON);
        }
    }
}
