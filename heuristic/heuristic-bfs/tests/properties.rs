//! Property-based tests for the wavefront engine.
//!
//! These tests use proptest to generate random wall layouts and verify the
//! distance field invariants.
//!
//! Run with: cargo test -p heuristic-bfs -- properties

#![allow(clippy::unwrap_used)]

use bfs_spatial::{DenseClearanceGrid, GridDims, GridFrame, VoxelCoord};
use heuristic_bfs::{NeighborGenerator, VoxelField, WavefrontEngine};
use heuristic_types::{Connectivity, Distance, HeuristicError};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn arb_connectivity() -> impl Strategy<Value = Connectivity> {
    prop_oneof![
        Just(Connectivity::Six),
        Just(Connectivity::Eighteen),
        Just(Connectivity::TwentySix),
    ]
}

fn arb_dims() -> impl Strategy<Value = GridDims> {
    (1usize..=6, 1usize..=6, 1usize..=5).prop_map(|(nx, ny, nz)| GridDims::new(nx, ny, nz).unwrap())
}

/// A random wall mask with roughly a third of the cells blocked, plus a
/// goal candidate index.
fn arb_field() -> impl Strategy<Value = (VoxelField, usize)> {
    arb_dims().prop_flat_map(|dims| {
        let n = dims.cell_count();
        (
            prop::collection::vec(prop::bool::weighted(0.3), n),
            0..n,
        )
            .prop_map(move |(mask, goal)| (VoxelField::from_mask(dims, mask).unwrap(), goal))
    })
}

/// A random clearance grid with values in `[0, 1)`.
fn arb_clearance() -> impl Strategy<Value = DenseClearanceGrid> {
    arb_dims().prop_flat_map(|dims| {
        prop::collection::vec(0.0..1.0f64, dims.cell_count()).prop_map(move |values| {
            let frame = GridFrame::with_resolution(0.1).unwrap();
            DenseClearanceGrid::from_values(dims, frame, values).unwrap()
        })
    })
}

/// First free cell at or after `index`, wrapping around.
fn free_cell_from(field: &VoxelField, index: usize) -> Option<VoxelCoord> {
    let dims = field.dims();
    let n = dims.cell_count();
    (0..n)
        .filter_map(|k| dims.coord((index + k) % n))
        .find(|c| field.is_free(*c))
}

fn engine_with_goal(
    field: VoxelField,
    goal_index: usize,
    connectivity: Connectivity,
) -> Option<(WavefrontEngine, VoxelCoord)> {
    let goal = free_cell_from(&field, goal_index)?;
    let mut engine = WavefrontEngine::new(field, connectivity);
    engine.set_goal(goal).unwrap();
    Some((engine, goal))
}

// =============================================================================
// Property Tests: Distance Field
// =============================================================================

proptest! {
    /// The goal is 0 and walls stay walls.
    #[test]
    fn goal_is_zero_and_walls_preserved(
        (field, goal_index) in arb_field(),
        connectivity in arb_connectivity(),
    ) {
        let walls: Vec<_> = field.walls().collect();
        if let Some((engine, goal)) = engine_with_goal(field, goal_index, connectivity) {
            prop_assert_eq!(engine.get_distance(goal), Distance::Steps(0));
            for wall in walls {
                prop_assert_eq!(engine.get_distance(wall), Distance::Wall);
            }
        }
    }

    /// Free neighbors of a reached cell are reached, within one step of it.
    #[test]
    fn adjacent_distances_differ_by_at_most_one(
        (field, goal_index) in arb_field(),
        connectivity in arb_connectivity(),
    ) {
        if let Some((engine, _)) = engine_with_goal(field, goal_index, connectivity) {
            let generator = NeighborGenerator::new(engine.field(), connectivity);
            for (cell, distance) in engine.distances() {
                let Some(d) = distance.steps() else { continue };
                for neighbor in generator.neighbors(cell) {
                    let n = engine.get_distance(neighbor).steps();
                    prop_assert!(n.is_some(), "{} reached but neighbor {} not", cell, neighbor);
                    prop_assert!(d.abs_diff(n.unwrap()) <= 1);
                }
            }
        }
    }

    /// Walls can only lengthen paths.
    #[test]
    fn distance_is_at_least_free_space_steps(
        (field, goal_index) in arb_field(),
        connectivity in arb_connectivity(),
    ) {
        if let Some((engine, goal)) = engine_with_goal(field, goal_index, connectivity) {
            for (cell, distance) in engine.distances() {
                if let Some(d) = distance.steps() {
                    prop_assert!(d >= connectivity.free_space_steps(cell, goal));
                }
            }
        }
    }

    /// Discovered count matches the number of cells with a step count.
    #[test]
    fn discovered_count_matches_reached_cells(
        (field, goal_index) in arb_field(),
        connectivity in arb_connectivity(),
    ) {
        if let Some((engine, _)) = engine_with_goal(field, goal_index, connectivity) {
            let reached = engine.distances().filter(|(_, d)| d.is_reachable()).count();
            prop_assert_eq!(engine.discovered_count(), reached);
        }
    }

    /// Running the same goal twice gives the same field.
    #[test]
    fn rerun_is_idempotent(
        (field, goal_index) in arb_field(),
        connectivity in arb_connectivity(),
    ) {
        if let Some((mut engine, goal)) = engine_with_goal(field, goal_index, connectivity) {
            let first: Vec<_> = engine.distances().collect();
            engine.set_goal(goal).unwrap();
            let second: Vec<_> = engine.distances().collect();
            prop_assert_eq!(first, second);
        }
    }

    /// A multi-source run equals the minimum over single-source runs.
    #[test]
    fn multi_source_is_pointwise_minimum(
        (field, goal_index) in arb_field(),
        other_index in 0usize..1000,
        connectivity in arb_connectivity(),
    ) {
        let Some(a) = free_cell_from(&field, goal_index) else { return Ok(()) };
        let b = free_cell_from(&field, other_index % field.cell_count()).unwrap();

        let mut single_a = WavefrontEngine::new(field.clone(), connectivity);
        single_a.set_goal(a).unwrap();
        let mut single_b = WavefrontEngine::new(field.clone(), connectivity);
        single_b.set_goal(b).unwrap();
        let mut both = WavefrontEngine::new(field, connectivity);
        both.set_goals(&[a, b]).unwrap();

        for (cell, distance) in both.distances() {
            let expected = match (single_a.get_distance(cell), single_b.get_distance(cell)) {
                (Distance::Steps(x), Distance::Steps(y)) => Distance::Steps(x.min(y)),
                (Distance::Steps(x), _) | (_, Distance::Steps(x)) => Distance::Steps(x),
                (other, _) => other,
            };
            prop_assert_eq!(distance, expected);
        }
    }

    /// A goal in a wall is rejected and leaves the field untouched.
    #[test]
    fn wall_goal_rejected(
        (field, goal_index) in arb_field(),
        connectivity in arb_connectivity(),
    ) {
        let dims = field.dims();
        let target = dims.coord(goal_index).unwrap();
        let mut engine = WavefrontEngine::new(field, connectivity);
        let before: Vec<_> = engine.distances().collect();
        let result = engine.set_goal(target);
        if engine.is_wall(target) {
            prop_assert_eq!(result, Err(HeuristicError::GoalInWall(target)));
            let after: Vec<_> = engine.distances().collect();
            prop_assert_eq!(before, after);
        } else {
            prop_assert!(result.is_ok());
        }
    }
}

// =============================================================================
// Property Tests: Voxel Field
// =============================================================================

proptest! {
    /// A larger clearance radius only adds walls, so distances never shrink.
    #[test]
    fn larger_radius_is_monotonic(
        grid in arb_clearance(),
        r_small in 0.0..0.5f64,
        extra in 0.0..0.5f64,
        goal_index in 0usize..1000,
        connectivity in arb_connectivity(),
    ) {
        let r_large = r_small + extra;
        let small = VoxelField::build(&grid, r_small);
        let large = VoxelField::build(&grid, r_large);

        for wall in small.walls() {
            prop_assert!(large.is_wall(wall));
        }
        prop_assert!(large.wall_count() >= small.wall_count());

        let index = goal_index % large.cell_count();
        let Some(goal) = free_cell_from(&large, index) else { return Ok(()) };

        let mut loose = WavefrontEngine::new(small, connectivity);
        loose.set_goal(goal).unwrap();
        let mut tight = WavefrontEngine::new(large, connectivity);
        tight.set_goal(goal).unwrap();

        for (cell, distance) in tight.distances() {
            if let Some(d) = distance.steps() {
                let d_loose = loose.get_distance(cell).steps().unwrap();
                prop_assert!(d >= d_loose);
            }
        }
    }
}
