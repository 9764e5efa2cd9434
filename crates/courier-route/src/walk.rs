//! Biased random walk — the Easy tier's planner.
//!
//! Deliberately imperfect: it reads more like a distractible human than a
//! search algorithm, and it does not guarantee reaching the goal.

use courier_core::{AgentRng, Tile};
use courier_grid::{open_neighbors, GridCost};

/// Step bound for one biased-walk invocation.
pub const RANDOM_WALK_MAX_STEPS: usize = 20;

/// Walk up to [`RANDOM_WALK_MAX_STEPS`] steps toward `goal`.
///
/// Per step: with probability `1 - deviation` take the unblocked neighbor
/// minimizing Manhattan distance to the goal, otherwise a uniformly random
/// unblocked neighbor.  Stops early at the goal or when boxed in.
pub(crate) fn random_walk(
    grid: &dyn GridCost,
    start: Tile,
    goal: Tile,
    deviation: f32,
    rng: &mut AgentRng,
) -> Vec<Tile> {
    let mut path = Vec::new();
    let mut current = start;

    for _ in 0..RANDOM_WALK_MAX_STEPS {
        if current == goal {
            break;
        }

        let next = if rng.gen_bool(1.0 - deviation as f64) {
            open_neighbors(grid, current).min_by_key(|n| n.manhattan(goal))
        } else {
            let neighbors: Vec<Tile> = open_neighbors(grid, current).collect();
            rng.choose(&neighbors).copied()
        };

        let Some(next) = next else {
            break; // boxed in
        };
        path.push(next);
        current = next;
    }

    path
}
