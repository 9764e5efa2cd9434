//! The `Planner` enum and the shared pieces of the planning contract.

use courier_core::{AgentRng, Tier, Tile};
use courier_grid::{open_neighbors, GridCost};

use crate::{dijkstra, lookahead, walk};

/// Step bound for the greedy Manhattan walk used both as the Dijkstra
/// fallback and as a building block of the random walk.
pub const PARTIAL_WALK_MAX_STEPS: usize = 20;

// ── Planner ───────────────────────────────────────────────────────────────────

/// One of the three interchangeable planning strategies.
///
/// Enum dispatch rather than trait objects: the set is closed, the variants
/// carry their own tuning, and the agent stores one by value.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Planner {
    /// Biased random walk (Easy): mostly walks toward the goal, sometimes
    /// wanders.  `deviation` is the per-step probability of a random move.
    RandomWalk { deviation: f32 },
    /// Greedy walk scored by a bounded-depth expectimax (Medium).
    Lookahead { depth: u32 },
    /// Weighted shortest path with a pop cap and greedy fallback (Hard).
    Dijkstra,
}

impl Planner {
    /// The preset planner for a tier, with that tier's default tuning.
    pub fn for_tier(tier: Tier) -> Planner {
        match tier {
            Tier::Easy => Planner::RandomWalk { deviation: 0.3 },
            Tier::Medium => Planner::Lookahead { depth: 3 },
            Tier::Hard => Planner::Dijkstra,
        }
    }

    /// Compute a waypoint sequence from `start` to `goal`.
    ///
    /// See the [crate docs][crate] for the full contract.  `weather_factor`
    /// is the (0, 1] speed multiplier in effect when planning; `rng` is only
    /// drawn from by the random walk but taken uniformly so switching
    /// variants never changes the call shape.
    pub fn plan(
        &self,
        grid: &dyn GridCost,
        start: Tile,
        goal: Tile,
        weather_factor: f32,
        rng: &mut AgentRng,
    ) -> Vec<Tile> {
        let Some(goal) = effective_goal(grid, start, goal) else {
            return Vec::new();
        };
        if start == goal {
            return Vec::new();
        }

        match *self {
            Planner::RandomWalk { deviation } => walk::random_walk(grid, start, goal, deviation, rng),
            Planner::Lookahead { depth } => {
                lookahead::lookahead_walk(grid, start, goal, depth, weather_factor)
            }
            Planner::Dijkstra => dijkstra::shortest_path(grid, start, goal, weather_factor),
        }
    }
}

// ── Goal substitution ─────────────────────────────────────────────────────────

/// Resolve the tile planning actually aims at.
///
/// An unblocked goal stands as-is.  A blocked goal (dropoffs usually sit on
/// building tiles) is replaced by its unblocked 4-neighbor nearest to
/// `start`, ties resolved by the canonical neighbor order.  `None` means the
/// goal is walled in and planning aborts.
pub(crate) fn effective_goal(grid: &dyn GridCost, start: Tile, goal: Tile) -> Option<Tile> {
    if !grid.is_blocked(goal.x, goal.y) {
        return Some(goal);
    }
    // min_by_key keeps the first minimum, so equal distances resolve by the
    // canonical neighbor order.
    open_neighbors(grid, goal).min_by_key(|n| n.manhattan(start))
}

// ── Greedy walk ───────────────────────────────────────────────────────────────

/// Walk greedily from `start` toward `target`, at most `max_steps` steps.
///
/// Each step takes the unblocked neighbor minimizing Manhattan distance to
/// `target` (first minimum in canonical order).  Stops early on arrival or
/// when boxed in.  Makes no progress guarantee around walls — callers use it
/// where "roughly toward" is acceptable.
pub(crate) fn greedy_walk(
    grid: &dyn GridCost,
    start: Tile,
    target: Tile,
    max_steps: usize,
) -> Vec<Tile> {
    let mut path = Vec::new();
    let mut current = start;

    for _ in 0..max_steps {
        if current == target {
            break;
        }
        let Some(next) = open_neighbors(grid, current).min_by_key(|n| n.manhattan(target)) else {
            break;
        };
        path.push(next);
        current = next;
    }

    path
}
