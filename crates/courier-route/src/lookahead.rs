//! Heuristic lookahead search — the Medium tier's planner.
//!
//! A greedy walk whose per-step choice is scored by a small expectimax: the
//! courier's own layers maximize over neighbor values, the interleaved
//! "environment response" layers average them, weighted toward neighbors
//! closer to the goal.  The leaf heuristic trades expected payout against
//! distance, weather, and terrain.
//!
//! The result is goal-seeking but short-sighted: it routes around small
//! obstacles within its depth horizon and can still dither in front of large
//! ones — which is exactly the competence gap between the Easy walk and the
//! Hard shortest path.

use courier_core::Tile;
use courier_grid::{open_neighbors, GridCost};
use rustc_hash::FxHashSet;

/// Step bound for one lookahead-walk invocation.
pub const LOOKAHEAD_MAX_STEPS: usize = 50;

/// Heuristic weights: payout, distance, weather.
const ALPHA: f32 = 1.0;
const BETA: f32 = 0.5;
const GAMMA: f32 = 0.3;

// ── Greedy walk ───────────────────────────────────────────────────────────────

/// Walk up to [`LOOKAHEAD_MAX_STEPS`] steps toward `goal`, each step taking
/// the best-scoring unblocked neighbor.
///
/// Visited tiles are avoided while an unvisited neighbor exists, so the walk
/// does not oscillate between two locally-best tiles; revisits are allowed
/// only when every open neighbor has been seen.
pub(crate) fn lookahead_walk(
    grid: &dyn GridCost,
    start: Tile,
    goal: Tile,
    depth: u32,
    weather_factor: f32,
) -> Vec<Tile> {
    let mut path = Vec::new();
    let mut current = start;
    let mut visited: FxHashSet<Tile> = FxHashSet::default();
    visited.insert(start);

    for _ in 0..LOOKAHEAD_MAX_STEPS {
        if current == goal {
            break;
        }

        let neighbors: Vec<Tile> = open_neighbors(grid, current).collect();
        if neighbors.is_empty() {
            break;
        }
        let unvisited: Vec<Tile> = neighbors
            .iter()
            .copied()
            .filter(|n| !visited.contains(n))
            .collect();
        let choices = if unvisited.is_empty() { &neighbors } else { &unvisited };

        // The courier's own move is the outer max layer: argmax over the
        // candidates' values, evaluated one ply down in the environment layer.
        // Strict `>` keeps the first maximum, so ties resolve by the
        // canonical neighbor order.
        let mut best = choices[0];
        let mut best_value = f32::NEG_INFINITY;
        for &n in choices {
            let v = value(grid, n, goal, weather_factor, depth.saturating_sub(1), Layer::Environment);
            if v > best_value {
                best_value = v;
                best = n;
            }
        }

        path.push(best);
        visited.insert(best);
        current = best;
    }

    path
}

// ── Expectimax value ──────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq)]
enum Layer {
    /// The courier chooses — maximize.
    Courier,
    /// The environment "responds" — expectation over neighbor values,
    /// weighted toward goal proximity.
    Environment,
}

fn value(
    grid: &dyn GridCost,
    tile: Tile,
    goal: Tile,
    weather_factor: f32,
    depth: u32,
    layer: Layer,
) -> f32 {
    if depth == 0 || tile == goal {
        return heuristic(grid, tile, goal, weather_factor);
    }

    let neighbors: Vec<Tile> = open_neighbors(grid, tile).collect();
    if neighbors.is_empty() {
        return heuristic(grid, tile, goal, weather_factor);
    }

    match layer {
        Layer::Courier => neighbors
            .iter()
            .map(|&n| value(grid, n, goal, weather_factor, depth - 1, Layer::Environment))
            .fold(f32::NEG_INFINITY, f32::max),
        Layer::Environment => {
            // Weighted average: neighbors nearer the goal dominate, modeling
            // an environment that tends to cooperate but is not certain to.
            let mut weighted_sum = 0.0;
            let mut weight_sum = 0.0;
            for &n in &neighbors {
                let w = 1.0 / (1.0 + 0.1 * n.manhattan(goal) as f32);
                let v = value(grid, n, goal, weather_factor, depth - 1, Layer::Courier);
                weighted_sum += w * v;
                weight_sum += w;
            }
            weighted_sum / weight_sum
        }
    }
}

/// Leaf score for standing on `tile` while heading for `goal`.
fn heuristic(grid: &dyn GridCost, tile: Tile, goal: Tile, weather_factor: f32) -> f32 {
    let distance = tile.manhattan(goal) as f32;
    let expected_payout = 100.0 / (1.0 + distance);
    let weather_penalty = (1.0 - weather_factor) * 10.0;
    let terrain_bonus = (2.0 - grid.tile_cost(tile.x, tile.y)) * 5.0;

    ALPHA * expected_payout - BETA * distance - GAMMA * weather_penalty + terrain_bonus
}
