//! Weighted shortest path — the Hard tier's planner.
//!
//! # Cost units
//!
//! Edge costs are converted to integer **milli-cost units** (u32) before they
//! reach the heap: `Ord` on integers is total, so heap ordering never hits
//! NaN/partial-comparison edge cases and equal-cost pops tie-break exactly on
//! the secondary `Tile` key.  Entering a neighbor costs
//! `tile_cost(neighbor) · (1 + (1 − weather_factor) · 0.5)`.
//!
//! # Budget
//!
//! Expansion stops after [`DIJKSTRA_POP_CAP`] pops.  On exhaustion (cap hit
//! or frontier drained without reaching the goal) the planner degrades to a
//! greedy walk from `start` toward the settled tile closest to the goal —
//! a partial path, never a hard failure.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use courier_core::Tile;
use courier_grid::{open_neighbors, GridCost};
use rustc_hash::FxHashMap;

use crate::planner::{greedy_walk, PARTIAL_WALK_MAX_STEPS};

/// Maximum node pops per invocation — the per-tick search budget.
pub const DIJKSTRA_POP_CAP: usize = 1000;

/// Cost of entering `tile`, in milli-cost units.
#[inline]
fn entry_cost_mc(grid: &dyn GridCost, tile: Tile, weather_factor: f32) -> u32 {
    let cost = grid.tile_cost(tile.x, tile.y) * (1.0 + (1.0 - weather_factor) * 0.5);
    (cost * 1000.0).round() as u32
}

pub(crate) fn shortest_path(
    grid: &dyn GridCost,
    start: Tile,
    goal: Tile,
    weather_factor: f32,
) -> Vec<Tile> {
    // dist[t] = best known cost (milli-units) to reach t.
    let mut dist: FxHashMap<Tile, u32> = FxHashMap::default();
    let mut prev: FxHashMap<Tile, Tile> = FxHashMap::default();
    dist.insert(start, 0);

    // Min-heap: Reverse makes BinaryHeap (max) behave as min-heap.
    // Secondary Tile key gives deterministic tie-breaking.
    let mut heap: BinaryHeap<Reverse<(u32, Tile)>> = BinaryHeap::new();
    heap.push(Reverse((0, start)));

    let mut pops = 0;
    while let Some(Reverse((cost, tile))) = heap.pop() {
        pops += 1;
        if pops > DIJKSTRA_POP_CAP {
            break;
        }

        if tile == goal {
            return reconstruct(&prev, start, goal);
        }

        // Skip stale heap entries.
        if cost > dist[&tile] {
            continue;
        }

        for neighbor in open_neighbors(grid, tile) {
            let new_cost = cost.saturating_add(entry_cost_mc(grid, neighbor, weather_factor));
            if dist.get(&neighbor).is_none_or(|&d| new_cost < d) {
                dist.insert(neighbor, new_cost);
                prev.insert(neighbor, tile);
                heap.push(Reverse((new_cost, neighbor)));
            }
        }
    }

    // Budget exhausted or goal unreachable: head greedily for the settled
    // tile that got closest to the goal.
    let closest = dist
        .keys()
        .copied()
        .min_by_key(|t| (t.manhattan(goal), t.x, t.y))
        .unwrap_or(start);
    greedy_walk(grid, start, closest, PARTIAL_WALK_MAX_STEPS)
}

fn reconstruct(prev: &FxHashMap<Tile, Tile>, start: Tile, goal: Tile) -> Vec<Tile> {
    let mut path = Vec::new();
    let mut cur = goal;
    while cur != start {
        path.push(cur);
        cur = prev[&cur];
    }
    path.reverse();
    path
}
