//! The grid cost model: the only view of the map the engine ever gets.

use courier_core::Tile;

/// Read-only blocked/cost queries over a tile map.
///
/// # Contract
///
/// - Pure: answers must not change while a plan is being computed (the
///   environment may change *between* ticks; that is what replanning is for).
/// - Out-of-bounds coordinates are always blocked.
/// - `tile_cost` is ≥ 0 and defaults to 1.0 for implementations without
///   terrain data.
///
/// The trait is object safe; the agent context carries `&dyn GridCost` so
/// tests can substitute ad-hoc maps.
pub trait GridCost {
    /// `true` if the tile cannot be entered.
    fn is_blocked(&self, x: i32, y: i32) -> bool;

    /// Traversal cost multiplier for entering the tile.
    ///
    /// Only meaningful for unblocked tiles.
    fn tile_cost(&self, _x: i32, _y: i32) -> f32 {
        1.0
    }
}

/// The unblocked 4-neighbors of `tile`, in canonical up/down/left/right order.
///
/// Zero-allocation; every planner and the explore step iterate through here
/// so they all agree on expansion order.
pub fn open_neighbors<'a, G>(grid: &'a G, tile: Tile) -> impl Iterator<Item = Tile> + 'a
where
    G: GridCost + ?Sized,
{
    tile.neighbors4()
        .into_iter()
        .filter(move |n| !grid.is_blocked(n.x, n.y))
}
