//! Read-only world snapshot passed into every courier tick.

use courier_core::{Conditions, Parcel};
use courier_grid::GridCost;

/// What the courier is allowed to see this tick.
///
/// Built by the harness once per courier per tick; all borrows are immutable
/// and live only for the duration of the call, so any number of independent
/// couriers can read the same grid without coordination.
pub struct TickContext<'a> {
    /// The map, blocked/cost queries only.
    pub grid: &'a dyn GridCost,

    /// Visible pickup candidates: released, unclaimed, and small enough to
    /// fit the courier's remaining hold capacity.
    pub candidates: &'a [Parcel],

    /// Parcels currently in the courier's hold.
    pub held: &'a [Parcel],

    /// Session seconds elapsed — deadline arithmetic runs against this.
    pub now_secs: f32,

    /// This tick's weather snapshot.
    pub weather: Conditions,
}

impl<'a> TickContext<'a> {
    /// Total weight currently carried, charged to the resource gate per move.
    pub fn carried_weight(&self) -> f32 {
        self.held.iter().map(|p| p.weight).sum()
    }
}
