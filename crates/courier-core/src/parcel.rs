//! The parcel value type.
//!
//! Parcels are immutable once posted: the board hands out copies and tracks
//! lifecycle (available / claimed / delivered) separately, so scoring code can
//! take plain slices without caring who currently owns what.

use crate::{ParcelId, Tile};

/// A delivery job: pick up at one tile, drop off at another, inside a time
/// budget.
///
/// All fields are plain data; the struct is `Copy` so candidate sets can be
/// assembled each tick without allocation pressure.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parcel {
    pub id: ParcelId,
    /// Tile the parcel waits at.
    pub pickup: Tile,
    /// Tile it must reach.  Often a blocked building tile; planners route to
    /// its nearest open neighbor instead.
    pub dropoff: Tile,
    /// Payment on successful delivery.
    pub payout: f32,
    /// Weight in cargo units; counts against the hold's capacity.
    pub weight: f32,
    /// Higher = more urgent.
    pub priority: i32,
    /// Seconds allowed from release to delivery.
    pub duration_secs: f32,
    /// Seconds after session start at which the parcel becomes visible.
    pub release_secs: f32,
}

impl Parcel {
    /// Absolute deadline in session seconds.
    #[inline]
    pub fn deadline_secs(&self) -> f32 {
        self.release_secs + self.duration_secs
    }

    /// Seconds left before the deadline; negative once overdue.
    #[inline]
    pub fn remaining_secs(&self, now_secs: f32) -> f32 {
        self.deadline_secs() - now_secs
    }

    /// `true` once `now_secs` has passed the deadline.
    #[inline]
    pub fn is_overdue(&self, now_secs: f32) -> bool {
        self.remaining_secs(now_secs) < 0.0
    }
}
