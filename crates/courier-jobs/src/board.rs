//! `JobBoard` — timed parcel release and lifecycle tracking.
//!
//! # Why a release queue
//!
//! Most parcels of a scenario are not visible yet on any given tick.  Scanning
//! every posted parcel each tick to check "released already?" would cost
//! O(total) per tick regardless of how many actually release.  The board
//! inverts the problem: posting schedules the parcel at its release tick in a
//! sparse `BTreeMap<Tick, Vec<ParcelId>>`; each tick only the due entries are
//! drained — O(due) work instead of O(total).

use std::collections::BTreeMap;

use courier_core::{Parcel, ParcelId, Tick, TickClock};

// ── ParcelPhase ───────────────────────────────────────────────────────────────

/// Where a parcel currently is in its lifecycle.
///
/// Transitions only move rightward: Pending → Available → Claimed →
/// Delivered, with Expired reachable from Pending and Available.  A claimed
/// parcel never expires off the board; overdue deliveries are a reputation
/// concern outside this engine.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum ParcelPhase {
    /// Posted but not yet released; invisible to couriers.
    Pending,
    /// Released and unclaimed; shows up in `candidates()`.
    Available,
    /// In some courier's cargo hold.
    Claimed,
    /// Dropped off.
    Delivered,
    /// Release-plus-duration deadline passed while still unclaimed.
    Expired,
}

// ── JobBoard ──────────────────────────────────────────────────────────────────

/// All parcels of a session, indexed by [`ParcelId`], plus the release queue.
///
/// IDs are assigned in post order, so `id.index()` addresses the board's
/// parallel arrays directly.
#[derive(Default)]
pub struct JobBoard {
    parcels: Vec<Parcel>,
    phases: Vec<ParcelPhase>,
    /// Parcels waiting to release, keyed by their release tick.
    release_queue: BTreeMap<Tick, Vec<ParcelId>>,
}

impl JobBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Post a parcel.  The board assigns and returns its ID (whatever `id`
    /// the caller left in the struct is overwritten).
    ///
    /// The parcel is scheduled to release at the tick corresponding to its
    /// `release_secs`; a zero offset releases on the next `release_due` call.
    pub fn post(&mut self, clock: &TickClock, mut parcel: Parcel) -> ParcelId {
        let id = ParcelId(self.parcels.len() as u32);
        parcel.id = id;

        let release_tick = clock.tick_at_secs(parcel.release_secs);
        self.release_queue.entry(release_tick).or_default().push(id);

        self.parcels.push(parcel);
        self.phases.push(ParcelPhase::Pending);
        id
    }

    /// Post a whole job sheet (e.g. from [`load_jobs_csv`][crate::load_jobs_csv]).
    pub fn post_all(&mut self, clock: &TickClock, parcels: impl IntoIterator<Item = Parcel>) {
        for parcel in parcels {
            self.post(clock, parcel);
        }
    }

    // ── Tick-driven transitions ───────────────────────────────────────────

    /// Release every parcel whose release tick is `<= now`.
    ///
    /// Returns the newly available IDs in release order.  Draining up to
    /// `now` (not just exactly `now`) keeps the board correct even when the
    /// clock starts past zero.
    pub fn release_due(&mut self, now: Tick) -> Vec<ParcelId> {
        let mut released = Vec::new();
        while let Some((&tick, _)) = self.release_queue.first_key_value() {
            if tick > now {
                break;
            }
            let Some((_, ids)) = self.release_queue.pop_first() else {
                break;
            };
            for id in ids {
                self.phases[id.index()] = ParcelPhase::Available;
                released.push(id);
            }
        }
        released
    }

    /// Expire every still-available parcel whose deadline has passed.
    ///
    /// Returns the expired IDs in ID order.
    pub fn expire_due(&mut self, now_secs: f32) -> Vec<ParcelId> {
        let mut expired = Vec::new();
        for (i, phase) in self.phases.iter_mut().enumerate() {
            if *phase == ParcelPhase::Available && self.parcels[i].is_overdue(now_secs) {
                *phase = ParcelPhase::Expired;
                expired.push(ParcelId(i as u32));
            }
        }
        expired
    }

    // ── Claim / deliver ───────────────────────────────────────────────────

    /// Move an available parcel to `Claimed`.
    ///
    /// Returns the parcel on success, `None` if it is not currently
    /// available (another courier got there first, or it expired).
    pub fn claim(&mut self, id: ParcelId) -> Option<Parcel> {
        let phase = self.phases.get_mut(id.index())?;
        if *phase != ParcelPhase::Available {
            return None;
        }
        *phase = ParcelPhase::Claimed;
        Some(self.parcels[id.index()])
    }

    /// Move a claimed parcel to `Delivered`.  `false` if it was not claimed.
    pub fn deliver(&mut self, id: ParcelId) -> bool {
        match self.phases.get_mut(id.index()) {
            Some(phase @ ParcelPhase::Claimed) => {
                *phase = ParcelPhase::Delivered;
                true
            }
            _ => false,
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// The released, unclaimed parcels — the candidate set target selectors
    /// score.  Yielded in ID order.
    pub fn candidates(&self) -> impl Iterator<Item = &Parcel> {
        self.parcels
            .iter()
            .zip(&self.phases)
            .filter(|&(_, &phase)| phase == ParcelPhase::Available)
            .map(|(parcel, _)| parcel)
    }

    /// The parcel with the given ID, if it was ever posted.
    pub fn parcel(&self, id: ParcelId) -> Option<&Parcel> {
        self.parcels.get(id.index())
    }

    pub fn phase(&self, id: ParcelId) -> Option<ParcelPhase> {
        self.phases.get(id.index()).copied()
    }

    /// Total parcels ever posted.
    pub fn len(&self) -> usize {
        self.parcels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parcels.is_empty()
    }

    /// Count of parcels currently in `phase`.
    pub fn count_in_phase(&self, phase: ParcelPhase) -> usize {
        self.phases.iter().filter(|&&p| p == phase).count()
    }
}
