//! `courier-agent` — the autonomous courier itself.
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`profile`] | [`TierProfile`]: per-tier tuning presets                  |
//! | [`state`]   | [`CourierState`], [`Task`]                                |
//! | [`context`] | [`TickContext`]: the read-only per-tick snapshot          |
//! | [`gate`]    | [`ResourceGate`] trait + [`RestedGate`]                   |
//! | [`courier`] | [`Courier`]: decision loop + path follower, [`TickOutcome`] |
//!
//! # Tick shape
//!
//! [`Courier::tick`] is the whole per-frame engine: it (maybe) re-decides the
//! task and goal, then follows the current waypoint sequence by at most one
//! step.  It reads the world through a [`TickContext`], charges movement to a
//! [`ResourceGate`], and reports what happened as a [`TickOutcome`] value —
//! the harness applies pickups, deliveries, and rendering from that, so the
//! courier itself never mutates anything but its own state.

pub mod context;
pub mod courier;
pub mod gate;
pub mod profile;
pub mod state;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use context::TickContext;
pub use courier::{Courier, GoalEvent, TickOutcome};
pub use gate::{ResourceGate, RestedGate};
pub use profile::TierProfile;
pub use state::{CourierState, Task};
