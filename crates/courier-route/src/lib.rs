//! `courier-route` — the three path planners of the `courier_sim` engine.
//!
//! # What lives here
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`planner`]   | [`Planner`] enum dispatch, goal substitution, greedy walk |
//! | [`walk`]      | Biased random walk (Easy tier)                            |
//! | [`lookahead`] | Bounded-depth expectimax greedy walk (Medium tier)        |
//! | [`dijkstra`]  | Weighted shortest path with pop cap (Hard tier)           |
//!
//! # Planning contract
//!
//! `plan(start, goal)` returns the ordered waypoints **excluding** `start`
//! and **including** `goal` — empty when `start == goal`.  A blocked goal is
//! substituted by its unblocked 4-neighbor nearest to `start` before any
//! search runs; with no such neighbor the plan is empty.  An empty plan is a
//! planning outcome, never an error (the agent idles until its next decision
//! tick).
//!
//! # Soft real-time bounds
//!
//! Every planner is bounded-iteration so a single invocation always fits in
//! one frame of the host loop: 20 steps for the random and partial walks, 50
//! for the lookahead walk, 1000 heap pops for Dijkstra.  These caps are
//! invariants, not tuning knobs.

pub mod dijkstra;
pub mod lookahead;
pub mod planner;
pub mod walk;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use dijkstra::DIJKSTRA_POP_CAP;
pub use lookahead::LOOKAHEAD_MAX_STEPS;
pub use planner::{Planner, PARTIAL_WALK_MAX_STEPS};
pub use walk::RANDOM_WALK_MAX_STEPS;
