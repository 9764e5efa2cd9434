//! `courier-dispatch` — which parcel to chase, and in what order to deliver.
//!
//! # What lives here
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`select`]   | Per-tier target selection over the candidate set      |
//! | [`sequence`] | Greedy multi-parcel delivery ordering (Hard tier)     |
//!
//! All scoring here is pure arithmetic over parcel fields, positions, and the
//! weather factor; only the Easy tier's 3-nearest pick draws randomness, from
//! the injected [`AgentRng`][courier_core::AgentRng].  Ties resolve to the
//! lowest [`ParcelId`][courier_core::ParcelId] so identical inputs always
//! yield the identical choice.

pub mod select;
pub mod sequence;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use select::pick_target;
pub use sequence::plan_deliveries;
