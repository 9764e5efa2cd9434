//! `courier-jobs` — parcel lifecycle and inventory for the `courier_sim`
//! engine.
//!
//! # What lives here
//!
//! | Module     | Contents                                                 |
//! |------------|----------------------------------------------------------|
//! | [`board`]  | [`JobBoard`]: timed release queue + parcel lifecycle     |
//! | [`hold`]   | [`CargoHold`]: weight-capped claimed-parcel inventory    |
//! | [`loader`] | CSV job-sheet loader                                     |
//! | [`error`]  | `JobError`, `JobResult`                                  |
//!
//! The board owns every parcel of a session and tracks which phase each one
//! is in (pending → available → claimed → delivered/expired).  Couriers never
//! touch the board directly; the harness claims and delivers on their behalf
//! when their goal-reached signals fire.

pub mod board;
pub mod error;
pub mod hold;
pub mod loader;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use board::{JobBoard, ParcelPhase};
pub use error::{JobError, JobResult};
pub use hold::CargoHold;
pub use loader::{load_jobs_csv, load_jobs_reader};
