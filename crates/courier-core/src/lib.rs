//! `courier-core` — foundational types for the `courier_sim` engine.
//!
//! This crate is a dependency of every other `courier-*` crate.  It
//! intentionally has no `courier-*` dependencies and minimal external ones
//! (only `rand` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                            |
//! |---------------|-----------------------------------------------------|
//! | [`ids`]       | `ParcelId`                                          |
//! | [`tile`]      | `Tile`, `Direction`                                 |
//! | [`parcel`]    | `Parcel` and its deadline arithmetic                |
//! | [`time`]      | `Tick`, `TickClock`                                 |
//! | [`rng`]       | `AgentRng` (per-courier), `SimRng` (environment)    |
//! | [`weather`]   | `WeatherKind`, `Conditions`                         |
//! | [`tier`]      | `Tier` enum                                         |
//! | [`error`]     | `CoreError`, `CoreResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.       |

pub mod error;
pub mod ids;
pub mod parcel;
pub mod rng;
pub mod tier;
pub mod tile;
pub mod time;
pub mod weather;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::ParcelId;
pub use parcel::Parcel;
pub use rng::{AgentRng, SimRng};
pub use tier::Tier;
pub use tile::{Direction, Tile};
pub use time::{Tick, TickClock};
pub use weather::{Conditions, WeatherKind};
