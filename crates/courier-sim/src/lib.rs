//! `courier-sim` — the tick-loop harness around the courier engine.
//!
//! # What lives here
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`sim`]      | [`CourierSim`]: the phased tick loop, [`SimReport`]     |
//! | [`builder`]  | [`SimBuilder`]: validated scenario assembly             |
//! | [`weather`]  | [`WeatherSystem`]: condition transitions per tick       |
//! | [`observer`] | [`SimObserver`] callbacks + [`NoopObserver`]            |
//! | [`error`]    | `SimError`, `SimResult`                                 |
//!
//! # Tick phases
//!
//! Each tick runs, in order: weather update → parcel release/expiry → one
//! [`Courier`][courier_agent::Courier] tick per courier (decide + follow) →
//! stamina recovery for couriers that did not move → adjacency pickups and
//! deliveries → observer callbacks.  Everything is synchronous and
//! single-threaded; one tick is one frame of the host loop.

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod weather;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{CourierSim, CourierTally, SimConfig, SimReport};
pub use weather::WeatherSystem;
