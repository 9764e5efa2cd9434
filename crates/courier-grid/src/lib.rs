//! `courier-grid` — the tile grid cost model for the `courier_sim` engine.
//!
//! # What lives here
//!
//! | Module     | Contents                                                |
//! |------------|---------------------------------------------------------|
//! | [`model`]  | The [`GridCost`] query trait + `open_neighbors` helper  |
//! | [`city`]   | [`CityGrid`]: a concrete tile-kind matrix with an ASCII constructor |
//! | [`error`]  | `GridError`, `GridResult`                               |
//!
//! Planners and the agent only ever see `&dyn GridCost`; `CityGrid` is the
//! reference map the harness and demos use.  The trait is read-only by
//! contract, so one grid can back any number of independent agent instances.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod city;
pub mod error;
pub mod model;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use city::{CityGrid, TileKind};
pub use error::{GridError, GridResult};
pub use model::{open_neighbors, GridCost};
