//! The resource gate — the courier's window onto the external stamina system.
//!
//! The consumption and recovery *formulas* live outside this engine; the
//! courier only needs the query/command surface.  Tests script the gate to
//! exercise stalling; the sim ships [`RestedGate`] for scenarios that don't
//! model stamina at all.

use courier_core::WeatherKind;

/// Can-move query plus movement cost/recovery commands.
pub trait ResourceGate {
    /// `false` stalls the courier this tick — a silent no-op, not an error.
    fn can_move(&self) -> bool;

    /// Charge one movement of `cells` tiles under the given load and
    /// weather.  Returns the cost actually applied (informational).
    fn consume_move(&mut self, cells: u32, carried_weight: f32, weather: WeatherKind) -> f32;

    /// Credit `secs` of rest, faster at rest points.  Returns the amount
    /// recovered (informational).
    fn recover(&mut self, secs: f32, at_rest_point: bool) -> f32;
}

/// A gate that never tires: movement is always permitted and free.
pub struct RestedGate;

impl ResourceGate for RestedGate {
    fn can_move(&self) -> bool {
        true
    }

    fn consume_move(&mut self, _cells: u32, _carried_weight: f32, _weather: WeatherKind) -> f32 {
        0.0
    }

    fn recover(&mut self, _secs: f32, _at_rest_point: bool) -> f32 {
        0.0
    }
}
