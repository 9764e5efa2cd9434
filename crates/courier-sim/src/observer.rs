//! Simulation observer trait for progress reporting and data collection.

use courier_agent::Task;
use courier_core::{Conditions, Parcel, Tick};

use crate::SimReport;

/// Callbacks invoked by [`CourierSim::run`][crate::CourierSim::run] at key
/// points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — delivery printer
///
/// ```rust,ignore
/// struct DeliveryPrinter;
///
/// impl SimObserver for DeliveryPrinter {
///     fn on_delivery(&mut self, courier: usize, parcel: &Parcel, earned: f32, tick: Tick) {
///         println!("{tick}: courier {courier} delivered {} (+{earned:.0})", parcel.id);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// A courier hit its decision cadence and re-decided its task.
    fn on_decision(&mut self, _courier: usize, _task: Task, _tick: Tick) {}

    /// A courier picked a parcel off the board into its hold.
    fn on_pickup(&mut self, _courier: usize, _parcel: &Parcel, _tick: Tick) {}

    /// A courier dropped a parcel at its destination.
    fn on_delivery(&mut self, _courier: usize, _parcel: &Parcel, _earned: f32, _tick: Tick) {}

    /// An unclaimed parcel passed its deadline and left the board.
    fn on_expired(&mut self, _parcel: &Parcel, _tick: Tick) {}

    /// Called at the end of each tick with the weather in effect.
    fn on_tick_end(&mut self, _tick: Tick, _weather: Conditions) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _report: &SimReport) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
