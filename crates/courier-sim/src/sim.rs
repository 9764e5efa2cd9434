//! The `CourierSim` struct and its tick loop.

use courier_agent::{Courier, ResourceGate, TickContext};
use courier_core::{Parcel, Tick, TickClock, Tile};
use courier_grid::CityGrid;
use courier_jobs::{CargoHold, JobBoard};

use crate::{SimObserver, WeatherSystem};

// ── Configuration ─────────────────────────────────────────────────────────────

/// Global scenario parameters.
#[derive(Copy, Clone, Debug)]
pub struct SimConfig {
    /// Seed every RNG stream derives from.  Same seed, same run.
    pub master_seed: u64,
    /// Frame rate of the host loop (ticks per simulated second).
    pub ticks_per_second: u32,
    /// Session length in ticks.
    pub duration_ticks: u64,
    /// Weight capacity of every courier's cargo hold.
    pub hold_capacity: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            master_seed: 42,
            ticks_per_second: 60,
            duration_ticks: 60 * 60, // one simulated minute
            hold_capacity: 10.0,
        }
    }
}

// ── Report ────────────────────────────────────────────────────────────────────

/// Per-courier session totals.
#[derive(Copy, Clone, Debug, Default)]
pub struct CourierTally {
    pub picked_up: u32,
    pub delivered: u32,
    pub earned: f32,
    /// Tiles moved.
    pub distance: u32,
}

/// Session summary returned by [`CourierSim::run`].
#[derive(Clone, Debug)]
pub struct SimReport {
    pub final_tick: Tick,
    pub delivered: u32,
    pub expired: u32,
    pub earned: f32,
    pub couriers: Vec<CourierTally>,
}

// ── CourierSim ────────────────────────────────────────────────────────────────

/// The simulation harness: one city, one job board, one weather system, any
/// number of couriers.
///
/// `G` is the resource-gate implementation shared by all couriers (one
/// instance each).  Everything runs synchronously inside
/// [`process_tick`][Self::run]; couriers only read the world through
/// [`TickContext`] and report back through their tick outcomes, so the
/// harness is the single writer of board, holds, and tallies.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct CourierSim<G: ResourceGate> {
    pub config: SimConfig,
    pub clock: TickClock,
    pub grid: CityGrid,
    pub board: JobBoard,
    pub weather: WeatherSystem,
    pub(crate) couriers: Vec<Courier>,
    pub(crate) holds: Vec<CargoHold>,
    pub(crate) gates: Vec<G>,
    pub(crate) tallies: Vec<CourierTally>,
    pub(crate) expired_total: u32,
}

impl<G: ResourceGate> CourierSim<G> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick to `config.duration_ticks`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimReport {
        while self.clock.current_tick.0 < self.config.duration_ticks {
            self.process_tick(observer);
        }
        let report = self.report();
        observer.on_sim_end(&report);
        report
    }

    /// Run exactly `n` ticks from the current position (ignores the
    /// configured duration).  Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.process_tick(observer);
        }
    }

    /// Session totals so far.
    pub fn report(&self) -> SimReport {
        SimReport {
            final_tick: self.clock.current_tick,
            delivered: self.tallies.iter().map(|t| t.delivered).sum(),
            expired: self.expired_total,
            earned: self.tallies.iter().map(|t| t.earned).sum(),
            couriers: self.tallies.clone(),
        }
    }

    pub fn courier_count(&self) -> usize {
        self.couriers.len()
    }

    /// The current tile of courier `index`.
    pub fn courier_position(&self, index: usize) -> Tile {
        self.couriers[index].state.position
    }

    /// The cargo hold of courier `index`.
    pub fn hold(&self, index: usize) -> &CargoHold {
        &self.holds[index]
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.clock.current_tick;
        let now_secs = self.clock.elapsed_secs();
        observer.on_tick_start(now);

        // ── Phase 1: environment ──────────────────────────────────────────
        self.weather.advance(&self.clock);
        let weather = self.weather.current();

        self.board.release_due(now);
        for id in self.board.expire_due(now_secs) {
            self.expired_total += 1;
            if let Some(parcel) = self.board.parcel(id) {
                observer.on_expired(parcel, now);
            }
        }

        // ── Phase 2: courier ticks ────────────────────────────────────────
        for i in 0..self.couriers.len() {
            // Candidate snapshot per courier: released, unclaimed, and small
            // enough to fit this courier's remaining capacity.  Earlier
            // couriers' claims this tick are already reflected.
            let capacity = self.holds[i].capacity_remaining();
            let candidates: Vec<Parcel> = self
                .board
                .candidates()
                .filter(|p| p.weight <= capacity)
                .copied()
                .collect();

            let outcome = {
                let ctx = TickContext {
                    grid: &self.grid,
                    candidates: &candidates,
                    held: self.holds[i].held(),
                    now_secs,
                    weather,
                };
                self.couriers[i].tick(&ctx, &mut self.gates[i])
            };

            if let Some(task) = outcome.decided {
                observer.on_decision(i, task, now);
            }

            let position = self.couriers[i].state.position;
            if outcome.moved.is_some() {
                self.tallies[i].distance += 1;
            } else {
                // Stationary couriers recover, faster on rest points.
                let at_rest = self.grid.is_rest_point(position);
                self.gates[i].recover(self.clock.tick_secs(), at_rest);
            }

            self.apply_transfers(i, position, now, observer);
        }

        observer.on_tick_end(now, weather);
        self.clock.advance();
    }

    /// Complete pickups and deliveries by adjacency.
    ///
    /// Any available parcel whose pickup tile the courier stands on or next
    /// to is claimed (if it fits); any held parcel whose dropoff is on or
    /// next to the courier is delivered.  Dropoffs usually sit on blocked
    /// building tiles, which is why adjacency counts.
    fn apply_transfers<O: SimObserver>(
        &mut self,
        i: usize,
        position: Tile,
        now: Tick,
        observer: &mut O,
    ) {
        let reachable: Vec<Parcel> = self
            .board
            .candidates()
            .filter(|p| on_or_adjacent(position, p.pickup))
            .copied()
            .collect();
        for parcel in reachable {
            if self.holds[i].can_accept(&parcel) && self.board.claim(parcel.id).is_some() {
                self.holds[i].accept(parcel);
                self.tallies[i].picked_up += 1;
                observer.on_pickup(i, &parcel, now);
            }
        }

        let deliverable: Vec<Parcel> = self.holds[i]
            .held()
            .iter()
            .filter(|p| on_or_adjacent(position, p.dropoff))
            .copied()
            .collect();
        for parcel in deliverable {
            if self.holds[i].remove(parcel.id).is_some() && self.board.deliver(parcel.id) {
                self.tallies[i].delivered += 1;
                self.tallies[i].earned += parcel.payout;
                observer.on_delivery(i, &parcel, parcel.payout, now);
            }
        }
    }
}

/// `true` when `a` is `b` or one cardinal step from it.
#[inline]
fn on_or_adjacent(a: Tile, b: Tile) -> bool {
    a == b || a.is_adjacent(b)
}
