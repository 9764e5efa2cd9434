//! Validated scenario assembly for [`CourierSim`].

use courier_agent::{Courier, ResourceGate, TierProfile};
use courier_core::{AgentRng, Parcel, SimRng, TickClock, Tile, WeatherKind};
use courier_grid::{CityGrid, GridCost};
use courier_jobs::{CargoHold, JobBoard};

use crate::sim::{CourierSim, CourierTally, SimConfig};
use crate::{SimError, SimResult, WeatherSystem};

/// RNG stream offset reserved for the weather system, keeping its draws
/// disjoint from every courier's stream.
const WEATHER_RNG_OFFSET: u64 = 0x5745_4154; // "WEAT"

/// Assembles a [`CourierSim`], rejecting malformed scenarios up front.
///
/// # Example
///
/// ```rust,ignore
/// let sim = SimBuilder::new(SimConfig::default(), grid)
///     .jobs(load_jobs_csv("jobs.csv")?)
///     .courier(TierProfile::hard(), Tile::new(1, 1), RestedGate)
///     .build()?;
/// ```
pub struct SimBuilder<G: ResourceGate> {
    config: SimConfig,
    grid: CityGrid,
    jobs: Vec<Parcel>,
    couriers: Vec<(TierProfile, Tile)>,
    gates: Vec<G>,
    initial_weather: Option<(WeatherKind, f32)>,
}

impl<G: ResourceGate> SimBuilder<G> {
    pub fn new(config: SimConfig, grid: CityGrid) -> Self {
        SimBuilder {
            config,
            grid,
            jobs: Vec::new(),
            couriers: Vec::new(),
            gates: Vec::new(),
            initial_weather: None,
        }
    }

    /// Add a job sheet to post at build time.  IDs are assigned in the order
    /// given, across all `jobs` calls.
    pub fn jobs(mut self, parcels: impl IntoIterator<Item = Parcel>) -> Self {
        self.jobs.extend(parcels);
        self
    }

    /// Add one courier at `start` with its own resource gate.
    pub fn courier(mut self, profile: TierProfile, start: Tile, gate: G) -> Self {
        self.couriers.push((profile, start));
        self.gates.push(gate);
        self
    }

    /// Start the session at the given condition and intensity instead of
    /// clear skies.
    pub fn initial_weather(mut self, kind: WeatherKind, intensity: f32) -> Self {
        self.initial_weather = Some((kind, intensity));
        self
    }

    /// Validate and assemble the simulation at tick zero.
    pub fn build(self) -> SimResult<CourierSim<G>> {
        if self.config.ticks_per_second == 0 {
            return Err(SimError::Config("ticks_per_second must be positive".into()));
        }
        if self.config.duration_ticks == 0 {
            return Err(SimError::Config("duration_ticks must be positive".into()));
        }
        if self.config.hold_capacity <= 0.0 {
            return Err(SimError::Config("hold_capacity must be positive".into()));
        }
        if self.couriers.is_empty() {
            return Err(SimError::NoCouriers);
        }
        for (index, &(_, tile)) in self.couriers.iter().enumerate() {
            if self.grid.is_blocked(tile.x, tile.y) {
                return Err(SimError::BlockedStart { index, tile });
            }
        }

        let clock = TickClock::new(self.config.ticks_per_second);

        let mut board = JobBoard::new();
        board.post_all(&clock, self.jobs);

        let weather_rng = SimRng::new(self.config.master_seed).child(WEATHER_RNG_OFFSET);
        let weather = match self.initial_weather {
            Some((kind, intensity)) => {
                WeatherSystem::starting_at(kind, intensity, weather_rng, &clock)
            }
            None => WeatherSystem::new(weather_rng, &clock),
        };

        let courier_count = self.couriers.len();
        let couriers = self
            .couriers
            .into_iter()
            .enumerate()
            .map(|(i, (profile, start))| {
                Courier::new(profile, start, AgentRng::new(self.config.master_seed, i as u32))
            })
            .collect();

        Ok(CourierSim {
            config: self.config,
            clock,
            grid: self.grid,
            board,
            weather,
            couriers,
            holds: vec![CargoHold::new(self.config.hold_capacity); courier_count],
            gates: self.gates,
            tallies: vec![CourierTally::default(); courier_count],
            expired_total: 0,
        })
    }
}
