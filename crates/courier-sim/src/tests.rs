//! Unit tests for courier-sim.

#[cfg(test)]
mod helpers {
    use courier_core::{Parcel, ParcelId, Tick, Tile, WeatherKind};
    use courier_grid::CityGrid;

    use crate::{SimConfig, SimObserver};

    pub fn open_city() -> CityGrid {
        CityGrid::open(8, 8)
    }

    pub fn config() -> SimConfig {
        SimConfig {
            master_seed: 42,
            ticks_per_second: 60,
            duration_ticks: 600,
            hold_capacity: 10.0,
        }
    }

    pub fn parcel(pickup: Tile, dropoff: Tile) -> Parcel {
        Parcel {
            id: ParcelId(0), // reassigned by the board on post
            pickup,
            dropoff,
            payout: 120.0,
            weight: 1.0,
            priority: 1,
            duration_secs: 300.0,
            release_secs: 0.0,
        }
    }

    /// Observer that counts every callback.
    #[derive(Default)]
    pub struct CountingObserver {
        pub ticks: u64,
        pub decisions: u32,
        pub pickups: u32,
        pub deliveries: u32,
        pub expired: u32,
        pub ended: bool,
    }

    impl SimObserver for CountingObserver {
        fn on_tick_start(&mut self, _tick: Tick) {
            self.ticks += 1;
        }

        fn on_decision(&mut self, _courier: usize, _task: courier_agent::Task, _tick: Tick) {
            self.decisions += 1;
        }

        fn on_pickup(&mut self, _courier: usize, _parcel: &Parcel, _tick: Tick) {
            self.pickups += 1;
        }

        fn on_delivery(&mut self, _courier: usize, _parcel: &Parcel, _earned: f32, _tick: Tick) {
            self.deliveries += 1;
        }

        fn on_expired(&mut self, _parcel: &Parcel, _tick: Tick) {
            self.expired += 1;
        }

        fn on_sim_end(&mut self, _report: &crate::SimReport) {
            self.ended = true;
        }
    }

    /// Gate that counts recovery credits; movement is always free.
    #[derive(Default)]
    pub struct CountingGate {
        pub moves: u32,
        pub recovers: u32,
    }

    impl courier_agent::ResourceGate for CountingGate {
        fn can_move(&self) -> bool {
            true
        }

        fn consume_move(&mut self, _cells: u32, _weight: f32, _weather: WeatherKind) -> f32 {
            self.moves += 1;
            1.0
        }

        fn recover(&mut self, _secs: f32, _at_rest_point: bool) -> f32 {
            self.recovers += 1;
            1.0
        }
    }
}

// ── Weather system ────────────────────────────────────────────────────────────

#[cfg(test)]
mod weather {
    use courier_core::{SimRng, TickClock, WeatherKind};

    use crate::WeatherSystem;

    #[test]
    fn steady_never_changes() {
        let mut clock = TickClock::new(60);
        let mut weather = WeatherSystem::steady(WeatherKind::Storm);
        for _ in 0..10_000 {
            weather.advance(&clock);
            let conditions = weather.current();
            assert_eq!(conditions.kind, WeatherKind::Storm);
            assert!((conditions.factor - 0.75).abs() < 1e-6);
            clock.advance();
        }
    }

    #[test]
    fn no_change_before_the_minimum_interval() {
        let mut clock = TickClock::new(60);
        let mut weather = WeatherSystem::new(SimRng::new(7), &clock);
        // The first change lands at 45s or later: 2700 ticks at 60/s.
        for _ in 0..2700 {
            weather.advance(&clock);
            let conditions = weather.current();
            assert_eq!(conditions.kind, WeatherKind::Clear);
            assert!((conditions.factor - 1.0).abs() < 1e-6);
            clock.advance();
        }
    }

    #[test]
    fn conditions_change_on_schedule() {
        let mut clock = TickClock::new(60);
        let mut weather = WeatherSystem::new(SimRng::new(7), &clock);
        // First change by 60s, transition done within another 5s.
        for _ in 0..4000 {
            weather.advance(&clock);
            clock.advance();
        }
        // A completed transition re-draws intensity; hitting exactly the
        // starting 1.0 again is measure-zero.
        assert!((weather.intensity() - 1.0).abs() > 1e-9);
    }

    #[test]
    fn factor_stays_in_range_and_moves_smoothly() {
        let mut clock = TickClock::new(60);
        let mut weather = WeatherSystem::new(SimRng::new(9), &clock);
        let mut previous = weather.current().factor;
        for _ in 0..20_000 {
            weather.advance(&clock);
            let factor = weather.current().factor;
            assert!((0.75..=1.0).contains(&factor), "factor {factor} out of range");
            // Transitions take at least 3s (180 ticks) over a span of at
            // most 0.25, so per-tick movement stays tiny.
            assert!(
                (factor - previous).abs() < 0.01,
                "factor jumped {previous} -> {factor}"
            );
            previous = factor;
            clock.advance();
        }
    }

    #[test]
    fn same_seed_reproduces_the_history() {
        let run = |seed: u64| {
            let mut clock = TickClock::new(60);
            let mut weather = WeatherSystem::new(SimRng::new(seed), &clock);
            let mut trace = Vec::new();
            for _ in 0..10_000 {
                weather.advance(&clock);
                let conditions = weather.current();
                trace.push((conditions.kind, conditions.factor.to_bits()));
                clock.advance();
            }
            trace
        };
        assert_eq!(run(5), run(5));
    }
}

// ── Builder validation ────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use courier_agent::{RestedGate, TierProfile};
    use courier_core::{ParcelId, Tile};
    use courier_grid::TileKind;

    use super::helpers::{config, open_city, parcel};
    use crate::{SimBuilder, SimError};

    #[test]
    fn rejects_a_scenario_without_couriers() {
        let result = SimBuilder::<RestedGate>::new(config(), open_city()).build();
        assert!(matches!(result, Err(SimError::NoCouriers)));
    }

    #[test]
    fn rejects_a_courier_on_a_blocked_tile() {
        let mut city = open_city();
        city.set_kind(1, 1, TileKind::Building);
        let result = SimBuilder::new(config(), city)
            .courier(TierProfile::hard(), Tile::new(1, 1), RestedGate)
            .build();
        assert!(matches!(
            result,
            Err(SimError::BlockedStart { index: 0, tile }) if tile == Tile::new(1, 1)
        ));
    }

    #[test]
    fn rejects_a_courier_out_of_bounds() {
        let result = SimBuilder::new(config(), open_city())
            .courier(TierProfile::hard(), Tile::new(100, 0), RestedGate)
            .build();
        assert!(matches!(result, Err(SimError::BlockedStart { .. })));
    }

    #[test]
    fn rejects_degenerate_configs() {
        let mut zero_duration = config();
        zero_duration.duration_ticks = 0;
        let mut zero_rate = config();
        zero_rate.ticks_per_second = 0;
        let mut no_capacity = config();
        no_capacity.hold_capacity = 0.0;

        for bad in [zero_duration, zero_rate, no_capacity] {
            let result = SimBuilder::new(bad, open_city())
                .courier(TierProfile::hard(), Tile::new(0, 0), RestedGate)
                .build();
            assert!(matches!(result, Err(SimError::Config(_))));
        }
    }

    #[test]
    fn posts_jobs_in_order_at_build() {
        let sim = SimBuilder::new(config(), open_city())
            .jobs([
                parcel(Tile::new(1, 1), Tile::new(2, 2)),
                parcel(Tile::new(3, 3), Tile::new(4, 4)),
            ])
            .jobs([parcel(Tile::new(5, 5), Tile::new(6, 6))])
            .courier(TierProfile::hard(), Tile::new(0, 0), RestedGate)
            .build()
            .unwrap();

        assert_eq!(sim.board.len(), 3);
        let third = sim.board.parcel(ParcelId(2)).unwrap();
        assert_eq!(third.pickup, Tile::new(5, 5));
    }
}

// ── Harness behavior ──────────────────────────────────────────────────────────

#[cfg(test)]
mod harness {
    use courier_agent::{RestedGate, TierProfile};
    use courier_core::Tile;
    use courier_grid::CityGrid;
    use courier_jobs::ParcelPhase;

    use super::helpers::{config, open_city, parcel, CountingGate, CountingObserver};
    use crate::{NoopObserver, SimBuilder};

    #[test]
    fn hard_courier_picks_up_and_delivers_end_to_end() {
        let job = parcel(Tile::new(4, 4), Tile::new(7, 7));
        let mut sim = SimBuilder::new(config(), open_city())
            .jobs([job])
            .courier(TierProfile::hard(), Tile::new(0, 0), RestedGate)
            .build()
            .unwrap();

        let mut observer = CountingObserver::default();
        let report = sim.run(&mut observer);

        assert_eq!(report.delivered, 1);
        assert!((report.earned - 120.0).abs() < 1e-3);
        assert_eq!(report.couriers[0].picked_up, 1);
        assert!(report.couriers[0].distance > 0);
        assert_eq!(observer.pickups, 1);
        assert_eq!(observer.deliveries, 1);
        assert_eq!(observer.ticks, 600);
        assert!(observer.ended);
        assert!(sim.hold(0).is_empty());
        assert_eq!(sim.board.count_in_phase(ParcelPhase::Delivered), 1);
    }

    #[test]
    fn first_courier_processed_claims_a_contested_parcel() {
        let job = parcel(Tile::new(1, 0), Tile::new(7, 7));
        let mut sim = SimBuilder::new(config(), open_city())
            .jobs([job])
            .courier(TierProfile::hard(), Tile::new(0, 0), RestedGate)
            .courier(TierProfile::hard(), Tile::new(1, 1), RestedGate)
            .build()
            .unwrap();

        // Both start adjacent to the pickup; courier 0 ticks first.
        sim.run_ticks(1, &mut NoopObserver);
        assert_eq!(sim.hold(0).len(), 1);
        assert!(sim.hold(1).is_empty());
        assert_eq!(sim.report().couriers[0].picked_up, 1);
        assert_eq!(sim.board.count_in_phase(ParcelPhase::Claimed), 1);
    }

    #[test]
    fn overweight_parcel_is_never_claimed() {
        let mut job = parcel(Tile::new(1, 0), Tile::new(7, 7));
        job.weight = 25.0; // exceeds the 10.0 hold capacity
        let mut sim = SimBuilder::new(config(), open_city())
            .jobs([job])
            .courier(TierProfile::hard(), Tile::new(0, 0), RestedGate)
            .build()
            .unwrap();

        sim.run_ticks(60, &mut NoopObserver);
        assert!(sim.hold(0).is_empty());
        assert_eq!(sim.board.count_in_phase(ParcelPhase::Available), 1);
    }

    #[test]
    fn unclaimed_parcel_expires_at_its_deadline() {
        let mut job = parcel(Tile::new(19, 19), Tile::new(0, 19));
        job.duration_secs = 0.5; // expires long before anyone can reach it
        let mut sim = SimBuilder::new(config(), CityGrid::open(20, 20))
            .jobs([job])
            .courier(TierProfile::hard(), Tile::new(0, 0), RestedGate)
            .build()
            .unwrap();

        let mut observer = CountingObserver::default();
        sim.run_ticks(120, &mut observer);
        assert_eq!(observer.expired, 1);
        assert_eq!(observer.deliveries, 0);
        assert_eq!(sim.report().expired, 1);
        assert_eq!(sim.board.count_in_phase(ParcelPhase::Expired), 1);
    }

    #[test]
    fn idle_couriers_are_credited_recovery() {
        // No jobs and a 20-tick cadence: the first ticks have no path at
        // all, so every one of them is a recovery tick.
        let mut sim = SimBuilder::new(config(), open_city())
            .courier(TierProfile::hard(), Tile::new(3, 3), CountingGate::default())
            .build()
            .unwrap();

        sim.run_ticks(5, &mut NoopObserver);
        assert_eq!(sim.gates[0].recovers, 5);
        assert_eq!(sim.gates[0].moves, 0);
        assert_eq!(sim.report().couriers[0].distance, 0);
    }

    #[test]
    fn same_seed_reproduces_a_full_session() {
        let run = |seed: u64| {
            let mut cfg = config();
            cfg.master_seed = seed;
            let mut sim = SimBuilder::new(cfg, open_city())
                .jobs([
                    parcel(Tile::new(2, 5), Tile::new(7, 7)),
                    parcel(Tile::new(5, 2), Tile::new(0, 7)),
                ])
                .courier(TierProfile::easy(), Tile::new(0, 0), RestedGate)
                .courier(TierProfile::medium(), Tile::new(7, 0), RestedGate)
                .build()
                .unwrap();
            let report = sim.run(&mut NoopObserver);
            (
                report.delivered,
                report.earned.to_bits(),
                sim.courier_position(0),
                sim.courier_position(1),
            )
        };
        assert_eq!(run(11), run(11));
    }
}
