//! Unit tests for courier-core.

// ── Tiles and directions ──────────────────────────────────────────────────────

#[cfg(test)]
mod tile {
    use crate::{Direction, Tile};

    #[test]
    fn manhattan_distance() {
        assert_eq!(Tile::new(0, 0).manhattan(Tile::new(4, 4)), 8);
        assert_eq!(Tile::new(2, 3).manhattan(Tile::new(2, 3)), 0);
        assert_eq!(Tile::new(-2, 1).manhattan(Tile::new(1, -1)), 5);
    }

    #[test]
    fn neighbor_order_is_up_down_left_right() {
        let t = Tile::new(5, 5);
        assert_eq!(
            t.neighbors4(),
            [Tile::new(5, 4), Tile::new(5, 6), Tile::new(4, 5), Tile::new(6, 5)],
        );
    }

    #[test]
    fn step_matches_delta() {
        let t = Tile::new(0, 0);
        for dir in Direction::ALL {
            let (dx, dy) = dir.delta();
            assert_eq!(t.step(dir), Tile::new(dx, dy));
        }
    }

    #[test]
    fn direction_to_checks_x_axis_first() {
        let t = Tile::new(3, 3);
        assert_eq!(t.direction_to(Tile::new(2, 3)), Some(Direction::Left));
        assert_eq!(t.direction_to(Tile::new(4, 3)), Some(Direction::Right));
        assert_eq!(t.direction_to(Tile::new(3, 2)), Some(Direction::Up));
        assert_eq!(t.direction_to(Tile::new(3, 4)), Some(Direction::Down));
        // Off-axis target: x wins.
        assert_eq!(t.direction_to(Tile::new(5, 9)), Some(Direction::Right));
        assert_eq!(t.direction_to(t), None);
    }

    #[test]
    fn adjacency() {
        let t = Tile::new(1, 1);
        assert!(t.is_adjacent(Tile::new(1, 0)));
        assert!(t.is_adjacent(Tile::new(0, 1)));
        assert!(!t.is_adjacent(Tile::new(2, 2))); // diagonal
        assert!(!t.is_adjacent(t));
    }

    #[test]
    fn lexicographic_ordering() {
        // Heap tie-breaking relies on (x, y) order.
        assert!(Tile::new(1, 9) < Tile::new(2, 0));
        assert!(Tile::new(1, 1) < Tile::new(1, 2));
    }
}

// ── Typed IDs ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod ids {
    use crate::ParcelId;

    #[test]
    fn sentinel_and_index() {
        assert_eq!(ParcelId::INVALID, ParcelId(u32::MAX));
        assert_eq!(ParcelId::default(), ParcelId::INVALID);
        assert_eq!(ParcelId(7).index(), 7usize);
    }

    #[test]
    fn display_and_conversions() {
        assert_eq!(ParcelId(3).to_string(), "ParcelId(3)");
        assert_eq!(usize::from(ParcelId(3)), 3);
        assert_eq!(ParcelId::try_from(9usize).ok(), Some(ParcelId(9)));
        assert!(ParcelId::try_from(usize::MAX).is_err());
    }
}

// ── Clock ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod clock {
    use crate::{Tick, TickClock};

    #[test]
    fn elapsed_seconds_at_sixty_hz() {
        let mut clock = TickClock::new(60);
        for _ in 0..90 {
            clock.advance();
        }
        assert_eq!(clock.current_tick, Tick(90));
        assert!((clock.elapsed_secs() - 1.5).abs() < 1e-6);
    }

    #[test]
    fn ticks_for_secs_rounds_up() {
        let clock = TickClock::new(60);
        assert_eq!(clock.ticks_for_secs(1.0), 60);
        assert_eq!(clock.ticks_for_secs(0.01), 1);
        assert_eq!(clock.ticks_for_secs(0.0), 0);
        assert_eq!(clock.tick_at_secs(2.5), Tick(150));
    }

    #[test]
    fn zero_rate_is_clamped() {
        let clock = TickClock::new(0);
        assert_eq!(clock.ticks_per_second, 1);
    }

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t.offset(5), Tick(15));
        assert_eq!(t + 2, Tick(12));
        assert_eq!(Tick(15) - t, 5);
        assert_eq!(Tick(15).since(t), 5);
        assert_eq!(t.to_string(), "T10");
    }
}

// ── RNG determinism ───────────────────────────────────────────────────────────

#[cfg(test)]
mod rng {
    use crate::{AgentRng, SimRng};

    #[test]
    fn same_seed_same_stream_same_sequence() {
        let mut a = AgentRng::new(42, 0);
        let mut b = AgentRng::new(42, 0);
        for _ in 0..32 {
            assert_eq!(a.gen_range(0..1000), b.gen_range(0..1000));
        }
    }

    #[test]
    fn different_streams_diverge() {
        let mut a = AgentRng::new(42, 0);
        let mut b = AgentRng::new(42, 1);
        let xs: Vec<u32> = (0..16).map(|_| a.gen_range(0..u32::MAX)).collect();
        let ys: Vec<u32> = (0..16).map(|_| b.gen_range(0..u32::MAX)).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn gen_bool_clamps() {
        let mut rng = AgentRng::new(1, 0);
        // Out-of-range probabilities must not panic.
        assert!(!rng.gen_bool(-0.5));
        assert!(rng.gen_bool(1.5));
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = AgentRng::new(1, 0);
        let empty: [u8; 0] = [];
        assert_eq!(rng.choose(&empty), None);
    }

    #[test]
    fn sim_rng_children_are_deterministic() {
        let mut root_a = SimRng::new(7);
        let mut root_b = SimRng::new(7);
        let mut child_a = root_a.child(1);
        let mut child_b = root_b.child(1);
        for _ in 0..16 {
            assert_eq!(
                child_a.gen_range(0..u64::MAX),
                child_b.gen_range(0..u64::MAX),
            );
        }
    }
}

// ── Parcels ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod parcel {
    use crate::{Parcel, ParcelId, Tile};

    fn sample() -> Parcel {
        Parcel {
            id: ParcelId(0),
            pickup: Tile::new(1, 1),
            dropoff: Tile::new(8, 3),
            payout: 120.0,
            weight: 2.0,
            priority: 1,
            duration_secs: 90.0,
            release_secs: 30.0,
        }
    }

    #[test]
    fn deadline_math() {
        let p = sample();
        assert_eq!(p.deadline_secs(), 120.0);
        assert_eq!(p.remaining_secs(100.0), 20.0);
        assert_eq!(p.remaining_secs(150.0), -30.0);
    }

    #[test]
    fn overdue_flag() {
        let p = sample();
        assert!(!p.is_overdue(120.0));
        assert!(p.is_overdue(120.1));
    }
}

// ── Weather and tiers ─────────────────────────────────────────────────────────

#[cfg(test)]
mod weather {
    use crate::{Conditions, WeatherKind};

    #[test]
    fn factors_stay_in_unit_interval() {
        for kind in WeatherKind::ALL {
            let f = kind.base_factor();
            assert!(f > 0.0 && f <= 1.0, "{kind} factor {f} out of range");
        }
    }

    #[test]
    fn clear_is_identity() {
        assert_eq!(WeatherKind::Clear.base_factor(), 1.0);
        assert_eq!(Conditions::default(), Conditions::clear());
    }

    #[test]
    fn steady_uses_base_factor() {
        let c = Conditions::steady(WeatherKind::Storm);
        assert_eq!(c.kind, WeatherKind::Storm);
        assert_eq!(c.factor, 0.75);
    }
}

#[cfg(test)]
mod tier {
    use crate::Tier;

    #[test]
    fn parse_roundtrip() {
        for tier in Tier::ALL {
            assert_eq!(tier.as_str().parse::<Tier>().ok(), Some(tier));
        }
        assert_eq!(" Hard ".parse::<Tier>().ok(), Some(Tier::Hard));
    }

    #[test]
    fn parse_rejects_unknown() {
        assert!("impossible".parse::<Tier>().is_err());
    }
}
