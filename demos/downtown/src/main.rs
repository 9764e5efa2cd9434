//! downtown — a small courier session on a 20×14 city block.
//!
//! Three couriers, one per competence tier, race an embedded job sheet for
//! five simulated minutes while the weather drifts.  Everything is seeded,
//! so two runs with the same SEED print the same session.

use std::io::Cursor;
use std::time::Instant;

use anyhow::Result;

use courier_agent::{RestedGate, TierProfile};
use courier_core::{Conditions, Parcel, Tick, Tile, WeatherKind};
use courier_grid::CityGrid;
use courier_jobs::load_jobs_reader;
use courier_sim::{SimBuilder, SimConfig, SimObserver, SimReport};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:             u64 = 42;
const TICKS_PER_SECOND: u32 = 60;
const SESSION_SECS:     u64 = 300; // five simulated minutes
const HOLD_CAPACITY:    f32 = 10.0;

// ── City map ──────────────────────────────────────────────────────────────────

// S street, B building, P park.  Dropoffs sit on building tiles on purpose;
// couriers deliver from the adjacent street.
const CITY: [&str; 14] = [
    "SSSSSSSSSSSSSSSSSSSS",
    "SBBSBBSSBBSSBBBSSBBS",
    "SBBSBBSSBBSSBBBSSBBS",
    "SSSSSSSSSSSSSSSSSSSS",
    "SBBSSPPSSBBBSSBBSSBS",
    "SBBSSPPSSBBBSSBBSSBS",
    "SSSSSPPSSSSSSSSSSSSS",
    "SSSSSSSSSSBBSSBBBSSS",
    "SBBSBBSSSSBBSSBBBSBS",
    "SBBSBBSSSSSSSSSSSSBS",
    "SSSSSSSSPPSSBBSSSSSS",
    "SBBSSBBSPPSSBBSSBBSS",
    "SBBSSBBSSSSSSSSSBBSS",
    "SSSSSSSSSSSSSSSSSSSS",
];

// ── Job sheet ─────────────────────────────────────────────────────────────────

const JOBS_CSV: &str = "\
pickup_x,pickup_y,dropoff_x,dropoff_y,payout,weight,priority,duration_secs,release_secs\n\
3,3,17,1,120.0,2.0,3,180.0,0.0\n\
8,6,1,12,90.0,1.5,1,240.0,0.0\n\
12,9,5,4,140.0,2.5,4,200.0,15.0\n\
18,13,9,1,80.0,1.0,1,220.0,30.0\n\
1,6,13,11,100.0,2.0,2,260.0,45.0\n\
5,13,16,8,110.0,1.5,2,240.0,60.0\n\
10,3,2,8,95.0,3.0,1,300.0,90.0\n\
15,6,6,11,130.0,2.0,3,280.0,120.0\n\
";

const TIER_LABELS: [&str; 3] = ["easy", "medium", "hard"];

// ── Session log observer ──────────────────────────────────────────────────────

/// Prints parcel and weather events as they happen.
struct SessionLog {
    ticks_per_second: u32,
    last_kind: WeatherKind,
}

impl SessionLog {
    fn new(ticks_per_second: u32) -> SessionLog {
        SessionLog {
            ticks_per_second,
            last_kind: WeatherKind::Clear,
        }
    }

    fn stamp(&self, tick: Tick) -> String {
        format!("[{:6.1}s]", tick.0 as f32 / self.ticks_per_second as f32)
    }
}

impl SimObserver for SessionLog {
    fn on_pickup(&mut self, courier: usize, parcel: &Parcel, tick: Tick) {
        println!(
            "{} {:<6} picked up  {} at {}",
            self.stamp(tick),
            TIER_LABELS[courier],
            parcel.id,
            parcel.pickup
        );
    }

    fn on_delivery(&mut self, courier: usize, parcel: &Parcel, earned: f32, tick: Tick) {
        println!(
            "{} {:<6} delivered  {} at {} (+{earned:.0})",
            self.stamp(tick),
            TIER_LABELS[courier],
            parcel.id,
            parcel.dropoff
        );
    }

    fn on_expired(&mut self, parcel: &Parcel, tick: Tick) {
        println!("{} {} expired unclaimed", self.stamp(tick), parcel.id);
    }

    fn on_tick_end(&mut self, tick: Tick, weather: Conditions) {
        if weather.kind != self.last_kind {
            println!(
                "{} weather shifts to {} (factor {:.2})",
                self.stamp(tick),
                weather.kind,
                weather.factor
            );
            self.last_kind = weather.kind;
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== downtown — courier_sim session ===");
    println!("Couriers: 3 (one per tier)  |  Session: {SESSION_SECS}s  |  Seed: {SEED}");
    println!();

    let grid = CityGrid::from_ascii(&CITY)?;
    println!("City: {}×{} tiles", grid.width(), grid.height());

    let jobs = load_jobs_reader(Cursor::new(JOBS_CSV))?;
    println!("Job sheet: {} parcels", jobs.len());
    println!();

    let config = SimConfig {
        master_seed: SEED,
        ticks_per_second: TICKS_PER_SECOND,
        duration_ticks: SESSION_SECS * TICKS_PER_SECOND as u64,
        hold_capacity: HOLD_CAPACITY,
    };

    let mut sim = SimBuilder::new(config, grid)
        .jobs(jobs)
        .courier(TierProfile::easy(), Tile::new(0, 0), RestedGate)
        .courier(TierProfile::medium(), Tile::new(19, 0), RestedGate)
        .courier(TierProfile::hard(), Tile::new(0, 13), RestedGate)
        .build()?;

    let mut log = SessionLog::new(TICKS_PER_SECOND);
    let t0 = Instant::now();
    let report = sim.run(&mut log);
    let elapsed = t0.elapsed();

    println!();
    println!("Session complete in {:.3} s wall time", elapsed.as_secs_f64());
    print_report(&report);
    Ok(())
}

fn print_report(report: &SimReport) {
    println!();
    println!(
        "{:<8} {:>8} {:>10} {:>8} {:>10}",
        "Courier", "Pickups", "Delivered", "Earned", "Distance"
    );
    println!("{}", "-".repeat(48));
    for (i, tally) in report.couriers.iter().enumerate() {
        println!(
            "{:<8} {:>8} {:>10} {:>8.0} {:>10}",
            TIER_LABELS[i], tally.picked_up, tally.delivered, tally.earned, tally.distance
        );
    }
    println!("{}", "-".repeat(48));
    println!(
        "{:<8} {:>8} {:>10} {:>8.0}   ({} expired)",
        "total",
        report.couriers.iter().map(|t| t.picked_up).sum::<u32>(),
        report.delivered,
        report.earned,
        report.expired
    );
}
