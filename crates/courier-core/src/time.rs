//! Session time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter advanced once per frame
//! of the host's fixed-rate loop.  `TickClock` holds the tick-to-seconds
//! mapping:
//!
//!   elapsed_secs = tick / ticks_per_second
//!
//! The integer tick is canonical: decision cadences, release schedules, and
//! weather change points are all expressed in ticks, so comparisons are exact.
//! Seconds only appear where the job domain demands them (parcel durations,
//! stamina recovery), derived on the fly.
//!
//! The default rate is 60 ticks per simulated second, matching a 60 Hz frame
//! loop.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute tick counter.
///
/// Stored as `u64`: at 60 ticks/second a u64 lasts ~9.7 billion years, so
/// overflow handling is not worth the branches.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── TickClock ─────────────────────────────────────────────────────────────────

/// Converts between tick counts and session seconds.
///
/// Cheap to copy; holds no heap data.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickClock {
    /// Frame rate of the host loop.  Default: 60.
    pub ticks_per_second: u32,
    /// The current tick — advanced by `TickClock::advance()` each frame.
    pub current_tick: Tick,
}

impl TickClock {
    /// A clock at tick zero with the given frame rate.
    pub fn new(ticks_per_second: u32) -> Self {
        Self {
            ticks_per_second: ticks_per_second.max(1),
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Session seconds elapsed since tick 0.
    #[inline]
    pub fn elapsed_secs(&self) -> f32 {
        self.current_tick.0 as f32 / self.ticks_per_second as f32
    }

    /// Duration of a single tick in seconds.
    #[inline]
    pub fn tick_secs(&self) -> f32 {
        1.0 / self.ticks_per_second as f32
    }

    /// How many ticks span `secs` seconds? (rounds up — events never fire early)
    #[inline]
    pub fn ticks_for_secs(&self, secs: f32) -> u64 {
        (secs.max(0.0) * self.ticks_per_second as f32).ceil() as u64
    }

    /// The absolute tick at which an offset of `secs` from session start lands.
    #[inline]
    pub fn tick_at_secs(&self, secs: f32) -> Tick {
        Tick(self.ticks_for_secs(secs))
    }
}

impl Default for TickClock {
    fn default() -> Self {
        TickClock::new(60)
    }
}

impl fmt::Display for TickClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.1}s)", self.current_tick, self.elapsed_secs())
    }
}
