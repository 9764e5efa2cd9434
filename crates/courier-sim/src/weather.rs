//! The weather system: condition transitions on a 45–60 second rhythm.
//!
//! # Model
//!
//! At any moment one [`WeatherKind`] is in effect at some intensity in
//! [0, 1].  Every 45–60 simulated seconds a new condition (and intensity) is
//! drawn; the published speed factor then slides linearly from the old
//! effective value to the new one over a 3–5 second transition window, so
//! couriers never see a step change.  Intensity scales a condition's penalty
//! toward "no effect": `effective = 1 − (1 − base) · intensity`.
//!
//! All draws come from the injected [`SimRng`], never from agent RNGs, so
//! weather history is reproducible and independent of courier decisions.

use courier_core::{Conditions, SimRng, Tick, TickClock, WeatherKind};

/// Seconds between condition changes.
const CHANGE_INTERVAL_SECS: (f32, f32) = (45.0, 60.0);
/// Seconds a factor transition takes.
const TRANSITION_SECS: (f32, f32) = (3.0, 5.0);

// ── WeatherSystem ─────────────────────────────────────────────────────────────

struct Transition {
    from_factor: f32,
    to_factor: f32,
    to_kind: WeatherKind,
    to_intensity: f32,
    start: Tick,
    duration_ticks: u64,
}

/// Drives the [`Conditions`] snapshot published to couriers once per tick.
pub struct WeatherSystem {
    rng: SimRng,
    kind: WeatherKind,
    intensity: f32,
    factor: f32,
    transition: Option<Transition>,
    next_change: Tick,
}

impl WeatherSystem {
    /// A weather system starting clear, changing on schedule.
    pub fn new(rng: SimRng, clock: &TickClock) -> WeatherSystem {
        WeatherSystem::starting_at(WeatherKind::Clear, 1.0, rng, clock)
    }

    /// A weather system starting at the given condition and intensity.
    pub fn starting_at(
        kind: WeatherKind,
        intensity: f32,
        mut rng: SimRng,
        clock: &TickClock,
    ) -> WeatherSystem {
        let intensity = intensity.clamp(0.0, 1.0);
        let first_change = clock
            .current_tick
            .offset(clock.ticks_for_secs(rng.gen_range(CHANGE_INTERVAL_SECS.0..=CHANGE_INTERVAL_SECS.1)));
        WeatherSystem {
            rng,
            kind,
            intensity,
            factor: effective_factor(kind, intensity),
            transition: None,
            next_change: first_change,
        }
    }

    /// A frozen system that always reports the given condition at full
    /// intensity.  Used by tests and synthetic scenarios.
    pub fn steady(kind: WeatherKind) -> WeatherSystem {
        WeatherSystem {
            rng: SimRng::new(0),
            kind,
            intensity: 1.0,
            factor: effective_factor(kind, 1.0),
            transition: None,
            next_change: Tick(u64::MAX),
        }
    }

    /// Advance by one tick: progress any running transition, or start a new
    /// one when the change interval elapses.
    pub fn advance(&mut self, clock: &TickClock) {
        let now = clock.current_tick;

        if let Some(t) = &self.transition {
            let progress =
                (now.since(t.start) as f32 / t.duration_ticks.max(1) as f32).min(1.0);
            self.factor = t.from_factor + (t.to_factor - t.from_factor) * progress;
            if progress >= 1.0 {
                self.kind = t.to_kind;
                self.intensity = t.to_intensity;
                self.factor = t.to_factor;
                self.transition = None;
            }
            return;
        }

        if now >= self.next_change {
            let to_kind = *self
                .rng
                .choose(&WeatherKind::ALL)
                .unwrap_or(&WeatherKind::Clear);
            let to_intensity: f32 = self.rng.gen_range(0.0..=1.0);
            let duration_secs = self.rng.gen_range(TRANSITION_SECS.0..=TRANSITION_SECS.1);

            self.transition = Some(Transition {
                from_factor: self.factor,
                to_factor: effective_factor(to_kind, to_intensity),
                to_kind,
                to_intensity,
                start: now,
                duration_ticks: clock.ticks_for_secs(duration_secs),
            });
            self.next_change = now.offset(clock.ticks_for_secs(
                self.rng.gen_range(CHANGE_INTERVAL_SECS.0..=CHANGE_INTERVAL_SECS.1),
            ));
        }
    }

    /// This tick's snapshot.  The factor stays in (0, 1]: condition
    /// multipliers bottom out at 0.75 and intensity only pulls toward 1.0.
    pub fn current(&self) -> Conditions {
        Conditions { kind: self.kind, factor: self.factor }
    }

    pub fn intensity(&self) -> f32 {
        self.intensity
    }
}

/// The speed factor of `kind` at `intensity`.
#[inline]
fn effective_factor(kind: WeatherKind, intensity: f32) -> f32 {
    1.0 - (1.0 - kind.base_factor()) * intensity
}
