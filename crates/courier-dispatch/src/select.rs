//! Per-tier target selection.

use courier_core::{AgentRng, Parcel, ParcelId, Tier, Tile};

// ── Scoring weights ───────────────────────────────────────────────────────────

/// Medium tier: payout, distance, weather.
const MEDIUM_PAYOUT_WEIGHT: f32 = 1.0;
const MEDIUM_DIST_WEIGHT: f32 = 0.4;
const MEDIUM_WEATHER_WEIGHT: f32 = 0.3;
/// Bonus per priority point (Medium).
const MEDIUM_PRIORITY_BONUS: f32 = 5.0;
/// Deadlines closer than this start penalizing the score (seconds).
const TIME_PRESSURE_SECS: f32 = 60.0;

/// Hard tier: priority dominates, distance and deadline modulate.
const HARD_PRIORITY_WEIGHT: f32 = 10.0;
const HARD_DIST_WEIGHT: f32 = 0.5;
const HARD_TIME_WEIGHT: f32 = 0.1;

/// How many nearest candidates the Easy pick samples from.
const EASY_POOL: usize = 3;

// ── Public API ────────────────────────────────────────────────────────────────

/// Pick the parcel the courier should pursue next, per tier.
///
/// `candidates` is the already-filtered visible set (released, unclaimed,
/// fits the hold).  Returns `None` when it is empty.
///
/// - **Easy**: uniform pick among the 3 nearest by Manhattan distance.
/// - **Medium**: payout-vs-distance score with priority bonus and deadline
///   pressure; deterministic.
/// - **Hard**: priority-dominated score; deterministic.
pub fn pick_target(
    tier: Tier,
    candidates: &[Parcel],
    position: Tile,
    now_secs: f32,
    weather_factor: f32,
    rng: &mut AgentRng,
) -> Option<ParcelId> {
    if candidates.is_empty() {
        return None;
    }

    match tier {
        Tier::Easy => {
            let mut by_distance: Vec<&Parcel> = candidates.iter().collect();
            // Secondary id key so equal distances order the pool identically
            // across runs.
            by_distance.sort_by_key(|p| (position.manhattan(p.pickup), p.id));
            let pool = &by_distance[..EASY_POOL.min(by_distance.len())];
            rng.choose(pool).map(|p| p.id)
        }
        Tier::Medium => best_by(candidates, |p| medium_score(p, position, now_secs, weather_factor)),
        Tier::Hard => best_by(candidates, |p| hard_score(p, position, now_secs, weather_factor)),
    }
}

/// The Hard tier's candidate score, public for inspection and tests.
pub fn hard_score(parcel: &Parcel, position: Tile, now_secs: f32, weather_factor: f32) -> f32 {
    let distance = position.manhattan(parcel.pickup) as f32;
    let remaining = parcel.remaining_secs(now_secs);
    let weather_penalty = (1.0 - weather_factor) * distance * 0.5;

    HARD_PRIORITY_WEIGHT * parcel.priority as f32 - HARD_DIST_WEIGHT * distance
        + HARD_TIME_WEIGHT * remaining
        - weather_penalty
}

/// The Medium tier's candidate score.
pub fn medium_score(parcel: &Parcel, position: Tile, now_secs: f32, weather_factor: f32) -> f32 {
    let distance = position.manhattan(parcel.pickup) as f32;
    let remaining = parcel.remaining_secs(now_secs);
    let weather_penalty = (1.0 - weather_factor) * distance * 0.5;
    let time_penalty = if remaining > TIME_PRESSURE_SECS {
        0.0
    } else {
        (TIME_PRESSURE_SECS - remaining) * 0.5
    };

    MEDIUM_PAYOUT_WEIGHT * parcel.payout - MEDIUM_DIST_WEIGHT * distance
        - MEDIUM_WEATHER_WEIGHT * weather_penalty
        + MEDIUM_PRIORITY_BONUS * parcel.priority as f32
        - time_penalty
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Maximum-scoring parcel; score ties resolve to the lowest ID.
fn best_by(candidates: &[Parcel], score: impl Fn(&Parcel) -> f32) -> Option<ParcelId> {
    let mut best: Option<(f32, ParcelId)> = None;
    for parcel in candidates {
        let s = score(parcel);
        let better = match best {
            None => true,
            Some((bs, bid)) => s > bs || (s == bs && parcel.id < bid),
        };
        if better {
            best = Some((s, parcel.id));
        }
    }
    best.map(|(_, id)| id)
}
