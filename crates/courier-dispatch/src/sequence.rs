//! Greedy delivery sequencing for multi-parcel holds (Hard tier).

use courier_core::{Parcel, ParcelId, Tile};

/// Priority, path cost, and urgency weights of the sequencing score.
const PRIORITY_WEIGHT: f32 = 10.0;
const COST_WEIGHT: f32 = 0.5;
/// Urgency of a parcel already past its deadline.
const MAX_URGENCY: f32 = 100.0;

/// Order the held parcels for delivery by greedy nearest-value insertion.
///
/// Repeatedly appends the unvisited parcel maximizing
/// `priority·10 − estimated_path_cost·0.5 + urgency`, where the path cost is
/// the weather-inflated Manhattan distance from a cursor that advances to
/// each chosen dropoff, and `urgency = 100 / (1 + remaining_secs)` (overdue
/// parcels count as maximally urgent).  Ties resolve to the lowest ID.
///
/// The result is a permutation of `held` — every parcel exactly once.  This
/// is a heuristic, not an exact tour: it trades optimality for a bounded
/// O(n²) that always fits the tick budget.
pub fn plan_deliveries(
    held: &[Parcel],
    start: Tile,
    now_secs: f32,
    weather_factor: f32,
) -> Vec<ParcelId> {
    let mut remaining: Vec<&Parcel> = held.iter().collect();
    let mut sequence = Vec::with_capacity(held.len());
    let mut cursor = start;

    while !remaining.is_empty() {
        let mut best_idx = 0;
        let mut best_score = f32::NEG_INFINITY;
        for (i, parcel) in remaining.iter().enumerate() {
            let s = leg_score(parcel, cursor, now_secs, weather_factor);
            let better = s > best_score
                || (s == best_score && parcel.id < remaining[best_idx].id);
            if better {
                best_score = s;
                best_idx = i;
            }
        }

        let chosen = remaining.swap_remove(best_idx);
        cursor = chosen.dropoff;
        sequence.push(chosen.id);
    }

    sequence
}

/// Score of delivering `parcel` next from `cursor`.
fn leg_score(parcel: &Parcel, cursor: Tile, now_secs: f32, weather_factor: f32) -> f32 {
    let estimated_cost =
        cursor.manhattan(parcel.dropoff) as f32 * (1.0 + (1.0 - weather_factor) * 0.5);
    let remaining = parcel.remaining_secs(now_secs);
    let urgency = if remaining <= 0.0 {
        MAX_URGENCY
    } else {
        100.0 / (1.0 + remaining)
    };

    PRIORITY_WEIGHT * parcel.priority as f32 - COST_WEIGHT * estimated_cost + urgency
}
