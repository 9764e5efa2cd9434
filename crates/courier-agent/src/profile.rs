//! Per-tier tuning profiles.

use courier_core::Tier;
use courier_route::Planner;

/// All the knobs that differentiate the competence tiers.
///
/// The presets carry the hand-tuned values the tiers ship with; every field
/// is public and overridable, so scenarios can tune cadence or thresholds
/// without touching engine code.
#[derive(Copy, Clone, Debug)]
pub struct TierProfile {
    pub tier: Tier,
    /// Ticks between task/goal re-evaluations.
    pub decision_cadence: u32,
    /// Per-step probability of the biased walk wandering (Easy planner).
    pub random_deviation: f32,
    /// Per-decision probability of overriding with a random step.
    pub mistake_chance: f64,
    /// Expectimax depth (Medium planner).
    pub lookahead_depth: u32,
    /// Replan the active goal immediately when the weather factor drifts
    /// further than this from the value it was planned under.  `None`
    /// disables the check (Easy/Medium).
    pub weather_replan_delta: Option<f32>,
}

impl TierProfile {
    /// Easy: slow cadence, error-prone, wandering walk.
    pub fn easy() -> TierProfile {
        TierProfile {
            tier: Tier::Easy,
            decision_cadence: 60,
            random_deviation: 0.3,
            mistake_chance: 0.2,
            lookahead_depth: 3,
            weather_replan_delta: None,
        }
    }

    /// Medium: moderate cadence, occasional mistakes, lookahead planning.
    pub fn medium() -> TierProfile {
        TierProfile {
            tier: Tier::Medium,
            decision_cadence: 30,
            random_deviation: 0.1,
            mistake_chance: 0.05,
            lookahead_depth: 3,
            weather_replan_delta: None,
        }
    }

    /// Hard: fast cadence, no mistakes, optimal routing, weather-reactive
    /// replanning.
    pub fn hard() -> TierProfile {
        TierProfile {
            tier: Tier::Hard,
            decision_cadence: 20,
            random_deviation: 0.0,
            mistake_chance: 0.0,
            lookahead_depth: 3,
            weather_replan_delta: Some(0.3),
        }
    }

    pub fn for_tier(tier: Tier) -> TierProfile {
        match tier {
            Tier::Easy => TierProfile::easy(),
            Tier::Medium => TierProfile::medium(),
            Tier::Hard => TierProfile::hard(),
        }
    }

    /// The planner this profile runs, with the profile's tuning applied.
    pub fn planner(&self) -> Planner {
        match self.tier {
            Tier::Easy => Planner::RandomWalk { deviation: self.random_deviation },
            Tier::Medium => Planner::Lookahead { depth: self.lookahead_depth },
            Tier::Hard => Planner::Dijkstra,
        }
    }
}
