//! Competence tier enum shared across the planning and dispatch crates.
//!
//! The tier only names the strategy family; the tunable numbers (cadence,
//! deviation, mistake chance, …) live in `courier-agent`'s `TierProfile`.

use std::str::FromStr;

use crate::CoreError;

/// How capable the courier is: which planner it runs and how its targets are
/// scored.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tier {
    /// Biased random walk, random pick among the nearest parcels.
    #[default]
    Easy,
    /// Bounded-depth lookahead planning, scored target selection.
    Medium,
    /// Weighted shortest path, deterministic scoring, delivery sequencing.
    Hard,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Easy, Tier::Medium, Tier::Hard];

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Easy   => "easy",
            Tier::Medium => "medium",
            Tier::Hard   => "hard",
        }
    }
}

impl FromStr for Tier {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy"   => Ok(Tier::Easy),
            "medium" => Ok(Tier::Medium),
            "hard"   => Ok(Tier::Hard),
            other    => Err(CoreError::UnknownTier(other.to_string())),
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
