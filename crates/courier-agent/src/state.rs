//! The courier's owned, mutable state.

use std::collections::VecDeque;

use courier_core::{ParcelId, Tile};

// ── Task ──────────────────────────────────────────────────────────────────────

/// What the courier is currently trying to do.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum Task {
    /// Nothing in flight; waiting for the next decision tick.
    #[default]
    Idle,
    /// Heading for a parcel's pickup tile.
    Pickup,
    /// Heading for a held parcel's dropoff tile.
    Deliver,
    /// No work visible; wandering one random step at a time.
    Explore,
}

impl Task {
    pub fn as_str(self) -> &'static str {
        match self {
            Task::Idle => "idle",
            Task::Pickup => "pickup",
            Task::Deliver => "deliver",
            Task::Explore => "explore",
        }
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── CourierState ──────────────────────────────────────────────────────────────

/// Everything the decision loop and path follower share, owned in one struct
/// so a tick is a plain `&mut` pass — no hidden globals.
#[derive(Clone, Debug)]
pub struct CourierState {
    /// Current tile.
    pub position: Tile,
    pub task: Task,
    /// The tile planning aims at.  May be blocked (dropoffs usually are);
    /// the planner substitutes a walkable neighbor internally.
    pub goal: Option<Tile>,
    /// Waypoints still ahead, consumed front-to-back.
    pub path: VecDeque<Tile>,
    /// The parcel being picked up or delivered.
    pub target: Option<ParcelId>,
    /// Hard tier: planned dropoff order of the held parcels (head = next).
    pub delivery_sequence: Vec<ParcelId>,
    /// Ticks since the last decision.
    pub decision_counter: u32,
    /// Weather factor the current path was planned under.
    pub planned_weather: f32,
}

impl CourierState {
    /// Fresh idle state at `start`.
    pub fn new(start: Tile) -> CourierState {
        CourierState {
            position: start,
            task: Task::Idle,
            goal: None,
            path: VecDeque::new(),
            target: None,
            delivery_sequence: Vec::new(),
            decision_counter: 0,
            planned_weather: 1.0,
        }
    }

    /// Drop the current plan and task; keeps position and delivery sequence.
    pub fn clear_plan(&mut self) {
        self.task = Task::Idle;
        self.goal = None;
        self.path.clear();
        self.target = None;
    }
}
