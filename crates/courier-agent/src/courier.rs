//! The courier: periodic decisions, tick-by-tick path following.

use courier_core::{AgentRng, Direction, Parcel, ParcelId, Tier, Tile};
use courier_dispatch::{pick_target, plan_deliveries};
use courier_grid::open_neighbors;

use crate::{CourierState, ResourceGate, Task, TickContext, TierProfile};

// ── TickOutcome ───────────────────────────────────────────────────────────────

/// What one courier tick did, reported as a value.
///
/// The courier never touches the board, hold, or renderer directly; the
/// harness reads this and applies the side effects.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct TickOutcome {
    /// `Some(task)` when this tick hit the decision cadence (or a mistake
    /// override) and re-decided.
    pub decided: Option<Task>,
    /// The movement command issued, if any.  `None` means the courier
    /// stalled, had no path, or consumed an already-reached waypoint.
    pub moved: Option<Direction>,
    /// Goal-reached signal, fired the tick the last waypoint is consumed.
    pub event: Option<GoalEvent>,
    /// `true` if the waypoint sequence was discarded and recomputed this
    /// tick (blocked waypoint or weather shift).
    pub replanned: bool,
}

/// The courier finished walking its plan.
///
/// For deliveries the courier usually stands *next to* the dropoff, not on
/// it — dropoffs sit on blocked building tiles and planning substitutes an
/// open neighbor.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum GoalEvent {
    /// Arrived at a parcel's pickup tile.
    Pickup(ParcelId),
    /// Arrived at (next to) a held parcel's dropoff tile.
    Deliver(ParcelId),
}

// ── Courier ───────────────────────────────────────────────────────────────────

/// One autonomous courier instance: profile, state, and its private RNG.
///
/// Independent instances share nothing; running several against the same
/// read-only grid needs no coordination.
pub struct Courier {
    pub profile: TierProfile,
    pub state: CourierState,
    rng: AgentRng,
}

impl Courier {
    pub fn new(profile: TierProfile, start: Tile, rng: AgentRng) -> Courier {
        Courier {
            profile,
            state: CourierState::new(start),
            rng,
        }
    }

    /// Run one simulation tick: maybe re-decide, then follow the path by at
    /// most one step.
    pub fn tick(&mut self, ctx: &TickContext<'_>, gate: &mut dyn ResourceGate) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        // Weather-reactive replanning runs every tick, independent of the
        // decision cadence.
        if let Some(delta) = self.profile.weather_replan_delta {
            let drifted = (ctx.weather.factor - self.state.planned_weather).abs() > delta;
            if drifted && self.state.goal.is_some() {
                self.plan_route(ctx);
                outcome.replanned = true;
            }
        }

        self.state.decision_counter += 1;
        if self.state.decision_counter >= self.profile.decision_cadence {
            self.state.decision_counter = 0;
            self.decide(ctx);
            outcome.decided = Some(self.state.task);
        }

        self.follow(ctx, gate, &mut outcome);
        outcome
    }

    // ── Decision loop ─────────────────────────────────────────────────────

    /// Re-evaluate task, target, and goal.  Deliveries outrank pickups
    /// outrank exploring.
    fn decide(&mut self, ctx: &TickContext<'_>) {
        // Imperfection model: occasionally forget the plan and wander.
        if self.profile.mistake_chance > 0.0 && self.rng.gen_bool(self.profile.mistake_chance) {
            self.explore_step(ctx);
            return;
        }

        if !ctx.held.is_empty() {
            let target = self.pick_delivery(ctx);
            self.state.task = Task::Deliver;
            self.state.target = Some(target.id);
            self.state.goal = Some(target.dropoff);
            self.plan_route(ctx);
            return;
        }

        if let Some(id) = pick_target(
            self.profile.tier,
            ctx.candidates,
            self.state.position,
            ctx.now_secs,
            ctx.weather.factor,
            &mut self.rng,
        ) {
            // The id came out of `candidates`, so the lookup cannot miss.
            if let Some(parcel) = ctx.candidates.iter().find(|p| p.id == id) {
                self.state.task = Task::Pickup;
                self.state.target = Some(parcel.id);
                self.state.goal = Some(parcel.pickup);
                self.plan_route(ctx);
                return;
            }
        }

        self.explore_step(ctx);
    }

    /// Choose which held parcel to deliver next.
    ///
    /// Hard recomputes the full delivery sequence whenever it holds two or
    /// more parcels and takes its head; the other tiers just chase the
    /// highest-priority parcel.
    fn pick_delivery<'c>(&mut self, ctx: &TickContext<'c>) -> &'c Parcel {
        if self.profile.tier == Tier::Hard {
            if ctx.held.len() >= 2 {
                self.state.delivery_sequence = plan_deliveries(
                    ctx.held,
                    self.state.position,
                    ctx.now_secs,
                    ctx.weather.factor,
                );
            } else {
                self.state.delivery_sequence = vec![ctx.held[0].id];
            }
            let head = self.state.delivery_sequence[0];
            // The sequence is a permutation of `held`.
            return ctx
                .held
                .iter()
                .find(|p| p.id == head)
                .unwrap_or(&ctx.held[0]);
        }

        let mut best = &ctx.held[0];
        for parcel in &ctx.held[1..] {
            if parcel.priority > best.priority
                || (parcel.priority == best.priority && parcel.id < best.id)
            {
                best = parcel;
            }
        }
        best
    }

    /// Replace the plan with a single random-neighbor step.
    fn explore_step(&mut self, ctx: &TickContext<'_>) {
        self.state.task = Task::Explore;
        self.state.goal = None;
        self.state.target = None;
        self.state.path.clear();

        let neighbors: Vec<Tile> = open_neighbors(ctx.grid, self.state.position).collect();
        if let Some(&step) = self.rng.choose(&neighbors) {
            self.state.path.push_back(step);
        }
    }

    /// Plan (or replan) a route to the current goal with the tier's planner.
    fn plan_route(&mut self, ctx: &TickContext<'_>) {
        let Some(goal) = self.state.goal else {
            return;
        };
        let waypoints = self.profile.planner().plan(
            ctx.grid,
            self.state.position,
            goal,
            ctx.weather.factor,
            &mut self.rng,
        );
        self.state.path = waypoints.into();
        self.state.planned_weather = ctx.weather.factor;
    }

    // ── Path follower ─────────────────────────────────────────────────────

    /// Consume at most one waypoint: pop if already reached, replan if the
    /// next tile got blocked, otherwise step onto it.
    fn follow(
        &mut self,
        ctx: &TickContext<'_>,
        gate: &mut dyn ResourceGate,
        outcome: &mut TickOutcome,
    ) {
        let Some(&front) = self.state.path.front() else {
            return;
        };
        if !gate.can_move() {
            return; // stall silently; the harness credits recovery
        }

        // Stale waypoint (e.g. a plan that started on our own tile).
        if front == self.state.position {
            self.state.path.pop_front();
            if self.state.path.is_empty() {
                self.goal_reached(outcome);
            }
            return;
        }

        // The world changed under the plan.
        if ctx.grid.is_blocked(front.x, front.y) {
            if self.state.goal.is_some() {
                self.plan_route(ctx);
            } else {
                self.state.path.clear();
            }
            outcome.replanned = true;
            return;
        }

        let Some(direction) = self.state.position.direction_to(front) else {
            return;
        };

        gate.consume_move(1, ctx.carried_weight(), ctx.weather.kind);
        self.state.position = front;
        self.state.path.pop_front();
        outcome.moved = Some(direction);

        if self.state.path.is_empty() {
            self.goal_reached(outcome);
        }
    }

    /// The plan ran out: emit the event for the task and go idle.
    fn goal_reached(&mut self, outcome: &mut TickOutcome) {
        outcome.event = match (self.state.task, self.state.target) {
            (Task::Pickup, Some(id)) => Some(GoalEvent::Pickup(id)),
            (Task::Deliver, Some(id)) => {
                self.state.delivery_sequence.retain(|&queued| queued != id);
                Some(GoalEvent::Deliver(id))
            }
            _ => None,
        };
        self.state.clear_plan();
    }
}
