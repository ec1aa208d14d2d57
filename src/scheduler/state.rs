//! Explicit planning state.
//!
//! One [`FleetState`] is owned by a single planning run. It is mutated only
//! by [`FleetState::commit`], once per satisfied objective, in objective order.

use std::collections::HashSet;

use crate::models::{Fleet, ObjectiveId, Route, Solution, Vehicle, VehicleKind};
use crate::timeline::fit_to_horizon;

/// Position and history of one vehicle during planning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleState {
    /// The vehicle.
    pub vehicle: Vehicle,
    /// Nodes occupied at ticks `0..=current_tick` (clipped to the horizon).
    pub timeline: Vec<usize>,
    /// Tick at which the vehicle becomes free.
    pub current_tick: usize,
    /// Node the vehicle occupies at `current_tick`.
    pub current_node: usize,
}

impl VehicleState {
    /// A vehicle parked at `start_node` at tick 0.
    pub fn new(vehicle: Vehicle, start_node: usize) -> Self {
        Self {
            vehicle,
            timeline: vec![start_node],
            current_tick: 0,
            current_node: start_node,
        }
    }
}

/// A feasible, not yet committed, assignment outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Timeline after serving the objective.
    pub timeline: Vec<usize>,
    /// Tick at which the vehicle is free again.
    pub tick: usize,
    /// Node the vehicle occupies at `tick`.
    pub node: usize,
    /// Tick at which the target node is first reached (before any wait).
    pub arrival_tick: usize,
}

/// Mutable state of one planning run.
#[derive(Debug, Clone)]
pub struct FleetState {
    vehicles: Vec<VehicleState>,
    done: HashSet<ObjectiveId>,
}

impl FleetState {
    /// Every vehicle of `fleet` parked at `start_node`; nothing done yet.
    pub fn new(fleet: &Fleet, start_node: usize) -> Self {
        Self {
            vehicles: fleet
                .vehicles()
                .into_iter()
                .map(|v| VehicleState::new(v, start_node))
                .collect(),
            done: HashSet::new(),
        }
    }

    /// All vehicle states, in fleet order.
    pub fn vehicles(&self) -> &[VehicleState] {
        &self.vehicles
    }

    /// `(slot, state)` pairs for vehicles of `kind`, in index order.
    pub fn of_kind(&self, kind: VehicleKind) -> impl Iterator<Item = (usize, &VehicleState)> {
        self.vehicles
            .iter()
            .enumerate()
            .filter(move |(_, s)| s.vehicle.kind == kind)
    }

    /// Whether an objective has already been satisfied.
    pub fn is_done(&self, id: &ObjectiveId) -> bool {
        self.done.contains(id)
    }

    /// Number of satisfied objectives.
    pub fn done_count(&self) -> usize {
        self.done.len()
    }

    /// Applies a candidate to the vehicle in `slot` and marks `objective` done.
    pub fn commit(&mut self, slot: usize, candidate: Candidate, objective: ObjectiveId) {
        if let Some(state) = self.vehicles.get_mut(slot) {
            state.timeline = candidate.timeline;
            state.current_tick = candidate.tick;
            state.current_node = candidate.node;
            self.done.insert(objective);
        }
    }

    /// Finalizes every timeline to exactly `horizon` ticks.
    pub fn into_solution(self, horizon: usize) -> Solution {
        let mut solution = Solution::new(horizon);
        for state in self.vehicles {
            let timeline = fit_to_horizon(&state.timeline, horizon, state.current_node);
            solution.add_route(Route::new(state.vehicle, timeline));
        }
        solution
    }
}
