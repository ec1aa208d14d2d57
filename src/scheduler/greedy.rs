//! Greedy earliest-deadline-first fleet scheduler.
//!
//! # Algorithm
//!
//! For each objective, in the given (deadline-first) order:
//! 1. Skip it if its id is already done.
//! 2. Evaluate every drone with `try_assign`; keep the feasible outcome
//!    with the smallest finish tick (lowest drone index on ties).
//! 3. If no drone is feasible, do the same over trucks.
//! 4. Commit the winner, or leave the objective unsatisfied.
//!
//! Commitments are final: no backtracking, no re-planning pass.
//!
//! # Complexity
//! O(m * v * (V + E) log V) for m objectives and v vehicles.
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 4: Priority Dispatching

use rayon::prelude::*;
use tracing::{debug, info, warn};

use super::state::{Candidate, FleetState, VehicleState};
use crate::config::PlannerConfig;
use crate::graph::find_path;
use crate::models::{Objective, ObjectiveId, Problem, Solution, Vehicle, VehicleKind};
use crate::timeline::{append_move, append_wait};
use crate::validation::validate_objectives;

/// The scheduler's record of one committed assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentRecord {
    /// Satisfied objective.
    pub objective_id: ObjectiveId,
    /// Vehicle that serves it.
    pub vehicle: Vehicle,
    /// Tick at which the vehicle reaches the target node.
    pub arrival_tick: usize,
    /// Tick at which the vehicle is free again (clamped to the horizon).
    pub finish_tick: usize,
}

/// Result of a planning run.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    /// Finalized per-vehicle timelines.
    pub solution: Solution,
    /// Committed assignments, in commit order.
    pub assignments: Vec<AssignmentRecord>,
}

impl Plan {
    /// Number of satisfied objectives.
    pub fn assigned_count(&self) -> usize {
        self.assignments.len()
    }

    /// Assignment of an objective, if it was satisfied.
    pub fn assignment_for(&self, id: &ObjectiveId) -> Option<&AssignmentRecord> {
        self.assignments.iter().find(|a| &a.objective_id == id)
    }

    /// Reward implied by the scheduler's own bookkeeping.
    ///
    /// Each assigned objective earns its reward at the tick its vehicle is
    /// first inside the window at the target; assignments whose window lies
    /// past the horizon earn nothing.
    pub fn expected_score(&self, objectives: &[Objective]) -> f64 {
        self.assignments
            .iter()
            .filter_map(|a| {
                let objective = objectives.iter().find(|o| o.id == a.objective_id)?;
                let at_target = (a.arrival_tick as i64).max(objective.release);
                (at_target < self.solution.horizon as i64).then(|| objective.reward_at(at_target))
            })
            .sum()
    }
}

/// Greedy multi-vehicle scheduler.
///
/// # Example
///
/// ```
/// use u_fleet::graph::Graph;
/// use u_fleet::models::{Fleet, Objective, Problem};
/// use u_fleet::scheduler::GreedyScheduler;
///
/// let graph = Graph::from_matrix(&[
///     vec![1, 1, 1],
///     vec![1, 1, 1],
///     vec![1, 1, 1],
/// ]).unwrap();
/// let problem = Problem::new(5)
///     .with_fleet(Fleet::new(1, 1))
///     .with_graph(graph)
///     .with_objective(Objective::new(1, 3).with_window(0, 4).with_points(10.0));
///
/// let plan = GreedyScheduler::default().plan(&problem);
/// assert_eq!(plan.solution.timeline("drone1"), Some(&[1, 3, 3, 3, 3][..]));
/// assert_eq!(plan.solution.timeline("truck1"), Some(&[1, 1, 1, 1, 1][..]));
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedyScheduler {
    config: PlannerConfig,
}

impl GreedyScheduler {
    /// Creates a scheduler.
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Planner configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plans the whole problem.
    ///
    /// Objectives are processed in the order given by `problem.objectives`.
    /// Without a graph every vehicle idles at the start node.
    pub fn plan(&self, problem: &Problem) -> Plan {
        let mut state = FleetState::new(&problem.fleet, problem.start_node);

        let Some(graph) = problem.graph.as_ref() else {
            warn!(
                horizon = problem.horizon,
                start_node = problem.start_node,
                "no usable map, all vehicles idle at start node"
            );
            return Plan {
                solution: state.into_solution(problem.horizon),
                assignments: Vec::new(),
            };
        };

        if let Err(errors) = validate_objectives(&problem.objectives, graph.node_count()) {
            for e in &errors {
                warn!(kind = ?e.kind, "{}", e.message);
            }
        }

        let mut assignments = Vec::new();
        for objective in &problem.objectives {
            if state.is_done(&objective.id) {
                continue;
            }

            let best = self
                .best_candidate(problem, &state, VehicleKind::Drone, objective)
                .or_else(|| self.best_candidate(problem, &state, VehicleKind::Truck, objective));

            match best {
                Some((slot, candidate)) => {
                    let vehicle = state.vehicles()[slot].vehicle.clone();
                    debug!(
                        objective = %objective.id,
                        vehicle = %vehicle.name,
                        arrival_tick = candidate.arrival_tick,
                        finish_tick = candidate.tick,
                        "objective assigned"
                    );
                    assignments.push(AssignmentRecord {
                        objective_id: objective.id.clone(),
                        vehicle,
                        arrival_tick: candidate.arrival_tick,
                        finish_tick: candidate.tick,
                    });
                    state.commit(slot, candidate, objective.id.clone());
                }
                None => {
                    debug!(
                        objective = %objective.id,
                        node = objective.node,
                        "objective unsatisfied"
                    );
                }
            }
        }

        info!(
            horizon = problem.horizon,
            vehicles = problem.fleet.size(),
            objectives = problem.objectives.len(),
            assigned = state.done_count(),
            "plan complete"
        );

        Plan {
            solution: state.into_solution(problem.horizon),
            assignments,
        }
    }

    /// Evaluates one vehicle for one objective without mutating anything.
    ///
    /// The path is planned under the hazard regime of the vehicle's current
    /// tick. Returns `None` when the vehicle is already past the horizon,
    /// no path exists, or the window `[release, deadline]` cannot be met.
    pub fn try_assign(
        &self,
        problem: &Problem,
        vehicle: &VehicleState,
        objective: &Objective,
    ) -> Option<Candidate> {
        let graph = problem.graph.as_ref()?;
        let horizon = problem.horizon;
        if vehicle.current_tick >= horizon {
            return None;
        }

        let kind = vehicle.vehicle.kind;
        let cost = self
            .config
            .hazards
            .edge_cost(kind, &problem.hazards, vehicle.current_tick);
        let path = find_path(graph, vehicle.current_node, objective.node, kind, cost)?;

        let arrival = vehicle.current_tick + (path.len() - 1);
        if arrival as i64 > objective.deadline {
            return None;
        }

        let at_target = (arrival as i64).max(objective.release);
        if !objective.window_contains(at_target) {
            return None;
        }
        let wait = (at_target - arrival as i64) as usize;
        let finish = arrival + wait;

        let mut timeline = vehicle.timeline.clone();
        append_move(&mut timeline, &path);
        let room = horizon.saturating_sub(timeline.len());
        append_wait(&mut timeline, objective.node, wait.min(room));

        let tick = if finish >= horizon {
            timeline.truncate(horizon);
            horizon
        } else {
            finish
        };
        let node = timeline.last().copied().unwrap_or(vehicle.current_node);

        Some(Candidate {
            timeline,
            tick,
            node,
            arrival_tick: arrival,
        })
    }

    /// Best feasible `(slot, candidate)` among vehicles of `kind`:
    /// smallest finish tick, then lowest vehicle index.
    fn best_candidate(
        &self,
        problem: &Problem,
        state: &FleetState,
        kind: VehicleKind,
        objective: &Objective,
    ) -> Option<(usize, Candidate)> {
        let pool: Vec<(usize, &VehicleState)> = state.of_kind(kind).collect();
        let evaluate = |&(slot, vehicle): &(usize, &VehicleState)| {
            self.try_assign(problem, vehicle, objective)
                .map(|c| (vehicle.vehicle.index, slot, c))
        };

        let best = if self.config.parallel {
            pool.par_iter()
                .filter_map(evaluate)
                .min_by_key(|(index, _, c)| (c.tick, *index))
        } else {
            pool.iter()
                .filter_map(evaluate)
                .min_by_key(|(index, _, c)| (c.tick, *index))
        };

        best.map(|(_, slot, candidate)| (slot, candidate))
    }
}
