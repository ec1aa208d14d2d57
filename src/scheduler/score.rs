//! Solution scoring.
//!
//! Recomputes, from a finalized solution and the objective list alone, the
//! reward earned per objective, the total travel cost and the net score.
//! No scheduler state is consulted, so scoring doubles as an independent
//! check of the scheduler's output.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Travel cost | Ticks at which a vehicle's node differs from the previous tick |
//! | Objective score | `max(0, points - penalty * (first_arrival - release))` |
//! | Total score | Sum of objective scores minus travel cost |
//!
//! First arrival is the earliest tick in `[max(0, release), min(T-1, deadline)]`
//! at which any vehicle occupies the target node.

use std::collections::{BTreeMap, HashSet};

use tracing::warn;

use crate::config::NodeMatching;
use crate::models::{Objective, ObjectiveId, Solution};

/// Score of a solution.
#[derive(Debug, Clone, PartialEq)]
pub struct SolutionScore {
    /// Sum of objective scores minus travel cost. May be negative.
    pub total_score: f64,
    /// Number of moves over all vehicles.
    pub travel_cost: usize,
    /// Reward earned per objective.
    pub objective_scores: BTreeMap<ObjectiveId, f64>,
}

impl SolutionScore {
    /// Scores a solution with tolerant node matching.
    ///
    /// # Example
    ///
    /// ```
    /// use u_fleet::models::{Objective, Route, Solution, Vehicle};
    /// use u_fleet::scheduler::SolutionScore;
    ///
    /// let mut solution = Solution::new(4);
    /// solution.add_route(Route::new(Vehicle::drone(0), vec![1, 3, 3, 3]));
    /// let objectives = vec![Objective::new(1, 3).with_window(0, 3).with_points(10.0)];
    ///
    /// let score = SolutionScore::calculate(&solution, &objectives);
    /// assert_eq!(score.travel_cost, 1);
    /// assert!((score.total_score - 9.0).abs() < 1e-10);
    /// ```
    pub fn calculate(solution: &Solution, objectives: &[Objective]) -> Self {
        Self::calculate_with(solution, objectives, NodeMatching::default())
    }

    /// Scores a solution with the given node matching.
    pub fn calculate_with(
        solution: &Solution,
        objectives: &[Objective],
        matching: NodeMatching,
    ) -> Self {
        let horizon = solution.horizon;
        let travel_cost: usize = solution.routes.iter().map(|r| r.move_count()).sum();

        let mut occupied: Vec<HashSet<usize>> = vec![HashSet::new(); horizon];
        for route in &solution.routes {
            for (tick, &node) in route.timeline.iter().take(horizon).enumerate() {
                occupied[tick].insert(node);
            }
        }

        let mut objective_scores = BTreeMap::new();
        for objective in objectives {
            let nominal = first_arrival(&occupied, objective, objective.node)
                .map(|t| objective.reward_at(t as i64))
                .unwrap_or(0.0);

            let best = matching
                .candidates(objective.node)
                .into_iter()
                .filter_map(|node| first_arrival(&occupied, objective, node))
                .map(|t| objective.reward_at(t as i64))
                .fold(0.0_f64, f64::max);

            if best > nominal {
                warn!(
                    objective = %objective.id,
                    node = objective.node,
                    score = best,
                    "objective scored only through a neighboring node id"
                );
            }
            objective_scores.insert(objective.id.clone(), best);
        }

        let reward: f64 = objective_scores.values().sum();
        Self {
            total_score: reward - travel_cost as f64,
            travel_cost,
            objective_scores,
        }
    }

    /// Reward earned by one objective (0 if unknown).
    pub fn objective_score(&self, id: &ObjectiveId) -> f64 {
        self.objective_scores.get(id).copied().unwrap_or(0.0)
    }

    /// Sum of objective rewards, before travel cost.
    pub fn total_reward(&self) -> f64 {
        self.objective_scores.values().sum()
    }

    /// Number of objectives with a positive score.
    pub fn rewarded_count(&self) -> usize {
        self.objective_scores.values().filter(|&&s| s > 0.0).count()
    }
}

/// Earliest tick inside the objective's window at which `node` is occupied.
fn first_arrival(
    occupied: &[HashSet<usize>],
    objective: &Objective,
    node: usize,
) -> Option<usize> {
    let horizon = occupied.len() as i64;
    let start = objective.release.max(0);
    let end = objective.deadline.min(horizon - 1);
    if start > end {
        return None;
    }
    (start as usize..=end as usize).find(|&t| occupied[t].contains(&node))
}
