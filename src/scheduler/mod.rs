//! Greedy fleet scheduler and solution scoring.
//!
//! # Algorithm
//!
//! `GreedyScheduler` walks the objectives in deadline-first order and
//! commits each one to the vehicle that can finish it soonest, trying drones
//! before trucks. Paths come from hazard-aware shortest-path search. It is
//! not optimal, but it is fast and fully deterministic.
//!
//! # Scoring
//!
//! `SolutionScore` recomputes reward and travel cost from the finalized
//! timelines alone, independently of the scheduler's bookkeeping.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Toth & Vigo (2014), "Vehicle Routing: Problems, Methods, and Applications"

mod greedy;
mod score;
mod state;

pub use greedy::{AssignmentRecord, GreedyScheduler, Plan};
pub use score::SolutionScore;
pub use state::{Candidate, FleetState, VehicleState};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{NodeMatching, PlannerConfig};
    use crate::dispatching::RuleEngine;
    use crate::graph::Graph;
    use crate::io::SolutionReport;
    use crate::models::{Fleet, HazardData, Objective, Problem};
    use crate::validation::validate_solution;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Edge types drawn with a bias toward "absent"; 6 and 7 are unusable.
    const CELLS: [i64; 10] = [-1, -1, -1, -1, 0, 1, 2, 5, 6, 7];

    fn random_problem(rng: &mut StdRng) -> Problem {
        let n: usize = rng.random_range(2..=7);
        let matrix: Vec<Vec<i64>> = (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| {
                        if i == j {
                            -1
                        } else {
                            CELLS[rng.random_range(0..CELLS.len())]
                        }
                    })
                    .collect()
            })
            .collect();

        let horizon: usize = rng.random_range(1..=15);
        let mut hazards = HazardData::new();
        for channel in ["shock", "rainfall", "wind"] {
            let len = rng.random_range(0..=horizon);
            let series = (0..len).map(|_| rng.random_range(0.0..100.0)).collect();
            hazards.insert(channel, series);
        }

        let mut objectives: Vec<Objective> = (0..rng.random_range(0..8_i64))
            .map(|id| {
                let release = rng.random_range(-2..horizon as i64);
                Objective::new(id, rng.random_range(1..=n))
                    .with_window(release, release + rng.random_range(-1..8))
                    .with_points(rng.random_range(0.0..20.0))
                    .with_late_penalty(rng.random_range(0.0..2.0))
            })
            .collect();
        RuleEngine::deadline_first().sort(&mut objectives);

        Problem::new(horizon)
            .with_start_node(rng.random_range(1..=n))
            .with_fleet(Fleet::new(rng.random_range(0..3), rng.random_range(0..3)))
            .with_graph(Graph::from_matrix(&matrix).unwrap())
            .with_hazards(hazards)
            .with_objectives(objectives)
    }

    #[test]
    fn test_random_plans_are_valid() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let problem = random_problem(&mut rng);
            let plan = GreedyScheduler::default().plan(&problem);

            assert_eq!(plan.solution.route_count(), problem.fleet.size());
            assert!(plan.solution.is_complete());
            assert!(
                validate_solution(&plan.solution, &problem).is_ok(),
                "{:?}",
                validate_solution(&plan.solution, &problem)
            );
        }
    }

    #[test]
    fn test_random_plans_are_deterministic() {
        let mut rng = StdRng::seed_from_u64(11);
        let parallel = GreedyScheduler::new(PlannerConfig::new().with_parallel(true));
        for _ in 0..100 {
            let problem = random_problem(&mut rng);
            let first = GreedyScheduler::default().plan(&problem);
            assert_eq!(first, GreedyScheduler::default().plan(&problem));
            assert_eq!(first, parallel.plan(&problem));
        }
    }

    #[test]
    fn test_score_covers_scheduler_bookkeeping() {
        let mut rng = StdRng::seed_from_u64(23);
        for _ in 0..200 {
            let problem = random_problem(&mut rng);
            let plan = GreedyScheduler::default().plan(&problem);
            let score = SolutionScore::calculate_with(
                &plan.solution,
                &problem.objectives,
                NodeMatching::Exact,
            );

            let moves: usize = plan.solution.routes.iter().map(|r| r.move_count()).sum();
            assert_eq!(score.travel_cost, moves);
            assert!(score.total_reward() + 1e-9 >= plan.expected_score(&problem.objectives));
            assert!(score.objective_scores.values().all(|&s| s >= 0.0));
        }
    }

    #[test]
    fn test_report_survives_json() {
        let mut rng = StdRng::seed_from_u64(31);
        for _ in 0..20 {
            let problem = random_problem(&mut rng);
            let plan = GreedyScheduler::default().plan(&problem);
            let score = SolutionScore::calculate(&plan.solution, &problem.objectives);
            let report = SolutionReport::new(&plan.solution, &score);

            let json = report.to_json_pretty().unwrap();
            let back: SolutionReport = serde_json::from_str(&json).unwrap();
            assert_eq!(back.routes, report.routes);
            assert_eq!(back.travel_cost, report.travel_cost);
            assert!((back.score - report.score).abs() < 1e-9);
        }
    }
}
