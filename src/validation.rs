//! Input and output validation for fleet planning.
//!
//! Objective checks run before planning and only report: the planner logs
//! the findings and proceeds, since a bad objective simply stays unsatisfied.
//! Solution checks verify the structural guarantees every plan must meet.
//!
//! Objective checks:
//! - Duplicate objective ids
//! - Target node outside `[1, N]`
//! - Empty window (`release > deadline`)
//! - Negative points or lateness penalty
//!
//! Solution checks:
//! - Every timeline has exactly `T` entries
//! - Every timeline starts at the start node
//! - Every move follows an edge the vehicle's kind may use

use crate::models::{Objective, Problem, Solution};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two objectives share the same id.
    DuplicateObjectiveId,
    /// An objective targets a node that does not exist.
    NodeOutOfRange,
    /// An objective's window is empty.
    EmptyWindow,
    /// An objective has negative points or penalty.
    NegativeReward,
    /// A timeline does not cover exactly the horizon.
    TimelineLength,
    /// A timeline does not start at the start node.
    StartNodeMismatch,
    /// A move uses a missing or forbidden edge.
    IllegalMove,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

fn into_result(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates an objective list against a graph of `node_count` nodes.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_objectives(objectives: &[Objective], node_count: usize) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for o in objectives {
        if !ids.insert(&o.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateObjectiveId,
                format!("Duplicate objective ID: {}", o.id),
            ));
        }

        if o.node < 1 || o.node > node_count {
            errors.push(ValidationError::new(
                ValidationErrorKind::NodeOutOfRange,
                format!(
                    "Objective '{}' targets node {} outside [1, {}]",
                    o.id, o.node, node_count
                ),
            ));
        }

        if o.release > o.deadline {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyWindow,
                format!(
                    "Objective '{}' has empty window [{}, {}]",
                    o.id, o.release, o.deadline
                ),
            ));
        }

        if o.points < 0.0 || o.late_penalty_per_step < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeReward,
                format!(
                    "Objective '{}' has negative points ({}) or penalty ({})",
                    o.id, o.points, o.late_penalty_per_step
                ),
            ));
        }
    }

    into_result(errors)
}

/// Validates a finalized solution against its problem.
///
/// Without a graph, only staying in place is a legal move.
pub fn validate_solution(solution: &Solution, problem: &Problem) -> ValidationResult {
    let mut errors = Vec::new();

    for route in &solution.routes {
        let name = &route.vehicle.name;
        let timeline = &route.timeline;

        if timeline.len() != problem.horizon {
            errors.push(ValidationError::new(
                ValidationErrorKind::TimelineLength,
                format!(
                    "Route '{}' has {} ticks, expected {}",
                    name,
                    timeline.len(),
                    problem.horizon
                ),
            ));
        }

        if let Some(&first) = timeline.first() {
            if first != problem.start_node {
                errors.push(ValidationError::new(
                    ValidationErrorKind::StartNodeMismatch,
                    format!(
                        "Route '{}' starts at node {}, expected {}",
                        name, first, problem.start_node
                    ),
                ));
            }
        }

        for (tick, pair) in timeline.windows(2).enumerate() {
            let (from, to) = (pair[0], pair[1]);
            if from == to {
                continue;
            }
            let legal = problem
                .graph
                .as_ref()
                .is_some_and(|g| g.can_traverse(route.vehicle.kind, from, to));
            if !legal {
                errors.push(ValidationError::new(
                    ValidationErrorKind::IllegalMove,
                    format!(
                        "Route '{}' moves {} -> {} at tick {} without a usable {} edge",
                        name,
                        from,
                        to,
                        tick + 1,
                        route.vehicle.kind
                    ),
                ));
            }
        }
    }

    into_result(errors)
}
