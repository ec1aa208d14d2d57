//! Built-in objective dispatching rules.
//!
//! All rules return lower scores for objectives that should be
//! processed first.

use super::{DispatchingRule, RuleScore};
use crate::models::Objective;

/// Earliest Due Date.
///
/// Prioritizes objectives with earlier deadlines.
///
/// # Reference
/// Jackson (1955), optimal for minimizing maximum lateness on a single machine.
#[derive(Debug, Clone, Copy)]
pub struct Edd;

impl DispatchingRule for Edd {
    fn name(&self) -> &'static str {
        "EDD"
    }

    fn evaluate(&self, objective: &Objective) -> RuleScore {
        objective.deadline as f64
    }
}

/// Earliest Release.
///
/// Prioritizes objectives whose window opens first.
#[derive(Debug, Clone, Copy)]
pub struct EarliestRelease;

impl DispatchingRule for EarliestRelease {
    fn name(&self) -> &'static str {
        "ERD"
    }

    fn evaluate(&self, objective: &Objective) -> RuleScore {
        objective.release as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_scores() {
        let o = Objective::new(1, 2).with_window(3, 8).with_points(12.0);
        assert!((Edd.evaluate(&o) - 8.0).abs() < 1e-10);
        assert!((EarliestRelease.evaluate(&o) - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(Edd.name(), "EDD");
        assert_eq!(EarliestRelease.name(), "ERD");
    }
}
