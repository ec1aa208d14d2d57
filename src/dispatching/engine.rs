//! Rule engine for multi-criteria objective ordering.
//!
//! Rules are applied in sequence: a later rule is consulted only when every
//! earlier rule ties within an epsilon. Sorting is stable, so objectives tied
//! on every rule keep their input order.
//!
//! # Reference
//! Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use std::cmp::Ordering;
use std::sync::Arc;

use super::{rules, DispatchingRule};
use crate::models::Objective;

/// A composable rule engine for objective prioritization.
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
    epsilon: f64,
}

impl RuleEngine {
    /// Creates an empty rule engine. With no rules, input order is kept.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            epsilon: 1e-9,
        }
    }

    /// Ascending deadline, then ascending release: the scheduler's
    /// processing order.
    pub fn deadline_first() -> Self {
        Self::new()
            .with_rule(rules::Edd)
            .with_rule(rules::EarliestRelease)
    }

    /// Appends a rule, consulted after every rule added before it.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Returns indices into `objectives`, highest priority first.
    pub fn sort_indices(&self, objectives: &[Objective]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..objectives.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&objectives[a], &objectives[b]));
        indices
    }

    /// Sorts objectives in place, highest priority first.
    pub fn sort(&self, objectives: &mut [Objective]) {
        objectives.sort_by(|a, b| self.compare(a, b));
    }

    fn compare(&self, a: &Objective, b: &Objective) -> Ordering {
        for rule in &self.rules {
            let score_a = rule.evaluate(a);
            let score_b = rule.evaluate(b);

            if (score_a - score_b).abs() > self.epsilon {
                return score_a.partial_cmp(&score_b).unwrap_or(Ordering::Equal);
            }
        }
        Ordering::Equal
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_objective(id: &str, release: i64, deadline: i64) -> Objective {
        Objective::new(id, 1).with_window(release, deadline)
    }

    fn ids(objectives: &[Objective], order: &[usize]) -> Vec<String> {
        order.iter().map(|&i| objectives[i].id.to_string()).collect()
    }

    #[test]
    fn test_edd_ordering() {
        let objectives = vec![
            make_objective("late", 0, 50),
            make_objective("early", 0, 10),
            make_objective("middle", 0, 20),
        ];
        let engine = RuleEngine::new().with_rule(rules::Edd);
        let order = engine.sort_indices(&objectives);
        assert_eq!(ids(&objectives, &order), vec!["early", "middle", "late"]);
    }

    #[test]
    fn test_deadline_first_breaks_ties_by_release() {
        let objectives = vec![
            make_objective("A", 5, 10),
            make_objective("B", 2, 10),
            make_objective("C", 0, 3),
        ];
        let order = RuleEngine::deadline_first().sort_indices(&objectives);
        assert_eq!(ids(&objectives, &order), vec!["C", "B", "A"]);
    }

    #[test]
    fn test_full_ties_keep_input_order() {
        let objectives = vec![make_objective("second", 1, 5), make_objective("first", 1, 5)];
        let order = RuleEngine::deadline_first().sort_indices(&objectives);
        assert_eq!(order, vec![0, 1]);
    }

    #[test]
    fn test_sort_in_place() {
        let mut objectives = vec![make_objective("x", 0, 9), make_objective("y", 0, 1)];
        RuleEngine::deadline_first().sort(&mut objectives);
        assert_eq!(objectives[0].id.to_string(), "y");
        assert_eq!(objectives.len(), 2);
    }

    #[test]
    fn test_debug_lists_rules() {
        let shown = format!("{:?}", RuleEngine::deadline_first());
        assert!(shown.contains("EDD") && shown.contains("ERD"));
    }

    #[test]
    fn test_empty() {
        assert!(RuleEngine::deadline_first().sort_indices(&[]).is_empty());
    }
}
