//! Objective ordering rules and the objective normalizer.
//!
//! The greedy scheduler processes objectives strictly in the order it is
//! given. This module produces that order: duplicate ids are dropped and
//! the remaining objectives are sorted by composable dispatching rules.
//!
//! # Usage
//!
//! ```
//! use u_fleet::dispatching::{rules, RuleEngine};
//! use u_fleet::models::Objective;
//!
//! let objectives = vec![
//!     Objective::new("late", 2).with_window(0, 9),
//!     Objective::new("early", 3).with_window(0, 4),
//! ];
//! let engine = RuleEngine::new()
//!     .with_rule(rules::Edd)
//!     .with_rule(rules::EarliestRelease);
//!
//! let order = engine.sort_indices(&objectives);
//! assert_eq!(order, vec![1, 0]);
//! ```
//!
//! # References
//!
//! - Jackson (1955), earliest-due-date sequencing
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod engine;
mod normalize;
pub mod rules;

pub use engine::RuleEngine;
pub use normalize::{normalize_objectives, ObjectiveRecord};

use crate::models::Objective;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = processed earlier.
pub type RuleScore = f64;

/// A dispatching rule that evaluates objective priority.
///
/// # Score Convention
/// **Lower score = higher priority.**
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "EDD").
    fn name(&self) -> &'static str;

    /// Evaluates the priority of an objective. Lower = earlier.
    fn evaluate(&self, objective: &Objective) -> RuleScore;
}
