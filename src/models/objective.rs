//! Delivery objective model.
//!
//! An objective asks for any vehicle to be at a target node at some tick
//! inside `[release, deadline]`. Arriving later than `release` discounts the
//! reward by `late_penalty_per_step` per tick, floored at zero.
//!
//! # Time Representation
//! Ticks are signed so that out-of-range windows from upstream producers
//! (negative release, deadline before release) are representable; such
//! windows are simply never satisfied.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Objective identifier: integer or string, as supplied upstream.
///
/// Ordering is total and stable (integers before strings).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ObjectiveId {
    /// Numeric identifier.
    Int(i64),
    /// Textual identifier.
    Text(String),
}

impl fmt::Display for ObjectiveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ObjectiveId {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for ObjectiveId {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<usize> for ObjectiveId {
    fn from(v: usize) -> Self {
        Self::Int(v as i64)
    }
}

impl From<&str> for ObjectiveId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for ObjectiveId {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// A time-windowed delivery objective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Objective {
    /// Unique identifier.
    pub id: ObjectiveId,
    /// Target node (1-based).
    pub node: usize,
    /// Earliest tick at which arrival counts.
    pub release: i64,
    /// Latest tick at which arrival counts.
    pub deadline: i64,
    /// Reward for an on-time arrival.
    pub points: f64,
    /// Reward reduction per tick of arrival after `release`.
    pub late_penalty_per_step: f64,
}

impl Objective {
    /// Creates an objective for `node` with an empty `[0, 0]` window and no reward.
    pub fn new(id: impl Into<ObjectiveId>, node: usize) -> Self {
        Self {
            id: id.into(),
            node,
            release: 0,
            deadline: 0,
            points: 0.0,
            late_penalty_per_step: 0.0,
        }
    }

    /// Sets the `[release, deadline]` window.
    pub fn with_window(mut self, release: i64, deadline: i64) -> Self {
        self.release = release;
        self.deadline = deadline;
        self
    }

    /// Sets the reward.
    pub fn with_points(mut self, points: f64) -> Self {
        self.points = points;
        self
    }

    /// Sets the per-tick lateness penalty.
    pub fn with_late_penalty(mut self, per_step: f64) -> Self {
        self.late_penalty_per_step = per_step;
        self
    }

    /// Whether `tick` lies inside `[release, deadline]`.
    #[inline]
    pub fn window_contains(&self, tick: i64) -> bool {
        tick >= self.release && tick <= self.deadline
    }

    /// Whether the window is non-empty.
    pub fn has_window(&self) -> bool {
        self.release <= self.deadline
    }

    /// Reward earned by arriving at `arrival_tick`.
    ///
    /// `points - late_penalty_per_step * (arrival_tick - release)`, floored at 0.
    /// Arrivals before `release` carry no penalty. Lateness saturates at
    /// `i64::MAX` for extreme windows.
    pub fn reward_at(&self, arrival_tick: i64) -> f64 {
        let lateness = arrival_tick.saturating_sub(self.release).max(0) as f64;
        (self.points - self.late_penalty_per_step * lateness).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_objective_builder() {
        let o = Objective::new(7, 3)
            .with_window(2, 9)
            .with_points(10.0)
            .with_late_penalty(0.5);

        assert_eq!(o.id, ObjectiveId::Int(7));
        assert_eq!(o.node, 3);
        assert_eq!((o.release, o.deadline), (2, 9));
        assert!(o.window_contains(2));
        assert!(o.window_contains(9));
        assert!(!o.window_contains(10));
        assert!(o.has_window());
    }

    #[test]
    fn test_reward_discount() {
        let o = Objective::new("a", 1)
            .with_window(2, 20)
            .with_points(10.0)
            .with_late_penalty(1.5);

        assert!((o.reward_at(2) - 10.0).abs() < 1e-10);
        assert!((o.reward_at(4) - 7.0).abs() < 1e-10);
        // Floors at zero.
        assert!((o.reward_at(20) - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_reward_with_extreme_release() {
        let o = Objective::new(1, 2)
            .with_window(i64::MIN, 2)
            .with_points(5.0)
            .with_late_penalty(1.0);
        assert!((o.reward_at(1) - 0.0).abs() < 1e-10);
        assert!((o.with_late_penalty(0.0).reward_at(i64::MAX) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_id_ordering_and_display() {
        let mut ids = vec![
            ObjectiveId::from("b"),
            ObjectiveId::from(3),
            ObjectiveId::from("a"),
            ObjectiveId::from(1),
        ];
        ids.sort();
        let shown: Vec<String> = ids.iter().map(ToString::to_string).collect();
        assert_eq!(shown, vec!["1", "3", "a", "b"]);
    }

    #[test]
    fn test_id_untagged_serde() {
        let id: ObjectiveId = serde_json::from_str("42").unwrap();
        assert_eq!(id, ObjectiveId::Int(42));
        let id: ObjectiveId = serde_json::from_str("\"obj-1\"").unwrap();
        assert_eq!(id, ObjectiveId::Text("obj-1".into()));
    }
}
