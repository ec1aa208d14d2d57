//! Objective normalization.
//!
//! Turns loosely specified upstream records into canonical [`Objective`]s:
//! missing fields get zero-scoring defaults, the list is put into
//! deadline-first order and later duplicates of an id are dropped.

use serde_json::Value;
use std::collections::HashSet;

use super::RuleEngine;
use crate::io::fields::{first_int, first_number};
use crate::models::{Objective, ObjectiveId};

const NODE_KEYS: &[&str] = &["node", "target", "target_node", "location"];
const RELEASE_KEYS: &[&str] = &["T_start", "release", "start", "start_time"];
const DEADLINE_KEYS: &[&str] = &["T_end", "deadline", "end", "end_time"];
const POINTS_KEYS: &[&str] = &["P_max", "points", "reward", "max_points"];
const PENALTY_KEYS: &[&str] = &["late_penalty_per_step", "late_penalty"];

/// An objective as supplied upstream. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectiveRecord {
    /// Identifier. Defaults to the record's position.
    pub id: Option<ObjectiveId>,
    /// Target node. Defaults to 1.
    pub node: Option<i64>,
    /// Window start. Defaults to 0.
    pub release: Option<i64>,
    /// Window end. Defaults to 0.
    pub deadline: Option<i64>,
    /// Reward. Defaults to 0.
    pub points: Option<f64>,
    /// Lateness penalty per tick. Defaults to 0.
    pub late_penalty_per_step: Option<f64>,
}

impl ObjectiveRecord {
    /// Reads a record from a JSON object; `None` for anything else.
    ///
    /// Accepted names, tried in order (first well-typed one wins):
    ///
    /// | Field | Names |
    /// |-------|-------|
    /// | `node` | `node`, `target`, `target_node`, `location` |
    /// | `release` | `T_start`, `release`, `start`, `start_time` |
    /// | `deadline` | `T_end`, `deadline`, `end`, `end_time` |
    /// | `points` | `P_max`, `points`, `reward`, `max_points` |
    /// | `late_penalty_per_step` | `late_penalty_per_step`, `late_penalty` |
    ///
    /// Ticks and nodes must be JSON integers; points and penalty may be any
    /// number. A value of another type is ignored, leaving the default.
    pub fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let id = match object.get("id") {
            Some(Value::Number(n)) => n.as_i64().map(ObjectiveId::Int),
            Some(Value::String(s)) => Some(ObjectiveId::Text(s.clone())),
            _ => None,
        };

        Some(Self {
            id,
            node: first_int(value, NODE_KEYS),
            release: first_int(value, RELEASE_KEYS),
            deadline: first_int(value, DEADLINE_KEYS),
            points: first_number(value, POINTS_KEYS),
            late_penalty_per_step: first_number(value, PENALTY_KEYS),
        })
    }

    /// Converts to an objective; `position` is used when the id is missing.
    ///
    /// Negative node ids map to 0, which no vehicle ever occupies.
    pub fn into_objective(self, position: usize) -> Objective {
        let node = self
            .node
            .map(|n| usize::try_from(n).unwrap_or(0))
            .unwrap_or(1);

        Objective::new(self.id.unwrap_or(ObjectiveId::from(position)), node)
            .with_window(self.release.unwrap_or(0), self.deadline.unwrap_or(0))
            .with_points(self.points.unwrap_or(0.0))
            .with_late_penalty(self.late_penalty_per_step.unwrap_or(0.0))
    }
}

/// Produces the canonical objective list.
///
/// Records are ordered by ascending deadline, then ascending release
/// (stable), and only the first objective per id in that order is kept.
pub fn normalize_objectives(records: Vec<ObjectiveRecord>) -> Vec<Objective> {
    let mut objectives: Vec<Objective> = records
        .into_iter()
        .enumerate()
        .map(|(i, r)| r.into_objective(i))
        .collect();

    RuleEngine::deadline_first().sort(&mut objectives);

    let mut seen = HashSet::new();
    objectives.retain(|o| seen.insert(o.id.clone()));
    objectives
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> ObjectiveRecord {
        ObjectiveRecord::from_value(&value).unwrap()
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let o = ObjectiveRecord::default().into_objective(4);
        assert_eq!(o.id, ObjectiveId::Int(4));
        assert_eq!(o.node, 1);
        assert_eq!((o.release, o.deadline), (0, 0));
        assert!((o.points - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_alternative_names() {
        let o = record(json!({
            "id": "drop-1", "target": 4, "T_start": 2, "T_end": 9,
            "P_max": 25, "late_penalty": 0.5
        }))
        .into_objective(0);
        assert_eq!(o.id, ObjectiveId::from("drop-1"));
        assert_eq!(o.node, 4);
        assert_eq!((o.release, o.deadline), (2, 9));
        assert!((o.points - 25.0).abs() < 1e-10);
        assert!((o.late_penalty_per_step - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_start_and_end_names() {
        let o = record(json!({"id": 1, "node": 3, "start": 1, "end": 4})).into_objective(0);
        assert_eq!((o.release, o.deadline), (1, 4));
    }

    #[test]
    fn test_repeated_names_take_first_in_order() {
        let o = record(json!({"target": 2, "node": 3, "deadline": 8, "T_end": 5}))
            .into_objective(0);
        assert_eq!(o.node, 3);
        assert_eq!(o.deadline, 5);
    }

    #[test]
    fn test_mistyped_fields_fall_back() {
        let o = record(json!({"id": 2, "node": "3", "release": 0.0, "deadline": 4}))
            .into_objective(0);
        assert_eq!(o.node, 1);
        assert_eq!((o.release, o.deadline), (0, 4));

        let o = record(json!({"node": "3", "location": 5, "id": [1]})).into_objective(7);
        assert_eq!(o.node, 5);
        assert_eq!(o.id, ObjectiveId::Int(7));
    }

    #[test]
    fn test_non_object_is_not_a_record() {
        assert!(ObjectiveRecord::from_value(&json!("junk")).is_none());
        assert!(ObjectiveRecord::from_value(&json!(3)).is_none());
    }

    #[test]
    fn test_negative_node() {
        let record = ObjectiveRecord {
            node: Some(-3),
            ..Default::default()
        };
        assert_eq!(record.into_objective(0).node, 0);
    }

    #[test]
    fn test_normalize_orders_and_deduplicates() {
        let records: Vec<ObjectiveRecord> = [
            json!({"id": 1, "node": 2, "release": 0, "deadline": 9}),
            json!({"id": 2, "node": 3, "release": 4, "deadline": 5}),
            json!({"id": 3, "node": 4, "release": 1, "deadline": 5}),
            json!({"id": 2, "node": 5, "release": 0, "deadline": 1}),
        ]
        .into_iter()
        .map(record)
        .collect();

        let objectives = normalize_objectives(records);
        let order: Vec<(String, usize)> = objectives
            .iter()
            .map(|o| (o.id.to_string(), o.node))
            .collect();
        // The duplicate id 2 with deadline 1 sorts first and wins.
        assert_eq!(
            order,
            vec![
                ("2".to_string(), 5),
                ("3".to_string(), 4),
                ("1".to_string(), 2)
            ]
        );
    }

    #[test]
    fn test_positional_ids() {
        let objectives = normalize_objectives(vec![
            ObjectiveRecord::default(),
            ObjectiveRecord::default(),
        ]);
        assert_eq!(objectives.len(), 2);
        assert_eq!(objectives[0].id, ObjectiveId::Int(0));
        assert_eq!(objectives[1].id, ObjectiveId::Int(1));
    }
}
