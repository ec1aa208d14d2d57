//! JSON input schema and solution report.
//!
//! Three documents describe a planning run: the map (adjacency matrix,
//! horizon, fleet counts), the hazard sensors (one series per channel) and
//! the objectives (start node, objective records). Each field accepts a
//! short, fixed list of names, tried in order; the first name that is
//! present with the expected type wins. Mistyped values and unknown fields
//! are ignored, so only text that is not JSON at all is rejected.
//!
//! # Resolution
//!
//! | Value | Source, in order |
//! |-------|------------------|
//! | Horizon | map field, then the *longest* non-empty hazard series, else error |
//! | Start node | objectives field, else 1 |
//! | Fleet counts | map fields, objectives fields, map `vehicles` object, else 1 |
//! | Objectives | first array among `objectives`, `tasks`, `missions`, `targets` |
//!
//! The horizon fallback takes the longest series, not the first non-empty
//! one in document order.
//!
//! A missing or malformed matrix is not an error: the problem is built
//! without a graph and planning runs in degraded mode.
//!
//! # Example
//!
//! ```
//! use u_fleet::config::PlannerConfig;
//! use u_fleet::io::plan_from_json;
//!
//! let map = r#"{"map": [[-1, 0], [0, -1]], "T": 3, "num_trucks": 0, "num_drones": 1}"#;
//! let sensors = r#"{"wind": [0, 0, 0]}"#;
//! let objectives = r#"{"start_node": 1, "objectives": [
//!     {"id": 1, "node": 2, "release": 0, "deadline": 2, "points": 5}
//! ]}"#;
//!
//! let report = plan_from_json(map, sensors, objectives, &PlannerConfig::default()).unwrap();
//! assert_eq!(report.routes["drone1"], vec![1, 2, 2]);
//! assert!((report.score - 4.0).abs() < 1e-10);
//! ```

pub(crate) mod fields;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::warn;

use self::fields::{first_array, first_count};
use crate::config::PlannerConfig;
use crate::dispatching::{normalize_objectives, ObjectiveRecord};
use crate::error::{PlanningError, PlanningResult};
use crate::graph::Graph;
use crate::models::{Fleet, HazardData, ObjectiveId, Problem, Solution};
use crate::scheduler::{GreedyScheduler, SolutionScore};

const HORIZON_KEYS: &[&str] = &["horizon", "T", "T_max", "t_max", "time_steps", "num_time_steps"];
const START_KEYS: &[&str] = &["start_node", "start", "source", "startNode"];
const TRUCK_KEYS: &[&str] = &["num_trucks", "truck_count", "n_trucks", "trucks"];
const DRONE_KEYS: &[&str] = &["num_drones", "drone_count", "n_drones", "drones"];
const OBJECTIVE_LIST_KEYS: &[&str] = &["objectives", "tasks", "missions", "targets"];

/// Optional truck and drone counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FleetCounts {
    /// Number of trucks.
    pub num_trucks: Option<usize>,
    /// Number of drones.
    pub num_drones: Option<usize>,
}

impl FleetCounts {
    /// Reads counts from the fields of a JSON object.
    pub fn from_value(value: &Value) -> Self {
        Self {
            num_trucks: first_count(value, TRUCK_KEYS),
            num_drones: first_count(value, DRONE_KEYS),
        }
    }
}

/// The map document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct MapInput {
    /// Adjacency matrix of edge types, kept raw until graph construction.
    pub map: Option<Value>,
    /// Planning horizon `T`.
    pub horizon: Option<usize>,
    /// Top-level fleet counts.
    pub counts: FleetCounts,
    /// Counts of the nested `vehicles` object, if it is an object.
    pub vehicles: Option<FleetCounts>,
}

impl From<Value> for MapInput {
    fn from(mut value: Value) -> Self {
        let map = value.get_mut("map").map(Value::take);
        Self {
            horizon: first_count(&value, HORIZON_KEYS),
            counts: FleetCounts::from_value(&value),
            vehicles: value
                .get("vehicles")
                .filter(|v| v.is_object())
                .map(FleetCounts::from_value),
            map,
        }
    }
}

/// The hazard sensor document: channel name to samples.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct SensorInput {
    channels: BTreeMap<String, Vec<f64>>,
}

impl From<Value> for SensorInput {
    /// Keeps array-valued channels; non-numeric samples become NaN.
    fn from(value: Value) -> Self {
        let Value::Object(object) = value else {
            warn!("sensor document is not an object, no hazard series loaded");
            return Self::default();
        };
        let channels = object
            .into_iter()
            .filter_map(|(name, v)| match v {
                Value::Array(samples) => Some((
                    name,
                    samples
                        .iter()
                        .map(|s| s.as_f64().unwrap_or(f64::NAN))
                        .collect(),
                )),
                _ => None,
            })
            .collect();
        Self { channels }
    }
}

impl SensorInput {
    /// Converts to hazard series.
    pub fn into_hazards(self) -> HazardData {
        let mut hazards = HazardData::new();
        for (name, series) in self.channels {
            hazards.insert(name, series);
        }
        hazards
    }
}

/// The objectives document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct ObjectivesInput {
    /// Node every vehicle starts at.
    pub start_node: Option<usize>,
    /// Fleet counts, used when the map has none.
    pub counts: FleetCounts,
    /// Objective records, in document order. Entries that are not objects
    /// are skipped; a missing id falls back to the entry's position.
    pub objectives: Vec<ObjectiveRecord>,
}

impl From<Value> for ObjectivesInput {
    fn from(value: Value) -> Self {
        let objectives = first_array(&value, OBJECTIVE_LIST_KEYS)
            .map(|entries| {
                entries
                    .iter()
                    .enumerate()
                    .filter_map(|(position, entry)| {
                        let mut record = ObjectiveRecord::from_value(entry)?;
                        record.id.get_or_insert(ObjectiveId::from(position));
                        Some(record)
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            start_node: first_count(&value, START_KEYS),
            counts: FleetCounts::from_value(&value),
            objectives,
        }
    }
}

/// The three parsed input documents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProblemInput {
    /// Map document.
    pub map: MapInput,
    /// Sensor document.
    pub sensors: SensorInput,
    /// Objectives document.
    pub objectives: ObjectivesInput,
}

impl ProblemInput {
    /// Parses the three documents.
    pub fn from_json_strs(map: &str, sensors: &str, objectives: &str) -> PlanningResult<Self> {
        Ok(Self {
            map: serde_json::from_str(map).map_err(PlanningError::Input)?,
            sensors: serde_json::from_str(sensors).map_err(PlanningError::Input)?,
            objectives: serde_json::from_str(objectives).map_err(PlanningError::Input)?,
        })
    }

    /// Resolves defaults and builds the planning problem.
    ///
    /// # Errors
    /// [`PlanningError::UnresolvedHorizon`] when the map has no horizon and
    /// every hazard series is empty.
    pub fn into_problem(self) -> PlanningResult<Problem> {
        let Self {
            map,
            sensors,
            objectives,
        } = self;

        let hazards = sensors.into_hazards();
        let horizon = match map.horizon {
            Some(t) => t,
            None => match hazards.longest_len() {
                0 => return Err(PlanningError::UnresolvedHorizon),
                t => t,
            },
        };

        let nested = map.vehicles.unwrap_or_default();
        let fleet = Fleet::new(
            map.counts
                .num_trucks
                .or(objectives.counts.num_trucks)
                .or(nested.num_trucks)
                .unwrap_or(1),
            map.counts
                .num_drones
                .or(objectives.counts.num_drones)
                .or(nested.num_drones)
                .unwrap_or(1),
        );

        let mut problem = Problem::new(horizon)
            .with_start_node(objectives.start_node.unwrap_or(1))
            .with_fleet(fleet)
            .with_hazards(hazards)
            .with_objectives(normalize_objectives(objectives.objectives));

        match map.map.as_ref().map(Graph::from_json) {
            Some(Ok(graph)) => problem = problem.with_graph(graph),
            Some(Err(e)) => warn!(error = %e, "map rejected, planning in degraded mode"),
            None => warn!("map absent, planning in degraded mode"),
        }

        Ok(problem)
    }
}

/// Final output of a planning run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolutionReport {
    /// Total score (rewards minus travel cost).
    pub score: f64,
    /// Total number of moves.
    pub travel_cost: usize,
    /// Reward per objective id.
    pub objective_scores: BTreeMap<String, f64>,
    /// Timeline per vehicle name.
    pub routes: BTreeMap<String, Vec<usize>>,
}

impl SolutionReport {
    /// Builds the report of a scored solution.
    pub fn new(solution: &Solution, score: &SolutionScore) -> Self {
        Self {
            score: score.total_score,
            travel_cost: score.travel_cost,
            objective_scores: score
                .objective_scores
                .iter()
                .map(|(id, s)| (id.to_string(), *s))
                .collect(),
            routes: solution.to_map(),
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json_pretty(&self) -> PlanningResult<String> {
        serde_json::to_string_pretty(self).map_err(PlanningError::Report)
    }
}

/// Parses, plans and scores in one call.
pub fn plan_from_json(
    map: &str,
    sensors: &str,
    objectives: &str,
    config: &PlannerConfig,
) -> PlanningResult<SolutionReport> {
    let problem = ProblemInput::from_json_strs(map, sensors, objectives)?.into_problem()?;
    let plan = GreedyScheduler::new(config.clone()).plan(&problem);
    let score =
        SolutionScore::calculate_with(&plan.solution, &problem.objectives, config.node_matching);
    Ok(SolutionReport::new(&plan.solution, &score))
}
