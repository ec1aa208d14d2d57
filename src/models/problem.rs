//! Planning problem instance.
//!
//! Canonical, already-validated input to the scheduler: horizon, start
//! node, fleet, graph, hazard series and priority-ordered objectives.

use super::{Fleet, HazardData, Objective};
use crate::graph::Graph;

/// A complete planning problem.
///
/// `graph == None` means the map was absent or malformed; the scheduler
/// then keeps every vehicle at `start_node` for the whole horizon.
#[derive(Debug, Clone)]
pub struct Problem {
    /// Number of ticks every timeline must cover.
    pub horizon: usize,
    /// Node where every vehicle sits at tick 0.
    pub start_node: usize,
    /// Fleet composition.
    pub fleet: Fleet,
    /// Transportation graph. `None` = degraded mode.
    pub graph: Option<Graph>,
    /// Hazard time series.
    pub hazards: HazardData,
    /// Objectives in processing order.
    pub objectives: Vec<Objective>,
}

impl Problem {
    /// Creates a problem with one truck, one drone, start node 1 and no map.
    pub fn new(horizon: usize) -> Self {
        Self {
            horizon,
            start_node: 1,
            fleet: Fleet::default(),
            graph: None,
            hazards: HazardData::new(),
            objectives: Vec::new(),
        }
    }

    /// Sets the start node.
    pub fn with_start_node(mut self, node: usize) -> Self {
        self.start_node = node;
        self
    }

    /// Sets the fleet.
    pub fn with_fleet(mut self, fleet: Fleet) -> Self {
        self.fleet = fleet;
        self
    }

    /// Sets the graph.
    pub fn with_graph(mut self, graph: Graph) -> Self {
        self.graph = Some(graph);
        self
    }

    /// Sets the hazard series.
    pub fn with_hazards(mut self, hazards: HazardData) -> Self {
        self.hazards = hazards;
        self
    }

    /// Sets the objectives (expected in processing order).
    pub fn with_objectives(mut self, objectives: Vec<Objective>) -> Self {
        self.objectives = objectives;
        self
    }

    /// Adds one objective at the end of the processing order.
    pub fn with_objective(mut self, objective: Objective) -> Self {
        self.objectives.push(objective);
        self
    }

    /// Whether the problem runs in degraded (no map) mode.
    pub fn is_degraded(&self) -> bool {
        self.graph.is_none()
    }
}
