//! Planner configuration.

use serde::{Deserialize, Serialize};

use crate::hazard::HazardPolicy;

/// How the scorer matches vehicle positions against an objective's node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeMatching {
    /// Only the nominal node counts.
    Exact,
    /// The nominal node and its two neighboring ids (`node ± 1`) count.
    ///
    /// Compatibility fallback for upstream producers that mix 0- and
    /// 1-based node ids.
    #[default]
    Tolerant,
}

impl NodeMatching {
    /// Candidate node ids for a target, nominal first.
    pub fn candidates(self, node: usize) -> Vec<usize> {
        match self {
            Self::Exact => vec![node],
            Self::Tolerant => {
                let mut nodes = vec![node, node + 1];
                if node > 0 {
                    nodes.push(node - 1);
                }
                nodes
            }
        }
    }
}

/// Planner settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Hazard go/no-go thresholds.
    pub hazards: HazardPolicy,
    /// Evaluate the vehicles of one objective on the rayon thread pool.
    pub parallel: bool,
    /// Objective node matching used by the scorer.
    pub node_matching: NodeMatching,
}

impl PlannerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the hazard policy.
    pub fn with_hazards(mut self, hazards: HazardPolicy) -> Self {
        self.hazards = hazards;
        self
    }

    /// Enables or disables parallel candidate evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the scorer's node matching.
    pub fn with_node_matching(mut self, node_matching: NodeMatching) -> Self {
        self.node_matching = node_matching;
        self
    }
}
