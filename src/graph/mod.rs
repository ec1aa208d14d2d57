//! Transportation graph model and pathfinding.
//!
//! Converts a raw `N×N` edge-type matrix into a directed neighbor list and
//! answers per-vehicle-kind traversability questions.
//!
//! # Edge Types
//!
//! | Value | Meaning | Truck | Drone |
//! |-------|---------|-------|-------|
//! | `-1` | No edge | - | - |
//! | `0` | Air corridor | no | yes |
//! | `1..=5` | Road class | yes | yes |
//!
//! Nodes are 1-indexed: matrix row `i` describes edges leaving node `i + 1`.
//!
//! # Complexity
//! Construction is O(N²). Neighbor lookup is O(1).

mod path;

pub use path::{find_path, unit_cost, EdgeCost};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::VehicleKind;

/// Classification of a directed edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeType(pub i64);

impl EdgeType {
    /// Sentinel for "no edge".
    pub const ABSENT: EdgeType = EdgeType(-1);
    /// Air-only corridor.
    pub const AIR: EdgeType = EdgeType(0);

    /// Whether this is a road class (`1..=5`).
    #[inline]
    pub fn is_road(self) -> bool {
        (1..=5).contains(&self.0)
    }

    /// Whether this is the air-only corridor.
    #[inline]
    pub fn is_air(self) -> bool {
        self == Self::AIR
    }
}

/// Whether a vehicle of `kind` may traverse an edge of `edge_type`.
///
/// Trucks use road classes `1..=5`; drones use `0..=5`.
pub fn can_use_edge(kind: VehicleKind, edge_type: EdgeType) -> bool {
    match kind {
        VehicleKind::Truck => edge_type.is_road(),
        VehicleKind::Drone => edge_type.is_air() || edge_type.is_road(),
    }
}

/// Reasons a raw matrix cannot be turned into a graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The map value is not a list of lists.
    #[error("map is not a matrix (expected a list of rows)")]
    NotAMatrix,
    /// A row length differs from the number of rows.
    #[error("map row {row} has {actual} cells, expected {expected}")]
    NotSquare {
        /// Offending row (0-based).
        row: usize,
        /// Number of rows in the matrix.
        expected: usize,
        /// Number of cells in the offending row.
        actual: usize,
    },
}

/// Directed transportation graph with typed edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    /// `neighbors[u]` = outgoing `(v, edge_type)` pairs. Index 0 is unused.
    neighbors: Vec<Vec<(usize, EdgeType)>>,
}

impl Graph {
    /// Builds a graph from a typed square matrix.
    ///
    /// Cells equal to `-1` are skipped.
    pub fn from_matrix(matrix: &[Vec<i64>]) -> Result<Self, GraphError> {
        let n = matrix.len();
        let mut neighbors = vec![Vec::new(); n + 1];

        for (i, row) in matrix.iter().enumerate() {
            if row.len() != n {
                return Err(GraphError::NotSquare {
                    row: i,
                    expected: n,
                    actual: row.len(),
                });
            }
            for (j, &cell) in row.iter().enumerate() {
                let edge_type = EdgeType(cell);
                if edge_type != EdgeType::ABSENT {
                    neighbors[i + 1].push((j + 1, edge_type));
                }
            }
        }

        Ok(Self { neighbors })
    }

    /// Builds a graph from an untyped JSON matrix.
    ///
    /// Non-integer cells are skipped the same way as `-1` cells.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, GraphError> {
        let rows = value.as_array().ok_or(GraphError::NotAMatrix)?;
        let n = rows.len();
        let mut neighbors = vec![Vec::new(); n + 1];

        for (i, row) in rows.iter().enumerate() {
            let cells = row.as_array().ok_or(GraphError::NotAMatrix)?;
            if cells.len() != n {
                return Err(GraphError::NotSquare {
                    row: i,
                    expected: n,
                    actual: cells.len(),
                });
            }
            for (j, cell) in cells.iter().enumerate() {
                match cell.as_i64().map(EdgeType) {
                    Some(edge_type) if edge_type != EdgeType::ABSENT => {
                        neighbors[i + 1].push((j + 1, edge_type));
                    }
                    _ => {}
                }
            }
        }

        Ok(Self { neighbors })
    }

    /// Number of nodes `N`.
    pub fn node_count(&self) -> usize {
        self.neighbors.len().saturating_sub(1)
    }

    /// Whether `node` is a valid 1-based id.
    #[inline]
    pub fn contains(&self, node: usize) -> bool {
        node >= 1 && node <= self.node_count()
    }

    /// Outgoing edges of `node` (empty for unknown nodes).
    pub fn neighbors(&self, node: usize) -> &[(usize, EdgeType)] {
        if self.contains(node) {
            &self.neighbors[node]
        } else {
            &[]
        }
    }

    /// Type of the edge `from → to`, if present.
    pub fn edge_type(&self, from: usize, to: usize) -> Option<EdgeType> {
        self.neighbors(from)
            .iter()
            .find(|(v, _)| *v == to)
            .map(|(_, et)| *et)
    }

    /// Whether a vehicle of `kind` may move `from → to` in one tick.
    pub fn can_traverse(&self, kind: VehicleKind, from: usize, to: usize) -> bool {
        self.edge_type(from, to)
            .is_some_and(|et| can_use_edge(kind, et))
    }

    /// Total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.neighbors.iter().map(Vec::len).sum()
    }
}
