//! Minimum-cost pathfinding under a live cost function.
//!
//! # Algorithm
//! Dijkstra's label-setting search over a binary min-heap keyed by tentative
//! distance. Edges the vehicle kind may not use, and edges whose cost is
//! infinite (hazard-blocked), are never relaxed. The search stops as soon as
//! the goal is popped with a finalized distance.
//!
//! Hop-count search is the special case [`unit_cost`].
//!
//! # Tie-breaking
//! Among frontier entries of equal cost the lowest node id is settled first,
//! so equal-length alternatives resolve by node id and not by adjacency
//! order. A breadth-first search in adjacency order can return a different
//! path of the same length, and with it a different timeline.
//!
//! # Complexity
//! O((V + E) log V).
//!
//! # Reference
//! Dijkstra (1959), "A note on two problems in connexion with graphs"

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::{can_use_edge, EdgeType, Graph};
use crate::models::VehicleKind;

/// Cost of traversing one edge. `f64::INFINITY` marks a blocked edge.
pub type EdgeCost = f64;

/// Constant cost of 1 per permitted edge.
pub fn unit_cost(_from: usize, _to: usize, _edge_type: EdgeType) -> EdgeCost {
    1.0
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Frontier {
    cost: EdgeCost,
    node: usize,
}

impl Eq for Frontier {}

impl Ord for Frontier {
    // Reversed: BinaryHeap is a max-heap. Lower node id wins ties.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Finds a minimum-cost node path from `start` to `goal` for `kind`.
///
/// `cost_fn(u, v, edge_type)` returns a non-negative cost or
/// `f64::INFINITY`. Negative and NaN costs are treated as blocked.
///
/// Returns `[start]` when `start == goal`, the node sequence
/// `start ..= goal` when reachable, and `None` otherwise.
///
/// # Example
/// ```
/// use u_fleet::graph::{find_path, unit_cost, Graph};
/// use u_fleet::models::VehicleKind;
///
/// let graph = Graph::from_matrix(&[
///     vec![-1, 1, -1],
///     vec![1, -1, 1],
///     vec![-1, 1, -1],
/// ]).unwrap();
///
/// let path = find_path(&graph, 1, 3, VehicleKind::Truck, unit_cost);
/// assert_eq!(path, Some(vec![1, 2, 3]));
/// ```
pub fn find_path<F>(
    graph: &Graph,
    start: usize,
    goal: usize,
    kind: VehicleKind,
    cost_fn: F,
) -> Option<Vec<usize>>
where
    F: Fn(usize, usize, EdgeType) -> EdgeCost,
{
    if start == goal {
        return Some(vec![start]);
    }
    if !graph.contains(start) || !graph.contains(goal) {
        return None;
    }

    let n = graph.node_count();
    let mut dist = vec![EdgeCost::INFINITY; n + 1];
    let mut prev: Vec<Option<usize>> = vec![None; n + 1];
    let mut settled = vec![false; n + 1];
    let mut frontier = BinaryHeap::new();

    dist[start] = 0.0;
    frontier.push(Frontier {
        cost: 0.0,
        node: start,
    });

    while let Some(Frontier { cost, node: u }) = frontier.pop() {
        if settled[u] {
            continue;
        }
        settled[u] = true;

        if u == goal {
            return Some(reconstruct(&prev, start, goal));
        }

        for &(v, edge_type) in graph.neighbors(u) {
            if settled[v] || !can_use_edge(kind, edge_type) {
                continue;
            }
            let step = cost_fn(u, v, edge_type);
            if !step.is_finite() || step < 0.0 {
                continue;
            }
            let candidate = cost + step;
            if candidate < dist[v] {
                dist[v] = candidate;
                prev[v] = Some(u);
                frontier.push(Frontier {
                    cost: candidate,
                    node: v,
                });
            }
        }
    }

    None
}

fn reconstruct(prev: &[Option<usize>], start: usize, goal: usize) -> Vec<usize> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        match prev[current] {
            Some(p) => {
                path.push(p);
                current = p;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 1 -road- 2 -road- 3 -road- 4, plus an air shortcut 1 → 4.
    fn corridor() -> Graph {
        Graph::from_matrix(&[
            vec![-1, 1, -1, 0],
            vec![1, -1, 2, -1],
            vec![-1, 2, -1, 3],
            vec![0, -1, 3, -1],
        ])
        .unwrap()
    }

    #[test]
    fn test_same_node() {
        let graph = corridor();
        assert_eq!(
            find_path(&graph, 2, 2, VehicleKind::Truck, unit_cost),
            Some(vec![2])
        );
    }

    #[test]
    fn test_same_node_even_when_blocked() {
        let graph = corridor();
        let blocked = |_: usize, _: usize, _: EdgeType| f64::INFINITY;
        assert_eq!(
            find_path(&graph, 3, 3, VehicleKind::Drone, blocked),
            Some(vec![3])
        );
    }

    #[test]
    fn test_truck_uses_roads_only() {
        let graph = corridor();
        assert_eq!(
            find_path(&graph, 1, 4, VehicleKind::Truck, unit_cost),
            Some(vec![1, 2, 3, 4])
        );
    }

    #[test]
    fn test_drone_takes_air_shortcut() {
        let graph = corridor();
        assert_eq!(
            find_path(&graph, 1, 4, VehicleKind::Drone, unit_cost),
            Some(vec![1, 4])
        );
    }

    #[test]
    fn test_infinite_cost_blocks_all_movement() {
        let graph = corridor();
        let blocked = |_: usize, _: usize, _: EdgeType| f64::INFINITY;
        assert_eq!(find_path(&graph, 1, 2, VehicleKind::Truck, blocked), None);
    }

    #[test]
    fn test_blocked_edge_forces_detour() {
        let graph = corridor();
        let no_air = |_: usize, _: usize, et: EdgeType| {
            if et.is_air() {
                f64::INFINITY
            } else {
                1.0
            }
        };
        assert_eq!(
            find_path(&graph, 1, 4, VehicleKind::Drone, no_air),
            Some(vec![1, 2, 3, 4])
        );
    }

    #[test]
    fn test_weighted_costs_prefer_cheaper_route() {
        let graph = corridor();
        let expensive_air = |_: usize, _: usize, et: EdgeType| {
            if et.is_air() {
                10.0
            } else {
                1.0
            }
        };
        assert_eq!(
            find_path(&graph, 1, 4, VehicleKind::Drone, expensive_air),
            Some(vec![1, 2, 3, 4])
        );
    }

    #[test]
    fn test_negative_and_nan_costs_are_ignored() {
        let graph = corridor();
        assert_eq!(
            find_path(&graph, 1, 2, VehicleKind::Truck, |_, _, _| -1.0),
            None
        );
        assert_eq!(
            find_path(&graph, 1, 2, VehicleKind::Truck, |_, _, _| f64::NAN),
            None
        );
    }

    #[test]
    fn test_unreachable_goal() {
        // Node 3 is only reachable by air.
        let graph = Graph::from_matrix(&[
            vec![-1, 1, 0],
            vec![1, -1, -1],
            vec![0, -1, -1],
        ])
        .unwrap();
        assert_eq!(find_path(&graph, 1, 3, VehicleKind::Truck, unit_cost), None);
        assert_eq!(
            find_path(&graph, 1, 3, VehicleKind::Drone, unit_cost),
            Some(vec![1, 3])
        );
    }

    #[test]
    fn test_out_of_range_nodes() {
        let graph = corridor();
        assert_eq!(find_path(&graph, 1, 9, VehicleKind::Drone, unit_cost), None);
        assert_eq!(find_path(&graph, 0, 1, VehicleKind::Drone, unit_cost), None);
    }

    #[test]
    fn test_path_has_no_duplicates() {
        let graph = corridor();
        let path = find_path(&graph, 4, 1, VehicleKind::Truck, unit_cost).unwrap();
        let mut seen = std::collections::HashSet::new();
        assert!(path.iter().all(|n| seen.insert(*n)));
        assert_eq!(path.first(), Some(&4));
        assert_eq!(path.last(), Some(&1));
    }
}
