//! Solution model.
//!
//! A solution maps every vehicle to a tick-indexed node sequence of length
//! exactly `horizon`. `timeline[t]` is the node the vehicle occupies at tick `t`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Vehicle;

/// One vehicle's finalized timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// The vehicle.
    pub vehicle: Vehicle,
    /// Node occupied at each tick.
    pub timeline: Vec<usize>,
}

impl Route {
    /// Creates a route.
    pub fn new(vehicle: Vehicle, timeline: Vec<usize>) -> Self {
        Self { vehicle, timeline }
    }

    /// Number of ticks at which the node differs from the previous tick.
    pub fn move_count(&self) -> usize {
        self.timeline.windows(2).filter(|w| w[0] != w[1]).count()
    }
}

/// A complete plan: one route per vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Solution {
    /// Horizon length `T`.
    pub horizon: usize,
    /// Routes in fleet order (trucks, then drones).
    pub routes: Vec<Route>,
}

impl Solution {
    /// Creates an empty solution for a horizon.
    pub fn new(horizon: usize) -> Self {
        Self {
            horizon,
            routes: Vec::new(),
        }
    }

    /// Adds a route.
    pub fn add_route(&mut self, route: Route) {
        self.routes.push(route);
    }

    /// Finds the route of a vehicle by name.
    pub fn route(&self, vehicle_name: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.vehicle.name == vehicle_name)
    }

    /// Timeline of a vehicle by name.
    pub fn timeline(&self, vehicle_name: &str) -> Option<&[usize]> {
        self.route(vehicle_name).map(|r| r.timeline.as_slice())
    }

    /// Whether every route has length exactly `horizon`.
    pub fn is_complete(&self) -> bool {
        self.routes.iter().all(|r| r.timeline.len() == self.horizon)
    }

    /// Vehicle name → timeline.
    pub fn to_map(&self) -> BTreeMap<String, Vec<usize>> {
        self.routes
            .iter()
            .map(|r| (r.vehicle.name.clone(), r.timeline.clone()))
            .collect()
    }

    /// Number of routes.
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_solution() -> Solution {
        let mut s = Solution::new(4);
        s.add_route(Route::new(Vehicle::truck(0), vec![1, 1, 2, 2]));
        s.add_route(Route::new(Vehicle::drone(0), vec![1, 3, 1, 3]));
        s
    }

    #[test]
    fn test_route_lookup() {
        let s = sample_solution();
        assert_eq!(s.timeline("drone1"), Some(&[1, 3, 1, 3][..]));
        assert!(s.route("truck9").is_none());
        assert_eq!(s.route_count(), 2);
    }

    #[test]
    fn test_move_count() {
        let s = sample_solution();
        assert_eq!(s.route("truck1").unwrap().move_count(), 1);
        assert_eq!(s.route("drone1").unwrap().move_count(), 3);
    }

    #[test]
    fn test_is_complete() {
        let mut s = sample_solution();
        assert!(s.is_complete());
        s.add_route(Route::new(Vehicle::truck(1), vec![1]));
        assert!(!s.is_complete());
    }

    #[test]
    fn test_to_map() {
        let map = sample_solution().to_map();
        assert_eq!(map["truck1"], vec![1, 1, 2, 2]);
        assert_eq!(map.len(), 2);
    }
}
