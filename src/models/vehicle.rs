//! Vehicle and fleet models.
//!
//! A fleet is a fixed number of trucks and drones that all start at the
//! same node at tick 0. Vehicles are identified by kind and a 0-based
//! index within that kind; their external names are `truck1`, `drone1`, ...

use serde::{Deserialize, Serialize};
use std::fmt;

/// Vehicle kind. Determines which edge types are traversable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleKind {
    /// Ground vehicle restricted to road edges.
    Truck,
    /// Aerial vehicle; may also use air corridors.
    Drone,
}

impl VehicleKind {
    /// Lowercase name used as the vehicle name prefix.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Truck => "truck",
            Self::Drone => "drone",
        }
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single vehicle of the fleet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vehicle {
    /// External name (`truck1`, `drone2`, ...).
    pub name: String,
    /// Vehicle kind.
    pub kind: VehicleKind,
    /// 0-based index within its kind.
    pub index: usize,
}

impl Vehicle {
    /// Creates the `index`-th vehicle of `kind` (0-based).
    pub fn new(kind: VehicleKind, index: usize) -> Self {
        Self {
            name: format!("{}{}", kind.as_str(), index + 1),
            kind,
            index,
        }
    }

    /// Creates a truck.
    pub fn truck(index: usize) -> Self {
        Self::new(VehicleKind::Truck, index)
    }

    /// Creates a drone.
    pub fn drone(index: usize) -> Self {
        Self::new(VehicleKind::Drone, index)
    }
}

/// Fleet composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fleet {
    /// Number of trucks.
    pub num_trucks: usize,
    /// Number of drones.
    pub num_drones: usize,
}

impl Fleet {
    /// Creates a fleet.
    pub fn new(num_trucks: usize, num_drones: usize) -> Self {
        Self {
            num_trucks,
            num_drones,
        }
    }

    /// Total number of vehicles.
    pub fn size(&self) -> usize {
        self.num_trucks + self.num_drones
    }

    /// All trucks, in index order.
    pub fn trucks(&self) -> impl Iterator<Item = Vehicle> {
        (0..self.num_trucks).map(Vehicle::truck)
    }

    /// All drones, in index order.
    pub fn drones(&self) -> impl Iterator<Item = Vehicle> {
        (0..self.num_drones).map(Vehicle::drone)
    }

    /// All vehicles: trucks first, then drones.
    pub fn vehicles(&self) -> Vec<Vehicle> {
        self.trucks().chain(self.drones()).collect()
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Self::new(1, 1)
    }
}
