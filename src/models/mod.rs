//! Fleet planning domain models.
//!
//! Provides the core data types for representing a fleet dispatch problem
//! and its solution on a discrete, tick-based time axis.
//!
//! # Domain Mappings
//!
//! | u-fleet | Logistics | Emergency Response |
//! |---------|-----------|--------------------|
//! | Objective | Delivery Order | Relief Drop |
//! | Vehicle | Truck / Drone | Ground Unit / UAV |
//! | HazardData | Weather Feed | Sensor Network |
//! | Solution | Dispatch Plan | Deployment Timeline |

mod hazard;
mod objective;
mod problem;
mod solution;
mod vehicle;

pub use hazard::HazardData;
pub use objective::{Objective, ObjectiveId};
pub use problem::Problem;
pub use solution::{Route, Solution};
pub use vehicle::{Fleet, Vehicle, VehicleKind};
