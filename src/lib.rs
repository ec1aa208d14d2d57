//! Hazard-aware multi-vehicle delivery planning.
//!
//! Plans time-expanded routes for a mixed fleet of trucks and drones over a
//! typed transportation graph. Each objective asks for a vehicle to be at a
//! node inside a time window; the planner greedily assigns objectives in
//! deadline order, honoring per-tick hazard go/no-go rules, and reports a
//! tick-by-tick node timeline for every vehicle together with its score.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Vehicle`, `Fleet`, `Objective`, `HazardData`,
//!   `Problem`, `Solution`
//! - **`graph`**: Typed adjacency graph and shortest-path search
//! - **`hazard`**: Hazard thresholds and the edge cost they induce
//! - **`timeline`**: Tick-by-tick timeline construction
//! - **`dispatching`**: Objective ordering rules and normalization
//! - **`scheduler`**: Greedy planner and solution scoring
//! - **`validation`**: Objective and solution integrity checks
//! - **`io`**: JSON input schema and output report
//! - **`config`**: Planner settings
//! - **`error`**: Fatal planning errors
//!
//! # Time Model
//!
//! Time is discrete. Tick 0 is the start; every move along one edge takes
//! exactly one tick and waiting keeps the vehicle at its node. A solution
//! holds exactly `T` ticks per vehicle.
//!
//! # References
//!
//! - Toth & Vigo (2014), "Vehicle Routing: Problems, Methods, and Applications"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Murray & Chu (2015), "The flying sidekick traveling salesman problem"

pub mod config;
pub mod dispatching;
pub mod error;
pub mod graph;
pub mod hazard;
pub mod io;
pub mod models;
pub mod scheduler;
pub mod timeline;
pub mod validation;
