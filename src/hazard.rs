//! Hazard gating for vehicle movement.
//!
//! Hazards do not change the graph; they decide, per tick and vehicle
//! kind, whether any edge traversal may start at that tick at all.
//!
//! # Rules
//!
//! | Kind | Hard block when |
//! |------|-----------------|
//! | Truck | `shock > 10` **and** `rainfall > 30` |
//! | Drone | `wind > 60` |
//!
//! A missing channel, or a tick past the end of a series, never blocks.
//!
//! # Departure-tick model
//! The gate is evaluated once at the departure tick and applied to every
//! edge of the planned path. Hazard changes while in transit are not
//! modeled.

use serde::{Deserialize, Serialize};

use crate::graph::{EdgeCost, EdgeType};
use crate::models::{HazardData, VehicleKind};

/// A single channel threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HazardThreshold {
    /// Primary channel name.
    pub channel: String,
    /// Alternative channel names, tried in order after `channel`.
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Samples strictly above this value trip the threshold.
    pub limit: f64,
}

impl HazardThreshold {
    /// Creates a threshold on `channel`.
    pub fn new(channel: impl Into<String>, limit: f64) -> Self {
        Self {
            channel: channel.into(),
            aliases: Vec::new(),
            limit,
        }
    }

    /// Adds an alternative channel name.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Sample at `tick` from the first matching channel name.
    pub fn value(&self, hazards: &HazardData, tick: usize) -> Option<f64> {
        std::iter::once(&self.channel)
            .chain(self.aliases.iter())
            .find_map(|name| hazards.sample(name, tick))
    }

    /// Whether the sample at `tick` exceeds the limit.
    pub fn exceeded(&self, hazards: &HazardData, tick: usize) -> bool {
        self.value(hazards, tick).is_some_and(|v| v > self.limit)
    }
}

/// Per-kind go/no-go policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HazardPolicy {
    /// Seismic shock threshold (trucks, combined with rainfall).
    pub shock: HazardThreshold,
    /// Rainfall threshold (trucks, combined with shock).
    pub rainfall: HazardThreshold,
    /// Wind threshold (drones).
    pub wind: HazardThreshold,
}

impl HazardPolicy {
    /// Whether all movement of `kind` is blocked at `tick`.
    pub fn is_blocked(&self, kind: VehicleKind, hazards: &HazardData, tick: usize) -> bool {
        match kind {
            VehicleKind::Truck => {
                self.shock.exceeded(hazards, tick) && self.rainfall.exceeded(hazards, tick)
            }
            VehicleKind::Drone => self.wind.exceeded(hazards, tick),
        }
    }

    /// Edge cost function for paths departing at `tick`.
    ///
    /// Unit cost per edge, or infinite for every edge when blocked.
    pub fn edge_cost(
        &self,
        kind: VehicleKind,
        hazards: &HazardData,
        tick: usize,
    ) -> impl Fn(usize, usize, EdgeType) -> EdgeCost {
        let cost = if self.is_blocked(kind, hazards, tick) {
            EdgeCost::INFINITY
        } else {
            1.0
        };
        move |_, _, _| cost
    }
}

impl Default for HazardPolicy {
    fn default() -> Self {
        Self {
            shock: HazardThreshold::new("shock", 10.0).with_alias("seismic"),
            rainfall: HazardThreshold::new("rainfall", 30.0).with_alias("rain"),
            wind: HazardThreshold::new("wind", 60.0).with_alias("wind_speed"),
        }
    }
}
