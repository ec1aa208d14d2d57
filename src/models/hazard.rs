//! Hazard sensor time series.
//!
//! Each channel (shock, rainfall, wind, visibility, ...) holds one scalar per
//! tick. Series may be shorter than the horizon; ticks past the end have no
//! sample.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Named hazard time series, keyed by channel name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HazardData {
    series: BTreeMap<String, Vec<f64>>,
}

impl HazardData {
    /// Creates an empty set of series.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a channel.
    pub fn with_series(mut self, channel: impl Into<String>, samples: Vec<f64>) -> Self {
        self.insert(channel, samples);
        self
    }

    /// Adds (or replaces) a channel.
    pub fn insert(&mut self, channel: impl Into<String>, samples: Vec<f64>) {
        self.series.insert(channel.into(), samples);
    }

    /// Sample of `channel` at `tick`, if the channel exists and covers the tick.
    pub fn sample(&self, channel: &str, tick: usize) -> Option<f64> {
        self.series.get(channel).and_then(|s| s.get(tick)).copied()
    }

    /// Full series of a channel.
    pub fn series(&self, channel: &str) -> Option<&[f64]> {
        self.series.get(channel).map(Vec::as_slice)
    }

    /// Channel names in sorted order.
    pub fn channels(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    /// Length of the longest series (0 if none).
    pub fn longest_len(&self) -> usize {
        self.series.values().map(Vec::len).max().unwrap_or(0)
    }

    /// Whether no channel is present.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
