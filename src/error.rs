//! Fatal planning errors.
//!
//! Only conditions that make a timeline impossible to produce are errors.
//! Infeasible objectives and malformed maps are normal planning outcomes
//! and never surface here.

use thiserror::Error;

/// Result alias for fallible planning entry points.
pub type PlanningResult<T> = Result<T, PlanningError>;

/// Errors that abort planning.
#[derive(Error, Debug)]
pub enum PlanningError {
    /// Neither the map nor any hazard series yields a horizon length.
    #[error("could not resolve planning horizon: no horizon field and no non-empty hazard series")]
    UnresolvedHorizon,
    /// An input document does not match the expected schema.
    #[error("invalid input document: {0}")]
    Input(#[source] serde_json::Error),
    /// The solution report could not be serialized.
    #[error("failed to serialize report: {0}")]
    Report(#[source] serde_json::Error),
}
