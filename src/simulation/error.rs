//! Error types for building and running a simulation.

use thiserror::Error;

/// Errors that can occur while building or running a scenario.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// The integrated trajectory did not conserve energy well enough.
    #[error("maximum energy drift of {tolerance} exceeded (measured drift {drift})")]
    EnergyDriftExceeded { drift: f64, tolerance: f64 },

    /// A parameter that must be positive and finite was not.
    #[error("parameter `{name}` must be positive and finite, got {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// An initial state component was not finite.
    #[error("initial state `{name}` must be finite, got {value}")]
    InvalidState { name: &'static str, value: f64 },

    #[error("trail must have at least one segment")]
    InvalidTrailSegments,
}
