//! Error types for problem construction and search setup.

use thiserror::Error;

/// Errors raised while building a problem, validating solutions or
/// configuring a search run. All of them are fatal: a run aborts before
/// its first iteration when one is encountered.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("unknown node identifier: {0}")]
    UnknownNode(String),

    #[error("duplicate node identifier: {0}")]
    DuplicateNode(String),

    #[error("{name} capacity must be positive, got {value}")]
    InvalidCapacity { name: &'static str, value: f64 },

    #[error("time window of {id} is inverted: [{earliest}, {latest}]")]
    InvalidTimeWindow {
        id: String,
        earliest: f64,
        latest: f64,
    },

    #[error("coordinates of {id} must be finite, got ({x}, {y})")]
    InvalidCoordinate { id: String, x: f64, y: f64 },

    #[error("customer {0} must have a positive demand")]
    InvalidDemand(String),

    #[error("invalid route {route:?}: {reason}")]
    InvalidRoute { route: Vec<String>, reason: String },

    #[error("unknown neighborhood operator: {0}")]
    UnknownOperator(String),

    #[error("the operator set must not be empty")]
    EmptyOperatorSet,

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConfigurationError>;
