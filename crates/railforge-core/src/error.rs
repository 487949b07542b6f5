//! Error types for RailForge

use thiserror::Error;

use crate::domain::{ConnectionId, StationId};

/// Main error type for RailForge operations
#[derive(Debug, Error)]
pub enum RailForgeError {
    /// Malformed input entity while building the network
    #[error("Construction error: {0}")]
    Construction(#[from] ConstructionError),

    /// Run parameters rejected before any search started
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for RailForge operations
pub type Result<T> = std::result::Result<T, RailForgeError>;

/// Fatal error raised while building a [`Network`](crate::Network).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConstructionError {
    #[error("station `{0}` is defined more than once")]
    DuplicateStation(String),

    #[error("unknown station `{0}`")]
    UnknownStation(String),

    #[error("connection from `{0}` to itself")]
    SelfLoop(String),

    #[error("invalid duration {duration} between `{start}` and `{end}`: must be a finite number above zero")]
    InvalidDuration {
        start: String,
        end: String,
        duration: f64,
    },

    #[error("invalid coordinate for `{name}`: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate {
        name: String,
        latitude: f64,
        longitude: f64,
    },
}

/// Recoverable failure of a [`Line`](crate::Line) mutation.
///
/// A failed mutation leaves the line unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LineError {
    #[error("duration {duration} would exceed the budget of {max_duration}")]
    BudgetViolation { duration: f64, max_duration: f64 },

    #[error("connection {connection} does not touch either end of the line")]
    NotIncident { connection: ConnectionId },

    #[error("connection {connection} is already part of the line")]
    Revisit { connection: ConnectionId },

    #[error("segments do not meet: line ends at {end:?}, next segment starts at {start:?}")]
    Disjoint {
        end: Option<StationId>,
        start: Option<StationId>,
    },
}

impl LineError {
    /// Returns true if the failure is a budget overflow.
    pub fn is_budget_violation(&self) -> bool {
        matches!(self, LineError::BudgetViolation { .. })
    }
}
