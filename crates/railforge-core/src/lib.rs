//! RailForge Core - network model and scoring for transit line planning
//!
//! This crate provides the fundamental abstractions for RailForge:
//! - Network types: stations, connections and their adjacency
//! - Line type: a contiguous, budget-bounded path through the network
//! - Solution type: an ordered set of lines
//! - Objective function scoring coverage, line count and travel time

pub mod domain;
pub mod error;
pub mod geodesy;
pub mod score;

pub use domain::{
    Connection, ConnectionId, DuplicateRun, Line, LineBudget, LineEnd, LineId, LineIdGenerator,
    Network, NetworkBuilder, RevisitPolicy, ScoredSolution, Solution, Station, StationId,
};
pub use error::{ConstructionError, LineError, RailForgeError, Result};
pub use geodesy::GeoPoint;
pub use score::{LineScore, Objective, ObjectiveWeights};
