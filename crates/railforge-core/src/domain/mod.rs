//! Network domain model.
//!
//! - [`Station`]: a named stop with incident connections
//! - [`Connection`]: an undirected, timed edge between two stations
//! - [`Network`]: owns stations and connections, built with [`NetworkBuilder`]
//! - [`Line`]: a contiguous path of connections under a duration budget
//! - [`Solution`]: an ordered set of lines

mod connection;
mod ids;
mod line;
mod network;
mod solution;
mod station;

pub use connection::Connection;
pub use ids::{ConnectionId, LineId, LineIdGenerator, StationId};
pub use line::{DuplicateRun, Line, LineBudget, LineEnd, RevisitPolicy};
pub use network::{Network, NetworkBuilder};
pub use solution::{ScoredSolution, Solution};
pub use station::Station;

#[cfg(test)]
mod tests;
