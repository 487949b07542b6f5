//! Connection type.

use super::{ConnectionId, StationId};

/// An undirected, timed edge between two distinct stations.
///
/// Durations are in minutes and strictly positive; the
/// [`NetworkBuilder`](super::NetworkBuilder) refuses anything else.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    id: ConnectionId,
    section: (StationId, StationId),
    duration: f64,
}

impl Connection {
    pub(crate) fn new(id: ConnectionId, start: StationId, end: StationId, duration: f64) -> Self {
        Self {
            id,
            section: (start, end),
            duration,
        }
    }

    pub fn id(&self) -> ConnectionId {
        self.id
    }

    /// The endpoint pair in the order it was loaded.
    pub fn section(&self) -> (StationId, StationId) {
        self.section
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn touches(&self, station: StationId) -> bool {
        self.section.0 == station || self.section.1 == station
    }

    /// Returns the endpoint opposite to `station`, or `None` if the
    /// connection does not touch it.
    pub fn other(&self, station: StationId) -> Option<StationId> {
        match self.section {
            (a, b) if a == station => Some(b),
            (a, b) if b == station => Some(a),
            _ => None,
        }
    }
}
