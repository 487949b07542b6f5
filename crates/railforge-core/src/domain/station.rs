//! Station type.

use std::collections::BTreeMap;

use super::{ConnectionId, StationId};
use crate::geodesy::GeoPoint;

/// A named stop in the network.
///
/// Keeps its incident connections as a map from connection id to the
/// station at the far end. The map is ordered so that iterating a
/// station's options is deterministic under a fixed seed.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    id: StationId,
    name: String,
    position: GeoPoint,
    connections: BTreeMap<ConnectionId, StationId>,
}

impl Station {
    pub(crate) fn new(id: StationId, name: String, position: GeoPoint) -> Self {
        Self {
            id,
            name,
            position,
            connections: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> StationId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> GeoPoint {
        self.position
    }

    /// Incident connections, each resolved to its neighbouring station.
    pub fn connections(&self) -> &BTreeMap<ConnectionId, StationId> {
        &self.connections
    }

    /// Returns the station reached through `connection`, if it is incident.
    pub fn neighbor(&self, connection: ConnectionId) -> Option<StationId> {
        self.connections.get(&connection).copied()
    }

    pub fn degree(&self) -> usize {
        self.connections.len()
    }

    pub(crate) fn register(&mut self, connection: ConnectionId, other: StationId) {
        self.connections.insert(connection, other);
    }
}
