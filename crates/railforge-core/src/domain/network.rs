//! Network of stations and connections.

use std::collections::HashMap;

use super::{Connection, ConnectionId, Station, StationId};
use crate::error::ConstructionError;
use crate::geodesy::GeoPoint;

/// The fixed rail network a run plans lines over.
///
/// Owns every station and connection. Ids are dense indices handed out by
/// the [`NetworkBuilder`] that created the network, so two networks never
/// share a counter.
///
/// # Example
///
/// ```
/// use railforge_core::Network;
///
/// let mut builder = Network::builder();
/// builder.add_station("Alkmaar", 52.637, 4.739).unwrap();
/// builder.add_station("Hoorn", 52.644, 5.060).unwrap();
/// builder.add_connection("Alkmaar", "Hoorn", 24.0).unwrap();
/// let network = builder.build();
///
/// assert_eq!(network.station_count(), 2);
/// assert_eq!(network.total_duration(), 24.0);
/// ```
#[derive(Debug, Clone)]
pub struct Network {
    stations: Vec<Station>,
    connections: Vec<Connection>,
    by_name: HashMap<String, StationId>,
    min_minutes_per_km: f64,
}

impl Network {
    pub fn builder() -> NetworkBuilder {
        NetworkBuilder::new()
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// # Panics
    ///
    /// Panics if `id` was not issued by this network.
    pub fn station(&self, id: StationId) -> &Station {
        &self.stations[id.index()]
    }

    /// # Panics
    ///
    /// Panics if `id` was not issued by this network.
    pub fn connection(&self, id: ConnectionId) -> &Connection {
        &self.connections[id.index()]
    }

    pub fn get_station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(id.index())
    }

    pub fn get_connection(&self, id: ConnectionId) -> Option<&Connection> {
        self.connections.get(id.index())
    }

    pub fn station_by_name(&self, name: &str) -> Option<StationId> {
        self.by_name.get(name).copied()
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    pub fn connection_ids(&self) -> impl Iterator<Item = ConnectionId> + '_ {
        self.connections.iter().map(Connection::id)
    }

    /// Duration of `connection` in minutes.
    #[inline]
    pub fn duration(&self, connection: ConnectionId) -> f64 {
        self.connections[connection.index()].duration()
    }

    /// Sum of all connection durations.
    pub fn total_duration(&self) -> f64 {
        self.connections.iter().map(Connection::duration).sum()
    }

    /// Smallest number of lines that could cover every connection once,
    /// `ceil(total_duration / max_duration)`.
    pub fn min_line_count(&self, max_duration: f64) -> usize {
        if max_duration <= 0.0 || !max_duration.is_finite() {
            return 0;
        }
        (self.total_duration() / max_duration).ceil() as usize
    }

    /// Geodesic distance between two stations in kilometres.
    pub fn distance_km(&self, a: StationId, b: StationId) -> f64 {
        self.station(a)
            .position()
            .distance_km(&self.station(b).position())
    }

    /// Fastest rate any connection achieves, in minutes per kilometre.
    ///
    /// Computed once when the network is built. Connections whose
    /// endpoints share a position are ignored; `0.0` when none remain,
    /// which turns any estimate based on it into a plain lower bound of zero.
    pub fn min_minutes_per_km(&self) -> f64 {
        self.min_minutes_per_km
    }

    fn compute_min_minutes_per_km(stations: &[Station], connections: &[Connection]) -> f64 {
        connections
            .iter()
            .filter_map(|c| {
                let (a, b) = c.section();
                let km = stations[a.index()]
                    .position()
                    .distance_km(&stations[b.index()].position());
                (km > 0.0).then(|| c.duration() / km)
            })
            .min_by(f64::total_cmp)
            .unwrap_or(0.0)
    }
}

/// Incrementally validates and registers stations and connections.
///
/// Every error is a [`ConstructionError`]; invalid entities are never
/// stored.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    stations: Vec<Station>,
    connections: Vec<Connection>,
    by_name: HashMap<String, StationId>,
}

impl NetworkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a station at the given latitude/longitude.
    pub fn add_station(
        &mut self,
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Result<StationId, ConstructionError> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(ConstructionError::DuplicateStation(name));
        }
        let position = GeoPoint::new(latitude, longitude);
        if !position.is_valid() {
            return Err(ConstructionError::InvalidCoordinate {
                name,
                latitude,
                longitude,
            });
        }

        let id = StationId(self.stations.len());
        self.by_name.insert(name.clone(), id);
        self.stations.push(Station::new(id, name, position));
        Ok(id)
    }

    /// Adds a connection between two stations referenced by name.
    pub fn add_connection(
        &mut self,
        start: &str,
        end: &str,
        duration: f64,
    ) -> Result<ConnectionId, ConstructionError> {
        let start_id = self.lookup(start)?;
        let end_id = self.lookup(end)?;
        self.connect(start_id, end_id, duration)
    }

    /// Adds a connection between two stations referenced by id.
    pub fn connect(
        &mut self,
        start: StationId,
        end: StationId,
        duration: f64,
    ) -> Result<ConnectionId, ConstructionError> {
        let start_name = self.name_of(start)?;
        let end_name = self.name_of(end)?;
        if start == end {
            return Err(ConstructionError::SelfLoop(start_name));
        }
        if !duration.is_finite() || duration <= 0.0 {
            return Err(ConstructionError::InvalidDuration {
                start: start_name,
                end: end_name,
                duration,
            });
        }

        let id = ConnectionId(self.connections.len());
        self.connections
            .push(Connection::new(id, start, end, duration));
        self.stations[start.index()].register(id, end);
        self.stations[end.index()].register(id, start);
        Ok(id)
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    pub fn build(self) -> Network {
        let min_minutes_per_km =
            Network::compute_min_minutes_per_km(&self.stations, &self.connections);
        Network {
            stations: self.stations,
            connections: self.connections,
            by_name: self.by_name,
            min_minutes_per_km,
        }
    }

    fn lookup(&self, name: &str) -> Result<StationId, ConstructionError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| ConstructionError::UnknownStation(name.to_string()))
    }

    fn name_of(&self, id: StationId) -> Result<String, ConstructionError> {
        self.stations
            .get(id.index())
            .map(|s| s.name().to_string())
            .ok_or_else(|| ConstructionError::UnknownStation(format!("#{id}")))
    }
}
