//! Line type: a contiguous path through the network.

use std::collections::BTreeSet;

use super::{ConnectionId, LineId, Network, StationId};
use crate::error::LineError;

/// Whether a line may traverse a connection it already contains.
///
/// `Allow` lets lines run there and back over the same section, which the
/// cut-duplicate-end and remove-duplicate-section operators later repair.
/// `Forbid` rejects such extensions with [`LineError::Revisit`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RevisitPolicy {
    #[default]
    Allow,
    Forbid,
}

/// Limits every line mutation is checked against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineBudget {
    /// Maximum cumulative duration of one line, in minutes.
    pub max_duration: f64,
    pub revisits: RevisitPolicy,
}

impl LineBudget {
    pub fn new(max_duration: f64) -> Self {
        Self {
            max_duration,
            revisits: RevisitPolicy::Allow,
        }
    }

    pub fn with_revisits(mut self, revisits: RevisitPolicy) -> Self {
        self.revisits = revisits;
        self
    }

    #[inline]
    pub fn fits(&self, duration: f64) -> bool {
        duration <= self.max_duration
    }

    /// Minutes left before `duration` reaches the cap.
    pub fn headroom(&self, duration: f64) -> f64 {
        self.max_duration - duration
    }
}

/// The end of a line a connection was attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnd {
    Front,
    Back,
}

/// A run of identical consecutive connections inside a line.
///
/// `begin` and `end` are inclusive connection indices; the stations
/// bounding the run are `stations[begin]` and `stations[end + 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuplicateRun {
    pub connection: ConnectionId,
    pub count: usize,
    pub begin: usize,
    pub end: usize,
}

/// A contiguous path of connections operated as one route.
///
/// Either empty, or `stations.len() == connections.len() + 1` with
/// `connections[i]` joining `stations[i]` and `stations[i + 1]`. The
/// cumulative duration is kept equal to the in-order sum of the connection
/// durations and only grows through budget-checked operations.
///
/// # Example
///
/// ```
/// use railforge_core::{LineBudget, LineEnd, LineId, Network};
///
/// let mut builder = Network::builder();
/// builder.add_station("a", 52.0, 4.0).unwrap();
/// builder.add_station("b", 52.1, 4.0).unwrap();
/// builder.add_station("c", 52.2, 4.0).unwrap();
/// let ab = builder.add_connection("a", "b", 10.0).unwrap();
/// let bc = builder.add_connection("b", "c", 15.0).unwrap();
/// let network = builder.build();
///
/// let budget = LineBudget::new(30.0);
/// let mut line = railforge_core::Line::new(LineId(0));
/// line.add_connection(&network, ab, &budget).unwrap();
/// assert_eq!(line.add_connection(&network, bc, &budget), Ok(LineEnd::Back));
/// assert_eq!(line.duration(), 25.0);
/// assert!(line.add_connection(&network, ab, &budget).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    id: LineId,
    connections: Vec<ConnectionId>,
    stations: Vec<StationId>,
    durations: Vec<f64>,
    duration: f64,
    penalty: f64,
}

impl Line {
    /// Creates an empty line.
    pub fn new(id: LineId) -> Self {
        Self {
            id,
            connections: Vec::new(),
            stations: Vec::new(),
            durations: Vec::new(),
            duration: 0.0,
            penalty: 0.0,
        }
    }

    /// Creates a line that sits at `station` without any connection yet.
    pub fn starting_at(id: LineId, station: StationId) -> Self {
        let mut line = Self::new(id);
        line.stations.push(station);
        line
    }

    /// Builds a line by adding `connections` one after another.
    pub fn from_connections(
        id: LineId,
        network: &Network,
        connections: &[ConnectionId],
        budget: &LineBudget,
    ) -> Result<Self, LineError> {
        let mut line = Self::new(id);
        for &connection in connections {
            line.add_connection(network, connection, budget)?;
        }
        Ok(line)
    }

    pub fn id(&self) -> LineId {
        self.id
    }

    pub fn set_id(&mut self, id: LineId) {
        self.id = id;
    }

    pub fn connections(&self) -> &[ConnectionId] {
        &self.connections
    }

    pub fn stations(&self) -> &[StationId] {
        &self.stations
    }

    /// Cumulative duration in minutes.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn penalty(&self) -> f64 {
        self.penalty
    }

    pub fn set_penalty(&mut self, penalty: f64) {
        self.penalty = penalty;
    }

    pub fn add_to_penalty(&mut self, value: f64) {
        self.penalty += value;
    }

    /// Number of connections.
    pub fn len(&self) -> usize {
        self.connections.len()
    }

    /// True when the line has no connections.
    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn first_station(&self) -> Option<StationId> {
        self.stations.first().copied()
    }

    pub fn last_station(&self) -> Option<StationId> {
        self.stations.last().copied()
    }

    pub fn first_connection(&self) -> Option<ConnectionId> {
        self.connections.first().copied()
    }

    pub fn last_connection(&self) -> Option<ConnectionId> {
        self.connections.last().copied()
    }

    pub fn contains(&self, connection: ConnectionId) -> bool {
        self.connections.contains(&connection)
    }

    /// The station at each end: `[first, last]`.
    pub fn end_stations(&self) -> Option<[StationId; 2]> {
        Some([self.first_station()?, self.last_station()?])
    }

    /// Connections incident to the first station, with the station each leads to.
    pub fn begin_options(&self, network: &Network) -> Vec<(ConnectionId, StationId)> {
        self.options_at(network, self.first_station())
    }

    /// Connections incident to the last station, with the station each leads to.
    pub fn end_options(&self, network: &Network) -> Vec<(ConnectionId, StationId)> {
        self.options_at(network, self.last_station())
    }

    /// Every connection that touches either end, without duplicates.
    pub fn all_options(&self, network: &Network) -> Vec<ConnectionId> {
        let set: BTreeSet<ConnectionId> = self
            .begin_options(network)
            .into_iter()
            .chain(self.end_options(network))
            .map(|(c, _)| c)
            .collect();
        set.into_iter().collect()
    }

    fn options_at(
        &self,
        network: &Network,
        station: Option<StationId>,
    ) -> Vec<(ConnectionId, StationId)> {
        match station {
            Some(s) => network
                .station(s)
                .connections()
                .iter()
                .map(|(&c, &n)| (c, n))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Checks whether `connection` could be attached and where, without
    /// changing the line. The back is preferred over the front.
    pub fn placement(
        &self,
        network: &Network,
        connection: ConnectionId,
        budget: &LineBudget,
    ) -> Result<LineEnd, LineError> {
        self.check_budget(network.duration(connection), budget)?;
        self.check_revisit(connection, budget)?;

        match (self.first_station(), self.last_station()) {
            (None, _) | (_, None) => Ok(LineEnd::Back),
            (Some(first), Some(last)) => {
                if network.station(last).neighbor(connection).is_some() {
                    Ok(LineEnd::Back)
                } else if network.station(first).neighbor(connection).is_some() {
                    Ok(LineEnd::Front)
                } else {
                    Err(LineError::NotIncident { connection })
                }
            }
        }
    }

    /// Appends or prepends `connection`, whichever end it touches.
    ///
    /// An empty line takes over the connection's section as its first two
    /// stations. On failure the line is left unchanged.
    pub fn add_connection(
        &mut self,
        network: &Network,
        connection: ConnectionId,
        budget: &LineBudget,
    ) -> Result<LineEnd, LineError> {
        let end = self.placement(network, connection, budget)?;
        match end {
            LineEnd::Back => self.attach_back(network, connection)?,
            LineEnd::Front => self.attach_front(network, connection)?,
        }
        Ok(end)
    }

    /// Appends `connection` at the last station only.
    pub fn push_back(
        &mut self,
        network: &Network,
        connection: ConnectionId,
        budget: &LineBudget,
    ) -> Result<(), LineError> {
        self.check_budget(network.duration(connection), budget)?;
        self.check_revisit(connection, budget)?;
        self.attach_back(network, connection)
    }

    /// Prepends `connection` at the first station only.
    pub fn push_front(
        &mut self,
        network: &Network,
        connection: ConnectionId,
        budget: &LineBudget,
    ) -> Result<(), LineError> {
        self.check_budget(network.duration(connection), budget)?;
        self.check_revisit(connection, budget)?;
        self.attach_front(network, connection)
    }

    fn attach_back(&mut self, network: &Network, connection: ConnectionId) -> Result<(), LineError> {
        let duration = network.duration(connection);
        match self.last_station() {
            None => {
                let (a, b) = network.connection(connection).section();
                self.stations.extend([a, b]);
            }
            Some(last) => {
                let next = network
                    .station(last)
                    .neighbor(connection)
                    .ok_or(LineError::NotIncident { connection })?;
                self.stations.push(next);
            }
        }
        self.connections.push(connection);
        self.durations.push(duration);
        self.refresh_duration();
        Ok(())
    }

    fn attach_front(
        &mut self,
        network: &Network,
        connection: ConnectionId,
    ) -> Result<(), LineError> {
        let duration = network.duration(connection);
        match self.first_station() {
            None => {
                let (a, b) = network.connection(connection).section();
                self.stations.extend([a, b]);
            }
            Some(first) => {
                let previous = network
                    .station(first)
                    .neighbor(connection)
                    .ok_or(LineError::NotIncident { connection })?;
                self.stations.insert(0, previous);
            }
        }
        self.connections.insert(0, connection);
        self.durations.insert(0, duration);
        self.refresh_duration();
        Ok(())
    }

    fn check_budget(&self, extra: f64, budget: &LineBudget) -> Result<(), LineError> {
        let duration = self.duration + extra;
        if budget.fits(duration) {
            Ok(())
        } else {
            Err(LineError::BudgetViolation {
                duration,
                max_duration: budget.max_duration,
            })
        }
    }

    fn check_revisit(&self, connection: ConnectionId, budget: &LineBudget) -> Result<(), LineError> {
        if budget.revisits == RevisitPolicy::Forbid && self.contains(connection) {
            return Err(LineError::Revisit { connection });
        }
        Ok(())
    }

    fn refresh_duration(&mut self) {
        self.duration = self.durations.iter().sum();
    }

    /// Removes the first connection and the station before it.
    pub fn pop_front(&mut self) -> Option<ConnectionId> {
        if self.connections.is_empty() {
            return None;
        }
        let connection = self.connections.remove(0);
        self.durations.remove(0);
        self.stations.remove(0);
        self.refresh_duration();
        Some(connection)
    }

    /// Removes the last connection and the station after it.
    pub fn pop_back(&mut self) -> Option<ConnectionId> {
        let connection = self.connections.pop()?;
        self.durations.pop();
        self.stations.pop();
        self.refresh_duration();
        Some(connection)
    }

    /// Splits the line at a station index into `[0, index]` and
    /// `[index, last]`; both halves share that station and keep the id.
    ///
    /// Returns `None` when `index` is not a station position.
    pub fn split_at(&self, station_index: usize) -> Option<(Line, Line)> {
        if station_index >= self.stations.len() {
            return None;
        }
        let head = self.slice(0, station_index);
        let tail = self.slice(station_index, self.stations.len() - 1);
        Some((head, tail))
    }

    /// The sub-line between station indices `from` and `to` (inclusive).
    pub fn segment(&self, from: usize, to: usize) -> Option<Line> {
        if from > to || to >= self.stations.len() {
            return None;
        }
        Some(self.slice(from, to))
    }

    fn slice(&self, from: usize, to: usize) -> Line {
        let mut line = Line {
            id: self.id,
            connections: self.connections[from..to].to_vec(),
            stations: self.stations[from..=to].to_vec(),
            durations: self.durations[from..to].to_vec(),
            duration: 0.0,
            penalty: 0.0,
        };
        line.refresh_duration();
        line
    }

    /// The same path travelled in the opposite direction.
    pub fn reversed(&self) -> Line {
        let mut line = self.clone();
        line.connections.reverse();
        line.stations.reverse();
        line.durations.reverse();
        line.refresh_duration();
        line
    }

    /// Appends `other` to this line; `other` must start where this one ends.
    ///
    /// Station-less lines join as identity. The result keeps this line's id
    /// and carries both penalties.
    pub fn join(&self, other: &Line, budget: &LineBudget) -> Result<Line, LineError> {
        if self.stations.is_empty() {
            let mut line = other.clone();
            line.id = self.id;
            line.penalty += self.penalty;
            return Ok(line);
        }
        if other.stations.is_empty() {
            return Ok(self.clone());
        }
        if self.last_station() != other.first_station() {
            return Err(LineError::Disjoint {
                end: self.last_station(),
                start: other.first_station(),
            });
        }

        let duration: f64 = self.durations.iter().chain(&other.durations).sum();
        if !budget.fits(duration) {
            return Err(LineError::BudgetViolation {
                duration,
                max_duration: budget.max_duration,
            });
        }
        if budget.revisits == RevisitPolicy::Forbid {
            let seen: BTreeSet<ConnectionId> = self.connections.iter().copied().collect();
            let mut tail = BTreeSet::new();
            for &connection in &other.connections {
                if seen.contains(&connection) || !tail.insert(connection) {
                    return Err(LineError::Revisit { connection });
                }
            }
        }

        let mut line = self.clone();
        line.connections.extend_from_slice(&other.connections);
        line.stations.extend_from_slice(&other.stations[1..]);
        line.durations.extend_from_slice(&other.durations);
        line.penalty += other.penalty;
        line.refresh_duration();
        Ok(line)
    }

    /// Run-length scan for identical consecutive connections.
    ///
    /// Only runs of two or more are reported, in order of appearance.
    pub fn duplicate_runs(&self) -> Vec<DuplicateRun> {
        let mut runs = Vec::new();
        let mut index = 0;
        while index < self.connections.len() {
            let connection = self.connections[index];
            let mut end = index;
            while end + 1 < self.connections.len() && self.connections[end + 1] == connection {
                end += 1;
            }
            if end > index {
                runs.push(DuplicateRun {
                    connection,
                    count: end - index + 1,
                    begin: index,
                    end,
                });
            }
            index = end + 1;
        }
        runs
    }

    /// Checks the path invariants against `network`.
    pub fn is_contiguous(&self, network: &Network) -> bool {
        if self.connections.is_empty() {
            return self.stations.len() <= 1;
        }
        if self.stations.len() != self.connections.len() + 1 {
            return false;
        }
        self.connections.iter().enumerate().all(|(i, &c)| {
            network
                .get_connection(c)
                .and_then(|conn| conn.other(self.stations[i]))
                == Some(self.stations[i + 1])
        })
    }
}
