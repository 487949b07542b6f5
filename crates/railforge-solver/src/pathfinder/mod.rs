//! Bounded best-first path search.
//!
//! Finds the minimum-duration [`Line`] between two stations whose duration
//! stays within a budget. Partial paths are ordered by
//! `f = duration_so_far + estimate`, where the estimate is the geodesic
//! distance to the goal multiplied by the network's fastest rate in minutes
//! per kilometre. No connection is faster than that rate, so the estimate
//! never overshoots and the first path popped at the goal is optimal.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use thiserror::Error;

use railforge_core::{ConnectionId, Line, LineBudget, LineError, LineId, Network, StationId};

/// Slack allowed on `f` before a branch is pruned, absorbing rounding in
/// the distance estimate. The exact budget is still enforced on the line.
const PRUNE_EPSILON: f64 = 1e-9;

/// Failure of a path search.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    #[error("no path from {start} to {goal} within {max_duration} minutes")]
    NoPathWithinBudget {
        start: StationId,
        goal: StationId,
        max_duration: f64,
    },

    #[error(transparent)]
    Line(#[from] LineError),
}

/// A* search over one network.
///
/// Cheap to copy; the per-kilometre rate is read once from the network.
///
/// # Example
///
/// ```
/// use railforge_core::Network;
/// use railforge_solver::pathfinder::PathFinder;
///
/// let mut builder = Network::builder();
/// let a = builder.add_station("a", 52.0, 4.0).unwrap();
/// let b = builder.add_station("b", 52.1, 4.0).unwrap();
/// let c = builder.add_station("c", 52.2, 4.0).unwrap();
/// builder.connect(a, b, 10.0).unwrap();
/// builder.connect(b, c, 10.0).unwrap();
/// builder.connect(a, c, 30.0).unwrap();
/// let network = builder.build();
///
/// let finder = PathFinder::new(&network);
/// let line = finder.find_line(a, c, 60.0).unwrap();
/// assert_eq!(line.stations(), &[a, b, c]);
/// assert!(finder.find_line(a, c, 15.0).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PathFinder<'n> {
    network: &'n Network,
    minutes_per_km: f64,
}

#[derive(Debug)]
struct Node {
    station: StationId,
    via: Option<(ConnectionId, usize)>,
    duration: f64,
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    f: f64,
    seq: u64,
    node: usize,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    // Reversed so the max-heap pops the lowest f, then the oldest entry.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<'n> PathFinder<'n> {
    pub fn new(network: &'n Network) -> Self {
        Self {
            network,
            minutes_per_km: network.min_minutes_per_km(),
        }
    }

    pub fn network(&self) -> &'n Network {
        self.network
    }

    /// Lower bound on the minutes needed to travel from `from` to `to`.
    pub fn estimate(&self, from: StationId, to: StationId) -> f64 {
        self.network.distance_km(from, to) * self.minutes_per_km
    }

    /// Shortest line from `start` to `goal` taking at most `max_duration`.
    ///
    /// When `start == goal` the result is a line without connections.
    pub fn find_line(
        &self,
        start: StationId,
        goal: StationId,
        max_duration: f64,
    ) -> Result<Line, PathError> {
        let mut lines = self.find_lines(start, goal, max_duration, 1)?;
        lines.pop().ok_or(PathError::NoPathWithinBudget {
            start,
            goal,
            max_duration,
        })
    }

    /// Up to `k` lines from `start` to `goal` in order of duration.
    ///
    /// Each station is expanded at most `k` times, so later results may
    /// contain cycles but never an immediate backtrack over the connection
    /// just used. When `start == goal` the empty line comes first, followed
    /// by round trips back to `start`. Fails only when no line at all fits
    /// the budget.
    pub fn find_lines(
        &self,
        start: StationId,
        goal: StationId,
        max_duration: f64,
        k: usize,
    ) -> Result<Vec<Line>, PathError> {
        let no_path = PathError::NoPathWithinBudget {
            start,
            goal,
            max_duration,
        };
        if k == 0
            || max_duration.is_nan()
            || max_duration < 0.0
            || self.estimate(start, goal) > max_duration + PRUNE_EPSILON
        {
            return Err(no_path);
        }

        let mut nodes = vec![Node {
            station: start,
            via: None,
            duration: 0.0,
        }];
        let mut expansions = vec![0usize; self.network.station_count()];
        let mut frontier = BinaryHeap::new();
        let mut seq = 0u64;
        frontier.push(Candidate {
            f: self.estimate(start, goal),
            seq,
            node: 0,
        });

        let mut found = Vec::new();
        while let Some(Candidate { node, .. }) = frontier.pop() {
            let station = nodes[node].station;
            if station == goal {
                found.push(self.reconstruct(&nodes, node, start, max_duration)?);
                if found.len() == k {
                    break;
                }
                // a round trip needs the start expanded once
                if node != 0 {
                    continue;
                }
            }

            let count = &mut expansions[station.index()];
            if *count >= k {
                continue;
            }
            *count += 1;

            let arrived_by = nodes[node].via.map(|(c, _)| c);
            for (&connection, &next) in self.network.station(station).connections() {
                if Some(connection) == arrived_by {
                    continue;
                }
                let duration = nodes[node].duration + self.network.duration(connection);
                if duration > max_duration {
                    continue;
                }
                let f = duration + self.estimate(next, goal);
                if f > max_duration + PRUNE_EPSILON {
                    continue;
                }
                nodes.push(Node {
                    station: next,
                    via: Some((connection, node)),
                    duration,
                });
                seq += 1;
                frontier.push(Candidate {
                    f,
                    seq,
                    node: nodes.len() - 1,
                });
            }
        }

        if found.is_empty() {
            Err(no_path)
        } else {
            Ok(found)
        }
    }

    fn reconstruct(
        &self,
        nodes: &[Node],
        mut node: usize,
        start: StationId,
        max_duration: f64,
    ) -> Result<Line, LineError> {
        let mut connections = Vec::new();
        while let Some((connection, parent)) = nodes[node].via {
            connections.push(connection);
            node = parent;
        }

        let budget = LineBudget::new(max_duration);
        let mut line = Line::starting_at(LineId::default(), start);
        for &connection in connections.iter().rev() {
            line.push_back(self.network, connection, &budget)?;
        }
        Ok(line)
    }
}
