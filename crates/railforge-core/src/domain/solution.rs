//! Solution: an ordered set of lines.

use std::collections::BTreeSet;

use super::{ConnectionId, Line, Network};
use crate::score::LineScore;

/// An ordered set of lines planned over one network.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Solution {
    lines: Vec<Line>,
}

impl Solution {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_lines(lines: Vec<Line>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn lines_mut(&mut self) -> &mut [Line] {
        &mut self.lines
    }

    pub fn into_lines(self) -> Vec<Line> {
        self.lines
    }

    pub fn line(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    pub fn line_mut(&mut self, index: usize) -> Option<&mut Line> {
        self.lines.get_mut(index)
    }

    pub fn push(&mut self, line: Line) {
        self.lines.push(line);
    }

    /// Replaces the line at `index`, returning the old one.
    pub fn replace(&mut self, index: usize, line: Line) -> Option<Line> {
        let slot = self.lines.get_mut(index)?;
        Some(std::mem::replace(slot, line))
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Drops lines without any connection.
    pub fn retain_non_empty(&mut self) {
        self.lines.retain(|line| !line.is_empty());
    }

    /// Union of connections used by any line.
    pub fn used_connections(&self) -> BTreeSet<ConnectionId> {
        self.lines
            .iter()
            .flat_map(|line| line.connections().iter().copied())
            .collect()
    }

    /// Connections of `network` that no line uses, in id order.
    pub fn unused_connections(&self, network: &Network) -> Vec<ConnectionId> {
        let used = self.used_connections();
        network
            .connection_ids()
            .filter(|id| !used.contains(id))
            .collect()
    }

    pub fn total_duration(&self) -> f64 {
        self.lines.iter().map(Line::duration).sum()
    }

    pub fn total_penalty(&self) -> f64 {
        self.lines.iter().map(Line::penalty).sum()
    }
}

/// A solution together with the score it was given.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSolution {
    pub solution: Solution,
    pub score: LineScore,
}

impl ScoredSolution {
    pub fn new(solution: Solution, score: LineScore) -> Self {
        Self { solution, score }
    }

    pub fn value(&self) -> f64 {
        self.score.value
    }

    pub fn coverage(&self) -> f64 {
        self.score.coverage
    }
}
