//! Objective function and score values
//!
//! A candidate solution is reduced to one scalar that trades coverage
//! against the number of lines and the total travel time. Higher is better.

mod objective;


use std::fmt;

pub use objective::{Objective, ObjectiveWeights};

/// The score of a solution together with the metrics it was derived from.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineScore {
    /// Objective value; higher is better.
    pub value: f64,
    /// Fraction of network connections used by at least one line, in `[0, 1]`.
    pub coverage: f64,
    /// Number of lines in the solution.
    pub line_count: usize,
    /// Sum of line durations in minutes.
    pub total_duration: f64,
    /// Number of distinct connections used.
    pub used_connections: usize,
    /// Sum of line penalties.
    pub penalty: f64,
}

impl LineScore {
    /// Strict improvement on the objective value.
    #[inline]
    pub fn is_better_than(&self, other: &LineScore) -> bool {
        self.value > other.value
    }

    /// True when every connection of the network is used.
    pub fn is_full_coverage(&self) -> bool {
        self.coverage >= 1.0
    }
}

impl fmt::Display for LineScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2} (coverage {:.4}, {} lines, {:.1} min)",
            self.value, self.coverage, self.line_count, self.total_duration
        )
    }
}
