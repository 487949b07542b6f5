use crate::domain::{Line, Network, Solution};

use super::LineScore;

/// Weights of the objective terms.
///
/// `value = coverage * coverage_weight
///     - (line_count * line_weight + total_minutes * minute_weight
///        + total_penalty * penalty_weight)`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ObjectiveWeights {
    pub coverage_weight: f64,
    pub line_weight: f64,
    pub minute_weight: f64,
    pub penalty_weight: f64,
}

impl ObjectiveWeights {
    pub const DEFAULT_COVERAGE_WEIGHT: f64 = 10_000.0;
    pub const DEFAULT_LINE_WEIGHT: f64 = 100.0;
}

impl Default for ObjectiveWeights {
    fn default() -> Self {
        Self {
            coverage_weight: Self::DEFAULT_COVERAGE_WEIGHT,
            line_weight: Self::DEFAULT_LINE_WEIGHT,
            minute_weight: 1.0,
            penalty_weight: 1.0,
        }
    }
}

/// Scores line sets against a network.
///
/// # Example
///
/// ```
/// use railforge_core::{Line, LineBudget, LineId, Network, Objective, Solution};
///
/// let mut builder = Network::builder();
/// builder.add_station("a", 52.0, 4.0).unwrap();
/// builder.add_station("b", 52.1, 4.0).unwrap();
/// builder.add_station("c", 52.2, 4.0).unwrap();
/// let ab = builder.add_connection("a", "b", 10.0).unwrap();
/// builder.add_connection("b", "c", 20.0).unwrap();
/// let network = builder.build();
///
/// let line = Line::from_connections(LineId(0), &network, &[ab], &LineBudget::new(60.0)).unwrap();
/// let score = Objective::default().score(&network, &Solution::from_lines(vec![line]));
///
/// assert_eq!(score.coverage, 0.5);
/// assert_eq!(score.value, 0.5 * 10_000.0 - (100.0 + 10.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Objective {
    weights: ObjectiveWeights,
}

impl Objective {
    pub fn new(weights: ObjectiveWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ObjectiveWeights {
        &self.weights
    }

    pub fn score(&self, network: &Network, solution: &Solution) -> LineScore {
        self.score_lines(network, solution.lines())
    }

    /// Scores any slice of lines; empty lines still count toward the line term.
    pub fn score_lines(&self, network: &Network, lines: &[Line]) -> LineScore {
        let mut used = vec![false; network.connection_count()];
        let mut used_connections = 0;
        for connection in lines.iter().flat_map(|l| l.connections()) {
            if let Some(slot) = used.get_mut(connection.index()) {
                if !*slot {
                    *slot = true;
                    used_connections += 1;
                }
            }
        }

        let coverage = if network.connection_count() == 0 {
            0.0
        } else {
            used_connections as f64 / network.connection_count() as f64
        };
        let total_duration: f64 = lines.iter().map(Line::duration).sum();
        let penalty: f64 = lines.iter().map(Line::penalty).sum();
        let w = &self.weights;
        let cost = lines.len() as f64 * w.line_weight
            + total_duration * w.minute_weight
            + penalty * w.penalty_weight;

        LineScore {
            value: coverage * w.coverage_weight - cost,
            coverage,
            line_count: lines.len(),
            total_duration,
            used_connections,
            penalty,
        }
    }
}
