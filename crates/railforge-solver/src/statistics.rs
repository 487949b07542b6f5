//! Run statistics and the per-run score trace.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use railforge_config::MoveType;

/// Counters for one neighborhood operator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OperatorStatistics {
    /// Times the operator was drawn.
    pub attempted: u64,
    /// Times it produced a candidate.
    pub succeeded: u64,
    /// Times its candidate was accepted.
    pub accepted: u64,
}

/// Solver-level statistics.
///
/// # Example
///
/// ```
/// use railforge_config::MoveType;
/// use railforge_solver::statistics::SolverStatistics;
///
/// let mut stats = SolverStatistics::default();
/// stats.start();
/// stats.record_attempt(MoveType::FillMissing);
/// stats.record_candidate(MoveType::FillMissing);
/// stats.record_acceptance(MoveType::FillMissing);
/// stats.record_attempt(MoveType::CutDuplicateEnd);
///
/// assert_eq!(stats.moves_attempted, 2);
/// assert_eq!(stats.moves_accepted, 1);
/// assert_eq!(stats.acceptance_rate(), 0.5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SolverStatistics {
    start_time: Option<Instant>,
    elapsed: Option<Duration>,
    /// Solutions produced by construction.
    pub solutions_constructed: u64,
    /// Operators drawn in local search.
    pub moves_attempted: u64,
    /// Operators that produced a candidate.
    pub moves_succeeded: u64,
    /// Candidates accepted.
    pub moves_accepted: u64,
    /// Times the best solution improved.
    pub improvements: u64,
    operators: BTreeMap<&'static str, OperatorStatistics>,
}

impl SolverStatistics {
    /// Marks the start of solving.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
        self.elapsed = None;
    }

    /// Freezes the elapsed time.
    pub fn stop(&mut self) {
        self.elapsed = self.start_time.map(|t| t.elapsed());
    }

    /// Time since [`start`](Self::start), or the frozen time after [`stop`](Self::stop).
    pub fn elapsed(&self) -> Duration {
        self.elapsed
            .or_else(|| self.start_time.map(|t| t.elapsed()))
            .unwrap_or_default()
    }

    pub fn record_construction(&mut self) {
        self.solutions_constructed += 1;
    }

    pub fn record_attempt(&mut self, move_type: MoveType) {
        self.moves_attempted += 1;
        self.operator_mut(move_type).attempted += 1;
    }

    pub fn record_candidate(&mut self, move_type: MoveType) {
        self.moves_succeeded += 1;
        self.operator_mut(move_type).succeeded += 1;
    }

    pub fn record_acceptance(&mut self, move_type: MoveType) {
        self.moves_accepted += 1;
        self.operator_mut(move_type).accepted += 1;
    }

    pub fn record_improvement(&mut self) {
        self.improvements += 1;
    }

    /// Counters for `move_type`; zero if it was never drawn.
    pub fn operator(&self, move_type: MoveType) -> OperatorStatistics {
        self.operators
            .get(move_type.name())
            .copied()
            .unwrap_or_default()
    }

    /// Per-operator counters keyed by operator name.
    pub fn operators(&self) -> &BTreeMap<&'static str, OperatorStatistics> {
        &self.operators
    }

    /// Returns the acceptance rate (accepted / attempted).
    pub fn acceptance_rate(&self) -> f64 {
        if self.moves_attempted == 0 {
            0.0
        } else {
            self.moves_accepted as f64 / self.moves_attempted as f64
        }
    }

    fn operator_mut(&mut self, move_type: MoveType) -> &mut OperatorStatistics {
        self.operators.entry(move_type.name()).or_default()
    }
}

/// One point of a score trace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TracePoint {
    /// Iteration for local search, repeat index for construction sweeps.
    pub step: usize,
    pub value: f64,
    pub coverage: f64,
}

/// Score history keyed by run.
///
/// Local search keys by repeat index with one point per iteration;
/// construction sweeps key by line count with one point per repeat.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreTrace {
    runs: BTreeMap<usize, Vec<TracePoint>>,
}

impl ScoreTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, key: usize, point: TracePoint) {
        self.runs.entry(key).or_default().push(point);
    }

    pub fn run(&self, key: usize) -> Option<&[TracePoint]> {
        self.runs.get(&key).map(Vec::as_slice)
    }

    pub fn runs(&self) -> impl Iterator<Item = (usize, &[TracePoint])> {
        self.runs.iter().map(|(&k, v)| (k, v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}
