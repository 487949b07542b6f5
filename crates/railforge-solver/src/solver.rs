//! Run controller.

use std::fmt::Debug;

use tracing::{debug, info};

use railforge_config::{AcceptorConfig, ConstructionType, SolverConfig};
use railforge_core::{
    LineBudget, Network, Objective, RailForgeError, Result, ScoredSolution, Solution,
};

use crate::archive::SolutionArchive;
use crate::builder::PhaseBuilder;
use crate::phase::construction::ConstructionPhase;
use crate::phase::Phase;
use crate::scope::SolverScope;
use crate::statistics::{ScoreTrace, SolverStatistics};

/// Everything a finished run reports.
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// Best solution found over all repeats.
    pub best: ScoredSolution,
    /// Distinct best solutions, best first.
    pub archive: SolutionArchive,
    /// Per-run score history.
    pub trace: ScoreTrace,
    pub statistics: SolverStatistics,
}

/// Orchestrates construction and local search over one network.
///
/// Without local search every repeat sweeps the line count from
/// `max_lines` down to the smallest count that could cover the network,
/// building and scoring one solution per count. With local search one
/// such sweep picks the starting solution, which is then improved for
/// `repeat` consecutive phases of `iterations` steps each.
///
/// # Example
///
/// ```
/// use railforge_config::{ConstructionType, LocalSearchConfig, SolverConfig};
/// use railforge_core::Network;
/// use railforge_solver::Solver;
///
/// let mut builder = Network::builder();
/// builder.add_station("a", 52.00, 4.00).unwrap();
/// builder.add_station("b", 52.05, 4.05).unwrap();
/// builder.add_station("c", 52.10, 4.10).unwrap();
/// builder.add_connection("a", "b", 5.0).unwrap();
/// builder.add_connection("b", "c", 10.0).unwrap();
/// let network = builder.build();
///
/// let config = SolverConfig::default()
///     .with_random_seed(1)
///     .with_max_duration(30.0)
///     .with_max_lines(2)
///     .with_construction_type(ConstructionType::Greedy)
///     .with_local_search(LocalSearchConfig::hill_climbing(100));
///
/// let result = Solver::new(&network, config).unwrap().solve();
/// assert_eq!(result.best.coverage(), 1.0);
/// ```
pub struct Solver<'n> {
    network: &'n Network,
    config: SolverConfig,
}

impl Debug for Solver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Solver")
            .field("stations", &self.network.station_count())
            .field("connections", &self.network.connection_count())
            .field("config", &self.config)
            .finish()
    }
}

impl<'n> Solver<'n> {
    /// Validates `config` against `network`.
    ///
    /// # Errors
    ///
    /// [`RailForgeError::InvalidParameter`] if the configuration is rejected
    /// or the network has no connections to plan over.
    pub fn new(network: &'n Network, config: SolverConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| RailForgeError::InvalidParameter(e.to_string()))?;
        if network.connection_count() == 0 {
            return Err(RailForgeError::InvalidParameter(
                "network has no connections".to_string(),
            ));
        }
        Ok(Self { network, config })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Line counts every sweep builds, largest first.
    pub fn line_counts(&self) -> Vec<usize> {
        let max = self.config.max_lines;
        let min = self
            .network
            .min_line_count(self.config.max_duration)
            .max(1)
            .min(max);
        (min..=max).rev().collect()
    }

    /// Short name of the configured algorithm, as used in log events.
    pub fn algorithm_name(&self) -> &'static str {
        match &self.config.local_search {
            Some(ls) => match ls.acceptor {
                AcceptorConfig::HillClimbing => "hill_climbing",
                AcceptorConfig::SimulatedAnnealing(_) => "simulated_annealing",
            },
            None => match self.config.construction.construction_type {
                ConstructionType::Random => "random",
                ConstructionType::Greedy => "greedy",
                ConstructionType::RelaxedRandom => "relaxed_random",
            },
        }
    }

    /// Runs the configured algorithm to completion.
    pub fn solve(&self) -> SolveResult {
        let budget = LineBudget::new(self.config.max_duration)
            .with_revisits(self.config.revisit_policy);
        let objective = Objective::new(self.config.objective);
        let scope = match self.config.random_seed {
            Some(seed) => SolverScope::with_seed(self.network, budget, objective, seed),
            None => SolverScope::new(self.network, budget, objective),
        };
        let mut scope = scope.with_history_size(self.config.history_size);

        info!(
            event = "solve_start",
            algorithm = self.algorithm_name(),
            stations = self.network.station_count(),
            connections = self.network.connection_count(),
            max_duration = self.config.max_duration,
            max_lines = self.config.max_lines,
            repeat = self.config.repeat,
        );
        scope.start_solving();

        let mut construction = PhaseBuilder::construction(&self.config.construction, 0);
        match &self.config.local_search {
            None => {
                for repeat in 0..self.config.repeat {
                    self.sweep(&mut construction, &mut scope, Some(repeat));
                    debug!(
                        event = "repeat_end",
                        repeat = repeat,
                        best = scope.best().map(ScoredSolution::value),
                    );
                }
            }
            Some(ls_config) => {
                self.sweep(&mut construction, &mut scope, None);
                if let Some(start) = scope.best().cloned() {
                    scope.set_working(start);
                }
                let mut local_search = PhaseBuilder::local_search(ls_config);
                for repeat in 0..self.config.repeat {
                    scope.set_trace_key(repeat);
                    local_search.set_phase_index(repeat);
                    local_search.solve(&mut scope);
                }
            }
        }

        let best = scope.take_best().unwrap_or_else(|| {
            let empty = Solution::new();
            let score = scope.score(&empty);
            ScoredSolution::new(empty, score)
        });
        let statistics = scope.take_statistics();
        info!(
            event = "solve_end",
            score = best.score.value,
            coverage = best.score.coverage,
            lines = best.score.line_count,
            duration_ms = statistics.elapsed().as_millis() as u64,
            solutions_constructed = statistics.solutions_constructed,
            moves_attempted = statistics.moves_attempted,
            moves_accepted = statistics.moves_accepted,
        );
        SolveResult {
            best,
            archive: scope.take_archive(),
            trace: scope.take_trace(),
            statistics,
        }
    }

    /// Builds one solution per line count. With `trace_step` set, each score
    /// is traced under its line count at that step.
    fn sweep(
        &self,
        construction: &mut ConstructionPhase,
        scope: &mut SolverScope<'_>,
        trace_step: Option<usize>,
    ) {
        for line_count in self.line_counts() {
            construction.set_line_count(line_count);
            construction.solve(scope);
            if let (Some(step), Some(working)) = (trace_step, scope.working()) {
                let score = working.score;
                scope.set_trace_key(line_count);
                scope.record_trace(step, &score);
            }
        }
    }
}

#[cfg(test)]
#[path = "solver_tests.rs"]
mod tests;
