//! Construction phase implementation.

use std::fmt::Debug;

use tracing::debug;

use railforge_core::ScoredSolution;

use crate::phase::construction::ConstructionHeuristic;
use crate::phase::Phase;
use crate::scope::SolverScope;

/// Builds one solution with a [`ConstructionHeuristic`] and makes it the
/// working solution.
///
/// Line ids restart at zero for every solution built.
#[derive(Debug)]
pub struct ConstructionPhase {
    heuristic: Box<dyn ConstructionHeuristic>,
    line_count: usize,
}

impl ConstructionPhase {
    pub fn new(heuristic: Box<dyn ConstructionHeuristic>, line_count: usize) -> Self {
        Self {
            heuristic,
            line_count,
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// Sets the number of lines the next solve builds.
    pub fn set_line_count(&mut self, line_count: usize) {
        self.line_count = line_count;
    }
}

impl Phase for ConstructionPhase {
    fn solve(&mut self, solver_scope: &mut SolverScope<'_>) {
        solver_scope.reset_line_ids();
        let solution = self.heuristic.build_solution(solver_scope, self.line_count);
        let score = solver_scope.score(&solution);
        let scored = ScoredSolution::new(solution, score);

        solver_scope.statistics_mut().record_construction();
        debug!(
            event = "constructed",
            heuristic = self.heuristic.name(),
            requested_lines = self.line_count,
            lines = score.line_count,
            score = score.value,
            coverage = score.coverage,
        );
        if solver_scope.update_best(&scored) {
            debug!(
                event = "new_best",
                phase = self.phase_type_name(),
                score = score.value,
                coverage = score.coverage,
            );
        }
        solver_scope.set_working(scored);
    }

    fn phase_type_name(&self) -> &'static str {
        "Construction"
    }
}
