//! Solver-level scope.

use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use railforge_core::{
    LineBudget, LineId, LineIdGenerator, LineScore, Network, Objective, ScoredSolution, Solution,
};

use crate::archive::SolutionArchive;
use crate::heuristic::r#move::MoveContext;
use crate::pathfinder::PathFinder;
use crate::statistics::{ScoreTrace, SolverStatistics, TracePoint};

/// The single random source of a run.
pub type SolverRng = ChaCha8Rng;

/// Top-level scope for one solving run.
///
/// Owns every piece of mutable run state: the random source, the line id
/// counter, the working and best solutions, the archive, the trace and the
/// statistics. Phases borrow it mutably in turn.
#[derive(Debug)]
pub struct SolverScope<'n> {
    network: &'n Network,
    pathfinder: PathFinder<'n>,
    budget: LineBudget,
    objective: Objective,
    rng: SolverRng,
    line_ids: LineIdGenerator,
    working: Option<ScoredSolution>,
    best: Option<ScoredSolution>,
    archive: SolutionArchive,
    trace: ScoreTrace,
    trace_key: usize,
    statistics: SolverStatistics,
    start_time: Option<Instant>,
}

impl<'n> SolverScope<'n> {
    pub fn new(network: &'n Network, budget: LineBudget, objective: Objective) -> Self {
        Self::with_rng(network, budget, objective, SolverRng::from_os_rng())
    }

    pub fn with_seed(
        network: &'n Network,
        budget: LineBudget,
        objective: Objective,
        seed: u64,
    ) -> Self {
        Self::with_rng(network, budget, objective, SolverRng::seed_from_u64(seed))
    }

    fn with_rng(
        network: &'n Network,
        budget: LineBudget,
        objective: Objective,
        rng: SolverRng,
    ) -> Self {
        Self {
            network,
            pathfinder: PathFinder::new(network),
            budget,
            objective,
            rng,
            line_ids: LineIdGenerator::new(),
            working: None,
            best: None,
            archive: SolutionArchive::default(),
            trace: ScoreTrace::new(),
            trace_key: 0,
            statistics: SolverStatistics::default(),
            start_time: None,
        }
    }

    /// Sets how many distinct solutions the archive keeps.
    pub fn with_history_size(mut self, history_size: usize) -> Self {
        self.archive = SolutionArchive::new(history_size);
        self
    }

    pub fn start_solving(&mut self) {
        self.start_time = Some(Instant::now());
        self.statistics.start();
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map(|t| t.elapsed()).unwrap_or_default()
    }

    pub fn network(&self) -> &'n Network {
        self.network
    }

    pub fn pathfinder(&self) -> PathFinder<'n> {
        self.pathfinder
    }

    pub fn budget(&self) -> LineBudget {
        self.budget
    }

    pub fn objective(&self) -> &Objective {
        &self.objective
    }

    /// Everything a neighborhood operator reads besides the random source.
    pub fn move_context(&self) -> MoveContext<'n> {
        MoveContext {
            network: self.network,
            pathfinder: self.pathfinder,
            budget: self.budget,
        }
    }

    pub fn rng(&mut self) -> &mut SolverRng {
        &mut self.rng
    }

    pub fn next_line_id(&mut self) -> LineId {
        self.line_ids.next_id()
    }

    /// Restarts line numbering, once per constructed solution.
    pub fn reset_line_ids(&mut self) {
        self.line_ids.reset();
    }

    pub fn score(&self, solution: &Solution) -> LineScore {
        self.objective.score(self.network, solution)
    }

    pub fn working(&self) -> Option<&ScoredSolution> {
        self.working.as_ref()
    }

    pub fn set_working(&mut self, solution: ScoredSolution) {
        self.working = Some(solution);
    }

    pub fn take_working(&mut self) -> Option<ScoredSolution> {
        self.working.take()
    }

    pub fn best(&self) -> Option<&ScoredSolution> {
        self.best.as_ref()
    }

    pub fn take_best(&mut self) -> Option<ScoredSolution> {
        self.best.take()
    }

    /// Offers `candidate` to the archive and replaces the best solution if
    /// it strictly improves on it. Returns true on a new best.
    pub fn update_best(&mut self, candidate: &ScoredSolution) -> bool {
        self.archive.offer(candidate.clone());
        let is_better = match &self.best {
            None => true,
            Some(best) => candidate.score.is_better_than(&best.score),
        };
        if is_better {
            self.best = Some(candidate.clone());
            self.statistics.record_improvement();
        }
        is_better
    }

    pub fn archive(&self) -> &SolutionArchive {
        &self.archive
    }

    pub fn take_archive(&mut self) -> SolutionArchive {
        let capacity = self.archive.capacity();
        std::mem::replace(&mut self.archive, SolutionArchive::new(capacity))
    }

    /// Selects the trace run subsequent points are recorded under.
    pub fn set_trace_key(&mut self, key: usize) {
        self.trace_key = key;
    }

    pub fn record_trace(&mut self, step: usize, score: &LineScore) {
        self.trace.record(
            self.trace_key,
            TracePoint {
                step,
                value: score.value,
                coverage: score.coverage,
            },
        );
    }

    pub fn trace(&self) -> &ScoreTrace {
        &self.trace
    }

    pub fn take_trace(&mut self) -> ScoreTrace {
        std::mem::take(&mut self.trace)
    }

    pub fn statistics(&self) -> &SolverStatistics {
        &self.statistics
    }

    pub fn statistics_mut(&mut self) -> &mut SolverStatistics {
        &mut self.statistics
    }

    pub fn take_statistics(&mut self) -> SolverStatistics {
        self.statistics.stop();
        std::mem::take(&mut self.statistics)
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;
    use railforge_core::{Line, LineBudget};
    use railforge_test::diamond;

    use super::*;

    #[test]
    fn test_seeded_scopes_replay() {
        let g = diamond();
        let budget = LineBudget::new(50.0);
        let mut first = SolverScope::with_seed(&g.network, budget, Objective::default(), 11);
        let mut second = SolverScope::with_seed(&g.network, budget, Objective::default(), 11);
        let a: Vec<u32> = (0..8).map(|_| first.rng().random_range(0..1000)).collect();
        let b: Vec<u32> = (0..8).map(|_| second.rng().random_range(0..1000)).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_line_ids_restart() {
        let g = diamond();
        let mut scope =
            SolverScope::with_seed(&g.network, LineBudget::new(50.0), Objective::default(), 0);
        assert_eq!(scope.next_line_id(), LineId(0));
        assert_eq!(scope.next_line_id(), LineId(1));
        scope.reset_line_ids();
        assert_eq!(scope.next_line_id(), LineId(0));
    }

    #[test]
    fn test_update_best_is_strict_and_archives() {
        let g = diamond();
        let budget = LineBudget::new(50.0);
        let mut scope = SolverScope::with_seed(&g.network, budget, Objective::default(), 0)
            .with_history_size(3);

        let short = Line::from_connections(LineId(0), &g.network, &[g.ab], &budget).unwrap();
        let long = Line::from_connections(LineId(0), &g.network, &[g.da, g.ab, g.bc], &budget)
            .unwrap();
        let score_of = |scope: &SolverScope<'_>, line: &Line| {
            let solution = Solution::from_lines(vec![line.clone()]);
            let score = scope.score(&solution);
            ScoredSolution::new(solution, score)
        };

        let first = score_of(&scope, &short);
        let second = score_of(&scope, &long);
        assert!(scope.update_best(&first));
        assert!(!scope.update_best(&first));
        assert!(scope.update_best(&second));
        assert_eq!(scope.best().map(ScoredSolution::value), Some(second.value()));
        assert_eq!(scope.archive().len(), 2);
        assert_eq!(scope.statistics().improvements, 2);
    }
}
