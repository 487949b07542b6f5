use std::collections::BTreeSet;

use rand::Rng;

use railforge_core::{ConnectionId, Line, Solution};

use super::ConstructionHeuristic;
use crate::scope::SolverScope;

/// Grows lines from a pool of connections no line has used yet, always
/// taking the shortest unused option.
///
/// The pool is shared by every line of one solution, so later lines favour
/// connections earlier lines left out.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyConstruction;

impl GreedyConstruction {
    pub fn new() -> Self {
        Self
    }

    /// Builds one line out of `pool`, removing every connection it uses.
    ///
    /// Returns `None` when no pooled connection fits the budget. Ties between
    /// equally short options go to the lowest connection id.
    pub fn build_line(
        &self,
        solver_scope: &mut SolverScope<'_>,
        pool: &mut BTreeSet<ConnectionId>,
    ) -> Option<Line> {
        let network = solver_scope.network();
        let budget = solver_scope.budget();

        let fitting: Vec<ConnectionId> = pool
            .iter()
            .copied()
            .filter(|&c| budget.fits(network.duration(c)))
            .collect();
        if fitting.is_empty() {
            return None;
        }
        let start = fitting[solver_scope.rng().random_range(0..fitting.len())];

        let mut line = Line::new(solver_scope.next_line_id());
        line.add_connection(network, start, &budget).ok()?;
        pool.remove(&start);

        loop {
            let shortest = line
                .all_options(network)
                .into_iter()
                .filter(|c| pool.contains(c))
                .filter(|&c| line.placement(network, c, &budget).is_ok())
                .min_by(|&x, &y| network.duration(x).total_cmp(&network.duration(y)));
            let Some(connection) = shortest else { break };
            if line.add_connection(network, connection, &budget).is_err() {
                break;
            }
            pool.remove(&connection);
        }
        Some(line)
    }
}

impl ConstructionHeuristic for GreedyConstruction {
    fn build_solution(
        &mut self,
        solver_scope: &mut SolverScope<'_>,
        line_count: usize,
    ) -> Solution {
        let mut pool: BTreeSet<ConnectionId> = solver_scope.network().connection_ids().collect();
        let mut solution = Solution::new();
        for _ in 0..line_count {
            match self.build_line(solver_scope, &mut pool) {
                Some(line) => solution.push(line),
                None => break,
            }
        }
        solution
    }

    fn name(&self) -> &'static str {
        "greedy"
    }
}
