use rand::Rng;

use railforge_core::{ConnectionId, Line, LineEnd, Solution};

use super::ConstructionHeuristic;
use crate::scope::SolverScope;

/// Grows every line from a random connection by random extensions.
///
/// No exclusivity between lines: two lines may share connections.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomConstruction;

impl RandomConstruction {
    pub fn new() -> Self {
        Self
    }

    /// Builds one random line.
    pub fn build_line(&self, solver_scope: &mut SolverScope<'_>) -> Line {
        grow_random_line(solver_scope, None)
    }
}

impl ConstructionHeuristic for RandomConstruction {
    fn build_solution(
        &mut self,
        solver_scope: &mut SolverScope<'_>,
        line_count: usize,
    ) -> Solution {
        let mut solution = Solution::new();
        for _ in 0..line_count {
            let line = self.build_line(solver_scope);
            if !line.is_empty() {
                solution.push(line);
            }
        }
        solution
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

/// Starts from a uniformly drawn connection that fits the budget, then keeps
/// attaching a uniformly drawn feasible option at either end until none is
/// left.
///
/// With `there_and_back_penalty` set, every extension that re-traverses the
/// connection already at that end adds the penalty to the line.
pub(super) fn grow_random_line(
    solver_scope: &mut SolverScope<'_>,
    there_and_back_penalty: Option<f64>,
) -> Line {
    let network = solver_scope.network();
    let budget = solver_scope.budget();
    let mut line = Line::new(solver_scope.next_line_id());
    let rng = solver_scope.rng();

    let fitting: Vec<ConnectionId> = network
        .connection_ids()
        .filter(|&c| budget.fits(network.duration(c)))
        .collect();
    if fitting.is_empty() {
        return line;
    }
    let start = fitting[rng.random_range(0..fitting.len())];
    if line.add_connection(network, start, &budget).is_err() {
        return line;
    }

    loop {
        let options: Vec<(ConnectionId, LineEnd)> = line
            .all_options(network)
            .into_iter()
            .filter_map(|c| line.placement(network, c, &budget).ok().map(|end| (c, end)))
            .collect();
        if options.is_empty() {
            break;
        }

        let (connection, end) = options[rng.random_range(0..options.len())];
        let outer = match end {
            LineEnd::Front => line.first_connection(),
            LineEnd::Back => line.last_connection(),
        };
        let attached = match end {
            LineEnd::Front => line.push_front(network, connection, &budget),
            LineEnd::Back => line.push_back(network, connection, &budget),
        };
        if attached.is_err() {
            break;
        }
        if let Some(penalty) = there_and_back_penalty {
            if outer == Some(connection) {
                line.add_to_penalty(penalty);
            }
        }
    }
    line
}
