use railforge_core::{Line, Solution};

use super::random::grow_random_line;
use super::ConstructionHeuristic;
use crate::scope::SolverScope;

/// Random construction that charges a penalty for every there-and-back
/// extension instead of treating it like any other.
///
/// The penalty is carried on the line and subtracted by the objective, so
/// lines full of back-tracking rank lower without their duration changing.
#[derive(Debug, Clone, Copy)]
pub struct RelaxedRandomConstruction {
    penalty: f64,
}

impl RelaxedRandomConstruction {
    pub const DEFAULT_PENALTY: f64 = 1000.0;

    pub fn new(penalty: f64) -> Self {
        Self { penalty }
    }

    pub fn penalty(&self) -> f64 {
        self.penalty
    }

    pub fn build_line(&self, solver_scope: &mut SolverScope<'_>) -> Line {
        grow_random_line(solver_scope, Some(self.penalty))
    }
}

impl Default for RelaxedRandomConstruction {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PENALTY)
    }
}

impl ConstructionHeuristic for RelaxedRandomConstruction {
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
        "relaxed_random"
    }
}
