//! Construction heuristics.
//!
//! Each heuristic builds a whole solution of a requested number of lines
//! from scratch, drawing every random decision from the scope's source.

mod greedy;
mod phase;
mod random;
mod relaxed;

use std::fmt::Debug;

use railforge_core::Solution;

use crate::scope::SolverScope;

pub use greedy::GreedyConstruction;
pub use phase::ConstructionPhase;
pub use random::RandomConstruction;
pub use relaxed::RelaxedRandomConstruction;

/// Builds a candidate solution of `line_count` lines.
///
/// Lines without any connection are left out, so the returned solution
/// may hold fewer lines than requested.
pub trait ConstructionHeuristic: Debug {
    fn build_solution(&mut self, solver_scope: &mut SolverScope<'_>, line_count: usize)
        -> Solution;

    /// Name used in log events.
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests;
