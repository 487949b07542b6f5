//! Hill climbing acceptor.

use railforge_core::LineScore;

use super::Acceptor;
use crate::scope::SolverRng;

/// Hill climbing acceptor - accepts only improving moves.
///
/// This is the simplest acceptor. It only accepts moves that result
/// in a strictly better score. This can get stuck in local optima.
///
/// # Example
///
/// ```
/// use railforge_solver::phase::localsearch::HillClimbingAcceptor;
///
/// let acceptor = HillClimbingAcceptor::new();
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HillClimbingAcceptor;

impl HillClimbingAcceptor {
    pub fn new() -> Self {
        Self
    }
}

impl Acceptor for HillClimbingAcceptor {
    fn is_accepted(
        &mut self,
        last_step_score: &LineScore,
        move_score: &LineScore,
        _rng: &mut SolverRng,
    ) -> bool {
        move_score.is_better_than(last_step_score)
    }

    fn name(&self) -> &'static str {
        "hill_climbing"
    }
}
