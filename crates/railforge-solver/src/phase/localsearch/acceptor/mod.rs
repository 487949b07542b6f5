//! Acceptors for local search move acceptance.
//!
//! Acceptors decide whether the candidate produced by a move replaces the
//! working solution, comparing the candidate's score with the score of the
//! working solution before the move.

mod hill_climbing;
mod simulated_annealing;

use std::fmt::Debug;

use railforge_core::LineScore;

use crate::scope::SolverRng;

pub use hill_climbing::HillClimbingAcceptor;
pub use simulated_annealing::{acceptance_probability, SimulatedAnnealingAcceptor};

/// Trait for accepting or rejecting moves in local search.
///
/// Stochastic acceptors draw from the run's random source so that a seeded
/// run replays exactly.
pub trait Acceptor: Debug {
    /// Returns true if a move resulting in `move_score` should be accepted,
    /// given the score of the working solution.
    fn is_accepted(
        &mut self,
        last_step_score: &LineScore,
        move_score: &LineScore,
        rng: &mut SolverRng,
    ) -> bool;

    /// Called when a phase starts.
    fn phase_started(&mut self, _initial_score: &LineScore) {}

    /// Called when a phase ends.
    fn phase_ended(&mut self) {}

    /// Called when a step starts.
    fn step_started(&mut self) {}

    /// Called when a step ends, whether or not its move was accepted.
    fn step_ended(&mut self, _step_score: &LineScore) {}

    /// Name used in log events.
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests;
