//! Solver phases.
//!
//! A run is a sequence of phases over one [`SolverScope`]:
//! - [`ConstructionPhase`]: builds a fresh solution from scratch
//! - [`LocalSearchPhase`]: perturbs the working solution with neighborhood operators

pub mod construction;
pub mod localsearch;

use std::fmt::Debug;

use crate::scope::SolverScope;

pub use construction::{ConstructionHeuristic, ConstructionPhase};
pub use localsearch::LocalSearchPhase;

/// A phase of the solving process.
///
/// Phases are executed in sequence by the solver. Each reads and replaces
/// the working solution in the scope and offers every solution it scores
/// to the best-solution tracking.
pub trait Phase: Debug {
    /// Executes this phase.
    fn solve(&mut self, solver_scope: &mut SolverScope<'_>);

    /// Returns the name of this phase type.
    fn phase_type_name(&self) -> &'static str;
}
