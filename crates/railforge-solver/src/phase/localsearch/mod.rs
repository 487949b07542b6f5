//! Local search phase
//!
//! Improves the working solution one neighborhood move at a time. Each
//! iteration draws an operator, applies it to a private copy of the working
//! solution and lets the [`Acceptor`] decide whether the copy replaces it.

pub mod acceptor;
mod phase;

pub use acceptor::{
    acceptance_probability, Acceptor, HillClimbingAcceptor, SimulatedAnnealingAcceptor,
};
pub use phase::LocalSearchPhase;
