//! RailForge Solver Engine
//!
//! This crate provides the search machinery for line planning:
//! - Bounded A* path finding between stations
//! - Construction heuristics (random, greedy, relaxed random)
//! - Local search with neighborhood operators and acceptors
//! - Solution archive, score trace and run statistics
//! - The run controller ([`Solver`]) and configuration wiring (builder module)

pub mod archive;
pub mod builder;
pub mod heuristic;
pub mod pathfinder;
pub mod phase;
pub mod scope;
pub mod solver;
pub mod statistics;

pub use archive::SolutionArchive;
pub use builder::{AcceptorBuilder, PhaseBuilder};
pub use heuristic::{apply_move, MoveContext, MoveRejection};
pub use pathfinder::{PathError, PathFinder};
pub use phase::construction::{
    ConstructionHeuristic, ConstructionPhase, GreedyConstruction, RandomConstruction,
    RelaxedRandomConstruction,
};
pub use phase::localsearch::{
    acceptance_probability, Acceptor, HillClimbingAcceptor, LocalSearchPhase,
    SimulatedAnnealingAcceptor,
};
pub use phase::Phase;
pub use scope::{SolverRng, SolverScope};
pub use solver::{SolveResult, Solver};
pub use statistics::{OperatorStatistics, ScoreTrace, SolverStatistics, TracePoint};
