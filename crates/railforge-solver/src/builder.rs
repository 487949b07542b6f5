//! Builder module for constructing solver components from configuration
//!
//! This module provides the wiring between configuration types and
//! the actual solver implementation.

use railforge_config::{AcceptorConfig, ConstructionConfig, ConstructionType, LocalSearchConfig};

use crate::phase::construction::{
    ConstructionHeuristic, ConstructionPhase, GreedyConstruction, RandomConstruction,
    RelaxedRandomConstruction,
};
use crate::phase::localsearch::{
    Acceptor, HillClimbingAcceptor, LocalSearchPhase, SimulatedAnnealingAcceptor,
};

/// Builder for constructing acceptors from configuration.
pub struct AcceptorBuilder;

impl AcceptorBuilder {
    /// Builds an acceptor for a phase of `iterations` steps.
    ///
    /// The annealing temperature defaults to the iteration count.
    pub fn build(config: &AcceptorConfig, iterations: usize) -> Box<dyn Acceptor> {
        match config {
            AcceptorConfig::HillClimbing => Box::new(HillClimbingAcceptor::new()),
            AcceptorConfig::SimulatedAnnealing(sa_config) => {
                Box::new(SimulatedAnnealingAcceptor::new(
                    sa_config.starting_temperature(iterations),
                    sa_config.cooling_rate(),
                ))
            }
        }
    }

    /// Creates a hill climbing acceptor.
    pub fn hill_climbing() -> HillClimbingAcceptor {
        HillClimbingAcceptor::new()
    }

    /// Creates a simulated annealing acceptor.
    pub fn simulated_annealing(
        starting_temperature: f64,
        cooling_rate: f64,
    ) -> SimulatedAnnealingAcceptor {
        SimulatedAnnealingAcceptor::new(starting_temperature, cooling_rate)
    }
}

/// Builder for phases and construction heuristics.
pub struct PhaseBuilder;

impl PhaseBuilder {
    /// Builds the construction heuristic named by `config`.
    pub fn heuristic(config: &ConstructionConfig) -> Box<dyn ConstructionHeuristic> {
        match config.construction_type {
            ConstructionType::Random => Box::new(RandomConstruction::new()),
            ConstructionType::Greedy => Box::new(GreedyConstruction::new()),
            ConstructionType::RelaxedRandom => {
                Box::new(RelaxedRandomConstruction::new(config.relaxed_penalty))
            }
        }
    }

    /// Builds a construction phase for `line_count` lines.
    pub fn construction(config: &ConstructionConfig, line_count: usize) -> ConstructionPhase {
        ConstructionPhase::new(Self::heuristic(config), line_count)
    }

    /// Builds a local search phase.
    pub fn local_search(config: &LocalSearchConfig) -> LocalSearchPhase {
        LocalSearchPhase::new(
            AcceptorBuilder::build(&config.acceptor, config.iterations),
            config.move_types.clone(),
            config.iterations,
        )
    }
}
