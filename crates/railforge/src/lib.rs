//! RailForge - transit line planning over a rail network
//!
//! Builds sets of lines that cover as many connections as possible with as
//! few lines and minutes as possible, by construction heuristics and local
//! search.
//!
//! # Example
//!
//! ```rust
//! use railforge::prelude::*;
//!
//! let mut builder = Network::builder();
//! builder.add_station("Alkmaar", 52.637, 4.739).unwrap();
//! builder.add_station("Hoorn", 52.644, 5.060).unwrap();
//! builder.add_station("Zaandam", 52.439, 4.814).unwrap();
//! builder.add_connection("Alkmaar", "Hoorn", 24.0).unwrap();
//! builder.add_connection("Alkmaar", "Zaandam", 19.0).unwrap();
//! let network = builder.build();
//!
//! let config = SolverConfig::default()
//!     .with_random_seed(3)
//!     .with_max_duration(60.0)
//!     .with_max_lines(2)
//!     .with_construction_type(ConstructionType::Greedy);
//! let result = railforge::solve(&network, config).unwrap();
//!
//! assert_eq!(result.best.coverage(), 1.0);
//! ```

pub mod logging;

// Network model and scoring
pub use railforge_core::{
    Connection, ConnectionId, ConstructionError, GeoPoint, Line, LineBudget, LineEnd, LineError,
    LineId, LineScore, Network, NetworkBuilder, Objective, ObjectiveWeights, RailForgeError,
    Result, RevisitPolicy, ScoredSolution, Solution, Station, StationId,
};

// Configuration
pub use railforge_config::{
    AcceptorConfig, ConfigError, ConstructionConfig, ConstructionType, LocalSearchConfig,
    MoveType, SimulatedAnnealingConfig, SolverConfig,
};

// Search
pub use railforge_solver::{
    PathError, PathFinder, ScoreTrace, SolutionArchive, SolveResult, Solver, SolverStatistics,
    TracePoint,
};

/// Lower-level solver building blocks: phases, acceptors, operators.
pub mod solver {
    pub use railforge_solver::*;
}

/// Validates `config` and runs it to completion over `network`.
///
/// # Errors
///
/// [`RailForgeError::InvalidParameter`] if the run is rejected before any
/// search starts.
pub fn solve(network: &Network, config: SolverConfig) -> Result<SolveResult> {
    Ok(Solver::new(network, config)?.solve())
}

pub mod prelude {
    pub use super::{
        ConstructionType, Line, LineScore, LocalSearchConfig, MoveType, Network, RevisitPolicy,
        ScoredSolution, SolveResult, Solution, Solver, SolverConfig,
    };
}
