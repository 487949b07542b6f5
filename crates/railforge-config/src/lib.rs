//! Configuration system for RailForge.
//!
//! Load solver configuration from TOML or YAML to control the line budget,
//! the construction heuristic, local search and the objective weights
//! without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use railforge_config::{AcceptorConfig, ConstructionType, SolverConfig};
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     random_seed = 7
//!     max_duration = 180.0
//!     max_lines = 20
//!
//!     [construction]
//!     construction_type = "greedy"
//!
//!     [local_search]
//!     iterations = 2000
//!     [local_search.acceptor]
//!     type = "simulated_annealing"
//!     cooling_rate = 0.995
//! "#).unwrap();
//!
//! assert_eq!(config.construction.construction_type, ConstructionType::Greedy);
//! let local_search = config.local_search.unwrap();
//! assert_eq!(local_search.iterations, 2000);
//! assert!(matches!(local_search.acceptor, AcceptorConfig::SimulatedAnnealing(_)));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use railforge_config::SolverConfig;
//!
//! let config = SolverConfig::load("railforge.toml").unwrap_or_default();
//! assert_eq!(config.max_lines, 7);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use railforge_core::{ObjectiveWeights, RevisitPolicy};

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main solver configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverConfig {
    /// Random seed for reproducible results; `None` draws from OS entropy.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Maximum duration of a single line in minutes.
    #[serde(default = "default_max_duration")]
    pub max_duration: f64,

    /// Upper bound on the number of lines in a solution.
    #[serde(default = "default_max_lines")]
    pub max_lines: usize,

    /// Number of independent repeats.
    #[serde(default = "default_repeat")]
    pub repeat: usize,

    /// Number of distinct best solutions kept for reporting.
    #[serde(default = "default_history_size")]
    pub history_size: usize,

    /// Whether lines may traverse a connection they already contain.
    #[serde(default)]
    pub revisit_policy: RevisitPolicy,

    /// Construction heuristic configuration.
    #[serde(default)]
    pub construction: ConstructionConfig,

    /// Local search configuration; `None` runs construction only.
    #[serde(default)]
    pub local_search: Option<LocalSearchConfig>,

    /// Objective weights.
    #[serde(default)]
    pub objective: ObjectiveWeights,
}

fn default_max_duration() -> f64 {
    120.0
}

fn default_max_lines() -> usize {
    7
}

fn default_repeat() -> usize {
    1
}

fn default_history_size() -> usize {
    5
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            random_seed: None,
            max_duration: default_max_duration(),
            max_lines: default_max_lines(),
            repeat: default_repeat(),
            history_size: default_history_size(),
            revisit_policy: RevisitPolicy::default(),
            construction: ConstructionConfig::default(),
            local_search: None,
            objective: ObjectiveWeights::default(),
        }
    }
}

impl SolverConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the line duration budget.
    pub fn with_max_duration(mut self, max_duration: f64) -> Self {
        self.max_duration = max_duration;
        self
    }

    /// Sets the maximum number of lines.
    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    /// Sets the number of repeats.
    pub fn with_repeat(mut self, repeat: usize) -> Self {
        self.repeat = repeat;
        self
    }

    /// Sets the archive size.
    pub fn with_history_size(mut self, history_size: usize) -> Self {
        self.history_size = history_size;
        self
    }

    pub fn with_revisit_policy(mut self, policy: RevisitPolicy) -> Self {
        self.revisit_policy = policy;
        self
    }

    /// Sets the construction heuristic.
    pub fn with_construction_type(mut self, construction_type: ConstructionType) -> Self {
        self.construction.construction_type = construction_type;
        self
    }

    /// Enables local search.
    pub fn with_local_search(mut self, local_search: LocalSearchConfig) -> Self {
        self.local_search = Some(local_search);
        self
    }

    pub fn with_objective(mut self, objective: ObjectiveWeights) -> Self {
        self.objective = objective;
        self
    }

    /// Checks every numeric parameter before a run starts.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.max_duration.is_finite() || self.max_duration <= 0.0 {
            return Err(invalid(format!(
                "max_duration must be a positive number, got {}",
                self.max_duration
            )));
        }
        if self.max_lines == 0 {
            return Err(invalid("max_lines must be at least 1"));
        }
        if self.repeat == 0 {
            return Err(invalid("repeat must be at least 1"));
        }
        if self.history_size == 0 {
            return Err(invalid("history_size must be at least 1"));
        }
        let penalty = self.construction.relaxed_penalty;
        if !penalty.is_finite() || penalty < 0.0 {
            return Err(invalid(format!(
                "construction.relaxed_penalty must be a non-negative number, got {penalty}"
            )));
        }
        let w = &self.objective;
        for (name, value) in [
            ("coverage_weight", w.coverage_weight),
            ("line_weight", w.line_weight),
            ("minute_weight", w.minute_weight),
            ("penalty_weight", w.penalty_weight),
        ] {
            if !value.is_finite() {
                return Err(invalid(format!("objective.{name} must be finite")));
            }
        }
        if let Some(local_search) = &self.local_search {
            local_search.validate()?;
        }
        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::Invalid(message.into())
}

/// Construction heuristic configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ConstructionConfig {
    /// Type of construction heuristic.
    #[serde(default)]
    pub construction_type: ConstructionType,

    /// Penalty added per there-and-back extension by the relaxed heuristic.
    #[serde(default = "default_relaxed_penalty")]
    pub relaxed_penalty: f64,
}

fn default_relaxed_penalty() -> f64 {
    1000.0
}

impl Default for ConstructionConfig {
    fn default() -> Self {
        Self {
            construction_type: ConstructionType::default(),
            relaxed_penalty: default_relaxed_penalty(),
        }
    }
}

/// Construction heuristic types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstructionType {
    /// Grow each line by uniformly random incident connections.
    #[default]
    Random,

    /// Grow each line by the shortest connection not yet used by any line.
    Greedy,

    /// Random growth that penalises immediate there-and-back extensions.
    RelaxedRandom,
}

/// Local search configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct LocalSearchConfig {
    /// Iterations per repeat.
    #[serde(default = "default_iterations")]
    pub iterations: usize,

    /// Neighborhood operators drawn from uniformly.
    #[serde(default = "MoveType::all")]
    pub move_types: Vec<MoveType>,

    /// Acceptor configuration.
    #[serde(default)]
    pub acceptor: AcceptorConfig,
}

fn default_iterations() -> usize {
    1000
}

impl Default for LocalSearchConfig {
    fn default() -> Self {
        Self {
            iterations: default_iterations(),
            move_types: MoveType::all(),
            acceptor: AcceptorConfig::default(),
        }
    }
}

impl LocalSearchConfig {
    /// Hill climbing for `iterations` steps with every operator.
    pub fn hill_climbing(iterations: usize) -> Self {
        Self {
            iterations,
            ..Self::default()
        }
    }

    /// Simulated annealing for `iterations` steps with the default schedule.
    pub fn simulated_annealing(iterations: usize) -> Self {
        Self {
            iterations,
            acceptor: AcceptorConfig::SimulatedAnnealing(SimulatedAnnealingConfig::default()),
            ..Self::default()
        }
    }

    pub fn with_move_types(mut self, move_types: Vec<MoveType>) -> Self {
        self.move_types = move_types;
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.iterations == 0 {
            return Err(invalid("local_search.iterations must be at least 1"));
        }
        if self.move_types.is_empty() {
            return Err(invalid("local_search.move_types must not be empty"));
        }
        if let AcceptorConfig::SimulatedAnnealing(sa) = &self.acceptor {
            let start = sa.starting_temperature(self.iterations);
            if !start.is_finite() || start <= 0.0 {
                return Err(invalid(format!(
                    "starting_temperature must be a positive number, got {start}"
                )));
            }
            let rate = sa.cooling_rate();
            if !(rate > 0.0 && rate < 1.0) {
                return Err(invalid(format!(
                    "cooling_rate must lie strictly between 0 and 1, got {rate}"
                )));
            }
        }
        Ok(())
    }
}

/// Neighborhood operator kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveType {
    /// Drop the outer connection of a there-and-back end.
    CutDuplicateEnd,

    /// Splice an unused connection onto a line through the shortest path.
    FillMissing,

    /// Replace a run of repeated connections by the shortest path.
    RemoveDuplicateSection,

    /// Replace a random middle section by the shortest path.
    ReplaceRandomSection,
}

impl MoveType {
    pub const ALL: [MoveType; 4] = [
        MoveType::CutDuplicateEnd,
        MoveType::FillMissing,
        MoveType::RemoveDuplicateSection,
        MoveType::ReplaceRandomSection,
    ];

    pub fn all() -> Vec<MoveType> {
        Self::ALL.to_vec()
    }

    pub fn name(self) -> &'static str {
        match self {
            MoveType::CutDuplicateEnd => "cut_duplicate_end",
            MoveType::FillMissing => "fill_missing",
            MoveType::RemoveDuplicateSection => "remove_duplicate_section",
            MoveType::ReplaceRandomSection => "replace_random_section",
        }
    }
}

/// Acceptor configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AcceptorConfig {
    /// Hill climbing (only accept strictly improving candidates).
    #[default]
    HillClimbing,

    /// Simulated annealing acceptor.
    SimulatedAnnealing(SimulatedAnnealingConfig),
}

/// Simulated annealing configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SimulatedAnnealingConfig {
    /// Starting temperature; defaults to the iteration count.
    pub starting_temperature: Option<f64>,

    /// Geometric cooling factor applied per iteration.
    pub cooling_rate: Option<f64>,
}

impl SimulatedAnnealingConfig {
    pub const DEFAULT_COOLING_RATE: f64 = 0.997;

    /// Resolves the starting temperature for a run of `iterations` steps.
    pub fn starting_temperature(&self, iterations: usize) -> f64 {
        self.starting_temperature.unwrap_or(iterations as f64)
    }

    pub fn cooling_rate(&self) -> f64 {
        self.cooling_rate.unwrap_or(Self::DEFAULT_COOLING_RATE)
    }
}
