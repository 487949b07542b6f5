use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use railforge::{ConstructionType, LocalSearchConfig, SolverConfig};

use crate::error::CliError;

/// Plans transit lines covering a rail network.
#[derive(Debug, Parser)]
#[command(name = "railforge", version, about)]
pub struct Args {
    /// Stations CSV: `name,lat,long` with a header row.
    #[arg(long, value_name = "CSV")]
    pub stations: PathBuf,

    /// Connections CSV: `start,end,duration` with a header row.
    #[arg(long, value_name = "CSV")]
    pub connections: PathBuf,

    /// Maximum duration of one line in minutes.
    #[arg(short, long)]
    pub duration: Option<f64>,

    /// Maximum number of lines.
    #[arg(short = 'L', long)]
    pub lines: Option<usize>,

    /// Number of repeats.
    #[arg(short, long)]
    pub repeat: Option<usize>,

    /// Local search iterations per repeat.
    #[arg(short, long)]
    pub iterations: Option<usize>,

    /// Algorithm to run.
    #[arg(short = 'A', long, value_enum)]
    pub algorithm: Option<Algorithm>,

    /// Seed for a reproducible run.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Solver configuration file (TOML, or YAML by extension).
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Where to write the `train,stations` result table.
    #[arg(short, long, value_name = "CSV")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum Algorithm {
    Random,
    Greedy,
    RelaxedRandom,
    HillClimber,
    SimulatedAnnealing,
}

impl Args {
    /// Starts from the configuration file, or defaults, and applies the
    /// flags on top.
    pub fn to_config(&self) -> Result<SolverConfig, CliError> {
        let mut config = match &self.config {
            Some(path) if is_yaml(path) => SolverConfig::from_yaml_file(path)?,
            Some(path) => SolverConfig::from_toml_file(path)?,
            None => SolverConfig::default(),
        };

        if let Some(seed) = self.seed {
            config = config.with_random_seed(seed);
        }
        if let Some(duration) = self.duration {
            config = config.with_max_duration(duration);
        }
        if let Some(lines) = self.lines {
            config = config.with_max_lines(lines);
        }
        if let Some(repeat) = self.repeat {
            config = config.with_repeat(repeat);
        }

        let iterations = self
            .iterations
            .or(config.local_search.as_ref().map(|ls| ls.iterations))
            .unwrap_or(DEFAULT_ITERATIONS);
        match self.algorithm {
            Some(Algorithm::Random) => {
                config = config.with_construction_type(ConstructionType::Random);
                config.local_search = None;
            }
            Some(Algorithm::Greedy) => {
                config = config.with_construction_type(ConstructionType::Greedy);
                config.local_search = None;
            }
            Some(Algorithm::RelaxedRandom) => {
                config = config.with_construction_type(ConstructionType::RelaxedRandom);
                config.local_search = None;
            }
            Some(Algorithm::HillClimber) => {
                config = config.with_local_search(LocalSearchConfig::hill_climbing(iterations));
            }
            Some(Algorithm::SimulatedAnnealing) => {
                config =
                    config.with_local_search(LocalSearchConfig::simulated_annealing(iterations));
            }
            None => {
                if let (Some(ls), Some(n)) = (config.local_search.as_mut(), self.iterations) {
                    ls.iterations = n;
                }
            }
        }
        Ok(config)
    }
}

const DEFAULT_ITERATIONS: usize = 1000;

fn is_yaml(path: &std::path::Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml" | "yml")
    )
}
