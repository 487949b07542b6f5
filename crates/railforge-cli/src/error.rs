use std::path::PathBuf;

use thiserror::Error;

use railforge::{ConfigError, ConstructionError, RailForgeError};

/// Everything that can stop the command line tool.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("{path}: line {line}: {source}")]
    Row {
        path: PathBuf,
        line: u64,
        source: ConstructionError,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Solver(#[from] RailForgeError),
}
