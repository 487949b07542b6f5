//! Result reporting: console summary and the `train,stations` table.

use std::io::Write;
use std::path::Path;

use railforge::{Line, Network, SolveResult};

use crate::error::CliError;

fn station_names(network: &Network, line: &Line) -> Vec<String> {
    line.stations()
        .iter()
        .map(|&s| network.station(s).name().to_string())
        .collect()
}

/// Prints every line of the best solution with its duration, then the
/// objective value and how many connections are traversed.
pub fn print_summary(
    out: &mut impl Write,
    network: &Network,
    result: &SolveResult,
) -> Result<(), CliError> {
    let best = &result.best;
    for line in best.solution.lines() {
        writeln!(out, "{}", station_names(network, line).join(", "))?;
        writeln!(out, "Duration {} min", line.duration())?;
    }
    writeln!(out, "K-score {}", best.value())?;
    writeln!(
        out,
        "sections traversed {}/{}",
        best.score.used_connections,
        network.connection_count()
    )?;
    Ok(())
}

/// Writes the best solution as `train,stations` rows followed by a
/// `score,<value>` row.
pub fn write_result(path: &Path, network: &Network, result: &SolveResult) -> Result<(), CliError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["train", "stations"])?;
    for (index, line) in result.best.solution.lines().iter().enumerate() {
        let stations = format!("[{}]", station_names(network, line).join(", "));
        writer.write_record([format!("train_{}", index + 1), stations])?;
    }
    writer.write_record(["score".to_string(), result.best.value().to_string()])?;
    writer.flush()?;
    Ok(())
}
