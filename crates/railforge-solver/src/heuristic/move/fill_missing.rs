use rand::Rng;

use railforge_core::{Line, LineEnd, Solution};

use super::{MoveContext, MoveRejection};
use crate::scope::SolverRng;

/// Splices a random unused connection onto the nearer end of a random line
/// that still has headroom.
///
/// The shortest path from each line end to each endpoint of the connection
/// is searched within the headroom left after the connection itself; the
/// cheapest one is extended by the connection and attached at its end.
pub fn fill_missing(
    ctx: &MoveContext<'_>,
    solution: &mut Solution,
    rng: &mut SolverRng,
) -> Result<(), MoveRejection> {
    if solution.is_empty() {
        return Err(MoveRejection::EmptySolution);
    }
    let unused = solution.unused_connections(ctx.network);
    if unused.is_empty() {
        return Err(MoveRejection::FullCoverage);
    }
    let open: Vec<usize> = solution
        .lines()
        .iter()
        .enumerate()
        .filter(|(_, line)| {
            line.station_count() > 0 && line.duration() < ctx.budget.max_duration
        })
        .map(|(i, _)| i)
        .collect();
    if open.is_empty() {
        return Err(MoveRejection::NoHeadroom);
    }

    let index = open[rng.random_range(0..open.len())];
    let connection = unused[rng.random_range(0..unused.len())];
    let line = solution.line(index).ok_or(MoveRejection::EmptySolution)?;

    let path_budget = ctx.budget.headroom(line.duration()) - ctx.network.duration(connection);
    if path_budget < 0.0 {
        return Err(MoveRejection::OverBudget);
    }

    let (a, b) = ctx.network.connection(connection).section();
    let ends = [
        (LineEnd::Front, line.first_station()),
        (LineEnd::Back, line.last_station()),
    ];
    let mut best: Option<(LineEnd, Line)> = None;
    for (end, station) in ends {
        let Some(station) = station else { continue };
        for target in [a, b] {
            let Ok(path) = ctx.pathfinder.find_line(station, target, path_budget) else {
                continue;
            };
            if best
                .as_ref()
                .map_or(true, |(_, current)| path.duration() < current.duration())
            {
                best = Some((end, path));
            }
        }
    }
    let (end, mut extension) = best.ok_or(MoveRejection::NoPath)?;

    if !extension.contains(connection) {
        extension.push_back(ctx.network, connection, &ctx.budget)?;
    }

    let mut rebuilt = match end {
        LineEnd::Back => line.join(&extension, &ctx.budget)?,
        LineEnd::Front => extension.reversed().join(line, &ctx.budget)?,
    };
    rebuilt.set_id(line.id());
    rebuilt.set_penalty(line.penalty());
    solution.replace(index, rebuilt);
    Ok(())
}
