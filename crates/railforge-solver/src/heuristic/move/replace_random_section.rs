use rand::Rng;

use railforge_core::Solution;

use super::{random_line_index, replace_section, MoveContext, MoveRejection};
use crate::scope::SolverRng;

/// Picks a random line and two station indices `i < j`, then swaps the
/// section between them for the shortest path from `stations[i]` to
/// `stations[j]`.
pub fn replace_random_section(
    ctx: &MoveContext<'_>,
    solution: &mut Solution,
    rng: &mut SolverRng,
) -> Result<(), MoveRejection> {
    let index = random_line_index(solution, rng)?;
    let line = solution.line(index).ok_or(MoveRejection::EmptySolution)?;

    let n = line.station_count();
    if n < 2 {
        return Err(MoveRejection::LineTooShort);
    }
    let from = rng.random_range(0..n - 1);
    let to = rng.random_range(from + 1..n);

    let rebuilt = replace_section(ctx, line, from, to)?;
    solution.replace(index, rebuilt);
    Ok(())
}
