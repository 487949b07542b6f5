use rand::Rng;

use railforge_core::Solution;

use super::{random_line_index, replace_section, MoveContext, MoveRejection};
use crate::scope::SolverRng;

/// Picks a random line and one of its runs of repeated connections, then
/// replaces the stations spanned by the run with the shortest path between
/// its two ends. An even run that starts and ends at the same station is
/// removed outright.
pub fn remove_duplicate_section(
    ctx: &MoveContext<'_>,
    solution: &mut Solution,
    rng: &mut SolverRng,
) -> Result<(), MoveRejection> {
    let index = random_line_index(solution, rng)?;
    let line = solution.line(index).ok_or(MoveRejection::EmptySolution)?;

    let runs = line.duplicate_runs();
    if runs.is_empty() {
        return Err(MoveRejection::NoDuplicateRun);
    }
    let run = runs[rng.random_range(0..runs.len())];

    let rebuilt = replace_section(ctx, line, run.begin, run.end + 1)?;
    solution.replace(index, rebuilt);
    Ok(())
}
