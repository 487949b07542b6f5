use rand::Rng;

use railforge_core::{LineEnd, Solution};

use super::{random_line_index, MoveContext, MoveRejection};
use crate::scope::SolverRng;

/// Picks a random line and a random end; if the two outermost connections
/// at that end are the same connection travelled there and back, drops the
/// outer one.
pub fn cut_duplicate_end(
    _ctx: &MoveContext<'_>,
    solution: &mut Solution,
    rng: &mut SolverRng,
) -> Result<(), MoveRejection> {
    let index = random_line_index(solution, rng)?;
    let end = if rng.random_bool(0.5) {
        LineEnd::Front
    } else {
        LineEnd::Back
    };

    let line = solution
        .line_mut(index)
        .ok_or(MoveRejection::EmptySolution)?;
    let connections = line.connections();
    let n = connections.len();
    if n < 2 {
        return Err(MoveRejection::LineTooShort);
    }

    match end {
        LineEnd::Front if connections[0] == connections[1] => {
            line.pop_front();
        }
        LineEnd::Back if connections[n - 1] == connections[n - 2] => {
            line.pop_back();
        }
        _ => return Err(MoveRejection::NoDuplicateEnd),
    }
    Ok(())
}
