//! Neighborhood operators.
//!
//! Each operator is a plain function that mutates a private copy of the
//! current solution and reports a [`MoveRejection`] when it has nothing to
//! do. [`apply_move`] dispatches on [`MoveType`] so a fixed seed replays the
//! same sequence of moves.
//!
//! - [`cut_duplicate_end`] - drop the outer connection of a there-and-back end
//! - [`fill_missing`] - splice an unused connection onto a line end
//! - [`remove_duplicate_section`] - replace a repeated run by the shortest path
//! - [`replace_random_section`] - replace a random middle section by the shortest path

mod cut_duplicate_end;
mod fill_missing;
mod remove_duplicate_section;
mod replace_random_section;

use rand::Rng;
use thiserror::Error;

use railforge_config::MoveType;
use railforge_core::{Line, LineBudget, LineError, Network, Solution};

use crate::pathfinder::PathFinder;
use crate::scope::SolverRng;

pub use cut_duplicate_end::cut_duplicate_end;
pub use fill_missing::fill_missing;
pub use remove_duplicate_section::remove_duplicate_section;
pub use replace_random_section::replace_random_section;

/// Read-only inputs shared by every operator.
#[derive(Debug, Clone, Copy)]
pub struct MoveContext<'n> {
    pub network: &'n Network,
    pub pathfinder: PathFinder<'n>,
    pub budget: LineBudget,
}

/// Why an operator left the solution untouched.
///
/// Always a soft failure: the iteration is forfeited and the run goes on.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MoveRejection {
    #[error("solution has no lines")]
    EmptySolution,

    #[error("line is too short for this move")]
    LineTooShort,

    #[error("chosen line end is not a there-and-back pair")]
    NoDuplicateEnd,

    #[error("every connection is already covered")]
    FullCoverage,

    #[error("no line has duration headroom left")]
    NoHeadroom,

    #[error("line has no run of repeated connections")]
    NoDuplicateRun,

    #[error("no path within the remaining budget")]
    NoPath,

    #[error("change would exceed the line budget")]
    OverBudget,

    #[error("line rejected the change: {0}")]
    Line(#[from] LineError),
}

/// Applies the operator `move_type` to `solution`.
///
/// On `Err` the solution is unchanged.
pub fn apply_move(
    move_type: MoveType,
    ctx: &MoveContext<'_>,
    solution: &mut Solution,
    rng: &mut SolverRng,
) -> Result<(), MoveRejection> {
    match move_type {
        MoveType::CutDuplicateEnd => cut_duplicate_end(ctx, solution, rng),
        MoveType::FillMissing => fill_missing(ctx, solution, rng),
        MoveType::RemoveDuplicateSection => remove_duplicate_section(ctx, solution, rng),
        MoveType::ReplaceRandomSection => replace_random_section(ctx, solution, rng),
    }
}

fn random_line_index(solution: &Solution, rng: &mut SolverRng) -> Result<usize, MoveRejection> {
    if solution.is_empty() {
        return Err(MoveRejection::EmptySolution);
    }
    Ok(rng.random_range(0..solution.len()))
}

/// Replaces the stations `from..=to` of `line` with the shortest path
/// between `stations[from]` and `stations[to]` that keeps the whole line
/// within budget. Keeps the line's id and penalty.
fn replace_section(
    ctx: &MoveContext<'_>,
    line: &Line,
    from: usize,
    to: usize,
) -> Result<Line, MoveRejection> {
    let last = line.station_count().checked_sub(1).ok_or(MoveRejection::LineTooShort)?;
    let (head, tail) = match (line.segment(0, from), line.segment(to, last)) {
        (Some(head), Some(tail)) if from < to => (head, tail),
        _ => return Err(MoveRejection::LineTooShort),
    };

    let headroom = ctx.budget.headroom(head.duration() + tail.duration());
    if headroom < 0.0 {
        return Err(MoveRejection::OverBudget);
    }
    let stations = line.stations();
    let path = ctx
        .pathfinder
        .find_line(stations[from], stations[to], headroom)
        .map_err(|_| MoveRejection::NoPath)?;

    let mut rebuilt = head.join(&path, &ctx.budget)?.join(&tail, &ctx.budget)?;
    rebuilt.set_id(line.id());
    rebuilt.set_penalty(line.penalty());
    Ok(rebuilt)
}
