//! Local search phase implementation.

use std::time::Instant;

use rand::Rng;
use tracing::{debug, info, trace};

use railforge_config::MoveType;
use railforge_core::ScoredSolution;

use crate::heuristic::r#move::apply_move;
use crate::phase::localsearch::Acceptor;
use crate::phase::Phase;
use crate::scope::SolverScope;

/// Local search phase that improves the working solution.
///
/// Runs a fixed number of iterations. Every iteration:
/// 1. Draws one operator uniformly from the configured move types
/// 2. Applies it to a clone of the working solution
/// 3. Scores the clone and asks the acceptor about it
/// 4. On acceptance makes the clone the working solution and offers it as best
///
/// A rejected operator forfeits the iteration. One trace point with the
/// working score is recorded per iteration, under the scope's current
/// trace key.
#[derive(Debug)]
pub struct LocalSearchPhase {
    acceptor: Box<dyn Acceptor>,
    move_types: Vec<MoveType>,
    iterations: usize,
    phase_index: usize,
}

impl LocalSearchPhase {
    pub fn new(acceptor: Box<dyn Acceptor>, move_types: Vec<MoveType>, iterations: usize) -> Self {
        Self {
            acceptor,
            move_types,
            iterations,
            phase_index: 0,
        }
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn move_types(&self) -> &[MoveType] {
        &self.move_types
    }

    /// Sets the index reported in log events, the repeat number for the
    /// run controller.
    pub fn set_phase_index(&mut self, phase_index: usize) {
        self.phase_index = phase_index;
    }
}

impl Phase for LocalSearchPhase {
    fn solve(&mut self, solver_scope: &mut SolverScope<'_>) {
        let started = Instant::now();
        let phase = self.acceptor.name();

        info!(
            event = "phase_start",
            phase = phase,
            phase_index = self.phase_index,
            iterations = self.iterations,
        );

        let Some(mut current) = solver_scope.take_working() else {
            info!(
                event = "phase_end",
                phase = phase,
                phase_index = self.phase_index,
                duration_ms = 0u64,
                steps = 0u64,
                speed = 0u64,
                score = "N/A",
            );
            return;
        };
        if self.move_types.is_empty() {
            solver_scope.set_working(current);
            return;
        }

        let ctx = solver_scope.move_context();
        self.acceptor.phase_started(&current.score);

        for iteration in 0..self.iterations {
            self.acceptor.step_started();

            let pick = solver_scope.rng().random_range(0..self.move_types.len());
            let move_type = self.move_types[pick];
            solver_scope.statistics_mut().record_attempt(move_type);

            let mut candidate = current.solution.clone();
            match apply_move(move_type, &ctx, &mut candidate, solver_scope.rng()) {
                Ok(()) => {
                    solver_scope.statistics_mut().record_candidate(move_type);
                    let score = solver_scope.score(&candidate);
                    let accepted =
                        self.acceptor.is_accepted(&current.score, &score, solver_scope.rng());
                    trace!(
                        event = "step",
                        step = iteration,
                        operator = move_type.name(),
                        score = score.value,
                        accepted = accepted,
                    );

                    if accepted {
                        solver_scope.statistics_mut().record_acceptance(move_type);
                        current = ScoredSolution::new(candidate, score);
                        if solver_scope.update_best(&current) {
                            debug!(
                                event = "new_best",
                                phase = phase,
                                step = iteration,
                                score = score.value,
                                coverage = score.coverage,
                                lines = score.line_count,
                            );
                        }
                    }
                }
                Err(rejection) => {
                    trace!(
                        event = "move_rejected",
                        step = iteration,
                        operator = move_type.name(),
                        reason = %rejection,
                    );
                }
            }

            self.acceptor.step_ended(&current.score);
            solver_scope.record_trace(iteration, &current.score);
        }

        self.acceptor.phase_ended();

        let duration = started.elapsed();
        let speed = if duration.as_secs_f64() > 0.0 {
            (self.iterations as f64 / duration.as_secs_f64()) as u64
        } else {
            0
        };
        info!(
            event = "phase_end",
            phase = phase,
            phase_index = self.phase_index,
            duration_ms = duration.as_millis() as u64,
            steps = self.iterations,
            speed = speed,
            score = current.score.value,
            coverage = current.score.coverage,
        );
        solver_scope.set_working(current);
    }

    fn phase_type_name(&self) -> &'static str {
        "LocalSearch"
    }
}
