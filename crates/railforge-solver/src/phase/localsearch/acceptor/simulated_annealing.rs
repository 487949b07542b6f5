//! Simulated annealing acceptor.

use rand::Rng;

use railforge_core::LineScore;

use super::Acceptor;
use crate::scope::SolverRng;

/// Simulated annealing acceptor - accepts worse moves with a probability
/// that shrinks as the temperature cools.
///
/// The temperature starts at `starting_temperature` when a phase starts and
/// is multiplied by `cooling_rate` after every step, so step `i` sees
/// `starting_temperature * cooling_rate^i`.
///
/// # Example
///
/// ```
/// use railforge_solver::phase::localsearch::SimulatedAnnealingAcceptor;
///
/// let acceptor = SimulatedAnnealingAcceptor::new(1000.0, 0.997);
/// assert_eq!(acceptor.temperature(), 1000.0);
/// ```
#[derive(Debug, Clone)]
pub struct SimulatedAnnealingAcceptor {
    starting_temperature: f64,
    current_temperature: f64,
    cooling_rate: f64,
}

impl SimulatedAnnealingAcceptor {
    /// Creates a new simulated annealing acceptor.
    ///
    /// # Arguments
    /// * `starting_temperature` - Initial temperature (higher = more exploration)
    /// * `cooling_rate` - Multiplicative decay per step (e.g., 0.997)
    pub fn new(starting_temperature: f64, cooling_rate: f64) -> Self {
        Self {
            starting_temperature,
            current_temperature: starting_temperature,
            cooling_rate,
        }
    }

    pub fn temperature(&self) -> f64 {
        self.current_temperature
    }

    pub fn starting_temperature(&self) -> f64 {
        self.starting_temperature
    }

    pub fn cooling_rate(&self) -> f64 {
        self.cooling_rate
    }
}

/// Probability of moving from a solution valued `old_value` to one valued
/// `new_value` at `temperature`: `2^((new_value - old_value) / temperature)`,
/// clamped to `[0, 1]`.
///
/// Equal values give exactly 1. A worse value gives 0 once the temperature
/// reaches zero.
///
/// ```
/// use railforge_solver::phase::localsearch::acceptance_probability;
///
/// assert_eq!(acceptance_probability(10.0, 10.0, 5.0), 1.0);
/// assert_eq!(acceptance_probability(10.0, 5.0, 5.0), 0.5);
/// assert_eq!(acceptance_probability(10.0, 5.0, 0.0), 0.0);
/// ```
pub fn acceptance_probability(old_value: f64, new_value: f64, temperature: f64) -> f64 {
    let delta = new_value - old_value;
    if delta >= 0.0 {
        return 1.0;
    }
    if temperature <= 0.0 {
        return 0.0;
    }
    (delta / temperature).exp2().clamp(0.0, 1.0)
}

impl Acceptor for SimulatedAnnealingAcceptor {
    fn is_accepted(
        &mut self,
        last_step_score: &LineScore,
        move_score: &LineScore,
        rng: &mut SolverRng,
    ) -> bool {
        if move_score.is_better_than(last_step_score) {
            return true;
        }
        let probability = acceptance_probability(
            last_step_score.value,
            move_score.value,
            self.current_temperature,
        );
        rng.random::<f64>() < probability
    }

    fn phase_started(&mut self, _initial_score: &LineScore) {
        self.current_temperature = self.starting_temperature;
    }

    fn step_ended(&mut self, _step_score: &LineScore) {
        self.current_temperature *= self.cooling_rate;
    }

    fn name(&self) -> &'static str {
        "simulated_annealing"
    }
}
