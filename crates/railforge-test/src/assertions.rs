//! Invariant assertions shared by the solver tests.

use railforge_core::{Line, LineBudget, Network, Solution};

/// Panics unless `line` is contiguous, its duration equals the in-order sum
/// of its connection durations and it fits `budget`.
pub fn assert_line_invariants(network: &Network, line: &Line, budget: &LineBudget) {
    assert!(
        line.is_contiguous(network),
        "line {} is not contiguous: stations {:?}, connections {:?}",
        line.id(),
        line.stations(),
        line.connections()
    );
    let sum: f64 = line
        .connections()
        .iter()
        .map(|&c| network.duration(c))
        .sum();
    assert!(
        (line.duration() - sum).abs() < 1e-9,
        "line {} caches duration {} but its connections sum to {}",
        line.id(),
        line.duration(),
        sum
    );
    assert!(
        line.duration() <= budget.max_duration,
        "line {} takes {} minutes, over the budget of {}",
        line.id(),
        line.duration(),
        budget.max_duration
    );
    assert!(line.duration() >= 0.0);
}

/// Applies [`assert_line_invariants`] to every line of `solution`.
pub fn assert_solution_invariants(network: &Network, solution: &Solution, budget: &LineBudget) {
    for line in solution.lines() {
        assert_line_invariants(network, line, budget);
    }
}
