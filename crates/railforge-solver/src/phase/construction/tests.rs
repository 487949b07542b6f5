//! Tests for the construction heuristics and phase.

use railforge_core::{LineBudget, Objective, RevisitPolicy};
use railforge_test::{assert_line_invariants, assert_solution_invariants, diamond, grid};

use super::*;
use crate::phase::Phase;
use crate::scope::SolverScope;

fn scope(network: &railforge_core::Network, budget: LineBudget, seed: u64) -> SolverScope<'_> {
    SolverScope::with_seed(network, budget, Objective::default(), seed)
}

mod random_lines {
    use super::*;

    #[test]
    fn test_single_line_stays_within_budget() {
        let g = diamond();
        let budget = LineBudget::new(50.0);
        for seed in 0..25 {
            let mut scope = scope(&g.network, budget, seed);
            let solution = RandomConstruction::new().build_solution(&mut scope, 1);
            assert_eq!(solution.len(), 1);
            let line = &solution.lines()[0];
            assert!(!line.is_empty());
            assert!(line.duration() <= 50.0);
            assert_line_invariants(&g.network, line, &budget);
        }
    }

    #[test]
    fn test_line_ends_only_when_nothing_fits() {
        let g = diamond();
        let budget = LineBudget::new(50.0);
        let mut scope = scope(&g.network, budget, 4);
        let line = RandomConstruction::new().build_line(&mut scope);
        // Every connection at either end would overflow the budget.
        for connection in line.all_options(&g.network) {
            assert!(line.duration() + g.network.duration(connection) > 50.0);
        }
    }

    #[test]
    fn test_requested_line_count_and_ids() {
        let g = diamond();
        let mut scope = scope(&g.network, LineBudget::new(20.0), 2);
        let solution = RandomConstruction::new().build_solution(&mut scope, 4);
        assert_eq!(solution.len(), 4);
        let ids: Vec<usize> = solution.lines().iter().map(|l| l.id().0).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_no_fitting_connection_gives_empty_solution() {
        let g = diamond();
        let mut scope = scope(&g.network, LineBudget::new(1.0), 0);
        let solution = RandomConstruction::new().build_solution(&mut scope, 3);
        assert!(solution.is_empty());
    }

    #[test]
    fn test_forbid_policy_never_repeats() {
        let network = grid(3, 3, 4.0);
        let budget = LineBudget::new(60.0).with_revisits(RevisitPolicy::Forbid);
        for seed in 0..20 {
            let mut scope = scope(&network, budget, seed);
            let solution = RandomConstruction::new().build_solution(&mut scope, 2);
            for line in solution.lines() {
                assert!(line.duplicate_runs().is_empty());
                let mut seen = std::collections::BTreeSet::new();
                assert!(line.connections().iter().all(|c| seen.insert(*c)));
            }
            assert_solution_invariants(&network, &solution, &budget);
        }
    }

    #[test]
    fn test_same_seed_same_solution() {
        let network = grid(3, 4, 5.0);
        let budget = LineBudget::new(40.0);
        let build = |seed| {
            let mut scope = scope(&network, budget, seed);
            RandomConstruction::new().build_solution(&mut scope, 3)
        };
        assert_eq!(build(9), build(9));
    }
}

mod greedy_lines {
    use super::*;

    #[test]
    fn test_tight_cap_starts_short_and_stops() {
        let g = diamond();
        let budget = LineBudget::new(7.0);
        for seed in 0..20 {
            let mut scope = scope(&g.network, budget, seed);
            let solution = GreedyConstruction::new().build_solution(&mut scope, 1);
            assert_eq!(solution.len(), 1);
            let line = &solution.lines()[0];
            let first = line.first_connection().unwrap();
            assert!(first == g.ab || first == g.da);
            // a-b and d-a together take exactly the cap.
            assert!(line.contains(g.ab) && line.contains(g.da));
            assert_eq!(line.duration(), 7.0);
        }
    }

    #[test]
    fn test_single_line_covers_diamond() {
        let g = diamond();
        let budget = LineBudget::new(100.0);
        let objective = Objective::default();
        for seed in 0..20 {
            let mut scope = scope(&g.network, budget, seed);
            let solution = GreedyConstruction::new().build_solution(&mut scope, 1);
            let score = objective.score(&g.network, &solution);
            assert_eq!(score.coverage, 1.0, "seed {seed}");
            assert_eq!(solution.lines()[0].duration(), 27.0);
        }
    }

    #[test]
    fn test_lines_do_not_share_connections() {
        let network = grid(3, 3, 3.0);
        let budget = LineBudget::new(9.0);
        let mut scope = scope(&network, budget, 5);
        let solution = GreedyConstruction::new().build_solution(&mut scope, 6);

        let total: usize = solution.lines().iter().map(|l| l.len()).sum();
        assert_eq!(total, solution.used_connections().len());
        assert_solution_invariants(&network, &solution, &budget);
    }

    #[test]
    fn test_stops_when_pool_is_exhausted() {
        let g = diamond();
        let mut scope = scope(&g.network, LineBudget::new(100.0), 1);
        let solution = GreedyConstruction::new().build_solution(&mut scope, 5);
        assert_eq!(solution.len(), 1);
    }
}

mod relaxed_lines {
    use super::*;

    #[test]
    fn test_penalty_counts_there_and_back() {
        let g = diamond();
        let budget = LineBudget::new(50.0);
        for seed in 0..25 {
            let mut scope = scope(&g.network, budget, seed);
            let line = RelaxedRandomConstruction::new(1000.0).build_line(&mut scope);

            let connections = line.connections();
            let backtracks = connections.windows(2).filter(|w| w[0] == w[1]).count();
            assert_eq!(line.penalty(), 1000.0 * backtracks as f64);
            assert_line_invariants(&g.network, &line, &budget);
        }
    }

    #[test]
    fn test_chain_end_forces_penalty() {
        // From a dead end the only way on is straight back.
        let network = railforge_test::chain(2, 10.0);
        let budget = LineBudget::new(20.0);
        let mut scope = scope(&network, budget, 0);
        let line = RelaxedRandomConstruction::default().build_line(&mut scope);
        assert_eq!(line.len(), 2);
        assert_eq!(line.penalty(), RelaxedRandomConstruction::DEFAULT_PENALTY);

        let objective = Objective::default();
        let solution = Solution::from_lines(vec![line]);
        let score = objective.score(&network, &solution);
        assert_eq!(score.value, 10000.0 - (100.0 + 20.0 + 1000.0));
    }

    #[test]
    fn test_plain_random_has_no_penalty() {
        let network = railforge_test::chain(2, 10.0);
        let mut scope = scope(&network, LineBudget::new(20.0), 0);
        let line = RandomConstruction::new().build_line(&mut scope);
        assert_eq!(line.len(), 2);
        assert_eq!(line.penalty(), 0.0);
    }
}

mod construction_phase {
    use super::*;

    #[test]
    fn test_sets_working_and_best() {
        let g = diamond();
        let mut scope = scope(&g.network, LineBudget::new(50.0), 3);
        let mut phase = ConstructionPhase::new(Box::new(GreedyConstruction::new()), 2);
        phase.solve(&mut scope);

        let working = scope.working().unwrap().clone();
        assert_eq!(scope.best(), Some(&working));
        assert_eq!(scope.statistics().solutions_constructed, 1);
        assert_eq!(phase.phase_type_name(), "Construction");
    }

    #[test]
    fn test_line_ids_restart_per_solution() {
        let g = diamond();
        let mut scope = scope(&g.network, LineBudget::new(20.0), 3);
        let mut phase = ConstructionPhase::new(Box::new(RandomConstruction::new()), 3);
        phase.solve(&mut scope);
        phase.set_line_count(2);
        phase.solve(&mut scope);

        let working = scope.working().unwrap();
        let ids: Vec<usize> = working.solution.lines().iter().map(|l| l.id().0).collect();
        assert_eq!(ids, vec![0, 1]);
        assert_eq!(phase.line_count(), 2);
        assert_eq!(scope.statistics().solutions_constructed, 2);
    }
}
