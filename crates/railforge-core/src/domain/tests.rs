//! Tests for the network model, lines and solutions.

use proptest::prelude::*;

use super::*;
use crate::error::{ConstructionError, LineError};

struct Diamond {
    network: Network,
    a: StationId,
    b: StationId,
    c: StationId,
    d: StationId,
    ab: ConnectionId,
    bc: ConnectionId,
    bd: ConnectionId,
    da: ConnectionId,
}

fn diamond() -> Diamond {
    let mut builder = Network::builder();
    let a = builder.add_station("a", 52.00, 4.00).unwrap();
    let b = builder.add_station("b", 52.05, 4.05).unwrap();
    let c = builder.add_station("c", 52.10, 4.10).unwrap();
    let d = builder.add_station("d", 52.00, 4.10).unwrap();
    let ab = builder.add_connection("a", "b", 5.0).unwrap();
    let bc = builder.add_connection("b", "c", 10.0).unwrap();
    let bd = builder.add_connection("b", "d", 10.0).unwrap();
    let da = builder.add_connection("d", "a", 2.0).unwrap();
    Diamond {
        network: builder.build(),
        a,
        b,
        c,
        d,
        ab,
        bc,
        bd,
        da,
    }
}

mod network {
    use super::*;

    #[test]
    fn test_adjacency_is_registered_on_both_ends() {
        let g = diamond();
        let b = g.network.station(g.b);
        assert_eq!(b.degree(), 3);
        assert_eq!(b.neighbor(g.ab), Some(g.a));
        assert_eq!(b.neighbor(g.bc), Some(g.c));
        assert_eq!(b.neighbor(g.da), None);
        assert_eq!(g.network.station(g.d).neighbor(g.da), Some(g.a));
    }

    #[test]
    fn test_totals() {
        let g = diamond();
        assert_eq!(g.network.total_duration(), 27.0);
        assert_eq!(g.network.min_line_count(10.0), 3);
        assert_eq!(g.network.min_line_count(27.0), 1);
        assert_eq!(g.network.station_by_name("c"), Some(g.c));
        assert_eq!(g.network.station_by_name("z"), None);
    }

    #[test]
    fn test_min_minutes_per_km_is_a_lower_bound() {
        let g = diamond();
        let rate = g.network.min_minutes_per_km();
        assert!(rate > 0.0);
        for connection in g.network.connections() {
            let (s, e) = connection.section();
            let km = g.network.distance_km(s, e);
            assert!(km * rate <= connection.duration() + 1e-9);
        }
    }

    #[test]
    fn test_duplicate_station_rejected() {
        let mut builder = Network::builder();
        builder.add_station("a", 0.0, 0.0).unwrap();
        assert_eq!(
            builder.add_station("a", 1.0, 1.0),
            Err(ConstructionError::DuplicateStation("a".into()))
        );
        assert_eq!(builder.station_count(), 1);
    }

    #[test]
    fn test_invalid_coordinate_rejected() {
        let mut builder = Network::builder();
        assert!(matches!(
            builder.add_station("x", 91.0, 0.0),
            Err(ConstructionError::InvalidCoordinate { .. })
        ));
        assert!(matches!(
            builder.add_station("y", 0.0, f64::NAN),
            Err(ConstructionError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn test_bad_connections_rejected() {
        let mut builder = Network::builder();
        builder.add_station("a", 0.0, 0.0).unwrap();
        builder.add_station("b", 0.0, 1.0).unwrap();

        assert_eq!(
            builder.add_connection("a", "z", 1.0),
            Err(ConstructionError::UnknownStation("z".into()))
        );
        assert_eq!(
            builder.add_connection("a", "a", 1.0),
            Err(ConstructionError::SelfLoop("a".into()))
        );
        for duration in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                builder.add_connection("a", "b", duration),
                Err(ConstructionError::InvalidDuration { .. })
            ));
        }
        assert_eq!(builder.connection_count(), 0);
        assert!(builder.add_connection("a", "b", 1.0).is_ok());
    }
}

mod line {
    use super::*;

    #[test]
    fn test_first_connection_sets_section() {
        let g = diamond();
        let mut line = Line::new(LineId(0));
        let end = line
            .add_connection(&g.network, g.ab, &LineBudget::new(50.0))
            .unwrap();
        assert_eq!(end, LineEnd::Back);
        assert_eq!(line.stations(), &[g.a, g.b]);
        assert_eq!(line.connections(), &[g.ab]);
        assert_eq!(line.duration(), 5.0);
    }

    #[test]
    fn test_back_preferred_then_front() {
        let g = diamond();
        let budget = LineBudget::new(50.0);
        let mut line = Line::new(LineId(0));
        line.add_connection(&g.network, g.ab, &budget).unwrap();
        assert_eq!(
            line.add_connection(&g.network, g.bc, &budget),
            Ok(LineEnd::Back)
        );
        assert_eq!(
            line.add_connection(&g.network, g.da, &budget),
            Ok(LineEnd::Front)
        );
        assert_eq!(line.stations(), &[g.d, g.a, g.b, g.c]);
        assert_eq!(line.connections(), &[g.da, g.ab, g.bc]);
        assert_eq!(line.duration(), 17.0);
        assert!(line.is_contiguous(&g.network));
    }

    #[test]
    fn test_not_incident_leaves_line_unchanged() {
        let g = diamond();
        let budget = LineBudget::new(50.0);
        let mut line = Line::from_connections(LineId(0), &g.network, &[g.bc], &budget).unwrap();
        let before = line.clone();
        assert_eq!(
            line.add_connection(&g.network, g.da, &budget),
            Err(LineError::NotIncident { connection: g.da })
        );
        assert_eq!(line, before);
    }

    #[test]
    fn test_budget_violation_leaves_line_unchanged() {
        let g = diamond();
        let budget = LineBudget::new(12.0);
        let mut line = Line::from_connections(LineId(0), &g.network, &[g.ab], &budget).unwrap();
        let before = line.clone();
        let err = line.add_connection(&g.network, g.bc, &budget).unwrap_err();
        assert!(err.is_budget_violation());
        assert_eq!(line, before);
        assert!(line.add_connection(&g.network, g.da, &budget).is_ok());
        assert_eq!(line.duration(), 7.0);
    }

    #[test]
    fn test_budget_is_inclusive() {
        let g = diamond();
        let budget = LineBudget::new(15.0);
        let line = Line::from_connections(LineId(0), &g.network, &[g.ab, g.bc], &budget).unwrap();
        assert_eq!(line.duration(), 15.0);
    }

    #[test]
    fn test_revisit_allowed_by_default() {
        let g = diamond();
        let budget = LineBudget::new(50.0);
        let mut line = Line::from_connections(LineId(0), &g.network, &[g.ab], &budget).unwrap();
        assert_eq!(
            line.add_connection(&g.network, g.ab, &budget),
            Ok(LineEnd::Back)
        );
        assert_eq!(line.stations(), &[g.a, g.b, g.a]);
        assert_eq!(line.duration(), 10.0);
    }

    #[test]
    fn test_revisit_forbidden_by_policy() {
        let g = diamond();
        let budget = LineBudget::new(50.0).with_revisits(RevisitPolicy::Forbid);
        let mut line = Line::from_connections(LineId(0), &g.network, &[g.ab], &budget).unwrap();
        assert_eq!(
            line.add_connection(&g.network, g.ab, &budget),
            Err(LineError::Revisit { connection: g.ab })
        );
        assert_eq!(line.len(), 1);
    }

    #[test]
    fn test_options_at_both_ends() {
        let g = diamond();
        let budget = LineBudget::new(50.0);
        let line = Line::from_connections(LineId(0), &g.network, &[g.ab], &budget).unwrap();
        let begin: Vec<_> = line.begin_options(&g.network).into_iter().map(|(c, _)| c).collect();
        assert_eq!(begin, vec![g.ab, g.da]);
        assert_eq!(line.end_options(&g.network).len(), 3);
        assert_eq!(line.all_options(&g.network), vec![g.ab, g.bc, g.bd, g.da]);
        assert!(Line::new(LineId(1)).all_options(&g.network).is_empty());
    }

    #[test]
    fn test_push_front_only_checks_first_station() {
        let g = diamond();
        let budget = LineBudget::new(50.0);
        let mut line = Line::from_connections(LineId(0), &g.network, &[g.ab], &budget).unwrap();
        assert!(line.push_front(&g.network, g.bc, &budget).is_err());
        line.push_front(&g.network, g.da, &budget).unwrap();
        assert_eq!(line.first_station(), Some(g.d));
    }

    #[test]
    fn test_starting_at_grows_from_station() {
        let g = diamond();
        let budget = LineBudget::new(50.0);
        let mut line = Line::starting_at(LineId(0), g.b);
        assert!(line.is_empty());
        assert_eq!(line.station_count(), 1);
        line.push_back(&g.network, g.ab, &budget).unwrap();
        assert_eq!(line.stations(), &[g.b, g.a]);
    }

    #[test]
    fn test_pop_both_ends() {
        let g = diamond();
        let budget = LineBudget::new(50.0);
        let mut line =
            Line::from_connections(LineId(0), &g.network, &[g.ab, g.bc, g.da], &budget).unwrap();
        assert_eq!(line.pop_front(), Some(g.da));
        assert_eq!(line.pop_back(), Some(g.bc));
        assert_eq!(line.stations(), &[g.a, g.b]);
        assert_eq!(line.duration(), 5.0);
        assert_eq!(line.pop_back(), Some(g.ab));
        assert_eq!(line.pop_back(), None);
        assert_eq!(line.pop_front(), None);
        assert_eq!(line.duration(), 0.0);
    }

    #[test]
    fn test_split_segment_and_join() {
        let g = diamond();
        let budget = LineBudget::new(50.0);
        let line =
            Line::from_connections(LineId(3), &g.network, &[g.da, g.ab, g.bc], &budget).unwrap();
        let (head, tail) = line.split_at(1).unwrap();
        assert_eq!(head.stations(), &[g.d, g.a]);
        assert_eq!(tail.stations(), &[g.a, g.b, g.c]);
        assert_eq!(head.duration() + tail.duration(), line.duration());

        let middle = line.segment(1, 2).unwrap();
        assert_eq!(middle.connections(), &[g.ab]);
        assert!(line.segment(2, 1).is_none());
        assert!(line.split_at(4).is_none());

        let joined = head.join(&tail, &budget).unwrap();
        assert_eq!(joined, line);
        assert_eq!(joined.id(), LineId(3));
    }

    #[test]
    fn test_join_rejects_disjoint_and_over_budget() {
        let g = diamond();
        let budget = LineBudget::new(50.0);
        let ab = Line::from_connections(LineId(0), &g.network, &[g.ab], &budget).unwrap();
        let bc = Line::from_connections(LineId(1), &g.network, &[g.bc], &budget).unwrap();
        assert!(matches!(
            bc.join(&ab, &budget),
            Err(LineError::Disjoint { .. })
        ));
        assert!(ab
            .join(&bc, &LineBudget::new(14.0))
            .unwrap_err()
            .is_budget_violation());
        let empty = Line::new(LineId(9));
        assert_eq!(empty.join(&ab, &budget).unwrap().connections(), &[g.ab]);
        assert_eq!(ab.join(&empty, &budget).unwrap(), ab);
    }

    #[test]
    fn test_join_under_forbid_policy_rejects_repeats() {
        let g = diamond();
        let allow = LineBudget::new(50.0);
        let forbid = allow.with_revisits(RevisitPolicy::Forbid);
        let ab = Line::from_connections(LineId(0), &g.network, &[g.ab], &allow).unwrap();
        let ba = ab.reversed();
        assert_eq!(ba.stations(), &[g.b, g.a]);
        assert!(ab.join(&ba, &allow).is_ok());
        assert_eq!(
            ab.join(&ba, &forbid),
            Err(LineError::Revisit { connection: g.ab })
        );
    }

    #[test]
    fn test_duplicate_runs() {
        let g = diamond();
        let budget = LineBudget::new(100.0);
        let line = Line::from_connections(
            LineId(0),
            &g.network,
            &[g.bc, g.bc, g.bd, g.bd, g.bd, g.da],
            &budget,
        )
        .unwrap();
        assert!(line.is_contiguous(&g.network));
        let runs = line.duplicate_runs();
        assert_eq!(
            runs,
            vec![
                DuplicateRun {
                    connection: g.bc,
                    count: 2,
                    begin: 0,
                    end: 1,
                },
                DuplicateRun {
                    connection: g.bd,
                    count: 3,
                    begin: 2,
                    end: 4,
                },
            ]
        );
        assert!(Line::new(LineId(0)).duplicate_runs().is_empty());
    }

    #[test]
    fn test_penalty_accessors() {
        let mut line = Line::new(LineId(0));
        line.add_to_penalty(1000.0);
        line.add_to_penalty(1000.0);
        assert_eq!(line.penalty(), 2000.0);
        line.set_penalty(0.0);
        assert_eq!(line.penalty(), 0.0);
    }

    proptest! {
        #[test]
        fn test_mutations_keep_invariants(
            picks in prop::collection::vec(0usize..4, 0..40),
            max_duration in 1.0f64..80.0,
            forbid in any::<bool>(),
        ) {
            let g = diamond();
            let policy = if forbid { RevisitPolicy::Forbid } else { RevisitPolicy::Allow };
            let budget = LineBudget::new(max_duration).with_revisits(policy);
            let ids = [g.ab, g.bc, g.bd, g.da];
            let mut line = Line::new(LineId(0));

            for pick in picks {
                let _ = line.add_connection(&g.network, ids[pick], &budget);

                let sum: f64 = line.connections().iter().map(|&c| g.network.duration(c)).sum();
                prop_assert_eq!(line.duration(), sum);
                prop_assert!(line.duration() <= max_duration);
                prop_assert!(line.duration() >= 0.0);
                prop_assert!(line.is_contiguous(&g.network));
                if !line.is_empty() {
                    prop_assert_eq!(line.station_count(), line.len() + 1);
                }
                if forbid {
                    prop_assert!(line.duplicate_runs().is_empty());
                }
            }
        }
    }
}

mod solution {
    use super::*;

    #[test]
    fn test_used_and_unused_connections() {
        let g = diamond();
        let budget = LineBudget::new(50.0);
        let first = Line::from_connections(LineId(0), &g.network, &[g.ab, g.bc], &budget).unwrap();
        let second = Line::from_connections(LineId(1), &g.network, &[g.ab], &budget).unwrap();
        let mut solution = Solution::from_lines(vec![first, second]);
        solution.push(Line::new(LineId(2)));

        assert_eq!(solution.len(), 3);
        assert_eq!(solution.used_connections().len(), 2);
        assert_eq!(solution.unused_connections(&g.network), vec![g.bd, g.da]);
        assert_eq!(solution.total_duration(), 20.0);

        solution.retain_non_empty();
        assert_eq!(solution.len(), 2);
    }

    #[test]
    fn test_replace_line() {
        let g = diamond();
        let budget = LineBudget::new(50.0);
        let mut solution = Solution::from_lines(vec![Line::new(LineId(0))]);
        let line = Line::from_connections(LineId(0), &g.network, &[g.da], &budget).unwrap();
        let old = solution.replace(0, line).unwrap();
        assert!(old.is_empty());
        assert_eq!(solution.lines()[0].connections(), &[g.da]);
        assert!(solution.replace(5, Line::new(LineId(5))).is_none());
    }
}
