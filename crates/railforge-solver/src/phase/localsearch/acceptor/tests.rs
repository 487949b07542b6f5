//! Tests for acceptors.

use rand::SeedableRng;

use super::*;

fn score(value: f64) -> LineScore {
    LineScore {
        value,
        ..LineScore::default()
    }
}

fn rng() -> SolverRng {
    SolverRng::seed_from_u64(0)
}

#[test]
fn test_hill_climbing_accepts_improving() {
    let mut acceptor: Box<dyn Acceptor> = Box::new(HillClimbingAcceptor::new());
    assert!(acceptor.is_accepted(&score(-10.0), &score(-5.0), &mut rng()));
}

#[test]
fn test_hill_climbing_rejects_worsening() {
    let mut acceptor: Box<dyn Acceptor> = Box::new(HillClimbingAcceptor::new());
    assert!(!acceptor.is_accepted(&score(-5.0), &score(-10.0), &mut rng()));
}

#[test]
fn test_hill_climbing_rejects_equal() {
    let mut acceptor: Box<dyn Acceptor> = Box::new(HillClimbingAcceptor::new());
    assert!(!acceptor.is_accepted(&score(-5.0), &score(-5.0), &mut rng()));
}

#[test]
fn test_simulated_annealing_accepts_improving() {
    let mut acceptor: Box<dyn Acceptor> = Box::new(SimulatedAnnealingAcceptor::new(0.0, 0.997));
    assert!(acceptor.is_accepted(&score(-10.0), &score(-5.0), &mut rng()));
}

#[test]
fn test_simulated_annealing_accepts_equal() {
    let mut acceptor = SimulatedAnnealingAcceptor::new(1.0, 0.997);
    let mut rng = rng();
    for _ in 0..50 {
        assert!(acceptor.is_accepted(&score(7.0), &score(7.0), &mut rng));
    }
}

#[test]
fn test_simulated_annealing_frozen_rejects_worsening() {
    let mut acceptor = SimulatedAnnealingAcceptor::new(0.0, 0.997);
    let mut rng = rng();
    for _ in 0..50 {
        assert!(!acceptor.is_accepted(&score(7.0), &score(6.999), &mut rng));
    }
}

#[test]
fn test_simulated_annealing_hot_accepts_some_worsening() {
    let mut acceptor = SimulatedAnnealingAcceptor::new(100.0, 0.997);
    let mut rng = rng();
    // Probability 2^(-100/100) = 0.5 per draw.
    let accepted = (0..200)
        .filter(|_| acceptor.is_accepted(&score(100.0), &score(0.0), &mut rng))
        .count();
    assert!(accepted > 50 && accepted < 150, "accepted {accepted}");
}

#[test]
fn test_temperature_schedule() {
    let mut acceptor = SimulatedAnnealingAcceptor::new(1000.0, 0.5);
    acceptor.phase_started(&score(0.0));
    for _ in 0..3 {
        acceptor.step_started();
        acceptor.step_ended(&score(0.0));
    }
    assert_eq!(acceptor.temperature(), 125.0);

    acceptor.phase_ended();
    acceptor.phase_started(&score(0.0));
    assert_eq!(acceptor.temperature(), 1000.0);
}

#[test]
fn test_probability_bounds() {
    assert_eq!(acceptance_probability(3.0, 3.0, 1e-12), 1.0);
    assert_eq!(acceptance_probability(3.0, 9.0, 1.0), 1.0);
    assert_eq!(acceptance_probability(10.0, 8.0, 1.0), 0.25);
    assert!(acceptance_probability(10.0, 9.0, 1e-3) < 1e-100);
    assert_eq!(acceptance_probability(10.0, 9.0, 0.0), 0.0);
}

#[test]
fn test_probability_falls_as_temperature_cools() {
    let mut last = 1.0;
    let mut temperature = 50.0;
    for _ in 0..20 {
        let p = acceptance_probability(100.0, 90.0, temperature);
        assert!(p <= last);
        last = p;
        temperature *= 0.7;
    }
    assert!(last < 0.01);
}

#[test]
fn test_names() {
    assert_eq!(HillClimbingAcceptor::new().name(), "hill_climbing");
    assert_eq!(
        SimulatedAnnealingAcceptor::new(1.0, 0.9).name(),
        "simulated_annealing"
    );
}
