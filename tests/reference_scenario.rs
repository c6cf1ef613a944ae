// tests/reference_scenario.rs

use seedplume::transport::IntervalDetection;
use seedplume::{InputDeck, Simulation};

#[test]
fn reference_scenario_setup() {
    let sim = Simulation::from_deck(&InputDeck::default()).unwrap();

    assert_eq!(sim.grid().len(), 251);
    let max_velocity = sim.velocity().max();
    assert!(max_velocity > 5.99 && max_velocity <= 6.0);
    assert_eq!(sim.dt(), 20.0 / max_velocity);
    assert!((sim.dt() - 20.0 / 6.0).abs() < 1e-3);
    assert!(sim.courant().max() <= 1.0 + 1e-12);
    assert!(sim.courant().min() > 0.0);
    assert_eq!(sim.operator().nrows(), 251);
    assert_eq!(sim.operator().ncols(), 251);
}

#[test]
fn reference_scenario_terminates_after_expected_steps() {
    let sim = Simulation::from_deck(&InputDeck::default()).unwrap();
    let dt = sim.dt();
    let result = sim.run();

    assert_eq!(result.steps, (600.0 / dt).ceil() as usize);
    assert_eq!(result.steps, 180);
    // The clock passes 600 s just before the tenth minute could fire.
    assert_eq!(result.injections, 9);
    // initial + one per injection + final
    assert_eq!(result.snapshots.len(), 11);
}

#[test]
fn boundary_node_stays_pinned_for_whole_run() {
    let mut sim = Simulation::from_deck(&InputDeck::default()).unwrap();
    assert_eq!(sim.concentration()[0], 0.0);
    while sim.step().is_some() {
        assert_eq!(sim.concentration()[0], 0.0);
    }
}

#[test]
fn first_step_follows_upwind_update() {
    let mut sim = Simulation::from_deck(&InputDeck::default()).unwrap();
    let before = sim.concentration().clone();
    let courant = sim.courant().clone();
    sim.step();
    for i in 1..=6 {
        let expected = (1.0 - courant[i]) * before[i] + courant[i] * before[i - 1];
        assert!((sim.concentration()[i] - expected).abs() < 1e-20);
    }
}

#[test]
fn each_injection_adds_four_magnitudes() {
    let mut sim = Simulation::from_deck(&InputDeck::default()).unwrap();
    let mut fired = 0;
    while let Some(event) = sim.step() {
        if let Some(added) = event.injected {
            fired += 1;
            assert_eq!(added, 4.0 * 1e-6);
            let pre = sim.snapshots().last().unwrap().total();
            assert!((sim.concentration().sum() - pre - added).abs() < 1e-15);
            // Truncation detection fires just after each whole minute.
            assert!(event.time > 60.0 * fired as f64);
            assert!(event.time < 60.0 * fired as f64 + 1.0);
        }
    }
    assert_eq!(fired, 9);
}

#[test]
fn counted_detection_agrees_on_reference_scenario() {
    let mut deck = InputDeck::default();
    deck.simulation.interval_detection = IntervalDetection::Counted;
    let counted = Simulation::from_deck(&deck).unwrap().run();
    let truncated = Simulation::from_deck(&InputDeck::default()).unwrap().run();

    assert_eq!(counted.injections, 9);
    assert_eq!(counted.final_concentration, truncated.final_concentration);
}

#[test]
fn repeated_runs_are_bit_identical() {
    let first = Simulation::from_deck(&InputDeck::default()).unwrap().run();
    let second = Simulation::from_deck(&InputDeck::default()).unwrap().run();
    assert_eq!(first, second);
    for (a, b) in first
        .final_concentration
        .iter()
        .zip(second.final_concentration.iter())
    {
        assert_eq!(a.to_bits(), b.to_bits());
    }
}

#[test]
fn tracer_moves_downwind_and_stays_non_negative() {
    let result = Simulation::from_deck(&InputDeck::default()).unwrap().run();
    assert!(result.final_concentration.iter().all(|&c| c >= 0.0));

    // Initial band centroid is at 70 m; ten minutes at 4-6 m/s carries it
    // kilometres downwind.
    let final_snapshot = result.snapshots.last().unwrap();
    let centroid: f64 = final_snapshot
        .concentration
        .iter()
        .zip(result.positions.iter())
        .map(|(c, x)| c * x)
        .sum::<f64>()
        / final_snapshot.total();
    assert!(centroid > 1000.0);
}

#[test]
fn bundled_deck_matches_built_in_scenario() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/decks/reference.yaml");
    let deck = seedplume::parse_input_deck(path).unwrap();
    let from_file = Simulation::from_deck(&deck).unwrap().run();
    let built_in = Simulation::from_deck(&InputDeck::default()).unwrap().run();
    assert_eq!(from_file, built_in);
}
