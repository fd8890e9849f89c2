#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use ndarray::array;
use ramp_evo::simulation::driver::GenerationReport;
use ramp_evo::simulation::genome::Individual;
use ramp_evo::simulation::history::{FitnessHistory, MAX_HISTORY_POINTS};

fn report(generation: usize, island_best: Vec<f32>, merged: bool) -> GenerationReport {
    let best = island_best.iter().copied().fold(0.0, f32::max);
    GenerationReport {
        generation,
        epoch: 0,
        island_best,
        best: Individual::with_fitness(array![0.5], best),
        merged,
    }
}

#[test]
fn test_island_lines_follow_merges() {
    let mut history = FitnessHistory::new(4);
    history.record(&report(1, vec![1.0, 2.0, 3.0, 4.0], false), 4);
    assert_eq!(history.islands().len(), 4);

    // The merge generation still plots all four islands, then the dead ones go.
    history.record(&report(2, vec![2.0, 3.0, 4.0, 5.0], true), 2);
    assert_eq!(history.islands().len(), 2);
    assert_eq!(history.islands()[0].len(), 2);
    assert_eq!(history.islands()[1].back(), Some(&(2.0, 3.0)));

    history.record(&report(3, vec![6.0, 7.0], true), 1);
    assert_eq!(history.islands().len(), 1);
    assert_eq!(history.best().len(), 3);
    assert_eq!(history.best().back(), Some(&(3.0, 7.0)));
}

#[test]
fn test_single_island_keeps_one_line() {
    let mut history = FitnessHistory::new(1);
    assert!(history.is_empty());
    for generation in 1..=5 {
        history.record(&report(generation, vec![generation as f32], false), 1);
    }
    assert!(!history.is_empty());
    assert_eq!(history.islands().len(), 1);
    assert_eq!(history.islands()[0].len(), 5);
}

#[test]
fn test_history_is_capped() {
    let mut history = FitnessHistory::new(1);
    for generation in 1..=MAX_HISTORY_POINTS + 20 {
        history.record(&report(generation, vec![1.0], false), 1);
    }
    assert_eq!(history.best().len(), MAX_HISTORY_POINTS);
    assert_eq!(history.best().front(), Some(&(21.0, 1.0)));
}
