//! Genome scoring.
//!
//! Fitness is a pure function of the genome and the [`Params`]: each call builds
//! its own scene and world, so calls may run concurrently.

use ndarray::Array1;

use super::params::{Params, ScoringPolicy};
use super::scene::Scene;
use super::simulator::{self, Outcome, Termination};
use crate::error::Result;

/// Anything that can score a genome.
///
/// The evolution driver is generic over this so it can run on fitness
/// landscapes other than the physics simulation.
pub trait FitnessFunction: Sync {
    /// Scores `genes`. The result must be non-negative and deterministic.
    fn fitness(&self, genes: &Array1<f32>) -> Result<f32>;
}

/// Scores a finished run.
///
/// Falling or running out of steps scores 0, as does reaching the target
/// without touching any obstacle.
pub fn score(outcome: &Outcome, policy: ScoringPolicy) -> f32 {
    let Termination::Reached { speed } = outcome.termination else {
        return 0.0;
    };
    let hits = outcome.hit_count();
    if hits == 0 {
        return 0.0;
    }
    match policy {
        ScoringPolicy::PartialCredit => speed * hits as f32,
        ScoringPolicy::AllOrNothing if outcome.all_hit() => speed,
        ScoringPolicy::AllOrNothing => 0.0,
    }
}

/// Builds the scene for `genes`, simulates it and scores the outcome.
pub fn evaluate(genes: &Array1<f32>, params: &Params) -> Result<f32> {
    let scene = Scene::build(genes, params);
    let outcome = simulator::simulate(&scene, &params.sim)?;
    let fitness = score(&outcome, params.scoring);
    log::trace!(
        "genes {genes} -> {:?} after {} steps, {} hits, fitness {fitness}",
        outcome.termination,
        outcome.steps,
        outcome.hit_count()
    );
    Ok(fitness)
}

/// The physics-simulation fitness function.
#[derive(Debug, Clone)]
pub struct SimulationFitness {
    params: Params,
}

impl SimulationFitness {
    /// Wraps a configuration.
    pub fn new(params: Params) -> Self {
        Self { params }
    }

    /// The configuration every evaluation receives.
    pub fn params(&self) -> &Params {
        &self.params
    }
}

impl FitnessFunction for SimulationFitness {
    fn fitness(&self, genes: &Array1<f32>) -> Result<f32> {
        evaluate(genes, &self.params)
    }
}
