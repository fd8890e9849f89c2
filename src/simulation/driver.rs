//! Generational evolution driver.
//!
//! With one island the driver runs [`EvolutionParams::generations`] generations
//! and finishes. With several, islands evolve for an epoch of
//! [`EvolutionParams::epoch_generations`] generations and are then merged
//! pairwise; once a single island remains the driver stops evolving and enters
//! the display regime, where only the best-known genome is replayed.

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::fitness::FitnessFunction;
use super::genome::Individual;
use super::islands::Archipelago;
use super::params::EvolutionParams;
use crate::error::Result;

/// Where the driver is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Generations are still being run.
    Evolving,
    /// Island merging is complete; the best genome is replayed indefinitely.
    Display,
    /// The generation budget is spent.
    Finished,
}

/// Summary of one completed generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport {
    /// Generations completed so far, starting at 1.
    pub generation: usize,
    /// Epoch this generation belonged to, starting at 0.
    pub epoch: usize,
    /// Best fitness of each island after selection, before any merge.
    pub island_best: Vec<f32>,
    /// Fittest individual of this generation across all islands.
    pub best: Individual,
    /// Whether the islands were merged after this generation.
    pub merged: bool,
}

/// Owns the populations and steps them through generations.
pub struct EvolutionDriver<F: FitnessFunction> {
    fitness: F,
    params: EvolutionParams,
    rng: StdRng,
    archipelago: Archipelago,
    generation: usize,
    epoch: usize,
    generation_in_epoch: usize,
    phase: Phase,
    best_known: Option<Individual>,
}

impl<F: FitnessFunction> EvolutionDriver<F> {
    /// Creates `num_islands` random populations of unevaluated genomes.
    pub fn new(fitness: F, params: &EvolutionParams, genome_len: usize) -> Self {
        let mut rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let archipelago = Archipelago::random(
            params.num_islands,
            params.population_size,
            genome_len,
            &mut rng,
        );
        let phase = if params.num_islands <= 1 && params.generations == 0 {
            Phase::Finished
        } else {
            Phase::Evolving
        };

        Self {
            fitness,
            params: params.clone(),
            rng,
            archipelago,
            generation: 0,
            epoch: 0,
            generation_in_epoch: 0,
            phase,
            best_known: None,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Generations completed.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Current epoch.
    pub fn epoch(&self) -> usize {
        self.epoch
    }

    /// Current islands.
    pub fn archipelago(&self) -> &Archipelago {
        &self.archipelago
    }

    /// Fittest individual seen in any generation so far.
    pub fn best_known(&self) -> Option<&Individual> {
        self.best_known.as_ref()
    }

    /// The fitness function in use.
    pub fn fitness_function(&self) -> &F {
        &self.fitness
    }

    /// Runs one generation on every island, merging at epoch boundaries.
    ///
    /// Returns `None` without doing anything once the driver has left
    /// [`Phase::Evolving`].
    pub fn step(&mut self) -> Result<Option<GenerationReport>> {
        if self.phase != Phase::Evolving {
            return Ok(None);
        }

        self.archipelago
            .next_generation(&self.fitness, &self.params, &mut self.rng)?;
        self.generation += 1;
        self.generation_in_epoch += 1;

        let island_best = self.archipelago.best_fitnesses();
        let Some(best) = self.archipelago.best().cloned() else {
            self.phase = Phase::Finished;
            return Ok(None);
        };
        if self
            .best_known
            .as_ref()
            .is_none_or(|known| best.fitness_or_zero() > known.fitness_or_zero())
        {
            self.best_known = Some(best.clone());
        }

        let epoch = self.epoch;
        if island_best.len() == 1 {
            log::info!(
                "Generation {}: Max Velocity = {}",
                self.generation - 1,
                island_best[0]
            );
        } else {
            for (island, fitness) in island_best.iter().enumerate() {
                log::info!(
                    "Epoch {epoch}, island {island}, generation {}: Max Velocity = {fitness}",
                    self.generation_in_epoch - 1
                );
            }
        }

        let mut merged = false;
        if self.archipelago.len() > 1 {
            if self.generation_in_epoch >= self.params.epoch_generations {
                self.archipelago.merge_pairs();
                self.epoch += 1;
                self.generation_in_epoch = 0;
                merged = true;
                log::info!(
                    "Merged islands after epoch {epoch}: {} remaining",
                    self.archipelago.len()
                );
                if self.archipelago.len() == 1 {
                    self.phase = Phase::Display;
                }
            }
        } else if self.generation >= self.params.generations {
            self.phase = Phase::Finished;
        }

        Ok(Some(GenerationReport {
            generation: self.generation,
            epoch,
            island_best,
            best,
            merged,
        }))
    }

    /// Steps until the driver leaves [`Phase::Evolving`], returning the best
    /// individual found.
    pub fn run(&mut self) -> Result<Option<&Individual>> {
        while self.step()?.is_some() {}
        Ok(self.best_known())
    }
}
